/// Tokenization and token normalization, shared between the query path and
/// the sentence path.
///
/// Both methods must be pure and deterministic: the matcher compares query
/// terms to sentence tokens by string equality, which is only valid when
/// the same normalization ran on both sides.
pub trait ITokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn normalize(&self, tokens: &[String]) -> Vec<String>;
}
