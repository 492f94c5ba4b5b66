use crate::errors::WhyfindResult;

/// Part-of-speech tagger over a token sequence.
pub trait ITagger: Send + Sync {
    /// Tag each token with a raw label (Penn Treebank style). The pipeline
    /// coarsens labels itself; implementations return whatever their
    /// tagset produces.
    fn tag(&self, tokens: &[String]) -> WhyfindResult<Vec<(String, String)>>;
}
