use regex::Regex;
use whyfind_core::traits::ITokenizer;

/// Word-pattern tokenizer with lowercasing normalization.
pub struct SimpleTokenizer {
    word: Regex,
}

impl SimpleTokenizer {
    pub fn new() -> Self {
        Self {
            word: Regex::new(r"[A-Za-z0-9']+").expect("static pattern"),
        }
    }
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ITokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.word
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn normalize(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|t| t.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_punctuation() {
        let t = SimpleTokenizer::new();
        assert_eq!(
            t.tokenize("Why did the war start?"),
            vec!["Why", "did", "the", "war", "start"]
        );
    }

    #[test]
    fn normalize_lowercases() {
        let t = SimpleTokenizer::new();
        let tokens = vec!["Why".to_string(), "WAR".to_string()];
        assert_eq!(t.normalize(&tokens), vec!["why", "war"]);
    }
}
