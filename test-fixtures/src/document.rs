use regex::Regex;
use whyfind_core::errors::WhyfindResult;
use whyfind_core::models::{PageId, Sentence};
use whyfind_core::traits::IDocument;

/// A plain-text candidate document.
///
/// Preprocessing collapses whitespace; segmentation splits on sentence
/// punctuation and tokenizes each sentence on word characters.
#[derive(Debug)]
pub struct TextDocument {
    id: PageId,
    text: String,
    similarity: Option<f64>,
    sentences: Vec<Sentence>,
}

impl TextDocument {
    pub fn new(id: PageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            similarity: None,
            sentences: Vec::new(),
        }
    }
}

impl IDocument for TextDocument {
    fn id(&self) -> PageId {
        self.id
    }

    fn similarity(&self) -> Option<f64> {
        self.similarity
    }

    fn set_similarity(&mut self, score: f64) {
        self.similarity = Some(score);
    }

    fn preprocess(&mut self) -> WhyfindResult<()> {
        // Collapse runs of whitespace; idempotent by construction.
        self.text = self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        Ok(())
    }

    fn segment_sentences(&mut self) -> WhyfindResult<()> {
        let word = Regex::new(r"[A-Za-z0-9']+").expect("static pattern");
        self.sentences = self
            .text
            .split(['.', '!', '?'])
            .map(|s| {
                word.find_iter(s)
                    .map(|m| m.as_str().to_string())
                    .collect::<Sentence>()
            })
            .filter(|s| !s.is_empty())
            .collect();
        Ok(())
    }

    fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }
}
