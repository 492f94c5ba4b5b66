/// Part-of-speech tagger errors.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("POS tagger unavailable: {reason}")]
    Unavailable { reason: String },
}
