/// Extraction pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error(
        "pagination window exceeds available ranked results: \
         start {start}, num_top {num_top}, available {available}"
    )]
    PaginationOutOfRange {
        start: usize,
        num_top: usize,
        available: usize,
    },
}
