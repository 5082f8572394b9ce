use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("at least one term required")]
    NoTerms,
}
