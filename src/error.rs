use thiserror::Error;

/// The only failure `sort` reports. Everything else degrades into comparator results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The primary input was present but not a JSON array.
    #[error("expects an array")]
    NotAnArray { found: &'static str },
}

pub type Result<T, E = SortError> = std::result::Result<T, E>;
