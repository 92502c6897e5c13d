use thiserror::Error;

pub type ShmResult<T> = Result<T, ShmError>;

/// Failures of the engine operations.
///
/// Every operation validates its inputs once at entry and either returns a
/// fully populated result or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShmError {
    /// Invalid physical parameter or degenerate input.
    #[error("Domain error: {what}")]
    Domain { what: &'static str },

    /// Input value is NaN or infinite.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Sequences that must be index-aligned have different lengths.
    #[error("Length mismatch: {what} (left={left}, right={right})")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    /// A produced sample left the representable range.
    #[error("Numeric overflow: {what} at sample {index}")]
    NumericOverflow { what: &'static str, index: usize },
}

impl ShmError {
    /// True for errors caused by invalid parameters rather than by the data.
    pub fn is_domain(&self) -> bool {
        matches!(self, ShmError::Domain { .. } | ShmError::NonFinite { .. })
    }
}
