use thiserror::Error;

/// Broad classification of an [`FftError`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller broke the contract of the operation (wrong length, buffer
    /// too small, ...). Retrying with the same input fails identically.
    Precondition,
    /// The requested operation has no mathematical answer, e.g. division by
    /// the zero polynomial.
    Mathematical,
    /// An internal invariant (such as canonical polynomial form) was broken.
    /// This indicates a defect in the caller rather than bad user input.
    Invariant,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FftError {
    #[error("scale {scale} exceeds the largest supported scale {max_scale}")]
    ScaleTooLarge { scale: u8, max_scale: u8 },
    #[error("got {len} values but only have {max_width} roots of unity")]
    DomainTooSmall { len: usize, max_width: usize },
    #[error("got {len} values but not a power of two")]
    NotPowerOfTwo { len: usize },
    #[error("expected {expected} values but got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("buffer `{buffer}` too small: need {required} elements, got {got}")]
    BufferTooSmall {
        buffer: &'static str,
        required: usize,
        got: usize,
    },
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    #[error("leaves need {required} coefficients but the destination has {available}")]
    LeavesExceedDestination { required: usize, available: usize },
    #[error("index {index} is outside of the domain of size {size}")]
    IndexOutOfDomain { index: usize, size: usize },
    #[error("index {index} appears more than once")]
    DuplicateIndex { index: usize },
    #[error("subproduct tree of height {height} cannot evaluate a polynomial with {len} coefficients")]
    TreeTooSmall { height: usize, len: usize },
    #[error("subproduct tree is not balanced at level {level}")]
    UnbalancedTree { level: usize },
    #[error("a subproduct tree with a single leaf cannot be split")]
    CannotSplitLeaf,
    #[error("{missing} missing indices do not leave any sample of the {length} available")]
    TooManyMissingIndices { missing: usize, length: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("root of unity for scale {scale} does not have order 2^{scale}")]
    InvalidRootOfUnity { scale: u8 },
    #[error("bit reversal supports at most 2^31 elements, got {len}")]
    BitReversalTooLarge { len: usize },
    #[error("cannot divide by the zero polynomial")]
    DivisionByZero,
    #[error("divisor degree {divisor} exceeds dividend degree {dividend}")]
    DivisorDegreeTooLarge { dividend: usize, divisor: usize },
    #[error("element is not invertible")]
    NotInvertible,
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl FftError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero | Self::DivisorDegreeTooLarge { .. } | Self::NotInvertible => {
                ErrorKind::Mathematical
            }
            Self::InvariantViolation(_) => ErrorKind::Invariant,
            _ => ErrorKind::Precondition,
        }
    }
}

pub type FftResult<T> = std::result::Result<T, FftError>;
