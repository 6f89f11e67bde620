use exmatrix_backend::LayoutError;
use thiserror::Error;

/// Why a host list could not be turned into a buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("list ended after {got} elements but {expected} were declared")]
    Truncated { expected: usize, got: usize },

    #[error("list holds more than the {expected} declared elements")]
    Overrun { expected: usize },

    #[error("improper list: tail after {position} elements is not a list")]
    ImproperList { position: usize },

    #[error("element {position} is not a number usable as {target}")]
    NotNumeric { position: usize, target: &'static str },

    #[error("element {position} does not fit in {target}")]
    OutOfRange { position: usize, target: &'static str },
}

impl ConversionError {
    /// Index of the offending element, or the number of elements read.
    pub fn position(&self) -> usize {
        match self {
            ConversionError::Truncated { got, .. } => *got,
            ConversionError::Overrun { expected } => *expected,
            ConversionError::ImproperList { position }
            | ConversionError::NotNumeric { position, .. }
            | ConversionError::OutOfRange { position, .. } => *position,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotError {
    #[error("dimension mismatch: left operand has {left} elements, right operand has {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("argument {argument} is not a proper list")]
    NotAList { argument: usize },

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("failed to allocate a buffer of {len} elements")]
    Allocation { len: usize },

    #[error("called with {got} arguments, expected {expected}")]
    BadArity { expected: usize, got: usize },

    #[error("undefined function {name}/{arity}")]
    UndefinedFunction { name: String, arity: usize },
}

impl DotError {
    /// Atom naming the error in the `{error, Reason}` term handed back to the host.
    pub fn reason(&self) -> &'static str {
        match self {
            DotError::DimensionMismatch { .. } => "dimension_mismatch",
            DotError::NotAList { .. } => "not_a_list",
            DotError::Conversion(_) => "conversion_error",
            DotError::Allocation { .. } => "allocation_error",
            DotError::BadArity { .. } => "badarity",
            DotError::UndefinedFunction { .. } => "undef",
        }
    }
}

impl From<LayoutError> for DotError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::DimensionMismatch { left, right } => DotError::DimensionMismatch { left, right },
            LayoutError::Allocation { len, .. } => DotError::Allocation { len },
        }
    }
}
