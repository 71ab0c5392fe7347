use thiserror::Error;

/// Top-level error type for the planar crate.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Errors raised when an argument is outside the domain of an operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("expected {expected} coordinates, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),

    #[error("cannot take the centroid of an empty point set")]
    EmptyPointSet,

    #[error("a {rows}x{cols} matrix cannot be applied to a 2D point")]
    NonConformantMatrix { rows: usize, cols: usize },

    #[error("{0} axis must be non-zero")]
    ZeroAxis(&'static str),
}

/// Errors raised when text does not match the coordinate-list grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty coordinate text")]
    Empty,

    #[error("unbalanced parenthesis in {0:?}")]
    UnbalancedParenthesis(String),

    #[error("expected 2 coordinates in {input:?}, found {found}")]
    CoordinateCount { input: String, found: usize },

    #[error("invalid number {token:?} in {input:?}")]
    InvalidNumber { input: String, token: String },
}

/// Errors raised while reading a structured (XML) representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("element <{element}> has no {member} attribute or child element")]
    MissingMember {
        element: String,
        member: &'static str,
    },

    #[error("member {member} of <{element}> is not a number: {value:?}")]
    InvalidNumber {
        element: String,
        member: &'static str,
        value: String,
    },

    #[error("document has no root element")]
    NoRootElement,

    #[error("unexpected closing tag </{0}>")]
    UnexpectedClosingTag(String),

    #[error("element <{0}> is not closed")]
    UnclosedElement(String),

    #[error("content outside the root element: {0:?}")]
    ContentOutsideRoot(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
