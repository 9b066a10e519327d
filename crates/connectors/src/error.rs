use thiserror::Error;

/// Errors raised while turning argument values into driver parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// An array holds elements of more than one type.
    #[error("Array mixes {first} and {found} elements")]
    MixedArray {
        first: &'static str,
        found: &'static str,
    },

    /// An array element is itself an array.
    #[error("Nested arrays are not supported")]
    NestedArray,

    /// The server expects an array of a different element type.
    #[error("Cannot bind {elements} array to parameter of type {ty}")]
    ArrayType { elements: &'static str, ty: String },

    /// An unsigned value does not fit in BIGINT.
    #[error("Value {0} is out of range for int8")]
    OutOfRange(u64),
}
