//! Error types for NSID validation

use thiserror::Error;

/// Result type for NSID operations
pub type Result<T> = std::result::Result<T, NsidError>;

/// The reason a candidate string was rejected as an NSID.
///
/// Validation stops at the first violated rule, so a candidate that breaks
/// several rules at once reports the one with the highest precedence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NsidError {
    #[error("NSID cannot be empty")]
    Empty,

    #[error("NSID cannot contain empty segments")]
    EmptySegment,

    #[error("NSID requires a minimum of 3 segments")]
    NotEnoughSegments,

    #[error("NSID is too long, maximum length is 317")]
    TooLong,

    #[error("NSID contains forbidden characters")]
    ForbiddenCharacters,

    #[error("NSID name is too long, maximum length is 63")]
    NameTooLong,

    #[error("domain authority is too long, maximum length is 253")]
    AuthorityTooLong,

    #[error("domain authority segment is too long, maximum length is 63")]
    AuthoritySegmentTooLong,

    #[error("domain authority segments cannot start with a hyphen")]
    AuthoritySegmentStartsWithHyphen,

    #[error("domain authority segments cannot end with a hyphen")]
    AuthoritySegmentEndsWithHyphen,

    #[error("the first segment cannot start with a separator")]
    StartsWithSeparator,

    #[error("the first segment cannot start with a digit")]
    StartsWithDigit,

    #[error("NSID name cannot end with a separator")]
    NameEndsWithSeparator,
}
