//! NSID parsing and validation
//!
//! An NSID names a schema with a reversed domain name followed by a name,
//! e.g. `com.example.hello`. The domain authority part is case-insensitive
//! and normalized to lowercase; the name preserves its input casing and may
//! only contain ASCII letters.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{NsidError, Result};

/// Maximum length of a full NSID.
pub const MAX_NSID_LENGTH: usize = 317;

/// Maximum length of the name segment.
pub const MAX_NAME_LENGTH: usize = 63;

/// Maximum length of the domain authority.
pub const MAX_AUTHORITY_LENGTH: usize = 253;

/// Maximum length of a single domain authority segment.
pub const MAX_AUTHORITY_SEGMENT_LENGTH: usize = 63;

/// A validated Namespaced Identifier
///
/// In the NSID `com.example.hello`, "com.example" is the domain authority,
/// "hello" is the name, and the full string is the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nsid {
    /// The full normalized identifier (lowercased authority, original name)
    value: String,
    /// The final segment, casing preserved
    name: String,
    /// All segments except the name, lowercased and dot-joined
    domain_authority: String,
    /// Every segment in left-to-right order
    segments: Vec<String>,
}

impl Nsid {
    /// Parse and validate a candidate NSID.
    ///
    /// Rules are checked in a fixed precedence order, so a candidate that
    /// violates several rules at once always reports the same error.
    pub fn parse(input: &str) -> Result<Self> {
        if input.chars().all(char::is_whitespace) {
            return Err(NsidError::Empty);
        }

        if input.len() > MAX_NSID_LENGTH {
            return Err(NsidError::TooLong);
        }

        let raw = input.as_bytes();
        match raw[0] {
            b'-' => return Err(NsidError::AuthoritySegmentStartsWithHyphen),
            b'.' => return Err(NsidError::StartsWithSeparator),
            c if c.is_ascii_digit() => return Err(NsidError::StartsWithDigit),
            _ => {}
        }

        if raw[raw.len() - 1] == b'.' {
            return Err(NsidError::NameEndsWithSeparator);
        }

        let mut segments: Vec<String> = Vec::new();
        let mut reader = 0;
        for (i, &c) in raw.iter().enumerate() {
            if c != b'.' && c != b'-' && !c.is_ascii_alphanumeric() {
                return Err(NsidError::ForbiddenCharacters);
            }

            if c != b'.' {
                continue;
            }

            // Safe to look back one byte: the first character is never a
            // separator, and everything before this one is ASCII.
            match raw[i - 1] {
                b'-' => return Err(NsidError::AuthoritySegmentEndsWithHyphen),
                b'.' => return Err(NsidError::EmptySegment),
                _ => {
                    // Domain authority segments are normalized to lowercase.
                    segments.push(input[reader..i].to_ascii_lowercase());
                    reader = i + 1;
                }
            }
        }

        // The reader stopped after the last separator; the rest is the name.
        let name = &input[reader..];
        if name.len() > MAX_NAME_LENGTH {
            return Err(NsidError::NameTooLong);
        }

        // The name is stricter than the authority: letters only. Digits and
        // hyphens passed the scan above but are rejected here.
        if !name.bytes().all(|c| c.is_ascii_alphabetic()) {
            return Err(NsidError::ForbiddenCharacters);
        }

        segments.push(name.to_string());

        if segments.len() < 3 {
            return Err(NsidError::NotEnoughSegments);
        }

        for segment in &segments[..segments.len() - 1] {
            if segment.starts_with('-') {
                return Err(NsidError::AuthoritySegmentStartsWithHyphen);
            }

            if segment.len() > MAX_AUTHORITY_SEGMENT_LENGTH {
                return Err(NsidError::AuthoritySegmentTooLong);
            }
        }

        let value = segments.join(".");
        let domain_authority = value[..value.len() - (name.len() + 1)].to_string();
        if domain_authority.len() > MAX_AUTHORITY_LENGTH {
            return Err(NsidError::AuthorityTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            value,
            domain_authority,
            segments,
        })
    }

    /// Check a candidate without constructing it.
    ///
    /// Same validation decision as [`Nsid::parse`] for every input.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// The full normalized identifier string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the NSID and return the normalized identifier string.
    pub fn into_string(self) -> String {
        self.value
    }

    /// The name of the NSID.
    ///
    /// In `com.example.hello`, "hello" is the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The domain authority of the NSID.
    ///
    /// In `com.example.hello`, "com.example" is the domain authority.
    pub fn domain_authority(&self) -> &str {
        &self.domain_authority
    }

    /// The segments of the NSID, in left-to-right order.
    ///
    /// In `com.example.hello`, the segments are "com", "example", "hello".
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Nsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Nsid {
    type Err = NsidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Nsid {
    type Error = NsidError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Nsid {
    type Error = NsidError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl AsRef<str> for Nsid {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Deref for Nsid {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl PartialEq<str> for Nsid {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<Nsid> for str {
    fn eq(&self, other: &Nsid) -> bool {
        *self == other.value
    }
}

impl PartialEq<&str> for Nsid {
    fn eq(&self, other: &&str) -> bool {
        self.value == **other
    }
}

impl PartialEq<Nsid> for &str {
    fn eq(&self, other: &Nsid) -> bool {
        **self == other.value
    }
}

impl PartialEq<String> for Nsid {
    fn eq(&self, other: &String) -> bool {
        self.value == *other
    }
}

impl PartialEq<Nsid> for String {
    fn eq(&self, other: &Nsid) -> bool {
        *self == other.value
    }
}

impl serde::Serialize for Nsid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for Nsid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decomposition() {
        let nsid = Nsid::parse("com.example.hello").unwrap();
        assert_eq!(nsid.name(), "hello");
        assert_eq!(nsid.value, "com.example.hello");
        assert_eq!(nsid.domain_authority(), "com.example");
        assert_eq!(nsid.segments(), ["com", "example", "hello"]);
    }

    #[test]
    fn test_authority_is_lowercased_and_name_preserved() {
        let nsid = Nsid::parse("cOm.eXaMpLe.hELLo").unwrap();
        assert_eq!(nsid.domain_authority(), "com.example");
        assert_eq!(nsid.as_str(), "com.example.hELLo");
    }

    #[test]
    fn test_display_is_normalized_value() {
        let nsid = Nsid::parse("Net.Users.Bob.ping").unwrap();
        assert_eq!(nsid.to_string(), "net.users.bob.ping");
    }

    #[test]
    fn test_from_str_and_try_from_agree_with_parse() {
        let parsed = Nsid::parse("com.example.hello").unwrap();
        assert_eq!("com.example.hello".parse::<Nsid>().unwrap(), parsed);
        assert_eq!(Nsid::try_from("com.example.hello").unwrap(), parsed);
        assert_eq!(
            Nsid::try_from(String::from("com.example.hello")).unwrap(),
            parsed
        );
    }

    #[test]
    fn test_is_valid_matches_parse() {
        assert!(Nsid::is_valid("com.example.hello"));
        assert!(!Nsid::is_valid("com.example"));
        assert!(!Nsid::is_valid(""));
    }

    #[test]
    fn test_string_comparisons() {
        let nsid = Nsid::parse("com.example.hello").unwrap();
        assert_eq!(nsid, "com.example.hello");
        assert_eq!(nsid, String::from("com.example.hello"));
        assert_eq!(nsid.len(), 17);
    }
}
