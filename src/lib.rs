//! Namespaced Identifier (NSID) Parsing
//!
//! NSIDs name schemas in a federated protocol. An NSID is a reverse domain
//! name (the domain authority) followed by a final name segment:
//!
//! ```text
//! com.example.fooBar
//! └───┬─────┘ └─┬──┘
//!  authority   name
//! ```
//!
//! ## Features
//!
//! - **Single-Pass Validation**: one left-to-right scan classifies a
//!   candidate or reports the specific rule it violates
//! - **Precise Failures**: thirteen distinct rejection reasons, reported in
//!   a fixed precedence order
//! - **Normalization**: the domain authority is lowercased, the name keeps
//!   its input casing
//! - **String Serialization**: serde support that round-trips an NSID as its
//!   plain string value
//!
//! ## Example
//!
//! ```
//! use nsid::Nsid;
//!
//! let nsid = Nsid::parse("com.example.fooBar")?;
//! assert_eq!(nsid.name(), "fooBar");
//! assert_eq!(nsid.domain_authority(), "com.example");
//! assert_eq!(nsid.segments(), ["com", "example", "fooBar"]);
//! # Ok::<(), nsid::NsidError>(())
//! ```

pub mod error;
pub mod nsid;

pub use error::{NsidError, Result};
pub use nsid::{
    Nsid, MAX_AUTHORITY_LENGTH, MAX_AUTHORITY_SEGMENT_LENGTH, MAX_NAME_LENGTH, MAX_NSID_LENGTH,
};
