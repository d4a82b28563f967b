#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A lenient IRI parser and resolver based on IETF [RFC 3986] and [RFC 3987].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//! [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987/
//!
//! **Features:**
//!
//! - Decomposition of any text into scheme, authority (userinfo, host, port),
//!   path, query and fragment. Parsing never fails; text that does not fit a
//!   delimited component ends up in the path.
//! - Distinguishes absent components from present but empty ones, so that
//!   `http://a/?#` and `http://a/` stay different.
//! - Reference resolution against a base IRI ([`Iri::resolve`]).
//! - Dot-segment removal ([`remove_dot_segments`]).
//! - Immutable `with_*` methods that yield a new IRI with one component replaced.
//!   Values that would spill into other components are rejected.
//! - Comparison by serialization.
//!
//! No validation, percent-encoding or case normalization is performed.
//!
//! See the documentation of [`Iri`] for more details.
//!
//! # Feature flags
//!
//! - `std` (default): Enables [`std::error::Error`] implementations.
//!
//! - `serde`: Enables `serde` support. An `Iri` serializes as its string.
//!
//! # Logging
//!
//! Each resolution is logged at the `trace` level through the [`log`] facade.

extern crate alloc;

mod build;
pub mod component;
mod convert;
mod error;
mod fmt;
mod imp;
mod normalize;
mod parse;
mod resolve;

pub use error::InvalidInput;
pub use imp::{AsIri, Iri, ToPort};
pub use normalize::remove_dot_segments;
