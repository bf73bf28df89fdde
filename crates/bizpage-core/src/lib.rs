//! Core library for `bizpage`.
//!
//! Maps the subdomain of a visiting host to one row of a published business
//! spreadsheet:
//!
//! - [`normalize`]: canonical comparison keys (`"Lộc-An"` → `"locan"`)
//! - [`csv`]: a minimal quote-aware CSV parser
//! - [`host`]: subdomain extraction from a host name
//! - [`record`]: the [`BusinessRecord`](record::BusinessRecord) and its positional mapping
//! - [`fallback`]: deterministic hero image selection
//! - [`resolver`]: fetch, parse and first-match lookup
//!
//! Nothing here renders markup; the server crate does that.

pub mod csv;
pub mod error;
pub mod fallback;
pub mod host;
pub mod normalize;
pub mod record;
pub mod resolver;

pub use error::ResolveError;
pub use record::BusinessRecord;
pub use resolver::{Resolver, ResolverOptions};
