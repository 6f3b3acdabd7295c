//! Client for the KLASS classification API of Statistics Norway.
//!
//! The crate is layered: `params` validates and formats every query
//! parameter, `http` owns the blocking transport, `endpoints` exposes
//! one typed function per API resource, and the wrapper modules
//! (`classification`, `version`, `codes`, `variant`, `correspondence`,
//! `family`, `search`) give each entity a constructor from decoded
//! responses plus a `fetch` entry point. Wrappers never store the
//! client; all I/O takes it by reference.

pub mod classification;
pub mod codes;
pub mod config;
pub mod correspondence;
pub mod endpoints;
pub mod error;
pub mod family;
pub mod http;
pub mod params;
pub mod search;
pub mod variant;
pub mod version;

pub use classification::Classification;
pub use codes::Codes;
pub use config::ClientConfig;
pub use correspondence::Correspondence;
pub use endpoints::CodesQuery;
pub use error::{ClientError, Result};
pub use family::Family;
pub use http::KlassClient;
pub use search::{SearchClassifications, SearchFamilies};
pub use variant::{Variant, VariantSearch};
pub use version::Version;
