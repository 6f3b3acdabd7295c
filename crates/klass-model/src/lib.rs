//! Typed response shapes for the KLASS classification API.
//!
//! Every endpoint of the API gets one canonical struct, decoded once by
//! serde. Wire fields keep the API's camelCase names via serde renames;
//! date and datetime fields stay ISO strings here, validation and
//! formatting live in the client crate.

pub mod classification;
pub mod codes;
pub mod correspondence;
pub mod error;
pub mod family;
pub mod language;
pub mod links;
pub mod search;
pub mod variant;
pub mod version;

pub use classification::{
    ClassificationDetails, ClassificationListResponse, ClassificationSummary, ContactPerson,
};
pub use codes::{ChangesResponse, CodeChange, CodeRow, CodesResponse};
pub use correspondence::{
    CorrespondenceItem, CorrespondenceTableDetails, CorrespondsResponse,
};
pub use error::{ModelError, Result};
pub use family::{FamilyDetails, FamilyListResponse, FamilySummary};
pub use language::Language;
pub use links::{Link, Links};
pub use search::{SearchResponse, SearchResult, SsbSection, SsbSectionsResponse};
pub use variant::VariantDetails;
pub use version::{
    Changelog, CodeItem, CorrespondenceTableSummary, LevelDescriptor, VersionDetails,
    VersionSummary,
};
