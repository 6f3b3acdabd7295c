use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid value for '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("request to {url} failed with status {status}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no variant named '{name}' on this version")]
    NoVariantMatch { name: String },

    #[error("variant name '{name}' matches more than one variant: {matches:?}")]
    AmbiguousVariantMatch { name: String, matches: Vec<String> },

    #[error("classification has no versions")]
    NoVersions,

    #[error("family has no classifications")]
    EmptyFamily,

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Model(#[from] klass_model::ModelError),

    #[error(transparent)]
    Table(#[from] klass_tables::TableError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
