use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table has no column '{name}'")]
    MissingColumn { name: String },

    #[error("malformed level value '{value}', expected a whole number")]
    MalformedLevel { value: String },

    #[error("no level named '{selector}' in this classification")]
    UnknownLevel { selector: String },

    #[error(
        "generated column name '{name}' already exists; \
         increase the short-name word count to disambiguate"
    )]
    ShortNameCollision { name: String },

    #[error("secondary table '{context}' has no usable display name")]
    MissingLabel { context: String },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TableError>;
