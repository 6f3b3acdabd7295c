use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("response has no '{rel}' link")]
    MissingLink { rel: String },
    #[error("link '{href}' has no trailing id segment")]
    MalformedLink { href: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
