use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Transport failure surfaced by the HTTP client, propagated untouched.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Client construction or environment loading failed.
    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
