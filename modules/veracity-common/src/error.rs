use thiserror::Error;

pub type Result<T> = std::result::Result<T, VeracityError>;

#[derive(Error, Debug)]
pub enum VeracityError {
    /// Neither a URL nor article text was supplied.
    #[error("Please provide article text or URL")]
    MissingInput,

    /// The retrieval collaborator failed for this URL.
    #[error("URL extraction failed for {url}: {message}")]
    Retrieval { url: String, message: String },

    /// Retrieval succeeded but produced no usable text.
    #[error("Article content is empty or blocked by website: {url}")]
    EmptyArticle { url: String },

    #[error("Model error: {0}")]
    Model(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl VeracityError {
    /// Input-missing and retrieval failures halt the pipeline before any
    /// signal is computed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            VeracityError::MissingInput
                | VeracityError::Retrieval { .. }
                | VeracityError::EmptyArticle { .. }
        )
    }
}
