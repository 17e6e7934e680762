pub type SlaterResult<T> = Result<T, SlaterError>;

#[derive(thiserror::Error, Debug)]
pub enum SlaterError {
    #[error("image load error: {0}")]
    ImageLoad(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlaterError {
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
