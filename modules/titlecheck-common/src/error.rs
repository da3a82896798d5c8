use thiserror::Error;

#[derive(Error, Debug)]
pub enum TitleCheckError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Verdict generator failed: {0}")]
    Generator(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
