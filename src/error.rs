use crate::spring::SpringSpec;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("local storage read failed: {0}")]
    Storage(String),
    #[error("invalid sticker config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("spring constants must be finite and positive: {0:?}")]
    InvalidSpring(SpringSpec),
}
