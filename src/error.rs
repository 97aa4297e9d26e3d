use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptGenError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}

impl ScriptGenError {
    pub fn new(msg: &str) -> Self {
        ScriptGenError::Custom(msg.to_string())
    }
}
