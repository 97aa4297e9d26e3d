pub mod burn;
pub mod deploy;
pub mod models;
pub mod paras;
pub mod render;

pub mod error;
pub use error::*;

pub type Result<T> = std::result::Result<T, ScriptGenError>;
