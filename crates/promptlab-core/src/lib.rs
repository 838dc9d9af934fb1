// Domain modules
pub mod config;
pub mod error;
pub mod model;
pub mod playground;
pub mod request;

pub use config::{TestConfig, MAX_TOKENS_RANGE, PENALTY_RANGE, TEMPERATURE_RANGE};
pub use error::{PromptLabError, Result};
pub use model::Model;
pub use playground::Playground;
pub use request::{PlaygroundRequest, ResultEntry};
