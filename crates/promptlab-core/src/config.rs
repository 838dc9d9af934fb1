use serde::{Deserialize, Serialize};

/// Slider bounds shared by the setters and the range widgets.
pub const TEMPERATURE_RANGE: (f32, f32) = (0.0, 2.0);
pub const MAX_TOKENS_RANGE: (u32, u32) = (50, 300);
pub const PENALTY_RANGE: (f32, f32) = (-2.0, 2.0);

/// One set of sampling parameters to run the prompt pair under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    #[serde(default)]
    pub stop: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 150,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            stop: Vec::new(),
        }
    }
}
