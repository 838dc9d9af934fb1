use serde::{Deserialize, Serialize};

use crate::{Model, TestConfig};

/// Body of `POST /api/generate`. Built fresh on each submit, never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: Model,
    pub test_configs: Vec<TestConfig>,
}

/// One element of the endpoint's response: the parameters it ran with plus
/// the generated text. Stored verbatim and rendered in response order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    #[serde(default)]
    pub stop: Vec<String>,
    pub output: String,
}
