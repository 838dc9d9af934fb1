use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PromptLabError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl Model {
    /// Wire id sent to the generation endpoint.
    pub fn id(&self) -> &'static str {
        match self {
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Gpt4 => "gpt-4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Model::Gpt35Turbo => "GPT-3.5 Turbo",
            Model::Gpt4 => "GPT-4",
        }
    }

    pub fn all() -> &'static [Model] {
        &[Model::Gpt35Turbo, Model::Gpt4]
    }
}

impl FromStr for Model {
    type Err = PromptLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::all()
            .iter()
            .copied()
            .find(|m| m.id() == s)
            .ok_or_else(|| PromptLabError::UnknownModel(s.to_string()))
    }
}
