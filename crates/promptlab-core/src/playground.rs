use crate::config::{MAX_TOKENS_RANGE, PENALTY_RANGE, TEMPERATURE_RANGE};
use crate::{Model, PlaygroundRequest, ResultEntry, TestConfig};

/// All state owned by the playground view: the prompt pair, the target
/// model, the editable list of sampling configurations, and the outcome of
/// the last submission.
#[derive(Debug, Clone)]
pub struct Playground {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: Model,
    pub configs: Vec<TestConfig>,

    pub results: Vec<ResultEntry>,
    pub running: bool,
    pub error: Option<String>,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            system_prompt: String::new(),
            user_prompt: String::new(),
            model: Model::default(),
            // Seed two contrasting configurations so a first run already
            // compares something.
            configs: vec![
                TestConfig {
                    temperature: 0.0,
                    max_tokens: 50,
                    presence_penalty: 0.0,
                    frequency_penalty: 0.0,
                    stop: Vec::new(),
                },
                TestConfig {
                    temperature: 0.7,
                    max_tokens: 150,
                    presence_penalty: 1.5,
                    frequency_penalty: 0.0,
                    stop: Vec::new(),
                },
            ],
            results: Vec::new(),
            running: false,
            error: None,
        }
    }
}

impl Playground {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_system_prompt(&mut self, value: String) {
        self.system_prompt = value;
    }

    pub fn set_user_prompt(&mut self, value: String) {
        self.user_prompt = value;
    }

    pub fn add_config(&mut self) {
        self.configs.push(TestConfig::default());
    }

    /// Stale indices from a re-rendered widget are ignored.
    pub fn remove_config(&mut self, index: usize) {
        if index < self.configs.len() {
            self.configs.remove(index);
        }
    }

    pub fn set_temperature(&mut self, index: usize, value: f32) {
        if let Some(config) = self.configs.get_mut(index) {
            config.temperature = value.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1);
        }
    }

    pub fn set_max_tokens(&mut self, index: usize, value: u32) {
        if let Some(config) = self.configs.get_mut(index) {
            config.max_tokens = value.clamp(MAX_TOKENS_RANGE.0, MAX_TOKENS_RANGE.1);
        }
    }

    pub fn set_presence_penalty(&mut self, index: usize, value: f32) {
        if let Some(config) = self.configs.get_mut(index) {
            config.presence_penalty = value.clamp(PENALTY_RANGE.0, PENALTY_RANGE.1);
        }
    }

    pub fn set_frequency_penalty(&mut self, index: usize, value: f32) {
        if let Some(config) = self.configs.get_mut(index) {
            config.frequency_penalty = value.clamp(PENALTY_RANGE.0, PENALTY_RANGE.1);
        }
    }

    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    pub fn add_stop_sequence(&mut self, index: usize) {
        if let Some(config) = self.configs.get_mut(index) {
            config.stop.push(String::new());
        }
    }

    pub fn remove_stop_sequence(&mut self, config_index: usize, stop_index: usize) {
        if let Some(config) = self.configs.get_mut(config_index) {
            if stop_index < config.stop.len() {
                config.stop.remove(stop_index);
            }
        }
    }

    pub fn set_stop_sequence(&mut self, config_index: usize, stop_index: usize, value: String) {
        if let Some(config) = self.configs.get_mut(config_index) {
            if let Some(stop) = config.stop.get_mut(stop_index) {
                *stop = value;
            }
        }
    }

    /// Snapshot of the current form state as a request body. Empty prompts
    /// and an empty configuration list are legal.
    pub fn to_request(&self) -> PlaygroundRequest {
        PlaygroundRequest {
            system_prompt: self.system_prompt.clone(),
            user_prompt: self.user_prompt.clone(),
            model: self.model,
            test_configs: self.configs.clone(),
        }
    }

    /// Enter the submitting state. Previous results stay visible until a
    /// successful response replaces them.
    pub fn start(&mut self) {
        self.running = true;
        self.error = None;
    }

    /// Settle the in-flight submission. A failure leaves the results list
    /// untouched; both arms return the view to idle.
    pub fn finish(&mut self, outcome: Result<Vec<ResultEntry>, String>) {
        match outcome {
            Ok(entries) => self.results = entries,
            Err(message) => self.error = Some(message),
        }
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(temperature: f32, max_tokens: u32, presence_penalty: f32, output: &str) -> ResultEntry {
        ResultEntry {
            temperature,
            max_tokens,
            presence_penalty,
            frequency_penalty: 0.0,
            stop: Vec::new(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_new_seeds_two_configs() {
        let playground = Playground::new();
        assert_eq!(playground.configs.len(), 2);
        assert_eq!(playground.configs[0].temperature, 0.0);
        assert_eq!(playground.configs[0].max_tokens, 50);
        assert_eq!(playground.configs[1].temperature, 0.7);
        assert_eq!(playground.configs[1].presence_penalty, 1.5);
        assert_eq!(playground.model, Model::Gpt35Turbo);
        assert!(!playground.running);
    }

    #[test]
    fn test_add_config_appends_defaults() {
        let mut playground = Playground::new();
        playground.add_config();
        assert_eq!(playground.configs.len(), 3);
        let added = playground.configs.last().unwrap();
        assert_eq!(
            *added,
            TestConfig {
                temperature: 0.7,
                max_tokens: 150,
                presence_penalty: 0.0,
                frequency_penalty: 0.0,
                stop: Vec::new(),
            }
        );
    }

    #[test]
    fn test_remove_config_preserves_order() {
        let mut playground = Playground::new();
        playground.add_config();
        playground.set_temperature(2, 1.3);
        playground.remove_config(1);
        assert_eq!(playground.configs.len(), 2);
        assert_eq!(playground.configs[0].temperature, 0.0);
        assert_eq!(playground.configs[1].temperature, 1.3);
    }

    #[test]
    fn test_remove_config_out_of_range_is_noop() {
        let mut playground = Playground::new();
        playground.remove_config(5);
        assert_eq!(playground.configs.len(), 2);
    }

    #[test]
    fn test_setters_touch_only_their_field() {
        let mut playground = Playground::new();
        let before = playground.configs.clone();

        playground.set_presence_penalty(1, -1.0);

        assert_eq!(playground.configs[0], before[0]);
        assert_eq!(playground.configs[1].presence_penalty, -1.0);
        assert_eq!(playground.configs[1].temperature, before[1].temperature);
        assert_eq!(playground.configs[1].max_tokens, before[1].max_tokens);
        assert_eq!(playground.configs[1].frequency_penalty, before[1].frequency_penalty);
        assert_eq!(playground.configs[1].stop, before[1].stop);
    }

    #[test]
    fn test_setters_clamp_to_documented_ranges() {
        let mut playground = Playground::new();
        playground.set_temperature(0, 9.0);
        playground.set_max_tokens(0, 10);
        playground.set_presence_penalty(0, -7.5);
        playground.set_frequency_penalty(0, 3.0);

        let config = &playground.configs[0];
        assert_eq!(config.temperature, 2.0);
        assert_eq!(config.max_tokens, 50);
        assert_eq!(config.presence_penalty, -2.0);
        assert_eq!(config.frequency_penalty, 2.0);
    }

    #[test]
    fn test_stop_sequences_scoped_to_one_config() {
        let mut playground = Playground::new();
        playground.add_stop_sequence(0);
        playground.set_stop_sequence(0, 0, "###".to_string());
        assert_eq!(playground.configs[0].stop, vec!["###".to_string()]);
        assert!(playground.configs[1].stop.is_empty());

        playground.add_stop_sequence(0);
        playground.remove_stop_sequence(0, 0);
        assert_eq!(playground.configs[0].stop, vec![String::new()]);

        // stale indices are ignored
        playground.remove_stop_sequence(0, 4);
        playground.remove_stop_sequence(9, 0);
        playground.set_stop_sequence(1, 0, "END".to_string());
        assert!(playground.configs[1].stop.is_empty());
    }

    #[test]
    fn test_request_wire_shape() {
        let mut playground = Playground::new();
        playground.system_prompt = "You are terse.".to_string();
        playground.user_prompt = "Say hi.".to_string();
        playground.set_model(Model::Gpt4);

        let body = serde_json::to_value(playground.to_request()).unwrap();
        assert_eq!(body["systemPrompt"], json!("You are terse."));
        assert_eq!(body["userPrompt"], json!("Say hi."));
        assert_eq!(body["model"], json!("gpt-4"));
        assert_eq!(body["testConfigs"].as_array().unwrap().len(), 2);
        assert_eq!(body["testConfigs"][0]["max_tokens"], json!(50));
        assert_eq!(body["testConfigs"][1]["presence_penalty"], json!(1.5));
        assert_eq!(body["testConfigs"][0]["stop"], json!([]));
    }

    #[test]
    fn test_empty_config_list_still_builds_a_request() {
        let mut playground = Playground::new();
        playground.remove_config(1);
        playground.remove_config(0);

        let body = serde_json::to_value(playground.to_request()).unwrap();
        assert_eq!(body["testConfigs"], json!([]));
    }

    #[test]
    fn test_successful_run_replaces_results() {
        let mut playground = Playground::new();
        playground.system_prompt = "You are terse.".to_string();
        playground.user_prompt = "Say hi.".to_string();

        playground.start();
        assert!(playground.running);
        assert!(playground.error.is_none());

        let entries = vec![entry(0.0, 50, 0.0, "Hi."), entry(0.7, 150, 1.5, "Hello there!")];
        playground.finish(Ok(entries.clone()));

        assert_eq!(playground.results, entries);
        assert!(!playground.running);
        assert!(playground.error.is_none());
    }

    #[test]
    fn test_failed_run_keeps_stale_results() {
        let mut playground = Playground::new();
        let entries = vec![entry(0.0, 50, 0.0, "Hi.")];
        playground.finish(Ok(entries.clone()));

        playground.start();
        playground.finish(Err("HTTP error: 500".to_string()));

        assert_eq!(playground.results, entries);
        assert_eq!(playground.error.as_deref(), Some("HTTP error: 500"));
        assert!(!playground.running);
    }

    #[test]
    fn test_result_entry_parses_endpoint_response() {
        let response = json!([
            { "temperature": 0.0, "max_tokens": 50, "presence_penalty": 0.0,
              "frequency_penalty": 0.0, "stop": [], "output": "Hi." },
            { "temperature": 0.7, "max_tokens": 150, "presence_penalty": 1.5,
              "frequency_penalty": 0.0, "stop": ["\n"], "output": "Hello there!" }
        ]);
        let entries: Vec<ResultEntry> = serde_json::from_value(response).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].output, "Hi.");
        assert_eq!(entries[1].stop, vec!["\n".to_string()]);
    }
}
