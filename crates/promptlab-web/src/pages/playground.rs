use leptos::prelude::*;
use promptlab_core::{
    Model, Playground, ResultEntry, TestConfig, MAX_TOKENS_RANGE, PENALTY_RANGE, TEMPERATURE_RANGE,
};
use wasm_bindgen::JsValue;

use crate::api;

#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let playground = RwSignal::new(Playground::new());

    let run_playground = move |_| {
        // One submission in flight at a time.
        if playground.with_untracked(|p| p.running) {
            return;
        }
        let request = playground.with_untracked(|p| p.to_request());
        playground.update(|p| p.start());

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::generate(&request).await.map_err(|e| e.to_string());
            if let Err(e) = &outcome {
                web_sys::console::error_1(&JsValue::from_str(e));
            }
            playground.update(|p| p.finish(outcome));
        });
    };

    view! {
        <div class="page playground-page">
            <h2>"Interactive Prompt Playground"</h2>

            <div class="config-panel">
                <div class="form-group">
                    <label>"System Prompt"</label>
                    <textarea
                        placeholder="Enter system prompt..."
                        rows="3"
                        prop:value=move || playground.with(|p| p.system_prompt.clone())
                        on:input=move |ev| {
                            playground.update(|p| p.set_system_prompt(event_target_value(&ev)))
                        }
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>"User Prompt"</label>
                    <textarea
                        placeholder="Enter user prompt..."
                        rows="3"
                        prop:value=move || playground.with(|p| p.user_prompt.clone())
                        on:input=move |ev| {
                            playground.update(|p| p.set_user_prompt(event_target_value(&ev)))
                        }
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>"Model"</label>
                    <select
                        prop:value=move || playground.with(|p| p.model.id().to_string())
                        on:change=move |ev| {
                            if let Ok(model) = event_target_value(&ev).parse::<Model>() {
                                playground.update(|p| p.set_model(model));
                            }
                        }
                    >
                        {Model::all()
                            .iter()
                            .map(|m| view! { <option value=m.id()>{m.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </div>

            <div class="configs-section">
                <div class="configs-header">
                    <h3>"Test Configurations"</h3>
                    <button
                        class="add-btn"
                        on:click=move |_| playground.update(|p| p.add_config())
                    >
                        "Add Configuration"
                    </button>
                </div>

                {move || {
                    playground
                        .with(|p| p.configs.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, config)| {
                            view! { <ConfigCard playground=playground index=index config=config /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <button
                class="run-btn"
                disabled=move || playground.with(|p| p.running)
                on:click=run_playground
            >
                {move || if playground.with(|p| p.running) {
                    view! { <span class="loading"><span class="spinner"></span>" Running..."</span> }.into_any()
                } else {
                    view! { <span>"Run Playground"</span> }.into_any()
                }}
            </button>

            {move || playground.with(|p| p.error.clone()).map(|e| view! {
                <div class="error-panel">
                    <p style="color: var(--error);">"Error: " {e}</p>
                </div>
            })}

            <div class="results-panel">
                <h3>"Results"</h3>
                {move || {
                    let results = playground.with(|p| p.results.clone());
                    if results.is_empty() {
                        view! { <p class="placeholder">"Run the playground to see results"</p> }
                            .into_any()
                    } else {
                        view! {
                            <div class="result-grid">
                                {results
                                    .into_iter()
                                    .map(|entry| view! { <ResultCard entry=entry /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ConfigCard(playground: RwSignal<Playground>, index: usize, config: TestConfig) -> impl IntoView {
    let stop_rows = config
        .stop
        .iter()
        .enumerate()
        .map(|(stop_index, stop)| {
            view! {
                <div class="stop-row">
                    <input
                        type="text"
                        placeholder="Enter stop sequence..."
                        prop:value=stop.clone()
                        on:input=move |ev| {
                            playground.update(|p| {
                                p.set_stop_sequence(index, stop_index, event_target_value(&ev))
                            })
                        }
                    />
                    <button
                        class="remove-btn"
                        on:click=move |_| {
                            playground.update(|p| p.remove_stop_sequence(index, stop_index))
                        }
                    >
                        "Remove"
                    </button>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="config-card">
            <div class="config-card-header">
                <h4>{format!("Configuration {}", index + 1)}</h4>
                <button
                    class="remove-btn"
                    on:click=move |_| playground.update(|p| p.remove_config(index))
                >
                    "Remove"
                </button>
            </div>

            <div class="form-group">
                <label>{format!("Temperature: {}", config.temperature)}</label>
                <input
                    type="range"
                    min=TEMPERATURE_RANGE.0.to_string()
                    max=TEMPERATURE_RANGE.1.to_string()
                    step="0.1"
                    prop:value=config.temperature.to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            playground.update(|p| p.set_temperature(index, v));
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label>{format!("Max Tokens: {}", config.max_tokens)}</label>
                <input
                    type="range"
                    min=MAX_TOKENS_RANGE.0.to_string()
                    max=MAX_TOKENS_RANGE.1.to_string()
                    step="1"
                    prop:value=config.max_tokens.to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            playground.update(|p| p.set_max_tokens(index, v));
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label>{format!("Presence Penalty: {}", config.presence_penalty)}</label>
                <input
                    type="range"
                    min=PENALTY_RANGE.0.to_string()
                    max=PENALTY_RANGE.1.to_string()
                    step="0.1"
                    prop:value=config.presence_penalty.to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            playground.update(|p| p.set_presence_penalty(index, v));
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label>{format!("Frequency Penalty: {}", config.frequency_penalty)}</label>
                <input
                    type="range"
                    min=PENALTY_RANGE.0.to_string()
                    max=PENALTY_RANGE.1.to_string()
                    step="0.1"
                    prop:value=config.frequency_penalty.to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            playground.update(|p| p.set_frequency_penalty(index, v));
                        }
                    }
                />
            </div>

            <div class="form-group">
                <div class="stop-header">
                    <label>"Stop Sequences"</label>
                    <button
                        class="add-btn"
                        on:click=move |_| playground.update(|p| p.add_stop_sequence(index))
                    >
                        "Add Stop Sequence"
                    </button>
                </div>
                {stop_rows}
            </div>
        </div>
    }
}

#[component]
fn ResultCard(entry: ResultEntry) -> impl IntoView {
    let params = params_line(&entry);
    view! {
        <div class="result-card">
            <div class="result-params">{params}</div>
            <pre class="result-output">{entry.output}</pre>
        </div>
    }
}

/// Summary line of the parameters a result was generated with.
fn params_line(entry: &ResultEntry) -> String {
    let mut line = format!(
        "Temp: {} | Tokens: {} | Pres Pen: {} | Freq Pen: {}",
        entry.temperature, entry.max_tokens, entry.presence_penalty, entry.frequency_penalty
    );
    if !entry.stop.is_empty() {
        line.push_str(" | Stop: ");
        line.push_str(&entry.stop.join(", "));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(stop: Vec<String>) -> ResultEntry {
        ResultEntry {
            temperature: 0.7,
            max_tokens: 150,
            presence_penalty: 1.5,
            frequency_penalty: 0.0,
            stop,
            output: "Hello there!".to_string(),
        }
    }

    #[test]
    fn test_params_line_without_stops() {
        assert_eq!(
            params_line(&entry(Vec::new())),
            "Temp: 0.7 | Tokens: 150 | Pres Pen: 1.5 | Freq Pen: 0"
        );
    }

    #[test]
    fn test_params_line_lists_stops_in_order() {
        let stops = vec!["###".to_string(), "END".to_string()];
        assert_eq!(
            params_line(&entry(stops)),
            "Temp: 0.7 | Tokens: 150 | Pres Pen: 1.5 | Freq Pen: 0 | Stop: ###, END"
        );
    }
}
