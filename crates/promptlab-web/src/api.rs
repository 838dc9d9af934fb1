use gloo_net::http::Request;
use promptlab_core::{PlaygroundRequest, PromptLabError, ResultEntry};

/// Submit every configuration in one request. Transport failures and
/// non-success statuses both surface as `PromptLabError::Http`.
pub async fn generate(request: &PlaygroundRequest) -> Result<Vec<ResultEntry>, PromptLabError> {
    let resp = Request::post("/api/generate")
        .json(request)
        .map_err(|e| PromptLabError::Http(e.to_string()))?
        .send()
        .await
        .map_err(|e| PromptLabError::Http(e.to_string()))?;

    if !resp.ok() {
        return Err(PromptLabError::Http(format!(
            "Generation failed: {}",
            resp.status()
        )));
    }

    resp.json()
        .await
        .map_err(|e| PromptLabError::Http(e.to_string()))
}
