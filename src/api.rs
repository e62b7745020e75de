//! HTTP client for the RAG backend.
//!
//! One typed request/response pair per endpoint. Primary actions (query,
//! upload) log transport failures and hand them back to the caller; the
//! read-only calls degrade to empty/offline values so the settings panel can
//! render without the backend, while a body that does not match its record
//! type is always a hard [`ApiError::Decode`].

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::monitoring::Logger;

/// Backend base URL. Overridable at build time:
/// `RAGCHAT_API_URL=http://rag.internal:8000 dx build`.
pub const API_BASE_URL: &str = match option_env!("RAGCHAT_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// Building the request or its multipart body failed before sending.
    #[error("failed to build request: {0}")]
    Request(String),
    /// A body did not match the expected shape.
    #[error("bad payload: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_web_search: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QueryResponse {
    pub response: String,
}

/// A generation model as listed by `/models`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

/// An embedding model as listed by `/embeddings`. Same wire shape as
/// [`Model`], kept distinct so the two collections cannot be mixed up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingModel {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    #[serde(default)]
    pub ollama: bool,
    #[serde(default)]
    pub qdrant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    /// The fixed value reported when the backend cannot be reached at all.
    pub fn unreachable() -> Self {
        Self {
            ollama: false,
            qdrant: false,
            message: Some("Failed to connect to backend".to_string()),
        }
    }
}

/// Chunking parameters sent alongside an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub embedding_model: Option<String>,
}

/// Error body returned by `/upload` on a non-success status.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UploadErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadErrorBody {
    pub fn into_message(self) -> String {
        self.message
            .unwrap_or_else(|| "Failed to upload file".to_string())
    }
}

/// Submit a chat query. Returns the raw response; the caller checks the
/// success flag and decodes the answer body itself.
pub async fn submit_query(request: &QueryRequest) -> Result<Response, ApiError> {
    let url = format!("{}/query", API_BASE_URL);
    let body = serde_json::to_string(request).map_err(|e| ApiError::Request(e.to_string()))?;

    Request::post(&url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            Logger::error(&format!("Query API error: {}", e));
            ApiError::Network(e.to_string())
        })
}

/// Upload one document as a multipart form. Returns the raw response; on a
/// non-success status the caller decodes [`UploadErrorBody`] from it.
pub async fn upload_file(
    filename: &str,
    data: &[u8],
    config: &UploadConfig,
) -> Result<Response, ApiError> {
    use js_sys::{Array, Uint8Array};
    use web_sys::{Blob, BlobPropertyBag, FormData};

    let url = format!("{}/upload", API_BASE_URL);

    let bytes = Uint8Array::new_with_length(data.len() as u32);
    bytes.copy_from(data);
    let parts = Array::new();
    parts.push(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type("application/octet-stream");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| ApiError::Request("failed to create blob".to_string()))?;

    let form =
        FormData::new().map_err(|_| ApiError::Request("failed to create form data".to_string()))?;
    form.append_with_blob_and_filename("file", &blob, filename)
        .map_err(|_| ApiError::Request("failed to append file to form data".to_string()))?;
    form.append_with_str("chunk_size", &config.chunk_size.to_string())
        .map_err(|_| ApiError::Request("failed to append chunk_size".to_string()))?;
    form.append_with_str("chunk_overlap", &config.chunk_overlap.to_string())
        .map_err(|_| ApiError::Request("failed to append chunk_overlap".to_string()))?;
    if let Some(embedding_model) = &config.embedding_model {
        form.append_with_str("embedding_model", embedding_model)
            .map_err(|_| ApiError::Request("failed to append embedding_model".to_string()))?;
    }

    Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            Logger::error(&format!("Upload API error: {}", e));
            ApiError::Network(e.to_string())
        })
}

/// List generation models. An unreachable backend or an error status yields
/// an empty collection.
pub async fn list_models() -> Result<Vec<Model>, ApiError> {
    fetch_collection("/models").await
}

/// List embedding models. Same degradation as [`list_models`].
pub async fn list_embedding_models() -> Result<Vec<EmbeddingModel>, ApiError> {
    fetch_collection("/embeddings").await
}

/// Fetch backend health. An unreachable backend or an error status yields
/// [`HealthStatus::unreachable`].
pub async fn get_health() -> Result<HealthStatus, ApiError> {
    let url = format!("{}/health", API_BASE_URL);
    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            Logger::error(&format!("Health check API error: {}", e));
            return Ok(HealthStatus::unreachable());
        }
    };

    if !(200..=299).contains(&response.status()) {
        Logger::warn(&format!("GET /health returned HTTP {}", response.status()));
        return Ok(HealthStatus::unreachable());
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn fetch_collection<T>(path: &str) -> Result<Vec<T>, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", API_BASE_URL, path);
    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            Logger::error(&format!("GET {} API error: {}", path, e));
            return Ok(Vec::new());
        }
    };

    if !(200..=299).contains(&response.status()) {
        Logger::warn(&format!("GET {} returned HTTP {}", path, response.status()));
        return Ok(Vec::new());
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_omits_absent_optionals() {
        let request = QueryRequest {
            query: "what is qdrant?".to_string(),
            model_name: None,
            use_web_search: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"query":"what is qdrant?"}"#);
    }

    #[test]
    fn query_request_serializes_optionals_when_set() {
        let request = QueryRequest {
            query: "hi".to_string(),
            model_name: Some("llama3".to_string()),
            use_web_search: Some(true),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"query":"hi","model_name":"llama3","use_web_search":true}"#
        );
    }

    #[test]
    fn query_response_decodes_answer_text() {
        let decoded: QueryResponse = serde_json::from_str(r#"{"response":"42"}"#).unwrap();
        assert_eq!(decoded.response, "42");
    }

    #[test]
    fn model_reads_camel_case_default_flag() {
        let decoded: Vec<Model> = serde_json::from_str(
            r#"[{"name":"llama3","description":"general model","isDefault":true},
                {"name":"phi","description":"small model","isDefault":false}]"#,
        )
        .unwrap();
        assert!(decoded[0].is_default);
        assert!(!decoded[1].is_default);
    }

    #[test]
    fn model_with_mismatched_shape_is_rejected() {
        let result: Result<Vec<Model>, _> = serde_json::from_str(r#"[{"description":"x"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn health_defaults_to_offline() {
        let health = HealthStatus::default();
        assert!(!health.ollama);
        assert!(!health.qdrant);
        assert_eq!(health.message, None);
    }

    #[test]
    fn health_fallback_is_fixed() {
        assert_eq!(
            HealthStatus::unreachable(),
            HealthStatus {
                ollama: false,
                qdrant: false,
                message: Some("Failed to connect to backend".to_string()),
            }
        );
    }

    #[test]
    fn health_decodes_without_message() {
        let decoded: HealthStatus =
            serde_json::from_str(r#"{"ollama":true,"qdrant":true}"#).unwrap();
        assert!(decoded.ollama);
        assert!(decoded.qdrant);
        assert_eq!(decoded.message, None);
    }

    #[test]
    fn upload_error_body_falls_back_when_message_missing() {
        let decoded: UploadErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded.into_message(), "Failed to upload file");

        let decoded: UploadErrorBody =
            serde_json::from_str(r#"{"message":"unsupported file type"}"#).unwrap();
        assert_eq!(decoded.into_message(), "unsupported file type");
    }
}
