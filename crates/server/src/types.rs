use serde::{Deserialize, Serialize};
use textrelay_common::{Result, TextRelayError};
use textrelay_split::Language;

fn default_split_method() -> String {
    "chapter".to_string()
}

fn default_split_length() -> usize {
    1000
}

fn default_language() -> Language {
    Language::Chinese
}

fn default_part_number() -> usize {
    1
}

/// Batch processing request (form submission)
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// OpenRouter API key
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// Document language
    #[serde(default = "default_language")]
    pub language: Language,

    /// Split method token ("chapter" | "count")
    #[serde(default = "default_split_method")]
    pub split_method: String,

    /// Characters/words per part
    #[serde(default = "default_split_length")]
    pub split_length: usize,

    /// Instruction prepended to every segment
    pub prompt: String,

    /// The document to split and process
    pub additional_text: String,
}

/// Batch processing response
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    /// Per-segment completion results, input order
    pub results: Vec<String>,
}

/// Split-only request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRequest {
    /// The document to split
    pub additional_text: String,

    #[serde(default = "default_split_method")]
    pub split_method: String,

    #[serde(default = "default_language")]
    pub language: Language,

    #[serde(default = "default_split_length")]
    pub split_length: usize,
}

/// Split-only response
#[derive(Debug, Serialize)]
pub struct SplitResponse {
    /// Ordered segment sequence
    pub segments: Vec<String>,

    pub count: usize,
}

/// Single-segment completion request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    pub api_key: String,

    pub model: String,

    pub prompt: String,

    /// One segment of the document
    #[serde(alias = "chapter")]
    pub segment: String,

    /// Client-side bookkeeping only
    #[serde(default = "default_part_number")]
    pub part_number: usize,

    #[serde(default = "default_part_number")]
    pub total_parts: usize,
}

/// Single-segment completion response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteResponse {
    pub result: String,

    pub part_number: usize,

    pub total_parts: usize,

    /// Local time, "%Y-%m-%d %H:%M:%S"
    pub timestamp: String,
}

/// Save/download request
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub results: Vec<String>,
}

/// Save/download response; the client writes the file itself
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub content: String,

    pub filename: String,

    pub timestamp: String,
}

/// Reject empty required request fields
pub fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TextRelayError::missing_field(name));
    }
    Ok(())
}

/// Join per-part results into one downloadable document
pub fn join_results(results: &[String]) -> String {
    results.join("\n\n")
}
