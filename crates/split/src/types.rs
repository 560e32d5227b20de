use serde::{Deserialize, Serialize};
use std::str::FromStr;
use textrelay_common::TextRelayError;

/// How to partition the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitMethod {
    /// Split at chapter headings (第X章 / Chương N)
    Marker,

    /// Split under a character or word budget
    Count,
}

impl FromStr for SplitMethod {
    type Err = TextRelayError;

    /// Parse the request token. Both the form tokens and the canonical
    /// names are accepted; anything else is an invalid split method.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "chapter" | "marker" => Ok(Self::Marker),
            "count" | "chars" => Ok(Self::Count),
            other => Err(TextRelayError::invalid_split_method(other)),
        }
    }
}

/// Document language, fixed enumerated set from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ENG")]
    English,

    #[serde(rename = "中文")]
    Chinese,

    #[serde(rename = "Việt Nam")]
    Vietnamese,
}

impl Language {
    /// Budget unit for count mode: English counts words, everything
    /// else counts characters.
    pub fn unit(&self) -> Unit {
        match self {
            Language::English => Unit::Word,
            Language::Chinese | Language::Vietnamese => Unit::Character,
        }
    }
}

/// Budget unit for count mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Character,
    Word,
}

/// What marker mode does when the document contains no markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroMarkerPolicy {
    /// Tolerant: the whole trimmed document becomes the single segment
    WholeDocument,

    /// Strict: signal `NoMarkersFound`
    Error,
}

/// Splitter configuration
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub method: SplitMethod,
    pub language: Language,

    /// Character or word budget; ignored in marker mode
    pub budget: usize,

    pub zero_marker: ZeroMarkerPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_method_tokens() {
        assert_eq!(SplitMethod::from_str("chapter").unwrap(), SplitMethod::Marker);
        assert_eq!(SplitMethod::from_str("marker").unwrap(), SplitMethod::Marker);
        assert_eq!(SplitMethod::from_str("count").unwrap(), SplitMethod::Count);
        assert_eq!(SplitMethod::from_str("chars").unwrap(), SplitMethod::Count);
    }

    #[test]
    fn test_unknown_split_method_is_rejected() {
        let err = SplitMethod::from_str("paragraph").unwrap_err();
        assert_eq!(err.to_string(), "Invalid split method: paragraph");
    }

    #[test]
    fn test_language_unit_mapping() {
        assert_eq!(Language::English.unit(), Unit::Word);
        assert_eq!(Language::Chinese.unit(), Unit::Character);
        assert_eq!(Language::Vietnamese.unit(), Unit::Character);
    }

    #[test]
    fn test_language_form_tokens() {
        let lang: Language = serde_json::from_str("\"中文\"").unwrap();
        assert_eq!(lang, Language::Chinese);
        let lang: Language = serde_json::from_str("\"ENG\"").unwrap();
        assert_eq!(lang, Language::English);
        let lang: Language = serde_json::from_str("\"Việt Nam\"").unwrap();
        assert_eq!(lang, Language::Vietnamese);
    }
}
