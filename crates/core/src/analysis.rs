//! Normalization of AI completion text into a `{diagnosis, recommendations}` pair.
//!
//! Models are asked for a JSON object but do not always comply: some wrap it in
//! markdown fences, some answer in prose. Structured replies are parsed; anything
//! else degrades to a plain-text result instead of an error.

use serde::{Deserialize, Serialize};

/// Diagnosis used when a plain-text completion has nothing on its first line
pub const FALLBACK_DIAGNOSIS: &str = "Unable to analyze symptoms";

/// Preliminary assessment returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub diagnosis: String,
    pub recommendations: String,
}

/// How an assessment was recovered from the completion text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedAnalysis {
    /// The model returned the requested JSON object
    Structured(AnalysisResult),
    /// The reply was not usable JSON; built from the raw text
    FallbackPlainText(AnalysisResult),
}

impl ParsedAnalysis {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedAnalysis::FallbackPlainText(_))
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            ParsedAnalysis::Structured(result) | ParsedAnalysis::FallbackPlainText(result) => {
                result
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StructuredReply {
    diagnosis: String,
    recommendations: Recommendations,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Recommendations {
    Text(String),
    List(Vec<String>),
}

impl From<StructuredReply> for AnalysisResult {
    fn from(reply: StructuredReply) -> Self {
        let recommendations = match reply.recommendations {
            Recommendations::Text(text) => text,
            Recommendations::List(items) => items.join("\n"),
        };
        Self {
            diagnosis: reply.diagnosis,
            recommendations,
        }
    }
}

/// Remove markdown code-fence markers anywhere in `text`.
///
/// Both "```json" and bare "```" markers are dropped, each together with a
/// single newline directly after it.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("```") {
        out.push_str(&rest[..start]);
        rest = &rest[start + 3..];
        if let Some(after) = rest.strip_prefix("json") {
            rest = after;
        }
        if let Some(after) = rest.strip_prefix('\n') {
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Parse the completion as the requested JSON object, if it is one
pub fn parse_structured(text: &str) -> Option<AnalysisResult> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str::<StructuredReply>(&cleaned)
        .ok()
        .map(AnalysisResult::from)
}

/// Build a result from unstructured text: first line as the diagnosis,
/// the whole text as the recommendations.
pub fn fallback_plain_text(text: &str) -> AnalysisResult {
    let first_line = text.split('\n').next().unwrap_or_default();
    let diagnosis = if first_line.trim().is_empty() {
        FALLBACK_DIAGNOSIS.to_string()
    } else {
        first_line.to_string()
    };

    AnalysisResult {
        diagnosis,
        recommendations: text.to_string(),
    }
}

/// Turn raw completion text into an assessment. Never fails.
pub fn normalize_completion(text: &str) -> ParsedAnalysis {
    match parse_structured(text) {
        Some(result) => ParsedAnalysis::Structured(result),
        None => ParsedAnalysis::FallbackPlainText(fallback_plain_text(text)),
    }
}
