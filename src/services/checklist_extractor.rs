use std::fmt;

use crate::models::checklist::ChecklistData;

/// Raised when a model reply cannot be decoded into checklist data. Carries
/// the raw text verbatim so the caller can show it to the user instead of
/// silently dropping the reply.
#[derive(Debug)]
pub struct MalformedChecklistError {
    pub raw_text: String,
    pub reason: String,
}

impl fmt::Display for MalformedChecklistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed checklist data: {}", self.reason)
    }
}

impl std::error::Error for MalformedChecklistError {}

/// Locates the JSON payload embedded in a (possibly markdown-fenced) reply and
/// decodes it. Both syntax errors and structural mismatches (right field
/// names, wrong types) fail closed with `MalformedChecklistError`.
pub fn extract_checklist(text: &str) -> Result<ChecklistData, MalformedChecklistError> {
    let candidate = json_candidate(text);

    serde_json::from_str(candidate).map_err(|err| MalformedChecklistError {
        raw_text: text.to_string(),
        reason: err.to_string(),
    })
}

/// The first ```json block if present, else the first fenced block of any
/// kind, else the whole trimmed reply.
fn json_candidate(text: &str) -> &str {
    if let Some(inner) = fenced_block(text, "```json") {
        return inner;
    }
    if let Some(inner) = fenced_block(text, "```") {
        return inner;
    }
    text.trim()
}

fn fenced_block<'a>(text: &'a str, fence: &str) -> Option<&'a str> {
    let start = text.find(fence)? + fence.len();
    let rest = &text[start..];
    // A reply truncated at max_tokens can open a fence and never close it;
    // the remainder after the opening fence is still the candidate.
    match rest.find("```") {
        Some(end) => Some(rest[..end].trim()),
        None => Some(rest.trim()),
    }
}
