//! Response assembly — packages cleaned model outputs into the fixed
//! response shape.

use serde::Serialize;

/// One fragment of the multi-sentence summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryElement {
    pub summary_element: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LawSummaryResponse {
    pub law_content: String,
    pub law_summary_content: Vec<SummaryElement>,
    pub background_info: String,
    pub example: String,
    pub agree_logic: String,
    pub disagree_logic: String,
}

/// Cleaned text for each field, before assembly.
#[derive(Debug, Clone, Default)]
pub struct SummaryParts {
    pub law_content: String,
    pub summary: String,
    pub background: String,
    pub example: String,
    pub agree: String,
    pub disagree: String,
}

/// Splits text on every literal `.`, trimming fragments and dropping empty ones.
///
/// Naive on purpose: abbreviations and decimals ("3.5%") are split too.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn assemble(parts: SummaryParts) -> LawSummaryResponse {
    let law_summary_content = split_sentences(&parts.summary)
        .into_iter()
        .map(|summary_element| SummaryElement { summary_element })
        .collect();

    LawSummaryResponse {
        law_content: parts.law_content,
        law_summary_content,
        background_info: parts.background,
        example: parts.example,
        agree_logic: parts.agree,
        disagree_logic: parts.disagree,
    }
}
