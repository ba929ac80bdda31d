// Prompt templates for the law summary pipeline.
// Every template carries the `{law_content}` placeholder, replaced verbatim.

use crate::llm_client::prompts::{AUDIENCE_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};

const LAW_CONTENT_PLACEHOLDER: &str = "{law_content}";

/// One-line summary. Feeds `lawContent`.
pub const LAW_CONTENT_PROMPT_TEMPLATE: &str = "다음 법안의 내용을 100자 이내의 한 문장으로 요약해줘.

법안 내용:
{law_content}";

/// Short summary sentences. Split on `.` into `lawSummaryContent`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "다음 법안의 핵심 내용을 3~5개의 짧은 문장으로 요약해줘. \
각 문장은 50자 이내로 쓰고 반드시 마침표로 끝내줘. 번호나 글머리 기호는 붙이지 마.

법안 내용:
{law_content}";

/// Why the bill was proposed. Feeds `backgroundInfo`.
pub const BACKGROUND_PROMPT_TEMPLATE: &str = "다음 법안이 발의된 배경과 이유를 300자 이내로 설명해줘.

법안 내용:
{law_content}";

/// A concrete everyday example. Feeds `example`.
pub const EXAMPLE_PROMPT_TEMPLATE: &str = "다음 법안이 시행되면 일상생활에서 어떤 변화가 생기는지 \
정확히 한 가지 예시를 들어 200자 이내로 설명해줘.

법안 내용:
{law_content}";

/// Argument in favor. Feeds `agreeLogic`.
pub const AGREE_PROMPT_TEMPLATE: &str = "다음 법안에 찬성하는 입장의 핵심 논리를 200자 이내로 설명해줘.

법안 내용:
{law_content}";

/// Argument against. Feeds `disagreeLogic`.
pub const DISAGREE_PROMPT_TEMPLATE: &str = "다음 법안에 반대하는 입장의 핵심 논리를 200자 이내로 설명해줘.

법안 내용:
{law_content}";

/// Single free-form summary for the legacy `/bill` route.
pub const BILL_PROMPT_TEMPLATE: &str = "{law_content}에 대해 요약해줘";

/// The six prompts issued per law summary request, one per response field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryPrompt {
    LawContent,
    Summary,
    Background,
    Example,
    Agree,
    Disagree,
}

impl SummaryPrompt {
    pub const ALL: [SummaryPrompt; 6] = [
        SummaryPrompt::LawContent,
        SummaryPrompt::Summary,
        SummaryPrompt::Background,
        SummaryPrompt::Example,
        SummaryPrompt::Agree,
        SummaryPrompt::Disagree,
    ];

    fn template(self) -> &'static str {
        match self {
            SummaryPrompt::LawContent => LAW_CONTENT_PROMPT_TEMPLATE,
            SummaryPrompt::Summary => SUMMARY_PROMPT_TEMPLATE,
            SummaryPrompt::Background => BACKGROUND_PROMPT_TEMPLATE,
            SummaryPrompt::Example => EXAMPLE_PROMPT_TEMPLATE,
            SummaryPrompt::Agree => AGREE_PROMPT_TEMPLATE,
            SummaryPrompt::Disagree => DISAGREE_PROMPT_TEMPLATE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SummaryPrompt::LawContent => "law_content",
            SummaryPrompt::Summary => "summary",
            SummaryPrompt::Background => "background",
            SummaryPrompt::Example => "example",
            SummaryPrompt::Agree => "agree",
            SummaryPrompt::Disagree => "disagree",
        }
    }

    /// Interpolates the law text into this prompt's template.
    pub fn build(self, law_content: &str) -> String {
        format!(
            "{}\n\n{}\n{}",
            self.template().replace(LAW_CONTENT_PLACEHOLDER, law_content),
            AUDIENCE_INSTRUCTION,
            PLAIN_TEXT_INSTRUCTION
        )
    }
}

/// Builds the legacy `/bill` prompt. No extra instructions, matching the
/// original single-prompt behavior.
pub fn build_bill_prompt(bill_title: &str) -> String {
    BILL_PROMPT_TEMPLATE.replace(LAW_CONTENT_PLACEHOLDER, bill_title)
}
