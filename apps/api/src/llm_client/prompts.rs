// Shared prompt fragments.
// Each feature that calls the model keeps its own prompts.rs alongside it.

/// Appended to every prompt. The markdown cleaner still runs on the output,
/// since the model does not reliably honor this.
pub const PLAIN_TEXT_INSTRUCTION: &str = "마크다운 문법(굵은 글씨, 제목, 목록 기호, 표, 코드 블록)을 쓰지 말고 \
    평범한 문장으로만 답해줘. 인사말이나 부연 설명 없이 요청한 내용만 답해줘.";

/// Reader framing shared by the law summary prompts.
pub const AUDIENCE_INSTRUCTION: &str = "법률 지식이 없는 일반 시민이 이해할 수 있도록 쉬운 말로 설명해줘.";
