//! Markdown cleanup for model output.
//!
//! The model is asked for plain text but routinely answers with emphasis,
//! headings, lists and tables. `clean_markdown` strips those markers with an
//! ordered list of regex substitutions, keeping the enclosed text.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered substitutions. Order matters: fences before inline code, table
/// separators before horizontal rules, line markers before emphasis.
static CLEANUP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // Fenced code block delimiters (content is kept)
        (Regex::new(r"(?m)^[ \t]*(?:```|~~~)[^\n]*(?:\n|$)").unwrap(), ""),
        // Inline code spans
        (Regex::new(r"`([^`\n]+)`").unwrap(), "$1"),
        // Blockquote markers
        (Regex::new(r"(?m)^[ \t]*(?:>[ \t]?)+").unwrap(), ""),
        // Heading markers
        (Regex::new(r"(?m)^[ \t]*#{1,6}(?:[ \t]+|$)").unwrap(), ""),
        // Table separator rows: |---|:---:|
        (Regex::new(r"(?m)^[ \t:\-]*\|[ \t:|\-]*(?:\n|$)").unwrap(), ""),
        // Horizontal rules
        (
            Regex::new(r"(?m)^[ \t]*(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})(?:\n|$)")
                .unwrap(),
            "",
        ),
        // Bullet markers
        (Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap(), ""),
        // Bold
        (Regex::new(r"\*\*([^*\n]+?)\*\*").unwrap(), "$1"),
        (
            Regex::new(r"(^|[^A-Za-z0-9_])__([^_\n]+?)__($|[^A-Za-z0-9_])").unwrap(),
            "${1}${2}${3}",
        ),
        // Italic
        (Regex::new(r"\*([^*\s][^*\n]*?)\*").unwrap(), "$1"),
        (
            Regex::new(r"(^|[^A-Za-z0-9_])_([^_\n]+?)_($|[^A-Za-z0-9_])").unwrap(),
            "${1}${2}${3}",
        ),
        // Table pipes: outer first, then inner cell borders
        (Regex::new(r"(?m)^[ \t]*\|[ \t]*").unwrap(), ""),
        (Regex::new(r"(?m)[ \t]*\|[ \t]*$").unwrap(), ""),
        (Regex::new(r"[ \t]*\|[ \t]*").unwrap(), " "),
        // Three or more line breaks (blank lines may hold stray spaces)
        (Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap(), "\n\n"),
    ]
});

/// Strips markdown markers from model output and trims the result.
///
/// Deterministic and idempotent: the rule list is re-applied until the text
/// stops changing, so markers uncovered by an earlier rule are removed too.
/// Terminates because no rule lengthens the text and a same-length change
/// only ever turns a `|` into a space.
pub fn clean_markdown(text: &str) -> String {
    let mut current = clean_once(text);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let cleaned = CLEANUP_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        });
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bold_removed() {
        assert_eq!(clean_markdown("이 법안은 **중요한** 변화다"), "이 법안은 중요한 변화다");
        assert_eq!(clean_markdown("__강조__ 표시"), "강조 표시");
    }

    #[test]
    fn test_emphasis_before_korean_particle_removed() {
        assert_eq!(clean_markdown("_세입자_의 권리"), "세입자의 권리");
        assert_eq!(clean_markdown("__세입자__는 보호된다"), "세입자는 보호된다");
        assert_eq!(clean_markdown("임대인과 _임차인_이 합의"), "임대인과 임차인이 합의");
    }

    #[test]
    fn test_italic_removed() {
        assert_eq!(clean_markdown("_italic_ text"), "italic text");
        assert_eq!(clean_markdown("an *emphasised* word"), "an emphasised word");
    }

    #[test]
    fn test_bold_italic_combined() {
        assert_eq!(clean_markdown("***핵심***"), "핵심");
    }

    #[test]
    fn test_snake_case_untouched() {
        assert_eq!(clean_markdown("see law_content_id"), "see law_content_id");
        assert_eq!(clean_markdown("a_b_c and __x__y"), "a_b_c and __x__y");
    }

    #[test]
    fn test_multiplication_untouched() {
        assert_eq!(clean_markdown("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn test_heading_removed() {
        assert_eq!(clean_markdown("# 요약\n본문"), "요약\n본문");
        assert_eq!(clean_markdown("### 배경"), "배경");
    }

    #[test]
    fn test_hashtag_without_space_kept() {
        assert_eq!(clean_markdown("#법안"), "#법안");
    }

    #[test]
    fn test_inline_code_removed() {
        assert_eq!(clean_markdown("call `generate` now"), "call generate now");
    }

    #[test]
    fn test_code_block_fences_removed() {
        let input = "예시:\n```text\n임대료 5% 상한\n```\n끝";
        assert_eq!(clean_markdown(input), "예시:\n임대료 5% 상한\n끝");
    }

    #[test]
    fn test_blockquote_removed() {
        assert_eq!(clean_markdown("> 인용문\n> 둘째 줄"), "인용문\n둘째 줄");
    }

    #[test]
    fn test_nested_blockquote_removed_in_one_call() {
        assert_eq!(clean_markdown("> > > > > > 인용"), "인용");
        assert_eq!(clean_markdown(">>>> 인용"), "인용");
    }

    #[test]
    fn test_bullets_removed() {
        let input = "- 첫째\n* 둘째\n+ 셋째";
        assert_eq!(clean_markdown(input), "첫째\n둘째\n셋째");
    }

    #[test]
    fn test_numbered_list_kept() {
        assert_eq!(clean_markdown("1. 첫째\n2. 둘째"), "1. 첫째\n2. 둘째");
    }

    #[test]
    fn test_table_pipes_removed() {
        let input = "| 구분 | 내용 |\n|---|:---:|\n| 현행 | 1회 |";
        assert_eq!(clean_markdown(input), "구분 내용\n현행 1회");
    }

    #[test]
    fn test_horizontal_rule_removed() {
        assert_eq!(clean_markdown("위\n---\n아래"), "위\n아래");
    }

    #[test]
    fn test_blank_lines_collapsed() {
        assert_eq!(clean_markdown("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean_markdown("a\n \n\t\n\nb"), "a\n\nb");
        assert_eq!(clean_markdown("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_nested_markers_removed() {
        assert_eq!(clean_markdown("> # **제목**"), "제목");
        assert_eq!(clean_markdown("- **찬성**: 세입자 보호"), "찬성: 세입자 보호");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "이 법안은 전세 계약 갱신을 2회로 늘린다. 세입자의 주거 안정이 목적이다.";
        assert_eq!(clean_markdown(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_markdown(""), "");
        assert_eq!(clean_markdown("   \n\n "), "");
    }

    #[test]
    fn test_idempotent_on_realistic_output() {
        let samples = [
            "## 법안 요약\n\n**주택임대차보호법** 개정안은 _세입자_의 갱신 요구권을 확대합니다.\n\n\n\n- 갱신 횟수: 1회 → 2회\n- 임대료 상한: `5%`",
            "| 항목 | 현행 | 개정 |\n| --- | --- | --- |\n| 갱신 | 1회 | 2회 |",
            "> **참고**\n> ```\n> 코드\n> ```",
            "***강조*** 와 **굵게** 그리고 *기울임*",
            "* * *\n- - -\n___",
            "`a`b`c`",
            ">>>*>>*|",
            "- >>>> `.+_",
            "> > 인용",
        ];
        for sample in samples {
            let once = clean_markdown(sample);
            assert_eq!(clean_markdown(&once), once, "not idempotent for {sample:?}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2_000))]

        #[test]
        fn test_clean_markdown_idempotent(input in r"[#*_>`|+~:. \t\n가a1-]{0,48}") {
            let once = clean_markdown(&input);
            prop_assert_eq!(clean_markdown(&once), once);
        }

        #[test]
        fn test_clean_markdown_never_grows(input in r"[#*_>`|+~:. \t\n가a1-]{0,48}") {
            prop_assert!(clean_markdown(&input).len() <= input.len());
        }
    }
}
