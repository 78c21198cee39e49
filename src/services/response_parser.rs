//! 模型输出解析
//!
//! 模型经常不听话：有时返回纯 JSON，有时包在 ```json 代码块里，
//! 有时只用 ``` 包起来。按顺序尝试每种解析方式，第一个成功的结果为准。

use serde_json::Value;

use crate::models::AnswerSet;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// 解析阶段：输入原始文本，成功时返回答案
pub type Extractor = fn(&str) -> Option<AnswerSet>;

/// 解析链，按顺序尝试
pub const EXTRACTION_CHAIN: [Extractor; 3] = [parse_whole, parse_json_fence, parse_plain_fence];

/// 从模型输出中解析答案，所有阶段都失败时返回 `None`
pub fn extract_answers(content: &str) -> Option<AnswerSet> {
    EXTRACTION_CHAIN
        .iter()
        .find_map(|extractor| extractor(content))
}

/// 整段文本直接作为 JSON 数组解析
pub fn parse_whole(content: &str) -> Option<AnswerSet> {
    parse_array(content)
}

/// 提取第一个 ```json 代码块
pub fn parse_json_fence(content: &str) -> Option<AnswerSet> {
    fenced_block(content, JSON_FENCE).and_then(parse_array)
}

/// 提取第一个 ``` 代码块（不要求语言标记）
pub fn parse_plain_fence(content: &str) -> Option<AnswerSet> {
    fenced_block(content, FENCE).and_then(parse_array)
}

/// 取出 `opening` 之后到下一个 ``` 之间的内容
///
/// 没有闭合标记或内容为空时返回 `None`
fn fenced_block<'a>(content: &'a str, opening: &str) -> Option<&'a str> {
    let start = content.find(opening)? + opening.len();
    let end = start + content[start..].find(FENCE)?;

    if end > start {
        Some(content[start..end].trim())
    } else {
        None
    }
}

fn parse_array(text: &str) -> Option<AnswerSet> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Array(values) => Some(AnswerSet::from_json_values(&values)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<String> {
        extract_answers(content).unwrap_or_default().into_vec()
    }

    #[test]
    fn test_plain_json_array() {
        assert_eq!(extract(r#"["a","b","c"]"#), vec!["a", "b", "c"]);
        assert_eq!(extract("  [\"a\"]\n"), vec!["a"]);
    }

    #[test]
    fn test_json_fenced_block() {
        let content = "好的，以下是回答：\n```json\n[\"x\", \"y\"]\n```\n希望有帮助";
        assert_eq!(extract(content), vec!["x", "y"]);
        assert!(parse_whole(content).is_none());
    }

    #[test]
    fn test_plain_fenced_block() {
        let content = "```\n[\"挺好\", \"一般\"]\n```";
        assert!(parse_json_fence(content).is_none());
        assert_eq!(extract(content), vec!["挺好", "一般"]);
    }

    #[test]
    fn test_seven_elements_truncated_to_five() {
        let content = r#"["1","2","3","4","5","6","7"]"#;
        assert_eq!(extract(content), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_not_json_at_all() {
        assert!(extract_answers("not json at all").is_none());
    }

    #[test]
    fn test_non_array_json_is_rejected() {
        assert!(extract_answers(r#"{"answers": ["a"]}"#).is_none());
        assert!(extract_answers("\"只是一个字符串\"").is_none());
    }

    #[test]
    fn test_non_string_elements_are_stringified() {
        assert_eq!(extract("[1, 2.5, false]"), vec!["1", "2.5", "false"]);
    }

    #[test]
    fn test_unterminated_fence_fails() {
        assert!(extract_answers("```json\n[\"a\"]").is_none());
        assert!(extract_answers("``````").is_none());
    }

    #[test]
    fn test_broken_json_fence_falls_through_to_plain_fence() {
        // ```json 块内容损坏时，第三阶段从第一个 ``` 开始取，会带上 "json" 标记而失败
        let content = "```json\n[\"a\",\n```";
        assert!(parse_json_fence(content).is_none());
        assert!(parse_plain_fence(content).is_none());
        assert!(extract_answers(content).is_none());
    }

    #[test]
    fn test_only_first_fence_is_considered() {
        let content = "```\n说明文字\n```\n```\n[\"a\"]\n```";
        assert!(extract_answers(content).is_none());
    }

    #[test]
    fn test_empty_array_is_a_successful_parse() {
        assert_eq!(extract_answers("[]"), Some(AnswerSet::empty()));
    }
}
