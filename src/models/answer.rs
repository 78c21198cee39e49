//! 候选答案集合

use serde::Serialize;
use serde_json::Value;
use std::ops::Deref;

/// 每道题最多保留的答案数
pub const MAX_ANSWERS: usize = 5;

/// 一道题的候选答案（最多 5 个，保持顺序，不去重）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<String>);

impl AnswerSet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// 从 JSON 数组元素构建，超过 5 个截断
    ///
    /// 非字符串元素统一转为紧凑的 JSON 文本：`true`、`null`、`1.0`、`{"a":1}`，
    /// 不会写成 `True`、`None`、`{'a': 1}` 之类的非 JSON 形式，下游按 JSON 文本处理即可。
    pub fn from_json_values(values: &[Value]) -> Self {
        Self(
            values
                .iter()
                .take(MAX_ANSWERS)
                .map(|value| match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().take(MAX_ANSWERS).map(Into::into).collect())
    }
}

impl Deref for AnswerSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for AnswerSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<AnswerSet> for Vec<String> {
    fn from(answers: AnswerSet) -> Self {
        answers.0
    }
}
