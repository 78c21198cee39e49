use serde::{Deserialize, Serialize};

/// 填空题
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TextQuestion {
    /// 题号
    #[serde(default)]
    pub num: usize,
    /// 题目文本，如"您对食堂的建议是？"
    pub title: String,
    /// 填写时随机选用的答案列表
    #[serde(default)]
    pub texts: Vec<String>,
}

impl TextQuestion {
    pub fn new(num: usize, title: impl Into<String>) -> Self {
        Self {
            num,
            title: title.into(),
            texts: Vec::new(),
        }
    }

    /// 是否还需要生成答案
    pub fn needs_answers(&self) -> bool {
        self.texts.is_empty()
    }
}

/// 题目表（TOML 文件）
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct QuestionSheet {
    /// 问卷链接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub questions: Vec<TextQuestion>,
}

impl QuestionSheet {
    /// 用题目文本构建题目表，题号从 1 开始
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            url: None,
            questions: titles
                .into_iter()
                .enumerate()
                .map(|(i, title)| TextQuestion::new(i + 1, title))
                .collect(),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.questions.iter().filter(|q| q.needs_answers()).count()
    }
}
