use super::category::{CategoryEntry, CategoryId};
use serde::Serialize;

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// 单选题
    Single,
    /// 多选题
    Multiple,
    /// 判断题
    TrueFalse,
}

impl QuestionType {
    /// 输出中的题型标签
    pub fn tag(self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
            QuestionType::TrueFalse => "truefalse",
        }
    }

    /// 题目ID前缀
    pub fn id_prefix(self) -> &'static str {
        match self {
            QuestionType::Single => "SC",
            QuestionType::Multiple => "MC",
            QuestionType::TrueFalse => "TF",
        }
    }

    /// 中文名称（用于日志与错误信息）
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Single => "单选题",
            QuestionType::Multiple => "多选题",
            QuestionType::TrueFalse => "判断题",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub key: char,
    pub text: String,
}

impl AnswerOption {
    pub fn new(key: char, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

/// 选择题的中间结果，逐行扫描时累积
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawChoiceQuestion {
    pub index: u32,
    pub stem: String,
    pub option_lines: Vec<String>,
}

/// 判断题的中间结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawJudgmentQuestion {
    pub index: u32,
    pub stem: String,
    /// 题干末尾被去掉的内嵌判断符号（如 `对`、`×`）
    pub inline_marker: Option<char>,
}

/// 已解析、已分类但尚未组装的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub question_type: QuestionType,
    pub index: u32,
    pub question: String,
    pub options: Vec<AnswerOption>,
    pub answers: Vec<char>,
    pub category: CategoryId,
}

/// 最终输出的题目记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuestion {
    pub id: String,
    pub order: u32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    pub options: Vec<AnswerOption>,
    pub correct_options: Vec<char>,
    pub category: CategoryId,
    pub source_index: u32,
    pub learning_point: String,
    pub explanation: String,
}

/// 输出文档
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBank {
    pub categories: Vec<CategoryEntry>,
    pub questions: Vec<NormalizedQuestion>,
}

impl QuestionBank {
    /// 统计某一题型的题目数量
    pub fn count_of(&self, question_type: QuestionType) -> usize {
        self.questions
            .iter()
            .filter(|q| q.question_type == question_type)
            .count()
    }
}
