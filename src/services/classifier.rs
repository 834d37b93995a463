//! 分类服务 - 业务能力层
//!
//! 只负责“给一道题打分类标签”，按关键词表顺序匹配

use crate::models::{CategoryId, CATEGORY_KEYWORDS};

/// 关键词分类器
///
/// 关键词表顺序即优先级，第一个命中的分类胜出，都不命中时归入兜底分类
pub struct CategoryClassifier {
    keywords: &'static [(CategoryId, &'static [&'static str])],
    fallback: CategoryId,
}

impl CategoryClassifier {
    /// 使用内置关键词表创建
    pub fn new() -> Self {
        Self {
            keywords: CATEGORY_KEYWORDS,
            fallback: CategoryId::General,
        }
    }

    /// 对题干和选项文本分类
    pub fn classify(&self, question: &str, options_text: &str) -> CategoryId {
        let combined = format!("{} {}", question, options_text).to_lowercase();
        self.keywords
            .iter()
            .find(|(_, words)| words.iter().any(|kw| combined.contains(&kw.to_lowercase())))
            .map_or(self.fallback, |(id, _)| *id)
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}
