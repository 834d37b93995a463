use super::question::QuestionType;

/// 文档中的一个题型章节
///
/// 每次运行从源文档切分一次，之后只读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub kind: QuestionType,
    /// 题目正文（不含答案块）
    pub body: String,
    /// “参考答案：”之后的答案块
    pub answer_block: String,
}

/// 切分后的三个章节
#[derive(Debug, Clone)]
pub struct DocumentSections {
    pub single: RawSection,
    pub multiple: RawSection,
    pub judgment: RawSection,
}
