//! 章节切分
//!
//! 按固定标题把源文档切成单选、多选、判断三个章节，
//! 再在每个章节最后一个“参考答案：”处拆出答案块

use crate::error::{AppError, AppResult, ParseError};
use crate::models::{DocumentSections, QuestionType, RawSection};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 答案块分隔符
pub const ANSWER_DELIMITER: &str = "参考答案：";

static SINGLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"一、单选题[（(]\d+题[）)]").expect("static regex"));
static MULTIPLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*二、多选题[（(]\d+题[）)]").expect("static regex"));
static JUDGMENT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*三、判断题[（(]\d+题[）)]").expect("static regex"));

/// 切分整篇文档
pub fn split_document(text: &str) -> AppResult<DocumentSections> {
    let single = SINGLE_HEADER
        .find(text)
        .ok_or_else(|| AppError::section_not_found(QuestionType::Single.label()))?;
    let multiple = MULTIPLE_HEADER
        .find_at(text, single.end())
        .ok_or_else(|| AppError::section_not_found(QuestionType::Multiple.label()))?;
    let judgment = JUDGMENT_HEADER
        .find_at(text, multiple.end())
        .ok_or_else(|| AppError::section_not_found(QuestionType::TrueFalse.label()))?;

    let sections = DocumentSections {
        single: split_answer_block(
            QuestionType::Single,
            &text[single.end()..multiple.start()],
        )?,
        multiple: split_answer_block(
            QuestionType::Multiple,
            &text[multiple.end()..judgment.start()],
        )?,
        judgment: split_answer_block(QuestionType::TrueFalse, &text[judgment.end()..])?,
    };

    debug!(
        "章节切分完成: 单选 {} 字节, 多选 {} 字节, 判断 {} 字节",
        sections.single.body.len(),
        sections.multiple.body.len(),
        sections.judgment.body.len()
    );

    Ok(sections)
}

/// 在最后一个分隔符处拆分正文与答案块
fn split_answer_block(kind: QuestionType, chunk: &str) -> AppResult<RawSection> {
    let (body, answer_block) = chunk.rsplit_once(ANSWER_DELIMITER).ok_or_else(|| {
        AppError::Parse(ParseError::AnswerDelimiterMissing {
            section: kind.label().to_string(),
        })
    })?;

    Ok(RawSection {
        kind,
        body: body.to_string(),
        answer_block: answer_block.trim().to_string(),
    })
}
