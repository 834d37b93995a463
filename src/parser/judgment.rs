//! 判断题解析
//!
//! 题干末尾的空括号 `()` 是答案占位，答案由答案块单独给出；
//! 若题干末尾已经写了判断符号（如 `(对)`、`(×)`），一并去掉并记下

use super::normalize::{normalize_punctuation, parse_index};
use crate::models::RawJudgmentQuestion;
use phf::phf_map;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 题干内嵌判断符号及其对应答案（`A` 正确 / `B` 错误）
pub static INLINE_VERDICTS: phf::Map<char, char> = phf_map! {
    'T' => 'A',
    't' => 'A',
    '√' => 'A',
    '对' => 'A',
    '真' => 'A',
    '是' => 'A',
    'Y' => 'A',
    'F' => 'B',
    'f' => 'B',
    '×' => 'B',
    '错' => 'B',
    '假' => 'B',
    '否' => 'B',
    'N' => 'B',
};

static INDEX_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.*)$").expect("static regex"));
static EMPTY_PARENS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)$").expect("static regex"));
static INLINE_MARKER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\s*[（(]\s*(?P<mark>[TFtf√×对错真假是否YN])\s*[)）]\s*(?P<tail>[。．.!！?？、,，]*)\s*(?:[（(]?\s*改\s*[)）]?)?\s*$",
    )
    .expect("static regex")
});

/// 去掉题干末尾的判断符号
///
/// 返回清理后的题干与被去掉的符号；符号之后的句末标点保留
pub fn strip_inline_marker(stem: &str) -> (String, Option<char>) {
    let Some(caps) = INLINE_MARKER_SUFFIX.captures(stem) else {
        return (stem.trim().to_string(), None);
    };
    let Some(whole) = caps.get(0) else {
        return (stem.trim().to_string(), None);
    };
    let mark = caps.name("mark").and_then(|m| m.as_str().chars().next());
    let tail = caps.name("tail").map_or("", |m| m.as_str());
    let cleaned = format!("{}{}", stem[..whole.start()].trim_end(), tail);
    (cleaned.trim().to_string(), mark)
}

/// 内嵌判断符号对应的答案字母
pub fn inline_verdict(mark: char) -> Option<char> {
    INLINE_VERDICTS.get(&mark).copied()
}

/// 把判断题章节正文切成逐题记录
pub fn parse_judgment_section(body: &str) -> Vec<RawJudgmentQuestion> {
    let mut questions: Vec<RawJudgmentQuestion> = Vec::new();

    for raw_line in body.trim().lines() {
        let line = normalize_punctuation(raw_line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let index_line = INDEX_LINE.captures(line).and_then(|caps| {
            let index = parse_index(&caps[1])?;
            Some((index, caps[2].trim().to_string()))
        });
        match index_line {
            Some((index, rest)) => {
                let stem = EMPTY_PARENS_SUFFIX.replace(&rest, "");
                questions.push(RawJudgmentQuestion {
                    index,
                    stem: stem.trim().to_string(),
                    inline_marker: None,
                });
            }
            None => {
                if let Some(current) = questions.last_mut() {
                    current.stem.push(' ');
                    current.stem.push_str(line);
                }
            }
        }
    }

    for question in &mut questions {
        let (cleaned, mark) = strip_inline_marker(&question.stem);
        // 题干只剩符号时保留原文
        if !cleaned.is_empty() {
            question.stem = cleaned;
            question.inline_marker = mark;
        }
        if let Some(mark) = question.inline_marker {
            debug!("判断题 {} 去掉内嵌符号 {}", question.index, mark);
        }
    }

    questions
}
