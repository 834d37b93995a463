//! 答案块解析
//!
//! 判断题答案块形如 `1-5:√×√√× 6:×`，按范围展开为逐题答案；
//! 选择题答案块只用于和题干内嵌答案核对

use super::normalize::{normalize_punctuation, parse_index};
use crate::error::{AppError, AppResult, ParseError};
use crate::models::QuestionType;
use phf::phf_set;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// 答案块中表示“正确”的符号，其余符号一律视为“错误”
static TRUE_SYMBOLS: phf::Set<char> = phf_set! { '√', 'T', 'Y', '1' };

static SCOPED_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:-(\d+))?(?:[:.、](.*))?$").expect("static regex")
});

/// 判断题答案符号对应的答案字母
pub fn judgment_symbol_to_key(symbol: char) -> char {
    if TRUE_SYMBOLS.contains(&symbol) {
        'A'
    } else {
        'B'
    }
}

/// 解析题号范围：`12` 或 `12-14`（闭区间），题号可为全角数字
pub fn parse_scope(scope: &str) -> AppResult<(u32, u32)> {
    let invalid = || {
        AppError::Parse(ParseError::InvalidAnswerScope {
            token: scope.to_string(),
        })
    };
    let parts: Vec<&str> = scope
        .split('-')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let (start, end) = match parts.as_slice() {
        [single] => (single, single),
        [start, end] => (start, end),
        _ => return Err(invalid()),
    };
    let start = parse_index(start).ok_or_else(invalid)?;
    let end = parse_index(end).ok_or_else(invalid)?;
    if start > end {
        return Err(invalid());
    }
    Ok((start, end))
}

/// 解析判断题答案块，返回 题号 → 答案字母（`A` 正确 / `B` 错误）
pub fn parse_judgment_answer_block(block: &str) -> AppResult<BTreeMap<u32, char>> {
    let mut answers = BTreeMap::new();

    let normalized = normalize_punctuation(block);
    for token in normalized.split_whitespace() {
        let Some((scope, pattern)) = token.split_once(':') else {
            continue;
        };
        let (start, end) = parse_scope(scope)?;
        let pattern = pattern.trim();

        let span = end.saturating_sub(start) as usize + 1;
        let symbols = pattern.chars().count();
        if span != symbols {
            warn!(
                "判断题答案块 {} 覆盖 {} 题，但给出 {} 个符号",
                token, span, symbols
            );
        }

        for (index, symbol) in (start..=end).zip(pattern.chars()) {
            answers.insert(index, judgment_symbol_to_key(symbol));
        }
    }

    debug!("判断题答案块解析出 {} 个答案", answers.len());
    Ok(answers)
}

/// 解析选择题答案块，返回 题号 → 答案字母
///
/// 带题号的片段（`1-5:ABCDA`、`6.BD`、`7、C`）重新定位题号；
/// 不带题号的纯字母片段接着上一个题号继续，题号到达 `u32::MAX` 后不再续写。
/// 单选题每个字母对应一题；多选题每组字母对应一题，组之间用 `,` `/` `，` 分隔。
/// 无法识别的片段忽略
pub fn parse_choice_answer_block(
    block: &str,
    kind: QuestionType,
) -> BTreeMap<u32, Vec<char>> {
    let mut answers = BTreeMap::new();
    let mut cursor = Some(1u32);

    let normalized = normalize_punctuation(block).to_ascii_uppercase();
    for token in normalized.split_whitespace() {
        if let Some(caps) = SCOPED_TOKEN.captures(token) {
            let Some(start) = parse_index(&caps[1]) else {
                continue;
            };
            cursor = Some(start);
            let payload = caps.get(3).map_or("", |m| m.as_str());
            if !payload.is_empty() {
                cursor = assign_payload(payload, kind, start, &mut answers);
            }
            if let Some(end) = caps.get(2).and_then(|m| parse_index(m.as_str())) {
                if !payload.is_empty() && cursor != end.checked_add(1) {
                    warn!("{}答案块 {} 的答案数与题号范围不符", kind.label(), token);
                }
            }
        } else if token.chars().all(|c| is_choice_letter(c) || is_group_separator(c)) {
            match cursor {
                Some(next) => cursor = assign_payload(token, kind, next, &mut answers),
                None => debug!("题号已到上限，忽略答案片段: {}", token),
            }
        } else {
            debug!("忽略无法识别的答案片段: {}", token);
        }
    }

    answers
}

fn is_choice_letter(c: char) -> bool {
    ('A'..='F').contains(&c)
}

fn is_group_separator(c: char) -> bool {
    matches!(c, ',' | '/' | '，')
}

/// 从 `start` 开始写入答案，返回下一个题号；题号溢出时返回 `None` 并停止写入
fn assign_payload(
    payload: &str,
    kind: QuestionType,
    start: u32,
    answers: &mut BTreeMap<u32, Vec<char>>,
) -> Option<u32> {
    let mut cursor = Some(start);
    match kind {
        QuestionType::Multiple => {
            for group in payload.split(is_group_separator) {
                let mut letters: Vec<char> = Vec::new();
                for c in group.chars().filter(|c| is_choice_letter(*c)) {
                    if !letters.contains(&c) {
                        letters.push(c);
                    }
                }
                if letters.is_empty() {
                    continue;
                }
                let Some(index) = cursor else {
                    break;
                };
                answers.insert(index, letters);
                cursor = index.checked_add(1);
            }
        }
        QuestionType::Single | QuestionType::TrueFalse => {
            for c in payload.chars().filter(|c| is_choice_letter(*c)) {
                let Some(index) = cursor else {
                    break;
                };
                answers.insert(index, vec![c]);
                cursor = index.checked_add(1);
            }
        }
    }
    cursor
}
