//! 选择题解析
//!
//! 逐行扫描单选/多选章节正文，按“题干 → 选项”两个状态累积每道题，
//! 再从题干中取出内嵌答案、从选项行中切出各个选项

use super::normalize::{normalize_punctuation, to_ascii_digits};
use crate::models::{AnswerOption, RawChoiceQuestion};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static INDEX_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.?\s*(.*)$").expect("static regex"));
static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-F][.|、]\s*").expect("static regex"));
static INLINE_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([A-F]+)\s*\)").expect("static regex"));
static OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-F][.|、]").expect("static regex"));

/// 选择题解析结果（未分类）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceQuestion {
    pub index: u32,
    /// 去掉内嵌答案后的题干
    pub question: String,
    pub options: Vec<AnswerOption>,
    /// 内嵌答案字母，按标注顺序
    pub answers: Vec<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Stem,
    Options,
}

/// 逐行累积器
#[derive(Debug, Default)]
struct ChoiceAccumulator {
    current: Option<(RawChoiceQuestion, ScanState)>,
    finished: Vec<RawChoiceQuestion>,
}

impl ChoiceAccumulator {
    fn feed(&mut self, line: &str) {
        if let Some(caps) = INDEX_LINE.captures(line) {
            let digits = to_ascii_digits(&caps[1]);
            let reopens_current = self
                .current
                .as_ref()
                .zip(digits.as_deref())
                .is_some_and(|((q, _), d)| q.index.to_string() == d);
            if !reopens_current {
                if let Some(index) = digits.and_then(|d| d.parse::<u32>().ok()) {
                    self.flush();
                    self.current = Some((
                        RawChoiceQuestion {
                            index,
                            stem: caps[2].trim().to_string(),
                            option_lines: Vec::new(),
                        },
                        ScanState::Stem,
                    ));
                    return;
                }
            }
        }

        // 第一道题之前的内容忽略
        let Some((question, state)) = self.current.as_mut() else {
            return;
        };

        if OPTION_LINE.is_match(line) {
            *state = ScanState::Options;
        }
        match state {
            ScanState::Options => question.option_lines.push(line.to_string()),
            ScanState::Stem => {
                question.stem.push(' ');
                question.stem.push_str(line);
            }
        }
    }

    fn flush(&mut self) {
        if let Some((question, _)) = self.current.take() {
            self.finished.push(question);
        }
    }

    fn finish(mut self) -> Vec<RawChoiceQuestion> {
        self.flush();
        self.finished
    }
}

/// 把章节正文切成逐题的原始记录
pub fn tokenize_choice_section(body: &str) -> Vec<RawChoiceQuestion> {
    let mut acc = ChoiceAccumulator::default();
    for raw_line in body.trim().lines() {
        let line = normalize_punctuation(raw_line);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        acc.feed(line);
    }
    acc.finish()
}

/// 从题干中取出括号内的答案字母
///
/// 返回去掉答案后的题干与答案字母；没有内嵌答案时题干原样返回（去首尾空白）
pub fn extract_inline_answer(stem: &str) -> (String, Vec<char>) {
    let Some(caps) = INLINE_ANSWER.captures(stem) else {
        return (stem.trim().to_string(), Vec::new());
    };
    let (Some(whole), Some(letters)) = (caps.get(0), caps.get(1)) else {
        return (stem.trim().to_string(), Vec::new());
    };

    let mut answers = Vec::new();
    for c in letters.as_str().chars() {
        if !answers.contains(&c) {
            answers.push(c);
        }
    }
    let cleaned = format!("{}{}", &stem[..whole.start()], &stem[whole.end()..]);
    (cleaned.trim().to_string(), answers)
}

/// 把选项行拼起来，按 `A.`/`A、`/`A|` 标记切出各个选项
///
/// 同一题中重复出现的选项字母视为正文（如 `A.DNA.` 中的第二个 `A.`）
pub fn split_options(option_lines: &[String]) -> Vec<AnswerOption> {
    let blob = normalize_punctuation(&option_lines.join(" "));

    let mut starts: Vec<(usize, char)> = Vec::new();
    for m in OPTION_MARKER.find_iter(&blob) {
        let Some(key) = m.as_str().chars().next() else {
            continue;
        };
        if starts.iter().any(|(_, k)| *k == key) {
            continue;
        }
        starts.push((m.start(), key));
    }

    let mut options = Vec::with_capacity(starts.len());
    for (i, (start, key)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(blob.len(), |(next, _)| *next);
        let segment = &blob[*start..end];
        // 跳过字母与标记符号
        let text: String = segment.chars().skip(2).collect();
        options.push(AnswerOption::new(*key, text.trim()));
    }
    options
}

/// 解析整个选择题章节
pub fn parse_choice_section(body: &str) -> Vec<ChoiceQuestion> {
    tokenize_choice_section(body)
        .into_iter()
        .map(|raw| {
            let (question, answers) = extract_inline_answer(&raw.stem);
            let options = split_options(&raw.option_lines);
            debug!(
                "选择题 {}: {} 个选项, 内嵌答案 {:?}",
                raw.index,
                options.len(),
                answers
            );
            ChoiceQuestion {
                index: raw.index,
                question,
                options,
                answers,
            }
        })
        .collect()
}
