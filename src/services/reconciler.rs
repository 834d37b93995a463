//! 答案核对服务 - 业务能力层
//!
//! 选择题答案只取自题干内嵌标注，章节末尾的答案块不参与取值。
//! 本服务把两者对照，发现不一致时按配置告警或终止

use crate::config::AnswerCheck;
use crate::error::{AppResult, ValidationError};
use crate::models::{QuestionType, RawJudgmentQuestion};
use crate::parser::choice::ChoiceQuestion;
use crate::parser::{inline_verdict, parse_choice_answer_block};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// 答案核对服务
pub struct AnswerReconciler {
    mode: AnswerCheck,
}

impl AnswerReconciler {
    pub fn new(mode: AnswerCheck) -> Self {
        Self { mode }
    }

    /// 核对选择题内嵌答案与答案块
    ///
    /// # 返回
    /// 不一致的题目数量（严格模式下遇到第一处不一致即返回错误）
    pub fn check_choice(
        &self,
        kind: QuestionType,
        questions: &[ChoiceQuestion],
        answer_block: &str,
    ) -> AppResult<usize> {
        if self.mode == AnswerCheck::Off {
            return Ok(0);
        }

        let block = parse_choice_answer_block(answer_block, kind);
        if block.is_empty() {
            info!("{}答案块中没有可识别的答案，跳过核对", kind.label());
            return Ok(0);
        }

        let mut mismatches = 0;
        for question in questions {
            let Some(block_answer) = block.get(&question.index) else {
                continue;
            };
            if question.answers.is_empty() || same_letters(&question.answers, block_answer) {
                continue;
            }
            mismatches += 1;
            self.report(
                kind,
                question.index,
                letters(&question.answers),
                letters(block_answer),
            )?;
        }

        debug!(
            "{}答案核对完成: 答案块 {} 条, 不一致 {} 条",
            kind.label(),
            block.len(),
            mismatches
        );
        Ok(mismatches)
    }

    /// 核对判断题题干内嵌符号与答案块
    pub fn check_judgment(
        &self,
        questions: &[RawJudgmentQuestion],
        block: &BTreeMap<u32, char>,
    ) -> AppResult<usize> {
        if self.mode == AnswerCheck::Off {
            return Ok(0);
        }

        let mut mismatches = 0;
        for question in questions {
            let Some(inline) = question.inline_marker.and_then(inline_verdict) else {
                continue;
            };
            let Some(block_answer) = block.get(&question.index) else {
                continue;
            };
            if inline != *block_answer {
                mismatches += 1;
                self.report(
                    QuestionType::TrueFalse,
                    question.index,
                    inline.to_string(),
                    block_answer.to_string(),
                )?;
            }
        }
        Ok(mismatches)
    }

    fn report(
        &self,
        kind: QuestionType,
        index: u32,
        inline: String,
        block: String,
    ) -> AppResult<()> {
        match self.mode {
            AnswerCheck::Strict => Err(ValidationError::AnswerMismatch {
                section: kind.label().to_string(),
                index,
                inline,
                block,
            }
            .into()),
            _ => {
                warn!(
                    "{}第{}题答案不一致: 题干 {}，答案块 {}（以题干为准）",
                    kind.label(),
                    index,
                    inline,
                    block
                );
                Ok(())
            }
        }
    }
}

fn same_letters(a: &[char], b: &[char]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn letters(keys: &[char]) -> String {
    keys.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::AnswerOption;

    fn choice(index: u32, answers: &[char]) -> ChoiceQuestion {
        ChoiceQuestion {
            index,
            question: format!("第{}题", index),
            options: vec![AnswerOption::new('A', "甲"), AnswerOption::new('B', "乙")],
            answers: answers.to_vec(),
        }
    }

    #[test]
    fn test_off_mode_skips() {
        let reconciler = AnswerReconciler::new(AnswerCheck::Off);
        let n = reconciler
            .check_choice(QuestionType::Single, &[choice(1, &['A'])], "B")
            .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_warn_mode_counts_mismatches() {
        let reconciler = AnswerReconciler::new(AnswerCheck::Warn);
        let questions = [choice(1, &['A']), choice(2, &['B']), choice(3, &['A'])];
        let n = reconciler
            .check_choice(QuestionType::Single, &questions, "ABB")
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn test_multiple_answers_compared_as_sets() {
        let reconciler = AnswerReconciler::new(AnswerCheck::Strict);
        let n = reconciler
            .check_choice(QuestionType::Multiple, &[choice(1, &['B', 'A'])], "1.AB")
            .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_strict_mode_fails() {
        let reconciler = AnswerReconciler::new(AnswerCheck::Strict);
        let err = reconciler
            .check_choice(QuestionType::Single, &[choice(4, &['A'])], "4.B")
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::AnswerMismatch { index: 4, .. })
        ));
    }

    #[test]
    fn test_judgment_inline_marker_against_block() {
        let reconciler = AnswerReconciler::new(AnswerCheck::Strict);
        let questions = vec![
            RawJudgmentQuestion {
                index: 1,
                stem: "甲".into(),
                inline_marker: Some('对'),
            },
            RawJudgmentQuestion {
                index: 2,
                stem: "乙".into(),
                inline_marker: Some('错'),
            },
        ];
        let block = BTreeMap::from([(1, 'A'), (2, 'B')]);
        assert_eq!(reconciler.check_judgment(&questions, &block).unwrap(), 0);

        let block = BTreeMap::from([(1, 'A'), (2, 'A')]);
        assert!(reconciler.check_judgment(&questions, &block).is_err());
    }
}
