//! 组装服务 - 业务能力层
//!
//! 把三个题型的解析结果校验后组装成最终输出文档

use super::classifier::CategoryClassifier;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{
    category_table, AnswerOption, NormalizedQuestion, ParsedQuestion, QuestionBank,
    QuestionType, RawJudgmentQuestion,
};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// 多个答案文本之间的分隔符
const ANSWER_TEXT_SEPARATOR: &str = "、";

/// 判断题固定的两个选项
pub fn judgment_options() -> Vec<AnswerOption> {
    vec![AnswerOption::new('A', "正确"), AnswerOption::new('B', "错误")]
}

/// 组装器
pub struct Assembler {
    expected_per_section: usize,
}

impl Assembler {
    pub fn new(expected_per_section: usize) -> Self {
        Self {
            expected_per_section,
        }
    }

    /// 为判断题查找答案并分类
    ///
    /// 答案块中缺少任何一题都会终止
    pub fn resolve_judgment(
        questions: Vec<RawJudgmentQuestion>,
        answers: &BTreeMap<u32, char>,
        classifier: &CategoryClassifier,
    ) -> AppResult<Vec<ParsedQuestion>> {
        questions
            .into_iter()
            .map(|q| -> AppResult<ParsedQuestion> {
                let answer = answers
                    .get(&q.index)
                    .copied()
                    .ok_or(ValidationError::MissingJudgmentAnswer { index: q.index })?;
                Ok(ParsedQuestion {
                    question_type: QuestionType::TrueFalse,
                    index: q.index,
                    category: classifier.classify(&q.stem, ""),
                    question: q.stem,
                    options: judgment_options(),
                    answers: vec![answer],
                })
            })
            .collect()
    }

    /// 校验单个题型：数量与题号唯一
    pub fn validate_section(
        &self,
        kind: QuestionType,
        questions: &[ParsedQuestion],
    ) -> AppResult<()> {
        if questions.len() != self.expected_per_section {
            return Err(AppError::count_mismatch(
                kind.label(),
                self.expected_per_section,
                questions.len(),
            ));
        }

        let mut seen = HashSet::new();
        for q in questions {
            if !seen.insert(q.index) {
                return Err(ValidationError::DuplicateIndex {
                    section: kind.label().to_string(),
                    index: q.index,
                }
                .into());
            }
        }
        Ok(())
    }

    /// 组装单道题
    pub fn normalize(question: &ParsedQuestion) -> AppResult<NormalizedQuestion> {
        let kind = question.question_type;
        if question.answers.is_empty() {
            return Err(ValidationError::MissingChoiceAnswer {
                section: kind.label().to_string(),
                index: question.index,
            }
            .into());
        }
        if let Some(key) = question
            .answers
            .iter()
            .find(|key| !question.options.iter().any(|o| o.key == **key))
        {
            return Err(ValidationError::AnswerNotInOptions {
                section: kind.label().to_string(),
                index: question.index,
                key: *key,
            }
            .into());
        }

        let answer_text = question
            .options
            .iter()
            .filter(|o| question.answers.contains(&o.key))
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join(ANSWER_TEXT_SEPARATOR);

        let (learning_point, explanation) = match kind {
            QuestionType::TrueFalse => (
                format!("{} 判断：{}", question.question, answer_text),
                format!("判断结果：{}", answer_text),
            ),
            QuestionType::Single | QuestionType::Multiple => (
                format!("{} 正确答案：{}", question.question, answer_text),
                format!("正确答案：{}", answer_text),
            ),
        };

        Ok(NormalizedQuestion {
            id: format!("{}-{}", kind.id_prefix(), question.index),
            order: question.index,
            question_type: kind,
            question: question.question.clone(),
            options: question.options.clone(),
            correct_options: question.answers.clone(),
            category: question.category,
            source_index: question.index,
            learning_point,
            explanation,
        })
    }

    /// 校验并组装三个题型，按（题型标签, 题号）排序
    pub fn assemble(
        &self,
        single: &[ParsedQuestion],
        multiple: &[ParsedQuestion],
        judgment: &[ParsedQuestion],
    ) -> AppResult<QuestionBank> {
        self.validate_section(QuestionType::Single, single)?;
        self.validate_section(QuestionType::Multiple, multiple)?;
        self.validate_section(QuestionType::TrueFalse, judgment)?;

        let mut questions = single
            .iter()
            .chain(multiple)
            .chain(judgment)
            .map(Self::normalize)
            .collect::<AppResult<Vec<_>>>()?;

        sort_questions(&mut questions);

        info!("✓ 组装完成，共 {} 道题", questions.len());
        debug!(
            "首题 {:?}，末题 {:?}",
            questions.first().map(|q| &q.id),
            questions.last().map(|q| &q.id)
        );

        Ok(QuestionBank {
            categories: category_table(),
            questions,
        })
    }
}

/// 按题型标签的字典序分组，组内按题号升序
pub fn sort_questions(questions: &mut [NormalizedQuestion]) {
    questions.sort_by(|a, b| {
        a.question_type
            .tag()
            .cmp(b.question_type.tag())
            .then(a.source_index.cmp(&b.source_index))
    });
}
