//! 题库生成流程 - 流程层
//!
//! 流程顺序：
//! 1. 切分章节
//! 2. 解析单选 / 多选（内嵌答案）并与答案块核对
//! 3. 解析判断题并按答案块范围展开答案
//! 4. 分类 → 校验 → 组装 → 排序

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ParsedQuestion, QuestionBank, RawSection};
use crate::parser::{
    parse_choice_section, parse_judgment_answer_block, parse_judgment_section, split_document,
};
use crate::services::{AnswerReconciler, Assembler, CategoryClassifier};
use crate::utils::logging::{log_section_parsed, truncate_text};
use tracing::debug;

/// 题库生成流程
///
/// - 不做任何文件读写
/// - 任何一处校验失败都会终止，不产生部分结果
pub struct BankFlow {
    classifier: CategoryClassifier,
    reconciler: AnswerReconciler,
    assembler: Assembler,
    verbose_logging: bool,
}

impl BankFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            classifier: CategoryClassifier::new(),
            reconciler: AnswerReconciler::new(config.answer_check),
            assembler: Assembler::new(config.expected_per_section),
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn run(&self, text: &str) -> AppResult<QuestionBank> {
        let sections = split_document(text)?;

        let single = self.parse_choice(&sections.single)?;
        let multiple = self.parse_choice(&sections.multiple)?;

        let judgment_raw = parse_judgment_section(&sections.judgment.body);
        let judgment_answers = parse_judgment_answer_block(&sections.judgment.answer_block)?;
        self.reconciler
            .check_judgment(&judgment_raw, &judgment_answers)?;
        let judgment =
            Assembler::resolve_judgment(judgment_raw, &judgment_answers, &self.classifier)?;
        log_section_parsed(sections.judgment.kind, judgment.len());
        self.log_questions(&judgment);

        self.assembler.assemble(&single, &multiple, &judgment)
    }

    fn parse_choice(&self, section: &RawSection) -> AppResult<Vec<ParsedQuestion>> {
        let questions = parse_choice_section(&section.body);
        self.reconciler
            .check_choice(section.kind, &questions, &section.answer_block)?;

        let parsed: Vec<ParsedQuestion> = questions
            .into_iter()
            .map(|q| {
                let options_text = q
                    .options
                    .iter()
                    .map(|o| o.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                ParsedQuestion {
                    question_type: section.kind,
                    index: q.index,
                    category: self.classifier.classify(&q.question, &options_text),
                    question: q.question,
                    options: q.options,
                    answers: q.answers,
                }
            })
            .collect();

        log_section_parsed(section.kind, parsed.len());
        self.log_questions(&parsed);
        Ok(parsed)
    }

    fn log_questions(&self, questions: &[ParsedQuestion]) {
        if !self.verbose_logging {
            return;
        }
        for q in questions {
            debug!(
                "[{} {}] {} → {:?} ({})",
                q.question_type.label(),
                q.index,
                truncate_text(&q.question, 40),
                q.answers,
                q.category
            );
        }
    }
}

/// 从整篇文档文本生成题库
pub fn build_question_bank(text: &str, config: &Config) -> AppResult<QuestionBank> {
    BankFlow::new(config).run(text)
}
