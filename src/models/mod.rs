pub mod category;
pub mod question;
pub mod section;

pub use category::{category_table, CategoryEntry, CategoryId, CATEGORY_KEYWORDS};
pub use question::{
    AnswerOption, NormalizedQuestion, ParsedQuestion, QuestionBank, QuestionType,
    RawChoiceQuestion, RawJudgmentQuestion,
};
pub use section::{DocumentSections, RawSection};
