//! 文档解析层
//!
//! 纯函数，只处理内存中的文本

pub mod answer_block;
pub mod choice;
pub mod judgment;
pub mod normalize;
pub mod sections;

pub use answer_block::{parse_choice_answer_block, parse_judgment_answer_block};
pub use choice::{extract_inline_answer, parse_choice_section, ChoiceQuestion};
pub use judgment::{inline_verdict, parse_judgment_section, strip_inline_marker};
pub use normalize::normalize_punctuation;
pub use sections::split_document;
