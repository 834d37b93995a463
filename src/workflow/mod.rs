//! 流程层
//!
//! 定义“一篇文档 → 一份题库”的完整处理流程，只依赖解析层与业务能力层

pub mod bank_flow;

pub use bank_flow::{build_question_bank, BankFlow};
