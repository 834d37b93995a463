//! # Quiz Bank Builder
//!
//! 把半结构化的题目文档（单选、多选、判断三个章节，各带参考答案）
//! 转换为统一格式的 JSON 题库
//!
//! ## 架构设计
//!
//! ### ① 解析层（Parser）
//! - `parser/` - 纯文本处理：标点归一化、章节切分、逐题切分、答案块解析
//!
//! ### ② 业务能力层（Services）
//! - `CategoryClassifier` - 关键词分类
//! - `AnswerReconciler` - 内嵌答案与答案块核对
//! - `Assembler` - 校验、组装与排序
//!
//! ### ③ 流程层（Workflow）
//! - `BankFlow` - 一篇文档 → 一份题库
//!
//! ### ④ 应用边界（App）
//! - `App` - 读取源文档、写出 JSON

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod parser;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::{AnswerCheck, Config};
pub use error::{AppError, AppResult};
pub use models::{NormalizedQuestion, QuestionBank, QuestionType};
pub use workflow::{build_question_bank, BankFlow};
