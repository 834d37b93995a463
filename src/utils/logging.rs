//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::config::Config;
use crate::models::{QuestionBank, QuestionType};
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 题库生成开始 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 源文档: {}", config.input_path);
    info!("📦 输出文件: {}", config.output_path);
    info!("📊 每种题型应有: {} 题", config.expected_per_section);
    info!("{}", "=".repeat(60));
}

/// 记录单个章节解析完成
///
/// # 参数
/// - `kind`: 题型
/// - `count`: 解析出的题目数量
pub fn log_section_parsed(kind: QuestionType, count: usize) {
    info!("✓ {}解析完成: {} 题", kind.label(), count);
}

/// 打印最终统计信息
///
/// # 参数
/// - `bank`: 生成的题库
/// - `output_path`: 输出文件路径
pub fn print_summary(bank: &QuestionBank, output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 题库生成完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("Generated {} with {} questions", output_path, bank.questions.len());
    info!("- Single choice: {}", bank.count_of(QuestionType::Single));
    info!("- Multiple choice: {}", bank.count_of(QuestionType::Multiple));
    info!("- True/False: {}", bank.count_of(QuestionType::TrueFalse));
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
