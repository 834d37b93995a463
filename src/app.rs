//! 应用边界
//!
//! 负责读取源文档、运行题库生成流程、写出 JSON。
//! 只有全部校验通过后才写文件：先写临时文件，再重命名覆盖

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::QuestionBank;
use crate::utils::logging::{log_startup, print_summary};
use crate::workflow::BankFlow;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    flow: BankFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);
        let flow = BankFlow::new(&config);
        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<QuestionBank> {
        let input_path = &self.config.input_path;
        info!("📖 读取源文档: {}", input_path);
        let text = fs::read_to_string(input_path)
            .await
            .map_err(|e| AppError::file_read_failed(input_path, e))?;

        let bank = self.flow.run(&text)?;

        write_output(&self.config.output_path, &bank).await?;
        print_summary(&bank, &self.config.output_path);

        Ok(bank)
    }
}

/// 序列化并写出题库
async fn write_output(output_path: &str, bank: &QuestionBank) -> AppResult<()> {
    let json = serde_json::to_string_pretty(bank)?;

    let path = Path::new(output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::file_write_failed(parent.to_string_lossy(), e))?;
    }

    let tmp_path = format!("{}.tmp", output_path);
    fs::write(&tmp_path, json)
        .await
        .map_err(|e| AppError::file_write_failed(&tmp_path, e))?;
    fs::rename(&tmp_path, path)
        .await
        .map_err(|e| AppError::file_write_failed(output_path, e))?;

    info!("✓ 已写入 {}", output_path);
    Ok(())
}
