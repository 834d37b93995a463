use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 答案块核对模式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerCheck {
    /// 不读取选择题答案块
    Off,
    /// 不一致时记录警告
    Warn,
    /// 不一致时终止
    Strict,
}

impl FromStr for AnswerCheck {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(AnswerCheck::Off),
            "warn" => Ok(AnswerCheck::Warn),
            "strict" => Ok(AnswerCheck::Strict),
            _ => Err(()),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 源文档路径
    pub input_path: String,
    /// 输出 JSON 路径
    pub output_path: String,
    /// 每种题型应有的题目数量
    pub expected_per_section: usize,
    /// 答案块核对模式
    pub answer_check: AnswerCheck,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "DEMO.md".to_string(),
            output_path: "data/questions.json".to_string(),
            expected_per_section: 100,
            answer_check: AnswerCheck::Warn,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 文本解析配置，缺失字段使用默认值
    pub fn from_toml_str(content: &str, path: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: path.to_string(),
                source,
            })
        })
    }

    /// 只使用环境变量覆盖默认配置
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 加载配置：`QUIZ_CONFIG` 或 `quiz.toml`（若存在），再用环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("QUIZ_CONFIG").unwrap_or_else(|_| "quiz.toml".to_string());
        let base = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| AppError::file_read_failed(&path, e))?;
            Self::from_toml_str(&content, &path)?
        } else {
            Self::default()
        };
        base.with_env_overrides()
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            input_path: std::env::var("QUIZ_INPUT_PATH").unwrap_or(self.input_path),
            output_path: std::env::var("QUIZ_OUTPUT_PATH").unwrap_or(self.output_path),
            expected_per_section: env_parse("QUIZ_EXPECTED_COUNT", "usize")?
                .unwrap_or(self.expected_per_section),
            answer_check: env_parse("QUIZ_ANSWER_CHECK", "off|warn|strict")?
                .unwrap_or(self.answer_check),
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool")?
                .unwrap_or(self.verbose_logging),
        })
    }
}

fn env_parse<T: FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|_| {
            AppError::Config(ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            })
        }),
        Err(_) => Ok(None),
    }
}
