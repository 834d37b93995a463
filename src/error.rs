use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档结构 / 解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 数据校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文档解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// 找不到题型标题
    #[error("未找到章节标题: {section}，请检查文档标题格式")]
    SectionNotFound { section: String },
    /// 章节缺少“参考答案：”分隔
    #[error("章节 {section} 缺少参考答案分隔符")]
    AnswerDelimiterMissing { section: String },
    /// 答案块范围无法解析
    #[error("无法解析答案块中的题号范围: {token}")]
    InvalidAnswerScope { token: String },
}

/// 数据校验错误
#[derive(Debug, Error)]
pub enum ValidationError {
    /// 题目数量不符
    #[error("{section}数量解析错误：期望 {expected}，实际 {actual}")]
    CountMismatch {
        section: String,
        expected: usize,
        actual: usize,
    },
    /// 题号重复
    #[error("{section}第{index}题题号重复")]
    DuplicateIndex { section: String, index: u32 },
    /// 判断题没有对应答案
    #[error("未找到判断题第{index}题的答案，请检查答案块。")]
    MissingJudgmentAnswer { index: u32 },
    /// 选择题题干中没有内嵌答案
    #[error("{section}第{index}题未找到内嵌答案")]
    MissingChoiceAnswer { section: String, index: u32 },
    /// 答案字母不在选项中
    #[error("{section}第{index}题的答案 {key} 不在选项中")]
    AnswerNotInOptions {
        section: String,
        index: u32,
        key: char,
    },
    /// 内嵌答案与答案块不一致（严格模式）
    #[error("{section}第{index}题答案不一致: 题干 {inline}，答案块 {block}")]
    AnswerMismatch {
        section: String,
        index: u32,
        inline: String,
        block: String,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// TOML 配置解析失败
    #[error("TOML配置解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建章节缺失错误
    pub fn section_not_found(section: impl Into<String>) -> Self {
        AppError::Parse(ParseError::SectionNotFound {
            section: section.into(),
        })
    }

    /// 创建数量不符错误
    pub fn count_mismatch(section: impl Into<String>, expected: usize, actual: usize) -> Self {
        AppError::Validation(ValidationError::CountMismatch {
            section: section.into(),
            expected,
            actual,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::SerializeFailed(err))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
