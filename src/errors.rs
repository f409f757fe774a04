use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkflowError {
    Validation(String),
    NotFound(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
    Terminal(String),
    Clipboard(String),
}

impl LinkflowError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkflowError::Validation(_) => "E001",
            LinkflowError::NotFound(_) => "E002",
            LinkflowError::FileOperation(_) => "E003",
            LinkflowError::Serialization(_) => "E004",
            LinkflowError::Config(_) => "E005",
            LinkflowError::Terminal(_) => "E006",
            LinkflowError::Clipboard(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkflowError::Validation(_) => "Validation Error",
            LinkflowError::NotFound(_) => "Resource Not Found",
            LinkflowError::FileOperation(_) => "File Operation Error",
            LinkflowError::Serialization(_) => "Serialization Error",
            LinkflowError::Config(_) => "Configuration Error",
            LinkflowError::Terminal(_) => "Terminal Error",
            LinkflowError::Clipboard(_) => "Clipboard Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkflowError::Validation(msg) => msg,
            LinkflowError::NotFound(msg) => msg,
            LinkflowError::FileOperation(msg) => msg,
            LinkflowError::Serialization(msg) => msg,
            LinkflowError::Config(msg) => msg,
            LinkflowError::Terminal(msg) => msg,
            LinkflowError::Clipboard(msg) => msg,
        }
    }

    /// 格式化为简洁输出（状态栏、CLI 输出）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为表单校验类错误
    pub fn is_validation(&self) -> bool {
        matches!(self, LinkflowError::Validation(_))
    }
}

impl fmt::Display for LinkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkflowError {}

// 便捷的构造函数
impl LinkflowError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkflowError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkflowError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkflowError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkflowError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkflowError::Config(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        LinkflowError::Terminal(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkflowError::Clipboard(msg.into())
    }
}

impl From<std::io::Error> for LinkflowError {
    fn from(err: std::io::Error) -> Self {
        LinkflowError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkflowError {
    fn from(err: serde_json::Error) -> Self {
        LinkflowError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkflowError {
    fn from(err: config::ConfigError) -> Self {
        LinkflowError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkflowError {
    fn from(err: toml::ser::Error) -> Self {
        LinkflowError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkflowError>;
