use serde::{Deserialize, Serialize};

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - logging: 日志配置
/// - ui: 界面配置
/// - data: 初始数据来源
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：LF，分隔符：__
    /// 示例：LF__UI__SHORT_DOMAIN=sho.rt
    pub fn load(path: Option<&str>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 加载配置，失败时返回错误而不是回退默认值
    pub fn try_load(path: Option<&str>) -> crate::errors::Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => ("config.toml", false),
        };

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（未显式指定时可选）
            .add_source(File::with_name(path).required(required))
            // 2. 从环境变量覆盖，前缀 LF，分隔符 __
            .add_source(
                Environment::with_prefix("LF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<AppConfig>()?)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> crate::errors::Result<()> {
        let content = toml::to_string_pretty(self)?;

        // Create parent directories if needed
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 界面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// 复制短链接时拼接在 key 前面的域名
    #[serde(default = "default_short_domain")]
    pub short_domain: String,
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
    #[serde(default = "default_url_truncate_length")]
    pub url_truncate_length: usize,
    /// 关闭后复制操作总是走确认弹窗
    #[serde(default = "default_clipboard")]
    pub clipboard: bool,
}

/// 初始数据配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// JSON 分组数据文件，未设置时使用内置示例数据
    #[serde(default)]
    pub seed_file: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// 终端被界面占用，留空表示不输出日志
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_short_domain() -> String {
    "your-domain.com".to_string()
}

fn default_sidebar_open() -> bool {
    true
}

fn default_url_truncate_length() -> usize {
    40
}

fn default_clipboard() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    Some("logs/linkflow.log".to_string())
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            short_domain: default_short_domain(),
            sidebar_open: default_sidebar_open(),
            url_truncate_length: default_url_truncate_length(),
            clipboard: default_clipboard(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
