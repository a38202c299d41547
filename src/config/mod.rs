//! 统一配置系统
//!
//! 提供TOML/JSON配置文件、环境变量覆盖，决定从哪里加载GR/GR3原生库以及日志级别

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod library;

pub use library::LibraryConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置文件名
const CONFIG_FILE_STEM: &str = "gr_binding";

/// 绑定层主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    /// GR (2D) 库
    #[serde(default = "LibraryConfig::gr")]
    pub gr: LibraryConfig,

    /// GR3 (3D) 库
    #[serde(default = "LibraryConfig::gr3")]
    pub gr3: LibraryConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            gr: LibraryConfig::gr(),
            gr3: LibraryConfig::gr3(),
            logging: LoggingConfig::default(),
        }
    }
}

impl BindingConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// 用任意键值来源覆盖配置
    ///
    /// 识别的键:
    /// - `GRDIR`: GR安装目录，`$GRDIR/lib` 会放到两个库搜索路径的最前面
    /// - `GR_LIBRARY_PATH`: GR库的完整路径
    /// - `GR3_LIBRARY_PATH`: GR3库的完整路径
    /// - `GR_BINDING_LOG_LEVEL`: 日志级别 (trace/debug/info/warn/error)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(grdir) = lookup("GRDIR") {
            let lib_dir = PathBuf::from(grdir).join("lib");
            self.gr.search_dirs.insert(0, lib_dir.clone());
            self.gr3.search_dirs.insert(0, lib_dir);
        }
        if let Some(path) = lookup("GR_LIBRARY_PATH") {
            self.gr.path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("GR3_LIBRARY_PATH") {
            self.gr3.path = Some(PathBuf::from(path));
        }
        if let Some(level) = lookup("GR_BINDING_LOG_LEVEL") {
            if let Some(level) = LogLevel::parse(&level) {
                self.logging.level = level;
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.gr.validate()?;
        self.gr3.validate()?;
        Ok(())
    }

    /// 按扩展名加载配置文件：`.json` 为JSON，其余为TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    /// 自动查找时的候选文件，按优先级排列：
    /// 1. ./gr_binding.toml
    /// 2. ./gr_binding.json
    /// 3. <用户配置目录>/gr_binding/config.toml
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(format!("{}.toml", CONFIG_FILE_STEM)),
            PathBuf::from(format!("{}.json", CONFIG_FILE_STEM)),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(CONFIG_FILE_STEM).join("config.toml"));
        }
        paths
    }

    /// 自动查找、加载并验证配置
    ///
    /// 不存在的候选文件被跳过，都不存在时使用默认配置。存在但无法读取或
    /// 解析的文件是错误，不会退回默认配置。最后应用环境变量覆盖。
    pub fn try_load() -> ConfigResult<Self> {
        Self::try_load_from(&Self::candidate_paths())
    }

    /// 同 [`try_load`](Self::try_load)，但使用给定的候选文件
    pub fn try_load_from(candidates: &[PathBuf]) -> ConfigResult<Self> {
        let mut config = Self::load_first(candidates)?.unwrap_or_else(|| {
            tracing::debug!(target: "gr_binding::config", "Using default configuration");
            Self::default()
        });
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 加载配置，出错时记录警告并使用默认配置（仍应用环境变量覆盖）
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(
                target: "gr_binding::config",
                "Falling back to default configuration: {}",
                e
            );
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    fn load_first(candidates: &[PathBuf]) -> ConfigResult<Option<Self>> {
        for path in candidates {
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!(target: "gr_binding::config", "Loaded config from {}", path.display());
                    return Ok(Some(config));
                }
                Err(ConfigError::FileError(e)) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(ConfigError::FileError(e)) => {
                    return Err(ConfigError::FileError(io::Error::new(
                        e.kind(),
                        format!("{}: {}", path.display(), e),
                    )))
                }
                Err(ConfigError::ParseError(message)) => {
                    return Err(ConfigError::ParseError(format!(
                        "{}: {}",
                        path.display(),
                        message
                    )))
                }
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,

    /// 是否把GR3原生日志转发到tracing
    pub forward_gr3_log: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_console: true,
    forward_gr3_log: false,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// 解析级别名称（不区分大小写）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// EnvFilter 指令字符串
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
