use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// 原生库定位配置
///
/// 解析顺序:
/// 1. `path`（显式指定时只尝试这一个）
/// 2. `search_dirs` 中的每个目录
/// 3. 平台默认目录 `default_dir`
/// 4. 当前可执行文件所在目录
/// 5. 仅文件名，交给系统动态库搜索
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// 库的显示名称 (日志与错误信息)
    pub name: String,

    /// 平台相关的文件名
    pub file_name: String,

    /// 显式路径
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// 额外搜索目录
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,

    /// 平台默认安装目录
    #[serde(default)]
    pub default_dir: Option<PathBuf>,

    /// 是否搜索可执行文件所在目录
    #[serde(default = "default_true")]
    pub search_executable_dir: bool,

    /// 是否最后交给系统加载器按文件名搜索
    #[serde(default = "default_true")]
    pub use_system_search: bool,
}

fn default_true() -> bool {
    true
}

impl LibraryConfig {
    /// GR 默认配置: Windows 下 `S:\gr\libGR.dll`，其他平台 `/usr/local/gr/lib/libGR.so`
    pub fn gr() -> Self {
        let (file_name, default_dir) = if cfg!(windows) {
            ("libGR.dll", r"S:\gr")
        } else {
            ("libGR.so", "/usr/local/gr/lib")
        };
        Self {
            name: "GR".to_string(),
            file_name: file_name.to_string(),
            path: None,
            search_dirs: Vec::new(),
            default_dir: Some(PathBuf::from(default_dir)),
            search_executable_dir: true,
            use_system_search: true,
        }
    }

    /// GR3 默认配置: 与可执行文件同目录的 `libgr3.dll` / `libGR3.so`
    pub fn gr3() -> Self {
        let file_name = if cfg!(windows) { "libgr3.dll" } else { "libGR3.so" };
        Self {
            name: "GR3".to_string(),
            file_name: file_name.to_string(),
            path: None,
            search_dirs: Vec::new(),
            default_dir: None,
            search_executable_dir: true,
            use_system_search: true,
        }
    }

    /// 指定显式路径
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// 按解析顺序列出候选位置
    pub fn candidates(&self) -> Vec<PathBuf> {
        if let Some(path) = &self.path {
            return vec![path.clone()];
        }

        let mut candidates: Vec<PathBuf> = self
            .search_dirs
            .iter()
            .map(|dir| dir.join(&self.file_name))
            .collect();

        if let Some(dir) = &self.default_dir {
            candidates.push(dir.join(&self.file_name));
        }

        if self.search_executable_dir {
            if let Some(dir) = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            {
                candidates.push(dir.join(&self.file_name));
            }
        }

        if self.use_system_search {
            candidates.push(PathBuf::from(&self.file_name));
        }

        candidates
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "library name must not be empty".to_string(),
            ));
        }
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{}: file_name must not be empty",
                self.name
            )));
        }
        if matches!(&self.path, Some(path) if path.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "{}: path must not be empty",
                self.name
            )));
        }
        if self.path.is_none()
            && self.search_dirs.is_empty()
            && self.default_dir.is_none()
            && !self.search_executable_dir
            && !self.use_system_search
        {
            return Err(ConfigError::ValidationError(format!(
                "{}: no location to load the library from",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_is_only_candidate() {
        let config = LibraryConfig::gr().with_path("/opt/custom/libGR.so");
        assert_eq!(
            config.candidates(),
            vec![PathBuf::from("/opt/custom/libGR.so")]
        );
    }

    #[test]
    fn test_candidate_order() {
        let mut config = LibraryConfig::gr();
        config.search_dirs = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        config.search_executable_dir = false;

        let candidates = config.candidates();
        let file = config.file_name.clone();
        assert_eq!(candidates[0], PathBuf::from("/a").join(&file));
        assert_eq!(candidates[1], PathBuf::from("/b").join(&file));
        assert_eq!(
            candidates[2],
            config.default_dir.clone().unwrap().join(&file)
        );
        assert_eq!(candidates.last(), Some(&PathBuf::from(&file)));
        assert_eq!(candidates.len(), 4);
    }

    #[test]
    fn test_gr3_has_no_fixed_default_dir() {
        let mut config = LibraryConfig::gr3();
        config.search_executable_dir = false;
        assert_eq!(config.candidates(), vec![PathBuf::from(&config.file_name)]);
    }

    #[test]
    fn test_validate_rejects_nowhere() {
        let mut config = LibraryConfig::gr3();
        config.search_executable_dir = false;
        config.use_system_search = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = LibraryConfig::gr().with_path("");
        assert!(config.validate().is_err());
    }
}
