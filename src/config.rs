use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Category;

/// 用户配置 (config.toml)，只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 启动时选中的类别
    pub initial_category: Category,
    /// RUST_LOG 未设置时使用的日志过滤
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_category: Category::Length,
            log_filter: "info".to_string(),
        }
    }
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
