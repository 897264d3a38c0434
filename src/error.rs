//! 错误类型
//!
//! - `InvalidInput`: 唯一的业务错误，界面层就地恢复
//! - `Config` / `Io`: 启动和终端相关的失败，直接结束程序

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// 输入无法解析为有限的十进制数
    #[error("Invalid input, please enter a valid number")]
    InvalidInput(String),

    /// 配置文件格式错误
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_is_user_facing() {
        let err = AppError::InvalidInput("abc".to_string());
        assert_eq!(err.to_string(), "Invalid input, please enter a valid number");
    }

    #[test]
    fn test_config_error_message_names_file() {
        let source = toml::from_str::<toml::Table>("initial_category = [").unwrap_err();
        let err = AppError::Config {
            path: PathBuf::from("/tmp/unit-converter/config.toml"),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("invalid config file /tmp/unit-converter/config.toml: "));
        assert!(!message.contains("Config {"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: AppError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "gone");
    }
}
