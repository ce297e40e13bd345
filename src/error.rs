//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum ProcessorError {
    // 输入相关错误
    #[error("记录格式错误：{0}")]
    MalformedInput(String),
    #[error("字段类型不匹配：{key} 应为 JSON 对象，实际为 {found}")]
    PropertiesTypeMismatch { key: String, found: &'static str },

    // 序列化错误
    #[error("记录序列化失败：{0}")]
    SerializeError(#[from] SerdeJsonError),

    // 配置错误
    #[error("配置无效：{0}")]
    ConfigError(String),

    // 全局处理器错误
    #[error("全局处理器已初始化，新配置未生效")]
    ProcessorAlreadyInitialized,
}

// 全局Result类型
pub type ProcessResult<T> = Result<T, ProcessorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_type_mismatch() {
        // 测试场景：类型不匹配错误信息
        let err = ProcessorError::PropertiesTypeMismatch {
            key: "properties".to_string(),
            found: "array",
        };
        assert_eq!(err.to_string(), "字段类型不匹配：properties 应为 JSON 对象，实际为 array");
    }

    #[test]
    fn test_display_already_initialized() {
        // 测试场景：全局处理器重复初始化的错误信息
        assert_eq!(
            ProcessorError::ProcessorAlreadyInitialized.to_string(),
            "全局处理器已初始化，新配置未生效"
        );
    }

    #[test]
    fn test_serde_error_converts() {
        // 测试场景：serde_json 错误自动转换
        let raw = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ProcessorError = raw.into();
        assert!(matches!(err, ProcessorError::SerializeError(_)));
    }
}
