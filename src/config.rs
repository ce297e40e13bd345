//! 全局配置管理,存储所有可配置项

use serde::{Deserialize, Serialize};

use crate::error::{ProcessResult, ProcessorError};

/// 处理器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    // 业务属性所在的子对象字段名
    pub properties_key: String,
    // 读取的商品名字段
    pub source_field: String,
    // 写入的分类字段
    pub target_field: String,
    // properties 存在但不是对象时是否报错（关闭则原样放行）
    pub strict_properties: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            properties_key: "properties".to_string(),
            source_field: "product_name".to_string(),
            target_field: "product_classify".to_string(),
            strict_properties: true,
            verbose: false,
        }
    }
}

impl ProcessorConfig {
    /// 校验配置合法性
    pub fn validate(&self) -> ProcessResult<()> {
        for (name, value) in [
            ("properties_key", &self.properties_key),
            ("source_field", &self.source_field),
            ("target_field", &self.target_field),
        ] {
            if value.trim().is_empty() {
                return Err(ProcessorError::ConfigError(format!("{} 不能为空", name)));
            }
        }

        if self.source_field == self.target_field {
            return Err(ProcessorError::ConfigError(format!(
                "source_field 与 target_field 不能相同：{}",
                self.source_field
            )));
        }

        Ok(())
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ProcessorConfig {
        ProcessorConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从宿主下发的 JSON 配置解析（缺省字段取默认值）
    pub fn from_json(raw: &str) -> ProcessResult<ProcessorConfig> {
        let config: ProcessorConfig = serde_json::from_str(raw)
            .map_err(|e| ProcessorError::ConfigError(format!("配置解析失败：{}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ProcessorConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ProcessorConfig::default(),
        }
    }

    pub fn properties_key(mut self, key: impl Into<String>) -> Self {
        self.config.properties_key = key.into();
        self
    }

    pub fn source_field(mut self, field: impl Into<String>) -> Self {
        self.config.source_field = field.into();
        self
    }

    pub fn target_field(mut self, field: impl Into<String>) -> Self {
        self.config.target_field = field.into();
        self
    }

    pub fn strict_properties(mut self, strict: bool) -> Self {
        self.config.strict_properties = strict;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// 构建并校验
    pub fn build(self) -> ProcessResult<ProcessorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
