//! 分类处理器核心：解析记录、查表、回写分类字段
use std::sync::Arc;

use serde_json::Value;
#[cfg(feature = "logging")]
use tracing::{debug, info, warn};

use super::ext::ExtProcessor;
use crate::config::ProcessorConfig;
use crate::error::{ProcessResult, ProcessorError};
use crate::rule::{Category, RuleTable};
#[cfg(feature = "logging")]
use crate::utils::preview_record;
use crate::utils::value_kind;

/// 商品分类处理器
///
/// 只读取 `properties.product_name`，命中规则表时写入 `properties.product_classify`，
/// 记录的其余部分原样透传：字段顺序与数值保持不变，指数写法会被规范化（`1E5` 输出为 `1e+5`）。
#[derive(Debug, Clone)]
pub struct RecordClassifier {
    config: Arc<ProcessorConfig>,
    rules: Arc<RuleTable>,
}

impl RecordClassifier {
    /// 创建处理器（默认配置 + 内置规则表）
    pub fn new() -> Self {
        Self {
            config: Arc::new(ProcessorConfig::default()),
            rules: Arc::new(RuleTable::builtin()),
        }
    }

    /// 带自定义配置创建处理器
    pub fn with_config(config: ProcessorConfig) -> ProcessResult<Self> {
        Self::with_rules(config, RuleTable::builtin())
    }

    /// 带自定义配置与规则表创建处理器
    pub fn with_rules(config: ProcessorConfig, rules: RuleTable) -> ProcessResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            rules: Arc::new(rules),
        })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// 按商品名查找分类
    pub fn classify(&self, product_name: &str) -> Option<Category> {
        self.rules.lookup(product_name)
    }

    /// 核心处理接口：JSON 文本进，JSON 文本出
    pub fn process(&self, record: &str) -> ProcessResult<String> {
        // 1. 解析记录
        let mut record_value: Value = serde_json::from_str(record).map_err(|e| {
            #[cfg(feature = "logging")]
            warn!("记录解析失败：{}，记录={}", e, preview_record(record));
            ProcessorError::MalformedInput(format!("JSON解析失败：{}", e))
        })?;

        // 2. 查表并回写
        if self.process_value(&mut record_value)?.is_none() {
            #[cfg(feature = "logging")]
            debug!("记录未分类，原样返回：{}", preview_record(record));
        }

        // 3. 序列化输出
        Ok(serde_json::to_string(&record_value)?)
    }

    /// 对已解析的记录原地处理，返回写入的分类
    pub fn process_value(&self, record: &mut Value) -> ProcessResult<Option<Category>> {
        let record_kind = value_kind(record);
        let Value::Object(root) = record else {
            return Err(ProcessorError::MalformedInput(format!(
                "记录应为 JSON 对象，实际为 {}",
                record_kind
            )));
        };

        // 无 properties：无需分类
        let Some(properties) = root.get_mut(&self.config.properties_key) else {
            return Ok(None);
        };

        let properties = match properties {
            Value::Object(map) => map,
            other => {
                let found = value_kind(other);
                if self.config.strict_properties {
                    #[cfg(feature = "logging")]
                    warn!("{} 字段类型不匹配：{}", self.config.properties_key, found);
                    return Err(ProcessorError::PropertiesTypeMismatch {
                        key: self.config.properties_key.clone(),
                        found,
                    });
                }
                #[cfg(feature = "logging")]
                debug!("{} 不是对象（{}），跳过分类", self.config.properties_key, found);
                return Ok(None);
            }
        };

        // 规则表只有字符串键，非字符串商品名不会命中
        let Some(product_name) = properties.get(&self.config.source_field).and_then(Value::as_str) else {
            return Ok(None);
        };
        let Some(category) = self.rules.lookup(product_name) else {
            return Ok(None);
        };

        #[cfg(feature = "logging")]
        if self.config.verbose {
            info!("分类命中：{}={}，{}={}", self.config.source_field, product_name, self.config.target_field, category);
        } else {
            debug!("分类命中：{}={}，{}={}", self.config.source_field, product_name, self.config.target_field, category);
        }

        properties.insert(
            self.config.target_field.clone(),
            Value::String(category.label().to_string()),
        );

        Ok(Some(category))
    }
}

impl Default for RecordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtProcessor for RecordClassifier {
    fn process(&self, record: &str) -> ProcessResult<String> {
        RecordClassifier::process(self, record)
    }

    fn name(&self) -> &'static str {
        "product_classifier"
    }
}
