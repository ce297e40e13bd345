//! product-classifier - 数据接入扩展处理器示例：按商品名为事件记录补充分类字段

// 导出全局错误类型
pub use self::error::{ProcessorError, ProcessResult};

// 导出配置模块
pub use self::config::{ProcessorConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{Category, RuleTable, BUILTIN_RULES, BUILTIN_RULE_TABLE};

// 导出工具模块核心接口
pub use self::utils::{preview_record, value_kind, RecordPreview};

// 导出处理器模块核心接口（含全局单例的简化接口）
pub use self::processor::{
    ExtProcessor,
    RecordClassifier,
    init_global_processor,
    init_global_processor_with_config,
    global_processor,
    process_record,
    classify_product,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod processor;
