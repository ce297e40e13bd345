//! 全局处理器单例管理
use once_cell::sync::OnceCell;
#[cfg(feature = "logging")]
use tracing::{debug, warn};

use super::classifier::RecordClassifier;
use crate::config::{ConfigManager, ProcessorConfig};
use crate::error::{ProcessResult, ProcessorError};
use crate::rule::Category;

/// 全局处理器实例
static GLOBAL_PROCESSOR: OnceCell<RecordClassifier> = OnceCell::new();

/// 初始化全局处理器（默认配置）
pub fn init_global_processor() -> ProcessResult<()> {
    init_global_processor_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局处理器
///
/// 已存在的实例（包括 `process_record` 首次调用时按默认配置创建的实例）不会被替换：
/// 配置相同则视为重复初始化返回 Ok，配置不同返回 `ProcessorAlreadyInitialized`。
pub fn init_global_processor_with_config(config: ProcessorConfig) -> ProcessResult<()> {
    // 1. 先校验，非法配置无论是否已初始化都报错
    config.validate()?;

    // 2. 已初始化：只接受相同配置
    if let Some(existing) = GLOBAL_PROCESSOR.get() {
        return ensure_same_config(existing, &config);
    }

    // 3. 初始化；并发初始化失败时同样比对配置
    let processor = RecordClassifier::with_config(config)?;
    if let Err(rejected) = GLOBAL_PROCESSOR.set(processor) {
        if let Some(existing) = GLOBAL_PROCESSOR.get() {
            return ensure_same_config(existing, rejected.config());
        }
        return Err(ProcessorError::ProcessorAlreadyInitialized);
    }

    Ok(())
}

fn ensure_same_config(existing: &RecordClassifier, config: &ProcessorConfig) -> ProcessResult<()> {
    if existing.config() == config {
        #[cfg(feature = "logging")]
        debug!("全局处理器已按相同配置初始化，跳过");
        return Ok(());
    }

    #[cfg(feature = "logging")]
    warn!("全局处理器已初始化，忽略新配置：{:?}", config);
    Err(ProcessorError::ProcessorAlreadyInitialized)
}

/// 获取全局处理器，未初始化时使用默认配置
pub fn global_processor() -> &'static RecordClassifier {
    GLOBAL_PROCESSOR.get_or_init(RecordClassifier::new)
}

/// 使用全局处理器处理一条记录
pub fn process_record(record: &str) -> ProcessResult<String> {
    global_processor().process(record)
}

/// 使用全局处理器按商品名查找分类
pub fn classify_product(product_name: &str) -> Option<Category> {
    global_processor().classify(product_name)
}
