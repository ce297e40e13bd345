//! 处理器模块：宿主接口与商品分类核心逻辑
pub mod ext;
pub mod classifier;
pub mod global;

// 导出核心接口
pub use self::ext::ExtProcessor;
pub use self::classifier::RecordClassifier;
pub use self::global::{
    init_global_processor,
    init_global_processor_with_config,
    global_processor,
    process_record,
    classify_product,
};
