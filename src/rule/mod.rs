//! 规则模块：负责分类数据模型与分类规则表定义
pub mod model;
pub mod table;

// 导出核心接口
pub use self::model::Category;
pub use self::table::{RuleTable, BUILTIN_RULES, BUILTIN_RULE_TABLE};
