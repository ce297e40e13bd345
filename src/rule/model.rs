//! 分类数据模型定义
//! 仅描述分类标签本身，无任何匹配逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 商品分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "水果")]
    Fruit,
    #[serde(rename = "蔬菜")]
    Vegetable,
}

impl Category {
    /// 写入记录时使用的分类标签
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruit => "水果",
            Category::Vegetable => "蔬菜",
        }
    }
}

// ======== 为 Category 实现 Display trait（用于日志输出） ========
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
