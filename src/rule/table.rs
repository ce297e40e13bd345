//! 分类规则表
//! 商品名 -> 分类 的声明式映射，新增规则只需修改 BUILTIN_RULES

use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::model::Category;

/// 内置分类规则（精确匹配，区分大小写）
pub const BUILTIN_RULES: &[(&str, Category)] = &[
    ("苹果", Category::Fruit),
    ("梨", Category::Fruit),
    ("萝卜", Category::Vegetable),
    ("白菜", Category::Vegetable),
];

/// 全局懒加载的内置规则表 - 首次访问初始化，只读共享
pub static BUILTIN_RULE_TABLE: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::from_entries(BUILTIN_RULES.iter().copied()));

/// 分类规则表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    entries: HashMap<String, Category>,
}

impl RuleTable {
    /// 内置规则表的副本
    pub fn builtin() -> Self {
        BUILTIN_RULE_TABLE.clone()
    }

    /// 由 (商品名, 分类) 列表构建，重复商品名以后出现者为准
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Category)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, category)| (name.into(), category))
                .collect(),
        }
    }

    /// 按商品名查找分类
    pub fn lookup(&self, product_name: &str) -> Option<Category> {
        self.entries.get(product_name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 遍历所有规则（无序）
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.entries.iter().map(|(name, category)| (name.as_str(), *category))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fruit() {
        // 测试场景：内置规则：苹果、梨为水果
        let table = RuleTable::builtin();
        assert_eq!(table.lookup("苹果"), Some(Category::Fruit));
        assert_eq!(table.lookup("梨"), Some(Category::Fruit));
    }

    #[test]
    fn test_builtin_vegetable() {
        // 测试场景：内置规则：萝卜、白菜为蔬菜
        let table = RuleTable::builtin();
        assert_eq!(table.lookup("萝卜"), Some(Category::Vegetable));
        assert_eq!(table.lookup("白菜"), Some(Category::Vegetable));
    }

    #[test]
    fn test_exact_match_only() {
        // 测试场景：只做精确匹配，前后空白或未收录名称不命中
        let table = RuleTable::builtin();
        assert_eq!(table.lookup("香蕉"), None);
        assert_eq!(table.lookup(" 苹果"), None);
        assert_eq!(table.lookup("苹果 "), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_builtin_size() {
        // 测试场景：内置规则表条目数
        assert_eq!(BUILTIN_RULE_TABLE.len(), 4);
        assert!(!BUILTIN_RULE_TABLE.is_empty());
        assert_eq!(BUILTIN_RULE_TABLE.iter().count(), BUILTIN_RULES.len());
    }

    #[test]
    fn test_from_entries_last_wins() {
        // 测试场景：重复商品名以后出现者为准，区分大小写
        let table = RuleTable::from_entries([
            ("Apple", Category::Vegetable),
            ("Apple", Category::Fruit),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("Apple"), Some(Category::Fruit));
        assert_eq!(table.lookup("apple"), None);
    }
}
