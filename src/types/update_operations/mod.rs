//! 更新操作构建
//!
//! 将字段级更新操作合并为MongoDB更新文档：
//! 修改字段的值($set)、字段增加值($inc)、
//! 从数组中增加一个元素($push)、从数组中删除一个元素($pull)

use mongodb::bson::{Bson, Document};

/// 更新操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOperator {
    /// 直接设置值
    Set,
    /// 原子性增加
    Inc,
    /// 向数组追加元素
    Push,
    /// 从数组移除匹配的元素
    Pull,
}

impl UpdateOperator {
    /// 对应的MongoDB操作符
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOperator::Set => "$set",
            UpdateOperator::Inc => "$inc",
            UpdateOperator::Push => "$push",
            UpdateOperator::Pull => "$pull",
        }
    }
}

/// 更新操作定义
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOperation {
    /// 要更新的字段名
    pub field: String,
    /// 更新操作类型
    pub operation: UpdateOperator,
    /// 更新的值
    pub value: Bson,
}

impl UpdateOperation {
    /// 创建一个设置操作
    pub fn set(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(field, UpdateOperator::Set, value)
    }

    /// 创建一个增加操作
    pub fn inc(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(field, UpdateOperator::Inc, value)
    }

    /// 创建一个数组追加操作
    pub fn push(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(field, UpdateOperator::Push, value)
    }

    /// 创建一个数组移除操作
    pub fn pull(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new(field, UpdateOperator::Pull, value)
    }

    fn new(field: impl Into<String>, operation: UpdateOperator, value: impl Into<Bson>) -> Self {
        Self {
            field: field.into(),
            operation,
            value: value.into(),
        }
    }
}

/// 合并更新操作为更新文档
///
/// 同一操作符下的同名字段，后出现的覆盖先出现的
pub fn build_update_document(operations: &[UpdateOperation]) -> Document {
    let mut update_doc = Document::new();

    for op in operations {
        let key = op.operation.as_str();
        if !update_doc.contains_key(key) {
            update_doc.insert(key, Document::new());
        }
        if let Ok(section) = update_doc.get_document_mut(key) {
            section.insert(op.field.clone(), op.value.clone());
        }
    }

    update_doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_groups_by_operator() {
        let update = build_update_document(&[
            UpdateOperation::set("name", "alice"),
            UpdateOperation::inc("visits", 1),
            UpdateOperation::set("active", true),
            UpdateOperation::push("tags", "vip"),
            UpdateOperation::pull("tags", "trial"),
        ]);

        assert_eq!(
            update,
            doc! {
                "$set": { "name": "alice", "active": true },
                "$inc": { "visits": 1 },
                "$push": { "tags": "vip" },
                "$pull": { "tags": "trial" },
            }
        );
    }

    #[test]
    fn test_last_write_wins() {
        let update = build_update_document(&[
            UpdateOperation::set("name", "alice"),
            UpdateOperation::set("name", "bob"),
        ]);
        assert_eq!(update, doc! { "$set": { "name": "bob" } });
    }

    #[test]
    fn test_empty_operations() {
        assert!(build_update_document(&[]).is_empty());
    }
}
