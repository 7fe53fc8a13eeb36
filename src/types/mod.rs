//! 类型定义模块

pub mod mongo_builder;
pub mod update_operations;

pub use mongo_builder::MongoUriBuilder;
pub use update_operations::{build_update_document, UpdateOperation, UpdateOperator};
