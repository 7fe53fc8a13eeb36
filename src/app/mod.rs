//! MongoDB链式操作模块
//!
//! - client.rs: 连接、库/集合选择、模型绑定、会话与关闭
//! - operations.rs: 针对当前库/集合的CRUD与聚合透传

pub mod client;
pub mod operations;

pub use client::MongoApp;
