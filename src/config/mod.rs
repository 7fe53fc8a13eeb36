//! # 配置管理模块
//!
//! 提供客户端连接配置，支持构建器模式和配置文件加载

pub mod builders;
pub mod core;

pub use builders::ClientConfigBuilder;
pub use core::ClientConfig;
