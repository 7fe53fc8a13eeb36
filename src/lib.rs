//! rat_quickmongo - 轻量级MongoDB链式操作库
//!
//! 在官方驱动之上提供库/集合的链式选择、模型绑定和常用CRUD封装，
//! 连接池、重试等均交由驱动处理

use once_cell::sync::OnceCell;

// 导出所有公共模块
pub mod error;
pub mod i18n;
pub mod config;
pub mod types;
pub mod model;
pub mod app;
pub mod utils;

// 重新导出常用类型和函数
pub use error::{QuickMongoError, QuickMongoResult};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use types::{build_update_document, MongoUriBuilder, UpdateOperation, UpdateOperator};
pub use model::MongoModel;
pub use app::MongoApp;
pub use utils::{bson_time, bson_time_with_offset, to_bson_datetime};

// 驱动类型重新导出，调用方无需单独依赖
pub use mongodb;
pub use mongodb::bson;

static INIT: OnceCell<()> = OnceCell::new();

/// 初始化rat_quickmongo库
///
/// 注册多语言错误消息，重复调用只生效一次；
/// 连接函数会自动调用
///
/// 注意：日志系统由调用者自行初始化，本库不初始化日志
pub fn init() {
    INIT.get_or_init(i18n::ErrorMessageI18n::init);
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
