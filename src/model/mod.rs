//! 模型绑定模块
//!
//! 模型通过声明库名和表名，免去每次显式调用 `database()` / `collection()`

pub mod macros;
pub mod traits;

pub use traits::MongoModel;
