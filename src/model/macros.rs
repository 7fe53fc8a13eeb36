//! 模型相关的宏定义

/// 便捷宏：为类型实现 [`MongoModel`](crate::model::MongoModel)
///
/// ```
/// use rat_quickmongo::{mongo_model, MongoModel};
///
/// struct User;
/// mongo_model!(User, database = "account", table = "users");
///
/// struct AuditLog;
/// mongo_model!(AuditLog, table = "audit_logs");
///
/// assert_eq!(User.database(), Some("account"));
/// assert_eq!(AuditLog.database(), None);
/// ```
#[macro_export]
macro_rules! mongo_model {
    ($ty:ty, database = $db:expr, table = $table:expr $(,)?) => {
        impl $crate::model::MongoModel for $ty {
            fn database(&self) -> Option<&str> {
                Some($db)
            }

            fn table_name(&self) -> Option<&str> {
                Some($table)
            }
        }
    };
    ($ty:ty, table = $table:expr $(,)?) => {
        impl $crate::model::MongoModel for $ty {
            fn table_name(&self) -> Option<&str> {
                Some($table)
            }
        }
    };
    ($ty:ty, database = $db:expr $(,)?) => {
        impl $crate::model::MongoModel for $ty {
            fn database(&self) -> Option<&str> {
                Some($db)
            }
        }
    };
}
