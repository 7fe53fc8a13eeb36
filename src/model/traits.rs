//! 模型绑定 trait 定义

/// 可声明所属库名和表名的模型
///
/// 两个方法都是可选能力，未实现的一项返回 `None`，
/// 绑定时不会覆盖当前已选择的库名或表名
///
/// ```
/// use rat_quickmongo::MongoModel;
///
/// struct User;
///
/// impl MongoModel for User {
///     fn database(&self) -> Option<&str> {
///         Some("account")
///     }
///
///     fn table_name(&self) -> Option<&str> {
///         Some("users")
///     }
/// }
/// ```
pub trait MongoModel {
    /// 所属库名
    fn database(&self) -> Option<&str> {
        None
    }

    /// 所属集合名
    fn table_name(&self) -> Option<&str> {
        None
    }
}

impl<M: MongoModel + ?Sized> MongoModel for &M {
    fn database(&self) -> Option<&str> {
        (**self).database()
    }

    fn table_name(&self) -> Option<&str> {
        (**self).table_name()
    }
}

impl<M: MongoModel + ?Sized> MongoModel for Box<M> {
    fn database(&self) -> Option<&str> {
        (**self).database()
    }

    fn table_name(&self) -> Option<&str> {
        (**self).table_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;
    impl MongoModel for Bare {}

    struct Orders;
    impl MongoModel for Orders {
        fn table_name(&self) -> Option<&str> {
            Some("orders")
        }
    }

    #[test]
    fn test_default_capabilities_absent() {
        assert_eq!(Bare.database(), None);
        assert_eq!(Bare.table_name(), None);
    }

    #[test]
    fn test_forwarding_impls() {
        let boxed: Box<dyn MongoModel> = Box::new(Orders);
        assert_eq!(boxed.table_name(), Some("orders"));
        assert_eq!((&Orders).table_name(), Some("orders"));
        assert_eq!(boxed.database(), None);
    }
}
