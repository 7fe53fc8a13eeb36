//! # 客户端配置构建器模块
//!
//! 提供客户端连接配置的构建器实现，支持链式调用和严格验证

use crate::config::core::ClientConfig;
use crate::error::QuickMongoError;
use crate::i18n::tf;
use rat_logger::info;

/// 客户端配置构建器
///
/// 连接地址必须显式设置，其余选项未设置时由驱动决定
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    uri: Option<String>,
    database: Option<String>,
    app_name: Option<String>,
    connect_timeout_ms: Option<u64>,
    server_selection_timeout_ms: Option<u64>,
    min_pool_size: Option<u32>,
    max_pool_size: Option<u32>,
}

impl ClientConfigBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置连接地址
    ///
    /// # 参数
    ///
    /// * `uri` - mongodb:// 或 mongodb+srv:// 开头的连接地址
    pub fn uri<S: Into<String>>(mut self, uri: S) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// 设置初始库名
    pub fn database<S: Into<String>>(mut self, database: S) -> Self {
        self.database = Some(database.into());
        self
    }

    /// 设置应用名称
    pub fn app_name<S: Into<String>>(mut self, app_name: S) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// 设置连接超时（毫秒）
    pub fn connect_timeout_ms(mut self, timeout: u64) -> Self {
        self.connect_timeout_ms = Some(timeout);
        self
    }

    /// 设置服务器选择超时（毫秒）
    pub fn server_selection_timeout_ms(mut self, timeout: u64) -> Self {
        self.server_selection_timeout_ms = Some(timeout);
        self
    }

    /// 设置连接池最小连接数
    pub fn min_pool_size(mut self, size: u32) -> Self {
        self.min_pool_size = Some(size);
        self
    }

    /// 设置连接池最大连接数
    pub fn max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = Some(size);
        self
    }

    /// 构建客户端配置
    ///
    /// # 错误
    ///
    /// 连接地址未设置或格式不正确、超时为零、连接池上下限颠倒时返回错误
    pub fn build(self) -> Result<ClientConfig, QuickMongoError> {
        crate::init();

        let uri = self.uri.ok_or_else(|| {
            crate::quick_error!(config, tf("error.config_missing", &[("field", "uri")]))
        })?;

        if !uri.starts_with("mongodb://") && !uri.starts_with("mongodb+srv://") {
            return Err(crate::quick_error!(
                config,
                tf("error.mongo_uri_invalid", &[("uri", &uri)])
            ));
        }

        if self.connect_timeout_ms == Some(0) {
            return Err(crate::quick_error!(config, "连接超时不能为零"));
        }

        if self.server_selection_timeout_ms == Some(0) {
            return Err(crate::quick_error!(config, "服务器选择超时不能为零"));
        }

        if let (Some(min), Some(max)) = (self.min_pool_size, self.max_pool_size) {
            if min > max {
                return Err(crate::quick_error!(config, "最小连接数不能大于最大连接数"));
            }
        }

        if self.max_pool_size == Some(0) {
            return Err(crate::quick_error!(config, "最大连接数不能为零"));
        }

        info!(
            "创建MongoDB客户端配置: 库={:?}, 应用={:?}",
            self.database, self.app_name
        );

        Ok(ClientConfig {
            uri,
            database: self.database,
            app_name: self.app_name,
            connect_timeout_ms: self.connect_timeout_ms,
            server_selection_timeout_ms: self.server_selection_timeout_ms,
            min_pool_size: self.min_pool_size,
            max_pool_size: self.max_pool_size,
        })
    }
}
