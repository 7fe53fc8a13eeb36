//! # 配置管理模块 - 核心配置类型
//!
//! 客户端连接配置，支持构建器模式与配置文件加载
//! 所有可选项未设置时交由驱动使用其自身默认值

use crate::error::QuickMongoError;
use crate::i18n::tf;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use rat_logger::info;

/// 客户端连接配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// 连接地址（mongodb:// 或 mongodb+srv://）
    pub uri: String,
    /// 初始库名，未设置时使用连接地址中的默认库
    #[serde(default)]
    pub database: Option<String>,
    /// 应用名称，会出现在服务端日志中
    #[serde(default)]
    pub app_name: Option<String>,
    /// 连接超时（毫秒）
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    /// 服务器选择超时（毫秒）
    #[serde(default)]
    pub server_selection_timeout_ms: Option<u64>,
    /// 连接池最小连接数
    #[serde(default)]
    pub min_pool_size: Option<u32>,
    /// 连接池最大连接数
    #[serde(default)]
    pub max_pool_size: Option<u32>,
}

impl ClientConfig {
    /// 创建客户端配置构建器
    pub fn builder() -> super::builders::ClientConfigBuilder {
        super::builders::ClientConfigBuilder::new()
    }

    /// 连接超时
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    /// 服务器选择超时
    pub fn server_selection_timeout(&self) -> Option<Duration> {
        self.server_selection_timeout_ms.map(Duration::from_millis)
    }

    /// 从配置文件加载配置
    ///
    /// 扩展名为 `toml` 时按TOML解析，其余按JSON解析
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, QuickMongoError> {
        crate::init();
        let content = std::fs::read_to_string(config_path.as_ref())?;

        let config: ClientConfig = if is_toml(config_path.as_ref()) {
            toml::from_str(&content).map_err(|e| {
                crate::quick_error!(config, tf("error.config_parse", &[("message", &e.to_string())]))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                crate::quick_error!(config, tf("error.config_parse", &[("message", &e.to_string())]))
            })?
        };

        info!("从文件加载MongoDB配置: {:?}", config_path.as_ref());
        Ok(config)
    }

    /// 保存配置到文件
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn save_to_file<P: AsRef<Path>>(&self, config_path: P) -> Result<(), QuickMongoError> {
        crate::init();
        let content = if is_toml(config_path.as_ref()) {
            toml::to_string_pretty(self).map_err(|e| {
                crate::quick_error!(serialization, tf("error.config_serialize", &[("message", &e.to_string())]))
            })?
        } else {
            serde_json::to_string_pretty(self).map_err(|e| {
                crate::quick_error!(serialization, tf("error.config_serialize", &[("message", &e.to_string())]))
            })?
        };

        std::fs::write(config_path.as_ref(), content)?;

        info!("保存MongoDB配置到文件: {:?}", config_path.as_ref());
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        let config = ClientConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: None,
            app_name: None,
            connect_timeout_ms: Some(1500),
            server_selection_timeout_ms: None,
            min_pool_size: None,
            max_pool_size: None,
        };
        assert_eq!(config.connect_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.server_selection_timeout(), None);
    }

    #[test]
    fn test_toml_minimal_fields() {
        let config: ClientConfig = toml::from_str(r#"uri = "mongodb://localhost:27017""#).unwrap();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert!(config.database.is_none());
        assert!(config.max_pool_size.is_none());
    }
}
