//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供连接与配置错误消息的多语言支持

use std::collections::HashMap;
use rat_embed_lang::register_translations;

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 客户端创建失败
        let mut connect_failed = HashMap::new();
        connect_failed.insert("zh-CN".to_string(), "数据库【mongo】连接失败：{message}".to_string());
        connect_failed.insert("en-US".to_string(), "MongoDB connection failed: {message}".to_string());
        connect_failed.insert("ja-JP".to_string(), "MongoDB接続に失敗しました: {message}".to_string());
        translations.insert("error.mongo_connect".to_string(), connect_failed);

        // 连通性检查失败
        let mut ping_failed = HashMap::new();
        ping_failed.insert("zh-CN".to_string(), "数据库【mongo】连接服务器失败：{message}".to_string());
        ping_failed.insert("en-US".to_string(), "MongoDB server unreachable: {message}".to_string());
        ping_failed.insert("ja-JP".to_string(), "MongoDBサーバーに接続できません: {message}".to_string());
        translations.insert("error.mongo_ping".to_string(), ping_failed);

        // URI解析失败
        let mut uri_invalid = HashMap::new();
        uri_invalid.insert("zh-CN".to_string(), "无效的MongoDB连接地址：{uri}".to_string());
        uri_invalid.insert("en-US".to_string(), "Invalid MongoDB connection string: {uri}".to_string());
        uri_invalid.insert("ja-JP".to_string(), "無効なMongoDB接続文字列: {uri}".to_string());
        translations.insert("error.mongo_uri_invalid".to_string(), uri_invalid);

        // 配置项缺失
        let mut config_missing = HashMap::new();
        config_missing.insert("zh-CN".to_string(), "配置项 {field} 必须设置".to_string());
        config_missing.insert("en-US".to_string(), "Configuration field {field} must be set".to_string());
        config_missing.insert("ja-JP".to_string(), "設定項目 {field} を設定する必要があります".to_string());
        translations.insert("error.config_missing".to_string(), config_missing);

        // 配置文件解析失败
        let mut config_parse = HashMap::new();
        config_parse.insert("zh-CN".to_string(), "解析配置文件失败: {message}".to_string());
        config_parse.insert("en-US".to_string(), "Failed to parse configuration file: {message}".to_string());
        config_parse.insert("ja-JP".to_string(), "設定ファイルの解析に失敗しました: {message}".to_string());
        translations.insert("error.config_parse".to_string(), config_parse);

        // 配置序列化失败
        let mut config_serialize = HashMap::new();
        config_serialize.insert("zh-CN".to_string(), "序列化配置失败: {message}".to_string());
        config_serialize.insert("en-US".to_string(), "Failed to serialize configuration: {message}".to_string());
        config_serialize.insert("ja-JP".to_string(), "設定のシリアライズに失敗しました: {message}".to_string());
        translations.insert("error.config_serialize".to_string(), config_serialize);

        // 注册所有翻译
        register_translations(translations);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        Self::register_all_translations();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}

/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{t, tf, set_language, current_language};
