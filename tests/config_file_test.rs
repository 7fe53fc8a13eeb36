#[cfg(test)]
mod tests {
    use rat_quickmongo::{ClientConfig, MongoUriBuilder, QuickMongoError};
    use std::io::Write;

    fn sample_config() -> ClientConfig {
        ClientConfig::builder()
            .uri(
                MongoUriBuilder::new("127.0.0.1", 27017)
                    .with_database("testdb")
                    .with_auth("tester", "s3cret@1")
                    .with_auth_source("admin")
                    .build(),
            )
            .database("testdb")
            .app_name("config_file_test")
            .connect_timeout_ms(2000)
            .max_pool_size(4)
            .build()
            .expect("配置构建失败")
    }

    /// TOML 配置保存后可以原样读回
    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mongo.toml");

        let config = sample_config();
        config.save_to_file(&path).unwrap();
        println!("🔍 TOML内容:\n{}", std::fs::read_to_string(&path).unwrap());

        let loaded = ClientConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.uri.contains("tester:s3cret%401@"));
    }

    /// 非 toml 扩展名按 JSON 解析
    #[test]
    fn test_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{ "uri": "mongodb://127.0.0.1:27017", "database": "logs", "max_pool_size": 2 }}"#
        )
        .unwrap();

        let loaded = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded.database.as_deref(), Some("logs"));
        assert_eq!(loaded.max_pool_size, Some(2));
        assert!(loaded.app_name.is_none());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "uri = ").unwrap();

        let err = ClientConfig::from_file(&path).unwrap_err();
        println!("🔍 解析错误: {}", err);
        assert!(matches!(err, QuickMongoError::ConfigError { .. }));
        assert!(!err.to_string().contains("error.config_parse"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ClientConfig::from_file("/nonexistent/rat_quickmongo.toml");
        assert!(matches!(result, Err(QuickMongoError::IoError(_))));
    }
}
