//! MongoDB客户端封装
//!
//! 持有驱动连接句柄与当前选择的库名、集合名，
//! 库名和集合名在每次操作前通过链式调用设置

use crate::config::ClientConfig;
use crate::error::QuickMongoResult;
use crate::i18n::tf;
use crate::model::MongoModel;
use chrono::{DateTime, TimeZone};
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, ClientSession, Collection};
use rat_logger::{debug, info};

/// MongoDB链式操作入口
///
/// 克隆开销很小，克隆体共享同一个驱动连接池。
/// 库名/集合名是每个实例自己的临时状态，
/// 多任务并发使用时请各自克隆后再设置
///
/// ```no_run
/// # async fn demo() -> rat_quickmongo::QuickMongoResult<()> {
/// use rat_quickmongo::MongoApp;
/// use mongodb::bson::doc;
///
/// let mut app = MongoApp::connect("mongodb://localhost:27017").await?;
/// let user = app
///     .database("account")
///     .collection("users")
///     .find_one(doc! { "name": "alice" })
///     .await?;
/// # let _ = user;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MongoApp {
    /// 驱动
    client: Client,
    /// 连接地址
    dns: String,
    /// 库名
    database_name: String,
    /// 表名
    collection_name: String,
}

impl MongoApp {
    /// 连接数据库并检查连通性
    ///
    /// 连接地址中带有默认库名时，作为初始库名
    pub async fn connect(dns: &str) -> QuickMongoResult<Self> {
        crate::init();
        let options = parse_options(dns).await?;
        Self::establish(dns, options, None).await
    }

    /// 连接数据库并指定初始库名
    pub async fn connect_with_database(dns: &str, database: &str) -> QuickMongoResult<Self> {
        crate::init();
        let options = parse_options(dns).await?;
        Self::establish(dns, options, Some(database.to_string())).await
    }

    /// 按配置连接数据库
    pub async fn with_config(config: &ClientConfig) -> QuickMongoResult<Self> {
        crate::init();
        let mut options = parse_options(&config.uri).await?;

        if let Some(app_name) = &config.app_name {
            options.app_name = Some(app_name.clone());
        }
        if let Some(timeout) = config.connect_timeout() {
            options.connect_timeout = Some(timeout);
        }
        if let Some(timeout) = config.server_selection_timeout() {
            options.server_selection_timeout = Some(timeout);
        }
        if let Some(min) = config.min_pool_size {
            options.min_pool_size = Some(min);
        }
        if let Some(max) = config.max_pool_size {
            options.max_pool_size = Some(max);
        }

        Self::establish(&config.uri, options, config.database.clone()).await
    }

    /// 使用已有的驱动客户端
    ///
    /// 不做连通性检查，连接地址为空
    pub fn from_client(client: Client) -> Self {
        let database_name = client
            .default_database()
            .map(|db| db.name().to_string())
            .unwrap_or_default();

        Self {
            client,
            dns: String::new(),
            database_name,
            collection_name: String::new(),
        }
    }

    async fn establish(
        dns: &str,
        options: ClientOptions,
        database: Option<String>,
    ) -> QuickMongoResult<Self> {
        let default_database = options.default_database.clone();

        let client = Client::with_options(options).map_err(|e| {
            crate::quick_error!(
                connection,
                tf("error.mongo_connect", &[("message", &e.to_string())])
            )
        })?;

        // 检查连接
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                crate::quick_error!(
                    connection,
                    tf("error.mongo_ping", &[("message", &e.to_string())])
                )
            })?;

        let database_name = database.or(default_database).unwrap_or_default();
        info!("✅ MongoDB连接成功, 初始库: '{}'", database_name);

        Ok(Self {
            client,
            dns: dns.to_string(),
            database_name,
            collection_name: String::new(),
        })
    }

    /// 设置库名
    pub fn database(&mut self, database: &str) -> &mut Self {
        self.database_name = database.to_string();
        self
    }

    /// 设置表名
    pub fn collection(&mut self, collection: &str) -> &mut Self {
        self.collection_name = collection.to_string();
        self
    }

    /// 传入模型自动获取库名和表名
    ///
    /// 模型未声明的一项保持当前值不变
    pub fn model<M: MongoModel + ?Sized>(&mut self, value: &M) -> &mut Self {
        if let Some(database) = value.database() {
            self.database_name = database.to_string();
        }
        if let Some(table) = value.table_name() {
            self.collection_name = table.to_string();
        }
        debug!(
            "模型绑定: {}.{}",
            self.database_name, self.collection_name
        );
        self
    }

    /// 当前库名
    pub fn current_database(&self) -> &str {
        &self.database_name
    }

    /// 当前表名
    pub fn current_collection(&self) -> &str {
        &self.collection_name
    }

    /// 连接地址
    pub fn dns(&self) -> &str {
        &self.dns
    }

    /// 驱动客户端
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 当前操作的集合
    pub fn target(&self) -> Collection<Document> {
        self.typed_target()
    }

    /// 以指定文档类型获取当前操作的集合
    pub fn typed_target<T: Send + Sync>(&self) -> Collection<T> {
        self.client
            .database(&self.database_name)
            .collection(&self.collection_name)
    }

    pub(crate) fn target_label(&self) -> String {
        format!("{}.{}", self.database_name, self.collection_name)
    }

    /// 开启会话
    pub async fn session(&self) -> QuickMongoResult<ClientSession> {
        let session = self.client.start_session(None).await?;
        Ok(session)
    }

    /// 格式化为BSON时间字符串
    pub fn bson_time<Tz: TimeZone>(&self, value: &DateTime<Tz>) -> String {
        crate::utils::bson_time(value)
    }

    /// 关闭
    ///
    /// 会等待仍存活的会话和游标释放；共享同一连接池的克隆体随之不可用
    pub async fn close(self) {
        self.client.shutdown().await;
        info!("MongoDB连接已关闭");
    }
}

async fn parse_options(dns: &str) -> QuickMongoResult<ClientOptions> {
    ClientOptions::parse(dns).await.map_err(|e| {
        crate::quick_error!(
            connection,
            tf("error.mongo_connect", &[("message", &e.to_string())])
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mongo_model;

    struct Order;
    mongo_model!(Order, database = "shop", table = "orders");

    struct Invoice;
    mongo_model!(Invoice, table = "invoices");

    struct Anonymous;
    impl MongoModel for Anonymous {}

    async fn offline_app() -> MongoApp {
        // 驱动不会在创建客户端时立即建立连接
        let client = Client::with_uri_str("mongodb://127.0.0.1:27017").await.unwrap();
        MongoApp::from_client(client)
    }

    #[tokio::test]
    async fn test_from_client_starts_empty() {
        let app = offline_app().await;
        assert_eq!(app.current_database(), "");
        assert_eq!(app.current_collection(), "");
        assert_eq!(app.dns(), "");
    }

    #[tokio::test]
    async fn test_from_client_uses_uri_default_database() {
        let client = Client::with_uri_str("mongodb://127.0.0.1:27017/reports")
            .await
            .unwrap();
        let app = MongoApp::from_client(client);
        assert_eq!(app.current_database(), "reports");
    }

    #[tokio::test]
    async fn test_last_setter_wins() {
        let mut app = offline_app().await;
        app.database("a").collection("x").database("b").collection("y");
        assert_eq!(app.target_label(), "b.y");

        app.collection("y").collection("y");
        assert_eq!(app.current_collection(), "y");
    }

    #[tokio::test]
    async fn test_model_binding() {
        let mut app = offline_app().await;
        app.model(&Order);
        assert_eq!(app.current_database(), "shop");
        assert_eq!(app.current_collection(), "orders");

        // 只声明表名的模型保留当前库名
        app.model(&Invoice);
        assert_eq!(app.current_database(), "shop");
        assert_eq!(app.current_collection(), "invoices");

        // 未声明任何名称的模型不改变当前状态
        app.model(&Anonymous);
        assert_eq!(app.target_label(), "shop.invoices");
    }

    #[tokio::test]
    async fn test_target_follows_selection() {
        let mut app = offline_app().await;
        let target = app.database("shop").collection("orders").target();
        assert_eq!(target.name(), "orders");
        assert_eq!(target.namespace().db, "shop");
    }

    #[tokio::test]
    async fn test_clones_are_independent() {
        let mut app = offline_app().await;
        app.database("shop").collection("orders");

        let mut other = app.clone();
        other.collection("refunds");

        assert_eq!(app.current_collection(), "orders");
        assert_eq!(other.target_label(), "shop.refunds");
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_uri() {
        let result = MongoApp::connect("not-a-mongo-uri").await;
        assert!(matches!(
            result,
            Err(crate::error::QuickMongoError::ConnectionError { .. })
        ));
    }
}
