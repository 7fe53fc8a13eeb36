//! 针对当前库/集合的操作
//!
//! 每个方法直接转发给驱动，驱动错误原样返回

use crate::app::MongoApp;
use crate::error::QuickMongoResult;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{AggregateOptions, FindOptions};
use mongodb::results::{InsertManyResult, InsertOneResult, UpdateResult};
use mongodb::Cursor;
use rat_logger::debug;
use serde::Serialize;

impl MongoApp {
    /// 插入单个文档
    pub async fn insert_one<T>(&self, value: &T) -> QuickMongoResult<InsertOneResult>
    where
        T: Serialize + Send + Sync,
    {
        debug!("[{}] insert_one", self.target_label());
        let result = self.typed_target::<T>().insert_one(value, None).await?;
        Ok(result)
    }

    /// 插入多个文档
    pub async fn insert_many<T>(&self, values: &[T]) -> QuickMongoResult<InsertManyResult>
    where
        T: Serialize + Send + Sync,
    {
        debug!("[{}] insert_many: {} 条", self.target_label(), values.len());
        let result = self.typed_target::<T>().insert_many(values, None).await?;
        Ok(result)
    }

    /// 删除单个文档，返回删除数量
    pub async fn delete(&self, filter: Document) -> QuickMongoResult<u64> {
        debug!("[{}] delete: {:?}", self.target_label(), filter);
        let result = self.target().delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }

    /// 删除 `key == value` 的所有文档，返回删除数量
    pub async fn delete_many(&self, key: &str, value: impl Into<Bson>) -> QuickMongoResult<u64> {
        let mut filter = Document::new();
        filter.insert(key, value.into());
        debug!("[{}] delete_many: {:?}", self.target_label(), filter);
        let result = self.target().delete_many(filter, None).await?;
        Ok(result.deleted_count)
    }

    /// 更新单个文档
    ///
    /// 更新文档可用 [`build_update_document`](crate::types::build_update_document) 组合
    /// `$set`、`$inc`、`$push`、`$pull`
    pub async fn update_one(&self, filter: Document, update: Document) -> QuickMongoResult<UpdateResult> {
        debug!("[{}] update_one: {:?} -> {:?}", self.target_label(), filter, update);
        let result = self.target().update_one(filter, update, None).await?;
        Ok(result)
    }

    /// 更新多个文档
    pub async fn update_many(&self, filter: Document, update: Document) -> QuickMongoResult<UpdateResult> {
        debug!("[{}] update_many: {:?} -> {:?}", self.target_label(), filter, update);
        let result = self.target().update_many(filter, update, None).await?;
        Ok(result)
    }

    /// 查询
    pub async fn find(
        &self,
        filter: Document,
        options: impl Into<Option<FindOptions>>,
    ) -> QuickMongoResult<Cursor<Document>> {
        debug!("[{}] find: {:?}", self.target_label(), filter);
        let cursor = self.target().find(filter, options).await?;
        Ok(cursor)
    }

    /// 查询单个文档
    pub async fn find_one(&self, filter: Document) -> QuickMongoResult<Option<Document>> {
        debug!("[{}] find_one: {:?}", self.target_label(), filter);
        let result = self.target().find_one(filter, None).await?;
        Ok(result)
    }

    /// 查询多个文档
    pub async fn find_many(&self, filter: Document) -> QuickMongoResult<Cursor<Document>> {
        self.find(filter, None).await
    }

    /// 多条件查询，所有条件以 `$and` 组合
    pub async fn find_many_by_filters(&self, filters: Vec<Document>) -> QuickMongoResult<Cursor<Document>> {
        self.find(doc! { "$and": filters }, None).await
    }

    /// 条件查询并排序
    pub async fn find_many_by_filters_sort(
        &self,
        filter: Document,
        sort: Document,
    ) -> QuickMongoResult<Cursor<Document>> {
        let mut find_options = FindOptions::default();
        find_options.sort = Some(sort);
        self.find(filter, find_options).await
    }

    /// 查询集合文档，最多返回 `limit` 条
    pub async fn find_collection(&self, limit: i64) -> QuickMongoResult<Cursor<Document>> {
        let mut find_options = FindOptions::default();
        find_options.limit = Some(limit);
        self.find(Document::new(), find_options).await
    }

    /// 查询集合文档，支持排序
    pub async fn find_collection_sort(&self, sort: Document, limit: i64) -> QuickMongoResult<Cursor<Document>> {
        let mut find_options = FindOptions::default();
        find_options.sort = Some(sort);
        find_options.limit = Some(limit);
        self.find(Document::new(), find_options).await
    }

    /// 查询集合文档，支持排序和条件
    pub async fn find_many_collection_sort(
        &self,
        filter: Document,
        sort: Document,
    ) -> QuickMongoResult<Cursor<Document>> {
        self.find_many_by_filters_sort(filter, sort).await
    }

    /// 按选项分页查询 `key == value` 的文档
    ///
    /// `sort` 作用于 `_id`：1 为升序，-1 为降序
    pub async fn collection_documents(
        &self,
        skip: u64,
        limit: i64,
        sort: i32,
        key: &str,
        value: impl Into<Bson>,
    ) -> QuickMongoResult<Cursor<Document>> {
        let mut filter = Document::new();
        filter.insert(key, value.into());

        let mut find_options = FindOptions::default();
        find_options.sort = Some(doc! { "_id": sort });
        find_options.limit = Some(limit);
        find_options.skip = Some(skip);

        self.find(filter, find_options).await
    }

    /// 统计分析
    pub async fn aggregate(
        &self,
        pipeline: Vec<Document>,
        options: impl Into<Option<AggregateOptions>>,
    ) -> QuickMongoResult<Cursor<Document>> {
        debug!("[{}] aggregate: {} 个阶段", self.target_label(), pipeline.len());
        let cursor = self.target().aggregate(pipeline, options).await?;
        Ok(cursor)
    }

    /// 按条件统计数量
    pub async fn count_documents(&self, filter: Document) -> QuickMongoResult<u64> {
        debug!("[{}] count_documents: {:?}", self.target_label(), filter);
        let count = self.target().count_documents(filter, None).await?;
        Ok(count)
    }

    /// 集合名与估算的文档数量
    pub async fn collection_count(&self) -> QuickMongoResult<(String, u64)> {
        debug!("[{}] collection_count", self.target_label());
        let collection = self.target();
        let size = collection.estimated_document_count(None).await?;
        Ok((collection.name().to_string(), size))
    }
}
