// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::domain::store::{KvStore, StoreError};

/// Redis存储
///
/// 基于Redis实现的键值存储后端，使用多路复用异步连接
#[derive(Clone)]
pub struct RedisStore {
    /// Redis客户端
    client: redis::Client,
}

impl RedisStore {
    /// 创建新的Redis存储实例
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    ///
    /// # 返回值
    ///
    /// * `Ok(RedisStore)` - Redis存储实例
    /// * `Err(StoreError)` - 创建过程中出现的错误
    pub async fn new(redis_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    /// 写入键值对
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 写入成功
    /// * `Err(StoreError)` - 写入过程中出现的错误
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        con.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    /// 读取指定键的值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 键对应的值，如果不存在则返回None
    /// * `Err(StoreError)` - 读取过程中出现的错误
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = con.get(key).await?;
        Ok(value)
    }
}
