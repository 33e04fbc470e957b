// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 后端错误
    #[error("Store backend error: {0}")]
    Backend(#[from] redis::RedisError),
    /// 存储不可用
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// 键值存储接口
///
/// 对外部键值服务的抽象，同一键多次写入时后写覆盖先写
/// 不提供删除和过期语义
#[async_trait]
pub trait KvStore: Send + Sync {
    /// 写入键值对
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// 读取指定键的值，键不存在时返回None
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}
