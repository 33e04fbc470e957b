// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use kvfacade::domain::store::{KvStore, StoreError};

/// 故障存储
///
/// 所有操作均失败的存储实现，用于验证上游故障被映射为500
pub struct FailingStore;

#[async_trait]
impl KvStore for FailingStore {
    async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}
