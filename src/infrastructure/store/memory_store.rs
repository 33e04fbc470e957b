// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::domain::store::{KvStore, StoreError};

/// 内存存储
///
/// 基于DashMap实现的进程内键值存储，用于测试和本地开发
#[derive(Clone, Default)]
pub struct MemoryStore {
    /// 键值条目
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// 创建新的内存存储实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 返回当前条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 判断存储是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }
}
