// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::domain::store::KvStore;
use crate::presentation::handlers::entry_handler;

/// 创建应用路由
///
/// # 参数
///
/// * `store` - 键值存储实例，作为构造注入的依赖
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<S>(store: Arc<S>) -> Router
where
    S: KvStore + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/set", post(entry_handler::set_entry::<S>))
        .route("/get/{key}", get(entry_handler::get_entry::<S>))
        .layer(Extension(store))
}

/// 首页端点
///
/// # 返回值
///
/// 返回静态描述文本
pub async fn home() -> &'static str {
    "kvfacade - Redis key-value facade"
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
