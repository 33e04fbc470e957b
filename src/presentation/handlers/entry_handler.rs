// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{rejection::JsonRejection, Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::{
    application::dto::entry::{EntryDto, SetEntryDto},
    domain::store::KvStore,
};

/// 写入键值对
///
/// 处理POST /set请求，校验必填字段后写入存储
/// 请求体不可解析或字段缺失/为空时返回400，且不触发存储写入
pub async fn set_entry<S>(
    Extension(store): Extension<Arc<S>>,
    payload: Result<Json<SetEntryDto>, JsonRejection>,
) -> impl IntoResponse
where
    S: KvStore + 'static,
{
    // A malformed body is treated the same as absent fields.
    let dto = match payload {
        Ok(Json(dto)) => dto,
        Err(rejection) => {
            warn!("Rejected /set payload: {}", rejection);
            return validation_error();
        }
    };

    let (key, value) = match dto.into_validated() {
        Some(entry) => entry,
        None => return validation_error(),
    };

    match store.set(&key, &value).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": format!("Set {} = {}", key, value)
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to set key {}: {}", key, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Store unavailable"
                })),
            )
                .into_response()
        }
    }
}

/// 读取键值对
///
/// 处理GET /get/{key}请求，键不存在时返回404
pub async fn get_entry<S>(
    Path(key): Path<String>,
    Extension(store): Extension<Arc<S>>,
) -> impl IntoResponse
where
    S: KvStore + 'static,
{
    match store.get(&key).await {
        Ok(Some(value)) => (StatusCode::OK, Json(EntryDto { key, value })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "Key not found"
            })),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to get key {}: {}", key, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Store unavailable"
                })),
            )
                .into_response()
        }
    }
}

/// 构建字段校验失败的响应
fn validation_error() -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "error": "Key and value are required"
        })),
    )
        .into_response()
}
