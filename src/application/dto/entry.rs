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

use serde::{Deserialize, Serialize};

/// 写入请求数据传输对象
///
/// 用于封装客户端发起的键值写入请求，字段缺失时为None
#[derive(Debug, Deserialize, Serialize)]
pub struct SetEntryDto {
    /// 要写入的键
    pub key: Option<String>,
    /// 要写入的值
    pub value: Option<String>,
}

impl SetEntryDto {
    /// 校验必填字段
    ///
    /// 缺失字段与空字符串同等对待，均视为无效
    ///
    /// # 返回值
    ///
    /// * `Some((key, value))` - 两个字段均存在且非空
    /// * `None` - 任一字段缺失或为空
    pub fn into_validated(self) -> Option<(String, String)> {
        match (self.key, self.value) {
            (Some(key), Some(value)) if !key.is_empty() && !value.is_empty() => {
                Some((key, value))
            }
            _ => None,
        }
    }
}

/// 读取响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct EntryDto {
    /// 键
    pub key: String,
    /// 值
    pub value: String,
}
