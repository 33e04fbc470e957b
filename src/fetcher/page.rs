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

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// 抓取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求错误
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP状态码
        status: reqwest::StatusCode,
        /// 请求的URL
        url: Url,
    },
}

/// 页面抓取器
///
/// 基于reqwest实现的单页HTTP抓取器，客户端在启动时构建一次
pub struct PageFetcher {
    /// HTTP客户端
    client: reqwest::Client,
}

impl PageFetcher {
    /// 创建新的页面抓取器实例
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(PageFetcher)` - 页面抓取器实例
    /// * `Err(FetchError)` - 客户端构建失败
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; kvfacade-fetcher/0.1)")
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// 抓取页面内容
    ///
    /// # 参数
    ///
    /// * `url` - 要抓取的页面URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 页面HTML内容
    /// * `Err(FetchError)` - 网络错误或非成功状态码
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.clone(),
            });
        }

        Ok(response.text().await?)
    }
}
