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
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{error, info};
use url::Url;

use crate::fetcher::extract::QuoteExtractor;
use crate::fetcher::page::{FetchError, PageFetcher};

/// 抓取循环
///
/// 按固定周期执行抓取-提取-打印循环
/// 单次循环失败时记录日志并继续，不终止进程
pub struct FetchLoop {
    /// 页面抓取器
    fetcher: PageFetcher,
    /// 文本提取器
    extractor: QuoteExtractor,
    /// 要抓取的页面URL
    url: Url,
    /// 抓取周期
    period: Duration,
}

impl FetchLoop {
    /// 创建新的抓取循环实例
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面抓取器
    /// * `extractor` - 文本提取器
    /// * `url` - 要抓取的页面URL
    /// * `period` - 抓取周期
    pub fn new(fetcher: PageFetcher, extractor: QuoteExtractor, url: Url, period: Duration) -> Self {
        Self {
            fetcher,
            extractor,
            url,
            period,
        }
    }

    /// 执行单次抓取循环
    ///
    /// 抓取页面并提取文本，独立于定时器，便于测试
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 按文档顺序提取出的文本
    /// * `Err(FetchError)` - 抓取失败
    pub async fn run_once(&self) -> Result<Vec<String>, FetchError> {
        let body = self.fetcher.fetch(&self.url).await?;
        Ok(self.extractor.extract(&body))
    }

    /// 运行抓取循环
    ///
    /// 第一次循环立即执行，之后按周期重复，直到收到关闭信号
    ///
    /// # 参数
    ///
    /// * `shutdown` - 关闭信号接收端
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!("Fetch loop started for {}", self.url);
        let mut ticker = interval(self.period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    println!(
                        "Scraping at {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
                    );

                    match self.run_once().await {
                        Ok(quotes) => {
                            for quote in &quotes {
                                println!("{}", quote);
                            }
                            info!("Extracted {} quotes from {}", quotes.len(), self.url);
                        }
                        Err(e) => {
                            // Keep polling, a single failed cycle is not fatal
                            error!("Fetch cycle failed: {}", e);
                        }
                    }
                }
                _ = shutdown.changed() => {
                    info!("Fetch loop shutting down");
                    break;
                }
            }
        }
    }
}
