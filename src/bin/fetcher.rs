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

use kvfacade::config::settings::Settings;
use kvfacade::fetcher::extract::QuoteExtractor;
use kvfacade::fetcher::page::PageFetcher;
use kvfacade::fetcher::poll::FetchLoop;
use kvfacade::utils::telemetry;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;
use url::Url;

/// 主函数
///
/// 抓取器入口点，启动定时抓取循环并在ctrl-c时优雅退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting fetcher...");

    // 2. Load configuration
    let settings = Settings::new()?;
    let url = Url::parse(&settings.fetcher.url)?;
    info!("Configuration loaded");

    // 3. Build the loop components
    let fetcher = PageFetcher::new(Duration::from_secs(settings.fetcher.timeout_secs))?;
    let extractor = QuoteExtractor::new(&settings.fetcher.selector)?;
    let fetch_loop = FetchLoop::new(
        fetcher,
        extractor,
        url,
        Duration::from_secs(settings.fetcher.interval_secs),
    );

    // 4. Wire ctrl-c to the shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    fetch_loop.run(shutdown_rx).await;

    info!("Fetcher stopped");
    Ok(())
}
