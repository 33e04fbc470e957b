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

use kvfacade::fetcher::extract::QuoteExtractor;
use kvfacade::fetcher::page::{FetchError, PageFetcher};
use kvfacade::fetcher::poll::FetchLoop;
use std::time::Duration;
use tokio::sync::watch;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUOTES_PAGE: &str = r#"
<html><body>
    <div class="quote">
        <span class="text">First quote</span>
    </div>
    <div class="quote">
        <span class="text">Second quote</span>
    </div>
    <div class="quote">
        <span class="text">Third quote</span>
    </div>
</body></html>
"#;

fn fetch_loop(server_uri: &str, period: Duration) -> FetchLoop {
    let fetcher = PageFetcher::new(Duration::from_secs(5)).expect("client should build");
    let extractor = QuoteExtractor::new(".quote .text").expect("selector should parse");
    let url = Url::parse(server_uri).expect("mock server uri should parse");
    FetchLoop::new(fetcher, extractor, url, period)
}

/// 单次抓取循环测试
///
/// 验证固定页面的一次抓取按文档顺序产出全部三条文本
#[tokio::test]
async fn single_cycle_extracts_quotes_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(QUOTES_PAGE, "text/html"))
        .mount(&server)
        .await;

    let fetch_loop = fetch_loop(&server.uri(), Duration::from_secs(60));

    let quotes = fetch_loop.run_once().await.unwrap();

    assert_eq!(quotes, vec!["First quote", "Second quote", "Third quote"]);
}

/// 空页面测试
///
/// 验证无匹配元素的页面产出空结果而非错误
#[tokio::test]
async fn cycle_with_no_matches_yields_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html><body></body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let fetch_loop = fetch_loop(&server.uri(), Duration::from_secs(60));

    let quotes = fetch_loop.run_once().await.unwrap();

    assert!(quotes.is_empty());
}

/// 非成功状态码测试
///
/// 验证上游返回500时单次循环以类型化错误失败
#[tokio::test]
async fn upstream_error_fails_the_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetch_loop = fetch_loop(&server.uri(), Duration::from_secs(60));

    let result = fetch_loop.run_once().await;

    assert!(matches!(result, Err(FetchError::Status { status, .. }) if status.as_u16() == 500));
}

/// 循环容错与关闭测试
///
/// 验证上游持续失败时循环继续执行多个周期，并在收到关闭信号后退出
#[tokio::test]
async fn loop_survives_failures_and_stops_on_shutdown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetch_loop = fetch_loop(&server.uri(), Duration::from_millis(50));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        fetch_loop.run(shutdown_rx).await;
    });

    // Let a few cycles run against the failing upstream
    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown_tx.send(true).unwrap();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("loop should stop after shutdown signal")
        .unwrap();

    let requests = server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    assert!(
        requests.len() >= 2,
        "loop should keep polling after failures, saw {} requests",
        requests.len()
    );
}
