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

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

/// 文本提取器
///
/// 负责从HTML内容中按CSS选择器提取文本
pub struct QuoteExtractor {
    /// 编译后的CSS选择器
    selector: Selector,
}

impl QuoteExtractor {
    /// 创建新的文本提取器实例
    ///
    /// # 参数
    ///
    /// * `selector` - CSS选择器字符串
    ///
    /// # 返回值
    ///
    /// * `Ok(QuoteExtractor)` - 文本提取器实例
    /// * `Err(anyhow::Error)` - 选择器无效
    pub fn new(selector: &str) -> Result<Self> {
        let selector = Selector::parse(selector)
            .map_err(|e| anyhow!("Invalid CSS selector '{}': {}", selector, e))?;
        Ok(Self { selector })
    }

    /// 提取匹配元素的文本
    ///
    /// 按文档顺序返回所有匹配元素的文本内容，空文本被跳过
    ///
    /// # 参数
    ///
    /// * `html` - 页面HTML内容
    ///
    /// # 返回值
    ///
    /// 提取出的文本列表，无匹配时为空列表
    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        document
            .select(&self.selector)
            .map(|element| {
                element
                    .text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string()
            })
            .filter(|text| !text.is_empty())
            .collect()
    }
}
