// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取器模块
///
/// 实现页面抓取、文本提取和定时轮询循环
pub mod extract;
pub mod page;
pub mod poll;
