// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 存储实现模块
///
/// 包含Redis后端和内存后端两种实现
pub mod memory_store;
pub mod redis_store;
