//! # Product REST API
//!
//! 一个基于 Axum 的商品 CRUD 服务，提供：
//! - `/api/v1/products` 下的完整增删改查与查询接口
//! - 仓储抽象（内存实现 + 可选的 PostgreSQL 实现）
//! - 统一的 JSON 错误响应和请求日志

pub mod app;
pub mod core;
pub mod infrastructure;
