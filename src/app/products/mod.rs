//! 商品模块：数据模型、仓储抽象与 HTTP 处理器

pub mod handler;
pub mod memory;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod repository;
