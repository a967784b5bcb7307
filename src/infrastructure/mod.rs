//! 基础设施模块

#[cfg(feature = "database")]
pub mod database;
pub mod logger;
