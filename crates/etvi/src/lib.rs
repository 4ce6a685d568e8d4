//! etvi 业务逻辑
//!
//! 为 Workato 错误模板完成字段推导与填充

pub mod error;
pub mod models;
pub mod services;
pub mod traits;
pub mod utils;

pub use error::*;
