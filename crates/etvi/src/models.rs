//! etvi 数据模型

pub mod report;

pub use report::*;
