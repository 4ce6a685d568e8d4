//! 模板渲染
//!
//! 提供 Template 完成逻辑模板的解析与渲染

mod context;
mod error;
mod parser;
mod token;

pub use error::*;
pub use parser::Template;

use serde_json::Value;

/// 一次性解析并渲染模板
pub fn render(template: &str, data: &Value) -> Result<String> {
    Ok(template.parse::<Template>()?.render(data))
}
