//! etvi 错误处理

use thiserror::Error;

/// etvi 标准返回类型
pub type Result<T> = std::result::Result<T, Error>;

/// etvi 标准错误类型
#[derive(Debug, Error)]
pub enum Error {
    #[error("serde_json failed: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("regex failed: {0}")]
    Regex(#[from] regex::Error),

    #[error("template failed: {0}")]
    Template(#[from] template_render::Error),
}
