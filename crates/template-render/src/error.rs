//! 模板错误处理

use thiserror::Error;

/// template-render 标准返回类型
pub type Result<T> = std::result::Result<T, Error>;

/// template-render 标准错误类型
#[derive(Debug, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("structure error: {0}")]
    Structure(#[from] StructureError),
}

/// 标记定界错误
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("unclosed tag")]
    UnclosedTag,
}

/// 区块嵌套错误
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("mismatched closing tag: {0}")]
    MismatchedClosingTag(String),

    #[error("unclosed sections: {}", .0.join(", "))]
    UnclosedSections(Vec<String>),
}
