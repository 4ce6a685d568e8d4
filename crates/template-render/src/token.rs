//! 模板指令片段

use std::borrow::Cow;

use serde_json::Value;

use crate::context::*;

/// 模板指令
pub enum Token {
    Text(String),
    Variable(String),
    Section(#[allow(private_interfaces)] SectionToken),
}

impl Token {
    /// 创建文本指令
    pub(crate) fn new_text(text: &str) -> Self {
        Self::Text(text.to_string())
    }

    /// 创建变量指令
    pub(crate) fn new_variable(name: &str) -> Self {
        Self::Variable(name.to_string())
    }

    /// 渲染指令, 追加到输出
    pub(crate) fn render(&self, stack: &[&Value], out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Variable(name) => {
                if let Some(value) = resolve_name(name, stack) {
                    out.push_str(&escape_html(&value_text(value)));
                }
            }
            Self::Section(section) => section.render(stack, out),
        }
    }
}

/// 区块指令
pub(crate) struct SectionToken {
    pub(crate) name: String,
    pub(crate) inverted: bool,
    pub(crate) children: Vec<Token>,
}

impl SectionToken {
    fn render(&self, stack: &[&Value], out: &mut String) {
        let value = resolve_name(&self.name, stack);

        if self.inverted {
            // 反向区块不引入新作用域
            if !value.is_some_and(is_truthy) {
                self.render_children(stack, out);
            }
            return;
        }

        match value {
            Some(Value::Array(items)) => {
                // 每次迭代独立压栈
                for item in items {
                    self.render_children(&pushed(stack, item), out);
                }
            }
            Some(value @ Value::Object(_)) => self.render_children(&pushed(stack, value), out),
            Some(value) if is_truthy(value) => self.render_children(&pushed(stack, value), out),
            _ => {}
        }
    }

    fn render_children(&self, stack: &[&Value], out: &mut String) {
        for token in &self.children {
            token.render(stack, out);
        }
    }
}

/// 变量的文本形式
///
/// null 与未命中一致, 渲染为空.
fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(text) => Cow::Borrowed(text),
        value => Cow::Owned(value.to_string()),
    }
}

/// HTML 转义
fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}
