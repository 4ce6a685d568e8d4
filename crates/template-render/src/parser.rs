//! 模板解析

use std::str::FromStr;

use serde_json::Value;

use crate::{error::*, token::*};

/// 逻辑模板
///
/// 模板串为包含 {{var}} / {{#name}}...{{/name}} / {{^name}}...{{/name}} 标记的文本.
///
/// 请使用 str::parse 创建; 解析后只读, 可跨线程复用于多次渲染.
/// 渲染时名称在上下文栈中由内向外解析, 未命中降级为空输出.
pub struct Template(Vec<Token>);

impl FromStr for Template {
    type Err = Error;

    fn from_str(template: &str) -> Result<Self> {
        parse_tokens(template).map(Self)
    }
}

impl Template {
    /// 渲染模板
    ///
    /// 总是成功, 渲染不定义错误.
    pub fn render(&self, data: &Value) -> String {
        let mut out = String::new();
        let stack = vec![data];

        for token in &self.0 {
            token.render(&stack, &mut out);
        }

        out
    }
}

/// 解析中的区块
struct OpenSection {
    name: String,
    inverted: bool,
    children: Vec<Token>,
}

impl OpenSection {
    fn new(name: &str, inverted: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            inverted,
            children: Vec::new(),
        }
    }

    fn close(self) -> Token {
        Token::Section(SectionToken {
            name: self.name,
            inverted: self.inverted,
            children: self.children,
        })
    }
}

/// 解析模板串为指令序列
fn parse_tokens(template: &str) -> Result<Vec<Token>> {
    let mut root: Vec<Token> = Vec::new();
    let mut open: Vec<OpenSection> = Vec::new();
    let mut rest = template;

    loop {
        // 查找下一个 {{
        let Some(start) = rest.find("{{") else {
            if !rest.is_empty() {
                current(&mut root, &mut open).push(Token::new_text(rest));
            }
            break;
        };

        if start > 0 {
            current(&mut root, &mut open).push(Token::new_text(&rest[..start]));
        }

        // 查找对应的 }}
        let tag = &rest[start + 2..];
        let Some(end) = tag.find("}}") else {
            return Err(SyntaxError::UnclosedTag.into());
        };

        let content = tag[..end].trim();
        rest = &tag[end + 2..];

        // 空标记不产生任何指令
        if content.is_empty() {
            continue;
        }

        if let Some(name) = content.strip_prefix('#') {
            open.push(OpenSection::new(name, false));
        } else if let Some(name) = content.strip_prefix('^') {
            open.push(OpenSection::new(name, true));
        } else if let Some(name) = content.strip_prefix('/') {
            // 关闭标记只与最内层区块匹配
            let name = name.trim();
            let section = match open.pop() {
                Some(section) if section.name == name => section,
                _ => return Err(StructureError::MismatchedClosingTag(name.to_string()).into()),
            };
            current(&mut root, &mut open).push(section.close());
        } else {
            current(&mut root, &mut open).push(Token::new_variable(content));
        }
    }

    // 扫描结束时所有区块必须闭合
    if !open.is_empty() {
        let names = open.into_iter().map(|section| section.name).collect();
        return Err(StructureError::UnclosedSections(names).into());
    }

    Ok(root)
}

/// 当前插入点: 最内层开放区块的子序列, 或顶层序列
fn current<'a>(root: &'a mut Vec<Token>, open: &'a mut Vec<OpenSection>) -> &'a mut Vec<Token> {
    match open.last_mut() {
        Some(section) => &mut section.children,
        None => root,
    }
}
