//! 渲染上下文

use serde_json::Value;

/// 复制压栈
///
/// 兄弟分支与相邻迭代互不可见新作用域.
pub(crate) fn pushed<'a>(stack: &[&'a Value], value: &'a Value) -> Vec<&'a Value> {
    let mut stack = stack.to_vec();
    stack.push(value);
    stack
}

/// 在上下文栈中解析名称
///
/// 由内向外对每个上下文尝试完整路径, 首个完整命中者生效.
/// `.` 指代最内层上下文本身, 不再做路径查找.
pub(crate) fn resolve_name<'a>(name: &str, stack: &[&'a Value]) -> Option<&'a Value> {
    if name == "." {
        return stack.last().copied();
    }

    let parts: Vec<&str> = name.split('.').collect();

    stack.iter().rev().find_map(|context| {
        parts
            .iter()
            .try_fold(*context, |value, part| value.as_object()?.get(*part))
    })
}

/// 真值策略
///
/// 空序列 / 空映射 / 空文本为假, 数字 (包括零) 恒为真.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
