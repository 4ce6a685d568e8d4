//! 测试模板渲染

use serde_json::{Value, json};
use template_render::*;

fn test_compare(template: &str, data: Value, expect: &str) {
    let parsed: Template = template.parse().unwrap();
    assert_eq!(parsed.render(&data), expect);

    // 一次性接口等价
    assert_eq!(render(template, &data).unwrap(), expect);
}

fn test_error(template: &str, expect: &str) {
    let err = template
        .parse::<Template>()
        .err()
        .expect("parse should fail");
    assert_eq!(err.to_string(), expect);
}

//////////////// test ////////////////

#[test]
fn test_literal_identity() {
    let test = |template| test_compare(template, json!({}), template);

    test("");
    test("common template");
    test("multi\nline\n text\t");
    test("single { brace } and } reversed {");
}

#[test]
fn test_variable_replace() {
    test_compare("{{var}}", json!({"var": "variable"}), "variable");
    test_compare("{{ var }}", json!({"var": "variable"}), "variable");
    test_compare(
        "{{first}} {{second}}",
        json!({"first": "Anon", "second": "Tokyo"}),
        "Anon Tokyo",
    );

    // 未命中与 null 渲染为空
    test_compare("{{missing}}", json!({}), "");
    test_compare("{{var}}", json!({"var": null}), "");

    // 非文本标量取 JSON 文本形式
    test_compare("{{var}}", json!({"var": 42}), "42");
    test_compare("{{var}}", json!({"var": 2.5}), "2.5");
    test_compare("{{var}}", json!({"var": true}), "true");
}

#[test]
fn test_variable_escape() {
    test_compare("{{v}}", json!({"v": "<b>"}), "&lt;b&gt;");
    test_compare("{{v}}", json!({"v": "a & b"}), "a &amp; b");
    test_compare(
        "{{v}}",
        json!({"v": "\"quote\" 'single'"}),
        "&quot;quote&quot; &#x27;single&#x27;",
    );
}

#[test]
fn test_dotted_path() {
    test_compare("{{a.b.c}}", json!({"a": {"b": {"c": "deep"}}}), "deep");
    test_compare("{{a.b}}", json!({"a": {}}), "");
    test_compare("{{a.b}}", json!({"a": "scalar"}), "");
}

#[test]
fn test_empty_tag() {
    test_compare("a{{}}b", json!({}), "ab");
    test_compare("a{{   }}b", json!({}), "ab");
}

#[test]
fn test_unsupported_marker_is_variable() {
    // 未识别的首字符按普通变量处理
    test_compare("{{!comment}}", json!({}), "");
    test_compare("{{&v}}", json!({"&v": "raw"}), "raw");
}

#[test]
fn test_section_iterate() {
    test_compare("{{#items}}x{{/items}}", json!({"items": [1, 2, 3]}), "xxx");
    test_compare("{{#items}}x{{/items}}", json!({"items": []}), "");
    test_compare(
        "{{#items}}{{.}},{{/items}}",
        json!({"items": ["a", "b"]}),
        "a,b,",
    );
    test_compare(
        "{{#items}}{{name}};{{/items}}",
        json!({"items": [{"name": "x"}, {"name": "y"}]}),
        "x;y;",
    );
    test_compare("{{# items }}x{{/ items }}", json!({"items": [1]}), "x");
}

#[test]
fn test_section_scope() {
    test_compare("{{#outer}}{{x}}{{/outer}}", json!({"outer": {"x": 1}}), "1");

    // 内层覆盖外层, 缺失时回退外层
    test_compare(
        "{{#outer}}{{x}}-{{y}}{{/outer}}",
        json!({"outer": {"x": "in"}, "x": "out", "y": "up"}),
        "in-up",
    );

    // 区块结束后作用域弹出
    test_compare(
        "{{#outer}}{{x}}{{/outer}}{{x}}",
        json!({"outer": {"x": "in"}, "x": "out"}),
        "inout",
    );

    // 每次迭代独立压栈
    test_compare(
        "{{#items}}{{name}}{{/items}}",
        json!({"items": [{"name": "a"}, {}], "name": "root"}),
        "aroot",
    );

    // 映射区块恒渲染一次
    test_compare("{{#m}}x{{/m}}", json!({"m": {}}), "x");
}

#[test]
fn test_section_scalar() {
    // 标量区块压入标量本身
    test_compare("{{#n}}[{{.}}]{{/n}}", json!({"n": 5}), "[5]");
    test_compare("{{#text}}({{.}}){{/text}}", json!({"text": "t"}), "(t)");

    // 标量作用域中的点路径回退外层
    test_compare(
        "{{#n}}{{outer}}{{/n}}",
        json!({"n": 5, "outer": "o"}),
        "o",
    );

    // 数字零为真, 空文本为假
    test_compare("{{#n}}[{{.}}]{{/n}}", json!({"n": 0}), "[0]");
    test_compare("{{#text}}yes{{/text}}", json!({"text": ""}), "");

    test_compare("{{#flag}}yes{{/flag}}", json!({"flag": true}), "yes");
    test_compare("{{#flag}}yes{{/flag}}", json!({"flag": false}), "");
    test_compare("{{#missing}}yes{{/missing}}", json!({}), "");
}

#[test]
fn test_section_inverted() {
    test_compare("{{^flag}}hidden{{/flag}}", json!({}), "hidden");
    test_compare("{{^flag}}hidden{{/flag}}", json!({"flag": false}), "hidden");
    test_compare("{{^flag}}hidden{{/flag}}", json!({"flag": true}), "");
    test_compare("{{^items}}empty{{/items}}", json!({"items": []}), "empty");
    test_compare("{{^items}}empty{{/items}}", json!({"items": [1]}), "");

    // 反向区块不引入新作用域
    test_compare("{{^missing}}{{x}}{{/missing}}", json!({"x": "v"}), "v");
}

#[test]
fn test_section_nested() {
    test_compare(
        "{{#a}}{{#b}}{{v}}{{/b}}{{/a}}",
        json!({"a": {"b": [{"v": 1}, {"v": 2}]}}),
        "12",
    );

    test_compare(
        "<ul>{{#rows}}<li>{{#cells}}{{.}}{{/cells}}</li>{{/rows}}</ul>",
        json!({"rows": [{"cells": ["a", "b"]}, {"cells": []}]}),
        "<ul><li>ab</li><li></li></ul>",
    );
}

#[test]
fn test_error_unclosed_tag() {
    test_error("{{", "syntax error: unclosed tag");
    test_error("{{#a", "syntax error: unclosed tag");
    test_error("text {{name", "syntax error: unclosed tag");
}

#[test]
fn test_error_mismatched_closing() {
    test_error("{{#a}}{{/b}}", "structure error: mismatched closing tag: b");
    test_error("{{/a}}", "structure error: mismatched closing tag: a");

    // 关闭标记不跨层匹配
    test_error(
        "{{#a}}{{#b}}{{/a}}{{/b}}",
        "structure error: mismatched closing tag: a",
    );
}

#[test]
fn test_error_unclosed_sections() {
    test_error("{{#a}}x", "structure error: unclosed sections: a");
    test_error("{{#a}}{{#b}}", "structure error: unclosed sections: a, b");
    test_error("{{^a}}", "structure error: unclosed sections: a");
}
