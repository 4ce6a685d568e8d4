//! 错误报告数据

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::*;

/// 错误报告数据
///
/// 已知字段参与推导, 其余字段经 extra 原样传给模板.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReportData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_url: Option<String>,

    // 推导字段, 渲染前由 Imputer 写入
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FromStr for ReportData {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl ReportData {
    /// 转为渲染用根上下文
    pub fn into_context(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[test]
#[cfg(test)]
fn test_report_data_serialize() {
    let data: ReportData = r#"{"job_url": "https://x/jobs/1", "message": "boom"}"#
        .parse()
        .unwrap();
    assert_eq!(data.job_url.as_deref(), Some("https://x/jobs/1"));
    assert_eq!(data.extra["message"], serde_json::json!("boom"));

    // None 字段不落入上下文
    let context = data.into_context().unwrap();
    assert_eq!(
        context,
        serde_json::json!({"job_url": "https://x/jobs/1", "message": "boom"})
    );
}
