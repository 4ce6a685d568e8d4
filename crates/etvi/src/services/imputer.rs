//! 字段推导器

use regex::Regex;

use crate::{error::*, models::ReportData, traits::Impute};

/// 固定的系统名称
const SYSTEM_NAME: &str = "Workato";

/// url 缺失或非文本时的回退值
const UNKNOWN_URL: &str = "unknown";

/// 捕获 url 末段的正则
const URL_ID_PATTERN: &str = r"([^/]*)$";

/// 字段推导器
///
/// 从 url 形字段提取末段 id, 连同系统名称写入报告数据.
pub struct Imputer {
    url_id: Regex,
}

impl Imputer {
    /// 创建推导器
    pub fn new() -> Result<Self> {
        Ok(Self {
            url_id: Regex::new(URL_ID_PATTERN)?,
        })
    }

    /// 提取 url 末段
    fn url_id(&self, url: Option<&str>) -> String {
        let url = url.unwrap_or(UNKNOWN_URL);

        self.url_id
            .captures(url)
            .and_then(|c| c.get(1))
            .map_or_else(|| url.to_string(), |m| m.as_str().to_string())
    }
}

impl Impute for Imputer {
    fn impute(&self, data: &mut ReportData) {
        // 与数据中已有的同名字段冲突时覆盖
        data.system_name = Some(SYSTEM_NAME.to_string());
        data.job_id = Some(self.url_id(data.job_url.as_deref()));
        data.recipe_id = Some(self.url_id(data.recipe_url.as_deref()));
    }
}
