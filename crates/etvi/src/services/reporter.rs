//! 错误报告生成器

use template_render::Template;

use crate::{error::*, models::ReportData, services::Imputer, traits::Impute};

/// 错误报告生成器
///
/// 持有解析后的模板, 可在多份数据间复用.
pub struct Reporter<I: Impute = Imputer> {
    template: Template,
    imputer: I,
}

impl Reporter {
    /// 从模板串创建默认生成器
    pub fn new(template: &str) -> Result<Self> {
        Self::with_imputer(template, Imputer::new()?)
    }
}

impl<I: Impute> Reporter<I> {
    /// 指定推导器创建生成器
    pub fn with_imputer(template: &str, imputer: I) -> Result<Self> {
        Ok(Self {
            template: template.parse()?,
            imputer,
        })
    }

    /// 推导并渲染错误报告正文
    pub fn render(&self, mut data: ReportData) -> Result<String> {
        self.imputer.impute(&mut data);
        Ok(self.template.render(&data.into_context()?))
    }
}
