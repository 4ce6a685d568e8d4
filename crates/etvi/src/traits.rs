//! etvi 接口抽象

use crate::models::ReportData;

/// 字段推导
///
/// 渲染前写入推导字段, 供 Reporter 调用.
pub trait Impute {
    fn impute(&self, data: &mut ReportData);
}
