//! # Growth Assessment
//!
//! 婴幼儿体重评估服务，包括：
//! - 完整评估：百分位、Z评分、评估分类、建议与参考范围
//! - 简要评估：列表场景的精简结果
//! - 生长曲线：逐月标准百分位参考序列

pub mod growth_curve;
pub mod service;

// 重新导出主要类型
pub use growth_curve::growth_curve;
pub use service::{
    AssessmentConfig, AssessmentService, DEFAULT_MAX_AGE_MONTHS, MAX_WEIGHT_G,
};
