//! # Growth Reference
//!
//! WHO儿童生长标准参考数据与LMS变换，包括：
//! - 体重别年龄LMS参数表：0-60月龄，男女分列
//! - Z评分与百分位的正反向换算
//! - 标准百分位参考体重缓存：P3/P15/P50/P85/P97

pub mod lms;
pub mod percentile_table;
pub mod weight_for_age;

// 重新导出主要类型
pub use lms::{percentile_to_weight, weight_to_percentile, weight_to_zscore, zscore_to_percentile};
pub use percentile_table::{get_percentile_weights, PercentileWeights, STANDARD_PERCENTILES};
pub use weight_for_age::{lookup, LmsCoefficient, MAX_AGE_MONTHS, MIN_AGE_MONTHS};
