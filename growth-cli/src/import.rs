//! CSV体重记录导入
//!
//! 解析批量导入的体重CSV文件，表头兼容中英文列名。

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use growth_assessment::MAX_WEIGHT_G;
use growth_core::{GrowthError, Result};
use serde::Deserialize;

/// CSV中的单条体重记录
#[derive(Debug, Clone, Deserialize)]
pub struct WeightRecord {
    /// 测量日期
    #[serde(alias = "日期", alias = "Date", alias = "timestamp")]
    pub date: String,
    /// 体重（公斤）
    #[serde(alias = "体重", alias = "Weight", alias = "weight_kg")]
    pub weight: String,
    /// 备注
    #[serde(default, alias = "备注", alias = "Note")]
    pub note: Option<String>,
}

/// 解析记录日期，兼容日期与日期时间两种写法
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }
    Err(GrowthError::Parse(format!("无法解析日期: {raw}")))
}

/// 解析体重（公斤）并换算为克
pub fn parse_weight_g(raw: &str) -> Result<i32> {
    let weight_kg: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GrowthError::Parse(format!("无法解析体重: {raw}")))?;
    let weight_g = (weight_kg * 1000.0).round() as i32;
    if weight_g <= 0 || weight_g >= MAX_WEIGHT_G {
        return Err(GrowthError::Parse(format!("体重超出合理范围: {raw}")));
    }
    Ok(weight_g)
}

/// 读取CSV文件中的全部体重记录
///
/// 文件无法打开时整体报错；单条记录解析失败保留为该行的错误，
/// 由调用方决定跳过或中止，一行损坏不影响其余行。
pub fn read_weight_records(path: &Path) -> Result<Vec<Result<WeightRecord>>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| GrowthError::Parse(format!("无法读取CSV文件 {}: {}", path.display(), e)))?;

    let records = reader
        .deserialize()
        .map(|row| row.map_err(|e| GrowthError::Parse(format!("CSV记录解析失败: {e}"))))
        .collect();
    Ok(records)
}
