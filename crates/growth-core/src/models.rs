//! 核心数据模型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GrowthError;

/// 性别枚举
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,   // 男
    Female, // 女
}

impl Gender {
    /// 返回对外契约中使用的标识字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(GrowthError::InvalidInput(format!(
                "无法识别的性别: {other}"
            ))),
        }
    }
}

/// 体重评估分类
///
/// 按百分位划分为五个左闭右开区间，97及以上归入体重过重。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentCategory {
    SeverelyUnderweight, // 体重严重不足 [0, 3)
    Underweight,         // 体重偏低 [3, 15)
    Normal,              // 正常 [15, 85)
    Overweight,          // 体重偏高 [85, 97)
    SeverelyOverweight,  // 体重过重 [97, 100]
}

impl AssessmentCategory {
    /// 由百分位值确定评估分类
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile < 3.0 {
            AssessmentCategory::SeverelyUnderweight
        } else if percentile < 15.0 {
            AssessmentCategory::Underweight
        } else if percentile < 85.0 {
            AssessmentCategory::Normal
        } else if percentile < 97.0 {
            AssessmentCategory::Overweight
        } else {
            AssessmentCategory::SeverelyOverweight
        }
    }

    /// 返回对外契约中使用的分类字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentCategory::SeverelyUnderweight => "severely_underweight",
            AssessmentCategory::Underweight => "underweight",
            AssessmentCategory::Normal => "normal",
            AssessmentCategory::Overweight => "overweight",
            AssessmentCategory::SeverelyOverweight => "severely_overweight",
        }
    }

    /// 返回分类对应的建议信息
    pub fn message(&self) -> &'static str {
        match self {
            AssessmentCategory::SeverelyUnderweight => "体重严重不足，建议尽快就医咨询",
            AssessmentCategory::Underweight => "体重偏低，建议咨询儿科医生",
            AssessmentCategory::Normal => "体重在正常范围内，继续保持",
            AssessmentCategory::Overweight => "体重偏高，建议注意饮食均衡",
            AssessmentCategory::SeverelyOverweight => "体重过重，建议咨询儿科医生",
        }
    }
}

impl fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 标准百分位参考范围（单位为克）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceRange {
    pub p3: i32,
    pub p15: i32,
    pub p50: i32,
    pub p85: i32,
    pub p97: i32,
}

/// 完整体重评估结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightAssessment {
    pub weight_g: i32,                   // 体重（克）
    pub age_in_days: i64,                // 测量时日龄
    pub gender: Gender,                  // 性别
    pub percentile: f64,                 // 百分位（保留1位小数）
    pub z_score: f64,                    // Z评分（保留2位小数）
    pub assessment: AssessmentCategory,  // 评估分类
    pub message: String,                 // 建议信息
    pub reference_range: ReferenceRange, // 参考范围（克）
}

/// 简要体重评估结果（列表场景）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightAssessmentBrief {
    pub percentile: f64,                // 百分位（保留1位小数）
    pub assessment: AssessmentCategory, // 评估分类
    pub message: String,                // 建议信息
}

/// 生长曲线上单月龄的参考点（单位为公斤）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthCurvePoint {
    pub age_months: i32,
    pub p3: f64,
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p97: f64,
}

/// 生长曲线参考序列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthCurve {
    pub gender: Gender,
    pub curve_data: Vec<GrowthCurvePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        // 左闭右开区间边界
        assert_eq!(
            AssessmentCategory::from_percentile(0.0),
            AssessmentCategory::SeverelyUnderweight
        );
        assert_eq!(
            AssessmentCategory::from_percentile(2.9),
            AssessmentCategory::SeverelyUnderweight
        );
        assert_eq!(
            AssessmentCategory::from_percentile(3.0),
            AssessmentCategory::Underweight
        );
        assert_eq!(
            AssessmentCategory::from_percentile(14.9),
            AssessmentCategory::Underweight
        );
        assert_eq!(
            AssessmentCategory::from_percentile(15.0),
            AssessmentCategory::Normal
        );
        assert_eq!(
            AssessmentCategory::from_percentile(84.9),
            AssessmentCategory::Normal
        );
        assert_eq!(
            AssessmentCategory::from_percentile(85.0),
            AssessmentCategory::Overweight
        );
        assert_eq!(
            AssessmentCategory::from_percentile(96.9),
            AssessmentCategory::Overweight
        );
        assert_eq!(
            AssessmentCategory::from_percentile(97.0),
            AssessmentCategory::SeverelyOverweight
        );
        assert_eq!(
            AssessmentCategory::from_percentile(100.0),
            AssessmentCategory::SeverelyOverweight
        );
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&AssessmentCategory::SeverelyUnderweight).unwrap();
        assert_eq!(json, "\"severely_underweight\"");

        let json = serde_json::to_string(&AssessmentCategory::Normal).unwrap();
        assert_eq!(json, "\"normal\"");

        let parsed: AssessmentCategory = serde_json::from_str("\"overweight\"").unwrap();
        assert_eq!(parsed, AssessmentCategory::Overweight);
    }

    #[test]
    fn test_category_message() {
        assert_eq!(
            AssessmentCategory::Normal.message(),
            "体重在正常范围内，继续保持"
        );
        assert_eq!(
            AssessmentCategory::SeverelyUnderweight.message(),
            "体重严重不足，建议尽快就医咨询"
        );
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_serialization() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::to_string(&Gender::Female).unwrap(),
            "\"female\""
        );
    }
}
