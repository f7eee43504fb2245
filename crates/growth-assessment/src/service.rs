//! 体重评估服务
//!
//! 按出生日期、测量日期与体重计算百分位、Z评分、评估分类与参考范围。

use chrono::NaiveDate;
use growth_core::{
    utils, AssessmentCategory, Gender, GrowthError, ReferenceRange, Result, WeightAssessment,
    WeightAssessmentBrief,
};
use growth_reference::percentile_table::PercentileWeights;
use growth_reference::{
    get_percentile_weights, weight_to_zscore, zscore_to_percentile, MAX_AGE_MONTHS,
    MIN_AGE_MONTHS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 默认允许评估的最大月龄
pub const DEFAULT_MAX_AGE_MONTHS: i32 = 24;

/// 体重上限（克，不含）
pub const MAX_WEIGHT_G: i32 = 100_000;

/// 评估配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// 允许评估的最大月龄，参考表上限为60
    pub max_age_months: i32,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            max_age_months: DEFAULT_MAX_AGE_MONTHS,
        }
    }
}

impl AssessmentConfig {
    /// 校验配置取值
    pub fn validate(&self) -> Result<()> {
        if !(MIN_AGE_MONTHS..=MAX_AGE_MONTHS).contains(&self.max_age_months) {
            return Err(GrowthError::Config(format!(
                "max_age_months 必须在 {} 到 {} 之间: {}",
                MIN_AGE_MONTHS, MAX_AGE_MONTHS, self.max_age_months
            )));
        }
        Ok(())
    }
}

/// 体重评估服务
///
/// 无内部可变状态，可在线程间共享。
#[derive(Debug, Clone)]
pub struct AssessmentService {
    config: AssessmentConfig,
}

impl AssessmentService {
    /// 创建评估服务，配置非法时报错
    pub fn new(config: AssessmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 获取当前配置
    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// 完整体重评估
    ///
    /// 输入非法（体重超出克数范围、测量日早于出生日）时报错；
    /// 月龄超出评估窗口时返回Ok(None)。
    pub fn assess_weight(
        &self,
        weight_g: i32,
        gender: Gender,
        birth_date: NaiveDate,
        measure_date: NaiveDate,
    ) -> Result<Option<WeightAssessment>> {
        let (age_in_days, age_months) =
            match self.validated_age(weight_g, birth_date, measure_date)? {
                Some(age) => age,
                None => return Ok(None),
            };

        let weight_kg = f64::from(weight_g) / 1000.0;
        let z_score = match weight_to_zscore(weight_kg, gender, age_months) {
            Some(z_score) => z_score,
            None => return Ok(None),
        };
        let percentile = zscore_to_percentile(z_score);
        let assessment = AssessmentCategory::from_percentile(percentile);

        let reference_range = match get_percentile_weights(gender, age_months) {
            Some(weights) => to_reference_range(weights),
            None => return Ok(None),
        };

        Ok(Some(WeightAssessment {
            weight_g,
            age_in_days,
            gender,
            percentile: round_to(percentile, 1),
            z_score: round_to(z_score, 2),
            assessment,
            message: assessment.message().to_string(),
            reference_range,
        }))
    }

    /// 简要体重评估（列表场景）
    pub fn assess_weight_brief(
        &self,
        weight_g: i32,
        gender: Gender,
        birth_date: NaiveDate,
        measure_date: NaiveDate,
    ) -> Result<Option<WeightAssessmentBrief>> {
        let assessment = self.assess_weight(weight_g, gender, birth_date, measure_date)?;
        Ok(assessment.map(|full| WeightAssessmentBrief {
            percentile: full.percentile,
            assessment: full.assessment,
            message: full.message,
        }))
    }

    /// 校验体重与日期，返回日龄与月龄
    fn validated_age(
        &self,
        weight_g: i32,
        birth_date: NaiveDate,
        measure_date: NaiveDate,
    ) -> Result<Option<(i64, i32)>> {
        if weight_g <= 0 || weight_g >= MAX_WEIGHT_G {
            return Err(GrowthError::InvalidInput(format!(
                "体重必须在 1 到 {} 克之间: {}",
                MAX_WEIGHT_G - 1,
                weight_g
            )));
        }

        let age_in_days = utils::age_in_days(birth_date, measure_date);
        if age_in_days < 0 {
            return Err(GrowthError::InvalidInput(format!(
                "测量日期 {} 早于出生日期 {}",
                measure_date, birth_date
            )));
        }

        let age_months = utils::age_in_months(birth_date, measure_date);
        if age_months > self.config.max_age_months {
            debug!(
                "月龄 {} 超出评估窗口 {}，跳过评估",
                age_months, self.config.max_age_months
            );
            return Ok(None);
        }

        Ok(Some((age_in_days, age_months)))
    }
}

impl Default for AssessmentService {
    fn default() -> Self {
        Self {
            config: AssessmentConfig::default(),
        }
    }
}

fn to_reference_range(weights: &PercentileWeights) -> ReferenceRange {
    ReferenceRange {
        p3: to_grams(weights.p3),
        p15: to_grams(weights.p15),
        p50: to_grams(weights.p50),
        p85: to_grams(weights.p85),
        p97: to_grams(weights.p97),
    }
}

fn to_grams(weight_kg: f64) -> i32 {
    (weight_kg * 1000.0).round() as i32
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
