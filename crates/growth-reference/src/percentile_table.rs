//! 标准百分位参考表
//!
//! 预先计算每个性别、月龄下P3/P15/P50/P85/P97对应的参考体重。
//! 进程内只构建一次，构建完成后以只读方式共享。

use std::sync::OnceLock;

use growth_core::Gender;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lms::{inverse_normal_cdf, weight_with};
use crate::weight_for_age::{
    LmsCoefficient, AGE_COUNT, BOYS_WEIGHT_FOR_AGE, GIRLS_WEIGHT_FOR_AGE, MAX_AGE_MONTHS,
    MIN_AGE_MONTHS,
};

/// 标准百分位序列
pub const STANDARD_PERCENTILES: [i32; 5] = [3, 15, 50, 85, 97];

/// 单月龄的标准百分位参考体重（公斤，保留2位小数）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileWeights {
    pub p3: f64,
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p97: f64,
}

impl PercentileWeights {
    /// 按百分位序号取参考体重，非标准百分位返回None
    pub fn get(&self, percentile: i32) -> Option<f64> {
        match percentile {
            3 => Some(self.p3),
            15 => Some(self.p15),
            50 => Some(self.p50),
            85 => Some(self.p85),
            97 => Some(self.p97),
            _ => None,
        }
    }
}

struct PercentileTables {
    boys: [PercentileWeights; AGE_COUNT],
    girls: [PercentileWeights; AGE_COUNT],
}

static PERCENTILE_TABLES: OnceLock<PercentileTables> = OnceLock::new();

fn tables() -> &'static PercentileTables {
    PERCENTILE_TABLES.get_or_init(|| {
        debug!("构建体重别年龄标准百分位参考表");
        PercentileTables {
            boys: std::array::from_fn(|age| reference_weights(&BOYS_WEIGHT_FOR_AGE[age])),
            girls: std::array::from_fn(|age| reference_weights(&GIRLS_WEIGHT_FOR_AGE[age])),
        }
    })
}

fn reference_weights(coef: &LmsCoefficient) -> PercentileWeights {
    let weight_at = |percentile: f64| {
        let z_score = inverse_normal_cdf(percentile / 100.0);
        round2(weight_with(z_score, coef))
    };
    PercentileWeights {
        p3: weight_at(3.0),
        p15: weight_at(15.0),
        p50: weight_at(50.0),
        p85: weight_at(85.0),
        p97: weight_at(97.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 查询指定性别与月龄的标准百分位参考体重
///
/// 月龄超出0-60范围时返回None。
pub fn get_percentile_weights(
    gender: Gender,
    age_months: i32,
) -> Option<&'static PercentileWeights> {
    if !(MIN_AGE_MONTHS..=MAX_AGE_MONTHS).contains(&age_months) {
        return None;
    }
    let tables = tables();
    let table = match gender {
        Gender::Male => &tables.boys,
        Gender::Female => &tables.girls,
    };
    Some(&table[age_months as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lms::weight_to_percentile;
    use crate::weight_for_age::lookup;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tables_cover_all_ages() {
        for gender in [Gender::Male, Gender::Female] {
            for age_months in MIN_AGE_MONTHS..=MAX_AGE_MONTHS {
                assert!(get_percentile_weights(gender, age_months).is_some());
            }
        }
    }

    #[test]
    fn test_out_of_range_returns_none() {
        assert!(get_percentile_weights(Gender::Male, -1).is_none());
        assert!(get_percentile_weights(Gender::Male, 61).is_none());
        assert!(get_percentile_weights(Gender::Female, 61).is_none());
    }

    #[test]
    fn test_percentiles_strictly_increasing() {
        for gender in [Gender::Male, Gender::Female] {
            for age_months in MIN_AGE_MONTHS..=MAX_AGE_MONTHS {
                let weights = get_percentile_weights(gender, age_months).unwrap();
                assert!(
                    weights.p3 < weights.p15
                        && weights.p15 < weights.p50
                        && weights.p50 < weights.p85
                        && weights.p85 < weights.p97,
                    "{gender} {age_months}月龄百分位参考体重未严格递增: {weights:?}"
                );
            }
        }
    }

    #[test]
    fn test_median_column_matches_reference_median() {
        for gender in [Gender::Male, Gender::Female] {
            for age_months in MIN_AGE_MONTHS..=MAX_AGE_MONTHS {
                let weights = get_percentile_weights(gender, age_months).unwrap();
                let median = lookup(gender, age_months).unwrap().m;
                assert_abs_diff_eq!(weights.p50, median, epsilon = 0.011);
            }
        }
    }

    #[test]
    fn test_round_trip_against_forward_transform() {
        // 参考体重四舍五入到2位小数，正向换算应落回原百分位附近
        for gender in [Gender::Male, Gender::Female] {
            for age_months in [0, 6, 12, 24, 36, 48, 60] {
                let weights = get_percentile_weights(gender, age_months).unwrap();
                for percentile in STANDARD_PERCENTILES {
                    let weight = weights.get(percentile).unwrap();
                    let recovered =
                        weight_to_percentile(weight, gender, age_months).unwrap();
                    assert_abs_diff_eq!(recovered, f64::from(percentile), epsilon = 0.5);
                }
            }
        }
    }

    #[test]
    fn test_newborn_reference_weights() {
        let boys = get_percentile_weights(Gender::Male, 0).unwrap();
        assert_abs_diff_eq!(boys.p3, 2.51, epsilon = 0.05);
        assert_abs_diff_eq!(boys.p50, 3.35, epsilon = 0.01);
        assert_abs_diff_eq!(boys.p97, 4.35, epsilon = 0.05);

        let girls = get_percentile_weights(Gender::Female, 0).unwrap();
        assert_abs_diff_eq!(girls.p50, 3.23, epsilon = 0.01);
    }

    #[test]
    fn test_get_rejects_nonstandard_percentile() {
        let weights = get_percentile_weights(Gender::Male, 6).unwrap();
        assert!(weights.get(40).is_none());
        assert!(weights.get(0).is_none());
    }
}
