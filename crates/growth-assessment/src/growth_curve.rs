//! 生长曲线参考序列
//!
//! 为绘制生长曲线提供逐月的标准百分位参考体重。

use growth_core::{Gender, GrowthCurve, GrowthCurvePoint, GrowthError, Result};
use growth_reference::{get_percentile_weights, MAX_AGE_MONTHS, MIN_AGE_MONTHS};

/// 生成指定性别与月龄区间的生长曲线参考序列
///
/// 区间为闭区间，必须落在参考表覆盖的0-60月龄内。
pub fn growth_curve(gender: Gender, from_month: i32, to_month: i32) -> Result<GrowthCurve> {
    if from_month > to_month {
        return Err(GrowthError::InvalidInput(format!(
            "月龄区间无效: {} 到 {}",
            from_month, to_month
        )));
    }
    if from_month < MIN_AGE_MONTHS || to_month > MAX_AGE_MONTHS {
        return Err(GrowthError::InvalidInput(format!(
            "月龄区间超出参考范围 {}-{}: {} 到 {}",
            MIN_AGE_MONTHS, MAX_AGE_MONTHS, from_month, to_month
        )));
    }

    let mut curve_data = Vec::with_capacity((to_month - from_month + 1) as usize);
    for age_months in from_month..=to_month {
        if let Some(weights) = get_percentile_weights(gender, age_months) {
            curve_data.push(GrowthCurvePoint {
                age_months,
                p3: weights.p3,
                p15: weights.p15,
                p50: weights.p50,
                p85: weights.p85,
                p97: weights.p97,
            });
        }
    }

    Ok(GrowthCurve { gender, curve_data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range_curve() {
        let curve = growth_curve(Gender::Male, 0, 60).unwrap();
        assert_eq!(curve.gender, Gender::Male);
        assert_eq!(curve.curve_data.len(), 61);
        assert_eq!(curve.curve_data[0].age_months, 0);
        assert_eq!(curve.curve_data[60].age_months, 60);
    }

    #[test]
    fn test_partial_range_curve() {
        let curve = growth_curve(Gender::Female, 6, 12).unwrap();
        assert_eq!(curve.curve_data.len(), 7);
        assert_eq!(curve.curve_data[0].age_months, 6);
        assert_eq!(curve.curve_data[6].age_months, 12);
    }

    #[test]
    fn test_single_month_curve() {
        let curve = growth_curve(Gender::Female, 12, 12).unwrap();
        assert_eq!(curve.curve_data.len(), 1);
        // 12月龄女童中位数8.95公斤
        assert_eq!(curve.curve_data[0].p50, 8.95);
    }

    #[test]
    fn test_points_strictly_increasing() {
        let curve = growth_curve(Gender::Male, 0, 60).unwrap();
        for point in &curve.curve_data {
            assert!(
                point.p3 < point.p15
                    && point.p15 < point.p50
                    && point.p50 < point.p85
                    && point.p85 < point.p97,
                "{}月龄参考点未严格递增",
                point.age_months
            );
        }
    }

    #[test]
    fn test_invalid_range_is_error() {
        assert!(matches!(
            growth_curve(Gender::Male, 12, 6),
            Err(GrowthError::InvalidInput(_))
        ));
        assert!(matches!(
            growth_curve(Gender::Male, -1, 12),
            Err(GrowthError::InvalidInput(_))
        ));
        assert!(matches!(
            growth_curve(Gender::Male, 0, 61),
            Err(GrowthError::InvalidInput(_))
        ));
    }
}
