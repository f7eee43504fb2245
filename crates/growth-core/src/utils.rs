//! 通用工具函数

use chrono::NaiveDate;

/// 平均每月天数 (365.25 / 12)
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;

/// 计算出生日到测量日之间的日龄
///
/// 测量日早于出生日时返回负值，由调用方校验。
pub fn age_in_days(birth_date: NaiveDate, measure_date: NaiveDate) -> i64 {
    measure_date.signed_duration_since(birth_date).num_days()
}

/// 按平均月长将日龄换算为整月龄（向下取整）
pub fn age_in_months(birth_date: NaiveDate, measure_date: NaiveDate) -> i32 {
    let days = age_in_days(birth_date, measure_date);
    (days as f64 / AVERAGE_DAYS_PER_MONTH).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_age_in_days() {
        assert_eq!(age_in_days(date(2024, 1, 1), date(2024, 1, 1)), 0);
        assert_eq!(age_in_days(date(2024, 1, 1), date(2024, 1, 31)), 30);
        assert_eq!(age_in_days(date(2024, 1, 1), date(2025, 1, 1)), 366);
        assert_eq!(age_in_days(date(2024, 1, 2), date(2024, 1, 1)), -1);
    }

    #[test]
    fn test_age_in_months_flooring() {
        // 90天 = 2.96个月，取整为2
        assert_eq!(age_in_months(date(2024, 1, 1), date(2024, 3, 31)), 2);
        // 92天 = 3.02个月，取整为3
        assert_eq!(age_in_months(date(2024, 1, 1), date(2024, 4, 2)), 3);
        assert_eq!(age_in_months(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_age_in_months_near_birthday() {
        // 365天 = 11.99个月，整一年按平均月长仍记为11个月
        assert_eq!(age_in_months(date(2023, 1, 1), date(2024, 1, 1)), 11);
        // 闰年366天 = 12.02个月
        assert_eq!(age_in_months(date(2024, 1, 1), date(2025, 1, 1)), 12);
    }

    #[test]
    fn test_age_in_months_negative() {
        assert_eq!(age_in_months(date(2024, 2, 1), date(2024, 1, 1)), -2);
    }
}
