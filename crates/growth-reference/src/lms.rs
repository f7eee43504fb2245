//! LMS（Box-Cox）变换
//!
//! 体重与Z评分、百分位之间的正反向换算。正向使用
//! z = ((w/M)^L - 1) / (L*S)，L趋近于零时退化为对数正态形式
//! z = ln(w/M) / S；反向为其逆运算。

use crate::weight_for_age::{lookup, LmsCoefficient};
use growth_core::Gender;

/// L趋近于零时切换到对数正态形式的阈值
const L_EPSILON: f64 = 1e-4;

/// 由体重（公斤）和LMS参数计算Z评分
pub(crate) fn zscore_with(weight_kg: f64, coef: &LmsCoefficient) -> f64 {
    let ratio = weight_kg / coef.m;
    if coef.l.abs() < L_EPSILON {
        ratio.ln() / coef.s
    } else {
        (ratio.powf(coef.l) - 1.0) / (coef.l * coef.s)
    }
}

/// 由Z评分和LMS参数反解体重（公斤）
pub(crate) fn weight_with(z_score: f64, coef: &LmsCoefficient) -> f64 {
    if coef.l.abs() < L_EPSILON {
        coef.m * (coef.s * z_score).exp()
    } else {
        coef.m * (1.0 + coef.l * coef.s * z_score).powf(1.0 / coef.l)
    }
}

/// 误差函数（Abramowitz & Stegun 7.1.26有理近似，最大误差约1.5e-7）
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// 标准正态分布累积分布函数
fn standard_normal_cdf(z_score: f64) -> f64 {
    0.5 * (1.0 + erf(z_score / 2.0_f64.sqrt()))
}

/// 正态分位数函数（Abramowitz & Stegun 26.2.23有理近似，最大误差约4.5e-4）
///
/// 输入为累积概率，调用方需保证 0 < p < 1。
pub(crate) fn inverse_normal_cdf(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p < 1.0);

    let c0 = 2.515517;
    let c1 = 0.802853;
    let c2 = 0.010328;
    let d1 = 1.432788;
    let d2 = 0.189269;
    let d3 = 0.001308;

    if p < 0.5 {
        let t = (-2.0 * p.ln()).sqrt();
        -(t - (c0 + c1 * t + c2 * t * t) / (1.0 + d1 * t + d2 * t * t + d3 * t * t * t))
    } else {
        let t = (-2.0 * (1.0 - p).ln()).sqrt();
        t - (c0 + c1 * t + c2 * t * t) / (1.0 + d1 * t + d2 * t * t + d3 * t * t * t)
    }
}

/// 将Z评分换算为百分位（0-100）
pub fn zscore_to_percentile(z_score: f64) -> f64 {
    100.0 * standard_normal_cdf(z_score)
}

/// 计算指定性别、月龄下某体重的Z评分
///
/// 体重非正或月龄超出参考范围时返回None。
pub fn weight_to_zscore(weight_kg: f64, gender: Gender, age_months: i32) -> Option<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return None;
    }
    let coef = lookup(gender, age_months)?;
    Some(zscore_with(weight_kg, coef))
}

/// 计算指定性别、月龄下某体重所处的百分位（0-100）
pub fn weight_to_percentile(weight_kg: f64, gender: Gender, age_months: i32) -> Option<f64> {
    let z_score = weight_to_zscore(weight_kg, gender, age_months)?;
    Some(zscore_to_percentile(z_score))
}

/// 反查指定性别、月龄下某百分位对应的体重（公斤）
///
/// 百分位必须落在开区间 (0, 100) 内；极端百分位使Box-Cox
/// 底数 1 + L*S*z 变为非正、逆变换无解时同样返回None。
pub fn percentile_to_weight(percentile: f64, gender: Gender, age_months: i32) -> Option<f64> {
    if !percentile.is_finite() || percentile <= 0.0 || percentile >= 100.0 {
        return None;
    }
    let coef = lookup(gender, age_months)?;
    let z_score = inverse_normal_cdf(percentile / 100.0);
    let weight_kg = weight_with(z_score, coef);
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return None;
    }
    Some(weight_kg)
}
