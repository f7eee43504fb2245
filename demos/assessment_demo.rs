//! 生长评估演示程序
//!
//! 展示体重评估的核心功能，包括单次评估、批量月度评估、
//! 评估窗口行为与生长曲线参考序列

use chrono::NaiveDate;
use growth_assessment::{growth_curve, AssessmentConfig, AssessmentService};
use growth_core::Gender;
use growth_reference::{get_percentile_weights, weight_to_percentile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    println!("🚀 婴幼儿生长评估演示\n");

    let service = AssessmentService::default();
    let birth_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    // 1. 单次评估：出生约三个月的男婴
    let measure_date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let assessment = service
        .assess_weight(6500, Gender::Male, birth_date, measure_date)?
        .expect("月龄在评估窗口内");

    println!("📋 单次评估 (男婴, 6500克, 测量于 {}):", measure_date);
    println!("   百分位: P{}", assessment.percentile);
    println!("   Z评分: {:.2}", assessment.z_score);
    println!("   评估: {}", assessment.assessment);
    println!("   建议: {}", assessment.message);

    // 2. JSON输出（接口契约格式）
    println!("\n📦 JSON格式:");
    println!("{}", serde_json::to_string_pretty(&assessment)?);

    // 3. 批量月度评估：前6个月的体重记录
    println!("\n📊 批量月度评估:");
    let monthly_weights = [(31, 4400), (62, 5600), (92, 6400), (123, 7000), (153, 7500)];
    for (days, weight_g) in monthly_weights {
        let measure_date = birth_date + chrono::Duration::days(days);
        if let Some(brief) = service.assess_weight_brief(weight_g, Gender::Male, birth_date, measure_date)? {
            println!(
                "   第{}天 {}克: P{} ({})",
                days, weight_g, brief.percentile, brief.assessment
            );
        }
    }

    // 4. 评估窗口：默认24个月，超窗测量不评估
    let late_measure = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let result = service.assess_weight(13500, Gender::Male, birth_date, late_measure)?;
    println!("\n⏳ 28月龄在默认窗口内是否评估: {}", result.is_some());

    let wide_service = AssessmentService::new(AssessmentConfig { max_age_months: 60 })?;
    let result = wide_service.assess_weight(13500, Gender::Male, birth_date, late_measure)?;
    println!("   放宽窗口到60个月后可评估: {}", result.is_some());

    // 5. 直接查询参考数据
    let percentile = weight_to_percentile(9.0, Gender::Female, 12).expect("月龄在参考范围内");
    println!("\n🔍 12月龄女婴9.0公斤所处百分位: P{:.1}", percentile);

    let weights = get_percentile_weights(Gender::Female, 12).expect("月龄在参考范围内");
    println!(
        "   12月龄女童参考体重: P3={}公斤 P50={}公斤 P97={}公斤",
        weights.p3, weights.p50, weights.p97
    );

    // 6. 生长曲线摘录：每6个月一行
    println!("\n📈 男童生长曲线参考 (P3/P50/P97, 公斤):");
    let curve = growth_curve(Gender::Male, 0, 60)?;
    for point in curve.curve_data.iter().step_by(6) {
        println!(
            "   {:>2}月龄: {:>5.2} / {:>5.2} / {:>5.2}",
            point.age_months, point.p3, point.p50, point.p97
        );
    }

    println!("\n✅ 演示完成");
    Ok(())
}
