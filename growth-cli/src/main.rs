//! 生长评估命令行工具
//!
//! 基于WHO儿童生长标准评估婴幼儿体重，支持单次评估、
//! CSV批量导入评估与标准百分位参考表打印。

mod config;
mod import;

use std::path::Path;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use growth_assessment::{growth_curve, AssessmentService};
use growth_core::{Gender, GrowthCurve, WeightAssessment};
use tracing::{info, warn};

/// 生长评估命令行参数
#[derive(Parser, Debug)]
#[command(name = "growth-cli")]
#[command(about = "婴幼儿生长曲线评估工具 (WHO儿童生长标准)")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别，缺省取配置中的 logging.level
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// 子命令
#[derive(Subcommand, Debug)]
enum Command {
    /// 评估单次体重测量
    Assess {
        /// 性别 (male/female)
        #[arg(short, long)]
        gender: String,

        /// 出生日期 (YYYY-MM-DD)
        #[arg(short, long)]
        birth_date: String,

        /// 测量日期，缺省为今天
        #[arg(short, long)]
        measure_date: Option<String>,

        /// 体重（克）
        #[arg(long, conflicts_with = "weight_kg")]
        weight_g: Option<i32>,

        /// 体重（公斤）
        #[arg(long)]
        weight_kg: Option<String>,

        /// 输出格式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 从CSV文件批量导入并评估体重记录
    Import {
        /// CSV文件路径，表头需包含日期与体重列
        #[arg(long)]
        csv_path: String,

        /// 性别 (male/female)
        #[arg(short, long)]
        gender: String,

        /// 出生日期 (YYYY-MM-DD)
        #[arg(short, long)]
        birth_date: String,

        /// 输出格式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 打印WHO体重别年龄标准百分位参考表
    Curve {
        /// 性别 (male/female)
        #[arg(short, long)]
        gender: String,

        /// 起始月龄
        #[arg(long, default_value = "0")]
        from_month: i32,

        /// 结束月龄
        #[arg(long, default_value = "60")]
        to_month: i32,

        /// 输出格式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    match format {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        other => bail!("不支持的输出格式: {other}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;

    // 初始化日志，命令行参数优先于配置文件
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt().with_env_filter(&log_level).init();

    let service = AssessmentService::new(config.assessment.clone())?;

    match &args.command {
        Command::Assess {
            gender,
            birth_date,
            measure_date,
            weight_g,
            weight_kg,
            format,
        } => run_assess(
            &service,
            gender,
            birth_date,
            measure_date.as_deref(),
            *weight_g,
            weight_kg.as_deref(),
            format,
        ),
        Command::Import {
            csv_path,
            gender,
            birth_date,
            format,
        } => run_import(&service, csv_path, gender, birth_date, format),
        Command::Curve {
            gender,
            from_month,
            to_month,
            format,
        } => run_curve(gender, *from_month, *to_month, format),
    }
}

fn run_assess(
    service: &AssessmentService,
    gender: &str,
    birth_date: &str,
    measure_date: Option<&str>,
    weight_g: Option<i32>,
    weight_kg: Option<&str>,
    format: &str,
) -> Result<()> {
    let format = parse_format(format)?;
    let gender: Gender = gender.parse()?;
    let birth_date = import::parse_date(birth_date)?;
    let measure_date = match measure_date {
        Some(raw) => import::parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let weight_g = resolve_weight(weight_g, weight_kg)?;

    info!("评估体重: {} 克, 性别 {}, 测量日期 {}", weight_g, gender, measure_date);

    match service.assess_weight(weight_g, gender, birth_date, measure_date)? {
        Some(assessment) => match format {
            OutputFormat::Table => print_assessment(&assessment),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
        },
        None => println!(
            "⚠️ 月龄超出评估窗口（最大 {} 个月），未评估",
            service.config().max_age_months
        ),
    }
    Ok(())
}

fn resolve_weight(weight_g: Option<i32>, weight_kg: Option<&str>) -> Result<i32> {
    match (weight_g, weight_kg) {
        (Some(grams), _) => Ok(grams),
        (None, Some(raw)) => Ok(import::parse_weight_g(raw)?),
        (None, None) => bail!("必须提供 --weight-g 或 --weight-kg"),
    }
}

fn print_assessment(assessment: &WeightAssessment) {
    let range = &assessment.reference_range;
    println!("📋 体重评估结果");
    println!("   日龄: {} 天", assessment.age_in_days);
    println!("   体重: {} 克", assessment.weight_g);
    println!("   百分位: P{}", assessment.percentile);
    println!("   Z评分: {:.2}", assessment.z_score);
    println!("   评估: {}", assessment.assessment);
    println!("   建议: {}", assessment.message);
    println!(
        "   参考范围: P3={}克 P15={}克 P50={}克 P85={}克 P97={}克",
        range.p3, range.p15, range.p50, range.p85, range.p97
    );
}

/// 批量评估输出行
#[derive(Debug, serde::Serialize)]
struct ImportRow {
    measure_date: NaiveDate,
    note: Option<String>,
    #[serde(flatten)]
    assessment: WeightAssessment,
}

fn run_import(
    service: &AssessmentService,
    csv_path: &str,
    gender: &str,
    birth_date: &str,
    format: &str,
) -> Result<()> {
    let format = parse_format(format)?;
    let gender: Gender = gender.parse()?;
    let birth_date = import::parse_date(birth_date)?;

    let records = import::read_weight_records(Path::new(csv_path))?;
    info!("从 {} 读取到 {} 行数据", csv_path, records.len());

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    // 表头占第1行，数据行从第2行起计
    for (line, record) in records.iter().enumerate().map(|(i, r)| (i + 2, r)) {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("第 {} 行: {}", line, e);
                skipped += 1;
                continue;
            }
        };
        match assess_record(service, gender, birth_date, record) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {
                warn!("第 {} 行: 月龄超出评估窗口，跳过", line);
                skipped += 1;
            }
            Err(e) => {
                warn!("第 {} 行: {}", line, e);
                skipped += 1;
            }
        }
    }

    match format {
        OutputFormat::Table => print_import_table(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    println!("✅ 完成: 成功 {} 条, 跳过 {} 条", rows.len(), skipped);
    Ok(())
}

fn assess_record(
    service: &AssessmentService,
    gender: Gender,
    birth_date: NaiveDate,
    record: &import::WeightRecord,
) -> Result<Option<ImportRow>> {
    let measure_date = import::parse_date(&record.date)?;
    let weight_g = import::parse_weight_g(&record.weight)?;
    let assessment = service.assess_weight(weight_g, gender, birth_date, measure_date)?;
    Ok(assessment.map(|assessment| ImportRow {
        measure_date,
        note: record.note.clone(),
        assessment,
    }))
}

fn print_import_table(rows: &[ImportRow]) {
    println!(
        "{:<12} {:>8} {:>8} {:>6}  {}",
        "日期", "体重(克)", "百分位", "Z评分", "评估"
    );
    for row in rows {
        let assessment = &row.assessment;
        println!(
            "{:<12} {:>8} {:>8} {:>6.2}  {}",
            row.measure_date,
            assessment.weight_g,
            format!("P{}", assessment.percentile),
            assessment.z_score,
            assessment.assessment
        );
    }
}

fn run_curve(gender: &str, from_month: i32, to_month: i32, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let gender: Gender = gender.parse()?;
    let curve = growth_curve(gender, from_month, to_month)?;

    match format {
        OutputFormat::Table => print_curve_table(&curve),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
    }
    Ok(())
}

fn print_curve_table(curve: &GrowthCurve) {
    println!("📈 WHO体重别年龄参考表 ({}, 单位公斤)", curve.gender);
    println!(
        "{:<6} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "月龄", "P3", "P15", "P50", "P85", "P97"
    );
    for point in &curve.curve_data {
        println!(
            "{:<6} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>7.2}",
            point.age_months, point.p3, point.p15, point.p50, point.p85, point.p97
        );
    }
}
