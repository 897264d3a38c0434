//! 单位换算引擎
//!
//! 纯函数：给定数值、类别和源/目标单位，返回换算结果。
//! 长度、重量走线性系数表（相对基准单位），温度走逐对公式。

use crate::error::AppError;
use crate::models::Category;

/// 每单位对应的厘米数
const LENGTH_FACTORS: [(&str, f64); 7] = [
    ("Inch", 2.54),
    ("Foot", 30.48),
    ("Yard", 91.44),
    ("Mile", 160934.0),
    ("Centimeter", 1.0),
    ("Meter", 100.0),
    ("Kilometer", 100000.0),
];

/// 每单位对应的克数
const WEIGHT_FACTORS: [(&str, f64); 5] = [
    ("Pound", 453.592),
    ("Ounce", 28.3495),
    ("Ton", 907184.0),
    ("Kilogram", 1000.0),
    ("Gram", 1.0),
];

/// 结果固定保留的小数位数
pub const RESULT_DECIMALS: usize = 6;

fn factor(table: &[(&str, f64)], unit: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

/// 按系数表线性换算，任一单位不在表中时原样返回
fn convert_linear(table: &[(&str, f64)], value: f64, from: &str, to: &str) -> f64 {
    match (factor(table, from), factor(table, to)) {
        (Some(from_factor), Some(to_factor)) => value * from_factor / to_factor,
        _ => value,
    }
}

pub fn convert_length(value: f64, from: &str, to: &str) -> f64 {
    convert_linear(&LENGTH_FACTORS, value, from, to)
}

pub fn convert_weight(value: f64, from: &str, to: &str) -> f64 {
    convert_linear(&WEIGHT_FACTORS, value, from, to)
}

/// 温度换算，没有匹配的单位对（包括同单位）时原样返回
pub fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    match (from, to) {
        ("Celsius", "Fahrenheit") => value * 1.8 + 32.0,
        ("Fahrenheit", "Celsius") => (value - 32.0) / 1.8,
        ("Celsius", "Kelvin") => value + 273.15,
        ("Kelvin", "Celsius") => value - 273.15,
        ("Fahrenheit", "Kelvin") => (value - 32.0) / 1.8 + 273.15,
        ("Kelvin", "Fahrenheit") => (value - 273.15) * 1.8 + 32.0,
        _ => value,
    }
}

pub fn convert(value: f64, category: Category, from: &str, to: &str) -> f64 {
    match category {
        Category::Length => convert_length(value, from, to),
        Category::Weight => convert_weight(value, from, to),
        Category::Temperature => convert_temperature(value, from, to),
    }
}

/// 格式化为 "<数值保留 6 位小数> <单位>"
pub fn format_result(value: f64, unit: &str) -> String {
    format!("{:.*} {}", RESULT_DECIMALS, value, unit)
}

/// 换算并格式化
pub fn perform_conversion(value: f64, category: Category, from: &str, to: &str) -> String {
    format_result(convert(value, category, from, to), to)
}

/// 同单位时直接回显输入值（不固定小数位，但至少保留一位小数）
pub fn format_echo(value: f64, unit: &str) -> String {
    let mut number = format!("{:?}", value);
    // 指数形式 "1e20" 的尾数补 ".0"
    if let Some(exp) = number.find('e') {
        if !number[..exp].contains('.') {
            number.insert_str(exp, ".0");
        }
    }
    format!("{} {}", number, unit)
}

/// 解析用户输入，只接受有限的十进制数
pub fn parse_value(input: &str) -> Result<f64, AppError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidInput(input.to_string()))
}
