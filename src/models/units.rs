//! # 单位与坐标轴标签
//!
//! 物理单位、带单位的物理量，以及坐标轴描述（名称、单位缩写、轴标签）。
//!
//! ## 示例
//! ```text
//! unit_label("wavelength", Some(Unit::Nanometer), Some(280.0))
//!   -> name = "wavelength", unit = "nm", label = "wavelength (nm)", quantity = "280 nm"
//! unit_label("absorbance", None, None)
//!   -> name = "absorbance", unit = "", label = "absorbance"
//! ```
//!
//! ## 依赖关系
//! - 被 `models/metadata.rs`, `parsers/header.rs` 使用
//! - 无外部模块依赖

use std::fmt;

/// 光谱文件中出现的物理单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// 无量纲
    #[default]
    Dimensionless,
    Nanometer,
    Second,
}

impl Unit {
    /// 单位缩写（无量纲为空字符串）
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Dimensionless => "",
            Unit::Nanometer => "nm",
            Unit::Second => "s",
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        matches!(self, Unit::Dimensionless)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 带单位的物理量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Quantity { magnitude, unit }
    }
}

/// 格式化为 `"<数值> <单位缩写>"`，例如 `0.5 s`
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = format_magnitude(self.magnitude);
        if self.unit.is_dimensionless() {
            f.write_str(&magnitude)
        } else {
            write!(f, "{} {}", magnitude, self.unit)
        }
    }
}

/// 浮点数按"浮点形式"输出：整数值保留一位小数（`1.0`），其余原样
pub fn format_magnitude(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// 坐标轴描述
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDescriptor {
    /// 物理量名称，例如 `wavelength`
    pub name: String,
    /// 单位缩写，无量纲时为空
    pub unit: String,
    /// 轴标签，例如 `wavelength (nm)`
    pub label: String,
    /// 可选数值
    pub value: Option<f64>,
    /// 仅在给出数值时存在，例如 `280 nm`
    pub quantity: Option<String>,
}

/// 构建坐标轴描述
///
/// 未给出单位时按无量纲处理；给出数值时额外生成 `value` 与 `quantity`。
pub fn unit_label(name: &str, unit: Option<Unit>, value: Option<f64>) -> AxisDescriptor {
    let unit = unit.unwrap_or_default().symbol().to_string();

    let label = if unit.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, unit)
    };

    let quantity = value.map(|v| {
        if unit.is_empty() {
            format!("{}", v)
        } else {
            format!("{} {}", v, unit)
        }
    });

    AxisDescriptor {
        name: name.to_string(),
        unit,
        label,
        value,
        quantity,
    }
}
