//! # 数据模型模块
//!
//! 定义光谱数据、元数据、单位与坐标轴描述。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `spectrum.rs` 和 `commands/` 使用
//! - 子模块: units, series, metadata

pub mod metadata;
pub mod series;
pub mod units;

pub use metadata::{Instrument, Metadata};
pub use series::{RawHeader, SpectralSeries};
pub use units::{unit_label, AxisDescriptor, Quantity, Unit};
