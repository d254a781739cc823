//! # 光谱元数据模型
//!
//! 由原始文件头归一化得到的结构化元数据。字段集合固定，
//! 文件头中缺失的键对应字段为 `None`，序列化时直接省略。
//!
//! ## 依赖关系
//! - 由 `parsers/header.rs` 构建
//! - 被 `spectrum.rs`, `commands/` 使用
//! - 使用 `json::Node` 生成可编码的元数据树

use super::series::RawHeader;
use super::units::{AxisDescriptor, Quantity};
use crate::json::Node;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

/// 测量技术名称
pub const TECHNIQUE: &str = "UV-vis spectroscopy";

/// 测量技术的 CHMO 本体 IRI
pub const TECHNIQUE_IRI: &str = "http://purl.obolibrary.org/obo/CHMO_0000292";

/// 仪器厂商
pub const VENDOR: &str = "Ocean Insight";

/// 仪器信息
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub vendor: String,
    pub spectrometer: Option<String>,
}

impl Default for Instrument {
    fn default() -> Self {
        Instrument {
            vendor: VENDOR.to_string(),
            spectrometer: None,
        }
    }
}

/// 光谱元数据
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// 原始文件头（逐行保留）
    pub vendor_header: RawHeader,
    pub technique: String,
    pub technique_iri: String,
    pub instrument: Instrument,

    /// `Trigger mode`
    pub trigger_mode: Option<i64>,
    /// `Scans to average`
    pub scans: Option<i64>,
    /// `Integration Time (sec)`
    pub dwell_time: Option<Quantity>,
    pub nonlinearity_correction_enabled: Option<bool>,
    pub boxcar_width: Option<i64>,
    pub storing_dark_spectrum: Option<bool>,

    /// 横轴（自变量）
    pub abscissa: AxisDescriptor,
    /// 纵轴，固定为无量纲吸光度
    pub ordinate: AxisDescriptor,

    /// `Number of Pixels in Spectrum`
    pub number_of_data_points: Option<i64>,
    pub acquisition_date: Option<DateTime<FixedOffset>>,

    /// 首尾 x 值 (lowest, highest)，数据块为空时为 `None`
    pub observed_range: Option<(f64, f64)>,
}

impl Metadata {
    /// 生成元数据树，键名与顺序即 JSON 输出的键名与顺序
    pub fn to_node(&self) -> Node {
        let mut map = IndexMap::new();

        let header = self
            .vendor_header
            .iter()
            .map(|(k, v)| (k.clone(), Node::from(v.as_str())))
            .collect::<IndexMap<_, _>>();
        map.insert("vendor_header".to_string(), Node::Map(header));
        map.insert("technique".to_string(), Node::from(self.technique.as_str()));
        map.insert(
            "technique-iri".to_string(),
            Node::from(self.technique_iri.as_str()),
        );

        let mut instrument = IndexMap::new();
        instrument.insert(
            "vendor".to_string(),
            Node::from(self.instrument.vendor.as_str()),
        );
        if let Some(spectrometer) = &self.instrument.spectrometer {
            instrument.insert(
                "spectrometer".to_string(),
                Node::from(spectrometer.as_str()),
            );
        }
        map.insert("instrument".to_string(), Node::Map(instrument));

        insert_opt(&mut map, "Trigger mode", self.trigger_mode.map(Node::from));
        insert_opt(&mut map, "scans", self.scans.map(Node::from));
        insert_opt(&mut map, "dwell-time", self.dwell_time.map(Node::opaque));
        insert_opt(
            &mut map,
            "Nonlinearity correction enabled",
            self.nonlinearity_correction_enabled.map(Node::from),
        );
        insert_opt(&mut map, "Boxcar width", self.boxcar_width.map(Node::from));
        insert_opt(
            &mut map,
            "Storing dark spectrum",
            self.storing_dark_spectrum.map(Node::from),
        );

        map.insert("abscissa".to_string(), axis_node(&self.abscissa));
        map.insert("ordinate".to_string(), axis_node(&self.ordinate));

        insert_opt(
            &mut map,
            "number-of-data-points",
            self.number_of_data_points.map(Node::from),
        );
        insert_opt(
            &mut map,
            "acquisition-date",
            self.acquisition_date.map(Node::opaque),
        );

        if let Some((lowest, highest)) = self.observed_range {
            map.insert("lowest-observed-wavelength".to_string(), Node::from(lowest));
            map.insert(
                "highest-observed-wavelength".to_string(),
                Node::from(highest),
            );
        }

        Node::Map(map)
    }
}

fn insert_opt(map: &mut IndexMap<String, Node>, key: &str, value: Option<Node>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

fn axis_node(axis: &AxisDescriptor) -> Node {
    let mut map = IndexMap::new();
    map.insert("name".to_string(), Node::from(axis.name.as_str()));
    map.insert("unit".to_string(), Node::from(axis.unit.as_str()));
    map.insert("label".to_string(), Node::from(axis.label.as_str()));
    if let Some(value) = axis.value {
        map.insert("value".to_string(), Node::from(value));
    }
    if let Some(quantity) = &axis.quantity {
        map.insert("quantity".to_string(), Node::from(quantity.as_str()));
    }
    Node::Map(map)
}
