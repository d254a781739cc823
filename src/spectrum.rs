//! # 光谱聚合对象
//!
//! [`Spectrum`] 持有文件路径、原始文件头、元数据与数据序列。
//!
//! ## 重新读取语义
//! `read` 先在局部完整构建新的文件头/元数据/序列，成功后一次性替换旧内容；
//! 任何错误都会使对象保持调用前的状态（包括路径）。
//!
//! ## 依赖关系
//! - 使用 `parsers/`, `models/`, `json/`
//! - 被 `commands/`, `export.rs`, `batch/` 使用

use crate::error::{Result, UvvisError};
use crate::json::{JsonEncoder, Node};
use crate::models::{Metadata, RawHeader, SpectralSeries};
use crate::parsers::{self, ParsedFile};

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// UV-vis 光谱
#[derive(Debug, Clone, Default)]
pub struct Spectrum {
    path: Option<PathBuf>,
    header: RawHeader,
    metadata: Option<Metadata>,
    series: SpectralSeries,
}

impl Spectrum {
    /// 创建空对象（未加载任何文件）
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建并读取文件
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut spectrum = Spectrum::new();
        spectrum.read(Some(path.as_ref()))?;
        Ok(spectrum)
    }

    /// 从内存中的文件内容构建（无路径）
    pub fn from_content(content: &str) -> Result<Self> {
        let parsed = parsers::parse_ocean_content(content)?;
        let mut spectrum = Spectrum::new();
        spectrum.commit(None, parsed)?;
        Ok(spectrum)
    }

    /// 读取光谱文件
    ///
    /// `path` 为 `None` 时重新读取当前路径；没有当前路径时返回 `NoPath`。
    pub fn read(&mut self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => self.path.clone().ok_or(UvvisError::NoPath)?,
        };

        let parsed = parsers::parse_ocean_file(&path)?;
        self.commit(Some(path), parsed)
    }

    fn commit(&mut self, path: Option<PathBuf>, parsed: ParsedFile) -> Result<()> {
        let ParsedFile { header, series } = parsed;

        let mut metadata = parsers::normalize_header(&header)?;
        metadata.observed_range = series.observed_range().ok();

        if series.is_empty() {
            log::debug!("No spectral data block; observed range omitted");
        }

        // 全部构建成功后整体替换
        *self = Spectrum {
            path,
            header,
            metadata: Some(metadata),
            series,
        };
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn header(&self) -> &RawHeader {
        &self.header
    }

    /// 元数据；尚未成功读取任何文件时为 `None`
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn series(&self) -> &SpectralSeries {
        &self.series
    }

    pub fn is_loaded(&self) -> bool {
        self.metadata.is_some()
    }

    /// 横轴标签，例如 `wavelength (nm)`
    pub fn x_label(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.abscissa.label.as_str())
    }

    /// 纵轴标签，例如 `absorbance`
    pub fn y_label(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.ordinate.label.as_str())
    }

    /// 首尾波长 (lowest, highest)，数据块为空时返回 `EmptySeries`
    pub fn observed_range(&self) -> Result<(f64, f64)> {
        self.series.observed_range()
    }

    /// 元数据树（未加载时为空映射）
    pub fn metadata_as_node(&self) -> Node {
        match &self.metadata {
            Some(metadata) => metadata.to_node(),
            None => Node::Map(IndexMap::new()),
        }
    }

    /// 元数据 JSON，`indent` 为 `None` 时输出紧凑格式
    pub fn metadata_as_json(&self, indent: Option<usize>) -> Result<String> {
        JsonEncoder::default().encode(&self.metadata_as_node(), indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Data from sample.txt Node\n\
\n\
Date: Thu Feb 27 15:05:24 GMT 2020\n\
Spectrometer: FLMS12345\n\
Integration Time (sec): 0.5\n\
XAxis mode: Wavelengths\n\
>>>>>Begin Spectral Data<<<<<\n\
200.1\t0.023\n\
850.0\t0.011\n";

    #[test]
    fn test_from_content() {
        let spectrum = Spectrum::from_content(SAMPLE).unwrap();
        assert!(spectrum.is_loaded());
        assert!(spectrum.path().is_none());
        assert_eq!(spectrum.x_label(), Some("wavelength (nm)"));
        assert_eq!(spectrum.y_label(), Some("absorbance"));
        assert_eq!(spectrum.observed_range().unwrap(), (200.1, 850.0));

        let metadata = spectrum.metadata().unwrap();
        assert_eq!(metadata.observed_range, Some((200.1, 850.0)));
    }

    #[test]
    fn test_metadata_json() {
        let spectrum = Spectrum::from_content(SAMPLE).unwrap();
        let json = spectrum.metadata_as_json(Some(4)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["dwell-time"], "0.5 s");
        assert_eq!(value["acquisition-date"], "2020-02-27T15:05:24+00:00");
        assert_eq!(value["lowest-observed-wavelength"], 200.1);
        assert_eq!(value["highest-observed-wavelength"], 850.0);
        assert_eq!(value["instrument"]["spectrometer"], "FLMS12345");
        assert_eq!(value["vendor_header"]["Date"], "Thu Feb 27 15:05:24 GMT 2020");
        assert!(json.contains("\n    \"technique\": \"UV-vis spectroscopy\""));
    }

    #[test]
    fn test_json_is_stable() {
        let a = Spectrum::from_content(SAMPLE).unwrap();
        let b = Spectrum::from_content(SAMPLE).unwrap();
        assert_eq!(
            a.metadata_as_json(Some(4)).unwrap(),
            b.metadata_as_json(Some(4)).unwrap()
        );
        assert_eq!(
            a.metadata_as_json(None).unwrap(),
            a.metadata_as_json(None).unwrap()
        );
    }

    #[test]
    fn test_empty_series_omits_range() {
        let spectrum = Spectrum::from_content("Desc\n\nSpectrometer: X\n").unwrap();
        assert!(spectrum.series().is_empty());
        assert!(matches!(
            spectrum.observed_range(),
            Err(UvvisError::EmptySeries)
        ));
        let value: serde_json::Value =
            serde_json::from_str(&spectrum.metadata_as_json(None).unwrap()).unwrap();
        assert!(value.get("lowest-observed-wavelength").is_none());
    }

    #[test]
    fn test_unloaded_spectrum() {
        let spectrum = Spectrum::new();
        assert!(!spectrum.is_loaded());
        assert!(spectrum.header().is_empty());
        assert_eq!(spectrum.metadata_as_json(None).unwrap(), "{}");
    }

    #[test]
    fn test_read_without_path() {
        let mut spectrum = Spectrum::new();
        let err = spectrum.read(None).unwrap_err();
        assert!(matches!(err, UvvisError::NoPath));
        assert!(err.is_file_access());
    }
}
