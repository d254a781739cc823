//! # 光谱数据序列
//!
//! 两条等长的 f64 序列：x（波长等自变量）与 y（吸光度）。
//!
//! ## 依赖关系
//! - 被 `parsers/ocean_ascii.rs`, `spectrum.rs`, `export.rs` 使用

use crate::error::{Result, UvvisError};

/// 原始文件头：保持文件中出现顺序的键值映射
pub type RawHeader = indexmap::IndexMap<String, String>;

/// 光谱数据（x, y 始终等长）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectralSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SpectralSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个数据点
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// 按顺序迭代 (x, y) 数据点
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// 首尾 x 值 (lowest, highest)，数据块为空时返回 `EmptySeries`
    ///
    /// 按文件顺序取第一个和最后一个值，不做排序。
    pub fn observed_range(&self) -> Result<(f64, f64)> {
        match (self.x.first(), self.x.last()) {
            (Some(&first), Some(&last)) => Ok((first, last)),
            _ => Err(UvvisError::EmptySeries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_lengths_equal() {
        let mut series = SpectralSeries::new();
        series.push(200.1, 0.023);
        series.push(850.0, 0.011);
        assert_eq!(series.x().len(), series.y().len());
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.points().collect::<Vec<_>>(),
            vec![(200.1, 0.023), (850.0, 0.011)]
        );
    }

    #[test]
    fn test_observed_range_uses_file_order() {
        let mut series = SpectralSeries::new();
        series.push(850.0, 0.1);
        series.push(200.0, 0.2);
        assert_eq!(series.observed_range().unwrap(), (850.0, 200.0));
    }

    #[test]
    fn test_observed_range_empty() {
        let series = SpectralSeries::new();
        assert!(matches!(
            series.observed_range(),
            Err(UvvisError::EmptySeries)
        ));
    }
}
