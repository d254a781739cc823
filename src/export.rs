//! # 光谱数据导出
//!
//! 导出光谱数据到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 表头为横轴/纵轴标签（如 `wavelength (nm)`, `absorbance`），每行一个数据点
//! - XY: `#` 注释前言 + 制表符分隔的数据点
//!
//! ## 依赖关系
//! - 被 `commands/export.rs`, `commands/batch.rs` 调用
//! - 使用 `spectrum.rs`
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, UvvisError};
use crate::spectrum::Spectrum;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出为 CSV 格式
pub fn to_csv(spectrum: &Spectrum, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let (x_label, y_label) = axis_labels(spectrum);
    wtr.write_record([x_label, y_label])?;

    for (x, y) in spectrum.series().points() {
        wtr.write_record([x.to_string(), y.to_string()])?;
    }

    wtr.flush().map_err(|e| UvvisError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 XY 格式
pub fn to_xy(spectrum: &Spectrum, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| UvvisError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    let (x_label, y_label) = axis_labels(spectrum);
    let description = spectrum
        .header()
        .get("Description")
        .map(String::as_str)
        .unwrap_or("");

    writeln!(out, "# {}", description).map_err(write_err)?;
    writeln!(out, "# Columns: {}\t{}", x_label, y_label).map_err(write_err)?;
    writeln!(out, "# Points: {}", spectrum.series().len()).map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for (x, y) in spectrum.series().points() {
        writeln!(out, "{}\t{}", x, y).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

fn axis_labels(spectrum: &Spectrum) -> (String, String) {
    (
        spectrum.x_label().unwrap_or("x").to_string(),
        spectrum.y_label().unwrap_or("y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = "Data from sample.txt Node\n\
XAxis mode: Wavelengths\n\
>>>>>Begin Spectral Data<<<<<\n\
200.1\t0.023\n\
850\t0.011\n";

    #[test]
    fn test_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let spectrum = Spectrum::from_content(SAMPLE).unwrap();

        to_csv(&spectrum, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "wavelength (nm),absorbance\n200.1,0.023\n850,0.011\n");
    }

    #[test]
    fn test_to_xy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xy");
        let spectrum = Spectrum::from_content(SAMPLE).unwrap();

        to_xy(&spectrum, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# Data from sample.txt Node");
        assert_eq!(lines[1], "# Columns: wavelength (nm)\tabsorbance");
        assert_eq!(lines[2], "# Points: 2");
        assert_eq!(&lines[4..], &["200.1\t0.023", "850\t0.011"]);
    }
}
