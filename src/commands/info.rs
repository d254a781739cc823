//! # info 命令实现
//!
//! 显示光谱文件的元数据摘要（以及可选的原始文件头）。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `spectrum.rs`, `utils/output.rs`

use crate::cli::inspect::InfoArgs;
use ocean_uvvis::models::Metadata;
use ocean_uvvis::utils::output;
use ocean_uvvis::{Result, Spectrum};

use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl FieldRow {
    fn new(field: &str, value: impl ToString) -> Self {
        FieldRow {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let spectrum = Spectrum::open(&args.file)?;

    output::print_header(&format!("Spectrum: {}", args.file.display()));

    if args.header {
        let rows: Vec<FieldRow> = spectrum
            .header()
            .iter()
            .map(|(k, v)| FieldRow::new(k, v))
            .collect();
        println!("{}\n", Table::new(&rows));
    }

    if let Some(metadata) = spectrum.metadata() {
        println!("{}", Table::new(summary_rows(metadata, spectrum.series().len())));
    }

    match spectrum.observed_range() {
        Ok((lowest, highest)) => output::print_info(&format!(
            "{} points from {} to {}",
            spectrum.series().len(),
            lowest,
            highest
        )),
        Err(_) => output::print_warning("No spectral data block in file"),
    }

    Ok(())
}

fn summary_rows(metadata: &Metadata, points: usize) -> Vec<FieldRow> {
    let mut rows = vec![
        FieldRow::new("Technique", &metadata.technique),
        FieldRow::new("Vendor", &metadata.instrument.vendor),
    ];

    if let Some(spectrometer) = &metadata.instrument.spectrometer {
        rows.push(FieldRow::new("Spectrometer", spectrometer));
    }
    if let Some(date) = metadata.acquisition_date {
        rows.push(FieldRow::new("Acquired", date.to_rfc3339()));
    }
    if let Some(dwell) = metadata.dwell_time {
        rows.push(FieldRow::new("Dwell time", dwell));
    }
    if let Some(scans) = metadata.scans {
        rows.push(FieldRow::new("Scans", scans));
    }
    if let Some(width) = metadata.boxcar_width {
        rows.push(FieldRow::new("Boxcar width", width));
    }
    if let Some(mode) = metadata.trigger_mode {
        rows.push(FieldRow::new("Trigger mode", mode));
    }
    if let Some(flag) = metadata.nonlinearity_correction_enabled {
        rows.push(FieldRow::new("Nonlinearity correction", flag));
    }
    if let Some(flag) = metadata.storing_dark_spectrum {
        rows.push(FieldRow::new("Storing dark spectrum", flag));
    }

    rows.push(FieldRow::new("Abscissa", &metadata.abscissa.label));
    rows.push(FieldRow::new("Ordinate", &metadata.ordinate.label));

    let declared = metadata
        .number_of_data_points
        .map(|n| format!(" (header: {})", n))
        .unwrap_or_default();
    rows.push(FieldRow::new("Data points", format!("{}{}", points, declared)));

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rows() {
        let spectrum = Spectrum::from_content(
            "Desc\nSpectrometer: FLMS1\nScans to average: 3\nNumber of Pixels in Spectrum: 5\n\
             >>>>>Begin Spectral Data<<<<<\n1\t2\n",
        )
        .unwrap();
        let rows = summary_rows(spectrum.metadata().unwrap(), spectrum.series().len());
        let lookup = |field: &str| {
            rows.iter()
                .find(|r| r.field == field)
                .map(|r| r.value.clone())
        };
        assert_eq!(lookup("Spectrometer").as_deref(), Some("FLMS1"));
        assert_eq!(lookup("Scans").as_deref(), Some("3"));
        assert_eq!(lookup("Abscissa").as_deref(), Some("x"));
        assert_eq!(lookup("Data points").as_deref(), Some("1 (header: 5)"));
        assert!(lookup("Dwell time").is_none());
    }
}
