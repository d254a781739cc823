//! # Ocean Insight "ASCII with header data" 格式解析器
//!
//! ## 格式说明
//! ```text
//! Data from sample.txt Node          <- 第 1 行，无条件作为 Description
//!
//! Date: Thu Feb 27 15:05:24 GMT 2020
//! Spectrometer: FLMS12345
//! ...
//! >>>>>Begin Spectral Data<<<<<
//! 200.1	0.023                       <- x<TAB>y
//! ...
//! ```
//!
//! 文件头行必须恰好被 `": "` 分成两段；数据行必须恰好是两个以制表符分隔的数字。
//! 未出现数据块标记时数据序列为空（不视为错误）。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs`, `spectrum.rs` 使用
//! - 使用 `models/series.rs`

use crate::error::{Result, UvvisError};
use crate::models::{RawHeader, SpectralSeries};

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// 数据块起始标记
pub const DATA_MARKER: &str = ">>>>>Begin Spectral Data<<<<<";

/// 第一行存入文件头时使用的键
pub const DESCRIPTION_KEY: &str = "Description";

/// 文件头键值分隔符
const HEADER_SEPARATOR: &str = ": ";

/// 解析结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFile {
    pub header: RawHeader,
    pub series: SpectralSeries,
}

/// 解析 Ocean Insight 光谱文件
///
/// 文件句柄在函数返回时（包括解析出错时）释放。
pub fn parse_ocean_file(path: &Path) -> Result<ParsedFile> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => UvvisError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => UvvisError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    let reader = BufReader::new(file);
    let mut parser = LineParser::new();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(UvvisError::InvalidEncoding {
                    path: path.display().to_string(),
                    line: parser.line_no + 1,
                });
            }
            Err(e) => {
                return Err(UvvisError::FileReadError {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };
        parser.feed(&line)?;
    }

    let parsed = parser.finish();
    log::debug!(
        "Parsed '{}': {} header entries, {} data points",
        path.display(),
        parsed.header.len(),
        parsed.series.len()
    );
    Ok(parsed)
}

/// 从字符串内容解析
pub fn parse_ocean_content(content: &str) -> Result<ParsedFile> {
    let mut parser = LineParser::new();
    for line in content.lines() {
        parser.feed(line)?;
    }
    Ok(parser.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Description,
    Header,
    Data,
}

/// 逐行解析状态机
struct LineParser {
    section: Section,
    line_no: usize,
    header: RawHeader,
    series: SpectralSeries,
}

impl LineParser {
    fn new() -> Self {
        LineParser {
            section: Section::Description,
            line_no: 0,
            header: RawHeader::new(),
            series: SpectralSeries::new(),
        }
    }

    fn feed(&mut self, raw: &str) -> Result<()> {
        self.line_no += 1;
        let line = raw.trim_end();

        if self.section == Section::Description {
            self.header
                .insert(DESCRIPTION_KEY.to_string(), line.to_string());
            self.section = Section::Header;
            return Ok(());
        }

        // 空行（通常是第二行）跳过
        if line.is_empty() {
            return Ok(());
        }

        if line == DATA_MARKER {
            if self.section == Section::Header {
                log::debug!("Spectral data block starts at line {}", self.line_no);
            }
            self.section = Section::Data;
            return Ok(());
        }

        match self.section {
            Section::Data => self.feed_data(line),
            _ => self.feed_header(line),
        }
    }

    fn feed_header(&mut self, line: &str) -> Result<()> {
        let parts: Vec<&str> = line.split(HEADER_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(UvvisError::MalformedHeaderLine {
                line: self.line_no,
                content: line.to_string(),
            });
        }

        let (key, value) = (parts[0], parts[1]);
        if let Some(previous) = self.header.insert(key.to_string(), value.to_string()) {
            log::warn!(
                "Header '{}' repeated at line {}, replacing '{}'",
                key,
                self.line_no,
                previous
            );
        }
        Ok(())
    }

    fn feed_data(&mut self, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split('\t').collect();
        if tokens.len() != 2 {
            return Err(self.data_error(
                line,
                format!("expected 2 tab-separated values, found {}", tokens.len()),
            ));
        }

        let x = self.parse_number(line, tokens[0])?;
        let y = self.parse_number(line, tokens[1])?;
        self.series.push(x, y);
        Ok(())
    }

    fn parse_number(&self, line: &str, token: &str) -> Result<f64> {
        token
            .trim()
            .parse::<f64>()
            .map_err(|_| self.data_error(line, format!("'{}' is not a number", token)))
    }

    fn data_error(&self, line: &str, reason: String) -> UvvisError {
        UvvisError::MalformedDataLine {
            line: self.line_no,
            content: line.to_string(),
            reason,
        }
    }

    fn finish(mut self) -> ParsedFile {
        // 空文件也保证存在 Description
        if self.section == Section::Description {
            self.header
                .insert(DESCRIPTION_KEY.to_string(), String::new());
        }
        ParsedFile {
            header: self.header,
            series: self.series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Data from absorbance_00001.txt Node\n\
\n\
Date: Thu Feb 27 15:05:24 GMT 2020\n\
User: labuser\n\
Spectrometer: FLMS12345\n\
Trigger mode: 0\n\
Integration Time (sec): 5.000000E-1\n\
Scans to average: 10\n\
XAxis mode: Wavelengths\n\
Number of Pixels in Spectrum: 3\n\
>>>>>Begin Spectral Data<<<<<\n\
200.1\t0.023\n\
500.5\t0.150\n\
850.0\t0.011\n";

    #[test]
    fn test_parse_sample() {
        let parsed = parse_ocean_content(SAMPLE).unwrap();
        assert_eq!(
            parsed.header.get("Description").map(String::as_str),
            Some("Data from absorbance_00001.txt Node")
        );
        assert_eq!(
            parsed.header.get("Date").map(String::as_str),
            Some("Thu Feb 27 15:05:24 GMT 2020")
        );
        assert_eq!(parsed.header.len(), 9);
        assert_eq!(parsed.series.len(), 3);
        assert_eq!(parsed.series.x(), &[200.1, 500.5, 850.0]);
        assert_eq!(parsed.series.y(), &[0.023, 0.150, 0.011]);
    }

    #[test]
    fn test_header_order_is_file_order() {
        let parsed = parse_ocean_content(SAMPLE).unwrap();
        let keys: Vec<&str> = parsed.header.keys().map(String::as_str).collect();
        assert_eq!(keys[0], "Description");
        assert_eq!(keys[1], "Date");
        assert_eq!(keys[8], "Number of Pixels in Spectrum");
    }

    #[test]
    fn test_crlf_and_trailing_whitespace() {
        let content = "Desc  \r\n\r\nSpectrometer: USB4000 \r\n>>>>>Begin Spectral Data<<<<<\r\n1.5\t2.5\r\n";
        let parsed = parse_ocean_content(content).unwrap();
        assert_eq!(parsed.header["Description"], "Desc");
        assert_eq!(parsed.header["Spectrometer"], "USB4000");
        assert_eq!(parsed.series.x(), &[1.5]);
    }

    #[test]
    fn test_first_line_is_always_description() {
        let parsed = parse_ocean_content("Key: value\nOther: thing\n").unwrap();
        assert_eq!(parsed.header["Description"], "Key: value");
        assert!(!parsed.header.contains_key("Key"));
        assert_eq!(parsed.header["Other"], "thing");
    }

    #[test]
    fn test_missing_marker_gives_empty_series() {
        let parsed = parse_ocean_content("Desc\n\nSpectrometer: X\n").unwrap();
        assert!(parsed.series.is_empty());
        assert_eq!(parsed.series.x().len(), parsed.series.y().len());
    }

    #[test]
    fn test_duplicate_key_last_value_wins() {
        let parsed = parse_ocean_content("Desc\nA: 1\nB: 2\nA: 3\n").unwrap();
        assert_eq!(parsed.header["A"], "3");
        let keys: Vec<&str> = parsed.header.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Description", "A", "B"]);
    }

    #[test]
    fn test_malformed_header_line() {
        let err = parse_ocean_content("Desc\n\ngarbage\n").unwrap_err();
        match err {
            UvvisError::MalformedHeaderLine { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "garbage");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_header_value_with_separator_is_malformed() {
        let err = parse_ocean_content("Desc\nNote: a: b\n").unwrap_err();
        assert!(matches!(err, UvvisError::MalformedHeaderLine { line: 2, .. }));
    }

    #[test]
    fn test_malformed_data_lines() {
        let base = "Desc\n>>>>>Begin Spectral Data<<<<<\n";

        let err = parse_ocean_content(&format!("{base}1.0 2.0\n")).unwrap_err();
        assert!(matches!(err, UvvisError::MalformedDataLine { line: 3, .. }));

        let err = parse_ocean_content(&format!("{base}1.0\t2.0\t3.0\n")).unwrap_err();
        assert!(matches!(err, UvvisError::MalformedDataLine { .. }));

        let err = parse_ocean_content(&format!("{base}1.0\tabc\n")).unwrap_err();
        match err {
            UvvisError::MalformedDataLine { reason, .. } => assert!(reason.contains("abc")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_in_data_block_are_skipped() {
        let parsed =
            parse_ocean_content("Desc\n>>>>>Begin Spectral Data<<<<<\n1\t2\n\n3\t4\n").unwrap();
        assert_eq!(parsed.series.len(), 2);
    }

    #[test]
    fn test_empty_content() {
        let parsed = parse_ocean_content("").unwrap();
        assert_eq!(parsed.header["Description"], "");
        assert!(parsed.series.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_content_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"Desc\nSpectrometer: \xff\n").unwrap();

        let err = parse_ocean_file(&path).unwrap_err();
        assert!(matches!(err, UvvisError::InvalidEncoding { line: 2, .. }));
        assert!(!err.is_file_access());
    }
}
