//! # 文件头归一化
//!
//! 将原始文件头键值对转换为结构化的 [`Metadata`]。
//!
//! ## 字段映射
//! | 文件头键                          | 元数据字段                          | 转换        |
//! |-----------------------------------|-------------------------------------|-------------|
//! | `Spectrometer`                    | `instrument.spectrometer`           | 原样        |
//! | `Trigger mode`                    | `trigger_mode`                      | 整数        |
//! | `Scans to average`                | `scans`                             | 整数        |
//! | `Integration Time (sec)`          | `dwell_time`                        | 浮点 + 秒   |
//! | `Nonlinearity correction enabled` | `nonlinearity_correction_enabled`   | 布尔        |
//! | `Boxcar width`                    | `boxcar_width`                      | 整数        |
//! | `Storing dark spectrum`           | `storing_dark_spectrum`             | 布尔        |
//! | `Number of Pixels in Spectrum`    | `number_of_data_points`             | 整数        |
//! | `Date`                            | `acquisition_date`                  | 日期        |
//! | `XAxis mode`                      | `abscissa`                          | 坐标轴      |
//!
//! ## 依赖关系
//! - 被 `spectrum.rs` 使用
//! - 使用 `models/`

use crate::error::{Result, UvvisError};
use crate::models::metadata::{TECHNIQUE, TECHNIQUE_IRI};
use crate::models::{unit_label, AxisDescriptor, Instrument, Metadata, Quantity, RawHeader, Unit};

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::OnceLock;

/// 由文件头生成元数据（不含首尾波长，由调用者根据数据序列补充）
pub fn normalize_header(header: &RawHeader) -> Result<Metadata> {
    let instrument = Instrument {
        spectrometer: header.get("Spectrometer").cloned(),
        ..Instrument::default()
    };

    let dwell_time = parse_float(header, "Integration Time (sec)")?
        .map(|secs| Quantity::new(secs, Unit::Second));

    let acquisition_date = header
        .get("Date")
        .map(|value| parse_acquisition_date(value))
        .transpose()?;

    Ok(Metadata {
        vendor_header: header.clone(),
        technique: TECHNIQUE.to_string(),
        technique_iri: TECHNIQUE_IRI.to_string(),
        instrument,
        trigger_mode: parse_int(header, "Trigger mode")?,
        scans: parse_int(header, "Scans to average")?,
        dwell_time,
        nonlinearity_correction_enabled: parse_flag(header, "Nonlinearity correction enabled"),
        boxcar_width: parse_int(header, "Boxcar width")?,
        storing_dark_spectrum: parse_flag(header, "Storing dark spectrum"),
        abscissa: abscissa_for(header.get("XAxis mode").map(String::as_str)),
        ordinate: ordinate(),
        number_of_data_points: parse_int(header, "Number of Pixels in Spectrum")?,
        acquisition_date,
        observed_range: None,
    })
}

/// 横轴描述：`Wavelengths`（不区分大小写）-> 波长 (nm)，其他值 -> 无量纲，缺失 -> `x`
pub fn abscissa_for(x_axis_mode: Option<&str>) -> AxisDescriptor {
    match x_axis_mode {
        Some(mode) if mode.eq_ignore_ascii_case("wavelengths") => {
            unit_label("wavelength", Some(Unit::Nanometer), None)
        }
        Some(mode) => unit_label(mode, Some(Unit::Dimensionless), None),
        None => unit_label("x", Some(Unit::Dimensionless), None),
    }
}

/// 纵轴描述：文件中不记录，固定假设为吸光度（无量纲）
pub fn ordinate() -> AxisDescriptor {
    unit_label("absorbance", Some(Unit::Dimensionless), None)
}

fn parse_int(header: &RawHeader, key: &str) -> Result<Option<i64>> {
    header
        .get(key)
        .map(|value| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid_value(key, value, "an integer"))
        })
        .transpose()
}

fn parse_float(header: &RawHeader, key: &str) -> Result<Option<f64>> {
    header
        .get(key)
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid_value(key, value, "a number"))
        })
        .transpose()
}

/// 仅当值为 `false`（不区分大小写）时为 false，其余一律为 true
fn parse_flag(header: &RawHeader, key: &str) -> Option<bool> {
    header
        .get(key)
        .map(|value| !value.eq_ignore_ascii_case("false"))
}

fn invalid_value(key: &str, value: &str, expected: &'static str) -> UvvisError {
    UvvisError::InvalidHeaderValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

// ─────────────────────────────────────────────────────────────
// 日期解析
// ─────────────────────────────────────────────────────────────

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Thu Feb 27 15:05:24 GMT 2020
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<weekday>\S+)\s+(?P<month>[A-Za-z]{3})\s+(?P<day>\d{1,2})\s+(?P<time>\d{1,2}:\d{2}:\d{2})\s+(?P<zone>\S+)\s+(?P<year>\d+)$",
        )
        .expect("date pattern is valid")
    })
}

/// 解析 `"<星期> <月> <日> <HH:MM:SS> <时区> <年>"` 格式的采集日期
///
/// 时区按 IANA 名称解析（`GMT`, `UTC`, `EST`, `Europe/London` 等），
/// 未知时区直接报错，不回退到 UTC。
pub fn parse_acquisition_date(value: &str) -> Result<DateTime<FixedOffset>> {
    let fail = |reason: String| UvvisError::DateFormat {
        value: value.to_string(),
        reason,
    };

    let caps = date_pattern().captures(value.trim()).ok_or_else(|| {
        fail("expected '<Weekday> <Mon> <Day> <HH:MM:SS> <TZ> <Year>'".to_string())
    })?;

    let month = month_from_abbrev(&caps["month"])
        .ok_or_else(|| fail(format!("unknown month '{}'", &caps["month"])))?;
    let day: u32 = caps["day"]
        .parse()
        .map_err(|_| fail(format!("invalid day '{}'", &caps["day"])))?;
    let year: i32 = caps["year"]
        .parse()
        .map_err(|_| fail(format!("invalid year '{}'", &caps["year"])))?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| fail(format!("{}-{:02}-{:02} is not a calendar date", year, month, day)))?;
    let time = NaiveTime::parse_from_str(&caps["time"], "%H:%M:%S")
        .map_err(|e| fail(format!("invalid time '{}': {}", &caps["time"], e)))?;

    let zone: Tz = caps["zone"]
        .parse()
        .map_err(|_| fail(format!("unknown time zone '{}'", &caps["zone"])))?;

    let local = date.and_time(time);
    match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&dt.offset().fix())),
        LocalResult::Ambiguous(_, _) => Err(fail(format!(
            "local time {} is ambiguous in {}",
            local, zone
        ))),
        LocalResult::None => Err(fail(format!(
            "local time {} does not exist in {}",
            local, zone
        ))),
    }
}

fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbrev))
        .map(|i| i as u32 + 1)
}
