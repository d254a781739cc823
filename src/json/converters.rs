//! # 类型专用 JSON 转换器
//!
//! - 物理量 -> `"<数值> <单位缩写>"`
//! - 日期时间 -> ISO-8601 字符串（带 UTC 偏移）

use super::Unsupported;
use crate::models::Quantity;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value as JsonValue;
use std::any::Any;

/// 物理量转换器
pub fn quantity_to_json(value: &dyn Any) -> Result<JsonValue, Unsupported> {
    value
        .downcast_ref::<Quantity>()
        .map(|q| JsonValue::String(q.to_string()))
        .ok_or(Unsupported)
}

/// 日期时间转换器
pub fn datetime_to_json(value: &dyn Any) -> Result<JsonValue, Unsupported> {
    let iso = if let Some(dt) = value.downcast_ref::<DateTime<FixedOffset>>() {
        dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    } else if let Some(dt) = value.downcast_ref::<DateTime<Utc>>() {
        dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    } else if let Some(dt) = value.downcast_ref::<NaiveDateTime>() {
        dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    } else if let Some(d) = value.downcast_ref::<NaiveDate>() {
        d.format("%Y-%m-%d").to_string()
    } else {
        return Err(Unsupported);
    };
    Ok(JsonValue::String(iso))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use chrono::TimeZone;

    #[test]
    fn test_quantity_converter() {
        let q = Quantity::new(0.5, Unit::Second);
        assert_eq!(quantity_to_json(&q), Ok(JsonValue::from("0.5 s")));
        assert_eq!(quantity_to_json(&"0.5 s"), Err(Unsupported));
    }

    #[test]
    fn test_datetime_converter_variants() {
        let utc = Utc.with_ymd_and_hms(2020, 2, 27, 15, 5, 24).unwrap();
        assert_eq!(
            datetime_to_json(&utc),
            Ok(JsonValue::from("2020-02-27T15:05:24+00:00"))
        );

        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = est.with_ymd_and_hms(2021, 7, 1, 8, 0, 0).unwrap();
        assert_eq!(
            datetime_to_json(&local),
            Ok(JsonValue::from("2021-07-01T08:00:00-05:00"))
        );

        let date = NaiveDate::from_ymd_opt(2020, 2, 27).unwrap();
        assert_eq!(datetime_to_json(&date), Ok(JsonValue::from("2020-02-27")));

        assert_eq!(datetime_to_json(&42_i64), Err(Unsupported));
    }
}
