//! 时间格式化工具
//!
//! 将 chrono 时间转换为 MongoDB 期望的时间表示

use crate::error::QuickMongoResult;
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use mongodb::bson;

/// 将时间格式化为 BSON 时间字符串
///
/// 统一转换为UTC，毫秒精度，以 `Z` 结尾，例如 `2024-05-01T08:30:00.123Z`
pub fn bson_time<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 将时间按指定时区偏移格式化
///
/// # 参数
/// * `value` - 任意时区的时间
/// * `timezone_offset` - 时区偏移，格式 "+08:00", "-05:00"
pub fn bson_time_with_offset<Tz: TimeZone>(
    value: &DateTime<Tz>,
    timezone_offset: &str,
) -> QuickMongoResult<String> {
    let local = utc_to_timezone(value.with_timezone(&Utc), timezone_offset)?;
    Ok(local.to_rfc3339_opts(SecondsFormat::Millis, false))
}

/// 转换为驱动的 BSON 时间类型（毫秒精度）
pub fn to_bson_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

/// 将时区偏移字符串转换为秒数
///
/// # 参数
/// * `timezone_offset` - 时区偏移，格式 "+08:00", "-05:00"
pub fn parse_timezone_offset_to_seconds(timezone_offset: &str) -> QuickMongoResult<i32> {
    let bytes = timezone_offset.as_bytes();
    let digits_ok = bytes.len() == 6
        && [1, 2, 4, 5].iter().all(|&i| bytes[i].is_ascii_digit());
    if !digits_ok || bytes[3] != b':' {
        return Err(crate::quick_error!(
            validation,
            "timezone_offset",
            format!("无效的时区偏移格式: '{}', 期望格式: +HH:MM", timezone_offset)
        ));
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => {
            return Err(crate::quick_error!(
                validation,
                "timezone_offset",
                format!("时区偏移必须以+或-开头: '{}'", timezone_offset)
            ));
        }
    };

    let hours: i32 = timezone_offset[1..3].parse().map_err(|_| {
        crate::quick_error!(
            validation,
            "timezone_offset",
            format!("无效的小时格式: '{}'", &timezone_offset[1..3])
        )
    })?;
    let minutes: i32 = timezone_offset[4..6].parse().map_err(|_| {
        crate::quick_error!(
            validation,
            "timezone_offset",
            format!("无效的分钟格式: '{}'", &timezone_offset[4..6])
        )
    })?;

    if hours > 23 || minutes > 59 {
        return Err(crate::quick_error!(
            validation,
            "timezone_offset",
            format!("时区偏移超出范围: '{}'", timezone_offset)
        ));
    }

    Ok(sign * (hours * 3600 + minutes * 60))
}

/// 将UTC时间转换为指定时区的时间
pub fn utc_to_timezone(
    utc_dt: DateTime<Utc>,
    timezone_offset: &str,
) -> QuickMongoResult<DateTime<FixedOffset>> {
    let offset_seconds = parse_timezone_offset_to_seconds(timezone_offset)?;
    let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
        crate::quick_error!(
            validation,
            "timezone_offset",
            format!("时区偏移超出范围: '{}'", timezone_offset)
        )
    })?;
    Ok(utc_dt.with_timezone(&offset))
}
