//! 工具函数模块

pub mod time;

pub use time::{
    bson_time, bson_time_with_offset, parse_timezone_offset_to_seconds, to_bson_datetime,
    utc_to_timezone,
};
