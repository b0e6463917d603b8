use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub mod markdown;

/// 日期无法解析时的显示文本
pub const INVALID_DATE: &str = "Invalid Date";

/// 按 "Month D, YYYY" 格式显示文章日期
///
/// 接受 RFC 3339、不带时区的 ISO 日期时间以及 `YYYY-MM-DD`。
pub fn format_long_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// 对 URL 组件做百分号编码
pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// 拼接文章详情页的完整地址
pub fn post_url(site_url: &str, post_id: &str) -> String {
    let base = site_url.split('#').next().unwrap_or(site_url);
    format!("{}#post/{}", base, post_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-03-05"), "March 5, 2024");
        assert_eq!(format_long_date("2023-12-25T10:30:00.000Z"), "December 25, 2023");
        assert_eq!(format_long_date("2023-01-09T08:00:00"), "January 9, 2023");
        assert_eq!(format_long_date("yesterday"), INVALID_DATE);
        assert_eq!(format_long_date(""), INVALID_DATE);
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(
            encode_component("https://a.dev/#post/1"),
            "https%3A%2F%2Fa.dev%2F%23post%2F1"
        );
        assert_eq!(encode_component("Hello & bye"), "Hello+%26+bye");
    }

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("https://a.dev/", "7"), "https://a.dev/#post/7");
        assert_eq!(post_url("https://a.dev/#blog", "7"), "https://a.dev/#post/7");
    }
}
