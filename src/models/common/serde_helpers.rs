//! 请求体字段的自定义反序列化

use chrono::NaiveDate;

// 课次日期同时接受 `2024-02-01` 与前端日期控件提交的 `2024-02-01T00:00:00.000Z`
pub fn parse_session_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = value.trim();
    let date_part = match trimmed.split_once('T') {
        Some((date, _)) => date,
        None => trimmed,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

pub fn deserialize_session_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct DateVisitor;

    impl<'de> Visitor<'de> for DateVisitor {
        type Value = NaiveDate;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a date string such as 2024-02-01 or an ISO 8601 timestamp")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            parse_session_date(value).map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_str(DateVisitor)
}

pub fn deserialize_optional_session_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(value) => parse_session_date(&value)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid session date: '{value}'"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(
            parse_session_date("2024-02-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_iso_timestamp_keeps_date_part() {
        assert_eq!(
            parse_session_date("2024-02-01T00:00:00.000Z").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_session_date("next tuesday").is_err());
        assert!(parse_session_date("2024-13-01").is_err());
    }
}
