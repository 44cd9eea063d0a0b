use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub original: String,
    pub short_code: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub access_count: u64,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShortUrlRequest {
    pub url: String,
}

#[derive(Tabled)]
pub struct ShortUrlTableRow {
    #[tabled(rename = "short url")]
    pub link: String,
    pub original: String,
    pub views: String,
    pub updated: String,
}

/// Outcome of a successful `GET /urls/{shortCode}`.
///
/// The backend usually answers with a redirect; `location` carries its target
/// when one was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: u16,
    pub location: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => s,
        RawScalar::Signed(n) => n.to_string(),
        RawScalar::Unsigned(n) => n.to_string(),
    })
}

/// Accepts RFC 3339, zone-less date-times (read as UTC), plain dates and epoch
/// milliseconds.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => parse_timestamp(&s)
            .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp: {}", s))),
        RawScalar::Signed(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", ms))),
        RawScalar::Unsigned(ms) => Err(D::Error::custom(format!(
            "timestamp out of range: {}",
            ms
        ))),
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
