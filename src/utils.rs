use chrono::{DateTime, Utc};
use reqwest::Url;

use crate::types::{ShortUrl, ShortUrlTableRow};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Public link for a short code: `{base}/urls/{short_code}`, with the code
/// percent-encoded as a single path segment.
pub fn short_link(base_url: &str, short_code: &str) -> String {
    match Url::parse(base_url)
        .ok()
        .and_then(|base| join_segments(&base, &["urls", short_code]))
    {
        Some(url) => url.to_string(),
        None => format!("{}/urls/{}", base_url.trim_end_matches('/'), short_code),
    }
}

/// Appends `segments` to the path of `base`, encoding each one. `None` when the
/// base cannot carry a path.
pub fn join_segments(base: &Url, segments: &[&str]) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut().ok()?.pop_if_empty().extend(segments);
    Some(url)
}

pub fn views_label(access_count: u64) -> String {
    format!("{} views", access_count)
}

/// Human distance between two instants, in the buckets of date-fns'
/// `formatDistance` (no seconds granularity).
pub fn distance(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = (to - from).num_seconds().abs();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{} minutes", minutes);
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return format!("about {} hours", hours);
    }
    if minutes < 2520 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return format!("{} days", days);
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return if months <= 1 {
            "about 1 month".to_string()
        } else {
            format!("about {} months", months)
        };
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return format!("{} months", nearest);
    }

    let years = months / 12;
    let rest = months % 12;
    let unit = |n: i64| if n == 1 { "year" } else { "years" };
    if rest < 3 {
        format!("about {} {}", years, unit(years))
    } else if rest < 9 {
        format!("over {} {}", years, unit(years))
    } else {
        format!("almost {} years", years + 1)
    }
}

/// Relative age of a record as shown next to it, e.g. `"5 minutes ago"`.
pub fn relative_age(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} ago", distance(updated_at, now))
}

pub fn to_table_rows(urls: &[ShortUrl], base_url: &str, now: DateTime<Utc>) -> Vec<ShortUrlTableRow> {
    urls.iter()
        .map(|u| ShortUrlTableRow {
            link: short_link(base_url, &u.short_code),
            original: u.original.clone(),
            views: views_label(u.access_count),
            updated: relative_age(u.updated_at, now),
        })
        .collect()
}
