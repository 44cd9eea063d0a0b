//! Page templates of the web front end, rendered from `templates/`.

use askama::Template;
use askama_web::WebTemplate;
use chrono::{DateTime, Utc};

use crate::{
    types::ShortUrl,
    utils,
    views::{HomeState, Level, Notification},
};

/// A notification rendered at the top of a page.
pub struct Toast {
    pub class: &'static str,
    pub message: String,
}

impl From<Notification> for Toast {
    fn from(n: Notification) -> Self {
        let class = match n.level {
            Level::Success => "toast success",
            Level::Info => "toast info",
            Level::Error => "toast error",
        };
        Self {
            class,
            message: n.message,
        }
    }
}

/// One short URL: link, view count, age.
pub struct Card {
    pub link: String,
    pub views: String,
    pub age: String,
}

impl Card {
    pub fn new(url: &ShortUrl, base_url: &str, now: DateTime<Utc>) -> Self {
        Self {
            link: utils::short_link(base_url, &url.short_code),
            views: utils::views_label(url.access_count),
            age: utils::relative_age(url.updated_at, now),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub toasts: Vec<Toast>,
    pub input: String,
    pub latest: Option<Card>,
    pub urls: Vec<Card>,
}

impl HomeTemplate {
    pub fn new(home: HomeState, notifications: Vec<Notification>, base_url: &str) -> Self {
        let now = Utc::now();
        Self {
            toasts: notifications.into_iter().map(Toast::from).collect(),
            latest: home.latest.as_ref().map(|u| Card::new(u, base_url, now)),
            urls: home
                .urls
                .iter()
                .map(|u| Card::new(u, base_url, now))
                .collect(),
            input: home.input,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
pub struct RedirectTemplate {
    pub toasts: Vec<Toast>,
    pub failed: bool,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn card() -> Card {
        let url = ShortUrl {
            id: "1".to_string(),
            original: "example.com".to_string(),
            short_code: "abc123".to_string(),
            access_count: 0,
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 5, 0).unwrap();
        Card::new(&url, "http://localhost:8080", now)
    }

    #[test]
    fn card_shows_link_views_and_age() {
        let card = card();
        assert_eq!(card.link, "http://localhost:8080/urls/abc123");
        assert_eq!(card.views, "0 views");
        assert_eq!(card.age, "5 minutes ago");
    }

    #[test]
    fn home_renders_latest_above_recent() {
        let page = HomeTemplate {
            toasts: vec![],
            input: String::new(),
            latest: Some(card()),
            urls: vec![card()],
        };

        let html = page.render().unwrap();

        let latest = html.find("<h2>Your Shortened URL</h2>").unwrap();
        let recent = html.find("<h2>Recent URLs</h2>").unwrap();
        assert!(latest < recent);
        assert_eq!(html.matches(">http://localhost:8080/urls/abc123</a>").count(), 2);
        assert!(!html.contains("No shortened URLs yet."));
    }

    #[test]
    fn home_escapes_user_input_and_messages() {
        let page = HomeTemplate {
            toasts: vec![Toast {
                class: "toast error",
                message: "<b>boom</b>".to_string(),
            }],
            input: "\"><script>alert(1)</script>".to_string(),
            latest: None,
            urls: vec![],
        };

        let html = page.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>boom</b>"));
        assert!(html.contains("No shortened URLs yet."));
    }

    #[test]
    fn notifications_render_before_content() {
        let page = RedirectTemplate {
            toasts: vec![Toast::from(Notification {
                level: Level::Error,
                message: "Failed to redirect. The URL may be invalid or expired.".to_string(),
            })],
            failed: true,
            message: "",
        };

        let html = page.render().unwrap();

        let toast = html.find("toast error").unwrap();
        let body = html.find("Failed to redirect</p>").unwrap();
        assert!(toast < body);
        assert!(html.contains("<title>Redirecting</title>"));
    }
}
