/// Presentation strings derived from entry URLs and timestamps
use crate::reading_list::ListCounts;
use url::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
const FAVICON_SIZE: u32 = 64;

const MS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Domain label for a URL
///
/// Algorithm:
/// 1. Parse as an absolute URL
/// 2. Take the hostname (port is not part of it)
/// 3. Strip a leading "www."
///
/// Unparseable input comes back unchanged, so "" stays "".
///
/// Examples:
/// - https://www.example.com/page → example.com
/// - https://www.blog.example.com → blog.example.com
/// - https://localhost:3000/page → localhost
/// - not-a-valid-url → not-a-valid-url
pub fn domain_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            host.strip_prefix("www.").unwrap_or(host).to_string()
        }
        Err(_) => url.to_string(),
    }
}

/// Favicon reference for a URL. Only builds the address, never fetches it.
pub fn favicon_url(url: &str) -> String {
    format!("{}?domain={}&sz={}", FAVICON_SERVICE, domain_of(url), FAVICON_SIZE)
}

/// Relative age of a timestamp against the current wall clock
pub fn relative_age(timestamp: Option<f64>) -> String {
    relative_age_at(timestamp, now_millis())
}

/// Relative age of `timestamp` as seen at `now` (both epoch milliseconds)
///
/// Whole days win over hours once at least one day has elapsed; values are
/// truncated, never rounded. Absent, zero or NaN timestamps render as "".
pub fn relative_age_at(timestamp: Option<f64>, now: f64) -> String {
    let timestamp = match timestamp {
        Some(t) if t != 0.0 && !t.is_nan() => t,
        _ => return String::new(),
    };

    let elapsed = now - timestamp;
    let days = (elapsed / MS_PER_DAY).floor();
    let hours = (elapsed / MS_PER_HOUR).floor();

    if days > 0.0 {
        format!("{}d", days as i64)
    } else if hours > 0.0 {
        format!("{}h", hours as i64)
    } else {
        "now".to_string()
    }
}

/// Share of the list already read, as a whole percent
pub fn progress_percent(counts: &ListCounts) -> u8 {
    if counts.total == 0 {
        return 0;
    }
    ((counts.read as f64 / counts.total as f64) * 100.0).round() as u8
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: f64 = 1_700_000_000_000.0;
    const MINUTE: f64 = 60.0 * 1000.0;

    #[test]
    fn test_domain_of_basic() {
        assert_eq!(domain_of("https://example.com/path/to/page"), "example.com");
        assert_eq!(domain_of("https://www.example.com/page"), "example.com");
        assert_eq!(domain_of("http://example.com"), "example.com");
        assert_eq!(domain_of("https://example.com/page?foo=bar&baz=qux"), "example.com");
    }

    #[test]
    fn test_domain_of_subdomains() {
        assert_eq!(domain_of("https://blog.example.com/article"), "blog.example.com");
        assert_eq!(domain_of("https://www.blog.example.com"), "blog.example.com");
    }

    #[test]
    fn test_domain_of_only_strips_leading_www() {
        assert_eq!(domain_of("https://awww.example.com"), "awww.example.com");
        assert_eq!(domain_of("https://www.www.example.com"), "www.example.com");
    }

    #[test]
    fn test_domain_of_drops_port() {
        assert_eq!(domain_of("https://localhost:3000/page"), "localhost");
        assert_eq!(domain_of("http://127.0.0.1:8080"), "127.0.0.1");
    }

    #[test]
    fn test_domain_of_invalid_input() {
        assert_eq!(domain_of("not-a-valid-url"), "not-a-valid-url");
        assert_eq!(domain_of(""), "");
    }

    #[test]
    fn test_domain_of_hostless_url() {
        assert_eq!(domain_of("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_favicon_url() {
        assert_eq!(
            favicon_url("https://example.com"),
            "https://www.google.com/s2/favicons?domain=example.com&sz=64"
        );
        assert_eq!(
            favicon_url("https://www.github.com/user/repo"),
            "https://www.google.com/s2/favicons?domain=github.com&sz=64"
        );
        assert_eq!(
            favicon_url("https://docs.google.com/document"),
            "https://www.google.com/s2/favicons?domain=docs.google.com&sz=64"
        );
    }

    #[test]
    fn test_relative_age_absent() {
        assert_eq!(relative_age_at(None, NOW), "");
        assert_eq!(relative_age_at(Some(0.0), NOW), "");
    }

    #[test]
    fn test_relative_age_nan_is_absent() {
        assert_eq!(relative_age_at(Some(f64::NAN), NOW), "");
        assert_eq!(relative_age(Some(f64::NAN)), "");
    }

    #[test]
    fn test_relative_age_under_an_hour() {
        assert_eq!(relative_age_at(Some(NOW - 30.0 * MINUTE), NOW), "now");
        assert_eq!(relative_age_at(Some(NOW - 59.0 * MINUTE), NOW), "now");
        assert_eq!(relative_age_at(Some(NOW - 1000.0), NOW), "now");
    }

    #[test]
    fn test_relative_age_hours() {
        assert_eq!(relative_age_at(Some(NOW - MS_PER_HOUR), NOW), "1h");
        assert_eq!(relative_age_at(Some(NOW - 5.0 * MS_PER_HOUR), NOW), "5h");
        assert_eq!(relative_age_at(Some(NOW - 23.0 * MS_PER_HOUR), NOW), "23h");
    }

    #[test]
    fn test_relative_age_days() {
        assert_eq!(relative_age_at(Some(NOW - MS_PER_DAY), NOW), "1d");
        assert_eq!(relative_age_at(Some(NOW - 7.0 * MS_PER_DAY), NOW), "7d");
        assert_eq!(relative_age_at(Some(NOW - 365.0 * MS_PER_DAY), NOW), "365d");
    }

    #[test]
    fn test_relative_age_days_take_precedence() {
        assert_eq!(relative_age_at(Some(NOW - 25.0 * MS_PER_HOUR), NOW), "1d");
    }

    #[test]
    fn test_relative_age_future_timestamp() {
        assert_eq!(relative_age_at(Some(NOW + 5.0 * MS_PER_HOUR), NOW), "now");
    }

    #[test]
    fn test_relative_age_uses_clock() {
        let two_hours_ago = now_millis() - 2.0 * MS_PER_HOUR - MINUTE;
        assert_eq!(relative_age(Some(two_hours_ago)), "2h");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(&ListCounts::default()), 0);
        assert_eq!(progress_percent(&ListCounts { total: 4, unread: 3, read: 1 }), 25);
        assert_eq!(progress_percent(&ListCounts { total: 3, unread: 1, read: 2 }), 67);
        assert_eq!(progress_percent(&ListCounts { total: 2, unread: 0, read: 2 }), 100);
    }
}
