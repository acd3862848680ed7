//! Request randomization and logging helpers.
//!
//! Every outbound request carries a User-Agent drawn from a fixed pool of
//! real browser strings, and successive search-page fetches are separated by
//! a random pause. Both knobs exist to keep the scraper's traffic pattern
//! from looking mechanical.

use rand::{Rng, rng};
use std::time::Duration;

/// Fixed pool of browser User-Agent strings rotated across requests.
pub const USER_AGENTS: [&str; 6] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 Safari/1460.1.57",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:89.0) Gecko/20100101 Firefox/89.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0",
];

/// Pick a User-Agent string at random from [`USER_AGENTS`].
pub fn random_user_agent() -> &'static str {
    USER_AGENTS[rng().random_range(0..USER_AGENTS.len())]
}

/// Draw a pause duration uniformly from `[min_secs, max_secs]`.
///
/// Used between successive search-page fetches. Article fetches within a
/// page are not delayed.
pub fn random_delay(min_secs: f64, max_secs: f64) -> Duration {
    Duration::from_secs_f64(rng().random_range(min_secs..=max_secs))
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte
/// count indicator appended. Used when logging article titles and content
/// previews.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_agent_comes_from_pool() {
        for _ in 0..32 {
            let ua = random_user_agent();
            assert!(USER_AGENTS.contains(&ua));
        }
    }

    #[test]
    fn test_random_delay_within_range() {
        for _ in 0..32 {
            let d = random_delay(1.0, 3.0);
            assert!(d >= Duration::from_secs_f64(1.0));
            assert!(d <= Duration::from_secs_f64(3.0));
        }
    }

    #[test]
    fn test_random_delay_degenerate_range() {
        assert_eq!(random_delay(0.0, 0.0), Duration::ZERO);
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        let s = "héllo wörld, héllo wörld";
        let result = truncate_for_log(s, 2);
        assert!(result.starts_with('h'));
    }
}
