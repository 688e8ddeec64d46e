//! Display formatting helpers

/// Format seconds as `m:ss`
///
/// Non-finite or negative input renders as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Parse a catalog length (`m:ss` or `h:mm:ss`) into seconds
pub fn parse_time(value: &str) -> Option<f64> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut total = 0u64;
    for part in parts {
        let n: u64 = part.parse().ok()?;
        total = total * 60 + n;
    }
    Some(total as f64)
}

/// Artist names for the now-playing line
///
/// A single artist is shown as-is. Several artists are joined with `", "` and
/// cut to `max` characters with a trailing `...` when too long.
pub fn artist_display(artists: &[String], max: usize) -> String {
    match artists {
        [] => String::new(),
        [single] => single.clone(),
        many => {
            let joined = many.join(", ");
            if joined.chars().count() <= max {
                return joined;
            }
            let keep = max.saturating_sub(3);
            let mut cut: String = joined.chars().take(keep).collect();
            cut.truncate(cut.trim_end_matches(|c: char| c == ',' || c == ' ').len());
            cut.push_str("...");
            cut
        }
    }
}
