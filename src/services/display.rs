use url::Url;

/// Compact form of a full channel URL for constrained UI surfaces.
///
/// Drops the scheme, query, and fragment, trims a trailing slash, and cuts
/// the rest to `max_chars` with an ellipsis. Input that does not parse as an
/// absolute URL falls back to its trimmed form.
pub fn shorten_url_for_display(raw: &str, max_chars: usize) -> String {
    let compact = match Url::parse(raw) {
        Ok(parsed) => format!(
            "{}{}",
            parsed.host_str().unwrap_or_default(),
            parsed.path().trim_end_matches('/')
        ),
        Err(_) => raw.trim().to_string(),
    };
    truncate_chars(&compact, max_chars)
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
