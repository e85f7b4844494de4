//! Search query construction from noisy title/year input.

/// Build the search query text for a title and optional raw year cell.
///
/// Returns `None` when the title is blank after trimming; the caller must
/// treat that as the empty-result case and skip the network round trip
/// entirely. A year that does not parse as a number is dropped without
/// error and the query is built from the title alone.
pub fn build_query(title: &str, year: Option<&str>) -> Option<String> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let mut query = title.to_string();
    if let Some(y) = year.and_then(parse_year) {
        query.push(' ');
        query.push_str(&y.to_string());
    }
    Some(query)
}

/// Accept integer cells and spreadsheet float cells ("2010.0") alike.
fn parse_year(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(y) = raw.parse::<i64>() {
        return Some(y);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f as i64),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_builds_no_query() {
        assert_eq!(build_query("", None), None);
        assert_eq!(build_query("   ", None), None);
        assert_eq!(build_query("\t\n", Some("2010")), None);
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(build_query("  Inception  ", None), Some("Inception".into()));
    }

    #[test]
    fn integer_year_is_appended() {
        assert_eq!(
            build_query("Inception", Some("2010")),
            Some("Inception 2010".into())
        );
    }

    #[test]
    fn float_year_cell_is_truncated() {
        assert_eq!(
            build_query("Inception", Some("2010.0")),
            Some("Inception 2010".into())
        );
    }

    #[test]
    fn non_numeric_year_is_dropped() {
        assert_eq!(build_query("Inception", Some("N/A")), Some("Inception".into()));
        assert_eq!(build_query("Inception", Some("")), Some("Inception".into()));
        assert_eq!(
            build_query("Inception", Some("unknown")),
            Some("Inception".into())
        );
    }

    #[test]
    fn year_whitespace_is_tolerated() {
        assert_eq!(
            build_query("Inception", Some(" 2010 ")),
            Some("Inception 2010".into())
        );
    }
}
