use crate::models::Movie;

/// Formats a watchlist as plain text for sharing:
///
/// ```text
/// 🎬 Weekend
///
/// - Inception (2010)
/// - Parasite (2019)
/// ```
///
/// Movies without a year are listed by title alone.
pub fn share_as_text(title: &str, movies: &[Movie]) -> String {
    let lines = movies
        .iter()
        .map(|movie| match movie.year {
            Some(year) => format!("- {} ({year})", movie.title),
            None => format!("- {}", movie.title),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("🎬 {title}\n\n{lines}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_contains_title_and_year() {
        let movies = vec![Movie::new("Inception", "...").with_year(2010)];
        let text = share_as_text("Weekend", &movies);
        assert!(text.starts_with("🎬 Weekend\n\n"));
        assert!(text.contains("- Inception (2010)"));
    }

    #[test]
    fn test_share_preserves_order_one_per_line() {
        let movies = vec![
            Movie::new("Heat", "...").with_year(1995),
            Movie::new("Ronin", "..."),
        ];
        let text = share_as_text("Crime", &movies);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["🎬 Crime", "", "- Heat (1995)", "- Ronin"]);
    }

    #[test]
    fn test_share_empty_list() {
        assert_eq!(share_as_text("Nothing yet", &[]), "🎬 Nothing yet\n\n");
    }
}
