//! Plain-text listing for the terminal.

use crate::models::ArticleCollection;
use std::fmt::Write;

/// Render headlines (sorted) with their links indented underneath.
pub fn render(articles: &ArticleCollection, edition: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} edition: {} article(s)\n", edition, articles.len());

    for (headline, link) in articles {
        let headline = if headline.is_empty() { "(untitled)" } else { headline.as_str() };
        let _ = writeln!(out, "{}\n    {}", headline, link);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_sorted_listing() {
        let mut articles = ArticleCollection::new();
        articles.insert("Wind farms".to_string(), "https://x.com/2".to_string());
        articles.insert("Algae blooms".to_string(), "https://x.com/1".to_string());

        let out = render(&articles, "Morning");
        assert_eq!(
            out,
            "Morning edition: 2 article(s)\n\n\
             Algae blooms\n    https://x.com/1\n\
             Wind farms\n    https://x.com/2\n"
        );
    }

    #[test]
    fn test_render_empty_and_untitled() {
        assert_eq!(render(&ArticleCollection::new(), "Evening"), "Evening edition: 0 article(s)\n\n");

        let mut articles = ArticleCollection::new();
        articles.insert(String::new(), "/img".to_string());
        assert!(render(&articles, "Evening").contains("(untitled)\n    /img\n"));
    }
}
