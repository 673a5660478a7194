//! Selector-driven extraction of headlines and links from a page.
//!
//! One engine interprets every [`SiteDescriptor`]: find candidate link
//! elements with `link_selector`, locate the headline inside each one (or use
//! the link element itself), prefix relative links, and collect the results
//! into an [`ArticleCollection`].

use crate::error::ParseError;
use crate::models::{ArticleCollection, SiteDescriptor};
use crate::utils::truncate_for_log;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

/// Compile a CSS selector, keeping the offending text in the error.
pub fn compile_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Extract `headline → link` pairs from `markup` according to `descriptor`.
///
/// Link elements without an `href`, and link elements with no descendant
/// matching `headline_selector`, are skipped. When two link elements carry
/// the same headline the later one wins.
///
/// # Errors
///
/// [`ParseError`] if a selector in the descriptor does not compile.
#[instrument(level = "debug", skip_all, fields(site = %descriptor.name))]
pub fn extract(markup: &str, descriptor: &SiteDescriptor) -> Result<ArticleCollection, ParseError> {
    let link_selector = compile_selector(&descriptor.link_selector)?;
    let headline_selector = descriptor
        .headline_selector
        .as_deref()
        .map(compile_selector)
        .transpose()?;

    let document = Html::parse_document(markup);
    if !document.errors.is_empty() {
        debug!(
            count = document.errors.len(),
            "Recovered from malformed markup"
        );
    }

    let mut articles = ArticleCollection::new();
    let mut candidates = 0usize;
    for link_element in document.select(&link_selector) {
        candidates += 1;

        let Some(href) = link_element.value().attr("href") else {
            continue;
        };

        let headline_element = match &headline_selector {
            Some(selector) => match link_element.select(selector).next() {
                Some(element) => element,
                None => continue,
            },
            None => link_element,
        };

        let headline = element_text(headline_element);
        let link = format!("{}{}", descriptor.prefix, href);
        articles.insert(headline, link);
    }

    if candidates == 0 {
        debug!(
            selector = %descriptor.link_selector,
            preview = %truncate_for_log(markup, 200),
            "No element matched link_selector"
        );
    }
    debug!(candidates, extracted = articles.len(), "Extracted articles");
    Ok(articles)
}

/// Full text content of an element, trimmed at both ends.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item_site(headline_selector: Option<&str>, prefix: &str) -> SiteDescriptor {
        SiteDescriptor::new(
            "X",
            "https://x.com",
            prefix,
            "a.item",
            headline_selector,
        )
    }

    fn collection(pairs: &[(&str, &str)]) -> ArticleCollection {
        pairs
            .iter()
            .map(|(h, l)| (h.to_string(), l.to_string()))
            .collect()
    }

    #[test]
    fn test_headline_from_descendant_with_prefix() {
        let markup = r#"<a class="item" href="/p/1"><h3> Hi There </h3></a>"#;
        let site = item_site(Some("h3"), "https://x.com");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("Hi There", "https://x.com/p/1")]));
    }

    #[test]
    fn test_missing_href_is_skipped() {
        let markup = r#"<a class="item"><h3> Hi There </h3></a>"#;
        let site = item_site(Some("h3"), "https://x.com");
        let articles = extract(markup, &site).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_headline_is_link_text_when_no_headline_selector() {
        let markup = r#"<a class="item" href="/q"> Plain Text </a>"#;
        let site = item_site(None, "");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("Plain Text", "/q")]));
    }

    #[test]
    fn test_unmatched_headline_selector_skips_only_that_link() {
        let markup = r#"
            <a class="item" href="/nav">Home</a>
            <a class="item" href="/story"><h3>Ocean Story</h3></a>
        "#;
        let site = item_site(Some("h3"), "");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("Ocean Story", "/story")]));
    }

    #[test]
    fn test_missing_href_does_not_stop_later_links() {
        let markup = r#"
            <a class="item">No link</a>
            <a class="item" href="/a">First</a>
            <a class="item">Also no link</a>
            <a class="item" href="/b">Second</a>
        "#;
        let site = item_site(None, "https://x.com");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(
            articles,
            collection(&[("First", "https://x.com/a"), ("Second", "https://x.com/b")])
        );
    }

    #[test]
    fn test_first_matching_descendant_wins() {
        let markup = r#"
            <a class="item" href="/p"><span class="t">Primary</span><span class="t">Secondary</span></a>
        "#;
        let site = item_site(Some("span.t"), "");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("Primary", "/p")]));
    }

    #[test]
    fn test_headline_includes_nested_text() {
        let markup = r#"<a class="item" href="/n"><h3>
            Carbon <em>capture</em> plans
        </h3></a>"#;
        let site = item_site(Some("h3"), "");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("Carbon capture plans", "/n")]));
    }

    #[test]
    fn test_duplicate_headline_last_write_wins() {
        let markup = r#"
            <a class="item" href="/old">Same</a>
            <a class="item" href="/new">Same</a>
        "#;
        let site = item_site(None, "");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("Same", "/new")]));
    }

    #[test]
    fn test_empty_headline_is_kept() {
        let markup = r#"<a class="item" href="/img"><img src="x.png"></a>"#;
        let site = item_site(None, "");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("", "/img")]));
    }

    #[test]
    fn test_prefix_is_concatenated_without_validation() {
        let markup = r#"<a class="item" href="weird path">W</a>"#;
        let site = item_site(None, "https://x.com/");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles, collection(&[("W", "https://x.com/weird path")]));
    }

    #[test]
    fn test_no_candidates_yields_empty_collection() {
        let site = item_site(None, "");
        assert!(extract("<p>nothing here</p>", &site).unwrap().is_empty());
        assert!(extract("", &site).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_markup_is_recovered() {
        let markup = r#"<div><a class="item" href="/x">Unclosed <b>tags</div>"#;
        let site = item_site(None, "");
        let articles = extract(markup, &site).unwrap();
        assert_eq!(articles.get("Unclosed tags").map(String::as_str), Some("/x"));
    }

    #[test]
    fn test_invalid_selector_is_parse_error() {
        let mut site = item_site(None, "");
        site.link_selector = "a[".to_string();
        let err = extract("<a href='/'>x</a>", &site).unwrap_err();
        assert!(matches!(err, ParseError::InvalidSelector { ref selector, .. } if selector == "a["));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let markup = r#"
            <a class="item" href="/1"><h3>One</h3></a>
            <a class="item" href="/2"><h3>Two</h3></a>
            <a class="item" href="/3"><h3>One</h3></a>
        "#;
        let site = item_site(Some("h3"), "https://x.com");
        let first = extract(markup, &site).unwrap();
        let second = extract(markup, &site).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bbc_style_attribute_selector() {
        let markup = r#"
            <a href="/news/science-environment-1" class="gs-c-promo-heading"><h3>Ice shelf cracks</h3></a>
            <a href="/sport/1" class="gs-c-promo-heading"><h3>Football</h3></a>
        "#;
        let site = SiteDescriptor::new(
            "BBC",
            "https://www.bbc.com/news/science_and_environment",
            "https://bbc.com",
            r#"a[href ^= "/news"].gs-c-promo-heading"#,
            Some("h3"),
        );
        let articles = extract(markup, &site).unwrap();
        assert_eq!(
            articles,
            collection(&[("Ice shelf cracks", "https://bbc.com/news/science-environment-1")])
        );
    }
}
