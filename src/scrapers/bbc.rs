//! BBC News, Science & Environment section.
//!
//! Story links are relative (`/news/science-environment-56133281`) and carry
//! the headline in an `<h3>` child. Links without an `<h3>` are navigation
//! and get skipped.

use crate::models::SiteDescriptor;

pub fn descriptor() -> SiteDescriptor {
    SiteDescriptor::new(
        "BBC Science & Environment",
        "https://www.bbc.com/news/science_and_environment",
        "https://www.bbc.com",
        r#"a[href*="/news/science-environment"]"#,
        Some("h3"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;

    #[test]
    fn test_extracts_story_headlines() {
        let html = r#"
            <div class="gs-c-promo">
              <a class="gs-c-promo-heading" href="/news/science-environment-56133281">
                <h3 class="gs-c-promo-heading__title">Arctic sea ice hits new low</h3>
              </a>
              <a href="/news/science-environment-1">Related topics</a>
              <a href="/sport/football">Football</a>
            </div>
        "#;

        let articles = extract(html, &descriptor()).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(
            articles.get("Arctic sea ice hits new low").map(String::as_str),
            Some("https://www.bbc.com/news/science-environment-56133281")
        );
    }
}
