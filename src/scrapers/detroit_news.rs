//! The Detroit News front page.
//!
//! Story anchors carry exactly the `gnt_m_flm_a` class; anchors with extra
//! classes are promos. The headline is the anchor text.

use crate::models::SiteDescriptor;

pub fn descriptor() -> SiteDescriptor {
    SiteDescriptor::new(
        "Detroit News",
        "https://www.detroitnews.com/news/",
        "https://www.detroitnews.com",
        r#"a[class="gnt_m_flm_a"]"#,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_skips_promos_and_missing_links() {
        let html = r#"
            <a class="gnt_m_flm_a">Dangling anchor</a>
            <a class="gnt_m_flm_a gnt_m_flm_a__promo" href="/story/promo">Subscribe now</a>
            <a class="gnt_m_flm_a" href="/story/news/local/2021/03/01/recycling">Recycling rates climb</a>
        "#;

        let articles = extract(html, &descriptor()).unwrap();
        let headlines: Vec<&str> = articles.keys().map(String::as_str).collect();
        assert_eq!(headlines, vec!["Recycling rates climb"]);
        assert_eq!(
            articles["Recycling rates climb"],
            "https://www.detroitnews.com/story/news/local/2021/03/01/recycling"
        );
    }
}
