//! MLive home page. Article links are absolute, so no prefix is needed.

use crate::models::SiteDescriptor;

pub fn descriptor() -> SiteDescriptor {
    SiteDescriptor::new(
        "Mlive",
        "https://www.mlive.com/",
        "",
        r#"a[data-ga-content-type="article"]"#,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;

    #[test]
    fn test_only_article_links() {
        let html = r#"
            <a data-ga-content-type="article" href="https://www.mlive.com/news/2021/03/wind-turbines.html">
                Wind turbines approved
            </a>
            <a data-ga-content-type="video" href="https://www.mlive.com/video/1">Watch</a>
        "#;

        let articles = extract(html, &descriptor()).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(
            articles["Wind turbines approved"],
            "https://www.mlive.com/news/2021/03/wind-turbines.html"
        );
    }
}
