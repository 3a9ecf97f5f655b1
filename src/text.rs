use regex::Regex;
use scraper::Html;

lazy_static::lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Flattens an HTML fragment (vacancy or employer description) to plain text.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}
