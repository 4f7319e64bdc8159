// src/core/dom.rs
//
// Thin read-only wrapper over a parsed HTML snapshot.
// Selector strings are the ones a browser would accept for querySelector;
// one that fails to parse simply matches nothing.

use scraper::{ElementRef, Html, Selector};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// First element in document order matching `selector` (may be a list).
    fn query(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = parse_selector(selector)?;
        self.html.select(&sel).next()
    }

    /// Does any element match?
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Concatenated text of the first match, untrimmed (`textContent`).
    pub fn first_text(&self, selector: &str) -> Option<String> {
        self.query(selector).map(|el| el.text().collect::<String>())
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.html
            .tree
            .nodes()
            .any(|n| n.value().as_element().and_then(|el| el.id()) == Some(id))
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector.trim()) {
        Ok(s) => Some(s),
        Err(e) => {
            logd!("Dom: Bad selector {:?} ({:?})", selector, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <h1>  Widget </h1>
            <div class="price">$19.99</div>
            <div class="price">$29.99</div>
            <img class="product" src="/w.png">
            <button id="Universal-cart-button">Add</button>
        </body></html>
    "#;

    #[test]
    fn first_match_wins() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.first_text(".price").as_deref(), Some("$19.99"));
        assert_eq!(doc.first_text("h1").as_deref(), Some("  Widget "));
    }

    #[test]
    fn selector_lists() {
        let doc = Document::parse(PAGE);
        assert!(doc.exists("[itemprop=\"price\"], .price"));
        assert!(!doc.exists(".missing"));
        assert_eq!(doc.first_text("img.product").as_deref(), Some(""));
    }

    #[test]
    fn bad_selector_matches_nothing() {
        let doc = Document::parse(PAGE);
        assert!(!doc.exists("[[["));
        assert!(doc.has_id("Universal-cart-button"));
        assert!(!doc.has_id("nope"));
    }
}
