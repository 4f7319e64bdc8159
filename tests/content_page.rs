// tests/content_page.rs
use std::time::{Duration, Instant};

use url::Url;

use universal_cart::config::file;
use universal_cart::content::{extract_product, is_product_page, ButtonState, PageSession};
use universal_cart::core::Document;
use universal_cart::port::NullPort;
use universal_cart::storage::{MemoryStore, Response, StorageService};

const PRODUCT_PAGE: &str = r#"
<html><body>
  <h1>  Blue Widget  </h1>
  <span class="price">$19.99</span>
  <div class="product-price">$19.99</div>
  <div class="description">  Sturdy and blue. </div>
  <div class="gallery"><img src="/w.jpg"></div>
</body></html>"#;

const ARTICLE_PAGE: &str = r#"
<html><body>
  <h1>Ten widgets we love</h1>
  <p>No prices here.</p>
</body></html>"#;

fn session_with(html: &str) -> PageSession {
    PageSession::load_with_delay("https://shop.example.com/p/42?ref=x", html, Duration::from_millis(2_000))
        .unwrap()
}

#[test]
fn detects_price_plus_one_other_signal() {
    assert!(is_product_page(&Document::parse(PRODUCT_PAGE)));
    assert!(!is_product_page(&Document::parse(ARTICLE_PAGE)));

    // Price alone isn't enough.
    assert!(!is_product_page(&Document::parse(r#"<span class="price">$3</span>"#)));
    // Price + add-to-cart button is.
    assert!(is_product_page(&Document::parse(
        r#"<span itemprop="price">3</span><button id="add-to-cart-main">Buy</button>"#
    )));
}

#[test]
fn extracts_the_fixture_product() {
    let url = Url::parse("https://shop.example.com/p/42").unwrap();
    let p = extract_product(&Document::parse(PRODUCT_PAGE), &url).unwrap();

    assert_eq!(p.name, "Blue Widget");
    assert_eq!(p.price, "$19.99");
    assert_eq!(p.description.as_deref(), Some("Sturdy and blue."));
    // Text content of <img> is empty.
    assert_eq!(p.image.as_deref(), Some(""));
    assert_eq!(p.source, "shop.example.com");
    assert_eq!(p.source_icon.as_deref(), Some("https://shop.example.com/favicon.ico"));
    assert_eq!(p.url, "https://shop.example.com/p/42");
    assert!(p.id.is_none());
}

#[test]
fn itemprop_wins_over_later_selectors() {
    let html = r#"
        <h1>Page heading</h1>
        <span itemprop="name">Real Name</span>
        <span itemprop="price">42.00</span>"#;
    let url = Url::parse("https://a.test/").unwrap();
    let p = extract_product(&Document::parse(html), &url).unwrap();
    assert_eq!(p.name, "Real Name");
    assert_eq!(p.price, "42.00");
}

#[test]
fn empty_first_match_falls_through_to_next_selector() {
    let html = r#"
        <span itemprop="name"></span>
        <h1>Fallback</h1>
        <div class="current-price">9</div>"#;
    let url = Url::parse("https://a.test/").unwrap();
    let p = extract_product(&Document::parse(html), &url).unwrap();
    assert_eq!(p.name, "Fallback");
    assert_eq!(p.price, "9");
}

#[test]
fn missing_price_extracts_nothing() {
    let url = Url::parse("https://a.test/").unwrap();
    assert!(extract_product(&Document::parse(ARTICLE_PAGE), &url).is_none());
}

#[test]
fn button_appears_once_and_stays() {
    let mut session = session_with(ARTICLE_PAGE);
    assert!(session.button().is_none());

    session.on_mutation(PRODUCT_PAGE);
    assert!(session.button().is_some());
    session.on_mutation(PRODUCT_PAGE);
    assert!(session.button().is_some());

    // Page stops matching: button is kept.
    session.on_mutation(ARTICLE_PAGE);
    assert!(!session.is_product_page());
    assert!(session.button().is_some());
}

#[test]
fn existing_element_id_blocks_injection() {
    let html = PRODUCT_PAGE.replace(
        "</body>",
        r#"<button id="Universal-cart-button">Add to Universal Cart</button></body>"#,
    );
    let session = session_with(&html);
    assert!(session.is_product_page());
    assert!(session.button().is_none());
}

#[test]
fn click_adds_and_button_resets() {
    let service = StorageService::new(MemoryStore::new());
    let mut session = session_with(PRODUCT_PAGE);
    let t0 = Instant::now();

    assert_eq!(session.click(&service, t0), Some(ButtonState::Added));
    let b = session.button().unwrap();
    assert_eq!(b.label(), "Added to Cart ✓");
    assert_eq!(b.background(), "#10B981");

    let stored = service.get_products();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Blue Widget");

    session.tick(t0 + Duration::from_millis(1_000));
    assert_eq!(session.button().unwrap().state(), ButtonState::Added);
    session.tick(t0 + Duration::from_millis(2_000));
    let b = session.button().unwrap();
    assert_eq!(b.state(), ButtonState::Idle);
    assert_eq!(b.label(), "Add to Universal Cart");
    assert_eq!(b.background(), "#3B82F6");
}

#[test]
fn configured_reset_delay_drives_the_button() {
    let service = StorageService::new(MemoryStore::new());
    let opts = file::parse("reset_delay_ms=250\n");
    let mut session =
        PageSession::load_with_options("https://shop.example.com/p/42", PRODUCT_PAGE, &opts.button)
            .unwrap();
    let t0 = Instant::now();

    assert_eq!(session.click(&service, t0), Some(ButtonState::Added));
    assert_eq!(session.button().unwrap().reset_at(), Some(t0 + Duration::from_millis(250)));

    session.tick(t0 + Duration::from_millis(249));
    assert_eq!(session.button().unwrap().state(), ButtonState::Added);
    session.tick(t0 + Duration::from_millis(250));
    assert_eq!(session.button().unwrap().state(), ButtonState::Idle);
}

#[test]
fn click_without_host_shows_error() {
    let mut session = session_with(PRODUCT_PAGE);
    assert_eq!(session.click(&NullPort, Instant::now()), Some(ButtonState::Error));
    assert_eq!(session.button().unwrap().label(), "Error");
}

#[test]
fn refused_add_shows_failed() {
    struct Refuse;
    impl universal_cart::port::CartPort for Refuse {
        fn send(
            &self,
            _request: universal_cart::storage::Request,
        ) -> Result<Response, universal_cart::port::PortError> {
            Ok(Response::failed("nope"))
        }
    }

    let mut session = session_with(PRODUCT_PAGE);
    assert_eq!(session.click(&Refuse, Instant::now()), Some(ButtonState::Failed));
    let b = session.button().unwrap();
    assert_eq!(b.label(), "Failed to Add");
    assert_eq!(b.background(), "#EF4444");
}

#[test]
fn click_does_nothing_when_extraction_fails() {
    // Detected via price + image, but no name anywhere.
    let html = r#"<span class="price">$3</span><div class="gallery"><img src="x.jpg"></div>"#;
    let service = StorageService::new(MemoryStore::new());
    let mut session = session_with(html);
    assert!(session.button().is_some());

    assert_eq!(session.click(&service, Instant::now()), None);
    assert_eq!(session.button().unwrap().state(), ButtonState::Idle);
    assert!(service.get_products().is_empty());
}

#[test]
fn hover_only_changes_background() {
    let mut session = session_with(PRODUCT_PAGE);
    let b = session.button_mut().unwrap();
    b.mouse_enter();
    assert_eq!(b.background(), "#2563EB");
    assert_eq!(b.label(), "Add to Universal Cart");
    b.mouse_leave();
    assert_eq!(b.background(), "#3B82F6");
    assert!(b.to_html().contains(r#"id="Universal-cart-button""#));
}
