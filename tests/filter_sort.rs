// tests/filter_sort.rs
use universal_cart::cart::filter::added_millis;
use universal_cart::cart::{added_label, cart_totals, categories, filter_products, line_total, sources};
use universal_cart::model::{FilterOptions, Product, SortBy, SortOrder};

fn p(id: &str, name: &str, price: &str, source: &str) -> Product {
    Product {
        id: Some(id.into()),
        name: name.into(),
        price: price.into(),
        url: format!("https://{source}/{id}"),
        source: source.into(),
        ..Product::default()
    }
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_deref().unwrap_or("")).collect()
}

fn sample() -> Vec<Product> {
    let mut a = p("a", "Desk Lamp", "$25.00", "lamps.test");
    a.category = Some("Lighting".into());
    a.added_at = Some("2026-01-03T10:00:00.000Z".into());

    let mut b = p("b", "oak chair", "$120", "chairs.test");
    b.category = Some("Furniture".into());
    b.description = Some("Solid wood, natural LAMP-friendly finish".into());
    b.added_at = Some("2026-01-01T10:00:00.000Z".into());

    let mut c = p("c", "Bulb pack", "$5.50", "lamps.test");
    c.category = Some("Lighting".into());
    c.in_wishlist = Some(true);
    c.added_at = Some("2026-01-02T10:00:00.000Z".into());

    let d = p("d", "Mystery box", "Call for price", "misc.test");

    vec![a, b, c, d]
}

#[test]
fn empty_options_keep_everything_in_order() {
    let products = sample();
    let out = filter_products(&products, &FilterOptions::default());
    assert_eq!(out, products);
}

#[test]
fn wishlist_partition_treats_missing_as_cart() {
    let products = sample();

    let cart = FilterOptions { show_wishlist: Some(false), ..Default::default() };
    assert_eq!(ids(&filter_products(&products, &cart)), ["a", "b", "d"]);

    let wish = FilterOptions { show_wishlist: Some(true), ..Default::default() };
    assert_eq!(ids(&filter_products(&products, &wish)), ["c"]);
}

#[test]
fn filters_are_conjunctive() {
    let products = sample();
    let opts = FilterOptions {
        category: Some("Lighting".into()),
        source: Some("lamps.test".into()),
        show_wishlist: Some(false),
        ..Default::default()
    };
    let out = filter_products(&products, &opts);
    assert_eq!(ids(&out), ["a"]);
    for x in &out {
        assert_eq!(x.category.as_deref(), Some("Lighting"));
        assert_eq!(x.source, "lamps.test");
        assert!(!x.in_wishlist());
    }
}

#[test]
fn empty_strings_do_not_filter() {
    let products = sample();
    let opts = FilterOptions {
        category: Some(String::new()),
        source: Some(String::new()),
        search_query: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(filter_products(&products, &opts).len(), products.len());
}

#[test]
fn price_range_is_inclusive_and_drops_unparseable() {
    let products = sample();
    let opts = FilterOptions { price_range: Some((5.5, 25.0)), ..Default::default() };
    assert_eq!(ids(&filter_products(&products, &opts)), ["a", "c"]);
}

#[test]
fn search_hits_name_or_description_case_insensitively() {
    let products = sample();
    let opts = FilterOptions { search_query: Some("LaMp".into()), ..Default::default() };
    assert_eq!(ids(&filter_products(&products, &opts)), ["a", "b"]);
}

#[test]
fn price_sort_reverses_between_orders() {
    let products: Vec<Product> = sample().into_iter().filter(|p| p.numeric_price().is_some()).collect();

    let asc = FilterOptions {
        sort_by: Some(SortBy::Price),
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    };
    let desc = FilterOptions { sort_order: Some(SortOrder::Desc), ..asc.clone() };

    let up = filter_products(&products, &asc);
    let mut down = filter_products(&products, &desc);
    assert_eq!(ids(&up), ["c", "a", "b"]);
    down.reverse();
    assert_eq!(up, down);
}

#[test]
fn sort_defaults_to_descending() {
    let products = sample();
    let opts = FilterOptions { sort_by: Some(SortBy::Date), ..Default::default() };
    // d has no date and sorts as the epoch.
    assert_eq!(ids(&filter_products(&products, &opts)), ["a", "c", "b", "d"]);
}

#[test]
fn name_and_source_sorts_ignore_case() {
    let products = sample();
    let by_name = FilterOptions {
        sort_by: Some(SortBy::Name),
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    };
    assert_eq!(ids(&filter_products(&products, &by_name)), ["c", "a", "d", "b"]);

    let by_source = FilterOptions { sort_by: Some(SortBy::Source), ..by_name };
    // lamps.test twice: stable, stored order kept.
    assert_eq!(ids(&filter_products(&products, &by_source)), ["b", "a", "c", "d"]);
}

#[test]
fn unparseable_prices_sort_below_readable_ones() {
    let products = sample();
    let opts = FilterOptions {
        sort_by: Some(SortBy::Price),
        sort_order: Some(SortOrder::Asc),
        ..Default::default()
    };
    assert_eq!(ids(&filter_products(&products, &opts)), ["d", "c", "a", "b"]);
}

#[test]
fn undated_products_sort_as_epoch_zero_both_ways() {
    let mut x = p("x", "X", "$1", "a.test");
    x.added_at = Some("2026-01-02T10:00:00.000Z".into());
    let m = p("m", "M", "$1", "a.test");
    let mut u = p("u", "U", "$1", "a.test");
    u.added_at = Some("not a date".into());
    let mut y = p("y", "Y", "$1", "a.test");
    y.added_at = Some("2026-01-01T10:00:00.000Z".into());
    let mut pre = p("pre", "Pre", "$1", "a.test");
    pre.added_at = Some("1969-12-31T00:00:00.000Z".into());

    assert_eq!(added_millis(&m), 0);
    assert_eq!(added_millis(&u), 0);

    let products = vec![x, m, u, y, pre];
    let by_date = |order| FilterOptions {
        sort_by: Some(SortBy::Date),
        sort_order: Some(order),
        ..Default::default()
    };

    // Ties between the two undated products keep stored order in both directions.
    let asc = filter_products(&products, &by_date(SortOrder::Asc));
    assert_eq!(ids(&asc), ["pre", "m", "u", "y", "x"]);
    let desc = filter_products(&products, &by_date(SortOrder::Desc));
    assert_eq!(ids(&desc), ["x", "y", "m", "u", "pre"]);
}

#[test]
fn totals_skip_wishlist_and_multiply_quantity() {
    let mut a = p("a", "A", "$10.00", "x.test");
    a.quantity = Some(2);
    let b = p("b", "B", "$5.00", "x.test");
    let mut w = p("w", "W", "$100", "x.test");
    w.in_wishlist = Some(true);
    let junk = p("j", "J", "n/a", "x.test");

    let t = cart_totals(&[a, b, w, junk]);
    assert_eq!(t.cart_count, 3);
    assert_eq!(t.wishlist_count, 1);
    assert_eq!(t.total_price, "25.00");
}

#[test]
fn facets_are_distinct_in_first_seen_order() {
    let products = sample();
    assert_eq!(categories(&products), ["Lighting", "Furniture"]);
    assert_eq!(sources(&products), ["lamps.test", "chairs.test", "misc.test"]);
}

#[test]
fn card_labels() {
    let mut a = p("a", "A", "USD 12.50", "x.test");
    a.quantity = Some(2);
    a.added_at = Some("2026-10-18T09:15:02.123Z".into());
    assert_eq!(line_total(&a), "$25.00");
    assert_eq!(added_label(&a), "Oct 18, 2026");

    let b = p("b", "B", "Call us", "x.test");
    assert_eq!(line_total(&b), "Call us");
    assert_eq!(added_label(&b), "");
}
