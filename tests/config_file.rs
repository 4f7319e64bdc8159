// tests/config_file.rs
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use universal_cart::config::file;
use universal_cart::config::options::AppOptions;
use universal_cart::config::state::AppState;
use universal_cart::model::{CartTab, SortBy, SortOrder};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("unicart_cfg_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tmp_dir("missing");
    let opts = file::load(&dir.join("config.txt"));
    assert_eq!(opts, AppOptions::default());
    assert_eq!(opts.store.store_path(), PathBuf::from(".store").join("storage.json"));
    assert_eq!(opts.button.reset_delay(), Duration::from_millis(2_000));
}

#[test]
fn parse_ignores_comments_unknown_keys_and_bad_values() {
    let text = "\
# popup settings
sort_by = price
sort_order=asc
default_tab=wishlist
reset_delay_ms=not-a-number
colour=teal
store_file=cart.json
";
    let opts = file::parse(text);
    assert_eq!(opts.view.sort_by, SortBy::Price);
    assert_eq!(opts.view.sort_order, SortOrder::Asc);
    assert_eq!(opts.view.default_tab, CartTab::Wishlist);
    assert_eq!(opts.button.reset_delay_ms, 2_000);
    assert_eq!(opts.store.file, "cart.json");
}

#[test]
fn save_then_load_matches() {
    let dir = tmp_dir("save");
    let path = dir.join("nested").join("config.txt");

    let mut opts = AppOptions::default();
    opts.view.sort_by = SortBy::Name;
    opts.view.default_tab = CartTab::Wishlist;
    opts.button.reset_delay_ms = 500;
    opts.store.dir = dir.clone();

    file::save(&path, &opts).unwrap();
    assert_eq!(file::load(&path), opts);
}

#[test]
fn app_state_starts_from_view_options() {
    let mut opts = AppOptions::default();
    opts.view.sort_by = SortBy::Source;
    opts.view.default_tab = CartTab::Wishlist;

    let state = AppState::new(opts);
    assert_eq!(state.gui.active_tab, CartTab::Wishlist);
    assert_eq!(state.gui.filters.sort_by, Some(SortBy::Source));
    assert_eq!(state.gui.filters.sort_order, Some(SortOrder::Desc));
    assert_eq!(state.gui.query().show_wishlist, Some(true));
}

#[test]
fn remembered_view_round_trips_through_the_file() {
    let dir = tmp_dir("remember");
    let path = dir.join("config.txt");

    let mut state = AppState::new(AppOptions::default());
    assert!(!state.remember_view());

    state.gui.active_tab = CartTab::Wishlist;
    state.gui.filters.sort_by = Some(SortBy::Price);
    state.gui.filters.sort_order = Some(SortOrder::Asc);
    assert!(state.remember_view());
    assert!(!state.remember_view());
    file::save(&path, &state.options).unwrap();

    let reopened = AppState::new(file::load(&path));
    assert_eq!(reopened.gui.active_tab, CartTab::Wishlist);
    assert_eq!(reopened.gui.filters.sort_by, Some(SortBy::Price));
    assert_eq!(reopened.gui.filters.sort_order, Some(SortOrder::Asc));
}
