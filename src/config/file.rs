// src/config/file.rs
//
// `key=value` settings file. `#` starts a comment line, unknown keys are
// ignored and a value that doesn't parse leaves the default in place.
//
//   store_dir=.store
//   store_file=storage.json
//   sort_by=date
//   sort_order=desc
//   default_tab=cart
//   reset_delay_ms=2000

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::options::AppOptions;

pub fn load(path: &Path) -> AppOptions {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => AppOptions::default(),
        Err(e) => {
            loge!("Config: Couldn't read {}: {}", path.display(), e);
            AppOptions::default()
        }
    }
}

pub fn parse(text: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, val)) = line.split_once('=') else { continue };
        let (key, val) = (key.trim(), val.trim());
        match key {
            "store_dir" if !val.is_empty() => opts.store.dir = PathBuf::from(val),
            "store_file" if !val.is_empty() => opts.store.file = val.to_string(),
            "sort_by" => set_parsed(&mut opts.view.sort_by, key, val),
            "sort_order" => set_parsed(&mut opts.view.sort_order, key, val),
            "default_tab" => set_parsed(&mut opts.view.default_tab, key, val),
            "reset_delay_ms" => set_parsed(&mut opts.button.reset_delay_ms, key, val),
            _ => {}
        }
    }
    opts
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, key: &str, val: &str) {
    match val.parse() {
        Ok(v) => *slot = v,
        Err(_) => logd!("Config: Ignoring {}={}", key, val),
    }
}

pub fn render(opts: &AppOptions) -> String {
    let mut s = String::new();
    s.push_str(&format!("store_dir={}\n", opts.store.dir.display()));
    s.push_str(&format!("store_file={}\n", opts.store.file));
    s.push_str(&format!("sort_by={}\n", opts.view.sort_by));
    s.push_str(&format!("sort_order={}\n", opts.view.sort_order));
    s.push_str(&format!("default_tab={}\n", opts.view.default_tab.as_str()));
    s.push_str(&format!("reset_delay_ms={}\n", opts.button.reset_delay_ms));
    s
}

pub fn save(path: &Path, opts: &AppOptions) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(opts))
}
