// src/macros.rs
//
// Owned-string helpers used for labels, status lines and log text.

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

/// Concatenate two or more string-ish pieces (`&str`, `String`, `&String`)
/// into one new `String`, left to right.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $(
            out.push_str(::core::convert::AsRef::<str>::as_ref(&$tail));
        )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn s_builds_owned_labels() {
        let empty: String = s!();
        assert!(empty.is_empty());
        assert_eq!(s!("Saved for later"), "Saved for later");
    }

    #[test]
    fn join_accepts_borrowed_and_owned_pieces() {
        let date = s!("Jan 3, 2026");
        assert_eq!(join!("Added ", &date), "Added Jan 3, 2026");
        assert_eq!(join!("UniCart", " (", 3.to_string(), ")"), "UniCart (3)");
    }
}
