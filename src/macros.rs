// src/macros.rs

/// `String` shorthand: `s!()` is an empty string, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-ish pieces into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `<li>…</li>` from any number of string pieces.
#[macro_export]
macro_rules! li {
    ($($part:expr),+ $(,)?) => {
        $crate::join!("<li>", $($part,)+ "</li>")
    };
}
