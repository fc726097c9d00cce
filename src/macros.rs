#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a browser [`Rule`](crate::Rule).
///
/// ```text
/// browser_rule! {
///     regex: r"Chrome(?:/(\d+[\.\d]+))?",
///     name: "Chrome",
///     version: "$1",
///     engine: "WebKit",
///     versions: { "28" => "Blink" },
/// }
/// ```
#[macro_export]
macro_rules! browser_rule {
    (
        regex: $pat:expr,
        name: $name:expr,
        version: $version:expr
        $(,)?
    ) => {
        $crate::Rule::new($pat, $name, $version)
    };
    (
        regex: $pat:expr,
        name: $name:expr,
        version: $version:expr,
        engine: $default:expr
        $(, versions: { $($threshold:expr => $engine:expr),* $(,)? })?
        $(,)?
    ) => {
        $crate::Rule::new($pat, $name, $version)
            .with_engine($crate::EngineSpec::new($default) $($(.with_version($threshold, $engine))*)?)
    };
}

/// Build a rendering-engine [`EngineRule`](crate::EngineRule).
#[macro_export]
macro_rules! engine_rule {
    (regex: $pat:expr, name: $name:expr $(,)?) => {
        $crate::EngineRule::new($pat, $name)
    };
}
