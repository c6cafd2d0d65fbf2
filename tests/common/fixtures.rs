//! Static configuration documents and content corpora used across harnesses.

/// Console debug on, no log sinks.
pub const CONFIG_DEBUG_ONLY: &str = r#"
[console]
debug = true
"#;

/// A TOML document with an unterminated table header.
pub const CONFIG_MALFORMED: &str = "[console\ndebug = true\n";

/// Build a configuration with an errors-only sink and a catch-all sink under
/// `dir`.
pub fn config_two_sinks(dir: &std::path::Path) -> String {
    let errors = dir.join("errors.log");
    let all = dir.join("all").join("%Y.log");
    format!(
        r#"
[console]
debug = false

[[log]]
location = {errors:?}
tag = "error"

[[log]]
location = {all:?}
"#,
        errors = errors.to_string_lossy(),
        all = all.to_string_lossy(),
    )
}

/// Message bodies exercising line splitting and escaping.
pub const CONTENT_CORPUS: &[&str] = &[
    "",
    "single line",
    "two\nlines",
    "windows\r\nline endings",
    "trailing newline\n",
    "quoted \"value\" inside",
    "mixed \"q\"\r\n\n\r",
];
