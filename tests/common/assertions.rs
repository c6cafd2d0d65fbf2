//! Domain-specific assertion macros for pressroom harnesses.
//!
//! These add context-rich failure messages that make it clear which dispatch
//! invariant was violated.

/// Assert that a compile/execute result failed with `ChannelNotAvailable`
/// naming the expected channel.
///
/// ```rust
/// assert_not_available!(printer.compile_print(p, &[stray]), "stray");
/// ```
#[macro_export]
macro_rules! assert_not_available {
    ($result:expr, $name:expr) => {{
        match $result {
            Err(pressroom::Error::ChannelNotAvailable { channel }) => {
                assert_eq!(
                    channel.name(),
                    $name,
                    "assert_not_available! failed: wrong channel reported"
                );
            }
            Err(other) => panic!(
                "assert_not_available! failed: expected ChannelNotAvailable, got {:?}",
                other
            ),
            Ok(print) => panic!(
                "assert_not_available! failed: print compiled for {:?}",
                print.channel_names()
            ),
        }
    }};
}

/// Assert the exact, ordered channel list of a print.
///
/// ```rust
/// assert_targets!(print, ["pressroom.console"]);
/// ```
#[macro_export]
macro_rules! assert_targets {
    ($print:expr, [$($name:expr),* $(,)?]) => {{
        let print: &pressroom::Print = &$print;
        let expected: Vec<&str> = vec![$($name),*];
        let actual = print.channel_names();
        if actual != expected {
            panic!(
                "assert_targets! failed:\n  expected: {:?}\n  actual:   {:?}\n  tag: {:?}",
                expected,
                actual,
                print.printable().tag()
            );
        }
    }};
}
