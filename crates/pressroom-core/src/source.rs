//! Call-site attribution for [`Printable`](crate::Printable) values.
//!
//! A [`Source`] names the code that produced a message: the enclosing
//! module or type (`class`), the function (`method`), and the file and line
//! of the call. It is captured at the call boundary by the [`source!`]
//! macro, so attribution never depends on walking the runtime stack.
//!
//! ```rust
//! use pressroom_core::source;
//!
//! fn handle_request() -> pressroom_core::Source {
//!     source!()
//! }
//!
//! let src = handle_request();
//! assert_eq!(src.method(), "handle_request");
//! ```

use std::fmt;

/// Name of the marker function the [`source!`] macro declares at the call
/// site. Its type name carries the full path of the enclosing function.
#[doc(hidden)]
pub const MARKER: &str = "__pressroom_here";

const CLOSURE: &str = "{{closure}}";

/// The call site a message was emitted from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    class: String,
    method: String,
    file: String,
    line: u32,
}

impl Source {
    pub fn new(
        class: impl Into<String>,
        method: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            class: class.into(),
            method: method.into(),
            file: file.into(),
            line,
        }
    }

    /// Build a source from the type name of a function item, as produced by
    /// [`std::any::type_name`].
    ///
    /// The last path segment becomes the method and everything before it the
    /// class. Trailing `{{closure}}` segments and the [`source!`] marker are
    /// dropped first, so a call made inside a closure is attributed to the
    /// function that defines the closure.
    pub fn from_function_path(path: &str, file: &str, line: u32) -> Self {
        let mut path = path.strip_suffix(MARKER).unwrap_or(path);
        path = path.strip_suffix("::").unwrap_or(path);
        while let Some(outer) = path.strip_suffix(CLOSURE) {
            path = outer.strip_suffix("::").unwrap_or(outer);
        }

        let (class, method) = match split_last_segment(path) {
            Some((class, method)) => (class, method),
            None => ("", path),
        };

        Self::new(class, method, file, line)
    }

    /// Module path, or impl type for methods.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} ({}:{})",
            self.class, self.method, self.file, self.line
        )
    }
}

/// Split `path` at its last `::` that is not nested inside `<...>`, so that
/// `<app::Job as core::fmt::Display>::fmt` splits before `fmt`.
fn split_last_segment(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut i = bytes.len();

    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'>' => depth += 1,
            b'<' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && i > 0 && bytes[i - 1] == b':' => {
                return Some((&path[..i - 1], &path[i + 1..]));
            }
            _ => {}
        }
    }

    None
}

/// Capture the [`Source`] of the place this macro is expanded in.
///
/// The class is the module path (or the impl type when expanded inside a
/// method), the method is the enclosing function, and file and line come
/// from [`file!`] and [`line!`].
#[macro_export]
macro_rules! source {
    () => {{
        fn __pressroom_here() {}
        fn __pressroom_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::Source::from_function_path(
            __pressroom_type_name_of(__pressroom_here),
            file!(),
            line!(),
        )
    }};
}
