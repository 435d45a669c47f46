//! The render protocol every node obeys.
//!
//! Nodes write themselves into any [`fmt::Write`] sink through [`ToCss`].
//! [`render`] bridges that to an [`io::Write`] destination and reports the
//! first failed write; bytes that reached the sink before the failure stay
//! there.

use std::fmt::{self, Write};
use std::io;

use log::{trace, warn};

use crate::error::{Error, Result};

/// Anything that can serialize itself as a CSS fragment.
pub trait ToCss {
    /// Write this node as CSS to `dest`, stopping at the first failed write.
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result;

    /// Convert to a CSS string (convenience method).
    ///
    /// A `to_css` that fails part way leaves the output truncated at that
    /// point; use [`render`] to observe the error.
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        // Writing into a String cannot fail.
        let _ = self.to_css(&mut buf);
        buf
    }
}

impl<T: ToCss + ?Sized> ToCss for &T {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        (**self).to_css(dest)
    }
}

impl<T: ToCss + ?Sized> ToCss for Box<T> {
    fn to_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        (**self).to_css(dest)
    }
}

/// Implement `Display` for node types by delegating to `ToCss`.
macro_rules! display_via_to_css {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::render::ToCss::to_css(self, f)
                }
            }
        )+
    };
}

pub(crate) use display_via_to_css;

/// Render `node` into an I/O sink.
///
/// Returns [`Error::Io`] carrying the sink's own error when a write fails.
pub fn render<N, W>(node: &N, writer: &mut W) -> Result<()>
where
    N: ToCss + ?Sized,
    W: io::Write + ?Sized,
{
    let mut sink = IoSink::new(writer);
    match node.to_css(&mut sink) {
        Ok(()) => {
            trace!(
                "rendered {} ({} bytes)",
                std::any::type_name::<N>(),
                sink.written
            );
            Ok(())
        }
        Err(fmt_err) => {
            let err = sink.error.take().map_or(Error::Fmt(fmt_err), Error::Io);
            warn!(
                "rendering {} failed after {} bytes: {}",
                std::any::type_name::<N>(),
                sink.written,
                err
            );
            Err(err)
        }
    }
}

/// Render `node` into a freshly allocated string.
pub fn render_to_string<N: ToCss + ?Sized>(node: &N) -> String {
    let css = node.to_css_string();
    trace!("rendered {} ({} bytes)", std::any::type_name::<N>(), css.len());
    css
}

/// Adapts an `io::Write` to `fmt::Write`, keeping the first I/O error.
struct IoSink<'a, W: io::Write + ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
    written: usize,
}

impl<'a, W: io::Write + ?Sized> IoSink<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            error: None,
            written: 0,
        }
    }
}

impl<W: io::Write + ?Sized> Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => {
                self.written += s.len();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e);
                Err(fmt::Error)
            }
        }
    }
}

/// Write `value` with the shortest decimal form that round-trips.
///
/// Never uses exponent notation and never emits a trailing `.0`. Negative
/// zero and non-finite values are written as `0`.
pub(crate) fn write_number<W: Write>(dest: &mut W, value: f64) -> fmt::Result {
    if !value.is_finite() || value == 0.0 {
        return dest.write_char('0');
    }
    write!(dest, "{}", value)
}
