//! Log recording boundary contract.

use std::fmt;
use std::sync::Arc;

/// Capability handed to logging call sites.
///
/// Production code receives a recorder that echoes (or drops) each call;
/// tests receive a capturing one. Call sites go through [`record_log!`] so the
/// format literal and its interpolation come from one expansion.
///
/// [`record_log!`]: crate::record_log
pub trait LogRecorder: Send + Sync {
    /// Record one logging call: the template and its interpolated arguments.
    fn record(&self, format: &str, args: fmt::Arguments<'_>);
}

/// Shared, type-erased recorder.
pub type SharedRecorder = Arc<dyn LogRecorder>;

impl<T: LogRecorder + ?Sized> LogRecorder for &T {
    fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        (**self).record(format, args);
    }
}

impl<T: LogRecorder + ?Sized> LogRecorder for Box<T> {
    fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        (**self).record(format, args);
    }
}

impl<T: LogRecorder + ?Sized> LogRecorder for Arc<T> {
    fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        (**self).record(format, args);
    }
}

/// Record a logging call through a [`LogRecorder`].
///
/// ```
/// use log_catcher_ports::{LogRecorder, record_log};
/// use std::fmt;
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Lines(Mutex<Vec<(String, String)>>);
///
/// impl LogRecorder for Lines {
///     fn record(&self, format: &str, args: fmt::Arguments<'_>) {
///         if let Ok(mut lines) = self.0.lock() {
///             lines.push((format.to_owned(), args.to_string()));
///         }
///     }
/// }
///
/// let lines = Lines::default();
/// record_log!(lines, "Hello {}", "World");
/// ```
#[macro_export]
macro_rules! record_log {
    ($recorder:expr, $format:literal $(,)?) => {
        $crate::LogRecorder::record(&$recorder, $format, ::core::format_args!($format))
    };
    ($recorder:expr, $format:literal, $($arg:tt)+) => {
        $crate::LogRecorder::record(
            &$recorder,
            $format,
            ::core::format_args!($format, $($arg)+),
        )
    };
}
