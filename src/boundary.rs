use std::sync::atomic::{AtomicBool, Ordering};

pub const FALLBACK_ICON: &str = "⚠️";
pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_BODY: &str =
    "We encountered an unexpected error. Don't worry, your progress is safe.";
pub const RELOAD_LABEL: &str = "Reload Page";
pub const DETAILS_SUMMARY: &str = "Error Details";

/// Trips once; later crashes on the same page must not re-render the fallback.
pub struct CrashLatch(AtomicBool);

impl CrashLatch {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn trip(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

pub fn crash_detail(message: &str, location: Option<(&str, u32, u32)>) -> String {
    match location {
        Some((file, line, column)) => format!("{message}\n    at {file}:{line}:{column}"),
        None => message.to_string(),
    }
}
