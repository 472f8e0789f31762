//! Resolver warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet that repeats the same bad value
//! hundreds of times produces one line of output, not hundreds.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format a warning the way [`warn_once`] prints it, without color.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[Plinth {component}] ⚠ {message}")
}

/// Record a warning key. Returns `true` the first time a key is seen.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let is_new = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);
    is_new
}

/// Warn about a rejected value (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Length", "unsupported unit 'pt' in '12pt'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{YELLOW}{}{RESET}", format_warning(component, message));
    }
}

/// Clear all recorded warnings (call between independent inputs)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
