//! Common utilities for the Plinth style-value tools.
//!
//! - **Warning System** - colored, deduplicated diagnostics for values the
//!   resolver rejected

pub mod warning;
