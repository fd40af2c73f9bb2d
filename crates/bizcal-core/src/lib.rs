//! # bizcal-core
//!
//! Core types, error definitions, clock and settings for bizcal.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error hierarchy, the injectable reference [`Clock`] and the
//! [`CalendarSettings`] policy value.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Injectable reference clock (`Clock`, `SystemClock`, `FixedClock`).
pub mod clock;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Calendar policy settings.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for business-day counts that include half days.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, Result};
pub use settings::CalendarSettings;
