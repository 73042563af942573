//! Error types for postdash.
//!
//! The fetch layer has exactly one error kind, [`FetchError`]. It carries a
//! human-readable message and propagates to the view that issued the fetch,
//! which turns it into a terminal `Failed` state. Binary-level failures
//! (terminal setup, runtime) are reported through `color_eyre`.

mod fetch;

pub use fetch::FetchError;

/// Result alias for fetch-layer operations.
pub type FetchResult<T> = Result<T, FetchError>;
