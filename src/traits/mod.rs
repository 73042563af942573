//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations used by the data fetcher

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
