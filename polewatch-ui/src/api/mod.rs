//! API Client
//!
//! HTTP functions for the pole backend.

pub mod client;

pub use client::*;
