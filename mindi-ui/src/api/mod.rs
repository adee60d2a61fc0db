//! API Layer
//!
//! Browser implementation of the dashboard API.

pub mod client;

pub use client::HttpApi;
