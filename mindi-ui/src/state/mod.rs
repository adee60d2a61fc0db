//! State Management
//!
//! The dashboard controller behind a signal, and the effect runner.

pub mod global;

pub use global::{provide_dashboard_state, DashboardState, Toast};
