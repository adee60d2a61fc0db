//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod fragment;
pub mod loading;
pub mod sidebar;
pub mod toast;

pub use chart::ChartCanvas;
pub use fragment::HtmlFragment;
pub use loading::BusyButton;
pub use sidebar::Sidebar;
pub use toast::Toast;
