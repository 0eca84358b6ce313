//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod kpi_card;
pub mod nav;
pub mod toast;

pub use kpi_card::KpiCard;
pub use nav::Nav;
pub use toast::Toast;
