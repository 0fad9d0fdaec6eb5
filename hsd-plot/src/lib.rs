//! Chart specifications for the health survey dashboard.
//!
//! This crate turns typed survey payloads into Plotly-shaped trace and
//! layout structures. Everything here is pure: the same payload always
//! yields the same [`spec::ChartSpec`], and nothing touches the DOM.

pub mod projection;
pub mod spec;

pub use spec::ChartSpec;
