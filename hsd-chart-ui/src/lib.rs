//! Browser side of the health survey dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Plotly.js helpers via `js_sys::eval()`
//! - `fetch`: a `window.fetch()`-backed `Fetcher`
//! - `renderer`: the Plotly `Renderer` the loaders draw through
//! - `state`: Reactive per-chart load status with Dioxus Signals
//! - `components`: Reusable RSX components (chart panels, banners, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod renderer;
pub mod state;
