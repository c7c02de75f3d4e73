//! Shared Dioxus components and D3.js bridge for the employability dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `theme`: static style tokens (chart palette, badge colors, glyphs)
//! - `components`: reusable RSX components (cards, badges, chart containers)

pub mod components;
pub mod js_bridge;
pub mod theme;
