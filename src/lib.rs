//! Card-grid layout computation for memory-matching games.
//!
//! Pure geometry. Given a container size, a card count, and the device it
//! runs on, picks the `cols × rows` grid that fills the container best and
//! places every card. `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`constraint`] — Device presets, capability and orientation adjustments, config validation
//! - [`orientation`] — Portrait/landscape/square classification and grid-shape bias
//! - [`grid`] — Candidate search, card sizing and positioning, layout validation
//! - [`transition`] — Layout comparison and animation timing between two layouts
//! - [`plan`] — Stateful recompute driver and resize debouncing
//! - [`render`] — Renderer boundary
//! - `svg` (feature `svg`) — SVG visualization of a layout
//! - `query` (feature `query`) — Layout configuration from `key=value` strings

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod constraint;
pub mod grid;
pub mod orientation;
pub mod plan;
pub mod render;
pub mod transition;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: device constraints and validation
pub use constraint::{
    Capabilities, ConfigError, ConfigWarning, DeviceType, DeviceValidation, GridConstraints,
    MAX_CARD_COUNT, MIN_CARD_COUNT, validate_device_config,
};
pub use grid::{
    CardPosition, CardSize, Extent, GridLayout, LayoutConfig, LayoutMetadata, LayoutReport,
    LayoutViolation, LayoutWarning, Spacing, calculate_layout, validate_layout,
};
pub use orientation::{DeviceOrientation, OrientationBias, ScreenOrientation};
pub use plan::{LayoutPlanner, LayoutUpdate, ResizeDebounce};
pub use render::{GridRenderer, render};
pub use transition::{Easing, LayoutComparison, TransitionPlan, compare, plan_transition};
