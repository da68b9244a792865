//! Parsed configuration and its resolution into a [`LayoutConfig`].

use crate::constraint::{Capabilities, DeviceType, GridConstraints};
use crate::grid::LayoutConfig;
use crate::orientation::{DeviceOrientation, ScreenOrientation};

/// Parsed configuration string.
///
/// Produced by [`crate::query::parse()`], consumed by
/// [`to_config()`](Self::to_config).
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct LayoutRequest {
    /// Container width (`w`, `width`).
    pub width: Option<f64>,
    /// Container height (`h`, `height`).
    pub height: Option<f64>,
    /// Number of cards (`cards`, `count`).
    pub cards: Option<u32>,
    /// Device class (`device`). Desktop when absent.
    pub device: Option<DeviceType>,
    /// Reported device orientation (`orientation`).
    pub orientation: Option<DeviceOrientation>,
    /// Device pixel ratio (`dpr`, `zoom`). 1 when absent.
    pub pixel_ratio: Option<f64>,
    /// Touch input (`touch`).
    pub touch: Option<bool>,
    /// Apply the large-deck/high-density shrink (`optimize`).
    pub optimize: Option<bool>,
}

/// Request lacks something the layout engine needs.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("container width missing (w=)")]
    MissingWidth,
    #[error("container height missing (h=)")]
    MissingHeight,
    #[error("card count missing (cards=)")]
    MissingCardCount,
}

impl LayoutRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::new(
            self.pixel_ratio.unwrap_or(1.0),
            self.touch.unwrap_or(false),
        )
    }

    /// Build the engine input.
    ///
    /// Constraints come from [`GridConstraints::enhanced`] for the device,
    /// capabilities, and container orientation; `optimize` additionally
    /// applies [`GridConstraints::load`].
    pub fn to_config(&self) -> Result<LayoutConfig, RequestError> {
        let width = self.width.ok_or(RequestError::MissingWidth)?;
        let height = self.height.ok_or(RequestError::MissingHeight)?;
        let cards = self.cards.ok_or(RequestError::MissingCardCount)?;
        let device = self.device.unwrap_or(DeviceType::Desktop);
        let capabilities = self.capabilities();

        let orientation = ScreenOrientation::from_dimensions(width, height, self.orientation);
        let mut constraints = GridConstraints::enhanced(device, &capabilities, orientation);
        if self.optimize.unwrap_or(false) {
            constraints = constraints.load(cards, capabilities.pixel_ratio);
        }

        let mut config = LayoutConfig::new(width, height, cards, device).constraints(constraints);
        if let Some(o) = self.orientation {
            config = config.device_orientation(o);
        }
        Ok(config)
    }
}
