//! Card size and spacing constraints per device, with composable adjustments.
//!
//! Each device class starts from a fixed preset. Adjustments for pixel
//! density, touch input, orientation, and deck size each return a new
//! [`GridConstraints`], so they can be chained in any order. No adjustment
//! ever inverts a `min`/`max` pair; it clamps instead.
//!
//! # Example
//!
//! ```
//! use cardgrid::{Capabilities, DeviceType, GridConstraints, ScreenOrientation};
//!
//! let base = GridConstraints::for_device(DeviceType::Mobile);
//! let tuned = GridConstraints::enhanced(
//!     DeviceType::Mobile,
//!     &Capabilities::new(3.0, false),
//!     ScreenOrientation::Portrait,
//! );
//!
//! // High-density screens get smaller cards to bound rasterization cost.
//! assert!(tuned.min_card_size < base.min_card_size);
//! assert!(tuned.max_card_size < base.max_card_size);
//! ```

use alloc::vec::Vec;

use num_traits::Float;

use crate::orientation::ScreenOrientation;

/// Smallest deck the engine lays out.
pub const MIN_CARD_COUNT: u32 = 1;
/// Largest deck the engine lays out.
pub const MAX_CARD_COUNT: u32 = 100;

/// Pixel ratios strictly above this count as high density.
const HIGH_DENSITY_PIXEL_RATIO: f64 = 2.0;
/// Card size factor on high-density screens.
const HIGH_DENSITY_SCALE: f64 = 0.9;
/// Card size factor for touch input (tap target floor).
const TOUCH_SCALE: f64 = 1.1;
/// Ceiling factor for max card size and max spacing in landscape.
const LANDSCAPE_CEILING_SCALE: f64 = 1.2;
/// Floor factor for min card size in square containers.
const SQUARE_MIN_SCALE: f64 = 1.05;
/// Decks strictly larger than this get the load shrink.
const LARGE_DECK_THRESHOLD: u32 = 24;
/// Card size factor for large decks.
const LARGE_DECK_SCALE: f64 = 0.85;
/// Mobile aspect ratios above this produce a warning.
const MOBILE_WIDE_ASPECT: f64 = 4.0;
/// Mobile aspect ratios below this produce a warning.
const MOBILE_NARROW_ASPECT: f64 = 0.25;
/// Desktop containers narrower than this produce a warning.
const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Coarse device class supplied by the caller's device detection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    /// Parse a device class name (`mobile`/`phone`, `tablet`, `desktop`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("mobile") || value.eq_ignore_ascii_case("phone") {
            Some(Self::Mobile)
        } else if value.eq_ignore_ascii_case("tablet") {
            Some(Self::Tablet)
        } else if value.eq_ignore_ascii_case("desktop") {
            Some(Self::Desktop)
        } else {
            None
        }
    }
}

/// Display capabilities reported alongside the device class.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f64,
    /// Whether the primary input is touch.
    pub touch: bool,
}

impl Capabilities {
    pub const fn new(pixel_ratio: f64, touch: bool) -> Self {
        Self { pixel_ratio, touch }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new(1.0, false)
    }
}

/// Size and spacing bounds for a grid of cards, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConstraints {
    /// Smallest acceptable card width or height.
    pub min_card_size: f64,
    /// Largest card width or height.
    pub max_card_size: f64,
    /// Smallest gap between neighbouring cards.
    pub min_spacing: f64,
    /// Largest gap between neighbouring cards.
    pub max_spacing: f64,
    /// Margin kept free on every side of the container.
    pub padding: f64,
}

impl GridConstraints {
    pub const MOBILE: Self = Self::new(60.0, 120.0, 4.0, 8.0, 8.0);
    pub const TABLET: Self = Self::new(80.0, 160.0, 6.0, 12.0, 16.0);
    pub const DESKTOP: Self = Self::new(100.0, 200.0, 8.0, 16.0, 24.0);

    pub const fn new(
        min_card_size: f64,
        max_card_size: f64,
        min_spacing: f64,
        max_spacing: f64,
        padding: f64,
    ) -> Self {
        Self {
            min_card_size,
            max_card_size,
            min_spacing,
            max_spacing,
            padding,
        }
    }

    /// Base preset for a device class.
    pub const fn for_device(device: DeviceType) -> Self {
        match device {
            DeviceType::Mobile => Self::MOBILE,
            DeviceType::Tablet => Self::TABLET,
            DeviceType::Desktop => Self::DESKTOP,
        }
    }

    /// Device preset with pixel density, touch, and orientation adjustments.
    pub fn enhanced(
        device: DeviceType,
        capabilities: &Capabilities,
        orientation: ScreenOrientation,
    ) -> Self {
        Self::for_device(device)
            .high_density(capabilities.pixel_ratio)
            .touch(capabilities.touch)
            .oriented(orientation)
    }

    /// Device preset shrunk for large decks and high-density screens.
    pub fn for_load(device: DeviceType, card_count: u32, pixel_ratio: f64) -> Self {
        Self::for_device(device).load(card_count, pixel_ratio)
    }

    /// Shrink card sizes when the pixel ratio is above 2.
    pub fn high_density(self, pixel_ratio: f64) -> Self {
        if pixel_ratio > HIGH_DENSITY_PIXEL_RATIO {
            self.scale_card_size(HIGH_DENSITY_SCALE)
        } else {
            self
        }
    }

    /// Grow card sizes for touch input.
    pub fn touch(self, touch: bool) -> Self {
        if touch {
            self.scale_card_size(TOUCH_SCALE)
        } else {
            self
        }
    }

    /// Adjust for the container orientation.
    ///
    /// Landscape raises the card size and spacing ceilings, square nudges the
    /// card size floor up (never past the ceiling), portrait is unchanged.
    pub fn oriented(self, orientation: ScreenOrientation) -> Self {
        match orientation {
            ScreenOrientation::Portrait => self,
            ScreenOrientation::Landscape => Self {
                max_card_size: self.max_card_size * LANDSCAPE_CEILING_SCALE,
                max_spacing: self.max_spacing * LANDSCAPE_CEILING_SCALE,
                ..self
            },
            ScreenOrientation::Square => Self {
                min_card_size: (self.min_card_size * SQUARE_MIN_SCALE).min(self.max_card_size),
                ..self
            },
        }
    }

    /// Bound the rendered pixel area for large decks and dense screens.
    ///
    /// With `card_count <= 24` and `pixel_ratio <= 2` this returns `self`
    /// untouched.
    pub fn load(self, card_count: u32, pixel_ratio: f64) -> Self {
        let mut out = self;
        if card_count > LARGE_DECK_THRESHOLD {
            out = out.scale_card_size(LARGE_DECK_SCALE);
        }
        if pixel_ratio > HIGH_DENSITY_PIXEL_RATIO {
            out = out.scale_card_size(HIGH_DENSITY_SCALE);
        }
        out
    }

    fn scale_card_size(self, factor: f64) -> Self {
        Self {
            min_card_size: self.min_card_size * factor,
            max_card_size: self.max_card_size * factor,
            ..self
        }
    }

    /// Repair inverted or out-of-range values.
    ///
    /// Lower bounds that are negative or non-finite become 0, as does
    /// negative or NaN padding. Infinite padding stays infinite, leaving no
    /// usable area. An upper bound below its lower bound is raised to it.
    pub fn normalized(self) -> Self {
        let min_card_size = finite_or_zero(self.min_card_size).max(0.0);
        let min_spacing = finite_or_zero(self.min_spacing).max(0.0);
        Self {
            min_card_size,
            max_card_size: self.max_card_size.max(min_card_size),
            min_spacing,
            max_spacing: self.max_spacing.max(min_spacing),
            padding: if self.padding.is_nan() { 0.0 } else { self.padding.max(0.0) },
        }
    }

    /// Whether every pair is ordered and every value non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.min_card_size >= 0.0
            && self.max_card_size >= self.min_card_size
            && self.min_spacing >= 0.0
            && self.max_spacing >= self.min_spacing
            && self.padding >= 0.0
    }

    /// Most cards a `width × height` container holds at minimum card size
    /// and minimum spacing.
    pub fn capacity(&self, width: f64, height: f64) -> u32 {
        let c = self.normalized();
        c.tracks_along(width).saturating_mul(c.tracks_along(height))
    }

    /// Cards that fit along one axis at minimum footprint.
    fn tracks_along(&self, extent: f64) -> u32 {
        let usable = extent - 2.0 * self.padding;
        if !(usable > 0.0) || !(usable >= self.min_card_size) {
            return 0;
        }
        let footprint = self.min_card_size + self.min_spacing;
        if !(footprint > 0.0) {
            return MAX_CARD_COUNT;
        }
        // Float-to-int casts saturate.
        Float::floor((usable + self.min_spacing) / footprint) as u32
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Reasons a device configuration cannot be laid out.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "invalid container dimensions {width}x{height}: width and height must be positive and finite"
    )]
    InvalidDimensions { width: f64, height: f64 },
    #[error("card count {count} is outside the supported range 1..=100")]
    CardCountOutOfRange { count: u32 },
    #[error(
        "cannot fit {requested} cards in the container: room for {capacity} at minimum card size"
    )]
    CannotFit { requested: u32, capacity: u32 },
}

/// Usability concerns that do not prevent a layout.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("very wide aspect ratio ({aspect_ratio:.2}) for a mobile device")]
    VeryWideAspectRatio { aspect_ratio: f64 },
    #[error("very narrow aspect ratio ({aspect_ratio:.2}) for a mobile device")]
    VeryNarrowAspectRatio { aspect_ratio: f64 },
    #[error("small container width for desktop ({width}px, recommended at least 768px)")]
    SmallDesktopWidth { width: f64 },
}

/// Outcome of [`validate_device_config`].
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceValidation {
    /// True when `errors` is empty.
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<ConfigWarning>,
    /// `card_count` when valid; otherwise the largest even count that fits,
    /// or 0 when nothing does.
    pub recommended_card_count: u32,
}

/// Check a device/container/deck combination before computing a layout.
///
/// Uses the device's base preset to decide whether `card_count` cards fit.
/// Never fails; problems are reported in the returned value.
pub fn validate_device_config(
    device: DeviceType,
    width: f64,
    height: f64,
    card_count: u32,
) -> DeviceValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let dims_ok = width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite();
    if !dims_ok {
        errors.push(ConfigError::InvalidDimensions { width, height });
    }
    if !(MIN_CARD_COUNT..=MAX_CARD_COUNT).contains(&card_count) {
        errors.push(ConfigError::CardCountOutOfRange { count: card_count });
    }

    let capacity = if dims_ok {
        GridConstraints::for_device(device).capacity(width, height)
    } else {
        0
    };
    if dims_ok && card_count >= MIN_CARD_COUNT && card_count > capacity {
        errors.push(ConfigError::CannotFit {
            requested: card_count,
            capacity,
        });
    }

    if dims_ok {
        let aspect_ratio = width / height;
        match device {
            DeviceType::Mobile if aspect_ratio > MOBILE_WIDE_ASPECT => {
                warnings.push(ConfigWarning::VeryWideAspectRatio { aspect_ratio });
            }
            DeviceType::Mobile if aspect_ratio < MOBILE_NARROW_ASPECT => {
                warnings.push(ConfigWarning::VeryNarrowAspectRatio { aspect_ratio });
            }
            DeviceType::Desktop if width < DESKTOP_MIN_WIDTH => {
                warnings.push(ConfigWarning::SmallDesktopWidth { width });
            }
            _ => {}
        }
    }

    let recommended_card_count = if errors.is_empty() {
        card_count
    } else {
        let limit = card_count.min(capacity).min(MAX_CARD_COUNT);
        limit - limit % 2
    };

    if !errors.is_empty() {
        log::debug!(
            "device config {device:?} {width}x{height} with {card_count} cards rejected: {} error(s)",
            errors.len()
        );
    }

    DeviceValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        recommended_card_count,
    }
}
