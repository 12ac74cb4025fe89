//! Display geometry for windowed and fullscreen presentation.
//!
//! Fullscreen letterboxes: the media is scaled to fit the container while
//! preserving aspect ratio, and the unused axis is centered via a margin.

use serde::{Deserialize, Serialize};

/// Pixel rectangle plus the margins that center it inside a container.
/// Derived per render; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_top: f64,
}

impl DisplayGeometry {
    /// Windowed display: the configured size, no margins.
    pub fn windowed(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_left: 0.0,
            margin_top: 0.0,
        }
    }

    /// Letterboxed fullscreen display.
    ///
    /// Fit to width when the height implied by scaling to the full container
    /// width still fits vertically, centering with a top margin; otherwise
    /// fit to height, centering with a left margin. While the intrinsic
    /// dimensions are unknown (metadata not yet loaded) the media fills the
    /// container.
    pub fn fullscreen(
        intrinsic_width: f64,
        intrinsic_height: f64,
        container_width: f64,
        container_height: f64,
    ) -> Self {
        if intrinsic_width <= 0.0 || intrinsic_height <= 0.0 {
            return Self::windowed(container_width, container_height);
        }

        let width_fit_height = intrinsic_height / intrinsic_width * container_width;
        if width_fit_height <= container_height {
            Self {
                width: container_width,
                height: width_fit_height,
                margin_left: 0.0,
                margin_top: (container_height - width_fit_height) / 2.0,
            }
        } else {
            let height_fit_width = intrinsic_width / intrinsic_height * container_height;
            Self {
                width: height_fit_width,
                height: container_height,
                margin_left: (container_width - height_fit_width) / 2.0,
                margin_top: 0.0,
            }
        }
    }
}
