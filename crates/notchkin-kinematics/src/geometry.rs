//! Cross-section geometry of the notched tube.
//!
//! A notch removes a circular segment from the outer wall and a smaller one
//! from the lumen. The bending neutral axis sits at the area-weighted
//! centroid of the remaining material; its offset `y` from the tube axis is
//! the only geometric constant the notch solver needs.

use notchkin_core::error::{GeometryError, Surface};
use notchkin_core::types::GeometryParameters;
use tracing::debug;

/// Below this, a cut or the difference of two cuts counts as zero area.
pub const AREA_TOLERANCE: f64 = 1e-12;

/// Circular segment removed from one wall surface by the notch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularCut {
    /// Radius of the surface being cut.
    pub radius: f64,
    /// Angle subtended by the cut at the tube axis (rad).
    pub angle: f64,
    /// Area of the removed segment.
    pub area: f64,
    /// Distance of the segment centroid from the tube axis.
    pub centroid: f64,
}

impl CircularCut {
    /// Segment of a circle of `radius` cut by a chord `offset` away from
    /// the centre.
    ///
    /// A chord that only touches the circle removes nothing; the centroid
    /// takes its limit, the touching point at `radius`.
    fn new(surface: Surface, radius: f64, offset: f64) -> Result<Self, GeometryError> {
        let argument = offset / radius;
        if !(-1.0..=1.0).contains(&argument) {
            return Err(GeometryError::CutOutOfRange { surface, argument });
        }

        let angle = 2.0 * argument.acos();
        let sweep = angle - angle.sin();
        if sweep.abs() < AREA_TOLERANCE {
            return Ok(Self {
                radius,
                angle,
                area: 0.0,
                centroid: radius,
            });
        }

        let area = radius * radius * sweep / 2.0;
        let centroid = 4.0 * radius * (angle / 2.0).sin().powi(3) / (3.0 * sweep);
        Ok(Self {
            radius,
            angle,
            area,
            centroid,
        })
    }
}

/// Geometry constants derived once per segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryModel {
    params: GeometryParameters,
    outer: CircularCut,
    inner: CircularCut,
    neutral_axis: f64,
}

impl GeometryModel {
    /// Validate `params` and derive the neutral-axis offset.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] for invalid radii or lengths, a cut depth
    /// whose acos argument leaves `[-1, 1]`, or outer and inner cuts of
    /// equal area.
    pub fn derive(params: GeometryParameters) -> Result<Self, GeometryError> {
        params.validate()?;

        let offset = params.g - params.rout;
        let outer = CircularCut::new(Surface::Outer, params.rout, offset)?;
        let inner = CircularCut::new(Surface::Inner, params.rin, offset)?;

        let net_area = outer.area - inner.area;
        if net_area.abs() < AREA_TOLERANCE {
            return Err(GeometryError::DegenerateArea {
                outer: outer.area,
                inner: inner.area,
            });
        }
        let neutral_axis = (outer.centroid * outer.area - inner.centroid * inner.area) / net_area;

        debug!(
            phi_out = outer.angle,
            phi_in = inner.angle,
            a_out = outer.area,
            a_in = inner.area,
            y = neutral_axis,
            "derived notch cross-section"
        );

        Ok(Self {
            params,
            outer,
            inner,
            neutral_axis,
        })
    }

    /// Geometry this model was derived from.
    #[must_use]
    pub const fn params(&self) -> &GeometryParameters {
        &self.params
    }

    /// Cut through the outer wall.
    #[must_use]
    pub const fn outer_cut(&self) -> &CircularCut {
        &self.outer
    }

    /// Cut through the lumen.
    #[must_use]
    pub const fn inner_cut(&self) -> &CircularCut {
        &self.inner
    }

    /// Neutral-axis offset `y` from the tube axis (mm).
    #[must_use]
    pub const fn neutral_axis_offset(&self) -> f64 {
        self.neutral_axis
    }
}
