//! Cell spacing for finite-difference stencils.

use std::fmt;

use crate::error::{FieldError, Result};
use crate::types::Shape2D;

/// Physical distance between neighbouring cell centres along each axis.
///
/// Both spacings are strictly positive and finite; a `Spacing2D` that
/// exists is always safe to divide by.
///
/// # Example
///
/// ```
/// use gridfield::types::{Shape2D, Spacing2D};
///
/// // Grid spanning [0, 1] on both axes
/// let h = Spacing2D::unit_domain(Shape2D::new(40, 20));
/// assert_eq!(h.hx(), 1.0 / 40.0);
/// assert_eq!(h.hy(), 1.0 / 20.0);
///
/// // Square collapse: one spacing for both axes
/// let h = Spacing2D::uniform(0.5);
/// assert_eq!(h.hx(), h.hy());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spacing2D {
    hx: f32,
    hy: f32,
}

impl Spacing2D {
    /// Create a spacing with independent x and y steps.
    ///
    /// # Panics
    ///
    /// Panics if either step is zero, negative, or not finite.
    pub fn new(hx: f32, hy: f32) -> Self {
        match Self::try_new(hx, hy) {
            Ok(spacing) => spacing,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a spacing, reporting non-positive or non-finite steps.
    pub fn try_new(hx: f32, hy: f32) -> Result<Self> {
        let valid = |h: f32| h.is_finite() && h > 0.0;
        if !valid(hx) || !valid(hy) {
            return Err(FieldError::InvalidSpacing { hx, hy });
        }
        Ok(Self { hx, hy })
    }

    /// Same step on both axes.
    pub fn uniform(h: f32) -> Self {
        Self::new(h, h)
    }

    /// Unit step on both axes (spacing measured in cells).
    pub fn unit() -> Self {
        Self { hx: 1.0, hy: 1.0 }
    }

    /// Spacing of a grid that spans `[0, 1]` on each axis: `(1/nx, 1/ny)`.
    pub fn unit_domain(shape: Shape2D) -> Self {
        Self::new(1.0 / shape.nx() as f32, 1.0 / shape.ny() as f32)
    }

    /// Step in x-direction.
    #[inline]
    pub fn hx(&self) -> f32 {
        self.hx
    }

    /// Step in y-direction.
    #[inline]
    pub fn hy(&self) -> f32 {
        self.hy
    }

    /// Whether both axes share one step.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.hx == self.hy
    }
}

impl Default for Spacing2D {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Spacing2D {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawSpacing {
            hx: f32,
            hy: f32,
        }

        let raw = RawSpacing::deserialize(deserializer)?;
        Self::try_new(raw.hx, raw.hy).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Spacing2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(hx={}, hy={})", self.hx, self.hy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_creation() {
        let h = Spacing2D::new(0.25, 0.5);
        assert_eq!(h.hx(), 0.25);
        assert_eq!(h.hy(), 0.5);
        assert!(!h.is_uniform());
        assert!(Spacing2D::uniform(0.1).is_uniform());
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(Spacing2D::try_new(0.0, 1.0).is_err());
        assert!(Spacing2D::try_new(1.0, -0.5).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Spacing2D::try_new(f32::NAN, 1.0).is_err());
        assert!(Spacing2D::try_new(1.0, f32::INFINITY).is_err());
    }

    #[test]
    #[should_panic(expected = "positive and finite")]
    fn test_zero_spacing_panics() {
        Spacing2D::uniform(0.0);
    }

    #[test]
    fn test_unit_domain() {
        let h = Spacing2D::unit_domain(Shape2D::new(4, 8));
        assert_eq!(h.hx(), 0.25);
        assert_eq!(h.hy(), 0.125);
    }

    #[test]
    fn test_default_is_unit() {
        assert_eq!(Spacing2D::default(), Spacing2D::new(1.0, 1.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let h: Spacing2D = serde_json::from_str(r#"{"hx":0.25,"hy":0.5}"#).unwrap();
        assert_eq!(h, Spacing2D::new(0.25, 0.5));

        for json in [
            r#"{"hx":0.0,"hy":1.0}"#,
            r#"{"hx":1.0,"hy":-1.0}"#,
            r#"{"hx":0.0,"hy":-1.0}"#,
        ] {
            let err = serde_json::from_str::<Spacing2D>(json).unwrap_err();
            assert!(
                err.to_string().contains("positive and finite"),
                "{}: {}",
                json,
                err
            );
        }
    }
}
