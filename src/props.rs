use crate::core::Vec2;

/// Linear interpolation between two values of the same type.
///
/// `t` is expected in `[0, 1]` but implementations must not panic outside
/// that range; extrapolation is allowed for scalar types.
pub trait Lerp {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(f64::lerp(&a.x, &b.x, t), f64::lerp(&a.y, &b.y, t))
    }
}

/// The interpolable visual state of an element.
///
/// `Apply` actions carry one of these; the host maps it onto whatever it
/// renders with (CSS transform/opacity/filter, a canvas, a GPU scene).
/// Defaults are the identity so a partial JSON spec only names the fields
/// it animates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleProps {
    /// Offset from layout position, in pixels.
    pub translate: Vec2,
    /// Uniform scale factor, 1.0 = layout size.
    pub scale: f64,
    /// Rotation about the horizontal axis, degrees. Used for card tilt.
    pub rotate_x_deg: f64,
    /// Rotation about the vertical axis, degrees.
    pub rotate_y_deg: f64,
    /// 0.0 fully transparent, 1.0 fully opaque.
    pub opacity: f64,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// Fractional fill of a meter or bar, `[0, 1]`.
    pub fill_frac: f64,
}

impl Default for StyleProps {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            opacity: 1.0,
            blur_px: 0.0,
            fill_frac: 1.0,
        }
    }
}

impl StyleProps {
    /// Identity state, same as `Default`.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Fully transparent, otherwise identity. Common `from` state.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::default()
        }
    }

    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Vec2::new(x, y);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_blur(mut self, blur_px: f64) -> Self {
        self.blur_px = blur_px;
        self
    }

    pub fn with_fill(mut self, fill_frac: f64) -> Self {
        self.fill_frac = fill_frac;
        self
    }
}

impl Lerp for StyleProps {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            rotate_x_deg: f64::lerp(&a.rotate_x_deg, &b.rotate_x_deg, t),
            rotate_y_deg: f64::lerp(&a.rotate_y_deg, &b.rotate_y_deg, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            blur_px: f64::lerp(&a.blur_px, &b.blur_px, t),
            fill_frac: f64::lerp(&a.fill_frac, &b.fill_frac, t),
        }
    }
}
