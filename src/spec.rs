use crate::core::Millis;
use crate::ease::Ease;
use crate::error::{SightlineError, SightlineResult};
use crate::props::{Lerp, StyleProps};

/// How an element enters: the `from` and `to` visual states, timing, and
/// the per-index stagger applied when a group reveals several elements at
/// once.
///
/// The stagger index is captured at registration time, so elements keep
/// their slot even if siblings unregister before the entrance fires.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceSpec {
    pub from: StyleProps,
    pub to: StyleProps,
    pub duration: Millis,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub delay: Millis,
    #[serde(default)]
    pub stagger_step: Millis,
}

impl Default for EntranceSpec {
    fn default() -> Self {
        Self::fade_up(24.0)
    }
}

impl EntranceSpec {
    pub const DEFAULT_DURATION: Millis = Millis(600);

    /// Fade in while rising `dy` pixels. The workhorse entrance.
    pub fn fade_up(dy: f64) -> Self {
        Self {
            from: StyleProps::hidden().with_translate(0.0, dy),
            to: StyleProps::identity(),
            duration: Self::DEFAULT_DURATION,
            ease: Ease::OutCubic,
            delay: Millis::ZERO,
            stagger_step: Millis::ZERO,
        }
    }

    /// Slide in horizontally from `dx` pixels off layout position.
    pub fn slide_from_x(dx: f64) -> Self {
        Self {
            from: StyleProps::hidden().with_translate(dx, 0.0),
            to: StyleProps::identity(),
            duration: Self::DEFAULT_DURATION,
            ease: Ease::OutCubic,
            delay: Millis::ZERO,
            stagger_step: Millis::ZERO,
        }
    }

    /// Grow from `from_scale` to full size while fading in.
    pub fn zoom_in(from_scale: f64) -> Self {
        Self {
            from: StyleProps::hidden().with_scale(from_scale),
            to: StyleProps::identity(),
            duration: Self::DEFAULT_DURATION,
            ease: Ease::OutCubic,
            delay: Millis::ZERO,
            stagger_step: Millis::ZERO,
        }
    }

    /// Sharpen from a `blur_px` gaussian blur while fading in.
    pub fn blur_reveal(blur_px: f64) -> Self {
        Self {
            from: StyleProps::hidden().with_blur(blur_px),
            to: StyleProps::identity(),
            duration: Millis(800),
            ease: Ease::OutQuad,
            delay: Millis::ZERO,
            stagger_step: Millis::ZERO,
        }
    }

    /// Fill a meter from empty to `frac`. Used for skill bars.
    pub fn fill_to(frac: f64) -> Self {
        Self {
            from: StyleProps::identity().with_fill(0.0),
            to: StyleProps::identity().with_fill(frac.clamp(0.0, 1.0)),
            duration: Millis(1200),
            ease: Ease::InOutCubic,
            delay: Millis::ZERO,
            stagger_step: Millis::ZERO,
        }
    }

    pub fn with_duration(mut self, duration: Millis) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_delay(mut self, delay: Millis) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stagger(mut self, step: Millis) -> Self {
        self.stagger_step = step;
        self
    }

    /// Eased interpolation at normalized time `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> StyleProps {
        StyleProps::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    /// Delay before this element starts, given its stagger index.
    /// `delay + index * stagger_step`, saturating.
    pub fn start_delay(&self, index: usize) -> Millis {
        self.delay
            .saturating_add(self.stagger_step.saturating_mul(index as u64))
    }

    pub fn validate(&self) -> SightlineResult<()> {
        if self.duration == Millis::ZERO {
            return Err(SightlineError::validation(
                "entrance duration must be greater than zero",
            ));
        }
        for (name, value) in [
            ("from.opacity", self.from.opacity),
            ("to.opacity", self.to.opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SightlineError::validation(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        for (name, value) in [
            ("from.fill_frac", self.from.fill_frac),
            ("to.fill_frac", self.to.fill_frac),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SightlineError::validation(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
