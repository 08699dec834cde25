//! Scroll projection math for the landing page.
//! Everything here is pure so the timing-independent contract stays testable
//! without a browser.

/// Minimum interval between scroll samples, ~60 Hz.
pub const SCROLL_SAMPLE_MS: u32 = 16;

/// Scroll distance over which the background fades out completely.
pub const FADE_DISTANCE_PX: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Multiplier applied to the scroll offset; < 1 lags behind the content.
    pub speed: f64,
    /// Additive pixel constant applied after scaling.
    pub offset: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: 0.5,
            offset: 0.0,
        }
    }
}

impl ParallaxConfig {
    /// Vertical displacement in pixels for a given scroll offset.
    pub fn translate_y(&self, scroll_y: f64) -> f64 {
        -(scroll_y * self.speed) + self.offset
    }

    /// CSS transform value carrying the displacement.
    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translate3d(0, {}px, 0)", self.translate_y(scroll_y))
    }
}

/// Background opacity: fades 1 -> 0 over the first [`FADE_DISTANCE_PX`] of
/// scroll, clamped at both ends.
pub fn fade_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / FADE_DISTANCE_PX).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{ParallaxConfig, fade_opacity};

    #[test]
    fn default_config() {
        let cfg = ParallaxConfig::default();
        assert_eq!(cfg.speed, 0.5);
        assert_eq!(cfg.offset, 0.0);
    }

    #[test]
    fn speed_scales_the_displacement() {
        let title = ParallaxConfig {
            speed: 0.6,
            ..Default::default()
        };
        assert_eq!(title.translate_y(100.0), -60.0);
        let subtitle = ParallaxConfig {
            speed: 0.4,
            ..Default::default()
        };
        assert_eq!(subtitle.translate_y(100.0), -40.0);
    }

    #[test]
    fn offset_shifts_additively() {
        let cfg = ParallaxConfig {
            speed: 0.5,
            offset: 12.0,
        };
        assert_eq!(cfg.translate_y(100.0), -38.0);
    }

    #[test]
    fn transform_is_a_vertical_3d_translation() {
        let cfg = ParallaxConfig {
            speed: 0.6,
            ..Default::default()
        };
        assert_eq!(cfg.transform(100.0), "translate3d(0, -60px, 0)");
        assert_eq!(cfg.transform(0.0), "translate3d(0, 0px, 0)");
    }

    #[test]
    fn opacity_fades_over_the_first_sixty_pixels() {
        assert_eq!(fade_opacity(0.0), 1.0);
        assert_eq!(fade_opacity(30.0), 0.5);
        assert_eq!(fade_opacity(60.0), 0.0);
    }

    #[test]
    fn opacity_clamps_outside_the_fade_range() {
        assert_eq!(fade_opacity(90.0), 0.0);
        assert_eq!(fade_opacity(-10.0), 1.0);
    }

    #[test]
    fn opacity_never_increases_with_scroll() {
        let mut prev = fade_opacity(0.0);
        for s in 1..200 {
            let next = fade_opacity(s as f64);
            assert!(next <= prev, "opacity rose between {} and {}", s - 1, s);
            prev = next;
        }
    }
}
