const EASING: &str = "cubic-bezier(.03,.98,.52,.99)";

/// Pointer-following tilt of a service card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltOptions {
    pub max_degrees: f64,
    pub scale: f64,
    pub speed_ms: u32,
    pub perspective_px: u32,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            max_degrees: 45.0,
            scale: 1.0,
            speed_ms: 450,
            perspective_px: 1000,
        }
    }
}

impl TiltOptions {
    /// Rotation around the x and y axis, in degrees, for a pointer at
    /// `(px, py)` relative to the card (0.0 = left/top, 1.0 = right/bottom).
    /// Each angle stays within `max_degrees / 2`.
    pub fn angles(&self, px: f64, py: f64) -> (f64, f64) {
        let px = clamp_ratio(px);
        let py = clamp_ratio(py);
        let rotate_x = (py - 0.5) * self.max_degrees;
        let rotate_y = (0.5 - px) * self.max_degrees;
        (rotate_x, rotate_y)
    }

    /// Pointer position relative to a box, from client coordinates.
    pub fn ratio(
        client: (f64, f64),
        origin: (f64, f64),
        size: (f64, f64),
    ) -> (f64, f64) {
        let axis = |c: f64, o: f64, s: f64| {
            if s > 0.0 {
                (c - o) / s
            } else {
                0.5
            }
        };
        (
            axis(client.0, origin.0, size.0),
            axis(client.1, origin.1, size.1),
        )
    }

    pub fn transform(&self, px: f64, py: f64) -> String {
        let (rotate_x, rotate_y) = self.angles(px, py);
        self.format_transform(rotate_x, rotate_y)
    }

    pub fn neutral_transform(&self) -> String {
        self.format_transform(0.0, 0.0)
    }

    pub fn transition(&self) -> String {
        format!("transform {}ms {}", self.speed_ms, EASING)
    }

    fn format_transform(&self, rotate_x: f64, rotate_y: f64) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) \
             scale3d({s}, {s}, {s})",
            self.perspective_px,
            rotate_x,
            rotate_y,
            s = self.scale
        )
    }
}

fn clamp_ratio(value: f64) -> f64 {
    if value.is_nan() {
        0.5
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_neutral() {
        let options = TiltOptions::default();
        assert_eq!(options.angles(0.5, 0.5), (0.0, 0.0));
        assert_eq!(options.transform(0.5, 0.5), options.neutral_transform());
    }

    #[test]
    fn test_corners_are_bounded() {
        let options = TiltOptions::default();
        assert_eq!(options.angles(0.0, 0.0), (-22.5, 22.5));
        assert_eq!(options.angles(1.0, 1.0), (22.5, -22.5));
        // pointer outside the card is clamped to its edge
        assert_eq!(options.angles(3.0, -2.0), options.angles(1.0, 0.0));
        assert_eq!(options.angles(f64::NAN, 0.5), (0.0, 0.0));
    }

    #[test]
    fn test_ratio() {
        let ratio =
            TiltOptions::ratio((150.0, 80.0), (100.0, 40.0), (200.0, 160.0));
        assert_eq!(ratio, (0.25, 0.25));
        let degenerate =
            TiltOptions::ratio((10.0, 10.0), (10.0, 10.0), (0.0, 0.0));
        assert_eq!(degenerate, (0.5, 0.5));
    }

    #[test]
    fn test_css() {
        let options = TiltOptions::default();
        assert_eq!(
            options.neutral_transform(),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) \
             scale3d(1, 1, 1)"
        );
        assert_eq!(
            options.transition(),
            "transform 450ms cubic-bezier(.03,.98,.52,.99)"
        );
    }
}
