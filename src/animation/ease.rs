/// Easing functions used to map normalized animation progress.
///
/// The serde names also accept the power-curve aliases used by page authors
/// (`"none"`, `"power1.in"`, `"power2.out"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    #[serde(alias = "none")]
    Linear,
    /// Quadratic ease-in.
    #[serde(alias = "power1.in")]
    InQuad,
    /// Quadratic ease-out.
    #[serde(alias = "power1.out")]
    OutQuad,
    /// Quadratic ease-in/out.
    #[serde(alias = "power1.inOut")]
    InOutQuad,
    /// Cubic ease-in.
    #[serde(alias = "power2.in")]
    InCubic,
    /// Cubic ease-out.
    #[serde(alias = "power2.out")]
    OutCubic,
    /// Cubic ease-in/out.
    #[serde(alias = "power2.inOut")]
    InOutCubic,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self.degree() {
            None => t,
            Some((n, Shape::In)) => t.powi(n),
            Some((n, Shape::Out)) => 1.0 - (1.0 - t).powi(n),
            Some((n, Shape::InOut)) if t < 0.5 => (2.0 * t).powi(n) / 2.0,
            Some((n, Shape::InOut)) => 1.0 - (2.0 - 2.0 * t).powi(n) / 2.0,
        }
    }

    /// Polynomial degree and shape; `None` for linear.
    fn degree(self) -> Option<(i32, Shape)> {
        match self {
            Self::Linear => None,
            Self::InQuad => Some((2, Shape::In)),
            Self::OutQuad => Some((2, Shape::Out)),
            Self::InOutQuad => Some((2, Shape::InOut)),
            Self::InCubic => Some((3, Shape::In)),
            Self::OutCubic => Some((3, Shape::Out)),
            Self::InOutCubic => Some((3, Shape::InOut)),
        }
    }
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
