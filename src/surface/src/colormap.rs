use plotters::style::RGBColor;

/// Sequential, light-to-dark color gradients. One per surface layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    Purples,
    Blues,
    BuGn,
    Greens,
    Oranges,
    Reds,
}

impl ColorMap {
    /// Layer colormaps, in order of appearance.
    pub const CYCLE: [ColorMap; 6] = [Self::Purples, Self::Blues, Self::BuGn, Self::Greens, Self::Oranges, Self::Reds];

    /// Colormap of the `n`-th layer of a figure. Wraps around.
    pub fn nth(n: usize) -> Self {
        Self::CYCLE[n % Self::CYCLE.len()]
    }

    /// Light, middle and dark anchors of this gradient.
    fn anchors(self) -> [(u8, u8, u8); 3] {
        match self {
            Self::Purples => [(252, 251, 253), (158, 154, 200), (63,  0,   125)],
            Self::Blues   => [(247, 251, 255), (107, 174, 214), (8,   48,  107)],
            Self::BuGn    => [(247, 252, 253), (102, 194, 164), (0,   68,  27 )],
            Self::Greens  => [(247, 252, 245), (116, 196, 118), (0,   68,  27 )],
            Self::Oranges => [(255, 245, 235), (253, 141, 60 ), (127, 39,  4  )],
            Self::Reds    => [(255, 245, 240), (251, 106, 74 ), (103, 0,   13 )],
        }
    }

    /// Color of `value`, relative to the `[lo, hi]` interval. Out of bounds values are clamped,
    /// and NaN maps to the lightest color.
    pub fn color(self, value: f64, lo: f64, hi: f64) -> RGBColor {
        let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.0 };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let [light, mid, dark] = self.anchors();
        let (from, to, t) = match t < 0.5 {
            true  => (light, mid, t * 2.0),
            false => (mid, dark, (t - 0.5) * 2.0),
        };
        RGBColor(lerp(from.0, to.0, t), lerp(from.1, to.1, t), lerp(from.2, to.2, t))
    }

    /// Representative color of this gradient (legend, etc.)
    pub fn swatch(self) -> RGBColor {
        let (r, g, b) = self.anchors()[1];
        RGBColor(r, g, b)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(from: u8, to: u8, t: f64) -> u8 {
    let (from, to) = (f64::from(from), f64::from(to));
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}
