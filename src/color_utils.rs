//! Segment color assignment.
//!
//! Every segment of a layout gets its own fully saturated hue, spaced evenly
//! around the color wheel so neighbouring segments stay easy to tell apart in
//! the preview.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black, returned for layouts without segments.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Components as an `[r, g, b, a]` array, the layout pixel buffers use.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb` hex notation (alpha omitted).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgba> for (u8, u8, u8, u8) {
    fn from(c: Rgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        c.to_array()
    }
}

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    // Half-open sectors: a hue of exactly 60 belongs to [60, 120).
    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Hue in degrees for a segment, or `None` when the layout has no segments.
///
/// The index wraps around the segment count, negative indices included, so the
/// result is always in `[0, 360)`.
pub fn segment_hue(num_segments: i64, segment_index: i64) -> Option<f64> {
    if num_segments <= 0 {
        return None;
    }
    let slot = segment_index.rem_euclid(num_segments);
    Some(slot as f64 * (360.0 / num_segments as f64))
}

/// Color for `segment_index` in a layout of `num_segments` segments.
///
/// Layouts with zero or a negative number of segments get [`Rgba::BLACK`].
pub fn assign_color(num_segments: i64, segment_index: i64) -> Rgba {
    let Some(hue) = segment_hue(num_segments, segment_index) else {
        return Rgba::BLACK;
    };

    let (r, g, b) = hsv_to_rgb(hue, 1.0, 1.0);
    Rgba::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), 255)
}

/// Colors for every segment `0..num_segments`, in index order.
pub fn segment_palette(num_segments: i64) -> Vec<Rgba> {
    (0..num_segments.max(0))
        .map(|i| assign_color(num_segments, i))
        .collect()
}

/// Scale a `[0, 1]` component to a byte, rounding half away from zero.
fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
