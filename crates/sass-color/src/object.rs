use std::str::FromStr;

use crate::core::{
    clip, constrain, convert, format, in_gamut, normalize, parse, to_eq_bits, to_eq_channels,
    ColorSpace, Key, TextFormat,
};
use crate::error::ColorError;
use crate::Float;

/// A color record.
///
/// Every color has a [text format](TextFormat), which also determines its
/// [color space](ColorSpace), up to three channel values, and an alpha value.
/// Channels are sparse: A channel written as `none` is missing and reads as
/// zero in arithmetic. Alpha is never missing.
///
/// # Invariants
///
/// Constructors establish the following invariants:
///
///   * Alpha is clamped to `0..=1`.
///   * Hues are normalized to `0..360`.
///   * RGB channels are clamped to `0..=255`.
///   * Saturation, lightness, whiteness, and blackness are clamped to
///     `0..=100`.
///   * CIE LCH chroma is clamped to `0..=150` and Oklch chroma to `0..=0.4`.
///
/// Lab a/b and XYZ coordinates are not clamped.
///
/// # Examples
///
/// ```
/// # use sass_color::{Color, ColorSpace, TextFormat};
/// # use sass_color::error::ColorError;
/// let color: Color = "hsl(120deg, 100%, 25%)".parse()?;
/// assert_eq!(color.format(), TextFormat::Hsl);
/// assert_eq!(color.to(ColorSpace::Rgb).to_24bit(), [0, 128, 0]);
/// assert_eq!(color.to_css(TextFormat::Rgb), "green");
/// # Ok::<(), ColorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Color {
    format: TextFormat,
    channels: [Option<Float>; 3],
    alpha: Float,
}

impl Color {
    /// Create a new color record.
    ///
    /// This function constrains channels and alpha to their legal ranges.
    pub fn new(format: TextFormat, channels: [Option<Float>; 3], alpha: Float) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };

        Self {
            format,
            channels: constrain(format.space(), &channels),
            alpha,
        }
    }

    /// Create a new color with the given coordinates in the given color space
    /// and the space's default format.
    pub fn from_coordinates(space: ColorSpace, coordinates: [Float; 3], alpha: Float) -> Self {
        let [c1, c2, c3] = coordinates;
        Self::new(
            TextFormat::for_space(space, alpha < 1.0),
            [Some(c1), Some(c2), Some(c3)],
            alpha,
        )
    }

    /// Create a new opaque RGB color. Channels range `0..=255`.
    pub fn rgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::from_coordinates(ColorSpace::Rgb, [r.into(), g.into(), b.into()], 1.0)
    }

    /// Create a new opaque HSL color.
    pub fn hsl(h: impl Into<Float>, s: impl Into<Float>, l: impl Into<Float>) -> Self {
        Self::from_coordinates(ColorSpace::Hsl, [h.into(), s.into(), l.into()], 1.0)
    }

    /// Create a new opaque HWB color.
    pub fn hwb(h: impl Into<Float>, w: impl Into<Float>, bl: impl Into<Float>) -> Self {
        Self::from_coordinates(ColorSpace::Hwb, [h.into(), w.into(), bl.into()], 1.0)
    }

    /// Create a new opaque CIELAB color.
    pub fn lab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::from_coordinates(ColorSpace::Lab, [l.into(), a.into(), b.into()], 1.0)
    }

    /// Create a new opaque CIE LCH color.
    pub fn lch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::from_coordinates(ColorSpace::Lch, [l.into(), c.into(), h.into()], 1.0)
    }

    /// Create a new opaque Oklch color.
    ///
    /// A lightness of at most 1 is a fraction and scaled to a percentage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sass_color::Color;
    /// assert_eq!(Color::oklch(0.5, 0.1, 30), Color::oklch(50, 0.1, 30));
    /// ```
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        let l = l.into();
        let l = if l <= 1.0 { l * 100.0 } else { l };
        Self::from_coordinates(ColorSpace::Oklch, [l, c.into(), h.into()], 1.0)
    }

    /// Create a new opaque XYZ color. Coordinates are scaled to `0..=100`.
    pub fn xyz(x: impl Into<Float>, y: impl Into<Float>, z: impl Into<Float>) -> Self {
        Self::from_coordinates(ColorSpace::Xyz, [x.into(), y.into(), z.into()], 1.0)
    }

    /// Instantiate a color from its string representation.
    ///
    /// This method implements the same functionality as `Color`'s `FromStr`
    /// implementation.
    pub fn parse(s: &str) -> Result<Color, ColorError> {
        parse(s)
    }

    /// Access the text format.
    #[inline]
    pub fn format(&self) -> TextFormat {
        self.format
    }

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.format.space()
    }

    /// Access the alpha value.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is translucent, i.e., has an alpha value
    /// less than one.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.alpha < 1.0
    }

    /// Access the channels, which may be missing.
    #[inline]
    pub fn channels(&self) -> [Option<Float>; 3] {
        self.channels
    }

    /// Access the channel with the given data key.
    ///
    /// This method returns `None` if the key does not belong to this color's
    /// space or if the channel is missing.
    pub fn get(&self, key: Key) -> Option<Float> {
        self.space()
            .index_of(key)
            .and_then(|index| self.channels[index])
    }

    /// Access the coordinates, with missing channels reading as zero.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        normalize(&self.channels)
    }

    /// Convert this color to the target color space.
    ///
    /// The result has the target space's default format, picking the alpha
    /// variant for translucent colors. If the target is this color's own space,
    /// the result is a clone.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        if self.space() == target {
            return self.clone();
        }

        let coordinates = convert(self.space(), target, &self.coordinates());
        Self::from_coordinates(target, coordinates, self.alpha)
    }

    /// Get this color's coordinates in RGB.
    pub fn to_rgb(&self) -> [Float; 3] {
        convert(self.space(), ColorSpace::Rgb, &self.coordinates())
    }

    /// Get this color's 24-bit RGB representation, rounding and clamping each
    /// channel.
    pub fn to_24bit(&self) -> [u8; 3] {
        self.to_rgb().map(|c| {
            if c.is_nan() {
                0
            } else {
                c.round().clamp(0.0, 255.0) as u8
            }
        })
    }

    /// Change this color's text format, converting between color spaces if
    /// necessary.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_format(&self, format: TextFormat) -> Self {
        if format.space() == self.space() {
            Self::new(format, self.channels, self.alpha)
        } else {
            let coordinates = convert(self.space(), format.space(), &self.coordinates());
            let [c1, c2, c3] = coordinates;
            Self::new(format, [Some(c1), Some(c2), Some(c3)], self.alpha)
        }
    }

    /// Change this color's alpha value.
    ///
    /// If the color becomes translucent and its format has an alpha variant,
    /// the result uses that variant.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        let format = if alpha < 1.0 && self.format.base() == self.format {
            match self.format {
                TextFormat::Hex => TextFormat::Hexa,
                other => TextFormat::for_space(other.space(), true),
            }
        } else {
            self.format
        };

        Self::new(format, self.channels, alpha)
    }

    /// Determine whether this color is in gamut for its color space.
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space(), &self.coordinates())
    }

    /// Clip this color to the gamut of its color space.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        let [c1, c2, c3] = clip(self.space(), &self.coordinates());
        Self::new(self.format, [Some(c1), Some(c2), Some(c3)], self.alpha)
    }

    /// Format this color in the given text format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sass_color::{Color, TextFormat};
    /// let red = Color::rgb(255, 0, 0);
    /// assert_eq!(red.to_css(TextFormat::Rgb), "red");
    /// assert_eq!(red.to_css(TextFormat::Hsl), "hsl(0, 100%, 50%)");
    /// assert_eq!(red.to_css(TextFormat::Hexa), "#ff0000ff");
    /// ```
    pub fn to_css(&self, target: TextFormat) -> String {
        format(self, target, true)
    }

    /// Format this color in the given text format, optionally spelling out
    /// hexadecimal colors instead of using their names.
    pub fn to_css_with(&self, target: TextFormat, prefer_names: bool) -> String {
        format(self, target, prefer_names)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// It then checks for named colors and, failing that, tries each text
    /// format's grammar in turn.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sass_color::{Color, TextFormat};
    /// # use sass_color::error::ColorError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("  Navy ")?;
    /// assert_eq!(navy, Color::rgb(0, 0, 128));
    ///
    /// let tomato: Color = str::parse("rgba(255, 99, 71, 50%)")?;
    /// assert_eq!(tomato, Color::rgb(255, 99, 71).with_alpha(0.5));
    ///
    /// let oklch: Color = "oklch(62.8% 0.2577 29.23)".parse()?;
    /// assert_eq!(oklch.format(), TextFormat::Oklch);
    /// # Ok::<(), ColorError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space().hash(state);
        to_eq_channels(self.space(), &self.channels).hash(state);
        to_eq_bits(self.alpha).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Two colors are equal if they have the same color space, the same
    /// missing channels, and the same channel and alpha values after
    /// normalizing hues and reducing precision. The text format does not
    /// matter beyond its color space, i.e., `#f00` equals `rgb(255, 0, 0)`.
    fn eq(&self, other: &Self) -> bool {
        self.space() == other.space()
            && to_eq_channels(self.space(), &self.channels)
                == to_eq_channels(other.space(), &other.channels)
            && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

impl Eq for Color {}

impl std::fmt::Display for Color {
    /// Format this color in its own text format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format(self, self.format, true))
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    use crate::core::{ColorSpace, Key, TextFormat};
    use crate::error::ColorError;
    use std::collections::HashSet;

    #[test]
    fn test_invariants() {
        let color = Color::new(TextFormat::Hsl, [Some(-90.0), Some(140.0), None], 1.7);
        assert_eq!(color.channels(), [Some(270.0), Some(100.0), None]);
        assert_eq!(color.alpha(), 1.0);
        assert_eq!(color.get(Key::L), None);
        assert_eq!(color.get(Key::R), None);
        assert_eq!(color.coordinates(), [270.0, 100.0, 0.0]);

        let color = Color::rgb(300, -2, 17.5);
        assert_eq!(color.coordinates(), [255.0, 0.0, 17.5]);
        assert_eq!(Color::lch(50, 400, 0).coordinates(), [50.0, 150.0, 0.0]);
    }

    #[test]
    fn test_with_alpha() {
        let color = Color::rgb(1, 2, 3).with_alpha(0.5);
        assert_eq!(color.format(), TextFormat::Rgba);
        assert!(color.has_alpha());

        let color = Color::hwb(0, 10, 10).with_alpha(0.5);
        assert_eq!(color.format(), TextFormat::Hwb);

        let color = Color::lab(50, 10, 10).with_alpha(0.25);
        assert_eq!(color.format(), TextFormat::Laba);
    }

    #[test]
    fn test_equality() -> Result<(), ColorError> {
        let c1: Color = "#f00".parse()?;
        let c2 = Color::try_from("rgb(255, 0, 0)")?;
        assert_eq!(c1, c2);
        assert_eq!(Color::hsl(360, 50, 50), Color::hsl(0, 50, 50));
        assert_ne!(Color::hsl(0, 50, 50), Color::rgb(0, 50, 50));

        let set: HashSet<Color> = [c1, c2, Color::rgb(0, 0, 0)].into_iter().collect();
        assert_eq!(set.len(), 2);
        Ok(())
    }

    #[test]
    fn test_conversion() {
        let red = Color::rgb(255, 0, 0);
        let hsl = red.to(ColorSpace::Hsl);
        assert_eq!(hsl.format(), TextFormat::Hsl);
        assert_eq!(hsl.coordinates(), [0.0, 100.0, 50.0]);
        assert_eq!(hsl.to_24bit(), [255, 0, 0]);

        let translucent = red.with_alpha(0.5).to(ColorSpace::Xyz);
        assert_eq!(translucent.format(), TextFormat::Xyza);

        assert!(!Color::hwb(0, 60, 60).in_gamut());
        assert_eq!(Color::hwb(0, 60, 60).clip().coordinates(), [0.0, 50.0, 50.0]);
    }
}
