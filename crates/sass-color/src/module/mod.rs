//! The color module's operations.
//!
//! [`ColorModule`] bundles the operations of the Sass color module. Each
//! operation takes colors as text and returns its result as text, a
//! [`SassNumber`], or a boolean. Failures are reported as [`ColorError`]s and,
//! depending on the [volume](crate::opt::Volume), also logged to standard
//! error.
//!
//! Manipulations produce RGB colors. They serialize as color names where
//! possible and as hashed hexadecimal notation otherwise.
//!
//! # Examples
//!
//! ```
//! # use sass_color::{Arguments, ColorModule};
//! # use sass_color::error::ColorError;
//! let module = ColorModule::new();
//! assert_eq!(module.invert("red", None, None)?, "cyan");
//! assert_eq!(module.mix("red", "blue", None)?, "purple");
//! assert_eq!(
//!     module.adjust("red", &Arguments::new().with("$hue", 120))?,
//!     "lime"
//! );
//! # Ok::<(), ColorError>(())
//! ```

mod args;
mod legacy;

use std::io::Write;

pub use args::{Argument, Arguments};
use args::Plan;

use crate::core::{
    clip, convert, max_chroma, normalize_hue, round_to, ColorSpace, Key, TextFormat, D65,
};
use crate::error::ColorError;
use crate::number::{SassNumber, Unit};
use crate::opt::{Options, Volume};
use crate::{Color, Float};

/// The threshold below which saturation and alpha are considered zero.
const EPSILON: Float = 1e-6;

/// The threshold below which chroma is considered zero.
const CHROMA_EPSILON: Float = 1e-4;

/// The kind of channel manipulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// Add the amount and clamp.
    Adjust,
    /// Replace with the amount after validating its range.
    Change,
    /// Move the given percentage toward the ceiling or floor.
    Scale,
}

impl Mode {
    fn apply(
        &self,
        name: &str,
        current: Float,
        amount: Float,
        min: Float,
        max: Float,
    ) -> Result<Float, ColorError> {
        match *self {
            Self::Adjust => Ok((current + amount).clamp(min, max)),
            Self::Change => ColorError::check(name, amount, min, max),
            Self::Scale => {
                let factor = ColorError::check(name, amount, -100.0, 100.0)? / 100.0;
                if factor > 0.0 {
                    Ok(current + (max - current) * factor)
                } else {
                    Ok(current + (current - min) * factor)
                }
            }
        }
    }

    fn hue(&self, current: Float, amount: Float) -> Result<Float, ColorError> {
        match *self {
            Self::Adjust => Ok(normalize_hue(current + amount)),
            Self::Change => Ok(normalize_hue(amount)),
            Self::Scale => Err(ColorError::UnsupportedParameter("$hue".to_string())),
        }
    }
}

/// The target of a channel query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Resolved {
    Alpha,
    Channel(ColorSpace, usize),
}

/// Determine the home color space of a channel name that is not one of a
/// color's own channels.
fn home_space(name: &str) -> Option<ColorSpace> {
    match name {
        "red" | "r" | "green" | "g" | "blue" | "b" => Some(ColorSpace::Rgb),
        "hue" | "h" | "saturation" | "s" | "lightness" | "l" => Some(ColorSpace::Hsl),
        "whiteness" | "w" | "blackness" | "bl" => Some(ColorSpace::Hwb),
        "chroma" | "c" => Some(ColorSpace::Lch),
        "a" => Some(ColorSpace::Lab),
        "x" | "y" | "z" => Some(ColorSpace::Xyz),
        _ => None,
    }
}

/// Find the index of the named channel in the color space.
fn position(space: ColorSpace, name: &str) -> Option<usize> {
    TextFormat::space_channels(space)
        .iter()
        .position(|channel| channel.matches(name))
}

/// Resolve the channel name for the color.
///
/// Names resolve in the given space, if any, then in the color's own space,
/// and finally in the home space of the name.
fn resolve(color: &Color, name: &str, space: Option<ColorSpace>) -> Result<Resolved, ColorError> {
    let name = name.trim().trim_start_matches('$').to_ascii_lowercase();
    if name == "alpha" || name == "opacity" {
        return Ok(Resolved::Alpha);
    }

    let unknown = || ColorError::UnknownChannel(name.clone());

    if let Some(space) = space {
        return position(space, &name)
            .map(|index| Resolved::Channel(space, index))
            .ok_or_else(unknown);
    }

    if let Some(index) = position(color.space(), &name) {
        return Ok(Resolved::Channel(color.space(), index));
    }

    let space = home_space(&name).ok_or_else(unknown)?;
    position(space, &name)
        .map(|index| Resolved::Channel(space, index))
        .ok_or_else(unknown)
}

/// Get the color's coordinates in the given space.
fn coordinates_in(color: &Color, space: ColorSpace) -> [Float; 3] {
    convert(color.space(), space, &color.coordinates())
}

/// Create an RGB color from floating point channels.
fn rgb_color(rgb: [Float; 3], alpha: Float) -> Color {
    Color::from_coordinates(ColorSpace::Rgb, rgb, alpha)
}

/// Blend two RGB colors with the given weight for the first, rounding the
/// result to whole channels.
fn blend(rgb1: &[Float; 3], rgb2: &[Float; 3], weight: Float) -> [Float; 3] {
    let mut result = [0.0; 3];
    for index in 0..3 {
        result[index] = rgb1[index]
            .mul_add(weight, rgb2[index] * (1.0 - weight))
            .round();
    }
    result
}

// ====================================================================================================================

/// The Sass color module.
///
/// A color module carries [`Options`], which control logging to standard
/// error, whether results use color names, and the default polar color space
/// for hue manipulations.
#[derive(Clone, Debug, Default)]
pub struct ColorModule {
    options: Options,
}

impl ColorModule {
    /// Create a new color module with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new color module with the given options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Access the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Write a diagnostic line for the operation's outcome, if the volume
    /// calls for one. Failures to write are ignored.
    fn log<T: std::fmt::Display>(&self, operation: &str, result: &Result<T, ColorError>) {
        match (self.options.volume(), result) {
            (Volume::Silent, _) => {}
            (_, Err(error)) => {
                let _ = writeln!(
                    std::io::stderr().lock(),
                    "sass-color::{} error={}",
                    operation,
                    error
                );
            }
            (Volume::Detailed, Ok(value)) => {
                let _ = writeln!(
                    std::io::stderr().lock(),
                    "sass-color::{} result={}",
                    operation,
                    value
                );
            }
            (Volume::Regular, Ok(_)) => {}
        }
    }

    /// Run the operation and log its outcome.
    fn run<T, F>(&self, operation: &str, f: F) -> Result<T, ColorError>
    where
        T: std::fmt::Display,
        F: FnOnce() -> Result<T, ColorError>,
    {
        let result = f();
        self.log(operation, &result);
        result
    }

    /// Serialize the color in its own format.
    fn output(&self, color: &Color) -> String {
        color.to_css_with(color.format(), self.options.prefer_names())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Parse the text as a color.
    pub fn parse(&self, text: &str) -> Result<Color, ColorError> {
        self.run("parse", || Color::parse(text))
    }

    /// Format the color in its own text format.
    pub fn format(&self, color: &Color) -> String {
        self.output(color)
    }

    /// Normalize the textual color by parsing and formatting it again.
    ///
    /// ```
    /// # use sass_color::ColorModule;
    /// # use sass_color::error::ColorError;
    /// let module = ColorModule::new();
    /// assert_eq!(module.normalize("#FF0000")?, "red");
    /// assert_eq!(module.normalize("hsl(120deg 100% 50% / 50%)")?, "hsla(120, 100%, 50%, 0.5)");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn normalize(&self, text: &str) -> Result<String, ColorError> {
        self.run("normalize", || Ok(self.output(&Color::parse(text)?)))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Apply the validated plan to the color.
    ///
    /// Channels are updated in stages: RGB, HSL, HWB, XYZ, the polar CIE or
    /// Oklab space, and finally alpha. Hue updates apply in the `$space` color
    /// space, defaulting to the options' polar space. So does lightness when
    /// that space is LCH or Oklch.
    fn apply(&self, color: &Color, plan: &Plan, mode: Mode) -> Result<Color, ColorError> {
        use ColorSpace::*;

        let polar = plan.space.unwrap_or(self.options.polar_space());
        let lightness_space = if matches!(polar, Lch | Oklch) { polar } else { Hsl };
        let hue_in = |space: ColorSpace| plan.hue.filter(|_| polar == space);

        let mut rgb = color.to_rgb();
        let mut alpha = color.alpha();

        // 1. RGB
        for (index, (name, amount)) in [("red", plan.red), ("green", plan.green), ("blue", plan.blue)]
            .into_iter()
            .enumerate()
        {
            if let Some(amount) = amount {
                rgb[index] = mode.apply(name, rgb[index], amount, 0.0, 255.0)?;
            }
        }

        // 2. HSL
        let lightness = plan.lightness.filter(|_| lightness_space == Hsl);
        if hue_in(Hsl).is_some() || plan.saturation.is_some() || lightness.is_some() {
            let mut hsl = convert(Rgb, Hsl, &rgb);
            if let Some(amount) = hue_in(Hsl) {
                hsl[0] = mode.hue(hsl[0], amount)?;
            }
            if let Some(amount) = plan.saturation {
                hsl[1] = mode.apply("saturation", hsl[1], amount, 0.0, 100.0)?;
            }
            if let Some(amount) = lightness {
                hsl[2] = mode.apply("lightness", hsl[2], amount, 0.0, 100.0)?;
            }
            rgb = convert(Hsl, Rgb, &hsl);
        }

        // 3. HWB
        if hue_in(Hwb).is_some() || plan.whiteness.is_some() || plan.blackness.is_some() {
            let mut hwb = convert(Rgb, Hwb, &rgb);
            if let Some(amount) = hue_in(Hwb) {
                hwb[0] = mode.hue(hwb[0], amount)?;
            }
            if let Some(amount) = plan.whiteness {
                hwb[1] = mode.apply("whiteness", hwb[1], amount, 0.0, 100.0)?;
            }
            if let Some(amount) = plan.blackness {
                hwb[2] = mode.apply("blackness", hwb[2], amount, 0.0, 100.0)?;
            }
            rgb = convert(Hwb, Rgb, &clip(Hwb, &hwb));
        }

        // 4. XYZ
        let xyz_amounts = [("x", plan.x), ("y", plan.y), ("z", plan.z)];
        if xyz_amounts.iter().any(|(_, amount)| amount.is_some()) {
            let mut xyz = convert(Rgb, Xyz, &rgb);
            for (index, (name, amount)) in xyz_amounts.into_iter().enumerate() {
                if let Some(amount) = amount {
                    let (min, max) = if mode == Mode::Scale {
                        (0.0, D65[index])
                    } else {
                        (-1000.0, 1000.0)
                    };
                    xyz[index] = mode.apply(name, xyz[index], amount, min, max)?;
                }
            }
            rgb = convert(Xyz, Rgb, &xyz);
        }

        // 5. LCH or Oklch
        let cie_space = if matches!(polar, Lch | Oklch) { polar } else { Lch };
        let lightness = plan.lightness.filter(|_| lightness_space == cie_space);
        if hue_in(cie_space).is_some() || plan.chroma.is_some() || lightness.is_some() {
            let mut lch = convert(Rgb, cie_space, &rgb);
            if let Some(amount) = lightness {
                lch[0] = mode.apply("lightness", lch[0], amount, 0.0, 100.0)?;
            }
            if let Some(amount) = plan.chroma {
                lch[1] = mode.apply("chroma", lch[1], amount, 0.0, max_chroma(cie_space))?;
            }
            if let Some(amount) = hue_in(cie_space) {
                lch[2] = mode.hue(lch[2], amount)?;
            }
            rgb = convert(cie_space, Rgb, &lch);
        }

        // 6. Alpha
        if let Some(amount) = plan.alpha {
            alpha = mode.apply("alpha", alpha, amount, 0.0, 1.0)?;
        }

        Ok(rgb_color(clip(Rgb, &rgb), alpha))
    }

    /// Adjust the color's channels by the given amounts.
    ///
    /// Supported arguments are `$red`, `$green`, `$blue`, `$hue`,
    /// `$saturation`, `$lightness`, `$whiteness`, `$blackness`, `$x`, `$y`,
    /// `$z`, `$chroma`, `$alpha`, and `$space`. Results are clamped to each
    /// channel's range and hues wrap around.
    pub fn adjust(&self, color: &str, args: &Arguments) -> Result<String, ColorError> {
        self.run("adjust", || {
            let plan = Plan::new(args)?;
            let color = Color::parse(color)?;
            Ok(self.output(&self.apply(&color, &plan, Mode::Adjust)?))
        })
    }

    /// Change the color's channels to the given values.
    ///
    /// This method accepts the same arguments as [`ColorModule::adjust`].
    /// Values outside a channel's range are errors.
    pub fn change(&self, color: &str, args: &Arguments) -> Result<String, ColorError> {
        self.run("change", || {
            let plan = Plan::new(args)?;
            let color = Color::parse(color)?;
            Ok(self.output(&self.apply(&color, &plan, Mode::Change)?))
        })
    }

    /// Scale the color's channels by the given percentages.
    ///
    /// Positive percentages move a channel toward its ceiling, negative ones
    /// toward its floor. Percentages must be within `-100..=100`. Hue cannot
    /// be scaled.
    ///
    /// ```
    /// # use sass_color::{Arguments, ColorModule};
    /// # use sass_color::error::ColorError;
    /// let module = ColorModule::new();
    /// let args = Arguments::new().with("$lightness", 50);
    /// assert_eq!(module.scale("hsl(0, 100%, 50%)", &args)?, "#ff8080");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn scale(&self, color: &str, args: &Arguments) -> Result<String, ColorError> {
        self.run("scale", || {
            let plan = Plan::new(args)?;
            let color = Color::parse(color)?;
            Ok(self.output(&self.apply(&color, &plan, Mode::Scale)?))
        })
    }

    /// Mix two colors in RGB.
    ///
    /// The weight is the proportion of the first color and defaults to 50%.
    /// Weights above one are percentages.
    pub fn mix(&self, color1: &str, color2: &str, weight: Option<Float>) -> Result<String, ColorError> {
        self.run("mix", || {
            let color1 = Color::parse(color1)?;
            let color2 = Color::parse(color2)?;

            let raw = weight.unwrap_or(50.0);
            let weight = if raw > 1.0 { raw / 100.0 } else { raw };
            if !(0.0..=1.0).contains(&weight) {
                return Err(ColorError::out_of_range("weight", raw, 0.0, 100.0));
            }

            let rgb = blend(&color1.to_rgb(), &color2.to_rgb(), weight);
            let alpha = color1
                .alpha()
                .mul_add(weight, color2.alpha() * (1.0 - weight));
            let format = if color1.has_alpha() || color2.has_alpha() {
                TextFormat::Rgba
            } else {
                TextFormat::Rgb
            };

            let [r, g, b] = rgb;
            Ok(self.output(&Color::new(format, [Some(r), Some(g), Some(b)], alpha)))
        })
    }

    /// Invert the color in the given color space, which defaults to RGB.
    ///
    /// The weight is a percentage and defaults to 100%. Results with less
    /// weight blend the inverted color with the original one. XYZ has no
    /// meaningful inverse.
    pub fn invert(
        &self,
        color: &str,
        weight: Option<Float>,
        space: Option<ColorSpace>,
    ) -> Result<String, ColorError> {
        use ColorSpace::*;

        self.run("invert", || {
            let color = Color::parse(color)?;
            let weight = ColorError::check("weight", weight.unwrap_or(100.0), 0.0, 100.0)? / 100.0;
            let space = space.unwrap_or(Rgb);

            let [c1, c2, c3] = coordinates_in(&color, space);
            let inverted = match space {
                Rgb => [255.0 - c1, 255.0 - c2, 255.0 - c3],
                Hsl => [normalize_hue(c1 + 180.0), c2, c3],
                Hwb => [normalize_hue(c1 + 180.0), c3, c2],
                Lab => [100.0 - c1, -c2, -c3],
                Lch | Oklch => [100.0 - c1, c2, normalize_hue(c3 + 180.0)],
                Xyz => {
                    return Err(ColorError::IncompatibleColorSpace(
                        "xyz colors cannot be inverted".to_string(),
                    ))
                }
            };

            let inverted = convert(space, Rgb, &inverted);
            let rgb = blend(&inverted, &color.to_rgb(), weight);
            Ok(self.output(&rgb_color(rgb, color.alpha())))
        })
    }

    /// Rotate the color's hue by 180 degrees in the given polar color space,
    /// which defaults to the options' polar space.
    pub fn complement(&self, color: &str, space: Option<ColorSpace>) -> Result<String, ColorError> {
        self.run("complement", || {
            let color = Color::parse(color)?;
            let space = space.unwrap_or(self.options.polar_space());
            let Some(hue) = space.hue_index() else {
                return Err(ColorError::IncompatibleColorSpace(format!(
                    "complement requires a polar color space, not {}",
                    space
                )));
            };

            let mut coordinates = coordinates_in(&color, space);
            coordinates[hue] = normalize_hue(coordinates[hue] + 180.0);
            let rgb = convert(space, ColorSpace::Rgb, &coordinates);
            Ok(self.output(&rgb_color(rgb, round_to(color.alpha(), 15))))
        })
    }

    /// Remove all saturation from the color.
    pub fn grayscale(&self, color: &str) -> Result<String, ColorError> {
        self.run("grayscale", || {
            let color = Color::parse(color)?;
            let [h, _, l] = coordinates_in(&color, ColorSpace::Hsl);
            let rgb = convert(ColorSpace::Hsl, ColorSpace::Rgb, &[h, 0.0, l]);
            Ok(self.output(&rgb_color(rgb, color.alpha())))
        })
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the value of the named channel.
    ///
    /// The channel name may be long or short. Without an explicit color
    /// space, it resolves in the color's own space first and in the name's
    /// home space second. Percentages and hues are rounded to ten digits after
    /// the decimal, chroma to two (or four for Oklch), and all other channels
    /// to whole numbers. A zero hue has no unit.
    ///
    /// ```
    /// # use sass_color::{ColorModule, SassNumber, Unit};
    /// # use sass_color::error::ColorError;
    /// let module = ColorModule::new();
    /// assert_eq!(module.channel("red", "lightness", None)?.to_string(), "50%");
    /// assert_eq!(module.channel("lime", "hue", None)?.to_string(), "120deg");
    /// assert_eq!(module.channel("red", "green", None)?, SassNumber::new(0.0, Unit::None));
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn channel(
        &self,
        color: &str,
        name: &str,
        space: Option<ColorSpace>,
    ) -> Result<SassNumber, ColorError> {
        self.run("channel", || {
            let color = Color::parse(color)?;
            Ok(channel_value(&color, resolve(&color, name, space)?))
        })
    }

    /// Determine whether the named channel is powerless.
    ///
    /// A hue is powerless when the color is achromatic, i.e., its HSL
    /// saturation or LCH/Oklch chroma is zero, or its HWB whiteness and
    /// blackness add up to 100% or more. Saturation is powerless when
    /// lightness is 0% or 100%. RGB channels, whiteness, and blackness are
    /// powerless for fully transparent colors.
    pub fn is_powerless(
        &self,
        color: &str,
        name: &str,
        space: Option<ColorSpace>,
    ) -> Result<bool, ColorError> {
        self.run("is-powerless", || {
            let color = Color::parse(color)?;
            let Resolved::Channel(space, index) = resolve(&color, name, space)? else {
                return Ok(false);
            };

            let key = space.keys()[index];
            let transparent = color.alpha() < EPSILON;
            let result = match key {
                Key::H => {
                    let coordinates = coordinates_in(&color, space);
                    match space {
                        ColorSpace::Hwb => coordinates[1] + coordinates[2] >= 100.0 - EPSILON,
                        ColorSpace::Lch | ColorSpace::Oklch => coordinates[1] < CHROMA_EPSILON,
                        _ => coordinates[1] < EPSILON,
                    }
                }
                Key::S => {
                    let lightness = coordinates_in(&color, ColorSpace::Hsl)[2];
                    lightness < EPSILON || lightness > 100.0 - EPSILON
                }
                Key::R | Key::G | Key::B | Key::W | Key::Bl => transparent,
                _ => false,
            };

            Ok(result)
        })
    }

    /// Determine whether the named channel is missing, i.e., was written as
    /// `none` or is not a channel of the color's own space. Alpha is never
    /// missing.
    pub fn is_missing(&self, color: &str, name: &str) -> Result<bool, ColorError> {
        self.run("is-missing", || {
            let color = Color::parse(color)?;
            match resolve(&color, name, None)? {
                Resolved::Alpha => Ok(false),
                Resolved::Channel(space, index) => {
                    Ok(space != color.space() || color.channels()[index].is_none())
                }
            }
        })
    }

    /// Determine whether two colors are the same, i.e., their RGB channels
    /// differ by less than 0.5 and their alpha values by less than 0.01.
    pub fn same(&self, color1: &str, color2: &str) -> Result<bool, ColorError> {
        self.run("same", || {
            let color1 = Color::parse(color1)?;
            let color2 = Color::parse(color2)?;
            let rgb1 = color1.to_rgb();
            let rgb2 = color2.to_rgb();

            Ok(rgb1.iter().zip(rgb2.iter()).all(|(c1, c2)| (c1 - c2).abs() < 0.5)
                && (color1.alpha() - color2.alpha()).abs() < 0.01)
        })
    }

    /// Map the color into the gamut of the given color space, which defaults
    /// to the color's own space. The only supported method is `clip`. The
    /// result keeps the color's original format.
    pub fn to_gamut(
        &self,
        color: &str,
        space: Option<ColorSpace>,
        method: &str,
    ) -> Result<String, ColorError> {
        self.run("to-gamut", || {
            if !method.trim().eq_ignore_ascii_case("clip") {
                return Err(ColorError::IncompatibleColorSpace(format!(
                    "gamut mapping method `{}` is not supported",
                    method.trim()
                )));
            }

            let color = Color::parse(color)?;
            let target = space.unwrap_or(color.space());
            let clipped = clip(target, &coordinates_in(&color, target));

            let channels = if target == color.space() {
                let mut channels = color.channels();
                for (index, channel) in channels.iter_mut().enumerate() {
                    *channel = channel.map(|_| clipped[index]);
                }
                channels
            } else {
                let [c1, c2, c3] = convert(target, color.space(), &clipped);
                [Some(c1), Some(c2), Some(c3)]
            };

            Ok(self.output(&Color::new(color.format(), channels, color.alpha())))
        })
    }

    /// Convert the color to the given color space, which defaults to the
    /// color's own space.
    ///
    /// ```
    /// # use sass_color::{ColorModule, ColorSpace};
    /// # use sass_color::error::ColorError;
    /// let module = ColorModule::new();
    /// assert_eq!(module.to_space("red", Some(ColorSpace::Hsl))?, "hsl(0, 100%, 50%)");
    /// assert_eq!(module.to_space("#ff000080", Some(ColorSpace::Hwb))?, "hwb(0 0% 0% / 0.5019607843)");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn to_space(&self, color: &str, space: Option<ColorSpace>) -> Result<String, ColorError> {
        self.run("to-space", || {
            let color = Color::parse(color)?;
            let space = space.unwrap_or(color.space());
            Ok(self.output(&color.to(space)))
        })
    }

    /// Format the color as `#AARRGGBB` with uppercase digits, as expected by
    /// Internet Explorer's filters.
    pub fn ie_hex_str(&self, color: &str) -> Result<String, ColorError> {
        self.run("ie-hex-str", || {
            let color = Color::parse(color)?;
            let [r, g, b] = color.to_24bit();
            let a = (color.alpha() * 255.0).round() as u8;
            Ok(format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b))
        })
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Create an RGB color. Channels are clamped to `0..=255`, while alpha
    /// must be within `0..=1`.
    pub fn rgb(&self, r: Float, g: Float, b: Float, alpha: Option<Float>) -> Result<String, ColorError> {
        self.run("rgb", || {
            let alpha = ColorError::check("alpha", alpha.unwrap_or(1.0), 0.0, 1.0)?;
            Ok(self.output(&Color::from_coordinates(ColorSpace::Rgb, [r, g, b], alpha)))
        })
    }

    /// Create an HSL color. Saturation and lightness must be within
    /// `0..=100`.
    pub fn hsl(&self, h: Float, s: Float, l: Float, alpha: Option<Float>) -> Result<String, ColorError> {
        self.run("hsl", || {
            let s = ColorError::check("saturation", s, 0.0, 100.0)?;
            let l = ColorError::check("lightness", l, 0.0, 100.0)?;
            let alpha = ColorError::check("alpha", alpha.unwrap_or(1.0), 0.0, 1.0)?;
            Ok(self.output(&Color::from_coordinates(ColorSpace::Hsl, [h, s, l], alpha)))
        })
    }

    /// Create an HWB color. Whiteness and blackness must be within `0..=100`.
    pub fn hwb(&self, h: Float, w: Float, bl: Float, alpha: Option<Float>) -> Result<String, ColorError> {
        self.run("hwb", || {
            let w = ColorError::check("whiteness", w, 0.0, 100.0)?;
            let bl = ColorError::check("blackness", bl, 0.0, 100.0)?;
            let alpha = ColorError::check("alpha", alpha.unwrap_or(1.0), 0.0, 1.0)?;
            Ok(self.output(&Color::from_coordinates(ColorSpace::Hwb, [h, w, bl], alpha)))
        })
    }

    /// Create a CIELAB color. Lightness is clamped to `0..=100`.
    pub fn lab(&self, l: Float, a: Float, b: Float, alpha: Option<Float>) -> Result<String, ColorError> {
        self.run("lab", || {
            let alpha = ColorError::check("alpha", alpha.unwrap_or(1.0), 0.0, 1.0)?;
            Ok(self.output(&Color::from_coordinates(ColorSpace::Lab, [l, a, b], alpha)))
        })
    }

    /// Create a CIE LCH color. Lightness is clamped to `0..=100` and chroma to
    /// `0..=150`.
    pub fn lch(&self, l: Float, c: Float, h: Float, alpha: Option<Float>) -> Result<String, ColorError> {
        self.run("lch", || {
            let alpha = ColorError::check("alpha", alpha.unwrap_or(1.0), 0.0, 1.0)?;
            Ok(self.output(&Color::from_coordinates(ColorSpace::Lch, [l, c, h], alpha)))
        })
    }

    /// Create an Oklch color. A lightness of at most one is a fraction.
    /// Chroma is clamped to `0..=0.4`.
    pub fn oklch(&self, l: Float, c: Float, h: Float, alpha: Option<Float>) -> Result<String, ColorError> {
        self.run("oklch", || {
            let alpha = ColorError::check("alpha", alpha.unwrap_or(1.0), 0.0, 1.0)?;
            Ok(self.output(&Color::oklch(l, c, h).with_alpha(alpha)))
        })
    }

    /// Create an XYZ color. Coordinates are clamped to `-1000..=1000`.
    pub fn xyz(&self, x: Float, y: Float, z: Float, alpha: Option<Float>) -> Result<String, ColorError> {
        self.run("xyz", || {
            let alpha = ColorError::check("alpha", alpha.unwrap_or(1.0), 0.0, 1.0)?;
            let coordinates = clip(ColorSpace::Xyz, &[x, y, z]);
            Ok(self.output(&Color::from_coordinates(ColorSpace::Xyz, coordinates, alpha)))
        })
    }
}

/// Compute the value of the resolved channel as a Sass number.
fn channel_value(color: &Color, resolved: Resolved) -> SassNumber {
    let Resolved::Channel(space, index) = resolved else {
        return SassNumber::unitless(round_to(color.alpha(), 10));
    };

    let value = if space == color.space() {
        color.coordinates()[index]
    } else {
        coordinates_in(color, space)[index]
    };

    let key = space.keys()[index];
    match key {
        Key::H => {
            let mut hue = round_to(value, 10);
            if hue >= 360.0 {
                hue -= 360.0;
            }
            if hue == 0.0 {
                SassNumber::unitless(0.0)
            } else {
                SassNumber::new(hue, Unit::Degrees)
            }
        }
        Key::C => {
            let digits = if space == ColorSpace::Oklch { 4 } else { 2 };
            SassNumber::unitless(round_to(value, digits))
        }
        key if key.is_percentage() => SassNumber::new(round_to(value, 10), Unit::Percent),
        _ => SassNumber::unitless(round_to(value, 0)),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Arguments, ColorModule};
    use crate::error::ColorError;
    use crate::number::{SassNumber, Unit};
    use crate::opt::Options;
    use crate::ColorSpace;

    #[test]
    fn test_adjust() -> Result<(), ColorError> {
        let module = ColorModule::new();
        let args = Arguments::new().with("$red", -50);
        assert_eq!(module.adjust("#ff0000", &args)?, "#cd0000");

        let args = Arguments::new().with("$red", -55);
        assert_eq!(module.adjust("#ff0000", &args)?, "#c80000");

        let args = Arguments::new().with("$hue", 120);
        assert_eq!(module.adjust("red", &args)?, "lime");

        let args = Arguments::new().with("$lightness", -25).with("$alpha", -0.5);
        assert_eq!(module.adjust("red", &args)?, "#80000080");

        let args = Arguments::new().with("$red", 1000);
        assert_eq!(module.adjust("black", &args)?, "red");

        let args = Arguments::new().with("$foo", 1);
        assert_eq!(
            module.adjust("red", &args),
            Err(ColorError::UnsupportedParameter("$foo".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_adjust_space() -> Result<(), ColorError> {
        let module = ColorModule::new();
        let args = Arguments::new().with("$hue", 180).with("$space", "lch");
        let result = module.adjust("red", &args)?;
        assert_ne!(result, "cyan");
        assert!(result.starts_with('#'));

        let args1 = Arguments::new().with("$chroma", -150);
        let args2 = Arguments::new().with("$chroma", -200);
        assert_eq!(module.adjust("red", &args1)?, module.adjust("red", &args2)?);

        let args = Arguments::new().with("$whiteness", 100);
        assert_eq!(module.adjust("red", &args)?, "white");
        Ok(())
    }

    #[test]
    fn test_change() -> Result<(), ColorError> {
        let module = ColorModule::new();
        let args = Arguments::new().with("$blue", 255);
        assert_eq!(module.change("red", &args)?, "magenta");

        let args = Arguments::new().with("$hue", 120);
        assert_eq!(module.change("#ff0000", &args)?, "lime");

        let args = Arguments::new().with("$hue", 240);
        assert_eq!(module.change("red", &args)?, "blue");

        let args = Arguments::new().with("$alpha", 0.5);
        assert_eq!(module.change("#336699", &args)?, "#33669980");

        let args = Arguments::new().with("$lightness", 120);
        assert!(matches!(
            module.change("red", &args),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_scale() -> Result<(), ColorError> {
        let module = ColorModule::new();
        let args = Arguments::new().with("$lightness", 50);
        assert_eq!(module.scale("red", &args)?, "#ff8080");

        let args = Arguments::new().with("$lightness", -50);
        assert_eq!(module.scale("red", &args)?, "maroon");

        let args = Arguments::new().with("$red", -100);
        assert_eq!(module.scale("red", &args)?, "black");

        let args = Arguments::new().with("$hue", 10);
        assert_eq!(
            module.scale("red", &args),
            Err(ColorError::UnsupportedParameter("$hue".to_string()))
        );

        let args = Arguments::new().with("$saturation", 150);
        assert!(matches!(
            module.scale("red", &args),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_mix() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.mix("red", "blue", None)?, "purple");
        assert_eq!(module.mix("red", "blue", Some(100.0))?, "red");
        assert_eq!(module.mix("red", "blue", Some(0.0))?, "blue");
        assert_eq!(module.mix("red", "blue", Some(0.25))?, "#4000bf");
        assert_eq!(module.mix("red", "blue", Some(25.0))?, "#4000bf");
        assert_eq!(module.mix("rgba(255, 0, 0, 0.5)", "blue", None)?, "#800080bf");
        assert!(matches!(
            module.mix("red", "blue", Some(-5.0)),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        assert!(matches!(
            module.mix("red", "bleu", None),
            Err(ColorError::InvalidColorSyntax(_))
        ));
        Ok(())
    }

    #[test]
    fn test_invert() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.invert("red", None, None)?, "cyan");
        assert_eq!(module.invert("white", None, None)?, "black");
        assert_eq!(module.invert("white", Some(50.0), None)?, "grey");
        assert_eq!(module.invert("red", Some(0.0), None)?, "red");
        assert_eq!(module.invert("red", None, Some(ColorSpace::Hsl))?, "cyan");
        assert_eq!(module.invert("hsl(0, 100%, 25%)", None, Some(ColorSpace::Hsl))?, "teal");
        assert_eq!(module.invert("hwb(0 20% 0%)", None, Some(ColorSpace::Hwb))?, "#00cccc");
        assert_eq!(module.invert("black", None, Some(ColorSpace::Lab))?, "white");
        assert!(matches!(
            module.invert("red", None, Some(ColorSpace::Xyz)),
            Err(ColorError::IncompatibleColorSpace(_))
        ));
        assert!(matches!(
            module.invert("red", Some(150.0), None),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_complement_grayscale() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.complement("red", None)?, "cyan");
        assert_eq!(module.complement("rgba(255, 0, 0, 0.5)", None)?, "#00ffff80");
        assert!(matches!(
            module.complement("red", Some(ColorSpace::Rgb)),
            Err(ColorError::IncompatibleColorSpace(_))
        ));

        assert_eq!(module.grayscale("red")?, "grey");
        assert_eq!(module.grayscale("white")?, "white");
        Ok(())
    }

    #[test]
    fn test_channel() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.channel("red", "red", None)?, SassNumber::unitless(255.0));
        assert_eq!(module.channel("red", "r", None)?, SassNumber::unitless(255.0));
        assert_eq!(module.channel("red", "hue", None)?, SassNumber::unitless(0.0));
        assert_eq!(
            module.channel("blue", "hue", None)?,
            SassNumber::new(240.0, Unit::Degrees)
        );
        assert_eq!(
            module.channel("red", "saturation", None)?,
            SassNumber::new(100.0, Unit::Percent)
        );
        assert_eq!(module.channel("rgb(0 0 0 / 0.25)", "alpha", None)?, SassNumber::unitless(0.25));
        assert_eq!(module.channel("red", "chroma", None)?, SassNumber::unitless(104.55));
        assert_eq!(
            module.channel("red", "chroma", Some(ColorSpace::Oklch))?,
            SassNumber::unitless(0.2577)
        );
        assert_eq!(
            module.channel("lab(50% 20 -30)", "b", None)?,
            SassNumber::unitless(-30.0)
        );
        assert_eq!(
            module.channel("red", "bogus", None),
            Err(ColorError::UnknownChannel("bogus".to_string()))
        );
        assert_eq!(
            module.channel("red", "chroma", Some(ColorSpace::Hsl)),
            Err(ColorError::UnknownChannel("chroma".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_powerless_missing() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert!(module.is_powerless("grey", "hue", None)?);
        assert!(!module.is_powerless("red", "hue", None)?);
        assert!(module.is_powerless("lch(50% 0 120)", "hue", None)?);
        assert!(module.is_powerless("hwb(120 60% 40%)", "hue", None)?);
        assert!(module.is_powerless("white", "saturation", None)?);
        assert!(module.is_powerless("rgba(255, 0, 0, 0)", "red", None)?);
        assert!(!module.is_powerless("red", "alpha", None)?);

        assert!(module.is_missing("hwb(none 20% 30%)", "hue")?);
        assert!(!module.is_missing("hwb(none 20% 30%)", "whiteness")?);
        assert!(!module.is_missing("red", "red")?);
        assert!(module.is_missing("red", "hue")?);
        assert!(!module.is_missing("red", "alpha")?);
        assert!(matches!(
            module.is_missing("red", "bogus"),
            Err(ColorError::UnknownChannel(_))
        ));
        Ok(())
    }

    #[test]
    fn test_same() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert!(module.same("red", "#ff0000")?);
        assert!(module.same("red", "hsl(0, 100%, 50%)")?);
        assert!(!module.same("red", "rgba(255, 0, 0, 0.5)")?);
        assert!(!module.same("red", "#fe0000")?);
        Ok(())
    }

    #[test]
    fn test_gamut_space() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.to_gamut("red", None, "clip")?, "red");
        assert_eq!(
            module.to_gamut("hwb(0 60% 60%)", None, "clip")?,
            "hwb(0 50% 50%)"
        );
        assert_eq!(
            module.to_gamut("lch(50% 150 30)", Some(ColorSpace::Rgb), "clip")?,
            "lch(53.25% 104.13 39.71)"
        );
        assert_eq!(
            module.to_gamut("hwb(0 60% 60%)", Some(ColorSpace::Rgb), "clip")?,
            "hwb(0 50% 50%)"
        );
        assert!(matches!(
            module.to_gamut("red", None, "bogus"),
            Err(ColorError::IncompatibleColorSpace(_))
        ));

        assert_eq!(module.to_space("red", Some(ColorSpace::Hsl))?, "hsl(0, 100%, 50%)");
        assert_eq!(module.to_space("red", Some(ColorSpace::Lab))?, "lab(53.24% 80.09 67.2)");
        assert_eq!(module.to_space("red", None)?, "red");
        assert_eq!(
            module.to_space("rgba(255, 0, 0, 0.5)", Some(ColorSpace::Hsl))?,
            "hsla(0, 100%, 50%, 0.5)"
        );
        Ok(())
    }

    #[test]
    fn test_ie_hex_str() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.ie_hex_str("red")?, "#FFFF0000");
        assert_eq!(module.ie_hex_str("rgba(0, 0, 255, 0.5)")?, "#800000FF");
        Ok(())
    }

    #[test]
    fn test_constructors() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.rgb(255.0, 0.0, 0.0, None)?, "red");
        assert_eq!(module.rgb(300.0, 0.0, 0.0, Some(0.5))?, "#ff000080");
        assert_eq!(module.hsl(120.0, 100.0, 50.0, None)?, "hsl(120, 100%, 50%)");
        assert!(matches!(
            module.hsl(120.0, 101.0, 50.0, None),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        assert_eq!(module.hwb(0.0, 0.0, 0.0, Some(0.5))?, "hwb(0 0% 0% / 0.5)");
        assert_eq!(module.lab(120.0, 0.0, 0.0, None)?, "lab(100% 0 0)");
        assert_eq!(module.lch(50.0, 200.0, 30.0, None)?, "lch(50% 150 30)");
        assert_eq!(module.oklch(0.5, 0.1, 30.0, None)?, "oklch(50% 0.1 30)");
        assert_eq!(module.xyz(2000.0, 0.0, 0.0, None)?, "color(xyz 1000 0 0)");
        assert!(matches!(
            module.rgb(0.0, 0.0, 0.0, Some(2.0)),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_options() -> Result<(), ColorError> {
        let module = ColorModule::with_options(Options::builder().prefer_names(false).build());
        assert_eq!(module.invert("red", None, None)?, "#00ffff");
        assert_eq!(module.normalize("RED")?, "#ff0000");

        let module = ColorModule::with_options(Options::with_detailed_log());
        assert_eq!(module.grayscale("red")?, "grey");
        assert!(module.grayscale("nope").is_err());
        Ok(())
    }
}
