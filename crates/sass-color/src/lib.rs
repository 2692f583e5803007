//! # Sass Color
//!
//! Sass color brings CSS color syntax and the Sass color module to Rust.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! The crate's main abstractions are:
//!
//!   * [`Color`] implements **colors as written in stylesheets** by combining a
//!     [`TextFormat`] with three optional [`Float`] channels and an alpha
//!     value. A missing channel, written as `none`, has no value. The format
//!     determines the [`ColorSpace`] and how the color is serialized again.
//!     Colors can be parsed from and formatted as 13 text formats, converted
//!     between seven color spaces, and clipped to their gamuts.
//!   * [`ColorModule`] implements the **operations of the Sass color module**,
//!     i.e., adjusting, changing, and scaling channels, mixing, inverting,
//!     complementing, and graying colors, querying channels, converting
//!     between color spaces, and mapping colors into gamut. It also implements
//!     the legacy global functions, such as `lighten` and `darken`.
//!   * [`ColorError`](error::ColorError) captures **all the ways color
//!     operations can fail**.
//!   * [`Options`](opt::Options) configure a color module, including the
//!     **diagnostic logging** to standard error.
//!
//! Parsing is lenient in the ways stylesheets are lenient: Surrounding
//! whitespace and letter case do not matter, hexadecimal colors may have
//! three, four, six, or eight digits, the 148 CSS color names are recognized,
//! and RGB channels outside their range are clamped. Formatting is strict:
//! Numbers have no trailing zeros, RGB colors use hexadecimal notation or,
//! where possible, a color name.
//!
//! ```
//! # use sass_color::{Color, ColorSpace, TextFormat};
//! # use sass_color::error::ColorError;
//! let tomato: Color = "rgb(255 99 71)".parse()?;
//! assert_eq!(tomato.to_string(), "tomato");
//! assert_eq!(tomato.to_css(TextFormat::Hsl), "hsl(9.1304347826, 100%, 63.9215686275%)");
//!
//! let dimmed = tomato.with_alpha(0.5);
//! assert_eq!(dimmed.to_string(), "#ff634780");
//! assert_eq!(dimmed.to(ColorSpace::Oklch).space(), ColorSpace::Oklch);
//! # Ok::<(), ColorError>(())
//! ```
//!
//!
//! ## 2. The Color Module
//!
//! [`ColorModule`] operates on colors as text and returns results as text,
//! [`SassNumber`]s, or booleans. Keyword arguments for adjusting, changing,
//! and scaling colors are collected as [`Arguments`].
//!
//! ```
//! # use sass_color::{Arguments, ColorModule};
//! # use sass_color::error::ColorError;
//! # use sass_color::opt::Options;
//! let module = ColorModule::with_options(Options::with_log());
//! let args = Arguments::new().with("$lightness", -25).with("$alpha", -0.25);
//! assert_eq!(module.adjust("#f00", &args)?, "#800000bf");
//! assert_eq!(module.channel("#f00", "hue", None)?.to_string(), "0");
//! assert!(module.is_powerless("#808080", "hue", None)?);
//! # Ok::<(), ColorError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Sass color supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls the Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//!
//! ## 4. Acknowledgements
//!
//! The conversions between sRGB, XYZ, and CIELAB use [Bruce
//! Lindbloom](http://www.brucelindbloom.com)'s matrices and formulae, and the
//! conversions to and from Oklab use [Björn
//! Ottosson](https://bottosson.github.io/posts/oklab/)'s. The color names
//! are those of [CSS Color 4](https://www.w3.org/TR/css-color-4/). Thank you!
//!
//!

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod module;
mod number;
mod object;
pub mod opt;
#[cfg(feature = "pyffi")]
mod py;

pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ChannelName, ColorSpace, Key, TextFormat};
pub use module::{Argument, Arguments, ColorModule};
pub use number::{SassNumber, Unit};
pub use object::Color;

/// Parse the text as a color.
///
/// This function is equivalent to [`Color::parse`] and fails for text that
/// matches neither a color name nor one of the 13 text formats, or has
/// channel values outside their range.
///
/// ```
/// # use sass_color::{format_color, parse_color, TextFormat};
/// # use sass_color::error::ColorError;
/// let color = parse_color("hsl(0, 100%, 50%)")?;
/// assert_eq!(color.format(), TextFormat::Hsl);
/// assert_eq!(format_color(&color), "hsl(0, 100%, 50%)");
/// assert!(parse_color("hsl(0, 150%, 50%)").is_err());
/// # Ok::<(), ColorError>(())
/// ```
pub fn parse_color(text: &str) -> Result<Color, error::ColorError> {
    Color::parse(text)
}

/// Format the color in its own text format, using a color name where
/// possible.
pub fn format_color(color: &Color) -> String {
    color.to_string()
}

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn sass_color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ColorSpace>()?;
    m.add_class::<TextFormat>()?;
    py::register(m)?;
    Ok(())
}
