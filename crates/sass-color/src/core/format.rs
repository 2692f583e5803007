use super::math::round_to;
use super::{convert, named, ColorSpace, TextFormat};
use crate::{Color, Float};

/// Format a number with at most the given number of digits after the decimal.
///
/// CSS mandates no trailing zeros whatsoever. But formatting floats with a
/// precision produces trailing zeros. Rounding avoids them, for the most part.
/// If the fractional part is zero, we do need an explicit precision, of zero!
pub(crate) fn format_number(value: Float, digits: i32) -> String {
    let value = if value.is_nan() {
        0.0
    } else {
        round_to(value, digits)
    };

    if value == value.trunc() {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a hue, wrapping a value that rounds to 360 back to zero.
fn format_hue(value: Float, digits: i32) -> String {
    let rounded = round_to(value, digits);
    format_number(if rounded >= 360.0 { rounded - 360.0 } else { rounded }, digits)
}

/// Format an alpha value.
#[inline]
fn format_alpha(alpha: Float) -> String {
    format_number(alpha, 10)
}

/// Round and clamp RGB coordinates to bytes.
fn to_bytes(coordinates: &[Float; 3]) -> [u8; 3] {
    coordinates.map(|c| {
        if c.is_nan() {
            0
        } else {
            c.round().clamp(0.0, 255.0) as u8
        }
    })
}

/// Format the color in the hexadecimal notation, using a color name instead
/// if the color is opaque, has a name, and names are preferred.
fn format_hex(color: &Color, rgb: [u8; 3], force_alpha: bool, prefer_names: bool) -> String {
    let [r, g, b] = rgb;

    if !force_alpha && !color.has_alpha() {
        if prefer_names {
            if let Some(name) = named::name_of(rgb) {
                return name.to_string();
            }
        }
        return format!("#{:02x}{:02x}{:02x}", r, g, b);
    }

    let a = (color.alpha() * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}

/// Format the color in the given text format.
///
/// This function converts the color to the format's color space first. Formats
/// with an alpha variant pick the variant based on the color's alpha, except
/// for `Hexa`, which always has eight digits. A missing channel serializes as
/// zero. LCH and Oklch lightness is written as the stored percentage, even
/// when it is at most 1.
pub(crate) fn format(color: &Color, target: TextFormat, prefer_names: bool) -> String {
    use TextFormat::*;

    let space = target.space();
    let coordinates = if space == color.space() {
        color.coordinates()
    } else {
        convert(color.space(), space, &color.coordinates())
    };
    let [c1, c2, c3] = coordinates;
    let alpha = color.has_alpha();

    match target {
        Hex | Rgb | Rgba => format_hex(color, to_bytes(&coordinates), false, prefer_names),
        Hexa => format_hex(color, to_bytes(&coordinates), true, prefer_names),
        Hsl | Hsla => {
            let (h, s, l) = (format_hue(c1, 10), format_number(c2, 10), format_number(c3, 10));
            if alpha {
                format!("hsla({}, {}%, {}%, {})", h, s, l, format_alpha(color.alpha()))
            } else {
                format!("hsl({}, {}%, {}%)", h, s, l)
            }
        }
        Hwb => {
            let (h, w, b) = (format_hue(c1, 0), format_number(c2, 0), format_number(c3, 0));
            if alpha {
                format!("hwb({} {}% {}% / {})", h, w, b, format_alpha(color.alpha()))
            } else {
                format!("hwb({} {}% {}%)", h, w, b)
            }
        }
        Lab | Laba => {
            let (l, a, b) = (format_number(c1, 2), format_number(c2, 2), format_number(c3, 2));
            if alpha {
                format!("lab({}% {} {} / {})", l, a, b, format_alpha(color.alpha()))
            } else {
                format!("lab({}% {} {})", l, a, b)
            }
        }
        Lch | Oklch => {
            let chroma_digits = if space == ColorSpace::Oklch { 4 } else { 2 };
            let (l, c, h) = (
                format_number(c1, 2),
                format_number(c2, chroma_digits),
                format_hue(c3, 2),
            );
            let name = if space == ColorSpace::Oklch { "oklch" } else { "lch" };
            if alpha {
                format!("{}({}% {} {} / {})", name, l, c, h, format_alpha(color.alpha()))
            } else {
                format!("{}({}% {} {})", name, l, c, h)
            }
        }
        Xyz | Xyza => {
            let (x, y, z) = (format_number(c1, 10), format_number(c2, 10), format_number(c3, 10));
            if alpha {
                format!("color(xyz {} {} {} / {})", x, y, z, format_alpha(color.alpha()))
            } else {
                format!("color(xyz {} {} {})", x, y, z)
            }
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format, format_number};
    use crate::core::TextFormat::*;
    use crate::error::ColorError;
    use crate::Color;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0, 10), "1");
        assert_eq!(format_number(0.5, 10), "0.5");
        assert_eq!(format_number(-0.0001, 2), "0");
        assert_eq!(format_number(53.2408, 2), "53.24");
        assert_eq!(format_number(2.0 / 3.0, 10), "0.6666666667");
    }

    #[test]
    fn test_format_rgb() -> Result<(), ColorError> {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(format(&red, Rgb, true), "red");
        assert_eq!(format(&red, Rgb, false), "#ff0000");
        assert_eq!(format(&red, Hex, true), "red");
        assert_eq!(format(&red, Hexa, true), "#ff0000ff");
        assert_eq!(format(&Color::rgb(18, 52, 86), Rgb, true), "#123456");

        let translucent = red.with_alpha(0.5);
        assert_eq!(format(&translucent, Rgba, true), "#ff000080");
        assert_eq!(format(&translucent, Hex, true), "#ff000080");
        Ok(())
    }

    #[test]
    fn test_format_polar() -> Result<(), ColorError> {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(format(&red, Hsl, true), "hsl(0, 100%, 50%)");
        assert_eq!(
            format(&red.with_alpha(0.5), Hsla, true),
            "hsla(0, 100%, 50%, 0.5)"
        );
        assert_eq!(format(&red, Hwb, true), "hwb(0 0% 0%)");
        assert_eq!(format(&red.with_alpha(0.25), Hwb, true), "hwb(0 0% 0% / 0.25)");
        assert_eq!(format(&red, Lch, true), "lch(53.24% 104.55 40)");
        assert_eq!(format(&red, Oklch, true), "oklch(62.8% 0.2577 29.23)");
        assert_eq!(format(&Color::hsl(359.999999999999, 50, 50), Hsl, true), "hsl(0, 50%, 50%)");
        Ok(())
    }

    #[test]
    fn test_format_cie() -> Result<(), ColorError> {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(format(&red, Lab, true), "lab(53.24% 80.09 67.2)");
        assert_eq!(
            format(&Color::lab(50, 10, -10).with_alpha(0.5), Laba, true),
            "lab(50% 10 -10 / 0.5)"
        );
        assert_eq!(format(&Color::xyz(41.24, 21.26, 1.93), Xyz, true), "color(xyz 41.24 21.26 1.93)");

        let color: Color = "hwb(none 20% 30%)".parse()?;
        assert_eq!(format(&color, Hwb, true), "hwb(0 20% 30%)");
        Ok(())
    }
}
