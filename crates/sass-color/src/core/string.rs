use super::gamut::{max_chroma, XYZ_LIMIT};
use super::grammar::{Fields, Token, Unit};
use super::math::{clamp, normalize_hue};
use super::{named, ColorSpace, TextFormat};
use crate::error::ColorError;
use crate::{Color, Float};

/// Parse the numeric literal of a token that has already been lexed. The
/// literal must denote a finite number.
fn parse_number(number: &str, text: &str) -> Result<Float, ColorError> {
    number
        .parse::<Float>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ColorError::InvalidColorSyntax(text.to_string()))
}

/// Parse a hue, converting angle units to degrees.
fn parse_hue(token: Token<'_>, text: &str) -> Result<Option<Float>, ColorError> {
    let Token::Number(number, unit) = token else {
        return Ok(None);
    };

    let value = parse_number(number, text)?;
    let degrees = match unit {
        Unit::Rad => value.to_degrees(),
        Unit::Grad => value * 0.9,
        Unit::Turn => value * 360.0,
        _ => value,
    };

    Ok(Some(normalize_hue(degrees)))
}

/// Parse a percentage with optional percent sign, validating its range.
fn parse_percent(token: Token<'_>, channel: &str, text: &str) -> Result<Option<Float>, ColorError> {
    let Token::Number(number, _) = token else {
        return Ok(None);
    };

    let value = parse_number(number, text)?;
    ColorError::check(channel, value, 0.0, 100.0).map(Some)
}

/// Parse a value that may be a percentage of the given reference value.
fn parse_scaled(token: Token<'_>, reference: Float, text: &str) -> Result<Option<Float>, ColorError> {
    let Token::Number(number, unit) = token else {
        return Ok(None);
    };

    let value = parse_number(number, text)?;
    Ok(Some(if unit == Unit::Percent {
        value / 100.0 * reference
    } else {
        value
    }))
}

/// Parse and validate the alpha value. Percentages are scaled to unit range.
fn parse_alpha(token: Option<Token<'_>>, text: &str) -> Result<Float, ColorError> {
    let Some(Token::Number(number, unit)) = token else {
        return Ok(1.0);
    };

    let mut value = parse_number(number, text)?;
    if unit == Unit::Percent {
        value /= 100.0;
    }

    ColorError::check("alpha", value, 0.0, 1.0)
}

/// Parse hashed hexadecimal notation with 3, 4, 6, or 8 digits.
fn parse_hex(digits: &str, text: &str) -> Result<Color, ColorError> {
    let expanded: String = if digits.len() <= 4 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let mut bytes = [0_u8; 4];
    let mut count = 0;
    for (index, chunk) in expanded.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk)
            .map_err(|_| ColorError::InvalidColorSyntax(text.to_string()))?;
        bytes[index] = u8::from_str_radix(pair, 16)
            .map_err(|_| ColorError::InvalidColorSyntax(text.to_string()))?;
        count += 1;
    }

    let alpha = if count == 4 {
        bytes[3] as Float / 255.0
    } else {
        1.0
    };

    let [r, g, b, _] = bytes;
    Ok(Color::from_coordinates(
        ColorSpace::Rgb,
        [r as Float, g as Float, b as Float],
        alpha,
    ))
}

/// Convert the tokens matched by a format's grammar into a color record.
fn extract(format: TextFormat, fields: Fields<'_>, text: &str) -> Result<Color, ColorError> {
    use TextFormat::*;

    let (channels, alpha) = match fields {
        Fields::Hex(digits) => return parse_hex(digits, text),
        Fields::Function { channels, alpha } => (channels, alpha),
    };

    let alpha = parse_alpha(alpha, text)?;
    let [t1, t2, t3] = channels;

    let (format, values) = match format {
        Rgb | Rgba => {
            let byte = |token| -> Result<Option<Float>, ColorError> {
                Ok(parse_scaled(token, 255.0, text)?.map(|v| clamp(v, 0.0, 255.0).round()))
            };
            (
                TextFormat::for_space(ColorSpace::Rgb, alpha < 1.0),
                [byte(t1)?, byte(t2)?, byte(t3)?],
            )
        }
        Hsl | Hsla => (
            TextFormat::for_space(ColorSpace::Hsl, alpha < 1.0),
            [
                parse_hue(t1, text)?,
                parse_percent(t2, "saturation", text)?,
                parse_percent(t3, "lightness", text)?,
            ],
        ),
        Hwb => (
            Hwb,
            [
                parse_hue(t1, text)?,
                parse_percent(t2, "whiteness", text)?,
                parse_percent(t3, "blackness", text)?,
            ],
        ),
        Lab | Laba => (
            format,
            [
                parse_scaled(t1, 100.0, text)?.map(|v| clamp(v, 0.0, 100.0)),
                parse_scaled(t2, 125.0, text)?,
                parse_scaled(t3, 125.0, text)?,
            ],
        ),
        Lch | Oklch => {
            let space = format.space();
            let max = max_chroma(space);

            // A bare Oklch lightness of at most one is a fraction.
            let lightness = match t1 {
                Token::Number(number, Unit::None) if space == ColorSpace::Oklch => {
                    let value = parse_number(number, text)?;
                    Some(if value <= 1.0 { value * 100.0 } else { value })
                }
                _ => parse_scaled(t1, 100.0, text)?,
            };

            (
                format,
                [
                    lightness.map(|v| clamp(v, 0.0, 100.0)),
                    parse_scaled(t2, max, text)?.map(|v| clamp(v, 0.0, max)),
                    parse_hue(t3, text)?,
                ],
            )
        }
        Xyz | Xyza => {
            let coordinate = |token| -> Result<Option<Float>, ColorError> {
                Ok(parse_scaled(token, 100.0, text)?.map(|v| clamp(v, -XYZ_LIMIT, XYZ_LIMIT)))
            };
            (format, [coordinate(t1)?, coordinate(t2)?, coordinate(t3)?])
        }
        Hex | Hexa => return Err(ColorError::InvalidColorSyntax(text.to_string())),
    };

    Ok(Color::new(format, values, alpha))
}

/// Parse the color.
///
/// This function trims and lowercases the text before first checking for a
/// named color and then trying each format's grammar in turn. The first
/// grammar to match determines the format.
pub(crate) fn parse(s: &str) -> Result<Color, ColorError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let text = lowercase.as_str();

    if text.is_empty() {
        return Err(ColorError::InvalidColorSyntax(s.to_string()));
    } else if text == "transparent" {
        return Ok(Color::from_coordinates(ColorSpace::Rgb, [0.0, 0.0, 0.0], 0.0));
    } else if let Some([r, g, b]) = named::lookup(text) {
        return Ok(Color::rgb(r, g, b));
    }

    for format in TextFormat::ALL {
        if let Some(fields) = format.grammar().matches(text) {
            return extract(format, fields, s);
        }
    }

    Err(ColorError::InvalidColorSyntax(s.to_string()))
}

// ====================================================================================================================
