#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::ColorSpace;
use crate::error::ColorError;

/// The textual formats of colors.
///
/// A color remembers the format it was written in, so that manipulations can
/// produce results in the same family of formats. The formats are listed in
/// the order in which the parser tries their grammars.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "sass_color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextFormat {
    Hex,
    Hexa,
    Hsl,
    Hsla,
    Hwb,
    Lab,
    Laba,
    Lch,
    Oklch,
    Rgb,
    Rgba,
    Xyz,
    Xyza,
}

/// The long and short names of a color channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChannelName {
    pub long: &'static str,
    pub short: &'static str,
}

impl ChannelName {
    const fn new(long: &'static str, short: &'static str) -> Self {
        Self { long, short }
    }

    /// Determine whether the given name is this channel's long or short name.
    pub fn matches(&self, name: &str) -> bool {
        self.long == name || self.short == name
    }
}

const RGB_CHANNELS: [ChannelName; 3] = [
    ChannelName::new("red", "r"),
    ChannelName::new("green", "g"),
    ChannelName::new("blue", "b"),
];

const HSL_CHANNELS: [ChannelName; 3] = [
    ChannelName::new("hue", "h"),
    ChannelName::new("saturation", "s"),
    ChannelName::new("lightness", "l"),
];

const HWB_CHANNELS: [ChannelName; 3] = [
    ChannelName::new("hue", "h"),
    ChannelName::new("whiteness", "w"),
    ChannelName::new("blackness", "bl"),
];

const LAB_CHANNELS: [ChannelName; 3] = [
    ChannelName::new("lightness", "l"),
    ChannelName::new("a", "a"),
    ChannelName::new("b", "b"),
];

const LCH_CHANNELS: [ChannelName; 3] = [
    ChannelName::new("lightness", "l"),
    ChannelName::new("chroma", "c"),
    ChannelName::new("hue", "h"),
];

const XYZ_CHANNELS: [ChannelName; 3] = [
    ChannelName::new("x", "x"),
    ChannelName::new("y", "y"),
    ChannelName::new("z", "z"),
];

#[cfg_attr(feature = "pyffi", pymethods)]
impl TextFormat {
    /// Get the format's name.
    pub const fn name(&self) -> &'static str {
        use TextFormat::*;

        match *self {
            Hex => "hex",
            Hexa => "hexa",
            Hsl => "hsl",
            Hsla => "hsla",
            Hwb => "hwb",
            Lab => "lab",
            Laba => "laba",
            Lch => "lch",
            Oklch => "oklch",
            Rgb => "rgb",
            Rgba => "rgba",
            Xyz => "xyz",
            Xyza => "xyza",
        }
    }

    /// Get the color space of this format.
    pub const fn space(&self) -> ColorSpace {
        use TextFormat::*;

        match *self {
            Hex | Hexa | Rgb | Rgba => ColorSpace::Rgb,
            Hsl | Hsla => ColorSpace::Hsl,
            Hwb => ColorSpace::Hwb,
            Lab | Laba => ColorSpace::Lab,
            Lch => ColorSpace::Lch,
            Oklch => ColorSpace::Oklch,
            Xyz | Xyza => ColorSpace::Xyz,
        }
    }

    /// Determine whether this format is polar, i.e., has a hue channel.
    pub const fn is_polar(&self) -> bool {
        self.space().is_polar()
    }

    /// Determine whether this format is a legacy format, which accepts comma
    /// separated arguments.
    pub const fn is_legacy(&self) -> bool {
        use TextFormat::*;

        matches!(*self, Hex | Hexa | Hsl | Hsla | Hwb | Rgb | Rgba)
    }

    /// Get the base format, i.e., the format without alpha.
    pub const fn base(&self) -> TextFormat {
        use TextFormat::*;

        match *self {
            Hexa => Hex,
            Hsla => Hsl,
            Laba => Lab,
            Rgba => Rgb,
            Xyza => Xyz,
            _ => *self,
        }
    }

    /// Determine whether the two formats share the same base format.
    pub const fn is_compatible_with(&self, other: TextFormat) -> bool {
        self.base() as u8 == other.base() as u8
    }

    /// Create a human-readable representation for this text format. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl TextFormat {
    /// All text formats, in the order in which the parser tries them.
    pub const ALL: [TextFormat; 13] = [
        Self::Hex,
        Self::Hexa,
        Self::Hsl,
        Self::Hsla,
        Self::Hwb,
        Self::Lab,
        Self::Laba,
        Self::Lch,
        Self::Oklch,
        Self::Rgb,
        Self::Rgba,
        Self::Xyz,
        Self::Xyza,
    ];

    /// Get the format for colors in the given color space, picking the alpha
    /// variant if there is one and the color is translucent.
    pub const fn for_space(space: ColorSpace, has_alpha: bool) -> TextFormat {
        match (space, has_alpha) {
            (ColorSpace::Rgb, false) => Self::Rgb,
            (ColorSpace::Rgb, true) => Self::Rgba,
            (ColorSpace::Hsl, false) => Self::Hsl,
            (ColorSpace::Hsl, true) => Self::Hsla,
            (ColorSpace::Hwb, _) => Self::Hwb,
            (ColorSpace::Lab, false) => Self::Lab,
            (ColorSpace::Lab, true) => Self::Laba,
            (ColorSpace::Lch, _) => Self::Lch,
            (ColorSpace::Oklch, _) => Self::Oklch,
            (ColorSpace::Xyz, false) => Self::Xyz,
            (ColorSpace::Xyz, true) => Self::Xyza,
        }
    }

    /// Get the long and short names of this format's channels, in order.
    ///
    /// Hexadecimal formats have no channel names.
    pub const fn channels(&self) -> &'static [ChannelName] {
        use TextFormat::*;

        match *self {
            Hex | Hexa => &[],
            Rgb | Rgba => &RGB_CHANNELS,
            Hsl | Hsla => &HSL_CHANNELS,
            Hwb => &HWB_CHANNELS,
            Lab | Laba => &LAB_CHANNELS,
            Lch | Oklch => &LCH_CHANNELS,
            Xyz | Xyza => &XYZ_CHANNELS,
        }
    }

    /// Get the channel names of the given color space.
    pub const fn space_channels(space: ColorSpace) -> &'static [ChannelName; 3] {
        match space {
            ColorSpace::Rgb => &RGB_CHANNELS,
            ColorSpace::Hsl => &HSL_CHANNELS,
            ColorSpace::Hwb => &HWB_CHANNELS,
            ColorSpace::Lab => &LAB_CHANNELS,
            ColorSpace::Lch | ColorSpace::Oklch => &LCH_CHANNELS,
            ColorSpace::Xyz => &XYZ_CHANNELS,
        }
    }

    /// Get the lexical grammar of this format.
    pub(crate) const fn grammar(&self) -> Grammar {
        use Slot::*;
        use TextFormat::*;

        let (function, slots, alpha) = match *self {
            Hex | Hexa => return Grammar::Hex { with_alpha: matches!(*self, Hexa) },
            Hsl => ("hsl", [Hue, Percent, Percent], AlphaRule::Optional { percent: true }),
            Hsla => ("hsla", [Hue, Percent, Percent], AlphaRule::Required { percent: true }),
            Hwb => ("hwb", [Hue, Percent, Percent], AlphaRule::Optional { percent: true }),
            Lab => ("lab", [Percent, Number, Number], AlphaRule::Forbidden),
            Laba => ("lab", [Percent, Number, Number], AlphaRule::Required { percent: true }),
            Lch => ("lch", [Percent, Percent, Hue], AlphaRule::Optional { percent: true }),
            Oklch => ("oklch", [Percent, Percent, Hue], AlphaRule::Optional { percent: true }),
            Rgb => ("rgb", [Percent, Percent, Percent], AlphaRule::Optional { percent: false }),
            Rgba => ("rgba", [Percent, Percent, Percent], AlphaRule::Required { percent: true }),
            Xyz => ("color", [Number, Number, Number], AlphaRule::Forbidden),
            Xyza => ("color", [Number, Number, Number], AlphaRule::Required { percent: true }),
        };

        Grammar::Function {
            function,
            space_idents: if matches!(*self, Xyz | Xyza) {
                &["xyz", "xyz-d65"]
            } else {
                &[]
            },
            slots,
            alpha,
            commas: self.is_legacy(),
            none: !self.is_legacy() || matches!(*self, Hwb),
        }
    }
}

impl std::str::FromStr for TextFormat {
    type Err = ColorError;

    /// Parse the name of a text format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| ColorError::UnsupportedParameter(format!("format `{}`", s.trim())))
    }
}

impl std::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
// Lexical Grammar

/// The unit suffix of a numeric token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Unit {
    None,
    Percent,
    Deg,
    Rad,
    Grad,
    Turn,
}

/// A lexical token in a channel position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Token<'a> {
    /// The `none` keyword.
    Missing,
    /// A number literal with its unit.
    Number(&'a str, Unit),
}

impl<'a> Token<'a> {
    /// Lex a single token.
    fn lex(s: &'a str) -> Option<Self> {
        if s == "none" {
            return Some(Self::Missing);
        }

        let bytes = s.as_bytes();
        let mut index = 0;

        if index < bytes.len() && (bytes[index] == b'+' || bytes[index] == b'-') {
            index += 1;
        }

        let mut digits = 0;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
            digits += 1;
        }
        if index < bytes.len() && bytes[index] == b'.' {
            index += 1;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                index += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return None;
        }

        // Only treat e as exponent if digits follow.
        if index < bytes.len() && bytes[index] == b'e' {
            let mut cursor = index + 1;
            if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
                cursor += 1;
            }
            let start = cursor;
            while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                cursor += 1;
            }
            if start < cursor {
                index = cursor;
            }
        }

        let (number, suffix) = s.split_at(index);
        let unit = match suffix {
            "" => Unit::None,
            "%" => Unit::Percent,
            "deg" => Unit::Deg,
            "rad" => Unit::Rad,
            "grad" => Unit::Grad,
            "turn" => Unit::Turn,
            _ => return None,
        };

        Some(Self::Number(number, unit))
    }
}

/// The kind of token accepted in a channel position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// A bare number.
    Number,
    /// A bare number or percentage.
    Percent,
    /// A bare number or an angle.
    Hue,
}

impl Slot {
    fn accepts(&self, unit: Unit) -> bool {
        match *self {
            Self::Number => unit == Unit::None,
            Self::Percent => matches!(unit, Unit::None | Unit::Percent),
            Self::Hue => !matches!(unit, Unit::Percent),
        }
    }
}

/// The grammar rule for the alpha component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AlphaRule {
    Forbidden,
    Optional { percent: bool },
    Required { percent: bool },
}

/// The lexical grammar of a text format.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Grammar {
    /// Hashed hexadecimal notation with 3 or 6 digits, or with 4 or 8 digits
    /// when including alpha.
    Hex { with_alpha: bool },
    /// Functional notation.
    Function {
        function: &'static str,
        space_idents: &'static [&'static str],
        slots: [Slot; 3],
        alpha: AlphaRule,
        commas: bool,
        none: bool,
    },
}

/// The fields of a color matched by a grammar.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Fields<'a> {
    Hex(&'a str),
    Function {
        channels: [Token<'a>; 3],
        alpha: Option<Token<'a>>,
    },
}

impl Grammar {
    /// Match the trimmed, lowercase text against this grammar.
    pub(crate) fn matches<'a>(&self, s: &'a str) -> Option<Fields<'a>> {
        match *self {
            Self::Hex { with_alpha } => {
                let digits = s.strip_prefix('#')?;
                let expected: &[usize] = if with_alpha { &[4, 8] } else { &[3, 6] };
                if expected.contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                    Some(Fields::Hex(digits))
                } else {
                    None
                }
            }
            Self::Function {
                function,
                space_idents,
                slots,
                alpha,
                commas,
                none,
            } => {
                let body = s
                    .strip_prefix(function)?
                    .trim_start()
                    .strip_prefix('(')?
                    .strip_suffix(')')?
                    .trim();

                // Split off a slash-separated alpha first.
                let (main, slashed) = match body.split_once('/') {
                    Some((main, alpha)) => (main.trim(), Some(alpha.trim())),
                    None => (body, None),
                };

                let mut items: Vec<&str> = if main.contains(',') {
                    if !commas {
                        return None;
                    }
                    main.split(',').map(str::trim).collect()
                } else {
                    main.split_whitespace().collect()
                };

                if !space_idents.is_empty() {
                    if items.is_empty() || !space_idents.contains(&items[0]) {
                        return None;
                    }
                    items.remove(0);
                }

                let alpha_text = match (items.len(), slashed) {
                    (3, alpha) => alpha,
                    (4, None) if commas && main.contains(',') => items.pop(),
                    _ => return None,
                };

                let mut channels = [Token::Missing; 3];
                for (index, item) in items.iter().enumerate() {
                    let token = Token::lex(item)?;
                    match token {
                        Token::Missing if !none => return None,
                        Token::Number(_, unit) if !slots[index].accepts(unit) => return None,
                        _ => {}
                    }
                    channels[index] = token;
                }

                let alpha = match (alpha, alpha_text) {
                    (AlphaRule::Forbidden, Some(_)) => return None,
                    (AlphaRule::Required { .. }, None) => return None,
                    (_, None) => None,
                    (AlphaRule::Optional { percent } | AlphaRule::Required { percent }, Some(text)) => {
                        match Token::lex(text)? {
                            Token::Number(number, Unit::None) => Some(Token::Number(number, Unit::None)),
                            Token::Number(number, Unit::Percent) if percent => {
                                Some(Token::Number(number, Unit::Percent))
                            }
                            _ => return None,
                        }
                    }
                };

                Some(Fields::Function { channels, alpha })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Fields, TextFormat, Token, Unit};

    #[test]
    fn test_lex() {
        assert_eq!(Token::lex("none"), Some(Token::Missing));
        assert_eq!(Token::lex("12"), Some(Token::Number("12", Unit::None)));
        assert_eq!(Token::lex("-.5%"), Some(Token::Number("-.5", Unit::Percent)));
        assert_eq!(Token::lex("1e2deg"), Some(Token::Number("1e2", Unit::Deg)));
        assert_eq!(Token::lex("0.25turn"), Some(Token::Number("0.25", Unit::Turn)));
        assert_eq!(Token::lex("3px"), None);
        assert_eq!(Token::lex("."), None);
        assert_eq!(Token::lex("abc"), None);
    }

    #[test]
    fn test_hex() {
        let grammar = TextFormat::Hex.grammar();
        assert_eq!(grammar.matches("#abc"), Some(Fields::Hex("abc")));
        assert_eq!(grammar.matches("#aabbcc"), Some(Fields::Hex("aabbcc")));
        assert_eq!(grammar.matches("#aabbccdd"), None);
        assert_eq!(grammar.matches("#abg"), None);

        let grammar = TextFormat::Hexa.grammar();
        assert_eq!(grammar.matches("#abcd"), Some(Fields::Hex("abcd")));
        assert_eq!(grammar.matches("#abc"), None);
    }

    #[test]
    fn test_function() {
        let rgb = TextFormat::Rgb.grammar();
        assert!(rgb.matches("rgb(1, 2, 3)").is_some());
        assert!(rgb.matches("rgb(1 2 3)").is_some());
        assert!(rgb.matches("rgb(1 2 3 / 0.5)").is_some());
        assert!(rgb.matches("rgb(1, 2, 3, 0.5)").is_some());
        assert!(rgb.matches("rgb(1, 2, 3, 50%)").is_none());
        assert!(rgb.matches("rgba(1, 2, 3, 0.5)").is_none());
        assert!(rgb.matches("rgb(1 2)").is_none());
        assert!(rgb.matches("rgb(none 2 3)").is_none());

        let rgba = TextFormat::Rgba.grammar();
        assert!(rgba.matches("rgba(1, 2, 3, 50%)").is_some());
        assert!(rgba.matches("rgba(1, 2, 3)").is_none());

        let lab = TextFormat::Lab.grammar();
        let laba = TextFormat::Laba.grammar();
        assert!(lab.matches("lab(50% 40 59.5)").is_some());
        assert!(lab.matches("lab(50% 40 59.5 / 0.5)").is_none());
        assert!(lab.matches("lab(50%, 40, 59.5)").is_none());
        assert!(laba.matches("lab(50% 40 59.5 / 0.5)").is_some());

        let xyz = TextFormat::Xyz.grammar();
        assert!(xyz.matches("color(xyz 0.1 0.2 0.3)").is_some());
        assert!(xyz.matches("color(xyz-d65 0.1 none 0.3)").is_some());
        assert!(xyz.matches("color(srgb 0.1 0.2 0.3)").is_none());

        let hsl = TextFormat::Hsl.grammar();
        assert!(hsl.matches("hsl(0.5turn, 50%, 50%)").is_some());
        assert!(hsl.matches("hsl(50%, 50%, 50%)").is_none());
    }

    #[test]
    fn test_formats() {
        assert_eq!(TextFormat::Hexa.base(), TextFormat::Hex);
        assert!(TextFormat::Rgba.is_compatible_with(TextFormat::Rgb));
        assert!(!TextFormat::Lch.is_compatible_with(TextFormat::Oklch));
        assert!(TextFormat::Hex.channels().is_empty());
        assert_eq!(TextFormat::Hwb.channels()[2].short, "bl");
        assert_eq!("laba".parse::<TextFormat>(), Ok(TextFormat::Laba));
        assert!("cmyk".parse::<TextFormat>().is_err());
    }
}
