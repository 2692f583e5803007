#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorError;

/// The enumeration of supported color spaces.
///
/// # RGB, HSL, and HWB
///
/// RGB is the hub of the conversion graph: Every other color space converts
/// directly to and from RGB, though for CIELAB and CIE LCH that direct path
/// runs through XYZ. Channels are the familiar red, green, and blue bytes,
/// i.e., in-gamut values range `0..=255`. HSL and HWB are cylindrical
/// reparametrizations of the very same RGB cube. Their hue is in degrees
/// `0..360`, saturation, lightness, whiteness, and blackness are percentages
/// `0..=100`.
///
/// # The CIE Cluster
///
/// XYZ (with the D65 reference white and scaled to `0..=100`), CIELAB, and CIE
/// LCH form their own cluster. LCH converts to Lab through a direct polar
/// transform and Lab converts to XYZ through the CIE lightness function.
/// Lightness is a percentage `0..=100`, a/b have no fixed bounds, and chroma is
/// bounded to `0..=150`.
///
/// # Oklch
///
/// [Oklch](https://bottosson.github.io/posts/oklab/) is the polar form of
/// Oklab, which improves on CIELAB's perceptual uniformity, notably around the
/// blues. Its lightness is stored as a percentage `0..=100`, while its chroma
/// uses Oklab's native scale and in practice is bounded by `0..=0.4`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "sass_color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklch,
    Xyz,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// HSL, HWB, LCH, and Oklch have a hue angle as one of their channels.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hwb | Self::Lch | Self::Oklch)
    }

    /// Determine whether this color space is RGB.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Rgb)
    }

    /// Determine whether this color space belongs to the CIE cluster, i.e., is
    /// XYZ, CIELAB, or CIE LCH.
    pub const fn is_cie(&self) -> bool {
        matches!(*self, Self::Lab | Self::Lch | Self::Xyz)
    }

    /// Determine the index of the hue channel, if this color space is polar.
    pub const fn hue_index(&self) -> Option<usize> {
        match *self {
            Self::Hsl | Self::Hwb => Some(0),
            Self::Lch | Self::Oklch => Some(2),
            _ => None,
        }
    }

    /// Get the name of this color space as used in Sass source code.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Oklch => "oklch",
            Self::Xyz => "xyz",
        }
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorSpace {
    /// All color spaces.
    pub const ALL: [ColorSpace; 7] = [
        Self::Rgb,
        Self::Hsl,
        Self::Hwb,
        Self::Lab,
        Self::Lch,
        Self::Oklch,
        Self::Xyz,
    ];

    /// Get the data keys for this color space's channels, in order.
    pub const fn keys(&self) -> [Key; 3] {
        use Key::*;

        match *self {
            Self::Rgb => [R, G, B],
            Self::Hsl => [H, S, L],
            Self::Hwb => [H, W, Bl],
            Self::Lab => [LabL, LabA, LabB],
            Self::Lch | Self::Oklch => [L, C, H],
            Self::Xyz => [X, Y, Z],
        }
    }

    /// Find the index of the channel with the given data key.
    pub fn index_of(&self, key: Key) -> Option<usize> {
        self.keys().iter().position(|k| *k == key)
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorError;

    /// Parse the name of a color space.
    ///
    /// Besides the seven names returned by [`ColorSpace::name`], this method
    /// also accepts `srgb` for RGB and `xyz-d65` for XYZ. Letter case does not
    /// matter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let space = match name.as_str() {
            "rgb" | "srgb" => Self::Rgb,
            "hsl" => Self::Hsl,
            "hwb" => Self::Hwb,
            "lab" => Self::Lab,
            "lch" => Self::Lch,
            "oklch" => Self::Oklch,
            "xyz" | "xyz-d65" => Self::Xyz,
            _ => {
                return Err(ColorError::IncompatibleColorSpace(format!(
                    "unknown color space `{}`",
                    s.trim()
                )))
            }
        };

        Ok(space)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The data key of a color channel.
///
/// A color stores its channels keyed by space-specific data keys. Spaces may
/// share keys, e.g., HSL and LCH both store their hue as `h`, but a color only
/// ever carries the keys of its own color space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    R,
    G,
    B,
    H,
    S,
    L,
    W,
    Bl,
    LabL,
    LabA,
    LabB,
    C,
    X,
    Y,
    Z,
}

impl Key {
    /// Get the key's textual representation.
    pub const fn as_str(&self) -> &'static str {
        use Key::*;

        match *self {
            R => "r",
            G => "g",
            B => "b",
            H => "h",
            S => "s",
            L => "l",
            W => "w",
            Bl => "bl",
            LabL => "lab_l",
            LabA => "lab_a",
            LabB => "lab_b",
            C => "c",
            X => "x",
            Y => "y",
            Z => "z",
        }
    }

    /// Determine whether the key's channel is a percentage.
    pub const fn is_percentage(&self) -> bool {
        matches!(*self, Self::S | Self::L | Self::W | Self::Bl | Self::LabL)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorSpace, Key};
    use crate::error::ColorError;

    #[test]
    fn test_names() -> Result<(), ColorError> {
        for space in ColorSpace::ALL {
            assert_eq!(space.name().parse::<ColorSpace>()?, space);
        }

        assert_eq!(" SRGB ".parse::<ColorSpace>()?, ColorSpace::Rgb);
        assert_eq!("xyz-d65".parse::<ColorSpace>()?, ColorSpace::Xyz);
        assert!(matches!(
            "display-p3".parse::<ColorSpace>(),
            Err(ColorError::IncompatibleColorSpace(_))
        ));
        Ok(())
    }

    #[test]
    fn test_keys() {
        assert_eq!(ColorSpace::Hwb.keys(), [Key::H, Key::W, Key::Bl]);
        assert_eq!(ColorSpace::Lch.index_of(Key::H), Some(2));
        assert_eq!(ColorSpace::Hsl.hue_index(), Some(0));
        assert_eq!(ColorSpace::Rgb.index_of(Key::H), None);
        assert!(Key::LabL.is_percentage());
        assert!(!Key::C.is_percentage());
    }
}
