//! Helper module with the options for color modules.
//!
//! This module provides the options for a [`ColorModule`](crate::ColorModule)
//! and the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use sass_color::ColorSpace;
//! # use sass_color::opt::{Options, Volume};
//! let options = Options::builder()
//!     .volume(Volume::Regular)
//!     .polar_space(ColorSpace::Lch)
//!     .build();
//!
//! assert_eq!(options.volume(), Volume::Regular);
//! assert_eq!(options.polar_space(), ColorSpace::Lch);
//! assert!(options.prefer_names());
//! ```

use crate::ColorSpace;

/// The diagnostic logging volume.
///
/// With regular volume, a color module writes one line to standard error for
/// every failed operation. With detailed volume, it also writes one line for
/// every successful operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    #[default]
    Silent,
    Regular,
    Detailed,
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    prefer_names: bool,
    polar_space: ColorSpace,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            volume: Volume::Silent,
            prefer_names: true,
            polar_space: ColorSpace::Hsl,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set whether opaque RGB results use color names where possible.
    pub fn prefer_names(&mut self, prefer_names: bool) -> &mut Self {
        self.0.prefer_names = prefer_names;
        self
    }

    /// Set the default polar color space for hue manipulations.
    ///
    /// This method ignores color spaces that are not polar.
    pub fn polar_space(&mut self, space: ColorSpace) -> &mut Self {
        if space.is_polar() {
            self.0.polar_space = space;
        }
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular logging enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed logging enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Determine whether opaque RGB results use color names where possible.
    pub fn prefer_names(&self) -> bool {
        self.0.prefer_names
    }

    /// Get the default polar color space for hue manipulations.
    pub fn polar_space(&self) -> ColorSpace {
        self.0.polar_space
    }
}

#[cfg(test)]
mod test {
    use super::{Options, Volume};
    use crate::ColorSpace;

    #[test]
    fn test_builder() {
        let options = Options::default();
        assert_eq!(options.volume(), Volume::Silent);
        assert_eq!(options.polar_space(), ColorSpace::Hsl);

        let options = Options::builder()
            .polar_space(ColorSpace::Lab)
            .prefer_names(false)
            .build();
        assert_eq!(options.polar_space(), ColorSpace::Hsl);
        assert!(!options.prefer_names());
        assert_eq!(Options::with_detailed_log().volume(), Volume::Detailed);
    }
}
