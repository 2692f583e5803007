//! The global color functions that predate the color module.
//!
//! These functions are thin wrappers around [`ColorModule::adjust`] and
//! [`ColorModule::channel`]. Unlike the former, they validate their amounts
//! against the range of the channel they manipulate.

use super::{args::Plan, ColorModule, Mode};
use crate::error::ColorError;
use crate::number::SassNumber;
use crate::{Color, ColorSpace, Float};

impl ColorModule {
    /// Adjust the color according to the plan, which has been validated
    /// already or failed validation.
    fn adjust_with(
        &self,
        operation: &str,
        color: &str,
        plan: Result<Plan, ColorError>,
    ) -> Result<String, ColorError> {
        self.run(operation, || {
            let plan = plan?;
            let color = Color::parse(color)?;
            Ok(self.output(&self.apply(&color, &plan, Mode::Adjust)?))
        })
    }

    fn lightness_by(&self, operation: &str, color: &str, amount: Float, sign: Float) -> Result<String, ColorError> {
        let plan = ColorError::check("amount", amount, 0.0, 100.0).map(|amount| Plan {
            lightness: Some(sign * amount),
            space: Some(ColorSpace::Hsl),
            ..Plan::default()
        });
        self.adjust_with(operation, color, plan)
    }

    fn saturation_by(&self, operation: &str, color: &str, amount: Float, sign: Float) -> Result<String, ColorError> {
        let plan = ColorError::check("amount", amount, 0.0, 100.0).map(|amount| Plan {
            saturation: Some(sign * amount),
            ..Plan::default()
        });
        self.adjust_with(operation, color, plan)
    }

    fn alpha_by(&self, operation: &str, color: &str, amount: Float, sign: Float) -> Result<String, ColorError> {
        let plan = ColorError::check("amount", amount, 0.0, 1.0).map(|amount| Plan {
            alpha: Some(sign * amount),
            ..Plan::default()
        });
        self.adjust_with(operation, color, plan)
    }

    /// Increase the HSL lightness by the given percentage.
    ///
    /// ```
    /// # use sass_color::ColorModule;
    /// # use sass_color::error::ColorError;
    /// let module = ColorModule::new();
    /// assert_eq!(module.lighten("black", 50.0)?, "grey");
    /// assert_eq!(module.darken("red", 25.0)?, "maroon");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn lighten(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.lightness_by("lighten", color, amount, 1.0)
    }

    /// Decrease the HSL lightness by the given percentage.
    pub fn darken(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.lightness_by("darken", color, amount, -1.0)
    }

    /// Increase the HSL saturation by the given percentage.
    pub fn saturate(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.saturation_by("saturate", color, amount, 1.0)
    }

    /// Decrease the HSL saturation by the given percentage.
    pub fn desaturate(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.saturation_by("desaturate", color, amount, -1.0)
    }

    /// Rotate the HSL hue by the given degrees.
    pub fn adjust_hue(&self, color: &str, degrees: Float) -> Result<String, ColorError> {
        let plan = Plan {
            hue: Some(degrees),
            space: Some(ColorSpace::Hsl),
            ..Plan::default()
        };
        self.adjust_with("adjust-hue", color, Ok(plan))
    }

    /// Increase the alpha by the given amount, which must be within `0..=1`.
    pub fn opacify(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.alpha_by("opacify", color, amount, 1.0)
    }

    /// Increase the alpha. This is an alias for [`ColorModule::opacify`].
    pub fn fade_in(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.alpha_by("fade-in", color, amount, 1.0)
    }

    /// Decrease the alpha by the given amount, which must be within `0..=1`.
    pub fn transparentize(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.alpha_by("transparentize", color, amount, -1.0)
    }

    /// Decrease the alpha. This is an alias for
    /// [`ColorModule::transparentize`].
    pub fn fade_out(&self, color: &str, amount: Float) -> Result<String, ColorError> {
        self.alpha_by("fade-out", color, amount, -1.0)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the red channel.
    pub fn red(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "red", Some(ColorSpace::Rgb))
    }

    /// Get the green channel.
    pub fn green(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "green", Some(ColorSpace::Rgb))
    }

    /// Get the blue channel.
    pub fn blue(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "blue", Some(ColorSpace::Rgb))
    }

    /// Get the HSL hue.
    pub fn hue(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "hue", Some(ColorSpace::Hsl))
    }

    /// Get the HSL saturation.
    pub fn saturation(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "saturation", Some(ColorSpace::Hsl))
    }

    /// Get the HSL lightness.
    pub fn lightness(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "lightness", Some(ColorSpace::Hsl))
    }

    /// Get the HWB whiteness.
    pub fn whiteness(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "whiteness", Some(ColorSpace::Hwb))
    }

    /// Get the HWB blackness.
    pub fn blackness(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "blackness", Some(ColorSpace::Hwb))
    }

    /// Get the alpha.
    pub fn alpha(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "alpha", None)
    }

    /// Get the alpha. This is an alias for [`ColorModule::alpha`].
    pub fn opacity(&self, color: &str) -> Result<SassNumber, ColorError> {
        self.channel(color, "opacity", None)
    }
}

#[cfg(test)]
mod test {
    use crate::error::ColorError;
    use crate::number::{SassNumber, Unit};
    use crate::opt::Options;
    use crate::{ColorModule, ColorSpace};

    #[test]
    fn test_lightness_saturation() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.lighten("black", 100.0)?, "white");
        assert_eq!(module.darken("red", 50.0)?, "black");
        assert_eq!(module.darken("red", 25.0)?, "maroon");
        assert_eq!(module.desaturate("red", 100.0)?, "grey");
        assert_eq!(module.saturate("grey", 100.0)?, "#ff0101");
        assert!(matches!(
            module.lighten("red", 120.0),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        assert!(matches!(
            module.darken("red", -1.0),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_lightness_ignores_polar_option() -> Result<(), ColorError> {
        let options = Options::builder().polar_space(ColorSpace::Lch).build();
        let module = ColorModule::with_options(options);
        assert_eq!(module.darken("red", 25.0)?, "maroon");
        assert_eq!(module.adjust_hue("red", 120.0)?, "lime");
        Ok(())
    }

    #[test]
    fn test_hue_alpha() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.adjust_hue("red", 240.0)?, "blue");
        assert_eq!(module.adjust_hue("red", -120.0)?, "blue");
        assert_eq!(module.transparentize("red", 0.5)?, "#ff000080");
        assert_eq!(module.fade_out("red", 0.5)?, "#ff000080");
        assert_eq!(module.opacify("rgba(255, 0, 0, 0.5)", 0.5)?, "red");
        assert_eq!(module.fade_in("rgba(255, 0, 0, 0.5)", 1.0)?, "red");
        assert!(matches!(
            module.opacify("red", 2.0),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_getters() -> Result<(), ColorError> {
        let module = ColorModule::new();
        assert_eq!(module.red("#336699")?, SassNumber::unitless(51.0));
        assert_eq!(module.green("#336699")?, SassNumber::unitless(102.0));
        assert_eq!(module.blue("#336699")?, SassNumber::unitless(153.0));
        assert_eq!(module.hue("lch(50% 30 120)")?.unit(), Unit::Degrees);
        assert_eq!(module.hue("blue")?, SassNumber::new(240.0, Unit::Degrees));
        assert_eq!(module.saturation("red")?, SassNumber::new(100.0, Unit::Percent));
        assert_eq!(module.lightness("red")?, SassNumber::new(50.0, Unit::Percent));
        assert_eq!(module.whiteness("white")?, SassNumber::new(100.0, Unit::Percent));
        assert_eq!(module.blackness("black")?, SassNumber::new(100.0, Unit::Percent));
        assert_eq!(module.alpha("rgba(0, 0, 0, 0.3)")?, SassNumber::unitless(0.3));
        assert_eq!(module.opacity("red")?, SassNumber::unitless(1.0));
        Ok(())
    }
}
