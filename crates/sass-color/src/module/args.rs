use crate::error::ColorError;
use crate::{ColorSpace, Float};

/// A keyword argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Number(Float),
    Ident(String),
}

impl From<Float> for Argument {
    fn from(value: Float) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Number(value as Float)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Ident(value.to_string())
    }
}

impl From<ColorSpace> for Argument {
    fn from(value: ColorSpace) -> Self {
        Self::Ident(value.name().to_string())
    }
}

/// Keyword arguments for adjusting, changing, or scaling colors.
///
/// Names may be written with or without the leading `$`. Arguments keep
/// their order, and a later argument with the same name replaces an earlier
/// one.
///
/// # Examples
///
/// ```
/// # use sass_color::{Argument, Arguments};
/// let args = Arguments::new().with("$red", 10).with("lightness", -5.5);
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get("red"), Some(&Argument::Number(10.0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    entries: Vec<(String, Argument)>,
}

impl Arguments {
    /// Create a new, empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument.
    #[must_use = "method returns the updated arguments"]
    pub fn with(mut self, name: &str, value: impl Into<Argument>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert an argument, replacing any earlier argument with the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<Argument>) {
        let name = name.trim_start_matches('$').to_string();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get the argument with the given name.
    pub fn get(&self, name: &str) -> Option<&Argument> {
        let name = name.trim_start_matches('$');
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Get the number of arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the arguments, with names lacking the leading `$`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Argument)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<S: AsRef<str>, A: Into<Argument>> FromIterator<(S, A)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (S, A)>>(iter: T) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name.as_ref(), value);
        }
        args
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The validated arguments of an adjust, change, or scale operation.
#[derive(Debug, Default)]
pub(crate) struct Plan {
    pub red: Option<Float>,
    pub green: Option<Float>,
    pub blue: Option<Float>,
    pub hue: Option<Float>,
    pub saturation: Option<Float>,
    pub lightness: Option<Float>,
    pub whiteness: Option<Float>,
    pub blackness: Option<Float>,
    pub x: Option<Float>,
    pub y: Option<Float>,
    pub z: Option<Float>,
    pub chroma: Option<Float>,
    pub alpha: Option<Float>,
    pub space: Option<ColorSpace>,
}

impl Plan {
    /// Validate the keyword arguments.
    ///
    /// This function rejects unknown names, numbers where an identifier is
    /// expected and vice versa, and `$space` values that are not polar color
    /// spaces.
    pub fn new(args: &Arguments) -> Result<Self, ColorError> {
        let mut plan = Self::default();

        for (name, value) in args.iter() {
            if name == "space" {
                let Argument::Ident(ident) = value else {
                    return Err(ColorError::UnsupportedParameter(
                        "$space with a number".to_string(),
                    ));
                };
                let space: ColorSpace = ident.parse()?;
                if !space.is_polar() {
                    return Err(ColorError::IncompatibleColorSpace(format!(
                        "$space should be a polar color space but is {}",
                        space
                    )));
                }
                plan.space = Some(space);
                continue;
            }

            let slot = match name {
                "red" => &mut plan.red,
                "green" => &mut plan.green,
                "blue" => &mut plan.blue,
                "hue" => &mut plan.hue,
                "saturation" => &mut plan.saturation,
                "lightness" => &mut plan.lightness,
                "whiteness" => &mut plan.whiteness,
                "blackness" => &mut plan.blackness,
                "x" => &mut plan.x,
                "y" => &mut plan.y,
                "z" => &mut plan.z,
                "chroma" => &mut plan.chroma,
                "alpha" => &mut plan.alpha,
                _ => return Err(ColorError::UnsupportedParameter(format!("${}", name))),
            };

            match value {
                Argument::Number(number) => *slot = Some(*number),
                Argument::Ident(_) => {
                    return Err(ColorError::UnsupportedParameter(format!(
                        "${} with a non-numeric value",
                        name
                    )))
                }
            }
        }

        Ok(plan)
    }
}
