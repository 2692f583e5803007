//! Python functions wrapping a color module with default options.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::{Argument, Arguments, ColorModule, ColorSpace, Float};

/// Convert Python keyword arguments into color module arguments.
fn to_arguments(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Arguments> {
    let mut args = Arguments::new();
    if let Some(kwargs) = kwargs {
        for (key, value) in kwargs.iter() {
            let name: String = key.extract()?;
            let value = match value.extract::<Float>() {
                Ok(number) => Argument::Number(number),
                Err(_) => Argument::Ident(value.extract::<String>()?),
            };
            args.insert(&name, value);
        }
    }
    Ok(args)
}

/// Parse and format the color again.
#[pyfunction]
pub fn normalize(color: &str) -> PyResult<String> {
    Ok(ColorModule::new().normalize(color)?)
}

/// Adjust the color's channels by the given keyword arguments.
#[pyfunction]
#[pyo3(signature = (color, **kwargs))]
pub fn adjust(color: &str, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<String> {
    Ok(ColorModule::new().adjust(color, &to_arguments(kwargs)?)?)
}

/// Change the color's channels to the given keyword arguments.
#[pyfunction]
#[pyo3(signature = (color, **kwargs))]
pub fn change(color: &str, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<String> {
    Ok(ColorModule::new().change(color, &to_arguments(kwargs)?)?)
}

/// Scale the color's channels by the given keyword arguments.
#[pyfunction]
#[pyo3(signature = (color, **kwargs))]
pub fn scale(color: &str, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<String> {
    Ok(ColorModule::new().scale(color, &to_arguments(kwargs)?)?)
}

/// Mix two colors.
#[pyfunction]
#[pyo3(signature = (color1, color2, weight=None))]
pub fn mix(color1: &str, color2: &str, weight: Option<Float>) -> PyResult<String> {
    Ok(ColorModule::new().mix(color1, color2, weight)?)
}

/// Invert the color.
#[pyfunction]
#[pyo3(signature = (color, weight=None, space=None))]
pub fn invert(color: &str, weight: Option<Float>, space: Option<ColorSpace>) -> PyResult<String> {
    Ok(ColorModule::new().invert(color, weight, space)?)
}

/// Rotate the color's hue by 180 degrees.
#[pyfunction]
#[pyo3(signature = (color, space=None))]
pub fn complement(color: &str, space: Option<ColorSpace>) -> PyResult<String> {
    Ok(ColorModule::new().complement(color, space)?)
}

/// Remove the color's saturation.
#[pyfunction]
pub fn grayscale(color: &str) -> PyResult<String> {
    Ok(ColorModule::new().grayscale(color)?)
}

/// Get the named channel's value and unit.
#[pyfunction]
#[pyo3(signature = (color, name, space=None))]
pub fn channel(color: &str, name: &str, space: Option<ColorSpace>) -> PyResult<(Float, String)> {
    let number = ColorModule::new().channel(color, name, space)?;
    Ok((number.value(), number.unit().as_str().to_string()))
}

/// Determine whether the named channel is powerless.
#[pyfunction]
#[pyo3(signature = (color, name, space=None))]
pub fn is_powerless(color: &str, name: &str, space: Option<ColorSpace>) -> PyResult<bool> {
    Ok(ColorModule::new().is_powerless(color, name, space)?)
}

/// Determine whether the named channel is missing.
#[pyfunction]
pub fn is_missing(color: &str, name: &str) -> PyResult<bool> {
    Ok(ColorModule::new().is_missing(color, name)?)
}

/// Determine whether two colors are the same.
#[pyfunction]
pub fn same(color1: &str, color2: &str) -> PyResult<bool> {
    Ok(ColorModule::new().same(color1, color2)?)
}

/// Clip the color to the gamut of a color space.
#[pyfunction]
#[pyo3(signature = (color, space=None, method="clip"))]
pub fn to_gamut(color: &str, space: Option<ColorSpace>, method: &str) -> PyResult<String> {
    Ok(ColorModule::new().to_gamut(color, space, method)?)
}

/// Convert the color to a color space.
#[pyfunction]
#[pyo3(signature = (color, space=None))]
pub fn to_space(color: &str, space: Option<ColorSpace>) -> PyResult<String> {
    Ok(ColorModule::new().to_space(color, space)?)
}

/// Format the color as `#AARRGGBB`.
#[pyfunction]
pub fn ie_hex_str(color: &str) -> PyResult<String> {
    Ok(ColorModule::new().ie_hex_str(color)?)
}

/// Register the functions with the module.
pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(adjust, m)?)?;
    m.add_function(wrap_pyfunction!(change, m)?)?;
    m.add_function(wrap_pyfunction!(scale, m)?)?;
    m.add_function(wrap_pyfunction!(mix, m)?)?;
    m.add_function(wrap_pyfunction!(invert, m)?)?;
    m.add_function(wrap_pyfunction!(complement, m)?)?;
    m.add_function(wrap_pyfunction!(grayscale, m)?)?;
    m.add_function(wrap_pyfunction!(channel, m)?)?;
    m.add_function(wrap_pyfunction!(is_powerless, m)?)?;
    m.add_function(wrap_pyfunction!(is_missing, m)?)?;
    m.add_function(wrap_pyfunction!(same, m)?)?;
    m.add_function(wrap_pyfunction!(to_gamut, m)?)?;
    m.add_function(wrap_pyfunction!(to_space, m)?)?;
    m.add_function(wrap_pyfunction!(ie_hex_str, m)?)?;
    Ok(())
}
