use super::math::normalize_hue;
use super::ColorSpace;
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected RGB in `0..=1` to linear RGB using
/// sRGB's gamma. This is a one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear RGB to gamma-corrected RGB in `0..=1` using
/// sRGB's gamma. This is a one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Scale 8-bit RGB channels to unit range.
#[inline]
fn to_unit(value: &[Float; 3]) -> [Float; 3] {
    [value[0] / 255.0, value[1] / 255.0, value[2] / 255.0]
}

/// Scale unit range RGB channels to 8-bit range.
#[inline]
fn from_unit(value: &[Float; 3]) -> [Float; 3] {
    [value[0] * 255.0, value[1] * 255.0, value[2] * 255.0]
}

// --------------------------------------------------------------------------------------------------------------------
// http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// The D65 reference white, scaled to `0..=100`.
pub(crate) const D65: [Float; 3] = [95.047, 100.0, 108.883];

/// Convert 8-bit RGB to XYZ scaled to `0..=100`.
fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &rgb_to_linear_rgb(&to_unit(value)));
    [x * 100.0, y * 100.0, z * 100.0]
}

/// Convert XYZ scaled to `0..=100` to 8-bit RGB.
///
/// Out-of-gamut colors produce channels outside `0..=255`.
fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let scaled = [value[0] / 100.0, value[1] / 100.0, value[2] / 100.0];
    from_unit(&linear_rgb_to_rgb(&multiply(&XYZ_TO_LINEAR_SRGB, &scaled)))
}

// --------------------------------------------------------------------------------------------------------------------

const LAB_EPSILON: Float = 0.008856;
const LAB_KAPPA: Float = 903.3;

/// Convert XYZ to CIELAB. This is a one-hop, direct conversion.
fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > LAB_EPSILON {
            t.cbrt()
        } else {
            (LAB_KAPPA * t + 16.0) / 116.0
        }
    }

    let fx = f(value[0] / D65[0]);
    let fy = f(value[1] / D65[1]);
    let fz = f(value[2] / D65[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIELAB to XYZ. This is a one-hop, direct conversion.
fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let fx3 = fx.powi(3);
    let fz3 = fz.powi(3);

    let x = if fx3 > LAB_EPSILON {
        fx3
    } else {
        (116.0 * fx - 16.0) / LAB_KAPPA
    };
    let y = if l > LAB_KAPPA * LAB_EPSILON {
        fy.powi(3)
    } else {
        l / LAB_KAPPA
    };
    let z = if fz3 > LAB_EPSILON {
        fz3
    } else {
        (116.0 * fz - 16.0) / LAB_KAPPA
    };

    [x * D65[0], y * D65[1], z * D65[2]]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert rectangular a/b coordinates to polar chroma/hue. If both a and b
/// are within the threshold, the color is achromatic and has zero chroma and
/// hue.
fn xab_to_xch(value: &[Float; 3], threshold: Float) -> [Float; 3] {
    let [l, a, b] = *value;
    if a.abs() < threshold && b.abs() < threshold {
        return [l, 0.0, 0.0];
    }

    let chroma = a.hypot(b);
    let hue = normalize_hue(b.atan2(a).to_degrees());
    [l, chroma, hue]
}

/// Convert polar chroma/hue coordinates to rectangular a/b coordinates.
fn xch_to_xab(value: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *value;
    let radians = h.to_radians();
    [l, c * radians.cos(), c * radians.sin()]
}

const LAB_ACHROMATIC: Float = 1e-4;

fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    xab_to_xch(value, LAB_ACHROMATIC)
}

fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xch_to_xab(value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_LMS: [[Float; 3]; 3] = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: [[Float; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

const OKLAB_ACHROMATIC: Float = 1e-6;

/// Convert 8-bit RGB to Oklch with lightness as a percentage.
fn rgb_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_LMS, &rgb_to_linear_rgb(&to_unit(value)));
    let lms = [l.cbrt(), m.cbrt(), s.cbrt()];
    let [l, c, h] = xab_to_xch(&multiply(&LMS_TO_OKLAB, &lms), OKLAB_ACHROMATIC);
    [l * 100.0, c, h]
}

/// Convert Oklch with lightness as a percentage to 8-bit RGB.
///
/// Out-of-gamut colors produce channels outside `0..=255`.
fn oklch_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let oklab = xch_to_xab(&[value[0] / 100.0, value[1], value[2]]);
    let [l, m, s] = multiply(&OKLAB_TO_LMS, &oklab);
    let lms = [l.powi(3), m.powi(3), s.powi(3)];
    from_unit(&linear_rgb_to_rgb(&multiply(&LMS_TO_LINEAR_SRGB, &lms)))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 8-bit RGB to HSL.
fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = to_unit(value);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return [0.0, 0.0, lightness * 100.0];
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
    let hue = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    [normalize_hue(hue), saturation * 100.0, lightness * 100.0]
}

/// Convert HSL to 8-bit RGB.
fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let hue = normalize_hue(value[0]);
    let saturation = value[1] / 100.0;
    let lightness = value[2] / 100.0;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let [r, g, b] = match sector as u32 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    from_unit(&[r + m, g + m, b + m])
}

/// Convert 8-bit RGB to HWB.
fn rgb_to_hwb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, _, _] = rgb_to_hsl(value);
    let [r, g, b] = to_unit(value);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    [hue, min * 100.0, (1.0 - max) * 100.0]
}

/// Convert HWB to 8-bit RGB.
///
/// If whiteness and blackness add up to 100% or more, the result is the gray
/// with their relative proportion.
fn hwb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let whiteness = value[1] / 100.0;
    let blackness = value[2] / 100.0;

    if whiteness + blackness >= 1.0 {
        let gray = whiteness / (whiteness + blackness) * 255.0;
        return [gray, gray, gray];
    }

    let pure = hsl_to_rgb(&[value[0], 100.0, 50.0]).map(|c| c.clamp(0.0, 255.0));
    let factor = 1.0 - whiteness - blackness;
    pure.map(|c| c.mul_add(factor, whiteness * 255.0))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// RGB sits at the root of the conversion graph. Conversions within the CIE
/// cluster of XYZ, Lab, and LCH take direct paths. All other conversions first
/// convert to RGB and then convert to the target space. Converting a color to
/// its own space is the identity.
///
/// Polar results for achromatic colors have a hue of zero.
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Easy cases first: identity and the CIE cluster.
    match (from_space, to_space) {
        (f, t) if f == t => return *coordinates,
        (Lch, Lab) => return lch_to_lab(coordinates),
        (Lab, Lch) => return lab_to_lch(coordinates),
        (Lab, Xyz) => return lab_to_xyz(coordinates),
        (Xyz, Lab) => return xyz_to_lab(coordinates),
        (Lch, Xyz) => return lab_to_xyz(&lch_to_lab(coordinates)),
        (Xyz, Lch) => return lab_to_lch(&xyz_to_lab(coordinates)),
        _ => {}
    };

    // 2. Convert to RGB, the root.
    let rgb = match from_space {
        Rgb => *coordinates,
        Hsl => hsl_to_rgb(coordinates),
        Hwb => hwb_to_rgb(coordinates),
        Lab => xyz_to_rgb(&lab_to_xyz(coordinates)),
        Lch => xyz_to_rgb(&lab_to_xyz(&lch_to_lab(coordinates))),
        Oklch => oklch_to_rgb(coordinates),
        Xyz => xyz_to_rgb(coordinates),
    };

    // 3. Convert from RGB to target.
    match to_space {
        Rgb => rgb,
        Hsl => rgb_to_hsl(&rgb),
        Hwb => rgb_to_hwb(&rgb),
        Lab => xyz_to_lab(&rgb_to_xyz(&rgb)),
        Lch => lab_to_lch(&xyz_to_lab(&rgb_to_xyz(&rgb))),
        Oklch => rgb_to_oklch(&rgb),
        Xyz => rgb_to_xyz(&rgb),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::assert_same_coordinates;

    struct Representations {
        name: &'static str,
        rgb: [Float; 3],
        hsl: [Float; 3],
        hwb: [Float; 3],
    }

    const REPRESENTATIONS: [Representations; 4] = [
        Representations {
            name: "red",
            rgb: [255.0, 0.0, 0.0],
            hsl: [0.0, 100.0, 50.0],
            hwb: [0.0, 0.0, 0.0],
        },
        Representations {
            name: "lime",
            rgb: [0.0, 255.0, 0.0],
            hsl: [120.0, 100.0, 50.0],
            hwb: [120.0, 0.0, 0.0],
        },
        Representations {
            name: "navy",
            rgb: [0.0, 0.0, 128.0],
            hsl: [240.0, 100.0, 25.098039215686274],
            hwb: [240.0, 0.0, 49.80392156862745],
        },
        Representations {
            name: "gray",
            rgb: [128.0, 128.0, 128.0],
            hsl: [0.0, 0.0, 50.19607843137255],
            hwb: [0.0, 50.19607843137255, 49.80392156862745],
        },
    ];

    #[test]
    fn test_hsl_hwb() {
        for repr in &REPRESENTATIONS {
            let hsl = convert(ColorSpace::Rgb, ColorSpace::Hsl, &repr.rgb);
            assert_same_coordinates!(ColorSpace::Hsl, &hsl, &repr.hsl);
            let hwb = convert(ColorSpace::Rgb, ColorSpace::Hwb, &repr.rgb);
            assert_same_coordinates!(ColorSpace::Hwb, &hwb, &repr.hwb);

            let rgb = convert(ColorSpace::Hsl, ColorSpace::Rgb, &repr.hsl);
            assert_same_coordinates!(ColorSpace::Rgb, &rgb, &repr.rgb);
            let rgb = convert(ColorSpace::Hwb, ColorSpace::Rgb, &repr.hwb);
            assert_same_coordinates!(ColorSpace::Rgb, &rgb, &repr.rgb);
            assert!(!repr.name.is_empty());
        }
    }

    #[test]
    fn test_hwb_gray() {
        let rgb = convert(ColorSpace::Hwb, ColorSpace::Rgb, &[120.0, 60.0, 60.0]);
        assert_same_coordinates!(ColorSpace::Rgb, &rgb, &[127.5, 127.5, 127.5]);
    }

    #[test]
    fn test_white_point() {
        let xyz = convert(ColorSpace::Rgb, ColorSpace::Xyz, &[255.0, 255.0, 255.0]);
        assert!((xyz[0] - D65[0]).abs() < 1e-3);
        assert!((xyz[1] - D65[1]).abs() < 1e-3);
        assert!((xyz[2] - D65[2]).abs() < 1e-3);

        let lab = convert(ColorSpace::Rgb, ColorSpace::Lab, &[255.0, 255.0, 255.0]);
        assert!((lab[0] - 100.0).abs() < 1e-3);
        assert!(lab[1].abs() < 1e-3 && lab[2].abs() < 1e-3);

        let lch = convert(ColorSpace::Rgb, ColorSpace::Lch, &[128.0, 128.0, 128.0]);
        assert_eq!(lch[1], 0.0);
        assert_eq!(lch[2], 0.0);

        let oklch = convert(ColorSpace::Rgb, ColorSpace::Oklch, &[255.0, 255.0, 255.0]);
        assert!((oklch[0] - 100.0).abs() < 1e-3);
        assert_eq!(oklch[1], 0.0);
    }

    #[test]
    fn test_red() {
        let lab = convert(ColorSpace::Rgb, ColorSpace::Lab, &[255.0, 0.0, 0.0]);
        assert!((lab[0] - 53.24).abs() < 0.01);
        assert!((lab[1] - 80.09).abs() < 0.01);
        assert!((lab[2] - 67.2).abs() < 0.01);

        let oklch = convert(ColorSpace::Rgb, ColorSpace::Oklch, &[255.0, 0.0, 0.0]);
        assert!((oklch[0] - 62.8).abs() < 0.01);
        assert!((oklch[1] - 0.2577).abs() < 0.0001);
        assert!((oklch[2] - 29.23).abs() < 0.01);
    }

    #[test]
    fn test_round_trips() {
        let rgb = [12.0, 200.0, 99.0];
        for space in ColorSpace::ALL {
            let there = convert(ColorSpace::Rgb, space, &rgb);
            let back = convert(space, ColorSpace::Rgb, &there);
            assert!(
                back.iter().zip(rgb.iter()).all(|(a, b)| (a - b).abs() < 1e-3),
                "{} round trip: {:?} vs {:?}",
                space,
                back,
                rgb
            );
        }

        let lch = [50.0, 30.0, 200.0];
        let xyz = convert(ColorSpace::Lch, ColorSpace::Xyz, &lch);
        assert_same_coordinates!(
            ColorSpace::Lch,
            &convert(ColorSpace::Xyz, ColorSpace::Lch, &xyz),
            &lch,
        );
    }
}
