use super::math::{clamp, normalize_hue};
use crate::{ColorSpace, Float};

/// The maximum chroma of CIE LCH colors.
pub(crate) const LCH_MAX_CHROMA: Float = 150.0;

/// The maximum chroma of Oklch colors.
pub(crate) const OKLCH_MAX_CHROMA: Float = 0.4;

/// The range of XYZ coordinates accepted by the parser and gamut clipping.
pub(crate) const XYZ_LIMIT: Float = 1000.0;

/// Get the maximum chroma for the polar CIE or Oklab color space.
pub(crate) const fn max_chroma(space: ColorSpace) -> Float {
    if matches!(space, ColorSpace::Oklch) {
        OKLCH_MAX_CHROMA
    } else {
        LCH_MAX_CHROMA
    }
}

/// Constrain optional channel values to the invariant ranges of a color
/// record.
///
/// Hues are normalized to `0..360`, RGB channels are clamped to `0..=255`,
/// percentages to `0..=100`, and chroma to the color space's maximum chroma.
/// Lab a/b and XYZ coordinates are left untouched. Missing channels stay
/// missing.
pub(crate) fn constrain(space: ColorSpace, channels: &[Option<Float>; 3]) -> [Option<Float>; 3] {
    use ColorSpace::*;

    let [c1, c2, c3] = *channels;
    let percent = |c: Option<Float>| c.map(|v| clamp(v, 0.0, 100.0));
    let hue = |c: Option<Float>| c.map(|v| if v.is_nan() { 0.0 } else { normalize_hue(v) });

    match space {
        Rgb => {
            let byte = |c: Option<Float>| c.map(|v| clamp(v, 0.0, 255.0));
            [byte(c1), byte(c2), byte(c3)]
        }
        Hsl | Hwb => [hue(c1), percent(c2), percent(c3)],
        Lab => [percent(c1), c2, c3],
        Lch | Oklch => {
            let max = max_chroma(space);
            [percent(c1), c2.map(|v| clamp(v, 0.0, max)), hue(c3)]
        }
        Xyz => [c1, c2, c3],
    }
}

/// Determine whether the coordinates are in gamut for their color space.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    use ColorSpace::*;

    let [c1, c2, c3] = *coordinates;
    let within = |v: Float, min: Float, max: Float| min <= v && v <= max;

    match space {
        Rgb => coordinates.iter().all(|c| within(*c, 0.0, 255.0)),
        Hsl => within(c2, 0.0, 100.0) && within(c3, 0.0, 100.0),
        Hwb => within(c2, 0.0, 100.0) && within(c3, 0.0, 100.0) && c2 + c3 <= 100.0,
        Lab => within(c1, 0.0, 100.0),
        Lch | Oklch => within(c1, 0.0, 100.0) && within(c2, 0.0, max_chroma(space)),
        Xyz => coordinates
            .iter()
            .all(|c| within(*c, -XYZ_LIMIT, XYZ_LIMIT)),
    }
}

/// Clip the coordinates to the gamut of their color space.
///
/// Beyond clamping each channel to its legal range, this function scales
/// HWB whiteness and blackness down proportionally, so that they add up to at
/// most 100%.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    let [c1, c2, c3] = *coordinates;

    match space {
        Rgb => [clamp(c1, 0.0, 255.0), clamp(c2, 0.0, 255.0), clamp(c3, 0.0, 255.0)],
        Hsl => [normalize_hue(c1), clamp(c2, 0.0, 100.0), clamp(c3, 0.0, 100.0)],
        Hwb => {
            let mut whiteness = clamp(c2, 0.0, 100.0);
            let mut blackness = clamp(c3, 0.0, 100.0);
            let sum = whiteness + blackness;
            if sum > 100.0 {
                whiteness = whiteness / sum * 100.0;
                blackness = blackness / sum * 100.0;
            }
            [normalize_hue(c1), whiteness, blackness]
        }
        Lab => [clamp(c1, 0.0, 100.0), c2, c3],
        Lch | Oklch => [
            clamp(c1, 0.0, 100.0),
            clamp(c2, 0.0, max_chroma(space)),
            normalize_hue(c3),
        ],
        Xyz => [
            clamp(c1, -XYZ_LIMIT, XYZ_LIMIT),
            clamp(c2, -XYZ_LIMIT, XYZ_LIMIT),
            clamp(c3, -XYZ_LIMIT, XYZ_LIMIT),
        ],
    }
}

#[cfg(test)]
mod test {
    use super::{clip, constrain, in_gamut};
    use crate::ColorSpace::*;

    #[test]
    fn test_constrain() {
        assert_eq!(
            constrain(Rgb, &[Some(300.0), Some(-5.0), None]),
            [Some(255.0), Some(0.0), None]
        );
        assert_eq!(
            constrain(Hsl, &[Some(-120.0), Some(120.0), Some(50.0)]),
            [Some(240.0), Some(100.0), Some(50.0)]
        );
        assert_eq!(
            constrain(Oklch, &[Some(50.0), Some(0.9), Some(360.0)]),
            [Some(50.0), Some(0.4), Some(0.0)]
        );
        assert_eq!(
            constrain(Lab, &[Some(120.0), Some(-200.0), Some(200.0)]),
            [Some(100.0), Some(-200.0), Some(200.0)]
        );
    }

    #[test]
    fn test_gamut() {
        assert!(in_gamut(Rgb, &[0.0, 128.0, 255.0]));
        assert!(!in_gamut(Rgb, &[0.0, 128.0, 256.0]));
        assert!(!in_gamut(Hwb, &[0.0, 60.0, 60.0]));
        assert_eq!(clip(Rgb, &[-3.0, 128.0, 300.0]), [0.0, 128.0, 255.0]);
        assert_eq!(clip(Hwb, &[30.0, 60.0, 60.0]), [30.0, 50.0, 50.0]);
        assert_eq!(clip(Lch, &[110.0, 200.0, -90.0]), [100.0, 150.0, 270.0]);
        assert!(in_gamut(Lch, &clip(Lch, &[110.0, 200.0, -90.0])));
    }
}
