use rand::Rng;
use sass_color::error::ColorError;
use sass_color::{Color, ColorModule, ColorSpace, TextFormat};

const SAMPLES: usize = 500;

fn random_color(rng: &mut impl Rng) -> Color {
    Color::rgb(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>())
}

fn assert_bytes_within(original: &Color, parsed: &Color, tolerance: i16, text: &str) {
    let expected = original.to_24bit();
    let actual = parsed.to_24bit();
    for index in 0..3 {
        let delta = (expected[index] as i16 - actual[index] as i16).abs();
        assert!(
            delta <= tolerance,
            "{:?} vs {:?} after round trip through {}",
            expected,
            actual,
            text
        );
    }
}

#[test]
fn text_formats_round_trip() -> Result<(), ColorError> {
    let mut rng = rand::rng();

    for _ in 0..SAMPLES {
        let color = random_color(&mut rng);

        for format in TextFormat::ALL {
            let text = color.to_css(format);
            let parsed = Color::parse(&text)?;
            let tolerance = match format {
                TextFormat::Hwb => 5,
                TextFormat::Lab | TextFormat::Laba | TextFormat::Lch | TextFormat::Oklch => 1,
                _ => 0,
            };
            assert_bytes_within(&color, &parsed, tolerance, &text);
        }
    }

    Ok(())
}

#[test]
fn translucent_colors_round_trip() -> Result<(), ColorError> {
    let mut rng = rand::rng();

    for _ in 0..SAMPLES {
        let alpha = rng.random_range(0.0..1.0);
        let color = random_color(&mut rng).with_alpha(alpha);

        for format in [TextFormat::Hsla, TextFormat::Laba, TextFormat::Xyza] {
            let text = color.to_css(format);
            let parsed = Color::parse(&text)?;
            assert!((parsed.alpha() - color.alpha()).abs() < 1e-9, "{}", text);
        }

        let text = color.to_css(TextFormat::Hexa);
        let parsed = Color::parse(&text)?;
        assert!((parsed.alpha() - color.alpha()).abs() <= 0.5 / 255.0 + 1e-9, "{}", text);
    }

    Ok(())
}

#[test]
fn color_spaces_round_trip() {
    let mut rng = rand::rng();

    for _ in 0..SAMPLES {
        let color = random_color(&mut rng);
        let expected = color.to_rgb();

        for space in ColorSpace::ALL {
            let actual = color.to(space).to_rgb();
            for index in 0..3 {
                assert!(
                    (expected[index] - actual[index]).abs() < 1e-3,
                    "{:?} vs {:?} after round trip through {}",
                    expected,
                    actual,
                    space
                );
            }
        }
    }
}

#[test]
fn module_operations_are_consistent() -> Result<(), ColorError> {
    let module = ColorModule::new();
    let mut rng = rand::rng();

    for _ in 0..SAMPLES {
        let color = random_color(&mut rng).to_string();

        let twice = module.invert(&module.invert(&color, None, None)?, None, None)?;
        assert!(module.same(&color, &twice)?, "{} vs {}", color, twice);

        let mixed = module.mix(&color, &color, Some(rng.random_range(0.0..1.0)))?;
        assert!(module.same(&color, &mixed)?, "{} vs {}", color, mixed);

        let gray = module.grayscale(&color)?;
        assert!(module.is_powerless(&gray, "hue", None)?, "{}", gray);

        let hex = module.ie_hex_str(&color)?;
        assert!(hex.starts_with("#FF") && hex.len() == 9, "{}", hex);
    }

    Ok(())
}
