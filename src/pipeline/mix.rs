use palette::Hsl;

use crate::color::Color;

/// Ratio used for border colors: 25% of the way from background to foreground.
pub const BORDER_MIX: f32 = 0.25;

/// Tint ramp steps, from almost white (100) to almost black (900).
pub const TINT_STEPS: [u16; 26] = [
    100, 130, 160, 200, 230, 260, 300, 330, 345, 360, 400, 430, 460, 500, 530, 560, 600, 630, 660,
    700, 730, 760, 800, 830, 860, 900,
];

/// Blend `a` toward `b`. `ratio` is clamped to [0, 1].
pub fn mix(a: Color, b: Color, ratio: f32) -> Color {
    a.mix(b, ratio)
}

/// The border color of a set: its background pulled 25% toward its foreground.
pub fn border(background: Color, foreground: Color) -> Color {
    mix(background, foreground, BORDER_MIX)
}

/// Lightness of a tint step on the 0-255 scale: `|((step - 80) / 940) * 255 - 255|`,
/// rounded.
pub fn step_lightness(step: u16) -> u8 {
    let f = (step as f32 - 80.0) / 940.0;
    (f * 255.0 - 255.0).abs().round().clamp(0.0, 255.0) as u8
}

/// One color per lightness value (0-255 scale), all sharing `hue` (degrees)
/// and `saturation` ([0, 1]).
pub fn hsl_ramp(hue: f32, saturation: f32, lightness: &[u8]) -> Vec<Color> {
    lightness
        .iter()
        .map(|&l| Color::from_hsl(Hsl::new(hue, saturation, l as f32 / 255.0)))
        .collect()
}

/// The tint ramp seeded with `seed`'s hue and saturation, paired with its steps.
pub fn tint_ramp(seed: Color) -> Vec<(u16, Color)> {
    let lightness: Vec<u8> = TINT_STEPS.iter().map(|&s| step_lightness(s)).collect();
    let colors = hsl_ramp(seed.hsl_hue(), seed.hsl_saturation(), &lightness);
    TINT_STEPS.iter().copied().zip(colors).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_lightness_table_ends() {
        assert_eq!(step_lightness(100), 250);
        assert_eq!(step_lightness(500), 141);
        assert_eq!(step_lightness(900), 33);
    }

    #[test]
    fn step_lightness_is_non_increasing() {
        for pair in TINT_STEPS.windows(2) {
            assert!(
                step_lightness(pair[0]) >= step_lightness(pair[1]),
                "step {} lighter than {}",
                pair[1],
                pair[0]
            );
        }
    }

    #[test]
    fn ramp_length_matches_steps() {
        let lightness = [0u8, 64, 128, 255];
        assert_eq!(hsl_ramp(200.0, 0.5, &lightness).len(), 4);
        assert!(hsl_ramp(200.0, 0.5, &[]).is_empty());
    }

    #[test]
    fn ramp_gets_darker() {
        let ramp = tint_ramp(Color::new(61, 174, 233));
        assert_eq!(ramp.len(), TINT_STEPS.len());
        for pair in ramp.windows(2) {
            let (a, b) = (pair[0].1.to_hsl().lightness, pair[1].1.to_hsl().lightness);
            assert!(a + 1e-3 >= b, "{} -> {} got lighter", pair[0].0, pair[1].0);
        }
        assert!(ramp[0].1.r > 240 && ramp[0].1.g > 240);
        assert!(ramp[25].1.r < 60 && ramp[25].1.g < 60);
    }

    #[test]
    fn breeze_accent_ramp_values() {
        let ramp: Vec<(u16, String)> = tint_ramp(Color::new(61, 174, 233))
            .into_iter()
            .filter(|(step, _)| matches!(step, 100 | 500 | 900))
            .map(|(step, color)| (step, color.to_hex()))
            .collect();
        assert_eq!(
            ramp,
            vec![
                (100, "#f6fbfe".to_string()),
                (500, "#32aae8".to_string()),
                (900, "#07293b".to_string()),
            ]
        );
    }

    #[test]
    fn gray_seed_gives_gray_ramp() {
        for (_, color) in tint_ramp(Color::new(128, 128, 128)) {
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
        }
        let ramp = tint_ramp(Color::new(128, 128, 128));
        assert_eq!(ramp[0].1, Color::new(250, 250, 250));
    }

    #[test]
    fn ramp_keeps_seed_hue() {
        let seed = Color::new(61, 174, 233);
        let mid = tint_ramp(seed)[13].1;
        assert!((mid.hsl_hue() - seed.hsl_hue()).abs() < 2.0);
    }

    #[test]
    fn border_quarter_mix() {
        let border = border(Color::new(255, 255, 255), Color::new(0, 0, 0));
        assert_eq!(border.to_hex(), "#bfbfbf");
    }
}
