//! Inactive/disabled state effects (`[ColorEffects:*]` groups).
//!
//! Intensity and desaturation work on HSL lightness and saturation. Tint keeps
//! the base color's lightness while pulling hue and saturation toward the
//! target.

use crate::color::Color;
use crate::kde::colorset::PaletteState;
use crate::kde::config::ConfigStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntensityEffect {
    None,
    Shade,
    Darken,
    Lighten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorEffect {
    None,
    Desaturate,
    Fade,
    Tint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContrastEffect {
    None,
    Fade,
    Tint,
}

/// Effects configured for one non-active palette state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateEffects {
    enabled: bool,
    intensity: (IntensityEffect, f32),
    color: (ColorEffect, f32),
    color_target: Color,
    contrast: (ContrastEffect, f32),
}

impl StateEffects {
    /// Read the effects for `state`. The active state never has effects.
    pub fn load<S: ConfigStore + ?Sized>(store: &S, state: PaletteState) -> Self {
        let group = match state {
            PaletteState::Active => return Self::none(),
            PaletteState::Inactive => "ColorEffects:Inactive",
            PaletteState::Disabled => "ColorEffects:Disabled",
        };
        let disabled = state == PaletteState::Disabled;

        let enabled = read_bool(store, group, "Enable").unwrap_or(disabled);
        if !enabled {
            return Self::none();
        }

        // KDE defaults: disabled darkens and fades, inactive desaturates and tints
        let (intensity_default, color_default, contrast_default) =
            if disabled { (2, 0, 1) } else { (0, 1, 2) };

        let intensity = match read_int(store, group, "IntensityEffect").unwrap_or(intensity_default) {
            1 => IntensityEffect::Shade,
            2 => IntensityEffect::Darken,
            3 => IntensityEffect::Lighten,
            _ => IntensityEffect::None,
        };
        let color = match read_int(store, group, "ColorEffect").unwrap_or(color_default) {
            1 => ColorEffect::Desaturate,
            2 => ColorEffect::Fade,
            3 => ColorEffect::Tint,
            _ => ColorEffect::None,
        };
        let contrast = match read_int(store, group, "ContrastEffect").unwrap_or(contrast_default) {
            1 => ContrastEffect::Fade,
            2 => ContrastEffect::Tint,
            _ => ContrastEffect::None,
        };

        let default_target = if disabled {
            Color::new(56, 56, 56)
        } else {
            Color::new(112, 111, 110)
        };

        Self {
            enabled,
            intensity: (
                intensity,
                read_f32(store, group, "IntensityAmount").unwrap_or(if disabled { 0.10 } else { 0.0 }),
            ),
            color: (
                color,
                read_f32(store, group, "ColorAmount").unwrap_or(if disabled { 0.0 } else { -0.9 }),
            ),
            color_target: store.read_color(group, "Color").unwrap_or(default_target),
            contrast: (
                contrast,
                read_f32(store, group, "ContrastAmount").unwrap_or(if disabled { 0.65 } else { 0.25 }),
            ),
        }
    }

    fn none() -> Self {
        Self {
            enabled: false,
            intensity: (IntensityEffect::None, 0.0),
            color: (ColorEffect::None, 0.0),
            color_target: Color::INVALID,
            contrast: (ContrastEffect::None, 0.0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Intensity then color effect.
    pub fn apply_background(&self, color: Color) -> Color {
        if !self.enabled {
            return color;
        }
        let color = self.apply_intensity(color);
        self.apply_color(color)
    }

    /// Contrast effect against `background`, then the background effects.
    pub fn apply_foreground(&self, color: Color, background: Color) -> Color {
        if !self.enabled {
            return color;
        }
        let (effect, amount) = self.contrast;
        let contrasted = match effect {
            ContrastEffect::None => color,
            ContrastEffect::Fade => color.mix(background, amount),
            ContrastEffect::Tint => tint(color, background, amount),
        };
        self.apply_background(contrasted)
    }

    fn apply_intensity(&self, color: Color) -> Color {
        let (effect, amount) = self.intensity;
        if effect == IntensityEffect::None {
            return color;
        }
        let mut hsl = color.to_hsl();
        hsl.lightness = match effect {
            IntensityEffect::Shade => hsl.lightness + amount,
            IntensityEffect::Darken => hsl.lightness * (1.0 - amount),
            IntensityEffect::Lighten => 1.0 - (1.0 - hsl.lightness) * (1.0 - amount),
            IntensityEffect::None => hsl.lightness,
        }
        .clamp(0.0, 1.0);
        with_alpha_of(Color::from_hsl(hsl), color)
    }

    fn apply_color(&self, color: Color) -> Color {
        let (effect, amount) = self.color;
        match effect {
            ColorEffect::None => color,
            ColorEffect::Desaturate => {
                let mut hsl = color.to_hsl();
                hsl.saturation = (hsl.saturation * (1.0 - amount)).clamp(0.0, 1.0);
                with_alpha_of(Color::from_hsl(hsl), color)
            }
            ColorEffect::Fade => color.mix(self.color_target, amount),
            ColorEffect::Tint => tint(color, self.color_target, amount),
        }
    }
}

/// Blend toward `target` but keep the lightness of `base`.
fn tint(base: Color, target: Color, amount: f32) -> Color {
    let mut hsl = base.mix(target, amount).to_hsl();
    hsl.lightness = base.to_hsl().lightness;
    with_alpha_of(Color::from_hsl(hsl), base)
}

fn with_alpha_of(color: Color, source: Color) -> Color {
    Color { a: source.a, ..color }
}

fn read_bool<S: ConfigStore + ?Sized>(store: &S, group: &str, key: &str) -> Option<bool> {
    match store.read(group, key)?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_int<S: ConfigStore + ?Sized>(store: &S, group: &str, key: &str) -> Option<i32> {
    store.read(group, key)?.trim().parse().ok()
}

fn read_f32<S: ConfigStore + ?Sized>(store: &S, group: &str, key: &str) -> Option<f32> {
    store
        .read(group, key)?
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kde::config::KdeConfig;

    #[test]
    fn active_state_has_no_effects() {
        let config = KdeConfig::parse("[ColorEffects:Disabled]\nEnable=true\n");
        assert!(!StateEffects::load(&config, PaletteState::Active).is_enabled());
    }

    #[test]
    fn inactive_disabled_by_default() {
        let effects = StateEffects::load(&KdeConfig::default(), PaletteState::Inactive);
        assert!(!effects.is_enabled());
        let c = Color::new(1, 2, 3);
        assert_eq!(effects.apply_foreground(c, Color::new(255, 255, 255)), c);
    }

    #[test]
    fn disabled_enabled_by_default() {
        let effects = StateEffects::load(&KdeConfig::default(), PaletteState::Disabled);
        assert!(effects.is_enabled());
    }

    #[test]
    fn explicit_disable_turns_off_effects() {
        let config = KdeConfig::parse("[ColorEffects:Disabled]\nEnable=false\n");
        assert!(!StateEffects::load(&config, PaletteState::Disabled).is_enabled());
    }

    #[test]
    fn contrast_fade_mixes_toward_background() {
        let config = KdeConfig::parse(
            "[ColorEffects:Inactive]\nEnable=true\nIntensityEffect=0\nColorEffect=0\nContrastEffect=1\nContrastAmount=0.5\n",
        );
        let effects = StateEffects::load(&config, PaletteState::Inactive);
        let fg = effects.apply_foreground(Color::new(0, 0, 0), Color::new(200, 100, 50));
        assert_eq!(fg, Color::new(100, 50, 25));
    }

    #[test]
    fn darken_reduces_lightness() {
        let config = KdeConfig::parse(
            "[ColorEffects:Disabled]\nIntensityEffect=2\nIntensityAmount=0.5\nColorEffect=0\nContrastEffect=0\n",
        );
        let effects = StateEffects::load(&config, PaletteState::Disabled);
        let bg = effects.apply_background(Color::new(200, 200, 200));
        assert_eq!(bg, Color::new(100, 100, 100));
    }

    #[test]
    fn full_desaturation_yields_gray() {
        let config = KdeConfig::parse(
            "[ColorEffects:Inactive]\nEnable=true\nIntensityEffect=0\nColorEffect=1\nColorAmount=1\nContrastEffect=0\n",
        );
        let effects = StateEffects::load(&config, PaletteState::Inactive);
        let c = effects.apply_background(Color::new(255, 0, 0));
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn fade_mixes_toward_effect_color() {
        let config = KdeConfig::parse(
            "[ColorEffects:Inactive]\nEnable=true\nIntensityEffect=0\nColorEffect=2\nColorAmount=1\nColor=10,20,30\nContrastEffect=0\n",
        );
        let effects = StateEffects::load(&config, PaletteState::Inactive);
        assert_eq!(
            effects.apply_background(Color::new(255, 255, 255)),
            Color::new(10, 20, 30)
        );
    }

    #[test]
    fn tint_keeps_base_lightness() {
        let base = Color::new(128, 128, 128);
        let tinted = tint(base, Color::new(0, 0, 255), 0.5);
        let delta = (tinted.to_hsl().lightness - base.to_hsl().lightness).abs();
        assert!(delta < 0.01, "lightness drifted by {delta}");
        assert!(tinted.b > tinted.r);
    }
}
