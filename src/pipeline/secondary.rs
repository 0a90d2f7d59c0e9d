//! The Discord/Vencord theme mapping: structural backgrounds plus two tint ramps.

use crate::kde::colorset::{BackgroundRole as Bg, ColorRole, PaletteState};
use crate::kde::config::ConfigStore;
use crate::pipeline::mix::tint_ramp;
use crate::theme::ThemeMapping;

/// Resolve the secondary mapping from the active palette state.
pub fn resolve_secondary<S: ConfigStore + ?Sized>(store: &S) -> ThemeMapping {
    let view = store.color_set(PaletteState::Active, ColorRole::View);
    let window = store.color_set(PaletteState::Active, ColorRole::Window);
    let selection = store.color_set(PaletteState::Active, ColorRole::Selection);

    let view_bg = view.background(Bg::Normal);
    let view_alt = view.background(Bg::Alternate);
    let window_bg = window.background(Bg::Normal);
    let window_alt = window.background(Bg::Alternate);
    let window_active = window.background(Bg::Active);
    let accent = selection.background(Bg::Normal);

    let mut m = ThemeMapping::new();
    m.insert("background-primary", window_alt);
    m.insert("background-secondary", view_bg);
    m.insert("background-secondary-alt", view_bg);
    m.insert("background-tertiary", view_alt);
    m.insert("background-accent", window_bg);
    m.insert("background-floating", window_bg);
    m.insert("background-nested-floating", view_alt);
    m.insert("background-modifier-selected", window_active);
    m.insert("background-modifier-hover", window_active);
    m.insert("background-modifier-active", window_active);
    m.insert("modal-background", window_bg);
    m.insert("modal-footer-background", window_bg);
    m.insert("channeltextarea-background", view_bg);
    m.insert("input-background", view_bg);

    m.insert("scrollbar-thin-thumb", accent);
    m.insert("scrollbar-auto-thumb", accent);
    m.insert("scrollbar-auto-track", window_bg);
    m.insert("scrollbar-auto-scrollbar-color-thumb", accent);
    m.insert("scrollbar-auto-scrollbar-color-track", window_bg);

    // brand follows the accent, primary the view's alternate background
    for (step, color) in tint_ramp(accent) {
        m.insert(format!("brand-{step}"), color);
    }
    for (step, color) in tint_ramp(view_alt) {
        m.insert(format!("primary-{step}"), color);
    }
    m
}
