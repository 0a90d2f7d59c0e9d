//! The general desktop-theme mapping (`*-breeze` keys).

use crate::color::Color;
use crate::kde::colorset::{
    BackgroundRole as Bg, ColorRole, ColorSet, DecorationRole as Deco, ForegroundRole as Fg,
    Palette, PaletteState,
};
use crate::kde::config::ConfigStore;
use crate::pipeline::mix::border;
use crate::theme::ThemeMapping;

/// Group holding the window manager's titlebar colors.
pub const WM_GROUP: &str = "WM";

/// Resolve the general mapping from one configuration snapshot.
pub fn resolve_general<S: ConfigStore + ?Sized>(store: &S) -> ThemeMapping {
    let palette = Palette::load(store);

    let mut m = ThemeMapping::new();
    insert_state(&mut m, &palette, PaletteState::Active, &ACTIVE_KEYS);
    insert_state(&mut m, &palette, PaletteState::Inactive, &BACKDROP_KEYS);
    insert_state(&mut m, &palette, PaletteState::Disabled, &INSENSITIVE_KEYS);
    insert_state(&mut m, &palette, PaletteState::Disabled, &INSENSITIVE_BACKDROP_KEYS);

    // State-independent colors
    let view = palette.get(PaletteState::Active, ColorRole::View);
    m.insert("link-color-breeze", view.foreground(Fg::Link));
    m.insert("link-visited-color-breeze", view.foreground(Fg::Visited));
    m.insert("content-view-bg-breeze", view.background(Bg::Normal));

    let tooltip = palette.get(PaletteState::Active, ColorRole::Tooltip);
    let tooltip_fg = tooltip.foreground(Fg::Normal);
    let tooltip_bg = tooltip.background(Bg::Normal);
    m.insert("tooltip-text-breeze", tooltip_fg);
    m.insert("tooltip-background-breeze", tooltip_bg);
    m.insert("tooltip-border-breeze", border(tooltip_bg, tooltip_fg));

    insert_headers(&mut m, store, &palette);
    m
}

/// Key names for one state section. Sections differ only in naming.
struct StateKeys {
    fg: &'static str,
    text: &'static str,
    bg: &'static str,
    base: &'static str,
    selected_bg: &'static str,
    selected_fg: &'static str,
    /// Extra keys carrying the selection background.
    selected_bg_extra: &'static [&'static str],
    button_background: &'static str,
    button_hover: &'static str,
    button_focus: &'static str,
    button_foreground: &'static str,
    button_foreground_active: &'static str,
    borders: &'static str,
    warning: &'static str,
    success: &'static str,
    error: &'static str,
}

const ACTIVE_KEYS: StateKeys = StateKeys {
    fg: "theme-fg-color-breeze",
    text: "theme-text-color-breeze",
    bg: "theme-bg-color-breeze",
    base: "theme-base-color-breeze",
    selected_bg: "theme-selected-bg-color-breeze",
    selected_fg: "theme-selected-fg-color-breeze",
    selected_bg_extra: &[],
    button_background: "theme-button-background-normal-breeze",
    button_hover: "theme-button-decoration-hover-breeze",
    button_focus: "theme-button-decoration-focus-breeze",
    button_foreground: "theme-button-foreground-normal-breeze",
    button_foreground_active: "theme-button-foreground-active-breeze",
    borders: "borders-breeze",
    warning: "warning-color-breeze",
    success: "success-color-breeze",
    error: "error-color-breeze",
};

const BACKDROP_KEYS: StateKeys = StateKeys {
    fg: "theme-unfocused-fg-color-breeze",
    text: "theme-unfocused-text-color-breeze",
    bg: "theme-unfocused-bg-color-breeze",
    base: "theme-unfocused-base-color-breeze",
    selected_bg: "theme-unfocused-selected-bg-color-breeze",
    selected_fg: "theme-unfocused-selected-fg-color-breeze",
    selected_bg_extra: &["theme-unfocused-selected-bg-color-alt-breeze"],
    button_background: "theme-button-background-backdrop-breeze",
    button_hover: "theme-button-decoration-hover-backdrop-breeze",
    button_focus: "theme-button-decoration-focus-backdrop-breeze",
    button_foreground: "theme-button-foreground-backdrop-breeze",
    button_foreground_active: "theme-button-foreground-active-backdrop-breeze",
    borders: "unfocused-borders-breeze",
    warning: "warning-color-backdrop-breeze",
    success: "success-color-backdrop-breeze",
    error: "error-color-backdrop-breeze",
};

const INSENSITIVE_KEYS: StateKeys = StateKeys {
    fg: "insensitive-fg-color-breeze",
    text: "insensitive-base-fg-color-breeze",
    bg: "insensitive-bg-color-breeze",
    base: "insensitive-base-color-breeze",
    selected_bg: "insensitive-selected-bg-color-breeze",
    selected_fg: "insensitive-selected-fg-color-breeze",
    selected_bg_extra: &[],
    button_background: "theme-button-background-insensitive-breeze",
    button_hover: "theme-button-decoration-hover-insensitive-breeze",
    button_focus: "theme-button-decoration-focus-insensitive-breeze",
    button_foreground: "theme-button-foreground-insensitive-breeze",
    button_foreground_active: "theme-button-foreground-active-insensitive-breeze",
    borders: "insensitive-borders-breeze",
    warning: "warning-color-insensitive-breeze",
    success: "success-color-insensitive-breeze",
    error: "error-color-insensitive-breeze",
};

// Same colors as insensitive for now, kept as separate keys for consumers.
const INSENSITIVE_BACKDROP_KEYS: StateKeys = StateKeys {
    fg: "insensitive-unfocused-fg-color-breeze",
    text: "theme-unfocused-view-text-color-breeze",
    bg: "insensitive-unfocused-bg-color-breeze",
    base: "theme-unfocused-view-bg-color-breeze",
    selected_bg: "insensitive-unfocused-selected-bg-color-breeze",
    selected_fg: "insensitive-unfocused-selected-fg-color-breeze",
    selected_bg_extra: &[],
    button_background: "theme-button-background-backdrop-insensitive-breeze",
    button_hover: "theme-button-decoration-hover-backdrop-insensitive-breeze",
    button_focus: "theme-button-decoration-focus-backdrop-insensitive-breeze",
    button_foreground: "theme-button-foreground-backdrop-insensitive-breeze",
    button_foreground_active: "theme-button-foreground-active-backdrop-insensitive-breeze",
    borders: "unfocused-insensitive-borders-breeze",
    warning: "warning-color-insensitive-backdrop-breeze",
    success: "success-color-insensitive-backdrop-breeze",
    error: "error-color-insensitive-backdrop-breeze",
};

fn insert_state(m: &mut ThemeMapping, palette: &Palette, state: PaletteState, keys: &StateKeys) {
    let window = palette.get(state, ColorRole::Window);
    let view = palette.get(state, ColorRole::View);
    let selection = palette.get(state, ColorRole::Selection);
    let button = palette.get(state, ColorRole::Button);

    m.insert(keys.fg, window.foreground(Fg::Normal));
    m.insert(keys.bg, window.background(Bg::Normal));
    m.insert(keys.text, view.foreground(Fg::Normal));
    m.insert(keys.base, view.background(Bg::Normal));
    m.insert(keys.selected_bg, selection.background(Bg::Normal));
    m.insert(keys.selected_fg, selection.foreground(Fg::Normal));
    for key in keys.selected_bg_extra {
        m.insert(*key, selection.background(Bg::Normal));
    }

    m.insert(keys.button_background, button.background(Bg::Normal));
    m.insert(keys.button_hover, button.decoration(Deco::Hover));
    m.insert(keys.button_focus, button.decoration(Deco::Focus));
    m.insert(keys.button_foreground, button.foreground(Fg::Normal));
    m.insert(keys.button_foreground_active, selection.foreground(Fg::Normal));

    m.insert(
        keys.borders,
        border(window.background(Bg::Normal), window.foreground(Fg::Normal)),
    );
    m.insert(keys.warning, view.foreground(Fg::Neutral));
    m.insert(keys.success, view.foreground(Fg::Positive));
    m.insert(keys.error, view.foreground(Fg::Negative));

    if state == PaletteState::Active {
        m.insert("theme-view-hover-decoration-color-breeze", view.decoration(Deco::Hover));
        m.insert("theme-view-active-decoration-color-breeze", view.decoration(Deco::Hover));
        m.insert(
            "theme-hovering-selected-bg-color-breeze",
            selection.decoration(Deco::Hover),
        );
    }
}

/// Colors for one header or titlebar key family.
struct HeaderColors {
    background: Color,
    foreground: Color,
    background_light: Color,
    foreground_backdrop: Color,
    background_backdrop: Color,
}

impl HeaderColors {
    fn from_sets(active: &ColorSet, inactive: &ColorSet, window: &ColorSet) -> Self {
        Self {
            background: active.background(Bg::Normal),
            foreground: active.foreground(Fg::Normal),
            background_light: window.background(Bg::Normal),
            foreground_backdrop: inactive.foreground(Fg::Normal),
            background_backdrop: inactive.background(Bg::Normal),
        }
    }

    fn insert(&self, m: &mut ThemeMapping, family: &str) {
        let key = |suffix: &str| format!("theme-{family}-{suffix}-breeze");
        m.insert(key("background"), self.background);
        m.insert(key("foreground"), self.foreground);
        m.insert(key("background-light"), self.background_light);
        m.insert(key("foreground-backdrop"), self.foreground_backdrop);
        m.insert(key("background-backdrop"), self.background_backdrop);
        // insensitive variants follow the backdrop foreground
        m.insert(key("foreground-insensitive"), self.foreground_backdrop);
        m.insert(key("foreground-insensitive-backdrop"), self.foreground_backdrop);
    }
}

/// Headers use the scheme's own header set when it has one; otherwise headers
/// follow the window set and titlebars take the window manager's colors.
fn insert_headers<S: ConfigStore + ?Sized>(m: &mut ThemeMapping, store: &S, palette: &Palette) {
    let window = palette.get(PaletteState::Active, ColorRole::Window);

    if store.supports_color_set(ColorRole::Header) {
        let colors = HeaderColors::from_sets(
            palette.get(PaletteState::Active, ColorRole::Header),
            palette.get(PaletteState::Inactive, ColorRole::Header),
            window,
        );
        colors.insert(m, "header");
        colors.insert(m, "titlebar");
        return;
    }

    HeaderColors::from_sets(
        window,
        palette.get(PaletteState::Inactive, ColorRole::Window),
        window,
    )
    .insert(m, "header");

    let wm = |key: &str| store.read_color(WM_GROUP, key).unwrap_or(Color::INVALID);
    HeaderColors {
        background: wm("activeBackground"),
        foreground: wm("activeForeground"),
        background_light: window.background(Bg::Normal),
        foreground_backdrop: wm("inactiveForeground"),
        background_backdrop: wm("inactiveBackground"),
    }
    .insert(m, "titlebar");
}
