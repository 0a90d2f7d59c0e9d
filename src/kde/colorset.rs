//! Color sets: role-based colors for one palette state.

use crate::color::Color;
use crate::kde::config::ConfigStore;
use crate::kde::effects::StateEffects;

/// Amount the active background is pulled toward the active foreground.
const ACTIVE_BACKGROUND_TINT: f32 = 0.4;

/// The three states a palette can be queried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteState {
    Active,
    Inactive,
    Disabled,
}

impl PaletteState {
    pub const ALL: [PaletteState; 3] = [
        PaletteState::Active,
        PaletteState::Inactive,
        PaletteState::Disabled,
    ];
}

/// The color sets a scheme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    View,
    Window,
    Button,
    Selection,
    Tooltip,
    Complementary,
    Header,
}

impl ColorRole {
    pub const ALL: [ColorRole; 7] = [
        ColorRole::View,
        ColorRole::Window,
        ColorRole::Button,
        ColorRole::Selection,
        ColorRole::Tooltip,
        ColorRole::Complementary,
        ColorRole::Header,
    ];

    /// The kdeglobals group holding this set's colors.
    pub fn group_name(self) -> &'static str {
        match self {
            ColorRole::View => "Colors:View",
            ColorRole::Window => "Colors:Window",
            ColorRole::Button => "Colors:Button",
            ColorRole::Selection => "Colors:Selection",
            ColorRole::Tooltip => "Colors:Tooltip",
            ColorRole::Complementary => "Colors:Complementary",
            ColorRole::Header => "Colors:Header",
        }
    }

    fn defaults(self) -> &'static RoleDefaults {
        match self {
            ColorRole::View => &VIEW_DEFAULTS,
            ColorRole::Window => &WINDOW_DEFAULTS,
            ColorRole::Button => &BUTTON_DEFAULTS,
            ColorRole::Selection => &SELECTION_DEFAULTS,
            ColorRole::Tooltip => &TOOLTIP_DEFAULTS,
            ColorRole::Complementary => &COMPLEMENTARY_DEFAULTS,
            ColorRole::Header => &HEADER_DEFAULTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundRole {
    Normal,
    Alternate,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForegroundRole {
    Normal,
    Inactive,
    Active,
    Link,
    Visited,
    Negative,
    Neutral,
    Positive,
}

impl ForegroundRole {
    const ALL: [ForegroundRole; 8] = [
        ForegroundRole::Normal,
        ForegroundRole::Inactive,
        ForegroundRole::Active,
        ForegroundRole::Link,
        ForegroundRole::Visited,
        ForegroundRole::Negative,
        ForegroundRole::Neutral,
        ForegroundRole::Positive,
    ];

    fn key(self) -> &'static str {
        match self {
            ForegroundRole::Normal => "ForegroundNormal",
            ForegroundRole::Inactive => "ForegroundInactive",
            ForegroundRole::Active => "ForegroundActive",
            ForegroundRole::Link => "ForegroundLink",
            ForegroundRole::Visited => "ForegroundVisited",
            ForegroundRole::Negative => "ForegroundNegative",
            ForegroundRole::Neutral => "ForegroundNeutral",
            ForegroundRole::Positive => "ForegroundPositive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationRole {
    Focus,
    Hover,
}

/// Colors of one set in one state. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    background: [Color; 3],
    foreground: [Color; 8],
    decoration: [Color; 2],
}

impl ColorSet {
    pub fn background(&self, role: BackgroundRole) -> Color {
        self.background[role as usize]
    }

    pub fn foreground(&self, role: ForegroundRole) -> Color {
        self.foreground[role as usize]
    }

    pub fn decoration(&self, role: DecorationRole) -> Color {
        self.decoration[role as usize]
    }

    /// Read the set for `role` in `state`, falling back to Breeze defaults for
    /// missing entries and applying the state's color effects.
    pub fn load<S: ConfigStore + ?Sized>(store: &S, state: PaletteState, role: ColorRole) -> Self {
        let group = source_group(store, state, role);
        let defaults = role.defaults();
        let read = |key: &str, fallback: [u8; 3]| {
            store
                .read_color(group, key)
                .unwrap_or(Color::new(fallback[0], fallback[1], fallback[2]))
        };

        let normal_bg = read("BackgroundNormal", defaults.background);
        let alternate_bg = read("BackgroundAlternate", defaults.alternate);
        let foreground = ForegroundRole::ALL.map(|fg| read(fg.key(), defaults.foreground[fg as usize]));
        let decoration = [
            read("DecorationFocus", DECORATION_FOCUS),
            read("DecorationHover", DECORATION_HOVER),
        ];

        let raw = ColorSet {
            background: [normal_bg, alternate_bg, normal_bg],
            foreground,
            decoration,
        };

        let mut set = match state {
            PaletteState::Active => raw,
            _ => raw.with_effects(&StateEffects::load(store, state)),
        };
        // from the state-adjusted colors
        set.background[BackgroundRole::Active as usize] = set
            .background(BackgroundRole::Normal)
            .mix(set.foreground(ForegroundRole::Active), ACTIVE_BACKGROUND_TINT);
        set
    }

    /// Contrast effects only apply to foregrounds; decorations take the
    /// background effects.
    fn with_effects(&self, effects: &StateEffects) -> Self {
        if !effects.is_enabled() {
            return *self;
        }
        let normal_bg = self.background(BackgroundRole::Normal);
        ColorSet {
            background: self.background.map(|c| effects.apply_background(c)),
            foreground: self.foreground.map(|c| effects.apply_foreground(c, normal_bg)),
            decoration: self.decoration.map(|c| effects.apply_background(c)),
        }
    }
}

/// The inactive header may carry its own nested group.
fn source_group<S: ConfigStore + ?Sized>(
    store: &S,
    state: PaletteState,
    role: ColorRole,
) -> &'static str {
    const INACTIVE_HEADER: &str = "Colors:Header][Inactive";
    if role == ColorRole::Header && state == PaletteState::Inactive && store.has_group(INACTIVE_HEADER)
    {
        INACTIVE_HEADER
    } else {
        role.group_name()
    }
}

/// All color sets of the three states, read from one configuration snapshot.
#[derive(Debug, Clone)]
pub struct Palette {
    sets: [[ColorSet; 7]; 3],
}

impl Palette {
    pub fn load<S: ConfigStore + ?Sized>(store: &S) -> Self {
        let sets = PaletteState::ALL.map(|state| ColorRole::ALL.map(|role| store.color_set(state, role)));
        Self { sets }
    }

    pub fn get(&self, state: PaletteState, role: ColorRole) -> &ColorSet {
        &self.sets[state as usize][role as usize]
    }
}

struct RoleDefaults {
    background: [u8; 3],
    alternate: [u8; 3],
    /// Indexed by `ForegroundRole`.
    foreground: [[u8; 3]; 8],
}

const DECORATION_FOCUS: [u8; 3] = [61, 174, 233];
const DECORATION_HOVER: [u8; 3] = [147, 206, 233];

const fn common_foreground(normal: [u8; 3], inactive: [u8; 3]) -> [[u8; 3]; 8] {
    [
        normal,
        inactive,
        [61, 174, 233],
        [41, 128, 185],
        [155, 89, 182],
        [218, 68, 83],
        [246, 116, 0],
        [39, 174, 96],
    ]
}

static VIEW_DEFAULTS: RoleDefaults = RoleDefaults {
    background: [255, 255, 255],
    alternate: [247, 247, 247],
    foreground: common_foreground([35, 38, 41], [112, 125, 138]),
};

static WINDOW_DEFAULTS: RoleDefaults = RoleDefaults {
    background: [239, 240, 241],
    alternate: [227, 229, 231],
    foreground: common_foreground([35, 38, 41], [112, 125, 138]),
};

static BUTTON_DEFAULTS: RoleDefaults = RoleDefaults {
    background: [252, 252, 252],
    alternate: [163, 212, 250],
    foreground: common_foreground([35, 38, 41], [112, 125, 138]),
};

static SELECTION_DEFAULTS: RoleDefaults = RoleDefaults {
    background: [61, 174, 233],
    alternate: [163, 212, 250],
    foreground: [
        [255, 255, 255],
        [112, 125, 138],
        [255, 255, 255],
        [253, 188, 75],
        [189, 195, 199],
        [218, 68, 83],
        [246, 116, 0],
        [39, 174, 96],
    ],
};

static TOOLTIP_DEFAULTS: RoleDefaults = RoleDefaults {
    background: [247, 247, 247],
    alternate: [239, 240, 241],
    foreground: common_foreground([35, 38, 41], [112, 125, 138]),
};

static COMPLEMENTARY_DEFAULTS: RoleDefaults = RoleDefaults {
    background: [42, 46, 50],
    alternate: [27, 30, 32],
    foreground: [
        [252, 252, 252],
        [161, 169, 177],
        [61, 174, 233],
        [29, 153, 243],
        [155, 89, 182],
        [218, 68, 83],
        [246, 116, 0],
        [39, 174, 96],
    ],
};

static HEADER_DEFAULTS: RoleDefaults = RoleDefaults {
    background: [222, 224, 226],
    alternate: [239, 240, 241],
    foreground: common_foreground([35, 38, 41], [112, 125, 138]),
};
