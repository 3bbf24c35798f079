//! Color palette and the visit-every-layer theme rotation.

use crate::color::Rgb;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
}

pub const PALETTE: [Theme; 5] = [
    Theme {
        background: Rgb::new(0xda, 0xff, 0xaa),
        foreground: Rgb::new(0xee, 0x36, 0x36),
    },
    Theme {
        background: Rgb::new(0xff, 0xf3, 0xb0),
        foreground: Rgb::new(0x9a, 0x17, 0xa9),
    },
    Theme {
        background: Rgb::new(0xff, 0xde, 0xde),
        foreground: Rgb::new(0x0a, 0xd1, 0x5c),
    },
    Theme {
        background: Rgb::new(0xcc, 0xfb, 0xff),
        foreground: Rgb::new(0xff, 0x6e, 0x16),
    },
    Theme {
        background: Rgb::new(0xe9, 0xf5, 0xdb),
        foreground: Rgb::new(0xf1, 0x45, 0x8b),
    },
];

/// Concrete colors for every themed region, derived from a [`Theme`].
///
/// Hover colors live here too, so the surface looks them up from the current
/// theme when the pointer enters a button instead of rebinding handlers on
/// every theme change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    pub page_background: Rgb,
    pub text: Rgb,
    pub log_text: Rgb,
    pub button_background: Rgb,
    pub button_text: Rgb,
    pub button_hover_background: Rgb,
    pub overlay_background: Rgb,
    pub overlay_text: Rgb,
}

impl Theme {
    pub fn styles(&self) -> ThemeStyles {
        let inverted = self.foreground.inverted();
        ThemeStyles {
            page_background: self.background,
            text: self.foreground,
            log_text: inverted,
            button_background: self.foreground,
            button_text: self.background,
            button_hover_background: inverted,
            overlay_background: self.foreground,
            overlay_text: self.background,
        }
    }
}

/// Tracks which layers were visited since the last palette rotation.
#[derive(Clone, Debug, Default)]
pub struct ThemeCycle {
    pub cycle_count: usize,
    visited: FnvHashSet<usize>,
}

impl ThemeCycle {
    /// Record a visit. Returns `true` when this visit completed a cycle, in
    /// which case the count has been bumped and the visited set cleared.
    pub fn visit(&mut self, index: usize, layer_count: usize) -> bool {
        self.visited.insert(index);
        if self.visited.len() < layer_count {
            return false;
        }
        self.cycle_count += 1;
        self.visited.clear();
        true
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn has_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }
}

/// Palette entry for a cycle count.
#[inline]
pub fn theme_for_cycle(palette: &[Theme], cycle_index: usize) -> Theme {
    palette[cycle_index % palette.len()]
}
