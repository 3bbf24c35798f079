//! Traversal state machine.
//!
//! The controller owns every piece of session state and reacts to gestures by
//! mutating it and returning the surface updates the frontend should apply.
//! It never touches the DOM itself.

use crate::catalog::{self, DisplayMode, UiLabel, LAYER_COUNT};
use crate::color::Rgb;
use crate::config::{ZoomConfig, TOKEN_DOWN, TOKEN_MODE, TOKEN_UP};
use crate::error::CoreError;
use crate::theme::{theme_for_cycle, Theme, ThemeCycle, ThemeStyles};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards larger scales.
    Up,
    /// Towards smaller scales.
    Down,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> isize {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            Direction::Up => TOKEN_UP,
            Direction::Down => TOKEN_DOWN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpTopic {
    About,
    Navigate,
}

impl HelpTopic {
    pub fn text(self) -> &'static str {
        match self {
            HelpTopic::About => {
                "Powers of Ten: every layer is a step in scale, from the smallest \
                 known particles to whatever lies beyond the observable universe. \
                 Visit every layer and the colors change."
            }
            HelpTopic::Navigate => {
                "Scroll up or press Arrow Up to zoom out. Scroll down or press \
                 Arrow Down to zoom in. Click anywhere to change language. \
                 Press Space to show or hide the traversal log."
            }
        }
    }
}

/// A recognized user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Traverse(Direction),
    CycleMode,
    ToggleLog,
    ToggleHelp(HelpTopic),
}

/// A request to the rendering surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Create a layer node with `text` and fade it in; the previous node fades out.
    SpawnLayer { text: String, color: Rgb },
    /// Remove faded-out layer nodes once the transition is over.
    RetireStaleLayers { delay_ms: u32 },
    /// Scale factor for the zoom container.
    SetZoom(f64),
    SetLayerText(String),
    SetObjectLabel(String),
    SetTraversals(u64),
    SetGestureLog(String),
    SetButtonLabels { about: String, navigate: String },
    ApplyTheme(ThemeStyles),
    ShowOverlay(&'static str),
    HideOverlay,
    SetLogVisible(bool),
}

pub type Effects = SmallVec<[Effect; 8]>;

/// Append-only record of traversal and mode gestures.
#[derive(Clone, Debug, Default)]
pub struct GestureLog {
    text: String,
    entries: usize,
}

impl GestureLog {
    pub fn push(&mut self, token: &str) {
        self.text.push_str(token);
        self.entries += 1;
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

/// Container scale for a layer: `base ^ (count / 2 - index)`.
#[inline]
pub fn zoom_scale(base: f64, index: usize, layer_count: usize) -> f64 {
    base.powi((layer_count / 2) as i32 - index as i32)
}

/// `(index + delta) mod count`, wrapping in both directions.
#[inline]
pub fn wrap_index(index: usize, delta: isize, count: usize) -> usize {
    (index as isize + delta).rem_euclid(count as isize) as usize
}

pub struct TraversalController {
    config: ZoomConfig,
    layer_index: usize,
    mode: DisplayMode,
    traversals: u64,
    theme: Theme,
    cycle: ThemeCycle,
    log: GestureLog,
    log_visible: bool,
    overlay: Option<HelpTopic>,
}

impl TraversalController {
    pub fn new(config: ZoomConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            layer_index: config.home_layer,
            mode: config.initial_mode,
            traversals: 0,
            theme: theme_for_cycle(config.palette, 0),
            cycle: ThemeCycle::default(),
            log: GestureLog::default(),
            log_visible: false,
            overlay: None,
            config,
        })
    }

    /// Surface updates that bring a blank page to the start-up state.
    pub fn boot(&mut self) -> Effects {
        let mut fx = Effects::new();
        fx.push(Effect::SpawnLayer {
            text: self.current_text(),
            color: self.theme.foreground,
        });
        fx.push(Effect::SetObjectLabel(self.object_label()));
        fx.push(self.button_labels());
        fx.push(Effect::SetTraversals(self.traversals));
        fx.push(Effect::SetLogVisible(self.log_visible));
        fx.extend(self.apply_theme_cycle(self.cycle.cycle_count));
        log::info!(
            "[boot] layer={} mode={:?} palette={}",
            catalog::ENGLISH[self.layer_index],
            self.mode,
            self.config.palette_size()
        );
        fx
    }

    pub fn handle(&mut self, gesture: Gesture) -> Effects {
        match gesture {
            Gesture::Traverse(direction) => self.advance_layer(direction),
            Gesture::CycleMode => self.advance_mode(),
            Gesture::ToggleLog => self.toggle_log(),
            Gesture::ToggleHelp(topic) => self.toggle_help(topic),
        }
    }

    pub fn advance_layer(&mut self, direction: Direction) -> Effects {
        let mut fx = Effects::new();
        self.traversals += 1;
        self.log.push(direction.token());
        fx.push(Effect::SetTraversals(self.traversals));
        fx.push(Effect::SetGestureLog(self.log.as_str().to_string()));

        self.layer_index = wrap_index(self.layer_index, direction.delta(), LAYER_COUNT);
        fx.push(Effect::SetZoom(self.scale()));
        fx.push(Effect::SpawnLayer {
            text: self.current_text(),
            color: self.theme.foreground,
        });
        fx.push(Effect::RetireStaleLayers {
            delay_ms: self.config.transition_delay_ms,
        });
        log::debug!("[traverse] {:?} -> layer {}", direction, self.layer_index);

        if self.cycle.visit(self.layer_index, LAYER_COUNT) {
            log::info!("[theme] cycle {} complete", self.cycle.cycle_count);
            fx.extend(self.apply_theme_cycle(self.cycle.cycle_count));
        }

        fx.push(Effect::SetObjectLabel(self.object_label()));
        fx
    }

    pub fn advance_mode(&mut self) -> Effects {
        let mut fx = Effects::new();
        self.log.push(TOKEN_MODE);
        fx.push(Effect::SetGestureLog(self.log.as_str().to_string()));

        self.mode = self.mode.next();
        log::debug!("[mode] {:?}", self.mode);
        fx.push(Effect::SetObjectLabel(self.object_label()));
        fx.push(Effect::SetLayerText(self.current_text()));
        fx.push(self.button_labels());
        if let Some(topic) = self.overlay {
            fx.push(Effect::ShowOverlay(topic.text()));
        }
        fx
    }

    /// Select the palette entry for `cycle_index` and restyle every region.
    pub fn apply_theme_cycle(&mut self, cycle_index: usize) -> Effects {
        self.theme = theme_for_cycle(self.config.palette, cycle_index);
        let mut fx = Effects::new();
        fx.push(Effect::ApplyTheme(self.theme.styles()));
        fx
    }

    pub fn toggle_log(&mut self) -> Effects {
        self.log_visible = !self.log_visible;
        let mut fx = Effects::new();
        fx.push(Effect::SetLogVisible(self.log_visible));
        fx
    }

    /// Show the overlay for `topic`, or hide it when that topic is already shown.
    pub fn toggle_help(&mut self, topic: HelpTopic) -> Effects {
        let mut fx = Effects::new();
        if self.overlay == Some(topic) {
            self.overlay = None;
            fx.push(Effect::HideOverlay);
        } else {
            self.overlay = Some(topic);
            fx.push(Effect::ShowOverlay(topic.text()));
        }
        fx
    }

    fn button_labels(&self) -> Effect {
        Effect::SetButtonLabels {
            about: UiLabel::About.caption(self.mode),
            navigate: UiLabel::Navigate.caption(self.mode),
        }
    }

    #[inline]
    pub fn layer_index(&self) -> usize {
        self.layer_index
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[inline]
    pub fn traversals(&self) -> u64 {
        self.traversals
    }

    #[inline]
    pub fn theme_cycle_count(&self) -> usize {
        self.cycle.cycle_count
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.cycle.visited_count()
    }

    #[inline]
    pub fn gesture_log(&self) -> &GestureLog {
        &self.log
    }

    #[inline]
    pub fn log_visible(&self) -> bool {
        self.log_visible
    }

    #[inline]
    pub fn overlay(&self) -> Option<HelpTopic> {
        self.overlay
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Colors for the current theme, read by hover handlers at event time.
    #[inline]
    pub fn styles(&self) -> ThemeStyles {
        self.theme.styles()
    }

    pub fn current_text(&self) -> String {
        catalog::translate(self.layer_index, self.mode)
    }

    pub fn object_label(&self) -> String {
        catalog::object_label(self.layer_index, self.mode)
    }

    pub fn scale(&self) -> f64 {
        zoom_scale(self.config.scale_base, self.layer_index, LAYER_COUNT)
    }
}
