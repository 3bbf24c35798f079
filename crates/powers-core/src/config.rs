use crate::catalog::{self, DisplayMode, LAYER_COUNT};
use crate::error::CoreError;
use crate::theme::{Theme, PALETTE};

// Visual tuning

/// Zoom falloff per layer step; the container is scaled by
/// `SCALE_BASE ^ (LAYER_COUNT / 2 - layer_index)`.
pub const SCALE_BASE: f64 = 0.8;
/// Delay before layer nodes that faded out are removed.
pub const TRANSITION_DELAY_MS: u32 = 400;

// Gesture log tokens
pub const TOKEN_UP: &str = "@~";
pub const TOKEN_DOWN: &str = "_-";
pub const TOKEN_MODE: &str = "&.&";

#[derive(Clone, Debug)]
pub struct ZoomConfig {
    pub scale_base: f64,
    pub transition_delay_ms: u32,
    /// Theme rotation; its length is the palette size.
    pub palette: &'static [Theme],
    pub home_layer: usize,
    pub initial_mode: DisplayMode,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_base: SCALE_BASE,
            transition_delay_ms: TRANSITION_DELAY_MS,
            palette: &PALETTE,
            home_layer: catalog::home_index().unwrap_or(LAYER_COUNT / 2),
            initial_mode: DisplayMode::Morse,
        }
    }
}

impl ZoomConfig {
    #[inline]
    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }

    pub fn with_initial_mode(mut self, mode: DisplayMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.palette.is_empty() {
            return Err(CoreError::InvalidConfig("palette must not be empty"));
        }
        if !(self.scale_base.is_finite() && self.scale_base > 0.0) {
            return Err(CoreError::InvalidConfig("scale_base must be positive"));
        }
        if self.home_layer >= LAYER_COUNT {
            return Err(CoreError::InvalidConfig("home_layer out of range"));
        }
        Ok(())
    }
}
