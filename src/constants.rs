// Element ids and class names shared with index.html.

// Regions
pub const ZOOM_CONTAINER_ID: &str = "zoom-container";
pub const OBJECT_DISPLAY_ID: &str = "current-object-display";
pub const TRAVERSAL_COUNT_ID: &str = "warp-tracker";
pub const GESTURE_LOG_ID: &str = "traversal-history-display";
pub const HELP_POPUP_ID: &str = "help-popup-shared";

// Auxiliary buttons
pub const ABOUT_BUTTON_ID: &str = "help-about";
pub const NAVIGATE_BUTTON_ID: &str = "help-navigate";

// Classes
pub const LAYER_CLASS: &str = "layer";
pub const VISIBLE_CLASS: &str = "visible";
pub const HELP_POPUP_CLASS: &str = "help-popup-base";

pub const TRAVERSAL_COUNT_PREFIX: &str = "Traverses: ";
