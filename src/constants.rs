//! Application-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Canvas Space
// ============================================================================

/// Lower bound of canvas-percentage space on each axis
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of canvas-percentage space on each axis
pub const PERCENT_MAX: f64 = 100.0;

/// Centre of the canvas in percentage space (click-to-place target)
pub const CANVAS_CENTER: (f64, f64) = (50.0, 50.0);

// ============================================================================
// Icon Defaults
// ============================================================================

/// Smallest allowed icon scale multiplier
pub const MIN_ICON_SIZE: f64 = 0.5;

/// Largest allowed icon scale multiplier
pub const MAX_ICON_SIZE: f64 = 3.0;

/// Default icon scale multiplier
pub const DEFAULT_ICON_SIZE: f64 = 1.0;

/// Rendered glyph radius at size 1.0, in canvas-local pixels
pub const ICON_HIT_RADIUS: f64 = 16.0;

/// Offset applied to a duplicated icon, in percent
pub const DUPLICATE_OFFSET: f64 = 5.0;

/// Duplicates never land past this coordinate, in percent
pub const DUPLICATE_MAX: f64 = 95.0;

/// Fallback icon color
pub const DEFAULT_ICON_COLOR: &str = "#3b82f6";

// ============================================================================
// Connector Defaults
// ============================================================================

/// Default connector stroke color
pub const DEFAULT_CONNECTOR_COLOR: &str = "#64748b";

/// Default connector stroke width in pixels
pub const DEFAULT_CONNECTOR_WIDTH: u32 = 2;

/// Thinnest allowed connector stroke
pub const MIN_CONNECTOR_WIDTH: u32 = 1;

/// Thickest allowed connector stroke
pub const MAX_CONNECTOR_WIDTH: u32 = 10;

// ============================================================================
// Layers
// ============================================================================

/// Id of the layer every fresh document starts with
pub const DEFAULT_LAYER_ID: &str = "default";

/// Display name of the default layer
pub const DEFAULT_LAYER_NAME: &str = "Default";

// ============================================================================
// History
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.5;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom step for one scroll wheel notch
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Zoom step for the zoom in/out buttons
pub const BUTTON_ZOOM_STEP: f64 = 0.25;

// ============================================================================
// Persistence
// ============================================================================

/// Version written into exported documents
pub const DOCUMENT_VERSION: u32 = 1;

/// Idle time after which a session's documents are evicted
pub const SESSION_TTL_SECS: u64 = 30 * 60;

// ============================================================================
// Notifications
// ============================================================================

/// Default toast display duration in milliseconds
pub const TOAST_DURATION_MS: u64 = 3000;

/// Maximum number of toasts kept at once
pub const MAX_TOASTS: usize = 5;
