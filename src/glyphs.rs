//! Icon palette and glyph resolution.
//!
//! Rendering glyphs belongs to the view layer; the editor only needs to map a
//! type key to a palette entry and to hand that entry to whatever renderer is
//! injected. Unknown type keys resolve to the `map-pin` fallback instead of
//! failing, so documents imported from elsewhere still render.

use crate::types::IconType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const FALLBACK_TYPE: &str = "map-pin";
pub const FALLBACK_GLYPH: &str = "MapPin";
pub const FALLBACK_COLOR: &str = "#3b82f6";

/// The stock venue palette: (type, label, glyph, color)
const DEFAULT_PALETTE: &[(&str, &str, &str, &str)] = &[
    ("stage", "Stage", "Drama", "#ef4444"),
    ("seating", "Seating", "Armchair", "#3b82f6"),
    ("food", "Food Stand", "Utensils", "#f59e0b"),
    ("drinks", "Drinks", "Coffee", "#06b6d4"),
    ("restroom", "Restroom", "WashingMachine", "#8b5cf6"),
    ("entrance", "Entrance", "DoorOpen", "#10b981"),
    ("exit", "Exit", "DoorClosed", "#dc2626"),
    ("parking", "Parking", "ParkingSquare", "#6366f1"),
    ("info", "Info Booth", "Info", "#0ea5e9"),
    ("first-aid", "First Aid", "Cross", "#ec4899"),
    ("speaker", "Speaker", "Speaker", "#14b8a6"),
    ("photo", "Photo Spot", "Camera", "#f97316"),
    ("merchandise", "Merch", "ShoppingBag", "#a855f7"),
    ("registration", "Registration", "ClipboardPen", "#22c55e"),
    ("security", "Security", "Shield", "#64748b"),
    ("wifi", "WiFi Zone", "Wifi", "#06b6d4"),
];

static DEFAULT_LIBRARY: Lazy<IconLibrary> = Lazy::new(|| {
    IconLibrary::from_types(
        DEFAULT_PALETTE
            .iter()
            .map(|(key, label, glyph, color)| IconType::new(*key, *label, *glyph, *color)),
    )
});

static FALLBACK: Lazy<IconType> =
    Lazy::new(|| IconType::new(FALLBACK_TYPE, "Location", FALLBACK_GLYPH, FALLBACK_COLOR));

/// Renders a palette entry into whatever the view layer draws with.
pub trait GlyphRenderer {
    type Output;

    fn render_glyph(&self, icon_type: &IconType, color: &str, size: f64) -> Self::Output;
}

/// An ordered palette indexed by type key.
#[derive(Debug, Clone)]
pub struct IconLibrary {
    types: Vec<IconType>,
    by_key: HashMap<String, usize>,
}

impl IconLibrary {
    /// Build a palette. Later entries with a repeated key replace earlier ones.
    pub fn from_types<I: IntoIterator<Item = IconType>>(types: I) -> Self {
        let mut library = Self {
            types: Vec::new(),
            by_key: HashMap::new(),
        };
        for icon_type in types {
            library.insert(icon_type);
        }
        library
    }

    /// The stock venue palette, built once.
    pub fn default_library() -> &'static IconLibrary {
        &*DEFAULT_LIBRARY
    }

    pub fn insert(&mut self, icon_type: IconType) {
        match self.by_key.get(&icon_type.type_key) {
            Some(&index) => self.types[index] = icon_type,
            None => {
                self.by_key.insert(icon_type.type_key.clone(), self.types.len());
                self.types.push(icon_type);
            }
        }
    }

    pub fn get(&self, type_key: &str) -> Option<&IconType> {
        self.by_key.get(type_key).map(|&index| &self.types[index])
    }

    /// Look up a type key, falling back to the generic map pin.
    pub fn resolve(&self, type_key: &str) -> &IconType {
        self.get(type_key).unwrap_or_else(|| &*FALLBACK)
    }

    pub fn types(&self) -> &[IconType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Render through `renderer`, resolving unknown keys to the fallback.
    pub fn render<R: GlyphRenderer>(&self, renderer: &R, type_key: &str, color: &str, size: f64) -> R::Output {
        renderer.render_glyph(self.resolve(type_key), color, size)
    }
}

impl Default for IconLibrary {
    fn default() -> Self {
        DEFAULT_LIBRARY.clone()
    }
}
