//! Icon palette unit tests.

use mapboard::glyphs::{FALLBACK_TYPE, GlyphRenderer, IconLibrary};
use mapboard::types::IconType;

/// Renders to a tiny SVG-ish string so output can be compared.
struct TagRenderer;

impl GlyphRenderer for TagRenderer {
    type Output = String;

    fn render_glyph(&self, icon_type: &IconType, color: &str, size: f64) -> String {
        format!("<{} fill={} scale={}>", icon_type.icon, color, size)
    }
}

#[test]
fn test_default_palette_order_and_keys() {
    let library = IconLibrary::default_library();
    assert_eq!(library.len(), 16);

    let keys: Vec<&str> = library.types().iter().map(|t| t.type_key.as_str()).collect();
    assert_eq!(keys.first(), Some(&"stage"));
    assert_eq!(keys.last(), Some(&"wifi"));
    assert!(keys.contains(&"first-aid"));
    assert!(!keys.contains(&FALLBACK_TYPE));
}

#[test]
fn test_resolve_known_and_unknown() {
    let library = IconLibrary::default_library();
    assert_eq!(library.resolve("exit").label, "Exit");
    assert_eq!(library.resolve("exit").color.as_deref(), Some("#dc2626"));

    let pin = library.resolve("not-a-type");
    assert_eq!(pin.type_key, FALLBACK_TYPE);
    assert_eq!(pin.icon, "MapPin");
    assert!(library.get("not-a-type").is_none());
}

#[test]
fn test_render_goes_through_injected_renderer() {
    let library = IconLibrary::default_library();
    assert_eq!(
        library.render(&TagRenderer, "wifi", "#000", 1.5),
        "<Wifi fill=#000 scale=1.5>"
    );
    assert_eq!(
        library.render(&TagRenderer, "mystery", "#fff", 1.0),
        "<MapPin fill=#fff scale=1>"
    );
}

#[test]
fn test_custom_library_replaces_repeated_keys() {
    let mut library = IconLibrary::from_types([
        IconType::new("bar", "Bar", "Beer", "#111111"),
        IconType::new("dj", "DJ Booth", "Music", "#222222"),
        IconType::new("bar", "Cocktails", "Martini", "#333333"),
    ]);
    assert_eq!(library.len(), 2);
    assert_eq!(library.types()[0].label, "Cocktails");

    library.insert(IconType::new("stage", "Stage", "Drama", "#ef4444"));
    assert_eq!(library.len(), 3);
    assert!(!library.is_empty());
    // The stock palette is unaffected by edits to a clone
    assert_eq!(IconLibrary::default().len(), 16);
}
