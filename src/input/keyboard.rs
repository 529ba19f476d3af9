//! Keyboard shortcuts.
//!
//! | Keys                                  | Action                  |
//! |---------------------------------------|-------------------------|
//! | Ctrl/Cmd+Z                            | Undo                    |
//! | Ctrl/Cmd+Shift+Z, Ctrl/Cmd+Y          | Redo                    |
//! | Ctrl/Cmd+C / Ctrl/Cmd+V               | Copy / paste selection  |
//! | Delete, Backspace                     | Delete selection        |
//! | Escape                                | Leave connect mode, drop marquee |

use super::events::Keystroke;
use crate::app::MapEditor;
use tracing::debug;

impl MapEditor {
    /// Handle a key press. Returns true if it was a recognized shortcut.
    pub fn handle_key_down(&mut self, keystroke: &Keystroke) -> bool {
        let secondary = keystroke.modifiers.secondary();
        let shift = keystroke.modifiers.shift;

        let handled = match (keystroke.key.as_str(), secondary) {
            ("z", true) if shift => {
                self.redo();
                true
            }
            ("z", true) => {
                self.undo();
                true
            }
            ("y", true) => {
                self.redo();
                true
            }
            ("c", true) => {
                self.copy_selection();
                true
            }
            ("v", true) => {
                self.paste();
                true
            }
            ("delete" | "backspace", false) => {
                self.delete_selected();
                true
            }
            ("escape", _) => {
                self.tools.connect.exit();
                self.cancel_marquee();
                true
            }
            _ => false,
        };

        if handled {
            debug!(key = %keystroke.key, secondary, shift, "Shortcut");
        }
        handled
    }
}
