// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod shortcuts {
    include!("../src/shortcuts.rs");
}

use shortcuts::*;

#[test]
fn shortcut_keys_map_to_actions() {
    assert_eq!(shortcut_for_key(" "), Some(Shortcut::TogglePlayback));
    assert_eq!(shortcut_for_key("Spacebar"), Some(Shortcut::TogglePlayback));
    assert_eq!(shortcut_for_key("Escape"), Some(Shortcut::BackToRegions));
}

#[test]
fn letter_shortcuts_ignore_case() {
    for (lower, upper, expected) in [
        ("r", "R", Shortcut::Roulette),
        ("a", "A", Shortcut::ToggleAutoRotate),
        ("h", "H", Shortcut::ResetView),
    ] {
        assert_eq!(shortcut_for_key(lower), Some(expected));
        assert_eq!(shortcut_for_key(upper), Some(expected));
    }
}

#[test]
fn unbound_keys_are_ignored() {
    assert_eq!(shortcut_for_key("x"), None);
    assert_eq!(shortcut_for_key("Enter"), None);
    assert_eq!(shortcut_for_key(""), None);
}

#[test]
fn text_fields_swallow_shortcuts() {
    assert!(is_text_entry_tag("INPUT"));
    assert!(is_text_entry_tag("textarea"));
    assert!(is_text_entry_tag("Select"));
    assert!(!is_text_entry_tag("BUTTON"));
    assert!(!is_text_entry_tag("CANVAS"));
    assert!(!is_text_entry_tag("DIV"));
}
