/// Global keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    Roulette,
    ToggleAutoRotate,
    BackToRegions,
    ResetView,
}

#[inline]
pub fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    match key {
        " " | "Spacebar" => Some(Shortcut::TogglePlayback),
        "r" | "R" => Some(Shortcut::Roulette),
        "a" | "A" => Some(Shortcut::ToggleAutoRotate),
        "Escape" => Some(Shortcut::BackToRegions),
        "h" | "H" => Some(Shortcut::ResetView),
        _ => None,
    }
}

/// Keys typed into a text field belong to the field.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
