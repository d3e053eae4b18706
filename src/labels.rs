//! Text and markup for the side panels.

use globe_core::{Region, Station};

/// Directory data is untrusted; everything interpolated into markup goes
/// through here.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `1234567` -> `"1,234,567"`.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn countdown_label(step: Option<u8>) -> String {
    match step {
        Some(n) => n.to_string(),
        None => "GO!".to_string(),
    }
}

#[inline]
pub fn volume_label(percent: u32) -> String {
    format!("{}%", percent.min(100))
}

#[inline]
pub fn mute_icon(muted: bool) -> &'static str {
    if muted {
        "🔇"
    } else {
        "🔊"
    }
}

#[inline]
pub fn play_icon(playing: bool) -> &'static str {
    if playing {
        "⏸"
    } else {
        "▶"
    }
}

pub fn region_item_html(region: &Region) -> String {
    let name = escape_html(&region.name);
    format!(
        "<div class=\"region-item\" data-region=\"{name}\">\
         <div class=\"region-header\"><span class=\"region-emoji\">{emoji}</span>\
         <span class=\"region-name\">{name}</span></div>\
         <div class=\"region-meta\"><span class=\"station-count\">{count} stations</span></div>\
         </div>",
        emoji = escape_html(&region.emoji),
        count = region.station_ids.len(),
    )
}

pub fn station_item_html(station: &Station) -> String {
    format!(
        "<div class=\"station-item\">\
         <div class=\"station-item-header\"><div class=\"station-item-info\">\
         <div class=\"station-item-name\">{name}</div>\
         <div class=\"station-item-location\">{country}</div></div>\
         <div class=\"station-item-actions\">\
         <button class=\"station-play-btn\" data-station=\"{id}\">▶</button></div></div>\
         <div class=\"station-item-meta\">\
         <span class=\"genre-indicator\" style=\"background: {color}\"></span>\
         <span class=\"station-genre\">{genre}</span></div>\
         </div>",
        name = escape_html(&station.name),
        country = escape_html(&station.country),
        id = escape_html(station.id.as_str()),
        color = station.genre.css_color(),
        genre = station.genre.label(),
    )
}

pub fn station_list_html<'a>(stations: impl IntoIterator<Item = &'a Station>) -> String {
    stations.into_iter().map(station_item_html).collect()
}
