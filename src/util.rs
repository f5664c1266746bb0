use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Shortens `text` to at most `max_chars` characters, ending with an
/// ellipsis when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let kept = text.chars().take(max_chars.saturating_sub(1)).collect::<String>();
    format!("{}…", kept.trim_end())
}

pub fn format_authors(authors: &[String]) -> String {
    match authors {
        [] => "Unknown authors".to_owned(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [first, ..] => format!("{first} et al."),
    }
}

/// Parses `#RRGGBB`.
pub fn parse_hex_rgb(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Deterministic phase in `[0, 1)` for animating an item by id.
pub fn stable_phase(id: &str) -> f32 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    ((hash & 0xffff_ffff) as f64 / (u32::MAX as f64 + 1.0)) as f32
}
