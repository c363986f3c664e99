//! Names and colors for n-back cue categories.

use ratatui::style::Color;

const NAMED: [(&str, Color); 4] = [
    ("red", Color::Red),
    ("blue", Color::Blue),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
];

/// Display name of a cue; categories past the named palette get a number.
pub fn cue_name(cue: u8) -> String {
    match NAMED.get(usize::from(cue)) {
        Some((name, _)) => (*name).to_string(),
        None => format!("cue-{cue}"),
    }
}

/// Terminal color of a cue.
pub fn cue_color(cue: u8) -> Color {
    NAMED
        .get(usize::from(cue))
        .map_or(Color::Indexed(cue.wrapping_add(8)), |(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_numbered_cues() {
        assert_eq!(cue_name(0), "red");
        assert_eq!(cue_name(3), "yellow");
        assert_eq!(cue_name(5), "cue-5");
        assert_eq!(cue_color(1), Color::Blue);
    }
}
