//! Welcome banner: "JOURNAL" in figlet's standard font, an underline sized to the art,
//! and the mood scale at a glance so the opening check-in is no surprise.

use crate::domain::MoodLevel;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "JOURNAL";

/// Soft ink blue (#5b7db1).
const INK: Color = Color::Rgb {
    r: 0x5b,
    g: 0x7d,
    b: 0xb1,
};

/// Banner art; falls back to the plain title if the embedded font fails to load.
fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// One line with every level and its emoji, e.g. "😫 1 Critical · ... · 😶 5 Indifferent".
fn mood_hint() -> String {
    MoodLevel::ALL
        .iter()
        .map(|level| format!("{} {} {}", level.emoji(), level.value(), level.label()))
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Prints the title art in a single ink color, then the version and the mood hint.
pub fn print_welcome() {
    let art = banner_art();
    let width = art
        .lines()
        .map(|line| line.trim_end().chars().count())
        .max()
        .unwrap_or(TITLE.len());

    let mut out = stdout();
    let _ = queue!(out, SetForegroundColor(INK));
    for line in art.lines().filter(|line| !line.trim().is_empty()) {
        let _ = queue!(out, Print(line.trim_end()), Print("\n"));
    }
    let _ = queue!(
        out,
        Print("~".repeat(width)),
        Print("\n"),
        ResetColor,
        SetAttribute(Attribute::Bold),
        Print(format!("Journal Companion v{}\n", env!("CARGO_PKG_VERSION"))),
        SetAttribute(Attribute::Reset),
        Print("Created with care for reflective practice\n"),
        SetAttribute(Attribute::Dim),
        Print(format!("{}\n", mood_hint())),
        SetAttribute(Attribute::Reset),
    );
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_art_is_never_empty() {
        assert!(!banner_art().trim().is_empty());
    }

    #[test]
    fn mood_hint_lists_the_whole_scale_in_order() {
        let hint = mood_hint();
        assert!(hint.starts_with("😫 1 Critical"));
        assert!(hint.ends_with("😶 5 Indifferent"));
        assert_eq!(hint.matches(" · ").count(), 4);
    }
}
