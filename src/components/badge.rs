use sideline_api::status::{Glyph, Severity, StatusBadge, Tone};
use tui::style::{Color, Modifier, Style};
use tui::text::Span;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::Gray,
        Tone::Primary => Color::White,
        Tone::Yellow => Color::Yellow,
        Tone::Green => Color::Green,
        Tone::Orange => Color::LightRed,
        Tone::Red => Color::Red,
        Tone::Blue => Color::Cyan,
    }
}

/// Single-cell terminal stand-ins for the icon set.
pub fn glyph_char(glyph: Glyph) -> char {
    match glyph {
        Glyph::Calendar => '◷',
        Glyph::Warning => '⚠',
        Glyph::Livestream => '●',
        Glyph::CheckCircle => '✓',
        Glyph::XMarkCircle => '⊗',
        Glyph::XMark => '✗',
        Glyph::Trophy => '★',
        Glyph::Leaderboard => '▲',
        Glyph::Medical => '✚',
        Glyph::Heart => '♥',
        Glyph::BullsEye => '◉',
        Glyph::BullsEyeMissed => '○',
        Glyph::Hourglass => '⧗',
        Glyph::MinusCircle => '⊖',
        Glyph::Play => '▶',
        Glyph::Flag => '⚑',
    }
}

pub fn glyph_span(glyph: Glyph, tone: Tone) -> Span<'static> {
    Span::styled(
        format!("{} ", glyph_char(glyph)),
        Style::default().fg(tone_color(tone)),
    )
}

pub fn severity_span(severity: Severity) -> Span<'static> {
    glyph_span(severity.glyph, severity.tone)
}

/// `✓ BOS 2 - TOR 3`, coloured by status.
pub fn status_spans(badge: &StatusBadge) -> Vec<Span<'static>> {
    let mut text_style = Style::default().fg(tone_color(badge.tone));
    if badge.tone == Tone::Green {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    vec![
        glyph_span(badge.glyph, badge.tone),
        Span::styled(badge.text.clone(), text_style),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideline_api::status::GameStatus;

    #[test]
    fn live_badges_are_bold_green() {
        let badge = StatusBadge {
            status: GameStatus::InProgress,
            text: "BOS 1 - TOR 0".into(),
            tone: Tone::Green,
            glyph: Glyph::Livestream,
            tooltip: "In Progress".into(),
        };
        let spans = status_spans(&badge);
        assert_eq!(spans[0].content, "● ");
        assert_eq!(spans[1].style.fg, Some(Color::Green));
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn every_glyph_is_one_char_wide() {
        for glyph in [Glyph::Calendar, Glyph::Trophy, Glyph::Medical, Glyph::Flag] {
            assert_eq!(glyph_span(glyph, Tone::Neutral).content.chars().count(), 2);
        }
    }
}
