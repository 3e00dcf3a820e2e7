//! Standings Ranker: playoff position and tier from positional stats.
//!
//! Which stat index holds the playoff position, and where the tier bands
//! sit, come from the league's [`RankingRule`] in `context`.

use crate::context::SportContext;
use crate::status::{Glyph, Tone};
use crate::{StandingsEntry, StatValue};
use std::ops::RangeInclusive;

/// Tier bands for one league. Bands are checked in order
/// first, contender, bubble, last; a position in none of them is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRule {
    pub position_stat: usize,
    pub first: u32,
    pub contender: RangeInclusive<u32>,
    pub bubble: Option<RangeInclusive<u32>>,
    pub last: Option<u32>,
}

impl RankingRule {
    pub fn tier(&self, position: u32) -> Tier {
        if position == self.first {
            Tier::First
        } else if self.contender.contains(&position) {
            Tier::Contender
        } else if self.bubble.as_ref().is_some_and(|b| b.contains(&position)) {
            Tier::Bubble
        } else if self.last == Some(position) {
            Tier::Last
        } else {
            Tier::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// `displayValue` as-is.
    Value,
    /// The stat's `summary` ("10-4-2").
    Summary,
    /// A fraction rendered as a percentage with one decimal.
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatColumn {
    pub index: usize,
    pub kind: StatKind,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub fallback: &'static str,
}

impl StatColumn {
    pub fn render(&self, stats: &[StatValue]) -> String {
        let stat = stats.get(self.index);
        let value = match self.kind {
            StatKind::Value => stat.and_then(|s| s.display_value.clone()),
            StatKind::Summary => stat.and_then(|s| s.summary.clone()),
            StatKind::Percent => stat
                .and_then(|s| s.display_value.as_deref())
                .and_then(|v| v.trim().parse::<f64>().ok())
                .map(|v| format!("{:.1}", v * 100.0)),
        }
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| self.fallback.to_owned());
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    First,
    Contender,
    Bubble,
    Last,
    Unknown,
}

impl Tier {
    pub fn tone(&self) -> Tone {
        match self {
            Tier::First => Tone::Yellow,
            Tier::Contender => Tone::Green,
            Tier::Bubble => Tone::Orange,
            Tier::Last => Tone::Red,
            Tier::Unknown => Tone::Neutral,
        }
    }

    pub fn glyph(&self) -> Option<Glyph> {
        match self {
            Tier::First => Some(Glyph::Trophy),
            Tier::Contender => Some(Glyph::Leaderboard),
            Tier::Bubble => Some(Glyph::XMarkCircle),
            Tier::Last => Some(Glyph::XMark),
            Tier::Unknown => None,
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Tier::First => "1st in Conference",
            Tier::Contender => "Playoff Contender",
            Tier::Bubble => "Not in Playoffs",
            Tier::Last => "Last in Conference",
            Tier::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranking {
    pub position: Option<u32>,
    pub tier: Tier,
}

/// Playoff position read from the league's position stat. Missing,
/// non-numeric, negative or fractional values yield `None`.
pub fn playoff_position(ctx: &SportContext, entry: &StandingsEntry) -> Option<u32> {
    let rule = ctx.league_profile()?.ranking.as_ref()?;
    entry
        .stats
        .get(rule.position_stat)?
        .display_value
        .as_deref()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0)
        .map(|n| n as u32)
}

pub fn rank(ctx: &SportContext, entry: &StandingsEntry) -> Ranking {
    let position = playoff_position(ctx, entry);
    let tier = match (ctx.league_profile().and_then(|p| p.ranking.as_ref()), position) {
        (Some(rule), Some(pos)) => rule.tier(pos),
        _ => Tier::Unknown,
    };
    Ranking { position, tier }
}

/// The league's stat columns joined by " | ". Empty for leagues without a
/// layout.
pub fn stat_line(ctx: &SportContext, entry: &StandingsEntry) -> String {
    ctx.league_profile()
        .map(|p| p.stat_columns)
        .unwrap_or_default()
        .iter()
        .map(|c| c.render(&entry.stats))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Ascending by playoff position; unranked entries keep their relative order
/// at the end.
pub fn sort_by_position(ctx: &SportContext, entries: &mut [StandingsEntry]) {
    entries.sort_by_cached_key(|e| playoff_position(ctx, e).map_or((1, 0), |p| (0, p)));
}
