//! Status Classifier: presentation status for events, plays, injuries and
//! roster health.
//!
//! Everything is a pure function of the current payload and the wall clock
//! passed in by the caller. Nothing is cached between renders.

use crate::context::{SoonRule, SportContext};
use crate::{CompetitionState, Event, InjuryStatus, Play, Player};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Colour intent of a tag or accessory; the front end maps it to a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Primary,
    Yellow,
    Green,
    Orange,
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Calendar,
    Warning,
    Livestream,
    CheckCircle,
    XMarkCircle,
    XMark,
    Trophy,
    Leaderboard,
    Medical,
    Heart,
    BullsEye,
    BullsEyeMissed,
    Hourglass,
    MinusCircle,
    Play,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    StartingSoon,
    InProgress,
    Final,
    Postponed,
}

impl GameStatus {
    pub fn tooltip(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::StartingSoon => "Starting Soon",
            GameStatus::InProgress => "In Progress",
            GameStatus::Final => "Final",
            GameStatus::Postponed => "Postponed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: GameStatus,
    pub text: String,
    pub tone: Tone,
    pub glyph: Glyph,
    pub tooltip: String,
}

/// Classify an event against `now`.
///
/// `post` with `completed == Some(false)` is postponed; any other `post` is
/// final. Before the event goes live, the sport's starting-soon rule decides
/// between scheduled and starting soon. The window is inclusive and counts a
/// start time already in the past as "soon".
pub fn classify(ctx: &SportContext, event: &Event, now: DateTime<Utc>) -> GameStatus {
    match event.state {
        CompetitionState::In => GameStatus::InProgress,
        CompetitionState::Post if event.completed == Some(false) => GameStatus::Postponed,
        CompetitionState::Post => GameStatus::Final,
        CompetitionState::Pre => soon_or_scheduled(ctx, event, now),
        CompetitionState::Other => match ctx.sport_profile().starting_soon.rule {
            SoonRule::NotLive => soon_or_scheduled(ctx, event, now),
            SoonRule::PreOnly => GameStatus::Scheduled,
        },
    }
}

fn soon_or_scheduled(ctx: &SportContext, event: &Event, now: DateTime<Utc>) -> GameStatus {
    let window = ctx.sport_profile().starting_soon.window();
    match event.start {
        Some(start) if start - now <= window => GameStatus::StartingSoon,
        _ => GameStatus::Scheduled,
    }
}

/// Period marker for a live event: "Q3 5:12", "P2 12:34", "L41 ", or the
/// free-text status detail for sports without numbered periods.
pub fn live_marker(ctx: &SportContext, event: &Event) -> String {
    let profile = ctx.sport_profile();
    if profile.uses_status_detail {
        return event.detail.clone().unwrap_or_else(|| "Unknown".to_owned());
    }
    format!("{}{} {}", profile.period_label, event.period, event.clock)
}

/// "BOS 2 - TOR 3", away first.
pub fn score_line(event: &Event) -> String {
    let (home, away) = (&event.matchup.home, &event.matchup.away);
    format!(
        "{} {} - {} {}",
        away.abbreviation,
        away.score_or_zero(),
        home.abbreviation,
        home.score_or_zero()
    )
}

/// Badge with scheduled times rendered in the viewer's local timezone.
pub fn badge(ctx: &SportContext, event: &Event, now: DateTime<Utc>) -> StatusBadge {
    badge_in(ctx, event, now, &Local)
}

pub fn badge_in<Tz: TimeZone>(
    ctx: &SportContext,
    event: &Event,
    now: DateTime<Utc>,
    tz: &Tz,
) -> StatusBadge
where
    Tz::Offset: std::fmt::Display,
{
    let status = classify(ctx, event, now);
    let start_time = || {
        event
            .start
            .map(|s| s.with_timezone(tz).format("%I:%M %p").to_string())
            .unwrap_or_else(|| "TBD".to_owned())
    };

    let (text, tone, glyph, tooltip) = match status {
        GameStatus::Scheduled => (start_time(), Tone::Neutral, Glyph::Calendar, status.tooltip()),
        GameStatus::StartingSoon => (start_time(), Tone::Yellow, Glyph::Warning, status.tooltip()),
        GameStatus::InProgress => (
            format!("{}     {}", score_line(event), live_marker(ctx, event)),
            Tone::Green,
            Glyph::Livestream,
            status.tooltip(),
        ),
        GameStatus::Final if ctx.sport() == crate::Sport::Racing => (
            event.winner.clone().unwrap_or_else(|| "Unknown".to_owned()),
            Tone::Neutral,
            Glyph::CheckCircle,
            "Winner",
        ),
        GameStatus::Final => {
            (score_line(event), Tone::Neutral, Glyph::CheckCircle, status.tooltip())
        }
        GameStatus::Postponed => (
            "Postponed".to_owned(),
            Tone::Orange,
            Glyph::XMarkCircle,
            status.tooltip(),
        ),
    };

    StatusBadge { status, text, tone, glyph, tooltip: tooltip.to_owned() }
}

// ---------------------------------------------------------------------------
// Injuries and roster health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Severity {
    pub tone: Tone,
    pub glyph: Glyph,
}

pub fn injury_severity(status: &InjuryStatus) -> Severity {
    let (tone, glyph) = match status {
        InjuryStatus::DayToDay => (Tone::Yellow, Glyph::Medical),
        InjuryStatus::Out => (Tone::Orange, Glyph::Medical),
        InjuryStatus::InjuredReserve | InjuryStatus::Questionable => (Tone::Red, Glyph::Medical),
        InjuryStatus::Suspension => (Tone::Orange, Glyph::Warning),
        InjuryStatus::Other(_) => (Tone::Neutral, Glyph::Medical),
    };
    Severity { tone, glyph }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Injured,
}

impl Health {
    pub fn of(player: &Player) -> Self {
        if player.injury.is_some() { Health::Injured } else { Health::Healthy }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Health::Healthy => Severity { tone: Tone::Green, glyph: Glyph::Heart },
            Health::Injured => Severity { tone: Tone::Orange, glyph: Glyph::Medical },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Health::Healthy => "Healthy",
            Health::Injured => "Injured",
        }
    }
}

// ---------------------------------------------------------------------------
// Play-by-play
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    Goal,
    Penalty,
    Fight,
    Save,
    PeriodStart,
    PeriodEnd,
    Other,
}

impl PlayKind {
    /// Goals, penalties and fights make up the "Major Plays" view.
    pub fn is_major(&self) -> bool {
        matches!(self, PlayKind::Goal | PlayKind::Penalty | PlayKind::Fight)
    }

    pub fn severity(&self) -> Severity {
        let (tone, glyph) = match self {
            PlayKind::Goal => (Tone::Green, Glyph::BullsEye),
            PlayKind::Penalty => (Tone::Orange, Glyph::Hourglass),
            PlayKind::Fight => (Tone::Red, Glyph::MinusCircle),
            PlayKind::Save => (Tone::Blue, Glyph::BullsEyeMissed),
            PlayKind::PeriodStart => (Tone::Primary, Glyph::Play),
            PlayKind::PeriodEnd => (Tone::Primary, Glyph::Flag),
            PlayKind::Other => (Tone::Neutral, Glyph::Livestream),
        };
        Severity { tone, glyph }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            PlayKind::Goal => "Goal",
            PlayKind::Penalty => "Penalty",
            PlayKind::Fight => "Fight",
            PlayKind::Save => "Save",
            PlayKind::PeriodStart | PlayKind::PeriodEnd | PlayKind::Other => "Game Time",
        }
    }
}

/// Period boundaries win over everything, then saves, fights, penalties and
/// finally scoring plays.
pub fn classify_play(play: &Play) -> PlayKind {
    let kind = play.kind.as_str();
    if kind.contains("Period End") || kind.contains("End of Game") {
        PlayKind::PeriodEnd
    } else if kind.contains("Period Start") {
        PlayKind::PeriodStart
    } else if play.text.contains("saved") {
        PlayKind::Save
    } else if play.text.contains("Fighting") {
        PlayKind::Fight
    } else if kind == "Penalty" {
        PlayKind::Penalty
    } else if kind == "Goal" || play.scoring {
        PlayKind::Goal
    } else {
        PlayKind::Other
    }
}

/// "P2", "Q4"; anything past regulation reads "OT".
pub fn period_label(ctx: &SportContext, period: u32) -> String {
    let profile = ctx.sport_profile();
    if period > profile.regulation_periods {
        return "OT".to_owned();
    }
    let label = if profile.period_label.is_empty() { "P" } else { profile.period_label };
    format!("{label}{period}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Competitor, Matchup, Sport};
    use chrono::{FixedOffset, TimeDelta};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 23, 0, 0).unwrap()
    }

    fn event(state: CompetitionState, completed: Option<bool>) -> Event {
        Event {
            state,
            completed,
            period: 3,
            clock: "5:12".into(),
            detail: Some("Top 5th".into()),
            start: Some(now() + TimeDelta::hours(2)),
            matchup: Matchup {
                home: Competitor {
                    abbreviation: "TOR".into(),
                    score: Some("3".into()),
                    ..Default::default()
                },
                away: Competitor {
                    abbreviation: "BOS".into(),
                    score: Some("2".into()),
                    ..Default::default()
                },
            },
            ..Default::default()
        }
    }

    #[test]
    fn starting_soon_window_is_fifteen_minutes() {
        let nba = SportContext::new(Sport::Basketball, "nba");
        let mut e = event(CompetitionState::Pre, None);
        e.start = Some(now() + TimeDelta::minutes(10));
        assert_eq!(classify(&nba, &e, now()), GameStatus::StartingSoon);
        e.start = Some(now() + TimeDelta::minutes(20));
        assert_eq!(classify(&nba, &e, now()), GameStatus::Scheduled);
        e.start = Some(now() + TimeDelta::minutes(15));
        assert_eq!(classify(&nba, &e, now()), GameStatus::StartingSoon);
    }

    #[test]
    fn postponed_beats_final_regardless_of_score() {
        let nhl = SportContext::new(Sport::Hockey, "nhl");
        let e = event(CompetitionState::Post, Some(false));
        assert_eq!(classify(&nhl, &e, now()), GameStatus::Postponed);
        let b = badge_in(&nhl, &e, now(), &Utc);
        assert_eq!(b.text, "Postponed");
        assert_eq!(b.tone, Tone::Orange);
        assert_eq!(b.glyph, Glyph::XMarkCircle);

        assert_eq!(
            classify(&nhl, &event(CompetitionState::Post, Some(true)), now()),
            GameStatus::Final
        );
        assert_eq!(classify(&nhl, &event(CompetitionState::Post, None), now()), GameStatus::Final);
    }

    #[test]
    fn unknown_state_only_counts_as_soon_under_not_live_rule() {
        let mut e = event(CompetitionState::Other, None);
        e.start = Some(now() + TimeDelta::minutes(5));
        let nfl = SportContext::new(Sport::Football, "nfl");
        let nba = SportContext::new(Sport::Basketball, "nba");
        assert_eq!(classify(&nfl, &e, now()), GameStatus::StartingSoon);
        assert_eq!(classify(&nba, &e, now()), GameStatus::Scheduled);
    }

    #[test]
    fn live_marker_depends_on_sport_not_league() {
        let e = event(CompetitionState::In, None);
        for league in ["nba", "wnba", "mens-college-basketball"] {
            let ctx = SportContext::new(Sport::Basketball, league);
            assert_eq!(live_marker(&ctx, &e), "Q3 5:12");
        }
        assert_eq!(live_marker(&SportContext::new(Sport::Hockey, "nhl"), &e), "P3 5:12");
        assert_eq!(live_marker(&SportContext::new(Sport::Racing, "f1"), &e), "L3 5:12");
        assert_eq!(live_marker(&SportContext::new(Sport::Baseball, "mlb"), &e), "Top 5th");

        let mut no_detail = e.clone();
        no_detail.detail = None;
        assert_eq!(live_marker(&SportContext::new(Sport::Soccer, "eng.1"), &no_detail), "Unknown");
    }

    #[test]
    fn live_badge_carries_both_teams_and_scores() {
        let nhl = SportContext::new(Sport::Hockey, "nhl");
        let b = badge_in(&nhl, &event(CompetitionState::In, None), now(), &Utc);
        assert_eq!(b.text, "BOS 2 - TOR 3     P3 5:12");
        assert_eq!(b.tone, Tone::Green);
        assert_eq!(b.glyph, Glyph::Livestream);
    }

    #[test]
    fn scheduled_badge_shows_local_time() {
        let nba = SportContext::new(Sport::Basketball, "nba");
        let eastern = FixedOffset::west_opt(4 * 3600).unwrap();
        let b = badge_in(&nba, &event(CompetitionState::Pre, None), now(), &eastern);
        assert_eq!(b.text, "09:00 PM");
        assert_eq!(b.glyph, Glyph::Calendar);
        assert_eq!(b.tone, Tone::Neutral);
    }

    #[test]
    fn racing_final_shows_the_winner() {
        let f1 = SportContext::new(Sport::Racing, "f1");
        let mut e = event(CompetitionState::Post, Some(true));
        e.winner = Some("M. Verstappen".into());
        let b = badge_in(&f1, &e, now(), &Utc);
        assert_eq!(b.text, "M. Verstappen");
        assert_eq!(b.tooltip, "Winner");
        assert_eq!(b.glyph, Glyph::CheckCircle);
    }

    #[test]
    fn injury_severity_table() {
        let s = |raw: &str| injury_severity(&InjuryStatus::parse(raw));
        assert_eq!(s("Day-To-Day").tone, Tone::Yellow);
        assert_eq!(s("Out").tone, Tone::Orange);
        assert_eq!(s("Injured Reserve").tone, Tone::Red);
        assert_eq!(s("Questionable").tone, Tone::Red);
        assert_eq!(s("Suspension"), Severity { tone: Tone::Orange, glyph: Glyph::Warning });
        assert_eq!(s("Probable").tone, Tone::Neutral);
    }

    #[test]
    fn plays_classify_with_precedence() {
        let play = |kind: &str, text: &str| Play {
            kind: kind.into(),
            text: text.into(),
            ..Default::default()
        };
        assert_eq!(classify_play(&play("Goal", "Goal scored")), PlayKind::Goal);
        assert_eq!(classify_play(&play("Penalty", "Fighting - 5 min")), PlayKind::Fight);
        assert_eq!(classify_play(&play("Shot", "Shot saved by X")), PlayKind::Save);
        assert_eq!(classify_play(&play("Period Start", "")), PlayKind::PeriodStart);
        assert_eq!(classify_play(&play("End of Game", "")), PlayKind::PeriodEnd);
        assert_eq!(classify_play(&play("Faceoff", "")), PlayKind::Other);
        assert!(PlayKind::Fight.is_major());
        assert!(!PlayKind::Save.is_major());
    }

    #[test]
    fn period_labels_switch_to_overtime() {
        let nhl = SportContext::new(Sport::Hockey, "nhl");
        assert_eq!(period_label(&nhl, 3), "P3");
        assert_eq!(period_label(&nhl, 4), "OT");
        let nfl = SportContext::new(Sport::Football, "nfl");
        assert_eq!(period_label(&nfl, 4), "Q4");
        assert_eq!(period_label(&nfl, 5), "OT");
    }
}
