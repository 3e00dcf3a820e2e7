pub mod bucket;
pub mod client;
pub mod context;
pub mod espn;
pub mod normalize;
pub mod standings;
pub mod status;
pub mod view;

pub use client::{ApiError, ApiResult, EspnApi};
pub use context::{Sport, SportContext};

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// Upstream competition state (`status.type.state`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompetitionState {
    #[default]
    Pre,
    In,
    Post,
    Other,
}

impl CompetitionState {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" => CompetitionState::Pre,
            "in" => CompetitionState::In,
            "post" => CompetitionState::Post,
            _ => CompetitionState::Other,
        }
    }
}

/// A game, match or race. Rebuilt wholesale on every fetch.
#[derive(Debug, Clone, Default)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub start: Option<DateTime<Utc>>,
    pub state: CompetitionState,
    /// `None` when the payload omits the flag; only an explicit `false`
    /// marks a finished event as postponed.
    pub completed: Option<bool>,
    pub period: u32,
    pub clock: String,
    /// Free-text status ("Top 5th", "45'"); used where periods do not apply.
    pub detail: Option<String>,
    pub matchup: Matchup,
    /// Racing only: short name of the race winner.
    pub winner: Option<String>,
    pub venue: Option<Venue>,
    pub season: Option<Season>,
    pub tickets: Option<String>,
    pub link: String,
    pub icon: String,
}

impl Event {
    pub fn is_live(&self) -> bool {
        self.state == CompetitionState::In
    }
}

/// Competitors resolved once by their `homeAway` tag.
#[derive(Debug, Clone, Default)]
pub struct Matchup {
    pub home: Competitor,
    pub away: Competitor,
}

#[derive(Debug, Clone, Default)]
pub struct Competitor {
    pub team_id: Option<String>,
    pub abbreviation: String,
    pub display_name: String,
    pub logo: Option<String>,
    pub score: Option<String>,
    pub record: Option<String>,
    pub probable: Option<String>,
    pub line_scores: Vec<String>,
    pub winner: bool,
    pub link: Option<String>,
}

impl Competitor {
    pub fn score_or_zero(&self) -> &str {
        self.score.as_deref().unwrap_or("0")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Venue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub indoor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Season {
    pub year: Option<String>,
    /// Title-cased season slug: "Regular Season", "Post Season".
    pub kind: String,
}

#[derive(Debug, Clone, Default)]
pub struct Article {
    pub headline: String,
    pub published: Option<DateTime<Utc>>,
    pub category: String,
    pub byline: String,
    pub description: String,
    pub image: Option<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjuryStatus {
    DayToDay,
    Out,
    InjuredReserve,
    Questionable,
    Suspension,
    Other(String),
}

impl InjuryStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Day-To-Day" => InjuryStatus::DayToDay,
            "Out" => InjuryStatus::Out,
            "Injured Reserve" => InjuryStatus::InjuredReserve,
            "Questionable" => InjuryStatus::Questionable,
            "Suspension" => InjuryStatus::Suspension,
            other => InjuryStatus::Other(other.to_owned()),
        }
    }

    /// Display text, with hyphens shown as spaces ("Day To Day").
    pub fn label(&self) -> String {
        let raw = match self {
            InjuryStatus::DayToDay => "Day-To-Day",
            InjuryStatus::Out => "Out",
            InjuryStatus::InjuredReserve => "Injured Reserve",
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::Suspension => "Suspension",
            InjuryStatus::Other(s) => s.as_str(),
        };
        raw.replace('-', " ")
    }
}

/// Only records with an estimated return date survive normalization.
#[derive(Debug, Clone)]
pub struct InjuryRecord {
    pub athlete: String,
    pub position: String,
    pub team_logo: Option<String>,
    pub athlete_link: String,
    pub team_link: String,
    pub status: InjuryStatus,
    pub return_date: String,
}

#[derive(Debug, Clone, Default)]
pub struct Transaction {
    pub date: Option<DateTime<Utc>>,
    pub description: String,
    pub team_logo: Option<String>,
    pub team_link: String,
}

/// A conference, division, or (racing) driver/constructor table.
#[derive(Debug, Clone, Default)]
pub struct StandingsGroup {
    pub name: String,
    pub entries: Vec<StandingsEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct StandingsEntry {
    pub team_id: Option<String>,
    pub name: String,
    pub logo: Option<String>,
    pub link: String,
    /// Positional, league-specific statistics. See `context` for the layouts.
    pub stats: Vec<StatValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatValue {
    pub display_value: Option<String>,
    pub summary: Option<String>,
}

/// Play-by-play plus the summary block for one event.
#[derive(Debug, Clone, Default)]
pub struct GameDetail {
    pub event_id: String,
    pub plays: Vec<Play>,
    pub summary: GameSummary,
}

#[derive(Debug, Clone, Default)]
pub struct Play {
    pub period: u32,
    pub clock: String,
    pub kind: String, // upstream `type.text`: "Goal", "Penalty", "Period Start"
    pub text: String,
    pub team_id: Option<String>,
    pub scoring: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GameSummary {
    pub matchup: Matchup,
    pub home_stats: Vec<StatLine>,
    pub away_stats: Vec<StatLine>,
    pub leaders: Vec<TeamLeaders>,
    pub venue: Option<Venue>,
    pub link: Option<String>,
    pub home_injuries: Vec<GameInjury>,
    pub away_injuries: Vec<GameInjury>,
    /// Seat situation, e.g. "Tickets as low as $45".
    pub tickets: Option<String>,
}

/// Pre-game injury note. Unlike `InjuryRecord`, no return date is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInjury {
    pub athlete: String,
    pub status: InjuryStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct TeamLeaders {
    pub team: String,
    pub leaders: Vec<Leader>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leader {
    pub category: String,
    pub athlete: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub team_name: String,
    pub coach: Coach,
    pub groups: Vec<PositionGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coach {
    pub name: String,
    pub experience: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PositionGroup {
    pub position: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub name: String,
    pub jersey: String,
    pub height: String,
    pub weight: String,
    pub age: Option<u32>,
    /// First listed injury status; `None` means healthy.
    pub injury: Option<String>,
    pub link: Option<String>,
}

/// A favourite team's schedule split by lifecycle.
#[derive(Debug, Clone, Default)]
pub struct TeamSchedule {
    pub upcoming: Vec<Event>,
    pub completed: Vec<Event>,
}
