//! Sport/league selection and the declarative per-league tables that drive
//! normalization, status labels and standings ranking.
//!
//! Adding a league means adding a [`LeagueProfile`] row here; nothing else in
//! the crate branches on league slugs.

use crate::standings::{RankingRule, StatColumn, StatKind};
use chrono::{Datelike, Days, NaiveDate, TimeDelta};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Basketball,
    Football,
    Baseball,
    Hockey,
    Soccer,
    Racing,
}

impl Sport {
    pub const ALL: [Sport; 6] = [
        Sport::Basketball,
        Sport::Football,
        Sport::Baseball,
        Sport::Hockey,
        Sport::Soccer,
        Sport::Racing,
    ];

    /// Path segment used by the upstream API.
    pub fn slug(&self) -> &'static str {
        match self {
            Sport::Basketball => "basketball",
            Sport::Football => "football",
            Sport::Baseball => "baseball",
            Sport::Hockey => "hockey",
            Sport::Soccer => "soccer",
            Sport::Racing => "racing",
        }
    }

    pub fn profile(&self) -> &'static SportProfile {
        SPORT_PROFILES
            .iter()
            .find(|p| p.sport == *self)
            .unwrap_or(&SPORT_PROFILES[0])
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.slug() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Sport::ALL.iter().map(Sport::slug).collect();
                format!("unknown sport '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// How "starting soon" is decided for events that have not gone live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoonRule {
    /// Only events whose state is explicitly `pre` qualify.
    PreOnly,
    /// Any event that is not live qualifies (final/postponed still override).
    NotLive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingSoon {
    pub window_minutes: i64,
    pub rule: SoonRule,
}

impl StartingSoon {
    pub fn window(&self) -> TimeDelta {
        TimeDelta::minutes(self.window_minutes)
    }
}

/// Terminology and timing that depend only on the sport.
#[derive(Debug)]
pub struct SportProfile {
    pub sport: Sport,
    /// Live period marker prefix: "Q", "P", "L" or empty.
    pub period_label: &'static str,
    /// Baseball and soccer show the status detail text instead of period + clock.
    pub uses_status_detail: bool,
    pub regulation_periods: u32,
    pub starting_soon: StartingSoon,
    pub event_noun: &'static str,
    pub event_noun_plural: &'static str,
    /// Hockey titles read "A vs B" rather than "A at B".
    pub versus_titles: bool,
    /// League slugs in dropdown order; the first one is the default.
    pub leagues: &'static [&'static str],
}

/// Everything that varies per (sport, league).
#[derive(Debug)]
pub struct LeagueProfile {
    pub sport: Sport,
    pub slug: &'static str,
    pub display_name: &'static str,
    pub ranking: Option<RankingRule>,
    pub stat_columns: &'static [StatColumn],
    /// Racing: offset into `competitions` of the session carrying the winner.
    pub winner_competition: Option<usize>,
}

const FIFTEEN_MINUTES: i64 = 15;

static SPORT_PROFILES: &[SportProfile] = &[
    SportProfile {
        sport: Sport::Basketball,
        period_label: "Q",
        uses_status_detail: false,
        regulation_periods: 4,
        starting_soon: StartingSoon { window_minutes: FIFTEEN_MINUTES, rule: SoonRule::PreOnly },
        event_noun: "Game",
        event_noun_plural: "Games",
        versus_titles: false,
        leagues: &["nba", "wnba", "mens-college-basketball", "womens-college-basketball"],
    },
    SportProfile {
        sport: Sport::Football,
        period_label: "Q",
        uses_status_detail: false,
        regulation_periods: 4,
        starting_soon: StartingSoon { window_minutes: FIFTEEN_MINUTES, rule: SoonRule::NotLive },
        event_noun: "Game",
        event_noun_plural: "Games",
        versus_titles: false,
        leagues: &["nfl", "college-football"],
    },
    SportProfile {
        sport: Sport::Baseball,
        period_label: "",
        uses_status_detail: true,
        regulation_periods: 9,
        starting_soon: StartingSoon { window_minutes: FIFTEEN_MINUTES, rule: SoonRule::PreOnly },
        event_noun: "Game",
        event_noun_plural: "Games",
        versus_titles: false,
        leagues: &["mlb"],
    },
    SportProfile {
        sport: Sport::Hockey,
        period_label: "P",
        uses_status_detail: false,
        regulation_periods: 3,
        starting_soon: StartingSoon { window_minutes: FIFTEEN_MINUTES, rule: SoonRule::NotLive },
        event_noun: "Game",
        event_noun_plural: "Games",
        versus_titles: true,
        leagues: &["nhl"],
    },
    SportProfile {
        sport: Sport::Soccer,
        period_label: "",
        uses_status_detail: true,
        regulation_periods: 2,
        starting_soon: StartingSoon { window_minutes: FIFTEEN_MINUTES, rule: SoonRule::PreOnly },
        event_noun: "Match",
        event_noun_plural: "Matches",
        versus_titles: false,
        leagues: &["eng.1", "usa.1"],
    },
    SportProfile {
        sport: Sport::Racing,
        period_label: "L",
        uses_status_detail: false,
        regulation_periods: 1,
        starting_soon: StartingSoon { window_minutes: FIFTEEN_MINUTES, rule: SoonRule::PreOnly },
        event_noun: "Race",
        event_noun_plural: "Races",
        versus_titles: false,
        leagues: &["f1"],
    },
];

// Positional stat layouts. The upstream standings payload has no named
// columns, so each row documents which index holds which quantity.

static BASKETBALL_COLUMNS: &[StatColumn] = &[
    StatColumn { index: 15, kind: StatKind::Value, prefix: "", suffix: "", fallback: "0-0" },
    StatColumn { index: 13, kind: StatKind::Percent, prefix: "Pct: ", suffix: "%", fallback: "0" },
    StatColumn { index: 11, kind: StatKind::Value, prefix: "PF: ", suffix: "", fallback: "0" },
    StatColumn { index: 10, kind: StatKind::Value, prefix: "PA: ", suffix: "", fallback: "0" },
    StatColumn { index: 8, kind: StatKind::Value, prefix: "Dif: ", suffix: "", fallback: "0" },
];

static FOOTBALL_COLUMNS: &[StatColumn] = &[
    StatColumn { index: 17, kind: StatKind::Value, prefix: "", suffix: "", fallback: "0-0" },
    StatColumn { index: 15, kind: StatKind::Percent, prefix: "Pct: ", suffix: "%", fallback: "0" },
    StatColumn { index: 12, kind: StatKind::Value, prefix: "PF: ", suffix: "", fallback: "0" },
    StatColumn { index: 11, kind: StatKind::Value, prefix: "PA: ", suffix: "", fallback: "0" },
    StatColumn { index: 9, kind: StatKind::Value, prefix: "Dif: ", suffix: "", fallback: "0" },
];

static HOCKEY_COLUMNS: &[StatColumn] = &[
    StatColumn { index: 3, kind: StatKind::Value, prefix: "", suffix: " GP", fallback: "0" },
    StatColumn { index: 21, kind: StatKind::Summary, prefix: "", suffix: "", fallback: "0-0-0" },
    StatColumn { index: 7, kind: StatKind::Value, prefix: "", suffix: " pts", fallback: "0" },
    StatColumn { index: 16, kind: StatKind::Value, prefix: "ROW ", suffix: "", fallback: "0" },
    StatColumn { index: 9, kind: StatKind::Value, prefix: "GF ", suffix: "", fallback: "0" },
    StatColumn { index: 8, kind: StatKind::Value, prefix: "GA ", suffix: "", fallback: "0" },
    StatColumn { index: 6, kind: StatKind::Value, prefix: "Dif ", suffix: "", fallback: "0" },
];

static RACING_COLUMNS: &[StatColumn] = &[StatColumn {
    index: 1,
    kind: StatKind::Value,
    prefix: "",
    suffix: " pts",
    fallback: "0",
}];

static LEAGUE_PROFILES: &[LeagueProfile] = &[
    LeagueProfile {
        sport: Sport::Basketball,
        slug: "nba",
        display_name: "NBA",
        ranking: Some(RankingRule {
            position_stat: 7,
            first: 1,
            contender: 2..=8,
            bubble: Some(9..=14),
            last: Some(15),
        }),
        stat_columns: BASKETBALL_COLUMNS,
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Basketball,
        slug: "wnba",
        display_name: "WNBA",
        ranking: Some(RankingRule {
            position_stat: 7,
            first: 1,
            contender: 2..=4,
            bubble: Some(5..=5),
            last: Some(6),
        }),
        stat_columns: BASKETBALL_COLUMNS,
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Basketball,
        slug: "mens-college-basketball",
        display_name: "MNCAA",
        ranking: None,
        stat_columns: &[],
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Basketball,
        slug: "womens-college-basketball",
        display_name: "WNCAA",
        ranking: None,
        stat_columns: &[],
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Football,
        slug: "nfl",
        display_name: "NFL",
        ranking: Some(RankingRule {
            position_stat: 8,
            first: 1,
            contender: 2..=7,
            bubble: Some(8..=15),
            last: Some(16),
        }),
        stat_columns: FOOTBALL_COLUMNS,
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Football,
        slug: "college-football",
        display_name: "NCAA",
        ranking: None,
        stat_columns: &[],
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Baseball,
        slug: "mlb",
        display_name: "MLB",
        ranking: Some(RankingRule {
            position_stat: 7,
            first: 1,
            contender: 2..=6,
            bubble: Some(7..=14),
            last: Some(15),
        }),
        stat_columns: BASKETBALL_COLUMNS,
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Hockey,
        slug: "nhl",
        display_name: "NHL",
        ranking: Some(RankingRule {
            position_stat: 5,
            first: 1,
            contender: 2..=8,
            bubble: Some(9..=15),
            last: Some(16),
        }),
        stat_columns: HOCKEY_COLUMNS,
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Soccer,
        slug: "eng.1",
        display_name: "Premier League",
        ranking: None,
        stat_columns: &[],
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Soccer,
        slug: "usa.1",
        display_name: "MLS",
        ranking: None,
        stat_columns: &[],
        winner_competition: None,
    },
    LeagueProfile {
        sport: Sport::Racing,
        slug: "f1",
        display_name: "F1",
        ranking: Some(RankingRule {
            position_stat: 0,
            first: 1,
            contender: 2..=u32::MAX,
            bubble: None,
            last: None,
        }),
        stat_columns: RACING_COLUMNS,
        winner_competition: Some(4),
    },
];

/// The (sport, league) pair every normalizer, classifier and ranker takes
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SportContext {
    sport: Sport,
    league: String,
}

impl SportContext {
    pub fn new(sport: Sport, league: impl Into<String>) -> Self {
        Self { sport, league: league.into().trim().to_ascii_lowercase() }
    }

    /// The sport's default (first listed) league.
    pub fn default_for(sport: Sport) -> Self {
        let league = sport.profile().leagues.first().copied().unwrap_or_default();
        Self::new(sport, league)
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn league(&self) -> &str {
        &self.league
    }

    pub fn with_league(&self, league: impl Into<String>) -> Self {
        Self::new(self.sport, league)
    }

    pub fn sport_profile(&self) -> &'static SportProfile {
        self.sport.profile()
    }

    /// `None` for leagues the tables do not know; callers fall back to
    /// sport-level defaults.
    pub fn league_profile(&self) -> Option<&'static LeagueProfile> {
        LEAGUE_PROFILES
            .iter()
            .find(|p| p.sport == self.sport && p.slug == self.league)
    }

    pub fn is_known_league(&self) -> bool {
        self.league_profile().is_some()
    }

    pub fn league_name(&self) -> String {
        self.league_profile()
            .map(|p| p.display_name.to_string())
            .unwrap_or_else(|| self.league.to_uppercase())
    }

    /// `"<sport>/<league>"` as used in upstream URLs.
    pub fn path(&self) -> String {
        format!("{}/{}", self.sport.slug(), self.league)
    }

    pub fn league_logo(&self) -> String {
        format!(
            "https://a.espncdn.com/combiner/i?img=/i/teamlogos/leagues/500/{}.png&w=100&h=100&transparent=true",
            self.league
        )
    }

    pub fn league_link(&self) -> String {
        format!("https://www.espn.com/{}", self.league)
    }

    /// Next league in the sport's dropdown order, wrapping around.
    pub fn next_league(&self) -> Self {
        let leagues = self.sport.profile().leagues;
        let idx = leagues.iter().position(|l| *l == self.league);
        let next = match idx {
            Some(i) => leagues[(i + 1) % leagues.len()],
            None => leagues.first().copied().unwrap_or_default(),
        };
        self.with_league(next)
    }

    /// Value for the scoreboard `dates` query parameter.
    ///
    /// Racing asks for the whole calendar year; other sports ask for a window
    /// around `today`.
    pub fn scoreboard_dates(&self, today: NaiveDate, days_back: u32, days_ahead: u32) -> String {
        if self.sport == Sport::Racing {
            return today.year().to_string();
        }
        let start = today
            .checked_sub_days(Days::new(u64::from(days_back)))
            .unwrap_or(today);
        let end = today
            .checked_add_days(Days::new(u64::from(days_ahead)))
            .unwrap_or(today);
        format!("{}-{}", start.format("%Y%m%d"), end.format("%Y%m%d"))
    }
}

impl fmt::Display for SportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.league_name(), self.sport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_league_has_a_profile_row() {
        for sport in Sport::ALL {
            for league in sport.profile().leagues {
                let ctx = SportContext::new(sport, *league);
                assert!(ctx.is_known_league(), "{sport}/{league} missing from league table");
            }
        }
    }

    #[test]
    fn sport_parses_case_insensitively() {
        assert_eq!("Hockey".parse::<Sport>(), Ok(Sport::Hockey));
        assert!("curling".parse::<Sport>().is_err());
    }

    #[test]
    fn period_labels_follow_the_sport() {
        assert_eq!(Sport::Basketball.profile().period_label, "Q");
        assert_eq!(Sport::Football.profile().period_label, "Q");
        assert_eq!(Sport::Hockey.profile().period_label, "P");
        assert_eq!(Sport::Racing.profile().period_label, "L");
        assert!(Sport::Baseball.profile().uses_status_detail);
        assert!(Sport::Soccer.profile().uses_status_detail);
    }

    #[test]
    fn scoreboard_dates_span_the_configured_window() {
        let ctx = SportContext::new(Sport::Hockey, "nhl");
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(ctx.scoreboard_dates(today, 3, 7), "20251230-20260109");
    }

    #[test]
    fn racing_scoreboard_asks_for_the_whole_year() {
        let ctx = SportContext::default_for(Sport::Racing);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(ctx.scoreboard_dates(today, 3, 7), "2026");
    }

    #[test]
    fn next_league_wraps_within_the_sport() {
        let ctx = SportContext::new(Sport::Football, "nfl");
        assert_eq!(ctx.next_league().league(), "college-football");
        assert_eq!(ctx.next_league().next_league().league(), "nfl");
    }

    #[test]
    fn unknown_league_falls_back_to_uppercased_slug() {
        let ctx = SportContext::new(Sport::Soccer, "ger.1");
        assert!(!ctx.is_known_league());
        assert_eq!(ctx.league_name(), "GER.1");
        assert_eq!(ctx.league_link(), "https://www.espn.com/ger.1");
    }
}
