use clap::Parser;
use log::LevelFilter;
use sideline_api::client::DEFAULT_TRANSACTIONS_LIMIT;
use sideline_api::{Sport, SportContext};
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// basketball, football, baseball, hockey, soccer or racing
    #[arg(short, long, env = "SIDELINE_SPORT", default_value_t = Sport::Hockey)]
    pub sport: Sport,

    /// League slug, e.g. nba, eng.1, f1. Defaults to the sport's first league.
    #[arg(short, long, env = "SIDELINE_LEAGUE")]
    pub league: Option<String>,

    /// Favourite team id; enables the Team tab.
    #[arg(short, long, env = "SIDELINE_TEAM")]
    pub team: Option<String>,

    #[arg(long, env = "SIDELINE_DAYS_BACK", default_value_t = 3)]
    pub days_back: u32,

    #[arg(long, env = "SIDELINE_DAYS_AHEAD", default_value_t = 7)]
    pub days_ahead: u32,

    #[arg(long, env = "SIDELINE_TRANSACTIONS_LIMIT", default_value_t = DEFAULT_TRANSACTIONS_LIMIT)]
    pub transactions_limit: u32,

    /// Scores auto-refresh interval in seconds; 0 disables it.
    #[arg(long, env = "SIDELINE_REFRESH_SECS", default_value_t = 30)]
    pub refresh_secs: u64,

    /// off, error, warn, info, debug or trace
    #[arg(long, env = "SIDELINE_LOG", default_value = "error", value_parser = parse_level)]
    pub log_level: LevelFilter,

    #[arg(short, long, env = "SIDELINE_FULL_SCREEN")]
    pub full_screen: bool,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{s}'"))
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: LevelFilter,
    pub team: Option<String>,
    pub days_back: u32,
    pub days_ahead: u32,
    pub transactions_limit: u32,
    pub refresh_interval: Option<Duration>,
    pub initial_context: SportContext,
    /// `--league` was given; a stored league choice must not override it.
    pub league_pinned: bool,
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from(Args::parse())
    }
}

impl From<Args> for AppSettings {
    fn from(args: Args) -> Self {
        let (initial_context, league_pinned) = match args.league.as_deref().map(str::trim) {
            Some(league) if !league.is_empty() => (SportContext::new(args.sport, league), true),
            _ => (SportContext::default_for(args.sport), false),
        };
        Self {
            full_screen: args.full_screen,
            log_level: args.log_level,
            team: args.team.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty()),
            days_back: args.days_back,
            days_ahead: args.days_ahead,
            transactions_limit: args.transactions_limit,
            refresh_interval: (args.refresh_secs > 0)
                .then(|| Duration::from_secs(args.refresh_secs)),
            initial_context,
            league_pinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(argv: &[&str]) -> AppSettings {
        let mut full = vec!["sideline"];
        full.extend_from_slice(argv);
        AppSettings::from(Args::try_parse_from(full).expect("args parse"))
    }

    #[test]
    fn defaults() {
        let s = settings(&[]);
        assert_eq!(s.initial_context, SportContext::new(Sport::Hockey, "nhl"));
        assert_eq!(s.log_level, LevelFilter::Error);
        assert_eq!(s.transactions_limit, 75);
        assert_eq!(s.refresh_interval, Some(Duration::from_secs(30)));
        assert_eq!((s.days_back, s.days_ahead), (3, 7));
        assert!(s.team.is_none());
        assert!(!s.full_screen);
    }

    #[test]
    fn sport_without_league_uses_the_first_league() {
        let s = settings(&["--sport", "soccer"]);
        assert_eq!(s.initial_context.league(), "eng.1");
        assert!(!s.league_pinned);
        let s = settings(&["--sport", "basketball", "--league", "WNBA"]);
        assert_eq!(s.initial_context.league(), "wnba");
        assert!(s.league_pinned);
    }

    #[test]
    fn blank_team_and_zero_refresh_are_off() {
        let s = settings(&["--team", "  ", "--refresh-secs", "0", "--log-level", "debug"]);
        assert!(s.team.is_none());
        assert!(s.refresh_interval.is_none());
        assert_eq!(s.log_level, LevelFilter::Debug);
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(Args::try_parse_from(["sideline", "--sport", "curling"]).is_err());
        assert!(Args::try_parse_from(["sideline", "--log-level", "loud"]).is_err());
    }
}
