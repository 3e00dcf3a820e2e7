//! Loading / no-data / ready contract and the per-view dropdown selector.

use crate::bucket::DayBucket;
use crate::context::SportContext;
use crate::status::{classify_play, period_label};
use crate::{GameDetail, Roster, StandingsGroup, TeamSchedule};

/// What a view should render for the current fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    NoData,
    Ready(T),
}

/// Payloads that can be "present but empty".
pub trait HasData {
    fn has_data(&self) -> bool;
}

impl<T: HasData + ?Sized> HasData for &T {
    fn has_data(&self) -> bool {
        (**self).has_data()
    }
}

impl<T> HasData for Vec<T> {
    fn has_data(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> HasData for DayBucket<T> {
    fn has_data(&self) -> bool {
        !self.items.is_empty()
    }
}

impl HasData for Roster {
    fn has_data(&self) -> bool {
        self.groups.iter().any(|g| !g.players.is_empty())
    }
}

impl HasData for GameDetail {
    fn has_data(&self) -> bool {
        !self.plays.is_empty()
            || !self.summary.matchup.home.display_name.is_empty()
            || !self.summary.home_stats.is_empty()
    }
}

impl HasData for TeamSchedule {
    fn has_data(&self) -> bool {
        !self.upcoming.is_empty() || !self.completed.is_empty()
    }
}

impl<T: HasData> ViewState<T> {
    /// Loading wins; once loading is over, an absent or empty payload is
    /// a terminal no-data state.
    pub fn resolve(is_loading: bool, payload: Option<T>) -> Self {
        if is_loading {
            return ViewState::Loading;
        }
        match payload {
            Some(p) if p.has_data() => ViewState::Ready(p),
            _ => ViewState::NoData,
        }
    }
}

impl<T> ViewState<T> {
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

// ---------------------------------------------------------------------------
// Dropdown
// ---------------------------------------------------------------------------

pub const MAJOR_PLAYS: &str = "Major Plays";
pub const ALL_PLAYS: &str = "All Plays";
pub const SCHEDULED_GAMES: &str = "Scheduled Games";
pub const COMPLETED_GAMES: &str = "Completed Games";

/// A display-mode selector with a documented default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    options: Vec<String>,
    selected: usize,
}

impl Dropdown {
    /// `default` must be one of `options`; otherwise the first option is used.
    pub fn new(options: Vec<String>, default: &str) -> Self {
        let selected = options.iter().position(|o| o == default).unwrap_or(0);
        Self { options, selected }
    }

    /// Leagues of the context's sport; defaults to the active league.
    pub fn scores(ctx: &SportContext) -> Self {
        let options = ctx
            .sport_profile()
            .leagues
            .iter()
            .map(|l| l.to_string())
            .collect();
        Self::new(options, ctx.league())
    }

    /// One option per standings group; defaults to the first.
    pub fn standings(groups: &[StandingsGroup]) -> Self {
        let options: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();
        let default = options.first().cloned().unwrap_or_default();
        Self::new(options, &default)
    }

    /// "Major Plays", "All Plays", then each period present in the detail.
    pub fn plays(ctx: &SportContext, detail: &GameDetail) -> Self {
        let mut options = vec![MAJOR_PLAYS.to_owned(), ALL_PLAYS.to_owned()];
        for play in &detail.plays {
            let label = period_label(ctx, play.period);
            if !options.contains(&label) {
                options.push(label);
            }
        }
        Self::new(options, MAJOR_PLAYS)
    }

    pub fn team() -> Self {
        Self::new(
            vec![SCHEDULED_GAMES.to_owned(), COMPLETED_GAMES.to_owned()],
            SCHEDULED_GAMES,
        )
    }

    /// Apply a persisted selection if it is still one of the options.
    pub fn restore(mut self, stored: Option<&str>) -> Self {
        if let Some(idx) = stored.and_then(|s| self.options.iter().position(|o| o == s)) {
            self.selected = idx;
        }
        self
    }

    pub fn selected(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn cycle(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }
}

/// Filter plays by the plays dropdown selection.
pub fn filter_plays<'a>(
    ctx: &SportContext,
    detail: &'a GameDetail,
    selection: &str,
) -> Vec<&'a crate::Play> {
    detail
        .plays
        .iter()
        .filter(|p| match selection {
            MAJOR_PLAYS => classify_play(p).is_major(),
            ALL_PLAYS => true,
            period => period_label(ctx, p.period) == period,
        })
        .collect()
}
