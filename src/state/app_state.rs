use crate::app::MenuItem;
use crate::state::preferences::Preferences;
use sideline_api::bucket::DayBucket;
use sideline_api::view::{Dropdown, HasData, ViewState, filter_plays, COMPLETED_GAMES};
use sideline_api::{
    Article, Event, GameDetail, InjuryRecord, Play, Roster, SportContext, StandingsEntry,
    StandingsGroup, TeamSchedule, Transaction,
};

// ---------------------------------------------------------------------------
// Per-view fetch state
// ---------------------------------------------------------------------------

/// Last payload for one view plus whether a fetch for it is in flight.
/// A new payload always replaces the old one wholesale.
#[derive(Debug)]
pub struct Feed<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub selected: usize,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self { data: None, loading: false, selected: 0 }
    }
}

impl<T: HasData> Feed<T> {
    pub fn view(&self) -> ViewState<&T> {
        ViewState::resolve(self.loading, self.data.as_ref())
    }
}

impl<T> Feed<T> {
    pub fn finish(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
    }

    pub fn fail(&mut self) {
        self.loading = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Nothing loaded and nothing in flight.
    pub fn is_cold(&self) -> bool {
        self.data.is_none() && !self.loading
    }

    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }
}

// ---------------------------------------------------------------------------
// App state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppState {
    pub ctx: SportContext,
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,

    pub scores: Feed<Vec<DayBucket<Event>>>,
    pub news: Feed<Vec<Article>>,
    pub injuries: Feed<Vec<InjuryRecord>>,
    pub transactions: Feed<Vec<DayBucket<Transaction>>>,
    pub standings: Feed<Vec<StandingsGroup>>,
    pub team: Feed<TeamSchedule>,
    pub game: Feed<GameDetail>,
    pub roster: Feed<Roster>,

    /// Leagues of the active sport; picking one switches league.
    pub scores_dropdown: Dropdown,
    pub standings_dropdown: Dropdown,
    pub plays_dropdown: Dropdown,
    pub team_dropdown: Dropdown,

    /// Event shown in the Game tab.
    pub game_event_id: Option<String>,
    /// Team (id, display name) shown in the Roster tab.
    pub roster_team: Option<(String, String)>,

    pub preferences: Preferences,
    pub show_logs: bool,
    pub show_detail: bool,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(ctx: SportContext, preferences: Preferences) -> Self {
        let stored = preferences.selected_dropdown.clone();
        Self {
            scores_dropdown: Dropdown::scores(&ctx),
            standings_dropdown: Dropdown::standings(&[]),
            plays_dropdown: Dropdown::plays(&ctx, &GameDetail::default()),
            team_dropdown: Dropdown::team().restore(stored.as_deref()),
            ctx,
            active_tab: MenuItem::default(),
            previous_tab: MenuItem::default(),
            scores: Feed::default(),
            news: Feed::default(),
            injuries: Feed::default(),
            transactions: Feed::default(),
            standings: Feed::default(),
            team: Feed::default(),
            game: Feed::default(),
            roster: Feed::default(),
            game_event_id: None,
            roster_team: None,
            preferences,
            show_logs: false,
            show_detail: true,
            last_error: None,
        }
    }

    /// Drop everything fetched for the previous league.
    pub fn switch_context(&mut self, ctx: SportContext) {
        self.scores_dropdown = Dropdown::scores(&ctx);
        self.ctx = ctx;
        self.scores.clear();
        self.news.clear();
        self.injuries.clear();
        self.transactions.clear();
        self.standings.clear();
        self.team.clear();
        self.game.clear();
        self.roster.clear();
        self.standings_dropdown = Dropdown::standings(&[]);
        self.game_event_id = None;
        self.roster_team = None;
    }

    pub fn stored_dropdown(&self) -> Option<&str> {
        self.preferences.selected_dropdown.as_deref()
    }

    /// Scoreboard events across day sections, in display order.
    pub fn score_rows(&self) -> Vec<&Event> {
        self.scores
            .data
            .iter()
            .flatten()
            .flat_map(|day| day.items.iter())
            .collect()
    }

    pub fn transaction_rows(&self) -> Vec<&Transaction> {
        self.transactions
            .data
            .iter()
            .flatten()
            .flat_map(|day| day.items.iter())
            .collect()
    }

    /// The standings group picked in the dropdown.
    pub fn selected_group(&self) -> Option<&StandingsGroup> {
        let groups = self.standings.data.as_ref()?;
        let name = self.standings_dropdown.selected();
        groups.iter().find(|g| g.name == name).or_else(|| groups.first())
    }

    pub fn standings_rows(&self) -> &[StandingsEntry] {
        self.selected_group().map(|g| g.entries.as_slice()).unwrap_or_default()
    }

    pub fn team_rows(&self) -> &[Event] {
        let Some(schedule) = self.team.data.as_ref() else {
            return &[];
        };
        if self.team_dropdown.selected() == COMPLETED_GAMES {
            &schedule.completed
        } else {
            &schedule.upcoming
        }
    }

    pub fn visible_plays(&self) -> Vec<&Play> {
        match self.game.data.as_ref() {
            Some(detail) => filter_plays(&self.ctx, detail, self.plays_dropdown.selected()),
            None => Vec::new(),
        }
    }

    pub fn roster_rows(&self) -> usize {
        self.roster
            .data
            .iter()
            .flat_map(|r| r.groups.iter())
            .map(|g| g.players.len())
            .sum()
    }

    /// Number of selectable rows in `tab`.
    pub fn row_count(&self, tab: MenuItem) -> usize {
        match tab {
            MenuItem::Scores => self.score_rows().len(),
            MenuItem::News => self.news.data.as_ref().map_or(0, Vec::len),
            MenuItem::Injuries => self.injuries.data.as_ref().map_or(0, Vec::len),
            MenuItem::Transactions => self.transaction_rows().len(),
            MenuItem::Standings => self.standings_rows().len(),
            MenuItem::Team => self.team_rows().len(),
            MenuItem::Game => self.visible_plays().len(),
            MenuItem::Roster => self.roster_rows(),
            MenuItem::Help => 0,
        }
    }

    pub fn move_selection(&mut self, tab: MenuItem, delta: isize) {
        let len = self.row_count(tab);
        match tab {
            MenuItem::Scores => self.scores.move_selection(delta, len),
            MenuItem::News => self.news.move_selection(delta, len),
            MenuItem::Injuries => self.injuries.move_selection(delta, len),
            MenuItem::Transactions => self.transactions.move_selection(delta, len),
            MenuItem::Standings => self.standings.move_selection(delta, len),
            MenuItem::Team => self.team.move_selection(delta, len),
            MenuItem::Game => self.game.move_selection(delta, len),
            MenuItem::Roster => self.roster.move_selection(delta, len),
            MenuItem::Help => {}
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        match self.active_tab {
            MenuItem::Scores => self.score_rows().get(self.scores.selected).copied(),
            MenuItem::Team => self.team_rows().get(self.team.selected),
            _ => None,
        }
    }

    pub fn selected_standing(&self) -> Option<&StandingsEntry> {
        self.standings_rows().get(self.standings.selected)
    }
}
