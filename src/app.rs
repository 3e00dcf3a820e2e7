use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::messages::NetworkRequest;
use crate::state::preferences::{Preferences, preferences_path};
use log::{debug, warn};
use sideline_api::bucket::DayBucket;
use sideline_api::view::Dropdown;
use sideline_api::{
    Article, Event, GameDetail, InjuryRecord, Roster, SportContext, StandingsGroup, TeamSchedule,
    Transaction,
};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuItem {
    #[default]
    Scores,
    News,
    Injuries,
    Transactions,
    Standings,
    Team,
    Game,
    Roster,
    Help,
}

impl MenuItem {
    pub fn title(&self) -> &'static str {
        match self {
            MenuItem::Scores => "Scores",
            MenuItem::News => "News",
            MenuItem::Injuries => "Injuries",
            MenuItem::Transactions => "Transactions",
            MenuItem::Standings => "Standings",
            MenuItem::Team => "Team",
            MenuItem::Game => "Game",
            MenuItem::Roster => "Roster",
            MenuItem::Help => "Help",
        }
    }
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
    preferences_path: Option<PathBuf>,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let path = preferences_path();
        let preferences = Preferences::load_from(&path);
        Self::with_preferences(settings, preferences, Some(path))
    }

    /// `preferences_path: None` keeps dropdown choices in memory only.
    pub fn with_preferences(
        settings: AppSettings,
        preferences: Preferences,
        preferences_path: Option<PathBuf>,
    ) -> Self {
        let ctx = starting_context(&settings, &preferences);
        let state = AppState::new(ctx, preferences);
        Self { settings, state, preferences_path }
    }

    /// Tabs reachable with the number keys, in order.
    pub fn tabs(&self) -> Vec<MenuItem> {
        let mut tabs = vec![
            MenuItem::Scores,
            MenuItem::News,
            MenuItem::Injuries,
            MenuItem::Transactions,
            MenuItem::Standings,
        ];
        if self.settings.team.is_some() {
            tabs.push(MenuItem::Team);
        }
        tabs
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Responses for a league the user has since left are dropped.
    fn is_current(&mut self, ctx: &SportContext) -> bool {
        if *ctx != self.state.ctx {
            debug!("dropping stale response for {ctx}");
            return false;
        }
        self.state.last_error = None;
        true
    }

    pub fn on_scores_loaded(&mut self, ctx: SportContext, days: Vec<DayBucket<Event>>) {
        if !self.is_current(&ctx) {
            return;
        }
        self.state.scores.finish(days);
        let len = self.state.row_count(MenuItem::Scores);
        self.state.scores.clamp_selection(len);
    }

    pub fn on_news_loaded(&mut self, ctx: SportContext, articles: Vec<Article>) {
        if self.is_current(&ctx) {
            self.state.news.finish(articles);
            self.state.news.selected = 0;
        }
    }

    pub fn on_injuries_loaded(&mut self, ctx: SportContext, injuries: Vec<InjuryRecord>) {
        if self.is_current(&ctx) {
            self.state.injuries.finish(injuries);
            self.state.injuries.selected = 0;
        }
    }

    pub fn on_transactions_loaded(&mut self, ctx: SportContext, days: Vec<DayBucket<Transaction>>) {
        if self.is_current(&ctx) {
            self.state.transactions.finish(days);
            self.state.transactions.selected = 0;
        }
    }

    pub fn on_standings_loaded(&mut self, ctx: SportContext, groups: Vec<StandingsGroup>) {
        if !self.is_current(&ctx) {
            return;
        }
        self.state.standings_dropdown =
            Dropdown::standings(&groups).restore(self.state.stored_dropdown());
        self.state.standings.finish(groups);
        let len = self.state.row_count(MenuItem::Standings);
        self.state.standings.clamp_selection(len);
    }

    pub fn on_team_schedule_loaded(&mut self, ctx: SportContext, schedule: TeamSchedule) {
        if !self.is_current(&ctx) {
            return;
        }
        self.state.team.finish(schedule);
        let len = self.state.row_count(MenuItem::Team);
        self.state.team.clamp_selection(len);
    }

    pub fn on_game_detail_loaded(&mut self, ctx: SportContext, detail: GameDetail) {
        let wanted = self.state.game_event_id.as_deref() == Some(detail.event_id.as_str());
        if !wanted || !self.is_current(&ctx) {
            return;
        }
        let same_game = self
            .state
            .game
            .data
            .as_ref()
            .is_some_and(|d| d.event_id == detail.event_id);
        if !same_game {
            self.state.plays_dropdown = Dropdown::plays(&ctx, &detail)
                .restore(self.state.stored_dropdown());
            self.state.game.selected = 0;
        } else {
            // Keep the user's pick if the refreshed game still offers it.
            let current = self.state.plays_dropdown.selected().to_owned();
            self.state.plays_dropdown = Dropdown::plays(&ctx, &detail).restore(Some(&current));
        }
        self.state.game.finish(detail);
        let len = self.state.row_count(MenuItem::Game);
        self.state.game.clamp_selection(len);
    }

    pub fn on_roster_loaded(&mut self, ctx: SportContext, roster: Roster) {
        if self.is_current(&ctx) {
            self.state.roster.finish(roster);
            self.state.roster.selected = 0;
        }
    }

    /// Clears the loading flag of the view the failed request was for.
    pub fn on_error(&mut self, request: &NetworkRequest, message: String) {
        if *request.ctx() != self.state.ctx {
            debug!("ignoring failure for stale {request:?}: {message}");
            return;
        }
        match request {
            NetworkRequest::LoadScores { .. } => self.state.scores.fail(),
            NetworkRequest::LoadNews { .. } => self.state.news.fail(),
            NetworkRequest::LoadInjuries { .. } => self.state.injuries.fail(),
            NetworkRequest::LoadTransactions { .. } => self.state.transactions.fail(),
            NetworkRequest::LoadStandings { .. } => self.state.standings.fail(),
            NetworkRequest::LoadTeamSchedule { .. } => self.state.team.fail(),
            NetworkRequest::LoadGameDetail { .. } => self.state.game.fail(),
            NetworkRequest::LoadRoster { .. } => self.state.roster.fail(),
        }
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Fetch requests
    // -----------------------------------------------------------------------

    /// Request for `tab`'s data. A foreground request flips the view to its
    /// loading state; a background one keeps showing the previous payload
    /// until the new one lands.
    pub fn request_for(&mut self, tab: MenuItem, foreground: bool) -> Option<NetworkRequest> {
        let ctx = self.state.ctx.clone();
        let state = &mut self.state;
        let (feed_loading, request) = match tab {
            MenuItem::Scores => (&mut state.scores.loading, NetworkRequest::LoadScores { ctx }),
            MenuItem::News => (&mut state.news.loading, NetworkRequest::LoadNews { ctx }),
            MenuItem::Injuries => {
                (&mut state.injuries.loading, NetworkRequest::LoadInjuries { ctx })
            }
            MenuItem::Transactions => (
                &mut state.transactions.loading,
                NetworkRequest::LoadTransactions { ctx },
            ),
            MenuItem::Standings => {
                (&mut state.standings.loading, NetworkRequest::LoadStandings { ctx })
            }
            MenuItem::Team => {
                let team_id = self.settings.team.clone()?;
                (&mut state.team.loading, NetworkRequest::LoadTeamSchedule { ctx, team_id })
            }
            MenuItem::Game => {
                let event_id = state.game_event_id.clone()?;
                (&mut state.game.loading, NetworkRequest::LoadGameDetail { ctx, event_id })
            }
            MenuItem::Roster => {
                let (team_id, _) = state.roster_team.clone()?;
                (&mut state.roster.loading, NetworkRequest::LoadRoster { ctx, team_id })
            }
            MenuItem::Help => return None,
        };
        if foreground {
            *feed_loading = true;
        }
        Some(request)
    }

    /// `r`: re-issue the active view's fetch.
    pub fn refresh(&mut self) -> Option<NetworkRequest> {
        self.request_for(self.state.active_tab, true)
    }

    /// Timer-driven refresh of the active view, without the loading flash.
    pub fn refresh_request(&mut self) -> Option<NetworkRequest> {
        self.request_for(self.state.active_tab, false)
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    /// Switch tabs; returns the first fetch for views never loaded before.
    pub fn update_tab(&mut self, next: MenuItem) -> Option<NetworkRequest> {
        if next == MenuItem::Team && self.settings.team.is_none() {
            return None;
        }
        if self.state.active_tab != next {
            self.state.previous_tab = self.state.active_tab;
            self.state.active_tab = next;
        }
        if self.is_cold(next) {
            self.request_for(next, true)
        } else {
            None
        }
    }

    fn is_cold(&self, tab: MenuItem) -> bool {
        match tab {
            MenuItem::Scores => self.state.scores.is_cold(),
            MenuItem::News => self.state.news.is_cold(),
            MenuItem::Injuries => self.state.injuries.is_cold(),
            MenuItem::Transactions => self.state.transactions.is_cold(),
            MenuItem::Standings => self.state.standings.is_cold(),
            MenuItem::Team => self.state.team.is_cold(),
            MenuItem::Game => self.state.game.is_cold(),
            MenuItem::Roster => self.state.roster.is_cold(),
            MenuItem::Help => false,
        }
    }

    /// Leave Help, Game or Roster for the tab that opened it.
    pub fn go_back(&mut self) {
        if matches!(
            self.state.active_tab,
            MenuItem::Help | MenuItem::Game | MenuItem::Roster
        ) {
            let back = self.state.previous_tab;
            self.state.active_tab =
                if back == self.state.active_tab { MenuItem::Scores } else { back };
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_detail(&mut self) {
        self.state.show_detail = !self.state.show_detail;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    pub fn select_next(&mut self) {
        self.state.move_selection(self.state.active_tab, 1);
    }

    pub fn select_prev(&mut self) {
        self.state.move_selection(self.state.active_tab, -1);
    }

    /// `Enter`: event rows open the Game tab, standings rows open the Roster.
    pub fn open_selected(&mut self) -> Option<NetworkRequest> {
        match self.state.active_tab {
            MenuItem::Scores | MenuItem::Team => {
                let event_id = self.state.selected_event()?.id.clone();
                if event_id.is_empty() {
                    return None;
                }
                if self.state.game_event_id.as_deref() != Some(event_id.as_str()) {
                    self.state.game.clear();
                    self.state.game_event_id = Some(event_id);
                }
                self.state.previous_tab = self.state.active_tab;
                self.state.active_tab = MenuItem::Game;
                self.request_for(MenuItem::Game, true)
            }
            MenuItem::Standings => {
                let entry = self.state.selected_standing()?;
                let team_id = entry.team_id.clone()?;
                let name = entry.name.clone();
                self.state.roster.clear();
                self.state.roster_team = Some((team_id, name));
                self.state.previous_tab = MenuItem::Standings;
                self.state.active_tab = MenuItem::Roster;
                self.request_for(MenuItem::Roster, true)
            }
            _ => None,
        }
    }

    /// `d`: cycle the active view's dropdown and remember the choice.
    pub fn cycle_dropdown(&mut self) -> Option<NetworkRequest> {
        let tab = self.state.active_tab;
        let dropdown = match tab {
            MenuItem::Scores => &mut self.state.scores_dropdown,
            MenuItem::Standings => &mut self.state.standings_dropdown,
            MenuItem::Game => &mut self.state.plays_dropdown,
            MenuItem::Team => &mut self.state.team_dropdown,
            _ => return None,
        };
        if dropdown.is_empty() {
            return None;
        }
        dropdown.cycle();
        let choice = dropdown.selected().to_owned();
        self.remember(&choice);

        if tab == MenuItem::Scores {
            let ctx = self.state.ctx.with_league(choice);
            self.state.switch_context(ctx);
            return self.request_for(MenuItem::Scores, true);
        }
        let len = self.state.row_count(tab);
        self.state.move_selection(tab, -(len as isize));
        None
    }

    /// `L`: next league of the sport. League-specific tabs fall back to Scores.
    pub fn cycle_league(&mut self) -> Option<NetworkRequest> {
        let next = self.state.ctx.next_league();
        if next == self.state.ctx {
            return None;
        }
        self.state.switch_context(next);
        if matches!(self.state.active_tab, MenuItem::Game | MenuItem::Roster | MenuItem::Help) {
            self.state.active_tab = MenuItem::Scores;
        }
        self.request_for(self.state.active_tab, true)
    }

    fn remember(&mut self, choice: &str) {
        self.state.preferences.selected_dropdown = Some(choice.to_owned());
        if let Some(path) = &self.preferences_path
            && let Err(e) = self.state.preferences.save_to(path)
        {
            warn!("{e}");
        }
    }
}

/// The stored league choice applies unless `--league` pinned one.
fn starting_context(settings: &AppSettings, preferences: &Preferences) -> SportContext {
    let ctx = settings.initial_context.clone();
    if settings.league_pinned {
        return ctx;
    }
    let leagues = Dropdown::scores(&ctx).restore(preferences.selected_dropdown.as_deref());
    ctx.with_league(leagues.selected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::Args;
    use clap::Parser;
    use sideline_api::{Sport, StandingsEntry};

    fn app(argv: &[&str]) -> App {
        let mut full = vec!["sideline"];
        full.extend_from_slice(argv);
        let settings = AppSettings::from(Args::try_parse_from(full).unwrap());
        App::with_preferences(settings, Preferences::default(), None)
    }

    fn app_with_stored(argv: &[&str], stored: &str) -> App {
        let mut full = vec!["sideline"];
        full.extend_from_slice(argv);
        let settings = AppSettings::from(Args::try_parse_from(full).unwrap());
        let prefs = Preferences { selected_dropdown: Some(stored.to_owned()) };
        App::with_preferences(settings, prefs, None)
    }

    #[test]
    fn stored_league_is_the_starting_league() {
        let mut a = app_with_stored(&["--sport", "basketball"], "wnba");
        assert_eq!(a.state.ctx.league(), "wnba");
        assert_eq!(a.state.scores_dropdown.selected(), "wnba");
        assert_eq!(
            a.request_for(MenuItem::Scores, true),
            Some(NetworkRequest::LoadScores {
                ctx: SportContext::new(Sport::Basketball, "wnba")
            })
        );
    }

    #[test]
    fn explicit_league_beats_the_stored_one() {
        let a = app_with_stored(&["--sport", "basketball", "--league", "nba"], "wnba");
        assert_eq!(a.state.ctx.league(), "nba");
        assert_eq!(a.state.scores_dropdown.selected(), "nba");
    }

    #[test]
    fn stored_choice_from_another_view_keeps_the_default_league() {
        let a = app_with_stored(&["--sport", "basketball"], "Completed Games");
        assert_eq!(a.state.ctx.league(), "nba");
        assert_eq!(a.state.team_dropdown.selected(), "Completed Games");
    }

    fn nhl() -> SportContext {
        SportContext::new(Sport::Hockey, "nhl")
    }

    #[test]
    fn team_tab_needs_a_configured_team() {
        let mut a = app(&[]);
        assert!(!a.tabs().contains(&MenuItem::Team));
        assert_eq!(a.update_tab(MenuItem::Team), None);
        assert_eq!(a.state.active_tab, MenuItem::Scores);

        let mut a = app(&["--team", "21"]);
        assert!(a.tabs().contains(&MenuItem::Team));
        assert_eq!(
            a.update_tab(MenuItem::Team),
            Some(NetworkRequest::LoadTeamSchedule { ctx: nhl(), team_id: "21".into() })
        );
        assert!(a.state.team.loading);
    }

    #[test]
    fn first_visit_loads_and_later_visits_do_not() {
        let mut a = app(&[]);
        assert_eq!(a.update_tab(MenuItem::News), Some(NetworkRequest::LoadNews { ctx: nhl() }));
        a.on_news_loaded(nhl(), vec![Article::default()]);
        a.update_tab(MenuItem::Scores);
        assert_eq!(a.update_tab(MenuItem::News), None);
        assert_eq!(a.refresh(), Some(NetworkRequest::LoadNews { ctx: nhl() }));
        assert!(a.state.news.loading);
    }

    #[test]
    fn background_refresh_keeps_the_current_payload_visible() {
        let mut a = app(&[]);
        a.on_scores_loaded(nhl(), vec![]);
        assert_eq!(a.refresh_request(), Some(NetworkRequest::LoadScores { ctx: nhl() }));
        assert!(!a.state.scores.loading);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut a = app(&[]);
        a.on_news_loaded(SportContext::new(Sport::Hockey, "ahl"), vec![Article::default()]);
        assert!(a.state.news.data.is_none());
    }

    #[test]
    fn errors_clear_only_the_failed_view() {
        let mut a = app(&[]);
        a.request_for(MenuItem::News, true);
        a.request_for(MenuItem::Injuries, true);
        a.on_error(&NetworkRequest::LoadNews { ctx: nhl() }, "boom".into());
        assert!(!a.state.news.loading);
        assert!(a.state.injuries.loading);
        assert_eq!(a.state.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn enter_on_a_standings_row_opens_the_roster() {
        let mut a = app(&[]);
        a.on_standings_loaded(
            nhl(),
            vec![StandingsGroup {
                name: "Atlantic".into(),
                entries: vec![StandingsEntry {
                    team_id: Some("1".into()),
                    name: "Bruins".into(),
                    ..Default::default()
                }],
            }],
        );
        a.update_tab(MenuItem::Standings);
        let req = a.open_selected();
        assert_eq!(req, Some(NetworkRequest::LoadRoster { ctx: nhl(), team_id: "1".into() }));
        assert_eq!(a.state.active_tab, MenuItem::Roster);
        a.go_back();
        assert_eq!(a.state.active_tab, MenuItem::Standings);
    }

    #[test]
    fn enter_on_an_event_opens_the_game() {
        let mut a = app(&[]);
        let day = DayBucket {
            date: None,
            label: "Date TBD".into(),
            items: vec![Event { id: "401".into(), ..Default::default() }],
        };
        a.on_scores_loaded(nhl(), vec![day]);
        let req = a.open_selected();
        assert_eq!(
            req,
            Some(NetworkRequest::LoadGameDetail { ctx: nhl(), event_id: "401".into() })
        );
        assert_eq!(a.state.active_tab, MenuItem::Game);

        // A detail for some other event is ignored.
        a.on_game_detail_loaded(nhl(), GameDetail { event_id: "999".into(), ..Default::default() });
        assert!(a.state.game.loading);
        a.on_game_detail_loaded(nhl(), GameDetail { event_id: "401".into(), ..Default::default() });
        assert!(!a.state.game.loading);
    }

    #[test]
    fn scores_dropdown_switches_league() {
        let mut a = app(&["--sport", "basketball"]);
        a.on_news_loaded(SportContext::new(Sport::Basketball, "nba"), vec![Article::default()]);
        let req = a.cycle_dropdown();
        let wnba = SportContext::new(Sport::Basketball, "wnba");
        assert_eq!(req, Some(NetworkRequest::LoadScores { ctx: wnba.clone() }));
        assert_eq!(a.state.ctx, wnba);
        assert!(a.state.news.data.is_none());
        assert_eq!(a.state.preferences.selected_dropdown.as_deref(), Some("wnba"));
    }

    #[test]
    fn league_cycle_wraps_and_leaves_detail_tabs() {
        let mut a = app(&["--sport", "football", "--league", "college-football"]);
        a.state.active_tab = MenuItem::Game;
        let req = a.cycle_league();
        assert_eq!(a.state.ctx.league(), "nfl");
        assert_eq!(a.state.active_tab, MenuItem::Scores);
        assert!(matches!(req, Some(NetworkRequest::LoadScores { .. })));

        // Single-league sports have nothing to cycle to.
        let mut a = app(&["--sport", "racing"]);
        assert_eq!(a.cycle_league(), None);
    }

    #[test]
    fn team_dropdown_choice_is_remembered() {
        let mut a = app(&["--team", "21"]);
        a.update_tab(MenuItem::Team);
        assert_eq!(a.cycle_dropdown(), None);
        assert_eq!(
            a.state.preferences.selected_dropdown.as_deref(),
            Some(sideline_api::view::COMPLETED_GAMES)
        );
    }
}
