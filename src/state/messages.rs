use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use sideline_api::bucket::DayBucket;
use sideline_api::{
    Article, Event, GameDetail, InjuryRecord, Roster, SportContext, StandingsGroup, TeamSchedule,
    Transaction,
};

/// Every request carries the context it was issued for, so a response for a
/// league the user has since left can be dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkRequest {
    LoadScores { ctx: SportContext },
    LoadNews { ctx: SportContext },
    LoadInjuries { ctx: SportContext },
    LoadTransactions { ctx: SportContext },
    LoadStandings { ctx: SportContext },
    LoadTeamSchedule { ctx: SportContext, team_id: String },
    LoadGameDetail { ctx: SportContext, event_id: String },
    LoadRoster { ctx: SportContext, team_id: String },
}

impl NetworkRequest {
    pub fn ctx(&self) -> &SportContext {
        match self {
            NetworkRequest::LoadScores { ctx }
            | NetworkRequest::LoadNews { ctx }
            | NetworkRequest::LoadInjuries { ctx }
            | NetworkRequest::LoadTransactions { ctx }
            | NetworkRequest::LoadStandings { ctx }
            | NetworkRequest::LoadTeamSchedule { ctx, .. }
            | NetworkRequest::LoadGameDetail { ctx, .. }
            | NetworkRequest::LoadRoster { ctx, .. } => ctx,
        }
    }
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ScoresLoaded { ctx: SportContext, days: Vec<DayBucket<Event>> },
    NewsLoaded { ctx: SportContext, articles: Vec<Article> },
    InjuriesLoaded { ctx: SportContext, injuries: Vec<InjuryRecord> },
    TransactionsLoaded { ctx: SportContext, days: Vec<DayBucket<Transaction>> },
    StandingsLoaded { ctx: SportContext, groups: Vec<StandingsGroup> },
    TeamScheduleLoaded { ctx: SportContext, schedule: TeamSchedule },
    GameDetailLoaded { ctx: SportContext, detail: GameDetail },
    RosterLoaded { ctx: SportContext, roster: Roster },
    Error { request: NetworkRequest, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    /// Periodic redraw so time-based badges move without input.
    ClockTick,
}
