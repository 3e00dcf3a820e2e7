use crate::state::app_settings::AppSettings;
use crate::state::messages::{NetworkRequest, NetworkResponse};
use chrono::Local;
use log::{debug, error};
use sideline_api::bucket::bucket_by_day;
use sideline_api::{ApiResult, EspnApi, SportContext};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';
const SPINNER_TICK: Duration = Duration::from_millis(33);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Scoreboard window and transaction page size, fixed at startup.
#[derive(Debug, Clone, Copy)]
struct FetchWindow {
    days_back: u32,
    days_ahead: u32,
    transactions_limit: u32,
}

pub struct NetworkWorker {
    client: EspnApi,
    window: FetchWindow,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
}

impl NetworkWorker {
    pub fn new(
        settings: &AppSettings,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: EspnApi::new(),
            window: FetchWindow {
                days_back: settings.days_back,
                days_ahead: settings.days_ahead,
                transactions_limit: settings.transactions_limit,
            },
            requests,
            responses,
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            debug!("network request {request:?}");
            let spinner = self.spin();
            let result = self.handle(request.clone()).await;

            // The last frame must land before the settled state.
            spinner.abort();
            let _ = spinner.await;
            let spinner_char = if result.is_ok() { ' ' } else { ERROR_CHAR };
            publish(&self.responses, LoadingState { is_loading: false, spinner_char }).await;

            let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                request,
                message: err.to_string(),
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle(&self, request: NetworkRequest) -> ApiResult<NetworkResponse> {
        let response = match request {
            NetworkRequest::LoadScores { ctx } => {
                let dates = self.scoreboard_dates(&ctx);
                let days = self.client.fetch_schedule_by_day(&ctx, &dates).await?;
                NetworkResponse::ScoresLoaded { ctx, days }
            }
            NetworkRequest::LoadNews { ctx } => {
                let articles = self.client.fetch_news(&ctx).await?;
                NetworkResponse::NewsLoaded { ctx, articles }
            }
            NetworkRequest::LoadInjuries { ctx } => {
                let injuries = self.client.fetch_injuries(&ctx).await?;
                NetworkResponse::InjuriesLoaded { ctx, injuries }
            }
            NetworkRequest::LoadTransactions { ctx } => {
                let transactions = self
                    .client
                    .fetch_transactions(&ctx, self.window.transactions_limit)
                    .await?;
                NetworkResponse::TransactionsLoaded { ctx, days: bucket_by_day(transactions) }
            }
            NetworkRequest::LoadStandings { ctx } => {
                let groups = self.client.fetch_standings(&ctx).await?;
                NetworkResponse::StandingsLoaded { ctx, groups }
            }
            NetworkRequest::LoadTeamSchedule { ctx, team_id } => {
                let schedule = self.client.fetch_team_schedule(&ctx, &team_id).await?;
                NetworkResponse::TeamScheduleLoaded { ctx, schedule }
            }
            NetworkRequest::LoadGameDetail { ctx, event_id } => {
                let detail = self.client.fetch_game_detail(&ctx, &event_id).await?;
                NetworkResponse::GameDetailLoaded { ctx, detail }
            }
            NetworkRequest::LoadRoster { ctx, team_id } => {
                let roster = self.client.fetch_roster(&ctx, &team_id).await?;
                NetworkResponse::RosterLoaded { ctx, roster }
            }
        };
        Ok(response)
    }

    fn scoreboard_dates(&self, ctx: &SportContext) -> String {
        ctx.scoreboard_dates(
            Local::now().date_naive(),
            self.window.days_back,
            self.window.days_ahead,
        )
    }

    /// Publishes a new spinner frame every tick until aborted.
    fn spin(&self) -> JoinHandle<()> {
        let responses = self.responses.clone();
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(SPINNER_TICK);
            for spinner_char in SPINNER_CHARS.iter().copied().cycle() {
                ticks.tick().await;
                publish(&responses, LoadingState { is_loading: true, spinner_char }).await;
            }
        })
    }
}

async fn publish(responses: &mpsc::Sender<NetworkResponse>, loading_state: LoadingState) {
    let _ = responses.send(NetworkResponse::LoadingStateChanged { loading_state }).await;
}
