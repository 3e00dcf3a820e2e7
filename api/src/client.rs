use crate::bucket::{DayBucket, bucket_by_day};
use crate::context::SportContext;
use crate::espn::{
    InjuriesResponse, NewsResponse, RosterResponse, ScoreboardResponse, StandingsResponse,
    SummaryResponse, TransactionsResponse,
};
use crate::normalize;
use crate::{
    Article, Event, GameDetail, InjuryRecord, Roster, StandingsGroup, TeamSchedule, Transaction,
};
use log::{debug, error};
use reqwest::Client;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE: &str = "https://site.api.espn.com";
const ESPN_WEB: &str = "https://site.web.api.espn.com";
pub const DEFAULT_TRANSACTIONS_LIMIT: u32 = 75;

/// ESPN client for every (sport, league) the context tables know about.
///
/// Fetches hand the decoded body straight to the normalizer. A 4xx answer is
/// treated as "nothing here" and yields an empty payload; 5xx, transport and
/// decode failures are errors. No retries.
#[derive(Debug, Clone)]
pub struct EspnApi {
    client: Client,
    timeout: Duration,
    site_base: String,
    web_base: String,
}

impl Default for EspnApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("sideline/0.1 (terminal sports viewer)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
            site_base: ESPN_SITE.to_owned(),
            web_base: ESPN_WEB.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error for {1}: {0}")]
    Network(#[source] reqwest::Error, String),
    #[error("API error for {1}: {0}")]
    Api(#[source] reqwest::Error, String),
    #[error("Parse error for {1}: {0}")]
    Parsing(#[source] reqwest::Error, String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid sport context: {0}")]
    InvalidContext(String),
}

impl EspnApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client somewhere else (a mock server in tests).
    pub fn with_base_urls(site_base: impl Into<String>, web_base: impl Into<String>) -> Self {
        Self {
            site_base: site_base.into().trim_end_matches('/').to_owned(),
            web_base: web_base.into().trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Events for `dates` (`YYYYMMDD-YYYYMMDD`, or `YYYY` for racing).
    pub async fn fetch_scoreboard(&self, ctx: &SportContext, dates: &str) -> ApiResult<Vec<Event>> {
        let url = format!("{}/scoreboard?dates={dates}", self.site_url(ctx)?);
        let raw: ScoreboardResponse = self.get(&url).await?;
        Ok(normalize::normalize_events(ctx, &raw))
    }

    /// Scoreboard events grouped by local calendar day.
    pub async fn fetch_schedule_by_day(
        &self,
        ctx: &SportContext,
        dates: &str,
    ) -> ApiResult<Vec<DayBucket<Event>>> {
        Ok(bucket_by_day(self.fetch_scoreboard(ctx, dates).await?))
    }

    pub async fn fetch_news(&self, ctx: &SportContext) -> ApiResult<Vec<Article>> {
        let url = format!("{}/news", self.site_url(ctx)?);
        let raw: NewsResponse = self.get(&url).await?;
        Ok(normalize::normalize_articles(ctx, &raw))
    }

    pub async fn fetch_injuries(&self, ctx: &SportContext) -> ApiResult<Vec<InjuryRecord>> {
        let url = format!("{}/injuries", self.site_url(ctx)?);
        let raw: InjuriesResponse = self.get(&url).await?;
        Ok(normalize::normalize_injuries(ctx, &raw))
    }

    pub async fn fetch_transactions(
        &self,
        ctx: &SportContext,
        limit: u32,
    ) -> ApiResult<Vec<Transaction>> {
        let url = format!("{}/transactions?limit={limit}", self.site_url(ctx)?);
        let raw: TransactionsResponse = self.get(&url).await?;
        Ok(normalize::normalize_transactions(ctx, &raw))
    }

    pub async fn fetch_standings(&self, ctx: &SportContext) -> ApiResult<Vec<StandingsGroup>> {
        let url = format!(
            "{}/apis/v2/sports/{}/standings",
            self.web_base,
            checked_path(ctx)?
        );
        let raw: StandingsResponse = self.get(&url).await?;
        Ok(normalize::normalize_standings(ctx, &raw))
    }

    /// Play-by-play and summary for one event.
    pub async fn fetch_game_detail(
        &self,
        ctx: &SportContext,
        event_id: &str,
    ) -> ApiResult<GameDetail> {
        let event_id = required("event id", event_id)?;
        let url = format!(
            "{}/apis/site/v2/sports/{}/summary?event={event_id}",
            self.web_base,
            checked_path(ctx)?
        );
        let raw: SummaryResponse = self.get(&url).await?;
        Ok(normalize::normalize_game_detail(ctx, event_id, &raw))
    }

    pub async fn fetch_roster(&self, ctx: &SportContext, team_id: &str) -> ApiResult<Roster> {
        let team_id = required("team id", team_id)?;
        let url = format!("{}/teams/{team_id}/roster", self.site_url(ctx)?);
        let raw: RosterResponse = self.get(&url).await?;
        Ok(normalize::normalize_roster(&raw))
    }

    pub async fn fetch_team_schedule(
        &self,
        ctx: &SportContext,
        team_id: &str,
    ) -> ApiResult<TeamSchedule> {
        let team_id = required("team id", team_id)?;
        let url = format!("{}/teams/{team_id}/schedule", self.site_url(ctx)?);
        let raw: ScoreboardResponse = self.get(&url).await?;
        Ok(normalize::normalize_team_schedule(ctx, &raw))
    }

    fn site_url(&self, ctx: &SportContext) -> ApiResult<String> {
        Ok(format!(
            "{}/apis/site/v2/sports/{}",
            self.site_base,
            checked_path(ctx)?
        ))
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                error!("request to {url} failed: {e}");
                ApiError::Network(e, url.to_owned())
            })?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    debug!("{url} answered {:?}; treating as empty", e.status());
                    Ok(T::default())
                } else {
                    error!("{url} failed: {e}");
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

fn checked_path(ctx: &SportContext) -> ApiResult<String> {
    if ctx.league().is_empty() {
        return Err(ApiError::InvalidContext(format!(
            "no league selected for {}",
            ctx.sport()
        )));
    }
    Ok(ctx.path())
}

fn required<'a>(what: &str, value: &'a str) -> ApiResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApiError::NotFound(format!("{what} is empty")))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sport;

    #[test]
    fn site_urls_include_sport_and_league() {
        let api = EspnApi::with_base_urls("http://localhost:1234/", "http://localhost:5678");
        let ctx = SportContext::new(Sport::Soccer, "eng.1");
        assert_eq!(
            api.site_url(&ctx).unwrap(),
            "http://localhost:1234/apis/site/v2/sports/soccer/eng.1"
        );
    }

    #[test]
    fn empty_league_is_an_invalid_context() {
        let ctx = SportContext::new(Sport::Hockey, "  ");
        assert!(matches!(checked_path(&ctx), Err(ApiError::InvalidContext(_))));
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!(matches!(required("team id", " "), Err(ApiError::NotFound(_))));
        assert_eq!(required("team id", " 21 ").unwrap(), "21");
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ApiError::NotFound("team id is empty".into());
        assert_eq!(err.to_string(), "Not found: team id is empty");
    }
}
