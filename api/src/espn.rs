/// ESPN API raw wire types: serde shapes for deserializing ESPN responses.
/// Every field is optional; `normalize.rs` resolves the fallbacks.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Lenient scalars
// ---------------------------------------------------------------------------

/// Accept a string, a number, or an object carrying `displayValue`,
/// `displayName`, `href` or `value`. Anything else reads as absent.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_string))
}

/// Like [`lenient_string`] but for small counters (`period`, `age`).
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_string)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as u32))
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => ["displayValue", "displayName", "href", "value"]
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(value_to_string),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Shared fragments
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLink {
    pub href: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnImage {
    pub href: Option<String>,
    pub url: Option<String>,
}

impl EspnImage {
    pub fn source(&self) -> Option<&str> {
        self.href.as_deref().or(self.url.as_deref())
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName")]
    pub short_display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub logo: Option<String>,
    pub logos: Option<Vec<EspnImage>>,
    pub links: Option<Vec<EspnLink>>,
}

impl EspnTeam {
    /// `logo` on scoreboard payloads, `logos[0].href` elsewhere.
    pub fn logo_href(&self) -> Option<String> {
        self.logo.clone().or_else(|| {
            self.logos
                .as_ref()
                .and_then(|l| l.first())
                .and_then(|i| i.source().map(str::to_owned))
        })
    }

    pub fn link_href(&self) -> Option<String> {
        first_link(self.links.as_deref())
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnAthlete {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub headshot: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: Option<String>,
    pub team: Option<EspnTeam>,
    pub links: Option<Vec<EspnLink>>,
}

pub fn first_link(links: Option<&[EspnLink]>) -> Option<String> {
    links
        .and_then(|l| l.first())
        .and_then(|l| l.href.clone())
        .filter(|h| !h.is_empty())
}

// ---------------------------------------------------------------------------
// Scoreboard / team schedule  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    pub date: Option<String>, // ISO 8601, often minute precision
    pub status: Option<EspnStatus>,
    pub competitions: Option<Vec<EspnCompetition>>,
    pub links: Option<Vec<EspnLink>>,
    pub season: Option<EspnSeason>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub period: Option<u32>,
    #[serde(rename = "displayClock")]
    pub display_clock: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    pub name: Option<String>,  // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", ...
    pub state: Option<String>, // "pre" | "in" | "post"
    pub completed: Option<bool>,
    pub detail: Option<String>, // "Top 5th", "45'", "Final/OT"
    #[serde(rename = "shortDetail")]
    pub short_detail: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub id: Option<String>,
    pub date: Option<String>,
    pub competitors: Option<Vec<EspnCompetitor>>,
    pub venue: Option<EspnVenue>,
    pub tickets: Option<Vec<EspnTicket>>,
    /// Team schedule payloads carry status here instead of on the event.
    pub status: Option<EspnStatus>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetitor {
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub athlete: Option<EspnAthlete>, // racing
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: Option<String>, // string on scoreboard, object on team schedule
    pub winner: Option<bool>,
    pub records: Option<Vec<EspnRecord>>,
    /// Completed-game header payloads use the singular key.
    pub record: Option<Vec<EspnRecord>>,
    pub probables: Option<Vec<EspnProbable>>,
    pub linescores: Option<Vec<EspnLineScore>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnRecord {
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnProbable {
    pub athlete: Option<EspnAthlete>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLineScore {
    #[serde(rename = "displayValue", default, deserialize_with = "lenient_string")]
    pub display_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnVenue {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub indoor: Option<bool>,
    pub address: Option<EspnAddress>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnAddress {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTicket {
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnSeason {
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    pub slug: Option<String>, // "regular-season"
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NewsResponse {
    pub articles: Option<Vec<EspnArticle>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnArticle {
    pub headline: Option<String>,
    pub published: Option<String>,
    #[serde(rename = "type")]
    pub article_type: Option<String>, // "HeadlineNews", "Story", ...
    pub byline: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<EspnImage>>,
    pub links: Option<EspnArticleLinks>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnArticleLinks {
    pub web: Option<EspnLink>,
}

// ---------------------------------------------------------------------------
// Injuries
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct InjuriesResponse {
    pub injuries: Option<Vec<EspnTeamInjuries>>,
}

/// One block per team; the records live one level down.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamInjuries {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub team: Option<EspnTeam>,
    pub injuries: Option<Vec<EspnInjury>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnInjury {
    pub status: Option<String>,
    pub athlete: Option<EspnAthlete>,
    pub details: Option<EspnInjuryDetails>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnInjuryDetails {
    #[serde(rename = "returnDate")]
    pub return_date: Option<String>,
    #[serde(rename = "type")]
    pub injury_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TransactionsResponse {
    pub transactions: Option<Vec<EspnTransaction>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTransaction {
    pub date: Option<String>,
    pub description: Option<String>,
    pub team: Option<EspnTeam>,
}

// ---------------------------------------------------------------------------
// Standings  (v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    pub name: Option<String>,
    pub children: Option<Vec<EspnStandingsGroup>>,
    /// Some leagues skip the conference level and put entries at the top.
    pub standings: Option<EspnStandingsTable>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandingsGroup {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub standings: Option<EspnStandingsTable>,
    pub children: Option<Vec<EspnStandingsGroup>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandingsTable {
    pub entries: Option<Vec<EspnStandingsEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandingsEntry {
    pub team: Option<EspnTeam>,
    pub athlete: Option<EspnStandingsAthlete>, // f1 drivers
    pub stats: Option<Vec<EspnStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandingsAthlete {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub flag: Option<EspnImage>,
    pub links: Option<Vec<EspnLink>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStat {
    pub name: Option<String>,
    #[serde(rename = "displayValue", default, deserialize_with = "lenient_string")]
    pub display_value: Option<String>,
    pub summary: Option<String>,
}

// ---------------------------------------------------------------------------
// Game summary  (site v2 API on site.web)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SummaryResponse {
    pub header: Option<EspnSummaryHeader>,
    pub boxscore: Option<EspnBoxscore>,
    pub plays: Option<Vec<EspnPlay>>,
    pub leaders: Option<Vec<EspnTeamLeaders>>,
    #[serde(rename = "gameInfo")]
    pub game_info: Option<EspnGameInfo>,
    /// Pre-game report, one block per team.
    pub injuries: Option<Vec<EspnTeamInjuries>>,
    #[serde(rename = "ticketsInfo")]
    pub tickets_info: Option<EspnTicketsInfo>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTicketsInfo {
    #[serde(rename = "seatSituation")]
    pub seat_situation: Option<EspnSeatSituation>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnSeatSituation {
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnSummaryHeader {
    pub competitions: Option<Vec<EspnCompetition>>,
    pub links: Option<Vec<EspnLink>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnBoxscore {
    pub teams: Option<Vec<EspnBoxscoreTeam>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnBoxscoreTeam {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>,
    pub team: Option<EspnTeam>,
    pub statistics: Option<Vec<EspnTeamStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamStat {
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "displayValue", default, deserialize_with = "lenient_string")]
    pub display_value: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnPlay {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub play_type: Option<EspnPlayType>,
    pub text: Option<String>,
    pub period: Option<EspnPeriod>,
    pub clock: Option<EspnClock>,
    pub team: Option<EspnTeamRef>,
    #[serde(rename = "scoringPlay")]
    pub scoring_play: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnPlayType {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnPeriod {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub number: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnClock {
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamRef {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeamLeaders {
    pub team: Option<EspnTeam>,
    pub leaders: Option<Vec<EspnLeaderCategory>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLeaderCategory {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub leaders: Option<Vec<EspnLeader>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnLeader {
    #[serde(rename = "displayValue", default, deserialize_with = "lenient_string")]
    pub display_value: Option<String>,
    pub athlete: Option<EspnAthlete>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnGameInfo {
    pub venue: Option<EspnVenue>,
}

// ---------------------------------------------------------------------------
// Team roster
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RosterResponse {
    pub team: Option<EspnTeam>,
    pub coach: Option<Vec<EspnCoach>>,
    pub athletes: Option<Vec<EspnRosterEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCoach {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub experience: Option<String>,
}

/// Hockey and football rosters group players by position; basketball and
/// baseball return a flat player list.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EspnRosterEntry {
    Group(EspnRosterGroup),
    Player(EspnRosterPlayer),
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnRosterGroup {
    pub position: Option<String>,
    pub items: Vec<EspnRosterPlayer>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnRosterPlayer {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub jersey: Option<String>,
    #[serde(rename = "displayHeight")]
    pub display_height: Option<String>,
    #[serde(rename = "displayWeight")]
    pub display_weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub headshot: Option<String>,
    pub injuries: Option<Vec<EspnInjuryStatus>>,
    pub links: Option<Vec<EspnLink>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnInjuryStatus {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scores_accept_strings_numbers_and_objects() {
        let raw = json!([
            { "score": "3" },
            { "score": 4 },
            { "score": { "value": 5.0, "displayValue": "5" } },
            { "score": null },
            {}
        ]);
        let parsed: Vec<EspnCompetitor> = serde_json::from_value(raw).unwrap();
        let scores: Vec<Option<&str>> = parsed.iter().map(|c| c.score.as_deref()).collect();
        assert_eq!(scores, vec![Some("3"), Some("4"), Some("5"), None, None]);
    }

    #[test]
    fn period_number_accepts_string_or_number() {
        let a: EspnPeriod = serde_json::from_value(json!({ "number": "2" })).unwrap();
        let b: EspnPeriod = serde_json::from_value(json!({ "number": 3 })).unwrap();
        let c: EspnPeriod = serde_json::from_value(json!({ "number": "OT" })).unwrap();
        assert_eq!(a.number, Some(2));
        assert_eq!(b.number, Some(3));
        assert_eq!(c.number, None);
    }

    #[test]
    fn roster_entries_distinguish_groups_from_players() {
        let raw = json!([
            { "position": "centers", "items": [{ "displayName": "A" }] },
            { "displayName": "B", "position": { "displayName": "Guard" } }
        ]);
        let parsed: Vec<EspnRosterEntry> = serde_json::from_value(raw).unwrap();
        assert!(matches!(parsed[0], EspnRosterEntry::Group(_)));
        match &parsed[1] {
            EspnRosterEntry::Player(p) => assert_eq!(p.position.as_deref(), Some("Guard")),
            other => panic!("expected flat player, got {other:?}"),
        }
    }

    #[test]
    fn team_logo_prefers_inline_then_first_logo() {
        let inline: EspnTeam = serde_json::from_value(json!({ "logo": "a.png" })).unwrap();
        let listed: EspnTeam =
            serde_json::from_value(json!({ "logos": [{ "href": "b.png" }, { "href": "c.png" }] }))
                .unwrap();
        assert_eq!(inline.logo_href().as_deref(), Some("a.png"));
        assert_eq!(listed.logo_href().as_deref(), Some("b.png"));
        assert_eq!(EspnTeam::default().logo_href(), None);
    }
}
