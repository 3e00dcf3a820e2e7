//! Schema Normalizer: ESPN wire types to domain records.
//!
//! Every function here is total. Missing optional fields resolve to a
//! documented default ("Unknown", the league logo placeholder, `0`); only a
//! failed fetch is an error, and that is the client's business.

use crate::context::{Sport, SportContext};
use crate::espn::{
    self, EspnCompetition, EspnCompetitor, EspnEvent, EspnRosterEntry, EspnRosterPlayer,
    EspnStatus, EspnVenue, InjuriesResponse, NewsResponse, RosterResponse, ScoreboardResponse,
    StandingsResponse, SummaryResponse, TransactionsResponse,
};
use crate::{
    Article, Coach, CompetitionState, Competitor, Event, GameDetail, GameInjury, GameSummary,
    InjuryRecord, InjuryStatus, Leader, Matchup, Play, Player, PositionGroup, Roster, Season,
    StandingsEntry, StandingsGroup, StatLine, StatValue, TeamLeaders, TeamSchedule, Transaction,
    Venue,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::{debug, warn};

const UNKNOWN: &str = "Unknown";

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Parse the timestamp shapes ESPN emits. Returns `None` rather than failing.
///
/// Accepted: RFC 3339, `2026-10-18T23:00Z`, `2026-10-18T23:00:00Z` and a bare
/// `2026-10-18` (taken as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// "regular-season" -> "Regular Season".
pub fn title_case(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

pub fn normalize_events(ctx: &SportContext, raw: &ScoreboardResponse) -> Vec<Event> {
    let events: Vec<Event> = raw
        .events
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|e| normalize_event(ctx, e))
        .collect();
    debug!("normalized {} events for {}", events.len(), ctx.path());
    events
}

pub fn normalize_event(ctx: &SportContext, raw: &EspnEvent) -> Event {
    let profile = ctx.sport_profile();
    let competitions = raw.competitions.as_deref().unwrap_or_default();
    let primary = competitions.first();

    // Team schedule payloads nest status under the competition.
    let status = raw
        .status
        .as_ref()
        .or_else(|| primary.and_then(|c| c.status.as_ref()));
    let status_type = status.and_then(|s| s.status_type.as_ref());

    let state = status_type
        .and_then(|t| t.state.as_deref())
        .map(CompetitionState::parse)
        .unwrap_or_else(|| state_from_status_name(status));

    let start = raw
        .date
        .as_deref()
        .or_else(|| primary.and_then(|c| c.date.as_deref()))
        .and_then(parse_timestamp);

    let matchup = primary
        .map(|c| split_competitors(c.competitors.as_deref().unwrap_or_default()))
        .unwrap_or_default();

    let mut name = non_empty(raw.name.as_deref()).unwrap_or_else(|| UNKNOWN.to_owned());
    if profile.versus_titles {
        name = name.replace(" at ", " vs ");
    }

    let winner = if ctx.sport() == Sport::Racing {
        Some(racing_winner(ctx, competitions))
    } else {
        None
    };

    let icon = matchup
        .away
        .logo
        .clone()
        .unwrap_or_else(|| ctx.league_logo());

    let season = raw.season.as_ref().map(|s| Season {
        year: s.year.clone(),
        kind: s.slug.as_deref().map(title_case).unwrap_or_default(),
    });

    Event {
        id: raw.id.clone().unwrap_or_default(),
        short_name: non_empty(raw.short_name.as_deref()).unwrap_or_else(|| name.clone()),
        name,
        start,
        state,
        completed: status_type.and_then(|t| t.completed),
        period: status.and_then(|s| s.period).unwrap_or_default(),
        clock: status
            .and_then(|s| s.display_clock.clone())
            .unwrap_or_default(),
        detail: status_type.and_then(|t| non_empty(t.detail.as_deref())),
        matchup,
        winner,
        venue: primary.and_then(|c| c.venue.as_ref()).map(map_venue),
        season,
        tickets: primary
            .and_then(|c| c.tickets.as_deref())
            .and_then(|t| t.first())
            .and_then(|t| non_empty(t.summary.as_deref())),
        link: espn::first_link(raw.links.as_deref()).unwrap_or_else(|| ctx.league_link()),
        icon,
    }
}

/// Older payloads carry only `type.name`; derive the state from it.
fn state_from_status_name(status: Option<&EspnStatus>) -> CompetitionState {
    let name = status
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.as_deref())
        .unwrap_or_default();
    match name {
        "STATUS_IN_PROGRESS" | "STATUS_HALFTIME" | "STATUS_END_PERIOD" => CompetitionState::In,
        "STATUS_FINAL" | "STATUS_FINAL_OT" | "STATUS_POSTPONED" | "STATUS_CANCELED" => {
            CompetitionState::Post
        }
        "STATUS_SCHEDULED" => CompetitionState::Pre,
        _ => CompetitionState::Other,
    }
}

/// Home by `homeAway` tag, falling back to index 0 = home, 1 = away.
pub fn split_competitors(competitors: &[EspnCompetitor]) -> Matchup {
    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"))
        .or_else(|| competitors.first());
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"))
        .or_else(|| competitors.get(1));
    Matchup {
        home: home.map(map_competitor).unwrap_or_else(missing_competitor),
        away: away.map(map_competitor).unwrap_or_else(missing_competitor),
    }
}

fn missing_competitor() -> Competitor {
    Competitor {
        abbreviation: UNKNOWN.to_owned(),
        display_name: UNKNOWN.to_owned(),
        ..Competitor::default()
    }
}

fn map_competitor(c: &EspnCompetitor) -> Competitor {
    let team = c.team.as_ref();
    let athlete = c.athlete.as_ref();

    let display_name = team
        .and_then(|t| t.display_name.clone())
        .or_else(|| athlete.and_then(|a| a.display_name.clone()))
        .unwrap_or_else(|| UNKNOWN.to_owned());
    let abbreviation = team
        .and_then(|t| t.abbreviation.clone())
        .or_else(|| athlete.and_then(|a| a.short_name.clone()))
        .unwrap_or_else(|| display_name.clone());

    let record = c
        .records
        .as_deref()
        .or(c.record.as_deref())
        .and_then(|r| r.first())
        .and_then(|r| non_empty(r.summary.as_deref()));

    let probable = c
        .probables
        .as_deref()
        .and_then(|p| p.first())
        .and_then(|p| p.athlete.as_ref())
        .and_then(|a| a.display_name.clone());

    let line_scores = c
        .linescores
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|l| {
            l.display_value
                .clone()
                .or_else(|| l.value.clone())
                .unwrap_or_else(|| "0".to_owned())
        })
        .collect();

    Competitor {
        team_id: team.and_then(|t| t.id.clone()).or_else(|| c.id.clone()),
        abbreviation,
        display_name,
        logo: team.and_then(|t| t.logo_href()),
        score: non_empty(c.score.as_deref()),
        record,
        probable,
        line_scores,
        winner: c.winner.unwrap_or(false),
        link: team.and_then(|t| t.link_href()),
    }
}

/// The race session at the league's winner offset, else the last session.
fn racing_winner(ctx: &SportContext, competitions: &[EspnCompetition]) -> String {
    let offset = ctx.league_profile().and_then(|p| p.winner_competition);
    let session = offset
        .and_then(|i| competitions.get(i))
        .or_else(|| competitions.last());
    session
        .and_then(|c| c.competitors.as_deref())
        .and_then(|c| c.first())
        .and_then(|c| c.athlete.as_ref())
        .and_then(|a| a.short_name.clone())
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

fn map_venue(v: &EspnVenue) -> Venue {
    let address = v.address.as_ref();
    let part = |value: Option<&String>| {
        value
            .filter(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_owned())
    };
    Venue {
        name: part(v.full_name.as_ref()),
        city: part(address.and_then(|a| a.city.as_ref())),
        state: part(address.and_then(|a| a.state.as_ref())),
        country: part(address.and_then(|a| a.country.as_ref())),
        indoor: v.indoor.unwrap_or(false),
    }
}

/// Split a team schedule by lifecycle; live games count as upcoming.
pub fn normalize_team_schedule(ctx: &SportContext, raw: &ScoreboardResponse) -> TeamSchedule {
    let (completed, upcoming): (Vec<Event>, Vec<Event>) = normalize_events(ctx, raw)
        .into_iter()
        .partition(|e| e.state == CompetitionState::Post);
    TeamSchedule { upcoming, completed }
}

// ---------------------------------------------------------------------------
// News, injuries, transactions
// ---------------------------------------------------------------------------

pub fn normalize_articles(ctx: &SportContext, raw: &NewsResponse) -> Vec<Article> {
    raw.articles
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|a| {
            let category = match a.article_type.as_deref() {
                Some("HeadlineNews") => "Headline".to_owned(),
                Some(other) if !other.is_empty() => other.to_owned(),
                _ => UNKNOWN.to_owned(),
            };
            Article {
                headline: non_empty(a.headline.as_deref())
                    .unwrap_or_else(|| "No Headline Found".to_owned()),
                published: a.published.as_deref().and_then(parse_timestamp),
                category,
                byline: non_empty(a.byline.as_deref()).unwrap_or_else(|| UNKNOWN.to_owned()),
                description: a.description.clone().unwrap_or_default(),
                image: a
                    .images
                    .as_deref()
                    .and_then(|i| i.first())
                    .and_then(|i| i.url.clone().or_else(|| i.href.clone())),
                link: a
                    .links
                    .as_ref()
                    .and_then(|l| l.web.as_ref())
                    .and_then(|w| w.href.clone())
                    .unwrap_or_else(|| ctx.league_link()),
            }
        })
        .collect()
}

/// Flatten the per-team injury blocks. Records without an estimated return
/// date are dropped, not shown blank.
pub fn normalize_injuries(ctx: &SportContext, raw: &InjuriesResponse) -> Vec<InjuryRecord> {
    let all: Vec<&espn::EspnInjury> = raw
        .injuries
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flat_map(|team| team.injuries.iter().flatten())
        .collect();

    let kept: Vec<InjuryRecord> = all
        .iter()
        .filter_map(|injury| {
            let return_date = injury
                .details
                .as_ref()
                .and_then(|d| non_empty(d.return_date.as_deref()))?;
            let athlete = injury.athlete.as_ref();
            let team = athlete.and_then(|a| a.team.as_ref());
            Some(InjuryRecord {
                athlete: athlete
                    .and_then(|a| a.display_name.clone())
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                position: athlete
                    .and_then(|a| a.position.clone())
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                team_logo: team.and_then(|t| t.logo_href()),
                athlete_link: athlete
                    .and_then(|a| espn::first_link(a.links.as_deref()))
                    .unwrap_or_else(|| ctx.league_link()),
                team_link: team
                    .and_then(|t| t.link_href())
                    .unwrap_or_else(|| ctx.league_link()),
                status: InjuryStatus::parse(injury.status.as_deref().unwrap_or_default()),
                return_date,
            })
        })
        .collect();

    if kept.len() < all.len() {
        debug!(
            "dropped {} injury records without a return date",
            all.len() - kept.len()
        );
    }
    kept
}

pub fn normalize_transactions(ctx: &SportContext, raw: &TransactionsResponse) -> Vec<Transaction> {
    raw.transactions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|t| {
            let team = t.team.as_ref();
            Transaction {
                date: t.date.as_deref().and_then(parse_timestamp),
                description: non_empty(t.description.as_deref())
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                team_logo: team.and_then(|t| t.logo_href()),
                team_link: team
                    .and_then(|t| t.link_href())
                    .unwrap_or_else(|| ctx.league_link()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

/// One group per conference (or driver/constructor table), entries ordered
/// by playoff position.
pub fn normalize_standings(ctx: &SportContext, raw: &StandingsResponse) -> Vec<StandingsGroup> {
    let mut groups: Vec<StandingsGroup> = Vec::new();
    for child in raw.children.as_deref().unwrap_or_default() {
        collect_groups(ctx, child, &mut groups);
    }

    if groups.is_empty()
        && let Some(table) = &raw.standings
    {
        groups.push(StandingsGroup {
            name: raw.name.clone().unwrap_or_else(|| ctx.league_name()),
            entries: map_entries(ctx, table),
        });
    }

    for group in &mut groups {
        crate::standings::sort_by_position(ctx, &mut group.entries);
    }
    groups
}

/// A group with its own table wins; otherwise descend into sub-groups
/// (divisions) so nothing is lost.
fn collect_groups(
    ctx: &SportContext,
    node: &espn::EspnStandingsGroup,
    out: &mut Vec<StandingsGroup>,
) {
    if let Some(table) = &node.standings {
        let entries = map_entries(ctx, table);
        if !entries.is_empty() {
            out.push(StandingsGroup {
                name: non_empty(node.name.as_deref())
                    .or_else(|| non_empty(node.abbreviation.as_deref()))
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                entries,
            });
            return;
        }
    }
    for child in node.children.as_deref().unwrap_or_default() {
        collect_groups(ctx, child, out);
    }
}

fn map_entries(ctx: &SportContext, table: &espn::EspnStandingsTable) -> Vec<StandingsEntry> {
    table
        .entries
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|e| {
            let team = e.team.as_ref();
            let athlete = e.athlete.as_ref();
            let name = athlete
                .and_then(|a| a.display_name.clone())
                .or_else(|| team.and_then(|t| t.display_name.clone()))
                .unwrap_or_else(|| UNKNOWN.to_owned());
            let logo = athlete
                .and_then(|a| a.flag.as_ref())
                .and_then(|f| f.source().map(str::to_owned))
                .or_else(|| team.and_then(|t| t.logo_href()));
            let link = athlete
                .and_then(|a| espn::first_link(a.links.as_deref()))
                .or_else(|| team.and_then(|t| t.link_href()))
                .unwrap_or_else(|| ctx.league_link());
            StandingsEntry {
                team_id: team.and_then(|t| t.id.clone()),
                name,
                logo,
                link,
                stats: e
                    .stats
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(|s| StatValue {
                        display_value: s.display_value.clone(),
                        summary: s.summary.clone(),
                    })
                    .collect(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Game detail
// ---------------------------------------------------------------------------

pub fn normalize_game_detail(
    ctx: &SportContext,
    event_id: &str,
    raw: &SummaryResponse,
) -> GameDetail {
    let plays: Vec<Play> = raw
        .plays
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|p| Play {
            period: p.period.as_ref().and_then(|x| x.number).unwrap_or_default(),
            clock: p
                .clock
                .as_ref()
                .and_then(|c| c.display_value.clone())
                .unwrap_or_default(),
            kind: p
                .play_type
                .as_ref()
                .and_then(|t| t.text.clone())
                .unwrap_or_default(),
            text: p.text.clone().unwrap_or_default(),
            team_id: p.team.as_ref().and_then(|t| t.id.clone()),
            scoring: p.scoring_play.unwrap_or(false),
        })
        .collect();

    let header = raw.header.as_ref();
    let matchup = header
        .and_then(|h| h.competitions.as_deref())
        .and_then(|c| c.first())
        .map(|c| split_competitors(c.competitors.as_deref().unwrap_or_default()))
        .unwrap_or_default();

    let (home_stats, away_stats) = boxscore_stats(raw);
    let (home_injuries, away_injuries) = game_injuries(raw, &matchup);

    let leaders = raw
        .leaders
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|team| TeamLeaders {
            team: team
                .team
                .as_ref()
                .and_then(|t| t.abbreviation.clone().or_else(|| t.display_name.clone()))
                .unwrap_or_else(|| UNKNOWN.to_owned()),
            leaders: team
                .leaders
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter_map(|cat| {
                    let top = cat.leaders.as_deref().and_then(|l| l.first())?;
                    Some(Leader {
                        category: cat.display_name.clone().unwrap_or_else(|| UNKNOWN.to_owned()),
                        athlete: top
                            .athlete
                            .as_ref()
                            .and_then(|a| a.display_name.clone())
                            .unwrap_or_else(|| UNKNOWN.to_owned()),
                        value: top.display_value.clone().unwrap_or_else(|| "0".to_owned()),
                    })
                })
                .collect(),
        })
        .collect();

    if plays.is_empty() && header.is_none() {
        warn!("summary for event {event_id} ({}) carried no plays and no header", ctx.path());
    }

    GameDetail {
        event_id: event_id.to_owned(),
        plays,
        summary: GameSummary {
            matchup,
            home_stats,
            away_stats,
            leaders,
            venue: raw
                .game_info
                .as_ref()
                .and_then(|g| g.venue.as_ref())
                .map(map_venue),
            link: header.and_then(|h| espn::first_link(h.links.as_deref())),
            home_injuries,
            away_injuries,
            tickets: raw
                .tickets_info
                .as_ref()
                .and_then(|t| t.seat_situation.as_ref())
                .and_then(|s| non_empty(s.summary.as_deref())),
        },
    }
}

/// Injury blocks matched to a side by team id, else listed home first.
fn game_injuries(raw: &SummaryResponse, matchup: &Matchup) -> (Vec<GameInjury>, Vec<GameInjury>) {
    let blocks = raw.injuries.as_deref().unwrap_or_default();
    let block_for = |team_id: Option<&str>, fallback: usize| {
        team_id
            .and_then(|id| {
                blocks
                    .iter()
                    .find(|b| b.team.as_ref().and_then(|t| t.id.as_deref()) == Some(id))
            })
            .or_else(|| blocks.get(fallback))
    };
    let notes = |block: Option<&espn::EspnTeamInjuries>| -> Vec<GameInjury> {
        block
            .and_then(|b| b.injuries.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|injury| GameInjury {
                athlete: injury
                    .athlete
                    .as_ref()
                    .and_then(|a| a.display_name.clone())
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                status: InjuryStatus::parse(injury.status.as_deref().unwrap_or(UNKNOWN)),
            })
            .collect()
    };
    (
        notes(block_for(matchup.home.team_id.as_deref(), 0)),
        notes(block_for(matchup.away.team_id.as_deref(), 1)),
    )
}

/// Box score teams are listed away first unless tagged otherwise.
fn boxscore_stats(raw: &SummaryResponse) -> (Vec<StatLine>, Vec<StatLine>) {
    let teams = raw
        .boxscore
        .as_ref()
        .and_then(|b| b.teams.as_deref())
        .unwrap_or_default();
    let home = teams
        .iter()
        .find(|t| t.home_away.as_deref() == Some("home"))
        .or_else(|| teams.get(1));
    let away = teams
        .iter()
        .find(|t| t.home_away.as_deref() == Some("away"))
        .or_else(|| teams.first());
    let lines = |team: Option<&espn::EspnBoxscoreTeam>| -> Vec<StatLine> {
        team.and_then(|t| t.statistics.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|s| StatLine {
                label: s
                    .label
                    .clone()
                    .or_else(|| s.name.clone())
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                value: s.display_value.clone().unwrap_or_else(|| "0".to_owned()),
            })
            .collect()
    };
    (lines(home), lines(away))
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

pub fn normalize_roster(raw: &RosterResponse) -> Roster {
    let coach = raw
        .coach
        .as_deref()
        .and_then(|c| c.first())
        .map(|c| Coach {
            name: format!(
                "{} {}",
                c.first_name.as_deref().unwrap_or(UNKNOWN),
                c.last_name.as_deref().unwrap_or(UNKNOWN)
            ),
            experience: c.experience.clone(),
        })
        .unwrap_or_else(|| Coach {
            name: format!("{UNKNOWN} {UNKNOWN}"),
            experience: None,
        });

    let mut groups: Vec<PositionGroup> = Vec::new();
    for entry in raw.athletes.as_deref().unwrap_or_default() {
        match entry {
            EspnRosterEntry::Group(group) => groups.push(PositionGroup {
                position: group
                    .position
                    .as_deref()
                    .map(title_case)
                    .unwrap_or_else(|| UNKNOWN.to_owned()),
                players: group.items.iter().map(map_player).collect(),
            }),
            EspnRosterEntry::Player(player) => {
                let position = player
                    .position
                    .clone()
                    .unwrap_or_else(|| UNKNOWN.to_owned());
                let player = map_player(player);
                match groups.iter_mut().find(|g| g.position == position) {
                    Some(group) => group.players.push(player),
                    None => groups.push(PositionGroup { position, players: vec![player] }),
                }
            }
        }
    }

    Roster {
        team_name: raw
            .team
            .as_ref()
            .and_then(|t| t.display_name.clone())
            .unwrap_or_default(),
        coach,
        groups,
    }
}

fn map_player(p: &EspnRosterPlayer) -> Player {
    Player {
        name: p.display_name.clone().unwrap_or_else(|| UNKNOWN.to_owned()),
        jersey: p.jersey.clone().unwrap_or_else(|| "0".to_owned()),
        height: p
            .display_height
            .as_deref()
            .map(|h| h.split_whitespace().collect::<String>())
            .unwrap_or_else(|| "0".to_owned()),
        weight: p.display_weight.clone().unwrap_or_else(|| "0".to_owned()),
        age: p.age,
        injury: p
            .injuries
            .as_deref()
            .and_then(|i| i.first())
            .and_then(|i| non_empty(i.status.as_deref())),
        link: espn::first_link(p.links.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn nhl() -> SportContext {
        SportContext::new(Sport::Hockey, "nhl")
    }

    fn event_json(state: &str) -> serde_json::Value {
        json!({
            "id": "401",
            "name": "Boston Bruins at Toronto Maple Leafs",
            "shortName": "BOS @ TOR",
            "date": "2026-10-18T23:00Z",
            "status": {
                "period": 2,
                "displayClock": "12:34",
                "type": { "state": state, "completed": false, "detail": "2nd Period" }
            },
            "season": { "year": 2027, "slug": "regular-season" },
            "competitions": [{
                "venue": { "fullName": "Scotiabank Arena", "indoor": true,
                           "address": { "city": "Toronto" } },
                "tickets": [{ "summary": "Tickets as low as $99" }],
                "competitors": [
                    { "homeAway": "home", "score": "3",
                      "team": { "id": "21", "abbreviation": "TOR", "displayName": "Toronto Maple Leafs",
                                "logo": "tor.png", "links": [{ "href": "https://espn.com/tor" }] },
                      "records": [{ "summary": "3-1-0" }] },
                    { "homeAway": "away", "score": "2",
                      "team": { "id": "1", "abbreviation": "BOS", "displayName": "Boston Bruins",
                                "logo": "bos.png" } }
                ]
            }]
        })
    }

    #[test]
    fn timestamps_accept_upstream_shapes() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 18, 23, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2026-10-18T23:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-18T23:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-18T19:00:00-04:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2026-10-18"),
            Some(Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("Unknown"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn title_case_handles_slugs() {
        assert_eq!(title_case("regular-season"), "Regular Season");
        assert_eq!(title_case("POST-season"), "Post Season");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn event_resolves_home_and_away_by_tag() {
        let raw: EspnEvent = serde_json::from_value(event_json("in")).unwrap();
        let event = normalize_event(&nhl(), &raw);
        assert_eq!(event.matchup.home.abbreviation, "TOR");
        assert_eq!(event.matchup.away.abbreviation, "BOS");
        assert_eq!(event.matchup.home.record.as_deref(), Some("3-1-0"));
        assert_eq!(event.state, CompetitionState::In);
        assert_eq!(event.period, 2);
        assert_eq!(event.clock, "12:34");
        assert_eq!(event.icon, "bos.png");
    }

    #[test]
    fn competitor_order_falls_back_to_index() {
        let raw: Vec<EspnCompetitor> = serde_json::from_value(json!([
            { "team": { "abbreviation": "HOM" } },
            { "team": { "abbreviation": "AWY" } }
        ]))
        .unwrap();
        let matchup = split_competitors(&raw);
        assert_eq!(matchup.home.abbreviation, "HOM");
        assert_eq!(matchup.away.abbreviation, "AWY");
    }

    #[test]
    fn hockey_titles_read_versus() {
        let raw: EspnEvent = serde_json::from_value(event_json("pre")).unwrap();
        let event = normalize_event(&nhl(), &raw);
        assert_eq!(event.name, "Boston Bruins vs Toronto Maple Leafs");

        let nba = SportContext::new(Sport::Basketball, "nba");
        let event = normalize_event(&nba, &raw);
        assert_eq!(event.name, "Boston Bruins at Toronto Maple Leafs");
    }

    #[test]
    fn event_extras_are_carried() {
        let raw: EspnEvent = serde_json::from_value(event_json("pre")).unwrap();
        let event = normalize_event(&nhl(), &raw);
        let venue = event.venue.unwrap();
        assert_eq!(venue.name, "Scotiabank Arena");
        assert_eq!(venue.city, "Toronto");
        assert_eq!(venue.state, "Unknown");
        assert!(venue.indoor);
        let season = event.season.unwrap();
        assert_eq!(season.year.as_deref(), Some("2027"));
        assert_eq!(season.kind, "Regular Season");
        assert_eq!(event.tickets.as_deref(), Some("Tickets as low as $99"));
        assert_eq!(event.matchup.home.link.as_deref(), Some("https://espn.com/tor"));
    }

    #[test]
    fn empty_event_uses_documented_defaults() {
        let event = normalize_event(&nhl(), &EspnEvent::default());
        assert_eq!(event.name, "Unknown");
        assert_eq!(event.start, None);
        assert_eq!(event.matchup.home.display_name, "Unknown");
        assert_eq!(event.matchup.away.abbreviation, "Unknown");
        assert_eq!(event.matchup.away.score_or_zero(), "0");
        assert_eq!(event.icon, nhl().league_logo());
        assert_eq!(event.link, "https://www.espn.com/nhl");
    }

    #[test]
    fn racing_winner_reads_the_configured_session() {
        let f1 = SportContext::default_for(Sport::Racing);
        let sessions: Vec<serde_json::Value> = (0..5)
            .map(|i| json!({ "competitors": [{ "athlete": { "shortName": format!("D{i}") } }] }))
            .collect();
        let raw: EspnEvent = serde_json::from_value(json!({
            "name": "Grand Prix",
            "status": { "type": { "state": "post", "completed": true } },
            "competitions": sessions
        }))
        .unwrap();
        assert_eq!(normalize_event(&f1, &raw).winner.as_deref(), Some("D4"));

        let short: EspnEvent = serde_json::from_value(json!({
            "competitions": [
                { "competitors": [{ "athlete": { "shortName": "Q" } }] },
                { "competitors": [{ "athlete": { "shortName": "R" } }] }
            ]
        }))
        .unwrap();
        assert_eq!(normalize_event(&f1, &short).winner.as_deref(), Some("R"));
        assert_eq!(
            normalize_event(&f1, &EspnEvent::default()).winner.as_deref(),
            Some("Unknown")
        );
    }

    #[test]
    fn team_schedule_reads_competition_status() {
        let raw: ScoreboardResponse = serde_json::from_value(json!({
            "events": [
                { "id": "1", "competitions": [{ "status": { "type": { "state": "post", "completed": true } },
                  "competitors": [{ "homeAway": "home", "score": { "value": 4.0, "displayValue": "4" } }] }] },
                { "id": "2", "competitions": [{ "status": { "type": { "state": "pre" } } }] }
            ]
        }))
        .unwrap();
        let schedule = normalize_team_schedule(&nhl(), &raw);
        assert_eq!(schedule.completed.len(), 1);
        assert_eq!(schedule.completed[0].matchup.home.score.as_deref(), Some("4"));
        assert_eq!(schedule.upcoming.len(), 1);
        assert_eq!(schedule.upcoming[0].id, "2");
    }

    #[test]
    fn articles_normalize_category_and_fallbacks() {
        let raw: NewsResponse = serde_json::from_value(json!({
            "articles": [
                { "headline": "Trade!", "type": "HeadlineNews", "published": "2026-10-18T12:00:00Z",
                  "images": [{ "url": "img.jpg" }], "links": { "web": { "href": "https://espn.com/a" } } },
                { "type": "Story" }
            ]
        }))
        .unwrap();
        let articles = normalize_articles(&nhl(), &raw);
        assert_eq!(articles[0].category, "Headline");
        assert_eq!(articles[0].image.as_deref(), Some("img.jpg"));
        assert_eq!(articles[0].link, "https://espn.com/a");
        assert_eq!(articles[1].headline, "No Headline Found");
        assert_eq!(articles[1].byline, "Unknown");
        assert_eq!(articles[1].link, "https://www.espn.com/nhl");
    }

    #[test]
    fn injuries_without_return_date_are_excluded() {
        let raw: InjuriesResponse = serde_json::from_value(json!({
            "injuries": [
                { "injuries": [
                    { "status": "Day-To-Day", "athlete": { "displayName": "A", "position": { "displayName": "Center" } },
                      "details": { "returnDate": "2026-10-20" } },
                    { "status": "Out", "athlete": { "displayName": "B" } }
                ] },
                { "injuries": [
                    { "status": "Suspension", "athlete": { "displayName": "C" },
                      "details": { "returnDate": "" } },
                    { "status": "Injured Reserve", "athlete": { "displayName": "D" },
                      "details": { "returnDate": "2026-11-01" } }
                ] }
            ]
        }))
        .unwrap();
        let records = normalize_injuries(&nhl(), &raw);
        let names: Vec<&str> = records.iter().map(|r| r.athlete.as_str()).collect();
        assert_eq!(names, vec!["A", "D"]);
        assert_eq!(records[0].position, "Center");
        assert_eq!(records[0].status, InjuryStatus::DayToDay);
        assert_eq!(records[0].status.label(), "Day To Day");
        assert_eq!(records[1].status, InjuryStatus::InjuredReserve);
    }

    #[test]
    fn transactions_default_description() {
        let raw: TransactionsResponse = serde_json::from_value(json!({
            "transactions": [
                { "date": "2026-10-17T07:00Z", "description": "Signed F X.",
                  "team": { "logos": [{ "href": "t.png" }], "links": [{ "href": "https://espn.com/t" }] } },
                { "date": "garbage" }
            ]
        }))
        .unwrap();
        let tx = normalize_transactions(&nhl(), &raw);
        assert_eq!(tx[0].team_logo.as_deref(), Some("t.png"));
        assert_eq!(tx[0].team_link, "https://espn.com/t");
        assert!(tx[0].date.is_some());
        assert_eq!(tx[1].description, "Unknown");
        assert_eq!(tx[1].date, None);
    }

    #[test]
    fn standings_groups_and_top_level_fallback() {
        let nba = SportContext::new(Sport::Basketball, "nba");
        let stats = |seed: &str| -> serde_json::Value {
            let mut s: Vec<serde_json::Value> =
                (0..16).map(|_| json!({ "displayValue": "0" })).collect();
            s[7] = json!({ "displayValue": seed });
            serde_json::Value::Array(s)
        };
        let raw: StandingsResponse = serde_json::from_value(json!({
            "children": [
                { "name": "Eastern Conference", "standings": { "entries": [
                    { "team": { "id": "2", "displayName": "Second" }, "stats": stats("2") },
                    { "team": { "id": "1", "displayName": "First" }, "stats": stats("1") }
                ] } },
                { "name": "Western Conference", "children": [
                    { "name": "Pacific", "standings": { "entries": [
                        { "team": { "displayName": "Only" }, "stats": stats("1") }
                    ] } }
                ] }
            ]
        }))
        .unwrap();
        let groups = normalize_standings(&nba, &raw);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].entries[0].name, "First");
        assert_eq!(groups[0].entries[0].team_id.as_deref(), Some("1"));
        assert_eq!(groups[1].name, "Pacific");

        let flat: StandingsResponse = serde_json::from_value(json!({
            "name": "Premier League",
            "standings": { "entries": [{ "team": { "displayName": "Arsenal" } }] }
        }))
        .unwrap();
        let groups = normalize_standings(&SportContext::new(Sport::Soccer, "eng.1"), &flat);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Premier League");
    }

    #[test]
    fn racing_standings_use_athlete_names() {
        let f1 = SportContext::default_for(Sport::Racing);
        let raw: StandingsResponse = serde_json::from_value(json!({
            "children": [{ "name": "Driver Standings", "standings": { "entries": [
                { "athlete": { "displayName": "Max", "flag": { "href": "nl.png" } },
                  "stats": [{ "displayValue": "1" }, { "displayValue": "400" }] }
            ] } }]
        }))
        .unwrap();
        let groups = normalize_standings(&f1, &raw);
        let entry = &groups[0].entries[0];
        assert_eq!(entry.name, "Max");
        assert_eq!(entry.logo.as_deref(), Some("nl.png"));
        assert_eq!(entry.link, "https://www.espn.com/f1");
    }

    #[test]
    fn game_detail_maps_plays_and_summary() {
        let raw: SummaryResponse = serde_json::from_value(json!({
            "header": { "competitions": [{ "competitors": [
                { "homeAway": "home", "team": { "abbreviation": "TOR" },
                  "linescores": [{ "displayValue": "1" }, { "displayValue": "2" }] },
                { "homeAway": "away", "team": { "abbreviation": "BOS" } }
            ] }] },
            "boxscore": { "teams": [
                { "team": { "abbreviation": "BOS" }, "statistics": [{ "label": "Shots", "displayValue": "30" }] },
                { "team": { "abbreviation": "TOR" }, "statistics": [{ "label": "Shots", "displayValue": "25" }] }
            ] },
            "plays": [
                { "type": { "text": "Goal" }, "text": "Goal by X", "period": { "number": 1 },
                  "clock": { "displayValue": "5:00" }, "team": { "id": "21" }, "scoringPlay": true }
            ],
            "leaders": [
                { "team": { "abbreviation": "TOR" }, "leaders": [
                    { "displayName": "Goals", "leaders": [{ "displayValue": "2", "athlete": { "displayName": "X" } }] },
                    { "displayName": "Assists", "leaders": [] }
                ] }
            ],
            "gameInfo": { "venue": { "fullName": "Arena" } }
        }))
        .unwrap();
        let detail = normalize_game_detail(&nhl(), "401", &raw);
        assert_eq!(detail.event_id, "401");
        assert_eq!(detail.plays.len(), 1);
        assert!(detail.plays[0].scoring);
        assert_eq!(detail.summary.matchup.home.line_scores, vec!["1", "2"]);
        assert_eq!(detail.summary.away_stats[0].value, "30");
        assert_eq!(detail.summary.home_stats[0].value, "25");
        assert_eq!(detail.summary.leaders[0].leaders.len(), 1);
        assert_eq!(detail.summary.leaders[0].leaders[0].athlete, "X");
        assert_eq!(detail.summary.venue.as_ref().map(|v| v.name.as_str()), Some("Arena"));
        assert!(detail.summary.home_injuries.is_empty());
        assert_eq!(detail.summary.tickets, None);
    }

    #[test]
    fn pre_game_summary_carries_injuries_and_tickets() {
        let raw: SummaryResponse = serde_json::from_value(json!({
            "header": { "competitions": [{ "competitors": [
                { "homeAway": "home", "team": { "id": "21", "abbreviation": "TOR" } },
                { "homeAway": "away", "team": { "id": "1", "abbreviation": "BOS" } }
            ] }] },
            "injuries": [
                { "team": { "id": "1" }, "injuries": [
                    { "status": "Out", "athlete": { "displayName": "Away Skater" } }
                ] },
                { "team": { "id": "21" }, "injuries": [
                    { "status": "Day-To-Day", "athlete": { "displayName": "Home Skater" } },
                    { "athlete": {} }
                ] }
            ],
            "ticketsInfo": { "seatSituation": { "summary": "Tickets as low as $45" } }
        }))
        .unwrap();
        let summary = normalize_game_detail(&nhl(), "401", &raw).summary;
        assert_eq!(summary.home_injuries.len(), 2);
        assert_eq!(summary.home_injuries[0].athlete, "Home Skater");
        assert_eq!(summary.home_injuries[0].status, InjuryStatus::DayToDay);
        assert_eq!(summary.home_injuries[1].athlete, "Unknown");
        assert_eq!(summary.away_injuries[0].status, InjuryStatus::Out);
        assert_eq!(summary.tickets.as_deref(), Some("Tickets as low as $45"));
    }

    #[test]
    fn untagged_injury_blocks_list_home_first() {
        let raw: SummaryResponse = serde_json::from_value(json!({
            "injuries": [
                { "injuries": [{ "status": "Out", "athlete": { "displayName": "A" } }] },
                { "injuries": [{ "status": "Questionable", "athlete": { "displayName": "B" } }] }
            ]
        }))
        .unwrap();
        let summary = normalize_game_detail(&nhl(), "401", &raw).summary;
        assert_eq!(summary.home_injuries[0].athlete, "A");
        assert_eq!(summary.away_injuries[0].athlete, "B");
    }

    #[test]
    fn roster_accepts_grouped_and_flat_lists() {
        let grouped: RosterResponse = serde_json::from_value(json!({
            "coach": [{ "firstName": "Craig", "lastName": "Berube", "experience": 6 }],
            "athletes": [
                { "position": "centers", "items": [
                    { "displayName": "A", "displayHeight": "6' 1\"", "jersey": "34", "age": 28,
                      "injuries": [{ "status": "Out" }] }
                ] }
            ]
        }))
        .unwrap();
        let roster = normalize_roster(&grouped);
        assert_eq!(roster.coach.name, "Craig Berube");
        assert_eq!(roster.coach.experience.as_deref(), Some("6"));
        assert_eq!(roster.groups[0].position, "Centers");
        let player = &roster.groups[0].players[0];
        assert_eq!(player.height, "6'1\"");
        assert_eq!(player.injury.as_deref(), Some("Out"));

        let flat: RosterResponse = serde_json::from_value(json!({
            "athletes": [
                { "displayName": "G1", "position": { "displayName": "Guard" } },
                { "displayName": "F1", "position": { "displayName": "Forward" } },
                { "displayName": "G2", "position": { "displayName": "Guard" } }
            ]
        }))
        .unwrap();
        let roster = normalize_roster(&flat);
        assert_eq!(roster.coach.name, "Unknown Unknown");
        let positions: Vec<&str> = roster.groups.iter().map(|g| g.position.as_str()).collect();
        assert_eq!(positions, vec!["Guard", "Forward"]);
        assert_eq!(roster.groups[0].players.len(), 2);
        assert!(roster.groups[1].players[0].injury.is_none());
    }
}
