use chrono::{DateTime, Local, Utc};
use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::badge::{glyph_span, severity_span, status_spans, tone_color};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::{LayoutAreas, LayoutOptions};
use sideline_api::bucket::{DayBucket, bucket_subtitle};
use sideline_api::standings::{rank, stat_line};
use sideline_api::status::{Health, badge, classify_play, injury_severity, period_label};
use sideline_api::view::ViewState;
use sideline_api::{Event, Player, SportContext, StatLine};

const LOADING_TEXT: &str = "Loading…";
const NO_DATA_TEXT: &str = "No data found.";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);
    // Badges compare against the wall clock at draw time, never a cached value.
    let now = Utc::now();

    let result = terminal.draw(|f| {
        layout.update(
            f.area(),
            LayoutOptions {
                full_screen: app.settings.full_screen,
                show_detail: app.state.show_detail,
                show_logs: app.state.show_logs,
            },
        );

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        let tab = app.state.active_tab;
        match tab {
            MenuItem::Scores => draw_scores(f, layout.main, app, now),
            MenuItem::News => draw_news(f, layout.main, app),
            MenuItem::Injuries => draw_injuries(f, layout.main, app),
            MenuItem::Transactions => draw_transactions(f, layout.main, app),
            MenuItem::Standings => draw_standings(f, layout.main, app),
            MenuItem::Team => draw_team(f, layout.main, app, now),
            MenuItem::Game => draw_game(f, layout.main, app),
            MenuItem::Roster => draw_roster(f, layout.main, app),
            MenuItem::Help => draw_help(f, layout.main),
        }

        if let Some(detail) = layout.detail
            && tab != MenuItem::Help
        {
            draw_detail(f, detail, app, now);
        }
        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }
        draw_status_line(f, layout.status_line, app);
        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let mut tabs = app.tabs();
    // Detail tabs only show up while open.
    let active = app.state.active_tab;
    if matches!(active, MenuItem::Game | MenuItem::Roster) {
        tabs.push(active);
    }
    let tab_index = tabs.iter().position(|t| *t == active).unwrap_or(0);

    let titles: Vec<Line> = tabs
        .iter()
        .enumerate()
        .map(|(i, t)| match t {
            MenuItem::Game | MenuItem::Roster => Line::from(t.title()),
            _ => Line::from(format!("{} {}", i + 1, t.title())),
        })
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new(format!("{}  Help: ? ", app.state.ctx.league_name()))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

// ---------------------------------------------------------------------------
// Shared list plumbing
// ---------------------------------------------------------------------------

/// Lines for a scrollable list plus the line index of the selected row.
#[derive(Default)]
struct ListLines {
    lines: Vec<Line<'static>>,
    selected_line: usize,
    row: usize,
}

impl ListLines {
    fn header(&mut self, text: String) {
        if !self.lines.is_empty() {
            self.lines.push(Line::from(""));
        }
        self.lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
    }

    fn row(&mut self, selected: usize, spans: Vec<Span<'static>>) {
        let is_selected = self.row == selected;
        if is_selected {
            self.selected_line = self.lines.len();
        }
        let marker = if is_selected { "> " } else { "  " };
        let mut all = vec![Span::styled(marker, Style::default().fg(Color::Yellow))];
        all.extend(spans);
        let line = Line::from(all);
        self.lines.push(if is_selected {
            line.style(Style::default().add_modifier(Modifier::BOLD))
        } else {
            line
        });
        self.row += 1;
    }

    fn render(self, f: &mut Frame, area: Rect) {
        let height = area.height as usize;
        let offset = self.selected_line.saturating_sub(height.saturating_sub(1));
        f.render_widget(
            Paragraph::new(self.lines).scroll((offset as u16, 0)),
            area,
        );
    }
}

/// Bordered block; returns the inner area.
fn framed(f: &mut Frame, area: Rect, title: String) -> Rect {
    let block = default_border(Color::White).title(format!(" {title} "));
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// Renders the loading / empty placeholder; `Some` only when ready.
fn ready<'a, T>(f: &mut Frame, area: Rect, state: ViewState<&'a T>) -> Option<&'a T> {
    let text = match state {
        ViewState::Ready(data) => return Some(data),
        ViewState::Loading => LOADING_TEXT,
        ViewState::NoData => NO_DATA_TEXT,
    };
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
    None
}

fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn local_time(ts: Option<DateTime<Utc>>, fmt: &str) -> String {
    ts.map(|t| t.with_timezone(&Local).format(fmt).to_string())
        .unwrap_or_default()
}

fn event_row(ctx: &SportContext, event: &Event, now: DateTime<Utc>) -> Vec<Span<'static>> {
    let mut spans = status_spans(&badge(ctx, event, now));
    spans.push(Span::raw("   "));
    spans.push(Span::raw(event.name.clone()));
    spans
}

fn day_sections(
    list: &mut ListLines,
    ctx: &SportContext,
    days: &[DayBucket<Event>],
    selected: usize,
    now: DateTime<Utc>,
) {
    for day in days {
        list.header(format!("{}  {}", day.label, bucket_subtitle(ctx, day.items.len())));
        for event in &day.items {
            list.row(selected, event_row(ctx, event, now));
        }
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

fn draw_scores(f: &mut Frame, area: Rect, app: &App, now: DateTime<Utc>) {
    let state = &app.state;
    let title = format!("{} Scores", state.ctx.league_name());
    let inner = framed(f, area, title);
    let Some(days) = ready(f, inner, state.scores.view()) else {
        return;
    };
    let mut list = ListLines::default();
    day_sections(&mut list, &state.ctx, days, state.scores.selected, now);
    list.render(f, inner);
}

fn draw_news(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let inner = framed(f, area, format!("{} News", state.ctx.league_name()));
    let Some(articles) = ready(f, inner, state.news.view()) else {
        return;
    };
    let mut list = ListLines::default();
    for article in articles {
        list.row(
            state.news.selected,
            vec![
                Span::raw(article.headline.clone()),
                Span::raw("  "),
                dim(local_time(article.published, "%b %-d")),
            ],
        );
    }
    list.render(f, inner);
}

fn draw_injuries(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let inner = framed(f, area, format!("{} Injuries", state.ctx.league_name()));
    let Some(injuries) = ready(f, inner, state.injuries.view()) else {
        return;
    };
    let mut list = ListLines::default();
    for injury in injuries {
        let severity = injury_severity(&injury.status);
        list.row(
            state.injuries.selected,
            vec![
                severity_span(severity),
                Span::raw(format!("{:<24}", injury.athlete)),
                dim(format!("{:<4}", injury.position)),
                Span::styled(
                    format!(" {:<16}", injury.status.label()),
                    Style::default().fg(tone_color(severity.tone)),
                ),
                dim(format!(" back {}", injury.return_date)),
            ],
        );
    }
    list.render(f, inner);
}

fn draw_transactions(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let inner = framed(f, area, format!("{} Transactions", state.ctx.league_name()));
    let Some(days) = ready(f, inner, state.transactions.view()) else {
        return;
    };
    let mut list = ListLines::default();
    for day in days {
        list.header(day.label.clone());
        for tx in &day.items {
            list.row(state.transactions.selected, vec![Span::raw(tx.description.clone())]);
        }
    }
    list.render(f, inner);
}

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let group = state.standings_dropdown.selected();
    let title = if group.is_empty() {
        format!("{} Standings", state.ctx.league_name())
    } else {
        format!("{} Standings: {group}", state.ctx.league_name())
    };
    let inner = framed(f, area, title);
    if ready(f, inner, state.standings.view()).is_none() {
        return;
    }
    let mut list = ListLines::default();
    for entry in state.standings_rows() {
        let ranking = rank(&state.ctx, entry);
        let badge = match ranking.tier.glyph() {
            Some(glyph) => glyph_span(glyph, ranking.tier.tone()),
            None => Span::raw("  "),
        };
        let position =
            ranking.position.map(|p| format!("{p:>2}. ")).unwrap_or_else(|| "    ".into());
        list.row(
            state.standings.selected,
            vec![
                badge,
                Span::raw(position),
                Span::raw(format!("{:<28}", entry.name)),
                dim(stat_line(&state.ctx, entry)),
            ],
        );
    }
    list.render(f, inner);
}

fn draw_team(f: &mut Frame, area: Rect, app: &App, now: DateTime<Utc>) {
    let state = &app.state;
    let title = format!(
        "Team {}: {}",
        app.settings.team.as_deref().unwrap_or("-"),
        state.team_dropdown.selected()
    );
    let inner = framed(f, area, title);
    if ready(f, inner, state.team.view()).is_none() {
        return;
    }
    let mut list = ListLines::default();
    for event in state.team_rows() {
        let mut spans = vec![dim(format!("{:<8}", local_time(event.start, "%b %-d")))];
        spans.extend(event_row(&state.ctx, event, now));
        list.row(state.team.selected, spans);
    }
    list.render(f, inner);
}

fn draw_game(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let inner = framed(f, area, format!("Game: {}", state.plays_dropdown.selected()));
    let Some(detail) = ready(f, inner, state.game.view()) else {
        return;
    };

    let matchup = &detail.summary.matchup;
    let mut list = ListLines::default();
    if !matchup.home.display_name.is_empty() {
        list.header(format!(
            "{} {}  @  {} {}",
            matchup.away.display_name,
            matchup.away.score_or_zero(),
            matchup.home.display_name,
            matchup.home.score_or_zero()
        ));
        list.lines.push(Line::from(""));
    }

    let plays = state.visible_plays();
    if plays.is_empty() {
        list.lines.push(Line::from(dim("No plays for this selection.")));
    }
    for play in plays {
        let kind = classify_play(play);
        list.row(
            state.game.selected,
            vec![
                severity_span(kind.severity()),
                dim(format!("{:<4}{:>6}  ", period_label(&state.ctx, play.period), play.clock)),
                Span::raw(play.text.clone()),
            ],
        );
    }
    list.render(f, inner);
}

fn draw_roster(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let team = state
        .roster_team
        .as_ref()
        .map(|(_, name)| name.as_str())
        .unwrap_or("Roster");
    let inner = framed(f, area, format!("{team} Roster"));
    let Some(roster) = ready(f, inner, state.roster.view()) else {
        return;
    };

    let mut list = ListLines::default();
    if !roster.coach.name.is_empty() {
        let exp = roster
            .coach
            .experience
            .as_deref()
            .map(|e| format!(" ({e} yrs)"))
            .unwrap_or_default();
        list.lines.push(Line::from(dim(format!("Coach: {}{exp}", roster.coach.name))));
    }
    for group in &roster.groups {
        list.header(group.position.clone());
        for player in &group.players {
            let health = Health::of(player);
            list.row(
                state.roster.selected,
                vec![
                    severity_span(health.severity()),
                    dim(format!("#{:<3} ", player.jersey)),
                    Span::raw(format!("{:<26}", player.name)),
                    dim(player_measurements(player)),
                ],
            );
        }
    }
    list.render(f, inner);
}

fn player_measurements(player: &Player) -> String {
    let age = player.age.map(|a| format!("{a} yrs")).unwrap_or_default();
    [player.height.as_str(), player.weight.as_str(), age.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

fn draw_help(f: &mut Frame, area: Rect) {
    let inner = framed(f, area, "Help".into());
    let keys: &[(&str, &str)] = &[
        ("1-6", "Scores, News, Injuries, Transactions, Standings, Team"),
        ("j / k", "move down / up"),
        ("Enter", "open game (events) or roster (standings)"),
        ("Esc / h", "back from Game, Roster or Help"),
        ("d", "cycle the view's dropdown"),
        ("L", "next league"),
        ("r", "refresh"),
        ("i", "toggle detail pane"),
        ("f", "toggle full screen"),
        ("\"", "toggle log pane"),
        ("q", "quit"),
    ];
    let lines: Vec<Line> = keys
        .iter()
        .map(|(k, what)| {
            Line::from(vec![
                Span::styled(format!("{k:>8}  "), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

// ---------------------------------------------------------------------------
// Detail pane
// ---------------------------------------------------------------------------

fn draw_detail(f: &mut Frame, area: Rect, app: &App, now: DateTime<Utc>) {
    let block = default_border(Color::DarkGray).title(" Detail ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = detail_lines(app, now);
    if lines.is_empty() {
        return;
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::raw(value.into()),
    ])
}

fn detail_lines(app: &App, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let state = &app.state;
    let ctx = &state.ctx;
    let mut lines = Vec::new();
    match state.active_tab {
        MenuItem::Scores | MenuItem::Team => {
            let Some(event) = state.selected_event() else {
                return lines;
            };
            let status = badge(ctx, event, now);
            lines.push(Line::from(Span::styled(
                event.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(field("Status", status.tooltip));
            lines.push(field("Start", local_time(event.start, "%a %b %-d, %I:%M %p")));
            for side in [&event.matchup.away, &event.matchup.home] {
                let mut value = side.display_name.clone();
                if let Some(record) = &side.record {
                    value.push_str(&format!(" ({record})"));
                }
                if !side.line_scores.is_empty() {
                    value.push_str(&format!("  [{}]", side.line_scores.join(" ")));
                }
                lines.push(field(&side.abbreviation, value));
                if let Some(probable) = &side.probable {
                    lines.push(field("  Probable", probable.clone()));
                }
            }
            if let Some(venue) = &event.venue {
                let place = format!("{}, {} {}", venue.name, venue.city, venue.state);
                lines.push(field("Venue", place));
            }
            if let Some(season) = &event.season {
                let year = season.year.as_deref().unwrap_or("");
                lines.push(field("Season", format!("{year} {}", season.kind)));
            }
            if let Some(tickets) = &event.tickets {
                lines.push(field("Tickets", tickets.clone()));
            }
            lines.push(field("Link", event.link.clone()));
        }
        MenuItem::News => {
            let Some(article) = state.news.data.as_ref().and_then(|a| a.get(state.news.selected))
            else {
                return lines;
            };
            lines.push(Line::from(Span::styled(
                article.headline.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(field("Type", article.category.clone()));
            lines.push(field("By", article.byline.clone()));
            lines.push(field("Published", local_time(article.published, "%b %-d, %Y %I:%M %p")));
            lines.push(Line::from(""));
            lines.push(Line::from(article.description.clone()));
            lines.push(Line::from(""));
            lines.push(field("Link", article.link.clone()));
        }
        MenuItem::Injuries => {
            let Some(injury) = state
                .injuries
                .data
                .as_ref()
                .and_then(|i| i.get(state.injuries.selected))
            else {
                return lines;
            };
            lines.push(field("Athlete", injury.athlete.clone()));
            lines.push(field("Position", injury.position.clone()));
            lines.push(field("Status", injury.status.label()));
            lines.push(field("Return", injury.return_date.clone()));
            lines.push(field("Player", injury.athlete_link.clone()));
            lines.push(field("Team", injury.team_link.clone()));
        }
        MenuItem::Transactions => {
            let Some(tx) = state.transaction_rows().get(state.transactions.selected).copied() else {
                return lines;
            };
            lines.push(field("Date", local_time(tx.date, "%b %-d, %Y")));
            lines.push(Line::from(tx.description.clone()));
            lines.push(field("Team", tx.team_link.clone()));
        }
        MenuItem::Standings => {
            let Some(entry) = state.selected_standing() else {
                return lines;
            };
            let ranking = rank(ctx, entry);
            lines.push(Line::from(Span::styled(
                entry.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if !ranking.tier.tooltip().is_empty() {
                lines.push(Line::from(Span::styled(
                    ranking.tier.tooltip(),
                    Style::default().fg(tone_color(ranking.tier.tone())),
                )));
            }
            for part in stat_line(ctx, entry).split(" | ") {
                lines.push(Line::from(part.to_owned()));
            }
            lines.push(field("Link", entry.link.clone()));
            if entry.team_id.is_some() {
                lines.push(Line::from(dim("Enter: roster")));
            }
        }
        MenuItem::Game => {
            let Some(detail) = state.game.data.as_ref() else {
                return lines;
            };
            let summary = &detail.summary;
            let (away, home) = (&summary.matchup.away, &summary.matchup.home);
            lines.push(Line::from(Span::styled(
                format!("{:<14}{:>10}{:>10}", "", away.abbreviation, home.abbreviation),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (label, a, h) in paired_stats(&summary.away_stats, &summary.home_stats) {
                lines.push(Line::from(format!("{label:<14}{a:>10}{h:>10}")));
            }
            for team in &summary.leaders {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    team.team.clone(),
                    Style::default().fg(Color::Cyan),
                )));
                for leader in &team.leaders {
                    let value = format!("{} {}", leader.athlete, leader.value);
                    lines.push(field(&leader.category, value));
                }
            }
            let sides = [(away, &summary.away_injuries), (home, &summary.home_injuries)];
            for (side, injuries) in sides {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("{} Injuries", side.abbreviation),
                    Style::default().fg(Color::Cyan),
                )));
                if injuries.is_empty() {
                    lines.push(Line::from(dim("No injuries reported.")));
                }
                for injury in injuries {
                    lines.push(Line::from(vec![
                        severity_span(injury_severity(&injury.status)),
                        Span::raw(format!(" {} - {}", injury.athlete, injury.status.label())),
                    ]));
                }
            }
            if let Some(venue) = &summary.venue {
                lines.push(Line::from(""));
                lines.push(field("Venue", format!("{}, {}", venue.name, venue.city)));
            }
            let tickets = summary.tickets.clone().unwrap_or_else(|| "Unknown".into());
            lines.push(field("Tickets", tickets));
        }
        MenuItem::Roster => {
            let Some(player) = state
                .roster
                .data
                .iter()
                .flat_map(|r| r.groups.iter())
                .flat_map(|g| g.players.iter())
                .nth(state.roster.selected)
            else {
                return lines;
            };
            let health = Health::of(player);
            lines.push(Line::from(Span::styled(
                player.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(field("Jersey", player.jersey.clone()));
            lines.push(field("Size", player_measurements(player)));
            lines.push(Line::from(Span::styled(
                player.injury.clone().unwrap_or_else(|| health.label().to_owned()),
                Style::default().fg(tone_color(health.severity().tone)),
            )));
            if let Some(link) = &player.link {
                lines.push(field("Link", link.clone()));
            }
        }
        MenuItem::Help => {}
    }
    lines
}

/// Stats present on both sides, matched by label, in the away team's order.
fn paired_stats<'a>(
    away: &'a [StatLine],
    home: &'a [StatLine],
) -> Vec<(&'a str, &'a str, &'a str)> {
    away.iter()
        .filter_map(|a| {
            let h = home.iter().find(|h| h.label == a.label)?;
            Some((a.label.as_str(), a.value.as_str(), h.value.as_str()))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let dropdown = match state.active_tab {
        MenuItem::Scores => Some(&state.scores_dropdown),
        MenuItem::Standings => Some(&state.standings_dropdown),
        MenuItem::Game => Some(&state.plays_dropdown),
        MenuItem::Team => Some(&state.team_dropdown),
        _ => None,
    };

    let mut spans = vec![dim(format!(" {} ", state.ctx))];
    if let Some(d) = dropdown.filter(|d| !d.is_empty()) {
        spans.push(Span::styled(
            format!(" [d] {} ", d.selected()),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(err) = &state.last_error {
        spans.push(Span::styled(format!(" {err}"), Style::default().fg(Color::Red)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .output_target(false)
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray))
        .style_debug(Style::default().fg(Color::DarkGray));
    f.render_widget(widget, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(1), 1, 1)
    };
    f.render_widget(spinner, area);
}
