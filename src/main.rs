mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::AppSettings;
use crate::state::messages::{NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::{LoadingState, NetworkWorker};
use crate::state::refresher::PeriodicRefresher;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::{error, info};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tui::{Terminal, backend::CrosstermBackend};

/// Redraw cadence without input; status badges work at minute resolution.
const CLOCK_TICK: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse before touching the terminal so --help and bad flags print normally.
    let settings = AppSettings::load();

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(settings.log_level)?;
    tui_logger::set_default_level(settings.log_level);

    let refresh_interval = settings.refresh_interval;
    let network_worker_settings = settings.clone();
    let app = App::new(settings);
    info!("starting with {}", app.state.ctx);
    let app = Arc::new(Mutex::new(app));

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Network thread
    let network_worker =
        NetworkWorker::new(&network_worker_settings, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    // Clock tick thread
    let clock_task = tokio::spawn(clock_tick_task(ui_event_tx.clone(), CLOCK_TICK));

    // Periodic refresh of live views
    let periodic_task = refresh_interval.map(|every| {
        let refresher = PeriodicRefresher::new(app.clone(), network_req_tx.clone(), every);
        tokio::spawn(refresher.run())
    });

    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, network_req_tx, network_resp_rx).await;

    input_handler.abort();
    network_task.abort();
    clock_task.abort();
    if let Some(task) = periodic_task {
        task.abort();
    }

    Ok(())
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
) {
    let mut loading = LoadingState::default();

    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                handle_ui_event(ui_event, &app, &network_requests).await;
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }

            Some(response) = network_responses.recv() => {
                let should_redraw = handle_network_response(response, &app, &mut loading).await;
                if should_redraw {
                    let mut app_guard = app.lock().await;
                    draw::draw(&mut terminal, &mut app_guard, loading);
                }
            }

            else => break,
        }
    }
}

async fn handle_ui_event(
    ui_event: UiEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    match ui_event {
        UiEvent::AppStarted => {
            let request = {
                let mut guard = app.lock().await;
                let tab = guard.state.active_tab;
                guard.request_for(tab, true)
            };
            if let Some(request) = request {
                let _ = network_requests.send(request).await;
            }
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app, network_requests).await;
        }
        UiEvent::Resize | UiEvent::ClockTick => {}
    }
}

/// Applies a worker response; returns whether the screen needs a redraw.
async fn handle_network_response(
    response: NetworkResponse,
    app: &Arc<Mutex<App>>,
    loading: &mut LoadingState,
) -> bool {
    let mut guard = app.lock().await;
    match response {
        NetworkResponse::LoadingStateChanged { loading_state } => {
            *loading = loading_state;
        }
        NetworkResponse::ScoresLoaded { ctx, days } => guard.on_scores_loaded(ctx, days),
        NetworkResponse::NewsLoaded { ctx, articles } => guard.on_news_loaded(ctx, articles),
        NetworkResponse::InjuriesLoaded { ctx, injuries } => {
            guard.on_injuries_loaded(ctx, injuries)
        }
        NetworkResponse::TransactionsLoaded { ctx, days } => {
            guard.on_transactions_loaded(ctx, days)
        }
        NetworkResponse::StandingsLoaded { ctx, groups } => {
            guard.on_standings_loaded(ctx, groups)
        }
        NetworkResponse::TeamScheduleLoaded { ctx, schedule } => {
            guard.on_team_schedule_loaded(ctx, schedule)
        }
        NetworkResponse::GameDetailLoaded { ctx, detail } => {
            guard.on_game_detail_loaded(ctx, detail)
        }
        NetworkResponse::RosterLoaded { ctx, roster } => guard.on_roster_loaded(ctx, roster),
        NetworkResponse::Error { request, message } => {
            error!("Network error: {message}");
            guard.on_error(&request, message);
        }
    }
    true
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        // crossterm's read blocks; keep it off the async workers.
        let event = tokio::task::spawn_blocking(crossterm_event::read).await;
        let Ok(Ok(event)) = event else {
            continue;
        };
        let ui_event = match event {
            Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
            Event::Resize(_, _) => Some(UiEvent::Resize),
            _ => None,
        };

        if let Some(ui_event) = ui_event
            && ui_events.send(ui_event).await.is_err()
        {
            break;
        }
    }
}

async fn clock_tick_task(ui_events: mpsc::Sender<UiEvent>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    interval.tick().await;
    loop {
        interval.tick().await;
        if ui_events.send(UiEvent::ClockTick).await.is_err() {
            break;
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::Hide,
        terminal::EnterAlternateScreen,
        terminal::Clear(terminal::ClearType::All)
    )?;
    terminal::enable_raw_mode()
}

/// Restore the terminal. Best effort: also runs from the panic hook.
pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All),
        terminal::LeaveAlternateScreen,
        cursor::Show
    );
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clock_ticks_until_the_ui_loop_goes_away() {
        let (tx, mut rx) = mpsc::channel(4);
        let task = tokio::spawn(clock_tick_task(tx, Duration::from_millis(5)));
        for _ in 0..2 {
            assert!(matches!(rx.recv().await, Some(UiEvent::ClockTick)));
        }
        drop(rx);
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("tick task stops once the receiver is dropped")
            .unwrap();
    }
}
