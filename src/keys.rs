use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// What a key press asks of the main loop.
#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    Quit,
    Fetch(NetworkRequest),
    Redraw,
}

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let outcome = {
        let mut guard = app.lock().await;
        apply_key(&mut guard, key_event)
    };

    match outcome {
        KeyOutcome::Quit => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }
        KeyOutcome::Fetch(request) => {
            let _ = network_requests.send(request).await;
        }
        KeyOutcome::Redraw => {}
    }
}

/// Apply one key press to the app. Kept free of I/O so bindings can be
/// exercised directly.
pub fn apply_key(app: &mut App, key_event: KeyEvent) -> KeyOutcome {
    let tab = app.state.active_tab;
    let request = match (tab, key_event.code, key_event.modifiers) {
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => return KeyOutcome::Quit,

        // Tab switching
        (_, Char(c @ '1'..='6'), _) => {
            let idx = c as usize - '1' as usize;
            app.tabs().get(idx).copied().and_then(|next| app.update_tab(next))
        }
        (MenuItem::Help, KeyCode::Esc | Char('?'), _) => {
            app.go_back();
            None
        }
        (_, Char('?'), _) => app.update_tab(MenuItem::Help),
        (MenuItem::Game | MenuItem::Roster, KeyCode::Esc | Char('h') | KeyCode::Left, _) => {
            app.go_back();
            None
        }

        // Lists
        (_, Char('j') | KeyCode::Down, _) => {
            app.select_next();
            None
        }
        (_, Char('k') | KeyCode::Up, _) => {
            app.select_prev();
            None
        }
        (_, KeyCode::Enter, _) => app.open_selected(),

        // View controls
        (_, Char('d'), _) => app.cycle_dropdown(),
        (_, Char('L'), _) => app.cycle_league(),
        (_, Char('r'), _) => app.refresh(),

        // Global
        (_, Char('i'), _) => {
            app.toggle_detail();
            None
        }
        (_, Char('f'), _) => {
            app.toggle_full_screen();
            None
        }
        (_, Char('"'), _) => {
            app.toggle_show_logs();
            None
        }

        _ => None,
    };

    request.map_or(KeyOutcome::Redraw, KeyOutcome::Fetch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::{AppSettings, Args};
    use crate::state::preferences::Preferences;
    use clap::Parser;
    use sideline_api::{Sport, SportContext};

    fn app(argv: &[&str]) -> App {
        let mut full = vec!["sideline"];
        full.extend_from_slice(argv);
        let settings = AppSettings::from(Args::try_parse_from(full).unwrap());
        App::with_preferences(settings, Preferences::default(), None)
    }

    fn press(app: &mut App, code: KeyCode) -> KeyOutcome {
        apply_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn number_keys_switch_tabs_and_fetch_once() {
        let mut a = app(&["--sport", "soccer"]);
        let ctx = SportContext::new(Sport::Soccer, "eng.1");
        assert_eq!(
            press(&mut a, Char('5')),
            KeyOutcome::Fetch(NetworkRequest::LoadStandings { ctx: ctx.clone() })
        );
        assert_eq!(a.state.active_tab, MenuItem::Standings);
        assert_eq!(press(&mut a, Char('5')), KeyOutcome::Redraw);
        assert_eq!(
            press(&mut a, Char('2')),
            KeyOutcome::Fetch(NetworkRequest::LoadNews { ctx })
        );
    }

    #[test]
    fn six_is_inert_without_a_team() {
        let mut a = app(&[]);
        assert_eq!(press(&mut a, Char('6')), KeyOutcome::Redraw);
        assert_eq!(a.state.active_tab, MenuItem::Scores);
    }

    #[test]
    fn help_opens_and_closes() {
        let mut a = app(&[]);
        press(&mut a, Char('3'));
        press(&mut a, Char('?'));
        assert_eq!(a.state.active_tab, MenuItem::Help);
        press(&mut a, KeyCode::Esc);
        assert_eq!(a.state.active_tab, MenuItem::Injuries);
    }

    #[test]
    fn quit_and_toggles() {
        let mut a = app(&[]);
        assert_eq!(press(&mut a, Char('q')), KeyOutcome::Quit);
        assert_eq!(
            apply_key(&mut a, KeyEvent::new(Char('c'), KeyModifiers::CONTROL)),
            KeyOutcome::Quit
        );
        let detail = a.state.show_detail;
        press(&mut a, Char('i'));
        assert_eq!(a.state.show_detail, !detail);
        press(&mut a, Char('"'));
        assert!(a.state.show_logs);
        press(&mut a, Char('f'));
        assert!(a.settings.full_screen);
    }

    #[test]
    fn refresh_reissues_the_active_fetch() {
        let mut a = app(&[]);
        let ctx = SportContext::new(Sport::Hockey, "nhl");
        assert_eq!(
            press(&mut a, Char('r')),
            KeyOutcome::Fetch(NetworkRequest::LoadScores { ctx })
        );
        assert!(a.state.scores.loading);
    }

    #[test]
    fn shift_l_cycles_the_league() {
        let mut a = app(&["--sport", "soccer"]);
        let outcome = press(&mut a, Char('L'));
        let usa = SportContext::new(Sport::Soccer, "usa.1");
        assert_eq!(outcome, KeyOutcome::Fetch(NetworkRequest::LoadScores { ctx: usa }));
    }
}
