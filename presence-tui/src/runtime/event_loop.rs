use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use presence_api::PresenceClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &PresenceClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    // Populate the selector once at startup.
    let _ = action_tx.send(Action::LoadUsers);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        // Actions run to completion one at a time; completions are never
        // applied concurrently with key handling.
        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client).await;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
