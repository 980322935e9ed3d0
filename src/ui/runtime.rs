use anyhow::Context;
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::ConfigStore;
use crate::session::SessionStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: ConfigStore, deck_path: PathBuf, persist: bool) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(config.get().study.tick_ms);
    let mut app = App::new(&config, deck_path, persist, SessionStore::default_dir())
        .context("failed to load deck")?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    loop {
        let snapshot = app.snapshot();
        terminal.draw(|frame| draw(frame, &app, &snapshot))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            // ratatui picks the new size up on the next draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.flush_session();
    drop(guard);
    Ok(())
}
