use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::ui::app::{App, Screen};
use crate::ui::browse::BrowseIntent;
use crate::ui::flashcard::FlashcardIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab => app.toggle_screen(),
        _ => match app.screen() {
            Screen::Browse => handle_browse_key(app, key),
            Screen::Quiz => handle_quiz_key(app, key),
        },
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.dispatch_flashcard(FlashcardIntent::Flip),
        KeyCode::Right | KeyCode::Char('n') => app.dispatch_browse(BrowseIntent::NextCard),
        KeyCode::Left | KeyCode::Char('p') => app.dispatch_browse(BrowseIntent::PrevCard),
        KeyCode::Char('R') => app.reload_deck(),
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.reveal_answer(),
        KeyCode::Char('y') => app.grade_current(true),
        KeyCode::Char('n') => app.grade_current(false),
        KeyCode::Char('r') => app.reset_quiz(),
        _ => {}
    }
}
