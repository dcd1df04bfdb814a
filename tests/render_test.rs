// Rendering tests against ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use sandtty::ui::App;

fn draw(app: &App) -> Vec<String> {
    let backend = TestBackend::new(120, 50);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[test]
fn test_header_shows_both_controls() {
    let rows = draw(&App::new());
    assert!(screen_contains(&rows, "Online Code Editor"));
    assert!(screen_contains(&rows, "Framework: React"));
    assert!(screen_contains(&rows, "Theme: Sandpack Dark"));
}

#[test]
fn test_editor_shows_entry_file_with_tabs() {
    let rows = draw(&App::new());
    assert!(screen_contains(&rows, " App.js "));
    assert!(screen_contains(&rows, " styles.css "));
    assert!(screen_contains(&rows, "export default function App() {"));
    // Line numbers are on
    assert!(screen_contains(&rows, "  1 import { useState } from 'react';"));
}

#[test]
fn test_open_dropdown_lists_every_framework() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    let rows = draw(&app);
    assert!(screen_contains(&rows, "● React"));
    assert!(screen_contains(&rows, "  Vue"));
    assert!(screen_contains(&rows, "  Angular"));
}

#[test]
fn test_switching_framework_repaints_editor() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let rows = draw(&app);
    assert!(screen_contains(&rows, "Framework: Vue"));
    assert!(screen_contains(&rows, " App.vue "));
    assert!(screen_contains(&rows, "<template>"));
    assert!(!screen_contains(&rows, " styles.css "));
}

#[test]
fn test_console_is_hidden_until_toggled() {
    let mut app = App::new();
    let rows = draw(&app);
    assert!(!screen_contains(&rows, " Console "));

    press(&mut app, KeyCode::Char('c'));
    let rows = draw(&app);
    assert!(screen_contains(&rows, " Console "));
    assert!(screen_contains(&rows, "running /App.js"));
}
