use super::*;
use crate::audio::tests::RecordingPlayer;
use crate::state::{Status, NOT_FOUND_NOTICE};
use crate::test_utils::{definition, found, hello_word, key, key_with_mods, not_found, type_text};
use crossterm::event::{KeyEventState, MouseEvent};
use ratatui::layout::Rect;

fn press(app: &mut App, code: KeyCode) -> Option<Action> {
    app.handle_event(&Event::Key(key(code)))
}

fn click(app: &mut App, column: u16, row: u16) -> Option<Action> {
    app.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

fn app_showing_hello() -> App {
    let mut app = App::new();
    app.apply(found("hello", hello_word()));
    app
}

#[test]
fn enter_submits_and_clears_the_query() {
    let mut app = App::new();
    type_text(&mut app, "hello");

    let action = press(&mut app, KeyCode::Enter);

    assert_eq!(action, Some(Action::Search("hello".into())));
    assert_eq!(app.query.text(), "");
}

#[test]
fn search_button_click_submits_like_enter() {
    let mut app = App::new();
    app.regions.push(Rect::new(60, 0, 12, 3), Target::SearchButton);
    type_text(&mut app, "hello");

    let action = click(&mut app, 65, 1);

    assert_eq!(action, Some(Action::Search("hello".into())));
    assert_eq!(app.query.text(), "");
}

#[test]
fn blank_query_is_ignored() {
    let mut app = App::new();
    type_text(&mut app, "   ");

    assert_eq!(press(&mut app, KeyCode::Enter), None);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let mut app = App::new();
    type_text(&mut app, " cat ");

    assert_eq!(press(&mut app, KeyCode::Enter), Some(Action::Search("cat".into())));
}

#[test]
fn query_is_cleared_even_when_the_lookup_fails() {
    let mut app = App::new();
    type_text(&mut app, "zzxx");
    press(&mut app, KeyCode::Enter);

    app.apply(not_found("zzxx"));

    assert_eq!(app.query.text(), "");
    assert_eq!(app.search.status(), Status::NotFound);
    assert_eq!(
        app.search.notice().map(|notice| notice.text()).as_deref(),
        Some(NOT_FOUND_NOTICE)
    );
}

#[test]
fn clicking_a_synonym_equals_typing_it() {
    let mut clicked = app_showing_hello();
    clicked.regions.push(Rect::new(12, 8, 2, 1), Target::Link("hi".into()));
    type_text(&mut clicked, "half typed");
    let by_click = click(&mut clicked, 12, 8);

    let mut typed = app_showing_hello();
    type_text(&mut typed, "hi");
    let by_typing = press(&mut typed, KeyCode::Enter);

    assert_eq!(by_click, by_typing);
    assert_eq!(clicked.query.text(), typed.query.text());
}

#[test]
fn tab_cycles_through_targets_and_enter_activates() {
    let mut app = app_showing_hello();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selected_target(), Some(Target::Play(0)));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selected_target(), Some(Target::Link("hi".into())));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selected_target(), Some(Target::Play(0)));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.selected_target(), Some(Target::Link("hi".into())));

    assert_eq!(press(&mut app, KeyCode::Enter), Some(Action::Search("hi".into())));
    assert_eq!(app.selection, None);
}

#[test]
fn selection_on_play_button_plays() {
    let mut app = app_showing_hello();
    press(&mut app, KeyCode::Tab);

    assert_eq!(press(&mut app, KeyCode::Enter), Some(Action::PlayAudio(0)));
}

#[test]
fn typing_drops_the_selection() {
    let mut app = app_showing_hello();
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('x'));

    assert_eq!(app.selection, None);
    assert_eq!(app.query.text(), "x");
}

#[test]
fn tab_without_entry_selects_nothing() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selection, None);
}

#[test]
fn esc_clears_selection_before_quitting() {
    let mut app = app_showing_hello();
    press(&mut app, KeyCode::Tab);

    assert_eq!(press(&mut app, KeyCode::Esc), None);
    assert_eq!(press(&mut app, KeyCode::Esc), Some(Action::Quit));
}

#[test]
fn ctrl_c_quits() {
    let mut app = App::new();
    let action = app.handle_event(&Event::Key(key_with_mods(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert_eq!(action, Some(Action::Quit));
}

#[test]
fn key_release_is_ignored() {
    let mut app = App::new();
    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    release.state = KeyEventState::NONE;

    assert_eq!(app.handle_event(&Event::Key(release)), None);
    assert_eq!(app.query.text(), "");
}

#[test]
fn playing_uses_the_phonetic_at_that_index_after_replacement() {
    let player = RecordingPlayer::default();
    let mut app = app_showing_hello();
    app.play_audio(0, &player);

    let mut other = hello_word();
    other.word = "hi".into();
    other.phonetics[0].audio = Some("hi.mp3".into());
    app.apply(found("hi", other));
    app.play_audio(0, &player);

    assert_eq!(*player.played.borrow(), vec!["a.mp3", "hi.mp3"]);
}

#[test]
fn missing_audio_shows_a_notice() {
    let player = RecordingPlayer::default();
    let mut word = hello_word();
    word.phonetics[0].audio = None;
    let mut app = App::new();
    app.apply(found("hello", word));

    app.play_audio(0, &player);

    assert!(player.played.borrow().is_empty());
    assert!(matches!(app.search.notice(), Some(Notice::Audio(_))));
}

#[test]
fn new_entry_resets_scroll_and_selection() {
    let mut app = app_showing_hello();
    app.max_scroll = 20;
    press(&mut app, KeyCode::PageDown);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.scroll, 10);

    let mut word = hello_word();
    word.meanings[0].definitions.push(definition("a second sense", &[], &[]));
    app.apply(found("hello", word));

    assert_eq!(app.scroll, 0);
    assert_eq!(app.selection, None);
}

#[test]
fn not_found_keeps_selection_and_entry() {
    let mut app = app_showing_hello();
    press(&mut app, KeyCode::Tab);

    app.apply(not_found("zzxx"));

    assert_eq!(app.selection, Some(0));
    assert!(app.search.word().is_some());
}

#[test]
fn scrolling_is_clamped() {
    let mut app = app_showing_hello();
    app.max_scroll = 4;

    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.scroll, 4);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.scroll, 3);
    press(&mut app, KeyCode::PageUp);
    assert_eq!(app.scroll, 0);
}

#[test]
fn paste_goes_into_the_query() {
    let mut app = App::new();
    app.handle_event(&Event::Paste("serendipity".into()));
    assert_eq!(app.query.text(), "serendipity");
}

#[test]
fn submitted_term_is_trimmed_and_blank_is_ignored() {
    let mut app = App::new();

    assert_eq!(app.submit_term("   "), None);
    assert_eq!(app.submit_term(""), None);
    assert_eq!(
        app.submit_term("  serendipity \t"),
        Some(Action::Search("serendipity".into()))
    );
}
