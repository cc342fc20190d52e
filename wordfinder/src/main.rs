use std::io::stdout;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use dictionary::Dictionary;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, UnboundedSender};

use audio::{AudioPlayer, SystemPlayer};
use config::Config;
use controller::{Action, App};
use state::LookupResolved;

mod audio;
mod config;
mod controller;
mod draw;
mod input;
mod layout;
mod logging;
mod state;
mod view;

#[cfg(test)]
mod test_utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let _log_guard = logging::init_logging(&config.log_dir());
    tracing::info!(endpoint = %config.endpoint, "wordfinder starting");

    let dict = Dictionary::with_options(&config.endpoint, config.timeout())?;

    let terminal = ratatui::init();
    let result = match execute!(stdout(), EnableMouseCapture) {
        Ok(()) => run(terminal, dict, config.word).await,
        Err(error) => Err(error.into()),
    };
    execute!(stdout(), DisableMouseCapture).ok();
    ratatui::restore();

    if let Err(error) = &result {
        tracing::error!(%error, "wordfinder exited with an error");
    }
    result
}

async fn run(
    mut terminal: DefaultTerminal,
    dict: Dictionary,
    initial: Option<String>,
) -> anyhow::Result<()> {
    let (resolved_tx, mut resolved_rx) = mpsc::unbounded_channel::<LookupResolved>();
    let mut events = EventStream::new();
    let player = SystemPlayer;
    let mut app = App::new();

    if let Some(action) = initial.and_then(|word| app.submit_term(&word)) {
        dispatch(&mut app, action, &dict, &resolved_tx, &player);
    }

    loop {
        terminal.draw(|frame| draw::draw(frame, &mut app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if let Some(action) = app.handle_event(&event) {
                        dispatch(&mut app, action, &dict, &resolved_tx, &player);
                    }
                }
                Some(Err(error)) => return Err(error.into()),
                None => break,
            },
            Some(resolved) = resolved_rx.recv() => app.apply(resolved),
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("wordfinder shutting down");
    Ok(())
}

fn dispatch(
    app: &mut App,
    action: Action,
    dict: &Dictionary,
    resolved_tx: &UnboundedSender<LookupResolved>,
    player: &dyn AudioPlayer,
) {
    match action {
        Action::Search(term) => {
            app.search.begin_lookup(&term);
            let dict = dict.clone();
            let resolved_tx = resolved_tx.clone();
            // no cancellation, whichever lookup resolves last is displayed
            tokio::spawn(async move {
                let outcome = dict.lookup(&term).await;
                let _ = resolved_tx.send(LookupResolved { term, outcome });
            });
        }
        Action::PlayAudio(index) => app.play_audio(index, player),
        Action::Quit => app.quit(),
    }
}
