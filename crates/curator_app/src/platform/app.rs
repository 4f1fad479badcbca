use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use curator_core::{update, AppState, AppViewModel, Msg};
use curator_engine::ApiSettings;

use super::commands::{self, Directive};
use super::effects::EffectRunner;
use super::render;

/// Runs the message loop. This thread owns the state and is the only
/// caller of `update`; stdin input and engine completions both arrive
/// as Msgs on one channel, so transitions stay single-threaded.
pub fn run(settings: ApiSettings) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx.clone())?;

    let mut state = AppState::new();
    let shared_view = Arc::new(Mutex::new(state.view()));
    let quit = Arc::new(AtomicBool::new(false));

    spawn_stdin_loop(shared_view.clone(), quit.clone(), msg_tx.clone());

    println!("{}", commands::HELP);

    // The catalog loads on startup, like the manage page on mount.
    let _ = msg_tx.send(Msg::CatalogRefreshRequested);

    while let Ok(msg) = msg_rx.recv() {
        if quit.load(Ordering::Relaxed) {
            break;
        }
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
        if state.consume_dirty() {
            let view = state.view();
            *shared_view.lock().expect("view snapshot") = view.clone();
            println!("{}", render::render(&view));
        }
    }

    Ok(())
}

/// Reads command lines and turns them into Msgs against the latest view
/// snapshot (the snapshot is what resolves link keys and indices).
fn spawn_stdin_loop(
    shared_view: Arc<Mutex<AppViewModel>>,
    quit: Arc<AtomicBool>,
    msg_tx: mpsc::Sender<Msg>,
) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let view = shared_view.lock().expect("view snapshot").clone();
            match commands::parse(&line, &view) {
                Ok(Directive::Dispatch(msg)) => {
                    if msg_tx.send(msg).is_err() {
                        return;
                    }
                }
                Ok(Directive::Help) => println!("{}", commands::HELP),
                Ok(Directive::Quit) => break,
                Ok(Directive::Noop) => {}
                Err(message) => println!("! {message}"),
            }
        }
        // Stdin closed or quit: wake the message loop so it can exit.
        quit.store(true, Ordering::Relaxed);
        let _ = msg_tx.send(Msg::NoOp);
    });
}
