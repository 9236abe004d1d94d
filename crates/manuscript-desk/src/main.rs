use anyhow::{Context, Result};
use manuscript_client::{HttpGateway, ManuscriptApi};
use manuscript_config::{AppConfig, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod command_id;
mod dispatcher;
mod feedback;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use reducers::project_reducer::chapters_request;
use middleware::{
    bootstrap_middleware::BootstrapMiddleware, confirmation_middleware::ConfirmationMiddleware,
    export_middleware::ExportMiddleware,
    keyboard_middleware::KeyboardMiddleware, modal_middleware::ModalMiddleware,
    project_middleware::ProjectMiddleware, prompt_middleware::PromptMiddleware,
    text_input_middleware::TextInputMiddleware, theme_middleware::ThemeMiddleware,
    tools_middleware::ToolsMiddleware, Middleware,
};
use state::AppState;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_file = logger::init()?;
    log::info!("Starting manuscript-desk, logging to {:?}", log_file);

    let config = AppConfig::load();
    log::info!("Using server {}", config.server_url);

    let middleware = build_middleware(&config)?;

    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();
    let shared_state: SharedState = Arc::new(RwLock::new(AppState::new(config)));

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        shared_state.clone(),
        middleware,
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &action_tx, &result_rx, &shared_state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Make sure the worker stops even when the loop ended on an error
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting manuscript-desk");
    result
}

/// Middleware chain, in execution order
///
/// Modal comes before keyboard so an open modal owns Esc and clicks.
fn build_middleware(config: &AppConfig) -> Result<Vec<Box<dyn Middleware>>> {
    let gateway = HttpGateway::with_timeout(&config.server_url, config.request_timeout())
        .context("Invalid server URL")?;
    let api = ManuscriptApi::new(Arc::new(gateway));

    let store: Box<dyn PreferenceStore> = match FilePreferenceStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("No preference file available, theme will not persist: {:#}", e);
            Box::new(MemoryPreferenceStore::new())
        }
    };

    let export_dir = config.export_dir()?;

    Ok(vec![
        Box::new(BootstrapMiddleware::new(config.server_url.clone())),
        Box::new(ThemeMiddleware::new(store)),
        Box::new(ModalMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(PromptMiddleware::new()),
        Box::new(ConfirmationMiddleware::new()),
        Box::new(ProjectMiddleware::new(api.clone())?),
        Box::new(ToolsMiddleware::new(api)?),
        Box::new(ExportMiddleware::new(export_dir)),
    ])
}

fn run_app(
    terminal: &mut Term,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
    shared_state: &SharedState,
) -> Result<()> {
    let mut state = shared_state
        .read()
        .map(|s| s.clone())
        .map_err(|e| anyhow::anyhow!("Shared state poisoned: {}", e))?;

    let size = terminal.size()?;
    send(
        action_tx,
        Action::Global(GlobalAction::Resized {
            width: size.width,
            height: size.height,
        }),
    );
    send(action_tx, Action::Bootstrap(BootstrapAction::Start));

    loop {
        terminal.draw(|f| views::render(&state, f.area(), f))?;

        // Apply everything the worker forwarded since the last frame
        let selection_before = state.projects.selection_revision;
        let mut changed = false;
        for action in result_rx.try_iter() {
            state = reducers::reduce(state, &action);
            changed = true;
        }
        if changed {
            match shared_state.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to update shared state: {}", e),
            }
        }
        if let Some(action) = chapters_request(selection_before, &state.projects) {
            send(action_tx, action);
        }

        if !state.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    send(action_tx, Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    send(
                        action_tx,
                        Action::Global(GlobalAction::MouseClicked {
                            column: mouse.column,
                            row: mouse.row,
                        }),
                    );
                }
                Event::Resize(width, height) => {
                    send(action_tx, Action::Global(GlobalAction::Resized { width, height }));
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn send(action_tx: &Sender<Action>, action: Action) {
    if action_tx.send(action).is_err() {
        log::error!("Background worker is gone, dropping action");
    }
}
