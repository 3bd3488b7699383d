use anyhow::Context;
use crossterm::event::{self, Event};
use envy::cli;
use envy::config::EnvyConfig;
use envy::editor::Editor;
use envy::keymap::Key;
use envy::terminal::TerminalGuard;
use envy::ui::renderer::TuiRenderer;
use log::{info, warn};
use std::time::Duration;

const HELP_MESSAGE: &str = "HELP: i = insert | w = save | / = find | q = quit";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Parse arguments, load the file, then run the editor until it asks to quit.
///
/// Errors before the terminal switches to raw mode are reported by anyhow
/// on stderr with a non-zero exit status.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();

    let (config, config_error) = match EnvyConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (EnvyConfig::default(), Some(e)),
    };

    init_logging(&config);
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
    }

    let mut editor = Editor::with_config(&config);

    if let Some(path) = &cli_args.file {
        if cli_args.exists() {
            editor
                .open_file(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
        } else {
            info!("{} does not exist yet, starting empty", path.display());
            editor.set_file_path(path);
        }
    }

    editor.set_status(HELP_MESSAGE);

    let _guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    let mut renderer = TuiRenderer::new()?;
    run(&mut editor, &mut renderer)?;

    info!("envy exiting");
    Ok(())
}

fn run(editor: &mut Editor, renderer: &mut TuiRenderer) -> anyhow::Result<()> {
    loop {
        renderer.draw(editor)?;

        // Poll so expired status messages get cleared without input
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                if let Some(key) = Key::from_event(key_event)
                    && editor.handle_key(key)
                {
                    return Ok(());
                }
            }
            Event::Resize(cols, rows) => editor.handle_resize(rows, cols),
            _ => {}
        }
    }
}

/// Send log output to a file so it never lands on the raw-mode screen.
/// `RUST_LOG` overrides the configured level.
fn init_logging(config: &EnvyConfig) {
    let file = match config.open_log_file() {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "envy: logging disabled, can't open {}: {}",
                config.log_path().display(),
                e
            );
            return;
        }
    };

    env_logger::Builder::new()
        .filter_level(config.level_filter())
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
