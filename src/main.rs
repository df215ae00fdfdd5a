mod app;
mod config;
mod digits;
mod event;
mod games;
mod input;
mod surface;
mod ui;

use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::{Cli, GameConfig};
use event::{Event, EventHandler};
use games::GameOver;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Log to a file; the terminal belongs to the game.
fn init_logging(cli: &Cli) -> Result<()> {
    let file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logger")?;
    Ok(())
}

fn run(terminal: &mut Tui, app: &mut App, tick_ms: u64) -> Result<Option<GameOver>> {
    let event_handler = EventHandler::new(tick_ms);

    terminal.draw(|frame| ui::render(frame, app))?;
    loop {
        match event_handler.next()? {
            Event::Tick => {
                app.on_tick();
                terminal.draw(|frame| ui::render(frame, app))?;
            }
            // The next draw picks up the new size and re-fits the playfield
            Event::Resize => {
                terminal.draw(|frame| ui::render(frame, app))?;
            }
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.game_over)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    log::info!("popper starting");

    let mut app = App::new(GameConfig::from(&cli));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let outcome = run(&mut terminal, &mut app, cli.tick_ms);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Some(over) = outcome? {
        println!("{}", over);
    }
    log::info!("popper exiting");
    Ok(())
}
