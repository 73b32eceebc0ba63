use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tunely_core::{update, AppState, Msg};
use tunely_logging::{tunely_info, tunely_warn};

use super::config::{self, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::BUSY_NOTICE;
use super::ui::input::{self, InputEvent};
use super::ui::render;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> io::Result<()> {
    let (config, config_error) = match config::load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination);
    if let Some(err) = config_error {
        eprintln!("Warning: {err}; using defaults");
        tunely_warn!("Config load failed, using defaults: {}", err);
    }

    let runner = EffectRunner::new(config.engine_settings());
    let input_rx = input::spawn_stdin_reader();
    let mut app = App::new(runner, io::stdout());

    app.write_lines(&render::banner())?;
    app.render(true)?;
    app.run(&input_rx)?;

    tunely_info!("Shutting down");
    Ok(())
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    fn run(&mut self, input_rx: &mpsc::Receiver<InputEvent>) -> io::Result<()> {
        let mut input_open = true;
        loop {
            if input_open {
                match input_rx.recv_timeout(TICK_INTERVAL) {
                    Ok(InputEvent::Line(text)) => self.handle_line(text)?,
                    Ok(InputEvent::Quit) => return Ok(()),
                    Err(RecvTimeoutError::Timeout) => self.dispatch(Msg::Tick),
                    Err(RecvTimeoutError::Disconnected) => input_open = false,
                }
            } else {
                // Piped input ran out: let the in-flight request finish, then exit.
                if !self.state.is_pending() {
                    return Ok(());
                }
                thread::sleep(TICK_INTERVAL);
            }

            for msg in self.runner.poll() {
                self.dispatch(msg);
            }
            self.render(false)?;
        }
    }

    fn handle_line(&mut self, text: String) -> io::Result<()> {
        self.dispatch(Msg::InputChanged(text));
        // The Generate action is disabled while a request is pending.
        if self.state.view().generate_enabled {
            self.dispatch(Msg::GenerateClicked);
        } else {
            writeln!(self.out, "{BUSY_NOTICE}")?;
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn render(&mut self, force: bool) -> io::Result<()> {
        let was_dirty = self.state.consume_dirty();
        if !(was_dirty || force) {
            return Ok(());
        }
        let lines = render::render(&self.state.view());
        self.write_lines(&lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}
