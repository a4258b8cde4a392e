//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from the term
//! crate. Logging goes to a file (`--log`) because stdout belongs to the UI.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use falling_blocks::core::{Game, Stat};
use falling_blocks::input::{is_interrupt, should_quit, KeyMap, OptionsMenu, Preferences};
use falling_blocks::term::{FrameBuffer, GameView, Scene, TerminalRenderer, Viewport};
use falling_blocks::types::TICK_MS;

/// Falling-block puzzle game in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for piece selection (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Preferences file holding the theme and key bindings
    #[arg(short, long, env = "FALLING_BLOCKS_PREFS", default_value = "falling-blocks.json")]
    prefs: PathBuf,

    /// Write logs to this file; filter with RUST_LOG
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Game mode
    #[arg(short, long, value_enum, default_value_t = Mode::Solo)]
    mode: Mode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Solo,
    VsAi,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_tracing(path)?;
    }

    if args.mode == Mode::VsAi {
        println!("This game mode is not implemented yet.");
        return Ok(());
    }

    let prefs = Preferences::load(&args.prefs)
        .with_context(|| format!("loading preferences from {}", args.prefs.display()))?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, prefs = %args.prefs.display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, App::new(seed, prefs, args.prefs));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

struct App {
    game: Game,
    prefs: Preferences,
    prefs_path: PathBuf,
    keymap: KeyMap,
    menu: OptionsMenu,
    epoch: Instant,
}

impl App {
    fn new(seed: u64, prefs: Preferences, prefs_path: PathBuf) -> Self {
        Self {
            game: Game::new(seed, 0),
            keymap: KeyMap::from_bindings(&prefs.keys),
            prefs,
            prefs_path,
            menu: OptionsMenu::new(),
            epoch: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Returns false when the player quits.
    ///
    /// The open menu sees every key but Ctrl-C. Bound actions win over the
    /// built-in `q` (quit) and `o` (options while paused) keys.
    fn on_key(&mut self, key: KeyEvent) -> bool {
        if is_interrupt(key) {
            self.game.quit();
            return false;
        }
        let now = self.now_ms();

        if self.menu.is_open() {
            let event = self.menu.handle_key(key, &mut self.prefs);
            if event.bindings_changed() {
                self.keymap.rebuild(&self.prefs.keys);
            }
            if event.prefs_changed() {
                if let Err(e) = self.prefs.save(&self.prefs_path) {
                    warn!(error = %e, "could not save preferences");
                }
            }
            return true;
        }

        if self.game.is_over() {
            if key.code == KeyCode::Enter {
                self.game.new_game(now);
            }
            return !should_quit(key);
        }

        if let Some(action) = self.keymap.action_for(key) {
            self.game.handle(action, now);
            return true;
        }

        if should_quit(key) {
            self.game.quit();
            return false;
        }
        if self.game.is_paused() && matches!(key.code, KeyCode::Char('o') | KeyCode::Char('O')) {
            self.menu.open();
        }
        true
    }
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scene = Scene {
            game: &app.game,
            prefs: &app.prefs,
            menu: &app.menu,
        };
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        app.game
            .flush_stats(&mut |stat: Stat, value: u32| debug!(stat = stat.as_str(), value, "stat"));

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                    if !app.on_key(key) {
                        info!(score = app.game.account().score, "quit");
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let now = app.now_ms();
            app.game.tick(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use falling_blocks::types::GameAction;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn app_with(prefs: Preferences, dir: &tempfile::TempDir) -> App {
        App::new(7, prefs, dir.path().join("prefs.json"))
    }

    #[test]
    fn menu_captures_q_as_a_binding() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(Preferences::default(), &dir);
        app.menu.open();
        app.menu.select(GameAction::Rotate);

        assert!(app.on_key(press('q')));
        assert_eq!(app.prefs.keys.rotate, "KeyQ");
        assert_eq!(app.menu.capturing(), None);
        assert_eq!(app.keymap.action_for(press('q')), Some(GameAction::Rotate));
        assert!(!app.game.is_over());

        // Saved alongside the rebuild.
        let saved = Preferences::load(&dir.path().join("prefs.json")).unwrap();
        assert_eq!(saved.keys.rotate, "KeyQ");
    }

    #[test]
    fn ctrl_c_quits_while_capturing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(Preferences::default(), &dir);
        app.menu.open();
        app.menu.select(GameAction::Hold);

        assert!(!app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert_eq!(app.prefs.keys.hold, "KeyC");
    }

    #[test]
    fn bound_q_fires_its_action() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::default();
        prefs.keys.rebind(GameAction::SoftDrop, "KeyQ");
        let mut app = app_with(prefs, &dir);

        let y = app.game.board().piece().y;
        assert!(app.on_key(press('q')));
        assert_eq!(app.game.board().piece().y, y + 1);
        assert!(app.game.is_running());
    }

    #[test]
    fn unbound_q_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(Preferences::default(), &dir);
        assert!(!app.on_key(press('q')));
    }

    #[test]
    fn pause_bound_to_o_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::default();
        prefs.keys.rebind(GameAction::Pause, "KeyO");
        let mut app = app_with(prefs, &dir);

        assert!(app.on_key(press('o')));
        assert!(app.game.is_paused());
        assert!(app.on_key(press('o')));
        assert!(app.game.is_running());
        assert!(!app.menu.is_open());
    }

    #[test]
    fn o_opens_options_while_paused() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with(Preferences::default(), &dir);

        assert!(app.on_key(press('o')));
        assert!(!app.menu.is_open());

        assert!(app.on_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(app.game.is_paused());
        assert!(app.on_key(press('o')));
        assert!(app.menu.is_open());
    }
}
