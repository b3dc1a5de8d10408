use std::sync::Arc;
use std::time::Duration;

use common::animation::{
    BootLoader, CursorFollower, PixelAlien, ScheduledTask, TypingAnimator, TypingTimings,
    spawn_animator,
};
use common::config::{KeyValueStore, YamlKeyValueStore};
use common::games::SessionRng;
use common::games::snake::{SnakeGameState, SnakeSession};
use common::theme::ThemeStore;
use common::{log, log_error};
use crossterm::event::{Event, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tokio::sync::Mutex;

use crate::config::ClientConfig;
use crate::input::{AppCommand, command_for_key};
use crate::views::{self, Palette};

const CARET_BLINK: Duration = Duration::from_millis(530);
/// Longest gap a single frame may advance the animations by, e.g. after a suspend.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);
/// Terminal cells are roughly twice as tall as wide; these scale cell distances into
/// the pointer units the alien expects.
const POINTER_UNITS_PER_COLUMN: f32 = 4.0;
const POINTER_UNITS_PER_ROW: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Boot,
    Home,
    Game,
}

/// Terminal rendition of the portfolio: boot screen, home banner and the snake game.
pub struct App<S: KeyValueStore = YamlKeyValueStore> {
    screen: Screen,
    prefs: ThemeStore<S>,
    boot: Arc<Mutex<BootLoader>>,
    boot_task: Option<ScheduledTask>,
    boot_view: BootLoader,
    typing: Arc<Mutex<TypingAnimator>>,
    typing_task: ScheduledTask,
    typing_text: String,
    session: SnakeSession,
    game_view: SnakeGameState,
    cursor: CursorFollower,
    alien: PixelAlien,
    viewport: Rect,
    elapsed: Duration,
    notice: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(
        config: &ClientConfig,
        prefs: ThemeStore<S>,
        viewport: Rect,
    ) -> Result<Self, String> {
        let typing = Arc::new(Mutex::new(TypingAnimator::new(
            config.roles.clone(),
            TypingTimings::default(),
        )?));
        let typing_task = spawn_animator(typing.clone(), SessionRng::from_random());

        let boot = Arc::new(Mutex::new(BootLoader::new()));
        let (screen, boot_task) = if config.show_boot {
            let task = spawn_animator(boot.clone(), SessionRng::from_random());
            (Screen::Boot, Some(task))
        } else {
            (Screen::Home, None)
        };

        Ok(Self {
            screen,
            prefs,
            boot,
            boot_task,
            boot_view: BootLoader::new(),
            typing,
            typing_task,
            typing_text: String::new(),
            session: SnakeSession::new("local", config.snake),
            game_view: SnakeGameState::new(config.snake),
            cursor: CursorFollower::new(),
            alien: PixelAlien::new(),
            viewport,
            elapsed: Duration::ZERO,
            notice: None,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Advances the frame-driven animations.
    pub fn update(&mut self, dt: Duration) {
        let dt = dt.min(MAX_FRAME_DELTA);
        self.cursor.update(dt);
        self.alien.update(dt);
        self.elapsed += dt;
    }

    /// Copies the state owned by background animators so `render` needs no locks.
    pub async fn refresh(&mut self) {
        if self.screen == Screen::Boot {
            self.boot_view = self.boot.lock().await.clone();
            if self.boot_view.is_done() {
                self.enter_home();
            }
        }
        self.typing_text = self.typing.lock().await.text().to_string();
        if self.screen == Screen::Game {
            self.game_view = self.session.snapshot().await;
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Option<AppCommand> {
        match event {
            Event::Key(key) => command_for_key(self.screen, key),
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                    self.on_pointer(mouse.column, mouse.row);
                }
                None
            }
            Event::FocusLost => {
                self.cursor.on_leave();
                self.alien.on_pointer_leave();
                None
            }
            Event::FocusGained => {
                self.cursor.on_enter();
                None
            }
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                None
            }
            _ => None,
        }
    }

    fn on_pointer(&mut self, column: u16, row: u16) {
        self.cursor.on_move(column as f32, row as f32);
        if self.screen == Screen::Home {
            let (anchor_x, anchor_y) = views::alien_anchor(self.viewport);
            self.alien.on_pointer_move(
                (column as f32 - anchor_x as f32) * POINTER_UNITS_PER_COLUMN,
                (row as f32 - anchor_y as f32) * POINTER_UNITS_PER_ROW,
            );
        }
    }

    pub async fn handle_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => {
                // Handled by the event loop
            }
            AppCommand::ToggleTheme => {
                let result = self.prefs.toggle_theme().map(|theme| theme.to_string());
                self.report_pref_change("theme", result);
            }
            AppCommand::CycleAccent => {
                let next = self.prefs.accent_color().next();
                let result = self
                    .prefs
                    .set_accent_color(next)
                    .map(|()| next.to_string());
                self.report_pref_change("accent color", result);
            }
            AppCommand::SkipBoot => {
                self.boot.lock().await.skip();
                self.enter_home();
            }
            AppCommand::OpenGame => {
                self.screen = Screen::Game;
                self.game_view = self.session.snapshot().await;
            }
            AppCommand::BackHome => {
                self.session.stop().await;
                self.game_view = self.session.snapshot().await;
                self.screen = Screen::Home;
            }
            AppCommand::StartGame => {
                self.session.start(SessionRng::from_random()).await;
                self.game_view = self.session.snapshot().await;
            }
            AppCommand::Steer(direction) => {
                self.session.set_direction(direction).await;
            }
        }
    }

    fn report_pref_change(&mut self, what: &str, result: Result<String, String>) {
        match result {
            Ok(value) => {
                log!("Switched {} to {}", what, value);
                self.notice = None;
            }
            Err(e) => {
                log_error!("Failed to save {}: {}", what, e);
                self.notice = Some(format!("Could not save {} preference", what));
            }
        }
    }

    fn enter_home(&mut self) {
        if let Some(task) = self.boot_task.take() {
            task.cancel();
        }
        log!("Boot finished, showing home screen");
        self.screen = Screen::Home;
    }

    /// Stops every background loop before the terminal is restored.
    pub async fn shutdown(&mut self) {
        self.session.stop().await;
        self.typing_task.cancel();
        if let Some(task) = self.boot_task.take() {
            task.cancel();
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let palette = Palette::new(self.prefs.theme(), self.prefs.accent_color());
        let area = frame.area();
        frame.render_widget(Block::new().style(palette.base()), area);

        match self.screen {
            Screen::Boot => views::render_boot(frame, area, &palette, &self.boot_view),
            Screen::Home => {
                let caret_visible = (self.elapsed.as_millis() / CARET_BLINK.as_millis()) % 2 == 0;
                views::render_home(
                    frame,
                    area,
                    &palette,
                    &self.alien,
                    &self.typing_text,
                    caret_visible,
                );
            }
            Screen::Game => views::render_game(frame, area, &palette, &self.game_view),
        }

        let status = self.notice.clone().unwrap_or_else(|| {
            format!(
                "{} / {}",
                self.prefs.theme(),
                self.prefs.accent_color().display_name()
            )
        });
        if area.height > 0 {
            let footer = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(status, palette.muted()))).right_aligned(),
                footer,
            );
        }

        if self.screen != Screen::Boot {
            views::render_cursor(frame, &palette, &self.cursor);
        }
    }
}
