mod capture;
mod cli;
mod logging;
mod page;
mod resume;
mod text;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_config::Config;
use folio_content::Profile;
use folio_core::{ElementKind, HitMap, Section, Theme};
use folio_effects::{ParticleAnimator, ParticleOptions, PointerTrail, Typewriter, TypewriterOptions};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Block,
};
use tracing::{debug, info, warn};

use crate::capture::MouseCapture;
use crate::cli::Cli;
use crate::page::{Action, Document, SPY_OFFSET, View, column_width, render_nav};

/// Half-period of the caret blink.
const CARET_BLINK_MS: u64 = 500;
/// How long a status message stays on screen.
const STATUS_MS: u64 = 4000;
/// Rows per mouse wheel notch.
const WHEEL_STEP: isize = 3;
/// Redraw interval while the pointer ring is transitioning.
const HOVER_FRAME_MS: u64 = 16;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = logging::init(cli.log_file.clone())?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    if cli.write_config {
        let path = match &cli.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("wrote {}", path.display());
        return Ok(());
    }

    info!(theme = %config.theme, effects = !cli.no_effects, log = ?log_path, "starting folio");
    let terminal = ratatui::init();
    let result = App::new(config, !cli.no_effects).run(terminal);
    ratatui::restore();
    result
}

/// A transient message in the help row.
#[derive(Debug)]
struct Status {
    text: String,
    until_ms: u64,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    theme: Theme,
    profile: &'static Profile,
    /// Resume offered for download, and where it is saved.
    resume_path: PathBuf,
    download_dir: PathBuf,
    /// Whether the particle background and pointer trail run.
    effects: bool,
    particles: ParticleAnimator,
    pointer: PointerTrail,
    typewriter: Typewriter,
    /// Page laid out for the last frame.
    document: Document,
    /// Interactive regions of the last frame.
    hit_map: HitMap<Action>,
    /// First visible document line.
    scroll: usize,
    /// Section highlighted in the navigation bar.
    active: Section,
    body_height: u16,
    status: Option<Status>,
    /// Milliseconds since the loop started.
    now_ms: u64,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, effects: bool) -> Self {
        let profile = folio_content::profile();
        let phrases: Vec<String> = if config.typewriter.phrases.is_empty() {
            profile.phrases.iter().map(|p| p.to_string()).collect()
        } else {
            config.typewriter.phrases.clone()
        };
        let typewriter = Typewriter::new(
            phrases,
            TypewriterOptions {
                speed_ms: config.typewriter.speed_ms,
                delete_speed_ms: config.typewriter.delete_speed_ms,
                delay_ms: config.typewriter.delay_ms,
            },
        );
        let particles = ParticleAnimator::new(
            ParticleOptions {
                count: config.particles.count,
                link_distance: config.particles.link_distance,
                max_line_opacity: config.particles.max_line_opacity,
            },
            config.particles.fps,
            config.theme,
            fastrand::u64(..),
        );

        Self {
            running: false,
            theme: config.theme,
            profile,
            resume_path: config.resume_path,
            download_dir: resume::download_dir(),
            effects,
            particles,
            pointer: PointerTrail::new(),
            typewriter,
            document: Document::default(),
            hit_map: HitMap::new(),
            scroll: 0,
            active: Section::Hero,
            body_height: 0,
            status: None,
            now_ms: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let _capture = MouseCapture::enable()?;
        let start = Instant::now();
        let size = terminal.size()?;
        self.mount(size.width, size.height);

        self.running = true;
        while self.running {
            self.now_ms = start.elapsed().as_millis() as u64;
            self.update();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.teardown();
        Ok(())
    }

    /// Start every effect at the current time.
    fn mount(&mut self, cols: u16, rows: u16) {
        let now = self.now_ms;
        self.typewriter.mount(now);
        if self.effects {
            self.particles.mount(cols, rows, now);
            self.pointer.mount(now);
        }
        info!(cols, rows, effects = self.effects, "mounted");
    }

    fn teardown(&mut self) {
        self.typewriter.teardown();
        self.particles.teardown();
        self.pointer.teardown();
        info!("torn down");
    }

    /// Advance every effect to the current time.
    fn update(&mut self) {
        let now = self.now_ms;
        self.particles.update(now);
        self.pointer.update(now);
        self.typewriter.update(now);
        if self.status.as_ref().is_some_and(|s| s.until_ms <= now) {
            self.status = None;
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let palette = self.theme.palette();
        frame.render_widget(
            Block::new().style(Style::new().bg(palette.background).fg(palette.text)),
            area,
        );
        self.particles.render(frame, area);

        let [nav, rule, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let caret = (self.now_ms / CARET_BLINK_MS) % 2 == 0;
        self.document = Document::build(
            self.profile,
            palette,
            View {
                width: column_width(body.width),
                height: body.height,
                typed: self.typewriter.text(),
                caret,
            },
        );
        self.body_height = body.height;
        self.scroll = self.scroll.min(self.max_scroll());
        self.active = self.spy();

        self.hit_map.clear();
        let page = self.hit_map.push(ElementKind::Page, area, None, None);
        self.document
            .render(frame, body, self.scroll, &mut self.hit_map, page);
        render_nav(
            frame,
            nav,
            self.profile,
            self.theme,
            self.active,
            &mut self.hit_map,
            page,
        );
        if let Some((x, y)) = self.pointer.position() {
            self.pointer
                .on_over(&self.hit_map, self.hit_map.target_at(x, y));
        }
        frame.render_widget(
            Line::from("─".repeat(usize::from(rule.width))).style(Style::new().fg(palette.muted)),
            rule,
        );

        let accent = palette.accent;
        let footer = match &self.status {
            Some(status) => Line::from(status.text.clone().fg(accent)),
            None => Line::from(vec![
                "q".bold().fg(accent),
                " quit  ".dark_gray(),
                "t".bold().fg(accent),
                " theme  ".dark_gray(),
                "d".bold().fg(accent),
                " resume  ".dark_gray(),
                "j/k".bold().fg(accent),
                " scroll  ".dark_gray(),
                "1-7".bold().fg(accent),
                " jump".dark_gray(),
            ]),
        };
        frame.render_widget(footer.centered(), help);

        self.pointer.render(frame, self.theme);
    }

    /// Section under the scroll-spy row.
    fn spy(&self) -> Section {
        self.document
            .section_at(self.scroll + SPY_OFFSET)
            .unwrap_or(self.active)
    }

    fn max_scroll(&self) -> usize {
        self.document.max_scroll(usize::from(self.body_height))
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next scheduled animation step.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.particles.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Time until something on screen changes by itself.
    fn poll_timeout(&self) -> Duration {
        let now = self.now_ms;
        let blink = CARET_BLINK_MS - now % CARET_BLINK_MS;
        let wait = [
            self.typewriter
                .next_deadline()
                .map(|due| due.saturating_sub(now)),
            self.particles.next_frame_in(now),
            self.pointer.is_animating().then_some(HOVER_FRAME_MS),
            self.status.as_ref().map(|s| s.until_ms.saturating_sub(now)),
        ]
        .into_iter()
        .flatten()
        .fold(blink, u64::min);
        Duration::from_millis(wait)
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let page = i32::from(self.body_height.saturating_sub(2).max(1)) as isize;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('d')) => self.download_resume(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.scroll_by(1),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.scroll_by(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_by(page),
            (_, KeyCode::PageUp) => self.scroll_by(-page),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.scroll = 0,
            (_, KeyCode::End | KeyCode::Char('G')) => self.scroll = self.max_scroll(),
            (_, KeyCode::Char(c)) => {
                if let Some(section) = c.to_digit(10).and_then(Section::from_number) {
                    self.scroll_to(section);
                }
            }
            _ => {}
        }
    }

    /// Handles pointer events: clicks, wheel scrolling and the pointer trail.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.action_at(x, y) {
                    self.perform(action);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            _ => {}
        }

        self.pointer.on_move(x, y);
        let target = self.hit_map.target_at(x, y);
        self.pointer.on_over(&self.hit_map, target);
    }

    /// Action of the button or link at `(x, y)`, including its labels.
    fn action_at(&self, x: u16, y: u16) -> Option<Action> {
        let target = self.hit_map.target_at(x, y)?;
        let element = self.hit_map.interactive_ancestor(target)?;
        self.hit_map.action(element).cloned()
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::ScrollTo(section) => self.scroll_to(section),
            Action::ToggleTheme => self.toggle_theme(),
            Action::DownloadResume => self.download_resume(),
            Action::OpenUrl(url) => self.open_url(&url),
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    /// Bring `section` to the top of the body.
    fn scroll_to(&mut self, section: Section) {
        if let Some(start) = self.document.section_start(section) {
            self.scroll = start.min(self.max_scroll());
            self.active = section;
            debug!(section = section.id(), line = start, "scrolled to section");
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.particles.set_theme(self.theme);
        info!(theme = %self.theme, "theme toggled");
        self.set_status(format!("{} theme", self.theme.name()));
    }

    fn download_resume(&mut self) {
        match resume::download(&self.resume_path, &self.download_dir, self.profile.name) {
            Ok(dest) => self.set_status(format!("Resume saved to {}", dest.display())),
            Err(err) => {
                warn!(error = %err, "resume download failed");
                self.set_status(format!("Resume download failed: {err}"));
            }
        }
    }

    fn open_url(&mut self, url: &str) {
        match open::that_detached(url) {
            Ok(()) => {
                info!(url, "opened link");
                self.set_status(format!("Opened {url}"));
            }
            Err(err) => {
                warn!(url, error = %err, "failed to open link");
                self.set_status(format!("Could not open {url}"));
            }
        }
    }

    fn set_status(&mut self, text: String) {
        self.status = Some(Status {
            text,
            until_ms: self.now_ms + STATUS_MS,
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
