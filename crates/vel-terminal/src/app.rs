//! Terminal run loop for the VEL console.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::RngCore;
use rand_pcg::Pcg64;
use tracing::{debug, info};
use vel_core::content::FAQ;
use vel_core::{Archive, Clock, Fired, LocalClock, Section};

use crate::color::ColorMode;
use crate::config::VelConfig;
use crate::direct::{CellBuffer, DiffRenderer};
use crate::error::VelError;
use crate::input::{Action, InputHandler};
use crate::layout::Layout;
use crate::panels::{self, faq, Frame};
use crate::theme::Theme;

/// Console entries skipped per `PageUp`/`PageDown`.
pub const SCROLL_PAGE: usize = 10;

/// Terminal abstraction for testability.
pub trait Terminal {
    /// Enter raw mode and alternate screen.
    fn enter(&mut self) -> Result<(), VelError>;
    /// Leave alternate screen and raw mode.
    fn leave(&mut self) -> Result<(), VelError>;
    fn size(&self) -> Result<(u16, u16), VelError>;
    fn poll(&self, timeout: Duration) -> Result<bool, VelError>;
    fn read_event(&self) -> Result<CrosstermEvent, VelError>;
    fn flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), VelError>;
    fn enable_mouse(&mut self) -> Result<(), VelError>;
    fn disable_mouse(&mut self) -> Result<(), VelError>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn enter(&mut self) -> Result<(), VelError> {
        (**self).enter()
    }
    fn leave(&mut self) -> Result<(), VelError> {
        (**self).leave()
    }
    fn size(&self) -> Result<(u16, u16), VelError> {
        (**self).size()
    }
    fn poll(&self, timeout: Duration) -> Result<bool, VelError> {
        (**self).poll(timeout)
    }
    fn read_event(&self) -> Result<CrosstermEvent, VelError> {
        (**self).read_event()
    }
    fn flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), VelError> {
        (**self).flush(buffer, renderer)
    }
    fn enable_mouse(&mut self) -> Result<(), VelError> {
        (**self).enable_mouse()
    }
    fn disable_mouse(&mut self) -> Result<(), VelError> {
        (**self).disable_mouse()
    }
}

/// Raw terminal operations (crossterm calls). This layer exists purely for
/// testability.
pub trait TerminalBackend {
    fn enable_raw_mode(&mut self) -> Result<(), VelError>;
    fn disable_raw_mode(&mut self) -> Result<(), VelError>;
    fn enter_alternate_screen(&mut self) -> Result<(), VelError>;
    fn leave_alternate_screen(&mut self) -> Result<(), VelError>;
    fn hide_cursor(&mut self) -> Result<(), VelError>;
    fn show_cursor(&mut self) -> Result<(), VelError>;
    fn size(&self) -> Result<(u16, u16), VelError>;
    fn poll(&self, timeout: Duration) -> Result<bool, VelError>;
    fn read_event(&self) -> Result<CrosstermEvent, VelError>;
    fn write_flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), VelError>;
    fn enable_mouse_capture(&mut self) -> Result<(), VelError>;
    fn disable_mouse_capture(&mut self) -> Result<(), VelError>;
}

/// Real crossterm backend on stdout.
pub struct CrosstermBackend {
    stdout: Stdout,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enable_raw_mode(&mut self) -> Result<(), VelError> {
        enable_raw_mode()?;
        Ok(())
    }
    fn disable_raw_mode(&mut self) -> Result<(), VelError> {
        let _ = disable_raw_mode();
        Ok(())
    }
    fn enter_alternate_screen(&mut self) -> Result<(), VelError> {
        execute!(self.stdout, EnterAlternateScreen)?;
        Ok(())
    }
    fn leave_alternate_screen(&mut self) -> Result<(), VelError> {
        let _ = execute!(self.stdout, LeaveAlternateScreen);
        Ok(())
    }
    fn hide_cursor(&mut self) -> Result<(), VelError> {
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }
    fn show_cursor(&mut self) -> Result<(), VelError> {
        let _ = execute!(self.stdout, cursor::Show);
        Ok(())
    }
    fn size(&self) -> Result<(u16, u16), VelError> {
        Ok(crossterm::terminal::size()?)
    }
    fn poll(&self, timeout: Duration) -> Result<bool, VelError> {
        Ok(event::poll(timeout)?)
    }
    fn read_event(&self) -> Result<CrosstermEvent, VelError> {
        Ok(event::read()?)
    }
    fn write_flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), VelError> {
        renderer.flush(buffer, &mut self.stdout)?;
        self.stdout.flush()?;
        Ok(())
    }
    fn enable_mouse_capture(&mut self) -> Result<(), VelError> {
        execute!(self.stdout, event::EnableMouseCapture)?;
        Ok(())
    }
    fn disable_mouse_capture(&mut self) -> Result<(), VelError> {
        let _ = execute!(self.stdout, event::DisableMouseCapture);
        Ok(())
    }
}

/// Backend over any writer with scripted input, for running the loop
/// without a TTY.
#[allow(clippy::struct_excessive_bools)]
pub struct TestableBackend<W: Write> {
    writer: W,
    size: (u16, u16),
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
    mouse_captured: bool,
    events: std::cell::RefCell<std::collections::VecDeque<CrosstermEvent>>,
    poll_results: std::cell::RefCell<std::collections::VecDeque<bool>>,
}

impl<W: Write> TestableBackend<W> {
    pub fn new(writer: W, width: u16, height: u16) -> Self {
        Self {
            writer,
            size: (width, height),
            raw_mode: false,
            alternate_screen: false,
            cursor_hidden: false,
            mouse_captured: false,
            events: std::cell::RefCell::new(std::collections::VecDeque::new()),
            poll_results: std::cell::RefCell::new(std::collections::VecDeque::new()),
        }
    }

    /// Queue events to be returned by `read_event`.
    pub fn with_events(self, events: Vec<CrosstermEvent>) -> Self {
        *self.events.borrow_mut() = events.into_iter().collect();
        self
    }

    /// Queue poll results; an empty queue polls `false`.
    pub fn with_polls(self, polls: Vec<bool>) -> Self {
        *self.poll_results.borrow_mut() = polls.into_iter().collect();
        self
    }

    pub const fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub const fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub const fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    pub const fn is_mouse_captured(&self) -> bool {
        self.mouse_captured
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TerminalBackend for TestableBackend<W> {
    fn enable_raw_mode(&mut self) -> Result<(), VelError> {
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<(), VelError> {
        self.raw_mode = false;
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<(), VelError> {
        self.alternate_screen = true;
        execute!(self.writer, EnterAlternateScreen)?;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<(), VelError> {
        self.alternate_screen = false;
        let _ = execute!(self.writer, LeaveAlternateScreen);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), VelError> {
        self.cursor_hidden = true;
        execute!(self.writer, cursor::Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), VelError> {
        self.cursor_hidden = false;
        let _ = execute!(self.writer, cursor::Show);
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16), VelError> {
        Ok(self.size)
    }

    fn poll(&self, _timeout: Duration) -> Result<bool, VelError> {
        Ok(self.poll_results.borrow_mut().pop_front().unwrap_or(false))
    }

    fn read_event(&self) -> Result<CrosstermEvent, VelError> {
        self.events
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| VelError::Io(io::Error::new(io::ErrorKind::WouldBlock, "no events")))
    }

    fn write_flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), VelError> {
        renderer.flush(buffer, &mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn enable_mouse_capture(&mut self) -> Result<(), VelError> {
        self.mouse_captured = true;
        execute!(self.writer, event::EnableMouseCapture)?;
        Ok(())
    }

    fn disable_mouse_capture(&mut self) -> Result<(), VelError> {
        self.mouse_captured = false;
        let _ = execute!(self.writer, event::DisableMouseCapture);
        Ok(())
    }
}

/// [`Terminal`] over a [`TerminalBackend`].
pub struct GenericTerminal<B: TerminalBackend> {
    backend: B,
}

impl<B: TerminalBackend> GenericTerminal<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: TerminalBackend> Terminal for GenericTerminal<B> {
    fn enter(&mut self) -> Result<(), VelError> {
        self.backend.enable_raw_mode()?;
        self.backend.enter_alternate_screen()?;
        self.backend.hide_cursor()?;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), VelError> {
        self.backend.show_cursor()?;
        self.backend.leave_alternate_screen()?;
        self.backend.disable_raw_mode()?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16), VelError> {
        self.backend.size()
    }

    fn poll(&self, timeout: Duration) -> Result<bool, VelError> {
        self.backend.poll(timeout)
    }

    fn read_event(&self) -> Result<CrosstermEvent, VelError> {
        self.backend.read_event()
    }

    fn flush(
        &mut self,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), VelError> {
        self.backend.write_flush(buffer, renderer)
    }

    fn enable_mouse(&mut self) -> Result<(), VelError> {
        self.backend.enable_mouse_capture()
    }

    fn disable_mouse(&mut self) -> Result<(), VelError> {
        self.backend.disable_mouse_capture()
    }
}

/// Convenience alias for crossterm-backed terminal.
pub type CrosstermTerminal = GenericTerminal<CrosstermBackend>;

/// Run-loop settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Longest wait for input between frames.
    pub tick_rate_ms: u64,
    pub enable_mouse: bool,
    /// `None` detects from the environment.
    pub color_mode: Option<ColorMode>,
    pub social_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from(&VelConfig::default())
    }
}

impl From<&VelConfig> for AppConfig {
    fn from(config: &VelConfig) -> Self {
        Self {
            tick_rate_ms: config.tick_rate_ms,
            enable_mouse: config.mouse,
            color_mode: config.color_mode,
            social_url: config.social_url.clone(),
        }
    }
}

/// The VEL console: an [`Archive`] plus the terminal-only state around it
/// (FAQ focus, console scroll-back, input bindings).
pub struct VelApp<R = Pcg64, C = LocalClock> {
    archive: Archive<R, C>,
    config: AppConfig,
    theme: Theme,
    input: InputHandler,
    /// Layout of the last drawn frame, for mouse hit-testing.
    layout: Layout,
    faq_focus: usize,
    scroll: usize,
    should_quit: bool,
    frame_count: u64,
}

impl VelApp {
    /// App on local time, seeded from `config.seed` when set.
    pub fn from_config(config: &VelConfig) -> Self {
        let archive =
            Archive::new(config.periods(), config.seed).with_section(config.start_section);
        Self::new(archive, AppConfig::from(config))
    }
}

impl<R: RngCore, C: Clock> VelApp<R, C> {
    pub fn new(archive: Archive<R, C>, config: AppConfig) -> Self {
        Self {
            archive,
            config,
            theme: Theme::default(),
            input: InputHandler::default(),
            layout: Layout::new(0, 0),
            faq_focus: 0,
            scroll: 0,
            should_quit: false,
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_input_handler(mut self, handler: InputHandler) -> Self {
        self.input = handler;
        self
    }

    pub const fn archive(&self) -> &Archive<R, C> {
        &self.archive
    }

    pub fn archive_mut(&mut self) -> &mut Archive<R, C> {
        &mut self.archive
    }

    pub const fn faq_focus(&self) -> usize {
        self.faq_focus
    }

    /// Console entries hidden below the viewport.
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Snapshot of what the next frame shows.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            entries: self.archive.entries(),
            stats: *self.archive.stats(),
            view: *self.archive.view(),
            faq_focus: self.faq_focus,
            scroll: self.scroll,
            social_url: &self.config.social_url,
        }
    }

    pub fn render(&mut self, buffer: &mut CellBuffer) {
        self.layout = panels::draw(&self.frame(), &self.theme, buffer);
    }

    /// One frame as plain text.
    pub fn render_text(&mut self, width: u16, height: u16) -> String {
        let mut buffer = CellBuffer::new(width, height);
        self.render(&mut buffer);
        buffer.to_plain_text()
    }

    /// Advance the archive timers. While scrolled back the viewport stays on
    /// the same entries as new ones arrive.
    pub fn advance(&mut self, elapsed: Duration) -> Fired {
        let fired = self.archive.advance(elapsed);
        if self.scroll > 0 && fired.feed > 0 {
            let added = usize::try_from(fired.feed).unwrap_or(usize::MAX);
            self.scroll = self.scroll.saturating_add(added).min(self.max_scroll());
        }
        fired
    }

    fn max_scroll(&self) -> usize {
        self.archive.entries().len().saturating_sub(1)
    }

    fn scroll_back(&mut self, entries: usize) {
        self.scroll = self.scroll.saturating_add(entries).min(self.max_scroll());
    }

    fn scroll_forward(&mut self, entries: usize) {
        self.scroll = self.scroll.saturating_sub(entries);
    }

    fn select(&mut self, section: Section) {
        if self.archive.view().active() != section {
            debug!(section = %section, "section selected");
        }
        self.archive.select_section(section);
    }

    fn toggle_focused_faq(&mut self) {
        if let Some(entry) = FAQ.get(self.faq_focus) {
            self.archive.toggle_faq(entry.id);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let active = self.archive.view().active();
        let last_faq = FAQ.len() - 1;
        match action {
            Action::Quit => self.quit(),
            Action::Select(section) => self.select(section),
            Action::NextSection => self.select(active.next()),
            Action::PrevSection => self.select(active.prev()),
            Action::Click { x, y } => self.click(x, y),
            Action::Up => match active {
                Section::Faq => self.faq_focus = self.faq_focus.saturating_sub(1),
                Section::Console => self.scroll_back(1),
                Section::Mission => {}
            },
            Action::Down => match active {
                Section::Faq => self.faq_focus = (self.faq_focus + 1).min(last_faq),
                Section::Console => self.scroll_forward(1),
                Section::Mission => {}
            },
            Action::PageUp => match active {
                Section::Faq => self.faq_focus = 0,
                Section::Console => self.scroll_back(SCROLL_PAGE),
                Section::Mission => {}
            },
            Action::PageDown => match active {
                Section::Faq => self.faq_focus = last_faq,
                Section::Console => self.scroll_forward(SCROLL_PAGE),
                Section::Mission => {}
            },
            Action::End => match active {
                Section::Faq => self.faq_focus = last_faq,
                Section::Console => self.scroll = 0,
                Section::Mission => {}
            },
            Action::Activate => {
                if active == Section::Faq {
                    self.toggle_focused_faq();
                }
            }
        }
    }

    fn click(&mut self, x: u16, y: u16) {
        if let Some(section) = self.layout.section_at(x, y) {
            self.select(section);
            return;
        }
        if self.archive.view().active() != Section::Faq {
            return;
        }
        let view = *self.archive.view();
        if let Some(index) = faq::question_at(self.layout.content, &view, self.faq_focus, x, y) {
            self.faq_focus = index;
            self.toggle_focused_faq();
        }
    }

    pub fn handle_event(&mut self, event: &CrosstermEvent) {
        if let Some(action) = self.input.convert(event) {
            self.handle_action(action);
        }
    }

    /// Run on the real terminal (blocking).
    pub fn run(&mut self) -> Result<(), VelError> {
        let terminal = CrosstermTerminal::new(CrosstermBackend::new());
        self.run_with_terminal(terminal)
    }

    /// Run with a custom terminal implementation. This is the testable
    /// entry point. The terminal is restored and the timers stopped even
    /// when entering or the loop fails.
    pub fn run_with_terminal<T: Terminal>(&mut self, mut terminal: T) -> Result<(), VelError> {
        if let Err(err) = terminal.enter() {
            let _ = terminal.leave();
            return Err(err);
        }
        let result = self.session(&mut terminal);

        self.archive.unmount();
        if self.config.enable_mouse {
            let _ = terminal.disable_mouse();
        }
        let restored = terminal.leave();
        info!(frames = self.frame_count, "terminal restored");
        result.and(restored)
    }

    fn session<T: Terminal>(&mut self, terminal: &mut T) -> Result<(), VelError> {
        if self.config.enable_mouse {
            terminal.enable_mouse()?;
        }
        let (width, height) = terminal.size()?;
        let mut buffer = CellBuffer::new(width, height);
        let color_mode = self.config.color_mode.unwrap_or_else(ColorMode::detect);
        let mut renderer = DiffRenderer::with_color_mode(color_mode);
        info!(width, height, color_mode = %color_mode, "session started");

        self.archive.mount();
        self.run_loop(terminal, &mut buffer, &mut renderer)
    }

    fn run_loop<T: Terminal>(
        &mut self,
        terminal: &mut T,
        buffer: &mut CellBuffer,
        renderer: &mut DiffRenderer,
    ) -> Result<(), VelError> {
        let tick = Duration::from_millis(self.config.tick_rate_ms.max(1));
        let mut last = Instant::now();

        loop {
            let now = Instant::now();
            self.advance(now.duration_since(last));
            last = now;

            let (width, height) = terminal.size()?;
            if width != buffer.width() || height != buffer.height() {
                buffer.resize(width, height);
                renderer.reset();
            }

            self.render(buffer);
            terminal.flush(buffer, renderer)?;
            self.frame_count += 1;

            let timeout = self
                .archive
                .until_next_timer()
                .map_or(tick, |due| due.min(tick));
            if terminal.poll(timeout)? {
                let event = terminal.read_event()?;
                self.handle_event(&event);
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use vel_core::{FixedClock, Periods};

    type TestApp = VelApp<Pcg64, FixedClock>;

    fn app() -> TestApp {
        let start = NaiveDate::from_ymd_opt(2025, 10, 22)
            .and_then(|d| d.and_hms_opt(3, 0, 0))
            .unwrap();
        let archive = Archive::with_parts(
            Periods::default(),
            Pcg64::seed_from_u64(7),
            FixedClock::new(start),
        );
        VelApp::new(archive, AppConfig::default())
    }

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    struct MockTerminal {
        size: (u16, u16),
        events: RefCell<VecDeque<CrosstermEvent>>,
        poll_results: RefCell<VecDeque<bool>>,
        entered: bool,
        left: bool,
        mouse_enabled: bool,
        flush_count: u32,
        fail_flush: bool,
    }

    impl MockTerminal {
        fn new(width: u16, height: u16) -> Self {
            Self {
                size: (width, height),
                events: RefCell::new(VecDeque::new()),
                poll_results: RefCell::new(VecDeque::new()),
                entered: false,
                left: false,
                mouse_enabled: false,
                flush_count: 0,
                fail_flush: false,
            }
        }

        fn with_events(self, events: Vec<CrosstermEvent>) -> Self {
            let polls = vec![true; events.len()];
            *self.events.borrow_mut() = events.into();
            *self.poll_results.borrow_mut() = polls.into();
            self
        }
    }

    impl Terminal for MockTerminal {
        fn enter(&mut self) -> Result<(), VelError> {
            self.entered = true;
            Ok(())
        }

        fn leave(&mut self) -> Result<(), VelError> {
            self.left = true;
            Ok(())
        }

        fn size(&self) -> Result<(u16, u16), VelError> {
            Ok(self.size)
        }

        fn poll(&self, _timeout: Duration) -> Result<bool, VelError> {
            Ok(self.poll_results.borrow_mut().pop_front().unwrap_or(false))
        }

        fn read_event(&self) -> Result<CrosstermEvent, VelError> {
            self.events
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| VelError::Io(io::Error::new(io::ErrorKind::Other, "no event")))
        }

        fn flush(
            &mut self,
            _buffer: &mut CellBuffer,
            _renderer: &mut DiffRenderer,
        ) -> Result<(), VelError> {
            if self.fail_flush {
                return Err(VelError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone")));
            }
            self.flush_count += 1;
            Ok(())
        }

        fn enable_mouse(&mut self) -> Result<(), VelError> {
            self.mouse_enabled = true;
            Ok(())
        }

        fn disable_mouse(&mut self) -> Result<(), VelError> {
            self.mouse_enabled = false;
            Ok(())
        }
    }

    #[test]
    fn test_run_with_terminal_quit_on_q() {
        let mut app = app();
        let mut terminal = MockTerminal::new(100, 30).with_events(vec![key(KeyCode::Char('q'))]);
        app.run_with_terminal(&mut terminal).unwrap();
        assert!(app.should_quit());
        assert!(terminal.entered);
        assert!(terminal.left);
        assert_eq!(terminal.flush_count, 1);
        assert!(!app.archive().is_mounted());
    }

    #[test]
    fn test_run_switches_sections_then_quits() {
        let mut app = app();
        let mut terminal = MockTerminal::new(100, 30).with_events(vec![
            key(KeyCode::Char('3')),
            key(KeyCode::Enter),
            key(KeyCode::Char('q')),
        ]);
        app.run_with_terminal(&mut terminal).unwrap();
        assert_eq!(app.archive().view().active(), Section::Faq);
        assert_eq!(app.archive().view().expanded_faq(), Some(1));
        assert_eq!(terminal.flush_count, 3);
    }

    #[test]
    fn test_terminal_restored_on_error() {
        let mut app = app();
        let mut terminal = MockTerminal::new(100, 30);
        terminal.fail_flush = true;
        assert!(app.run_with_terminal(&mut terminal).is_err());
        assert!(terminal.left);
        assert!(!app.archive().is_mounted());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_raw_mode_released_when_enter_fails() {
        let mut app = app();
        let mut terminal = GenericTerminal::new(TestableBackend::new(BrokenPipe, 100, 30));
        assert!(app.run_with_terminal(&mut terminal).is_err());

        let backend = terminal.backend();
        assert!(!backend.is_raw_mode());
        assert!(!backend.is_alternate_screen());
        assert!(!app.archive().is_mounted());
    }

    #[test]
    fn test_mouse_enabled_and_released() {
        let mut app = app();
        app.config.enable_mouse = true;
        let mut terminal = MockTerminal::new(100, 30).with_events(vec![key(KeyCode::Esc)]);
        app.run_with_terminal(&mut terminal).unwrap();
        assert!(!terminal.mouse_enabled);
        assert!(terminal.left);
    }

    #[test]
    fn test_section_cycling() {
        let mut app = app();
        assert_eq!(app.archive().view().active(), Section::Console);
        app.handle_action(Action::NextSection);
        assert_eq!(app.archive().view().active(), Section::Faq);
        app.handle_action(Action::NextSection);
        assert_eq!(app.archive().view().active(), Section::Mission);
        app.handle_action(Action::PrevSection);
        assert_eq!(app.archive().view().active(), Section::Faq);
    }

    #[test]
    fn test_faq_focus_and_toggle() {
        let mut app = app();
        app.handle_action(Action::Select(Section::Faq));
        app.handle_action(Action::Up);
        assert_eq!(app.faq_focus(), 0);
        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        assert_eq!(app.faq_focus(), 2);
        app.handle_action(Action::Activate);
        assert_eq!(app.archive().view().expanded_faq(), Some(3));
        app.handle_action(Action::Activate);
        assert_eq!(app.archive().view().expanded_faq(), None);
        app.handle_action(Action::End);
        assert_eq!(app.faq_focus(), FAQ.len() - 1);
        app.handle_action(Action::Down);
        assert_eq!(app.faq_focus(), FAQ.len() - 1);
    }

    #[test]
    fn test_activate_outside_faq_does_nothing() {
        let mut app = app();
        app.handle_action(Action::Activate);
        assert_eq!(app.archive().view().expanded_faq(), None);
    }

    #[test]
    fn test_console_scroll_clamped() {
        let mut app = app();
        app.handle_action(Action::PageUp);
        assert_eq!(app.scroll(), SCROLL_PAGE);
        for _ in 0..10 {
            app.handle_action(Action::PageUp);
        }
        assert_eq!(app.scroll(), 34);
        app.handle_action(Action::PageDown);
        assert_eq!(app.scroll(), 24);
        app.handle_action(Action::End);
        assert_eq!(app.scroll(), 0);
        app.handle_action(Action::Down);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn test_scrolled_view_pinned_while_feed_grows() {
        let mut app = app();
        app.archive_mut().mount();
        app.handle_action(Action::Up);
        app.handle_action(Action::Up);
        let fired = app.advance(Duration::from_secs(16));
        assert_eq!(fired.feed, 2);
        assert_eq!(app.scroll(), 4);
        assert_eq!(app.archive().entries().len(), 37);
    }

    #[test]
    fn test_live_tail_not_pinned() {
        let mut app = app();
        app.archive_mut().mount();
        app.advance(Duration::from_secs(8));
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn test_click_sidebar_selects_section() {
        let mut app = app();
        app.render_text(100, 30);
        let mission = app.layout.nav_rect(Section::Mission);
        app.handle_event(&click(mission.x + 3, mission.y));
        assert_eq!(app.archive().view().active(), Section::Mission);
    }

    #[test]
    fn test_click_faq_question_toggles() {
        let mut app = app();
        app.handle_action(Action::Select(Section::Faq));
        app.render_text(100, 30);
        let content = app.layout.content;
        // Questions start two rows under the heading.
        app.handle_event(&click(content.x + 4, content.y + 2 + 4));
        assert_eq!(app.faq_focus(), 4);
        assert_eq!(app.archive().view().expanded_faq(), Some(5));

        app.render_text(100, 30);
        app.handle_event(&click(content.x + 4, content.y + 2 + 4));
        assert_eq!(app.archive().view().expanded_faq(), None);
    }

    #[test]
    fn test_click_ignored_outside_targets() {
        let mut app = app();
        app.render_text(100, 30);
        app.handle_event(&click(60, 20));
        assert_eq!(app.archive().view().active(), Section::Console);
        assert_eq!(app.archive().view().expanded_faq(), None);
    }

    #[test]
    fn test_render_text_from_start_section() {
        let config = VelConfig {
            start_section: Section::Mission,
            seed: Some(1),
            ..VelConfig::default()
        };
        let mut app = VelApp::from_config(&config);
        let text = app.render_text(100, 30);
        assert!(text.contains("> MISSION_DIRECTIVE"));
        assert!(!text.contains("> LIVE_CONSOLE"));
    }
}
