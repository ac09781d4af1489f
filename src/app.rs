//! Application wiring: one event loop over every animation and input source.
//!
//! There are no timers and no threads. Each animated subsystem (typing
//! banner, particle field, scroll glide, form phases) exposes its next
//! deadline; the loop sleeps in `event::poll` until the earliest one and
//! feeds the clock forward. Input and resize events interrupt the sleep.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::animate::{advance, PhraseSequence, RevealSet, RevealTarget, TargetKind, TypingConfig, TypingState};
use crate::animate::typing;
use crate::content::Portfolio;
use crate::error::Result;
use crate::fx::{ParticleField, FRAME_MS};
use crate::render::{DiffRenderer, FrameBuffer, TerminalGuard};
use crate::state::{ContactForm, Field, Navigation, Phase, Viewport};
use crate::theme::{ColorRole, Theme, ThemeManager, ThemeMode, ThemePair};
use crate::types::{Attr, Rgba};
use crate::view::compose::{content_text_width, MARGIN};
use crate::view::{compose, BlockKind, Document, SectionId};

/// Header and footer each take one terminal row.
const CHROME_ROWS: u16 = 2;

/// Glide animation cadence.
const GLIDE_MS: u64 = 33;

/// Idle poll ceiling when nothing is animating.
const IDLE_MS: u64 = 500;

/// Everything the binary resolves before the terminal is touched.
pub struct Options {
    pub portfolio: Portfolio,
    pub theme: ThemePair,
    pub mode: ThemeMode,
    pub typing: TypingConfig,
    /// Particle preset name; `None` disables the layer.
    pub effect: Option<String>,
    pub seed: u64,
}

pub struct App {
    portfolio: Portfolio,
    themes: ThemeManager,

    doc: Document,
    nav: Navigation,
    viewport: Viewport,
    reveal: RevealSet,

    phrases: PhraseSequence,
    typing_cfg: TypingConfig,
    typing_state: TypingState,
    typing_due: Instant,
    banner: String,

    form: ContactForm,
    form_active: bool,

    effect: Option<String>,
    fx: Option<ParticleField>,
    fx_due: Instant,
    seed: u64,

    renderer: DiffRenderer,
    width: u16,
    height: u16,
    glide_due: Instant,
    quit: bool,
}

/// Run the portfolio until the user quits.
pub fn run(options: Options) -> Result<()> {
    let title = format!("{} · termfolio", options.portfolio.profile.name);
    let mut guard = TerminalGuard::enter(&title)?;
    let (width, height) = TerminalGuard::size()?;

    let mut app = App::new(options, width, height)?;
    let result = app.event_loop();

    guard.leave()?;
    result
}

impl App {
    pub fn new(options: Options, width: u16, height: u16) -> Result<Self> {
        let phrases = PhraseSequence::new(options.portfolio.phrases.clone())?;
        let doc = compose(&options.portfolio, width);
        let nav = Navigation::new(&doc);
        let viewport = Viewport::new(content_height(height), doc.total_lines);
        let mut reveal = RevealSet::new(reveal_targets(&doc));

        // Whatever is on screen at startup reveals immediately.
        reveal.observe(0, viewport.height(), content_text_width(width));

        let now = Instant::now();
        let fx = options
            .effect
            .as_deref()
            .and_then(|name| ParticleField::create(name, width, height, options.seed));
        if let Some(field) = &fx {
            log::info!("background effect: {}", field.preset_name());
        }

        let typing_state = TypingState::default();
        let banner = typing::rendered(&phrases, &typing_state);

        Ok(Self {
            portfolio: options.portfolio,
            themes: ThemeManager::new(options.theme, options.mode),
            doc,
            nav,
            viewport,
            reveal,
            phrases,
            typing_cfg: options.typing,
            typing_state,
            typing_due: now,
            banner,
            form: ContactForm::new(),
            form_active: false,
            effect: options.effect,
            fx,
            fx_due: now,
            seed: options.seed,
            renderer: DiffRenderer::new(),
            width,
            height,
            glide_due: now,
            quit: false,
        })
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.quit {
            let now = Instant::now();
            self.tick(now);
            self.paint()?;

            let timeout = self
                .next_deadline(now)
                .saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(w, h) => self.resize(w, h),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Advance every subsystem whose deadline has passed.
    fn tick(&mut self, now: Instant) {
        if now >= self.typing_due {
            let step = advance(&self.phrases, &self.typing_cfg, self.typing_state);
            self.typing_state = step.state;
            self.banner = step.rendered;
            self.typing_due = now + step.delay;
        }

        if let Some(fx) = &mut self.fx {
            if now >= self.fx_due {
                fx.step();
                self.fx_due = now + Duration::from_millis(FRAME_MS);
            }
        }

        if self.viewport.gliding() && now >= self.glide_due {
            if self.viewport.tick_glide() {
                self.observe();
            }
            self.glide_due = now + Duration::from_millis(GLIDE_MS);
        }

        self.form.poll(now);
    }

    /// Earliest instant anything needs the loop to wake.
    fn next_deadline(&self, now: Instant) -> Instant {
        let mut due = now + Duration::from_millis(IDLE_MS);
        due = due.min(self.typing_due);
        if self.fx.is_some() {
            due = due.min(self.fx_due);
        }
        if self.viewport.gliding() {
            due = due.min(self.glide_due);
        }
        if let Some(form_due) = self.form.next_due() {
            due = due.min(form_due);
        }
        due
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        if self.form_active {
            self.handle_form_key(key);
        } else {
            self.handle_page_key(key);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.form_active = false,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab => {
                // Two steps forward in a three-field cycle is one step back.
                self.form.next_field();
                self.form.next_field();
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                if self.form.submit(Instant::now()) {
                    log::info!("contact form submitted");
                }
            }
            KeyCode::Char(c) => self.form.input(c),
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let moved = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
                false
            }
            KeyCode::Char('t') => {
                let mode = self.themes.toggle();
                log::debug!("theme mode: {}", mode.label());
                false
            }
            KeyCode::Up | KeyCode::Char('k') => self.viewport.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.viewport.scroll_by(1),
            KeyCode::PageUp => self.viewport.page_up(),
            KeyCode::PageDown => self.viewport.page_down(),
            KeyCode::Home => self.viewport.to_top(),
            KeyCode::End => self.viewport.to_bottom(),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '0' as usize;
                if let Some(id) = self.nav.by_index(idx) {
                    self.jump_to(id);
                }
                false
            }
            KeyCode::Char('n') => {
                if let Some(id) = self.nav.next(self.viewport.offset()) {
                    self.jump_to(id);
                }
                false
            }
            KeyCode::Char('p') => {
                if let Some(id) = self.nav.prev(self.viewport.offset()) {
                    self.jump_to(id);
                }
                false
            }
            KeyCode::Enter => {
                self.form_active = true;
                self.jump_to(SectionId::Contact);
                false
            }
            _ => false,
        };
        if moved {
            self.observe();
        }
    }

    fn jump_to(&mut self, id: SectionId) {
        if let Some(line) = self.nav.target_line(id) {
            self.viewport.glide_to(line);
            self.glide_due = Instant::now();
        }
    }

    fn observe(&mut self) {
        let flipped = self.reveal.observe(
            self.viewport.offset(),
            self.viewport.height(),
            content_text_width(self.width),
        );
        if flipped > 0 {
            log::debug!("{flipped} reveal target(s) latched");
        }
    }

    // =========================================================================
    // Resize
    // =========================================================================

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;

        self.doc = compose(&self.portfolio, width);
        self.nav = Navigation::new(&self.doc);
        self.viewport.resize(content_height(height), self.doc.total_lines);
        self.reveal.rebuild(reveal_targets(&self.doc));
        self.observe();

        match &mut self.fx {
            Some(fx) => fx.resize(width, height),
            None => {
                // A terminal grown past the minimum re-enables the layer.
                self.fx = self
                    .effect
                    .as_deref()
                    .and_then(|name| ParticleField::create(name, width, height, self.seed));
            }
        }

        self.renderer.invalidate();
        log::debug!("resized to {width}x{height}");
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn paint(&mut self) -> Result<()> {
        let theme = self.themes.current().clone();
        let bg = theme.background.resolve();
        let surface = theme.surface.resolve();

        let mut frame = FrameBuffer::new(self.width, self.height);
        frame.fill(bg);

        if let Some(fx) = &self.fx {
            fx.draw(&mut frame, &theme);
        }

        self.paint_content(&mut frame, &theme);
        self.paint_header(&mut frame, &theme, surface);
        self.paint_footer(&mut frame, &theme, surface);

        self.renderer.render(&frame)?;
        Ok(())
    }

    fn paint_content(&self, frame: &mut FrameBuffer, theme: &Theme) {
        let bar_width = content_text_width(self.width);
        for line in self.viewport.visible() {
            let row = 1 + (line - self.viewport.offset()) as u16;
            let Some(block) = self.doc.block_at(line) else {
                continue;
            };
            let local = line - block.start;
            let revealed = self.reveal.line_revealed(line);

            // Skill bar rows carry no composed text; the bar is painted from
            // the latched fill.
            if matches!(block.kind, BlockKind::SkillBar { .. }) && local == 1 {
                if let Some(fill) = self.bar_fill(block.start) {
                    frame.draw_hbar(
                        MARGIN,
                        row,
                        bar_width,
                        fill,
                        theme.role(ColorRole::Primary),
                        theme.role(ColorRole::Border).dim(0.6),
                    );
                }
                continue;
            }

            let mut x = MARGIN;
            for span in &block.lines[local].spans {
                let (color, attrs) = if revealed {
                    (theme.role(span.role), span.attrs)
                } else {
                    (theme.role(ColorRole::Muted).dim(0.4), span.attrs | Attr::DIM)
                };
                x = frame.draw_text(x, row, &span.text, color, attrs);
            }

            if line == self.doc.banner_row {
                // After the composed prompt glyph.
                frame.draw_text(
                    MARGIN + 2,
                    row,
                    &self.banner,
                    theme.role(ColorRole::Accent),
                    Attr::BOLD,
                );
            }
        }

        self.paint_form(frame, theme);
    }

    /// Latched fill for the skill-bar block starting at `start`, if revealed.
    fn bar_fill(&self, start: usize) -> Option<u16> {
        self.reveal
            .targets()
            .iter()
            .find(|t| t.start == start && matches!(t.kind, TargetKind::SkillBar { .. }))
            .filter(|t| t.revealed)
            .and_then(|t| t.fill)
    }

    fn paint_form(&self, frame: &mut FrameBuffer, theme: &Theme) {
        let offset = self.viewport.offset();
        let visible = self.viewport.visible();
        let rows = self.doc.form;
        let value_col = MARGIN + 9; // past the composed "Name     " labels

        for (field, doc_row) in [
            (Field::Name, rows.name),
            (Field::Email, rows.email),
            (Field::Message, rows.message),
        ] {
            if !visible.contains(&doc_row) {
                continue;
            }
            let row = 1 + (doc_row - offset) as u16;
            let focused = self.form_active && self.form.focus() == field && self.form.editing();

            let mut x = frame.draw_text(
                value_col,
                row,
                self.form.value(field),
                theme.role(ColorRole::Text),
                Attr::NONE,
            );
            if focused {
                x = frame.draw_text(x, row, "▏", theme.role(ColorRole::Accent), Attr::BOLD);
            }
            if let Some(err) = self.form.error(field) {
                frame.draw_text(
                    x + 2,
                    row,
                    err,
                    theme.role(ColorRole::Error),
                    Attr::ITALIC,
                );
            }
        }

        if visible.contains(&rows.status) {
            let row = 1 + (rows.status - offset) as u16;
            let (text, role) = match self.form.phase() {
                Phase::Editing if self.form_active => {
                    ("enter to send · tab next field · esc to leave", ColorRole::Muted)
                }
                Phase::Editing => ("press enter to write a message", ColorRole::Muted),
                Phase::Sending { .. } => ("sending…", ColorRole::Accent),
                Phase::Sent { .. } => ("message sent, thank you!", ColorRole::Success),
            };
            frame.draw_text(MARGIN, row, text, theme.role(role), Attr::ITALIC);
        }
    }

    fn paint_header(&self, frame: &mut FrameBuffer, theme: &Theme, surface: Rgba) {
        frame.fill_rect(0, 0, self.width, 1, surface);

        let active = self.nav.active(self.viewport.offset());
        let mut x = frame.draw_text(
            MARGIN,
            0,
            &self.portfolio.profile.name,
            theme.role(ColorRole::Bright),
            Attr::BOLD,
        );
        x = frame.draw_text(x, 0, "  ", theme.role(ColorRole::Muted), Attr::NONE);

        for (i, (id, _)) in self.nav.entries().iter().enumerate() {
            let (role, attrs) = if *id == active {
                (ColorRole::Primary, Attr::BOLD | Attr::UNDERLINE)
            } else {
                (ColorRole::Muted, Attr::NONE)
            };
            let label = format!(" {} {} ", i + 1, id.label());
            x = frame.draw_text(x, 0, &label, theme.role(role), attrs);
        }

        let mode = format!("[{}]", self.themes.mode().label());
        let col = (self.width as usize).saturating_sub(mode.len() + MARGIN as usize) as u16;
        frame.draw_text(col, 0, &mode, theme.role(ColorRole::Secondary), Attr::NONE);
    }

    fn paint_footer(&self, frame: &mut FrameBuffer, theme: &Theme, surface: Rgba) {
        let row = self.height.saturating_sub(1);
        frame.fill_rect(0, row, self.width, 1, surface);

        let hints = if self.form_active {
            "esc leave form · tab field · enter send"
        } else {
            "q quit · t theme · ↑↓ scroll · 1-6/n/p sections · enter contact"
        };
        frame.draw_text(MARGIN, row, hints, theme.role(ColorRole::Muted), Attr::NONE);
    }
}

/// Viewport rows available for content.
fn content_height(height: u16) -> usize {
    height.saturating_sub(CHROME_ROWS).max(1) as usize
}

/// One reveal target per revealing block, in block order.
fn reveal_targets(doc: &Document) -> Vec<RevealTarget> {
    doc.blocks
        .iter()
        .filter_map(|block| match block.kind {
            BlockKind::Chrome => None,
            BlockKind::Reveal => Some(RevealTarget::new(
                TargetKind::Section,
                block.start,
                block.height(),
            )),
            BlockKind::SkillBar { proficiency } => Some(RevealTarget::new(
                TargetKind::SkillBar { proficiency },
                block.start,
                block.height(),
            )),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
