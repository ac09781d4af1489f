//! Section renderers and document composition.
//!
//! Pure functions from the view model to a [`Document`] of tagged blocks.
//! Composition runs once at startup (and again on width change); afterwards
//! the typing banner and the reveal latch mutate disjoint parts of the
//! already-composed tree, never this code.

use crate::content::{Portfolio, Project, ResumeEntry, Skill};
use crate::theme::ColorRole;
use crate::types::Attr;

use super::{parse_emphasis, wrap, Line, Span};

/// Left margin for all content, in columns.
pub const MARGIN: u16 = 2;

/// Widest text column we will fill, margin included.
const MAX_TEXT_WIDTH: u16 = 78;

/// Usable text width for a terminal width. Shared with the runtime painter
/// so skill bars line up with composed text.
pub fn content_text_width(width: u16) -> u16 {
    width.min(MAX_TEXT_WIDTH).saturating_sub(MARGIN * 2).max(20)
}

// =============================================================================
// Document model
// =============================================================================

/// Stable section identifiers, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Resume,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Resume => "Résumé",
            SectionId::Contact => "Contact",
        }
    }
}

/// How a block participates in the progressive reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Always visible: headings, spacers, the hero card.
    Chrome,
    /// Fades in once when scrolled into view.
    Reveal,
    /// Fades in at its own threshold and fills its bar exactly once.
    SkillBar { proficiency: u8 },
}

/// A run of composed lines belonging to one section.
#[derive(Debug, Clone)]
pub struct Block {
    pub section: SectionId,
    pub kind: BlockKind,
    /// Absolute first line of this block in the document.
    pub start: usize,
    pub lines: Vec<Line>,
}

impl Block {
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Absolute rows of the lines the app paints over at runtime.
#[derive(Debug, Clone, Copy)]
pub struct FormRows {
    pub name: usize,
    pub email: usize,
    pub message: usize,
    pub status: usize,
}

/// The fully composed page.
#[derive(Debug, Clone)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub total_lines: usize,
    /// Row the typing banner owns.
    pub banner_row: usize,
    pub form: FormRows,
    /// Content width the document was composed for.
    pub width: u16,
}

impl Document {
    /// First line of a section (for nav jumps).
    pub fn section_start(&self, id: SectionId) -> usize {
        self.blocks
            .iter()
            .find(|b| b.section == id)
            .map(|b| b.start)
            .unwrap_or(0)
    }

    /// The block covering an absolute line, if any.
    pub fn block_at(&self, line: usize) -> Option<&Block> {
        // Blocks tile the document in order; binary search by start.
        let idx = self
            .blocks
            .partition_point(|b| b.start <= line)
            .checked_sub(1)?;
        let block = &self.blocks[idx];
        (line < block.start + block.height()).then_some(block)
    }
}

// =============================================================================
// Builder
// =============================================================================

struct Builder {
    blocks: Vec<Block>,
    cursor: usize,
}

impl Builder {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            cursor: 0,
        }
    }

    fn push(&mut self, section: SectionId, kind: BlockKind, lines: Vec<Line>) -> &Block {
        let start = self.cursor;
        self.cursor += lines.len();
        self.blocks.push(Block {
            section,
            kind,
            start,
            lines,
        });
        self.blocks.last().unwrap()
    }

    fn spacer(&mut self, section: SectionId) {
        self.push(section, BlockKind::Chrome, vec![Line::blank()]);
    }

    fn heading(&mut self, section: SectionId, text_width: usize) {
        let label = section.label();
        let mut rule = String::new();
        let used = label.chars().count() + 4;
        for _ in used..text_width {
            rule.push('─');
        }
        self.push(
            section,
            BlockKind::Chrome,
            vec![
                Line::blank(),
                Line::new(vec![
                    Span::new("── ", ColorRole::Border),
                    Span::styled(label, ColorRole::Bright, Attr::BOLD),
                    Span::new(" ", ColorRole::Border),
                    Span::new(rule, ColorRole::Border),
                ]),
                Line::blank(),
            ],
        );
    }
}

// =============================================================================
// Section renderers (pure)
// =============================================================================

fn hero_lines(doc: &Portfolio) -> Vec<Line> {
    let profile = &doc.profile;
    let mut subtitle = vec![Span::styled(&profile.title, ColorRole::Secondary, Attr::BOLD)];
    if !profile.location.is_empty() {
        subtitle.push(Span::new("  ·  ", ColorRole::Muted));
        subtitle.push(Span::new(&profile.location, ColorRole::Muted));
    }
    vec![
        Line::blank(),
        Line::from_span(Span::styled(&profile.name, ColorRole::Bright, Attr::BOLD)),
        Line::new(subtitle),
        Line::blank(),
        // The typing banner owns this row; composed empty on purpose.
        Line::from_span(Span::new("❯ ", ColorRole::Primary)),
        Line::blank(),
    ]
}

fn about_lines(doc: &Portfolio, text_width: usize) -> Vec<Line> {
    let plain = super::strip_emphasis(&doc.profile.bio);
    let wrapped = wrap(&plain, text_width);

    // Re-run emphasis per wrapped line by wrapping the marked text the same
    // way: markers are zero-width for layout, so wrap the stripped text and
    // walk the marked source alongside it.
    emphasized_wrapped(&doc.profile.bio, &wrapped)
}

/// Wrap marked text so emphasis survives line breaks.
///
/// `wrapped` is the already-wrapped stripped text; the marked source is
/// consumed in order and markers re-applied per line.
fn emphasized_wrapped(marked: &str, wrapped: &[String]) -> Vec<Line> {
    let spans = parse_emphasis(marked, ColorRole::Text, ColorRole::Accent);
    // Flatten to (char, role, attrs) and re-cut by the wrapped line widths.
    let mut chars: Vec<(char, ColorRole, Attr)> = Vec::new();
    for span in &spans {
        for ch in span.text.chars() {
            chars.push((ch, span.role, span.attrs));
        }
    }
    // Whitespace (incl. newlines) in the source collapses during wrapping,
    // so match on non-whitespace only.
    let mut stream = chars.into_iter().filter(|(c, _, _)| !c.is_whitespace());

    let mut lines = Vec::with_capacity(wrapped.len());
    for target in wrapped {
        let mut line = Line::blank();
        let mut current: Option<Span> = None;
        for ch in target.chars() {
            let (role, attrs) = if ch.is_whitespace() {
                // Spaces inherit the surrounding base style.
                (ColorRole::Text, Attr::NONE)
            } else {
                match stream.next() {
                    Some((_, role, attrs)) => (role, attrs),
                    None => (ColorRole::Text, Attr::NONE),
                }
            };
            match current.as_mut() {
                Some(span) if span.role == role && span.attrs == attrs => span.text.push(ch),
                _ => {
                    if let Some(done) = current.take() {
                        line.spans.push(done);
                    }
                    current = Some(Span::styled(ch.to_string(), role, attrs));
                }
            }
        }
        if let Some(done) = current.take() {
            line.spans.push(done);
        }
        lines.push(line);
    }
    lines
}

fn skill_lines(skill: &Skill) -> Vec<Line> {
    let mut header = vec![Span::styled(&skill.name, ColorRole::Text, Attr::BOLD)];
    if !skill.note.is_empty() {
        header.push(Span::new("  ", ColorRole::Muted));
        header.push(Span::styled(&skill.note, ColorRole::Muted, Attr::ITALIC));
    }
    header.push(Span::new(format!("  {}%", skill.proficiency), ColorRole::Primary));
    vec![
        Line::new(header),
        // Bar row: painted by the app from the reveal target's fill.
        Line::blank(),
    ]
}

fn project_lines(project: &Project) -> Vec<Line> {
    let mut first = vec![
        Span::new("▸ ", ColorRole::Primary),
        Span::styled(&project.name, ColorRole::Bright, Attr::BOLD),
    ];
    if !project.tagline.is_empty() {
        first.push(Span::new(" — ", ColorRole::Muted));
        first.push(Span::new(&project.tagline, ColorRole::Text));
    }

    let mut second = vec![Span::new("  ", ColorRole::Muted)];
    if !project.stack.is_empty() {
        second.push(Span::new(project.stack.join(" · "), ColorRole::Secondary));
    }
    if !project.link.is_empty() {
        if project.stack.is_empty() {
            second.push(Span::styled(&project.link, ColorRole::Muted, Attr::UNDERLINE));
        } else {
            second.push(Span::new("  ", ColorRole::Muted));
            second.push(Span::styled(&project.link, ColorRole::Muted, Attr::UNDERLINE));
        }
    }
    vec![Line::new(first), Line::new(second)]
}

fn resume_lines(entry: &ResumeEntry, text_width: usize) -> Vec<Line> {
    let mut lines = vec![Line::new(vec![
        Span::new(&entry.period, ColorRole::Accent),
        Span::new("  ", ColorRole::Muted),
        Span::styled(&entry.title, ColorRole::Bright, Attr::BOLD),
        Span::new(" @ ", ColorRole::Muted),
        Span::new(&entry.org, ColorRole::Secondary),
    ])];
    if !entry.summary.is_empty() {
        for wrapped in wrap(&entry.summary, text_width.saturating_sub(2)) {
            lines.push(Line::new(vec![
                Span::new("  ", ColorRole::Muted),
                Span::new(wrapped, ColorRole::Muted),
            ]));
        }
    }
    lines
}

// =============================================================================
// Composition
// =============================================================================

/// Compose the full page for a content width.
pub fn compose(doc: &Portfolio, width: u16) -> Document {
    let text_width = content_text_width(width) as usize;
    let mut b = Builder::new();

    // Hero
    let hero = b.push(SectionId::Home, BlockKind::Chrome, hero_lines(doc));
    let banner_row = hero.start + 4;

    // About
    b.heading(SectionId::About, text_width);
    b.push(SectionId::About, BlockKind::Reveal, about_lines(doc, text_width));

    // Skills: one card per entry
    b.heading(SectionId::Skills, text_width);
    for skill in &doc.skills {
        b.push(
            SectionId::Skills,
            BlockKind::SkillBar {
                proficiency: skill.proficiency,
            },
            skill_lines(skill),
        );
        b.spacer(SectionId::Skills);
    }

    // Projects: one card per entry
    b.heading(SectionId::Projects, text_width);
    for project in &doc.projects {
        b.push(SectionId::Projects, BlockKind::Reveal, project_lines(project));
        b.spacer(SectionId::Projects);
    }

    // Résumé
    b.heading(SectionId::Resume, text_width);
    for entry in &doc.resume {
        b.push(SectionId::Resume, BlockKind::Reveal, resume_lines(entry, text_width));
        b.spacer(SectionId::Resume);
    }

    // Contact: blurb, then the form rows the app paints over.
    b.heading(SectionId::Contact, text_width);
    let mut contact = vec![Line::from_span(Span::styled(
        &doc.contact.heading,
        ColorRole::Bright,
        Attr::BOLD,
    ))];
    if !doc.contact.blurb.is_empty() {
        contact.push(Line::new(parse_emphasis(
            &doc.contact.blurb,
            ColorRole::Muted,
            ColorRole::Accent,
        )));
    }
    contact.push(Line::blank());
    let contact_block_start = b.cursor;
    let blurb_lines = contact.len();
    contact.push(Line::from_span(Span::new("Name     ", ColorRole::Secondary)));
    contact.push(Line::from_span(Span::new("Email    ", ColorRole::Secondary)));
    contact.push(Line::from_span(Span::new("Message  ", ColorRole::Secondary)));
    contact.push(Line::blank());
    contact.push(Line::blank()); // status banner row
    b.push(SectionId::Contact, BlockKind::Reveal, contact);

    let form = FormRows {
        name: contact_block_start + blurb_lines,
        email: contact_block_start + blurb_lines + 1,
        message: contact_block_start + blurb_lines + 2,
        status: contact_block_start + blurb_lines + 4,
    };

    // Footer: social links
    let mut footer = vec![Span::new("  ", ColorRole::Muted)];
    for (i, social) in doc.socials.iter().enumerate() {
        if i > 0 {
            footer.push(Span::new("   ", ColorRole::Muted));
        }
        footer.push(Span::styled(&social.label, ColorRole::Primary, Attr::BOLD));
        footer.push(Span::new(" ", ColorRole::Muted));
        footer.push(Span::styled(&social.url, ColorRole::Muted, Attr::UNDERLINE));
    }
    b.push(
        SectionId::Contact,
        BlockKind::Chrome,
        vec![Line::blank(), Line::new(footer), Line::blank()],
    );

    let total_lines = b.cursor;
    Document {
        blocks: b.blocks,
        total_lines,
        banner_row,
        form,
        width,
    }
}

// =============================================================================
// Tests
// =============================================================================
