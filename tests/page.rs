//! End-to-end page behavior against a purpose-built content document.

use termfolio::animate::{advance, PhraseSequence, TypingConfig, TypingMode, TypingState};
use termfolio::content::Portfolio;
use termfolio::state::Navigation;
use termfolio::view::{compose, BlockKind, SectionId};

const CONTENT: &str = r#"
phrases = [
    "I write parsers.",
    "I break *fast paths*.",
]

[profile]
name = "Robin Okoye"
title = "Compiler Engineer"
location = "Lagos"
email = "robin@example.dev"
bio = "I turn *undefined behavior* into defined behavior.\nMostly."

[[skills]]
name = "Parsing"
proficiency = 95

[[skills]]
name = "Codegen"
proficiency = 60
note = "LLVM mostly"

[[projects]]
name = "lexo"
tagline = "an incremental lexer"
stack = ["rust"]

[[projects]]
name = "irdump"
tagline = "IR visualizer"
link = "https://example.dev/irdump"

[[resume]]
period = "2021-now"
title = "Senior Engineer"
org = "Tooling Co"
summary = "Own the frontend of a production compiler."

[[socials]]
label = "git"
url = "https://example.dev/robin"

[contact]
heading = "Say hi"
blurb = "I answer *eventually*."
"#;

fn doc() -> Portfolio {
    Portfolio::from_toml(CONTENT).unwrap()
}

#[test]
fn page_has_every_section_in_order() {
    let page = compose(&doc(), 90);
    let nav = Navigation::new(&page);
    let ids: Vec<SectionId> = nav.entries().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, SectionId::ALL);
}

#[test]
fn every_content_item_lands_in_exactly_one_card() {
    let page = compose(&doc(), 90);

    let text_of = |section: SectionId| -> String {
        page.blocks
            .iter()
            .filter(|b| b.section == section)
            .flat_map(|b| b.lines.iter())
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join("\n")
    };

    let skills = text_of(SectionId::Skills);
    assert!(skills.contains("Parsing"));
    assert!(skills.contains("Codegen"));
    assert!(skills.contains("LLVM mostly"));
    // Skill content must not leak into other sections.
    assert!(!text_of(SectionId::Projects).contains("Parsing"));

    let projects = text_of(SectionId::Projects);
    assert!(projects.contains("lexo"));
    assert!(projects.contains("an incremental lexer"));
    assert!(projects.contains("irdump"));
    assert!(projects.contains("https://example.dev/irdump"));
    assert!(!text_of(SectionId::Skills).contains("lexo"));

    let resume = text_of(SectionId::Resume);
    assert!(resume.contains("2021-now"));
    assert!(resume.contains("Senior Engineer"));
    assert!(resume.contains("Tooling Co"));

    let contact = text_of(SectionId::Contact);
    assert!(contact.contains("Say hi"));
    assert!(contact.contains("I answer eventually.")); // markers stripped
    assert!(contact.contains("https://example.dev/robin"));
}

#[test]
fn skill_bars_carry_their_own_proficiency() {
    let page = compose(&doc(), 90);
    let bars: Vec<u8> = page
        .blocks
        .iter()
        .filter_map(|b| match b.kind {
            BlockKind::SkillBar { proficiency } => Some(proficiency),
            _ => None,
        })
        .collect();
    assert_eq!(bars, vec![95, 60]);
}

#[test]
fn bio_emphasis_survives_wrapping() {
    // Narrow enough to force the bio onto several lines.
    let page = compose(&doc(), 40);
    let about: String = page
        .blocks
        .iter()
        .filter(|b| b.section == SectionId::About && b.kind == BlockKind::Reveal)
        .flat_map(|b| b.lines.iter())
        .map(|l| l.text())
        .collect::<Vec<_>>()
        .join(" ");
    assert!(about.contains("undefined behavior"));
    assert!(!about.contains('*'));
}

#[test]
fn banner_types_both_phrases_without_markers() {
    let seq = PhraseSequence::new(doc().phrases).unwrap();
    let cfg = TypingConfig::default();
    let mut state = TypingState::default();
    let mut seen = Vec::new();

    for _ in 0..400 {
        let step = advance(&seq, &cfg, state);
        state = step.state;
        if state.mode == TypingMode::Typing && state.cursor == seq.grapheme_len(state.phrase) {
            seen.push(step.rendered);
        }
    }

    assert!(seen.iter().any(|s| s.starts_with("I write parsers.")));
    assert!(seen.iter().any(|s| s.starts_with("I break fast paths.")));
    assert!(seen.iter().all(|s| !s.contains('*')));
}

#[test]
fn form_rows_follow_the_contact_section() {
    let page = compose(&doc(), 90);
    let contact_start = page.section_start(SectionId::Contact);
    assert!(page.form.name > contact_start);
    assert!(page.form.name < page.form.email);
    assert!(page.form.email < page.form.message);
    assert!(page.form.message < page.form.status);
    assert!(page.form.status < page.total_lines);
}
