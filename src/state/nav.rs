//! Section navigation: which section the viewport is in, and jump targets.

use crate::view::{Document, SectionId};

/// One nav entry per section, in document order.
#[derive(Debug, Clone)]
pub struct Navigation {
    entries: Vec<(SectionId, usize)>,
}

impl Navigation {
    pub fn new(doc: &Document) -> Self {
        let entries = SectionId::ALL
            .iter()
            .map(|&id| (id, doc.section_start(id)))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(SectionId, usize)] {
        &self.entries
    }

    /// The section the viewport top currently sits in: the last entry whose
    /// start line is at or above `offset`.
    pub fn active(&self, offset: usize) -> SectionId {
        self.entries
            .iter()
            .rev()
            .find(|(_, start)| *start <= offset)
            .or(self.entries.first())
            .map(|(id, _)| *id)
            .unwrap_or(SectionId::Home)
    }

    /// Start line for a jump to `id`.
    pub fn target_line(&self, id: SectionId) -> Option<usize> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, start)| *start)
    }

    /// Section following the active one, stopping at the last.
    pub fn next(&self, offset: usize) -> Option<SectionId> {
        let active = self.active(offset);
        let pos = self.entries.iter().position(|(id, _)| *id == active)?;
        self.entries.get(pos + 1).map(|(id, _)| *id)
    }

    /// Section preceding the active one, stopping at the first.
    pub fn prev(&self, offset: usize) -> Option<SectionId> {
        let active = self.active(offset);
        let pos = self.entries.iter().position(|(id, _)| *id == active)?;
        pos.checked_sub(1).and_then(|p| self.entries.get(p)).map(|(id, _)| *id)
    }

    /// The section bound to digit key `n` (1-based, document order).
    pub fn by_index(&self, n: usize) -> Option<SectionId> {
        n.checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|(id, _)| *id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::view::compose;

    fn nav() -> Navigation {
        let doc = compose(&Portfolio::embedded(), 100);
        Navigation::new(&doc)
    }

    #[test]
    fn test_all_sections_present_in_order() {
        let nav = nav();
        let ids: Vec<SectionId> = nav.entries().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, SectionId::ALL);
        // Start lines strictly increase.
        let starts: Vec<usize> = nav.entries().iter().map(|(_, s)| *s).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_active_tracks_offset() {
        let nav = nav();
        assert_eq!(nav.active(0), SectionId::Home);

        let about = nav.target_line(SectionId::About).unwrap();
        assert_eq!(nav.active(about), SectionId::About);
        assert_eq!(nav.active(about - 1), SectionId::Home);
        assert_eq!(nav.active(usize::MAX), SectionId::Contact);
    }

    #[test]
    fn test_next_prev_stop_at_ends() {
        let nav = nav();
        assert_eq!(nav.prev(0), None);
        assert_eq!(nav.next(0), Some(SectionId::About));

        let last = nav.target_line(SectionId::Contact).unwrap();
        assert_eq!(nav.next(last), None);
        assert_eq!(nav.prev(last), Some(SectionId::Resume));
    }

    #[test]
    fn test_digit_bindings() {
        let nav = nav();
        assert_eq!(nav.by_index(1), Some(SectionId::Home));
        assert_eq!(nav.by_index(6), Some(SectionId::Contact));
        assert_eq!(nav.by_index(0), None);
        assert_eq!(nav.by_index(7), None);
    }
}
