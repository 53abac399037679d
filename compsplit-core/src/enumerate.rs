//! Exhaustive enumeration of candidate segmentations
//!
//! Starting at the front of the word, every left slice of the remaining
//! text is tried, shortest first. A slice that is a binding morpheme or a
//! lexicon word opens a new level for the rest of the word. Otherwise only
//! the first negative morpheme is consulted: if `slice + morpheme` is a
//! lexicon word the slice is accepted as well. The slice that reaches the
//! end of the word always closes a segmentation, recognized or not, so
//! every non-empty word has at least the one-part candidate.
//!
//! The search is a depth-first walk kept on an explicit stack, which makes
//! [`Splits`] a lazy iterator. Candidates come out in the same order as the
//! recursive formulation: for each level, shorter left slices first, and
//! all continuations of a slice before the next longer slice.

use crate::lexicon::LexiconStore;
use crate::segmentation::Segmentation;

/// Produces every structurally valid segmentation of a word
#[derive(Debug, Clone, Copy)]
pub struct SegmentEnumerator<'a> {
    store: &'a LexiconStore,
}

impl<'a> SegmentEnumerator<'a> {
    /// Create an enumerator over the given lexicon
    pub fn new(store: &'a LexiconStore) -> Self {
        Self { store }
    }

    /// Lazily enumerate the segmentations of an already lowercased word
    pub fn enumerate<'w>(&self, word: &'w str) -> Splits<'a, 'w> {
        Splits {
            store: self.store,
            word,
            frames: vec![Frame { start: 0, end: 0 }],
        }
    }
}

/// One open level of the search: the part starting at `start` was last
/// tried up to byte `end`
#[derive(Debug, Clone, Copy)]
struct Frame {
    start: usize,
    end: usize,
}

/// Lazy sequence of segmentations returned by [`SegmentEnumerator::enumerate`]
#[derive(Debug, Clone)]
pub struct Splits<'a, 'w> {
    store: &'a LexiconStore,
    word: &'w str,
    frames: Vec<Frame>,
}

impl Splits<'_, '_> {
    fn recognized(&self, slice: &str) -> bool {
        if self.store.is_binding(slice) || self.store.contains(slice) {
            return true;
        }
        // Only the first negative morpheme is ever consulted.
        self.store
            .negative_morphemes()
            .first()
            .is_some_and(|nm| self.store.contains(&format!("{slice}{nm}")))
    }

    fn current(&self) -> Segmentation {
        Segmentation::new(
            self.frames
                .iter()
                .map(|frame| &self.word[frame.start..frame.end]),
        )
    }
}

impl Iterator for Splits<'_, '_> {
    type Item = Segmentation;

    fn next(&mut self) -> Option<Segmentation> {
        while let Some(frame) = self.frames.last_mut() {
            let Some(ch) = self.word[frame.end..].chars().next() else {
                self.frames.pop();
                continue;
            };
            frame.end += ch.len_utf8();
            let Frame { start, end } = *frame;

            if end == self.word.len() {
                return Some(self.current());
            }

            if self.recognized(&self.word[start..end]) {
                self.frames.push(Frame { start: end, end });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageProfile;

    fn store(binding: &[&str], negative: &[&str], words: &[(&str, u64)]) -> LexiconStore {
        let profile = LanguageProfile::new("xx", binding.to_vec(), negative.to_vec());
        LexiconStore::builder(&profile)
            .words(words.iter().copied())
            .build()
    }

    fn collect(store: &LexiconStore, word: &str) -> Vec<Vec<String>> {
        SegmentEnumerator::new(store)
            .enumerate(word)
            .map(Segmentation::into_parts)
            .collect()
    }

    #[test]
    fn test_krankenhaus() {
        let store = store(&["s", "en"], &[], &[("kranken", 50), ("haus", 80)]);
        assert_eq!(
            collect(&store, "krankenhaus"),
            vec![vec!["kranken", "haus"], vec!["krankenhaus"]]
        );
    }

    #[test]
    fn test_binding_morpheme_opens_level() {
        let store = store(&["s", "en"], &[], &[("arbeit", 10), ("zeit", 20)]);
        assert_eq!(
            collect(&store, "arbeitszeit"),
            vec![
                vec!["arbeit", "s", "zeit"],
                vec!["arbeit", "szeit"],
                vec!["arbeitszeit"],
            ]
        );
    }

    #[test]
    fn test_unknown_word_yields_whole_word() {
        let store = store(&["s"], &[], &[("haus", 80)]);
        assert_eq!(collect(&store, "qwrtz"), vec![vec!["qwrtz"]]);
    }

    #[test]
    fn test_empty_word_yields_nothing() {
        let store = store(&["s"], &[], &[]);
        assert!(collect(&store, "").is_empty());
    }

    #[test]
    fn test_negative_morpheme_completes_stem() {
        let store = store(&[], &["e"], &[("schule", 10), ("haus", 80)]);
        assert_eq!(
            collect(&store, "schulhaus"),
            vec![vec!["schul", "haus"], vec!["schulhaus"]]
        );
    }

    #[test]
    fn test_only_first_negative_morpheme_is_consulted() {
        let store = store(&[], &["n", "e"], &[("schule", 10), ("haus", 80)]);
        assert_eq!(collect(&store, "schulhaus"), vec![vec!["schulhaus"]]);
    }

    #[test]
    fn test_multibyte_characters() {
        let store = store(&["ó"], &[], &[("kéző", 5), ("könyv", 9)]);
        let splits = collect(&store, "kézőókönyv");
        assert!(splits.contains(&vec![
            "kéző".to_string(),
            "ó".to_string(),
            "könyv".to_string()
        ]));
        for parts in &splits {
            assert_eq!(parts.concat(), "kézőókönyv");
        }
    }

    #[test]
    fn test_enumeration_is_lazy_and_restartable() {
        let store = store(&["s", "en"], &[], &[("kranken", 50), ("haus", 80)]);
        let enumerator = SegmentEnumerator::new(&store);

        let first = enumerator.enumerate("krankenhaus").next().unwrap();
        assert_eq!(first.parts(), ["kranken", "haus"]);
        assert_eq!(enumerator.enumerate("krankenhaus").count(), 2);
    }
}
