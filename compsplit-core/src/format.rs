//! Compact rendering of a segmentation
//!
//! Lexical parts are joined with `+`, binding morphemes are attached with
//! `|`: `("tag", "es", "zeit")` renders as `tag|es+zeit`.

use crate::lexicon::LexiconStore;
use crate::segmentation::Segmentation;

/// Separator before a lexical part
pub const LEXICAL_SEPARATOR: char = '+';

/// Separator before a binding morpheme
pub const BINDING_SEPARATOR: char = '|';

/// Renders segmentations using a lexicon's binding morphemes
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    store: &'a LexiconStore,
}

impl<'a> Formatter<'a> {
    /// Create a formatter for the given lexicon
    pub fn new(store: &'a LexiconStore) -> Self {
        Self { store }
    }

    /// Render a segmentation
    pub fn format(&self, segmentation: &Segmentation) -> String {
        let text_len: usize = segmentation.parts().iter().map(String::len).sum();
        let mut rendered = String::with_capacity(text_len + segmentation.len());

        for (index, part) in segmentation.parts().iter().enumerate() {
            if index > 0 {
                rendered.push(if self.store.is_binding(part) {
                    BINDING_SEPARATOR
                } else {
                    LEXICAL_SEPARATOR
                });
            }
            rendered.push_str(part);
        }

        rendered
    }
}
