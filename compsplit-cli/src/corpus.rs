//! Word frequency extraction from MediaWiki XML dumps
//!
//! Only article text between `<text ...>` and `</text>` is read. Markup is
//! stripped line by line with regular expressions: wiki links keep their
//! label, external links keep their description, templates and inline XML
//! elements disappear. The resulting counts use the lexicon file format.

use html_escape::decode_html_entities;
use regex::Regex;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

const TEXT_OPEN: &str = "<text";
const TEXT_CLOSE: &str = "</text>";

/// Lines starting with these are tables, templates, headings or comments
const SKIP_PREFIXES: [&str; 10] = [
    "}}",
    "{{",
    "|",
    "!",
    "<!--",
    "* ",
    "==",
    ":",
    "-->",
    "[[Kategorie:",
];

struct Patterns {
    text_tag: Regex,
    word: Regex,
    xml_element: Regex,
    xml_singleton: Regex,
    external_link: Regex,
    wiki_link: Regex,
    template: Regex,
}

impl Patterns {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            text_tag: Regex::new(r"<text[^>]*>|</text>")?,
            word: Regex::new(r"[A-Za-zäöüÄÖÜßÅåÁáÉéÍíÓóŐőÚúŰű]+")?,
            xml_element: Regex::new(r"<[^>]*?>.*</[^>]*?>")?,
            xml_singleton: Regex::new(r"<[^>/]*?/>")?,
            external_link: Regex::new(r"\[\S+ ([^\]]*?)\]")?,
            wiki_link: Regex::new(r"\[\[(?:[^\]]*?\|)?([^|\]]*?)\]\]")?,
            template: Regex::new(r"\{\{[^}]+?\}\}")?,
        })
    }
}

/// Streaming word counter for wiki dumps
pub struct WikiCounter {
    patterns: Patterns,
    counts: HashMap<String, u64>,
    inside: bool,
}

impl WikiCounter {
    /// Create an empty counter
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: Patterns::new()?,
            counts: HashMap::new(),
            inside: false,
        })
    }

    /// Feed one line of the dump
    pub fn feed(&mut self, line: &str) {
        if self.inside {
            if line.contains(TEXT_CLOSE) {
                self.inside = false;
            }
            self.count_line(line);
        } else if line.contains(TEXT_OPEN) {
            let opener_closed = line.contains(TEXT_CLOSE) || line.trim_end().ends_with("/>");
            self.inside = !opener_closed;
            self.count_line(line);
        }
    }

    /// Feed every line of a reader
    pub fn feed_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.lines() {
            self.feed(&line?);
        }
        Ok(())
    }

    /// Strip markup from a text line; `None` if the line carries no prose
    pub fn clean_line(&self, line: &str) -> Option<String> {
        let patterns = &self.patterns;

        let once = decode_html_entities(line);
        let once = patterns.text_tag.replace_all(&once, "");
        let twice = decode_html_entities(&once);
        let line = twice.trim().replace("'''", "").replace("''", "");

        if SKIP_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            return None;
        }

        let line = patterns.wiki_link.replace_all(&line, "$1");
        let line = patterns.external_link.replace_all(&line, "$1");
        let line = patterns.xml_element.replace_all(&line, "");
        let line = patterns.template.replace_all(&line, "");
        let line = patterns.xml_singleton.replace_all(&line, "");

        (!line.is_empty()).then(|| line.into_owned())
    }

    fn count_line(&mut self, line: &str) {
        let Some(line) = self.clean_line(line) else {
            return;
        };
        for word in self.patterns.word.find_iter(&line) {
            *self.counts.entry(word.as_str().to_lowercase()).or_insert(0) += 1;
        }
    }

    /// Number of distinct words seen
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no word was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts by descending frequency, ties by word
    pub fn into_sorted(self) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = self.counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

/// Write counts as `word<TAB>count` lines
pub fn write_counts<W: Write>(mut writer: W, counts: &[(String, u64)]) -> io::Result<()> {
    for (word, count) in counts {
        writeln!(writer, "{word}\t{count}")?;
    }
    writer.flush()
}
