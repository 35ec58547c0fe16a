//! Character readings.
//!
//! The engine works on syllables; which syllables a character can be read as
//! comes from an outside romanization lookup. [`ReadingSource`] is that seam,
//! and [`ReadingTable`] is a plain in-memory implementation.

use std::collections::HashMap;

/// Supplies the pinyin readings (heteronyms included) of a character.
pub trait ReadingSource {
    /// All readings of `ch`, most common first. Empty when unknown.
    fn readings(&self, ch: char) -> Vec<String>;
}

/// In-memory reading lookup.
#[derive(Debug, Clone, Default)]
pub struct ReadingTable {
    entries: HashMap<char, Vec<String>>,
}

impl ReadingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reading for `ch`; readings keep insertion order.
    pub fn insert(&mut self, ch: char, reading: impl Into<String>) {
        self.entries.entry(ch).or_default().push(reading.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReadingSource for ReadingTable {
    fn readings(&self, ch: char) -> Vec<String> {
        self.entries.get(&ch).cloned().unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for ReadingTable {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let mut table = ReadingTable::new();
        for (ch, reading) in iter {
            table.insert(ch, reading);
        }
        table
    }
}
