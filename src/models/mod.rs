use serde::{Deserialize, Serialize};

/// Number of doors on the calendar grid.
pub(crate) const DAYS: i64 = 30;

/// One "miracle" record.
///
/// Wire names match the static `quran_miracles.json` file; user entries are
/// persisted with the same shape so both lists share one codec.
/// Every field defaults so that a malformed record surfaces as blank fields
/// instead of failing the whole list.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Entry {
    #[serde(default)]
    pub id: i64,

    #[serde(rename = "title_ar", default)]
    pub title_native: String,

    #[serde(rename = "title_en", default)]
    pub title_translated: String,

    #[serde(rename = "ayah_ar", default)]
    pub verse_native: String,

    #[serde(rename = "ayah_en", default)]
    pub verse_translated: String,

    #[serde(default)]
    pub reference: String,

    #[serde(default)]
    pub description: String,
}

impl Entry {
    /// Whether this entry can bind to a door on the grid.
    pub fn is_slot_day(&self) -> bool {
        (1..=DAYS).contains(&self.id)
    }

    pub fn day_label(&self) -> String {
        format!("Day {}", self.id)
    }

    /// Translated verse followed by its citation, e.g. `"... (An-Nahl 16:68)"`.
    pub fn verse_with_reference(&self) -> String {
        let reference = self.reference.trim();
        if reference.is_empty() {
            return self.verse_translated.clone();
        }
        format!("{} ({})", self.verse_translated, reference)
    }
}

/// Field values collected by the entry form, before an id is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EntryDraft {
    pub title_native: String,
    pub title_translated: String,
    pub verse_native: String,
    pub verse_translated: String,
    pub reference: String,
    pub description: String,
}

impl EntryDraft {
    pub fn into_entry(self, id: i64) -> Entry {
        Entry {
            id,
            title_native: self.title_native,
            title_translated: self.title_translated,
            verse_native: self.verse_native,
            verse_translated: self.verse_translated,
            reference: self.reference,
            description: self.description,
        }
    }
}
