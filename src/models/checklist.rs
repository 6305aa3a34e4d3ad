use serde::{Deserialize, Serialize};

/// One packing item inside a category.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ChecklistItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ChecklistCategory {
    #[serde(rename = "category", default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BookingGuide {
    #[serde(rename = "guide", default)]
    pub guide: String,
    #[serde(default)]
    pub platforms: Vec<String>,
}

/// Booking guidance keyed by the fixed transport/hotel/attractions set the
/// model is prompted to fill in.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BookingGuides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<BookingGuide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<BookingGuide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attractions: Option<BookingGuide>,
}

/// The structured payload parsed out of a checklist reply. Absent fields
/// decode to empty containers; no other defaults are invented.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ChecklistData {
    #[serde(rename = "checklist", default)]
    pub categories: Vec<ChecklistCategory>,
    #[serde(default)]
    pub booking_guides: BookingGuides,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl ChecklistData {
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

/// A persisted checklist. Immutable once written, apart from the sibling
/// checked-state file the renderer maintains.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChecklistRecord {
    pub id: String,
    pub destination: String,
    pub duration: String,
    pub timestamp: String,
    pub data: ChecklistData,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChecklistSummary {
    pub id: String,
    pub destination: String,
    pub duration: String,
    pub timestamp: String,
    pub filename: String,
}

/// On-disk shape of the `{id}_checked.json` sibling file.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CheckedState {
    #[serde(default)]
    pub checked: Vec<String>,
}

/// Item ids are derived from the record id plus the item's position in the
/// flattened category/item sequence. Stable because no reordering operation
/// exists once a record is written.
pub fn item_id(checklist_id: &str, index: usize) -> String {
    format!("{}_{}", checklist_id, index)
}
