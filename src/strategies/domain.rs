use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted strategies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrategyId(pub String);

/// Identifier wrapper for sections within a strategy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SectionId(pub String);

/// Identifier wrapper for checklist items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Letter outcome produced by the grading ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    #[serde(rename = "NO TRADE")]
    NoTrade,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::NoTrade => "NO TRADE",
        }
    }
}

/// Minimum score required for each letter grade, keyed the way the editor
/// stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeThresholds {
    #[serde(rename = "A+")]
    pub a_plus: i32,
    #[serde(rename = "A")]
    pub a: i32,
    #[serde(rename = "B")]
    pub b: i32,
    #[serde(rename = "C")]
    pub c: i32,
}

impl GradeThresholds {
    /// Minimum score for `grade`; `NoTrade` is the floor and has none.
    pub fn min_for(&self, grade: Grade) -> Option<i32> {
        match grade {
            Grade::APlus => Some(self.a_plus),
            Grade::A => Some(self.a),
            Grade::B => Some(self.b),
            Grade::C => Some(self.c),
            Grade::NoTrade => None,
        }
    }
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a_plus: 90,
            a: 80,
            b: 70,
            c: 60,
        }
    }
}

/// Display text per grade, shown next to the live score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeMessages {
    #[serde(rename = "A+")]
    pub a_plus: String,
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "NO TRADE")]
    pub no_trade: String,
}

impl GradeMessages {
    pub fn message_for(&self, grade: Grade) -> &str {
        match grade {
            Grade::APlus => &self.a_plus,
            Grade::A => &self.a,
            Grade::B => &self.b,
            Grade::C => &self.c,
            Grade::NoTrade => &self.no_trade,
        }
    }
}

impl Default for GradeMessages {
    fn default() -> Self {
        Self {
            a_plus: "Perfect!".to_string(),
            a: "Great".to_string(),
            b: "Good".to_string(),
            c: "Mediocre".to_string(),
            no_trade: "Avoid".to_string(),
        }
    }
}

/// One choice within a radio group, carrying its own point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub points: i32,
}

/// Checkbox/radio discriminant with the variant-specific payload. Serialized
/// flat into the item row under a `type` tag so stored definitions never
/// carry an unused `options` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Checkbox { points: i32 },
    Radio { options: Vec<ChoiceOption> },
}

/// A single scoring condition inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    #[serde(default)]
    pub order: i32,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// A titled grouping of items. Owned by exactly one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A named, reusable scored checklist definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub id: StrategyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub grade_thresholds: GradeThresholds,
    pub grade_messages: GradeMessages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Strategy {
    pub fn overview(&self) -> StrategyOverview {
        StrategyOverview {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing row for the strategy index view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyOverview {
    pub id: StrategyId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Client-submitted shape for create/update: everything the editor owns,
/// minus the server-assigned identity and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub grade_thresholds: GradeThresholds,
    #[serde(default)]
    pub grade_messages: GradeMessages,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl StrategyDraft {
    pub fn into_strategy(self, id: StrategyId, created_at: Option<DateTime<Utc>>) -> Strategy {
        Strategy {
            id,
            name: self.name,
            description: self.description,
            grade_thresholds: self.grade_thresholds,
            grade_messages: self.grade_messages,
            created_at,
            sections: self.sections,
        }
    }
}

/// Value recorded for one item in a scoring session: checkboxes store a
/// flag, radio groups store the chosen option label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    Checked(bool),
    Choice(String),
}

impl SelectionValue {
    /// Truthiness the way the scoring view treats it: a set flag, or any
    /// non-empty label.
    pub fn is_truthy(&self) -> bool {
        match self {
            SelectionValue::Checked(flag) => *flag,
            SelectionValue::Choice(label) => !label.is_empty(),
        }
    }
}

/// Ephemeral per-session record of which items/options the user activated.
/// Starts empty, lives only for the scoring session, and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections {
    entries: BTreeMap<ItemId, SelectionValue>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a checkbox-style selection, treating any truthy prior value as
    /// checked.
    pub fn toggle(&mut self, item: &ItemId) {
        let checked = self
            .entries
            .get(item)
            .map(SelectionValue::is_truthy)
            .unwrap_or(false);
        self.entries
            .insert(item.clone(), SelectionValue::Checked(!checked));
    }

    /// Record the chosen option label for a radio item.
    pub fn choose(&mut self, item: &ItemId, label: impl Into<String>) {
        self.entries
            .insert(item.clone(), SelectionValue::Choice(label.into()));
    }

    /// Reset the session back to its initial empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, item: &ItemId) -> Option<&SelectionValue> {
        self.entries.get(item)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
