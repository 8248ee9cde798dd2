use super::super::domain::{Item, ItemKind, Section, SelectionValue, Selections};

/// Best achievable contribution for a single item. Penalty weights never
/// raise the ceiling: a checkbox with non-positive points and a radio group
/// with no positive option both contribute 0.
pub(crate) fn item_ceiling(item: &Item) -> i32 {
    match &item.kind {
        ItemKind::Checkbox { points } => (*points).max(0),
        ItemKind::Radio { options } => options
            .iter()
            .fold(0, |best, option| best.max(option.points)),
    }
}

/// Live contribution for a single item. Sign is preserved here: penalties
/// subtract even though they never count toward the ceiling. Stale
/// references (unknown item id, removed option label) contribute 0.
pub(crate) fn item_points(item: &Item, selections: &Selections) -> i32 {
    let value = match selections.get(&item.id) {
        Some(value) => value,
        None => return 0,
    };

    match &item.kind {
        ItemKind::Checkbox { points } => {
            if value.is_truthy() {
                *points
            } else {
                0
            }
        }
        ItemKind::Radio { options } => match value {
            SelectionValue::Choice(label) => options
                .iter()
                .find(|option| option.label == *label)
                .map(|option| option.points)
                .unwrap_or(0),
            SelectionValue::Checked(_) => 0,
        },
    }
}

/// Maximum achievable score across `sections`: the fixed denominator the
/// strategy author tunes to exactly 100. Weights arrive from clients
/// unchecked; the total saturates at the i32 bounds instead of wrapping.
pub fn max_score(sections: &[Section]) -> i32 {
    sections
        .iter()
        .flat_map(|section| section.items.iter())
        .map(item_ceiling)
        .fold(0, i32::saturating_add)
}

/// Current score across `sections` for the session's selections. Not
/// clamped: penalties can push it negative and stacked bonuses past 100,
/// saturating at the i32 bounds.
pub fn live_score(sections: &[Section], selections: &Selections) -> i32 {
    sections
        .iter()
        .flat_map(|section| section.items.iter())
        .map(|item| item_points(item, selections))
        .fold(0, i32::saturating_add)
}
