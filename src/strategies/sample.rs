//! Built-in sample checklist used by the demo command and the seeded
//! development server.

use super::domain::{
    ChoiceOption, GradeMessages, GradeThresholds, Item, ItemId, ItemKind, Section, SectionId,
    Selections, StrategyDraft,
};

fn checkbox(id: &str, label: &str, order: i32, points: i32) -> Item {
    Item {
        id: ItemId(id.to_string()),
        label: label.to_string(),
        order,
        kind: ItemKind::Checkbox { points },
    }
}

fn radio(id: &str, label: &str, order: i32, options: Vec<(&str, i32)>) -> Item {
    Item {
        id: ItemId(id.to_string()),
        label: label.to_string(),
        order,
        kind: ItemKind::Radio {
            options: options
                .into_iter()
                .map(|(label, points)| ChoiceOption {
                    label: label.to_string(),
                    points,
                })
                .collect(),
        },
    }
}

/// A complete 100-point draft modelled on an intraday liquidity-sweep
/// playbook. The red-flag section carries only penalties, so it never adds
/// to the ceiling.
pub fn sample_draft() -> StrategyDraft {
    StrategyDraft {
        name: "ICT Silver Bullet".to_string(),
        description: Some("First presented FVG after the 10:00 liquidity sweep.".to_string()),
        grade_thresholds: GradeThresholds::default(),
        grade_messages: GradeMessages {
            a_plus: "Full size".to_string(),
            a: "Half size".to_string(),
            b: "Quarter size".to_string(),
            c: "Sit on hands".to_string(),
            no_trade: "No entry".to_string(),
        },
        sections: vec![
            Section {
                id: SectionId("bias".to_string()),
                title: "Bias & Time".to_string(),
                order: 1,
                items: vec![
                    checkbox("bias-killzone", "Inside the 10:00-11:00 killzone", 1, 10),
                    checkbox("bias-htf", "HTF PD array supports the draw", 2, 15),
                ],
            },
            Section {
                id: SectionId("entry".to_string()),
                title: "Entry Model".to_string(),
                order: 2,
                items: vec![
                    checkbox("entry-sweep", "Liquidity sweep completed", 1, 20),
                    checkbox("entry-mss", "Market structure shift confirmed", 2, 20),
                    radio(
                        "entry-fvg",
                        "Fair value gap quality",
                        3,
                        vec![("Partial fill", 8), ("Clean gap", 20)],
                    ),
                    checkbox("entry-rr", "Risk to reward above 2R", 4, 15),
                ],
            },
            Section {
                id: SectionId("flags".to_string()),
                title: "Red Flags".to_string(),
                order: 3,
                items: vec![
                    checkbox("flag-fomo", "Chasing after displacement", 1, -10),
                    checkbox("flag-news", "High-impact news inside 15 minutes", 2, -15),
                ],
            },
        ],
    }
}

/// Selections for a disciplined session: every confluence present, no
/// flags. Scores the full 100.
pub fn strong_selections() -> Selections {
    let mut selections = Selections::new();
    selections.toggle(&ItemId("bias-killzone".to_string()));
    selections.toggle(&ItemId("bias-htf".to_string()));
    selections.toggle(&ItemId("entry-sweep".to_string()));
    selections.toggle(&ItemId("entry-mss".to_string()));
    selections.choose(&ItemId("entry-fvg".to_string()), "Clean gap");
    selections.toggle(&ItemId("entry-rr".to_string()));
    selections
}

/// Selections for a rushed session: half the confluences, a weak gap, and
/// a chase flag pulling the total down.
pub fn weak_selections() -> Selections {
    let mut selections = Selections::new();
    selections.toggle(&ItemId("bias-killzone".to_string()));
    selections.toggle(&ItemId("entry-sweep".to_string()));
    selections.choose(&ItemId("entry-fvg".to_string()), "Partial fill");
    selections.toggle(&ItemId("entry-rr".to_string()));
    selections.toggle(&ItemId("flag-fomo".to_string()));
    selections
}
