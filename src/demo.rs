use clap::Args;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tradescore::error::AppError;
use tradescore::strategies::{
    sample, score_strategy, validate, ItemKind, MemoryStrategyRepository, ScoreSummary,
    SelectionValue, Selections, Strategy, StrategyDraft, StrategyId, StrategyService,
};

use crate::cli::{CheckArgs, ScoreArgs};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include a full item listing in each scorecard
    #[arg(long)]
    pub(crate) list_items: bool,
}

pub(crate) fn run_strategy_check(args: CheckArgs) -> Result<(), AppError> {
    let draft = read_draft(&args.file)?;
    let report = validate(&draft.name, &draft.sections);

    println!("Strategy: {}", display_name(&draft.name));
    println!("Checklist weight: {}", report.points_label());
    if !report.named {
        println!("Name: missing (add one before saving)");
    }
    if report.is_savable() {
        println!("Verdict: savable");
    } else {
        println!("Verdict: not savable");
    }

    Ok(())
}

pub(crate) fn run_strategy_score(args: ScoreArgs) -> Result<(), AppError> {
    let draft = read_draft(&args.file)?;
    let selections = match &args.selections {
        Some(path) => read_selections(path)?,
        None => Selections::new(),
    };

    let report = validate(&draft.name, &draft.sections);
    println!("Strategy: {}", display_name(&draft.name));
    if !report.is_savable() {
        println!("Note: checklist weighs {} (not savable)", report.points_label());
    }

    let strategy = draft.into_strategy(StrategyId("strat-local".to_string()), None);
    let summary = score_strategy(&strategy, &selections);
    render_scorecard(&strategy, &selections, &summary, args.list_items);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { list_items } = args;

    println!("Strategy scorecard demo");

    let draft = sample::sample_draft();
    let report = validate(&draft.name, &draft.sections);
    let verdict = if report.is_savable() {
        "savable"
    } else {
        "not savable"
    };
    println!("- Checklist weight: {} ({verdict})", report.points_label());

    let repository = Arc::new(MemoryStrategyRepository::default());
    let service = Arc::new(StrategyService::new(repository));

    let strategy = match service.create(draft) {
        Ok(strategy) => strategy,
        Err(err) => {
            println!("  Draft rejected: {err}");
            return Ok(());
        }
    };
    println!("- Saved as {} -> {}", strategy.id.0, strategy.name);

    println!("\nDisciplined session");
    let strong = sample::strong_selections();
    let summary = score_strategy(&strategy, &strong);
    render_scorecard(&strategy, &strong, &summary, list_items);

    println!("\nRushed session");
    let weak = sample::weak_selections();
    let summary = score_strategy(&strategy, &weak);
    render_scorecard(&strategy, &weak, &summary, list_items);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("\nScore payload:\n{json}"),
        Err(err) => println!("\nScore payload unavailable: {err}"),
    }

    Ok(())
}

fn read_draft(path: &Path) -> Result<StrategyDraft, AppError> {
    let raw = fs::read_to_string(path)?;
    let draft = serde_json::from_str(&raw)?;
    Ok(draft)
}

fn read_selections(path: &Path) -> Result<Selections, AppError> {
    let raw = fs::read_to_string(path)?;
    let selections = serde_json::from_str(&raw)?;
    Ok(selections)
}

fn display_name(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "(unnamed)"
    } else {
        trimmed
    }
}

fn render_scorecard(
    strategy: &Strategy,
    selections: &Selections,
    summary: &ScoreSummary,
    list_items: bool,
) {
    println!(
        "Score: {}/{} -> {} ({})",
        summary.score,
        summary.max_score,
        summary.grade.label(),
        summary.message
    );

    println!("Sections");
    for (section, section_score) in strategy.sections.iter().zip(&summary.sections) {
        println!(
            "- {}: {}/{}",
            section_score.title, section_score.points, section_score.ceiling
        );

        if !list_items {
            continue;
        }

        for item in &section.items {
            match &item.kind {
                ItemKind::Checkbox { points } => {
                    let checked = selections
                        .get(&item.id)
                        .map(SelectionValue::is_truthy)
                        .unwrap_or(false);
                    let marker = if checked { "x" } else { " " };
                    println!("  [{marker}] {} ({points:+})", item.label);
                }
                ItemKind::Radio { options } => match selections.get(&item.id) {
                    Some(SelectionValue::Choice(label)) => {
                        let points = options
                            .iter()
                            .find(|option| option.label == *label)
                            .map(|option| option.points)
                            .unwrap_or(0);
                        println!("  (*) {}: {label} ({points:+})", item.label);
                    }
                    _ => println!("  ( ) {}: no selection", item.label),
                },
            }
        }
    }
}
