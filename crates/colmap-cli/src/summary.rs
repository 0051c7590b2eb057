use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colmap_map::{ColumnScore, DomainHintTable};
use colmap_model::{ConfidenceLevel, ConfidenceThresholds, MappingResult};

/// Table of every proposed mapping, in source order.
pub fn mapping_table(result: &MappingResult, thresholds: &ConfidenceThresholds) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Confidence"),
        header_cell("Level"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for mapping in result {
        let target = match &mapping.target_column {
            Some(target) => Cell::new(target),
            None => dim_cell("-"),
        };
        let level = if mapping.is_matched() {
            thresholds.categorize(mapping.confidence)
        } else {
            None
        };
        table.add_row(vec![
            Cell::new(&mapping.source_column).fg(Color::Blue),
            target,
            Cell::new(format!("{:.2}", mapping.confidence)),
            level_cell(level),
        ]);
    }
    table
}

pub fn print_mapping_summary(result: &MappingResult, thresholds: &ConfidenceThresholds) {
    println!("{}", mapping_table(result, thresholds));
    println!();
    for line in level_legend(thresholds) {
        println!("{line}");
    }
    let repeated = result.repeated_targets();
    if !repeated.is_empty() {
        println!();
        println!("Targets proposed for more than one source:");
        for (target, sources) in repeated {
            let sources: Vec<&str> = sources.iter().map(|s| s.as_str()).collect();
            println!("- {target}: {}", sources.join(", "));
        }
    }
}

/// One line per confidence level: its name, lower bound and meaning.
pub fn level_legend(thresholds: &ConfidenceThresholds) -> Vec<String> {
    [
        (ConfidenceLevel::High, thresholds.high),
        (ConfidenceLevel::Medium, thresholds.medium),
        (ConfidenceLevel::Low, thresholds.low),
    ]
    .into_iter()
    .map(|(level, bound)| {
        format!(
            "{:<6} >= {bound:.2}  {}",
            level.as_str(),
            level.description()
        )
    })
    .collect()
}

/// Table of the active hint entries, in table order.
pub fn hints_table(hints: &DomainHintTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Hints")]);
    apply_table_style(&mut table);
    for entry in hints.entries() {
        table.add_row(vec![
            Cell::new(&entry.key).fg(Color::Blue),
            Cell::new(entry.hints.join(", ")),
        ]);
    }
    table
}

/// Score breakdown for one pair, with a total row.
pub fn explain_table(score: &ColumnScore) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Component"),
        header_cell("Contribution"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for component in &score.explanation {
        table.add_row(vec![
            Cell::new(component.name),
            Cell::new(format!("{:.3}", component.value)),
            Cell::new(&component.description),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", score.score)).add_attribute(Attribute::Bold),
        dim_cell("unclamped"),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn level_cell(level: Option<ConfidenceLevel>) -> Cell {
    let Some(level) = level else {
        return dim_cell("-");
    };
    let cell = Cell::new(level.as_str());
    match level {
        ConfidenceLevel::High => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        ConfidenceLevel::Medium => cell.fg(Color::Yellow),
        ConfidenceLevel::Low => cell.fg(Color::Red),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
