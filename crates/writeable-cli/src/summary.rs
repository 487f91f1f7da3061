use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use writeable_model::{Finding, Location, Severity};

use crate::types::{AnalyzeResult, DocumentSummary};

pub fn print_summary(result: &AnalyzeResult) {
    for document in &result.documents {
        print_document(document);
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_document(document: &DocumentSummary) {
    println!(
        "Document: {} ({} sentences, {} paragraphs)",
        document.name, document.sentence_count, document.paragraph_count
    );
    if let Some(path) = &document.json_report {
        println!("JSON report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Findings"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Status"),
    ]);
    apply_category_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for (category, findings) in document.report.iter() {
        let errors = count_severity(findings, Severity::Error);
        let warnings = count_severity(findings, Severity::Warning);
        table.add_row(vec![
            Cell::new(category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(findings.len()),
            count_cell(errors, Color::Red),
            count_cell(warnings, Color::Yellow),
            status_cell(findings.is_empty(), errors),
        ]);
    }
    println!("{table}");
    print_findings_table(document);
    println!();
}

fn print_findings_table(document: &DocumentSummary) {
    let mut findings: Vec<(&str, &Finding)> = Vec::new();
    for (category, category_findings) in document.report.iter() {
        for finding in category_findings {
            findings.push((category, finding));
        }
    }
    if findings.is_empty() {
        return;
    }
    findings.sort_by(|a, b| {
        let severity = b.1.severity.cmp(&a.1.severity);
        if severity != Ordering::Equal {
            return severity;
        }
        let category = a.0.cmp(b.0);
        if category != Ordering::Equal {
            return category;
        }
        location_rank(a.1.location).cmp(&location_rank(b.1.location))
    });

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Severity"),
        header_cell("Location"),
        header_cell("Message"),
    ]);
    apply_findings_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for (category, finding) in findings {
        table.add_row(vec![
            Cell::new(category),
            severity_cell(finding.severity),
            location_cell(finding.location),
            Cell::new(finding.message.clone()),
        ]);
    }
    println!("Findings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_category_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_severity(findings: &[Finding], severity: Severity) -> usize {
    findings
        .iter()
        .filter(|finding| finding.severity == severity)
        .count()
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn status_cell(empty: bool, errors: usize) -> Cell {
    if empty {
        Cell::new("no issues found").fg(Color::Green)
    } else if errors > 0 {
        Cell::new("errors").fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new("issues").fg(Color::Yellow)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::DarkGrey),
    }
}

/// Locations are rendered 1-based for readers; spans are 0-based internally.
fn location_cell(location: Option<Location>) -> Cell {
    match location {
        Some(Location::Sentence(index)) => Cell::new(format!("sentence {}", index + 1)),
        Some(Location::Paragraph(index)) => Cell::new(format!("paragraph {}", index + 1)),
        None => dim_cell("document"),
    }
}

fn location_rank(location: Option<Location>) -> (u8, usize) {
    match location {
        None => (0, 0),
        Some(Location::Paragraph(index)) => (1, index),
        Some(Location::Sentence(index)) => (2, index),
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
