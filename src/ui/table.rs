//! ui::table
//!
//! Two-column list rendering with a shared global column width.

use super::colors::Colors;

/// One display section: a heading plus `(label, description)` rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Section heading.
    pub heading: String,
    /// Rows: left column label, right column text.
    pub rows: Vec<(String, String)>,
}

impl Table {
    /// Create an empty section.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn row(mut self, label: impl Into<String>, description: impl Into<String>) -> Self {
        self.rows.push((label.into(), description.into()));
        self
    }
}

/// Render sections with one label-column width shared across all of them,
/// so unrelated sections align visually.
///
/// # Example
///
/// ```
/// use tiller::ui::{render_tables, PlainColors, Table};
///
/// let tables = [
///     Table::new("make").row("make:model", "Scaffold a model"),
///     Table::new("db").row("db:seed", "Seed the database"),
/// ];
/// let out = render_tables(&tables, &PlainColors);
/// assert!(out.contains("make:model  Scaffold a model"));
/// // "db:seed" pads out to the width of "make:model".
/// assert!(out.contains("db:seed     Seed the database"));
/// ```
pub fn render_tables(tables: &[Table], colors: &dyn Colors) -> String {
    let width = tables
        .iter()
        .flat_map(|table| table.rows.iter())
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&colors.bold(&table.heading));
        out.push('\n');
        for (label, description) in &table.rows {
            let padding = " ".repeat(width - label.chars().count());
            out.push_str("  ");
            out.push_str(&colors.yellow(label));
            out.push_str(&padding);
            if !description.is_empty() {
                out.push_str("  ");
                out.push_str(description);
            }
            out.push('\n');
        }
    }
    out
}
