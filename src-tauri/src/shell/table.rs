// Plain-text table rendering for result dialogs
use crate::db::models::Bouquet;

const HEADERS: [&str; 5] = ["ID", "Name", "Flower Type", "Quantity", "Price"];
const COLUMN_GAP: &str = "  ";

/// Render bouquets as a right-aligned text table with a header row
pub fn format_table(bouquets: &[Bouquet]) -> String {
    let rows: Vec<[String; 5]> = bouquets
        .iter()
        .map(|b| {
            [
                b.id.to_string(),
                b.name.clone(),
                b.flower_type.clone(),
                b.quantity.to_string(),
                format!("{:.2}", b.price),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    std::iter::once(&header)
        .chain(&rows)
        .map(|row| render_row(row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}
