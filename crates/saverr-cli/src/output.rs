use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Left-aligned columns two spaces apart, header underlined with dashes.
/// Rows shorter than the header leave trailing columns blank.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(String::len)
                .fold(headers[col].len(), usize::max)
        })
        .collect();

    println!("{}", aligned(headers.iter().copied(), &widths));
    println!("{}", aligned(widths.iter().map(|&w| "-".repeat(w)), &widths));
    for row in &rows {
        println!("{}", aligned(row.iter().map(String::as_str), &widths));
    }
}

fn aligned<S: AsRef<str>>(cells: impl Iterator<Item = S>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{:w$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

/// `label: value` lines with aligned values; empty values print as `-`.
pub fn print_fields(fields: &[(&str, &str)]) {
    let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in fields {
        let value = if value.is_empty() { "-" } else { value };
        println!("{:width$}  {}", format!("{key}:"), value, width = width + 1);
    }
}
