use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use keygauge::assessment::Assessment;
use keygauge::error::KgResult;
use keygauge::layout::Layout;

pub fn print_layout_grid(name: &str, layout: &Layout) {
    println!("\n=== {} ===\n{}", name, layout);
}

fn fmt_value(v: f64) -> String {
    // Counts render whole, ratios keep their precision.
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.4}", v)
    }
}

/// One row per layout, one column per flattened metric key. The header and
/// value rows stay index-aligned through Assessment's flat views.
pub fn comparison(results: &[(String, Assessment)]) {
    let Some((_, first)) = results.first() else {
        println!("No layouts assessed.");
        return;
    };

    let keys = first.flat_keys();
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Layout").add_attribute(Attribute::Bold)];
    header.extend(keys.iter().map(|k| Cell::new(*k)));
    table.add_row(header);

    for i in 1..=keys.len() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, assessment) in results {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        row.extend(assessment.flat_values().iter().map(|v| Cell::new(fmt_value(*v))));
        table.add_row(row);
    }

    println!("\n{}", table);
}

/// Flattened results as CSV: metric keys as the header record, one record
/// per layout.
pub fn write_csv(path: &str, results: &[(String, Assessment)]) -> KgResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if let Some((_, first)) = results.first() {
        let mut header = vec!["layout".to_string()];
        header.extend(first.flat_keys().iter().map(|k| k.to_string()));
        writer.write_record(&header)?;
    }

    for (name, assessment) in results {
        let mut record = vec![name.clone()];
        record.extend(assessment.flat_values().iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
