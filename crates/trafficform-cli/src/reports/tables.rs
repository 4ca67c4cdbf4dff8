use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use trafficform_core::payload::{Payload, PayloadEntry};
use trafficform_core::profiles::{FieldType, FormProfile, Rule};

fn type_name(ty: FieldType) -> &'static str {
    match ty {
        FieldType::Integer => "int",
        FieldType::Float => "float",
        FieldType::Text => "text",
    }
}

pub fn profiles(profiles: &[&FormProfile]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Form").add_attribute(Attribute::Bold),
        Cell::new("Key").fg(Color::Cyan),
        Cell::new("Inputs"),
        Cell::new("Type"),
        Cell::new("Bounds").fg(Color::Yellow),
        Cell::new("Endpoint"),
    ]);

    for profile in profiles {
        for rule in profile.rules {
            let c = rule.constraint();
            let bounds = match c.bounds {
                Some(b) if c.unit.is_empty() => format!("[{}, {}]", b.min, b.max),
                Some(b) => format!("[{}, {}] {}", b.min, b.max, c.unit),
                None => "-".to_string(),
            };
            let key = match rule {
                Rule::Range { key, .. } => format!("{}: [min, max]", key),
                Rule::Scalar { key, .. } => key.to_string(),
            };

            table.add_row(vec![
                Cell::new(profile.kind.to_string()).add_attribute(Attribute::Bold),
                Cell::new(key).fg(Color::Cyan),
                Cell::new(rule.fields().join(", ")),
                Cell::new(type_name(rule.ty())),
                Cell::new(bounds).fg(Color::Yellow),
                Cell::new(profile.endpoint()),
            ]);
        }
    }
    println!("\n{}", table);
}

pub fn payload(payload: &Payload) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(payload.endpoint()).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (key, entry) in payload.entries() {
        let value = match entry {
            PayloadEntry::Range([lo, hi]) => format!("[{}, {}]", lo, hi),
            PayloadEntry::Scalar(v) => v.to_string(),
        };
        table.add_row(vec![Cell::new(key), Cell::new(value).fg(Color::Cyan)]);
    }
    println!("\n{}", table);
}
