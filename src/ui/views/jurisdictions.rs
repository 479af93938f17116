use mortality_relay::domain::services::JurisdictionRegistry;

use crate::ui::primitives::text::ColoredText;

/// Code / name / location id table, sorted by code
pub fn render_table(registry: &JurisdictionRegistry, supports_color: bool) -> String {
    let name_width = registry
        .iter()
        .map(|r| r.display_name().len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut lines = vec![ColoredText::dim(format!(
        "{:<6}{:<width$}  {}",
        "CODE",
        "NAME",
        "LOCATION",
        width = name_width
    ))
    .render(supports_color)];

    for record in registry.iter() {
        lines.push(format!(
            "{:<6}{:<width$}  {}",
            record.code(),
            record.display_name(),
            record.external_location_id(),
            width = name_width
        ));
    }

    lines.push(String::new());
    lines.push(format!("{} jurisdictions", registry.len()));
    lines.join("\n")
}

pub fn render_json(registry: &JurisdictionRegistry) -> serde_json::Value {
    let rows: Vec<_> = registry
        .iter()
        .map(|r| {
            serde_json::json!({
                "code": r.code(),
                "name": r.display_name(),
                "location_id": r.external_location_id(),
            })
        })
        .collect();
    serde_json::json!({
        "event": "jurisdictions",
        "count": rows.len(),
        "jurisdictions": rows,
    })
}
