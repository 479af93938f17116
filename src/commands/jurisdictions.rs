use anyhow::Result;

use mortality_relay::presentation::create_resolver;

use crate::ui::context::UiContext;
use crate::ui::json::emit;
use crate::ui::views::jurisdictions::{render_json, render_table};

pub fn cmd_jurisdictions(ui: &UiContext) -> Result<bool> {
    let resolver = create_resolver();
    let registry = resolver.registry();

    if ui.json {
        emit(render_json(registry))?;
    } else {
        println!("{}", render_table(registry, ui.color));
    }
    Ok(true)
}
