use mortality_relay::RelayError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Error line plus a fix hint for configuration problems
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut lines = vec![format!(
        "{} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{:#}", err)).render(supports_color)
    )];

    if let Some(relay) = err.downcast_ref::<RelayError>() {
        match relay {
            RelayError::NoUsableRoots { roots } => {
                for root in roots {
                    lines.push(format!("  {}", root.display()));
                }
                lines.push(fix("check --root / [source].roots", supports_color));
            }
            RelayError::NothingConfigured { flag, .. } => {
                lines.push(fix(
                    &format!("pass --{} or add it to mortality-relay.toml", flag),
                    supports_color,
                ));
            }
            RelayError::InvalidPattern { .. } => {
                lines.push(fix(
                    "patterns are file-name globs such as '*_deaths.csv'",
                    supports_color,
                ));
            }
            _ => {}
        }
    }

    lines.join("\n")
}

fn fix(hint: &str, supports_color: bool) -> String {
    format!("  {} {}", ColoredText::dim("Fix:").render(supports_color), hint)
}
