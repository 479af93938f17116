use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Closing block of a run: title, counts and an optional next step
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            success: true,
            stats: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(title)
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_next_step(&mut self, hint: impl Into<String>) {
        self.next_steps.push(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (Icon::Success, ColoredText::success(self.title.as_str()))
        } else {
            (Icon::Warning, ColoredText::warning(self.title.as_str()))
        };

        let mut lines = vec![format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        )];

        for (label, count) in &self.stats {
            lines.push(format!("  {}: {}", label, count));
        }

        for warning in &self.warnings {
            lines.push(format!(
                "  {} {}",
                Icon::Warning.colored(supports_color, supports_unicode),
                warning
            ));
        }

        if !self.next_steps.is_empty() {
            lines.push(String::new());
            lines.push(ColoredText::dim("Next:").render(supports_color));
            for step in &self.next_steps {
                lines.push(format!(
                    "  {} {}",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    step
                ));
            }
        }

        lines.join("\n")
    }
}
