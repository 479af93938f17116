//! Output of the status and process commands

use mortality_relay::domain::ports::CommandOutput;
use mortality_relay::domain::value_objects::QueueStep;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn title(step: QueueStep) -> &'static str {
    match step {
        QueueStep::Transfer => "Transfer",
        QueueStep::Status => "Queue status",
        QueueStep::Process => "Process queue",
    }
}

pub fn render_step_header(step: QueueStep, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Queue.colored(supports_color, supports_unicode),
        ColoredText::info(title(step)).bold().render(supports_color)
    )
}

/// Captured output (passed through as-is) followed by an outcome line
pub fn render_step_result(
    step: QueueStep,
    output: Option<&CommandOutput>,
    error: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    let Some(output) = output else {
        lines.push(format!(
            "{} {} could not run: {}",
            Icon::Error.colored(supports_color, supports_unicode),
            step,
            ColoredText::error(error.unwrap_or("unknown error")).render(supports_color)
        ));
        return lines.join("\n");
    };

    let stdout = output.stdout.trim_end();
    if !stdout.is_empty() {
        lines.push(stdout.to_string());
    }

    if output.is_success() {
        lines.push(format!(
            "{} {} finished in {:.1}s",
            Icon::Success.colored(supports_color, supports_unicode),
            step,
            output.elapsed.as_secs_f64()
        ));
    } else {
        lines.push(format!(
            "{} {} failed: {}",
            Icon::Error.colored(supports_color, supports_unicode),
            step,
            ColoredText::error(output.failure_diagnostic()).render(supports_color)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn successful_step_passes_output_through() {
        let output = CommandOutput {
            exit_code: Some(0),
            stdout: "pending: 3\nprocessing: 0\n".to_string(),
            stderr: String::new(),
            elapsed: Duration::from_millis(1500),
        };

        insta::assert_snapshot!(
            render_step_result(QueueStep::Status, Some(&output), None, false, false),
            @r"
        pending: 3
        processing: 0
        [OK] status finished in 1.5s
        "
        );
    }

    #[test]
    fn failed_step_shows_diagnostic() {
        let output = CommandOutput {
            exit_code: Some(2),
            ..Default::default()
        };

        let rendered = render_step_result(QueueStep::Process, Some(&output), None, false, false);
        assert_eq!(rendered, "[FAIL] process failed: exited with status 2");
    }

    #[test]
    fn unstartable_step_shows_error() {
        let rendered = render_step_result(
            QueueStep::Status,
            None,
            Some("timed out after 300s"),
            false,
            true,
        );
        assert_eq!(rendered, "✗ status could not run: timed out after 300s");
    }

    #[test]
    fn header_names_step() {
        assert_eq!(
            render_step_header(QueueStep::Process, false, false),
            "[QUEUE] Process queue"
        );
    }
}
