//! Transfer output: candidate preview, one line per dispatched file, summary.

use std::path::Path;

use mortality_relay::domain::entities::{BatchSummary, DispatchResult, Jurisdiction};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn jurisdiction_text(jurisdiction: &Jurisdiction, supports_color: bool) -> String {
    match jurisdiction {
        Jurisdiction::Known(_) => jurisdiction.to_string(),
        Jurisdiction::Unknown => ColoredText::warning(jurisdiction.label()).render(supports_color),
    }
}

pub fn render_header(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Transfer.colored(supports_color, supports_unicode),
        ColoredText::info("Transfer").bold().render(supports_color)
    )
}

pub fn render_found(count: usize, supports_color: bool, supports_unicode: bool) -> String {
    if count == 0 {
        return format!(
            "{} No matching files found",
            Icon::Warning.colored(supports_color, supports_unicode)
        );
    }
    format!("Found {} file(s):", count)
}

pub fn render_preview_line(
    path: &Path,
    jurisdiction: &Jurisdiction,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "  {} {} {} {}",
        Icon::Bullet.colored(supports_color, supports_unicode),
        file_name(path),
        Icon::MapsTo.colored(supports_color, supports_unicode),
        jurisdiction_text(jurisdiction, supports_color)
    )
}

pub fn render_root_missing(root: &Path, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Source root not found: {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        root.display()
    )
}

pub fn render_root_unreadable(
    root: &Path,
    reason: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} Cannot read source root {}: {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        root.display(),
        reason
    )
}

/// One line per dispatched file, plus queue output when `verbose`
pub fn render_dispatch_line(
    index: usize,
    total: usize,
    result: &DispatchResult,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let file = result.file();
    let position = ColoredText::dim(format!("[{}/{}]", index + 1, total)).render(supports_color);
    let target = format!(
        "{} {} {}",
        file.file_name(),
        Icon::MapsTo.colored(supports_color, supports_unicode),
        file.jurisdiction().label()
    );

    if result.is_success() {
        let mut line = format!(
            "{} {} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            position,
            target
        );
        if let (true, Some(output)) = (verbose, result.output()) {
            for out in output.lines() {
                line.push_str("\n    ");
                line.push_str(&ColoredText::dim(out).render(supports_color));
            }
        }
        line
    } else {
        format!(
            "{} {} {}\n    {}",
            Icon::Error.colored(supports_color, supports_unicode),
            position,
            target,
            ColoredText::error(result.diagnostic().unwrap_or("failed")).render(supports_color)
        )
    }
}

/// Closing counts. `hints` adds the follow-up commands after a transfer
/// that queued something.
pub fn render_summary(
    summary: &BatchSummary,
    hints: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = if summary.is_success() {
        ResultSummary::success("Transfer complete")
    } else {
        ResultSummary::partial("Transfer finished with failures")
    };
    block.add_stat("Successfully queued", summary.succeeded());
    block.add_stat("Failed", summary.failed());
    block.add_stat("Total", summary.total());

    if summary.failed() > 0 {
        block.add_warning("Failed files were left in place; re-run transfer to retry them");
    }
    if hints && summary.succeeded() > 0 {
        block.add_next_step("mortality-relay status    (check the queue)");
        block.add_next_step("mortality-relay process   (process queued files)");
    }

    block.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortality_relay::domain::entities::{CandidateFile, JurisdictionRecord, ResolvedFile};

    fn texas() -> Jurisdiction {
        Jurisdiction::Known(JurisdictionRecord::new("TX", "Texas", "state_23"))
    }

    fn summary(succeeded: usize, failed: usize) -> BatchSummary {
        let file = ResolvedFile::new(
            CandidateFile::new("/data/x.csv", "*.csv"),
            Jurisdiction::Unknown,
        );
        let results: Vec<_> = (0..succeeded)
            .map(|_| DispatchResult::success(file.clone(), ""))
            .chain((0..failed).map(|_| DispatchResult::failure(file.clone(), "boom")))
            .collect();
        results.iter().collect()
    }

    #[test]
    fn preview_line_shows_jurisdiction() {
        let line = render_preview_line(Path::new("/data/TX_deaths.csv"), &texas(), false, true);
        assert_eq!(line, "  • TX_deaths.csv → Texas (TX)");
    }

    #[test]
    fn preview_line_ascii_unknown() {
        let line = render_preview_line(
            Path::new("/data/mystery_export.csv"),
            &Jurisdiction::Unknown,
            false,
            false,
        );
        assert_eq!(line, "  - mystery_export.csv -> Unknown");
    }

    #[test]
    fn found_zero_is_a_notice() {
        assert_eq!(render_found(0, false, false), "[WARN] No matching files found");
        assert_eq!(render_found(3, false, false), "Found 3 file(s):");
    }

    #[test]
    fn unreadable_root_line_names_the_reason() {
        let line = render_root_unreadable(
            Path::new("/data/TX_deaths.csv"),
            "Not a directory (os error 20)",
            false,
            false,
        );
        assert_eq!(
            line,
            "[WARN] Cannot read source root /data/TX_deaths.csv: Not a directory (os error 20)"
        );
    }

    #[test]
    fn failed_dispatch_line_carries_diagnostic() {
        let file = ResolvedFile::new(CandidateFile::new("/data/TX_deaths.csv", "*.csv"), texas());
        let result = DispatchResult::failure(file, "could not start 'npm': not found");

        let line = render_dispatch_line(1, 3, &result, false, false, false);

        insta::assert_snapshot!(line, @r"
        [FAIL] [2/3] TX_deaths.csv -> Texas
            could not start 'npm': not found
        ");
    }

    #[test]
    fn verbose_dispatch_line_shows_queue_output() {
        let file = ResolvedFile::new(CandidateFile::new("/data/TX_deaths.csv", "*.csv"), texas());
        let result = DispatchResult::success(file, "Added to queue\nPosition 4");

        let quiet = render_dispatch_line(0, 1, &result, false, false, false);
        let verbose = render_dispatch_line(0, 1, &result, true, false, false);

        assert_eq!(quiet, "[OK] [1/1] TX_deaths.csv -> Texas");
        assert!(verbose.ends_with("    Added to queue\n    Position 4"));
    }

    #[test]
    fn summary_with_failures_ascii() {
        insta::assert_snapshot!(render_summary(&summary(2, 1), true, false, false), @r"
        [WARN] Transfer finished with failures
          Successfully queued: 2
          Failed: 1
          Total: 3
          [WARN] Failed files were left in place; re-run transfer to retry them

        Next:
          [>] mortality-relay status    (check the queue)
          [>] mortality-relay process   (process queued files)
        ");
    }

    #[test]
    fn summary_without_successes_has_no_hints() {
        let rendered = render_summary(&summary(0, 2), true, false, false);
        assert!(!rendered.contains("Next:"));
    }
}
