use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

const STAGE_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// StderrProgressReporter adapter for reporting assessment progress to stderr
///
/// Pipeline stages are drawn as an indicatif bar; plain messages go to
/// stderr so they never mix with exported results on stdout.
pub struct StderrProgressReporter {
    stage_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// A reporter that draws nothing, for hosts without a terminal
    pub fn quiet() -> Self {
        Self {
            stage_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn stage_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.stage_bar.borrow_mut();
        if let Some(bar) = slot.as_ref() {
            if bar.length() == Some(total as u64) {
                return bar.clone();
            }
            bar.finish_and_clear();
        }

        let bar = ProgressBar::new(total as u64);
        if self.quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) = ProgressStyle::default_bar().template(STAGE_TEMPLATE) {
            bar.set_style(style.progress_chars("=>-"));
        }
        *slot = Some(bar.clone());
        bar
    }

    fn finish_stage_bar(&self) {
        if let Some(bar) = self.stage_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.stage_bar(total);
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_stage_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_stage_bar();
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}
