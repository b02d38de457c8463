//! Progress reporting for search requests

use colored::Colorize;
use fairfinder_application::SearchProgressNotifier;
use fairfinder_domain::SearchFilter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown on stderr while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgressNotifier for ProgressReporter {
    fn on_search_start(&self, _filter: &SearchFilter) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Searching...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_search_complete(&self, success: bool, count: usize) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };

        if success {
            pb.finish_with_message(format!("{} {} exhibitions", "v".green(), count));
        } else {
            pb.finish_with_message(format!("{} Search failed", "x".red()));
        }
    }
}

/// Simple text-based progress (no fancy UI), for non-terminal stderr
pub struct SimpleProgress;

impl SearchProgressNotifier for SimpleProgress {
    fn on_search_start(&self, filter: &SearchFilter) {
        eprintln!("{} {} ({})", "->".cyan(), "Searching".bold(), filter);
    }

    fn on_search_complete(&self, success: bool, count: usize) {
        if success {
            eprintln!("  {} {} exhibitions", "v".green(), count);
        } else {
            eprintln!("  {} search failed", "x".red());
        }
    }
}
