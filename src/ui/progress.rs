use colored::Colorize;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Step counter for the artifact scan.
///
/// Drawn on stderr so that results written to stdout stay pipeable. A hidden
/// bar still counts steps but never touches the terminal.
pub struct ProgressBar {
    total: usize,
    current: usize,
    message: String,
    start_time: Instant,
    width: usize,
    hidden: bool,
}

impl ProgressBar {
    pub fn new(total: usize, message: &str) -> Self {
        Self {
            total,
            current: 0,
            message: message.to_string(),
            start_time: Instant::now(),
            width: 40,
            hidden: false,
        }
    }

    pub fn hidden(total: usize) -> Self {
        Self {
            hidden: true,
            ..Self::new(total, "")
        }
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn inc(&mut self) {
        if self.current < self.total {
            self.current += 1;
            self.draw();
        }
    }

    /// Print a result line to stdout without leaving a torn bar behind.
    pub fn println(&self, line: &str) {
        self.clear();
        println!("{}", line);
        self.draw();
    }

    /// Print a diagnostic through `print` with the bar cleared first.
    pub fn suspend<F: FnOnce()>(&self, print: F) {
        self.clear();
        print();
        self.draw();
    }

    pub fn finish(mut self) {
        self.draw();
        if !self.hidden {
            eprintln!();
        }
        self.hidden = true;
    }

    fn clear(&self) {
        if self.hidden {
            return;
        }
        eprint!("\r{:width$}\r", "", width = self.width + 60);
        io::stderr().flush().unwrap_or(());
    }

    fn eta(&self) -> Duration {
        let elapsed_secs = self.start_time.elapsed().as_secs_f64();
        if self.current == 0 || elapsed_secs <= 0.0 {
            return Duration::ZERO;
        }
        let remaining = self.total.saturating_sub(self.current);
        let rate = self.current as f64 / elapsed_secs;
        if rate > 0.0 {
            Duration::from_secs_f64(remaining as f64 / rate)
        } else {
            Duration::ZERO
        }
    }

    fn draw(&self) {
        if self.hidden {
            return;
        }

        let percent = if self.total > 0 {
            (self.current * 100) / self.total
        } else {
            100
        };
        let filled = if self.total > 0 {
            (self.current * self.width) / self.total
        } else {
            self.width
        };

        let bar = "█".repeat(filled);
        let empty = "░".repeat(self.width.saturating_sub(filled));

        let eta = self.eta();
        let eta_str = if eta.as_secs() > 0 {
            format!("{}s", eta.as_secs())
        } else {
            "--".to_string()
        };

        eprint!(
            "\r{} {} [{}{}] {}/{} {}% ETA: {}",
            "▸".dimmed(),
            self.message.cyan(),
            bar.green(),
            empty.dimmed(),
            self.current.to_string().bold(),
            self.total.to_string().dimmed(),
            percent.to_string().bold(),
            eta_str.dimmed()
        );
        io::stderr().flush().unwrap_or(());
    }
}

/// One-shot activity marker for lookups of unknown duration.
pub struct Spinner {
    message: String,
    active: bool,
}

impl Spinner {
    pub fn start(message: &str, visible: bool) -> Self {
        let spinner = Self {
            message: message.to_string(),
            active: visible,
        };
        if spinner.active {
            eprint!("\r{} {}...", "⠋".cyan().bold(), spinner.message);
            io::stderr().flush().unwrap_or(());
        }
        spinner
    }

    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        eprint!("\r{:width$}\r", "", width = self.message.chars().count() + 8);
        io::stderr().flush().unwrap_or(());
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}
