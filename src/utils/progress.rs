//! Progress bar helpers using indicatif

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Number of segments in the generation progress bar
pub const BAR_WIDTH: usize = 50;

/// Create a spinner for indeterminate progress
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("    {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Progress line for code generation on stdout.
///
/// On an attended terminal indicatif redraws the line in place. When stdout
/// is piped or captured indicatif draws nothing, so the line is written as
/// plain text with `\r` redraws and a final newline instead.
#[derive(Debug, Clone)]
pub struct CodeProgress {
    bar: ProgressBar,
    plain: bool,
}

impl CodeProgress {
    /// Progress that tracks state but prints nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            plain: false,
        }
    }

    /// Plain-text progress for non-terminal stdout
    pub fn plain(len: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(len);
        Self { bar, plain: true }
    }

    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Show `accepted` of `requested` codes
    pub fn update(&self, accepted: usize, requested: usize) {
        let line = render_progress(accepted, requested);
        self.bar.set_position(accepted as u64);
        if self.plain {
            let mut stdout = io::stdout().lock();
            let _ = write!(stdout, "\r{}", line);
            let _ = stdout.flush();
        }
        self.bar.set_message(line);
    }

    pub fn finish(&self) {
        self.bar.finish();
        self.end_plain_line();
    }

    pub fn abandon(&self) {
        self.bar.abandon();
        self.end_plain_line();
    }

    fn end_plain_line(&self) {
        if self.plain {
            println!();
        }
    }
}

/// Create the stdout progress line for code generation.
///
/// The bar itself is rendered by [`render_progress`] into the message so the
/// line keeps a fixed layout; indicatif only handles the in-place redraw.
pub fn create_code_progress(len: u64) -> CodeProgress {
    if !console::user_attended() {
        return CodeProgress::plain(len);
    }
    let bar = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stdout());
    bar.set_style(ProgressStyle::default_bar().template("{msg}").unwrap());
    CodeProgress { bar, plain: false }
}

/// Render `│███──…│  42.0%` for `accepted` of `requested` codes
pub fn render_progress(accepted: usize, requested: usize) -> String {
    let fraction = if requested == 0 {
        1.0
    } else {
        (accepted as f64 / requested as f64).min(1.0)
    };
    let filled = ((fraction * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);

    format!(
        "│{}{}│  {:.1}%",
        "█".repeat(filled),
        "─".repeat(BAR_WIDTH - filled),
        fraction * 100.0
    )
}
