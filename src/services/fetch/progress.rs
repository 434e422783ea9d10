use indicatif::{ProgressBar, ProgressStyle};

const BYTES_TEMPLATE: &str =
    "{spinner} [{elapsed_precise}] [{bar:40}] {bytes}/{total_bytes} ({bytes_per_sec})";
const SPINNER_TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bytes} ({bytes_per_sec})";

/// Receives byte counts while a download is in flight.
pub trait DownloadProgress {
    /// Called once before the first block. `total` is the declared length, if any.
    fn start(&mut self, total: Option<u64>);
    /// Called after each block with the running number of received bytes.
    fn advance(&mut self, received: u64);
    fn finish(&mut self);
}

/// Discards all progress updates.
#[derive(Debug, Default)]
pub struct NoProgress;

impl DownloadProgress for NoProgress {
    fn start(&mut self, _total: Option<u64>) {}
    fn advance(&mut self, _received: u64) {}
    fn finish(&mut self) {}
}

/// Terminal progress bar. Falls back to a spinner when the length is unknown.
#[derive(Default)]
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
}

impl DownloadProgress for ConsoleProgress {
    fn start(&mut self, total: Option<u64>) {
        let (bar, template) = match total {
            Some(len) => (ProgressBar::new(len), BYTES_TEMPLATE),
            None => (ProgressBar::new_spinner(), SPINNER_TEMPLATE),
        };
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style.progress_chars("=> "));
        }
        self.bar = Some(bar);
    }

    fn advance(&mut self, received: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(received);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
