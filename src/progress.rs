#![forbid(unsafe_code)]

use std::io::Read;

use indicatif::{ProgressBar, ProgressBarIter, ProgressDrawTarget, ProgressStyle};

// Fixed bar width keeps the whole line within 80 columns.
const BAR_TEMPLATE: &str =
    "{bytes}/{total_bytes} [{bar:24}] {percent}% {binary_bytes_per_sec} {elapsed} eta {eta}";
const SPINNER_TEMPLATE: &str = "{spinner} {bytes} {binary_bytes_per_sec} {elapsed}";

////////////////////////////////////////////////////////////////////////////////

/// Progress display on stderr fed by the bytes pulled from a source. It only
/// watches: the wrapped reader yields exactly what the source yields.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// `len` is the source size when known, `None` for pipes.
    pub fn new(len: Option<u64>) -> Self {
        let (bar, template) = match len {
            Some(len) => (ProgressBar::new(len), BAR_TEMPLATE),
            None => (ProgressBar::new_spinner(), SPINNER_TEMPLATE),
        };
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_draw_target(ProgressDrawTarget::stderr());
        Self { bar }
    }

    pub fn wrap<R: Read>(&self, source: R) -> ProgressBarIter<R> {
        self.bar.wrap_read(source)
    }

    pub fn finish(&self) {
        self.bar.finish();
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

////////////////////////////////////////////////////////////////////////////////
