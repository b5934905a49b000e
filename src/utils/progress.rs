use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the files of the target folder
pub struct FileProgress {
    bar: Option<ProgressBar>,
}

impl FileProgress {
    /// Create a bar for `total` files; a disabled bar draws nothing
    pub fn new(total: usize, enabled: bool) -> Self {
        let bar = if enabled && total > 0 {
            Some(create_progress_bar(total))
        } else {
            None
        };

        Self { bar }
    }

    pub fn hidden() -> Self {
        Self { bar: None }
    }

    /// Show the file currently being processed
    pub fn set_message(&self, file_name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(file_name.to_string());
        }
    }

    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}") {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}
