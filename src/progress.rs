//! Progress bar display for an install session

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over the artifacts of one session
pub struct ProgressDisplay {
    artifact_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total artifact count
    pub fn new(total_artifacts: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let artifact_pb = ProgressBar::new(total_artifacts);
        artifact_pb.set_style(style);

        Self { artifact_pb }
    }

    /// Show the artifact currently being installed
    pub fn start_artifact(&self, name: &str) {
        self.artifact_pb.set_message(name.to_string());
    }

    /// Show the file currently being fetched
    pub fn update_file(&self, artifact: &str, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.len() > 50 {
            let cut = file_path.len() - 47;
            let cut = (cut..file_path.len())
                .find(|&i| file_path.is_char_boundary(i))
                .unwrap_or(cut);
            format!("...{}", &file_path[cut..])
        } else {
            file_path.to_string()
        };
        self.artifact_pb.set_message(format!("{artifact}: {display_path}"));
    }

    /// Increment artifact progress
    pub fn inc_artifact(&self) {
        self.artifact_pb.inc(1);
    }

    /// Hide the bar while `f` runs, e.g. for a prompt
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.artifact_pb.suspend(f)
    }

    pub fn finish(&self) {
        self.artifact_pb.finish_and_clear();
    }
}
