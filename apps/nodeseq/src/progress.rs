//! Terminal progress bar driven by the batch observer hooks.

use indicatif::{ProgressBar, ProgressStyle};

use ns_batch::{ObserverError, ProgressObserver};

pub struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    pub fn new(total: usize) -> Result<Self, ObserverError> {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
                .progress_chars("##-"),
        );
        bar.set_message(format!("Finding node sequences (0/{total})"));
        Ok(Self { bar })
    }
}

impl ProgressObserver for BarObserver {
    fn on_progress(&mut self, completed: usize, total: usize) -> Result<(), ObserverError> {
        self.bar.set_position(completed as u64);
        self.bar.set_message(format!("Finding node sequences ({completed}/{total})"));
        Ok(())
    }

    fn on_batch_end(&mut self, routes: usize) {
        self.bar.finish_with_message(format!("Found node sequences for {routes} routes"));
    }
}

impl Drop for BarObserver {
    fn drop(&mut self) {
        // Leaves the bar in place when the batch aborted.
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}
