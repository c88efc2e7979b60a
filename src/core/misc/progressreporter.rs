use indicatif::*;

/// Frame progress bar for multi-frame runs.
pub struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total_work: usize, title: &str) -> Self {
        let pb = ProgressBar::new(total_work as u64);
        let template = format!("{{spinner:.bold.green}} {}: ", title)
            + "[{wide_bar:.cyan}] {pos}/{len} ({elapsed_precise}|{eta_precise}) ";
        if let Ok(style) = ProgressStyle::with_template(&template) {
            pb.set_style(style.progress_chars("█▇▆▅▄▃▂▁  "));
        }
        pb.tick();
        ProgressReporter { pb }
    }

    /// A reporter that draws nothing, for `--quiet` runs.
    pub fn hidden(total_work: usize) -> Self {
        ProgressReporter {
            pb: ProgressBar::with_draw_target(Some(total_work as u64), ProgressDrawTarget::hidden()),
        }
    }

    pub fn update(&mut self, num: usize) {
        if num != 0 {
            self.pb.inc(num as u64);
        }
    }

    pub fn position(&self) -> u64 {
        return self.pb.position();
    }

    pub fn done(&mut self) {
        self.pb.finish();
    }
}
