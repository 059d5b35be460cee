use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use indicatif::{HumanDuration, ProgressBar, ProgressDrawTarget, ProgressStyle};

pub struct Progress {
    enabled: bool,
    start: Instant,
    bar: ProgressBar,
    articles_done: AtomicU64,
    articles_failed: AtomicU64,
}

impl Progress {
    pub fn new(enabled: bool, total_articles: usize) -> Arc<Self> {
        let start = Instant::now();

        if !enabled {
            return Arc::new(Self {
                enabled: false,
                start,
                bar: ProgressBar::hidden(),
                articles_done: AtomicU64::new(0),
                articles_failed: AtomicU64::new(0),
            });
        }

        let bar = ProgressBar::with_draw_target(
            Some(total_articles as u64),
            ProgressDrawTarget::stderr(),
        );
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner} {bar:30.cyan/blue} {pos}/{len} articles  {msg}  [{elapsed_precise}]",
            )
            .expect("progress template")
            .progress_chars("##-"),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_message("starting");

        Arc::new(Self {
            enabled: true,
            start,
            bar,
            articles_done: AtomicU64::new(0),
            articles_failed: AtomicU64::new(0),
        })
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.bar.set_message(msg.into());
    }

    pub fn article_done(&self, ok: bool) {
        self.articles_done.fetch_add(1, Ordering::Relaxed);
        if !ok {
            self.articles_failed.fetch_add(1, Ordering::Relaxed);
        }
        if self.enabled {
            self.bar.inc(1);
        }
    }

    /// Prints a line to stdout without tearing the bar.
    pub fn println(&self, line: impl AsRef<str>) {
        let line = line.as_ref();
        self.bar.suspend(|| println!("{line}"));
    }

    pub fn finish(&self) {
        if !self.enabled {
            return;
        }
        let done = self.articles_done.load(Ordering::Relaxed);
        let failed = self.articles_failed.load(Ordering::Relaxed);
        self.bar.finish_and_clear();
        eprintln!(
            "Done: {done} articles ({failed} failed) in {}",
            HumanDuration(self.start.elapsed())
        );
    }
}
