//! Drives registered widgets at fixed periods and writes their output.
//!
//! Each widget is registered with an explicit refresh period. The run loop
//! is single threaded: refreshes are serialized, one line of output per
//! refresh, flushed per tick. A widget whose refresh overruns its period is
//! simply refreshed late; deadlines restart from completion, so there are
//! no catch-up bursts.

use std::io::Write;
use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::widget::Widget;

struct Entry {
    widget: Box<dyn Widget>,
    period: Duration,
    due: Instant,
}

/// Fixed-period scheduler for widgets.
#[derive(Default)]
pub struct Runner {
    entries: Vec<Entry>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget to be refreshed every `period`, starting with the
    /// next tick.
    pub fn register(&mut self, widget: Box<dyn Widget>, period: Duration) {
        debug!(widget = widget.name(), period = ?period, "widget registered");
        self.entries.push(Entry {
            widget,
            period,
            due: Instant::now(),
        });
    }

    /// Refresh every widget due at `now`, returning the earliest next
    /// deadline.
    fn tick(&mut self, now: Instant, out: &mut dyn Write) -> Result<Instant> {
        let mut refreshed = false;
        for entry in &mut self.entries {
            if entry.due <= now {
                let text = entry.widget.render();
                writeln!(out, "{text}")?;
                entry.due = Instant::now() + entry.period;
                refreshed = true;
            }
        }
        if refreshed {
            out.flush()?;
        }

        self.entries
            .iter()
            .map(|entry| entry.due)
            .min()
            .context("no widgets registered")
    }

    /// Run the tick loop until the process is killed. Errors only on an
    /// unwritable output sink or an empty registration list.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<()> {
        if self.entries.is_empty() {
            bail!("no widgets registered");
        }

        loop {
            let next = self.tick(Instant::now(), out)?;
            let now = Instant::now();
            if next > now {
                sleep(next - now);
            }
        }
    }
}
