// File: crates/cartesian-samples/src/session.rs
// Summary: Drives pages through their scripted interactions and collects PNG/CSV output.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cartesian_core::{theme, RenderOptions};
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::data::CsvRecord;
use crate::pages::{PageSettings, SamplePage};

/// Write `rows` with a header line to `path`.
pub fn write_csv<R: CsvRecord>(path: &Path, rows: &[R]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut w = csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    w.write_record(R::headers())?;
    for row in rows {
        w.write_record(row.record())?;
    }
    w.flush()?;
    Ok(())
}

pub struct Session {
    pub config: HarnessConfig,
    written: Vec<PathBuf>,
}

impl Session {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config, written: Vec::new() }
    }

    pub fn page_dir(&self, page: &str) -> PathBuf {
        self.config.output_dir.join(page)
    }

    pub fn page_settings(&self, page: &str) -> PageSettings {
        PageSettings {
            page_width: self.config.page_width,
            theme: theme::find(&self.config.theme),
            seed: self.config.seed,
            export_dir: self.page_dir(page),
        }
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] { &self.written }

    /// Click through the page's script, letting animations finish after each step.
    pub fn run_page(&mut self, page: &mut dyn SamplePage) -> anyhow::Result<()> {
        info!(page = page.name(), "running page");
        self.snapshot(page, 0, "initial")?;
        for (i, step) in page.script().into_iter().enumerate() {
            if step.saves && !self.config.export {
                debug!(page = page.name(), step = step.label, "export disabled; skipping save");
                continue;
            }
            page.fire(step.control, step.event)
                .with_context(|| format!("{}: step '{}'", page.name(), step.label))?;
            let frames = page.advance(self.config.max_frames)?;
            if frames > 0 {
                debug!(page = page.name(), step = step.label, frames, "animation advanced");
            }
            self.snapshot(page, i + 1, step.label)?;
        }
        self.written.extend(page.downloads().iter().cloned());
        if self.config.dump_csv {
            let files = page.write_csv(&self.page_dir(page.name()))?;
            self.written.extend(files);
        }
        Ok(())
    }

    fn snapshot(&mut self, page: &mut dyn SamplePage, index: usize, label: &str) -> anyhow::Result<()> {
        if !self.config.export {
            return Ok(());
        }
        let dir = self.page_dir(page.name());
        for (chart, scene) in page.scenes() {
            let path = dir.join(format!("{index:02}-{label}-{chart}.png"));
            scene.write_png(&RenderOptions::default(), &path)
                .with_context(|| format!("writing {}", path.display()))?;
            self.written.push(path);
        }
        Ok(())
    }
}
