use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use crate::app_config::{Config, DesignSettings};
use crate::document::Presentation;
use crate::file_utils::FileManager;
use crate::providers::groq::Groq;
use crate::providers::Rewriter;
use crate::{rebuild, theme};

// @module: Application controller for presentation enhancement

/// Main application controller driving the presentation pipeline.
///
/// Owns the resolved design settings and the rewrite provider for one run;
/// each slide is processed strictly in document order because results are
/// written back into the same document object.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Resolved visual settings, immutable for the run
    settings: DesignSettings,
    // @field: Rewrite provider
    rewriter: Arc<dyn Rewriter>,
}

impl Controller {
    /// Create a controller with the production Groq rewriter.
    pub fn with_config(config: Config) -> Result<Self> {
        let rewrite = &config.rewrite;
        let rewriter = Arc::new(Groq::new(
            rewrite.api_key.clone(),
            rewrite.endpoint.clone(),
            rewrite.model.clone(),
            rewrite.temperature,
            rewrite.timeout_secs,
        ));
        Self::with_rewriter(config, rewriter)
    }

    /// Create a controller with an explicit rewriter, used by tests to swap
    /// in a deterministic stub.
    pub fn with_rewriter(config: Config, rewriter: Arc<dyn Rewriter>) -> Result<Self> {
        let settings = config
            .design
            .resolve()
            .context("Design settings are invalid")?;
        Ok(Self {
            config,
            settings,
            rewriter,
        })
    }

    /// Resolved design settings for this run.
    pub fn settings(&self) -> &DesignSettings {
        &self.settings
    }

    /// Run reconstruction and theming over every slide of the document.
    ///
    /// Per-slide rewrite failures are absorbed inside reconstruction; this
    /// only fails on structural problems, which none of the in-memory
    /// passes produce.
    pub async fn process(&self, presentation: &mut Presentation, instructions: &str) {
        let total = presentation.slides.len();
        let progress = ProgressBar::new(total as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] slide {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        for (index, slide) in presentation.slides.iter_mut().enumerate() {
            debug!("Processing slide {}/{}", index + 1, total);
            rebuild::reconstruct(slide, self.rewriter.as_ref(), instructions, &self.settings).await;
            theme::apply_theme(slide, &self.settings);
            progress.inc(1);
        }

        progress.finish_and_clear();
    }

    /// Enhance a single deck file and write the result next to it.
    ///
    /// Document load and save failures are fatal for the run; they surface
    /// to the caller with no partial output.
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_file: Option<PathBuf>,
        instructions: &str,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow::anyhow!(
                "Input file does not exist: {:?}",
                input_file
            ));
        }

        let output_path =
            output_file.unwrap_or_else(|| FileManager::generate_output_path(&input_file));
        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping file, output already exists (use -f to force overwrite): {:?}",
                output_path
            );
            return Ok(());
        }

        let bytes = FileManager::read_bytes(&input_file)?;
        let mut presentation = Presentation::from_bytes(&bytes)
            .with_context(|| format!("Cannot parse deck: {:?}", input_file))?;

        info!(
            "Enhancing {} slide(s) from {:?}",
            presentation.slides.len(),
            input_file
        );

        self.process(&mut presentation, instructions).await;

        let output_bytes = presentation
            .to_bytes()
            .with_context(|| format!("Cannot serialize deck: {:?}", input_file))?;
        FileManager::write_bytes(&output_path, &output_bytes)?;

        info!(
            "Enhanced deck written to {:?} in {:.1}s",
            output_path,
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Enhance every deck file under a directory.
    ///
    /// Per-file failures are logged and do not stop the walk; previously
    /// enhanced outputs are skipped.
    pub async fn run_folder(
        &self,
        input_dir: &Path,
        instructions: &str,
        force_overwrite: bool,
    ) -> Result<()> {
        info!("Enhancing decks under directory: {:?}", input_dir);

        let mut processed_count = 0;
        for path in FileManager::find_deck_files(input_dir)? {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            if name.contains(".enhanced.") {
                continue;
            }

            if let Err(e) = self
                .run(path.clone(), None, instructions, force_overwrite)
                .await
            {
                error!("Error processing {:?}: {}", path, e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} deck(s)", processed_count);
        Ok(())
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
