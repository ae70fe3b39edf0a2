use crate::editor::Editor;
use crate::procgen::biome_mask::BiomeLayer;
use crate::procgen::config::GeneratorConfig;
use crate::procgen::error::GenerationError;
use crate::procgen::materializer::GenerationStats;
use crate::procgen::normalizer::ImageNormalizer;
use crate::procgen::observer::{ProgressSink, SettingsReader};
use crate::procgen::spec::{GenerationSource, GenerationSpec};

pub struct ProceduralGenerator {
    pub(super) normalizer: ImageNormalizer,
    pub(super) biome_layer: BiomeLayer,
    pub(super) progress_interval_rows: u32,
}

impl ProceduralGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            normalizer: ImageNormalizer::new(config.resample_filter),
            biome_layer: BiomeLayer::new(config.classifier),
            progress_interval_rows: config.progress_interval_rows,
        }
    }

    pub fn run(
        &self,
        editor: &mut Editor,
        spec: &GenerationSpec,
        settings: &dyn SettingsReader,
        progress: &mut dyn ProgressSink,
    ) -> Result<GenerationStats, GenerationError> {
        log::info!(
            "generating {} at {}x{} on layer {} (seed {})",
            spec.source.kind(),
            spec.size.width,
            spec.size.height,
            spec.size.layer,
            spec.seed
        );
        match &spec.source {
            GenerationSource::ImageMask { .. } => {
                self.generate_from_image(editor, spec, settings, progress)
            }
            GenerationSource::TextPrompt { .. } => {
                self.generate_from_prompt(editor, spec, progress)
            }
        }
    }
}
