use crate::editor::action::ActionKind;
use crate::editor::Editor;
use crate::procgen::error::GenerationError;
use crate::procgen::generator::ProceduralGenerator;
use crate::procgen::layer::Layer;
use crate::procgen::materializer::{GenerationStats, TileMaterializer};
use crate::procgen::observer::{ProgressSink, SettingsReader};
use crate::procgen::selector::BiomePair;
use crate::procgen::spec::{GenerationSource, GenerationSpec};

const GENERATION_BATCH_PRIORITY: u32 = 2;

impl ProceduralGenerator {
    pub fn generate_from_image(
        &self,
        editor: &mut Editor,
        spec: &GenerationSpec,
        settings: &dyn SettingsReader,
        progress: &mut dyn ProgressSink,
    ) -> Result<GenerationStats, GenerationError> {
        let GenerationSource::ImageMask {
            image_path,
            legend_path,
        } = &spec.source
        else {
            return Err(GenerationError::UnknownSource(spec.source.kind().to_string()));
        };

        if image_path.as_os_str().is_empty() {
            return Err(GenerationError::MissingInput("image"));
        }
        if let Some(legend) = legend_path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            log::warn!("legend files are not supported yet, ignoring {}", legend.display());
        }

        let image = self.normalizer.decode(image_path)?;
        spec.size.validate()?;
        // validate() guarantees positive dimensions
        let (width, height) = (spec.size.width as u32, spec.size.height as u32);
        let pixels = self.normalizer.fit(image, width, height);

        let pair = BiomePair::select(&editor.brushes).ok_or(GenerationError::NoGroundAvailable)?;
        let materializer = TileMaterializer::new(
            &editor.brushes,
            pair,
            spec.size.layer,
            self.progress_interval_rows,
        )
        .ok_or(GenerationError::NoGroundAvailable)?;
        if pair.water_aliases_land() {
            log::warn!("no water ground brush found, painting water cells as land");
        }

        let mask = self.biome_layer.generate(&pixels);
        drop(pixels);

        editor.selection.clear();
        let mut batch = editor.action_queue.create_batch(ActionKind::Draw);
        let mut action = editor.action_queue.create_action(&batch);

        let stats = materializer.paint(&mut editor.map, &mask, &mut action, settings, progress);

        batch.add_and_commit_action(&mut editor.map, action);
        editor.add_batch(batch, GENERATION_BATCH_PRIORITY);
        editor.refresh_view();

        log::info!(
            "painted {} tiles ({} land, {} water) from {}",
            stats.tiles_changed,
            stats.land_cells,
            stats.water_cells,
            image_path.display()
        );
        Ok(stats)
    }
}
