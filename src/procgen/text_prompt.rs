use crate::editor::Editor;
use crate::procgen::error::GenerationError;
use crate::procgen::generator::ProceduralGenerator;
use crate::procgen::materializer::GenerationStats;
use crate::procgen::observer::ProgressSink;
use crate::procgen::spec::{GenerationSource, GenerationSpec};

impl ProceduralGenerator {
    pub fn generate_from_prompt(
        &self,
        _editor: &mut Editor,
        spec: &GenerationSpec,
        progress: &mut dyn ProgressSink,
    ) -> Result<GenerationStats, GenerationError> {
        let GenerationSource::TextPrompt { prompt } = &spec.source else {
            return Err(GenerationError::UnknownSource(spec.source.kind().to_string()));
        };
        if prompt.is_empty() {
            return Err(GenerationError::MissingInput("prompt"));
        }

        let message = format!("Prompt: {prompt}\nSeed: {}\n", spec.seed);
        progress.notify("Procedural Generation (Prompt - stub)", &message);
        Ok(GenerationStats::default())
    }
}
