pub mod biome;
pub mod biome_mask;
pub mod config;
pub mod error;
pub mod generator;
mod image_mask;
pub mod layer;
pub mod materializer;
pub mod normalizer;
pub mod observer;
pub mod selector;
pub mod spec;
mod text_prompt;

pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use generator::ProceduralGenerator;
pub use materializer::GenerationStats;
pub use spec::{GenerationSize, GenerationSource, GenerationSpec, SourceKind};
