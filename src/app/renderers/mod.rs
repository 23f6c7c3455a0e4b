pub mod csv_renderer;
pub mod json_renderer;
pub mod text_renderer;

pub use csv_renderer::CsvRenderer;
pub use json_renderer::JsonRenderer;
pub use text_renderer::TextRenderer;

use crate::core::{DtiResult, ResultRenderer};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GAUGE_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Renderer picked at runtime from an [`OutputFormat`].
#[derive(Debug, Clone)]
pub enum AnyRenderer {
    Text(TextRenderer),
    Json(JsonRenderer),
    Csv(CsvRenderer),
}

impl AnyRenderer {
    pub fn for_format(format: OutputFormat, gauge_width: usize) -> Self {
        match format {
            OutputFormat::Text => AnyRenderer::Text(TextRenderer::new(gauge_width)),
            OutputFormat::Json => AnyRenderer::Json(JsonRenderer::new()),
            OutputFormat::Csv => AnyRenderer::Csv(CsvRenderer::new()),
        }
    }
}

impl ResultRenderer for AnyRenderer {
    fn render(&self, result: &DtiResult) -> Result<String> {
        match self {
            AnyRenderer::Text(renderer) => renderer.render(result),
            AnyRenderer::Json(renderer) => renderer.render(result),
            AnyRenderer::Csv(renderer) => renderer.render(result),
        }
    }
}
