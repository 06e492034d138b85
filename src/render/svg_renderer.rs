use crate::error::ChartResult;
use crate::render::{Renderer, SvgElement};

/// Serializes each rendered tree into SVG markup.
#[derive(Debug, Default)]
pub struct SvgStringRenderer {
    output: String,
}

impl SvgStringRenderer {
    /// Markup of the last rendered tree.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl Renderer for SvgStringRenderer {
    fn render(&mut self, document: &SvgElement) -> ChartResult<()> {
        document.validate()?;
        self.output = document.to_svg_string();
        Ok(())
    }
}
