use crate::error::ChartResult;
use crate::render::{Renderer, SvgElement};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates the tree so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_element_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, document: &SvgElement) -> ChartResult<()> {
        document.validate()?;
        self.last_element_count = document.find_all(&|_| true).len();
        self.render_count += 1;
        Ok(())
    }
}
