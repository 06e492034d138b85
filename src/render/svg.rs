use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::primitives::format_coord;
use crate::error::{ChartError, ChartResult};

/// Child of an [`SvgElement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

/// Backend-agnostic SVG element tree.
///
/// Attributes keep insertion order so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SvgElement {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<SvgNode>,
}

// Attributes that must hold finite numbers when present.
const NUMERIC_ATTRIBUTES: [&str; 10] = [
    "x", "y", "x1", "y1", "x2", "y2", "cx", "cy", "r", "stroke-width",
];
const NON_NEGATIVE_ATTRIBUTES: [&str; 2] = ["width", "height"];

impl SvgElement {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn group() -> Self {
        Self::new("g")
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn num(self, name: impl Into<String>, value: f64) -> Self {
        self.attr(name, format_coord(value))
    }

    #[must_use]
    pub fn child(mut self, child: SvgElement) -> Self {
        self.children.push(SvgNode::Element(child));
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = SvgElement>) -> Self {
        self.children
            .extend(children.into_iter().map(SvgNode::Element));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgNode::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: SvgElement) {
        self.children.push(SvgNode::Element(child));
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn element_children(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|child| match child {
            SvgNode::Element(element) => Some(element),
            SvgNode::Text(_) => None,
        })
    }

    /// Concatenated direct text content.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                SvgNode::Text(text) => Some(text.as_str()),
                SvgNode::Element(_) => None,
            })
            .collect()
    }

    /// Depth-first search, `self` included.
    #[must_use]
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&SvgElement) -> bool) -> Vec<&'a SvgElement> {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a>(
        &'a self,
        predicate: &dyn Fn(&SvgElement) -> bool,
        found: &mut Vec<&'a SvgElement>,
    ) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.element_children() {
            child.collect_matching(predicate, found);
        }
    }

    #[must_use]
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&SvgElement> {
        self.find_all(&|element| element.get_attr(name) == Some(value))
            .into_iter()
            .next()
    }

    #[must_use]
    pub fn count_tag(&self, tag: &str) -> usize {
        self.find_all(&|element| element.tag == tag).len()
    }

    /// Checks numeric geometry attributes across the whole tree.
    pub fn validate(&self) -> ChartResult<()> {
        if self.tag.is_empty() {
            return Err(ChartError::InvalidData(
                "svg element tag must not be empty".to_owned(),
            ));
        }
        for (name, value) in &self.attributes {
            let numeric = NUMERIC_ATTRIBUTES.contains(&name.as_str());
            let non_negative = NON_NEGATIVE_ATTRIBUTES.contains(&name.as_str());
            if !numeric && !non_negative {
                continue;
            }
            let Ok(number) = value.parse::<f64>() else {
                continue;
            };
            if !number.is_finite() || (non_negative && number < 0.0) {
                return Err(ChartError::InvalidData(format!(
                    "<{}> attribute `{name}` has invalid value `{value}`",
                    self.tag
                )));
            }
        }
        for child in self.element_children() {
            child.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out, 0);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_xml(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        let text_only = self
            .children
            .iter()
            .all(|child| matches!(child, SvgNode::Text(_)));
        if text_only {
            out.push('>');
            out.push_str(&escape_xml(&self.text_content()));
            out.push_str(&format!("</{}>\n", self.tag));
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            match child {
                SvgNode::Element(element) => element.write_to(out, depth + 1),
                SvgNode::Text(text) => {
                    out.push_str(&"  ".repeat(depth + 1));
                    out.push_str(&escape_xml(text));
                    out.push('\n');
                }
            }
        }
        out.push_str(&indent);
        out.push_str(&format!("</{}>\n", self.tag));
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
