use std::collections::BTreeMap;

use crate::{
    foundation::core::{ElementId, Viewport},
    foundation::error::{ReelError, ReelResult},
};

/// Layout measurements consumed from the rendering collaborator.
///
/// Positions are document pixels for the current layout, i.e. the element's bounding top plus
/// the current scroll offset.
pub trait LayoutProbe {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Document top of `id`, or `None` when the element is not mounted.
    fn element_top(&self, id: &ElementId) -> Option<f64>;

    /// Maximum scroll offset of the document.
    ///
    /// May be negative or non-finite when the document is shorter than the viewport; callers
    /// treat that as nothing to scroll.
    fn max_scroll(&self) -> f64;

    /// Replace the set of pin spacers (extra height inserted below each pinned element).
    fn set_pin_spacers(&mut self, spacers: &[(ElementId, f64)]);

    /// Return `true` when `id` is mounted.
    fn contains(&self, id: &ElementId) -> bool {
        self.element_top(id).is_some()
    }
}

#[derive(Clone, Debug)]
struct SectionBox {
    id: ElementId,
    height_vh: f64,
}

/// Vertical stack of full-width sections, used when no real document is available.
///
/// Section heights and element offsets are given in viewport heights so a resize reflows the
/// whole page the way `vh`-sized sections do.
#[derive(Clone, Debug)]
pub struct StackedLayout {
    viewport: Viewport,
    sections: Vec<SectionBox>,
    elements: BTreeMap<ElementId, (ElementId, f64)>,
    spacers: BTreeMap<ElementId, f64>,
}

impl StackedLayout {
    /// Empty document for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sections: Vec::new(),
            elements: BTreeMap::new(),
            spacers: BTreeMap::new(),
        }
    }

    /// Append a section of `height_vh` viewport heights.
    pub fn section(mut self, id: impl Into<ElementId>, height_vh: f64) -> ReelResult<Self> {
        let id = id.into();
        if !(height_vh >= 0.0 && height_vh.is_finite()) {
            return Err(ReelError::layout(format!(
                "section '{id}' needs a finite height >= 0 (got {height_vh})"
            )));
        }
        if self.sections.iter().any(|s| s.id == id) {
            return Err(ReelError::layout(format!("duplicate section '{id}'")));
        }
        self.sections.push(SectionBox { id, height_vh });
        Ok(self)
    }

    /// Place `id` inside `section`, `offset_vh` viewport heights below the section top.
    pub fn element(
        mut self,
        id: impl Into<ElementId>,
        section: impl Into<ElementId>,
        offset_vh: f64,
    ) -> ReelResult<Self> {
        let id = id.into();
        let section = section.into();
        if !self.sections.iter().any(|s| s.id == section) {
            return Err(ReelError::layout(format!(
                "element '{id}' placed in unknown section '{section}'"
            )));
        }
        self.elements.insert(id, (section, offset_vh));
        Ok(self)
    }

    /// Place several elements at the same offset.
    pub fn elements<I, E>(
        mut self,
        ids: I,
        section: impl Into<ElementId>,
        offset_vh: f64,
    ) -> ReelResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<ElementId>,
    {
        let section = section.into();
        for id in ids {
            self = self.element(id, section.clone(), offset_vh)?;
        }
        Ok(self)
    }

    /// Resize the viewport; everything sized in viewport heights reflows.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Remove a section and every element placed in it (simulates unmounting).
    pub fn remove_section(&mut self, id: &ElementId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| &s.id != id);
        self.elements.retain(|_, (section, _)| section != id);
        self.spacers.remove(id);
        before != self.sections.len()
    }

    /// Total document height including pin spacers.
    pub fn document_height(&self) -> f64 {
        self.sections
            .iter()
            .map(|s| self.section_extent(s))
            .sum()
    }

    fn section_extent(&self, s: &SectionBox) -> f64 {
        s.height_vh * self.viewport.height + self.spacers.get(&s.id).copied().unwrap_or(0.0)
    }

    fn section_top(&self, id: &ElementId) -> Option<f64> {
        let mut top = 0.0;
        for s in &self.sections {
            if &s.id == id {
                return Some(top);
            }
            top += self.section_extent(s);
        }
        None
    }
}

impl LayoutProbe for StackedLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn element_top(&self, id: &ElementId) -> Option<f64> {
        if let Some(top) = self.section_top(id) {
            return Some(top);
        }
        let (section, offset_vh) = self.elements.get(id)?;
        self.section_top(section)
            .map(|top| top + offset_vh * self.viewport.height)
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    fn set_pin_spacers(&mut self, spacers: &[(ElementId, f64)]) {
        self.spacers = spacers
            .iter()
            .filter(|(_, px)| *px > 0.0)
            .cloned()
            .collect();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/layout.rs"]
mod tests;
