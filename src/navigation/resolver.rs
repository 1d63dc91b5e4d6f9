use crate::{
    foundation::core::ElementId,
    scroll::controller::ScrollController,
    scroll::layout::LayoutProbe,
};

/// Where a navigation target was resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// A pinned binding's region.
    Pinned,
    /// A threshold binding's region.
    Region,
    /// The element's measured document top.
    Measured,
}

/// Resolved scroll offset for a section.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScrollTarget {
    /// Requested element.
    pub section: ElementId,
    /// Scroll offset to land on, in document pixels.
    pub offset_px: f64,
    /// How the offset was derived.
    pub source: TargetSource,
}

/// Maps section ids to landing scroll offsets.
pub struct NavigationResolver;

impl NavigationResolver {
    /// Resolve the scroll offset for `id`.
    ///
    /// Layout is refreshed first. A registered region lands at its reveal fraction; without one
    /// the element's measured top is used. Returns `None` only when the element is not mounted.
    #[tracing::instrument(skip(controller, probe), fields(section = %id))]
    pub fn resolve<P: LayoutProbe>(
        controller: &mut ScrollController,
        probe: &mut P,
        id: &ElementId,
    ) -> Option<ScrollTarget> {
        controller.refresh(probe);

        if let Some((binding, region)) = controller.find_region(id) {
            let fraction = binding.reveal_fraction();
            let source = if binding.is_pinned() {
                TargetSource::Pinned
            } else {
                TargetSource::Region
            };
            let offset_px = region.offset_at(fraction);
            tracing::debug!(offset_px, fraction, ?source, "navigation resolved");
            return Some(ScrollTarget {
                section: id.clone(),
                offset_px,
                source,
            });
        }

        let Some(top) = probe.element_top(id) else {
            tracing::warn!("navigation target not mounted");
            return None;
        };
        tracing::debug!(offset_px = top, "navigation fell back to measured top");
        Some(ScrollTarget {
            section: id.clone(),
            offset_px: top,
            source: TargetSource::Measured,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/resolver.rs"]
mod tests;
