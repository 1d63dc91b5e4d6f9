//! The nine landing-page sections, in document order.
//!
//! Pinned sections share one shape: an entrance over `[0, 0.3]`, a hold, and an exit that runs to
//! `1.0` with every element leaving toward the side opposite its entrance. Entrance tweens are
//! linear so the pin feels tied to the scroll wheel; exits accelerate out (`power2.in`).

use crate::{
    animation::builder::{Position, TimelineBuilder},
    animation::ease::Ease,
    animation::timeline::{
        Property::{self, Opacity, Scale, ScaleX, ScaleY, X, Y},
        TargetProperty,
    },
    choreography::content::{
        DEEP_FEATURE_BULLETS, FEATURES, GALLERY_ITEMS, HERO_HEADLINE, TESTIMONIALS, WORKFLOW_STEPS,
    },
    choreography::section::{SectionChoreography, SectionMode},
    config::EngineConfig,
    foundation::core::{ElementId, Length, Viewport, px, vh, vw},
    foundation::error::ReelResult,
    scroll::binding::ScrollBinding,
    scroll::layout::StackedLayout,
};

/// Hero section id.
pub const HERO: &str = "hero";
/// Feature highlight section id.
pub const FEATURES_SECTION: &str = "features";
/// Three-up feature grid section id.
pub const THREE_UP: &str = "three-up";
/// Deep feature section id.
pub const DEEP_FEATURE: &str = "deep-feature";
/// Workflow section id.
pub const WORKFLOW: &str = "workflow";
/// Gallery mosaic section id.
pub const GALLERY: &str = "gallery";
/// Dark download section id.
pub const DOWNLOAD: &str = "download";
/// Testimonials section id.
pub const TESTIMONIALS_SECTION: &str = "testimonials";
/// Footer section id.
pub const FOOTER: &str = "footer";

/// Section ids in document order.
pub const LANDING_SECTIONS: [&str; 9] = [
    HERO,
    FEATURES_SECTION,
    THREE_UP,
    DEEP_FEATURE,
    WORKFLOW,
    GALLERY,
    DOWNLOAD,
    TESTIMONIALS_SECTION,
    FOOTER,
];

const PIN_DISTANCE_VH: f64 = 1.3;
const PIN_SCRUB: f64 = 0.6;
const GALLERY_SCRUB: f64 = 0.3;
const REVEAL_SCRUB: f64 = 0.5;
const ENTER_END: f64 = 0.3;
const EXIT_START: f64 = 0.7;
const EXIT: f64 = 1.0 - EXIT_START;

fn part(section: &str, name: &str) -> ElementId {
    ElementId::new(section).child(name)
}

fn parts(section: &str, name: &str, n: usize) -> Vec<ElementId> {
    (0..n).map(|i| part(section, &format!("{name}{i}"))).collect()
}

fn shown() -> [(Property, Length); 2] {
    [(X, px(0.0)), (Opacity, px(1.0))]
}

/// Hero: plays its entrance on load, then only exits on scroll.
pub fn hero(viewport: Viewport) -> ReelResult<SectionChoreography> {
    let rule = part(HERO, "rule");
    let headline = part(HERO, "headline");
    let tile = part(HERO, "tile");
    let cta = part(HERO, "cta");
    let lines: Vec<ElementId> = (0..HERO_HEADLINE.len())
        .map(|i| headline.child(format!("line{i}")))
        .collect();
    let line_resets: Vec<(TargetProperty, f64)> = lines
        .iter()
        .flat_map(|line| {
            [
                (TargetProperty::new(line.clone(), Y), 0.0),
                (TargetProperty::new(line.clone(), Opacity), 1.0),
            ]
        })
        .collect();

    let (entrance, entrance_secs) = TimelineBuilder::new(viewport)
        .from_to(
            rule.clone(),
            &[(ScaleY, px(0.0))],
            &[(ScaleY, px(1.0))],
            Position::At(0.0),
            0.6,
            Ease::OutCubic,
        )
        .stagger(
            lines,
            &[(Y, px(40.0)), (Opacity, px(0.0))],
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            Position::Relative(-0.3),
            0.7,
            0.08,
            Ease::OutCubic,
        )
        .from_to(
            tile.clone(),
            &[(X, vw(12.0)), (Opacity, px(0.0)), (Scale, px(0.98))],
            &[(X, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
            Position::Relative(-0.5),
            0.9,
            Ease::OutCubic,
        )
        .from_to(
            cta.clone(),
            &[(Y, px(18.0)), (Opacity, px(0.0))],
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            Position::Relative(-0.4),
            0.5,
            Ease::OutCubic,
        )
        .build_with_length()?;

    // The rule starts shrinking with the first scroll; everything else waits for the exit.
    let scroll = TimelineBuilder::new(viewport)
        .span(1.0)
        .from_to(
            rule.clone(),
            &[(ScaleY, px(1.0)), (Opacity, px(1.0))],
            &[(ScaleY, px(0.5)), (Opacity, px(0.2))],
            Position::At(0.0),
            EXIT_START,
            Ease::Linear,
        )
        .from_to(
            headline.clone(),
            &shown(),
            &[(X, vw(-18.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            tile.clone(),
            &shown(),
            &[(X, vw(18.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            rule.clone(),
            &[(ScaleY, px(0.5)), (Opacity, px(0.2))],
            &[(ScaleY, px(0.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            cta.clone(),
            &[(Opacity, px(1.0))],
            &[(Opacity, px(0.0))],
            Position::At(0.75),
            0.25,
            Ease::InCubic,
        )
        .build()?;

    // Lines an interrupted entrance left hidden come back along with the container.
    let mut leave_back = line_resets;
    leave_back.extend([
        (TargetProperty::new(headline.clone(), X), 0.0),
        (TargetProperty::new(headline, Opacity), 1.0),
        (TargetProperty::new(tile.clone(), X), 0.0),
        (TargetProperty::new(tile, Opacity), 1.0),
        (TargetProperty::new(rule.clone(), ScaleY), 1.0),
        (TargetProperty::new(rule, Opacity), 1.0),
        (TargetProperty::new(cta, Opacity), 1.0),
    ]);
    let binding =
        ScrollBinding::pinned(HERO, PIN_DISTANCE_VH, PIN_SCRUB, scroll)?.with_leave_back(leave_back);

    Ok(SectionChoreography::new(HERO, SectionMode::PinnedScrub)
        .with_binding(binding)
        .with_entrance(entrance, entrance_secs))
}

/// Feature highlight: tile from the left, copy from the right.
pub fn features(viewport: Viewport) -> ReelResult<SectionChoreography> {
    let s = FEATURES_SECTION;
    let timeline = TimelineBuilder::new(viewport)
        .span(1.0)
        .from_to(
            part(s, "tile"),
            &[(X, vw(-60.0)), (Opacity, px(0.0)), (Scale, px(0.96))],
            &[(X, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "rule"),
            &[(ScaleX, px(0.0))],
            &[(ScaleX, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "text"),
            &[(X, vw(18.0)), (Opacity, px(0.0))],
            &shown(),
            Position::At(0.05),
            ENTER_END - 0.05,
            Ease::Linear,
        )
        .from_to(
            part(s, "tile"),
            &shown(),
            &[(X, vw(-22.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            part(s, "text"),
            &shown(),
            &[(X, vw(10.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            part(s, "rule"),
            &[(ScaleX, px(1.0)), (Opacity, px(1.0))],
            &[(ScaleX, px(0.2)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .build()?;

    SectionChoreography::new(s, SectionMode::PinnedScrub)
        .with_binding(ScrollBinding::pinned(s, PIN_DISTANCE_VH, PIN_SCRUB, timeline)?)
        .with_hold(ENTER_END, EXIT_START)
}

/// Three-up grid: heading and cards reveal one by one, nothing pins.
pub fn three_up(viewport: Viewport) -> ReelResult<SectionChoreography> {
    let heading = part(THREE_UP, "heading");
    let heading_tl = TimelineBuilder::new(viewport)
        .from_to(
            heading.clone(),
            &[(Y, px(24.0)), (Opacity, px(0.0))],
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            Position::At(0.0),
            1.0,
            Ease::OutQuad,
        )
        .build()?;
    let mut section = SectionChoreography::new(THREE_UP, SectionMode::ThresholdReveal).with_binding(
        ScrollBinding::reveal(THREE_UP, heading, 0.8, 0.55, REVEAL_SCRUB, heading_tl)?,
    );

    for card in parts(THREE_UP, "card", FEATURES.len()) {
        let tl = TimelineBuilder::new(viewport)
            .from_to(
                card.clone(),
                &[(Y, vh(10.0)), (Opacity, px(0.0)), (Scale, px(0.98))],
                &[(Y, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
                Position::At(0.0),
                1.0,
                Ease::OutQuad,
            )
            .build()?;
        section = section.with_binding(ScrollBinding::reveal(
            THREE_UP,
            card,
            0.85,
            0.55,
            REVEAL_SCRUB,
            tl,
        )?);
    }
    Ok(section)
}

/// Deep feature: tall tile from the right, copy and bullets from the left.
pub fn deep_feature(viewport: Viewport) -> ReelResult<SectionChoreography> {
    let s = DEEP_FEATURE;
    let timeline = TimelineBuilder::new(viewport)
        .span(1.0)
        .from_to(
            part(s, "tile"),
            &[(X, vw(70.0)), (Opacity, px(0.0)), (Scale, px(0.97))],
            &[(X, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "rule"),
            &[(ScaleY, px(0.0))],
            &[(ScaleY, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "text"),
            &[(X, vw(-18.0)), (Opacity, px(0.0))],
            &shown(),
            Position::At(0.05),
            ENTER_END - 0.05,
            Ease::Linear,
        )
        .stagger(
            parts(s, "bullet", DEEP_FEATURE_BULLETS.len()),
            &[(Y, px(16.0)), (Opacity, px(0.0))],
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            Position::At(0.1),
            0.16,
            0.02,
            Ease::Linear,
        )
        .from_to(
            part(s, "tile"),
            &shown(),
            &[(X, vw(18.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            part(s, "text"),
            &shown(),
            &[(X, vw(-14.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            part(s, "rule"),
            &[(ScaleY, px(1.0)), (Opacity, px(1.0))],
            &[(ScaleY, px(0.2)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .build()?;

    SectionChoreography::new(s, SectionMode::PinnedScrub)
        .with_binding(ScrollBinding::pinned(s, PIN_DISTANCE_VH, PIN_SCRUB, timeline)?)
        .with_hold(ENTER_END, EXIT_START)
}

/// Workflow: tile from the left, copy and numbered steps from the right.
pub fn workflow(viewport: Viewport) -> ReelResult<SectionChoreography> {
    let s = WORKFLOW;
    let timeline = TimelineBuilder::new(viewport)
        .span(1.0)
        .from_to(
            part(s, "tile"),
            &[(X, vw(-60.0)), (Opacity, px(0.0)), (Scale, px(0.97))],
            &[(X, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "rule"),
            &[(ScaleX, px(0.0))],
            &[(ScaleX, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "text"),
            &[(X, vw(18.0)), (Opacity, px(0.0))],
            &shown(),
            Position::At(0.05),
            ENTER_END - 0.05,
            Ease::Linear,
        )
        .stagger(
            parts(s, "step", WORKFLOW_STEPS.len()),
            &[(X, vw(10.0)), (Opacity, px(0.0))],
            &shown(),
            Position::At(0.08),
            0.14,
            0.04,
            Ease::Linear,
        )
        .from_to(
            part(s, "tile"),
            &shown(),
            &[(X, vw(-18.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            part(s, "text"),
            &shown(),
            &[(X, vw(14.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            part(s, "rule"),
            &[(ScaleX, px(1.0)), (Opacity, px(1.0))],
            &[(ScaleX, px(0.2)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .build()?;

    SectionChoreography::new(s, SectionMode::PinnedScrub)
        .with_binding(ScrollBinding::pinned(s, PIN_DISTANCE_VH, PIN_SCRUB, timeline)?)
        .with_hold(ENTER_END, EXIT_START)
}

/// Gallery mosaic. Narrow viewports get shorter travel, a vertical exit and no rule.
pub fn gallery(viewport: Viewport, compact: bool) -> ReelResult<SectionChoreography> {
    let s = GALLERY;
    let title = part(s, "title");
    let rule = part(s, "rule");

    let title_from: &[_] = if compact {
        &[(X, px(0.0)), (Y, vh(-6.0)), (Opacity, px(0.0))]
    } else {
        &[(X, vw(-18.0)), (Y, px(0.0)), (Opacity, px(0.0))]
    };
    let mut b = TimelineBuilder::new(viewport).span(1.0).from_to(
        title.clone(),
        title_from,
        &[(X, px(0.0)), (Y, px(0.0)), (Opacity, px(1.0))],
        Position::At(0.0),
        ENTER_END,
        Ease::Linear,
    );
    if !compact {
        b = b.from_to(
            rule.clone(),
            &[(ScaleY, px(0.0))],
            &[(ScaleY, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        );
    }

    let (dx, dy) = if compact { (10.0, 8.0) } else { (20.0, 16.0) };
    let directions = [(-dx, -dy), (dx, -dy), (-dx, dy), (dx, dy)];
    for (i, tile) in parts(s, "tile", GALLERY_ITEMS.len()).into_iter().enumerate() {
        let (x, y) = directions[i % directions.len()];
        let start = i as f64 * 0.02;
        b = b.from_to(
            tile,
            &[(X, vw(x)), (Y, vh(y)), (Opacity, px(0.0)), (Scale, px(0.96))],
            &[(X, px(0.0)), (Y, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
            Position::At(start),
            ENTER_END - start,
            Ease::Linear,
        );
    }

    b = b.from_to(
        title,
        &shown(),
        &[(X, vw(if compact { -6.0 } else { -10.0 })), (Opacity, px(0.0))],
        Position::At(EXIT_START),
        EXIT,
        Ease::InCubic,
    );
    let mosaic = part(s, "mosaic");
    b = if compact {
        b.from_to(
            mosaic,
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            &[(Y, vh(10.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
    } else {
        b.from_to(
            mosaic,
            &shown(),
            &[(X, vw(18.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            rule,
            &[(ScaleY, px(1.0)), (Opacity, px(1.0))],
            &[(ScaleY, px(0.2)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
    };
    let timeline = b
        .from_to(
            s,
            &[(Opacity, px(1.0))],
            &[(Opacity, px(0.0))],
            Position::At(0.88),
            0.12,
            Ease::InQuad,
        )
        .build()?;

    let binding = ScrollBinding::pinned(s, PIN_DISTANCE_VH, GALLERY_SCRUB, timeline)?.with_reveal(0.5)?;
    SectionChoreography::new(s, SectionMode::PinnedScrub)
        .with_binding(binding)
        .with_hold(ENTER_END, EXIT_START)
}

/// Dark download section. Its exit starts early, at 0.6.
pub fn download(viewport: Viewport) -> ReelResult<SectionChoreography> {
    const EXIT_AT: f64 = 0.6;
    let s = DOWNLOAD;
    let timeline = TimelineBuilder::new(viewport)
        .span(1.0)
        .from_to(
            part(s, "rule"),
            &[(ScaleY, px(0.0))],
            &[(ScaleY, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "tile"),
            &[(X, vw(60.0)), (Opacity, px(0.0)), (Scale, px(0.97))],
            &[(X, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .from_to(
            part(s, "text"),
            &[(X, vw(-18.0)), (Opacity, px(0.0))],
            &shown(),
            Position::At(0.05),
            ENTER_END - 0.05,
            Ease::Linear,
        )
        .from_to(
            part(s, "cta"),
            &[(Y, px(14.0)), (Opacity, px(0.0))],
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            Position::At(0.1),
            ENTER_END - 0.1,
            Ease::Linear,
        )
        .from_to(
            part(s, "text"),
            &shown(),
            &[(X, vw(-12.0)), (Opacity, px(0.0))],
            Position::At(EXIT_AT),
            0.4,
            Ease::InCubic,
        )
        .from_to(
            part(s, "tile"),
            &shown(),
            &[(X, vw(14.0)), (Opacity, px(0.0))],
            Position::At(EXIT_AT),
            0.4,
            Ease::InCubic,
        )
        .from_to(
            part(s, "rule"),
            &[(ScaleY, px(1.0)), (Opacity, px(1.0))],
            &[(ScaleY, px(0.2)), (Opacity, px(0.0))],
            Position::At(EXIT_AT),
            0.4,
            Ease::InCubic,
        )
        .from_to(
            part(s, "cta"),
            &[(Opacity, px(1.0))],
            &[(Opacity, px(0.0))],
            Position::At(0.65),
            0.35,
            Ease::InCubic,
        )
        .build()?;

    SectionChoreography::new(s, SectionMode::PinnedScrub)
        .with_binding(ScrollBinding::pinned(s, PIN_DISTANCE_VH, PIN_SCRUB, timeline)?)
        .with_hold(ENTER_END, EXIT_AT)
}

/// Testimonials: heading and cards rise in, then lift out together.
pub fn testimonials(viewport: Viewport) -> ReelResult<SectionChoreography> {
    let s = TESTIMONIALS_SECTION;
    let timeline = TimelineBuilder::new(viewport)
        .span(1.0)
        .from_to(
            part(s, "heading"),
            &[(Y, px(40.0)), (Opacity, px(0.0))],
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            Position::At(0.0),
            ENTER_END,
            Ease::Linear,
        )
        .stagger(
            parts(s, "card", TESTIMONIALS.len()),
            &[(Y, px(60.0)), (Opacity, px(0.0)), (Scale, px(0.98))],
            &[(Y, px(0.0)), (Opacity, px(1.0)), (Scale, px(1.0))],
            Position::At(0.05),
            0.15,
            0.05,
            Ease::Linear,
        )
        .from_to(
            part(s, "heading"),
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            &[(Y, px(-30.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .from_to(
            part(s, "cards"),
            &[(Y, px(0.0)), (Opacity, px(1.0))],
            &[(Y, px(-40.0)), (Opacity, px(0.0))],
            Position::At(EXIT_START),
            EXIT,
            Ease::InCubic,
        )
        .build()?;

    SectionChoreography::new(s, SectionMode::PinnedScrub)
        .with_binding(ScrollBinding::pinned(s, PIN_DISTANCE_VH, PIN_SCRUB, timeline)?)
        .with_hold(ENTER_END, EXIT_START)
}

/// Footer: CTA and link columns reveal on their own thresholds.
pub fn footer(viewport: Viewport) -> ReelResult<SectionChoreography> {
    let reveal = |element: ElementId, rise: f64, start: f64, end: f64| -> ReelResult<ScrollBinding> {
        let tl = TimelineBuilder::new(viewport)
            .from_to(
                element.clone(),
                &[(Y, px(rise)), (Opacity, px(0.0))],
                &[(Y, px(0.0)), (Opacity, px(1.0))],
                Position::At(0.0),
                1.0,
                Ease::OutQuad,
            )
            .build()?;
        ScrollBinding::reveal(FOOTER, element, start, end, REVEAL_SCRUB, tl)
    };
    Ok(SectionChoreography::new(FOOTER, SectionMode::ThresholdReveal)
        .with_binding(reveal(part(FOOTER, "cta"), 24.0, 0.85, 0.6)?)
        .with_binding(reveal(part(FOOTER, "links"), 16.0, 0.9, 0.65)?))
}

/// Build every section for `viewport`, applying config overrides and validating each.
#[tracing::instrument(skip(config))]
pub fn landing_page(
    viewport: Viewport,
    config: &EngineConfig,
) -> ReelResult<Vec<SectionChoreography>> {
    let compact = viewport.is_narrower_than(config.mobile_breakpoint_px);
    let mut sections = vec![
        hero(viewport)?,
        features(viewport)?,
        three_up(viewport)?,
        deep_feature(viewport)?,
        workflow(viewport)?,
        gallery(viewport, compact)?,
        download(viewport)?,
        testimonials(viewport)?,
        footer(viewport)?,
    ];
    for section in &mut sections {
        if let Some(&fraction) = config.navigation.reveal.get(&section.id) {
            section.set_reveal(fraction)?;
        }
        section.validate()?;
    }
    Ok(sections)
}

fn section_height_vh(id: &ElementId) -> f64 {
    match id.as_str() {
        THREE_UP => 1.2,
        FOOTER => 0.9,
        _ => 1.0,
    }
}

fn element_offset_vh(id: &ElementId) -> f64 {
    match id.as_str() {
        "three-up.heading" => 0.12,
        "footer.cta" => 0.2,
        "footer.links" => 0.55,
        other if other.starts_with("three-up.card") => 0.4,
        _ => 0.1,
    }
}

/// Stacked document holding every section and element `sections` reference.
pub fn landing_layout(
    viewport: Viewport,
    sections: &[SectionChoreography],
) -> ReelResult<StackedLayout> {
    let mut layout = StackedLayout::new(viewport);
    for s in sections {
        layout = layout.section(s.id.clone(), section_height_vh(&s.id))?;
    }
    for s in sections {
        for element in s.elements() {
            if element != &s.id {
                layout = layout.element(element.clone(), s.id.clone(), element_offset_vh(element))?;
            }
        }
    }
    Ok(layout)
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/landing.rs"]
mod tests;
