//! Static display content. Choreographies only read list lengths (to size staggers and to know
//! which child elements exist); rendering the text is up to the page.

/// Card in the three-up features grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Feature {
    /// Short heading.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Numbered workflow step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WorkflowStep {
    /// Display number (`01`, `02`, ...).
    pub number: &'static str,
    /// Short heading.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Media type of a gallery tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Animated GIF.
    Gif,
    /// Still image.
    Image,
}

/// Gallery mosaic tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GalleryItem {
    /// Media type.
    pub kind: MediaKind,
    /// Asset path.
    pub src: &'static str,
    /// Alt text.
    pub alt: &'static str,
}

/// Customer quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Testimonial {
    /// Quoted text.
    pub quote: &'static str,
    /// Author name.
    pub name: &'static str,
    /// Author role.
    pub role: &'static str,
}

/// Footer link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FooterLink {
    /// Link text.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
}

/// Hero headline, one entry per animated line.
pub const HERO_HEADLINE: &[&str] = &["Beautiful", "Rows &", "Columns."];

/// Three-up feature cards.
pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Recursive Split",
        description: "Click any edge to split rows or columns. Nest as deep as you need.",
    },
    Feature {
        title: "Drag & Drop",
        description: "Drop images into any cell. Toggle cover/contain with one click.",
    },
    Feature {
        title: "Keyboard First",
        description: "Move, resize, and reorder without lifting your hands from the keyboard.",
    },
];

/// Deep-feature bullet list.
pub const DEEP_FEATURE_BULLETS: &[&str] = &[
    "Markdown with shortcuts",
    "Cover / contain per image",
    "Export to PDF or images",
];

/// Workflow steps.
pub const WORKFLOW_STEPS: &[WorkflowStep] = &[
    WorkflowStep {
        number: "01",
        title: "Split",
        description: "Add rows or columns to any cell.",
    },
    WorkflowStep {
        number: "02",
        title: "Fill",
        description: "Drop in images, text, or markdown.",
    },
    WorkflowStep {
        number: "03",
        title: "Export",
        description: "Print-ready PDF or image slices.",
    },
];

/// Gallery mosaic tiles, in grid order.
pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        kind: MediaKind::Gif,
        src: "/images/gif_layouts.gif",
        alt: "Create multiple layouts in one document",
    },
    GalleryItem {
        kind: MediaKind::Image,
        src: "/images/broco_screen.png",
        alt: "BROCO application interface",
    },
    GalleryItem {
        kind: MediaKind::Gif,
        src: "/images/gif_aspect_ratio.gif",
        alt: "Change aspect ratio easily",
    },
    GalleryItem {
        kind: MediaKind::Gif,
        src: "/images/gif_import.gif",
        alt: "Import files fast",
    },
];

/// Testimonial cards.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "BROCO is the first layout tool that feels like my sketchbook: fast, modular, and clean.",
        name: "Aiko Tanaka",
        role: "Editorial Designer",
    },
    Testimonial {
        quote: "I use it to build mood boards and pitch decks in minutes. The recursive splitting is genius.",
        name: "Leo Vance",
        role: "Creative Director",
    },
    Testimonial {
        quote: "The keyboard shortcuts are chef's kiss. I can layout an entire portfolio without touching the mouse.",
        name: "Mina Rahman",
        role: "Product Designer",
    },
];

/// Footer "Product" column.
pub const FOOTER_PRODUCT_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "Download",
        href: "https://github.com/s-poony/BROCO/releases",
    },
    FooterLink {
        label: "Features",
        href: "#features",
    },
    FooterLink {
        label: "Changelog",
        href: "https://github.com/s-poony/BROCO/releases",
    },
];

/// Footer "Resources" column.
pub const FOOTER_RESOURCE_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "Shortcuts",
        href: "https://github.com/s-poony/BROCO/blob/main/public/assets/shortcuts.md",
    },
    FooterLink {
        label: "GitHub",
        href: "https://github.com/s-poony/BROCO",
    },
];
