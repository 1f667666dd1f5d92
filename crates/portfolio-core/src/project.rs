//! Project gallery data, slideshow index and image-load fallback.
//!
//! Every project is rendered by the same card from a [`ProjectEntry`];
//! multi-image entries get a slideshow, single-image entries a still.

use std::time::Duration;

use crate::content::Accent;

/// Slideshow auto-advance period while the card is visible.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(3000);

/// Substituted for any image that fails to load.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='640' height='360' viewBox='0 0 640 360'>\
<rect width='640' height='360' fill='%231e293b'/>\
<path d='M280 210l40-50 30 36 20-24 50 38H240z' fill='%23334155'/>\
<circle cx='270' cy='150' r='16' fill='%23334155'/>\
<text x='320' y='280' fill='%2394a3b8' font-family='monospace' font-size='16' text-anchor='middle'>image unavailable</text>\
</svg>";

/// Short feature callout shown on highlighted cards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Highlight {
    pub title: &'static str,
    pub caption: &'static str,
}

/// Everything a project card needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub source: Option<&'static str>,
    /// At least one image; more than one turns on the slideshow.
    pub media: &'static [&'static str],
    pub accent: Accent,
    pub badge: Option<&'static str>,
    pub highlights: &'static [Highlight],
}

impl ProjectEntry {
    pub fn has_slideshow(&self) -> bool {
        self.media.len() > 1
    }

    pub fn image(&self, index: usize) -> &'static str {
        self.media.get(index).copied().unwrap_or(FALLBACK_IMAGE)
    }

    /// Whether the live link points anywhere.
    pub fn has_live_link(&self) -> bool {
        !self.link.is_empty() && self.link != "#"
    }
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Edgamify",
        description: "Gamified learning platform that rewards progress with badges, \
                      tracks learner journeys and certifies skills.",
        tech: &["React", "Node.js", "MongoDB", "Express", "Tailwind CSS"],
        link: "https://edgamify.com",
        source: Some("https://github.com/maazalirao"),
        media: &[
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1513258496099-48168024aec0?auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1501504905252-473c47e087f8?auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?auto=format&fit=crop&q=80",
        ],
        accent: Accent::Purple,
        badge: Some("Latest Project"),
        highlights: &[
            Highlight { title: "Achievement System", caption: "Earn badges & rewards" },
            Highlight { title: "Progress Tracking", caption: "Monitor your journey" },
            Highlight { title: "Skill Certification", caption: "Validate your learning" },
        ],
    },
    ProjectEntry {
        title: "Agristore",
        description: "Marketplace for farmers to source pesticides and seeds, with \
                      product guidance and order tracking.",
        tech: &["React Native", "Firebase", "Redux"],
        link: "#",
        source: Some("https://github.com/maazalirao"),
        media: &[
            "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1464226184884-fa280b87c399?auto=format&fit=crop&q=80",
            "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?auto=format&fit=crop&q=80",
        ],
        accent: Accent::Emerald,
        badge: None,
        highlights: &[],
    },
    ProjectEntry {
        title: "TikTak NYC",
        description: "A modern rickshaw service platform built with Next.js and Node.js",
        tech: &["React", "Node.js", "MongoDB"],
        link: "https://tiktak-nyc.com/",
        source: None,
        media: &["https://images.unsplash.com/photo-1557804506-669a67965ba0?auto=format&fit=crop&q=80"],
        accent: Accent::Cyan,
        badge: None,
        highlights: &[],
    },
    ProjectEntry {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with real-time updates",
        tech: &["Next.js", "TypeScript", "Prisma"],
        link: "#",
        source: None,
        media: &["https://images.unsplash.com/photo-1472437774355-71ab6752b434?auto=format&fit=crop&q=80"],
        accent: Accent::Pink,
        badge: None,
        highlights: &[],
    },
    ProjectEntry {
        title: "Mobile Fitness App",
        description: "Cross-platform fitness tracking application",
        tech: &["React Native", "Firebase", "Redux"],
        link: "#",
        source: None,
        media: &["https://images.unsplash.com/photo-1526506118085-60ce8714f8c5?auto=format&fit=crop&q=80"],
        accent: Accent::Emerald,
        badge: None,
        highlights: &[],
    },
];

/// Wrapping slideshow index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Only multi-image carousels move.
    pub fn can_advance(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
        self.index
    }

    /// Jump to `index`, clamped to the last slide.
    pub fn select(&mut self, index: usize) -> usize {
        self.index = index.min(self.len.saturating_sub(1));
        self.index
    }

    /// 1-based `"i/n"` label.
    pub fn counter(&self) -> String {
        format!("{}/{}", self.index + 1, self.len)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ImageState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Load state of the image currently shown in a card.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ImageSlot {
    state: ImageState,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    pub fn on_load(&mut self) {
        if self.state == ImageState::Loading {
            self.state = ImageState::Loaded;
        }
    }

    /// A failed load still dismisses the spinner.
    pub fn on_error(&mut self) {
        if self.state != ImageState::Failed {
            tracing::debug!("Image failed to load, using fallback");
        }
        self.state = ImageState::Failed;
    }

    /// A new source starts loading again.
    pub fn reset(&mut self) {
        self.state = ImageState::Loading;
    }

    pub fn is_loading(&self) -> bool {
        self.state == ImageState::Loading
    }

    /// Source to put in the `<img>`.
    pub fn display_src<'a>(&self, original: &'a str) -> &'a str {
        match self.state {
            ImageState::Failed => FALLBACK_IMAGE,
            _ => original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_have_media_and_tags() {
        for project in PROJECTS {
            assert!(!project.media.is_empty(), "{} has no image", project.title);
            assert!(!project.tech.is_empty(), "{} has no tags", project.title);
        }
        assert!(PROJECTS[0].has_slideshow());
        assert!(!PROJECTS[2].has_slideshow());
        assert!(PROJECTS[2].has_live_link());
        assert!(!PROJECTS[3].has_live_link());
    }

    #[test]
    fn image_out_of_range_uses_fallback() {
        assert_eq!(PROJECTS[2].image(7), FALLBACK_IMAGE);
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.counter(), "2/3");
        assert_eq!(carousel.select(10), 2);
    }

    #[test]
    fn single_image_carousel_stays_put() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.can_advance());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn empty_carousel_does_not_panic() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert_eq!(carousel.select(3), 0);
    }

    #[test]
    fn failed_image_resolves_to_fallback_and_stops_loading() {
        let mut slot = ImageSlot::new();
        assert!(slot.is_loading());
        slot.on_error();
        assert!(!slot.is_loading());
        assert_eq!(slot.display_src("https://example.com/a.png"), FALLBACK_IMAGE);

        // a late load event for the fallback keeps the failed state
        slot.on_load();
        assert_eq!(slot.state(), ImageState::Failed);

        slot.reset();
        assert!(slot.is_loading());
        slot.on_load();
        assert_eq!(slot.display_src("a.png"), "a.png");
    }
}
