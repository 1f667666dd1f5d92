//! Page sections and viewport geometry.
//!
//! The page is a fixed, ordered list of anchor-addressable sections.
//! Declaration order matters: when two sections overlap the probe point
//! (fast scroll, smooth transitions), the one declared first wins.

use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioError;

/// A named region of the single page.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum SectionId {
    #[default]
    Home,
    Skills,
    Experience,
    Projects,
    Contact,
}

/// Every section, in declaration order.
pub const SECTIONS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::Skills,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Contact,
];

impl SectionId {
    /// DOM id / URL fragment of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in [`SECTIONS`].
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Parse `"skills"` or `"#skills"`.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        SECTIONS.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_anchor(s).ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

/// Axis-aligned rectangle in viewport pixels (y grows downwards).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
            left,
            right: left + width.max(0.0),
        }
    }

    /// Vertical-only bounds, for layouts where horizontal overlap is implied.
    pub fn vertical(top: f64, bottom: f64) -> Self {
        Self {
            top,
            bottom: bottom.max(top),
            left: 0.0,
            right: 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn midpoint_y(&self) -> f64 {
        self.top + self.height() / 2.0
    }

    /// Half-open on the bottom edge so adjacent sections never both claim a point.
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }

    /// Grow every edge by `margin` (negative shrinks).
    pub fn expand(&self, margin: f64) -> Self {
        let top = self.top - margin;
        let left = self.left - margin;
        Self {
            top,
            left,
            bottom: (self.bottom + margin).max(top),
            right: (self.right + margin).max(left),
        }
    }

    pub fn intersection(&self, other: &Bounds) -> Option<Bounds> {
        let top = self.top.max(other.top);
        let bottom = self.bottom.min(other.bottom);
        let left = self.left.max(other.left);
        let right = self.right.min(other.right);
        (top <= bottom && left <= right).then_some(Bounds {
            top,
            bottom,
            left,
            right,
        })
    }

    /// Fraction of `self` that lies inside `viewport`, in `0.0..=1.0`.
    ///
    /// Degenerate (zero-area) targets report `1.0` when they touch the
    /// viewport and `0.0` otherwise.
    pub fn intersection_ratio(&self, viewport: &Bounds) -> f64 {
        match self.intersection(viewport) {
            None => 0.0,
            Some(_) if self.area() <= 0.0 => 1.0,
            Some(overlap) => (overlap.area() / self.area()).clamp(0.0, 1.0),
        }
    }
}

/// A section paired with its measured bounds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionProbe {
    pub id: SectionId,
    pub bounds: Bounds,
}

impl SectionProbe {
    pub fn new(id: SectionId, bounds: Bounds) -> Self {
        Self { id, bounds }
    }
}

/// Pick the section owning the viewport midpoint.
///
/// Probes are sorted by declaration order first; the first one whose
/// bounds contain `midpoint` wins. When nothing matches, `current` is kept.
pub fn resolve_active(probes: &[SectionProbe], midpoint: f64, current: SectionId) -> SectionId {
    let mut ordered: Vec<&SectionProbe> = probes.iter().collect();
    ordered.sort_by_key(|p| p.id.ordinal());
    ordered
        .into_iter()
        .find(|p| p.bounds.contains_y(midpoint))
        .map(|p| p.id)
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(id: SectionId, top: f64, bottom: f64) -> SectionProbe {
        SectionProbe::new(id, Bounds::vertical(top, bottom))
    }

    #[test]
    fn anchors_round_trip_through_parse() {
        for section in SECTIONS {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
            let hashed = format!("#{}", section.anchor());
            assert_eq!(hashed.parse::<SectionId>().unwrap(), section);
        }
        assert!("blog".parse::<SectionId>().is_err());
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        let ordinals: Vec<usize> = SECTIONS.iter().map(SectionId::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn midpoint_inside_single_section() {
        let probes = [
            probe(SectionId::Home, -800.0, 0.0),
            probe(SectionId::Skills, 0.0, 900.0),
            probe(SectionId::Experience, 900.0, 1800.0),
        ];
        assert_eq!(resolve_active(&probes, 450.0, SectionId::Home), SectionId::Skills);
    }

    #[test]
    fn overlap_prefers_declaration_order() {
        // Experience measured first, but Skills is declared earlier.
        let probes = [
            probe(SectionId::Experience, 300.0, 1200.0),
            probe(SectionId::Skills, -200.0, 500.0),
        ];
        assert_eq!(resolve_active(&probes, 400.0, SectionId::Home), SectionId::Skills);
    }

    #[test]
    fn no_match_keeps_current() {
        let probes = [probe(SectionId::Home, 0.0, 100.0)];
        assert_eq!(
            resolve_active(&probes, 500.0, SectionId::Projects),
            SectionId::Projects
        );
        assert_eq!(resolve_active(&[], 500.0, SectionId::Contact), SectionId::Contact);
    }

    #[test]
    fn bottom_edge_is_exclusive() {
        let probes = [
            probe(SectionId::Home, 0.0, 400.0),
            probe(SectionId::Skills, 400.0, 800.0),
        ];
        assert_eq!(resolve_active(&probes, 400.0, SectionId::Home), SectionId::Skills);
    }

    #[test]
    fn intersection_ratio_partial_and_disjoint() {
        let viewport = Bounds::new(0.0, 0.0, 1000.0, 800.0);
        let half_in = Bounds::new(0.0, 600.0, 1000.0, 400.0);
        assert!((half_in.intersection_ratio(&viewport) - 0.5).abs() < 1e-9);

        let below = Bounds::new(0.0, 900.0, 1000.0, 100.0);
        assert_eq!(below.intersection_ratio(&viewport), 0.0);

        let inside = Bounds::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(inside.intersection_ratio(&viewport), 1.0);
    }

    #[test]
    fn zero_area_target_touching_viewport_counts_as_visible() {
        let viewport = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let line = Bounds::new(0.0, 50.0, 100.0, 0.0);
        assert_eq!(line.intersection_ratio(&viewport), 1.0);
    }

    #[test]
    fn expand_grows_each_edge() {
        let b = Bounds::new(0.0, 0.0, 100.0, 100.0).expand(10.0);
        assert_eq!(b, Bounds { top: -10.0, bottom: 110.0, left: -10.0, right: 110.0 });
        assert_eq!(b.midpoint_y(), 50.0);
    }
}
