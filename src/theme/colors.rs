//! Color constants mirrored by the CSS custom properties.
//!
//! Slate glass aesthetic with per-section accents.

#![allow(dead_code)]

// === SLATE (Backgrounds, dark theme) ===
pub const SLATE_950: &str = "#020617";
pub const SLATE_900: &str = "#0f172a";
pub const SLATE_800: &str = "#1e293b";
pub const SLATE_700: &str = "#334155";

// === LIGHT THEME ===
pub const PAPER: &str = "#f8fafc";
pub const PAPER_RAISED: &str = "#ffffff";
pub const PAPER_BORDER: &str = "#e2e8f0";

// === ACCENTS ===
pub const CYAN: &str = "#22d3ee";
pub const EMERALD: &str = "#34d399";
pub const PURPLE: &str = "#a78bfa";
pub const BLUE: &str = "#60a5fa";
pub const PINK: &str = "#f472b6";
pub const AMBER: &str = "#fbbf24";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f1f5f9";
pub const TEXT_SECONDARY: &str = "rgba(241, 245, 249, 0.72)";
pub const TEXT_MUTED: &str = "rgba(241, 245, 249, 0.5)";
pub const TEXT_ON_LIGHT: &str = "#0f172a";

// === GLASS ===
pub const GLASS_FILL: &str = "rgba(30, 41, 59, 0.55)";
pub const GLASS_BORDER: &str = "rgba(148, 163, 184, 0.16)";
