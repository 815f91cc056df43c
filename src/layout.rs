//! Scroll and viewport geometry shared by the page controllers.
//!
//! Everything here takes plain numbers read off the DOM so the thresholds can
//! be checked without a browser.

pub const NAVBAR_SCROLLED_OFFSET: f64 = 50.0;
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
pub const ACTIVE_SECTION_PROBE: f64 = 100.0;
pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;
pub const SKILL_BAR_STAGGER_MS: u32 = 100;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;
pub const CURSOR_MIN_VIEWPORT_WIDTH: f64 = 768.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub fn navbar_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_OFFSET
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// Section whose nav link should be highlighted, if any contains the probe
/// point. Later sections win when bounds overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE;

    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

pub fn link_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn anchor_scroll_top(target_offset_top: f64) -> f64 {
    (target_offset_top - ANCHOR_HEADER_OFFSET).max(0.0)
}

pub fn skills_reveal_reached(
    scroll_y: f64,
    viewport_height: f64,
    section_top: f64,
    section_height: f64,
) -> bool {
    scroll_y + viewport_height > section_top + section_height / 3.0
}

pub fn skill_bar_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(SKILL_BAR_STAGGER_MS)
}

pub fn parallax_offset(index: usize, scrolled: f64) -> f64 {
    scrolled * (index as f64 + 1.0) * PARALLAX_SPEED_STEP
}

pub fn cursor_effect_allowed(viewport_width: f64) -> bool {
    viewport_width > CURSOR_MIN_VIEWPORT_WIDTH
}
