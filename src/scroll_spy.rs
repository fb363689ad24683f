//! Scroll spy: which section is in view, and which nav link to mark.
//!
//! Sections are scanned in document order and every section whose top is
//! within the header offset of the scroll position overwrites the previous
//! pick, so the lowest qualifying section wins. A link is active iff its
//! `href` contains the active section id. An empty id matches no link.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// A section's id and its top offset within the document, in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// One scroll event as seen by the spy.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEvent {
    pub offset: f64,
    pub sections: Vec<SectionBounds>,
}

/// Id of the active section, or `""` when none qualifies.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_offset: f64, header_offset: f64) -> &str {
    let mut current = "";
    for section in sections {
        if scroll_offset >= section.top - header_offset {
            current = &section.id;
        }
    }
    current
}

/// Whether a nav link pointing at `href` should carry the active marker.
#[must_use]
pub fn link_is_active(href: Option<&str>, active_id: &str) -> bool {
    !active_id.is_empty() && href.is_some_and(|href| href.contains(active_id))
}

/// Tracks the active section across scroll events.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    header_offset: f64,
    active: String,
}

impl ScrollSpy {
    #[must_use]
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset, active: String::new() }
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Recompute the active section. Returns `true` when it changed.
    pub fn on_scroll(&mut self, event: &ScrollEvent) -> bool {
        let next = active_section(&event.sections, event.offset, self.header_offset);
        if next == self.active {
            return false;
        }
        log::debug!("active section: {:?} -> {next:?}", self.active);
        next.clone_into(&mut self.active);
        true
    }

    /// Active flag for each link, in the order given.
    pub fn link_states<'a, I>(&self, hrefs: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        hrefs.into_iter().map(|href| link_is_active(href, &self.active)).collect()
    }
}
