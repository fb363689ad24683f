//! Entrance animation for page sections.
//!
//! Each section starts hidden (transparent, shifted down, with a transition
//! declared) and moves to `Revealed` the first time an intersection event
//! reports it in view. The transition animates the change. `Revealed` is
//! terminal: later events, including leaving the viewport, change nothing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

/// Inline style properties to write on a section, as `(property, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDecl {
    pub properties: Vec<(&'static str, String)>,
}

impl StyleDecl {
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }
}

/// One intersection record for a monitored section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEvent {
    pub section: usize,
    pub is_intersecting: bool,
}

/// Animation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub offset_px: f64,
    pub duration_secs: f64,
    pub easing: String,
}

impl RevealStyle {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            offset_px: config.reveal_offset_px,
            duration_secs: config.reveal_duration_secs,
            easing: config.reveal_easing.clone(),
        }
    }

    /// Initial style: transparent, shifted down, with the transition declared.
    #[must_use]
    pub fn hidden(&self) -> StyleDecl {
        let transition = format!(
            "opacity {d}s {e}, transform {d}s {e}",
            d = self.duration_secs,
            e = self.easing
        );
        StyleDecl {
            properties: vec![
                ("opacity", "0".to_owned()),
                ("transform", format!("translateY({}px)", self.offset_px)),
                ("transition", transition),
            ],
        }
    }

    /// Resting style after the reveal.
    #[must_use]
    pub fn revealed(&self) -> StyleDecl {
        StyleDecl {
            properties: vec![("opacity", "1".to_owned()), ("transform", "translateY(0)".to_owned())],
        }
    }
}

/// Per-section visibility for every monitored section.
#[derive(Debug, Clone, PartialEq)]
pub struct Revealer {
    style: RevealStyle,
    sections: Vec<Visibility>,
}

impl Revealer {
    #[must_use]
    pub fn new(style: RevealStyle) -> Self {
        Self { style, sections: Vec::new() }
    }

    /// Start monitoring a section. Returns its index and the hidden style
    /// to write before observing it.
    pub fn register(&mut self) -> (usize, StyleDecl) {
        self.sections.push(Visibility::Hidden);
        (self.sections.len() - 1, self.style.hidden())
    }

    #[must_use]
    pub fn visibility(&self, section: usize) -> Option<Visibility> {
        self.sections.get(section).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Apply one intersection event. Returns the style to write when the
    /// section is revealed by this event, `None` otherwise.
    pub fn on_intersection(&mut self, event: IntersectionEvent) -> Option<StyleDecl> {
        let state = self.sections.get_mut(event.section)?;
        if !event.is_intersecting || *state == Visibility::Revealed {
            return None;
        }
        *state = Visibility::Revealed;
        log::debug!("section {} revealed", event.section);
        Some(self.style.revealed())
    }
}
