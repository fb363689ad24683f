use super::*;

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("intro", 0.0),
        SectionBounds::new("commands", 800.0),
        SectionBounds::new("faq", 1600.0),
    ]
}

fn scroll(offset: f64) -> ScrollEvent {
    ScrollEvent { offset, sections: page() }
}

// --- active_section ---

#[test]
fn picks_last_qualifying_section() {
    assert_eq!(active_section(&page(), 850.0, 200.0), "commands");
}

#[test]
fn top_of_page_selects_first_section() {
    assert_eq!(active_section(&page(), 0.0, 200.0), "intro");
}

#[test]
fn section_activates_header_offset_early() {
    assert_eq!(active_section(&page(), 599.0, 200.0), "intro");
    assert_eq!(active_section(&page(), 600.0, 200.0), "commands");
    assert_eq!(active_section(&page(), 1400.0, 200.0), "faq");
}

#[test]
fn no_qualifying_section_is_empty() {
    let sections = vec![SectionBounds::new("late", 500.0)];
    assert_eq!(active_section(&sections, 0.0, 200.0), "");
}

#[test]
fn no_sections_is_empty() {
    assert_eq!(active_section(&[], 1000.0, 200.0), "");
}

#[test]
fn later_section_wins_even_when_out_of_order() {
    let sections = vec![SectionBounds::new("b", 900.0), SectionBounds::new("a", 100.0)];
    assert_eq!(active_section(&sections, 1000.0, 200.0), "a");
}

// --- link_is_active ---

#[test]
fn link_matches_by_substring() {
    assert!(link_is_active(Some("#commands"), "commands"));
    assert!(link_is_active(Some("/index.html#commands"), "commands"));
    assert!(!link_is_active(Some("#faq"), "commands"));
}

#[test]
fn empty_active_id_matches_nothing() {
    assert!(!link_is_active(Some("#intro"), ""));
}

#[test]
fn link_without_href_is_never_active() {
    assert!(!link_is_active(None, "intro"));
}

// --- ScrollSpy ---

#[test]
fn starts_with_no_active_section() {
    assert_eq!(ScrollSpy::new(200.0).active(), "");
}

#[test]
fn scroll_marks_only_matching_link() {
    let mut spy = ScrollSpy::new(200.0);
    spy.on_scroll(&scroll(850.0));
    let states = spy.link_states([Some("#intro"), Some("#commands"), Some("#faq")]);
    assert_eq!(states, vec![false, true, false]);
}

#[test]
fn scroll_back_above_all_sections_clears_links() {
    let sections = vec![SectionBounds::new("intro", 400.0), SectionBounds::new("faq", 1200.0)];
    let mut spy = ScrollSpy::new(200.0);
    spy.on_scroll(&ScrollEvent { offset: 1300.0, sections: sections.clone() });
    assert_eq!(spy.active(), "faq");
    spy.on_scroll(&ScrollEvent { offset: 0.0, sections });
    assert_eq!(spy.active(), "");
    assert_eq!(spy.link_states([Some("#intro"), Some("#faq")]), vec![false, false]);
}

#[test]
fn on_scroll_reports_changes_only() {
    let mut spy = ScrollSpy::new(200.0);
    assert!(spy.on_scroll(&scroll(0.0)));
    assert!(!spy.on_scroll(&scroll(100.0)));
    assert!(spy.on_scroll(&scroll(900.0)));
    assert_eq!(spy.active(), "commands");
}

#[test]
fn header_offset_is_configurable() {
    let mut spy = ScrollSpy::new(0.0);
    spy.on_scroll(&scroll(799.0));
    assert_eq!(spy.active(), "intro");
    spy.on_scroll(&scroll(800.0));
    assert_eq!(spy.active(), "commands");
}

#[test]
fn section_tops_are_read_per_event() {
    let mut spy = ScrollSpy::new(200.0);
    spy.on_scroll(&scroll(850.0));
    assert_eq!(spy.active(), "commands");
    let shifted = vec![SectionBounds::new("intro", 0.0), SectionBounds::new("commands", 1200.0)];
    spy.on_scroll(&ScrollEvent { offset: 850.0, sections: shifted });
    assert_eq!(spy.active(), "intro");
}
