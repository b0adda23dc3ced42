//! Scroll-triggered section reveals. Sections are primed with `fade-in` at
//! startup and gain `visible` the first time they cross into view; classes
//! are only ever added, so a revealed section stays revealed.

use vitrin_core::constants::{REVEAL_ROOT_MARGIN, REVEAL_VISIBLE_RATIO};
use web_sys as web;

use crate::{dom, observe};

const REVEAL_SELECTOR: &str =
    ".gallery-section, .video-section, .about-section, .contact-section";

pub fn wire_section_reveals(document: &web::Document) {
    let sections = dom::query_all(document, REVEAL_SELECTOR);
    if sections.is_empty() {
        log::debug!("[reveal] no sections found");
        return;
    }
    let count = sections.len();
    for section in sections {
        _ = section.class_list().add_1("fade-in");
        let revealed = section.clone();
        observe::watch_intersecting(
            &section,
            REVEAL_VISIBLE_RATIO,
            Some(REVEAL_ROOT_MARGIN),
            move |visible| {
                if visible {
                    _ = revealed.class_list().add_1("visible");
                }
            },
        );
    }
    log::info!("[reveal] watching {count} sections");
}
