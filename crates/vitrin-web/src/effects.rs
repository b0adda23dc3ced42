//! Pointer and scroll parallax on the hero backdrop.

use vitrin_core::parallax::{pointer_offset, scroll_offset};
use web_sys as web;

use crate::dom;

/// Both handlers write `transform` on `.hero-bg` independently and the
/// latest event wins, matching the page's established feel.
pub fn wire_hero_parallax(document: &web::Document) {
    let Some(hero) = dom::query::<web::HtmlElement>(document, ".hero-bg") else {
        log::debug!("[effects] hero backdrop absent");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };

    {
        let hero = hero.clone();
        let win = window.clone();
        dom::on_mouse(document, "mousemove", move |ev| {
            let Some((width, height)) = dom::window_inner_size(&win) else {
                return;
            };
            let (dx, dy) = pointer_offset(
                f64::from(ev.client_x()) / width,
                f64::from(ev.client_y()) / height,
            );
            _ = hero
                .style()
                .set_property("transform", &format!("translate({dx}px, {dy}px)"));
        });
    }
    {
        let win = window.clone();
        dom::on(&window, "scroll", move || {
            let dy = scroll_offset(win.page_y_offset().unwrap_or(0.0));
            _ = hero
                .style()
                .set_property("transform", &format!("translateY({dy}px)"));
        });
    }
    log::info!("[effects] hero parallax wired");
}
