//! Navigation chrome: bar restyling on scroll and smooth anchor scrolling
//! that stops short of the fixed bar.

use vitrin_core::constants::{NAV_BG_ELEVATED, NAV_BG_FLAT, NAV_SHADOW_ELEVATED};
use vitrin_core::nav::{anchor_scroll_top, nav_style, NavStyle};
use web_sys as web;

use crate::dom;

/// Restyle `.nav` as the page scrolls past the hero.
pub fn wire_nav_style(document: &web::Document) {
    let Some(nav) = dom::query::<web::HtmlElement>(document, ".nav") else {
        log::debug!("[nav] bar absent");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    dom::on(&window, "scroll", move || {
        let style = nav_style(win.scroll_y().unwrap_or(0.0));
        apply_nav_style(&nav, style);
    });
    log::info!("[nav] scroll styling wired");
}

fn apply_nav_style(nav: &web::HtmlElement, style: NavStyle) {
    let css = nav.style();
    match style {
        NavStyle::Elevated => {
            _ = css.set_property("background", NAV_BG_ELEVATED);
            _ = css.set_property("box-shadow", NAV_SHADOW_ELEVATED);
        }
        NavStyle::Flat => {
            _ = css.set_property("background", NAV_BG_FLAT);
            _ = css.set_property("box-shadow", "none");
        }
    }
}

/// Intercept in-page anchor clicks on nav links and call-to-action buttons
/// and glide to the target instead of jumping. Fragment hrefs are always
/// swallowed, so the URL hash never changes; a missing target just means no
/// scroll. Non-fragment links keep their default behavior.
pub fn wire_anchor_scrolling(document: &web::Document) {
    let links = dom::query_all(document, ".nav-link, .cta-button");
    let count = links.len();
    for link in links {
        let doc = document.clone();
        let anchor = link.clone();
        dom::on_event(&link, "click", move |ev| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if !href.starts_with('#') {
                return;
            }
            ev.prevent_default();
            let Some(target) = dom::query::<web::HtmlElement>(&doc, &href) else {
                return;
            };
            let Some(window) = web::window() else {
                return;
            };
            let options = web::ScrollToOptions::new();
            options.set_top(anchor_scroll_top(f64::from(target.offset_top())));
            options.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
    log::info!("[nav] anchor scrolling wired for {count} links");
}
