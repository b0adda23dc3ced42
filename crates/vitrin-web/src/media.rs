//! Autoplay-on-visibility controllers for the two page videos.

use std::cell::RefCell;
use std::rc::Rc;

use vitrin_core::constants::{PORTRAIT_VIDEO_SRC, VIDEO_VISIBLE_RATIO};
use vitrin_core::media::{MediaCommand, MediaGate, PlaybackPolicy};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::{dom, observe};

struct HeroInner {
    video: web::HtmlVideoElement,
    overlay: Option<web::Element>,
    gate: RefCell<MediaGate>,
}

/// Hero video: plays the first time more than half of it scrolls into view,
/// pauses when it leaves, and tears down the poster overlay on the first
/// successful start. A rejected start leaves the gate open so the next entry
/// retries.
pub fn wire_hero_video(document: &web::Document) {
    let Some(video) = dom::query::<web::HtmlVideoElement>(document, "#autoVideo") else {
        log::debug!("[media] hero video absent");
        return;
    };
    let inner = Rc::new(HeroInner {
        video,
        overlay: dom::query::<web::Element>(document, ".video-overlay"),
        gate: RefCell::new(MediaGate::new(PlaybackPolicy::PlayOnce)),
    });

    let watched = inner.clone();
    observe::watch_ratio(&inner.video, VIDEO_VISIBLE_RATIO, None, move |visible| {
        let command = watched.gate.borrow_mut().on_visibility(visible);
        match command {
            Some(MediaCommand::Play) => start_hero(&watched),
            Some(MediaCommand::Pause) => _ = watched.video.pause(),
            None => {}
        }
    });
    log::info!("[media] hero video wired");
}

fn start_hero(inner: &Rc<HeroInner>) {
    let promise = match inner.video.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[media] hero play() failed: {e:?}");
            return;
        }
    };
    let inner = inner.clone();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                inner.gate.borrow_mut().mark_played();
                if let Some(overlay) = &inner.overlay {
                    _ = overlay.class_list().add_1("hidden");
                }
                log::info!("[media] hero video playing");
            }
            Err(e) => log::warn!("[media] hero autoplay rejected: {e:?}"),
        }
    });
}

struct PortraitInner {
    video: web::HtmlVideoElement,
    gate: RefCell<MediaGate>,
}

/// Portrait video beside the gallery: muted inline autoplay while more than
/// half visible, paused otherwise.
pub fn wire_portrait_video(document: &web::Document) {
    let Some(video) = dom::query::<web::HtmlVideoElement>(document, "#portraitVideo") else {
        log::debug!("[media] portrait video absent");
        return;
    };

    // Mobile browsers refuse un-gestured playback unless both are set.
    video.set_muted(true);
    _ = video.set_attribute("muted", "");
    _ = video.set_attribute("playsinline", "");
    ensure_source(document, &video, PORTRAIT_VIDEO_SRC);

    let inner = Rc::new(PortraitInner {
        video,
        gate: RefCell::new(MediaGate::new(PlaybackPolicy::WhileVisible)),
    });
    let watched = inner.clone();
    observe::watch_ratio(&inner.video, VIDEO_VISIBLE_RATIO, None, move |visible| {
        let command = watched.gate.borrow_mut().on_visibility(visible);
        match command {
            Some(MediaCommand::Play) => play_quietly(&watched.video),
            Some(MediaCommand::Pause) => _ = watched.video.pause(),
            None => {}
        }
    });
    log::info!("[media] portrait video wired");
}

/// Make sure the video carries a `<source type="video/mp4">` pointing at
/// `src`, reloading the element only when the source actually changed.
fn ensure_source(document: &web::Document, video: &web::HtmlVideoElement, src: &str) {
    let source = match video.query_selector("source").ok().flatten() {
        Some(existing) => existing,
        None => {
            let Ok(created) = document.create_element("source") else {
                return;
            };
            _ = created.set_attribute("type", "video/mp4");
            _ = video.append_child(&created);
            created
        }
    };
    if source.get_attribute("src").as_deref() != Some(src) {
        _ = source.set_attribute("src", src);
        video.load();
    }
}

/// Playback attempt where rejection is routine under autoplay policy.
fn play_quietly(video: &web::HtmlVideoElement) {
    let Ok(promise) = video.play() else {
        return;
    };
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("[media] portrait autoplay rejected: {e:?}");
        }
    });
}
