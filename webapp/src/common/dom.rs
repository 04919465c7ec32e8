// Small wrappers around the handful of browser calls that the virtual dom
// cannot express: media playback, manual scrolling, and the body scroll lock.
//
// every helper degrades to a no-op when its target element is missing, since
// event handlers can outlive the nodes they were attached to.

use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlVideoElement, ScrollBehavior, ScrollToOptions};

// fraction of the visible track paged per arrow click, chosen so that the
// next click always overlaps the previous view by one card or so
const PAGE_FRACTION: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    Back,
    Forward,
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn video_element(video_id: &str) -> Option<HtmlVideoElement> {
    document()?
        .get_element_by_id(video_id)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

// start playback on a muted video, ignoring autoplay refusals so that the
// poster image simply stays up
pub fn play_muted(video_id: &str) {
    let Some(video) = video_element(video_id) else {
        debug!("video {video_id} is not mounted");
        return;
    };

    // the muted idl property has to be set directly, the markup attribute
    // alone does not satisfy autoplay policies
    video.set_muted(true);

    if let Ok(promise) = video.play() {
        spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}

pub fn pause(video_id: &str) {
    let Some(video) = video_element(video_id) else {
        return;
    };

    let _ = video.pause();
}

// smoothly page a horizontally scrolling container one viewport-chunk in
// either direction, clamping at the ends
pub fn page_horizontally(container_id: &str, direction: PageDirection) {
    let Some(container) = document().and_then(|doc| doc.get_element_by_id(container_id)) else {
        debug!("scroll container {container_id} is not mounted");
        return;
    };

    let step = f64::from(container.client_width()) * PAGE_FRACTION;

    let delta = match direction {
        PageDirection::Back => -step,
        PageDirection::Forward => step,
    };

    let options = ScrollToOptions::new();
    options.set_left(delta);
    options.set_behavior(ScrollBehavior::Smooth);

    container.scroll_by_with_scroll_to_options(&options);
}

// suspend or restore page scrolling while an overlay is up
//
// callers do not need to balance their calls, setting the same state twice
// is harmless
pub fn lock_body_scroll(lock: bool) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };

    let style = body.style();

    let result = if lock {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };

    if result.is_err() {
        debug!("could not update the body scroll lock");
    }
}
