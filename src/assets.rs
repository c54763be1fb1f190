//! Browser-side asset handling: icon warm-up and the hover click sound.

use js_sys::Promise;
use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, HtmlImageElement};

/// Start fetching each image so the lazy `<img>` tags find it cached.
/// Nothing waits on these loads.
pub fn preload_images(sources: &[&str]) {
    for src in sources {
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(src),
            Err(e) => warn!("could not create preload image for {}: {:?}", src, e),
        }
    }
}

/// One shared audio element, rewound on every hover.
#[derive(Clone, PartialEq)]
pub struct HoverSound {
    audio: HtmlAudioElement,
}

impl HoverSound {
    pub fn new(src: &str) -> Option<Self> {
        match HtmlAudioElement::new_with_src(src) {
            Ok(audio) => {
                audio.set_preload("auto");
                Some(Self { audio })
            }
            Err(e) => {
                warn!("hover sound {} unavailable: {:?}", src, e);
                None
            }
        }
    }

    /// Rewind and play. Autoplay refusals are dropped.
    pub fn play(&self) {
        self.audio.set_current_time(0.0);
        let played: Result<Promise, _> = self.audio.play();
        match played {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    debug!("hover sound not played: {:?}", e);
                }
            }),
            Err(e) => debug!("hover sound not played: {:?}", e),
        }
    }
}
