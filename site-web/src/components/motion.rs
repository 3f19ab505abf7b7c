//! Viewport reveal
//!
//! Cosmetic fade-in-up on first scroll into view. Components ask the
//! [`MotionPreference`] in context for their class and style hooks; `style/main.css`
//! does the animating and an `IntersectionObserver` flips the root to `in-view` once.
//! With motion disabled no hooks are emitted and the markup is plain.

use leptos::prelude::*;

use crate::utils::constants::{
    DELAY_CHILDREN_MS, REVEAL_CLASS, REVEAL_DURATION_MS, REVEAL_OFFSET_PX,
    STAGGER_CHILDREN_MS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Enabled,
    Disabled,
}

impl MotionPreference {
    /// Enabled unless the browser reports `prefers-reduced-motion: reduce`.
    pub fn from_environment() -> Self {
        if prefers_reduced_motion() {
            MotionPreference::Disabled
        } else {
            MotionPreference::Enabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == MotionPreference::Enabled
    }

    /// `base` plus the reveal class when motion is on.
    pub fn class(self, base: &str) -> String {
        if self.is_enabled() {
            format!("{base} {REVEAL_CLASS}")
        } else {
            base.to_string()
        }
    }

    /// Transition delay for the `index`-th child of a staggered container.
    pub fn stagger_style(self, index: usize) -> Option<String> {
        self.is_enabled().then(|| {
            let delay = DELAY_CHILDREN_MS + STAGGER_CHILDREN_MS * index as u32;
            format!("transition-delay: {delay}ms;")
        })
    }

    /// Marker the stylesheet keys reveal rules on.
    pub fn root_marker(self) -> Option<&'static str> {
        self.is_enabled().then_some("reveal")
    }

    /// Custom properties consumed by the reveal rules.
    pub fn root_style(self) -> Option<String> {
        self.is_enabled().then(|| {
            format!("--reveal-duration: {REVEAL_DURATION_MS}ms; --reveal-offset: {REVEAL_OFFSET_PX}px;")
        })
    }
}

pub fn provide_motion(preference: MotionPreference) -> MotionPreference {
    provide_context(preference);
    preference
}

pub fn use_motion() -> MotionPreference {
    use_context::<MotionPreference>().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn prefers_reduced_motion() -> bool {
    false
}

/// Add the in-view class to `root` the first time `threshold` of it is visible.
#[cfg(target_arch = "wasm32")]
pub fn observe_viewport(root: NodeRef<leptos::html::Footer>, threshold: f64) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::utils::constants::IN_VIEW_CLASS;

    Effect::new(move || {
        let Some(node) = root.get() else {
            return;
        };
        let element: web_sys::Element = node.into();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        if let Err(e) = entry.target().class_list().add_1(IN_VIEW_CLASS) {
                            log::warn!("failed to mark footer in view: {:?}", e);
                        }
                        observer.disconnect();
                        log::debug!("footer entered viewport");
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                // The observer disconnects itself; the closure lives for the page.
                callback.forget();
            }
            Err(e) => {
                // Content is already visible without the reveal, so just show it.
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                element.class_list().add_1(IN_VIEW_CLASS).ok();
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_viewport(_root: NodeRef<leptos::html::Footer>, _threshold: f64) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_hooks() {
        let motion = MotionPreference::Enabled;
        assert_eq!(motion.class("footer-brand"), "footer-brand reveal");
        assert_eq!(motion.stagger_style(0).as_deref(), Some("transition-delay: 100ms;"));
        assert_eq!(motion.stagger_style(2).as_deref(), Some("transition-delay: 300ms;"));
        assert_eq!(motion.root_marker(), Some("reveal"));
        let root_style = motion.root_style().unwrap();
        assert!(root_style.contains("--reveal-duration: 600ms"));
        assert!(root_style.contains("--reveal-offset: 20px"));
    }

    #[test]
    fn test_disabled_hooks_are_empty() {
        let motion = MotionPreference::Disabled;
        assert_eq!(motion.class("footer-brand"), "footer-brand");
        assert_eq!(motion.stagger_style(3), None);
        assert_eq!(motion.root_marker(), None);
        assert_eq!(motion.root_style(), None);
    }

    #[test]
    fn test_default_is_enabled() {
        assert!(MotionPreference::default().is_enabled());
        assert!(MotionPreference::from_environment().is_enabled());
    }
}
