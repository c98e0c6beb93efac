use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use super::debounce::Debouncer;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct NavbarStyle {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarStyle {
    /// Navbar look after the page moved from `last_y` to `y`. It hides while
    /// scrolling down past the hide threshold and comes back on any upward
    /// scroll.
    pub fn for_scroll(last_y: f64, y: f64) -> Self {
        Self {
            scrolled: y > config::NAVBAR_SCROLLED_AFTER,
            hidden: y > last_y && y > config::NAVBAR_HIDE_AFTER,
        }
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "transform: translateY(-100%);"
        } else {
            "transform: translateY(0);"
        }
    }
}

/// Share of the scrollable height already scrolled, in percent.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn back_to_top_visible(y: f64) -> bool {
    y > config::BACK_TO_TOP_AFTER
}

/// Background offset for the hero. `None` once the hero has scrolled out,
/// leaving the last offset in place.
pub fn parallax_offset(y: f64, hero_height: f64) -> Option<f64> {
    (y < hero_height).then(|| y * config::PARALLAX_SPEED)
}

pub fn hero_height(viewport_width: f64) -> &'static str {
    if viewport_width < config::MOBILE_BREAKPOINT {
        "80vh"
    } else {
        "100vh"
    }
}

/// Where to scroll so a section starts just under the fixed navbar.
pub fn anchor_top(section_top: f64, navbar_height: f64) -> f64 {
    (section_top - navbar_height).max(0.0)
}

pub fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(config::MOBILE_BREAKPOINT)
}

/// Scroll progress in percent for the current document.
pub fn document_progress() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let scroll_height = window
        .document()
        .and_then(|d| d.body())
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    progress_percent(current_scroll_y(), scroll_height, viewport_height)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls to the element with `id`, offset by the navbar height.
/// Returns false when there is no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let navbar_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);

    smooth_scroll_to(anchor_top(section.offset_top() as f64, navbar_height));
    true
}

/// Re-reads `read` after `event` fires on the window, debounced by `wait` ms.
#[hook]
pub fn use_window_metric<T>(event: &'static str, wait: u32, read: fn() -> T) -> T
where
    T: Clone + PartialEq + 'static,
{
    let value = use_state_eq(read);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let debouncer: Debouncer = Debouncer::new(wait);
                let listener = Closure::<dyn Fn()>::new(move || {
                    let value = value.clone();
                    debouncer.call(move || value.set(read()));
                });

                let window = window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                    }
                }
            },
            (event, wait),
        );
    }

    (*value).clone()
}

#[hook]
pub fn use_scroll_y() -> f64 {
    use_window_metric("scroll", config::SCROLL_DEBOUNCE_MS, current_scroll_y)
}

#[hook]
pub fn use_viewport_width() -> f64 {
    use_window_metric("resize", config::DEFAULT_DEBOUNCE_MS, viewport_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_scrolled_class_threshold() {
        assert!(!NavbarStyle::for_scroll(0.0, 50.0).scrolled);
        assert!(NavbarStyle::for_scroll(0.0, 51.0).scrolled);
    }

    #[test]
    fn test_navbar_hides_only_when_scrolling_down_past_threshold() {
        assert!(!NavbarStyle::for_scroll(100.0, 150.0).hidden);
        assert!(NavbarStyle::for_scroll(150.0, 250.0).hidden);
        assert!(!NavbarStyle::for_scroll(600.0, 500.0).hidden);
        assert_eq!(NavbarStyle::for_scroll(600.0, 500.0).transform(), "transform: translateY(0);");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1200.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_for_short_document_is_zero() {
        assert_eq!(progress_percent(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_percent(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn test_parallax_moves_at_half_speed_inside_hero() {
        assert_eq!(parallax_offset(200.0, 900.0), Some(100.0));
        assert_eq!(parallax_offset(900.0, 900.0), None);
    }

    #[test]
    fn test_hero_height_breakpoint() {
        assert_eq!(hero_height(767.0), "80vh");
        assert_eq!(hero_height(768.0), "100vh");
    }

    #[test]
    fn test_anchor_top_never_negative() {
        assert_eq!(anchor_top(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_top(40.0, 80.0), 0.0);
    }
}
