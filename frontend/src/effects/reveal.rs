use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay before the card at `index` starts its entrance.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

pub fn stagger_style(revealed: bool, index: usize, step_ms: u32) -> String {
    if revealed {
        format!(
            "opacity: 1; transform: translateY(0); transition-delay: {}ms;",
            stagger_delay(index, step_ms)
        )
    } else {
        "opacity: 0; transform: translateY(30px);".to_string()
    }
}

pub fn reveal_class(base: &'static str, revealed: bool) -> Classes {
    classes!(base, revealed.then_some("fade-in"))
}

/// True once `node` has scrolled into view. The element is unobserved after
/// its first intersection, so the reveal only happens once. Without
/// IntersectionObserver support everything counts as revealed.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut teardown: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let setter = revealed.clone();
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    setter.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                    options.set_root_margin(REVEAL_ROOT_MARGIN);

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            teardown = Some((observer, callback));
                        }
                        Err(e) => {
                            debug!("IntersectionObserver unavailable: {:?}", e);
                            revealed.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::classes;

    #[test]
    fn test_stagger_delay_grows_per_index() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay(i, 150)).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
        assert_eq!(stagger_delay(2, 200), 400);
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(
            stagger_style(true, 3, 200),
            "opacity: 1; transform: translateY(0); transition-delay: 600ms;"
        );
        assert!(stagger_style(false, 3, 200).starts_with("opacity: 0"));
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("feature-card", true), classes!("feature-card", "fade-in"));
        assert_eq!(reveal_class("feature-card", false), classes!("feature-card"));
    }
}
