use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{Notice, Notification};
use crate::config;
use crate::contact::validation::{is_valid_email, EMAIL_MESSAGE};

pub const SUBSCRIBE_LABEL: &str = "Subscribe";
pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing to our newsletter!";

/// What a newsletter submit should do with the entered address.
pub fn check_signup(email: &str) -> Result<(), &'static str> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(EMAIL_MESSAGE)
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let subscribing = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let next_id = use_mut_ref(|| 0u32);

    let show = {
        let notice = notice.clone();
        let next_id = next_id.clone();
        move |success: bool, message: &str| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            notice.set(Some(if success {
                Notice::success(id, message)
            } else {
                Notice::error(id, message)
            }));
        }
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let subscribing = subscribing.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *subscribing {
                return;
            }
            if let Err(message) = check_signup(&email) {
                show(false, message);
                return;
            }

            subscribing.set(true);
            let email = email.clone();
            let subscribing = subscribing.clone();
            let show = show.clone();
            spawn_local(async move {
                // No newsletter backend yet, the signup is only acknowledged.
                TimeoutFuture::new(config::NEWSLETTER_DELAY_MS).await;
                info!("Newsletter signup for {}", *email);
                show(true, SUBSCRIBED_MESSAGE);
                email.set(String::new());
                subscribing.set(false);
            });
        })
    };

    let on_close = {
        let notice = notice.clone();
        Callback::from(move |_id: u32| notice.set(None))
    };

    html! {
        <>
            <form class="newsletter-form d-flex gap-2" {onsubmit}>
                <input
                    type="email"
                    class="form-control"
                    placeholder="Your email address"
                    aria-label="Email address"
                    value={(*email).clone()}
                    {oninput}
                />
                <button type="submit" class="btn btn-primary" disabled={*subscribing}>
                    { if *subscribing { SUBSCRIBING_LABEL } else { SUBSCRIBE_LABEL } }
                </button>
            </form>
            if let Some(notice) = (*notice).clone() {
                <Notification key={notice.id} notice={notice.clone()} {on_close} />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_signup() {
        assert_eq!(check_signup("reader@luxe.in"), Ok(()));
        assert_eq!(check_signup("reader"), Err(EMAIL_MESSAGE));
        assert_eq!(check_signup(""), Err(EMAIL_MESSAGE));
    }
}
