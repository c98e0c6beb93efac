use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::controller::{BannerKind, FormController};
use super::field::{FieldKind, FieldName, FieldState, Validity};
use super::relay::{HttpRelay, Relay, SubmissionOutcome};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_else(|| config::get_relay_url().to_string())]
    pub endpoint: String,
}

pub enum ContactFormMsg {
    Input(FieldName, String),
    Blur(FieldName),
    Submit,
    Delivered(SubmissionOutcome),
    DismissBanner,
}

pub struct ContactForm {
    controller: FormController<FieldState>,
    relay: Rc<HttpRelay>,
    banner_timeout: Option<Timeout>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: FormController::new(FieldState::contact_fields()),
            relay: Rc::new(HttpRelay::new(ctx.props().endpoint.clone())),
            banner_timeout: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.relay = Rc::new(HttpRelay::new(ctx.props().endpoint.clone()));
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(name, value) => {
                self.controller.input(name, &value);
                true
            }
            ContactFormMsg::Blur(name) => {
                self.controller.validate(name);
                true
            }
            ContactFormMsg::Submit => {
                self.banner_timeout = None;
                if let Some(submission) = self.controller.begin_submit() {
                    let relay = Rc::clone(&self.relay);
                    ctx.link().send_future(async move {
                        ContactFormMsg::Delivered(relay.submit(&submission).await)
                    });
                }
                true
            }
            ContactFormMsg::Delivered(outcome) => {
                self.controller.finish_submit(outcome);
                if let Some(millis) = self.controller.banner_timeout_ms() {
                    let link = ctx.link().clone();
                    self.banner_timeout = Some(Timeout::new(millis, move || {
                        link.send_message(ContactFormMsg::DismissBanner);
                    }));
                }
                true
            }
            ContactFormMsg::DismissBanner => {
                info!("Dismissing contact banner");
                self.banner_timeout = None;
                self.controller.dismiss_banner();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let button = self.controller.button();

        html! {
            <div class="contact-form-wrapper">
                { self.view_banner(ctx) }
                <form class="contact-form" novalidate={true} {onsubmit}>
                    <div class="row g-3">
                        { for self.controller.fields().iter().map(|field| self.view_field(ctx, field)) }
                    </div>
                    <button type="submit" class="btn btn-primary btn-lg mt-4" disabled={button.disabled}>
                        if button.disabled {
                            <span class="spinner-border spinner-border-sm me-2" role="status"></span>
                        }
                        { button.label.clone() }
                    </button>
                </form>
            </div>
        }
    }
}

impl ContactForm {
    fn view_banner(&self, ctx: &Context<Self>) -> Html {
        let Some(banner) = self.controller.banner() else {
            return html! {};
        };
        let (class, icon) = match banner.kind {
            BannerKind::Success => ("alert alert-success alert-dismissible fade show", "fas fa-check-circle me-2"),
            BannerKind::Error => ("alert alert-danger alert-dismissible fade show", "fas fa-exclamation-circle me-2"),
        };
        let onclick = ctx.link().callback(|_: MouseEvent| ContactFormMsg::DismissBanner);

        html! {
            <div {class} role="alert">
                <i class={icon}></i>
                { banner.message.clone() }
                <button type="button" class="btn-close" aria-label="Close" {onclick}></button>
            </div>
        }
    }

    fn view_field(&self, ctx: &Context<Self>, field: &FieldState) -> Html {
        let name = field.name;
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactFormMsg::Blur(name));
        let feedback = match (field.validity, field.message.as_ref()) {
            (Validity::Invalid, Some(message)) => html! { <div class="invalid-feedback">{ message }</div> },
            (Validity::Valid, _) => html! { <div class="valid-feedback">{"Looks good!"}</div> },
            _ => html! {},
        };

        let control = match field.kind {
            FieldKind::Textarea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    ContactFormMsg::Input(name, input.value())
                });
                html! {
                    <textarea
                        id={name.as_str()}
                        name={name.as_str()}
                        class={field.input_class()}
                        rows="5"
                        required={field.required}
                        value={field.value.clone()}
                        {oninput}
                        {onblur}
                    />
                }
            }
            kind => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    ContactFormMsg::Input(name, input.value())
                });
                html! {
                    <input
                        type={kind.input_type().unwrap_or("text")}
                        id={name.as_str()}
                        name={name.as_str()}
                        class={field.input_class()}
                        required={field.required}
                        value={field.value.clone()}
                        {oninput}
                        {onblur}
                    />
                }
            }
        };

        let column = if field.kind == FieldKind::Textarea { "col-12" } else { "col-md-6" };
        html! {
            <div class={column}>
                <label for={name.as_str()} class="form-label">
                    { field.label }
                    if field.required { <span class="text-danger">{" *"}</span> }
                </label>
                { control }
                { feedback }
            </div>
        }
    }
}
