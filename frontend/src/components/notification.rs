use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(id: u32, message: impl Into<String>) -> Self {
        Self { id, kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(id: u32, message: impl Into<String>) -> Self {
        Self { id, kind: NoticeKind::Error, message: message.into() }
    }
}

/// Lifecycle of one toast: slide in, hold, slide out, then close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStage {
    Entering,
    Shown,
    Leaving,
}

impl ToastStage {
    /// How long to stay in this stage and what comes after. `None` means
    /// the toast is done and should be removed.
    pub fn next(self) -> (u32, Option<ToastStage>) {
        match self {
            ToastStage::Entering => (config::TOAST_SHOW_DELAY_MS, Some(ToastStage::Shown)),
            ToastStage::Shown => (config::TOAST_VISIBLE_MS, Some(ToastStage::Leaving)),
            ToastStage::Leaving => (config::TOAST_EXIT_MS, None),
        }
    }

    fn style(self) -> &'static str {
        match self {
            ToastStage::Shown => "opacity: 1; transform: translateX(0);",
            ToastStage::Entering | ToastStage::Leaving => "opacity: 0; transform: translateX(100%);",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Notice,
    pub on_close: Callback<u32>,
}

/// Floating toast. Give it `key={notice.id}` so a new notice restarts the
/// animation.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let stage = use_state(|| ToastStage::Entering);

    {
        let stage_setter = stage.setter();
        let on_close = props.on_close.clone();
        let id = props.notice.id;
        use_effect_with_deps(
            move |stage: &ToastStage| {
                let (delay, next) = stage.next();
                let timeout = Timeout::new(delay, move || match next {
                    Some(next) => stage_setter.set(next),
                    None => on_close.emit(id),
                });

                move || drop(timeout)
            },
            *stage,
        );
    }

    let alert = match props.notice.kind {
        NoticeKind::Success => "alert alert-success notification",
        NoticeKind::Error => "alert alert-danger notification",
    };

    html! {
        <div class={alert} role="status" style={stage.style()}>
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        z-index: 1050;
                        min-width: 300px;
                        transition: all 0.3s ease;
                    }
                "#}
            </style>
            { props.notice.message.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_runs_through_every_stage_once() {
        let mut stage = ToastStage::Entering;
        let mut total = 0;
        let mut seen = vec![stage];
        loop {
            let (delay, next) = stage.next();
            total += delay;
            match next {
                Some(next) => {
                    seen.push(next);
                    stage = next;
                }
                None => break,
            }
        }
        assert_eq!(seen, vec![ToastStage::Entering, ToastStage::Shown, ToastStage::Leaving]);
        assert_eq!(total, 100 + 5_000 + 300);
    }

    #[test]
    fn test_only_shown_stage_is_visible() {
        assert!(ToastStage::Shown.style().starts_with("opacity: 1"));
        assert!(ToastStage::Entering.style().starts_with("opacity: 0"));
        assert!(ToastStage::Leaving.style().starts_with("opacity: 0"));
    }
}
