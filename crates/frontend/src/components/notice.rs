//! Transient success/error messages

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

/// Message state that clears itself `delay_ms` after each change
#[hook]
pub fn use_timed_notice(delay_ms: u32) -> UseStateHandle<Option<Notice>> {
    let notice = use_state(|| None::<Notice>);

    {
        let handle = notice.clone();
        use_effect_with((*notice).clone(), move |current| {
            let timeout = current
                .is_some()
                .then(|| Timeout::new(delay_ms, move || handle.set(None)));
            move || drop(timeout)
        });
    }

    notice
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let class = match notice {
        Notice::Success(_) => "mb-4 p-4 bg-green-50 dark:bg-green-900/20 border border-green-200 dark:border-green-800 rounded-md text-green-700 dark:text-green-300",
        Notice::Error(_) => "mb-4 p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md text-red-700 dark:text-red-300",
    };

    html! {
        <div class={class} role="status">
            <p>{notice.text()}</p>
        </div>
    }
}
