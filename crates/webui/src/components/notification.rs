//! Toast notifications for API outcomes.
//!
//! Failed requests log to the console and additionally surface here, since
//! the dashboard otherwise gives no hint that a mutation silently failed.

use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Milliseconds before a toast auto-dismisses.
const AUTO_DISMISS_MS: u32 = 5000;

type ToastId = u32;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    pub level: ToastLevel,
    pub message: String,
}

/// Context handle for pushing toasts from anywhere under the provider.
#[derive(Clone)]
pub struct Toaster {
    toasts: UseStateHandle<Vec<Toast>>,
    next_id: Rc<RefCell<ToastId>>,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        *self.toasts == *other.toasts
    }
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id = next_id.wrapping_add(1);
            id
        };

        let mut toasts = (*self.toasts).clone();
        toasts.push(Toast { id, level, message });
        self.toasts.set(toasts);

        let toasts = self.toasts.clone();
        // Fires once; the handle is leaked on purpose.
        Timeout::new(AUTO_DISMISS_MS, move || {
            let remaining: Vec<_> = toasts.iter().filter(|t| t.id != id).cloned().collect();
            toasts.set(remaining);
        })
        .forget();
    }

    fn dismiss(&self, id: ToastId) {
        let remaining: Vec<_> = self.toasts.iter().filter(|t| t.id != id).cloned().collect();
        self.toasts.set(remaining);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0u32);

    let toaster = Toaster {
        toasts: toasts.clone(),
        next_id,
    };

    let on_dismiss = {
        let toaster = toaster.clone();
        Callback::from(move |id: ToastId| toaster.dismiss(id))
    };

    html! {
        <ContextProvider<Toaster> context={toaster.clone()}>
            { props.children.clone() }
            if !toasts.is_empty() {
                <div class="toast-container">
                    { for toasts.iter().map(|toast| {
                        let id = toast.id;
                        let on_dismiss = on_dismiss.clone();
                        html! {
                            <div class={classes!("toast", toast.level.css_class())} key={toast.id}>
                                <span class="toast-message">{ &toast.message }</span>
                                <button
                                    class="toast-dismiss"
                                    onclick={Callback::from(move |_| on_dismiss.emit(id))}
                                    aria-label="Dismiss notification"
                                >
                                    {"×"}
                                </button>
                            </div>
                        }
                    })}
                </div>
            }
        </ContextProvider<Toaster>>
    }
}
