use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn accent(self) -> &'static str {
        match self {
            ToastKind::Success => "#e77402",
            ToastKind::Error => "#ef4444",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push { kind: ToastKind, message: String },
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push { kind, message } => {
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    kind,
                    message,
                });
                queue.next_id = queue.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => queue.toasts.retain(|t| t.id != id),
        }
        Rc::new(queue)
    }
}

/// Dispatch-only handle other components use to raise toasts.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatch: Callback<ToastAction>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.dispatch.emit(ToastAction::Push {
            kind: ToastKind::Success,
            message: message.into(),
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.dispatch.emit(ToastAction::Push {
            kind: ToastKind::Error,
            message: message.into(),
        });
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster {
        dispatch: Callback::from(|action: ToastAction| {
            if let ToastAction::Push { message, .. } = action {
                log::warn!("toast raised outside ToastHost: {}", message);
            }
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let toaster = {
        let dispatcher = queue.dispatcher();
        use_memo(
            move |_| Toaster {
                dispatch: Callback::from(move |action: ToastAction| dispatcher.dispatch(action)),
            },
            (),
        )
    };

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            <style>
                {r#"
                .toast-host {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 10000;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    pointer-events: none;
                }
                .toast {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    padding: 16px;
                    border-radius: 12px;
                    pointer-events: auto;
                    animation: toastIn 0.3s ease-out;
                    max-width: 90vw;
                }
                .toast-icon {
                    width: 22px;
                    height: 22px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 0.8rem;
                    font-weight: bold;
                    flex-shrink: 0;
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.6);
                    cursor: pointer;
                    font-size: 1rem;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            { for props.children.iter() }
            <div class="toast-host" role="status" aria-live="polite">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastBar key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastBarProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastBar)]
fn toast_bar(props: &ToastBarProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast">
            <span class="toast-icon" style={format!("background: {};", props.toast.kind.accent())}>
                { props.toast.kind.icon() }
            </span>
            <span>{ &props.toast.message }</span>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, kind: ToastKind, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            kind,
            message: message.to_string(),
        })
    }

    #[test]
    fn toasts_stack_in_arrival_order_with_unique_ids() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, ToastKind::Error, "Please fix the errors in the form");
        let queue = push(queue, ToastKind::Success, "Message sent successfully!");
        assert_eq!(queue.toasts.len(), 2);
        assert_eq!(queue.toasts[0].kind, ToastKind::Error);
        assert_ne!(queue.toasts[0].id, queue.toasts[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, ToastKind::Success, "one");
        let queue = push(queue, ToastKind::Success, "two");
        let first = queue.toasts[0].id;
        let queue = queue.reduce(ToastAction::Dismiss(first));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "two");

        // dismissing an expired id is a no-op
        let queue = queue.reduce(ToastAction::Dismiss(first));
        assert_eq!(queue.toasts.len(), 1);
    }
}
