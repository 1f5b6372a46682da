use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Handle pages use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<(ToastKind, String)>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Error, message.into()));
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster {
        push: Callback::from(|(_, message): (ToastKind, String)| {
            log::warn!("toast outside provider: {}", message);
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let toaster = {
        let dispatcher = list.dispatcher();
        let next_id = next_id.clone();
        use_memo(
            move |_| Toaster {
                push: Callback::from(move |(kind, message): (ToastKind, String)| {
                    let id = {
                        let mut counter = next_id.borrow_mut();
                        *counter += 1;
                        *counter
                    };
                    dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));
                    let dispatcher = dispatcher.clone();
                    Timeout::new(TOAST_DURATION_MS, move || {
                        dispatcher.dispatch(ToastAction::Dismiss(id));
                    })
                    .forget();
                }),
            },
            (),
        )
    };

    let dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div class="toast-stack">
                {
                    list.toasts.iter().map(|toast| {
                        let id = toast.id;
                        let dismiss = dismiss.clone();
                        html! {
                            <div key={id} class={toast.kind.class()} onclick={Callback::from(move |_: MouseEvent| dismiss.emit(id))}>
                                {&toast.message}
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast { id, kind: ToastKind::Success, message: format!("m{}", id) }
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Push(toast(2)))
            .reduce(ToastAction::Dismiss(1));
        assert_eq!(list.toasts, vec![toast(2)]);

        let list = list.reduce(ToastAction::Dismiss(9));
        assert_eq!(list.toasts.len(), 1);
    }
}
