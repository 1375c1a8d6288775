//! Transient notifications raised by service calls.

use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

/// Auto-dismiss delay for notifications.
const DEFAULT_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Open toasts keyed by an increasing id, so iteration order is the order
/// they were raised in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: BTreeMap<u64, Toast>,
}

pub enum ToastAction {
    Add { message: String, kind: ToastKind },
    Remove(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Add { message, kind } => {
                let id = next.next_id;
                next.next_id += 1;
                next.toasts.insert(id, Toast { id, message, kind });
            }
            ToastAction::Remove(id) => {
                next.toasts.remove(&id);
            }
        }
        Rc::new(next)
    }
}

impl ToastState {
    /// Id the next added toast will get.
    pub fn upcoming_id(&self) -> u64 {
        self.next_id
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    fn add(&self, message: String, kind: ToastKind) {
        let id = self.context.upcoming_id();
        self.context.dispatch(ToastAction::Add { message, kind });

        let context = self.context.clone();
        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DEFAULT_DURATION_MS).await;
            context.dispatch(ToastAction::Remove(id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(message.into(), ToastKind::Error);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(message.into(), ToastKind::Success);
    }

    pub fn remove(&self, id: u64) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle { context }
}
