use crate::toast::{Toast, ToastKind, ToastQueue, TOAST_EXIT_MS, TOAST_VISIBLE_MS};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

enum ToastAction {
    Show(Toast),
    BeginExit(u64),
    Remove(u64),
}

#[derive(Default, PartialEq)]
struct ToastState {
    queue: ToastQueue,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();

        match action {
            ToastAction::Show(toast) => queue.insert(toast),
            ToastAction::BeginExit(id) => {
                queue.begin_exit(id);
            }
            ToastAction::Remove(id) => {
                queue.remove(id);
            }
        }

        Rc::new(Self { queue })
    }
}

/// Banner stack owned by a single form.
#[derive(Clone)]
pub struct UseToasts {
    state: UseReducerHandle<ToastState>,
    next_id: Rc<RefCell<u64>>,
}

impl UseToasts {
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            *next_id
        };

        let dispatcher = self.state.dispatcher();
        dispatcher.dispatch(ToastAction::Show(Toast::new(id, kind, message)));

        Timeout::new(TOAST_VISIBLE_MS, move || {
            dispatcher.dispatch(ToastAction::BeginExit(id));
            Timeout::new(TOAST_EXIT_MS, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            })
            .forget();
        })
        .forget();
    }

    pub fn view(&self) -> Html {
        let toasts = self.state.queue.toasts().iter().enumerate().map(|(slot, toast)| {
            html! {
                <div
                    key={toast.id.to_string()}
                    class={toast.kind.class_name()}
                    role={toast.kind.role()}
                    style={toast.style(slot)}
                >
                    {toast.message.clone()}
                </div>
            }
        });

        html! {
            <div class="toast-stack" aria-live="polite">
                { for toasts }
            </div>
        }
    }
}

#[hook]
pub fn use_toasts() -> UseToasts {
    let state = use_reducer(ToastState::default);
    let next_id = use_mut_ref(|| 0_u64);

    UseToasts { state, next_id }
}
