use yew::prelude::*;

/// Visual flavor of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    /// Toast currently on screen, if any
    pub toast: Option<Toast>,
    /// Emitted when the toast should leave the screen
    pub on_dismiss: Callback<()>,
}

/// Renders the current toast and clears it three seconds after it
/// appeared. Replacing the toast drops the previous timer, so an earlier
/// toast's deadline cannot dismiss a newer one.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    {
        let toast = props.toast.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(toast, move |toast| {
            let timer = toast.as_ref().map(|_| {
                gloo::timers::callback::Timeout::new(3000, move || {
                    on_dismiss.emit(());
                })
            });
            move || drop(timer)
        });
    }

    match &props.toast {
        Some(toast) => {
            let kind_class = match toast.kind {
                ToastKind::Success => "success",
                ToastKind::Error => "error",
            };
            html! {
                <div class={classes!("toast", kind_class)}>
                    {&toast.message}
                </div>
            }
        }
        None => html! {},
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod timer_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // The dismissal teardown relies on a dropped handle never firing
    #[wasm_bindgen_test]
    async fn test_dropped_dismiss_timer_never_fires() {
        let fired = Rc::new(Cell::new(false));
        let timer = {
            let fired = fired.clone();
            gloo::timers::callback::Timeout::new(10, move || fired.set(true))
        };
        drop(timer);

        gloo::timers::future::TimeoutFuture::new(50).await;
        assert!(!fired.get());
    }
}
