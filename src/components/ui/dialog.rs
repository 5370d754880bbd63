use icons::X;
use leptos::prelude::*;
use leptos_ui::clx;
use strum::{AsRefStr, Display};
use tw_merge::*;

mod components {
    use super::*;
    clx! {DialogBody, div, "flex flex-col gap-4"}
    clx! {DialogHeader, div, "flex flex-col gap-2 text-center sm:text-left"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogDescription, p, "text-muted-foreground text-sm"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

#[allow(unused_imports)]
pub use components::*;

/// Value of the `data-state` attribute driving the open/close transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ModalState {
    Open,
    Closed,
}

impl From<bool> for ModalState {
    fn from(open: bool) -> Self {
        if open {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }
}

/// Overlay dialog whose visibility is owned by the caller.
///
/// Children stay mounted while closed; the backdrop and the close button both
/// report through `on_close`.
#[component]
pub fn Modal(
    children: Children,
    open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    #[prop(default = "Dialog")] data_name_prefix: &'static str,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "relative bg-background border rounded-2xl shadow-lg p-6 w-full max-w-[calc(100%-2rem)] max-h-[85vh] overflow-y-auto fixed top-[50%] left-[50%] translate-x-[-50%] translate-y-[-50%] z-100 transition-all duration-200 data-[state=closed]:invisible data-[state=closed]:opacity-0 data-[state=closed]:scale-95 data-[state=open]:opacity-100 data-[state=open]:scale-100",
        class
    );

    let state = move || ModalState::from(open.get()).to_string();
    let pointer_events = move || {
        if open.get() {
            "pointer-events: auto;"
        } else {
            "pointer-events: none;"
        }
    };

    view! {
        <div
            data-name=format!("{}Backdrop", data_name_prefix)
            class="fixed inset-0 transition-opacity duration-200 z-60 bg-black/50 data-[state=closed]:opacity-0 data-[state=open]:opacity-100"
            data-state=state
            style=pointer_events
            on:click=move |_| on_close.run(())
        />

        <div
            data-name=format!("{}Content", data_name_prefix)
            class=merged_class
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!open.get()).to_string()
            data-state=state
            style=pointer_events
        >
            <button
                type="button"
                class="absolute top-4 right-4 p-1 rounded-sm focus:ring-2 focus:ring-offset-2 focus:outline-none [&_svg:not([class*='size-'])]:size-4 focus:ring-ring"
                aria-label="Close dialog"
                on:click=move |_| on_close.run(())
            >
                <span class="hidden">"Close Dialog"</span>
                <X />
            </button>

            {children()}
        </div>
    }
}
