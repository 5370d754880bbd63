use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    // One page of the viewer's sliding strip; full width when paging, fixed width side by side.
    clx! {CardSlide, article, "bg-card text-card-foreground flex w-full shrink-0 flex-col gap-4 rounded-xl border p-6 shadow-sm min-[901px]:w-80"}
}

pub use components::*;
