use crate::catalog::DoorSlot;
use crate::components::ui::Spinner;
use crate::editor::EntryEditor;
use crate::state::AppContext;
use crate::viewer::MiracleViewer;
use icons::Plus;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Calendar grid with its viewer and editor modals.
///
/// Mounted at `/` and at `/day/:day`; the latter opens that day's door once
/// the catalog has loaded.
#[component]
pub fn CalendarPage() -> impl IntoView {
    let state = expect_context::<AppContext>().0;
    let params = use_params_map();

    Effect::new(move |_| {
        if !state.catalog_loaded.get() {
            return;
        }
        let Some(day) = params.with(|p| p.get("day")).and_then(|d| d.parse::<i64>().ok()) else {
            return;
        };
        if let Some(entry) = untrack(|| state.entry_for_day(day)) {
            state.open_viewer(entry);
        }
    });

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex w-full max-w-5xl flex-col gap-6 px-4 py-10">
                <header class="flex flex-col items-center gap-2 text-center">
                    <h1 class="text-2xl font-semibold tracking-tight">"30 Doors"</h1>
                    <p class="text-sm text-muted-foreground">
                        "Open one door each day to reveal a miracle of the Quran."
                    </p>
                </header>

                <Show
                    when=move || state.catalog_loaded.get()
                    fallback=|| view! {
                        <div class="flex items-center justify-center gap-2 py-16 text-xs text-muted-foreground">
                            <Spinner />
                            "Loading doors..."
                        </div>
                    }
                >
                    <DoorGrid />
                </Show>

                <Show when=move || { state.unplaced_count() > 0 } fallback=|| ().into_view()>
                    <p class="text-center text-xs text-muted-foreground">
                        {move || format!("{} saved entries are beyond day 30 and not shown.", state.unplaced_count())}
                    </p>
                </Show>
            </div>

            <MiracleViewer />
            <EntryEditor />
        </div>
    }
}

#[component]
pub(crate) fn DoorGrid() -> impl IntoView {
    let state = expect_context::<AppContext>().0;

    view! {
        <div class="grid grid-cols-3 gap-3 sm:grid-cols-5 lg:grid-cols-6">
            {move || {
                state
                    .slots()
                    .into_iter()
                    .map(|slot| view! { <Door door=slot /> })
                    .collect_view()
            }}

            <button
                type="button"
                data-name="CreateDoor"
                class="flex aspect-square flex-col items-center justify-center gap-1 rounded-xl border border-dashed text-muted-foreground transition-colors hover:bg-accent hover:text-accent-foreground hover:cursor-pointer"
                on:click=move |_| state.open_editor()
            >
                <span class="[&_svg]:size-6"><Plus /></span>
                <span class="text-xs">"Add"</span>
            </button>
        </div>
    }
}

#[component]
fn Door(door: DoorSlot) -> impl IntoView {
    let state = expect_context::<AppContext>().0;
    let is_open = door.is_open();
    let DoorSlot { day, entry } = door;

    let on_click = move |_| {
        if let Some(entry) = entry.clone() {
            state.open_viewer(entry);
        }
    };

    view! {
        <button
            type="button"
            data-name="Door"
            data-day=day.to_string()
            class="flex aspect-square flex-col items-center justify-center gap-1 rounded-xl border bg-card shadow-sm transition-all hover:cursor-pointer hover:shadow-md disabled:cursor-not-allowed disabled:opacity-50 disabled:shadow-none"
            disabled=!is_open
            on:click=on_click
        >
            <span class="text-2xl font-semibold">{day.to_string()}</span>
            <span class="text-xs text-muted-foreground">"Day"</span>
        </button>
    }
}
