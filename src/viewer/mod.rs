mod navigation;
mod split;

pub(crate) use navigation::{CardLayout, CardNav, Swipe, PAGING_BREAKPOINT_PX};
pub(crate) use split::split_description;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, CardSlide, Modal};
use crate::models::Entry;
use crate::state::AppContext;
use icons::{ChevronLeft, ChevronRight};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Text shown on each card after the verse card.
fn description_pages(entry: &Entry, layout: CardLayout) -> Vec<String> {
    match layout {
        CardLayout::Single => vec![entry.description.clone()],
        CardLayout::Split => {
            let (first, second) = split_description(&entry.description);
            vec![first, second]
        }
    }
}

/// Modal that pages through one entry, card by card.
#[component]
pub fn MiracleViewer() -> impl IntoView {
    let state = expect_context::<AppContext>().0;
    let layout = state.card_layout();
    let touch_start_x = StoredValue::new(0_i32);

    let resize_handle = window_event_listener(ev::resize, move |_| state.refresh_viewport());
    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && state.viewer_entry.with_untracked(|e| e.is_some()) {
            state.close_viewer();
        }
    });
    on_cleanup(move || {
        resize_handle.remove();
        key_handle.remove();
    });

    let open = Signal::derive(move || state.is_viewer_open());

    let strip_style = move || {
        let offset = state
            .card_nav
            .get()
            .offset_percent(state.viewport_width.get());
        format!("transform: translateX({offset}%);")
    };

    let on_touch_start = move |ev: web_sys::TouchEvent| {
        if let Some(t) = ev.changed_touches().get(0) {
            touch_start_x.set_value(t.screen_x());
        }
    };

    let on_touch_end = move |ev: web_sys::TouchEvent| {
        if let Some(t) = ev.changed_touches().get(0) {
            state.swipe(touch_start_x.get_value(), t.screen_x());
        }
    };

    view! {
        <Modal
            open=open
            on_close=Callback::new(move |_| state.close_viewer())
            class="max-w-[calc(100%-2rem)] min-[901px]:max-w-fit p-4 sm:p-6"
            data_name_prefix="Viewer"
        >
            <div class="overflow-hidden pt-6" data-layout=layout.to_string()>
                <div
                    class="flex gap-0 transition-transform duration-300 ease-out min-[901px]:gap-6"
                    style=strip_style
                    on:touchstart=on_touch_start
                    on:touchend=on_touch_end
                >
                    {move || {
                        state
                            .viewer_entry
                            .get()
                            .map(|entry| view! { <EntryCards entry=entry layout=layout /> })
                    }}
                </div>
            </div>

            <div class="mt-4 flex items-center justify-between gap-4 min-[901px]:hidden">
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Icon
                    attr:aria-label="Previous card"
                    attr:disabled=move || state.card_nav.get().is_first()
                    on:click=move |_| state.previous_card()
                >
                    <ChevronLeft />
                </Button>

                <div class="flex items-center gap-2">
                    <span class="sr-only" aria-live="polite">
                        {move || {
                            let nav = state.card_nav.get();
                            format!("Card {} of {}", nav.index() + 1, nav.markers().len())
                        }}
                    </span>
                    {move || {
                        state
                            .card_nav
                            .get()
                            .markers()
                            .into_iter()
                            .map(|active| {
                                view! {
                                    <span
                                        class="size-2 rounded-full bg-muted-foreground/30 transition-colors data-[active=true]:bg-primary"
                                        data-active=active.to_string()
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Icon
                    attr:aria-label="Next card"
                    attr:disabled=move || state.card_nav.get().is_last()
                    on:click=move |_| state.next_card()
                >
                    <ChevronRight />
                </Button>
            </div>
        </Modal>
    }
}

#[component]
fn EntryCards(entry: Entry, layout: CardLayout) -> impl IntoView {
    let day_label = entry.day_label();
    let pages = description_pages(&entry, layout);
    let page_count = pages.len();
    let verse_label = day_label.clone();

    view! {
        <CardSlide>
            <DayBadge label=verse_label />
            <h2 class="text-2xl font-semibold leading-snug" dir="rtl" lang="ar">{entry.title_native.clone()}</h2>
            <h3 class="text-base text-muted-foreground">{entry.title_translated.clone()}</h3>
            <p class="text-xl leading-loose" dir="rtl" lang="ar">{entry.verse_native.clone()}</p>
            <p class="text-sm italic leading-relaxed">{entry.verse_with_reference()}</p>
        </CardSlide>

        {pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let heading = if page_count > 1 {
                    format!("The Miracle ({}/{})", i + 1, page_count)
                } else {
                    "The Miracle".to_string()
                };
                let label = day_label.clone();
                view! {
                    <CardSlide>
                        <DayBadge label=label />
                        <h3 class="text-base font-semibold">{heading}</h3>
                        <p class="whitespace-pre-line text-sm leading-relaxed">{text}</p>
                    </CardSlide>
                }
            })
            .collect_view()}
    }
}

#[component]
fn DayBadge(label: String) -> impl IntoView {
    view! {
        <span class="w-fit rounded-full bg-secondary px-2.5 py-0.5 text-xs font-medium text-secondary-foreground">
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_pages_match_card_count() {
        let entry = Entry {
            id: 1,
            description: "Bees build hexagonal cells. Only females do the work.".to_string(),
            ..Default::default()
        };
        for layout in [CardLayout::Single, CardLayout::Split] {
            // One verse card plus the description pages.
            assert_eq!(description_pages(&entry, layout).len() + 1, layout.card_count());
        }
    }

    #[test]
    fn test_single_layout_keeps_description_whole() {
        let entry = Entry {
            description: "One. Two. Three.".to_string(),
            ..Default::default()
        };
        assert_eq!(
            description_pages(&entry, CardLayout::Single),
            vec!["One. Two. Three.".to_string()]
        );
    }
}
