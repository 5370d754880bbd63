use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, DialogBody, DialogDescription, DialogFooter,
    DialogHeader, DialogTitle, Input, Label, Modal, Textarea,
};
use crate::models::EntryDraft;
use crate::state::AppContext;
use crate::storage::{StoreError, StoreErrorKind};
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

#[derive(Clone, Copy)]
struct DraftFields {
    title_native: RwSignal<String>,
    title_translated: RwSignal<String>,
    verse_native: RwSignal<String>,
    verse_translated: RwSignal<String>,
    reference: RwSignal<String>,
    description: RwSignal<String>,
}

impl DraftFields {
    fn new() -> Self {
        Self {
            title_native: RwSignal::new(String::new()),
            title_translated: RwSignal::new(String::new()),
            verse_native: RwSignal::new(String::new()),
            verse_translated: RwSignal::new(String::new()),
            reference: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> EntryDraft {
        EntryDraft {
            title_native: self.title_native.get_untracked(),
            title_translated: self.title_translated.get_untracked(),
            verse_native: self.verse_native.get_untracked(),
            verse_translated: self.verse_translated.get_untracked(),
            reference: self.reference.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    fn clear(&self) {
        for field in [
            self.title_native,
            self.title_translated,
            self.verse_native,
            self.verse_translated,
            self.reference,
            self.description,
        ] {
            field.set(String::new());
        }
    }
}

/// Message for a write that failed after the entry was already added in memory.
fn unsaved_message(e: &StoreError) -> String {
    match e.kind {
        StoreErrorKind::Unavailable => {
            "Added for this session, but this browser is not keeping saved data.".to_string()
        }
        _ => format!("Added for this session, but saving failed: {e}"),
    }
}

/// Modal form that appends a user entry to the calendar.
#[component]
pub fn EntryEditor() -> impl IntoView {
    let state = expect_context::<AppContext>().0;
    let fields = DraftFields::new();
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    // Set while the last submitted entry is in memory but not in storage.
    let unsaved = RwSignal::new(false);

    let close = move || {
        error.set(None);
        unsaved.set(false);
        state.close_editor();
    };

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && state.editor_open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || key_handle.remove());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match state.submit_entry(fields.snapshot()) {
            Ok(entry) => {
                log!("added user entry {}", entry.id);
                fields.clear();
                close();
            }
            Err(e) => {
                // The entry is already on the grid; a second Save with the
                // same fields would add it twice.
                fields.clear();
                unsaved.set(true);
                error.set(Some(unsaved_message(&e)));
            }
        }
    };

    let on_retry = move |_| match state.persist_user_entries() {
        Ok(()) => {
            log!("saved user entries after retry");
            close();
        }
        Err(e) => error.set(Some(unsaved_message(&e))),
    };

    let open = Signal::derive(move || state.editor_open.get());

    view! {
        <Modal
            open=open
            on_close=Callback::new(move |_| close())
            class="sm:max-w-lg"
            data_name_prefix="Editor"
        >
            <DialogBody>
                <DialogHeader>
                    <DialogTitle>"Add a miracle"</DialogTitle>
                    <DialogDescription>
                        "It takes the first empty door on the calendar."
                    </DialogDescription>
                </DialogHeader>

                <Show when=move || state.is_calendar_full() fallback=|| ().into_view()>
                    <Alert>
                        <AlertDescription class="text-xs text-muted-foreground">
                            "All 30 doors are taken. New entries are still saved but won't appear on the calendar."
                        </AlertDescription>
                    </Alert>
                </Show>

                <form class="flex flex-col gap-3" on:submit=on_submit>
                    <div class="flex flex-col gap-1.5" dir="rtl">
                        <Label html_for="title-native" class="text-xs">"العنوان"</Label>
                        <Input id="title-native" bind_value=fields.title_native required=true class="h-8 text-sm" />
                    </div>

                    <div class="flex flex-col gap-1.5">
                        <Label html_for="title-translated" class="text-xs">"Title"</Label>
                        <Input id="title-translated" bind_value=fields.title_translated required=true class="h-8 text-sm" />
                    </div>

                    <div class="flex flex-col gap-1.5" dir="rtl">
                        <Label html_for="verse-native" class="text-xs">"الآية"</Label>
                        <Textarea id="verse-native" bind_value=fields.verse_native required=true rows=2 />
                    </div>

                    <div class="flex flex-col gap-1.5">
                        <Label html_for="verse-translated" class="text-xs">"Verse"</Label>
                        <Textarea id="verse-translated" bind_value=fields.verse_translated required=true rows=2 />
                    </div>

                    <div class="flex flex-col gap-1.5">
                        <Label html_for="reference" class="text-xs">"Reference"</Label>
                        <Input
                            id="reference"
                            placeholder="An-Nahl 16:68"
                            bind_value=fields.reference
                            required=true
                            class="h-8 text-sm"
                        />
                    </div>

                    <div class="flex flex-col gap-1.5">
                        <Label html_for="description" class="text-xs">"Description"</Label>
                        <Textarea id="description" bind_value=fields.description required=true rows=5 />
                    </div>

                    <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                        {move || {
                            error.get().map(|e| {
                                view! {
                                    <Alert class="border-destructive/30">
                                        <AlertDescription class="text-destructive text-xs">
                                            {e}
                                        </AlertDescription>
                                        <Show when=move || unsaved.get() fallback=|| ().into_view()>
                                            <button
                                                type="button"
                                                class="mt-2 h-7 rounded-md border px-2 text-xs hover:bg-accent"
                                                on:click=on_retry
                                            >
                                                "Try saving again"
                                            </button>
                                        </Show>
                                    </Alert>
                                }
                            })
                        }}
                    </Show>

                    <DialogFooter>
                        <button
                            type="button"
                            class="h-8 rounded-md border px-3 text-sm hover:bg-accent"
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                        <Button size=ButtonSize::Sm>"Save"</Button>
                    </DialogFooter>
                </form>
            </DialogBody>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_failure_reports_entry_kept_for_session() {
        for kind in [
            StoreErrorKind::Unavailable,
            StoreErrorKind::Serialize,
            StoreErrorKind::Write,
        ] {
            let e = StoreError {
                kind,
                message: "QuotaExceededError".to_string(),
            };
            assert!(unsaved_message(&e).starts_with("Added for this session"));
        }
    }

    #[test]
    fn test_write_failure_carries_detail() {
        let e = StoreError {
            kind: StoreErrorKind::Write,
            message: "quota exceeded".to_string(),
        };
        assert!(unsaved_message(&e).ends_with("quota exceeded"));
    }
}
