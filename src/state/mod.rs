use crate::api::{fetch_builtin_entries, EnvConfig};
use crate::catalog::{append_user_entry, Catalog, DoorSlot};
use crate::models::{Entry, EntryDraft};
use crate::storage::{load_user_entries, save_user_entries, StoreResult};
use crate::util::{lock_body_scroll, now_ms, unlock_body_scroll, viewport_width};
use crate::viewer::{CardLayout, CardNav, Swipe};
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub config: StoredValue<EnvConfig>,

    /// Loaded once from the static resource; never mutated afterwards.
    pub builtin_entries: RwSignal<Vec<Entry>>,
    /// Persisted list. Append-only, written back in full on every submit.
    pub user_entries: RwSignal<Vec<Entry>>,
    /// False until the static fetch settles (success or failure).
    pub catalog_loaded: RwSignal<bool>,

    /// Entry shown in the viewer; `None` when the viewer is closed.
    pub viewer_entry: RwSignal<Option<Entry>>,
    pub card_nav: RwSignal<CardNav>,
    pub viewport_width: RwSignal<f64>,

    pub editor_open: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(EnvConfig::from_window())
    }

    pub fn with_config(config: EnvConfig) -> Self {
        let user_entries = load_user_entries(&config.storage_key);
        let cards = config.card_layout().card_count();

        Self {
            config: StoredValue::new(config),
            builtin_entries: RwSignal::new(vec![]),
            user_entries: RwSignal::new(user_entries),
            catalog_loaded: RwSignal::new(false),
            viewer_entry: RwSignal::new(None),
            card_nav: RwSignal::new(CardNav::new(cards)),
            viewport_width: RwSignal::new(viewport_width()),
            editor_open: RwSignal::new(false),
        }
    }

    pub fn card_layout(&self) -> CardLayout {
        self.config.with_value(|c| c.card_layout())
    }

    /// Fetch the static list. Failures are logged and leave it empty.
    pub fn load_catalog(&self) {
        let state = *self;
        let url = self.config.with_value(|c| c.catalog_url.clone());

        spawn_local(async move {
            match fetch_builtin_entries(&url).await {
                Ok(entries) => {
                    let merged = state
                        .user_entries
                        .with_untracked(|u| Catalog::new(&entries, u).merged().len());
                    log!("loaded {} built-in entries ({merged} in catalog)", entries.len());
                    state.builtin_entries.set(entries);
                }
                Err(e) => {
                    error!("failed to load catalog from {url} ({:?}): {e}", e.kind);
                    state.builtin_entries.set(vec![]);
                }
            }
            state.catalog_loaded.set(true);
        });
    }

    /// Door bindings for the grid. Tracks both entry lists.
    pub fn slots(&self) -> Vec<DoorSlot> {
        self.builtin_entries.with(|b| {
            self.user_entries
                .with(|u| Catalog::new(b, u).slots())
        })
    }

    pub fn entry_for_day(&self, day: i64) -> Option<Entry> {
        self.builtin_entries.with_untracked(|b| {
            self.user_entries
                .with_untracked(|u| Catalog::new(b, u).entry_for_day(day).cloned())
        })
    }

    pub fn is_calendar_full(&self) -> bool {
        self.builtin_entries
            .with(|b| self.user_entries.with(|u| Catalog::new(b, u).is_full()))
    }

    pub fn unplaced_count(&self) -> usize {
        self.builtin_entries
            .with(|b| self.user_entries.with(|u| Catalog::new(b, u).unplaced_count()))
    }

    pub fn open_viewer(&self, entry: Entry) {
        self.card_nav.update(|n| n.reset());
        self.viewer_entry.set(Some(entry));
        self.refresh_viewport();
        lock_body_scroll();
    }

    pub fn close_viewer(&self) {
        self.viewer_entry.set(None);
        unlock_body_scroll();
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer_entry.with(|e| e.is_some())
    }

    pub fn next_card(&self) {
        self.card_nav.update(|n| n.next());
        self.refresh_viewport();
    }

    pub fn previous_card(&self) {
        self.card_nav.update(|n| n.previous());
        self.refresh_viewport();
    }

    pub fn swipe(&self, start_x: i32, end_x: i32) {
        if let Some(swipe) = Swipe::classify(start_x, end_x) {
            self.card_nav.update(|n| n.apply(swipe));
            self.refresh_viewport();
        }
    }

    /// Re-read the window width so the card offset follows the viewport.
    pub fn refresh_viewport(&self) {
        self.viewport_width.set(viewport_width());
    }

    pub fn open_editor(&self) {
        self.editor_open.set(true);
        lock_body_scroll();
    }

    pub fn close_editor(&self) {
        self.editor_open.set(false);
        unlock_body_scroll();
    }

    /// Append a submitted entry and write the full user list back.
    ///
    /// The in-memory list keeps the entry even when the write fails, so the
    /// grid shows it for the rest of the session. Any `Err` from here means
    /// the entry was added; retry with [`Self::persist_user_entries`], not by
    /// submitting the same draft again.
    pub fn submit_entry(&self, draft: EntryDraft) -> StoreResult<Entry> {
        let builtin = self.builtin_entries.get_untracked();
        let mut user = self.user_entries.get_untracked();
        let entry = append_user_entry(&builtin, &mut user, draft, now_ms());
        self.user_entries.set(user);

        self.persist_user_entries()?;
        Ok(entry)
    }

    /// Write the in-memory user list to storage as it stands.
    pub fn persist_user_entries(&self) -> StoreResult<()> {
        let key = self.config.with_value(|c| c.storage_key.clone());
        self.user_entries
            .with_untracked(|user| save_user_entries(&key, user))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
