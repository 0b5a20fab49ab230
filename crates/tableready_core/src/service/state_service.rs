//! State document use-case service.
//!
//! # Responsibility
//! - Hold the current in-memory document and expose read/commit access.
//! - Provide the append operations frontends use to create records.
//!
//! # Invariants
//! - Every mutation is persisted through the store before the call returns;
//!   "read, mutate, commit" is atomic by convention, not by locking.
//! - Append operations never remove or reorder existing records.
//! - Back-references on a missing campaign are skipped silently; dangling
//!   IDs are a normal state.

use crate::model::ids::RecordId;
use crate::model::records::{AppState, CardType, Creature, Item, PrintQueueEntry, Session};
use crate::store::state_store::{StateStore, StoreResult};

/// Use-case service owning the current state document.
///
/// Frontends obtain the document via [`current`](Self::current), build new
/// records with the model factories, and hand mutations back through
/// [`commit`](Self::commit) or one of the append operations.
pub struct StateService<S: StateStore> {
    store: S,
    state: AppState,
}

impl<S: StateStore> StateService<S> {
    /// Opens the service, seeding the default document on first run.
    pub fn open(store: S) -> StoreResult<Self> {
        let state = store.initialize_if_missing()?;
        Ok(Self { store, state })
    }

    /// Read-only access to the current document.
    pub fn current(&self) -> &AppState {
        &self.state
    }

    /// Replaces the current document and persists it.
    pub fn commit(&mut self, next: AppState) -> StoreResult<()> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }

    /// Appends a session, back-references it on its campaign when that
    /// campaign exists, enqueues a session-notes page, and persists.
    pub fn add_session(&mut self, session: Session) -> StoreResult<RecordId> {
        let id = session.id.clone();
        if let Some(campaign) = self.state.campaign_by_id_mut(&session.campaign_id) {
            campaign.sessions.push(id.clone());
        }
        self.state.sessions.push(session);
        self.enqueue_card(CardType::SessionNotes, id.clone());
        self.store.save(&self.state)?;
        Ok(id)
    }

    /// Appends a creature, back-references it on the active campaign,
    /// enqueues a creature card, and persists.
    pub fn add_creature(&mut self, creature: Creature) -> StoreResult<RecordId> {
        let id = creature.id.clone();
        let active = self.state.active_campaign_id.clone();
        if let Some(campaign) = self.state.campaign_by_id_mut(&active) {
            campaign.creatures.push(id.clone());
        }
        self.state.creatures.push(creature);
        self.enqueue_card(CardType::CreatureCard, id.clone());
        self.store.save(&self.state)?;
        Ok(id)
    }

    /// Appends an item, back-references it on the active campaign, enqueues
    /// an item card, and persists.
    pub fn add_item(&mut self, item: Item) -> StoreResult<RecordId> {
        let id = item.id.clone();
        let active = self.state.active_campaign_id.clone();
        if let Some(campaign) = self.state.campaign_by_id_mut(&active) {
            campaign.items.push(id.clone());
        }
        self.state.items.push(item);
        self.enqueue_card(CardType::ItemCard, id.clone());
        self.store.save(&self.state)?;
        Ok(id)
    }

    /// Flips the cut-lines display setting and persists. Returns the new
    /// value.
    pub fn toggle_cut_lines(&mut self) -> StoreResult<bool> {
        self.state.settings.show_cut_lines = !self.state.settings.show_cut_lines;
        self.store.save(&self.state)?;
        Ok(self.state.settings.show_cut_lines)
    }

    /// Points the document at another campaign. The ID is not checked for
    /// existence.
    pub fn set_active_campaign(&mut self, id: impl Into<RecordId>) -> StoreResult<()> {
        self.state.active_campaign_id = id.into();
        self.store.save(&self.state)
    }

    fn enqueue_card(&mut self, kind: CardType, ref_id: RecordId) {
        self.state.print_queue.push(PrintQueueEntry {
            kind,
            ref_id,
            ..PrintQueueEntry::new()
        });
    }
}
