use crate::action::{Action, ActionKind};
use crate::error::{ListError, Result};
use crate::store::{InMemoryStore, ItemStore};
use crate::view::ListView;

/// What the form currently submits as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The form creates a new item.
    Add,
    /// The form edits the selected item.
    Edit,
}

/// Wires user actions to store mutations and view refreshes.
///
/// The session owns both the store and the view, so all list state is
/// explicit and two sessions never share anything. Every handler either
/// completes its full effect (store mutation plus view refresh) or, on a
/// rejected input, changes nothing at all; the error says why.
pub struct Session<V: ListView, S: ItemStore = InMemoryStore> {
    store: S,
    view: V,
    mode: Mode,
}

impl<V: ListView> Session<V> {
    /// Creates a session over a fresh, empty in-memory list.
    pub fn new(view: V) -> Self {
        Self::with_store(InMemoryStore::new(), view)
    }
}

impl<V: ListView, S: ItemStore> Session<V, S> {
    pub fn with_store(store: S, view: V) -> Self {
        Self {
            store,
            view,
            mode: Mode::Add,
        }
    }

    /// Draws the initial screen: blank form, list (or nothing when the
    /// list is empty) and the total.
    pub fn init(&mut self) -> Result<()> {
        self.reset_edit_state();
        if self.store.items().is_empty() {
            self.view.hide_list()?;
        } else {
            self.view.render_all(self.store.items())?;
        }
        self.refresh_total()
    }

    /// Submits the form as a new item.
    pub fn submit_add(&mut self) -> Result<()> {
        let input = self.view.read_form();
        let item = self.store.add(&input.name, &input.price)?;
        self.view.render_append(&item)?;
        self.refresh_total()?;
        self.view.clear_form();
        Ok(())
    }

    /// Picks the item with the given id for editing.
    ///
    /// Populates the form from the item and switches to edit mode.
    pub fn select(&mut self, id: u32) -> Result<()> {
        let item = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| ListError::SelectionError(format!("no item with id {id}")))?;
        self.store.set_current(id);
        self.view.write_form(&item.name, &item.price.to_string());
        self.view.enter_edit_mode();
        self.mode = Mode::Edit;
        Ok(())
    }

    /// Submits the form as an update of the selected item.
    pub fn submit_update(&mut self) -> Result<()> {
        if self.mode != Mode::Edit {
            return Err(ListError::SelectionError(
                "nothing is being edited".to_string(),
            ));
        }
        let input = self.view.read_form();
        let item = self.store.update(&input.name, &input.price)?;
        self.view.render_update(&item)?;
        self.refresh_total()?;
        self.reset_edit_state();
        Ok(())
    }

    /// Deletes the selected item.
    pub fn submit_delete(&mut self) -> Result<()> {
        if self.mode != Mode::Edit {
            return Err(ListError::SelectionError(
                "nothing is being edited".to_string(),
            ));
        }
        let id = self
            .store
            .current()
            .ok_or_else(|| {
                ListError::SelectionError("selected item is no longer in the list".to_string())
            })?
            .id;
        self.store.delete(id);
        self.view.render_remove(id)?;
        self.refresh_total()?;
        self.reset_edit_state();
        Ok(())
    }

    /// Leaves edit mode without touching the list.
    pub fn cancel(&mut self) {
        self.reset_edit_state();
    }

    /// Removes every item.
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear();
        self.view.render_clear()?;
        self.refresh_total()?;
        self.reset_edit_state();
        Ok(())
    }

    /// Maps one decoded user action onto the handlers above.
    ///
    /// `add` and `update` carry the field text; applying them types that
    /// text into the form and then presses the button.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action.action {
            ActionKind::Add => {
                self.type_into_form(&action);
                self.submit_add()
            }
            ActionKind::Edit => {
                let id = action.id.ok_or_else(|| {
                    ListError::ValidationError("edit needs an item id".to_string())
                })?;
                self.select(id)
            }
            ActionKind::Update => {
                self.type_into_form(&action);
                self.submit_update()
            }
            ActionKind::Delete => self.submit_delete(),
            ActionKind::Back => {
                self.cancel();
                Ok(())
            }
            ActionKind::Clear => self.clear_all(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn type_into_form(&mut self, action: &Action) {
        self.view.write_form(
            action.name.as_deref().unwrap_or(""),
            action.price.as_deref().unwrap_or(""),
        );
    }

    fn refresh_total(&mut self) -> Result<()> {
        let total = self.store.total_price();
        self.view.show_total(total)
    }

    fn reset_edit_state(&mut self) {
        self.view.clear_form();
        self.view.exit_edit_mode();
        self.mode = Mode::Add;
    }
}
