//! List controller - core orchestration
//!
//! Owns the local user collection and the view state of the list screen,
//! and reconciles the collection after each mutation instead of refetching.

use crate::{
    events::RowEvent,
    filter::{filter_users, SearchQuery},
    sort::{SortDirection, SortState},
    view::{DisplayState, ViewMode},
};
use roster_core::{Result, RosterError, User, UserBackend, UserField, UserFields, UserId};
use tracing::{debug, info, warn};

/// State of the user list screen
///
/// Operations are `async` and take `&mut self`; each awaits at most one
/// backend round trip. The local collection is the only copy of server
/// state: it is replaced by a full load and reconciled locally after
/// create, edit, and delete.
pub struct ListController<B> {
    backend: B,

    /// Collection in load order plus local reconciliations
    users: Vec<User>,

    view: ViewMode,

    sort: SortState,

    loading: bool,

    /// Message of the last failed operation
    error: Option<String>,

    /// Detail record shown by the info panel
    info: Option<User>,

    /// Initial load already ran
    activated: bool,
}

impl<B: UserBackend> ListController<B> {
    /// Create a controller with an empty collection
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            users: Vec::new(),
            view: ViewMode::Idle,
            sort: SortState::new(),
            loading: false,
            error: None,
            info: None,
            activated: false,
        }
    }

    // ===== Accessors =====

    /// Backend the controller talks to
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Local collection in its stored order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Collection in display order
    pub fn visible_users(&self) -> Vec<&User> {
        self.sort.apply(&self.users)
    }

    /// Look up a record in the local collection
    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn view(&self) -> &ViewMode {
        &self.view
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record loaded for the info panel
    pub fn info(&self) -> Option<&User> {
        self.info.as_ref()
    }

    /// Which indicator (or the table) to show
    pub fn display_state(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if self.error.is_some() {
            DisplayState::Error
        } else if self.users.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Table
        }
    }

    /// Values to pre-fill the open form with
    ///
    /// Empty for the create form, the targeted record's fields for the edit
    /// form, `None` when no form is open.
    pub fn form_defaults(&self) -> Option<UserFields> {
        match &self.view {
            ViewMode::Creating => Some(UserFields::new()),
            ViewMode::Editing(id) => self.find(id).map(User::to_fields),
            _ => None,
        }
    }

    // ===== Loading =====

    /// Initial load; only the first completed call fetches
    ///
    /// A load that is dropped before it finishes does not count, so the
    /// next call fetches again.
    pub async fn activate(&mut self) -> Result<()> {
        if self.activated {
            debug!("List already activated, skipping initial load");
            return Ok(());
        }

        let result = self.refresh().await;
        self.activated = true;
        result
    }

    /// Replace the collection with a fresh full list
    pub async fn refresh(&mut self) -> Result<()> {
        self.begin_load();
        let result = {
            let _loading = LoadingGuard::hold(&mut self.loading);
            self.backend.list_users().await
        };
        self.finish_load(result)
    }

    /// Enter the loading state ahead of a list fetch run by the caller
    ///
    /// Pair with [`finish_load`](Self::finish_load). Lets a renderer show
    /// [`DisplayState::Loading`] while the fetch is in flight.
    pub fn begin_load(&mut self) {
        self.error = None;
        self.loading = true;
    }

    /// Apply the outcome of a list fetch started with `begin_load`
    pub fn finish_load(&mut self, result: Result<Vec<User>>) -> Result<()> {
        match result {
            Ok(users) => {
                self.loading = false;
                info!(count = users.len(), "Loaded users");
                self.users = users;
                Ok(())
            }
            Err(e) => Err(self.record_failure(e)),
        }
    }

    /// Refresh, then keep only records matching the search input
    ///
    /// `search` and `criteria` are trimmed; when either is empty the full
    /// refreshed list stays. An unknown criteria fails before any request.
    pub async fn search(&mut self, search: &str, criteria: &str) -> Result<()> {
        let query = SearchQuery::parse(search, criteria)?;

        self.refresh().await?;

        if let Some(query) = query {
            self.users = filter_users(&self.users, &query);
            debug!(
                field = %query.field,
                matches = self.users.len(),
                "Applied search filter"
            );
        }

        Ok(())
    }

    // ===== Sorting =====

    /// Sort by `field`, flipping that field's previous direction
    pub fn toggle_sort(&mut self, field: UserField) -> SortDirection {
        let direction = self.sort.toggle(field);
        debug!(field = %field, direction = %direction, "Sort toggled");
        direction
    }

    // ===== View transitions =====

    /// Dispatch a row button click
    pub async fn handle_row_event(&mut self, event: RowEvent) -> Result<()> {
        match event {
            RowEvent::Info(id) => self.open_info(id).await,
            RowEvent::Edit(id) => self.open_edit(id),
            RowEvent::Delete(id) => self.open_delete(id),
        }
    }

    /// Open the create form
    pub fn open_create(&mut self) {
        self.set_view(ViewMode::Creating);
    }

    /// Open the edit form for a record in the collection
    pub fn open_edit(&mut self, id: UserId) -> Result<()> {
        self.require_local(&id)?;
        self.set_view(ViewMode::Editing(id));
        Ok(())
    }

    /// Open the delete confirmation for a record in the collection
    pub fn open_delete(&mut self, id: UserId) -> Result<()> {
        self.require_local(&id)?;
        self.set_view(ViewMode::ConfirmingDelete(id));
        Ok(())
    }

    /// Open the info panel and fetch the record's current server copy
    pub async fn open_info(&mut self, id: UserId) -> Result<()> {
        self.set_view(ViewMode::ViewingInfo(id.clone()));
        self.info = None;
        self.error = None;

        match self.backend.get_user(&id).await {
            Ok(Some(user)) => {
                self.info = Some(user);
                Ok(())
            }
            Ok(None) => Err(self.record_failure(RosterError::UserNotFound(id))),
            Err(e) => Err(self.record_failure(e)),
        }
    }

    /// Close whatever overlay is open
    pub fn close(&mut self) {
        self.set_view(ViewMode::Idle);
    }

    // ===== Mutations =====

    /// Submit the create form
    ///
    /// The stored record is appended to the end of the collection as
    /// returned, without re-sorting or refetching.
    pub async fn submit_create(&mut self, fields: &UserFields) -> Result<User> {
        if self.view != ViewMode::Creating {
            return Err(self.wrong_view("submit create form"));
        }
        self.error = None;

        match self.backend.create_user(fields).await {
            Ok(user) => {
                if self.find(&user.id).is_some() {
                    warn!(user_id = %user.id, "Backend returned an id already in the list");
                }
                info!(user_id = %user.id, "User created");
                self.users.push(user.clone());
                self.set_view(ViewMode::Idle);
                Ok(user)
            }
            Err(e) => Err(self.record_failure(e)),
        }
    }

    /// Submit the edit form
    ///
    /// The local record is replaced by the submitted fields plus its id.
    /// Address and timestamps are not part of that and stay missing locally
    /// until the next full load.
    pub async fn submit_edit(&mut self, fields: &UserFields) -> Result<()> {
        let ViewMode::Editing(id) = &self.view else {
            return Err(self.wrong_view("submit edit form"));
        };
        let id = id.clone();
        self.error = None;

        match self.backend.update_user(&id, fields).await {
            Ok(_ack) => {
                let replacement = User::from_fields(id.clone(), &fields.trimmed());
                if let Some(slot) = self.users.iter_mut().find(|user| user.id == id) {
                    *slot = replacement;
                }
                info!(user_id = %id, "User updated");
                self.set_view(ViewMode::Idle);
                Ok(())
            }
            Err(e) => Err(self.record_failure(e)),
        }
    }

    /// Confirm the pending delete
    ///
    /// Removes the first record with the confirmed id once the backend
    /// acknowledges.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let ViewMode::ConfirmingDelete(id) = &self.view else {
            return Err(self.wrong_view("confirm delete"));
        };
        let id = id.clone();
        self.error = None;

        match self.backend.delete_user(&id).await {
            Ok(_ack) => {
                if let Some(index) = self.users.iter().position(|user| user.id == id) {
                    self.users.remove(index);
                }
                info!(user_id = %id, "User deleted");
                self.set_view(ViewMode::Idle);
                Ok(())
            }
            Err(e) => Err(self.record_failure(e)),
        }
    }

    // ===== Internal =====

    fn set_view(&mut self, view: ViewMode) {
        debug!(from = self.view.name(), to = view.name(), "View changed");
        if !matches!(view, ViewMode::ViewingInfo(_)) {
            self.info = None;
        }
        self.view = view;
    }

    fn require_local(&self, id: &UserId) -> Result<()> {
        match self.find(id) {
            Some(_) => Ok(()),
            None => Err(RosterError::UserNotFound(id.clone())),
        }
    }

    fn wrong_view(&self, action: &str) -> RosterError {
        RosterError::invalid_state(format!("cannot {} while {}", action, self.view.name()))
    }

    fn record_failure(&mut self, err: RosterError) -> RosterError {
        warn!(error = %err, "Operation failed");
        self.loading = false;
        self.error = Some(err.to_string());
        err
    }
}

/// Keeps the loading flag set while a fetch is pending; clears it on drop,
/// including when the fetch future is cancelled.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn hold(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
