//! The generic entity list controller.
//!
//! One instance drives one screen: it owns the paging state, fetches pages
//! through an [`EntityGateway`], maps raw records into view rows, applies
//! the committed in-memory filter, and dispatches CRUD mutations. Every
//! failure is converted into a [`Notice`] at this boundary; nothing panics
//! and nothing is retried.
//!
//! Write policy: create and update re-fetch the current page after the
//! mutation succeeds; a confirmed delete splices the row out locally and
//! does not re-fetch.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::{EntityGateway, ExportBlob, ImportOutcome};
use crate::domain::types::EntityId;
use crate::dto::EntityScreen;
use crate::forms::import::precheck_csv;
use crate::forms::validation_messages;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PAGE_SIZE_OPTIONS, PageRequest, PagerStrip};
use crate::prefs::PreferenceStore;
use crate::services::drawer::DrawerState;
use crate::services::filter::{FilterPanel, FilterState};
use crate::services::{Notice, ServiceError, ServiceResult};

/// Notice shown when any call comes back with HTTP 401.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please sign in again";

/// Lifecycle of the grid data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Pagination metadata of the currently loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub per_page: usize,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            total_items: 0,
            total_pages: 0,
            current_page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageInfo {
    pub fn pager(&self) -> PagerStrip {
        PagerStrip::new(self.current_page, self.total_pages)
    }
}

/// What happened to a drawer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Persisted; the drawer was closed and the page re-fetched.
    Saved,
    /// Blocked before any network call; field messages for inline display.
    Invalid(BTreeMap<String, String>),
    /// The backend rejected it; a notice was queued, the drawer stays open.
    Failed,
}

/// Generic list controller, instantiated per entity via an [`EntityScreen`].
pub struct ListController<E: EntityScreen, G: EntityGateway, P: PreferenceStore> {
    gateway: G,
    prefs: P,
    rows: Vec<E::Row>,
    filtered: Vec<E::Row>,
    load_state: LoadState,
    page_info: PageInfo,
    filter: FilterPanel,
    drawer: DrawerState,
    detail: Option<E::Row>,
    pending_delete: Option<String>,
    notices: Vec<Notice>,
    _screen: PhantomData<E>,
}

impl<E, G, P> ListController<E, G, P>
where
    E: EntityScreen,
    G: EntityGateway,
    P: PreferenceStore,
{
    pub fn new(gateway: G, prefs: P) -> Self {
        let per_page = prefs
            .page_size(E::endpoint())
            .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE);

        Self {
            gateway,
            prefs,
            rows: Vec::new(),
            filtered: Vec::new(),
            load_state: LoadState::Idle,
            page_info: PageInfo {
                per_page,
                ..PageInfo::default()
            },
            filter: FilterPanel::default(),
            drawer: DrawerState::default(),
            detail: None,
            pending_delete: None,
            notices: Vec::new(),
            _screen: PhantomData,
        }
    }

    // --- accessors ---------------------------------------------------------

    /// Every row of the currently loaded page.
    pub fn rows(&self) -> &[E::Row] {
        &self.rows
    }

    /// Rows passing the committed filter; always a subset of [`Self::rows`].
    pub fn filtered_rows(&self) -> &[E::Row] {
        &self.filtered
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn page_info(&self) -> PageInfo {
        self.page_info
    }

    pub fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    /// The record backing an open edit/view drawer.
    pub fn detail(&self) -> Option<&E::Row> {
        self.detail.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn filter_panel(&mut self) -> &mut FilterPanel {
        &mut self.filter
    }

    /// Drains the queued notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // --- loading -----------------------------------------------------------

    /// Fetches one page and replaces the grid contents.
    ///
    /// On 401 the prior rows are left untouched. On any other failure the
    /// rows are cleared so the grid never mixes stale data with an error.
    pub fn load_page(&mut self, page: usize) {
        let previous_state = self.load_state;
        self.load_state = LoadState::Loading;

        let request = PageRequest::new(page, self.page_info.per_page);
        match self.gateway.fetch_page(E::endpoint(), request) {
            Ok(page_result) => {
                let mut rows = Vec::with_capacity(page_result.items.len());
                for item in page_result.items {
                    match serde_json::from_value::<E::Raw>(item) {
                        Ok(raw) => rows.push(E::to_row(raw)),
                        Err(err) => {
                            log::error!("Failed to decode a {} record: {err}", E::label());
                            self.fail_load(&format!("Could not read {} data", E::label()));
                            return;
                        }
                    }
                }

                self.rows = rows;
                self.page_info = PageInfo {
                    total_items: page_result.total_items,
                    total_pages: page_result.total_pages,
                    current_page: page_result.current_page,
                    per_page: page_result.per_page,
                };
                self.reapply_filter();
                self.load_state = LoadState::Loaded;
            }
            Err(ApiError::AuthExpired) => {
                log::warn!("Session expired while loading {}", E::endpoint());
                self.notices.push(Notice::error(SESSION_EXPIRED_MESSAGE));
                self.load_state = previous_state;
            }
            Err(err) => {
                log::error!("Failed to load {}: {err}", E::endpoint());
                self.fail_load(&err.to_string());
            }
        }
    }

    /// Loads a page at an explicit size, for embedders that restore view
    /// state themselves. Does not touch the stored preference; sizes outside
    /// the offered options fall back to the current one.
    pub fn load_page_sized(&mut self, page: usize, size: usize) {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            self.page_info.per_page = size;
        }
        self.load_page(page);
    }

    fn fail_load(&mut self, message: &str) {
        self.rows.clear();
        self.filtered.clear();
        self.page_info.total_items = 0;
        self.page_info.total_pages = 0;
        self.load_state = LoadState::Failed;
        self.notices.push(Notice::error(message));
    }

    fn reload_current(&mut self) {
        self.load_page(self.page_info.current_page);
    }

    /// Switches the page size: resets to page 1, persists the preference,
    /// and reloads. Sizes outside the offered options are ignored.
    pub fn change_page_size(&mut self, size: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            log::warn!("Ignoring unsupported page size {size}");
            return;
        }
        self.prefs.set_page_size(E::endpoint(), size);
        self.page_info.per_page = size;
        self.load_page(1);
    }

    // --- filtering ---------------------------------------------------------

    /// Commits a free-text query (the debounced search box path) and
    /// recomputes the filtered rows. Operates only on the loaded page.
    pub fn apply_text_filter(&mut self, query: &str) {
        self.filter.commit_query(query);
        self.reapply_filter();
    }

    /// Commits the filter panel's draft ("Apply").
    pub fn apply_panel_filters(&mut self) {
        self.filter.apply();
        self.reapply_filter();
    }

    /// Commits the empty filter ("Reset"), restoring the full page.
    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.reapply_filter();
    }

    fn matches(filter: &FilterState, row: &E::Row) -> bool {
        let text_ok = if filter.query.trim().is_empty() {
            true
        } else {
            let needle = filter.query.trim().to_lowercase();
            E::search_haystack(row).to_lowercase().contains(&needle)
        };
        text_ok && E::matches_structured(row, &filter.structured)
    }

    fn reapply_filter(&mut self) {
        let filter = self.filter.committed().clone();
        if filter.is_empty() {
            self.filtered = self.rows.clone();
        } else {
            self.filtered = self
                .rows
                .iter()
                .filter(|row| Self::matches(&filter, row))
                .cloned()
                .collect();
        }
    }

    // --- drawers -----------------------------------------------------------

    pub fn open_add(&mut self) {
        self.drawer = DrawerState::Add;
        self.detail = None;
    }

    /// Fetches the single-record detail and opens the edit drawer.
    pub fn open_edit(&mut self, id: &str) {
        if let Some(row) = self.fetch_detail(id) {
            self.detail = Some(row);
            self.drawer = DrawerState::Edit(id.to_string());
        }
    }

    /// Fetches the single-record detail and opens the read-only view drawer.
    pub fn open_view(&mut self, id: &str) {
        if let Some(row) = self.fetch_detail(id) {
            self.detail = Some(row);
            self.drawer = DrawerState::View(id.to_string());
        }
    }

    pub fn close_drawer(&mut self) {
        self.drawer = DrawerState::Closed;
        self.detail = None;
    }

    fn fetch_detail(&mut self, id: &str) -> Option<E::Row> {
        let id = match EntityId::new(id) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("Ignoring detail request: {err}");
                return None;
            }
        };

        match self.gateway.fetch_record(E::endpoint(), id.as_str()) {
            Ok(value) => match serde_json::from_value::<E::Raw>(value) {
                Ok(raw) => Some(E::to_row(raw)),
                Err(err) => {
                    log::error!("Failed to decode {} detail: {err}", E::label());
                    self.notices
                        .push(Notice::error(format!("Could not read {} data", E::label())));
                    None
                }
            },
            Err(err) => {
                self.push_api_error(err);
                None
            }
        }
    }

    // --- mutations ---------------------------------------------------------

    /// Validates and submits the add drawer. Validation failures block the
    /// submission before any network call is made.
    pub fn create(&mut self, form: &E::CreateForm) -> SubmitResult {
        let outcome = self.try_create(form);
        self.finish_submit(outcome, format!("{} added", E::label()))
    }

    /// Validates and submits the edit drawer for one record. Blank ids are
    /// rejected before any network call, as in [`Self::request_delete`].
    pub fn update(&mut self, id: &str, form: &E::UpdateForm) -> SubmitResult {
        let id = match EntityId::new(id) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("Ignoring update request: {err}");
                return SubmitResult::Failed;
            }
        };
        let outcome = self.try_update(id.as_str(), form);
        self.finish_submit(outcome, format!("{} updated", E::label()))
    }

    fn try_create(&self, form: &E::CreateForm) -> ServiceResult<()> {
        form.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))?;
        let payload = E::create_payload(form)?;
        self.gateway.create_record(E::endpoint(), &payload)?;
        Ok(())
    }

    fn try_update(&self, id: &str, form: &E::UpdateForm) -> ServiceResult<()> {
        form.validate()
            .map_err(|errors| ServiceError::Validation(validation_messages(&errors)))?;
        let payload = E::update_payload(form)?;
        self.gateway.update_record(E::endpoint(), id, &payload)?;
        Ok(())
    }

    fn finish_submit(&mut self, outcome: ServiceResult<()>, success: String) -> SubmitResult {
        match outcome {
            Ok(()) => {
                self.notices.push(Notice::success(success));
                self.close_drawer();
                self.reload_current();
                SubmitResult::Saved
            }
            Err(ServiceError::Validation(messages)) => SubmitResult::Invalid(messages),
            Err(ServiceError::Api(ApiError::Validation(issues))) => {
                // Backend field checks render inline, same as client-side ones.
                let messages = issues
                    .into_iter()
                    .map(|issue| (issue.path, issue.msg))
                    .collect();
                SubmitResult::Invalid(messages)
            }
            Err(ServiceError::Encode(err)) => {
                log::error!("Failed to encode {} payload: {err}", E::label());
                self.notices.push(Notice::error("Something went wrong"));
                SubmitResult::Failed
            }
            Err(ServiceError::Api(err)) => {
                self.push_api_error(err);
                SubmitResult::Failed
            }
            Err(err) => {
                self.notices.push(Notice::error(err.to_string()));
                SubmitResult::Failed
            }
        }
    }

    /// Marks a row for deletion; nothing is sent until
    /// [`Self::confirm_delete`] is called. Blank ids are ignored so a
    /// confirm can never hit the bare collection route.
    pub fn request_delete(&mut self, id: &str) {
        match EntityId::new(id) {
            Ok(id) => self.pending_delete = Some(id.into_inner()),
            Err(err) => log::warn!("Ignoring delete request: {err}"),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Issues the delete for the row confirmed by the user. On success the
    /// row is spliced out of both row sets without a re-fetch.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        match self.gateway.delete_record(E::endpoint(), &id) {
            Ok(()) => {
                self.rows.retain(|row| E::row_id(row) != id);
                self.filtered.retain(|row| E::row_id(row) != id);
                self.page_info.total_items = self.page_info.total_items.saturating_sub(1);
                self.notices
                    .push(Notice::success(format!("{} deleted", E::label())));
            }
            Err(err) => {
                log::error!("Failed to delete {} {id}: {err}", E::endpoint());
                self.push_api_error(err);
            }
        }
    }

    // --- import / export ---------------------------------------------------

    /// Pre-checks the CSV locally, ships it to the backend, and reloads the
    /// page so imported rows appear.
    pub fn import_csv(&mut self, filename: &str, bytes: &[u8]) -> Option<ImportOutcome> {
        match self.try_import(filename, bytes) {
            Ok(outcome) => {
                if let Some(message) = &outcome.success_message {
                    self.notices.push(Notice::success(message.clone()));
                }
                if let Some(message) = &outcome.error_message {
                    self.notices.push(Notice::warning(message.clone()));
                }
                self.reload_current();
                Some(outcome)
            }
            Err(ServiceError::Api(err)) => {
                log::error!("Failed to import {} CSV: {err}", E::endpoint());
                self.push_api_error(err);
                None
            }
            Err(err) => {
                self.notices.push(Notice::error(err.to_string()));
                None
            }
        }
    }

    fn try_import(&self, filename: &str, bytes: &[u8]) -> ServiceResult<ImportOutcome> {
        precheck_csv(bytes, E::csv_headers())?;
        let outcome = self
            .gateway
            .import_csv(E::endpoint(), filename, bytes.to_vec())?;
        Ok(outcome)
    }

    /// Downloads the entity report; the caller saves the blob under its
    /// suggested timestamped name.
    pub fn export_report(&mut self) -> Option<ExportBlob> {
        match self.gateway.download_report(E::endpoint()) {
            Ok(blob) => Some(blob),
            Err(err) => {
                log::error!("Failed to export {} report: {err}", E::endpoint());
                self.push_api_error(err);
                None
            }
        }
    }

    fn push_api_error(&mut self, err: ApiError) {
        let notice = match err {
            ApiError::AuthExpired => Notice::error(SESSION_EXPIRED_MESSAGE),
            ApiError::Duplicate(message) => Notice::error(message),
            other => Notice::error(other.to_string()),
        };
        self.notices.push(notice);
    }
}
