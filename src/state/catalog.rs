//! Product-listing state shared by the catalog, search, home, and admin views.
//!
//! DESIGN
//! ======
//! Every fetch takes a ticket from [`ListingState::begin`]. Only the response
//! holding the latest ticket is applied, so a slow page request cannot
//! overwrite the result of a newer sort or search.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Page, Shoe};
use crate::state::session::SessionContext;
use crate::util::listing::ShoeQuery;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingState {
    pub page: Page<Shoe>,
    pub loading: bool,
    pub error: Option<String>,
    ticket: u64,
}

impl ListingState {
    /// Mark a request as started and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.ticket += 1;
        self.loading = true;
        self.error = None;
        self.ticket
    }

    /// Apply a response. Returns `false` (and changes nothing) for a ticket
    /// that has been superseded.
    pub fn finish(&mut self, ticket: u64, result: Result<Page<Shoe>, ApiError>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => self.page = page,
            Err(err) => {
                self.page = Page::default();
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Drop a record locally after it was deleted.
    pub fn remove(&mut self, id: u64) {
        let before = self.page.results.len();
        self.page.results.retain(|shoe| shoe.id != id);
        if self.page.results.len() < before {
            self.page.count = self.page.count.saturating_sub(1);
        }
    }
}

/// Single-record state for detail views keyed by a route id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordState {
    pub shoe: Option<Shoe>,
    pub loading: bool,
    pub error: Option<String>,
    current: Option<u64>,
}

impl RecordState {
    /// Initial state before the route id has been read.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Start loading `id`; anything shown for a previous id is cleared.
    pub fn begin(&mut self, id: u64) {
        *self = Self { loading: true, current: Some(id), ..Self::default() };
    }

    /// The route carried no usable id.
    pub fn invalid(&mut self, message: &str) {
        *self = Self { error: Some(message.to_owned()), ..Self::default() };
    }

    /// Apply the response for `id`. Returns `false` (and changes nothing)
    /// when the route has since moved to another record.
    pub fn finish(&mut self, id: u64, result: Result<Shoe, ApiError>) -> bool {
        if self.current != Some(id) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(shoe) => self.shoe = Some(shoe),
            Err(err) => {
                self.shoe = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

/// Whether a failed listing call means the backend no longer accepts the
/// token it was sent.
pub fn token_rejected(sent_token: bool, result: &Result<Page<Shoe>, ApiError>) -> bool {
    sent_token && matches!(result, Err(err) if err.is_unauthorized())
}

/// Fetch `query` into `listing` using the session's current token. A token
/// the backend rejects ends the session.
pub fn load_listing(session: SessionContext, query: ShoeQuery, listing: RwSignal<ListingState>) {
    let ticket = listing.try_update(ListingState::begin).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.token_untracked();
        let result = crate::net::api::list_shoes(token.as_deref(), &query).await;
        if let Err(err) = &result {
            log::warn!("listing page {} failed: {err}", query.page);
        }
        if token_rejected(token.is_some(), &result) {
            log::info!("stored token rejected; logging out");
            session.logout();
        }
        listing.update(|l| {
            if !l.finish(ticket, result) {
                log::debug!("discarded stale listing response {ticket}");
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, query, ticket);
}
