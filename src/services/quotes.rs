//! Stay quote service
//!
//! Storefront-facing read path: fetch the room snapshot, run the resolver,
//! shape the result for display. Every surface that shows a price goes
//! through here; nothing recomputes pricing on its own.

use crate::{
    api::rooms::QuoteResponse,
    error::AppResult,
    pricing::{self, StayRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct QuotesService {
    repository: Repository,
}

impl QuotesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Quote a stay for a room against the server-held calendar
    pub async fn quote_stay(&self, room_id: i32, request: StayRequest) -> AppResult<QuoteResponse> {
        let room = self.repository.rooms.get_by_id(room_id).await?;
        let quote = pricing::resolve_stay(&request, &room.calendar());
        Ok(QuoteResponse::build(&room, &request, quote))
    }
}
