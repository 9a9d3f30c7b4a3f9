use axum::Json;
use axum::extract::Path;
use tarot_core::{Card, DeckInfo, TarotError, cards_by_suit_name, major_arcana, minor_arcana, search};

use crate::error::ApiResult;
use crate::models::{CardDetail, DeckInfoResponse};

fn details(cards: impl IntoIterator<Item = &'static Card>) -> Json<Vec<CardDetail>> {
    Json(cards.into_iter().map(CardDetail::from).collect())
}

/// Deck statistics.
pub async fn deck_info() -> Json<DeckInfoResponse> {
    Json(DeckInfo::current().into())
}

/// The 22 Major Arcana.
pub async fn major() -> Json<Vec<CardDetail>> {
    details(major_arcana())
}

/// The 56 Minor Arcana.
pub async fn minor() -> Json<Vec<CardDetail>> {
    details(minor_arcana())
}

/// The 14 cards of one suit.
pub async fn suit(Path(name): Path<String>) -> ApiResult<Json<Vec<CardDetail>>> {
    Ok(details(cards_by_suit_name(&name)?))
}

/// Every card matching a name, number, or alias.
pub async fn find(Path(query): Path<String>) -> ApiResult<Json<Vec<CardDetail>>> {
    let results = search(&query);
    if results.is_empty() {
        return Err(TarotError::no_card_matching(&query).into());
    }
    Ok(details(results))
}
