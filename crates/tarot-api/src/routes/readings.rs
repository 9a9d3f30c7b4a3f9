use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use serde::Deserialize;
use tarot_core::{
    Reading, SeedSource, TarotError, celtic_cross, random_drop, single, three_card,
    validate_count,
};

use crate::error::ApiResult;
use crate::models::ReadingResponse;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// `?seed=` for the seeded spreads.
#[derive(Debug, Default, Deserialize)]
pub struct SeedQuery {
    /// Personal seed text.
    pub seed: Option<String>,
}

impl SeedQuery {
    fn source(&self) -> SeedSource {
        SeedSource::from_text(self.seed.as_deref())
    }
}

/// `?count=` for the random drop.
#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    /// Number of cards, 1 through 78. Defaults to 1.
    pub count: Option<i64>,
}

fn respond(reading: Reading) -> Json<ReadingResponse> {
    tracing::debug!(
        spread = reading.spread.wire_name(),
        cards = ?reading.names(),
        seeded = reading.seed.is_some(),
        "drew reading"
    );
    Json(ReadingResponse::from(reading))
}

// ---------------------------------------------------------------------------
// GET /api/v1/readings/...
// ---------------------------------------------------------------------------

/// One card for daily guidance.
pub async fn single_card(Query(query): Query<SeedQuery>) -> ApiResult<Json<ReadingResponse>> {
    Ok(respond(single(&query.source())?))
}

/// Past, Present, Future.
pub async fn three(Query(query): Query<SeedQuery>) -> ApiResult<Json<ReadingResponse>> {
    Ok(respond(three_card(&query.source())?))
}

/// The ten-card Celtic Cross.
pub async fn celtic(Query(query): Query<SeedQuery>) -> ApiResult<Json<ReadingResponse>> {
    Ok(respond(celtic_cross(&query.source())?))
}

/// `count` time-seeded cards. A non-numeric count is a bad request too.
pub async fn random(
    query: Result<Query<CountQuery>, QueryRejection>,
) -> ApiResult<Json<ReadingResponse>> {
    let Query(query) = query.map_err(|rejection| {
        TarotError::InvalidArgument(format!("invalid query: {}", rejection.body_text()))
    })?;
    let count = validate_count(query.count.unwrap_or(1))?;
    Ok(respond(random_drop(count)?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    fn seeded(seed: &str) -> Query<SeedQuery> {
        Query(SeedQuery {
            seed: Some(seed.to_string()),
        })
    }

    fn count(n: i64) -> Result<Query<CountQuery>, QueryRejection> {
        Ok(Query(CountQuery { count: Some(n) }))
    }

    #[tokio::test]
    async fn single_echoes_seed_without_summary() {
        let Json(body) = single_card(seeded("INFP")).await.unwrap();
        assert_eq!(body.spread_type, "single_card");
        assert_eq!(body.cards.len(), 1);
        assert_eq!(body.cards[0].position, None);
        assert_eq!(body.seed.as_deref(), Some("INFP"));
        assert_eq!(body.summary, None);
    }

    #[tokio::test]
    async fn blank_seed_is_not_echoed() {
        let Json(body) = single_card(seeded("   ")).await.unwrap();
        assert_eq!(body.seed, None);
    }

    #[tokio::test]
    async fn three_card_positions() {
        let Json(body) = three(Query(SeedQuery::default())).await.unwrap();
        assert_eq!(body.spread_type, "three_card");
        let positions: Vec<_> = body.cards.iter().map(|c| c.position).collect();
        assert_eq!(positions, [Some("Past"), Some("Present"), Some("Future")]);
        assert!(body.summary.is_some());
    }

    #[tokio::test]
    async fn celtic_cross_has_ten_labeled_cards() {
        let Json(body) = celtic(seeded("career")).await.unwrap();
        assert_eq!(body.spread_type, "celtic_cross");
        assert_eq!(body.cards.len(), 10);
        assert_eq!(body.cards[0].position, Some("Present Situation"));
        assert_eq!(body.cards[9].position, Some("Final Outcome"));
    }

    #[tokio::test]
    async fn random_defaults_to_one_card() {
        let Json(body) = random(Ok(Query(CountQuery::default()))).await.unwrap();
        assert_eq!(body.spread_type, "random_drop");
        assert_eq!(body.cards.len(), 1);
        assert_eq!(body.seed, None);
        assert_eq!(
            body.summary.as_deref(),
            Some("Random draw of 1 card using time-based randomness.")
        );
    }

    #[tokio::test]
    async fn random_full_deck_is_distinct() {
        let Json(body) = random(count(78)).await.unwrap();
        let mut names: Vec<_> = body.cards.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 78);
    }

    #[tokio::test]
    async fn random_out_of_range_is_bad_request() {
        for n in [0, -1, 79] {
            let err = random(count(n)).await.unwrap_err();
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
