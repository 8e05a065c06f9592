//! Round engine integration tests.
//!
//! These tests play rounds through the public API with in-memory and
//! scripted fetchers:
//! - Reference scoring scenarios
//! - All-or-nothing behaviour on fetch failure
//! - Sequential fetch order

use starship_duel::core::{RecordId, SessionConfig, Side, SidePair};
use starship_duel::error::{FetchError, RoundError};
use starship_duel::fetch::{fetcher_fn, RecordFetcher};
use starship_duel::records::{Attribute, EntityRecord, RecordCatalog};
use starship_duel::rules::AttributeOutcome;
use starship_duel::session::{Phase, RoundEngine};

fn ship(name: &str, speed: &str, cost: &str, passengers: &str) -> EntityRecord {
    EntityRecord::new(name)
        .with_max_speed(speed)
        .with_cost(cost)
        .with_passenger_count(passengers)
}

fn pool(raw: &[u32]) -> Vec<RecordId> {
    raw.iter().copied().map(RecordId::new).collect()
}

/// Catalog that fails for one identifier and serves the rest.
struct FlakyCatalog {
    catalog: RecordCatalog,
    failing: RecordId,
    requests: Vec<RecordId>,
}

impl RecordFetcher for FlakyCatalog {
    fn fetch(&mut self, id: RecordId) -> Result<EntityRecord, FetchError> {
        self.requests.push(id);
        if id == self.failing {
            return Err(FetchError::Transport {
                id,
                message: "connection reset".into(),
            });
        }
        self.catalog.fetch(id)
    }
}

// =============================================================================
// Scoring Scenarios
// =============================================================================

/// Pool [2,3]: speed 1000 vs 800, cost n/a vs 1200, passengers 6 vs 6.
/// Seed 1 hands record 2 to the user.
#[test]
fn test_reference_round() {
    let catalog = RecordCatalog::new()
        .with_record(2, ship("A", "1000", "n/a", "6"))
        .with_record(3, ship("B", "800", "1200", "6"));
    let config = SessionConfig::default().with_pool(pool(&[2, 3])).with_seed(1);

    let mut engine = RoundEngine::new(config, catalog).unwrap();
    let mut session = engine.new_session();
    let result = engine.play_round(&mut session).unwrap();

    assert_eq!(result.ids, SidePair::new(RecordId::new(2), RecordId::new(3)));
    assert_eq!(result.score.delta, SidePair::new(1, 0));
    assert_eq!(session.scores(), SidePair::new(1, 0));
    assert_eq!(session.user_score(), 1);
    assert_eq!(session.computer_score(), 0);
    assert_eq!(
        session.used_identifiers().iter().copied().collect::<Vec<_>>(),
        pool(&[2, 3])
    );
}

/// Same scenario under another seed: whichever side holds record 2 wins.
#[test]
fn test_reference_round_either_side() {
    let catalog = RecordCatalog::new()
        .with_record(2, ship("A", "1000", "n/a", "6"))
        .with_record(3, ship("B", "800", "1200", "6"));
    let config = SessionConfig::default().with_pool(pool(&[2, 3])).with_seed(11);

    let mut engine = RoundEngine::new(config, catalog).unwrap();
    let mut session = engine.new_session();
    let result = engine.play_round(&mut session).unwrap();

    // The draw decides which side holds record 2; the faster ship always
    // takes the only point.
    let faster = if result.ids.user == RecordId::new(2) {
        Side::User
    } else {
        Side::Computer
    };

    assert_eq!(
        result.score.outcome(Attribute::MaxSpeed),
        AttributeOutcome::Won(faster)
    );
    assert_eq!(result.score.outcome(Attribute::Cost), AttributeOutcome::Skipped);
    assert_eq!(
        result.score.outcome(Attribute::PassengerCount),
        AttributeOutcome::Tie
    );
    assert_eq!(session.scores()[faster], 1);
    assert_eq!(session.scores()[faster.opponent()], 0);
    assert_eq!(
        session.used_identifiers().iter().copied().collect::<Vec<_>>(),
        pool(&[2, 3])
    );
}

/// Unknown cost against a known cost contributes nothing; speed still counts.
#[test]
fn test_unknown_cost_skipped_speed_compared() {
    let catalog = RecordCatalog::new()
        .with_record(5, ship("A", "500", "unknown", "10"))
        .with_record(9, ship("B", "700", "500", "10"));
    let config = SessionConfig::default().with_pool(pool(&[5, 9])).with_seed(3);

    let mut engine = RoundEngine::new(config, catalog).unwrap();
    let mut session = engine.new_session();
    let result = engine.play_round(&mut session).unwrap();

    assert_eq!(result.score.outcome(Attribute::Cost), AttributeOutcome::Skipped);
    assert!(matches!(
        result.score.outcome(Attribute::MaxSpeed),
        AttributeOutcome::Won(_)
    ));
    assert_eq!(result.score.delta.user + result.score.delta.computer, 1);
}

/// Identical normalized values everywhere leave scores unchanged.
#[test]
fn test_tie_round_changes_no_scores() {
    let catalog = RecordCatalog::new()
        .with_record(2, ship("A", "1000", "1500", "4"))
        .with_record(3, ship("B", "1000.0", "1500", " 4"));
    let config = SessionConfig::default().with_pool(pool(&[2, 3])).with_seed(5);

    let mut engine = RoundEngine::new(config, catalog).unwrap();
    let mut session = engine.new_session();
    let result = engine.play_round(&mut session).unwrap();

    assert_eq!(result.score.delta, SidePair::new(0, 0));
    assert_eq!(session.scores(), SidePair::new(0, 0));
    assert_eq!(session.round_count(), 1);
    assert_eq!(session.phase(), Phase::RoundComplete);
}

// =============================================================================
// Failure Handling
// =============================================================================

/// A failing fetch leaves scores, used ids and the pair untouched.
#[test]
fn test_fetch_failure_is_all_or_nothing() {
    let catalog = RecordCatalog::new()
        .with_record(2, ship("A", "1", "1", "1"))
        .with_record(3, ship("B", "2", "2", "2"));
    let fetcher = FlakyCatalog {
        catalog,
        failing: RecordId::new(3),
        requests: Vec::new(),
    };
    let config = SessionConfig::default().with_pool(pool(&[2, 3])).with_seed(8);

    let mut engine = RoundEngine::new(config, fetcher).unwrap();
    let mut session = engine.new_session();

    let err = engine.play_round(&mut session).unwrap_err();

    assert!(matches!(err, RoundError::Fetch(FetchError::Transport { .. })));
    assert_eq!(session.scores(), SidePair::new(0, 0));
    assert!(session.used_identifiers().is_empty());
    assert!(session.current_pair().both().is_none());
    assert_eq!(session.round_count(), 0);
    assert_eq!(session.phase(), Phase::Idle);
}

/// After a completed round, a failed round keeps the previous pair on the table.
#[test]
fn test_failure_after_success_keeps_previous_round() {
    let catalog = RecordCatalog::new()
        .with_record(2, ship("A", "900", "10", "1"))
        .with_record(3, ship("B", "800", "20", "2"))
        .with_record(5, ship("C", "700", "30", "3"));
    // Record 9 is in the pool but missing upstream.
    let config = SessionConfig::default()
        .with_pool(pool(&[2, 3, 5, 9]))
        .with_seed(21);

    let mut engine = RoundEngine::new(config, catalog).unwrap();
    let mut session = engine.new_session();

    // Play until a round fails or the pool runs dry.
    let mut last_ok = None;
    loop {
        let before_scores = session.scores();
        let before_used = session.used_identifiers().clone();
        let before_pair = session.current_pair().clone();

        match engine.play_round(&mut session) {
            Ok(result) => last_ok = Some(result),
            Err(RoundError::Fetch(FetchError::NotFound(id))) => {
                assert_eq!(id, RecordId::new(9));
                assert_eq!(session.scores(), before_scores);
                assert_eq!(session.used_identifiers(), &before_used);
                assert_eq!(session.current_pair(), &before_pair);
                let expected = if last_ok.is_some() {
                    Phase::RoundComplete
                } else {
                    Phase::Idle
                };
                assert_eq!(session.phase(), expected);
                break;
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }
}

/// Both records are requested in order, user first, and only once each.
#[test]
fn test_fetches_are_sequential_user_first() {
    let catalog = RecordCatalog::new()
        .with_record(2, ship("A", "1", "1", "1"))
        .with_record(3, ship("B", "2", "2", "2"));
    let mut requests = Vec::new();
    let fetcher = fetcher_fn(|id| {
        requests.push(id);
        catalog.get(id).cloned().ok_or(FetchError::NotFound(id))
    });
    let config = SessionConfig::default().with_pool(pool(&[2, 3])).with_seed(4);

    let ids = {
        let mut engine = RoundEngine::new(config, fetcher).unwrap();
        let mut session = engine.new_session();
        engine.play_round(&mut session).unwrap().ids
    };

    assert_eq!(requests, vec![ids.user, ids.computer]);
}

/// A failing first fetch stops the round before the second request.
#[test]
fn test_first_failure_skips_second_fetch() {
    let fetcher = FlakyCatalog {
        catalog: RecordCatalog::new(),
        failing: RecordId::new(0),
        requests: Vec::new(),
    };
    let config = SessionConfig::default().with_pool(pool(&[2, 3])).with_seed(4);

    let mut engine = RoundEngine::new(config, fetcher).unwrap();
    let mut session = engine.new_session();

    // Nothing is in the catalog, so the first request fails with NotFound.
    assert!(matches!(
        engine.play_round(&mut session),
        Err(RoundError::Fetch(FetchError::NotFound(_)))
    ));
    assert_eq!(engine.fetcher().requests.len(), 1);
}
