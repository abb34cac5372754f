//! Round and war resolution tests.
//!
//! These drive `RoundEngine` directly with hand-built hands and a recording
//! port, completing each effect the way a shell would.

use war_engine::cards::{Card, Suit};
use war_engine::core::{Phase, Side};
use war_engine::presentation::{PresentationEvent, RecordingPresenter};
use war_engine::rules::{GameResult, GameStatus, Rejection, RoundEngine, RoundProgress, RoundRequest};

fn hand(values: &[u8], suit: Suit) -> Vec<Card> {
    values.iter().map(|&v| Card::new(v, suit)).collect()
}

fn engine(player: &[u8], opponent: &[u8]) -> RoundEngine<RecordingPresenter> {
    RoundEngine::from_hands(
        hand(player, Suit::Clubs),
        hand(opponent, Suit::Hearts),
        RecordingPresenter::new(),
    )
}

/// Request a round and complete effects until it resolves.
/// Returns every progress step.
fn run_round(engine: &mut RoundEngine<RecordingPresenter>) -> Vec<RoundProgress> {
    let mut handle = match engine.request_play_round().unwrap() {
        RoundRequest::Started(handle) => handle,
        other => panic!("round did not start: {:?}", other),
    };

    let mut steps = Vec::new();
    loop {
        let progress = engine.complete_effect(handle).unwrap();
        assert_eq!(engine.cards_accounted(), engine.deck_size());
        steps.push(progress);
        match progress.pending_effect() {
            Some(next) => handle = next,
            None => return steps,
        }
    }
}

fn moved_cards(engine: &RoundEngine<RecordingPresenter>) -> Vec<Vec<Card>> {
    engine
        .port()
        .events()
        .iter()
        .filter_map(|e| match e {
            PresentationEvent::MoveToPile { cards, .. } => Some(cards.to_vec()),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Comparison
// =============================================================================

/// The higher card takes both cards when there is no war.
#[test]
fn test_higher_card_wins_two_cards() {
    let mut engine = engine(&[3, 10], &[11, 4]);

    let steps = run_round(&mut engine);

    assert_eq!(
        steps[0],
        RoundProgress::Awarded {
            winner: Side::Opponent,
            cards: 2,
            handle: steps[0].pending_effect().unwrap(),
        }
    );
    assert_eq!(
        steps[1],
        RoundProgress::RoundComplete { winner: Side::Opponent, hand_sizes: (1, 3) }
    );
    assert_eq!(
        engine.hand(Side::Opponent).to_vec(),
        vec![Card::new(4, Suit::Hearts), Card::new(3, Suit::Clubs), Card::new(11, Suit::Hearts)]
    );
}

/// Suits never decide a round.
#[test]
fn test_suit_does_not_break_ties() {
    let mut engine = RoundEngine::from_hands(
        [Card::new(9, Suit::Spades), Card::new(2, Suit::Spades)],
        [Card::new(9, Suit::Clubs), Card::new(3, Suit::Clubs)],
        RecordingPresenter::new(),
    );

    let steps = run_round(&mut engine);

    assert!(matches!(steps[0], RoundProgress::War { depth: 1, .. }));
}

// =============================================================================
// Wars
// =============================================================================

/// N ties then an unequal pair moves exactly 2*(N+1) cards.
#[test]
fn test_war_escalation_transfers_full_pot() {
    for ties in 1..=4usize {
        let mut player = vec![5u8; ties];
        player.extend([9, 2]);
        let mut opponent = vec![5u8; ties];
        opponent.extend([3, 4]);
        let mut engine = engine(&player, &opponent);

        let steps = run_round(&mut engine);

        let war_steps = steps
            .iter()
            .filter(|s| matches!(s, RoundProgress::War { .. }))
            .count();
        assert_eq!(war_steps, ties);

        let awarded = steps
            .iter()
            .find_map(|s| match s {
                RoundProgress::Awarded { winner, cards, .. } => Some((*winner, *cards)),
                _ => None,
            })
            .unwrap();
        assert_eq!(awarded, (Side::Player, 2 * (ties + 1)));
        assert!(engine.stash().is_empty());
        assert_eq!(engine.report_hand_sizes(), (1 + 2 * (ties + 1), 1));
        assert_eq!(engine.stats().deepest_war, ties as u32);
    }
}

/// Winnings land in order: player stash, opponent stash, decisive pair.
#[test]
fn test_war_pot_order() {
    let mut engine = engine(&[6, 8, 12, 2], &[6, 8, 1, 2]);

    run_round(&mut engine);

    let expected = vec![
        Card::new(6, Suit::Clubs),
        Card::new(8, Suit::Clubs),
        Card::new(6, Suit::Hearts),
        Card::new(8, Suit::Hearts),
        Card::new(12, Suit::Clubs),
        Card::new(1, Suit::Hearts),
    ];
    assert_eq!(moved_cards(&engine), vec![expected.clone()]);

    let mut player_hand = vec![Card::new(2, Suit::Clubs)];
    player_hand.extend(expected);
    assert_eq!(engine.hand(Side::Player).to_vec(), player_hand);
}

/// Stashes stay level through every war step.
#[test]
fn test_stash_symmetry_during_war() {
    let mut engine = engine(&[7, 7, 7, 1], &[7, 7, 7, 9]);
    let RoundRequest::Started(mut handle) = engine.request_play_round().unwrap() else {
        panic!("round did not start");
    };

    loop {
        let progress = engine.complete_effect(handle).unwrap();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.stash[Side::Player].len(), snapshot.stash[Side::Opponent].len());
        assert!(engine.stash().check_balance().is_ok());
        match progress.pending_effect() {
            Some(next) => handle = next,
            None => break,
        }
    }
    assert_eq!(engine.report_hand_sizes(), (0, 8));
}

// =============================================================================
// Idempotent no-op
// =============================================================================

/// Requests during any pending phase leave the engine untouched.
#[test]
fn test_request_during_pending_phases() {
    let mut engine = engine(&[4, 9, 1], &[4, 2, 1]);
    let RoundRequest::Started(mut handle) = engine.request_play_round().unwrap() else {
        panic!("round did not start");
    };

    let mut seen = Vec::new();
    loop {
        seen.push(engine.phase());
        let before = engine.snapshot();
        assert_eq!(
            engine.request_play_round().unwrap(),
            RoundRequest::Ignored(Rejection::RoundInProgress)
        );
        assert_eq!(engine.snapshot(), before);

        match engine.complete_effect(handle).unwrap().pending_effect() {
            Some(next) => handle = next,
            None => break,
        }
    }

    assert_eq!(
        seen,
        vec![
            Phase::RoundPending,
            Phase::WarPending,
            Phase::TransferPending { winner: Side::Player },
        ]
    );
    assert_eq!(engine.phase(), Phase::Idle);
}

// =============================================================================
// Termination
// =============================================================================

/// Four distinct cards, no ties: the side with both high cards ends with all
/// four after two rounds.
#[test]
fn test_four_card_decisive_win() {
    let mut engine = RoundEngine::new(RecordingPresenter::new());
    engine
        .deal(vec![
            Card::new(13, Suit::Spades),
            Card::new(2, Suit::Hearts),
            Card::new(12, Suit::Spades),
            Card::new(3, Suit::Hearts),
        ])
        .unwrap();
    assert_eq!(engine.report_hand_sizes(), (2, 2));

    let first = run_round(&mut engine);
    assert_eq!(
        first.last(),
        Some(&RoundProgress::RoundComplete { winner: Side::Player, hand_sizes: (3, 1) })
    );

    let second = run_round(&mut engine);
    assert_eq!(second.last(), Some(&RoundProgress::Finished(GameResult::PlayerWins)));
    assert_eq!(engine.report_hand_sizes(), (4, 0));
    assert_eq!(engine.current_result(), GameStatus::Finished(GameResult::PlayerWins));
    assert_eq!(
        engine.request_play_round().unwrap(),
        RoundRequest::Ignored(Rejection::GameOver(GameResult::PlayerWins))
    );
}

/// Both hands run out on the same tie.
#[test]
fn test_simultaneous_exhaustion_is_draw() {
    let mut engine = engine(&[7], &[7]);

    let steps = run_round(&mut engine);

    assert_eq!(steps, vec![RoundProgress::Finished(GameResult::Draw)]);
    assert_eq!(engine.report_hand_sizes(), (0, 0));
    assert_eq!(engine.stash().total(), 2);
    assert_eq!(engine.cards_accounted(), 2);
}

/// Both hands run out on the second tie of a war.
#[test]
fn test_draw_after_nested_war() {
    let mut engine = engine(&[4, 6], &[4, 6]);

    let steps = run_round(&mut engine);

    assert!(matches!(steps[0], RoundProgress::War { depth: 1, .. }));
    assert_eq!(steps[1], RoundProgress::Finished(GameResult::Draw));
    assert_eq!(engine.stash().len(), 2);
}

/// The player ties with their last card and cannot continue the war.
#[test]
fn test_mid_war_starvation_player() {
    let mut engine = engine(&[5], &[5, 9, 3]);

    let steps = run_round(&mut engine);

    assert_eq!(steps, vec![RoundProgress::Finished(GameResult::OpponentWins)]);
    assert_eq!(engine.report_hand_sizes(), (0, 2));
    assert_eq!(engine.stash().len(), 1);
    assert_eq!(engine.cards_accounted(), 4);
}

/// Same, with the sides swapped.
#[test]
fn test_mid_war_starvation_opponent() {
    let mut engine = engine(&[8, 8, 2], &[8, 8]);

    let steps = run_round(&mut engine);

    assert_eq!(steps.last(), Some(&RoundProgress::Finished(GameResult::PlayerWins)));
    assert_eq!(engine.report_hand_sizes(), (1, 0));
}

/// The port hears about the end exactly once, with the right message.
#[test]
fn test_game_over_notification() {
    let mut engine = engine(&[5], &[5, 9, 3]);
    run_round(&mut engine);

    let overs: Vec<_> = engine
        .port()
        .events()
        .iter()
        .filter_map(|e| match e {
            PresentationEvent::GameOver(result) => Some(*result),
            _ => None,
        })
        .collect();
    assert_eq!(overs, vec![GameResult::OpponentWins]);
    assert_eq!(overs[0].to_string(), "Opponent Won");
}
