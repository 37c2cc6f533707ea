use parlor::hand::evaluate;
use parlor::{
    Action, ActionError, BetError, Blackjack, BlackjackOptions, Card, GameState, HandOutcome,
    HandStatus, InsuranceError, Player, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn table(options: BlackjackOptions, draws: &[Card]) -> Blackjack {
    let mut table = Blackjack::new(options.with_reshuffle_threshold(0), 1);
    table.cards_mut().stack(draws);
    table
}

fn no_insurance() -> BlackjackOptions {
    BlackjackOptions::default().with_insurance(false)
}

#[test]
fn hand_values_use_flexible_aces() {
    assert_eq!(
        evaluate(&[card(Suit::Spades, 1), card(Suit::Hearts, 13)]),
        (21, true)
    );
    assert_eq!(
        evaluate(&[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 9)
        ]),
        (21, true)
    );
    assert_eq!(
        evaluate(&[
            card(Suit::Spades, 13),
            card(Suit::Hearts, 12),
            card(Suit::Clubs, 5)
        ]),
        (25, false)
    );
    assert_eq!(
        evaluate(&[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 10)
        ]),
        (17, false)
    );
}

#[test]
fn natural_pays_three_to_two() {
    let mut table = table(
        BlackjackOptions::default(),
        &[
            card(Suit::Spades, 1),   // player
            card(Suit::Hearts, 9),   // dealer up
            card(Suit::Spades, 13),  // player
            card(Suit::Clubs, 7),    // dealer hole
        ],
    );
    let mut player = Player::new("dee");

    let outcome = table.start_game(&mut player, 100).unwrap();
    assert_eq!(outcome.state, GameState::Finished);

    let result = outcome.result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.total_payout, 250);
    assert_eq!(result.net, 150);
    assert_eq!(result.experience, 25);
    assert_eq!(player.resources(), 1150);
    assert_eq!(player.experience(), 25);
    assert_eq!(table.stats().blackjacks, 1);
}

#[test]
fn natural_against_dealer_natural_pushes() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 1),
            card(Suit::Spades, 12),
            card(Suit::Clubs, 13),
        ],
    );
    let mut player = Player::new("dee");

    let result = table.start_game(&mut player, 50).unwrap().result.unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(player.resources(), 1000);
}

#[test]
fn bet_errors_leave_wallet_untouched() {
    let mut table = Blackjack::new(BlackjackOptions::default(), 3);
    let mut player = Player::with_resources("short", 20);

    assert_eq!(
        table.start_game(&mut player, 5).unwrap_err(),
        BetError::OutOfRange { min: 10, max: 500 }
    );
    assert_eq!(
        table.start_game(&mut player, 501).unwrap_err(),
        BetError::OutOfRange { min: 10, max: 500 }
    );
    assert_eq!(
        table.start_game(&mut player, 50).unwrap_err(),
        BetError::InsufficientFunds { needed: 50 }
    );
    assert_eq!(player.resources(), 20);
    assert_eq!(table.state(), GameState::Waiting);
}

#[test]
fn cannot_bet_during_a_round() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 10),
        ],
    );
    let mut player = Player::new("dee");

    table.start_game(&mut player, 10).unwrap();
    assert_eq!(table.state(), GameState::Playing);
    assert_eq!(
        table.start_game(&mut player, 10).unwrap_err(),
        BetError::RoundInProgress
    );
    assert_eq!(player.resources(), 990);
}

#[test]
fn actions_rejected_outside_play() {
    let mut table = Blackjack::new(BlackjackOptions::default(), 1);
    let mut player = Player::new("dee");

    assert_eq!(table.hit(&mut player).unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stand(&mut player).unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        table.take_insurance(&mut player).unwrap_err(),
        InsuranceError::InvalidState
    );
    assert!(table.available_actions(&player).is_empty());
}

#[test]
fn hole_card_hidden_until_dealer_turn() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 10),  // dealer hole
            card(Suit::Hearts, 2),   // dealer draw
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let snapshot = table.snapshot(&player);
    assert_eq!(snapshot.dealer_cards, vec![card(Suit::Clubs, 6)]);
    assert_eq!(snapshot.dealer_value, 6);
    assert!(snapshot.hole_hidden);
    assert_eq!(
        snapshot.actions,
        vec![Action::Hit, Action::Stand, Action::DoubleDown, Action::Surrender]
    );

    let outcome = table.stand(&mut player).unwrap();
    assert_eq!(outcome.state, GameState::Finished);
    let result = outcome.result.unwrap();
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.total_payout, 200);
    assert_eq!(result.experience, 15);
    assert_eq!(player.resources(), 1100);

    let snapshot = table.snapshot(&player);
    assert_eq!(snapshot.dealer_cards.len(), 3);
    assert!(!snapshot.hole_hidden);
}

#[test]
fn bust_ends_round_without_dealer_draw() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 10),
            card(Suit::Clubs, 13),  // player hit
            card(Suit::Hearts, 4),  // would be the dealer's draw
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let outcome = table.hit(&mut player).unwrap();
    assert_eq!(outcome.card, Some(card(Suit::Clubs, 13)));
    assert_eq!(outcome.state, GameState::Finished);
    assert_eq!(table.hands()[0].status(), HandStatus::Bust);
    assert_eq!(table.dealer().len(), 2);

    let result = outcome.result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -100);
    assert_eq!(player.resources(), 900);
}

#[test]
fn hitting_twenty_one_stands_automatically() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Spades, 5),
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 10), // player hit to 21
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 10).unwrap();

    let outcome = table.hit(&mut player).unwrap();
    assert_eq!(outcome.state, GameState::Finished);
    assert_eq!(table.hands()[0].status(), HandStatus::Stand);
    assert_eq!(outcome.result.unwrap().hands[0].outcome, HandOutcome::Win);
}

#[test]
fn insurance_pays_three_times_stake_on_dealer_blackjack() {
    let mut table = table(
        BlackjackOptions::default(),
        &[
            card(Suit::Spades, 10),   // player
            card(Suit::Hearts, 1),    // dealer up
            card(Suit::Clubs, 9),     // player
            card(Suit::Diamonds, 13), // dealer hole
        ],
    );
    let mut player = Player::new("dee");

    let outcome = table.start_game(&mut player, 100).unwrap();
    assert_eq!(outcome.state, GameState::InsuranceOffered);
    assert!(table.is_insurance_offered());
    assert_eq!(table.insurance_stake(), 50);
    assert_eq!(
        table.available_actions(&player),
        vec![Action::TakeInsurance, Action::DeclineInsurance]
    );

    let insurance = table.take_insurance(&mut player).unwrap();
    assert_eq!(insurance.stake, 50);
    assert!(insurance.dealer_blackjack);
    assert_eq!(insurance.payout, 150);
    assert_eq!(insurance.outcome.state, GameState::Finished);

    let result = insurance.outcome.result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.insurance_bet, 50);
    assert_eq!(result.insurance_payout, 150);
    assert_eq!(result.net, 0);
    assert_eq!(player.resources(), 1000);
}

#[test]
fn declined_insurance_without_dealer_blackjack_plays_on() {
    let mut table = table(
        BlackjackOptions::default(),
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 6),
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let insurance = table.decline_insurance(&mut player).unwrap();
    assert_eq!(insurance.stake, 0);
    assert!(!insurance.dealer_blackjack);
    assert_eq!(insurance.outcome.state, GameState::Playing);
    assert_eq!(table.insurance_bet(), None);
    assert_eq!(player.resources(), 900);
}

/// Player A-K against a dealer Ace, with `hole` face down.
fn natural_against_ace(hole: u8) -> Blackjack {
    table(
        BlackjackOptions::default(),
        &[
            card(Suit::Spades, 1),    // player
            card(Suit::Hearts, 1),    // dealer up
            card(Suit::Spades, 13),   // player
            card(Suit::Diamonds, hole),
        ],
    )
}

#[test]
fn natural_is_offered_insurance_before_settling() {
    let mut table = natural_against_ace(9);
    let mut player = Player::new("dee");

    let outcome = table.start_game(&mut player, 100).unwrap();
    assert_eq!(outcome.state, GameState::InsuranceOffered);
    assert!(outcome.result.is_none());
    assert_eq!(table.hands()[0].status(), HandStatus::Blackjack);
    assert_eq!(player.resources(), 900);
}

#[test]
fn natural_with_lost_insurance_still_pays_three_to_two() {
    let mut table = natural_against_ace(9);
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let insurance = table.take_insurance(&mut player).unwrap();
    assert_eq!(insurance.stake, 50);
    assert!(!insurance.dealer_blackjack);
    assert_eq!(insurance.payout, 0);
    assert_eq!(insurance.outcome.state, GameState::Finished);

    let result = insurance.outcome.result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 250);
    assert_eq!(result.insurance_bet, 50);
    assert_eq!(result.insurance_payout, 0);
    assert_eq!(result.net, 100);
    assert_eq!(result.experience, 25);
    assert_eq!(player.resources(), 1100);
}

#[test]
fn natural_with_declined_insurance_pays_three_to_two() {
    let mut table = natural_against_ace(9);
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let insurance = table.decline_insurance(&mut player).unwrap();
    assert_eq!(insurance.stake, 0);
    assert_eq!(insurance.outcome.state, GameState::Finished);

    let result = insurance.outcome.result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.total_payout, 250);
    assert_eq!(result.insurance_bet, 0);
    assert_eq!(result.net, 150);
    assert_eq!(player.resources(), 1150);
}

#[test]
fn insured_natural_against_dealer_blackjack_pushes_and_collects() {
    let mut table = natural_against_ace(12);
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let insurance = table.take_insurance(&mut player).unwrap();
    assert!(insurance.dealer_blackjack);
    assert_eq!(insurance.payout, 150);

    let result = insurance.outcome.result.unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.hands[0].payout, 100);
    assert_eq!(result.insurance_payout, 150);
    assert_eq!(result.net, 100);
    assert_eq!(result.experience, 0);
    assert_eq!(player.resources(), 1100);
}

#[test]
fn uninsured_natural_against_dealer_blackjack_pushes() {
    let mut table = natural_against_ace(12);
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let insurance = table.decline_insurance(&mut player).unwrap();
    assert!(insurance.dealer_blackjack);
    assert_eq!(insurance.payout, 0);

    let result = insurance.outcome.result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(player.resources(), 1000);
    assert_eq!(table.stats().pushes, 1);
}

#[test]
fn lost_insurance_counts_in_net() {
    let mut table = table(
        BlackjackOptions::default(),
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7), // dealer soft 18
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let insurance = table.take_insurance(&mut player).unwrap();
    assert_eq!(insurance.payout, 0);
    assert_eq!(table.state(), GameState::Playing);

    let result = table.stand(&mut player).unwrap().result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.net, 50);
    assert_eq!(player.resources(), 1050);
}

#[test]
fn double_down_doubles_bet_and_stands() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Spades, 5),    // player
            card(Suit::Hearts, 6),    // dealer up
            card(Suit::Clubs, 6),     // player
            card(Suit::Diamonds, 10), // dealer hole
            card(Suit::Clubs, 10),    // double draw
            card(Suit::Spades, 13),   // dealer busts
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let outcome = table.double_down(&mut player).unwrap();
    assert_eq!(outcome.card, Some(card(Suit::Clubs, 10)));
    assert_eq!(outcome.state, GameState::Finished);
    assert!(table.hands()[0].is_doubled());
    assert_eq!(table.hands()[0].bet(), 200);

    let result = outcome.result.unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.total_payout, 400);
    assert_eq!(result.net, 200);
    assert_eq!(player.resources(), 1200);
}

#[test]
fn double_down_respects_table_rule_and_funds() {
    let options = no_insurance().with_double(parlor::DoubleOption::NineOrTen);
    let mut table = table(
        options,
        &[
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 3),
            card(Suit::Diamonds, 10),
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();
    assert_eq!(
        table.double_down(&mut player).unwrap_err(),
        ActionError::CannotDouble
    );

    let mut table = self::table(
        no_insurance(),
        &[
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 10),
        ],
    );
    let mut poor = Player::with_resources("poor", 150);
    table.start_game(&mut poor, 100).unwrap();
    assert_eq!(
        table.double_down(&mut poor).unwrap_err(),
        ActionError::InsufficientFunds { needed: 100 }
    );
    assert!(!table.available_actions(&poor).contains(&Action::DoubleDown));
    assert_eq!(poor.resources(), 50);
}

#[test]
fn split_plays_each_hand_with_its_own_bet() {
    let mut table = table(
        no_insurance().with_max_hands(2),
        &[
            card(Suit::Spades, 8),   // player
            card(Suit::Hearts, 10),  // dealer up
            card(Suit::Clubs, 8),    // player
            card(Suit::Diamonds, 7), // dealer hole
            card(Suit::Hearts, 8),   // first hand
            card(Suit::Diamonds, 2), // second hand
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();
    assert!(table.available_actions(&player).contains(&Action::Split));

    table.split(&mut player).unwrap();
    assert_eq!(player.resources(), 800);

    let hands = table.hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(
        hands[0].cards(),
        &[card(Suit::Spades, 8), card(Suit::Hearts, 8)]
    );
    assert_eq!(
        hands[1].cards(),
        &[card(Suit::Clubs, 8), card(Suit::Diamonds, 2)]
    );
    assert!(hands.iter().all(|h| h.bet() == 100));
    assert!(hands[1].is_from_split());

    // The first hand is a pair again, but the table allows two hands.
    assert_eq!(
        table.split(&mut player).unwrap_err(),
        ActionError::MaxSplitsReached
    );
    assert_eq!(
        table.surrender(&mut player).unwrap_err(),
        ActionError::CannotSurrender
    );

    let outcome = table.stand(&mut player).unwrap();
    assert_eq!(outcome.state, GameState::Playing);
    assert_eq!(table.active_hand(), 1);

    let result = table.stand(&mut player).unwrap().result.unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands.len(), 2);
    assert!(result.hands.iter().all(|h| h.outcome == HandOutcome::Lose));
    assert_eq!(result.net, -200);
    assert_eq!(player.resources(), 800);
}

#[test]
fn split_twenty_one_is_not_a_natural() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Spades, 1),    // player
            card(Suit::Hearts, 9),    // dealer up
            card(Suit::Clubs, 1),     // player
            card(Suit::Diamonds, 8),  // dealer hole
            card(Suit::Spades, 13),   // first hand
            card(Suit::Diamonds, 12), // second hand
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let outcome = table.split(&mut player).unwrap();
    assert_eq!(outcome.state, GameState::Finished);
    assert!(table.hands().iter().all(|h| h.status() == HandStatus::Stand));
    assert!(table.hands().iter().all(parlor::Hand::is_from_split));

    let result = outcome.result.unwrap();
    assert!(result.hands.iter().all(|h| h.outcome == HandOutcome::Win));
    assert_eq!(result.total_payout, 400);
    assert_eq!(result.experience, 30);
    assert_eq!(player.resources(), 1200);
}

#[test]
fn split_requires_a_pair() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Spades, 8),
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 7),
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    assert_eq!(table.split(&mut player).unwrap_err(), ActionError::CannotSplit);
    assert_eq!(player.resources(), 900);
}

#[test]
fn surrender_refunds_half_and_ends_round() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Spades, 10),  // player
            card(Suit::Hearts, 10),  // dealer up
            card(Suit::Clubs, 6),    // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 100).unwrap();

    let outcome = table.surrender(&mut player).unwrap();
    assert_eq!(outcome.state, GameState::Finished);

    let result = outcome.result.unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Surrendered);
    assert_eq!(result.surrender_refund, 50);
    assert_eq!(result.net, -50);
    assert_eq!(player.resources(), 950);
}

#[test]
fn surrender_rounding_follows_options() {
    let options = no_insurance().with_rounding_surrender(parlor::RoundingMode::Up);
    let mut table = table(
        options,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 15).unwrap();

    let result = table.surrender(&mut player).unwrap().result.unwrap();
    assert_eq!(result.surrender_refund, 8);
    assert_eq!(player.resources(), 993);
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let draws = [
        card(Suit::Spades, 10),  // player
        card(Suit::Hearts, 1),   // dealer up
        card(Suit::Clubs, 9),    // player
        card(Suit::Diamonds, 6), // dealer hole: soft 17
        card(Suit::Clubs, 2),    // dealer draw when hitting soft 17
    ];

    let mut standing = table(no_insurance(), &draws);
    let mut player = Player::new("dee");
    standing.start_game(&mut player, 100).unwrap();
    let result = standing.stand(&mut player).unwrap().result.unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);

    let mut hitting = table(no_insurance().with_stand_on_soft_17(false), &draws);
    let mut player = Player::new("dee");
    hitting.start_game(&mut player, 100).unwrap();
    let result = hitting.stand(&mut player).unwrap().result.unwrap();
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(player.resources(), 1000);
}

#[test]
fn empty_deck_is_reported() {
    let mut table = table(
        no_insurance(),
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 6),
            card(Suit::Diamonds, 7),
        ],
    );
    let mut player = Player::new("dee");
    table.start_game(&mut player, 10).unwrap();

    assert_eq!(table.hit(&mut player).unwrap_err(), ActionError::NoCards);
    assert_eq!(table.state(), GameState::Playing);
}

#[test]
fn reset_matches_fresh_table() {
    let fresh = Blackjack::new(BlackjackOptions::default(), 9);
    let player = Player::new("dee");
    let expected = fresh.snapshot(&player);

    let mut table = Blackjack::new(BlackjackOptions::default(), 9);
    let mut player = Player::new("dee");
    let mut outcome = table.start_game(&mut player, 20).unwrap();
    if outcome.state == GameState::InsuranceOffered {
        outcome = table.decline_insurance(&mut player).unwrap().outcome;
    }
    while outcome.state == GameState::Playing {
        outcome = table.stand(&mut player).unwrap();
    }
    assert_eq!(table.stats().rounds, 1);

    table.reset_game();
    let mut snapshot = table.snapshot(&player);
    assert_eq!(snapshot.stats.rounds, 1);
    snapshot.stats = expected.stats;
    assert_eq!(snapshot, expected);
    assert!(table.last_result().is_none());
}

#[test]
fn finished_round_cards_go_to_discard() {
    let mut table = Blackjack::new(no_insurance(), 5);
    let mut player = Player::new("dee");

    for _ in 0..5 {
        let mut outcome = table.start_game(&mut player, 10).unwrap();
        while outcome.state == GameState::Playing {
            outcome = table.stand(&mut player).unwrap();
        }
        let on_table: usize =
            table.hands().iter().map(parlor::Hand::len).sum::<usize>() + table.dealer().len();
        let cards = table.cards();
        assert_eq!(
            cards.remaining() + cards.discard_pile().len() + on_table,
            parlor::DECK_SIZE
        );
    }
}
