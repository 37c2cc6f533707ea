#![cfg(feature = "serde")]

use parlor::{
    Blackjack, BlackjackOptions, Card, GameState, Player, Prediction, Slot, SlotOptions, Suit,
};

#[test]
fn card_round_trips_through_json() {
    let card = Card::new(Suit::Spades, 1).with_face_up(true);
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(json, r#"{"suit":"Spades","rank":1,"face_up":true}"#);

    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);
    assert!(back.face_up);

    let call: Prediction = serde_json::from_str(r#""Lower""#).unwrap();
    assert_eq!(call, Prediction::Lower);
}

#[test]
fn snapshot_hides_hole_card() {
    let mut table = Blackjack::new(BlackjackOptions::default().with_insurance(false), 1);
    table.cards_mut().stack(&[
        Card::new(Suit::Hearts, 10),
        Card::new(Suit::Clubs, 6),
        Card::new(Suit::Diamonds, 7),
        Card::new(Suit::Spades, 13),
    ]);
    let mut player = Player::new("dee");
    table.start_game(&mut player, 10).unwrap();
    assert_eq!(table.state(), GameState::Playing);

    let value = serde_json::to_value(table.snapshot(&player)).unwrap();
    assert_eq!(value["state"], "Playing");
    assert_eq!(value["hole_hidden"], true);
    assert_eq!(value["dealer_cards"].as_array().unwrap().len(), 1);
    assert_eq!(value["hands"][0]["bet"], 10);
}

#[test]
fn spin_serializes() {
    let mut slot = Slot::new(SlotOptions::default(), 2);
    let mut player = Player::new("lucky");
    let spin = slot.spin(&mut player, 5).unwrap();

    let value = serde_json::to_value(&spin).unwrap();
    assert_eq!(value["grid"].as_array().unwrap().len(), 5);
    assert_eq!(value["total_winnings"], spin.total_winnings);
}
