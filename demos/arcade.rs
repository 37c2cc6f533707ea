//! CLI arcade over every engine. Set `RUST_LOG=parlor=debug` to watch the
//! engines' logs.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use parlor::{
    Action, Blackjack, BlackjackOptions, Card, DealerHand, GameOutcome, GameState, Hand, HighLow,
    HighLowOptions, HighLowState, Player, Prediction, Slot, SlotOptions, Suit, War, WarOptions,
    WinTier,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let name = prompt_line("Your name: ");
    let mut player = Player::new(if name.is_empty() { "guest" } else { &name });

    let mut blackjack = Blackjack::new(BlackjackOptions::default(), seed);
    let mut high_low = HighLow::new(HighLowOptions::default(), seed ^ 1);
    let mut slot = Slot::new(SlotOptions::default(), seed ^ 2);
    let mut war = War::new(WarOptions::default(), seed ^ 3);

    loop {
        println!(
            "\n{} | level {} ({}) | {} resources | {} xp",
            player.name(),
            player.level(),
            player.current_title(),
            player.resources(),
            player.experience()
        );
        match prompt_line("[b]lackjack [h]igh-low [w]ar [s]lots [q]uit: ").as_str() {
            "b" | "blackjack" => play_blackjack(&mut blackjack, &mut player),
            "h" | "high-low" => play_high_low(&mut high_low, &mut player),
            "w" | "war" => play_war(&mut war, &mut player),
            "s" | "slots" => play_slots(&mut slot, &mut player),
            "q" | "quit" => break,
            _ => println!("Unknown game."),
        }
        if let Some(level_up) = player.take_level_up() {
            println!("Level {} reached.", level_up.new_level);
        }
    }

    println!("Goodbye.");
}

fn play_blackjack(table: &mut Blackjack, player: &mut Player) {
    let limits = (table.options().min_bet, table.options().max_bet);
    let Some(bet) = prompt_usize(&format!("Bet ({}-{}): ", limits.0, limits.1)) else {
        return;
    };

    let mut outcome = match table.start_game(player, bet) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("Bet error: {err}");
            return;
        }
    };

    if outcome.state == GameState::InsuranceOffered {
        print_table(table);
        let decision = match prompt_line("Dealer shows an Ace. Take insurance? (y/n): ").as_str() {
            "y" | "yes" => table.take_insurance(player),
            _ => table.decline_insurance(player),
        };
        match decision {
            Ok(insurance) => {
                if insurance.payout > 0 {
                    println!("Insurance pays {}.", insurance.payout);
                }
                outcome = insurance.outcome;
            }
            Err(err) => {
                println!("Insurance error: {err}");
                return;
            }
        }
    }

    while outcome.state == GameState::Playing {
        print_table(table);
        println!("{}", format_actions(&table.available_actions(player)));

        let result = match prompt_line("Action: ").as_str() {
            "h" | "hit" => table.hit(player),
            "s" | "stand" => table.stand(player),
            "d" | "double" => table.double_down(player),
            "p" | "split" => table.split(player),
            "u" | "surrender" => table.surrender(player),
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(next) => {
                if let Some(card) = next.card {
                    println!("Dealt {}.", format_card(&card));
                }
                outcome = next;
            }
            Err(err) => println!("Action error: {err}"),
        }
    }

    print_table(table);
    if let Some(result) = &outcome.result {
        println!("{}", outcome.message);
        println!("Payout: {} (net {})", result.total_payout, result.net);
        let recorded = match result.net.signum() {
            1 => GameOutcome::Won,
            -1 => GameOutcome::Lost,
            _ => GameOutcome::Draw,
        };
        player.record_game(recorded);
    }
}

fn play_high_low(game: &mut HighLow, player: &mut Player) {
    let Some(bet) = prompt_usize("Bet (5-200): ") else {
        return;
    };
    let start = match game.start_game(player, bet) {
        Ok(start) => start,
        Err(err) => {
            println!("Bet error: {err}");
            return;
        }
    };
    println!("First card: {}", format_card(&start.card));

    while game.state() == HighLowState::Playing {
        if let Some(hint) = game.probability_hint() {
            println!(
                "Higher {}% / lower {}%. Next win pays {}.",
                hint.higher_percent,
                hint.lower_percent,
                game.potential_winnings()
            );
        }

        let prediction = match prompt_line("[h]igher [l]ower [c]ash out: ").as_str() {
            "h" | "higher" => Prediction::Higher,
            "l" | "lower" => Prediction::Lower,
            "c" | "cash" => {
                match game.cash_out(player) {
                    Ok(cash) => {
                        println!("{} Collected {}.", cash.message, cash.total_payout);
                        player.record_game(GameOutcome::Won);
                    }
                    Err(err) => println!("Cash out error: {err}"),
                }
                continue;
            }
            _ => {
                println!("Unknown call.");
                continue;
            }
        };

        match game.predict(player, prediction) {
            Ok(guess) => {
                println!(
                    "{} -> {}. {}",
                    format_card(&guess.previous_card),
                    format_card(&guess.card),
                    guess.message
                );
                if !guess.correct {
                    println!("Lost {}.", guess.lost_amount);
                    player.record_game(GameOutcome::Lost);
                }
            }
            Err(err) => {
                println!("Error: {err}");
                return;
            }
        }
    }
}

fn play_war(game: &mut War, player: &mut Player) {
    let mut house = Player::new("House");
    if let Err(err) = game.setup(&[player.name(), house.name()]) {
        println!("Setup error: {err}");
        return;
    }
    if let Err(err) = game.start() {
        println!("Start error: {err}");
        return;
    }

    match game.play_to_completion([&mut *player, &mut house]) {
        Ok(summary) => {
            println!(
                "{} beat {} in {} rounds{}.",
                summary.winner_name,
                summary.loser_name,
                summary.rounds,
                if summary.capped { " (round cap)" } else { "" }
            );
            let outcome = if summary.winner == 0 {
                GameOutcome::Won
            } else {
                GameOutcome::Lost
            };
            player.record_game(outcome);
        }
        Err(err) => println!("War error: {err}"),
    }
    game.reset_game();
}

fn play_slots(slot: &mut Slot, player: &mut Player) {
    println!("Jackpot: {}", slot.jackpot());
    let Some(bet) = prompt_usize("Bet (1-100): ") else {
        return;
    };

    match slot.spin(player, bet) {
        Ok(spin) => {
            for row in 0..parlor::slot::ROWS {
                let line: Vec<String> =
                    spin.grid.iter().map(|reel| reel[row].to_string()).collect();
                println!("  {}", line.join(" "));
            }
            for win in &spin.lines {
                println!(
                    "Line {}: {} x{} pays {}",
                    win.line + 1,
                    win.symbol,
                    win.count,
                    win.payout
                );
            }
            if spin.scatter_bonus > 0 {
                println!("Scatter bonus {}", spin.scatter_bonus);
            }
            if spin.tier == WinTier::Jackpot {
                println!("{}", colorize("JACKPOT!", "33"));
            }
            println!("{} Won {}.", spin.message, spin.total_winnings);
            let outcome = if spin.net > 0 {
                GameOutcome::Won
            } else {
                GameOutcome::Lost
            };
            player.record_game(outcome);
        }
        Err(err) => println!("Spin error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(table: &Blackjack) {
    let dealer = table.dealer();
    let dealer_value = if dealer.is_hole_revealed() {
        dealer.value()
    } else {
        dealer.visible_value()
    };
    println!("\nDealer: {} (value {dealer_value})", format_dealer(dealer));

    for (index, hand) in table.hands().iter().enumerate() {
        let marker = if index == table.active_hand() { "*" } else { " " };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {:?}",
            marker,
            index,
            format_hand(hand),
            hand.value(),
            hand.bet(),
            hand.status()
        );
    }
    println!();
}

fn format_actions(actions: &[Action]) -> String {
    let all = [
        (Action::Hit, "hit", "h"),
        (Action::Stand, "stand", "s"),
        (Action::DoubleDown, "double", "d"),
        (Action::Split, "split", "p"),
        (Action::Surrender, "surrender", "u"),
    ];
    let parts: Vec<String> = all
        .iter()
        .map(|(action, label, key)| {
            let text = format!("[{key}]{label}");
            if actions.contains(action) {
                colorize(&text, "32")
            } else {
                colorize(&text, "90")
            }
        })
        .collect();
    format!("Actions: {}", parts.join(" "))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts: Vec<String> = dealer.visible_cards().iter().map(format_card).collect();
    if !dealer.is_hole_revealed() && dealer.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
        Suit::Special => "35",
    };
    colorize(&card.to_string(), color_code)
}
