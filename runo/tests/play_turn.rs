mod common;

use common::{current_seat, find, hand_size, id, prepared_deck, seated};
use runo::{
    card::{CardColor, Rank},
    error::UnoError,
    turn::{Direction, TurnAction, TurnOutcome, TurnResult},
};

use CardColor::*;

// With a number card opening the pile the first seat acts as dealer, so seat 1
// takes the first turn in all of these games.

#[test]
fn play_turn_works_if_card_in_hand() {
    let mut uno = seated(4, 1);
    let deck = prepared_deck(
        &[vec![], vec![(Red, Rank::Number(1))], vec![], vec![]],
        (Red, Rank::Number(5)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();
    assert_eq!(current_seat(&uno), 1);

    let red_1 = find(&uno, 1, (Red, Rank::Number(1)));
    let turn_action_result = uno.play_turn(&id(1), TurnAction::Play(red_1)).unwrap();

    assert_eq!(
        turn_action_result,
        TurnResult {
            outcome: TurnOutcome::Neutral,
            won: false
        }
    );
    assert_eq!(uno.active_card().map(|card| card.id()), Some(red_1));
    assert_eq!(hand_size(&uno, 1), 6);
    assert_eq!(current_seat(&uno), 2);
}

#[test]
fn play_turn_fails_if_card_not_in_hand() {
    let mut uno = seated(4, 2);
    let deck = prepared_deck(
        &[vec![], vec![], vec![(Red, Rank::Number(1))], vec![]],
        (Red, Rank::Number(5)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();
    let active_before = uno.active_card().cloned();

    let someone_elses = find(&uno, 2, (Red, Rank::Number(1)));
    let error = uno
        .play_turn(&id(1), TurnAction::Play(someone_elses))
        .unwrap_err();

    assert_eq!(error, UnoError::CardNotFound(someone_elses));
    assert_eq!(uno.active_card().cloned(), active_before);
    assert_eq!(hand_size(&uno, 2), 7);
    assert_eq!(current_seat(&uno), 1);
}

#[test]
fn play_turn_skips_player_properly() {
    let mut uno = seated(4, 3);
    let deck = prepared_deck(
        &[vec![], vec![(Red, Rank::Skip)], vec![], vec![]],
        (Red, Rank::Number(5)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();

    let skip = find(&uno, 1, (Red, Rank::Skip));
    let result = uno.play_card(&id(1), skip).unwrap();

    assert_eq!(result.outcome, TurnOutcome::Skip);
    assert_eq!(current_seat(&uno), 3);
}

#[test]
fn play_turn_performs_reverse_properly() {
    let mut uno = seated(4, 4);
    let deck = prepared_deck(
        &[vec![], vec![(Green, Rank::Reverse)], vec![], vec![]],
        (Green, Rank::Number(3)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();

    let reverse = find(&uno, 1, (Green, Rank::Reverse));
    let result = uno.play_card(&id(1), reverse).unwrap();

    assert_eq!(result.outcome, TurnOutcome::Reverse);
    assert_eq!(uno.turn_state().direction, Direction::Backward);
    assert_eq!(current_seat(&uno), 0);
}

#[test]
fn reverse_with_two_players_never_moves_the_turn() {
    let mut uno = seated(2, 5);
    let deck = prepared_deck(
        &[
            vec![],
            vec![(Green, Rank::Reverse), (Green, Rank::Number(4))],
        ],
        (Green, Rank::Number(3)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();
    assert_eq!(current_seat(&uno), 1);

    let reverse = find(&uno, 1, (Green, Rank::Reverse));
    uno.play_card(&id(1), reverse).unwrap();

    assert_eq!(current_seat(&uno), 1);
    assert_eq!(uno.turn_state().direction, Direction::Forward);

    let green_4 = find(&uno, 1, (Green, Rank::Number(4)));
    uno.play_card(&id(1), green_4).unwrap();
    assert_eq!(current_seat(&uno), 0);
}

#[test]
fn play_turn_performs_draw_properly() {
    let mut uno = seated(4, 6);
    let deck = prepared_deck(
        &[vec![], vec![(Blue, Rank::DrawTwo)], vec![], vec![]],
        (Blue, Rank::Number(7)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();

    let draw_two = find(&uno, 1, (Blue, Rank::DrawTwo));
    let result = uno.play_card(&id(1), draw_two).unwrap();

    assert_eq!(result.outcome, TurnOutcome::DrawTwo);
    assert_eq!(uno.turn_state().pending_draw, 2);
    assert_eq!(current_seat(&uno), 2);

    let paid = uno.draw_card(&id(2)).unwrap();

    assert_eq!(paid.outcome, TurnOutcome::PenaltyDrawn(2));
    assert_eq!(hand_size(&uno, 2), 9);
    assert_eq!(uno.turn_state().pending_draw, 0);
    assert_eq!(current_seat(&uno), 3);
}

#[test]
fn draw_penalties_stack() {
    let mut uno = seated(4, 7);
    let deck = prepared_deck(
        &[
            vec![],
            vec![(Blue, Rank::DrawTwo)],
            vec![(Yellow, Rank::Number(7)), (Wild, Rank::WildDrawFour)],
            vec![],
        ],
        (Blue, Rank::Number(7)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();

    let draw_two = find(&uno, 1, (Blue, Rank::DrawTwo));
    uno.play_card(&id(1), draw_two).unwrap();

    let yellow_7 = find(&uno, 2, (Yellow, Rank::Number(7)));
    assert_eq!(
        uno.play_card(&id(2), yellow_7),
        Err(UnoError::IllegalPlay(yellow_7))
    );

    let wild_draw = find(&uno, 2, (Wild, Rank::WildDrawFour));
    let result = uno.play_card(&id(2), wild_draw).unwrap();

    assert_eq!(result.outcome, TurnOutcome::WildDrawFour);
    assert_eq!(uno.turn_state().pending_draw, 2);

    uno.choose_color(&id(2), Red).unwrap();

    assert_eq!(uno.turn_state().pending_draw, 6);
    assert_eq!(current_seat(&uno), 0);

    uno.draw_card(&id(0)).unwrap();
    assert_eq!(hand_size(&uno, 0), 13);
}

#[test]
fn play_turn_performs_wild_properly() {
    let mut uno = seated(4, 8);
    let deck = prepared_deck(
        &[vec![], vec![(Wild, Rank::Wild)], vec![(Yellow, Rank::Number(2))], vec![]],
        (Red, Rank::Number(5)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();

    let wild = find(&uno, 1, (Wild, Rank::Wild));
    let result = uno.play_card(&id(1), wild).unwrap();

    assert_eq!(result.outcome, TurnOutcome::Wild);
    assert!(uno.status().awaiting_color_choice);
    assert_eq!(current_seat(&uno), 1);

    let yellow_2 = find(&uno, 2, (Yellow, Rank::Number(2)));
    assert_eq!(
        uno.play_card(&id(2), yellow_2),
        Err(UnoError::AwaitingColorChoice)
    );

    let chosen = uno.choose_color(&id(1), Yellow).unwrap();

    assert_eq!(chosen.outcome, TurnOutcome::ColorChosen(Yellow));
    assert_eq!(uno.status().active_wild_color, Some(Yellow));
    assert_eq!(current_seat(&uno), 2);

    uno.play_card(&id(2), yellow_2).unwrap();
    assert_eq!(uno.status().active_wild_color, None);
}

#[test]
fn play_turn_performs_wild_draw_properly() {
    let mut uno = seated(4, 9);
    let deck = prepared_deck(
        &[vec![], vec![(Wild, Rank::WildDrawFour)], vec![], vec![]],
        (Red, Rank::Number(5)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();

    let wild_draw = find(&uno, 1, (Wild, Rank::WildDrawFour));
    uno.play_card(&id(1), wild_draw).unwrap();

    assert_eq!(uno.turn_state().pending_draw, 0);
    assert_eq!(current_seat(&uno), 1);

    uno.choose_color(&id(1), Green).unwrap();

    assert_eq!(uno.turn_state().pending_draw, 4);
    assert_eq!(current_seat(&uno), 3);
}

#[test]
fn turn_winning_works_properly() {
    let mut uno = seated(2, 10);
    assert_eq!(uno.choose_color(&id(0), Red), Err(UnoError::NotRunning));

    let deck = prepared_deck(
        &[
            vec![],
            vec![
                (Green, Rank::Reverse),
                (Green, Rank::Reverse),
                (Red, Rank::Reverse),
                (Red, Rank::Reverse),
                (Blue, Rank::Reverse),
                (Blue, Rank::Reverse),
                (Blue, Rank::Number(3)),
            ],
        ],
        (Green, Rank::Number(3)),
        &[],
    );
    uno.start_with_deck(deck).unwrap();

    for face in [
        (Green, Rank::Reverse),
        (Green, Rank::Reverse),
        (Red, Rank::Reverse),
        (Red, Rank::Reverse),
        (Blue, Rank::Reverse),
        (Blue, Rank::Reverse),
    ] {
        let card_id = find(&uno, 1, face);
        let result = uno.play_card(&id(1), card_id).unwrap();
        assert!(!result.won);
    }

    let last = find(&uno, 1, (Blue, Rank::Number(3)));
    let result = uno.play_card(&id(1), last).unwrap();

    assert_eq!(
        result,
        TurnResult {
            outcome: TurnOutcome::Neutral,
            won: true
        }
    );
    assert_eq!(hand_size(&uno, 1), 0);
    assert_eq!(uno.winner(), Some(&id(1)));

    let status = uno.status();
    assert!(!status.running);
    assert_eq!(status.winner, Some(id(1)));

    assert_eq!(uno.draw_card(&id(0)), Err(UnoError::NotRunning));
    assert_eq!(uno.draw_card(&id(1)), Err(UnoError::NotRunning));
    let any_card = uno.hand(&id(0)).unwrap()[0].id();
    assert_eq!(uno.play_card(&id(0), any_card), Err(UnoError::NotRunning));
    assert_eq!(uno.choose_color(&id(0), Red), Err(UnoError::NotRunning));
    assert_eq!(uno.choose_color(&id(1), Blue), Err(UnoError::NotRunning));
}
