//! Turn order and rotation tests

use super::test_utils::*;
use crate::error::GameError;
use crate::game::Colour::*;
use crate::game::Ticket::Taxi;
use crate::game::{
    standard_rounds, Acceptor, Game, GameState, Move, MoveSet, Phase, Player, PlayerConfiguration, RandomPlayer,
    Spectator,
};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

fn watch(game: &mut Game) -> Rc<RecordingSpectator> {
    let spectator = RecordingSpectator::new();
    game.register_spectator(spectator.clone()).unwrap();
    spectator
}

#[test]
fn test_full_rotation() {
    let mut game = create_standard_game();
    let spectator = watch(&mut game);

    game.start_rotation().unwrap();

    let state = game.state();
    assert_eq!(state.current_player(), Black);
    assert_eq!(state.current_round(), 1);
    assert_eq!(state.phase(), Phase::InRotation(Black));
    assert_eq!(state.true_location(Black), Some(2));
    assert_eq!(state.player_location(Blue), Some(3));
    assert_eq!(state.player_location(Green), Some(5));
    assert_eq!(state.player_tickets(Black, Taxi), Some(6));
    assert_eq!(state.player_tickets(Blue, Taxi), Some(4));
    assert_eq!(
        spectator.events(),
        vec![
            Event::RoundStarted(1),
            Event::MoveMade(taxi(Black, 2)),
            Event::MoveMade(taxi(Blue, 3)),
            Event::MoveMade(taxi(Green, 5)),
            Event::RotationComplete,
        ]
    );
}

#[test]
fn test_game_over_ends_rotation() {
    let mut game = create_standard_game();
    game.start_rotation().unwrap();
    let spectator = watch(&mut game);

    // Mr X is forced back to 1, where Blue then boxes him in
    game.start_rotation().unwrap();

    assert!(game.is_game_over());
    assert_eq!(game.state().phase(), Phase::GameOver);
    assert_eq!(game.winning_players(), BTreeSet::from([Blue, Green]));
    assert_eq!(
        spectator.events(),
        vec![
            Event::RoundStarted(2),
            Event::MoveMade(taxi(Black, 2)),
            Event::MoveMade(taxi(Blue, 2)),
            Event::MoveMade(taxi(Green, 4)),
            Event::GameOver([Blue, Green].into()),
        ]
    );
    assert_eq!(game.state().true_location(Black), Some(1));
}

#[test]
fn test_capture_mid_rotation() {
    let mut game = create_game(
        vec![false; 5],
        line_graph(6),
        scripted(Black, 2, tickets(5, 0, 0, 0, 0), vec![taxi(Black, 3)]),
        vec![
            scripted(Blue, 4, detective_tickets(5, 0, 0), vec![taxi(Blue, 3)]),
            config(Green, 6, detective_tickets(5, 0, 0)),
        ],
    );
    let spectator = watch(&mut game);

    game.start_rotation().unwrap();

    assert!(game.is_game_over());
    assert_eq!(game.winning_players(), BTreeSet::from([Blue, Green]));
    assert_eq!(game.state().player_location(Green), Some(6));
    assert_eq!(spectator.events().last(), Some(&Event::GameOver([Blue, Green].into())));
    assert!(!spectator.events().contains(&Event::RotationComplete));
}

#[test]
fn test_round_limit_ends_game() {
    let mut game = create_game(
        vec![false],
        line_graph(6),
        config(Black, 1, tickets(5, 0, 0, 0, 0)),
        vec![config(Blue, 5, detective_tickets(5, 0, 0))],
    );
    let spectator = watch(&mut game);

    game.start_rotation().unwrap();

    assert!(game.is_game_over());
    assert_eq!(game.winning_players(), BTreeSet::from([Black]));
    assert_eq!(spectator.events().last(), Some(&Event::GameOver([Black].into())));
}

#[test]
fn test_cannot_rotate_after_game_over() {
    let mut game = create_game(
        vec![false],
        line_graph(6),
        config(Black, 1, tickets(5, 0, 0, 0, 0)),
        vec![config(Blue, 5, detective_tickets(5, 0, 0))],
    );
    game.start_rotation().unwrap();

    assert!(matches!(game.start_rotation(), Err(GameError::GameOver)));
}

#[test]
fn test_silent_player_stalls_turn() {
    let mut game = create_game(
        vec![true, false, true],
        line_graph(6),
        PlayerConfiguration::new(Black, 1, tickets(5, 0, 0, 0, 0), Box::new(SilentPlayer)),
        vec![config(Blue, 5, detective_tickets(5, 0, 0))],
    );
    let spectator = watch(&mut game);

    game.start_rotation().unwrap();

    assert_eq!(game.current_player(), Black);
    assert_eq!(game.current_round(), 0);
    assert_eq!(game.state().true_location(Black), Some(1));
    assert!(spectator.events().is_empty());
}

#[test]
fn test_silent_detective_resumes_next_call() {
    let mut game = create_game(
        vec![false; 5],
        line_graph(8),
        config(Black, 1, tickets(5, 0, 0, 0, 0)),
        vec![
            config(Blue, 5, detective_tickets(5, 0, 0)),
            PlayerConfiguration::new(Green, 8, detective_tickets(5, 0, 0), Box::new(SilentPlayer)),
        ],
    );

    game.start_rotation().unwrap();

    assert_eq!(game.current_player(), Green);
    assert_eq!(game.state().phase(), Phase::InRotation(Green));
    assert_eq!(game.current_round(), 1);
}

#[test]
fn test_illegal_choice_is_rejected() {
    let mut game = create_game(
        vec![true, false, true],
        line_graph(6),
        scripted(Black, 1, tickets(5, 0, 0, 0, 0), vec![taxi(Black, 3)]),
        vec![config(Blue, 5, detective_tickets(5, 0, 0))],
    );
    let spectator = watch(&mut game);

    assert!(matches!(game.start_rotation(), Err(GameError::InvalidMove)));

    assert_eq!(game.current_player(), Black);
    assert_eq!(game.current_round(), 0);
    assert_eq!(game.state().true_location(Black), Some(1));
    assert_eq!(game.state().player_tickets(Black, Taxi), Some(5));
    assert!(spectator.events().is_empty());
}

#[test]
fn test_move_for_another_player_is_rejected() {
    let mut game = create_game(
        vec![true, false, true],
        line_graph(6),
        scripted(Black, 1, tickets(5, 0, 0, 0, 0), vec![taxi(Blue, 4)]),
        vec![config(Blue, 5, detective_tickets(5, 0, 0))],
    );

    assert!(matches!(game.start_rotation(), Err(GameError::InvalidMove)));
    assert_eq!(game.state().player_location(Blue), Some(5));
}

#[test]
fn test_players_are_offered_their_true_location() {
    let offers = Rc::new(RefCell::new(vec![]));
    let mut game = create_game(
        vec![false, false, false],
        line_graph(6),
        PlayerConfiguration::new(
            Black,
            1,
            tickets(5, 0, 0, 0, 0),
            Box::new(RecordingPlayer { offers: offers.clone() }),
        ),
        vec![config(Blue, 5, detective_tickets(5, 0, 0))],
    );

    game.start_rotation().unwrap();
    game.start_rotation().unwrap();

    let offers = offers.borrow();
    assert_eq!(offers[0], (1, MoveSet::from([taxi(Black, 2)])));
    assert_eq!(offers[1].0, 2);
    assert_eq!(game.state().player_location(Black), Some(0));
}

/// Checks the offered moves against what the public can see, then plays at random.
struct CheckingPlayer {
    inner: RandomPlayer,
}

impl Player for CheckingPlayer {
    fn make_move(&mut self, view: &GameState, location: u32, moves: &MoveSet, accept: Acceptor<'_>) {
        let colour = view.current_player();
        let detectives: Vec<u32> = view
            .players()
            .into_iter()
            .filter(|c| c.is_detective())
            .filter_map(|c| view.player_location(c))
            .collect();
        assert!(!moves.is_empty());
        for mv in moves {
            assert_eq!(mv.colour(), colour);
            match mv {
                Move::Ticket(m) => assert!(!detectives.contains(&m.destination)),
                Move::Double(m) => {
                    assert!(!detectives.contains(&m.first.destination));
                    assert!(!detectives.contains(&m.second.destination));
                    assert!(view.current_round() + 2 <= view.rounds().len());
                }
                Move::Pass { .. } => {
                    assert!(colour.is_detective());
                    assert_eq!(moves.len(), 1);
                }
            }
        }
        self.inner.make_move(view, location, moves, accept);
    }
}

struct RoundCounter {
    rounds: RefCell<Vec<usize>>,
}

impl Spectator for RoundCounter {
    fn on_rotation_complete(&self, view: &GameState) {
        self.rounds.borrow_mut().push(view.current_round());
    }
}

#[test]
fn test_random_games_finish() {
    for seed in 0..20 {
        let checking = |colour: crate::game::Colour, location, tickets| {
            let inner = RandomPlayer::new(seed * 8 + colour as u64);
            PlayerConfiguration::new(colour, location, tickets, Box::new(CheckingPlayer { inner }))
        };
        let mut game = create_game(
            standard_rounds(),
            ring_graph(),
            checking(Black, 1, tickets(4, 3, 3, 2, 2)),
            vec![
                checking(Blue, 4, detective_tickets(6, 4, 2)),
                checking(Green, 8, detective_tickets(6, 4, 2)),
            ],
        );
        let counter = Rc::new(RoundCounter { rounds: RefCell::new(vec![]) });
        game.register_spectator(counter.clone()).unwrap();

        let mut rotations = 0;
        while !game.is_game_over() {
            game.start_rotation().unwrap();
            rotations += 1;
            assert!(rotations <= 24, "seed {} did not finish", seed);
        }

        let winners = game.winning_players();
        assert!(!winners.is_empty());
        assert!(winners == BTreeSet::from([Black]) || !winners.contains(&Black));
        assert!(game.current_round() <= 24);
        let rounds = counter.rounds.borrow();
        assert!(rounds.windows(2).all(|w| w[1] > w[0]));
    }
}
