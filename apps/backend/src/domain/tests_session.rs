use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::domain::gallows::Gallows;
use crate::domain::session::{GameSession, PointAward, Rejection, SessionState};

const AUTHOR: i64 = 42;
const INTRUDER: i64 = 7;

fn start() -> OffsetDateTime {
    datetime!(2026-08-23 12:00 UTC)
}

fn session(word: &str) -> GameSession {
    GameSession::new(AUTHOR, word.to_string(), start())
}

#[test]
fn fresh_session_is_fully_masked() {
    let game = session("siege");
    assert_eq!(game.masked_word(), "-----");
    assert_eq!(game.state(), SessionState::InProgress);
}

#[test]
fn a_hit_reveals_every_matching_position() {
    let mut game = session("melee");
    game.guess(AUTHOR, 'e').unwrap();
    assert_eq!(game.masked_word(), "-e-ee");
    assert_eq!(game.mistakes(), 0);
}

#[test]
fn a_miss_counts_one_mistake() {
    let mut game = session("siege");
    game.guess(AUTHOR, 'z').unwrap();
    assert_eq!(game.mistakes(), 1);
    assert_eq!(game.masked_word(), "-----");
}

#[test]
fn uppercase_input_is_folded_to_the_alphabet() {
    let mut game = session("siege");
    assert_eq!(game.guess(AUTHOR, 'S'), Ok(SessionState::InProgress));
    assert_eq!(game.masked_word(), "s----");
}

#[test]
fn non_letters_are_rejected_without_mutation() {
    let mut game = session("siege");
    assert_eq!(game.guess(AUTHOR, '3'), Err(Rejection::InvalidLetter));
    assert_eq!(game.guess(AUTHOR, 'é'), Err(Rejection::InvalidLetter));
    assert!(game.guesses().is_empty());
}

#[test]
fn duplicate_guesses_are_rejected_without_mutation() {
    let mut game = session("siege");
    game.guess(AUTHOR, 'e').unwrap();
    assert_eq!(game.guess(AUTHOR, 'e'), Err(Rejection::AlreadyGuessed));
    assert_eq!(game.guesses(), &['e']);
    assert_eq!(game.mistakes(), 0);
}

#[test]
fn only_the_author_may_act() {
    let mut game = session("siege");
    assert_eq!(game.guess(INTRUDER, 'e'), Err(Rejection::NotAuthor));
    assert_eq!(game.stop(INTRUDER, start()), Err(Rejection::NotAuthor));
    assert!(game.guesses().is_empty());
    assert_eq!(game.mistakes(), 0);
    assert_eq!(game.state(), SessionState::InProgress);
}

#[test]
fn perfect_game_wins_with_the_maximum_bonus() {
    let mut game = session("siege");
    for letter in ['s', 'i', 'e'] {
        assert_eq!(game.guess(AUTHOR, letter), Ok(SessionState::InProgress));
    }
    assert_eq!(game.guess(AUTHOR, 'g'), Ok(SessionState::Won));
    // bonus = ceil((max_mistakes - 0) / 2) = ceil(9 / 2) = 5
    let expected_bonus = i64::from(Gallows::MAX_MISTAKES.div_ceil(2));
    assert_eq!(expected_bonus, 5);
    assert_eq!(
        game.take_award(),
        Some(PointAward {
            points: 2,
            bonus: expected_bonus
        })
    );
}

#[test]
fn bonus_shrinks_with_mistakes() {
    let mut game = session("ab");
    for wrong in ['x', 'y', 'z'] {
        game.guess(AUTHOR, wrong).unwrap();
    }
    game.guess(AUTHOR, 'a').unwrap();
    assert_eq!(game.guess(AUTHOR, 'b'), Ok(SessionState::Won));
    // ceil((9 - 3) / 2) = 3
    assert_eq!(game.take_award(), Some(PointAward { points: 2, bonus: 3 }));
}

#[test]
fn the_figure_builds_in_ten_stages() {
    // One start stage plus nine pieces, so nine mistakes are survivable
    // and the tenth wrong guess loses.
    assert_eq!(Gallows::STAGES, 10);
    assert_eq!(Gallows::MAX_MISTAKES, 9);
    assert_eq!(Gallows::at(0), Gallows::Empty);
    assert_eq!(Gallows::at(Gallows::MAX_MISTAKES), Gallows::Hanged);
    // Clamped past the end.
    assert_eq!(Gallows::at(200), Gallows::Hanged);
}

#[test]
fn running_out_of_mistakes_loses_with_flat_award() {
    let mut game = session("abc");
    let wrong = ['d', 'e', 'f', 'g', 'h', 'i', 'j', 'k'];
    for letter in wrong {
        assert_eq!(game.guess(AUTHOR, letter), Ok(SessionState::InProgress));
    }
    assert_eq!(game.guess(AUTHOR, 'l'), Ok(SessionState::Lost));
    assert_eq!(game.mistakes(), Gallows::MAX_MISTAKES);
    assert_eq!(game.take_award(), Some(PointAward { points: 2, bonus: 0 }));
}

#[test]
fn early_stop_awards_nothing() {
    let mut game = session("siege");
    for letter in ['a', 'b', 'c'] {
        game.guess(AUTHOR, letter).unwrap();
    }
    let stopped_at = start() + Duration::seconds(30);
    assert_eq!(game.stop(AUTHOR, stopped_at), Ok(SessionState::Cancelled));
    assert_eq!(game.take_award(), None);
}

#[test]
fn earnest_stop_awards_participation() {
    let mut game = session("abcdefgh");
    for letter in ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'z'] {
        game.guess(AUTHOR, letter).unwrap();
    }
    assert_eq!(game.state(), SessionState::InProgress);
    let stopped_at = start() + Duration::seconds(70);
    assert_eq!(game.stop(AUTHOR, stopped_at), Ok(SessionState::Cancelled));
    assert_eq!(game.take_award(), Some(PointAward { points: 2, bonus: 0 }));
}

#[test]
fn long_but_idle_stop_awards_nothing() {
    // Plenty of elapsed time but too few guesses.
    let mut game = session("siege");
    game.guess(AUTHOR, 'a').unwrap();
    let stopped_at = start() + Duration::seconds(300);
    game.stop(AUTHOR, stopped_at).unwrap();
    assert_eq!(game.take_award(), None);
}

#[test]
fn timeout_fires_once_and_awards_nothing() {
    let mut game = session("siege");
    assert!(game.time_out());
    assert_eq!(game.state(), SessionState::TimedOut);
    assert_eq!(game.take_award(), None);
    assert!(!game.time_out());
}

#[test]
fn timeout_after_stop_is_a_no_op() {
    let mut game = session("siege");
    game.stop(AUTHOR, start()).unwrap();
    assert!(!game.time_out());
    assert_eq!(game.state(), SessionState::Cancelled);
}

#[test]
fn terminal_sessions_refuse_further_input() {
    let mut game = session("ab");
    game.guess(AUTHOR, 'a').unwrap();
    game.guess(AUTHOR, 'b').unwrap();
    assert_eq!(game.state(), SessionState::Won);
    assert_eq!(game.guess(AUTHOR, 'c'), Err(Rejection::Finished));
    assert_eq!(game.stop(AUTHOR, start()), Err(Rejection::Finished));
}

#[test]
fn the_award_is_consumable_exactly_once() {
    let mut game = session("ab");
    game.guess(AUTHOR, 'a').unwrap();
    game.guess(AUTHOR, 'b').unwrap();
    assert!(game.take_award().is_some());
    assert!(game.take_award().is_none());
}
