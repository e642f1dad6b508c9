//! Property tests - generated complete games against a roll-by-roll reference

use bowling::types::MAX_SCORE;
use bowling::{score, score_card, ScoreError};
use proptest::prelude::*;

/// Two balls sharing one rack (open or spare)
fn two_ball_frame() -> impl Strategy<Value = Vec<u8>> {
    (0u8..=9)
        .prop_flat_map(|first| (Just(first), 0u8..=(10 - first)))
        .prop_map(|(first, second)| vec![first, second])
}

fn regular_frame() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![Just(vec![10u8]), two_ball_frame()]
}

fn tenth_frame() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        // strike plus two fill balls; after a strike fill ball the rack resets
        (0u8..=10)
            .prop_flat_map(|fill| {
                let max = if fill == 10 { 10 } else { 10 - fill };
                (Just(fill), 0u8..=max)
            })
            .prop_map(|(fill, last)| vec![10, fill, last]),
        // spare plus one fill ball
        (0u8..=9, 0u8..=10).prop_map(|(first, fill)| vec![first, 10 - first, fill]),
        // open
        (0u8..=9)
            .prop_flat_map(|first| (Just(first), 0u8..(10 - first)))
            .prop_map(|(first, second)| vec![first, second]),
    ]
}

fn game() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (prop::collection::vec(regular_frame(), 9), tenth_frame()).prop_map(|(mut frames, tenth)| {
        frames.push(tenth);
        frames
    })
}

fn mark(pins: u8) -> char {
    match pins {
        0 => '-',
        10 => 'X',
        n => (b'0' + n) as char,
    }
}

fn render(frames: &[Vec<u8>]) -> String {
    let mut out = String::new();
    for frame in frames {
        // Pins knocked down by the previous ball of the current rack
        let mut standing_from: Option<u8> = None;
        for &pins in frame {
            match standing_from {
                Some(first) if first + pins == 10 => {
                    out.push('/');
                    standing_from = None;
                }
                Some(_) => {
                    out.push(mark(pins));
                    standing_from = None;
                }
                None => {
                    out.push(mark(pins));
                    standing_from = if pins == 10 { None } else { Some(pins) };
                }
            }
        }
    }
    out
}

/// Textbook scorer over raw pin counts of a complete game
fn reference_score(rolls: &[u8]) -> u16 {
    let roll = |i: usize| u16::from(rolls[i]);
    let mut total = 0;
    let mut i = 0;
    for _ in 0..10 {
        if rolls[i] == 10 {
            total += 10 + roll(i + 1) + roll(i + 2);
            i += 1;
        } else if rolls[i] + rolls[i + 1] == 10 {
            total += 10 + roll(i + 2);
            i += 2;
        } else {
            total += roll(i) + roll(i + 1);
            i += 2;
        }
    }
    total
}

proptest! {
    #[test]
    fn complete_games_match_reference(frames in game()) {
        let notation = render(&frames);
        let rolls: Vec<u8> = frames.concat();

        let total = score(&notation).unwrap();
        prop_assert!(total <= MAX_SCORE);
        prop_assert_eq!(total, reference_score(&rolls), "{}", notation);
    }

    #[test]
    fn cards_are_complete_and_add_up(frames in game()) {
        let notation = render(&frames);
        let card = score_card(&notation).unwrap();

        prop_assert!(card.is_complete());
        prop_assert_eq!(card.frames().iter().map(|f| f.score).sum::<u16>(), card.total());
        prop_assert_eq!(card.frames().iter().map(|f| f.len()).sum::<usize>(), notation.len());
    }

    #[test]
    fn prefixes_score_less_or_fail_cleanly(frames in game(), cut in 0usize..21) {
        let notation = render(&frames);
        let cut = cut.min(notation.len());
        let full = score(&notation).unwrap();

        match score(&notation[..cut]) {
            Ok(partial) => prop_assert!(partial <= full),
            Err(err) => prop_assert!(
                matches!(
                    err,
                    ScoreError::IncompleteBonus { .. } | ScoreError::IncompleteFrame { .. }
                ),
                "{:?} for {:?}",
                err,
                &notation[..cut]
            ),
        }
    }
}
