use badge_snake::{
    Button,
    Cell,
    Difficulty,
    Game,
    GameConfig,
    Grid,
    InputLatch,
    Level,
    RoundState,
    SnakeBody,
    Tick,
    Turn,
};
use embassy_time::{
    Duration,
    Instant,
};
use proptest::prelude::*;

const CELLS: usize = 12 * 12;

fn board() -> GameConfig {
    GameConfig::BADGE.with_grid(Grid::new(12, 12))
}

fn turn() -> impl Strategy<Value = Option<Turn>> {
    prop_oneof![
        4 => Just(None),
        1 => Just(Some(Turn::Clockwise)),
        1 => Just(Some(Turn::CounterClockwise)),
    ]
}

fn has_duplicates(body: &SnakeBody<CELLS>) -> bool {
    let mut seen = [false; CELLS];
    body.iter().any(|c| {
        let slot = &mut seen[c.y as usize * 12 + c.x as usize];
        std::mem::replace(slot, true)
    })
}

/// Turn orders tried by the steering strategy; index 0 goes straight first.
const PREFERENCES: [[Option<Turn>; 3]; 6] = [
    [None, Some(Turn::Clockwise), Some(Turn::CounterClockwise)],
    [None, Some(Turn::CounterClockwise), Some(Turn::Clockwise)],
    [Some(Turn::Clockwise), None, Some(Turn::CounterClockwise)],
    [Some(Turn::Clockwise), Some(Turn::CounterClockwise), None],
    [Some(Turn::CounterClockwise), None, Some(Turn::Clockwise)],
    [Some(Turn::CounterClockwise), Some(Turn::Clockwise), None],
];

/// Mostly straight, with an occasional change of preferred turn.
fn preference() -> impl Strategy<Value = usize> {
    prop_oneof![
        6 => Just(0_usize),
        1 => 1_usize..6,
    ]
}

/// First turn of the preferred order that neither leaves the board nor hits
/// the body. Falls back to going straight when the snake is boxed in.
fn steer(game: &Game<CELLS>, preference: usize) -> Option<Turn> {
    let grid = board().grid;
    PREFERENCES[preference]
        .into_iter()
        .find(|&turn| {
            let heading = turn.map_or(game.direction(), |t| game.direction().turned(t));
            let next = game.body().head().step(heading);
            grid.contains(next) && !game.body().self_collision_at(next)
        })
        .flatten()
}

/// Run one step and check the body invariants. Returns whether the round
/// ended.
fn step_and_check(game: &mut Game<CELLS>, turn: Option<Turn>) -> Result<bool, TestCaseError> {
    let before_len = game.body().len();
    let before_head = game.body().head();
    let before_tail = game.body().tail();
    let before: Vec<Cell> = game.body().iter().collect();
    let heading = turn.map_or(game.direction(), |t| game.direction().turned(t));
    let expected_head = before_head.step(heading);

    match game.step(turn) {
        Tick::Moved => {
            prop_assert_eq!(game.body().len(), before_len);
            prop_assert_eq!(game.body().head(), expected_head);
            prop_assert!(before_head.is_adjacent(game.body().head()));
            prop_assert!(!game.body().contains(before_tail));
        }
        Tick::Ate => {
            prop_assert_eq!(game.body().len(), before_len + 1);
            prop_assert_eq!(game.body().head(), expected_head);
            prop_assert_eq!(game.body().tail(), before_tail);
            prop_assert_eq!(game.score() as usize, game.body().len() - 1);
        }
        Tick::Crashed(_) => {
            prop_assert_eq!(game.state(), RoundState::GameOver);
            let after: Vec<Cell> = game.body().iter().collect();
            prop_assert_eq!(after, before);
            return Ok(true);
        }
        Tick::Halted => prop_assert!(false, "running game halted"),
    }

    prop_assert!(game.body().len() >= 1);
    prop_assert!(!has_duplicates(game.body()));
    prop_assert!(game.body().iter().all(|c| board().grid.contains(c)));
    prop_assert!(board().grid.contains(game.fruit()));
    Ok(false)
}

proptest! {
    #[test]
    fn ticks_keep_the_body_consistent(
        seed in any::<u64>(),
        turns in proptest::collection::vec(turn(), 1..300),
    ) {
        let mut game = Game::<CELLS>::new(board()).unwrap();
        game.start(Difficulty::Normal, seed);

        for turn in turns {
            if step_and_check(&mut game, turn)? {
                break;
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn long_bodies_keep_the_body_consistent(
        seed in any::<u64>(),
        preferences in proptest::collection::vec(preference(), 200..1500),
    ) {
        let mut game = Game::<CELLS>::new(board()).unwrap();
        game.start(Difficulty::Normal, seed);

        for preference in preferences {
            let turn = steer(&game, preference);
            if step_and_check(&mut game, turn)? {
                break;
            }
        }
    }
}

proptest! {
    #[test]
    fn one_accepted_press_per_debounce_window(
        gaps in proptest::collection::vec(0_u64..400, 1..40),
        window_ms in 1_u64..200,
    ) {
        let latch = InputLatch::new(Duration::from_millis(window_ms));
        let mut now = 10_000_u64;
        let mut last_accepted: Option<u64> = None;

        for (i, gap) in gaps.into_iter().enumerate() {
            now += gap;
            let button = if i % 2 == 0 { Button::Left } else { Button::Right };
            let accepted = latch.on_button_edge(button, Level::Low, Instant::from_millis(now));
            let expected = last_accepted.is_none_or(|t| now - t > window_ms);
            prop_assert_eq!(accepted, expected);
            if accepted {
                last_accepted = Some(now);
                prop_assert_eq!(latch.take_pending_turn(), Some(button.turn()));
            } else {
                prop_assert_eq!(latch.take_pending_turn(), None);
            }
        }
    }
}
