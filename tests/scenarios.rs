use badge_snake::{
    Button,
    Cell,
    Collision,
    Difficulty,
    Direction,
    Game,
    GameConfig,
    Grid,
    InputLatch,
    Level,
    RoundState,
    Tick,
    Turn,
};
use embassy_time::{
    Duration,
    Instant,
};

const CELLS: usize = 9 * 15;

fn reference_board() -> GameConfig {
    GameConfig::for_display(135, 240, 15, 15)
}

fn body(game: &Game<CELLS>) -> Vec<Cell> {
    game.body().iter().collect()
}

#[test]
fn first_tick_moves_the_lone_segment_east() {
    let mut game = Game::<CELLS>::new(reference_board()).unwrap();
    assert_eq!(game.config().grid, Grid::new(9, 15));
    assert!(game.start(Difficulty::Normal, 11));
    assert_eq!(game.body().head(), Cell::new(3, 7));

    // Keep the fruit away from (4,7) for this check.
    let mut game = Game::<CELLS>::restore(
        reference_board(),
        &[Cell::new(3, 7)],
        Direction::East,
        Cell::new(0, 0),
        11,
    )
    .unwrap();
    assert_eq!(game.step(None), Tick::Moved);
    assert_eq!(body(&game), [Cell::new(4, 7)]);
}

#[test]
fn eating_fruit_grows_and_respawns() {
    let mut relocated = 0;
    for seed in 0..50 {
        let mut game = Game::<CELLS>::restore(
            reference_board(),
            &[Cell::new(4, 7)],
            Direction::East,
            Cell::new(5, 7),
            seed,
        )
        .unwrap();
        assert_eq!(game.step(None), Tick::Ate);
        assert_eq!(game.body().head(), Cell::new(5, 7));
        assert_eq!(game.body().tail(), Cell::new(4, 7));
        assert_eq!(game.body().len(), 2);
        assert_eq!(game.score(), 1);
        assert!(game.config().grid.contains(game.fruit()));
        if game.fruit() != Cell::new(5, 7) {
            relocated += 1;
        }
    }
    assert!(relocated >= 45);
}

#[test]
fn westward_move_drops_the_tail() {
    // Head (2,7) heading west, the rest of the body trailing to the east.
    let layout = [
        Cell::new(5, 7),
        Cell::new(4, 7),
        Cell::new(3, 7),
        Cell::new(2, 7),
    ];
    let mut game =
        Game::<CELLS>::restore(reference_board(), &layout, Direction::West, Cell::new(8, 0), 5)
            .unwrap();
    assert_eq!(game.step(None), Tick::Moved);
    assert_eq!(
        body(&game),
        [
            Cell::new(4, 7),
            Cell::new(3, 7),
            Cell::new(2, 7),
            Cell::new(1, 7)
        ]
    );
}

#[test]
fn leaving_the_board_ends_the_round_without_moving() {
    let layout = [Cell::new(1, 7), Cell::new(0, 7)];
    let mut game =
        Game::<CELLS>::restore(reference_board(), &layout, Direction::West, Cell::new(8, 0), 5)
            .unwrap();
    assert_eq!(game.step(None), Tick::Crashed(Collision::Wall));
    assert_eq!(game.state(), RoundState::GameOver);
    assert_eq!(body(&game), layout);
}

#[test]
fn last_column_and_row_are_walls() {
    let mut east = Game::<CELLS>::restore(
        reference_board(),
        &[Cell::new(8, 3)],
        Direction::East,
        Cell::new(0, 0),
        1,
    )
    .unwrap();
    assert_eq!(east.step(None), Tick::Crashed(Collision::Wall));

    let mut south = Game::<CELLS>::restore(
        reference_board(),
        &[Cell::new(2, 14)],
        Direction::South,
        Cell::new(0, 0),
        1,
    )
    .unwrap();
    assert_eq!(south.step(None), Tick::Crashed(Collision::Wall));
}

#[test]
fn turning_off_the_edge_is_a_wall_crash() {
    // Head on the west edge; the turn points it off the board.
    let layout = [
        Cell::new(1, 6),
        Cell::new(1, 7),
        Cell::new(0, 7),
    ];
    let mut game =
        Game::<CELLS>::restore(reference_board(), &layout, Direction::North, Cell::new(8, 0), 3)
            .unwrap();
    assert_eq!(
        game.step(Some(Turn::CounterClockwise)),
        Tick::Crashed(Collision::Wall)
    );
}

#[test]
fn both_buttons_between_ticks_turn_once() {
    let latch = InputLatch::new(Duration::from_millis(20));
    let mut game = Game::<CELLS>::restore(
        reference_board(),
        &[Cell::new(4, 7)],
        Direction::East,
        Cell::new(0, 0),
        9,
    )
    .unwrap();

    latch.on_button_edge(Button::Left, Level::Low, Instant::from_millis(1_000));
    latch.on_button_edge(Button::Right, Level::Low, Instant::from_millis(1_100));
    assert_eq!(game.tick(&latch), Tick::Moved);
    // Right was accepted last: one clockwise turn from East.
    assert_eq!(game.direction(), Direction::South);
    assert_eq!(game.body().head(), Cell::new(4, 8));

    latch.on_button_edge(Button::Right, Level::Low, Instant::from_millis(2_000));
    latch.on_button_edge(Button::Left, Level::Low, Instant::from_millis(2_100));
    assert_eq!(game.tick(&latch), Tick::Moved);
    assert_eq!(game.direction(), Direction::East);
}

#[test]
fn bouncing_button_turns_once() {
    let latch = InputLatch::new(Duration::from_millis(150));
    let mut game = Game::<CELLS>::restore(
        reference_board(),
        &[Cell::new(4, 7)],
        Direction::East,
        Cell::new(0, 0),
        9,
    )
    .unwrap();

    let accepted = [0_u64, 2, 5, 9, 40, 120]
        .into_iter()
        .filter(|t| latch.on_button_edge(Button::Right, Level::Low, Instant::from_millis(500 + t)))
        .count();
    assert_eq!(accepted, 1);
    game.tick(&latch);
    assert_eq!(game.direction(), Direction::South);
}

#[test]
fn rounds_with_different_seeds_place_different_fruit() {
    let mut game = Game::<CELLS>::new(reference_board()).unwrap();
    let mut sequences = Vec::new();
    for seed in [1_u64, 2, 3] {
        assert!(game.start(Difficulty::Easy, seed));
        let mut fruit = vec![game.fruit()];
        // Circle in place; once the snake fills the loop it bites its tail.
        for turn in [Some(Turn::Clockwise); 40] {
            if game.step(turn) == Tick::Ate {
                fruit.push(game.fruit());
            }
            if game.state() != RoundState::Running {
                break;
            }
        }
        sequences.push(fruit);
        if game.state() == RoundState::Running {
            // Force the round over through the wall.
            while game.step(None) != Tick::Crashed(Collision::Wall) {}
        }
        game.end_round();
    }
    assert!(sequences[0] != sequences[1] || sequences[1] != sequences[2]);
}

#[test]
fn difficulty_picks_the_tick_period() {
    let mut game = Game::<CELLS>::new(reference_board()).unwrap();
    game.start(Difficulty::Easy, 0);
    assert_eq!(game.tick_period(), Duration::from_millis(500));
}
