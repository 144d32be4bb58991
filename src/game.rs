//! Round state and the per-tick rules.
//!
//! A [`Game`] is an owned value; nothing in here touches globals or hardware.
//! The tick loop drains the [`InputLatch`] through [`Game::tick`], or feeds a
//! turn directly to [`Game::step`].

use embassy_time::Duration;

use crate::{
    Error,
    Renderer,
    body::SnakeBody,
    config::{
        Difficulty,
        GameConfig,
    },
    fruit::FruitSpawner,
    grid::{
        Cell,
        Direction,
        Turn,
    },
    latch::InputLatch,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundState {
    /// Waiting for the start button.
    Idle,
    Running,
    /// Showing the final score until [`Game::end_round`].
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Collision {
    Wall,
    Body,
}

/// What one tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// No round running; nothing changed.
    Halted,
    Moved,
    /// Fruit eaten; the body grew and a new fruit was placed.
    Ate,
    /// Round over. The body is left exactly as it was before the tick.
    Crashed(Collision),
}

#[derive(Clone, Debug)]
pub struct Game<const N: usize> {
    config: GameConfig,
    state: RoundState,
    difficulty: Difficulty,
    body: SnakeBody<N>,
    direction: Direction,
    fruit: Cell,
    score: u32,
    spawner: FruitSpawner,
}

impl<const N: usize> Game<N> {
    /// An idle game. Fails if `config` does not fit a body of `N` cells.
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        if let Err(e) = config.validate::<N>() {
            error!("rejected game config: {}", e);
            return Err(e);
        }

        let mut spawner = FruitSpawner::new(0);
        let fruit = spawner.spawn(config.grid);
        Ok(Self {
            config,
            state: RoundState::Idle,
            difficulty: Difficulty::default(),
            body: SnakeBody::new(config.grid.start_cell()),
            direction: Direction::East,
            fruit,
            score: 0,
            spawner,
        })
    }

    /// A running game with an explicit layout. `cells` is tail first.
    pub fn restore(
        config: GameConfig,
        cells: &[Cell],
        direction: Direction,
        fruit: Cell,
        seed: u64,
    ) -> Result<Self, Error> {
        let mut game = Self::new(config)?;
        if let Some(index) = cells.iter().position(|c| !config.grid.contains(*c)) {
            return Err(Error::CellOffGrid { index });
        }
        if !config.grid.contains(fruit) {
            return Err(Error::FruitOffGrid);
        }

        game.body = SnakeBody::from_cells(cells)?;
        game.direction = direction;
        game.fruit = fruit;
        game.spawner.reseed(seed);
        game.state = RoundState::Running;
        Ok(game)
    }

    /// Idle → Running. Ignored in any other state; returns whether a round
    /// started.
    pub fn start(&mut self, difficulty: Difficulty, seed: u64) -> bool {
        if self.state != RoundState::Idle {
            warn!("start ignored while {}", self.state);
            return false;
        }

        self.difficulty = difficulty;
        self.body.reset(self.config.grid.start_cell());
        self.direction = Direction::East;
        self.score = 0;
        self.spawner.reseed(seed);
        self.fruit = self.spawner.spawn(self.config.grid);
        self.state = RoundState::Running;
        info!(
            "round started: {}, tick {} ms, seed {}",
            difficulty,
            self.tick_period().as_millis(),
            seed
        );
        true
    }

    /// Run one tick with the turn latched since the previous one.
    pub fn tick(&mut self, input: &InputLatch) -> Tick {
        if self.state != RoundState::Running {
            return Tick::Halted;
        }
        self.step(input.take_pending_turn())
    }

    /// Run one tick: turn, then check wall, body and fruit in that order.
    pub fn step(&mut self, turn: Option<Turn>) -> Tick {
        if self.state != RoundState::Running {
            return Tick::Halted;
        }

        if let Some(turn) = turn {
            self.direction = self.direction.turned(turn);
        }
        let candidate = self.body.head().step(self.direction);
        trace!("heading {} to {}", self.direction, candidate);

        if !self.config.grid.contains(candidate) {
            return self.crash(Collision::Wall, candidate);
        }
        if self.body.self_collision_at(candidate) {
            return self.crash(Collision::Body, candidate);
        }

        if candidate == self.fruit {
            self.body.advance(candidate, true);
            self.score = self.score.saturating_add(self.config.score_per_fruit);
            self.fruit = self.spawner.spawn(self.config.grid);
            debug!(
                "fruit eaten, score {}, length {}, next fruit {}",
                self.score,
                self.body.len(),
                self.fruit
            );
            Tick::Ate
        } else {
            self.body.advance(candidate, false);
            Tick::Moved
        }
    }

    /// GameOver → Idle once the final score has been shown. Returns the final
    /// score.
    pub fn end_round(&mut self) -> u32 {
        if self.state == RoundState::GameOver {
            self.state = RoundState::Idle;
        } else {
            warn!("end_round while {}", self.state);
        }
        self.score
    }

    /// Draw the current frame, or the final score once the round is over.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        if self.state == RoundState::GameOver {
            return renderer.on_round_end(self.score);
        }
        renderer.begin_frame()?;
        renderer.draw_snake(self.body.segments())?;
        renderer.draw_fruit(self.fruit)?;
        renderer.draw_score(self.score)
    }

    fn crash(&mut self, collision: Collision, at: Cell) -> Tick {
        self.state = RoundState::GameOver;
        info!(
            "game over: {} at {}, score {}, length {}",
            collision,
            at,
            self.score,
            self.body.len()
        );
        Tick::Crashed(collision)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn fruit(&self) -> Cell {
        self.fruit
    }

    pub fn body(&self) -> &SnakeBody<N> {
        &self.body
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick_period(&self) -> Duration {
        self.config.tick_period(self.difficulty)
    }
}
