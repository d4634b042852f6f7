use super::alpha_beta::{GameTreeSearch, SearchStats, TurnClock};
use super::config::AgentConfig;
use super::evaluator::Evaluator;
use super::movegen::MoveGenerator;
use crate::core::{Action, Board, Cell, Color};
use crate::logic::Rules;
use crate::player::{AgentError, PlayerController, RemainingTimes};
use rand::rngs::StdRng;

/// Per-turn decision maker: keeps a private copy of the board in sync with
/// the host and picks the root action with the best minimax value.
pub struct MinimaxAgent {
    color: Color,
    name: String,
    board: Board,
    movegen: MoveGenerator,
    evaluator: Box<dyn Evaluator>,
    config: AgentConfig,
    last_stats: SearchStats,
    // Part of the uniform player contract; the search never draws from it.
    _rng: StdRng,
}

/// Outcome of a root search, without committing the move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootChoice {
    pub action: Action,
    pub value: f32,
}

impl MinimaxAgent {
    pub fn new(
        color: Color,
        board: Board,
        rng: StdRng,
        rules: impl Rules + 'static,
        config: AgentConfig,
    ) -> Self {
        let evaluator = config.evaluation.build();
        Self {
            color,
            name: format!(
                "Minimax({}, depth={})",
                evaluator.name(),
                config.search.max_depth
            ),
            board,
            movegen: MoveGenerator::new(rules),
            evaluator,
            config,
            last_stats: SearchStats::default(),
            _rng: rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// 相手の着手を手元の盤面に反映する
    pub fn observe(&mut self, action: Action) -> Result<(), AgentError> {
        if !self.board.contains(action.row, action.col)
            || self.board.get(action.row, action.col) == Cell::Hole
        {
            return Err(AgentError::InvalidAction(action));
        }
        self.movegen
            .apply(&mut self.board, action, self.color.opponent());
        Ok(())
    }

    /// Searches every root action on the current board without playing one.
    ///
    /// Ties keep the earliest enumerated action. `None` when there is no
    /// legal action.
    pub fn search_root(&mut self, remaining_ns: u64) -> Option<RootChoice> {
        let search_config = &self.config.search;
        let clock = if search_config.time_aware {
            TurnClock::start(remaining_ns, search_config.time_safety_margin_ns)
        } else {
            TurnClock::unlimited()
        };
        let mut search = GameTreeSearch::new(
            self.color,
            &self.movegen,
            self.evaluator.as_ref(),
            search_config,
            clock,
        );

        let mut best: Option<RootChoice> = None;
        for action in self.movegen.enumerate(&self.board, self.color) {
            let value = search.search_root_action(&self.board, action);
            log::debug!("{} root {} -> {:.2}", self.color, action, value);
            if best.map_or(true, |b| value > b.value) {
                best = Some(RootChoice { action, value });
            }
        }

        self.last_stats = search.stats();
        if let Some(choice) = best {
            log::info!(
                "{} plays {} (value {:.2}, {} nodes, {} cutoffs, {:?})",
                self.color,
                choice.action,
                choice.value,
                self.last_stats.nodes,
                self.last_stats.cutoffs,
                search.clock().elapsed()
            );
        }
        best
    }
}

impl PlayerController for MinimaxAgent {
    fn decide(
        &mut self,
        previous: Option<Action>,
        remaining: &RemainingTimes,
    ) -> Result<Action, AgentError> {
        if let Some(action) = previous {
            self.observe(action)?;
        }
        let choice = self
            .search_root(remaining.for_color(self.color))
            .ok_or(AgentError::NoLegalMove(self.color))?;
        self.movegen.apply(&mut self.board, choice.action, self.color);
        Ok(choice.action)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn name(&self) -> &str {
        &self.name
    }
}
