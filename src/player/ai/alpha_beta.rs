use super::config::SearchConfig;
use super::evaluator::Evaluator;
use super::movegen::MoveGenerator;
use crate::core::{Action, Board, Color};

use std::time::{Duration, Instant};

/// Counters for one `decide` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

/// The agent's own clock for the current turn.
///
/// Checked only at node entry, so the safety margin has to cover the longest
/// chain of recursion that can still be in flight.
#[derive(Debug, Clone)]
pub struct TurnClock {
    start_time: Instant,
    remaining: Duration,
    safety_margin: Duration,
    enabled: bool,
}

impl TurnClock {
    pub fn start(remaining_ns: u64, safety_margin_ns: u64) -> Self {
        Self {
            start_time: Instant::now(),
            remaining: Duration::from_nanos(remaining_ns),
            safety_margin: Duration::from_nanos(safety_margin_ns),
            enabled: true,
        }
    }

    pub fn unlimited() -> Self {
        Self {
            start_time: Instant::now(),
            remaining: Duration::MAX,
            safety_margin: Duration::ZERO,
            enabled: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn exhausted(&self) -> bool {
        self.enabled && self.remaining.saturating_sub(self.elapsed()) < self.safety_margin
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Every node owns a fresh copy of its parent board, so sibling branches never
/// observe each other's moves.
pub struct GameTreeSearch<'a> {
    me: Color,
    movegen: &'a MoveGenerator,
    evaluator: &'a dyn Evaluator,
    max_depth: usize,
    pruning: bool,
    clock: TurnClock,
    stats: SearchStats,
    low_time_logged: bool,
}

impl<'a> GameTreeSearch<'a> {
    pub fn new(
        me: Color,
        movegen: &'a MoveGenerator,
        evaluator: &'a dyn Evaluator,
        config: &SearchConfig,
        clock: TurnClock,
    ) -> Self {
        Self {
            me,
            movegen,
            evaluator,
            max_depth: config.max_depth,
            pruning: config.alpha_beta,
            clock,
            stats: SearchStats::default(),
            low_time_logged: false,
        }
    }

    /// Initial alpha; strictly below anything the evaluator returns.
    pub fn floor(&self) -> f32 {
        self.evaluator.min_value() - 1.0
    }

    /// Initial beta; strictly above anything the evaluator returns.
    pub fn ceiling(&self) -> f32 {
        self.evaluator.max_value() + 1.0
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    /// Value of playing `action` from `root`, with the opponent to reply.
    pub fn search_root_action(&mut self, root: &Board, action: Action) -> f32 {
        let child = self.movegen.child(root, action, self.me);
        let (alpha, beta) = (self.floor(), self.ceiling());
        self.alpha_beta(&child, 0, alpha, beta, action, self.me.opponent())
    }

    // --- Alpha-Beta Search ---
    /// `node` already has `last` applied.
    pub fn alpha_beta(
        &mut self,
        node: &Board,
        depth: usize,
        mut alpha: f32,
        mut beta: f32,
        last: Action,
        to_move: Color,
    ) -> f32 {
        self.stats.nodes += 1;

        if depth >= self.max_depth || self.out_of_time() {
            return self.leaf(node, depth, last);
        }
        let children = self.movegen.enumerate(node, to_move);
        if children.is_empty() {
            return self.leaf(node, depth, last);
        }

        if to_move == self.me {
            let mut best = self.floor();
            for action in children {
                let child = self.movegen.child(node, action, to_move);
                let value =
                    self.alpha_beta(&child, depth + 1, alpha, beta, action, to_move.opponent());
                best = best.max(value);
                if self.pruning {
                    if best >= beta {
                        self.stats.cutoffs += 1;
                        return best; // Beta Cutoff
                    }
                    alpha = alpha.max(best);
                }
            }
            best
        } else {
            let mut worst = self.ceiling();
            for action in children {
                let child = self.movegen.child(node, action, to_move);
                let value =
                    self.alpha_beta(&child, depth + 1, alpha, beta, action, to_move.opponent());
                worst = worst.min(value);
                if self.pruning {
                    if worst <= alpha {
                        self.stats.cutoffs += 1;
                        return worst; // Alpha Cutoff
                    }
                    beta = beta.min(worst);
                }
            }
            worst
        }
    }

    fn leaf(&mut self, node: &Board, depth: usize, last: Action) -> f32 {
        self.stats.leaves += 1;
        let value = self
            .evaluator
            .evaluate(node, self.me, self.me.opponent(), self.movegen);
        log::trace!("leaf after {} at depth {}: {:.2}", last, depth, value);
        value
    }

    fn out_of_time(&mut self) -> bool {
        if !self.clock.exhausted() {
            return false;
        }
        if !self.low_time_logged {
            self.low_time_logged = true;
            log::warn!(
                "{} is low on time after {:?}, cutting the search short",
                self.me,
                self.clock.elapsed()
            );
        }
        true
    }
}
