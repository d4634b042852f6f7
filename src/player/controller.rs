use crate::core::{Action, Color};
use crate::player::AgentError;
use std::time::Duration;

/// Remaining time per player in nanoseconds, indexed by [`Color::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemainingTimes(pub [u64; 2]);

impl RemainingTimes {
    pub fn uniform(time: Duration) -> Self {
        let ns = u64::try_from(time.as_nanos()).unwrap_or(u64::MAX);
        RemainingTimes([ns, ns])
    }

    pub fn for_color(&self, color: Color) -> u64 {
        self.0[color.index()]
    }
}

/// プレイヤー操作のtrait
///
/// The host calls `decide` exactly once per turn with the opponent's last
/// placement (if any) and both players' remaining budgets.
pub trait PlayerController {
    fn decide(
        &mut self,
        previous: Option<Action>,
        remaining: &RemainingTimes,
    ) -> Result<Action, AgentError>;
    fn color(&self) -> Color;
    fn name(&self) -> &str;
}
