use serde::{Deserialize, Serialize};

use crate::error::EmptyCommands;

/// Sorted rotation command thresholds.
///
/// Construction sorts the commands and rejects an empty list, so
/// [`Thresholds::partition`] can always index the first and last element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>")]
pub struct Thresholds(Vec<i64>);

impl TryFrom<Vec<i64>> for Thresholds {
    type Error = EmptyCommands;

    fn try_from(commands: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(commands)
    }
}

impl Thresholds {
    pub fn new(mut commands: Vec<i64>) -> Result<Self, EmptyCommands> {
        if commands.is_empty() {
            return Err(EmptyCommands);
        }
        commands.sort_unstable();
        Ok(Self(commands))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; construction rejects empty command lists. Paired with
    /// [`Thresholds::len`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Returns the index in `[0, len]` that `x` would occupy among the
    /// sorted commands, biased toward the first equal element among
    /// duplicates.
    ///
    /// The equality branch keeps `hi = mid` rather than `mid - 1`. Rotation
    /// amounts for command lists with duplicates depend on this exact
    /// convergence, so it is not interchangeable with
    /// `slice::partition_point`.
    pub fn partition(&self, x: i64) -> usize {
        let cmds = &self.0;
        let mut lo = 0;
        let mut hi = cmds.len() - 1;

        if x > cmds[hi] {
            return hi + 1;
        } else if x < cmds[lo] {
            return lo;
        }

        // cmds[0] <= x <= cmds[hi] from here on, so the `x < cmds[mid]`
        // branch is unreachable for mid == 0 and `mid - 1` cannot underflow.
        while lo < hi {
            let mid = (lo + hi) / 2;
            if x < cmds[mid] {
                hi = mid - 1;
            } else if x > cmds[mid] {
                lo = mid + 1;
            } else {
                // Duplicates: close in on the first matching entry. `mid`
                // is strictly below `hi` here, so the loop makes progress.
                hi = mid;
            }
        }

        lo
    }
}
