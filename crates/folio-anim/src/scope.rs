//! Per-view timeline ownership.
//!
//! A mounted view owns a [`ViewScope`]. Everything the view animates is
//! spawned through it, and on unmount the view releases exactly what it
//! spawned. A scope dropped without being released still stops its
//! timelines: the animator drops them on its next tick without sampling.

use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::debug;

use crate::animator::{Animator, TimelineId};
use crate::timeline::Timeline;
use crate::track::Target;

struct Owned {
    id: TimelineId,
    targets: BTreeSet<Target>,
}

/// The timelines one mounted view has created.
pub struct ViewScope {
    name: String,
    token: Rc<()>,
    owned: Vec<Owned>,
}

impl ViewScope {
    /// Empty scope for a view.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: Rc::new(()),
            owned: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spawn a timeline owned by this scope.
    ///
    /// A view drives each target from at most one timeline: any timeline this
    /// scope already owns that writes to one of the new timeline's targets is
    /// cancelled first.
    pub fn spawn(&mut self, animator: &mut Animator, timeline: Timeline) -> TimelineId {
        let targets = timeline.targets();
        let (replaced, kept): (Vec<Owned>, Vec<Owned>) = std::mem::take(&mut self.owned)
            .into_iter()
            .partition(|owned| !owned.targets.is_disjoint(&targets));
        self.owned = kept;
        for owned in replaced {
            debug!(view = %self.name, id = %owned.id, "Replacing timeline on shared target");
            animator.remove(owned.id);
        }

        let id = animator.insert(timeline, Rc::downgrade(&self.token));
        self.owned.push(Owned { id, targets });
        id
    }

    /// Cancel one of this scope's timelines. Ids the scope does not own are ignored.
    pub fn cancel(&mut self, animator: &mut Animator, id: TimelineId) -> bool {
        let Some(pos) = self.owned.iter().position(|owned| owned.id == id) else {
            return false;
        };
        self.owned.swap_remove(pos);
        animator.remove(id)
    }

    /// Cancel every timeline this scope spawned. Returns how many were live.
    pub fn release(&mut self, animator: &mut Animator) -> usize {
        let cancelled = self
            .owned
            .drain(..)
            .filter(|owned| animator.remove(owned.id))
            .count();
        debug!(view = %self.name, cancelled, "View scope released");
        cancelled
    }

    /// Whether this scope spawned `id` and has not cancelled it.
    pub fn owns(&self, id: TimelineId) -> bool {
        self.owned.iter().any(|owned| owned.id == id)
    }

    /// Ids of the timelines this scope currently owns.
    pub fn ids(&self) -> impl Iterator<Item = TimelineId> + '_ {
        self.owned.iter().map(|owned| owned.id)
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        if !self.owned.is_empty() {
            debug!(
                view = %self.name,
                remaining = self.owned.len(),
                "View scope dropped unreleased; animator will discard its timelines"
            );
        }
    }
}
