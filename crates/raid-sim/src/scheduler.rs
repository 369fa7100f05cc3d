//! Deferred one-shot tasks on the shared tick clock.
//!
//! Tasks name their session by id and are re-resolved when they fire. A
//! task whose session is gone does nothing; there is no cancellation.

use std::collections::BTreeMap;

use raid_core::types::SessionId;

use crate::spawner::SpawnGroup;

/// Work scheduled to run once at a future tick.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredTask {
    /// End of the join grace period.
    StartFirstWave { session: SessionId },
    /// End of a wave break.
    ResumeAfterBreak { session: SessionId },
    /// End of the break after the final wave.
    FinishVictory { session: SessionId },
    /// One progressive spawn group of `wave`.
    SpawnGroup {
        session: SessionId,
        wave: u32,
        group: SpawnGroup,
    },
}

impl DeferredTask {
    pub fn session(&self) -> SessionId {
        match self {
            DeferredTask::StartFirstWave { session }
            | DeferredTask::ResumeAfterBreak { session }
            | DeferredTask::FinishVictory { session }
            | DeferredTask::SpawnGroup { session, .. } => *session,
        }
    }
}

/// Tasks ordered by due tick, then by scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: BTreeMap<(u64, u64), DeferredTask>,
    next_seq: u64,
}

impl Scheduler {
    pub fn schedule(&mut self, due_tick: u64, task: DeferredTask) {
        self.tasks.insert((due_tick, self.next_seq), task);
        self.next_seq += 1;
    }

    /// Remove and return every task due at or before `now`, in order.
    pub fn take_due(&mut self, now: u64) -> Vec<DeferredTask> {
        let later = self.tasks.split_off(&(now + 1, 0));
        let due = std::mem::replace(&mut self.tasks, later);
        due.into_values().collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Outstanding tasks that refer to `session`.
    pub fn pending_for(&self, session: SessionId) -> usize {
        self.tasks.values().filter(|t| t.session() == session).count()
    }

    /// Due tick of the earliest outstanding task.
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.keys().next().map(|(tick, _)| *tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_in_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(10, DeferredTask::FinishVictory { session: SessionId(2) });
        scheduler.schedule(5, DeferredTask::StartFirstWave { session: SessionId(1) });
        scheduler.schedule(10, DeferredTask::ResumeAfterBreak { session: SessionId(3) });
        scheduler.schedule(11, DeferredTask::StartFirstWave { session: SessionId(4) });

        assert!(scheduler.take_due(4).is_empty());
        assert_eq!(scheduler.next_due(), Some(5));

        let due = scheduler.take_due(10);
        let sessions: Vec<_> = due.iter().map(DeferredTask::session).collect();
        assert_eq!(sessions, vec![SessionId(1), SessionId(2), SessionId(3)]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.pending_for(SessionId(4)), 1);
    }
}
