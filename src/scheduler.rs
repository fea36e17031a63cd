//! Cooperative, single-threaded task scheduler.
//!
//! Every tick resumes each task that was active when the tick began exactly
//! once, in registration order.  Tasks spawned during a tick are queued and
//! first run on the following tick.  A task that completes is dropped at
//! once, so it can never be resumed again.  A task that returns an error is
//! dropped and logged; the rest of the tick carries on.

use std::fmt;

use crate::error::TaskError;

/// Outcome of one resumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Did one bounded unit of work; resume again next tick.
    Suspended,
    /// Finished; remove from the active set.
    Completed,
}

/// A resumable unit of behaviour driven by the [`Scheduler`].
///
/// `resume` must return promptly.  A task that loops forever without
/// returning stalls the whole game; that is an authoring bug.
pub trait Task<C> {
    /// Short label used in logs and task counts.
    fn name(&self) -> &'static str;

    fn resume(&mut self, ctx: &mut C, spawner: &mut Spawner<C>) -> Result<Step, TaskError>;
}

/// Collects tasks spawned while a tick is in progress.
pub struct Spawner<C> {
    pending: Vec<Box<dyn Task<C>>>,
}

impl<C> Default for Spawner<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Spawner<C> {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    pub fn spawn<T: Task<C> + 'static>(&mut self, task: T) {
        self.pending.push(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Slot<C> {
    id: TaskId,
    task: Box<dyn Task<C>>,
}

/// What happened during one call to [`Scheduler::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub resumed: usize,
    pub completed: usize,
    pub faulted: usize,
    pub spawned: usize,
}

pub struct Scheduler<C> {
    active: Vec<Slot<C>>,
    next_id: u64,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a task; it runs from the next tick on.
    pub fn spawn<T: Task<C> + 'static>(&mut self, task: T) -> TaskId {
        self.push(Box::new(task))
    }

    fn push(&mut self, task: Box<dyn Task<C>>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        log::debug!("spawned {} {}", task.name(), id);
        self.active.push(Slot { id, task });
        id
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of active tasks with the given name.
    pub fn count(&self, name: &str) -> usize {
        self.active.iter().filter(|s| s.task.name() == name).count()
    }

    /// Ids of active tasks, in resumption order.
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.active.iter().map(|s| s.id).collect()
    }

    /// Resume every task active at the start of the tick once.
    pub fn tick(&mut self, ctx: &mut C) -> TickReport {
        let snapshot = std::mem::take(&mut self.active);
        let mut spawner = Spawner::new();
        let mut report = TickReport::default();
        let mut survivors = Vec::with_capacity(snapshot.len());

        for mut slot in snapshot {
            report.resumed += 1;
            match slot.task.resume(ctx, &mut spawner) {
                Ok(Step::Suspended) => survivors.push(slot),
                Ok(Step::Completed) => {
                    report.completed += 1;
                    log::debug!("{} {} completed", slot.task.name(), slot.id);
                }
                Err(err) => {
                    report.faulted += 1;
                    log::warn!("{} {} faulted and was removed: {}", slot.task.name(), slot.id, err);
                }
            }
        }

        self.active = survivors;
        report.spawned = spawner.pending.len();
        for task in spawner.pending {
            self.push(task);
        }
        report
    }
}
