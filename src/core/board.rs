//! Job board: the arena that owns every job and resolves the references
//! between them.
//!
//! Jobs address each other and world resources by id, so a "weak reference"
//! is a map lookup that may come back empty. The board is the only place that
//! can see across jobs, which makes it the home of:
//!
//! - **Eligibility**: prerequisite and parent checks.
//! - **Failure cascade**: a failed job fails its parent chain, bounded by a
//!   visited set and [`BoardConfig::max_cascade_depth`].
//! - **Reservations**: claims on items, stockpile spots and container slots,
//!   recorded in a [`ReservationLedger`] and mirrored into the world.
//! - **Teardown**: destroying a job releases everything it holds, exactly once.
//!
//! The board is single-threaded by contract. Wrap it in a lock if more than
//! one thread needs it.
//!
//! # Example
//!
//! ```
//! use colony_jobs::builders::move_job;
//! use colony_jobs::core::JobBoard;
//! use colony_jobs::infra::world::memory::InMemoryWorld;
//! use colony_jobs::util::Coordinate;
//!
//! let mut world = InMemoryWorld::new();
//! let item = world.add_item(Coordinate::new(1, 1), None);
//!
//! let mut board = JobBoard::new(world);
//! let haul = board.insert(move_job(Coordinate::new(4, 2)));
//! assert!(board.reserve_item(haul, item).unwrap());
//!
//! board.fail(haul).unwrap();
//! assert_eq!(board.reap(), vec![haul]);
//! assert!(!board.world().item_reserved(item));
//! ```

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::{BoardConfig, JobConfig};
use crate::core::audit::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};
use crate::core::error::JobError;
use crate::core::job::{CompletionState, Job};
use crate::core::ledger::{Claim, ReservationLedger};
use crate::core::world::WorldResources;
use crate::util::{ContainerId, Coordinate, EntityId, ItemId, JobId, StockpileId};

/// Owning store of jobs plus the world they reserve resources in.
pub struct JobBoard<W: WorldResources> {
    config: BoardConfig,
    jobs: BTreeMap<JobId, Job>,
    next_id: u32,
    ledger: ReservationLedger,
    world: W,
    audit: Option<Arc<Mutex<dyn AuditSink>>>,
}

impl<W: WorldResources> JobBoard<W> {
    /// Create an empty board with default configuration.
    pub fn new(world: W) -> Self {
        Self {
            config: BoardConfig::default(),
            jobs: BTreeMap::new(),
            next_id: 0,
            ledger: ReservationLedger::new(),
            world,
            audit: None,
        }
    }

    /// Create an empty board with validated configuration.
    pub fn with_config(config: BoardConfig, world: W) -> Result<Self, JobError> {
        config.validate().map_err(JobError::InvalidConfig)?;
        let mut board = Self::new(world);
        board.config = config;
        Ok(board)
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<Mutex<dyn AuditSink>>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Attach a fresh in-memory sink holding up to
    /// [`BoardConfig::audit_capacity`] events and return it for reading.
    pub fn attach_memory_audit(&mut self) -> Arc<Mutex<InMemoryAuditSink>> {
        let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(self.config.audit_capacity)));
        let shared: Arc<Mutex<dyn AuditSink>> = sink.clone();
        self.audit = Some(shared);
        sink
    }

    /// Board configuration.
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The world resources are reserved in.
    pub const fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Claim bookkeeping.
    pub const fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    /// Add a job and return its id. Ids are never reused.
    ///
    /// The job enters unlinked and holding nothing. Links, reservations and
    /// the connected entity carried by a cloned job are dropped.
    pub fn insert(&mut self, mut job: Job) -> JobId {
        let id = JobId(self.next_id);
        self.next_id += 1;
        job.detach();
        debug!(job = %id, name = job.name(), "job created");
        self.jobs.insert(id, job);
        self.record(id, AuditAction::Created, None);
        id
    }

    /// Validate `config`, then add a task-less job built from it.
    pub fn create(&mut self, config: JobConfig) -> Result<JobId, JobError> {
        config.validate().map_err(JobError::InvalidConfig)?;
        Ok(self.insert(Job::new(config)))
    }

    /// Look up a job.
    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(&id)
    }

    /// Look up a job mutably.
    pub fn get_mut(&mut self, id: JobId) -> Option<&mut Job> {
        self.jobs.get_mut(&id)
    }

    /// Whether the job is still on the board.
    pub fn contains(&self, id: JobId) -> bool {
        self.jobs.contains_key(&id)
    }

    /// Number of jobs on the board.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the board holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (JobId, &Job)> {
        self.jobs.iter().map(|(id, job)| (*id, job))
    }

    fn job(&self, id: JobId) -> Result<&Job, JobError> {
        self.jobs.get(&id).ok_or(JobError::UnknownJob(id))
    }

    fn job_mut(&mut self, id: JobId) -> Result<&mut Job, JobError> {
        self.jobs.get_mut(&id).ok_or(JobError::UnknownJob(id))
    }

    // ------------------------------------------------------------------
    // Graph links
    // ------------------------------------------------------------------

    /// Make `parent` the parent of `child`.
    ///
    /// Both jobs must be on the board. Self links and links that would close
    /// a loop in the parent chain are rejected.
    pub fn set_parent(&mut self, child: JobId, parent: JobId) -> Result<(), JobError> {
        self.job(child)?;
        self.job(parent)?;
        if child == parent {
            return Err(JobError::SelfReference(child));
        }
        if self.ancestors(parent).contains(&child) {
            return Err(JobError::ParentCycle { child, parent });
        }
        self.job_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from its parent.
    pub fn clear_parent(&mut self, child: JobId) -> Result<(), JobError> {
        self.job_mut(child)?.parent = None;
        Ok(())
    }

    /// Append `prerequisite` to the prerequisites of `job`.
    pub fn add_prerequisite(&mut self, job: JobId, prerequisite: JobId) -> Result<(), JobError> {
        self.job(prerequisite)?;
        if job == prerequisite {
            return Err(JobError::SelfReference(job));
        }
        let entry = self.job_mut(job)?;
        if !entry.prerequisites.contains(&prerequisite) {
            entry.prerequisites.push(prerequisite);
        }
        Ok(())
    }

    /// Set the entity told to drop its job when `job` is destroyed.
    pub fn connect_to_entity(&mut self, job: JobId, entity: EntityId) -> Result<(), JobError> {
        self.job_mut(job)?.connected_entity = Some(entity);
        Ok(())
    }

    /// Resolvable ancestors of `id`, nearest first. Stops at a repeated job.
    fn ancestors(&self, id: JobId) -> Vec<JobId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut cursor = self.jobs.get(&id).and_then(Job::parent);
        while let Some(next) = cursor {
            if !self.jobs.contains_key(&next) || !seen.insert(next) {
                break;
            }
            chain.push(next);
            cursor = self.jobs.get(&next).and_then(Job::parent);
        }
        chain
    }

    // ------------------------------------------------------------------
    // Eligibility
    // ------------------------------------------------------------------

    /// Whether every live prerequisite has finished.
    ///
    /// Destroyed prerequisites count as satisfied. A failed prerequisite
    /// counts as finished unless the board runs with strict prerequisites.
    pub fn prerequisites_satisfied(&self, id: JobId) -> Result<bool, JobError> {
        let job = self.job(id)?;
        Ok(job
            .prerequisites
            .iter()
            .filter_map(|p| self.jobs.get(p))
            .all(|p| self.prerequisite_done(p)))
    }

    fn prerequisite_done(&self, prerequisite: &Job) -> bool {
        if self.config.strict_prerequisites {
            prerequisite.completion() == CompletionState::Success
        } else {
            prerequisite.completed()
        }
    }

    /// Whether the parent is gone or has finished.
    pub fn parent_satisfied(&self, id: JobId) -> Result<bool, JobError> {
        let job = self.job(id)?;
        Ok(job
            .parent
            .and_then(|p| self.jobs.get(&p))
            .is_none_or(Job::completed))
    }

    /// Whether an agent may work on the job this tick: ongoing, not paused,
    /// not waiting for removal, and with prerequisites satisfied.
    pub fn eligible(&self, id: JobId) -> Result<bool, JobError> {
        let job = self.job(id)?;
        Ok(!job.completed()
            && !job.paused()
            && !job.removable()
            && self.prerequisites_satisfied(id)?)
    }

    // ------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------

    /// Mark a job successful. Returns `false` if it had already finished.
    pub fn complete(&mut self, id: JobId) -> Result<bool, JobError> {
        let changed = self.job_mut(id)?.complete();
        if changed {
            debug!(job = %id, "job completed");
            self.record(id, AuditAction::Completed, None);
        }
        Ok(changed)
    }

    /// Count an attempt on the job and report whether the gate is still open.
    pub fn attempt(&mut self, id: JobId) -> Result<bool, JobError> {
        let job = self.job_mut(id)?;
        let open = job.attempt();
        if !open {
            debug!(job = %id, attempts = job.attempts(), limit = job.attempt_limit(), "attempt gate closed");
        }
        Ok(open)
    }

    /// Flag a job for reaping.
    pub fn remove(&mut self, id: JobId) -> Result<(), JobError> {
        self.job_mut(id)?.remove();
        Ok(())
    }

    /// Fail a job and, through it, its whole parent chain.
    ///
    /// The job's prerequisites are detached (not failed) and the job is
    /// flagged for reaping. Parents are failed depth-first before this
    /// returns. A job that had already finished keeps its state, but the
    /// cascade still passes through it to its own parent.
    pub fn fail(&mut self, id: JobId) -> Result<(), JobError> {
        self.job(id)?;
        let mut visited = HashSet::from([id]);
        self.fail_chain(id, 0, &mut visited);
        Ok(())
    }

    fn fail_chain(&mut self, id: JobId, depth: usize, visited: &mut HashSet<JobId>) {
        let Some(job) = self.jobs.get_mut(&id) else {
            return;
        };
        let newly_failed = job.finish(CompletionState::Failure);
        let parent = job.parent;
        let state = job.completion();

        if newly_failed {
            let action = if depth == 0 {
                AuditAction::Failed
            } else {
                AuditAction::CascadeFailed
            };
            info!(job = %id, depth, "job failed");
            self.record(id, action, None);
        } else {
            debug!(job = %id, ?state, "job already finished, cascading past it");
        }

        if let Some(parent) = parent.filter(|p| self.jobs.contains_key(p)) {
            if !visited.insert(parent) {
                warn!(job = %id, %parent, "parent cycle detected, cascade stopped");
            } else if depth >= self.config.max_cascade_depth {
                warn!(job = %id, %parent, depth, "cascade depth limit reached");
            } else {
                self.fail_chain(parent, depth + 1, visited);
            }
        }

        if let Some(job) = self.jobs.get_mut(&id) {
            job.prerequisites.clear();
            job.remove();
        }
    }

    // ------------------------------------------------------------------
    // Reservations
    // ------------------------------------------------------------------

    /// Claim an item for the job.
    ///
    /// Returns `false` without side effects if the item does not exist, the
    /// job already holds it, or another job holds it. The last case is a
    /// caller bug and trips a debug assertion.
    pub fn reserve_item(&mut self, id: JobId, item: ItemId) -> Result<bool, JobError> {
        self.job(id)?;
        if self.ledger.check_item(item, id) != Claim::Free {
            return Ok(false);
        }
        if !self.world.set_item_reserved(item, true) {
            debug!(job = %id, %item, "item unresolvable, reservation skipped");
            return Ok(false);
        }
        self.ledger.record_item(item, id);
        self.job_mut(id)?.reserved_items.push(item);
        self.record(id, AuditAction::ReservedItem, Some(item.to_string()));
        Ok(true)
    }

    /// Release every item the job holds. Returns how many were released.
    ///
    /// Items that no longer exist are dropped from the list silently.
    pub fn unreserve_items(&mut self, id: JobId) -> Result<usize, JobError> {
        self.job(id)?;
        Ok(self.release_items(id))
    }

    fn release_items(&mut self, id: JobId) -> usize {
        let Some(job) = self.jobs.get_mut(&id) else {
            return 0;
        };
        let items = std::mem::take(&mut job.reserved_items);
        let mut released = 0;
        for item in items {
            // The world flag belongs to whoever the ledger names.
            if !self.ledger.release_item(item, id) {
                warn!(job = %id, %item, "item listed but not held, left untouched");
                continue;
            }
            self.world.set_item_reserved(item, false);
            self.record(id, AuditAction::ReleasedItem, Some(item.to_string()));
            released += 1;
        }
        released
    }

    /// Claim one storage spot for the job, releasing any spot it held before.
    ///
    /// Returns `false` without side effects if the spot is unresolvable or
    /// already held.
    pub fn reserve_spot(
        &mut self,
        id: JobId,
        stockpile: StockpileId,
        spot: Coordinate,
    ) -> Result<bool, JobError> {
        self.job(id)?;
        if self.ledger.check_spot(stockpile, spot, id) != Claim::Free {
            return Ok(false);
        }
        if !self.world.set_spot_reserved(stockpile, spot, true) {
            debug!(job = %id, %stockpile, %spot, "spot unresolvable, reservation skipped");
            return Ok(false);
        }
        self.release_spot(id);
        self.ledger.record_spot(stockpile, spot, id);
        self.job_mut(id)?.reserved_spot = Some((stockpile, spot));
        self.record(
            id,
            AuditAction::ReservedSpot,
            Some(format!("{stockpile}@{spot}")),
        );
        Ok(true)
    }

    /// Release the job's storage spot. A second call is a no-op.
    pub fn unreserve_spot(&mut self, id: JobId) -> Result<bool, JobError> {
        self.job(id)?;
        Ok(self.release_spot(id))
    }

    fn release_spot(&mut self, id: JobId) -> bool {
        let Some((stockpile, spot)) = self.jobs.get_mut(&id).and_then(|j| j.reserved_spot.take())
        else {
            return false;
        };
        if !self.ledger.release_spot(stockpile, spot, id) {
            warn!(job = %id, %stockpile, %spot, "spot listed but not held, left untouched");
            return false;
        }
        self.world.set_spot_reserved(stockpile, spot, false);
        self.record(
            id,
            AuditAction::ReleasedSpot,
            Some(format!("{stockpile}@{spot}")),
        );
        true
    }

    /// Claim a capacity slot in a container for the job's whole lifetime.
    ///
    /// A slot held in another container is released first. There is no
    /// early release; the slot is freed when the job is destroyed.
    pub fn reserve_space(&mut self, id: JobId, container: ContainerId) -> Result<bool, JobError> {
        self.job(id)?;
        if self.ledger.check_space(container, id) != Claim::Free {
            return Ok(false);
        }
        if !self.world.set_space_reserved(container, true) {
            debug!(job = %id, %container, "container unresolvable, reservation skipped");
            return Ok(false);
        }
        self.release_space(id);
        self.ledger.record_space(container, id);
        self.job_mut(id)?.reserved_space = Some(container);
        self.record(id, AuditAction::ReservedSpace, Some(container.to_string()));
        Ok(true)
    }

    fn release_space(&mut self, id: JobId) {
        let Some(container) = self.jobs.get_mut(&id).and_then(|j| j.reserved_space.take()) else {
            return;
        };
        if !self.ledger.release_space(container, id) {
            warn!(job = %id, %container, "slot listed but not held, left untouched");
            return;
        }
        self.world.set_space_reserved(container, false);
        self.record(id, AuditAction::ReleasedSpace, Some(container.to_string()));
    }

    /// Job holding `item`, if any.
    pub fn holder_of_item(&self, item: ItemId) -> Option<JobId> {
        self.ledger.item_holder(item)
    }

    /// Job holding the storage spot, if any.
    pub fn holder_of_spot(&self, stockpile: StockpileId, spot: Coordinate) -> Option<JobId> {
        self.ledger.spot_holder(stockpile, spot)
    }

    /// Jobs holding a slot in `container`.
    pub fn holders_of_space(&self, container: ContainerId) -> &[JobId] {
        self.ledger.space_holders(container)
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Tear a job down and drop it from the board.
    ///
    /// Clears prerequisites, releases items, releases the spot, notifies the
    /// connected entity, then frees the container slot.
    pub fn destroy(&mut self, id: JobId) -> Result<(), JobError> {
        self.job(id)?;
        self.teardown(id);
        Ok(())
    }

    /// Destroy every job flagged for removal and return their ids.
    pub fn reap(&mut self) -> Vec<JobId> {
        let doomed: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.removable())
            .map(|(id, _)| *id)
            .collect();
        for id in &doomed {
            self.teardown(*id);
        }
        if !doomed.is_empty() {
            info!(count = doomed.len(), "reaped jobs");
        }
        doomed
    }

    fn teardown(&mut self, id: JobId) {
        let Some(job) = self.jobs.get_mut(&id) else {
            return;
        };
        job.prerequisites.clear();
        let entity = job.connected_entity.take();

        self.release_items(id);
        self.release_spot(id);
        if let Some(entity) = entity {
            if self.world.cancel_job(entity) {
                self.record(id, AuditAction::EntityNotified, Some(entity.to_string()));
            }
        }
        self.release_space(id);

        self.record(id, AuditAction::Destroyed, None);
        self.jobs.remove(&id);
        debug!(job = %id, "job destroyed");
    }

    fn record(&self, id: JobId, action: AuditAction, payload: Option<String>) {
        let Some(audit) = &self.audit else {
            return;
        };
        let name = self.jobs.get(&id).map_or("", Job::name);
        audit.lock().record(build_audit_event(id, name, action, payload));
    }
}

impl<W: WorldResources> Drop for JobBoard<W> {
    fn drop(&mut self) {
        let ids: Vec<JobId> = self.jobs.keys().copied().collect();
        for id in ids {
            self.teardown(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::world::memory::InMemoryWorld;

    fn board() -> JobBoard<InMemoryWorld> {
        JobBoard::new(InMemoryWorld::new())
    }

    fn job(board: &mut JobBoard<InMemoryWorld>, name: &str) -> JobId {
        board.create(JobConfig::new(name)).unwrap()
    }

    #[test]
    fn ids_are_not_reused() {
        let mut board = board();
        let a = job(&mut board, "a");
        board.destroy(a).unwrap();
        let b = job(&mut board, "b");
        assert_ne!(a, b);
        assert!(matches!(board.destroy(a), Err(JobError::UnknownJob(id)) if id == a));
    }

    #[test]
    fn create_rejects_invalid_config() {
        let mut board = board();
        let err = board.create(JobConfig::new("x").with_attempt_limit(0));
        assert!(matches!(err, Err(JobError::InvalidConfig(_))));
        assert!(board.is_empty());
    }

    #[test]
    fn parent_links_reject_cycles() {
        let mut board = board();
        let a = job(&mut board, "a");
        let b = job(&mut board, "b");
        let c = job(&mut board, "c");
        board.set_parent(a, b).unwrap();
        board.set_parent(b, c).unwrap();

        assert!(matches!(board.set_parent(c, a), Err(JobError::ParentCycle { .. })));
        assert!(matches!(board.set_parent(a, a), Err(JobError::SelfReference(_))));
        assert!(matches!(board.add_prerequisite(a, a), Err(JobError::SelfReference(_))));
    }

    #[test]
    fn cascade_stops_at_depth_limit() {
        let config = BoardConfig {
            max_cascade_depth: 2,
            ..BoardConfig::default()
        };
        let mut board = JobBoard::with_config(config, InMemoryWorld::new()).unwrap();
        let chain: Vec<JobId> = (0..5).map(|i| job(&mut board, &format!("j{i}"))).collect();
        for pair in chain.windows(2) {
            board.set_parent(pair[0], pair[1]).unwrap();
        }

        board.fail(chain[0]).unwrap();

        let states: Vec<_> = chain
            .iter()
            .map(|id| board.get(*id).unwrap().completion())
            .collect();
        assert_eq!(
            states,
            vec![
                CompletionState::Failure,
                CompletionState::Failure,
                CompletionState::Failure,
                CompletionState::Ongoing,
                CompletionState::Ongoing,
            ]
        );
    }

    #[test]
    fn fail_on_finished_job_keeps_state_but_reaches_parent() {
        let mut board = board();
        let child = job(&mut board, "child");
        let parent = job(&mut board, "parent");
        board.set_parent(child, parent).unwrap();
        board.complete(child).unwrap();

        board.fail(child).unwrap();

        let child_job = board.get(child).unwrap();
        assert_eq!(child_job.completion(), CompletionState::Success);
        assert!(child_job.removable());
        let parent_job = board.get(parent).unwrap();
        assert_eq!(parent_job.completion(), CompletionState::Failure);
        assert!(parent_job.removable());
    }

    #[test]
    fn cascade_passes_through_finished_ancestor() {
        let mut board = board();
        let child = job(&mut board, "child");
        let parent = job(&mut board, "parent");
        let grandparent = job(&mut board, "grandparent");
        board.set_parent(child, parent).unwrap();
        board.set_parent(parent, grandparent).unwrap();
        board.complete(parent).unwrap();

        board.fail(child).unwrap();

        assert_eq!(board.get(parent).unwrap().completion(), CompletionState::Success);
        assert_eq!(
            board.get(grandparent).unwrap().completion(),
            CompletionState::Failure
        );
    }

    #[test]
    fn inserted_clone_starts_detached() {
        let mut board = board();
        let parent = job(&mut board, "parent");
        let original = job(&mut board, "original");
        board.set_parent(original, parent).unwrap();
        board.add_prerequisite(original, parent).unwrap();
        board.connect_to_entity(original, EntityId(4)).unwrap();

        let copy = board.get(original).unwrap().clone();
        let copy = board.insert(copy);

        let copy_job = board.get(copy).unwrap();
        assert_eq!(copy_job.parent(), None);
        assert!(copy_job.prerequisites().is_empty());
        assert_eq!(copy_job.connected_entity(), None);
    }

    #[test]
    fn strict_mode_blocks_on_failed_prerequisite() {
        let config = BoardConfig {
            strict_prerequisites: true,
            ..BoardConfig::default()
        };
        let mut board = JobBoard::with_config(config, InMemoryWorld::new()).unwrap();
        let dep = job(&mut board, "dep");
        let main = job(&mut board, "main");
        board.add_prerequisite(main, dep).unwrap();

        board.fail(dep).unwrap();
        assert!(!board.prerequisites_satisfied(main).unwrap());

        board.destroy(dep).unwrap();
        assert!(board.prerequisites_satisfied(main).unwrap());
    }

    #[test]
    fn eligible_skips_paused_and_finished_jobs() {
        let mut board = board();
        let id = job(&mut board, "dig");
        assert!(board.eligible(id).unwrap());

        board.get_mut(id).unwrap().set_paused(true);
        assert!(!board.eligible(id).unwrap());

        board.get_mut(id).unwrap().set_paused(false);
        board.complete(id).unwrap();
        assert!(!board.eligible(id).unwrap());
    }

    #[test]
    fn audit_records_cascade() {
        let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(64)));
        let mut board = board().with_audit(sink.clone());
        let child = job(&mut board, "child");
        let parent = job(&mut board, "parent");
        board.set_parent(child, parent).unwrap();

        board.fail(child).unwrap();

        let sink = sink.lock();
        assert_eq!(sink.count(AuditAction::Failed), 1);
        assert_eq!(sink.count(AuditAction::CascadeFailed), 1);
        let parent_events = sink.events_for(parent);
        assert_eq!(parent_events.last().unwrap().action, AuditAction::CascadeFailed);
        assert_eq!(parent_events.last().unwrap().job_name, "parent");
    }

    #[test]
    fn memory_audit_honours_configured_capacity() {
        let config = BoardConfig {
            audit_capacity: 3,
            ..BoardConfig::default()
        };
        let mut board = JobBoard::with_config(config, InMemoryWorld::new()).unwrap();
        let sink = board.attach_memory_audit();
        for i in 0..5 {
            job(&mut board, &format!("j{i}"));
        }

        let events = sink.lock().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].job_name, "j2");
    }
}
