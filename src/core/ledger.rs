//! Who holds which reservation.
//!
//! World resources only know *whether* they are reserved. The ledger records
//! *which job* holds each claim so the board can refuse a second claimant and
//! answer holder queries. Items and stockpile spots are exclusive; a
//! container hands out capacity slots, one per job.

use std::collections::HashMap;

use crate::util::{ContainerId, Coordinate, ItemId, JobId, StockpileId};

/// Result of checking whether a job may claim a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Claim {
    /// Nobody holds it.
    Free,
    /// The asking job already holds it.
    HeldBySelf,
    /// Another job holds it.
    HeldBy(JobId),
}

/// Claim bookkeeping for items, stockpile spots and container slots.
#[derive(Debug, Default)]
pub struct ReservationLedger {
    items: HashMap<ItemId, JobId>,
    spots: HashMap<(StockpileId, Coordinate), JobId>,
    spaces: HashMap<ContainerId, Vec<JobId>>,
}

impl ReservationLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Job holding `item`, if any.
    pub fn item_holder(&self, item: ItemId) -> Option<JobId> {
        self.items.get(&item).copied()
    }

    /// Job holding the spot, if any.
    pub fn spot_holder(&self, stockpile: StockpileId, spot: Coordinate) -> Option<JobId> {
        self.spots.get(&(stockpile, spot)).copied()
    }

    /// Jobs holding a slot in `container`.
    pub fn space_holders(&self, container: ContainerId) -> &[JobId] {
        self.spaces.get(&container).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of claims of every kind.
    pub fn len(&self) -> usize {
        self.items.len() + self.spots.len() + self.spaces.values().map(Vec::len).sum::<usize>()
    }

    /// Whether no claim is recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check an item claim. A conflicting claim trips a debug assertion.
    pub fn check_item(&self, item: ItemId, job: JobId) -> Claim {
        let claim = classify(self.item_holder(item), job);
        if let Claim::HeldBy(holder) = claim {
            report_conflict(&format!("{item}"), holder, job);
        }
        claim
    }

    /// Check a spot claim. A conflicting claim trips a debug assertion.
    pub fn check_spot(&self, stockpile: StockpileId, spot: Coordinate, job: JobId) -> Claim {
        let claim = classify(self.spot_holder(stockpile, spot), job);
        if let Claim::HeldBy(holder) = claim {
            report_conflict(&format!("{stockpile} spot {spot}"), holder, job);
        }
        claim
    }

    /// Check a container slot claim. Slots are shared, so this never
    /// reports another holder.
    pub fn check_space(&self, container: ContainerId, job: JobId) -> Claim {
        if self.space_holders(container).contains(&job) {
            Claim::HeldBySelf
        } else {
            Claim::Free
        }
    }

    /// Record `job` as holder of `item`.
    pub fn record_item(&mut self, item: ItemId, job: JobId) {
        self.items.insert(item, job);
    }

    /// Record `job` as holder of the spot.
    pub fn record_spot(&mut self, stockpile: StockpileId, spot: Coordinate, job: JobId) {
        self.spots.insert((stockpile, spot), job);
    }

    /// Record a container slot held by `job`.
    pub fn record_space(&mut self, container: ContainerId, job: JobId) {
        self.spaces.entry(container).or_default().push(job);
    }

    /// Drop the item claim if `job` holds it.
    pub fn release_item(&mut self, item: ItemId, job: JobId) -> bool {
        if self.items.get(&item) == Some(&job) {
            self.items.remove(&item);
            true
        } else {
            false
        }
    }

    /// Drop the spot claim if `job` holds it.
    pub fn release_spot(&mut self, stockpile: StockpileId, spot: Coordinate, job: JobId) -> bool {
        let key = (stockpile, spot);
        if self.spots.get(&key) == Some(&job) {
            self.spots.remove(&key);
            true
        } else {
            false
        }
    }

    /// Drop the container slot held by `job`.
    pub fn release_space(&mut self, container: ContainerId, job: JobId) -> bool {
        let Some(holders) = self.spaces.get_mut(&container) else {
            return false;
        };
        let Some(pos) = holders.iter().position(|h| *h == job) else {
            return false;
        };
        holders.swap_remove(pos);
        if holders.is_empty() {
            self.spaces.remove(&container);
        }
        true
    }
}

fn classify(holder: Option<JobId>, job: JobId) -> Claim {
    match holder {
        None => Claim::Free,
        Some(h) if h == job => Claim::HeldBySelf,
        Some(h) => Claim::HeldBy(h),
    }
}

fn report_conflict(resource: &str, holder: JobId, job: JobId) {
    if !cfg!(debug_assertions) {
        tracing::warn!(%resource, %holder, %job, "resource already reserved by another job");
    }
    debug_assert!(
        false,
        "{resource} already reserved by {holder}, claimed again by {job}"
    );
}
