//! Boundary with the world resources jobs reserve.
//!
//! The board never owns items, stockpiles, containers or entities. It only
//! flips their reservation flags through this trait and notifies entities
//! when a connected job goes away. Every call reports whether the target
//! resolved; an unresolved target is treated as absent.

use serde::{Deserialize, Serialize};

use crate::util::{ContainerId, Coordinate, EntityId, ItemId, StockpileId};

/// Reservation flags and notifications exposed by the simulated world.
pub trait WorldResources {
    /// Set an item's reserved flag. Returns `false` if the item does not exist.
    fn set_item_reserved(&mut self, item: ItemId, reserved: bool) -> bool;

    /// Set the reserved flag of one storage spot.
    ///
    /// Returns `false` if the stockpile does not exist or does not cover
    /// `spot`.
    fn set_spot_reserved(&mut self, stockpile: StockpileId, spot: Coordinate, reserved: bool)
        -> bool;

    /// Claim (`true`) or free (`false`) one capacity slot of a container.
    ///
    /// Returns `false` if the container does not exist.
    fn set_space_reserved(&mut self, container: ContainerId, reserved: bool) -> bool;

    /// Tell an entity that the job connected to it is gone.
    ///
    /// Returns `false` if the entity does not exist.
    fn cancel_job(&mut self, entity: EntityId) -> bool;
}

/// A construction site as seen by job factories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Construction {
    /// Entity id of the construction.
    pub id: EntityId,
    /// Tile the construction occupies.
    pub position: Coordinate,
}

impl<T: WorldResources + ?Sized> WorldResources for &mut T {
    fn set_item_reserved(&mut self, item: ItemId, reserved: bool) -> bool {
        (**self).set_item_reserved(item, reserved)
    }

    fn set_spot_reserved(&mut self, stockpile: StockpileId, spot: Coordinate, reserved: bool)
        -> bool {
        (**self).set_spot_reserved(stockpile, spot, reserved)
    }

    fn set_space_reserved(&mut self, container: ContainerId, reserved: bool) -> bool {
        (**self).set_space_reserved(container, reserved)
    }

    fn cancel_job(&mut self, entity: EntityId) -> bool {
        (**self).cancel_job(entity)
    }
}
