//! In-memory world with items, stockpiles, containers and entities.
//!
//! Used by tests, benchmarks and hosts that keep their world state in plain
//! maps. Removing a resource leaves any job reference to it dangling, which
//! the board treats as absent.

use std::collections::HashMap;

use tracing::warn;

use crate::core::world::{Construction, WorldResources};
use crate::util::{ContainerId, Coordinate, EntityId, ItemCategory, ItemId, StockpileId};

/// State of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemState {
    /// Where the item lies.
    pub position: Coordinate,
    /// Item category, if classified.
    pub category: Option<ItemCategory>,
    /// Whether a job has claimed the item.
    pub reserved: bool,
    /// Times the item went from reserved to free.
    pub releases: u32,
}

/// State of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerState {
    /// Total capacity slots.
    pub capacity: u32,
    /// Slots claimed by jobs.
    pub reserved: u32,
}

impl ContainerState {
    /// Slots not yet claimed.
    pub const fn free_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.reserved)
    }
}

/// Plain-map world backend.
#[derive(Debug, Default)]
pub struct InMemoryWorld {
    next_id: u32,
    items: HashMap<ItemId, ItemState>,
    stockpiles: HashMap<StockpileId, HashMap<Coordinate, bool>>,
    containers: HashMap<ContainerId, ContainerState>,
    entities: HashMap<EntityId, u32>,
    constructions: HashMap<EntityId, Construction>,
}

impl InMemoryWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an unreserved item.
    pub fn add_item(&mut self, position: Coordinate, category: Option<ItemCategory>) -> ItemId {
        let id = ItemId(self.allocate());
        self.items.insert(
            id,
            ItemState {
                position,
                category,
                reserved: false,
                releases: 0,
            },
        );
        id
    }

    /// Delete an item.
    pub fn remove_item(&mut self, item: ItemId) -> Option<ItemState> {
        self.items.remove(&item)
    }

    /// Item state, if the item exists.
    pub fn item(&self, item: ItemId) -> Option<&ItemState> {
        self.items.get(&item)
    }

    /// Whether the item exists and is reserved.
    pub fn item_reserved(&self, item: ItemId) -> bool {
        self.items.get(&item).is_some_and(|i| i.reserved)
    }

    /// Create a stockpile covering `spots`.
    pub fn add_stockpile(&mut self, spots: impl IntoIterator<Item = Coordinate>) -> StockpileId {
        let id = StockpileId(self.allocate());
        self.stockpiles
            .insert(id, spots.into_iter().map(|c| (c, false)).collect());
        id
    }

    /// Delete a stockpile.
    pub fn remove_stockpile(&mut self, stockpile: StockpileId) -> bool {
        self.stockpiles.remove(&stockpile).is_some()
    }

    /// Whether the spot exists and is reserved.
    pub fn spot_reserved(&self, stockpile: StockpileId, spot: Coordinate) -> bool {
        self.stockpiles
            .get(&stockpile)
            .and_then(|spots| spots.get(&spot))
            .copied()
            .unwrap_or(false)
    }

    /// Create a container with `capacity` slots.
    pub fn add_container(&mut self, capacity: u32) -> ContainerId {
        let id = ContainerId(self.allocate());
        self.containers.insert(
            id,
            ContainerState {
                capacity,
                reserved: 0,
            },
        );
        id
    }

    /// Delete a container.
    pub fn remove_container(&mut self, container: ContainerId) -> Option<ContainerState> {
        self.containers.remove(&container)
    }

    /// Container state, if the container exists.
    pub fn container(&self, container: ContainerId) -> Option<&ContainerState> {
        self.containers.get(&container)
    }

    /// Spawn an entity.
    pub fn add_entity(&mut self) -> EntityId {
        let id = EntityId(self.allocate());
        self.entities.insert(id, 0);
        id
    }

    /// Delete an entity and any construction it represents.
    pub fn remove_entity(&mut self, entity: EntityId) -> bool {
        self.constructions.remove(&entity);
        self.entities.remove(&entity).is_some()
    }

    /// Times the entity was told its job went away.
    pub fn cancelled_jobs(&self, entity: EntityId) -> u32 {
        self.entities.get(&entity).copied().unwrap_or(0)
    }

    /// Place a construction site.
    pub fn add_construction(&mut self, position: Coordinate) -> Construction {
        let id = self.add_entity();
        let construction = Construction { id, position };
        self.constructions.insert(id, construction);
        construction
    }

    /// Construction site, if it still exists.
    pub fn construction(&self, id: EntityId) -> Option<Construction> {
        self.constructions.get(&id).copied()
    }

    /// Reservation flags currently set across items, spots and containers.
    pub fn reserved_count(&self) -> usize {
        let items = self.items.values().filter(|i| i.reserved).count();
        let spots = self
            .stockpiles
            .values()
            .flat_map(HashMap::values)
            .filter(|reserved| **reserved)
            .count();
        let slots: usize = self.containers.values().map(|c| c.reserved as usize).sum();
        items + spots + slots
    }
}

impl WorldResources for InMemoryWorld {
    fn set_item_reserved(&mut self, item: ItemId, reserved: bool) -> bool {
        let Some(state) = self.items.get_mut(&item) else {
            return false;
        };
        if state.reserved && !reserved {
            state.releases += 1;
        }
        state.reserved = reserved;
        true
    }

    fn set_spot_reserved(&mut self, stockpile: StockpileId, spot: Coordinate, reserved: bool)
        -> bool {
        match self
            .stockpiles
            .get_mut(&stockpile)
            .and_then(|spots| spots.get_mut(&spot))
        {
            Some(flag) => {
                *flag = reserved;
                true
            }
            None => false,
        }
    }

    fn set_space_reserved(&mut self, container: ContainerId, reserved: bool) -> bool {
        let Some(state) = self.containers.get_mut(&container) else {
            return false;
        };
        if reserved {
            state.reserved += 1;
            if state.reserved > state.capacity {
                warn!(%container, reserved = state.reserved, capacity = state.capacity, "container over-reserved");
            }
        } else {
            state.reserved = state.reserved.saturating_sub(1);
        }
        true
    }

    fn cancel_job(&mut self, entity: EntityId) -> bool {
        match self.entities.get_mut(&entity) {
            Some(cancelled) => {
                *cancelled += 1;
                true
            }
            None => false,
        }
    }
}
