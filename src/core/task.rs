//! Task vocabulary: the primitive steps a job is made of.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::{Coordinate, EntityId, ItemCategory};

/// Label rendered for action kinds that have no entry in the label table.
pub const UNKNOWN_ACTION_LABEL: &str = "???";

/// Kind of primitive step an agent performs.
///
/// New kinds may be added at any time; match with a wildcard arm.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Walk onto the target tile.
    Move,
    /// Walk next to the target tile.
    MoveAdjacent,
    /// Walk somewhere close to the target tile.
    MoveNear,
    /// Work on a construction.
    Build,
    /// Pick up an item.
    Take,
    /// Put down the carried item.
    Drop,
    /// Put the carried item into a container.
    PutIn,
    /// Use a workshop or device.
    Use,
    /// Attack the target.
    Kill,
    /// Leave the map.
    Flee,
    /// Sleep in place.
    Sleep,
    /// Tear down a construction.
    Dismantle,
    /// Equip a weapon.
    Wield,
    /// Equip armor.
    Wear,
    /// Eat the carried item.
    Eat,
    /// Drink from the target.
    Drink,
    /// Cut down a tree.
    Fell,
    /// Harvest a wild plant.
    Harvest,
    /// Dig the target tile.
    Dig,
    /// Fill a container at the target.
    Fill,
    /// Repair a damaged construction.
    Repair,
    /// Idle for a while.
    Wait,
}

const ACTION_LABELS: &[(Action, &str)] = &[
    (Action::Move, "Move"),
    (Action::MoveAdjacent, "Move adjacent"),
    (Action::Build, "Build"),
    (Action::Take, "Pick up"),
    (Action::Drop, "Drop"),
    (Action::PutIn, "Put in"),
    (Action::Use, "Use"),
];

/// Human-readable label for an action kind.
///
/// Kinds without a label render [`UNKNOWN_ACTION_LABEL`].
pub fn describe(action: Action) -> &'static str {
    ACTION_LABELS
        .iter()
        .find(|(kind, _)| *kind == action)
        .map_or(UNKNOWN_ACTION_LABEL, |&(_, label)| label)
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(describe(*self))
    }
}

/// One primitive step of a job. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    action: Action,
    target: Coordinate,
    entity: Option<EntityId>,
    item_category: Option<ItemCategory>,
}

impl Task {
    /// Step performing `action` at `target`.
    pub const fn new(action: Action, target: Coordinate) -> Self {
        Self {
            action,
            target,
            entity: None,
            item_category: None,
        }
    }

    /// Attach the entity this step acts on.
    #[must_use]
    pub const fn with_entity(mut self, entity: EntityId) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Attach an item category qualifier.
    #[must_use]
    pub const fn with_item_category(mut self, category: ItemCategory) -> Self {
        self.item_category = Some(category);
        self
    }

    /// Action kind.
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Target tile.
    pub const fn target(&self) -> Coordinate {
        self.target
    }

    /// Entity acted on, if any. The entity may no longer exist.
    pub const fn entity(&self) -> Option<EntityId> {
        self.entity
    }

    /// Item category qualifier, if any.
    pub const fn item_category(&self) -> Option<ItemCategory> {
        self.item_category
    }
}
