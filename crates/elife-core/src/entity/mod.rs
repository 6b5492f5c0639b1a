//! Entity types for the ecosystem.
//!
//! This module provides:
//! - [`EntityId`]: unique identifier for entities within a world
//! - [`EntityKind`]: the closed set of entity variants
//! - [`Body`]: type-safe storage for variant-specific state
//! - [`Entity`]: the complete entity container stored in grid cells
//! - [`IdAllocator`]: monotonic id source owned by a world
//!
//! # Architecture
//!
//! The variant set is closed. Behaviour is dispatched by matching on [`Body`]
//! rather than through trait objects, so every variant's decision rule and
//! every energy rule is visible in one place.
//!
//! # Example
//!
//! ```
//! use elife_core::entity::{Body, Entity, EntityId, EntityKind};
//! use elife_core::entity::components::PlantState;
//!
//! let plant = Entity::new(EntityId::new(7), '*', Body::Plant(PlantState::new(3.0)));
//!
//! assert_eq!(plant.kind(), EntityKind::Plant);
//! assert_eq!(plant.origin(), '*');
//! assert_eq!(plant.energy(), Some(3.0));
//! assert!(plant.is_critter());
//! ```

pub mod components;

use std::fmt;

use elife_grid::Direction;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use components::{BouncingCritterState, PlantEaterState, PlantState};

use crate::action::Action;
use crate::config::EnergyConfig;
use crate::rules;
use crate::view::View;

// =============================================================================
// EntityId
// =============================================================================

/// Unique identifier for an entity.
///
/// Ids are allocated monotonically by the owning world and are never reused,
/// so they identify an entity across moves within a turn.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new `EntityId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out fresh [`EntityId`]s in increasing order.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns a fresh id.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId::new(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next
    }
}

// =============================================================================
// EntityKind
// =============================================================================

/// The closed set of entity variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Inert obstacle. Never acts and cannot be eaten.
    Wall,
    /// Grows in place and spreads into empty neighbouring cells.
    Plant,
    /// Eats plants, wanders, and reproduces when well fed.
    PlantEater,
    /// Wanders in a straight line, picking a new heading when blocked.
    BouncingCritter,
}

impl EntityKind {
    /// All kinds.
    pub const ALL: [Self; 4] = [
        Self::Wall,
        Self::Plant,
        Self::PlantEater,
        Self::BouncingCritter,
    ];

    /// Returns `true` if entities of this kind have a decision rule.
    #[must_use]
    pub const fn is_critter(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Returns `true` if entities of this kind carry energy.
    #[must_use]
    pub const fn has_energy(self) -> bool {
        matches!(self, Self::Plant | Self::PlantEater)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => write!(f, "Wall"),
            Self::Plant => write!(f, "Plant"),
            Self::PlantEater => write!(f, "PlantEater"),
            Self::BouncingCritter => write!(f, "BouncingCritter"),
        }
    }
}

// =============================================================================
// Body
// =============================================================================

/// Variant-specific entity state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Body {
    /// Walls carry no state.
    Wall,
    /// Plant state.
    Plant(PlantState),
    /// Plant-eater state.
    PlantEater(PlantEaterState),
    /// Bouncing critter state.
    BouncingCritter(BouncingCritterState),
}

impl Body {
    /// Builds the default body for a freshly created entity of `kind`.
    ///
    /// Plants draw their starting energy from the configured range, and
    /// bouncing critters pick a random starting heading.
    pub fn fresh<R: Rng + ?Sized>(kind: EntityKind, energy: &EnergyConfig, rng: &mut R) -> Self {
        match kind {
            EntityKind::Wall => Self::Wall,
            EntityKind::Plant => Self::Plant(PlantState::new(energy.plant_energy(rng))),
            EntityKind::PlantEater => {
                Self::PlantEater(PlantEaterState::new(energy.plant_eater_energy))
            }
            EntityKind::BouncingCritter => {
                let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
                Self::BouncingCritter(BouncingCritterState::new(direction))
            }
        }
    }

    /// Returns the kind this body belongs to.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Wall => EntityKind::Wall,
            Self::Plant(_) => EntityKind::Plant,
            Self::PlantEater(_) => EntityKind::PlantEater,
            Self::BouncingCritter(_) => EntityKind::BouncingCritter,
        }
    }

    /// Returns the stored energy, if this body carries any.
    #[must_use]
    pub const fn energy(&self) -> Option<f64> {
        match self {
            Self::Plant(state) => Some(state.energy),
            Self::PlantEater(state) => Some(state.energy),
            Self::Wall | Self::BouncingCritter(_) => None,
        }
    }

    /// Returns mutable access to the stored energy, if this body carries any.
    #[must_use]
    pub fn energy_mut(&mut self) -> Option<&mut f64> {
        match self {
            Self::Plant(state) => Some(&mut state.energy),
            Self::PlantEater(state) => Some(&mut state.energy),
            Self::Wall | Self::BouncingCritter(_) => None,
        }
    }
}

// =============================================================================
// Entity
// =============================================================================

/// A complete entity as stored in a grid cell.
///
/// An `Entity` combines:
/// - A unique [`EntityId`]
/// - The legend glyph that created it (its origin character), which is also
///   how it renders and what type its offspring get
/// - A [`Body`] holding variant state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    origin: char,
    body: Body,
}

impl Entity {
    /// Creates a new entity.
    #[must_use]
    pub const fn new(id: EntityId, origin: char, body: Body) -> Self {
        Self { id, origin, body }
    }

    /// Returns the entity's unique identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the legend glyph that created this entity.
    #[must_use]
    pub const fn origin(&self) -> char {
        self.origin
    }

    /// Returns the entity's kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.body.kind()
    }

    /// Returns a reference to the variant state.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Returns a mutable reference to the variant state.
    #[must_use]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Returns the stored energy, if this entity carries any.
    #[must_use]
    pub const fn energy(&self) -> Option<f64> {
        self.body.energy()
    }

    /// Returns mutable access to the stored energy, if this entity carries any.
    #[must_use]
    pub fn energy_mut(&mut self) -> Option<&mut f64> {
        self.body.energy_mut()
    }

    /// Returns `true` if this entity has a decision rule.
    #[must_use]
    pub const fn is_critter(&self) -> bool {
        self.kind().is_critter()
    }

    /// Asks the entity's decision rule for this turn's action.
    ///
    /// The rule reads the neighbourhood through `view` and may update the
    /// entity's own state (a bouncing critter's heading), but it has no way to
    /// touch the grid. Walls always return `None`.
    pub fn decide<R: Rng + ?Sized>(&mut self, view: &View<'_>, rng: &mut R) -> Option<Action> {
        match &mut self.body {
            Body::Wall => None,
            Body::Plant(state) => rules::plant::decide(state, view, rng),
            Body::PlantEater(state) => rules::plant_eater::decide(state, view, rng),
            Body::BouncingCritter(state) => rules::bouncing::decide(state, view, rng),
        }
    }
}
