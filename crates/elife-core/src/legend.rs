//! Mapping from map characters to entity kinds.
//!
//! A [`Legend`] is consulted twice: once to turn the initial map into entities,
//! and again whenever an entity reproduces, to rebuild an offspring of the same
//! kind from the parent's origin character.

use std::collections::BTreeMap;

use rand::Rng;

use crate::config::EnergyConfig;
use crate::entity::{Body, Entity, EntityId, EntityKind};
use crate::error::{Result, WorldError};

/// The character used for empty cells. It can never be a legend key.
pub const EMPTY_GLYPH: char = ' ';

/// Immutable `char -> EntityKind` mapping.
///
/// # Example
///
/// ```
/// use elife_core::entity::EntityKind;
/// use elife_core::legend::Legend;
///
/// let legend = Legend::new([('#', EntityKind::Wall), ('*', EntityKind::Plant)]).unwrap();
/// assert_eq!(legend.kind_for('*'), Some(EntityKind::Plant));
/// assert_eq!(legend.kind_for('O'), None);
///
/// assert!(Legend::new([(' ', EntityKind::Wall)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: BTreeMap<char, EntityKind>,
}

impl Legend {
    /// Builds a legend from `(glyph, kind)` pairs. Later duplicates win.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ReservedGlyph`] if any glyph is the space
    /// character.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, EntityKind)>,
    {
        let mut map = BTreeMap::new();
        for (glyph, kind) in entries {
            if glyph == EMPTY_GLYPH {
                return Err(WorldError::ReservedGlyph { glyph });
            }
            map.insert(glyph, kind);
        }
        Ok(Self { entries: map })
    }

    /// The classic legend: `#` wall, `*` plant, `O` plant-eater, `o` bouncing
    /// critter.
    #[must_use]
    pub fn standard() -> Self {
        let entries = [
            ('#', EntityKind::Wall),
            ('*', EntityKind::Plant),
            ('O', EntityKind::PlantEater),
            ('o', EntityKind::BouncingCritter),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the kind mapped to `glyph`.
    #[must_use]
    pub fn kind_for(&self, glyph: char) -> Option<EntityKind> {
        self.entries.get(&glyph).copied()
    }

    /// Returns `true` if `glyph` has an entry.
    #[must_use]
    pub fn contains(&self, glyph: char) -> bool {
        self.entries.contains_key(&glyph)
    }

    /// Iterates `(glyph, kind)` entries in glyph order.
    pub fn entries(&self) -> impl Iterator<Item = (char, EntityKind)> + '_ {
        self.entries.iter().map(|(glyph, kind)| (*glyph, *kind))
    }

    /// Builds the default body for an entity created from `glyph`.
    ///
    /// Returns `None` if `glyph` is unmapped.
    pub fn body_for<R: Rng + ?Sized>(
        &self,
        glyph: char,
        energy: &EnergyConfig,
        rng: &mut R,
    ) -> Option<Body> {
        self.kind_for(glyph)
            .map(|kind| Body::fresh(kind, energy, rng))
    }

    /// Builds a complete entity for `glyph` with the given id.
    ///
    /// Returns `None` if `glyph` is unmapped.
    pub fn spawn<R: Rng + ?Sized>(
        &self,
        glyph: char,
        id: EntityId,
        energy: &EnergyConfig,
        rng: &mut R,
    ) -> Option<Entity> {
        self.body_for(glyph, energy, rng)
            .map(|body| Entity::new(id, glyph, body))
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard()
    }
}
