//! Actions and action sequences.
//!
//! A turn is a sequence of actions. Each action is a small `Copy` value so it
//! can be stored in every frontier entry of the search without indirection:
//! - "Attack X → face" / "Attack X → creature Y"
//! - "Summon X"
//! - "Use item X" with or without a creature target
//! - "Pass"
//!
//! `ActionSequence` is backed by a persistent vector so that a child's
//! sequence (`parent + action`) shares structure with its parent's.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::InstanceId;

/// Target of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The opposing player.
    Face,
    /// An opposing creature.
    Creature(InstanceId),
}

impl Target {
    /// Protocol id: the creature's id, or `-1` for the face.
    #[must_use]
    pub const fn id(self) -> InstanceId {
        match self {
            Target::Face => InstanceId::NONE,
            Target::Creature(id) => id,
        }
    }

    /// Inverse of [`Target::id`].
    #[must_use]
    pub const fn from_id(id: InstanceId) -> Self {
        if id.is_none() {
            Target::Face
        } else {
            Target::Creature(id)
        }
    }

    #[must_use]
    pub const fn creature(self) -> Option<InstanceId> {
        match self {
            Target::Face => None,
            Target::Creature(id) => Some(id),
        }
    }
}

/// One in-turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Attack with an own-board creature.
    Attack { attacker: InstanceId, target: Target },

    /// Put a creature from hand onto the own board.
    Summon { card: InstanceId },

    /// Play an item from hand. `target` is `None` for untargeted blue items.
    UseItem {
        item: InstanceId,
        target: Option<InstanceId>,
    },

    /// End the turn without further actions.
    Pass,
}

impl GameAction {
    #[must_use]
    pub const fn attack(attacker: InstanceId, target: Target) -> Self {
        GameAction::Attack { attacker, target }
    }

    #[must_use]
    pub const fn attack_face(attacker: InstanceId) -> Self {
        GameAction::Attack {
            attacker,
            target: Target::Face,
        }
    }

    #[must_use]
    pub const fn summon(card: InstanceId) -> Self {
        GameAction::Summon { card }
    }

    #[must_use]
    pub const fn use_item(item: InstanceId, target: Option<InstanceId>) -> Self {
        GameAction::UseItem { item, target }
    }

    /// The card performing the action (attacker, summoned creature, item).
    #[must_use]
    pub const fn actor(&self) -> Option<InstanceId> {
        match *self {
            GameAction::Attack { attacker, .. } => Some(attacker),
            GameAction::Summon { card } => Some(card),
            GameAction::UseItem { item, .. } => Some(item),
            GameAction::Pass => None,
        }
    }

    /// The targeted creature, if any.
    #[must_use]
    pub const fn target_creature(&self) -> Option<InstanceId> {
        match *self {
            GameAction::Attack { target, .. } => target.creature(),
            GameAction::UseItem { target, .. } => target,
            GameAction::Summon { .. } | GameAction::Pass => None,
        }
    }

    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self, GameAction::Attack { .. })
    }
}

/// Legal actions of one state.
///
/// Inline capacity covers the common case; a full board against a full board
/// with a handful of items spills to the heap.
pub type ActionList = SmallVec<[GameAction; 16]>;

/// Ordered actions making up (part of) a turn.
///
/// An empty sequence means "pass".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSequence {
    actions: Vector<GameAction>,
}

impl ActionSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this sequence with `action` appended.
    ///
    /// The copy shares structure with `self`.
    #[must_use]
    pub fn extended(&self, action: GameAction) -> Self {
        let mut actions = self.actions.clone();
        actions.push_back(action);
        Self { actions }
    }

    pub fn push(&mut self, action: GameAction) {
        self.actions.push_back(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if this sequence is a plain pass.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GameAction> {
        self.actions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameAction> {
        self.actions.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<GameAction> {
        self.actions.iter().copied().collect()
    }
}

impl FromIterator<GameAction> for ActionSequence {
    fn from_iter<I: IntoIterator<Item = GameAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ActionSequence {
    type Item = &'a GameAction;
    type IntoIter = im::vector::Iter<'a, GameAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_ids() {
        assert_eq!(Target::Face.id(), InstanceId::NONE);
        assert_eq!(Target::Creature(InstanceId(4)).id(), InstanceId(4));
        assert_eq!(Target::from_id(InstanceId(-1)), Target::Face);
        assert_eq!(Target::from_id(InstanceId(7)), Target::Creature(InstanceId(7)));
    }

    #[test]
    fn test_actor_and_target() {
        let attack = GameAction::attack(InstanceId(1), Target::Creature(InstanceId(2)));
        assert_eq!(attack.actor(), Some(InstanceId(1)));
        assert_eq!(attack.target_creature(), Some(InstanceId(2)));
        assert!(attack.is_attack());

        let face = GameAction::attack_face(InstanceId(1));
        assert_eq!(face.target_creature(), None);

        let item = GameAction::use_item(InstanceId(9), None);
        assert_eq!(item.actor(), Some(InstanceId(9)));
        assert_eq!(item.target_creature(), None);

        assert_eq!(GameAction::Pass.actor(), None);
    }

    #[test]
    fn test_extended_leaves_parent_untouched() {
        let parent = ActionSequence::new().extended(GameAction::summon(InstanceId(3)));
        let child = parent.extended(GameAction::attack_face(InstanceId(5)));

        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.get(0), parent.get(0));
        assert_eq!(child.get(1), Some(&GameAction::attack_face(InstanceId(5))));
    }

    #[test]
    fn test_sibling_extensions_are_independent() {
        let parent: ActionSequence = [GameAction::summon(InstanceId(1))].into_iter().collect();
        let a = parent.extended(GameAction::summon(InstanceId(2)));
        let b = parent.extended(GameAction::summon(InstanceId(3)));

        assert_ne!(a, b);
        assert_eq!(a.to_vec()[0], b.to_vec()[0]);
    }

    #[test]
    fn test_empty_sequence_is_pass() {
        let seq = ActionSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.iter().count(), 0);
    }

    #[test]
    fn test_sequence_serialization() {
        let seq: ActionSequence = [
            GameAction::summon(InstanceId(3)),
            GameAction::use_item(InstanceId(8), Some(InstanceId(2))),
            GameAction::attack_face(InstanceId(3)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&seq).unwrap();
        let deserialized: ActionSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(seq, deserialized);
    }
}
