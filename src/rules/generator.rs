//! Legal action enumeration.
//!
//! Cards are visited in state order, and each card contributes its actions
//! in a fixed target order, so the output for a given state never changes.
//!
//! ## Per card
//!
//! - Own-board creature that can attack: face first, then every opposing
//!   creature. With an opposing Guard on board only Guard creatures are
//!   offered.
//! - Hand creature: summon, if affordable and the board has room.
//! - Green item: every own-board creature.
//! - Red item: every opposing creature.
//! - Blue item: every opposing creature when it carries a defense penalty,
//!   then the untargeted use.
//!
//! Pass is never generated; the empty sequence already means passing.

use crate::cards::{Ability, Card, CardKind, Location};
use crate::core::{ActionList, GameAction, GameState, Target};

/// Enumerate legal actions for the searching player.
#[must_use]
pub fn legal_actions(state: &GameState) -> ActionList {
    let mut actions = ActionList::new();
    let guarded = state.opponent_has_guard();

    for card in state.cards() {
        match card.location {
            Location::OwnBoard => push_attacks(state, card, guarded, &mut actions),
            Location::Hand => push_plays(state, card, &mut actions),
            Location::OpponentBoard => {}
        }
    }

    actions
}

fn push_attacks(state: &GameState, attacker: &Card, guarded: bool, out: &mut ActionList) {
    if !attacker.is_creature() || !attacker.can_attack() {
        return;
    }

    let id = attacker.instance_id;
    if !guarded {
        out.push(GameAction::attack_face(id));
    }

    for target in state.opponent_board() {
        if !guarded || target.has(Ability::Guard) {
            out.push(GameAction::attack(id, Target::Creature(target.instance_id)));
        }
    }
}

fn push_plays(state: &GameState, card: &Card, out: &mut ActionList) {
    if card.cost > state.me.mana {
        return;
    }

    let id = card.instance_id;
    match card.kind {
        CardKind::Creature => {
            if state.has_board_space() {
                out.push(GameAction::summon(id));
            }
        }
        CardKind::GreenItem => {
            for target in state.own_board() {
                out.push(GameAction::use_item(id, Some(target.instance_id)));
            }
        }
        CardKind::RedItem => {
            for target in state.opponent_board() {
                out.push(GameAction::use_item(id, Some(target.instance_id)));
            }
        }
        CardKind::BlueItem => {
            if card.defense < 0 {
                for target in state.opponent_board() {
                    out.push(GameAction::use_item(id, Some(target.instance_id)));
                }
            }
            out.push(GameAction::use_item(id, None));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Abilities;
    use crate::core::{InstanceId, Player};

    fn state_with(cards: Vec<Card>, mana: i32) -> GameState {
        GameState::new(
            Player::new(30, mana, 20, 25),
            Player::new(30, mana, 20, 25),
            5,
            cards,
        )
    }

    fn guard() -> Abilities {
        Abilities::single(Ability::Guard)
    }

    #[test]
    fn test_empty_state_has_no_actions() {
        assert!(legal_actions(&state_with(vec![], 10)).is_empty());
    }

    #[test]
    fn test_attack_targets_face_then_creatures() {
        let state = state_with(
            vec![
                Card::creature(1, Location::OwnBoard, 2, 2),
                Card::creature(2, Location::OpponentBoard, 1, 1),
                Card::creature(3, Location::OpponentBoard, 1, 1),
            ],
            0,
        );

        let actions = legal_actions(&state);
        assert_eq!(
            actions.as_slice(),
            &[
                GameAction::attack_face(InstanceId(1)),
                GameAction::attack(InstanceId(1), Target::Creature(InstanceId(2))),
                GameAction::attack(InstanceId(1), Target::Creature(InstanceId(3))),
            ]
        );
    }

    #[test]
    fn test_guard_forces_targets() {
        let state = state_with(
            vec![
                Card::creature(1, Location::OwnBoard, 2, 2),
                Card::creature(2, Location::OpponentBoard, 1, 1),
                Card::creature(3, Location::OpponentBoard, 1, 4).with_abilities(guard()),
            ],
            0,
        );

        let actions = legal_actions(&state);
        assert_eq!(
            actions.as_slice(),
            &[GameAction::attack(InstanceId(1), Target::Creature(InstanceId(3)))]
        );
    }

    #[test]
    fn test_exhausted_and_fresh_creatures_do_not_attack() {
        let mut attacked = Card::creature(1, Location::OwnBoard, 2, 2);
        attacked.already_attacked = true;
        let mut fresh = Card::creature(2, Location::OwnBoard, 2, 2);
        fresh.played_this_turn = true;
        let mut charger = Card::creature(3, Location::OwnBoard, 2, 2)
            .with_abilities(Abilities::single(Ability::Charge));
        charger.played_this_turn = true;

        let actions = legal_actions(&state_with(vec![attacked, fresh, charger], 0));
        assert_eq!(actions.as_slice(), &[GameAction::attack_face(InstanceId(3))]);
    }

    #[test]
    fn test_summon_needs_mana_and_space() {
        let mut cards = vec![
            Card::creature(1, Location::Hand, 1, 1).with_cost(3),
            Card::creature(2, Location::Hand, 1, 1).with_cost(4),
        ];
        let state = state_with(cards.clone(), 3);
        assert_eq!(
            legal_actions(&state).as_slice(),
            &[GameAction::summon(InstanceId(1))]
        );

        for id in 10..16 {
            let mut c = Card::creature(id, Location::OwnBoard, 0, 1);
            c.already_attacked = true;
            cards.push(c);
        }
        assert!(legal_actions(&state_with(cards, 10)).is_empty());
    }

    #[test]
    fn test_item_targets() {
        let mut own = Card::creature(1, Location::OwnBoard, 1, 1);
        own.already_attacked = true;
        let state = state_with(
            vec![
                own,
                Card::creature(2, Location::OpponentBoard, 1, 1).with_abilities(guard()),
                Card::item(10, CardKind::GreenItem, 1, 1, 1),
                Card::item(11, CardKind::RedItem, 1, -1, -1),
                Card::item(12, CardKind::BlueItem, 1, 0, -3),
                Card::item(13, CardKind::BlueItem, 1, 0, 0).with_health_changes(3, 0),
            ],
            4,
        );

        let actions = legal_actions(&state);
        assert_eq!(
            actions.as_slice(),
            &[
                GameAction::use_item(InstanceId(10), Some(InstanceId(1))),
                GameAction::use_item(InstanceId(11), Some(InstanceId(2))),
                GameAction::use_item(InstanceId(12), Some(InstanceId(2))),
                GameAction::use_item(InstanceId(12), None),
                GameAction::use_item(InstanceId(13), None),
            ]
        );
    }

    #[test]
    fn test_items_without_targets_are_skipped() {
        let state = state_with(
            vec![
                Card::item(10, CardKind::GreenItem, 1, 1, 1),
                Card::item(11, CardKind::RedItem, 1, -1, -1),
            ],
            5,
        );
        assert!(legal_actions(&state).is_empty());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let state = state_with(
            vec![
                Card::creature(1, Location::OwnBoard, 2, 2),
                Card::creature(2, Location::Hand, 1, 1).with_cost(1),
                Card::creature(3, Location::OpponentBoard, 1, 1),
                Card::item(4, CardKind::BlueItem, 1, 0, -2),
            ],
            5,
        );
        assert_eq!(legal_actions(&state), legal_actions(&state));
    }
}
