//! State transitions.
//!
//! ## Combat
//!
//! Attacking a creature is a two-phase exchange. The attacker strikes first;
//! the target strikes back only if it survived. Each strike:
//!
//! - Does nothing if the striker has no attack
//! - Consumes Ward instead of dealing damage
//! - Otherwise deals `min(attack, defense)` and kills on `attack >= defense`
//!   or Lethal
//!
//! Breakthrough (attacker only) carries the excess to the opponent's face.
//! Drain heals the striker's owner by the damage dealt.
//!
//! ## Items
//!
//! Green items add their abilities and stats. Red items, and blue items with a
//! target, strip their abilities from the target and apply their (negative)
//! stats; a defense penalty is absorbed by Ward. An untargeted blue item adds
//! its defense to the opponent's health. Every item, and every summoned
//! creature, also applies its health deltas to both players.

use crate::cards::{Ability, Card, CardKind, Location};
use crate::core::{GameAction, GameState, InstanceId, Side, Target};

use super::error::RulesError;

/// Result of one creature striking another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Strike {
    /// Defense actually removed from the victim.
    pub damage: i32,
    /// Attack left over after the victim's defense.
    pub excess: i32,
    /// The victim's Ward absorbed the strike.
    pub warded: bool,
    pub killed: bool,
}

/// Resolve one strike of `striker` into `victim`.
///
/// A Lethal kill also drops the victim's defense to 0 so the regular
/// cleanup removes it.
pub fn strike(striker: &Card, victim: &mut Card) -> Strike {
    let attack = striker.attack;
    if attack <= 0 {
        return Strike::default();
    }

    if victim.has(Ability::Ward) {
        victim.abilities.remove(Ability::Ward);
        return Strike {
            warded: true,
            ..Strike::default()
        };
    }

    let defense = victim.defense.max(0);
    let damage = attack.min(defense);
    let killed = attack >= defense || striker.has(Ability::Lethal);

    victim.defense -= damage;
    if killed {
        victim.defense = victim.defense.min(0);
    }

    Strike {
        damage,
        excess: attack - damage,
        warded: false,
        killed,
    }
}

/// Apply an action to a copy of `state`.
///
/// # Panics
///
/// Panics if the action does not fit the state. Use [`try_simulate`] for
/// actions that did not come from [`legal_actions`](super::legal_actions).
#[must_use]
pub fn simulate(state: &GameState, action: &GameAction) -> GameState {
    match try_simulate(state, action) {
        Ok(next) => next,
        Err(e) => panic!("inconsistent action {action:?}: {e}"),
    }
}

/// Apply an action to a copy of `state`, reporting contract violations.
pub fn try_simulate(state: &GameState, action: &GameAction) -> Result<GameState, RulesError> {
    let mut next = state.clone();
    match *action {
        GameAction::Attack { attacker, target } => attack(&mut next, attacker, target)?,
        GameAction::Summon { card } => summon(&mut next, card)?,
        GameAction::UseItem { item, target } => use_item(&mut next, item, target)?,
        GameAction::Pass => {}
    }
    Ok(next)
}

fn index_at(state: &GameState, id: InstanceId, location: Location) -> Result<usize, RulesError> {
    let index = state
        .card_index(id)
        .ok_or(RulesError::UnknownInstance(id))?;
    if state.card_at(index).location != location {
        return Err(match location {
            Location::Hand => RulesError::NotInHand(id),
            Location::OwnBoard | Location::OpponentBoard => RulesError::NotOnBoard(id),
        });
    }
    Ok(index)
}

fn attack(state: &mut GameState, attacker_id: InstanceId, target: Target) -> Result<(), RulesError> {
    let ai = index_at(state, attacker_id, Location::OwnBoard)?;
    let mut attacker = *state.card_at(ai);
    if !attacker.can_attack() {
        return Err(RulesError::CannotAttack(attacker_id));
    }

    match target {
        Target::Face => {
            let damage = attacker.attack.max(0);
            state.opponent.health -= damage;
            if attacker.has(Ability::Drain) {
                state.me.health += damage;
            }
        }
        Target::Creature(target_id) => {
            let ti = index_at(state, target_id, Location::OpponentBoard)?;
            let mut defender = *state.card_at(ti);

            let hit = strike(&attacker, &mut defender);
            if attacker.has(Ability::Drain) {
                state.me.health += hit.damage;
            }
            if attacker.has(Ability::Breakthrough) && hit.killed {
                state.opponent.health -= hit.excess;
            }

            if !hit.killed {
                let back = strike(&defender, &mut attacker);
                if defender.has(Ability::Drain) {
                    state.opponent.health += back.damage;
                }
            }

            *state.card_at_mut(ti) = defender;
        }
    }

    attacker.already_attacked = true;
    *state.card_at_mut(ai) = attacker;
    state.remove_dead_creatures();
    Ok(())
}

fn pay(state: &mut GameState, card: &Card) -> Result<(), RulesError> {
    if card.cost > state.me.mana {
        return Err(RulesError::NotEnoughMana {
            id: card.instance_id,
            cost: card.cost,
            mana: state.me.mana,
        });
    }
    state.me.mana -= card.cost;
    state.me.health += card.my_health_change;
    state.opponent.health += card.opponent_health_change;
    Ok(())
}

fn summon(state: &mut GameState, id: InstanceId) -> Result<(), RulesError> {
    let index = index_at(state, id, Location::Hand)?;
    let card = *state.card_at(index);
    if !card.is_creature() {
        return Err(RulesError::WrongCardKind {
            id,
            actual: card.kind,
            expected: "creature",
        });
    }
    if !state.has_board_space() {
        return Err(RulesError::BoardFull);
    }
    pay(state, &card)?;

    let summoned = state.card_at_mut(index);
    summoned.location = Location::OwnBoard;
    summoned.played_this_turn = !summoned.has(Ability::Charge);
    Ok(())
}

fn use_item(state: &mut GameState, id: InstanceId, target: Option<InstanceId>) -> Result<(), RulesError> {
    let index = index_at(state, id, Location::Hand)?;
    let item = *state.card_at(index);

    let side = match item.kind {
        CardKind::Creature => {
            return Err(RulesError::WrongCardKind {
                id,
                actual: item.kind,
                expected: "item",
            })
        }
        CardKind::GreenItem => Some(Side::Me),
        CardKind::RedItem => Some(Side::Opponent),
        CardKind::BlueItem => target.map(|_| Side::Opponent),
    };

    let target_index = match (side, target) {
        (Some(_), None) => return Err(RulesError::MissingTarget(id)),
        (Some(Side::Me), Some(t)) => Some(index_at(state, t, Location::OwnBoard)?),
        (Some(Side::Opponent), Some(t)) => Some(index_at(state, t, Location::OpponentBoard)?),
        (None, _) => None,
    };

    pay(state, &item)?;

    match (item.kind, target_index) {
        (CardKind::GreenItem, Some(ti)) => {
            let creature = state.card_at_mut(ti);
            creature.abilities.insert_all(item.abilities);
            creature.attack += item.attack;
            creature.defense += item.defense;
        }
        (CardKind::RedItem | CardKind::BlueItem, Some(ti)) => {
            debuff(&item, state.card_at_mut(ti));
        }
        _ => {
            state.opponent.health += item.defense;
        }
    }

    state.remove_card(id);
    state.remove_dead_creatures();
    Ok(())
}

fn debuff(item: &Card, creature: &mut Card) {
    if item.defense < 0 && creature.has(Ability::Ward) {
        creature.abilities.remove(Ability::Ward);
    } else {
        creature.defense += item.defense;
    }
    creature.abilities.remove_all(item.abilities);
    creature.attack = (creature.attack + item.attack).max(0);
}
