//! Turn input decoding.
//!
//! ## Format
//!
//! ```text
//! <health> <mana> <deck> <rune>          own player
//! <health> <mana> <deck> <rune>          opponent
//! <opponent hand size>
//! <card count>
//! <number> <id> <location> <type> <cost> <attack> <defense> <abilities> <my hp> <opp hp> <draw>
//! ...
//! ```
//!
//! Fields are whitespace separated; runs of spaces are accepted.

use std::str::FromStr;

use crate::cards::{Abilities, Card, CardKind, Location};
use crate::core::{ActionSequence, GameAction, GameState, InstanceId, Player, Target};

use super::encode::Decision;
use super::error::ProtocolError;

type Result<T> = std::result::Result<T, ProtocolError>;

fn fields<'a>(line: &'a str, what: &'static str, expected: usize) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != expected {
        return Err(ProtocolError::FieldCount {
            what,
            expected,
            found: parts.len(),
            line: line.to_string(),
        });
    }
    Ok(parts)
}

fn int(value: &str, field: &'static str) -> Result<i32> {
    value.parse().map_err(|_| ProtocolError::BadInteger {
        field,
        value: value.to_string(),
    })
}

fn count(line: &str, field: &'static str) -> Result<i32> {
    let value = int(fields(line, field, 1)?[0], field)?;
    if value < 0 {
        return Err(ProtocolError::NegativeCount { field, value });
    }
    Ok(value)
}

fn next_line<I, S>(lines: &mut I, what: &'static str) -> Result<S>
where
    I: Iterator<Item = S>,
{
    lines.next().ok_or(ProtocolError::MissingLine(what))
}

/// Parse an ability string such as `B--G-W`.
pub fn parse_abilities(letters: &str) -> Result<Abilities> {
    Abilities::from_letters(letters).map_err(ProtocolError::UnknownAbility)
}

/// Parse a player line.
pub fn parse_player(line: &str) -> Result<Player> {
    let f = fields(line, "player line", 4)?;
    Ok(Player::new(
        int(f[0], "health")?,
        int(f[1], "mana")?,
        int(f[2], "deck size")?,
        int(f[3], "rune threshold")?,
    ))
}

/// Parse a card line.
pub fn parse_card(line: &str) -> Result<Card> {
    let f = fields(line, "card line", 11)?;

    let number = int(f[0], "card number")?;
    let location_code = int(f[2], "location")?;
    let kind_code = int(f[3], "card type")?;

    let location = Location::from_code(location_code)
        .ok_or(ProtocolError::UnknownLocation(location_code))?;
    let kind = CardKind::from_code(kind_code).ok_or(ProtocolError::UnknownCardKind(kind_code))?;

    let mut card = Card::new(InstanceId(int(f[1], "instance id")?), kind, location)
        .with_number(number)
        .with_cost(int(f[4], "cost")?)
        .with_abilities(parse_abilities(f[7])?)
        .with_health_changes(int(f[8], "my health change")?, int(f[9], "opponent health change")?)
        .with_card_draw(int(f[10], "card draw")?);
    card.attack = int(f[5], "attack")?;
    card.defense = int(f[6], "defense")?;
    Ok(card)
}

/// Parse one turn's input, consuming exactly its lines.
///
/// The decoded state is validated before it is returned.
pub fn parse_state<I, S>(lines: &mut I) -> Result<GameState>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let me = parse_player(next_line(lines, "own player line")?.as_ref())?;
    let opponent = parse_player(next_line(lines, "opponent player line")?.as_ref())?;
    let opponent_hand = count(next_line(lines, "opponent hand line")?.as_ref(), "opponent hand")?;
    let card_count = count(next_line(lines, "card count line")?.as_ref(), "card count")?;

    let mut cards = Vec::with_capacity(card_count as usize);
    for _ in 0..card_count {
        cards.push(parse_card(next_line(lines, "card line")?.as_ref())?);
    }

    let state = GameState::new(me, opponent, opponent_hand, cards);
    state.validate()?;
    Ok(state)
}

impl FromStr for GameState {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        parse_state(&mut s.lines().filter(|l| !l.trim().is_empty()))
    }
}

fn parse_action(command: &str) -> Result<Option<GameAction>> {
    let parts: Vec<&str> = command.split_whitespace().collect();
    let id = |i: usize, field| int(parts[i], field).map(InstanceId);

    let action = match parts.as_slice() {
        ["PASS"] => return Ok(None),
        ["SUMMON", _] => GameAction::summon(id(1, "summoned card")?),
        ["ATTACK", _, _] => GameAction::attack(id(1, "attacker")?, Target::from_id(id(2, "target")?)),
        ["USE", _, _] => {
            let target = id(2, "item target")?;
            GameAction::use_item(id(1, "item")?, (!target.is_none()).then_some(target))
        }
        _ => return Err(ProtocolError::UnknownCommand(command.to_string())),
    };
    Ok(Some(action))
}

/// Parse an encoded action sequence such as `SUMMON 3;ATTACK 3 -1`.
///
/// `PASS` entries contribute nothing, so `"PASS"` parses to the empty
/// sequence.
pub fn parse_actions(line: &str) -> Result<ActionSequence> {
    let mut sequence = ActionSequence::new();
    for command in line.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        if let Some(action) = parse_action(command)? {
            sequence.push(action);
        }
    }
    Ok(sequence)
}

/// Parse an output line: `PICK i` or an action sequence.
pub fn parse_decision(line: &str) -> Result<Decision> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if let ["PICK", index] = parts.as_slice() {
        let index = int(index, "pick index")?;
        if index < 0 {
            return Err(ProtocolError::NegativeCount {
                field: "pick index",
                value: index,
            });
        }
        return Ok(Decision::Pick(index as usize));
    }
    parse_actions(line).map(Decision::Play)
}
