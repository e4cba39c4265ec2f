//! Command preconditions and legal-move queries.
//!
//! Every check is a pure function of the state. The engine runs them before
//! touching anything, and presentation layers can call them to grey out
//! buttons without submitting a command.

use crate::cards::{Ability, AbilityId, Card, CardId};
use crate::core::{BattleState, Command, CommandError, CommandResult, IllegalState, InvalidCommand, Phase, PlayerId};

/// Reject commands outside the main phase.
pub fn ensure_in_progress(state: &BattleState) -> CommandResult<()> {
    match state.phase {
        Phase::Main => Ok(()),
        Phase::Setup => Err(IllegalState::GameNotStarted.into()),
        Phase::End => Err(CommandError::GameAlreadyEnded),
    }
}

/// Trim both names, rejecting blank ones.
pub fn check_player_names(player1: &str, player2: &str) -> CommandResult<(String, String)> {
    let trimmed = |name: &str, seat: PlayerId| -> CommandResult<String> {
        let name = name.trim();
        if name.is_empty() {
            Err(InvalidCommand::EmptyPlayerName(seat).into())
        } else {
            Ok(name.to_string())
        }
    };
    Ok((trimmed(player1, PlayerId::Player1)?, trimmed(player2, PlayerId::Player2)?))
}

/// Check whether `player` may put `card` into play.
///
/// Returns the card in hand on success.
pub fn check_play_card(state: &BattleState, player: PlayerId, card: CardId) -> CommandResult<&Card> {
    ensure_in_progress(state)?;
    if state.current_player() != player {
        return Err(IllegalState::NotYourTurn(player).into());
    }

    let seat = state.player(player);
    if seat.active_card.is_some() {
        return Err(IllegalState::ActiveCardPresent(player).into());
    }
    let card = seat
        .hand_card(card)
        .ok_or(InvalidCommand::CardNotInHand { player, card })?;
    if seat.energy < card.cost {
        return Err(CommandError::InsufficientResources { have: seat.energy, need: card.cost });
    }
    Ok(card)
}

/// Check whether the turn owner may use `ability` against `target`.
///
/// Returns the acting player and the ability on success. An omitted target
/// means the opponent, the only legal target in a two-player battle.
pub fn check_use_ability(
    state: &BattleState,
    ability: AbilityId,
    target: Option<PlayerId>,
) -> CommandResult<(PlayerId, &Ability)> {
    ensure_in_progress(state)?;
    let actor = state.current_player();
    if target == Some(actor) {
        return Err(InvalidCommand::InvalidTarget(actor).into());
    }

    let seat = state.player(actor);
    let active = seat
        .active_card
        .as_ref()
        .ok_or(IllegalState::NoActiveCard(actor))?;
    let ability = active
        .ability(ability)
        .ok_or(InvalidCommand::UnknownAbility(ability))?;
    if seat.energy < ability.cost {
        return Err(CommandError::InsufficientResources { have: seat.energy, need: ability.cost });
    }
    Ok((actor, ability))
}

/// Check whether the turn can be ended.
pub fn check_end_turn(state: &BattleState) -> CommandResult<()> {
    ensure_in_progress(state)
}

/// Check any command without applying it.
pub fn check_command(state: &BattleState, command: &Command) -> CommandResult<()> {
    match command {
        Command::StartGame { player1, player2 } => check_player_names(player1, player2).map(|_| ()),
        Command::PlayCard { player, card } => check_play_card(state, *player, *card).map(|_| ()),
        Command::UseAbility { ability, target } => check_use_ability(state, *ability, *target).map(|_| ()),
        Command::EndTurn => check_end_turn(state),
    }
}

/// Every in-game command the turn owner could submit right now.
///
/// `StartGame` is always accepted and therefore not listed. Abilities are
/// listed with an implicit target.
#[must_use]
pub fn legal_commands(state: &BattleState) -> Vec<Command> {
    if ensure_in_progress(state).is_err() {
        return Vec::new();
    }

    let player = state.current_player();
    let seat = state.player(player);
    let mut commands = Vec::new();

    commands.extend(
        seat.hand
            .iter()
            .filter(|card| check_play_card(state, player, card.id).is_ok())
            .map(|card| Command::PlayCard { player, card: card.id }),
    );

    if let Some(active) = &seat.active_card {
        commands.extend(
            active
                .abilities
                .iter()
                .filter(|ability| ability.cost <= seat.energy)
                .map(|ability| Command::UseAbility { ability: ability.id, target: None }),
        );
    }

    commands.push(Command::EndTurn);
    commands
}
