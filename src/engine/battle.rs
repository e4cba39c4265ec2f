//! The battle engine: sole authority over a [`BattleState`].
//!
//! ## Command flow
//!
//! 1. The command is checked and applied to a scratch clone of the state
//!    (O(1), the state is built on persistent vectors).
//! 2. On success the clone replaces the live state, the command is appended
//!    to the history, and observers are notified with the new state and the
//!    events the command produced.
//! 3. On failure the scratch copy is dropped. The live state, the RNG and the
//!    history are untouched.
//!
//! ```
//! use pokecard_battle::{BattleConfig, BattleEngine, Phase};
//!
//! let mut engine = BattleEngine::new(BattleConfig::default()).unwrap();
//! engine.start_game("Ash", "Gary").unwrap();
//!
//! assert_eq!(engine.state().phase, Phase::Main);
//! assert_eq!(engine.state().turn, 1);
//! ```

use im::Vector;
use log::{debug, info};

use crate::cards::{AbilityId, Card, CardCatalog, CardId};
use crate::core::{
    BattleConfig, BattleState, Command, CommandRecord, CommandResult, ConfigError, GameRng, IllegalState,
    InvalidCommand, Phase, PlayerId, PlayerMap, ReplayError, RestoreError,
};
use crate::events::{BattleEvent, BattleObserver, ObserverId, ObserverList};
use crate::rules::{self, GameResult};
use crate::zones::{build_starter_deck, deal_hand, shuffle};

use super::snapshot::Checkpoint;

/// Two-player battle engine.
#[derive(Debug)]
pub struct BattleEngine {
    config: BattleConfig,
    catalog: CardCatalog,

    /// Unshuffled starter deck per seat, with ids already assigned.
    decks: PlayerMap<Vec<Card>>,

    state: BattleState,
    rng: GameRng,
    history: Vector<CommandRecord>,
    observers: ObserverList,
}

impl BattleEngine {
    /// Create an engine over the built-in starter catalog.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, CardCatalog::starter())
    }

    /// Create an engine over a custom catalog.
    ///
    /// Player 1's cards are numbered `1..=n` and player 2's `n+1..=2n`,
    /// where `n` is the starter deck length.
    pub fn with_catalog(config: BattleConfig, catalog: CardCatalog) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;

        let per_seat = config.starter_deck.len() as u32;
        let decks = PlayerMap::from_pair(
            build_starter_deck(&catalog, &config.starter_deck, CardId::new(1))?,
            build_starter_deck(&catalog, &config.starter_deck, CardId::new(per_seat + 1))?,
        );

        Ok(Self {
            rng: GameRng::new(config.seed),
            config,
            catalog,
            decks,
            state: BattleState::new(),
            history: Vector::new(),
            observers: ObserverList::new(),
        })
    }

    /// Resume from a previously captured state.
    ///
    /// The state is validated against `config` first. The history starts
    /// empty; the RNG restarts from the configured seed.
    pub fn restore(config: BattleConfig, catalog: CardCatalog, state: BattleState) -> Result<Self, RestoreError> {
        state.validate_for(&config)?;
        let mut engine = Self::with_catalog(config, catalog)?;
        engine.state = state;
        Ok(engine)
    }

    /// Rebuild a game by re-applying recorded commands from a fresh engine.
    ///
    /// Deterministic: the same config and records always produce the same
    /// state, including every shuffle.
    pub fn replay(config: BattleConfig, catalog: CardCatalog, records: &[CommandRecord]) -> Result<Self, ReplayError> {
        let mut engine = Self::with_catalog(config, catalog)?;
        for record in records {
            engine
                .apply(record.command.clone())
                .map_err(|error| ReplayError::Rejected { sequence: record.sequence, error })?;
        }
        debug!("replayed {} commands", records.len());
        Ok(engine)
    }

    /// Resume from a checkpoint, restoring state, RNG position and history.
    pub fn from_checkpoint(checkpoint: Checkpoint, catalog: CardCatalog) -> Result<Self, RestoreError> {
        checkpoint.state.validate_for(&checkpoint.config)?;
        let mut engine = Self::with_catalog(checkpoint.config, catalog)?;
        engine.state = checkpoint.state;
        engine.rng = GameRng::from_state(&checkpoint.rng);
        engine.history = checkpoint.history.into_iter().collect();
        Ok(engine)
    }

    /// Capture everything needed to resume this engine later.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
            history: self.history.iter().cloned().collect(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Live state, read-only.
    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> BattleState {
        self.state.clone()
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Every committed command since construction or the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Result of the game, once it has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Commands the turn owner could submit right now.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        rules::legal_commands(&self.state)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register an observer for committed commands.
    pub fn subscribe(&mut self, observer: impl BattleObserver + 'static) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Validate and apply a command.
    ///
    /// Returns the events the command produced. On error nothing changes.
    pub fn apply(&mut self, command: Command) -> CommandResult<Vec<BattleEvent>> {
        let mut next = self.state.clone();
        let outcome = match &command {
            Command::StartGame { player1, player2 } => self.apply_start_game(&mut next, player1, player2),
            Command::PlayCard { player, card } => Self::apply_play_card(&mut next, *player, *card),
            Command::UseAbility { ability, target } => Self::apply_use_ability(&mut next, *ability, *target),
            Command::EndTurn => self.apply_end_turn(&mut next),
        };

        let events = match outcome {
            Ok(events) => events,
            Err(err) => {
                debug!("rejected {} on turn {}: {}", command.name(), self.state.turn, err);
                return Err(err);
            }
        };

        debug!("applied {} on turn {} ({} events)", command.name(), self.state.turn, events.len());
        let record = CommandRecord::new(self.state.turn, self.history.len() as u32, command);
        self.history.push_back(record);
        self.state = next;

        self.observers.notify(&self.state, &events);
        Ok(events)
    }

    /// Start a new game between two named players.
    pub fn start_game(&mut self, player1: &str, player2: &str) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::start(player1, player2))
    }

    /// Put a card from `player`'s hand into play.
    pub fn play_card(&mut self, player: PlayerId, card: CardId) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::PlayCard { player, card })
    }

    /// Use an ability of the turn owner's active card.
    pub fn use_ability(&mut self, ability: AbilityId, target: Option<PlayerId>) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::UseAbility { ability, target })
    }

    /// Pass the turn to the other player.
    pub fn end_turn(&mut self) -> CommandResult<Vec<BattleEvent>> {
        self.apply(Command::EndTurn)
    }

    /// Return to an empty setup state, as at construction.
    ///
    /// Clears the history and reseeds the RNG, so replaying the history
    /// recorded after a reset reproduces the same games. Observers stay
    /// subscribed and are notified with no events.
    pub fn reset(&mut self) {
        self.state = BattleState::new();
        self.rng = GameRng::new(self.config.seed);
        self.history.clear();
        debug!("engine reset");
        self.observers.notify(&self.state, &[]);
    }

    // =========================================================================
    // Transitions (operate on the scratch state)
    // =========================================================================

    fn apply_start_game(&mut self, next: &mut BattleState, player1: &str, player2: &str) -> CommandResult<Vec<BattleEvent>> {
        let (name1, name2) = rules::check_player_names(player1, player2)?;

        let game_rng = self.rng.fork();
        *next = BattleState::new();
        for (seat, player) in next.players.iter_mut() {
            let mut seat_rng = game_rng.for_context(seat.as_str());
            let deck = shuffle(self.decks[seat].clone(), &mut seat_rng);
            let (hand, rest) = deal_hand(deck, self.config.hand_size);

            player.name = if seat == PlayerId::Player1 { name1.clone() } else { name2.clone() };
            player.hand = hand;
            player.deck = rest;
            player.energy = self.config.starting_energy;
            player.max_energy = self.config.starting_energy;
        }
        next.phase = Phase::Main;
        next.turn = 1;
        next.sync_turn_flags();

        info!("game started: {} vs {}", name1, name2);
        Ok(vec![BattleEvent::GameStarted { player1: name1, player2: name2 }])
    }

    fn apply_play_card(next: &mut BattleState, player: PlayerId, card: CardId) -> CommandResult<Vec<BattleEvent>> {
        let cost = rules::check_play_card(next, player, card)?.cost;

        let seat = next.player_mut(player);
        let played = seat
            .remove_from_hand(card)
            .ok_or(InvalidCommand::CardNotInHand { player, card })?;
        seat.energy -= cost;
        seat.active_card = Some(played);

        Ok(vec![BattleEvent::CardPlayed { player, card, cost }])
    }

    fn apply_use_ability(
        next: &mut BattleState,
        ability: AbilityId,
        target: Option<PlayerId>,
    ) -> CommandResult<Vec<BattleEvent>> {
        let (actor, cost, damage) = {
            let (actor, found) = rules::check_use_ability(next, ability, target)?;
            (actor, found.cost, found.damage)
        };
        let defender_id = actor.opponent();
        let mut events = Vec::new();

        let (attacker, defender) = next.players.pair_mut(actor);
        let card = attacker
            .active_card
            .as_ref()
            .map(|c| c.id)
            .ok_or(IllegalState::NoActiveCard(actor))?;
        attacker.energy -= cost;
        events.push(BattleEvent::AbilityUsed { player: actor, card, ability, cost });

        if damage == 0 {
            return Ok(events);
        }
        let Some(target_card) = defender.active_card.as_mut() else {
            return Ok(events);
        };

        let amount = target_card.take_damage(damage);
        events.push(BattleEvent::DamageDealt {
            target: defender_id,
            card: target_card.id,
            amount,
            remaining_hp: target_card.hp(),
        });

        if target_card.is_defeated() {
            let defeated = target_card.id;
            defender.active_card = None;
            debug!("{} defeated {}'s {}", actor, defender_id, defeated);
            events.push(BattleEvent::CardDefeated { player: defender_id, card: defeated });
        }

        if let Some(result) = rules::resolve_winner(next) {
            let name = next.player(result.winner).name.clone();
            info!("game over on turn {}: {} ({}) wins", next.turn, name, result.winner);
            events.push(BattleEvent::GameWon { winner: result.winner, name });
        }
        Ok(events)
    }

    fn apply_end_turn(&self, next: &mut BattleState) -> CommandResult<Vec<BattleEvent>> {
        rules::check_end_turn(next)?;

        next.turn = next.turn.saturating_add(1);
        next.sync_turn_flags();
        let player = next.current_player();
        let turn = next.turn;
        let mut events = vec![BattleEvent::TurnStarted { turn, player }];

        let seat = next.player_mut(player);
        if let Some(card) = seat.draw() {
            debug!("{} drew {}", player, card);
            events.push(BattleEvent::CardDrawn { player, card });
        }

        seat.max_energy = seat
            .max_energy
            .saturating_add(self.config.energy_per_turn)
            .min(self.config.max_energy_cap);
        seat.energy = seat.max_energy;
        debug!("{} refilled to {}/{}", player, seat.energy, seat.max_energy);
        events.push(BattleEvent::EnergyRefilled {
            player,
            energy: seat.energy,
            max_energy: seat.max_energy,
        });

        Ok(events)
    }
}
