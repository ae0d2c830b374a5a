//! The match engine: turn coupling, enemy decisions, and match-end
//! bookkeeping.
//!
//! Turn order is driven entirely by confirm inputs from the client. One
//! confirm flips the turn flag *and then* resolves the new actor's move; the
//! flag starts on the enemy so the alternation runs player, enemy, player...
//! Turn-switch and move-resolution are coupled into that single input.

use crate::combat::{MoveOutcome, resolve_move};
use crate::combatant::Combatant;
use crate::moves::MoveCatalog;
use crate::profile::Profile;
use crate::rng::Dice;

/// Catalog index of the defensive move a hurt enemy falls back to.
pub const ENEMY_FALLBACK_MOVE: usize = 4;

/// Which corner a resolution belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Side {
    Player,
    Enemy,
}

/// How a concluded match went for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    PlayerWon,
    PlayerLost,
}

/// Everything the client needs to react to one confirm input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    /// Catalog index of the move that was resolved.
    pub move_index: usize,
    pub outcome: MoveOutcome,
    /// Set on the resolution that froze the match.
    pub concluded: Option<MatchResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The match is frozen; no further resolution occurs.
    #[error("match is already over")]
    MatchConcluded,

    /// A move index pointed outside the catalog.
    #[error("no move at catalog index {0}")]
    UnknownMove(usize),
}

/// State machine for one match between the player and the current opponent.
pub struct MatchEngine<D: Dice> {
    pub player: Combatant,
    pub enemy: Combatant,
    is_player_turn: bool,
    is_match_over: bool,
    dice: D,
}

impl<D: Dice> MatchEngine<D> {
    /// Starts a match against an opponent scaled to the player's win count.
    pub fn new(player_max_hp: u32, wins: u32, mut dice: D) -> Self {
        let enemy_hp = roll_enemy_max_hp(wins, &mut dice);
        Self::with_combatants(Combatant::new(player_max_hp), Combatant::new(enemy_hp), dice)
    }

    /// Starts a match from explicit combatants.
    pub fn with_combatants(player: Combatant, enemy: Combatant, dice: D) -> Self {
        Self {
            player,
            enemy,
            // The first confirm flips this to true and resolves the
            // player's move.
            is_player_turn: false,
            is_match_over: false,
            dice,
        }
    }

    pub fn is_match_over(&self) -> bool {
        self.is_match_over
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_player_turn
    }

    /// Handles one confirm input: ends the previous actor's turn, resolves
    /// the new actor's move, and applies match-end bookkeeping to `profile`.
    ///
    /// `player_move` is the catalog index the player currently has selected;
    /// it is only consulted when the flip lands on the player's turn. The
    /// enemy picks its own move.
    pub fn confirm(
        &mut self,
        catalog: &MoveCatalog,
        player_move: usize,
        profile: &mut Profile,
    ) -> Result<TurnReport, EngineError> {
        if self.is_match_over {
            return Err(EngineError::MatchConcluded);
        }

        self.is_player_turn = !self.is_player_turn;

        let (side, move_index) = if self.is_player_turn {
            (Side::Player, player_move)
        } else {
            (
                Side::Enemy,
                choose_enemy_move(&self.enemy, catalog, &mut self.dice),
            )
        };
        let mv = catalog
            .get(move_index)
            .ok_or(EngineError::UnknownMove(move_index))?;

        let (actor, target) = match side {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        };
        let outcome = resolve_move(side, mv, actor, target, &mut profile.score, &mut self.dice);

        // Knockout check runs after every resolution, enemy corner first.
        let concluded = if !self.enemy.is_alive() {
            profile.wins += 1;
            self.is_match_over = true;
            Some(MatchResult::PlayerWon)
        } else if !self.player.is_alive() {
            profile.losses += 1;
            self.is_match_over = true;
            Some(MatchResult::PlayerLost)
        } else {
            None
        };

        Ok(TurnReport {
            side,
            move_index,
            outcome,
            concluded,
        })
    }
}

/// Picks the enemy's move for this turn.
///
/// Above a quarter of max HP the enemy swings at random across the whole
/// catalog (unlock requirements do not apply to it); at or below that
/// threshold it covers up with the fixed defensive move.
pub fn choose_enemy_move(enemy: &Combatant, catalog: &MoveCatalog, dice: &mut dyn Dice) -> usize {
    if enemy.current_hp * 4 > enemy.max_hp {
        dice.range(0, catalog.len() as u32) as usize
    } else {
        ENEMY_FALLBACK_MOVE
    }
}

/// Rolls the opponent's max HP for a match: uniform in
/// `[50*(wins+1), 70*(wins+1))`, so each title defense is a bigger wall.
pub fn roll_enemy_max_hp(wins: u32, dice: &mut dyn Dice) -> u32 {
    dice.range(50 * (wins + 1), 70 * (wins + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{MoveDef, MoveKind, ValueRange};
    use crate::rng::Pcg32;

    fn catalog() -> MoveCatalog {
        let mk = |name: &str, kind, min, max, chance| MoveDef {
            name: name.to_string(),
            kind,
            range: ValueRange { min, max },
            chance,
            wins_required: 0,
            description: String::new(),
        };
        MoveCatalog::new(vec![
            mk("Jab", MoveKind::Attack, 5, 10, 90),
            mk("Block", MoveKind::Heal, 5, 10, 85),
            mk("Cross", MoveKind::Attack, 8, 15, 80),
            mk("Hook", MoveKind::Attack, 10, 18, 70),
            mk("Slip", MoveKind::Heal, 8, 14, 75),
        ])
        .unwrap()
    }

    #[test]
    fn first_confirm_resolves_the_player_move() {
        let catalog = catalog();
        let mut profile = Profile::fresh();
        let mut engine = MatchEngine::new(100, 0, Pcg32::new(11));
        let report = engine.confirm(&catalog, 0, &mut profile).unwrap();
        assert_eq!(report.side, Side::Player);
        assert_eq!(report.move_index, 0);
    }

    #[test]
    fn turns_alternate_strictly() {
        let catalog = catalog();
        let mut profile = Profile::fresh();
        let mut engine = MatchEngine::with_combatants(
            Combatant::new(100_000),
            Combatant::new(100_000),
            Pcg32::new(11),
        );
        let mut expected = Side::Player;
        for _ in 0..6 {
            let report = engine.confirm(&catalog, 0, &mut profile).unwrap();
            assert_eq!(report.side, expected);
            expected = match expected {
                Side::Player => Side::Enemy,
                Side::Enemy => Side::Player,
            };
        }
    }

    #[test]
    fn frozen_match_rejects_confirms() {
        let catalog = catalog();
        let mut profile = Profile::fresh();
        let mut engine = MatchEngine::with_combatants(
            Combatant::new(100_000),
            Combatant::new(1),
            Pcg32::new(3),
        );
        // Hammer confirms until the 1 HP enemy drops; the jab cannot miss
        // forever.
        let mut concluded = None;
        for _ in 0..200 {
            match engine.confirm(&catalog, 0, &mut profile) {
                Ok(report) => {
                    if report.concluded.is_some() {
                        concluded = report.concluded;
                        break;
                    }
                }
                Err(EngineError::MatchConcluded) => unreachable!("not frozen yet"),
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(concluded, Some(MatchResult::PlayerWon));
        assert_eq!(profile.wins, 1);
        assert!(engine.is_match_over());
        assert_eq!(
            engine.confirm(&catalog, 0, &mut profile),
            Err(EngineError::MatchConcluded)
        );
        // The win was only counted once.
        assert_eq!(profile.wins, 1);
    }

    #[test]
    fn unknown_move_is_rejected() {
        let catalog = catalog();
        let mut profile = Profile::fresh();
        let mut engine = MatchEngine::new(100, 0, Pcg32::new(5));
        assert_eq!(
            engine.confirm(&catalog, 99, &mut profile),
            Err(EngineError::UnknownMove(99))
        );
    }

    #[test]
    fn hurt_enemy_falls_back_to_the_defensive_move() {
        let catalog = catalog();
        let mut dice = Pcg32::new(9);
        let mut enemy = Combatant::new(100);
        enemy.current_hp = 25;
        assert_eq!(
            choose_enemy_move(&enemy, &catalog, &mut dice),
            ENEMY_FALLBACK_MOVE
        );
        enemy.current_hp = 26;
        for _ in 0..50 {
            let pick = choose_enemy_move(&enemy, &catalog, &mut dice);
            assert!(pick < catalog.len());
        }
    }

    #[test]
    fn enemy_hp_scales_with_wins() {
        let mut dice = Pcg32::new(77);
        for wins in 0..4 {
            for _ in 0..100 {
                let hp = roll_enemy_max_hp(wins, &mut dice);
                assert!(hp >= 50 * (wins + 1));
                assert!(hp < 70 * (wins + 1));
            }
        }
    }
}
