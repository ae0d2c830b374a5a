//! Move resolution.
//!
//! A single resolution covers the hit roll, the value sample, the critical
//! roll, and the effective-amount bookkeeping for both combatants plus the
//! running score. The critical doubling applies to the *raw* value before
//! the overkill/overheal clamp, so a critical can be partly wasted.

use crate::combatant::Combatant;
use crate::engine::Side;
use crate::moves::{MoveDef, MoveKind};
use crate::rng::Dice;

/// Chance (in percent) that a landed move doubles its rolled value.
const CRITICAL_CHANCE: u32 = 10;

/// What a single resolution did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The actor was already down; nothing happened at all.
    Incapacitated,
    /// The hit roll failed; only the whiff animation fires.
    Missed,
    /// The move landed. `effective` is the post-clamp amount actually
    /// applied to a health bar.
    Landed {
        kind: MoveKind,
        effective: u32,
        critical: bool,
    },
}

/// Resolves one move by `actor` against `target`, updating HP, the damage
/// counters, and the running score.
///
/// Score accounting is asymmetric: the player's landed attacks add twice
/// their effective damage, enemy attacks subtract their effective damage,
/// and only the player's heals score (by the effective amount restored).
pub fn resolve_move(
    side: Side,
    mv: &MoveDef,
    actor: &mut Combatant,
    target: &mut Combatant,
    score: &mut i64,
    dice: &mut dyn Dice,
) -> MoveOutcome {
    // A downed boxer throws nothing.
    if !actor.is_alive() {
        return MoveOutcome::Incapacitated;
    }

    if dice.percent() >= mv.chance {
        actor.move_successful = false;
        return MoveOutcome::Missed;
    }
    actor.move_successful = true;

    let mut value = dice.range(mv.range.min, mv.range.max);
    let critical = dice.percent() <= CRITICAL_CHANCE;
    if critical {
        value *= 2;
    }

    let effective = match mv.kind {
        MoveKind::Attack => {
            let effective = target.take_damage(value);
            actor.damage_given += effective;
            match side {
                Side::Player => *score += 2 * i64::from(effective),
                Side::Enemy => *score -= i64::from(effective),
            }
            effective
        }
        MoveKind::Heal => {
            let effective = actor.restore(value);
            if side == Side::Player {
                *score += i64::from(effective);
            }
            effective
        }
    };

    MoveOutcome::Landed {
        kind: mv.kind,
        effective,
        critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::ValueRange;
    use std::collections::VecDeque;

    /// Dice that return a scripted sequence of draws, one per `range` call.
    struct Script(VecDeque<u32>);

    impl Script {
        fn new(rolls: &[u32]) -> Self {
            Self(rolls.iter().copied().collect())
        }
    }

    impl Dice for Script {
        fn range(&mut self, min: u32, _max: u32) -> u32 {
            self.0.pop_front().unwrap_or(min)
        }
    }

    fn attack(min: u32, max: u32, chance: u32) -> MoveDef {
        MoveDef {
            name: "Cross".to_string(),
            kind: MoveKind::Attack,
            range: ValueRange { min, max },
            chance,
            wins_required: 0,
            description: String::new(),
        }
    }

    fn heal(min: u32, max: u32, chance: u32) -> MoveDef {
        MoveDef {
            name: "Slip".to_string(),
            kind: MoveKind::Heal,
            range: ValueRange { min, max },
            chance,
            wins_required: 0,
            description: String::new(),
        }
    }

    #[test]
    fn landed_attack_updates_hp_counters_and_score() {
        let mut player = Combatant::new(100);
        let mut enemy = Combatant::new(100);
        let mut score = 0;
        // hit roll 10 (< 80), value 30, crit roll 50 (no crit)
        let mut dice = Script::new(&[10, 30, 50]);

        let outcome = resolve_move(
            Side::Player,
            &attack(25, 35, 80),
            &mut player,
            &mut enemy,
            &mut score,
            &mut dice,
        );

        assert_eq!(
            outcome,
            MoveOutcome::Landed {
                kind: MoveKind::Attack,
                effective: 30,
                critical: false,
            }
        );
        assert_eq!(enemy.current_hp, 70);
        assert_eq!(player.damage_given, 30);
        assert_eq!(enemy.damage_received, 30);
        assert_eq!(score, 60);
        assert!(player.move_successful);
    }

    #[test]
    fn overkill_counts_only_remaining_hp() {
        let mut player = Combatant::new(100);
        let mut enemy = Combatant::new(100);
        enemy.current_hp = 5;
        let mut score = 0;
        let mut dice = Script::new(&[10, 20, 50]);

        let outcome = resolve_move(
            Side::Player,
            &attack(15, 25, 80),
            &mut player,
            &mut enemy,
            &mut score,
            &mut dice,
        );

        assert!(matches!(outcome, MoveOutcome::Landed { effective: 5, .. }));
        assert_eq!(enemy.current_hp, 0);
        assert_eq!(player.damage_given, 5);
        assert_eq!(enemy.damage_received, 5);
        assert_eq!(score, 10);
    }

    #[test]
    fn critical_doubles_before_the_clamp() {
        let mut player = Combatant::new(100);
        let mut enemy = Combatant::new(100);
        enemy.current_hp = 50;
        let mut score = 0;
        // hit roll 1, value 30, crit roll 10 (<= 10: critical) -> raw 60,
        // clamped to the 50 HP remaining.
        let mut dice = Script::new(&[1, 30, 10]);

        let outcome = resolve_move(
            Side::Player,
            &attack(25, 35, 80),
            &mut player,
            &mut enemy,
            &mut score,
            &mut dice,
        );

        assert_eq!(
            outcome,
            MoveOutcome::Landed {
                kind: MoveKind::Attack,
                effective: 50,
                critical: true,
            }
        );
        assert_eq!(enemy.current_hp, 0);
        assert_eq!(player.damage_given, 50);
    }

    #[test]
    fn enemy_attack_subtracts_effective_damage_from_score() {
        let mut enemy = Combatant::new(100);
        let mut player = Combatant::new(100);
        let mut score = 100;
        let mut dice = Script::new(&[10, 30, 50]);

        resolve_move(
            Side::Enemy,
            &attack(25, 35, 80),
            &mut enemy,
            &mut player,
            &mut score,
            &mut dice,
        );

        assert_eq!(player.current_hp, 70);
        assert_eq!(score, 70);
    }

    #[test]
    fn player_heal_scores_effective_amount_only() {
        let mut player = Combatant::new(100);
        let mut enemy = Combatant::new(100);
        player.current_hp = 95;
        let mut score = 0;
        let mut dice = Script::new(&[10, 20, 50]);

        let outcome = resolve_move(
            Side::Player,
            &heal(15, 25, 80),
            &mut player,
            &mut enemy,
            &mut score,
            &mut dice,
        );

        assert!(matches!(outcome, MoveOutcome::Landed { effective: 5, .. }));
        assert_eq!(player.current_hp, 100);
        assert_eq!(score, 5);
    }

    #[test]
    fn enemy_heal_leaves_score_alone() {
        let mut enemy = Combatant::new(100);
        let mut player = Combatant::new(100);
        enemy.current_hp = 40;
        let mut score = 25;
        let mut dice = Script::new(&[10, 20, 50]);

        resolve_move(
            Side::Enemy,
            &heal(15, 25, 80),
            &mut enemy,
            &mut player,
            &mut score,
            &mut dice,
        );

        assert_eq!(enemy.current_hp, 60);
        assert_eq!(score, 25);
    }

    #[test]
    fn missed_move_changes_nothing_but_the_flag() {
        let mut player = Combatant::new(100);
        let mut enemy = Combatant::new(100);
        player.move_successful = true;
        let mut score = 0;
        // hit roll 90 (>= 80): miss
        let mut dice = Script::new(&[90]);

        let outcome = resolve_move(
            Side::Player,
            &attack(25, 35, 80),
            &mut player,
            &mut enemy,
            &mut score,
            &mut dice,
        );

        assert_eq!(outcome, MoveOutcome::Missed);
        assert!(!player.move_successful);
        assert_eq!(enemy.current_hp, 100);
        assert_eq!(score, 0);
    }

    #[test]
    fn dead_actor_is_a_noop() {
        let mut player = Combatant::new(100);
        let mut enemy = Combatant::new(100);
        player.current_hp = 0;
        player.move_successful = true;
        let mut score = 7;
        let mut dice = Script::new(&[1, 30, 50]);

        let outcome = resolve_move(
            Side::Player,
            &attack(25, 35, 80),
            &mut player,
            &mut enemy,
            &mut score,
            &mut dice,
        );

        assert_eq!(outcome, MoveOutcome::Incapacitated);
        assert!(player.move_successful, "flag untouched by a no-op");
        assert_eq!(enemy.current_hp, 100);
        assert_eq!(score, 7);
    }
}
