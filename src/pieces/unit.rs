//! Battle-game unit
//!
//! A unit can heal, take damage, and attack other units. Every attacked unit
//! hits back with half of its damage. Once a unit's hp reaches zero it is
//! dead for good and every further action involving it is rejected.

use std::fmt;

use log::{debug, warn};

use super::error::UnitError;

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    name: String,
    hp: f64,
    hp_limit: f64,
    dmg: f64,
}

impl Unit {
    /// Create a unit at full health; `hp` also becomes its hp limit
    pub fn new(name: impl Into<String>, hp: f64, damage: f64) -> Self {
        Self {
            name: name.into(),
            hp,
            hp_limit: hp,
            dmg: damage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn hp_limit(&self) -> f64 {
        self.hp_limit
    }

    pub fn dmg(&self) -> f64 {
        self.dmg
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Err if the unit is dead
    pub fn ensure_is_alive(&self) -> Result<(), UnitError> {
        if self.is_alive() {
            Ok(())
        } else {
            warn!("{} is dead and cannot be disturbed", self.name);
            Err(UnitError::UnitIsDead {
                name: self.name.clone(),
            })
        }
    }

    /// Heal by `hp`, never above the hp limit
    pub fn add_hp(&mut self, hp: f64) -> Result<(), UnitError> {
        self.ensure_is_alive()?;

        self.hp = (self.hp + hp).clamp(0.0, self.hp_limit);
        debug!("{} healed {} hp, now at {}", self.name, hp, self.hp);
        Ok(())
    }

    /// Lose `dmg` hp, never below zero
    pub fn take_damage(&mut self, dmg: f64) -> Result<(), UnitError> {
        self.ensure_is_alive()?;

        self.hp = (self.hp - dmg).clamp(0.0, self.hp_limit);
        debug!("{} took {} damage, now at {}", self.name, dmg, self.hp);
        if !self.is_alive() {
            debug!("{} died", self.name);
        }
        Ok(())
    }

    /// Deal full damage to `enemy` and take its counter-attack
    ///
    /// Fails if either unit is already dead. An enemy killed by this attack
    /// does not counter.
    pub fn attack(&mut self, enemy: &mut Unit) -> Result<(), UnitError> {
        self.ensure_is_alive()?;

        debug!("{} attacks {}", self.name, enemy.name);
        enemy.take_damage(self.dmg)?;

        match enemy.counter_attack(self) {
            Err(UnitError::UnitIsDead { .. }) if !enemy.is_alive() => {
                debug!("{} fell before it could strike back", enemy.name);
                Ok(())
            }
            result => result,
        }
    }

    /// Strike back at `enemy` with half of this unit's damage
    pub fn counter_attack(&mut self, enemy: &mut Unit) -> Result<(), UnitError> {
        self.ensure_is_alive()?;

        debug!("{} strikes back at {}", self.name, enemy.name);
        enemy.take_damage(self.dmg / 2.0)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} hp, {} dmg", self.name, self.hp, self.dmg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_hp_limit_to_starting_hp() {
        let orc = Unit::new("Thrall", 100.0, 20.0);
        assert_eq!(orc.name(), "Thrall");
        assert_eq!(orc.hp(), 100.0);
        assert_eq!(orc.hp_limit(), 100.0);
        assert_eq!(orc.dmg(), 20.0);
        assert!(orc.is_alive());
    }

    #[test]
    fn dead_unit_cannot_take_damage() {
        let mut human = Unit::new("Varian", 100.0, 20.0);
        human.take_damage(100.0).unwrap();

        assert_eq!(
            human.take_damage(1.0),
            Err(UnitError::UnitIsDead {
                name: "Varian".to_string()
            })
        );
        assert_eq!(human.hp(), 0.0);
    }

    #[test]
    fn attack_triggers_half_damage_counter() {
        let mut human = Unit::new("Varian", 100.0, 20.0);
        let mut orc = Unit::new("Gul'dan", 70.0, 50.0);

        human.attack(&mut orc).unwrap();

        assert_eq!(orc.hp(), 50.0);
        assert_eq!(human.hp(), 75.0);
    }

    #[test]
    fn add_hp_is_capped_and_rejected_when_dead() {
        let mut dummy = Unit::new("Dummy", 5.0, 0.0);

        dummy.take_damage(3.0).unwrap();
        dummy.add_hp(10.0).unwrap();
        assert_eq!(dummy.hp(), 5.0);

        dummy.take_damage(5.0).unwrap();
        assert!(dummy.add_hp(10.0).is_err());
        assert_eq!(dummy.hp(), 0.0);
    }

    #[test]
    fn overkill_clamps_to_zero() {
        let mut dummy = Unit::new("Dummy", 5.0, 0.0);
        dummy.take_damage(50.0).unwrap();
        assert_eq!(dummy.hp(), 0.0);
        assert!(!dummy.is_alive());
    }

    #[test]
    fn negative_amounts_stay_within_hp_bounds() {
        let mut dummy = Unit::new("Dummy", 10.0, 1.0);

        dummy.add_hp(-50.0).unwrap();
        assert_eq!(dummy.hp(), 0.0);
        assert!(!dummy.is_alive());

        let mut other = Unit::new("Other", 10.0, 1.0);
        other.take_damage(4.0).unwrap();
        other.take_damage(-50.0).unwrap();
        assert_eq!(other.hp(), other.hp_limit());
    }

    #[test]
    fn killed_enemy_does_not_counter() {
        let mut human = Unit::new("Varian", 100.0, 20.0);
        let mut imp = Unit::new("Imp", 15.0, 40.0);

        human.attack(&mut imp).unwrap();

        assert_eq!(imp.hp(), 0.0);
        assert_eq!(human.hp(), 100.0);
    }

    #[test]
    fn display_shows_name_hp_and_damage() {
        let orc = Unit::new("Thrall", 100.0, 20.0);
        assert_eq!(orc.to_string(), "Thrall, 100 hp, 20 dmg");
    }
}
