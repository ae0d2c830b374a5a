//! The player profile that survives between matches.
//!
//! One explicit struct handed by reference to screens and the match engine;
//! load/save happens only at the client's save-file boundary.

/// Number of move slots a boxer can bring into a match.
pub const EQUIP_SLOTS: usize = 4;

/// Sentinel marking an open equip slot. Persisted as-is in the save file.
pub const EMPTY_SLOT: i32 = -1;

/// Result of an equip toggle, mostly for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipChange {
    /// The move was equipped into the given slot.
    Equipped(usize),
    /// The move was already equipped and its slot was cleared.
    Unequipped(usize),
    /// All slots taken; the selection was silently ignored.
    Full,
}

/// Fixed-size equipped-move set with positional sentinel slots.
///
/// Slot positions matter: equipping fills the *first* open slot and
/// unequipping leaves a hole, exactly as the save format records it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedMoves {
    slots: [i32; EQUIP_SLOTS],
}

impl EquippedMoves {
    /// The loadout a fresh (or wiped) profile starts with: jab and block.
    pub fn starting() -> Self {
        Self {
            slots: [0, 1, EMPTY_SLOT, EMPTY_SLOT],
        }
    }

    pub fn from_slots(slots: [i32; EQUIP_SLOTS]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[i32; EQUIP_SLOTS] {
        &self.slots
    }

    pub fn contains(&self, move_index: usize) -> bool {
        self.slots.contains(&(move_index as i32))
    }

    /// Toggles membership of a catalog index in the set.
    ///
    /// Equipped → slot cleared to sentinel; unequipped → first open slot
    /// filled; no open slot → no change. Toggling twice in a row always
    /// returns the set to its prior state.
    pub fn toggle(&mut self, move_index: usize) -> EquipChange {
        if let Some(slot) = self.slots.iter().position(|&s| s == move_index as i32) {
            self.slots[slot] = EMPTY_SLOT;
            return EquipChange::Unequipped(slot);
        }
        if let Some(slot) = self.slots.iter().position(|&s| s == EMPTY_SLOT) {
            self.slots[slot] = move_index as i32;
            return EquipChange::Equipped(slot);
        }
        EquipChange::Full
    }

    /// Sorts the slots descending so sentinels sink to the back.
    ///
    /// The gameplay screen does this once on entry; afterwards the equipped
    /// moves form a contiguous prefix and [`Self::active_count`] is the menu
    /// wraparound bound.
    pub fn sort_descending(&mut self) {
        self.slots.sort_unstable_by(|a, b| b.cmp(a));
    }

    /// Number of real (non-sentinel) moves equipped.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|&&s| s != EMPTY_SLOT).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Catalog index held in the given slot, if any.
    pub fn get(&self, slot: usize) -> Option<usize> {
        match self.slots.get(slot) {
            Some(&s) if s != EMPTY_SLOT => Some(s as usize),
            _ => None,
        }
    }

    /// Iterates the equipped catalog indices in slot order, skipping holes.
    pub fn iter_active(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .filter(|&&s| s != EMPTY_SLOT)
            .map(|&s| s as usize)
    }
}

impl Default for EquippedMoves {
    fn default() -> Self {
        Self::starting()
    }
}

/// Everything about the player that outlives a single match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub wins: u32,
    pub losses: u32,
    /// Cumulative score. Enemy attacks subtract from it, so it can go
    /// negative.
    pub score: i64,
    pub equipped: EquippedMoves,
}

impl Profile {
    /// A brand-new career: no record, starting loadout, zero score.
    pub fn fresh() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut equipped = EquippedMoves::starting();
        let before = equipped;
        assert_eq!(equipped.toggle(5), EquipChange::Equipped(2));
        assert_eq!(equipped.toggle(5), EquipChange::Unequipped(2));
        assert_eq!(equipped, before);
    }

    #[test]
    fn unequip_leaves_a_hole_and_reequip_fills_it() {
        let mut equipped = EquippedMoves::from_slots([0, 1, 2, 3]);
        assert_eq!(equipped.toggle(1), EquipChange::Unequipped(1));
        assert_eq!(equipped.slots(), &[0, EMPTY_SLOT, 2, 3]);
        assert_eq!(equipped.toggle(7), EquipChange::Equipped(1));
        assert_eq!(equipped.slots(), &[0, 7, 2, 3]);
    }

    #[test]
    fn full_set_silently_ignores() {
        let mut equipped = EquippedMoves::from_slots([0, 1, 2, 3]);
        let before = equipped;
        assert_eq!(equipped.toggle(9), EquipChange::Full);
        assert_eq!(equipped, before);
    }

    #[test]
    fn sort_descending_sinks_sentinels() {
        let mut equipped = EquippedMoves::from_slots([2, EMPTY_SLOT, 7, EMPTY_SLOT]);
        equipped.sort_descending();
        assert_eq!(equipped.slots(), &[7, 2, EMPTY_SLOT, EMPTY_SLOT]);
        assert_eq!(equipped.active_count(), 2);
        assert_eq!(equipped.get(0), Some(7));
        assert_eq!(equipped.get(2), None);
    }

    #[test]
    fn starting_loadout_matches_wipe_state() {
        assert_eq!(EquippedMoves::starting().slots(), &[0, 1, -1, -1]);
        let profile = Profile::fresh();
        assert_eq!(profile.wins, 0);
        assert_eq!(profile.losses, 0);
        assert_eq!(profile.score, 0);
    }
}
