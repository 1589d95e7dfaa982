//! Gear power scoring.
//!
//! Stateless scoring of a gear item, used to rank catalog entries and to
//! aggregate a player's equipped loadout.

use crate::domain::entities::{GearItem, Rarity};

/// Rarity bonus on the tier-IV-and-up power step
fn rarity_bonus(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common | Rarity::Uncommon => 0,
        Rarity::Rare => 12,
        Rarity::Epic | Rarity::Legendary => 22,
    }
}

/// Base power step table per tier; rarity only matters from tier IV on.
fn base_power(tier: u32, rarity: Rarity) -> u32 {
    match tier {
        0..=2 => 40,
        3 => 70,
        t => 90 + 20 * (t - 4) + rarity_bonus(rarity),
    }
}

/// Power rating of one item: tier/rarity step plus 2 per item level above 1.
pub fn item_power(tier: u32, rarity: Rarity, item_level: u32) -> u32 {
    base_power(tier, rarity) + 2 * item_level.saturating_sub(1)
}

pub fn gear_item_power(item: &GearItem) -> u32 {
    item_power(item.tier, item.rarity, item.item_level)
}

/// Total power of a set of equipped items
pub fn loadout_power(items: &[GearItem]) -> u32 {
    items.iter().map(gear_item_power).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_power_steps() {
        assert_eq!(base_power(2, Rarity::Common), 40);
        assert_eq!(base_power(3, Rarity::Common), 70);
        assert_eq!(base_power(4, Rarity::Common), 90);
        assert_eq!(base_power(5, Rarity::Common), 110);
        assert_eq!(base_power(7, Rarity::Common), 150);
    }

    #[test]
    fn test_rarity_bonus_applies_from_tier_four() {
        assert_eq!(base_power(4, Rarity::Rare), 102);
        assert_eq!(base_power(4, Rarity::Epic), 112);
        assert_eq!(base_power(4, Rarity::Legendary), 112);
        // Below tier IV the step table is flat across rarities.
        assert_eq!(base_power(3, Rarity::Legendary), 70);
        assert_eq!(base_power(2, Rarity::Epic), 40);
    }

    #[test]
    fn test_item_level_scaling() {
        assert_eq!(item_power(2, Rarity::Common, 1), 40);
        assert_eq!(item_power(2, Rarity::Common, 10), 58);
        assert_eq!(item_power(4, Rarity::Rare, 5), 110);
        // Level 0 never underflows.
        assert_eq!(item_power(2, Rarity::Common, 0), 40);
    }
}
