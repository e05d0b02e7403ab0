//! Equip/unequip protocol shared by all wearable items

use crate::event::{ItemEvent, ItemEventKind};
use crate::item::{Gear, Item};
use crate::types::SlotType;
use stat_core::{apply_stat_change, Sign, StatBlock, StatChange, StatError};

/// The parts of a battle entity that gear reads and writes
pub trait Wearer {
    fn name(&self) -> &str;

    fn stats(&self) -> &StatBlock;

    fn set_stats(&mut self, stats: StatBlock);

    /// Gear currently worn in a slot
    fn outfit_slot(&self, slot: SlotType) -> Option<&Gear>;

    /// Put gear into a slot, returning the previous occupant
    fn put_outfit_slot(&mut self, slot: SlotType, gear: Gear) -> Option<Gear>;

    /// Empty a slot, returning what was in it
    fn take_outfit_slot(&mut self, slot: SlotType) -> Option<Gear>;

    /// Add `count` copies of an item to the inventory
    fn add_item(&mut self, item: Item, count: u32);
}

/// Capability of an item that can be worn
///
/// Implementors only declare their slot and stat change; the equip,
/// unequip and use behavior is shared.
pub trait Equippable {
    fn name(&self) -> &str;

    fn slot(&self) -> SlotType;

    fn stat_change(&self) -> &StatChange;

    /// Shift the wearer's stats by this item's stat change
    fn alter_stats<W: Wearer + ?Sized>(&self, wearer: &mut W, sign: Sign) -> Result<(), StatError> {
        let stats = apply_stat_change(wearer.stats(), self.stat_change(), sign)?;
        wearer.set_stats(stats);
        Ok(())
    }

    /// Wear this item
    ///
    /// Whatever was in the slot before has its stat change reverted and
    /// goes back into the wearer's inventory, so after a swap only this
    /// item's change is applied. If the stats would overflow, the wearer
    /// is left unchanged.
    fn equip<W: Wearer + ?Sized>(self, wearer: &mut W) -> Result<ItemEvent, StatError>
    where
        Self: Sized + Into<Gear>,
    {
        let gear: Gear = self.into();
        let slot = gear.slot();

        let mut stats = apply_stat_change(wearer.stats(), gear.stat_change(), Sign::Apply)?;
        if let Some(previous) = wearer.outfit_slot(slot) {
            stats = apply_stat_change(&stats, previous.stat_change(), Sign::Revert)?;
        }

        let name = gear.name().to_string();
        wearer.set_stats(stats);
        if let Some(previous) = wearer.put_outfit_slot(slot, gear) {
            tracing::debug!(
                entity = wearer.name(),
                item = %previous.name,
                ?slot,
                "returned swapped gear to inventory"
            );
            wearer.add_item(Item::Gear(previous), 1);
        }

        tracing::debug!(entity = wearer.name(), item = %name, ?slot, "equipped");
        Ok(ItemEvent::new(wearer.name(), name, ItemEventKind::Equipped))
    }

    /// Take this item off
    ///
    /// Only acts when the slot actually holds this item; the removed
    /// item is returned to the wearer's inventory.
    fn unequip<W: Wearer + ?Sized>(&self, wearer: &mut W) -> Result<Option<ItemEvent>, StatError> {
        let slot = self.slot();
        match wearer.outfit_slot(slot) {
            Some(worn) if worn.name() == self.name() => {}
            _ => return Ok(None),
        }

        let Some(removed) = wearer.take_outfit_slot(slot) else {
            return Ok(None);
        };
        if let Err(e) = removed.alter_stats(wearer, Sign::Revert) {
            wearer.put_outfit_slot(slot, removed);
            return Err(e);
        }

        let name = removed.name.clone();
        wearer.add_item(Item::Gear(removed), 1);

        tracing::debug!(entity = wearer.name(), item = %name, ?slot, "unequipped");
        Ok(Some(ItemEvent::new(wearer.name(), name, ItemEventKind::Unequipped)))
    }

    /// Gear is worn, not used: produce a hint and leave stats alone
    fn use_on<U, T>(&self, user: &U, _target: &T) -> ItemEvent
    where
        U: Wearer + ?Sized,
        T: Wearer + ?Sized,
    {
        ItemEvent::new(user.name(), self.name(), ItemEventKind::EquipHint)
    }
}
