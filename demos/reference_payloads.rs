//! Example: Outcomes that alias caller-owned storage
//!
//! A lookup returns a [`RefOutcome`] pointing at the stored entry instead of
//! copying it, and a [`MutOutcome`] lets the caller edit the entry in place.

use feer::{fail, MutOutcome, Outcome, RefOutcome};

struct Inventory {
    items: Vec<(String, u32)>,
}

impl Inventory {
    fn get(&self, name: &str) -> RefOutcome<'_, u32> {
        match self.items.iter().find(|(item, _)| item == name) {
            Some((_, count)) => RefOutcome::ok(count),
            None => Outcome::err(fail!("unknown item {:?}", name)),
        }
    }

    fn get_mut(&mut self, name: &str) -> MutOutcome<'_, u32> {
        match self.items.iter_mut().find(|(item, _)| item == name) {
            Some((_, count)) => MutOutcome::ok(count),
            None => Outcome::err(fail!("unknown item {:?}", name)),
        }
    }
}

fn main() {
    let mut inventory = Inventory {
        items: vec![("bolts".to_string(), 40), ("nuts".to_string(), 12)],
    };

    // Writes go straight into the inventory.
    let mut nuts = inventory.get_mut("nuts");
    if nuts.is_ok() {
        *nuts.value_mut() += 8;
    }

    for name in ["bolts", "nuts", "washers"] {
        let report = inventory.get(name).match_with(
            |count| format!("{name}: {count}"),
            |err| format!("{name}: {err:#}"),
        );
        println!("{report}");
    }
}
