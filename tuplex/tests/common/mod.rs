//! A value which records every time it is cloned or dropped.

#![allow(dead_code)]

use std::{cell::Cell, rc::Rc};

use tuplex::Decay;

/// Shared tallies for a family of [`Tracked`] values.
#[derive(Debug, Default)]
pub struct Counts {
    clones: Cell<usize>,
    drops: Cell<usize>,
}

impl Counts {
    pub fn new() -> Rc<Self> {
        Rc::new(Counts::default())
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// A value carrying an identifier, whose clones and drops are tallied in its [`Counts`].
#[derive(Debug, Decay)]
pub struct Tracked {
    id: u32,
    counts: Rc<Counts>,
}

impl Tracked {
    pub fn new(id: u32, counts: &Rc<Counts>) -> Self {
        Tracked {
            id,
            counts: Rc::clone(counts),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counts.clones.set(self.counts.clones() + 1);
        Tracked::new(self.id, &self.counts)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counts.drops.set(self.counts.drops() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
