use std::collections::{BTreeMap, VecDeque};

use crate::input::InputEvent;

#[derive(Clone, Debug)]
pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: InputEvent,
}

/// Input events bucketed by the tick they were received on; FIFO within a tick.
#[derive(Debug)]
pub struct EventQueue {
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: InputEvent) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    /// Oldest event received on or before the current tick.
    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        let mut entry = self.by_tick.first_entry()?;
        if *entry.key() > self.now {
            return None;
        }
        let env = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        env
    }

    pub fn advance_tick(&mut self) {
        self.now = self.now.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.by_tick.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tick.is_empty()
    }
}
