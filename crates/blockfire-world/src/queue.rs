use std::collections::VecDeque;

use blockfire_blocks::BlockTexture;
use hashbrown::HashMap;

use crate::coords::BlockPos;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshOp {
    Show { pos: BlockPos, texture: BlockTexture },
    Hide { pos: BlockPos },
}

impl MeshOp {
    #[inline]
    pub fn pos(&self) -> BlockPos {
        match *self {
            MeshOp::Show { pos, .. } | MeshOp::Hide { pos } => pos,
        }
    }
}

/// FIFO of deferred mesh operations, with a per-position count of entries still waiting.
#[derive(Default, Debug)]
pub struct MeshQueue {
    ops: VecDeque<MeshOp>,
    pending: HashMap<BlockPos, u32>,
}

impl MeshQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, op: MeshOp) {
        *self.pending.entry(op.pos()).or_insert(0) += 1;
        self.ops.push_back(op);
    }

    pub fn pop(&mut self) -> Option<MeshOp> {
        let op = self.ops.pop_front()?;
        let pos = op.pos();
        if let Some(n) = self.pending.get_mut(&pos) {
            *n -= 1;
            if *n == 0 {
                self.pending.remove(&pos);
            }
        }
        Some(op)
    }

    /// True while an entry for `pos` has not been executed yet.
    #[inline]
    pub fn has_pending(&self, pos: BlockPos) -> bool {
        self.pending.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeshOp> {
        self.ops.iter()
    }
}
