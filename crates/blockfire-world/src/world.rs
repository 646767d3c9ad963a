//! Sparse block store with sector buckets, a shown set and renderer handles.
use std::time::{Duration, Instant};

use blockfire_blocks::{BlockAtlas, BlockTexture};
use hashbrown::HashMap;

use crate::coords::{BlockPos, FACES, STREAM_PAD, SectorCoord, check_cell};
use crate::error::{Result, WorldError};
use crate::geometry::{BlockGeometry, GeometryBatch, GeometryHandle, GeometrySink};
use crate::queue::{MeshOp, MeshQueue};

/// Default wall-clock budget for one `process_queue` call (one tick at 60 Hz).
pub const TICK_BUDGET: Duration = Duration::from_nanos(1_000_000_000 / 60);

pub struct World<S = GeometryBatch> {
    blocks: HashMap<BlockPos, BlockTexture>,
    sectors: HashMap<SectorCoord, Vec<BlockPos>>,
    shown: HashMap<BlockPos, BlockTexture>,
    handles: HashMap<BlockPos, GeometryHandle>,
    queue: MeshQueue,
    sink: S,
    atlas: BlockAtlas,
    stream_pad: i32,
}

impl World<GeometryBatch> {
    pub fn in_memory() -> Self {
        Self::new(GeometryBatch::new(), BlockAtlas::default())
    }
}

impl Default for World<GeometryBatch> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: GeometrySink> World<S> {
    pub fn new(sink: S, atlas: BlockAtlas) -> Self {
        Self {
            blocks: HashMap::new(),
            sectors: HashMap::new(),
            shown: HashMap::new(),
            handles: HashMap::new(),
            queue: MeshQueue::new(),
            sink,
            atlas,
            stream_pad: STREAM_PAD,
        }
    }

    pub fn with_stream_pad(mut self, pad: i32) -> Self {
        self.stream_pad = pad.max(0);
        self
    }

    pub fn stream_pad(&self) -> i32 {
        self.stream_pad
    }

    // ---- queries ----

    #[inline]
    pub fn contains(&self, pos: BlockPos) -> bool {
        self.blocks.contains_key(&pos)
    }

    #[inline]
    pub fn texture_at(&self, pos: BlockPos) -> Option<BlockTexture> {
        self.blocks.get(&pos).copied()
    }

    #[inline]
    pub fn is_shown(&self, pos: BlockPos) -> bool {
        self.shown.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> impl Iterator<Item = (BlockPos, BlockTexture)> + '_ {
        self.blocks.iter().map(|(p, t)| (*p, *t))
    }

    pub fn sector_members(&self, sector: SectorCoord) -> &[BlockPos] {
        self.sectors.get(&sector).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sectors(&self) -> impl Iterator<Item = (SectorCoord, &[BlockPos])> + '_ {
        self.sectors.iter().map(|(s, v)| (*s, v.as_slice()))
    }

    pub fn shown_len(&self) -> usize {
        self.shown.len()
    }

    pub fn shown_positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.shown.keys().copied()
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    pub fn handle_positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.handles.keys().copied()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn queue(&self) -> &MeshQueue {
        &self.queue
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn atlas(&self) -> &BlockAtlas {
        &self.atlas
    }

    /// True if any of the six face neighbours is empty.
    pub fn exposed(&self, pos: BlockPos) -> bool {
        FACES.iter().any(|f| !self.blocks.contains_key(&pos.offset(*f)))
    }

    // ---- edits ----

    /// Inserts a block into an empty cell and shows it if exposed.
    /// Returns `Ok(false)` without touching anything if the cell is occupied.
    pub fn add_block(
        &mut self,
        pos: BlockPos,
        texture: BlockTexture,
        immediate: bool,
    ) -> Result<bool> {
        check_cell("add_block", pos)?;
        if self.blocks.contains_key(&pos) {
            return Ok(false);
        }
        self.blocks.insert(pos, texture);
        self.sectors.entry(pos.sector()).or_default().push(pos);
        if self.exposed(pos) {
            self.show_block(pos, immediate)?;
        }
        Ok(true)
    }

    /// Removes whatever occupies `pos` and places `texture` there.
    pub fn replace_block(
        &mut self,
        pos: BlockPos,
        texture: BlockTexture,
        immediate: bool,
    ) -> Result<Option<BlockTexture>> {
        let previous = if self.blocks.contains_key(&pos) {
            Some(self.remove_block(pos, immediate)?)
        } else {
            None
        };
        self.add_block(pos, texture, immediate)?;
        Ok(previous)
    }

    /// Removes a block, hides it, and shows neighbours the removal uncovered.
    pub fn remove_block(&mut self, pos: BlockPos, immediate: bool) -> Result<BlockTexture> {
        let texture = self
            .blocks
            .remove(&pos)
            .ok_or_else(|| WorldError::precondition("remove_block", pos, "no block at position"))?;
        let sector = pos.sector();
        if let Some(members) = self.sectors.get_mut(&sector) {
            members.retain(|p| *p != pos);
            if members.is_empty() {
                self.sectors.remove(&sector);
            }
        }
        if self.shown.contains_key(&pos) {
            self.hide_block(pos, immediate)?;
        }
        for n in pos.neighbors() {
            if self.blocks.contains_key(&n) && !self.shown.contains_key(&n) && self.exposed(n) {
                self.show_block(n, immediate)?;
            }
        }
        Ok(texture)
    }

    pub fn show_block(&mut self, pos: BlockPos, immediate: bool) -> Result<()> {
        let texture = self
            .blocks
            .get(&pos)
            .copied()
            .ok_or_else(|| WorldError::precondition("show_block", pos, "no block at position"))?;
        if self.shown.contains_key(&pos) {
            return Err(WorldError::precondition("show_block", pos, "block already shown"));
        }
        self.shown.insert(pos, texture);
        self.dispatch(MeshOp::Show { pos, texture }, immediate)
    }

    pub fn hide_block(&mut self, pos: BlockPos, immediate: bool) -> Result<()> {
        if self.shown.remove(&pos).is_none() {
            return Err(WorldError::precondition("hide_block", pos, "block is not shown"));
        }
        self.dispatch(MeshOp::Hide { pos }, immediate)
    }

    /// Queues a show for every exposed, not yet shown block of the sector.
    pub fn show_sector(&mut self, sector: SectorCoord) -> Result<usize> {
        let targets: Vec<BlockPos> = self
            .sector_members(sector)
            .iter()
            .copied()
            .filter(|p| !self.shown.contains_key(p) && self.exposed(*p))
            .collect();
        for pos in &targets {
            self.show_block(*pos, false)?;
        }
        Ok(targets.len())
    }

    /// Queues a hide for every shown block of the sector.
    pub fn hide_sector(&mut self, sector: SectorCoord) -> Result<usize> {
        let targets: Vec<BlockPos> = self
            .sector_members(sector)
            .iter()
            .copied()
            .filter(|p| self.shown.contains_key(p))
            .collect();
        for pos in &targets {
            self.hide_block(*pos, false)?;
        }
        Ok(targets.len())
    }

    /// Moves the streaming window: shows sectors entering it and hides sectors leaving it.
    pub fn change_sectors(
        &mut self,
        before: Option<SectorCoord>,
        after: Option<SectorCoord>,
    ) -> Result<()> {
        let before_set = before.map(|s| s.window(self.stream_pad)).unwrap_or_default();
        let after_set = after.map(|s| s.window(self.stream_pad)).unwrap_or_default();
        let mut shown = 0;
        let mut hidden = 0;
        for sector in after_set.iter().filter(|s| !before_set.contains(s)) {
            shown += self.show_sector(*sector)?;
        }
        for sector in before_set.iter().filter(|s| !after_set.contains(s)) {
            hidden += self.hide_sector(*sector)?;
        }
        log::debug!(
            "sector change {:?} -> {:?}: {} shows, {} hides queued",
            before,
            after,
            shown,
            hidden
        );
        Ok(())
    }

    // ---- queue ----

    /// Executes queued operations until the queue is empty or `budget` has elapsed.
    /// The budget is checked before each entry.
    pub fn process_queue(&mut self, budget: Duration) -> Result<usize> {
        let start = Instant::now();
        let mut executed = 0;
        while start.elapsed() < budget {
            let Some(op) = self.queue.pop() else {
                break;
            };
            self.execute(op)?;
            executed += 1;
        }
        if executed > 0 {
            log::trace!(
                "mesh queue: {} executed in {:?}, {} left",
                executed,
                start.elapsed(),
                self.queue.len()
            );
        }
        Ok(executed)
    }

    pub fn process_entire_queue(&mut self) -> Result<usize> {
        let mut executed = 0;
        while let Some(op) = self.queue.pop() {
            self.execute(op)?;
            executed += 1;
        }
        log::trace!("mesh queue drained: {} executed", executed);
        Ok(executed)
    }

    // An immediate op on a position with queued entries waits behind them.
    fn dispatch(&mut self, op: MeshOp, immediate: bool) -> Result<()> {
        if immediate && !self.queue.has_pending(op.pos()) {
            self.execute(op)
        } else {
            self.queue.enqueue(op);
            Ok(())
        }
    }

    fn execute(&mut self, op: MeshOp) -> Result<()> {
        match op {
            MeshOp::Show { pos, texture } => {
                if self.handles.contains_key(&pos) {
                    return Err(WorldError::precondition("show", pos, "geometry already present"));
                }
                let geometry = BlockGeometry::new(pos, texture, self.atlas.uvs(texture));
                let handle = self.sink.add_geometry(geometry);
                self.handles.insert(pos, handle);
            }
            MeshOp::Hide { pos } => {
                let handle = self
                    .handles
                    .remove(&pos)
                    .ok_or_else(|| WorldError::precondition("hide", pos, "no geometry handle"))?;
                if !self.sink.remove_geometry(handle) {
                    let detail = "renderer did not hold geometry";
                    return Err(WorldError::precondition("hide", pos, detail));
                }
            }
        }
        Ok(())
    }
}
