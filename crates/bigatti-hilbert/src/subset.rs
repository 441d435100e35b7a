//! Depth-first enumeration of generator subsets.
//!
//! The walk visits the subsets of the generator list in increasing index
//! order using an explicit stack of frames instead of recursive calls. A
//! frame holds the lcm of the subset taken so far, its sign and the index
//! of the next generator to try. When the cursor of a frame runs off the
//! end of the generator list, the frame's subset is emitted and the frame
//! is popped.
//!
//! Frames are kept between walks, so a walker that has reached a given
//! depth once never allocates for that depth again.

use bigatti_ideal::Ideal;
use bigatti_term::term::{self, Exponent};
use bigatti_term::{AllocError, Term, TermPool};

use crate::polynomial::SignedTermSink;
use crate::sign::Sign;

/// Which subsets a walk emits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WalkMode {
    /// Every subset (the Taylor sum).
    All,
    /// Only subsets whose lcm no generator lies strictly below. A pruned
    /// subset is not descended into, since every superset of it is pruned
    /// as well.
    Prune,
}

/// Counters for one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkCounts {
    /// Subsets emitted.
    pub emitted: u64,
    /// Subsets skipped together with all their supersets.
    pub pruned: u64,
}

#[derive(Debug)]
struct Frame {
    lcm: Term,
    sign: Sign,
    cursor: usize,
}

/// Reusable frame stack for subset walks.
#[derive(Debug, Default)]
pub struct SubsetWalker {
    frames: Vec<Frame>,
    scratch: Term,
    var_count: usize,
}

impl SubsetWalker {
    /// Creates a walker without any frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `sign * (-1)^|S| * multiplier * lcm(S)` for the subsets `S`
    /// of the generators of `ideal` selected by `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if a frame for a new depth cannot be
    /// allocated. Terms already emitted stay emitted.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` does not have the ideal's variable count.
    pub fn walk(
        &mut self,
        ideal: &Ideal,
        multiplier: &[Exponent],
        sign: Sign,
        mode: WalkMode,
        pool: &mut TermPool,
        sink: &mut dyn SignedTermSink,
    ) -> Result<WalkCounts, AllocError> {
        assert_eq!(multiplier.len(), ideal.var_count(), "variable count mismatch");
        self.prepare(ideal.var_count(), pool)?;

        let mut counts = WalkCounts::default();
        self.ensure_depth(0, pool)?;
        {
            let root = &mut self.frames[0];
            root.lcm.set_identity();
            root.sign = sign;
            root.cursor = 0;
        }

        let mut depth = 0;
        loop {
            let cursor = self.frames[depth].cursor;
            if cursor == ideal.len() {
                let frame = &self.frames[depth];
                term::product_into(&mut self.scratch, &frame.lcm, multiplier);
                sink.emit(frame.sign, &self.scratch);
                counts.emitted += 1;
                if depth == 0 {
                    break;
                }
                depth -= 1;
                continue;
            }

            self.frames[depth].cursor += 1;
            self.ensure_depth(depth + 1, pool)?;
            let (parents, children) = self.frames.split_at_mut(depth + 1);
            let parent = &parents[depth];
            let child = &mut children[0];

            term::lcm_into(&mut child.lcm, &parent.lcm, ideal.generator(cursor));
            if mode == WalkMode::Prune && ideal.strictly_contains(&child.lcm) {
                counts.pruned += 1;
                continue;
            }
            child.sign = parent.sign.flip();
            child.cursor = cursor + 1;
            depth += 1;
        }

        Ok(counts)
    }

    /// Returns the number of frames held.
    #[must_use]
    pub fn depth_capacity(&self) -> usize {
        self.frames.len()
    }

    /// Returns every frame to `pool`.
    pub fn release(&mut self, pool: &mut TermPool) {
        for frame in self.frames.drain(..) {
            pool.recycle(frame.lcm);
        }
        pool.recycle(std::mem::take(&mut self.scratch));
        self.var_count = 0;
    }

    fn prepare(&mut self, var_count: usize, pool: &mut TermPool) -> Result<(), AllocError> {
        if self.var_count == var_count && self.scratch.var_count() == var_count {
            return Ok(());
        }
        self.release(pool);
        self.scratch = pool.alloc(var_count)?;
        self.var_count = var_count;
        Ok(())
    }

    fn ensure_depth(&mut self, depth: usize, pool: &mut TermPool) -> Result<(), AllocError> {
        while self.frames.len() <= depth {
            self.frames.push(Frame {
                lcm: pool.alloc(self.var_count)?,
                sign: Sign::Plus,
                cursor: 0,
            });
        }
        Ok(())
    }
}
