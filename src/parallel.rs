//! Block-parallel execution of elementwise jobs.
//!
//! A [`ParallelExecutor`] owns a rayon pool. A job over `size` elements is
//! cut into `size / block_size` contiguous blocks, each spawned as one task
//! inside a single [`rayon::ThreadPool::scope`], and the remainder runs on the
//! caller after the scope returns. Every call blocks until all of its blocks
//! are done, so successive calls never overlap.
//!
//! Blocks write disjoint `chunks_mut` ranges of the destination. Operands
//! without raw-array access fall back to the serial dispatcher.
//!
//! The executor is an owned value: [`resize`](ParallelExecutor::resize) and
//! [`shutdown`](ParallelExecutor::shutdown) consume it, so neither can run
//! while a job borrowed from it is still in flight.

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{argument_error, Result, VectorError};
use crate::ops::dispatch::{self, check_dims};
use crate::vector::dense::ArrayVector;
use crate::vector::element::Element;
use crate::vector::traits::{compatible_walks, VectorGet, VectorSet};

/// A worker pool plus the block length used to partition jobs.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: Option<ThreadPool>,
    threads: usize,
    block_size: usize,
}

impl ParallelExecutor {
    /// Builds an executor with `threads` workers. One thread means serial
    /// mode: no pool is created and every job runs on the caller.
    pub fn new(threads: usize) -> Result<Self> {
        Self::build(threads, Config::global().block_size)
    }

    /// An executor sized from the process configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(config.thread_number, config.block_size)
    }

    fn build(threads: usize, block_size: usize) -> Result<Self> {
        if threads == 0 {
            return Err(argument_error("thread count must be at least 1"));
        }
        if block_size == 0 {
            return Err(argument_error("block size must be positive"));
        }
        let pool = if threads == 1 {
            None
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("densevec-worker-{i}"))
                .build()
                .map_err(|e| VectorError::ThreadPool {
                    message: e.to_string(),
                })?;
            Some(pool)
        };
        debug!(threads, block_size, "executor built");
        Ok(ParallelExecutor {
            pool,
            threads,
            block_size,
        })
    }

    pub fn with_block_size(mut self, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(argument_error("block size must be positive"));
        }
        self.block_size = block_size;
        Ok(self)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn is_serial(&self) -> bool {
        self.pool.is_none()
    }

    /// Shuts this executor down and returns one with `threads` workers and
    /// the same block size.
    pub fn resize(self, threads: usize) -> Result<Self> {
        let block_size = self.block_size;
        debug!(from = self.threads, to = threads, "executor resize");
        self.shutdown();
        Self::build(threads, block_size)
    }

    /// Drops the pool. Workers exit once their queues drain, which is
    /// immediate here because every job is joined before it returns.
    pub fn shutdown(self) {
        debug!(threads = self.threads, "executor shutdown");
        drop(self.pool);
    }

    /// Calls `f(start, end)` for every block of `[0, size)`.
    ///
    /// Full blocks run on the pool, the trailing partial block on the caller.
    pub fn for_each_block<F>(&self, size: usize, f: F)
    where
        F: Fn(usize, usize) + Sync,
    {
        let Some(pool) = &self.pool else {
            if size > 0 {
                f(0, size);
            }
            return;
        };
        let block = self.block_size;
        let full = size / block * block;
        let f = &f;
        pool.scope(|s| {
            for start in (0..full).step_by(block) {
                s.spawn(move |_| f(start, start + block));
            }
        });
        if full < size {
            f(full, size);
        }
    }

    /// Splits `dest` into blocks and calls `f(offset, chunk)` on each.
    fn for_each_chunk<U, F>(&self, dest: &mut [U], f: F)
    where
        U: Send,
        F: Fn(usize, &mut [U]) + Sync,
    {
        let Some(pool) = &self.pool else {
            f(0, dest);
            return;
        };
        let block = self.block_size;
        let full = dest.len() / block * block;
        let (head, tail) = dest.split_at_mut(full);
        let f = &f;
        pool.scope(|s| {
            for (i, chunk) in head.chunks_mut(block).enumerate() {
                s.spawn(move |_| f(i * block, chunk));
            }
        });
        if !tail.is_empty() {
            f(full, tail);
        }
    }

    /// `dest[i] = f(src[i])`.
    pub fn map_into<V, D, F>(&self, src: &V, dest: &mut D, f: F) -> Result<()>
    where
        V: VectorGet + ?Sized,
        D: VectorSet + ?Sized,
        F: Fn(V::Elem) -> D::Elem + Sync,
    {
        check_dims("parallel_map", src.size(), dest.size())?;
        if let Some(s) = src.same_order() {
            if let Some(d) = dest.same_order_mut() {
                if compatible_walks(s.reverse, s.size, d.reverse, d.size) {
                    let len = s.size.min(d.size);
                    let input = &s.window()[..len];
                    let output = &mut d.into_window()[..len];
                    trace!(len, block = self.block_size, "parallel map");
                    self.for_each_chunk(output, |offset, chunk| {
                        for (slot, &v) in chunk.iter_mut().zip(&input[offset..]) {
                            *slot = f(v);
                        }
                    });
                    return Ok(());
                }
            }
        }
        dispatch::map_into("parallel_map", src, dest, |v| f(v))
    }

    /// `dest[i] = f(lhs[i], rhs[i])`.
    pub fn zip_into<L, R, D, F>(&self, lhs: &L, rhs: &R, dest: &mut D, f: F) -> Result<()>
    where
        L: VectorGet + ?Sized,
        R: VectorGet + ?Sized,
        D: VectorSet + ?Sized,
        F: Fn(L::Elem, R::Elem) -> D::Elem + Sync,
    {
        check_dims("parallel_zip", lhs.size(), rhs.size())?;
        check_dims("parallel_zip", lhs.size(), dest.size())?;
        if let (Some(l), Some(r)) = (lhs.same_order(), rhs.same_order()) {
            if l.compatible(&r) {
                if let Some(d) = dest.same_order_mut() {
                    if d.compatible(&l) {
                        let len = l.size.min(r.size).min(d.size);
                        let (a, b) = (&l.window()[..len], &r.window()[..len]);
                        let output = &mut d.into_window()[..len];
                        trace!(len, block = self.block_size, "parallel zip");
                        self.for_each_chunk(output, |offset, chunk| {
                            let pairs = a[offset..].iter().zip(&b[offset..]);
                            for (slot, (&x, &y)) in chunk.iter_mut().zip(pairs) {
                                *slot = f(x, y);
                            }
                        });
                        return Ok(());
                    }
                }
            }
        }
        dispatch::ebe_into("parallel_zip", lhs, rhs, dest, |x, y| f(x, y))
    }

    pub fn map<V, U, F>(&self, src: &V, f: F) -> Result<ArrayVector<U>>
    where
        V: VectorGet + ?Sized,
        U: Element,
        F: Fn(V::Elem) -> U + Sync,
    {
        let mut out = dispatch::zeros_like(src);
        self.map_into(src, &mut out, f)?;
        Ok(out)
    }

    pub fn zip<L, R, U, F>(&self, lhs: &L, rhs: &R, f: F) -> Result<ArrayVector<U>>
    where
        L: VectorGet + ?Sized,
        R: VectorGet + ?Sized,
        U: Element,
        F: Fn(L::Elem, R::Elem) -> U + Sync,
    {
        let mut out = dispatch::zeros_like(lhs);
        self.zip_into(lhs, rhs, &mut out, f)?;
        Ok(out)
    }
}
