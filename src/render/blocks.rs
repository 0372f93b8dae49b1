//! Spatial block decomposition of the canvas.
//!
//! Blocks are the unit of work handed to worker threads. Each block's pixels
//! form a small contiguous-per-row footprint, so a worker's writes stay
//! local; block size is the experiment's knob for how often block boundaries
//! bisect a hardware cache line shared between two workers.
//!
//! [`split_views`] partitions the canvas *memory* itself: every pixel lands
//! in exactly one [`BlockView`], proven to the compiler with `split_at_mut`.
//! That disjointness is the sole invariant that makes lock-free concurrent
//! canvas writes safe.

use crate::foundation::core::Rgb;

/// A rectangular, canvas-aligned region of pixels.
///
/// The set of blocks produced by [`tile`] exactly tiles the canvas; edge
/// blocks are clipped to the canvas bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BlockRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels, `1..=block_size`.
    pub width: u32,
    /// Height in pixels, `1..=block_size`.
    pub height: u32,
}

/// Tile a `width x height` canvas into `block_size`-sided blocks, row-major.
///
/// A `block_size` exceeding either dimension degrades to fewer (or one)
/// clipped blocks rather than erroring.
pub(crate) fn tile(width: u32, height: u32, block_size: u32) -> Vec<BlockRect> {
    debug_assert!(block_size >= 1);
    let mut rects = Vec::with_capacity(
        (width.div_ceil(block_size) as usize) * (height.div_ceil(block_size) as usize),
    );
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            rects.push(BlockRect {
                x,
                y,
                width: block_size.min(width - x),
                height: block_size.min(height - y),
            });
            x += block_size;
        }
        y += block_size;
    }
    rects
}

/// Exclusive view of one block's pixels inside the shared canvas buffer.
///
/// `rows[i]` is the mutable row fragment for local row `i` of the block.
/// Views are disjoint by construction and may be moved onto worker threads
/// without any further synchronization.
pub(crate) struct BlockView<'a> {
    pub rect: BlockRect,
    pub rows: Vec<&'a mut [Rgb]>,
}

/// Decompose the canvas buffer into one disjoint [`BlockView`] per block of
/// [`tile`], in the same row-major block order.
pub(crate) fn split_views(
    pixels: &mut [Rgb],
    width: u32,
    height: u32,
    block_size: u32,
) -> Vec<BlockView<'_>> {
    debug_assert_eq!(pixels.len(), width as usize * height as usize);
    let cols = width.div_ceil(block_size) as usize;

    let mut views: Vec<BlockView<'_>> = tile(width, height, block_size)
        .into_iter()
        .map(|rect| BlockView {
            rect,
            rows: Vec::with_capacity(rect.height as usize),
        })
        .collect();

    let mut rest = pixels;
    for y in 0..height {
        let (row, tail) = rest.split_at_mut(width as usize);
        rest = tail;

        let block_row = (y / block_size) as usize;
        let mut row_rest = row;
        for col in 0..cols {
            let frag_w = block_size.min(width - col as u32 * block_size) as usize;
            let (frag, row_tail) = row_rest.split_at_mut(frag_w);
            row_rest = row_tail;
            views[block_row * cols + col].rows.push(frag);
        }
    }
    views
}

#[cfg(test)]
#[path = "../../tests/unit/render/blocks.rs"]
mod tests;
