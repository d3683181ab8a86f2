use crate::color_box::ColorBox;
use log::trace;
use std::{cmp::Ordering, collections::BinaryHeap};

/// Partitions a set of samples into a bounded number of boxes using median cut.
pub struct MedianCutQuantizer {
    samples: Vec<(u8, u8, u8)>,
    max_boxes: usize,
}

/// The result of a quantization run: the final boxes and the samples they cover.
#[derive(Debug)]
pub struct Quantized {
    pub samples: Vec<(u8, u8, u8)>,
    /// The leaf boxes in the order they were created.
    pub boxes: Vec<ColorBox>,
}

// a worklist entry, referring to a box in the arena. entries are ordered by the box's priority so the
// heap always pops the most significant box first, with older boxes winning ties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ranked {
    priority: u64,
    index: usize,
}

impl MedianCutQuantizer {
    pub fn new(samples: Vec<(u8, u8, u8)>, max_boxes: usize) -> Self {
        Self { samples, max_boxes }
    }

    pub fn quantize(mut self) -> Quantized {
        if self.samples.is_empty() || self.max_boxes == 0 {
            return Quantized {
                samples: self.samples,
                boxes: Vec::new(),
            };
        }

        // boxes are never removed from the arena, a split only retires its parent from the worklist.
        // the worklist is split between the heap of boxes that may still be split and the ones that
        // are known to be a single color
        let mut arena = vec![ColorBox::new(&self.samples, 0..self.samples.len())];
        let mut retired = vec![false];
        let mut settled = Vec::new();

        let mut pq = BinaryHeap::with_capacity(self.max_boxes);
        pq.push(Ranked::new(&arena, 0));

        while pq.len() + settled.len() < self.max_boxes {
            let Some(Ranked { index, .. }) = pq.pop() else {
                trace!("no splittable boxes left at {} boxes", settled.len());
                break;
            };

            match arena[index].split(&mut self.samples) {
                Ok((low, high)) => {
                    trace!(
                        "split box {index} of {} samples into {} and {}",
                        arena[index].count(),
                        low.count(),
                        high.count()
                    );

                    retired[index] = true;

                    for child in [low, high] {
                        arena.push(child);
                        retired.push(false);
                        pq.push(Ranked::new(&arena, arena.len() - 1));
                    }
                }
                Err(_) => settled.push(index),
            }
        }

        let boxes = arena
            .into_iter()
            .zip(retired)
            .filter_map(|(color_box, retired)| (!retired).then_some(color_box))
            .collect();

        Quantized {
            samples: self.samples,
            boxes,
        }
    }
}

impl Ranked {
    fn new(arena: &[ColorBox], index: usize) -> Self {
        Self {
            priority: arena[index].priority(),
            index,
        }
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
