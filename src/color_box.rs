use std::ops::Range;

/// One of the three axes of the RGB color cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn of(self, (r, g, b): (u8, u8, u8)) -> u8 {
        match self {
            Channel::Red => r,
            Channel::Green => g,
            Channel::Blue => b,
        }
    }
}

/// Returned when a box's samples all share a single color and it can't be split any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSplittable;

/// An axis-aligned box in RGB space, covering a contiguous region of the quantizer's samples.
///
/// The box doesn't hold the samples itself, only the region they occupy, so splitting a box
/// partitions that region into two disjoint halves without copying anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBox {
    region: Range<usize>,
    // min, max
    red_range: (u8, u8),
    green_range: (u8, u8),
    blue_range: (u8, u8),
}

impl ColorBox {
    /// Fit a box tightly around the samples in `region`. The region must not be empty.
    pub fn new(samples: &[(u8, u8, u8)], region: Range<usize>) -> Self {
        debug_assert!(!region.is_empty());

        let (mut min_red, mut max_red) = (u8::MAX, 0);
        let (mut min_green, mut max_green) = (u8::MAX, 0);
        let (mut min_blue, mut max_blue) = (u8::MAX, 0);

        for &(r, g, b) in &samples[region.clone()] {
            min_red = min_red.min(r);
            max_red = max_red.max(r);
            min_green = min_green.min(g);
            max_green = max_green.max(g);
            min_blue = min_blue.min(b);
            max_blue = max_blue.max(b);
        }

        Self {
            region,
            red_range: (min_red, max_red),
            green_range: (min_green, max_green),
            blue_range: (min_blue, max_blue),
        }
    }

    pub fn region(&self) -> Range<usize> {
        self.region.clone()
    }

    pub fn count(&self) -> usize {
        self.region.len()
    }

    pub fn range(&self, channel: Channel) -> u8 {
        let (min, max) = match channel {
            Channel::Red => self.red_range,
            Channel::Green => self.green_range,
            Channel::Blue => self.blue_range,
        };

        max - min
    }

    pub fn volume(&self) -> u32 {
        (self.range(Channel::Red) as u32 + 1)
            * (self.range(Channel::Green) as u32 + 1)
            * (self.range(Channel::Blue) as u32 + 1)
    }

    /// The key boxes are picked for splitting by.
    pub fn priority(&self) -> u64 {
        self.volume() as u64 * self.count() as u64
    }

    /// The channel with the widest range. Ties go to red, then green.
    pub fn dominant_channel(&self) -> Channel {
        let red = self.range(Channel::Red);
        let green = self.range(Channel::Green);
        let blue = self.range(Channel::Blue);

        if red >= green && red >= blue {
            Channel::Red
        } else if green >= blue {
            Channel::Green
        } else {
            Channel::Blue
        }
    }

    pub fn can_split(&self) -> bool {
        self.range(self.dominant_channel()) > 0
    }

    /// Split the box in two at the population median of its dominant channel.
    ///
    /// The box's samples are reordered in place by the dominant channel. The split never separates
    /// samples sharing a value on that channel, so both boxes get at least one distinct value.
    pub fn split(&self, samples: &mut [(u8, u8, u8)]) -> Result<(ColorBox, ColorBox), NotSplittable> {
        if !self.can_split() {
            return Err(NotSplittable);
        }

        let channel = self.dominant_channel();
        let region = &mut samples[self.region.clone()];
        region.sort_by_key(|&rgb| channel.of(rgb));

        let split_point = self.region.start + find_split_point(region, channel);
        let low = ColorBox::new(samples, self.region.start..split_point);
        let high = ColorBox::new(samples, split_point..self.region.end);

        Ok((low, high))
    }
}

// `sorted` is ordered by `channel` and holds at least two distinct values on it
fn find_split_point(sorted: &[(u8, u8, u8)], channel: Channel) -> usize {
    // the running population first reaches half of the total at this value. the lower box takes every
    // sample up to and including its run, unless that run is the last one, in which case it goes to
    // the upper box instead
    let median = channel.of(sorted[sorted.len() / 2 - 1]);

    let run_end = sorted.partition_point(|&rgb| channel.of(rgb) <= median);
    if run_end < sorted.len() {
        run_end
    } else {
        sorted.partition_point(|&rgb| channel.of(rgb) < median)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_box(samples: &[(u8, u8, u8)]) -> ColorBox {
        ColorBox::new(samples, 0..samples.len())
    }

    #[test]
    fn computes_ranges_and_volume() {
        let samples = [(10, 0, 200), (20, 5, 100), (15, 5, 150)];
        let color_box = full_box(&samples);

        assert_eq!(color_box.range(Channel::Red), 10);
        assert_eq!(color_box.range(Channel::Green), 5);
        assert_eq!(color_box.range(Channel::Blue), 100);
        assert_eq!(color_box.volume(), 11 * 6 * 101);
        assert_eq!(color_box.count(), 3);
        assert_eq!(color_box.priority(), 11 * 6 * 101 * 3);
    }

    #[test]
    fn single_color_has_unit_volume() {
        let samples = [(3, 3, 3); 4];
        let color_box = full_box(&samples);

        assert_eq!(color_box.volume(), 1);
        assert!(!color_box.can_split());
    }

    #[test]
    fn dominant_channel_ties_prefer_red_then_green() {
        assert_eq!(full_box(&[(0, 0, 0), (9, 9, 9)]).dominant_channel(), Channel::Red);
        assert_eq!(full_box(&[(0, 0, 0), (1, 9, 9)]).dominant_channel(), Channel::Green);
        assert_eq!(full_box(&[(0, 0, 0), (1, 2, 9)]).dominant_channel(), Channel::Blue);
    }

    #[test]
    fn splits_at_population_median() {
        let mut samples = vec![(255, 0, 0), (0, 255, 0), (255, 0, 0), (0, 255, 0)];
        let color_box = full_box(&samples);

        let (low, high) = color_box.split(&mut samples).unwrap();

        assert_eq!(low.region(), 0..2);
        assert_eq!(high.region(), 2..4);
        assert!(samples[low.region()].iter().all(|&rgb| rgb == (0, 255, 0)));
        assert!(samples[high.region()].iter().all(|&rgb| rgb == (255, 0, 0)));
    }

    #[test]
    fn split_keeps_both_sides_non_empty() {
        let mut samples = vec![(9, 0, 0), (0, 0, 0)];
        let (low, high) = full_box(&samples).split(&mut samples).unwrap();

        assert_eq!((low.count(), high.count()), (1, 1));
        assert_eq!(samples, vec![(0, 0, 0), (9, 0, 0)]);
    }

    #[test]
    fn split_of_sub_region_stays_inside_it() {
        let mut samples = vec![(1, 1, 1), (50, 0, 0), (10, 0, 0), (30, 0, 0), (2, 2, 2)];
        let color_box = ColorBox::new(&samples, 1..4);

        let (low, high) = color_box.split(&mut samples).unwrap();

        assert_eq!(low.region(), 1..2);
        assert_eq!(high.region(), 2..4);
        assert_eq!(samples[0], (1, 1, 1));
        assert_eq!(samples[4], (2, 2, 2));
        assert_eq!(&samples[1..4], &[(10, 0, 0), (30, 0, 0), (50, 0, 0)]);
    }

    #[test]
    fn uniform_box_is_not_splittable() {
        let mut samples = vec![(7, 8, 9); 5];
        let color_box = full_box(&samples);

        assert_eq!(color_box.split(&mut samples), Err(NotSplittable));
    }

    #[test]
    fn split_keeps_duplicates_together() {
        let mut samples = vec![(0, 0, 0), (255, 0, 0), (0, 0, 0), (0, 0, 0)];
        let (low, high) = full_box(&samples).split(&mut samples).unwrap();

        assert_eq!((low.count(), high.count()), (3, 1));
        assert!(samples[low.region()].iter().all(|&rgb| rgb == (0, 0, 0)));
        assert_eq!(samples[high.region()], [(255, 0, 0)]);
    }

    #[test]
    fn split_moves_a_trailing_median_run_up() {
        let mut samples = vec![(0, 4, 4); 5];
        samples.extend([(0, 90, 4), (0, 90, 4)]);
        let (low, high) = full_box(&samples).split(&mut samples).unwrap();
        assert_eq!((low.count(), high.count()), (5, 2));

        let mut samples = vec![(0, 0, 200); 5];
        samples.push((0, 0, 10));
        let (low, high) = full_box(&samples).split(&mut samples).unwrap();
        assert_eq!((low.count(), high.count()), (1, 5));
        assert_eq!(samples[low.region()], [(0, 0, 10)]);
    }

    #[test]
    fn split_closes_the_run_holding_the_median() {
        let mut samples = vec![(9, 0, 0), (5, 0, 0), (0, 0, 0), (5, 0, 0), (0, 0, 0), (5, 0, 0)];
        let (low, high) = full_box(&samples).split(&mut samples).unwrap();

        assert_eq!(low.region(), 0..5);
        assert_eq!(high.region(), 5..6);
        assert_eq!(samples[5], (9, 0, 0));
    }
}
