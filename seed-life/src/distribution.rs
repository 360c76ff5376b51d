use std::fmt::Debug;

/// Maps a uniform float in `[0, 1)` to one of a set of weighted options.
///
/// Construction expands the options into a slot table: with total weight `sum`,
/// the table is nominally `sum * resolution` long and option `i` gets
/// `ceil(weight_i / sum * sum * resolution)` consecutive slots. Selection reads
/// `slots[floor(f * slots.len())]`. The slot counts, not just the proportions,
/// decide which option every historical seed lands on, so the arithmetic is
/// kept exactly as it has always been.
#[derive(Clone, Debug)]
pub struct WeightedDistribution<T> {
    options: Vec<T>,
    slots: Vec<usize>,
}

impl<T> WeightedDistribution<T>
where
    T: Debug,
{
    /// Panics if any weight is negative or not finite, or if the table comes
    /// out empty. These are errors in the static option tables, never in user
    /// input.
    pub fn new<I>(weighted_options: I, resolution: u32) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (options, weights): (Vec<T>, Vec<f64>) = weighted_options.into_iter().unzip();
        assert!(
            weights.iter().all(|weight| weight.is_finite() && *weight >= 0.0),
            "invalid weights {weights:?}"
        );

        let slots = Self::build_slots(&weights, resolution);
        // Counts round up, so every positive weight owns at least one slot.
        assert!(!slots.is_empty(), "no slots for options {options:?}");

        Self { options, slots }
    }

    fn build_slots(weights: &[f64], resolution: u32) -> Vec<usize> {
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return vec![];
        }

        let size = sum * f64::from(resolution);
        let mut slots = vec![];
        for (index, weight) in weights.iter().enumerate() {
            let count = (weight / sum) * size;
            let mut filled = 0.0;
            while filled < count {
                slots.push(index);
                filled += 1.0;
            }
        }
        slots
    }
}

impl<T> WeightedDistribution<T> {
    pub fn select_index(&self, random_float: f64) -> usize {
        debug_assert!((0.0..1.0).contains(&random_float), "{random_float} not in [0, 1)");
        let slot = (random_float * self.slots.len() as f64).floor() as usize;
        self.slots[slot.min(self.slots.len() - 1)]
    }

    pub fn select(&self, random_float: f64) -> &T {
        &self.options[self.select_index(random_float)]
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn slot_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.options.len()];
        self.slots.iter().for_each(|index| counts[*index] += 1);
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving_weights_at_resolution_ten() {
        let dist = WeightedDistribution::new(
            [("sm", 0.5), ("md", 0.25), ("lg", 0.125), ("xl", 0.125)],
            10,
        );
        assert_eq!(dist.slot_counts(), vec![5, 3, 2, 2]);
        assert_eq!(dist.slots(), &[0, 0, 0, 0, 0, 1, 1, 1, 2, 2, 3, 3]);
        assert!(dist.slot_counts().iter().all(|count| *count >= 1));
    }

    #[test]
    fn equal_weights_not_summing_to_one() {
        let dist = WeightedDistribution::new([("slow", 0.333), ("medium", 0.333), ("fast", 0.333)], 10);
        assert_eq!(dist.slot_counts(), vec![4, 4, 4]);
    }

    #[test]
    fn per_distribution_resolution() {
        let dist = WeightedDistribution::new([('a', 0.5), ('b', 0.35), ('c', 0.15)], 14);
        assert_eq!(dist.slot_counts(), vec![7, 5, 3]);
    }

    #[test]
    fn relative_weights_matter() {
        let small = WeightedDistribution::new([('a', 1.0), ('b', 3.0)], 10);
        assert_eq!(small.slot_counts(), vec![10, 30]);
        assert_eq!(*small.select(0.0), 'a');
        assert_eq!(*small.select(0.25), 'b');
    }

    #[test]
    fn selection_reads_slot_table() {
        let dist = WeightedDistribution::new([("sm", 0.5), ("md", 0.25), ("lg", 0.125), ("xl", 0.125)], 10);
        assert_eq!(*dist.select(0.0), "sm");
        assert_eq!(*dist.select(0.11042225826531649), "sm");
        assert_eq!(*dist.select(0.45), "md");
        assert_eq!(*dist.select(0.7), "lg");
        assert_eq!(*dist.select(0.8877911637537181), "xl");
        assert_eq!(*dist.select(0.999_999), "xl");
    }

    #[test]
    fn tiny_weight_still_gets_a_slot() {
        let dist = WeightedDistribution::new([("rare", 0.001), ("common", 1000.0)], 10);
        assert_eq!(dist.slot_counts()[0], 1);
        assert_eq!(dist.select_index(0.0), 0);
        assert_eq!(dist.select_index(0.5), 1);
    }

    #[test]
    fn zero_weight_never_selected() {
        let dist = WeightedDistribution::new([("never", 0.0), ("always", 1.0)], 10);
        assert_eq!(dist.slot_counts(), vec![0, 10]);
        for step in 0..100 {
            assert_eq!(dist.select_index(step as f64 / 100.0), 1);
        }
    }

    #[test]
    #[should_panic(expected = "no slots")]
    fn all_zero_weights_rejected() {
        WeightedDistribution::new([("a", 0.0), ("b", 0.0)], 10);
    }

    #[test]
    #[should_panic(expected = "invalid weights")]
    fn negative_weight_rejected() {
        WeightedDistribution::new([("a", -1.0), ("b", 2.0)], 10);
    }
}
