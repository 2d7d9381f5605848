//! Selection of the lines a pass visits, and in which order.

#[cfg(feature = "rand")]
use rand::Rng;

pub trait LineOrder {
    /// Yields indices in `0..count`, each at most once.
    fn lines<'a>(&'a mut self, count: usize) -> Box<dyn Iterator<Item = usize> + 'a>;
}

/// `0, 1, .., count - 1`
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl LineOrder for Sequential {
    fn lines<'a>(&'a mut self, count: usize) -> Box<dyn Iterator<Item = usize> + 'a> {
        Box::new(0..count)
    }
}

/// Picks each next line uniformly from the lines after the previous pick.
///
/// Picks are strictly increasing and the last one is always `count - 1`.
/// Lines jumped over are not visited at all.
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandomSkip<R> {
    rng: R,
}

#[cfg(feature = "rand")]
impl<R: Rng> RandomSkip<R> {
    pub fn new(rng: R) -> Self {
        RandomSkip { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "rand")]
impl<R: Rng> LineOrder for RandomSkip<R> {
    fn lines<'a>(&'a mut self, count: usize) -> Box<dyn Iterator<Item = usize> + 'a> {
        Box::new(SkipLines {
            rng: &mut self.rng,
            cursor: 0,
            count,
        })
    }
}

#[cfg(feature = "rand")]
pub struct SkipLines<'a, R> {
    rng: &'a mut R,
    cursor: usize,
    count: usize,
}

#[cfg(feature = "rand")]
impl<R: Rng> Iterator for SkipLines<'_, R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.cursor >= self.count {
            return None;
        }
        let line = self.rng.gen_range(self.cursor..self.count);
        self.cursor = line + 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.cursor.min(self.count);
        (left.min(1), Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential() {
        let mut order = Sequential;
        assert_eq!(order.lines(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        // nothing carried over between calls
        assert_eq!(order.lines(2).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(order.lines(0).count(), 0);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_skip_is_increasing_and_ends_on_the_last_line() {
        use rand::{rngs::StdRng, SeedableRng};

        for seed in 0..200 {
            let mut order = RandomSkip::new(StdRng::seed_from_u64(seed));
            let lines = order.lines(5).collect::<Vec<_>>();
            assert!(lines.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", lines);
            assert!(lines.iter().all(|&line| line < 5));
            assert_eq!(lines.last(), Some(&4));
        }
        let mut order = RandomSkip::new(StdRng::seed_from_u64(3));
        assert_eq!(order.lines(1).collect::<Vec<_>>(), vec![0]);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_skip_is_reproducible() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut a = RandomSkip::new(StdRng::seed_from_u64(7));
        let mut b = RandomSkip::new(StdRng::seed_from_u64(7));
        for count in [0, 1, 10, 1000] {
            assert_eq!(
                a.lines(count).collect::<Vec<_>>(),
                b.lines(count).collect::<Vec<_>>()
            );
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_skip_draws_from_the_cursor() {
        use rand::rngs::mock::StepRng;

        // a zero source always draws the lowest candidate
        let mut order = RandomSkip::new(StepRng::new(0, 0));
        assert_eq!(order.lines(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(order.lines(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(order.lines(0).count(), 0);
    }
}
