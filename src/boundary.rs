//! Boundary predicates used to carve a line of weights into intervals.
//!
//! A boundary scans a full weight line from an offset and reports the first
//! index at which its condition holds. `None` means the condition holds
//! nowhere in `start..len`; a match on `start` itself is `Some(start)`.

/// Weights at or below this are black.
pub const BLACK_THRESHOLD: u32 = 60;
/// Weights at or above this are white.
pub const WHITE_THRESHOLD: u32 = 150;

pub trait Boundary {
    fn find(&self, start: usize, weights: &[u32]) -> Option<usize>;
}

impl<F> Boundary for F
where
    F: Fn(usize, &[u32]) -> Option<usize>,
{
    #[inline]
    fn find(&self, start: usize, weights: &[u32]) -> Option<usize> {
        self(start, weights)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// `weight <= threshold`
    Black(u32),
    /// `weight > threshold`
    NonBlack(u32),
    /// `weight >= threshold`
    White(u32),
    /// `weight < threshold`
    NonWhite(u32),
    /// `weight >= threshold`, for user supplied thresholds.
    AtLeast(u32),
    /// `weight < threshold`, for user supplied thresholds.
    Below(u32),
    /// `low <= weight < high`
    Within { low: u32, high: u32 },
    /// `weight < low || weight >= high`
    Outside { low: u32, high: u32 },
    /// Always matches at the offset it is given.
    Start,
    /// Always reports the end of the line.
    End,
}

impl Predicate {
    pub fn black() -> Self {
        Predicate::Black(BLACK_THRESHOLD)
    }

    pub fn non_black() -> Self {
        Predicate::NonBlack(BLACK_THRESHOLD)
    }

    pub fn white() -> Self {
        Predicate::White(WHITE_THRESHOLD)
    }

    pub fn non_white() -> Self {
        Predicate::NonWhite(WHITE_THRESHOLD)
    }

    /// Tests a single weight. `Start` and `End` don't look at weights and
    /// therefore match everything.
    #[inline]
    pub fn matches(self, weight: u32) -> bool {
        match self {
            Predicate::Black(t) => weight <= t,
            Predicate::NonBlack(t) => weight > t,
            Predicate::White(t) | Predicate::AtLeast(t) => weight >= t,
            Predicate::NonWhite(t) | Predicate::Below(t) => weight < t,
            Predicate::Within { low, high } => (low..high).contains(&weight),
            Predicate::Outside { low, high } => !(low..high).contains(&weight),
            Predicate::Start | Predicate::End => true,
        }
    }
}

impl Boundary for Predicate {
    fn find(&self, start: usize, weights: &[u32]) -> Option<usize> {
        match *self {
            Predicate::Start => Some(start),
            Predicate::End => Some(weights.len()),
            predicate => weights
                .get(start..)?
                .iter()
                .position(|&weight| predicate.matches(weight))
                .map(|offset| start + offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHTS: [u32; 5] = [10, 70, 30, 90, 5];

    #[test]
    fn match_at_start_is_not_a_miss() {
        assert_eq!(Predicate::black().find(0, &WEIGHTS), Some(0));
        assert_eq!(Predicate::non_black().find(0, &WEIGHTS), Some(1));
        assert_eq!(Predicate::non_black().find(1, &WEIGHTS), Some(1));
        assert_eq!(Predicate::black().find(1, &WEIGHTS), Some(2));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(Predicate::white().find(0, &WEIGHTS), None);
        assert_eq!(Predicate::non_black().find(4, &WEIGHTS), None);
        assert_eq!(Predicate::black().find(5, &WEIGHTS), None);
        assert_eq!(Predicate::black().find(9, &WEIGHTS), None);
    }

    #[test]
    fn thresholds_are_inclusive_where_documented() {
        let weights = [60, 61, 149, 150];
        assert_eq!(Predicate::non_black().find(0, &weights), Some(1));
        assert_eq!(Predicate::white().find(0, &weights), Some(3));
        assert_eq!(Predicate::non_white().find(0, &weights), Some(0));
        assert_eq!(Predicate::AtLeast(61).find(0, &weights), Some(1));
        assert_eq!(Predicate::Below(61).find(1, &weights), None);
    }

    #[test]
    fn band() {
        let weights = [0, 20, 40, 60, 80];
        let within = Predicate::Within { low: 40, high: 80 };
        let outside = Predicate::Outside { low: 40, high: 80 };
        assert_eq!(within.find(0, &weights), Some(2));
        assert_eq!(outside.find(2, &weights), Some(4));
        assert_eq!(outside.find(0, &weights), Some(0));
    }

    #[test]
    fn identity_and_full() {
        assert_eq!(Predicate::Start.find(3, &WEIGHTS), Some(3));
        assert_eq!(Predicate::End.find(3, &WEIGHTS), Some(5));
        assert_eq!(Predicate::End.find(0, &[]), Some(0));
    }

    #[test]
    fn closures_are_boundaries() {
        let every_other = |start: usize, weights: &[u32]| {
            (start..weights.len()).find(|i| i % 2 == 1)
        };
        assert_eq!(every_other.find(2, &WEIGHTS), Some(3));
        assert_eq!(every_other.find(4, &WEIGHTS), None);
    }
}
