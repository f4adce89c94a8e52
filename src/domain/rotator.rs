use thiserror::Error;

use crate::domain::slide::Slide;

/// Precondition violations of the slide rotator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotatorError {
    /// The rotator was constructed without any slide.
    #[error("slide rotator needs at least one slide")]
    InvalidConfiguration,

    /// Navigation targeted a slide that does not exist.
    #[error("slide index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Cycles through a fixed, non-empty, ordered set of slides
///
/// The slide list is fixed at construction and the active index always points
/// at a valid slide. The rotator holds no timer: automatic advancement is an
/// unconditional [`SlideRotator::next`] issued by whoever owns the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRotator {
    slides: Vec<Slide>,
    active_index: usize,
}

impl SlideRotator {
    /// Create a rotator positioned on the first slide
    pub fn new(slides: Vec<Slide>) -> Result<Self, RotatorError> {
        if slides.is_empty() {
            return Err(RotatorError::InvalidConfiguration);
        }

        Ok(Self {
            slides,
            active_index: 0,
        })
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.slides.len();
    }

    pub fn previous(&mut self) {
        let len = self.slides.len();
        self.active_index = (self.active_index + len - 1) % len;
    }

    /// Jump to `index`; an out-of-range index leaves the rotator untouched
    pub fn go_to(&mut self, index: usize) -> Result<(), RotatorError> {
        if index >= self.slides.len() {
            return Err(RotatorError::IndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }

        self.active_index = index;
        Ok(())
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.active_index]
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept alongside `len` for API symmetry
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::slide::Alignment;

    fn slide(title: &str) -> Slide {
        Slide::new(
            format!("/images/{title}.jpg"),
            title,
            "subtitle",
            "description",
            "Shop Now",
            Alignment::Center,
        )
    }

    fn rotator(n: usize) -> SlideRotator {
        let slides = (0..n).map(|i| slide(&format!("slide-{i}"))).collect();
        SlideRotator::new(slides).expect("non-empty slides")
    }

    #[test]
    fn test_empty_slides_are_rejected() {
        assert_eq!(
            SlideRotator::new(vec![]),
            Err(RotatorError::InvalidConfiguration)
        );
    }

    #[test]
    fn test_starts_on_first_slide() {
        let rotator = rotator(3);
        assert_eq!(rotator.active_index(), 0);
        assert_eq!(rotator.current().title, "slide-0");
        assert_eq!(rotator.len(), 3);
        assert!(!rotator.is_empty());
    }

    #[test]
    fn test_previous_from_first_wraps_to_last() {
        let mut rotator = rotator(4);
        rotator.previous();
        assert_eq!(rotator.active_index(), 3);
        assert_eq!(rotator.current().title, "slide-3");
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut rotator = rotator(1);
        rotator.next();
        assert_eq!(rotator.active_index(), 0);
        rotator.previous();
        assert_eq!(rotator.active_index(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    #[case(7)]
    fn test_next_n_times_is_cyclic(#[case] n: usize) {
        for start in 0..n {
            let mut rotator = rotator(n);
            rotator.go_to(start).expect("valid start");
            for _ in 0..n {
                rotator.next();
            }
            assert_eq!(rotator.active_index(), start);
        }
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_next_and_previous_are_inverse(#[case] n: usize) {
        for start in 0..n {
            let mut rotator = rotator(n);
            rotator.go_to(start).expect("valid start");

            rotator.next();
            rotator.previous();
            assert_eq!(rotator.active_index(), start);

            rotator.previous();
            rotator.next();
            assert_eq!(rotator.active_index(), start);
        }
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_sequences() {
        // Deterministic pseudo-random walk: forward on set bits, backward otherwise
        for n in 1..=6 {
            let mut rotator = rotator(n);
            let mut seed: u32 = 0x9e37_79b9;
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed & 1 == 1 {
                    rotator.next();
                } else {
                    rotator.previous();
                }
                assert!(rotator.active_index() < n);
            }
        }
    }

    #[test]
    fn test_go_to_sets_exact_index() {
        let mut rotator = rotator(4);
        rotator.next();
        assert_eq!(rotator.go_to(2), Ok(()));
        assert_eq!(rotator.active_index(), 2);
        assert_eq!(rotator.go_to(0), Ok(()));
        assert_eq!(rotator.active_index(), 0);
    }

    #[test]
    fn test_go_to_out_of_range_leaves_index_unchanged() {
        let mut rotator = rotator(4);
        rotator.next();

        assert_eq!(
            rotator.go_to(4),
            Err(RotatorError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(rotator.active_index(), 1);

        assert!(rotator.go_to(usize::MAX).is_err());
        assert_eq!(rotator.active_index(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RotatorError::IndexOutOfRange { index: 9, len: 4 }.to_string(),
            "slide index 9 is out of range (0..4)"
        );
        assert_eq!(
            RotatorError::InvalidConfiguration.to_string(),
            "slide rotator needs at least one slide"
        );
    }
}
