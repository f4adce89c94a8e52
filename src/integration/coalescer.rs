/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to draw this cycle
    ///
    /// Any number of render requests collapses into a single draw.
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool, resized: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render || resized
    }

    /// Multiple resizes in one cycle collapse into the last one
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::Coalescer;

    #[rstest]
    #[case(0, false, false, false)]
    #[case(1, false, false, true)]
    #[case(5, false, false, true)]
    #[case(0, true, false, true)]
    #[case(0, false, true, true)]
    #[case(3, true, true, true)]
    fn test_decide_render(
        #[case] requests: usize,
        #[case] saw_tui_render: bool,
        #[case] resized: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(
            Coalescer::decide_render(requests, saw_tui_render, resized),
            expected
        );
    }

    #[test]
    fn test_decide_resize_keeps_last_only() {
        assert_eq!(Coalescer::decide_resize(None, &[]), None);
        assert_eq!(
            Coalescer::decide_resize(None, &[(80, 24), (120, 40)]),
            Some((120, 40))
        );
        assert_eq!(Coalescer::decide_resize(Some((5, 5)), &[]), Some((5, 5)));
    }
}
