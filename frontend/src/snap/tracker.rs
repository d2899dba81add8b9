/// Vertical extent of one registered section inside the scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Visible window of the scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    pub fn center(&self) -> f64 {
        self.scroll_top + self.height / 2.0
    }
}

/// Index of the section whose center is closest to the viewport center.
///
/// Sections are scanned in registration order and only a strictly smaller
/// distance replaces the current best, so ties go to the lower index.
/// `None` entries are sections whose element is not mounted; they are skipped.
pub fn nearest_section<I>(viewport: Viewport, extents: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<SectionExtent>>,
{
    let center = viewport.center();
    let mut best: Option<(usize, f64)> = None;

    for (index, extent) in extents.into_iter().enumerate() {
        let Some(extent) = extent else { continue };
        let distance = (center - extent.center()).abs();
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

/// Remembers the last published index so the page only re-renders on change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTracker {
    active: usize,
}

impl SectionTracker {
    #[cfg(test)]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Recompute the active section. Returns the new index when it changed.
    pub fn update<I>(&mut self, viewport: Viewport, extents: I) -> Option<usize>
    where
        I: IntoIterator<Item = Option<SectionExtent>>,
    {
        let nearest = nearest_section(viewport, extents)?;
        if nearest == self.active {
            return None;
        }
        self.active = nearest;
        Some(nearest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f64 = 800.0;

    fn stacked(count: usize) -> Vec<Option<SectionExtent>> {
        (0..count)
            .map(|i| Some(SectionExtent::new(i as f64 * HEIGHT, HEIGHT)))
            .collect()
    }

    #[test]
    fn empty_registry_selects_nothing() {
        let viewport = Viewport::new(1200.0, HEIGHT);
        assert_eq!(nearest_section(viewport, Vec::new()), None);

        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.update(viewport, Vec::new()), None);
        assert_eq!(tracker.active(), 0);
    }

    #[test]
    fn exact_section_tops_select_that_section() {
        let sections = stacked(4);
        for k in 0..4 {
            let viewport = Viewport::new(k as f64 * HEIGHT, HEIGHT);
            assert_eq!(nearest_section(viewport, sections.clone()), Some(k));
        }
    }

    #[test]
    fn transitions_happen_midway_between_section_centers() {
        let sections = stacked(4);
        // Centers sit at 400, 1200, 2000, 2800; the viewport center is scroll_top + 400.
        // Switching from k to k+1 happens once the viewport center passes (k + 1) * 800.
        for k in 0..3 {
            let boundary = (k + 1) as f64 * HEIGHT - HEIGHT / 2.0;
            let before = Viewport::new(boundary - 1.0, HEIGHT);
            let after = Viewport::new(boundary + 1.0, HEIGHT);
            assert_eq!(nearest_section(before, sections.clone()), Some(k));
            assert_eq!(nearest_section(after, sections.clone()), Some(k + 1));
        }
    }

    #[test]
    fn exact_tie_goes_to_lower_index() {
        let sections = stacked(4);
        // Viewport center at 800: equidistant from sections 0 and 1.
        let viewport = Viewport::new(400.0, HEIGHT);
        assert_eq!(nearest_section(viewport, sections), Some(0));
    }

    #[test]
    fn index_stays_in_range_for_any_offset() {
        let sections = stacked(5);
        let mut offset = -2000.0;
        while offset < 10_000.0 {
            let index = nearest_section(Viewport::new(offset, HEIGHT), sections.clone())
                .expect("non-empty registry always selects");
            assert!(index < sections.len());
            offset += 37.0;
        }
    }

    #[test]
    fn unlaid_out_sections_still_pick_something() {
        let sections = vec![Some(SectionExtent::new(0.0, 0.0)); 3];
        assert_eq!(nearest_section(Viewport::new(0.0, 0.0), sections), Some(0));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let mut sections = stacked(3);
        sections[1] = None;
        let viewport = Viewport::new(HEIGHT, HEIGHT);
        // Section 1 would win but has no element; 0 and 2 are equidistant.
        assert_eq!(nearest_section(viewport, sections), Some(0));
    }

    #[test]
    fn tracker_reports_only_changes() {
        let sections = stacked(4);
        let mut tracker = SectionTracker::default();

        assert_eq!(tracker.update(Viewport::new(0.0, HEIGHT), sections.clone()), None);
        assert_eq!(tracker.update(Viewport::new(900.0, HEIGHT), sections.clone()), Some(1));
        assert_eq!(tracker.update(Viewport::new(950.0, HEIGHT), sections.clone()), None);
        assert_eq!(tracker.active(), 1);
        assert_eq!(tracker.update(Viewport::new(2400.0, HEIGHT), sections), Some(3));
    }
}
