//! Scroll offset into the log.

/// Number of most-recent log lines hidden below the visible window.
///
/// `offset == 0` shows the newest lines. Every adjustment clamps to
/// `[0, max_scroll]` where `max_scroll = max(0, lines + margin - page)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    /// Rows on screen that are not log lines (input row, FPS row)
    margin: usize,
}

impl ScrollState {
    pub fn new(margin: usize) -> Self {
        Self { offset: 0, margin }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest valid offset for a log of `line_count` lines.
    pub fn max_scroll(&self, line_count: usize, lines_per_page: usize) -> usize {
        (line_count + self.margin).saturating_sub(lines_per_page)
    }

    /// Re-apply bounds after the log or the viewport changed.
    pub fn clamp(&mut self, line_count: usize, lines_per_page: usize) {
        self.offset = self.offset.min(self.max_scroll(line_count, lines_per_page));
    }

    /// Scroll one page towards older lines.
    pub fn page_up(&mut self, line_count: usize, lines_per_page: usize) {
        self.offset = self.offset.saturating_add(lines_per_page);
        self.clamp(line_count, lines_per_page);
    }

    /// Scroll one page towards newer lines.
    pub fn page_down(&mut self, line_count: usize, lines_per_page: usize) {
        self.offset = self.offset.saturating_sub(lines_per_page);
        self.clamp(line_count, lines_per_page);
    }

    /// Jump to the oldest lines.
    pub fn home(&mut self, line_count: usize, lines_per_page: usize) {
        self.offset = self.max_scroll(line_count, lines_per_page);
    }

    /// Jump to the newest lines.
    pub fn end(&mut self) {
        self.offset = 0;
    }

    /// Apply a wheel delta; positive values move towards newer lines.
    ///
    /// Deltas round half up, so `-0.5` moves nothing and `0.5` one line.
    pub fn wheel(&mut self, amount_y: f32, line_count: usize, lines_per_page: usize) {
        let steps = (amount_y + 0.5).floor();
        if steps >= 0.0 {
            self.offset = self.offset.saturating_sub(steps as usize);
        } else {
            self.offset = self.offset.saturating_add((-steps) as usize);
        }
        self.clamp(line_count, lines_per_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: usize = 10;

    #[test]
    fn test_max_scroll() {
        let scroll = ScrollState::new(2);
        assert_eq!(scroll.max_scroll(0, PAGE), 0);
        assert_eq!(scroll.max_scroll(8, PAGE), 0);
        assert_eq!(scroll.max_scroll(30, PAGE), 22);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollState::new(2);
        scroll.page_up(30, PAGE);
        assert_eq!(scroll.offset(), 10);
        scroll.page_up(30, PAGE);
        scroll.page_up(30, PAGE);
        assert_eq!(scroll.offset(), 22);

        scroll.page_down(30, PAGE);
        assert_eq!(scroll.offset(), 12);
        scroll.page_down(30, PAGE);
        scroll.page_down(30, PAGE);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_home_and_end() {
        let mut scroll = ScrollState::new(2);
        scroll.home(30, PAGE);
        assert_eq!(scroll.offset(), 22);
        scroll.end();
        assert_eq!(scroll.offset(), 0);

        // Short log: home stays at zero
        scroll.home(3, PAGE);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_wheel() {
        let mut scroll = ScrollState::new(2);
        scroll.wheel(-3.0, 30, PAGE);
        assert_eq!(scroll.offset(), 3);
        scroll.wheel(1.4, 30, PAGE);
        assert_eq!(scroll.offset(), 2);
        scroll.wheel(5.0, 30, PAGE);
        assert_eq!(scroll.offset(), 0);
        scroll.wheel(-100.0, 30, PAGE);
        assert_eq!(scroll.offset(), 22);
    }

    #[test]
    fn test_wheel_rounds_half_up() {
        let mut scroll = ScrollState::new(2);
        scroll.wheel(-0.5, 30, PAGE);
        assert_eq!(scroll.offset(), 0);
        scroll.wheel(-1.5, 30, PAGE);
        assert_eq!(scroll.offset(), 1);
        scroll.wheel(0.5, 30, PAGE);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_clamp_after_viewport_growth() {
        let mut scroll = ScrollState::new(2);
        scroll.home(30, PAGE);
        scroll.clamp(30, 25);
        assert_eq!(scroll.offset(), 7);
        scroll.clamp(30, 40);
        assert_eq!(scroll.offset(), 0);
    }
}
