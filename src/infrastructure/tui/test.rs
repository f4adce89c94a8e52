use std::{collections::VecDeque, future::Future, pin::Pin};

use color_eyre::eyre::Result;
use futures::future;
use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::{Rect, Size},
    Terminal,
};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// TUI double backed by [`TestBackend`]
///
/// `enter`, `exit` and `suspend` only record that they happened. `next`
/// pops from an internal queue and never waits.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as plain text, one line per row
    pub fn screen_text(&self) -> String {
        buffer_text(self.buffer())
    }
}

/// Flatten a buffer into its text content, one line per row
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.entered = false;
        self.suspends += 1;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.term.size()?)
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::text::Line;

    use super::*;

    #[test]
    fn test_draw_counts_and_captures() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.draw(&mut |f| f.render_widget(Line::from("hello"), f.area()))?;
        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_text(), "hello     \n          ");
        Ok(())
    }

    #[test]
    fn test_resize_changes_size() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.resize(Rect::new(0, 0, 30, 8))?;
        assert_eq!(tui.size()?, Size::new(30, 8));
        Ok(())
    }

    #[tokio::test]
    async fn test_events_are_queued() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick])?;
        tui.enqueue_event(Event::Render);
        assert!(matches!(tui.next().await, Some(Event::Tick)));
        assert!(matches!(tui.next().await, Some(Event::Render)));
        assert!(tui.next().await.is_none());
        Ok(())
    }
}
