use tui::layout::{Constraint, Layout, Rect, Size};
pub const TAB_BAR_HEIGHT: u16 = 3;
pub const STATUS_LINE_HEIGHT: u16 = 1;
const LOG_PANE_HEIGHT: u16 = 8;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub tab_bar: [Rect; 2],
    pub main: Rect,
    /// Right-hand pane for the selected row; `None` when hidden or too narrow.
    pub detail: Option<Rect>,
    pub logs: Option<Rect>,
    pub status_line: Rect,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    pub full_screen: bool,
    pub show_detail: bool,
    pub show_logs: bool,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, LayoutOptions::default())
    }

    pub fn update(&mut self, area: Rect, options: LayoutOptions) {
        *self = Self::from_rect(area, options);
    }

    fn from_rect(area: Rect, options: LayoutOptions) -> Self {
        let (tab_bar, body) = if options.full_screen {
            ([Rect::ZERO, Rect::ZERO], area)
        } else {
            let [tab, body] = Layout::vertical([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Fill(1),
            ])
            .areas(area);
            (Self::split_tab_bar(tab), body)
        };

        let [content, logs, status_line] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(if options.show_logs { LOG_PANE_HEIGHT } else { 0 }),
            Constraint::Length(STATUS_LINE_HEIGHT),
        ])
        .areas(body);

        let (main, detail) = if options.show_detail && content.width >= 80 {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                    .areas(content);
            (left, Some(right))
        } else {
            (content, None)
        };

        LayoutAreas {
            tab_bar,
            main,
            detail,
            logs: options.show_logs.then_some(logs),
            status_line,
        }
    }

    fn split_tab_bar(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(80), Constraint::Percentage(20)]).areas(area)
    }
}
