//! # Skeleton Component
//!
//! Loading placeholders shown while a fetch is outstanding: gray blocks
//! shaped like the content they stand in for, pulsing between two shades
//! as the animation frame counter advances.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::theme::Palette;
use crate::tui::component::Component;

pub enum SkeletonKind {
    /// Stand-in for the list screen: two input-sized bars and a body block.
    List,
    /// Stand-in for the detail screen: a flag block and a few short lines.
    Detail,
}

pub struct Skeleton<'a> {
    pub kind: SkeletonKind,
    pub frame_index: usize,
    pub palette: &'a Palette,
}

impl Skeleton<'_> {
    fn shade(&self) -> Color {
        // Two-tone pulse, slowed to every fourth animation frame.
        if (self.frame_index / 4) % 2 == 0 {
            Color::DarkGray
        } else {
            Color::Gray
        }
    }

    fn bar(&self, frame: &mut Frame, area: Rect, width_percent: u16) {
        let [bar_area, _] = Layout::horizontal([
            Constraint::Percentage(width_percent),
            Constraint::Min(0),
        ])
        .areas(area);
        frame.render_widget(Block::new().style(Style::default().bg(self.shade())), bar_area);
    }
}

impl Component for Skeleton<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::new().style(Style::default().bg(self.palette.background)),
            area,
        );

        match self.kind {
            SkeletonKind::List => {
                let [first_bar, _, second_bar, _, body] = Layout::vertical([
                    Constraint::Length(2),
                    Constraint::Length(1),
                    Constraint::Length(2),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(area);
                self.bar(frame, first_bar, 100);
                self.bar(frame, second_bar, 100);
                self.bar(frame, body, 100);
            }
            SkeletonKind::Detail => {
                let [flag, _, line1, line2, line3, line4] = Layout::vertical([
                    Constraint::Length(6),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .areas(area);
                self.bar(frame, flag, 40);
                self.bar(frame, line1, 35);
                self.bar(frame, line2, 30);
                self.bar(frame, line3, 20);
                self.bar(frame, line4, 30);
            }
        }
    }
}
