use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    app::{App, AppState, Notice},
    language::DifficultyTier,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let red_style = Style::default().fg(Color::Red);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(1), // level
                    Constraint::Min(1),    // spacer
                    Constraint::Length(2), // masked answer
                    Constraint::Length(1), // lives
                    Constraint::Length(1), // timer
                    Constraint::Length(1), // guessed
                    Constraint::Length(2), // notice
                    Constraint::Min(1),    // spacer
                    Constraint::Length(1), // key hints
                ]
                .as_ref(),
            )
            .split(area);

        tier_line(self.tier).render(chunks[0], buf);

        if let Some(session) = &self.session {
            let answer_text = if matches!(self.state, AppState::Finished(_)) {
                session.answer().chars().join(" ")
            } else {
                session.masked().chars().join(" ")
            };
            Paragraph::new(Span::styled(answer_text, bold_style))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(chunks[2], buf);

            Paragraph::new(format!("Lives: {}", session.lives()))
                .alignment(Alignment::Center)
                .render(chunks[3], buf);

            if self.is_playing() {
                Paragraph::new(Span::styled(
                    format!("Time left: {}s", self.timer.seconds_left()),
                    red_style,
                ))
                .alignment(Alignment::Center)
                .render(chunks[4], buf);
            }

            Paragraph::new(format!("Guessed: {}", session.guessed_display()))
                .alignment(Alignment::Center)
                .render(chunks[5], buf);
        } else {
            Paragraph::new(Span::styled("Hangman", bold_style))
                .alignment(Alignment::Center)
                .render(chunks[2], buf);
        }

        if let Some(notice) = &self.notice {
            notice_paragraph(notice).render(chunks[6], buf);
        }

        let hints = match self.state {
            AppState::Playing => "type a letter to guess · (esc) quit",
            AppState::Ready | AppState::Finished(_) => {
                "(enter) start game · (tab) change level · (esc) quit"
            }
        };
        Paragraph::new(Span::styled(hints, dim_style))
            .alignment(Alignment::Center)
            .render(chunks[8], buf);
    }
}

fn tier_line(selected: DifficultyTier) -> Paragraph<'static> {
    let mut spans = vec![Span::raw("Level: ")];
    for tier in DifficultyTier::ALL {
        let style = if tier == selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(tier.to_string(), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn notice_paragraph(notice: &Notice) -> Paragraph<'static> {
    let color = match notice {
        Notice::Victory(_) => Color::Green,
        Notice::GameOver(_) => Color::Red,
        Notice::Invalid | Notice::Repeated(_) | Notice::TimeUp => Color::Yellow,
    };
    let style = Style::default().fg(color);

    Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", notice.title()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(notice.message(), style.add_modifier(Modifier::ITALIC)),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}
