use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::renderer::Renderer;
use crate::games::hangman::figure::{figure_lines, FIGURE_WIDTH};
use crate::games::hangman::keyboard::{Keyboard, ROWS};
use crate::games::hangman::session::{GameSession, LetterState, Status, STARTING_LIVES};

/// Everything the play screen reads
pub struct PlayView<'a, R> {
    pub session: &'a GameSession<R>,
    pub keyboard: &'a Keyboard,
}

/// Draws the play screen and, once the round is over, the result overlay.
pub struct HangmanRenderer;

impl<'a, R: Rng> Renderer<PlayView<'a, R>> for HangmanRenderer {
    fn render(frame: &mut Frame, view: &PlayView<'a, R>) {
        let session = view.session;
        let [header, body, keys, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let lives = session.remaining_lives() as usize;
        let hearts = format!(
            "{}{}",
            "♥".repeat(lives),
            "♡".repeat(STARTING_LIVES as usize - lives)
        );
        let title = Line::from(vec![
            Span::raw(" Category: "),
            Span::styled(
                session.category_name().unwrap_or("-").to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Lives: "),
            Span::styled(hearts, Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(
            Paragraph::new(title).block(Block::default().borders(Borders::ALL).title(" GALLOWS ")),
            header,
        );

        let [figure_area, word_area] =
            Layout::horizontal([Constraint::Length(FIGURE_WIDTH as u16 + 4), Constraint::Min(0)])
                .areas(body);

        let figure: Vec<Line> = figure_lines(session.figure_stage())
            .into_iter()
            .map(Line::from)
            .collect();
        frame.render_widget(
            Paragraph::new(figure).block(Block::default().borders(Borders::ALL)),
            figure_area,
        );

        let misses: Vec<String> = session.incorrect_guesses().iter().map(|c| c.to_string()).collect();
        let word_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                session.masked_word(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Misses: "),
                Span::styled(misses.join(" "), Style::default().fg(Color::Red)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(word_lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" WORD ")),
            word_area,
        );

        frame.render_widget(
            Paragraph::new(keyboard_lines(view))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            keys,
        );

        frame.render_widget(
            Paragraph::new("[A-Z] Guess  [Arrows] Move  [Enter] Press  [Ctrl+R] New word  [Esc] Back")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            footer,
        );

        if session.status().is_terminal() {
            render_result(frame, session);
        }
    }
}

fn keyboard_lines<R: Rng>(view: &PlayView<'_, R>) -> Vec<Line<'static>> {
    let (focus_row, focus_col) = view.keyboard.position();

    ROWS.iter()
        .enumerate()
        .map(|(row, keys)| {
            let spans: Vec<Span> = keys
                .chars()
                .enumerate()
                .map(|(col, key)| {
                    let mut style = match view.session.letter_state(key) {
                        LetterState::Unguessed => Style::default(),
                        LetterState::Hit => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                        LetterState::Miss => Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
                    };
                    if (row, col) == (focus_row, focus_col) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", key), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_result<R: Rng>(frame: &mut Frame, session: &GameSession<R>) {
    let (headline, color) = match session.status() {
        Status::Won => ("YOU WON!", Color::Green),
        _ => ("YOU WERE HANGED", Color::Red),
    };

    let text = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("The word was {}", session.target_word())),
        Line::from(""),
        Line::from("[Enter] Play again  [Esc] Categories"),
    ];

    let area = centered(frame.area(), 42, 7);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color))),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}
