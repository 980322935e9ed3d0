use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::deck::Deck;
use crate::store::ContextError;
use crate::ui::app::{App, Screen, ViewSnapshot};
use crate::ui::layout::{centered_rect, screen_rects};
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, app: &App, snapshot: &ViewSnapshot) {
    let (header, body, footer) = screen_rects(frame.area());

    draw_header(frame, app, header);
    match app.deck() {
        Ok(deck) => match app.screen() {
            Screen::Browse => draw_browse(frame, deck, snapshot, body),
            Screen::Quiz => draw_quiz(frame, deck, snapshot, app.answer_revealed(), body),
        },
        Err(err) => draw_context_error(frame, &err, body),
    }
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = app
        .deck()
        .map(|deck| {
            if deck.title.is_empty() {
                "untitled deck".to_string()
            } else {
                deck.title.clone()
            }
        })
        .unwrap_or_else(|_| "no deck".to_string());

    let tab = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(theme::MUTED))
        }
    };

    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(theme::HEADER_TEXT)),
        Span::styled("  |", Style::default().fg(theme::MUTED)),
        tab("Browse", app.screen() == Screen::Browse),
        tab("Quiz", app.screen() == Screen::Quiz),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
    );
    frame.render_widget(header, area);
}

fn draw_browse(frame: &mut Frame<'_>, deck: &Deck, snapshot: &ViewSnapshot, area: Rect) {
    let browse = snapshot.browse;
    let view = snapshot.card_view;

    let mut lines = vec![Line::from(Span::styled(
        format!("Card {}/{}", browse.current_card + 1, deck.len()),
        Style::default().fg(theme::MUTED),
    ))];

    match deck.card(browse.current_card) {
        Some(card) => {
            let (label, text) = if view.flipped {
                ("Answer", card.answer.as_str())
            } else {
                ("Question", card.question.as_str())
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(text));
        }
        None => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "card out of range",
                Style::default().fg(theme::STATUS_ERROR),
            )));
        }
    }

    if view.reviewed {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "* reviewed",
            Style::default().fg(theme::STATUS_OK),
        )));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
        );
    frame.render_widget(body, area);
}

fn draw_quiz(
    frame: &mut Frame<'_>,
    deck: &Deck,
    snapshot: &ViewSnapshot,
    answer_revealed: bool,
    area: Rect,
) {
    let quiz = snapshot.quiz;

    if quiz.complete {
        draw_quiz_complete(frame, deck, quiz.score, area);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "Question {}/{}   Score {}",
                quiz.current_question + 1,
                deck.len(),
                quiz.score
            ),
            Style::default().fg(theme::MUTED),
        )),
        Line::from(""),
    ];

    match deck.card(quiz.current_question) {
        Some(card) => {
            lines.push(Line::from(card.question.as_str()));
            lines.push(Line::from(""));
            if answer_revealed {
                lines.push(Line::from(Span::styled(
                    card.answer.as_str(),
                    Style::default().fg(theme::ACCENT),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "did you know it?  y / n",
                    Style::default().fg(theme::MUTED),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "space to reveal the answer",
                    Style::default().fg(theme::MUTED),
                )));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "question out of range",
            Style::default().fg(theme::STATUS_ERROR),
        ))),
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
        );
    frame.render_widget(body, area);
}

fn draw_quiz_complete(frame: &mut Frame<'_>, deck: &Deck, score: u32, area: Rect) {
    let panel = centered_rect(60, 40, area);
    let lines = vec![
        Line::from(Span::styled(
            "Quiz complete",
            Style::default()
                .fg(theme::STATUS_OK)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {}/{}", score, deck.len())),
        Line::from(""),
        Line::from(Span::styled(
            "r to restart",
            Style::default().fg(theme::MUTED),
        )),
    ];
    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT)),
        ),
        panel,
    );
}

fn draw_context_error(frame: &mut Frame<'_>, err: &ContextError, area: Rect) {
    let body = Paragraph::new(Line::from(Span::styled(
        err.to_string(),
        Style::default().fg(theme::STATUS_ERROR),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::STATUS_ERROR)),
    );
    frame.render_widget(body, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = match app.deck_notice() {
        Some(notice) => Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(theme::STATUS_ERROR),
        )),
        None => {
            let hints = match app.screen() {
                Screen::Browse => "space flip · n/p cards · R reload · tab quiz · q quit",
                Screen::Quiz => "space reveal · y/n grade · r reset · tab browse · q quit",
            };
            Line::from(Span::styled(hints, Style::default().fg(theme::MUTED)))
        }
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
    );
    frame.render_widget(footer, area);
}
