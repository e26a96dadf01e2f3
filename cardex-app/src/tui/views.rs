use crate::tui::theme::*;
use cardex_core::{CardDetail, CardSummary};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub enum RightPane<'a> {
    Idle,
    Loading,
    Card { card: &'a CardDetail, saved: bool },
    Error(&'a str),
}

pub fn draw_ui(
    f: &mut Frame,
    area: Rect,
    cards: &[CardSummary],
    sel: usize,
    fetching: bool,
    list_error: Option<&str>,
    right: RightPane,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    draw_catalog(f, chunks[0], cards, sel, fetching);
    draw_right(f, chunks[1], right);

    let mut spans = vec![
        Span::raw(" ↑/k ↓/j scroll  "),
        Span::raw(" Enter detail  "),
        Span::raw(" s save  "),
        Span::raw(" Esc back  "),
        Span::raw(" q quit "),
    ];
    if let Some(err) = list_error {
        spans.push(Span::raw(format!(" {err} ")).style(error_style()));
    }
    let foot = Paragraph::new(Line::from(spans))
        .style(footer_style())
        .block(Block::default().borders(Borders::TOP));
    let fh = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    f.render_widget(foot, fh);
}

fn draw_catalog(f: &mut Frame, area: Rect, cards: &[CardSummary], sel: usize, fetching: bool) {
    let items: Vec<_> = cards
        .iter()
        .map(|c| ListItem::new(Line::from(c.name.clone())))
        .collect();

    let mut header = vec![Span::raw("Catalog").style(title_style())];
    if fetching {
        header.push(Span::raw("  loading…").style(hint_style()));
    }
    let title = Paragraph::new(Line::from(header));
    let th = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    f.render_widget(title, th);

    let list_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(selected_style());
    let mut state = ListState::default();
    if !cards.is_empty() {
        state.select(Some(sel.min(cards.len() - 1)));
    }
    f.render_stateful_widget(list, list_area, &mut state);
}

fn draw_right(f: &mut Frame, area: Rect, pane: RightPane) {
    let block = Block::default().title("Card").borders(Borders::ALL);
    match pane {
        RightPane::Idle => {
            let p = Paragraph::new("Press Enter to open the selected card.")
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(p, area);
        }
        RightPane::Loading => {
            let p = Paragraph::new("Loading…")
                .style(hint_style())
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(p, area);
        }
        RightPane::Error(msg) => {
            let p = Paragraph::new(msg)
                .style(error_style())
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(p, area);
        }
        RightPane::Card { card, saved } => {
            let mut text = vec![Line::from(vec![
                Span::raw(card.name.clone()).style(title_style()),
                Span::raw("  "),
                if saved {
                    Span::raw("★ saved").style(saved_style())
                } else {
                    Span::raw("not saved").style(hint_style())
                },
            ])];
            if !card.types.is_empty() {
                text.push(Line::from(format!("types: {}", card.types.join(", "))));
            }
            if !card.hp.is_empty() {
                text.push(Line::from(format!("hp: {}", card.hp)));
            }
            if !card.abilities.is_empty() {
                text.push(Line::from(Span::raw("abilities:").style(title_style())));
                for a in &card.abilities {
                    text.push(Line::from(format!("  {}: {}", a.name, a.text)));
                }
            }
            text.push(Line::from(
                Span::raw(format!("image: {}", card.image_url)).style(hint_style()),
            ));
            let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
            f.render_widget(p, area);
        }
    }
}
