use anyhow::{bail, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::core::renderer::Renderer;
use crate::games::hangman::category::{self, Category};

/// Category selection list shown before a round starts
#[derive(Debug, Clone)]
pub struct CategoryPicker {
    categories: Vec<Category>,
    selected: usize,
}

impl CategoryPicker {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            bail!("no categories to choose from");
        }
        Ok(Self { categories, selected: 0 })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Category {
        &self.categories[self.selected]
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.categories.len() - 1);
    }

    /// Select a category by name, ignoring case
    pub fn select_named(&mut self, name: &str) -> Result<&Category> {
        let found = category::find(&self.categories, name)?;
        if let Some(index) = self.categories.iter().position(|c| std::ptr::eq(c, found)) {
            self.selected = index;
        }
        Ok(self.selected())
    }
}

pub struct PickerRenderer;

impl Renderer<CategoryPicker> for PickerRenderer {
    fn render(f: &mut Frame, picker: &CategoryPicker) {
        let [title, list, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .margin(2)
        .areas(f.area());

        f.render_widget(
            Paragraph::new(" GALLOWS ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            title,
        );

        let items: Vec<ListItem> = picker
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let style = if i == picker.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {} ({} words)", c.name(), c.words().len())).style(style)
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" CATEGORIES ").borders(Borders::ALL)),
            list,
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Play  [Q] Quit").alignment(Alignment::Center),
            help,
        );
    }
}
