use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{ShoppingContext, ShoppingState};
use crate::catalog::{group_by_category, search_by_title};
use crate::models::api::{ManualEntry, Recipe};
use crate::shopping::append_manual_entry;

fn highlighted(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::REVERSED),
        ))
    } else {
        Line::from(text)
    }
}

pub(crate) struct ShoppingView {
    cursor: usize,
    message: Option<String>,
}

impl ShoppingView {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            message: None,
        }
    }

    pub fn with_message(message: &str) -> Self {
        Self {
            cursor: 0,
            message: Some(message.to_string()),
        }
    }

    fn current_recipe(&self, context: &ShoppingContext) -> Option<i64> {
        context
            .selections
            .get_index(self.cursor)
            .map(|selection| selection.recipe_id)
    }
}

impl ShoppingState for ShoppingView {
    fn render(&self, context: &ShoppingContext, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35), // Selected recipes
                Constraint::Min(1),         // Shopping list
                Constraint::Length(3),      // Help / status
            ])
            .split(frame.area());

        let recipe_lines: Vec<Line> = context
            .selections
            .iter()
            .enumerate()
            .map(|(i, selection)| {
                highlighted(
                    format!("{} x{}", selection.title, selection.multiplier),
                    i == self.cursor,
                )
            })
            .collect();

        let recipes = Paragraph::new(recipe_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Selected Recipes (+/- quantity, d remove)"),
        );
        frame.render_widget(recipes, chunks[0]);

        let list_lines: Vec<Line> = context
            .shopping_list()
            .iter()
            .map(|entry| Line::from(format!("{} {} {}", entry.quantity, entry.unit, entry.name)))
            .collect();

        let list = Paragraph::new(list_lines)
            .block(Block::default().borders(Borders::ALL).title("Shopping List"));
        frame.render_widget(list, chunks[1]);

        let status = match &self.message {
            Some(message) => message.clone(),
            None => "a: add recipe  m: add ingredient  q/Esc: quit".to_string(),
        };
        let help = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ShoppingContext,
    ) -> Option<Box<dyn ShoppingState>> {
        self.message = None;
        match key {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.cursor + 1 < context.selections.len() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Char('+') => {
                if let Some(recipe_id) = self.current_recipe(context) {
                    context.selections.increment(recipe_id);
                }
                None
            }
            KeyCode::Char('-') => {
                if let Some(recipe_id) = self.current_recipe(context) {
                    context.selections.decrement(recipe_id);
                }
                None
            }
            KeyCode::Char('d') => {
                if let Some(recipe_id) = self.current_recipe(context) {
                    context.selections.remove(recipe_id);
                    self.cursor = self.cursor.min(context.selections.len().saturating_sub(1));
                }
                None
            }
            KeyCode::Char('a') => Some(Box::new(RecipePicker::new())),
            KeyCode::Char('m') => Some(Box::new(ManualEntryForm::new())),
            _ => None,
        }
    }

    fn is_home(&self) -> bool {
        true
    }
}

pub(crate) struct RecipePicker {
    query: String,
    cursor: usize,
}

impl RecipePicker {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor: 0,
        }
    }

    fn matches(&self, context: &ShoppingContext) -> Vec<Recipe> {
        search_by_title(&group_by_category(&context.catalog), &self.query)
            .into_values()
            .flatten()
            .collect()
    }
}

impl ShoppingState for RecipePicker {
    fn render(&self, context: &ShoppingContext, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(frame.area());

        let recipe_lines: Vec<Line> = self
            .matches(context)
            .iter()
            .enumerate()
            .map(|(i, recipe)| {
                highlighted(
                    format!("{} ({})", recipe.title, recipe.category),
                    i == self.cursor,
                )
            })
            .collect();

        let recipes = Paragraph::new(recipe_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recipes (Enter to add, Esc to go back)"),
        );
        frame.render_widget(recipes, chunks[0]);

        let input = Paragraph::new(self.query.as_str())
            .block(Block::default().borders(Borders::ALL).title("Search"));
        frame.render_widget(input, chunks[1]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ShoppingContext,
    ) -> Option<Box<dyn ShoppingState>> {
        match key {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.cursor = 0;
                None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.cursor = 0;
                None
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.matches(context).len() {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Enter => match self.matches(context).get(self.cursor) {
                Some(recipe) => {
                    context.selections.select(recipe);
                    Some(Box::new(ShoppingView::new()))
                }
                None => None,
            },
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum ManualField {
    Name,
    Quantity,
    Unit,
}

pub(crate) struct ManualEntryForm {
    field: ManualField,
    draft: ManualEntry,
    current_input: String,
}

impl ManualEntryForm {
    pub fn new() -> Self {
        Self {
            field: ManualField::Name,
            draft: ManualEntry::default(),
            current_input: String::new(),
        }
    }
}

impl ShoppingState for ManualEntryForm {
    fn render(&self, _context: &ShoppingContext, frame: &mut Frame) {
        let title = match self.field {
            ManualField::Name => "Ingredient name".to_string(),
            ManualField::Quantity => format!("Quantity of {}", self.draft.name),
            ManualField::Unit => format!("Unit for {} {}", self.draft.quantity, self.draft.name),
        };

        let input = Paragraph::new(self.current_input.as_str())
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(input, frame.area());
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ShoppingContext,
    ) -> Option<Box<dyn ShoppingState>> {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.current_input);
                match self.field {
                    ManualField::Name => {
                        self.draft.name = input;
                        self.field = ManualField::Quantity;
                        None
                    }
                    ManualField::Quantity => {
                        self.draft.quantity = input;
                        self.field = ManualField::Unit;
                        None
                    }
                    ManualField::Unit => {
                        self.draft.unit = input;
                        if self.draft.validate().is_none() {
                            return Some(Box::new(ShoppingView::with_message(
                                "Ingredient needs a name, quantity and unit",
                            )));
                        }
                        let manual = std::mem::take(&mut context.manual_items);
                        context.manual_items = append_manual_entry(manual, &self.draft);
                        context.pending_entries.push(self.draft.clone());
                        Some(Box::new(ShoppingView::new()))
                    }
                }
            }
            _ => None,
        }
    }
}
