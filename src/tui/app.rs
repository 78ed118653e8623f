use crossterm::event::KeyCode;
use ratatui::Frame;

use super::shopping_states::ShoppingView;
use crate::models::api::{ManualEntry, Recipe, ShoppingListEntry};
use crate::shopping::{SelectionList, combined_view};

pub enum AppAction {
    Continue, // Keep running
    Exit,     // Esc or q from the shopping view
}

pub struct ShoppingApp {
    state: Box<dyn ShoppingState>,
    context: ShoppingContext,
}

pub struct ShoppingContext {
    pub catalog: Vec<Recipe>,
    pub selections: SelectionList,
    pub manual_items: Vec<ShoppingListEntry>,
    /// Accepted manual entries not yet written to the database
    pub pending_entries: Vec<ManualEntry>,
}

impl ShoppingContext {
    pub fn new(catalog: Vec<Recipe>, manual_items: Vec<ShoppingListEntry>) -> Self {
        Self {
            catalog,
            selections: SelectionList::new(),
            manual_items,
            pending_entries: Vec::new(),
        }
    }

    pub fn shopping_list(&self) -> Vec<ShoppingListEntry> {
        combined_view(&self.manual_items, &self.selections)
    }
}

pub(crate) trait ShoppingState {
    fn render(&self, context: &ShoppingContext, frame: &mut Frame);
    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ShoppingContext,
    ) -> Option<Box<dyn ShoppingState>>;

    /// Whether Esc leaves the app from this state
    fn is_home(&self) -> bool {
        false
    }
}

impl ShoppingApp {
    pub fn new(catalog: Vec<Recipe>, manual_items: Vec<ShoppingListEntry>) -> Self {
        Self {
            state: Box::new(ShoppingView::new()),
            context: ShoppingContext::new(catalog, manual_items),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.state.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // Esc backs out to the shopping view, and exits from there
        if key == KeyCode::Esc {
            if self.state.is_home() {
                return AppAction::Exit;
            }
            self.state = Box::new(ShoppingView::new());
            return AppAction::Continue;
        }

        if key == KeyCode::Char('q') && self.state.is_home() {
            return AppAction::Exit;
        }

        if let Some(next_state) = self.state.handle_key(key, &mut self.context) {
            self.state = next_state
        }

        AppAction::Continue
    }

    /// Drain manual entries that still need persisting
    pub fn take_pending_entries(&mut self) -> Vec<ManualEntry> {
        std::mem::take(&mut self.context.pending_entries)
    }

    pub fn context(&self) -> &ShoppingContext {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::api::IngredientLine;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::*;

    fn recipe(id: i64, title: &str, category: &str, ingredients: Vec<IngredientLine>) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            category: category.to_string(),
            description: None,
            instructions: vec![],
            ingredients,
            created_at: String::new(),
        }
    }

    #[fixture]
    fn app() -> ShoppingApp {
        let catalog = vec![
            recipe(
                1,
                "Shakshuka",
                "Main Dish",
                vec![IngredientLine::new("egg", 4, "piece")],
            ),
            recipe(
                2,
                "Babka",
                "Dessert",
                vec![IngredientLine::new("flour", "1/2", "cup")],
            ),
        ];
        let manual = vec![ShoppingListEntry {
            name: "milk".to_string(),
            quantity: 1.0,
            unit: "l".to_string(),
        }];
        ShoppingApp::new(catalog, manual)
    }

    fn type_text(app: &mut ShoppingApp, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    fn lines(app: &ShoppingApp) -> Vec<String> {
        app.context()
            .shopping_list()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[rstest]
    fn test_pick_recipe_and_adjust(mut app: ShoppingApp) {
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "shak");
        app.handle_key(KeyCode::Enter);

        assert_eq!(lines(&app), vec!["milk: 1 l", "egg: 4 piece"]);

        app.handle_key(KeyCode::Char('+'));
        assert_eq!(lines(&app), vec!["milk: 1 l", "egg: 8 piece"]);

        app.handle_key(KeyCode::Char('-'));
        app.handle_key(KeyCode::Char('-'));
        app.handle_key(KeyCode::Char('-'));
        assert_eq!(lines(&app), vec!["milk: 1 l", "egg: 0 piece"]);

        app.handle_key(KeyCode::Char('d'));
        assert_eq!(lines(&app), vec!["milk: 1 l"]);
    }

    #[rstest]
    fn test_picking_same_recipe_twice_increments(mut app: ShoppingApp) {
        for _ in 0..2 {
            app.handle_key(KeyCode::Char('a'));
            type_text(&mut app, "babka");
            app.handle_key(KeyCode::Enter);
        }

        assert_eq!(app.context().selections.len(), 1);
        assert_eq!(lines(&app), vec!["milk: 1 l", "flour: 1 cup"]);
    }

    #[rstest]
    fn test_manual_entry_is_queued(mut app: ShoppingApp) {
        app.handle_key(KeyCode::Char('m'));
        type_text(&mut app, "salt");
        app.handle_key(KeyCode::Enter);
        type_text(&mut app, "1/2");
        app.handle_key(KeyCode::Enter);
        type_text(&mut app, "tsp");
        app.handle_key(KeyCode::Enter);

        assert_eq!(lines(&app), vec!["milk: 1 l", "salt: 0.5 tsp"]);

        let pending = app.take_pending_entries();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name, "salt");
        assert!(app.take_pending_entries().is_empty());
    }

    #[rstest]
    fn test_blank_manual_entry_is_dropped(mut app: ShoppingApp) {
        app.handle_key(KeyCode::Char('m'));
        type_text(&mut app, "salt");
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        type_text(&mut app, "tsp");
        app.handle_key(KeyCode::Enter);

        assert_eq!(lines(&app), vec!["milk: 1 l"]);
        assert!(app.take_pending_entries().is_empty());
    }

    #[rstest]
    fn test_escape_backs_out_then_exits(mut app: ShoppingApp) {
        app.handle_key(KeyCode::Char('a'));

        assert!(matches!(app.handle_key(KeyCode::Esc), AppAction::Continue));
        assert!(matches!(app.handle_key(KeyCode::Esc), AppAction::Exit));
    }

    #[rstest]
    fn test_q_quits_only_from_shopping_view(mut app: ShoppingApp) {
        app.handle_key(KeyCode::Char('a'));
        type_text(&mut app, "q");
        assert!(matches!(app.handle_key(KeyCode::Char('q')), AppAction::Continue));

        app.handle_key(KeyCode::Esc);
        assert!(matches!(app.handle_key(KeyCode::Char('q')), AppAction::Exit));
    }

    #[rstest]
    fn test_render_every_state(mut app: ShoppingApp) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");

        terminal.draw(|f| app.render(f)).expect("draw shopping view");
        app.handle_key(KeyCode::Char('a'));
        terminal.draw(|f| app.render(f)).expect("draw recipe picker");
        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Char('m'));
        terminal.draw(|f| app.render(f)).expect("draw manual entry");
    }
}
