use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mealcart::{
    config::{DatabaseArgs, init_logging},
    controllers::{add_shopping_item, get_all_recipes, get_shopping_items},
    tui::app::{AppAction, ShoppingApp},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

/// Build a shopping list from recipes and manual entries
#[derive(Parser)]
#[command(name = "mealcart")]
struct Cli {
    #[command(flatten)]
    database: DatabaseArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Quiet by default, log lines would draw over the alternate screen
    init_logging("warn");

    let pool = cli.database.connect().await?;

    let catalog = get_all_recipes(&pool).await?;
    if catalog.is_empty() {
        println!("The recipe catalog is empty, run mealcart-seed to load sample recipes.");
    }
    let mut app = ShoppingApp::new(catalog, get_shopping_items(&pool).await?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result: anyhow::Result<()> = async {
        loop {
            terminal.draw(|f| app.render(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let AppAction::Exit = app.handle_key(key.code) {
                    break;
                }
            }

            for entry in app.take_pending_entries() {
                add_shopping_item(&pool, &entry).await?;
            }
        }
        Ok(())
    }
    .await;

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result?;

    let list = app.context().shopping_list();
    info!(lines = list.len(), "shopping session finished");
    for entry in list {
        println!("{}", entry);
    }

    Ok(())
}
