use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use tokio::sync::Mutex;

use critterdex::config::Config;
use critterdex::engine::catalog::CatalogService;
use critterdex::engine::collectable::{Collectable, CollectableKind};
use critterdex::engine::selection::Selections;
use critterdex::engine::storage::SelectionStore;
use critterdex::tui::app::App;
use critterdex::tui::events;
use critterdex::tui::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let config_path = "config.toml";
    let config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path)?
    } else {
        let cfg = Config::default();
        cfg.save(config_path)?;
        cfg
    };

    // Restore collected sets before any catalog lands
    let store = SelectionStore::new(&config.system.data_dir);
    let selections = Selections::seed(store);

    // Setup TUI
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(config.clone(), selections)));

    // Catalog loaders, one task per kind, reporting over a channel
    let service = Arc::new(CatalogService::new(&config.system.assets_dir));
    let (catalog_tx, mut catalog_rx) =
        tokio::sync::mpsc::channel::<(CollectableKind, Vec<Collectable>)>(8);

    for kind in CollectableKind::ALL {
        let service = service.clone();
        let tx = catalog_tx.clone();
        tokio::spawn(async move {
            let records = service.load(kind).await;
            let _ = tx.send((kind, records)).await;
        });
    }
    drop(catalog_tx);

    // Catalog Processor
    let app_clone = app.clone();
    let _catalog_processor = tokio::spawn(async move {
        while let Some((kind, records)) = catalog_rx.recv().await {
            let mut app = app_clone.lock().await;
            app.install_catalog(kind, records);
        }
    });

    // Main Loop (TUI)
    let res = run_app(&mut terminal, app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<()> {
    loop {
        {
            let mut app_guard = app.lock().await;
            terminal.draw(|f| ui::draw(f, &mut app_guard))?;
            if app_guard.should_quit {
                return Ok(());
            }
        }

        // Handle input
        {
            let mut app_guard = app.lock().await;
            events::handle_events(&mut app_guard)?;
        }
    }
}
