use anyhow::Result;
use chrono::Local;

use critterdex::config::Config;
use critterdex::engine::availability::available_at;
use critterdex::engine::catalog::CatalogService;
use critterdex::engine::collectable::CollectableKind;
use critterdex::engine::selection::Selections;
use critterdex::engine::storage::SelectionStore;

// One-shot availability report on stdout, for shells and scripts that don't
// want the interactive table.
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

    env_logger::init();

    let filter = config.display.time_filter;
    let service = CatalogService::new(&config.system.assets_dir);
    let mut selections = Selections::seed(SelectionStore::new(&config.system.data_dir));
    let now = Local::now();

    for kind in CollectableKind::ALL {
        let catalog = service.load(kind).await;
        selections.catalog_arrived(kind, &catalog);

        let available = available_at(&catalog, filter, now);
        println!(
            "{}",
            selections.summary_text(kind, &available, config.display.show_only_missing, filter)
        );

        let displayed = selections.filtered_display(
            kind,
            &available,
            config.display.show_only_missing,
            config.display.its_raining,
        );
        for c in &displayed {
            let marker = if selections.is_selected(kind, c) { "x" } else { " " };
            let last = if c.is_last_month { "  (last month!)" } else { "" };
            println!("  [{}] {:<24} {:<14} {}{}", marker, c.name, c.time_label(), c.months, last);
        }
        println!();
    }

    Ok(())
}
