mod ui;

use clap::Parser;
use eframe::egui;
use menu_core::{DishDraft, MenuStore};
use tracing::info;

use crate::ui::{MenuBoardApp, PersistedBoardSettings, SETTINGS_STORAGE_KEY};

/// Desktop menu board: add dishes, review the list, total them at checkout.
#[derive(Debug, Parser)]
#[command(name = "bite-board", about = "Christoffel's Daily Bite Board")]
struct StartupConfig {
    /// Preload the three demo dishes from the sample menu.
    #[arg(long)]
    seed_demo_menu: bool,

    /// Initial text scale override (clamped to 0.8..=1.6).
    #[arg(long)]
    text_scale: Option<f32>,
}

const DEMO_MENU: &[(&str, &str, &str)] = &[
    ("Signature Pasta", "120.00", "Main"),
    ("Prawn Cocktail", "85.50", "Starter"),
    ("Chocolate Fondant", "95.00", "Dessert"),
];

fn seed_demo_menu(store: &mut MenuStore) {
    for (name, price, course) in DEMO_MENU {
        store.add_item(DishDraft::new(*name, *price, *course));
    }
    info!(items = store.len(), "seeded demo menu");
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let startup = StartupConfig::parse();
    let mut store = MenuStore::new();
    if startup.seed_demo_menu {
        seed_demo_menu(&mut store);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Christoffel's Daily Bite Board")
            .with_inner_size([520.0, 820.0])
            .with_min_inner_size([420.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Christoffel's Daily Bite Board",
        options,
        Box::new(move |cc| {
            let mut settings = cc
                .storage
                .and_then(|storage| storage.get_string(SETTINGS_STORAGE_KEY))
                .and_then(|text| serde_json::from_str::<PersistedBoardSettings>(&text).ok())
                .unwrap_or_default();
            if let Some(scale) = startup.text_scale {
                settings.text_scale = scale;
            }
            Ok(Box::new(MenuBoardApp::new(store, settings)))
        }),
    )
}
