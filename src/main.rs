// src/main.rs
//
// Calculatrice multi-base — point d'entrée natif
// ----------------------------------------------
// - eframe::run_native + NativeOptions (fenêtre format "pupitre")
// - Journalisation env_logger côté app (RUST_LOG=debug pour suivre les
//   touches) ; le noyau, lui, ne journalise jamais.

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice multi-base";

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("démarrage de {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([470.0, 430.0])
            .with_min_inner_size([430.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
