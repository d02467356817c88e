// src/app/vue.rs
//
// Vue (UI egui) — pavés de la calculatrice
// ----------------------------------------
// - AUCUNE logique ici : chaque bouton fabrique une Touche et la passe à
//   l'automate (etat.rs).
// - Disposition : pavé 4x4 à gauche, fonctions sur deux colonnes à droite.
// - Le cadre de l'affichage change de teinte pendant le choix de base.

use eframe::egui;

use super::etat::{AppCalc, Mode, Touche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice multi-base");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            self.ui_pave_numerique(ui);
            ui.add_space(12.0);
            self.ui_pave_fonctions(ui);
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let fond = if matches!(self.mode, Mode::ConversionBase { .. }) {
            // teinte verte pendant le choix de base
            egui::Color32::from_rgb(200, 230, 200)
        } else {
            ui.visuals().extreme_bg_color
        };

        egui::Frame::group(ui.style()).fill(fond).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
            ui.monospace(&self.affichage);
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "/", Touche::Operateur("/"));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "*", Touche::Operateur("*"));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "-", Touche::Operateur("-"));
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                self.bouton(ui, "+", Touche::Operateur("+"));
                ui.end_row();
            });
    }

    fn ui_pave_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_fonctions")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_fonction(ui, "sin", "Sinus (degrés)", Touche::Fonction("sin"));
                self.bouton_fonction(ui, "cos", "Cosinus (degrés)", Touche::Fonction("cos"));
                ui.end_row();

                self.bouton_fonction(ui, "tan", "Tangente (degrés)", Touche::Fonction("tan"));
                self.bouton_fonction(ui, "cot", "Cotangente (degrés)", Touche::Fonction("cot"));
                ui.end_row();

                self.bouton_fonction(ui, "^", "Puissance", Touche::Operateur("^"));
                self.bouton_fonction(ui, "!", "Factorielle", Touche::Factorielle);
                ui.end_row();

                self.bouton_fonction(ui, "+/-", "Change le signe", Touche::Signe);
                self.bouton_fonction(
                    ui,
                    "conv",
                    "Conversion de base (depuis le décimal)",
                    Touche::Conversion,
                );
                ui.end_row();

                self.bouton_fonction(ui, "DEL", "Efface le dernier symbole", Touche::Suppr);
                // EXIT a besoin du contexte : traité à part
                let resp = ui
                    .add_sized([88.0, 34.0], egui::Button::new("EXIT"))
                    .on_hover_text("Ferme la calculatrice");
                if resp.clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        if ui.add_sized([56.0, 44.0], egui::Button::new(label)).clicked() {
            self.appuyer(touche);
        }
    }

    fn bouton_fonction(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let resp = ui
            .add_sized([88.0, 34.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
