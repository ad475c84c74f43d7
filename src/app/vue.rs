// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Écran monospace aligné à droite, couleur d’erreur si MARQUEUR_ERREUR
// - Pavé 4 colonnes construit depuis touches::DISPOSITION (le "0" occupe 2 cases)
// - Gros boutons (tactile), aide au survol
//
// La vue ne calcule rien : clic -> AppCalc::declencher(action).

use eframe::egui;

use super::etat::AppCalc;
use super::touches::{rangees, Touche, Variante, COLONNES};

/// Hauteur d’une touche (points egui).
const HAUTEUR_TOUCHE: f32 = 52.0;
const ESPACEMENT: f32 = 8.0;
const TAILLE_ECRAN: f32 = 36.0;
const TAILLE_TOUCHE: f32 = 20.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        ui.vertical_centered(|ui| {
            ui.heading("Calculatrice");
            ui.label("Simple et rapide, pour les opérations du quotidien.");
        });

        ui.add_space(10.0);
        self.ui_ecran(ui);
        ui.add_space(10.0);
        self.ui_pave(ui);
        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            ui.small("× multiplie, ÷ divise. % et +/- servent aux calculs de tous les jours.");
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.est_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(TAILLE_ECRAN)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let disponible = ui.available_width();
        let colonnes = COLONNES as f32;
        let case = ((disponible - ESPACEMENT * (colonnes - 1.0)) / colonnes).max(40.0);

        for rangee in rangees() {
            ui.horizontal(|ui| {
                for touche in rangee {
                    self.bouton(ui, touche, case);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &Touche, case: f32) {
        let largeur = case * touche.largeur as f32 + ESPACEMENT * (touche.largeur as f32 - 1.0);
        let texte = egui::RichText::new(touche.libelle).size(TAILLE_TOUCHE);

        let bouton = match touche.variante {
            Variante::Defaut => egui::Button::new(texte),
            Variante::Operateur => {
                egui::Button::new(texte.strong()).fill(ui.visuals().selection.bg_fill)
            }
            Variante::Controle => egui::Button::new(texte).fill(ui.visuals().faint_bg_color),
        };

        let resp = ui
            .add_sized([largeur, HAUTEUR_TOUCHE], bouton)
            .on_hover_text(touche.aide());

        if resp.clicked() {
            self.declencher(touche.action);
        }
    }
}
