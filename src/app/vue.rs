// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran en lecture seule : tout passe par les touches (pavé ou clavier)
// - Clavier : chiffres / opérateurs insérés, Enter évalue, Backspace efface,
//   Échap vide, s/f/l/p = √x / x! / ln / x^y

use eframe::egui;

use super::etat::{AppCalc, Touche};

/// Pavé : (libellé, touche), ligne par ligne.
const PAVE: [[(&str, Touche); 4]; 6] = [
    [
        ("x!", Touche::Factorielle),
        ("√x", Touche::Racine),
        ("ln", Touche::Ln),
        ("x^y", Touche::Puissance),
    ],
    [
        ("C", Touche::Efface),
        ("DEL", Touche::Retour),
        ("(", Touche::Insere("(")),
        (")", Touche::Insere(")")),
    ],
    [
        ("7", Touche::Insere("7")),
        ("8", Touche::Insere("8")),
        ("9", Touche::Insere("9")),
        ("÷", Touche::Insere("÷")),
    ],
    [
        ("4", Touche::Insere("4")),
        ("5", Touche::Insere("5")),
        ("6", Touche::Insere("6")),
        ("×", Touche::Insere("×")),
    ],
    [
        ("1", Touche::Insere("1")),
        ("2", Touche::Insere("2")),
        ("3", Touche::Insere("3")),
        ("-", Touche::Insere("-")),
    ],
    [
        ("0", Touche::Insere("0")),
        (".", Touche::Insere(".")),
        ("=", Touche::Egal),
        ("+", Touche::Insere("+")),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_clavier(ui);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /// Touches physiques (le champ n’est pas éditable : on route tout vers l’état).
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let textes: Vec<String> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect()
        });
        for t in textes {
            for c in t.chars() {
                self.touche_clavier(c);
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.appuie(Touche::Egal);
        }
        if ui.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.appuie(Touche::Retour);
        }
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.appuie(Touche::Efface);
        }
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));

                let texte = egui::RichText::new(self.affichage()).monospace().size(24.0);
                if self.erreur.is_some() {
                    ui.colored_label(ui.visuals().error_fg_color, texte);
                } else {
                    ui.label(texte);
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, touche) in ligne {
                        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(libelle));
                        if resp.clicked() {
                            self.appuie(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
