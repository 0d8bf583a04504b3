// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé à touches : chaque bouton envoie UNE Action typée au noyau
// - Écran aligné à droite + indicateur mémoire + groupes ouverts
// - Erreur du noyau affichée en rouge, écran conservé
//
// Note :
// - libellés ASCII / Latin-1 (polices par défaut d’egui : pas de “carrés”)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Action, ConstantTag, FunctionTag, MemoryCommand, Operator};

/// Colonne gauche : mémoire + fonctions scientifiques (7 × 2).
const PAVE_GAUCHE: [[Action; 2]; 7] = [
    [
        Action::Memory(MemoryCommand::Clear),
        Action::Memory(MemoryCommand::Recall),
    ],
    [
        Action::Memory(MemoryCommand::Add),
        Action::Memory(MemoryCommand::Subtract),
    ],
    [Action::Memory(MemoryCommand::Store), Action::Answer],
    [
        Action::Function(FunctionTag::Ln),
        Action::Function(FunctionTag::Log10),
    ],
    [
        Action::Function(FunctionTag::Exp),
        Action::Function(FunctionTag::Pow10),
    ],
    [
        Action::Function(FunctionTag::Square),
        Action::Function(FunctionTag::Cube),
    ],
    [
        Action::Function(FunctionTag::Sqrt),
        Action::Function(FunctionTag::Cbrt),
    ],
];

/// Pavé principal (6 × 5).
const PAVE_PRINCIPAL: [[Action; 5]; 6] = [
    [
        Action::Function(FunctionTag::Sin),
        Action::Function(FunctionTag::Cos),
        Action::Function(FunctionTag::Tan),
        Action::OpenParen,
        Action::CloseParen,
    ],
    [
        Action::Function(FunctionTag::Asin),
        Action::Function(FunctionTag::Acos),
        Action::Function(FunctionTag::Atan),
        Action::Constant(ConstantTag::Pi),
        Action::Constant(ConstantTag::E),
    ],
    [
        Action::Digit('7'),
        Action::Digit('8'),
        Action::Digit('9'),
        Action::Operator(Operator::Div),
        Action::Clear,
    ],
    [
        Action::Digit('4'),
        Action::Digit('5'),
        Action::Digit('6'),
        Action::Operator(Operator::Mul),
        Action::Backspace,
    ],
    [
        Action::Digit('1'),
        Action::Digit('2'),
        Action::Digit('3'),
        Action::Operator(Operator::Sub),
        Action::Function(FunctionTag::Negate),
    ],
    [
        Action::Digit('0'),
        Action::Decimal,
        Action::Equal,
        Action::Operator(Operator::Add),
        Action::Operator(Operator::Pow),
    ],
];

/// Libellé d’une touche.
pub fn libelle(action: Action) -> String {
    match action {
        Action::Digit(c) => c.to_string(),
        Action::Decimal => ".".to_string(),
        Action::Backspace => "DEL".to_string(),
        Action::Operator(op) => op.symbol().to_string(),
        Action::Equal => "=".to_string(),
        Action::OpenParen => "(".to_string(),
        Action::CloseParen => ")".to_string(),
        Action::Function(f) => f.label().to_string(),
        Action::Memory(m) => m.label().to_string(),
        Action::Constant(c) => c.label().to_string(),
        Action::Clear => "C".to_string(),
        Action::Answer => "Ans".to_string(),
        Action::SetRadians(_) => "Rad".to_string(),
    }
}

/// Bulle d’aide (quelques touches seulement).
fn aide(action: Action) -> Option<&'static str> {
    match action {
        Action::Clear => Some("Remise à zéro (la mémoire est conservée)"),
        Action::Backspace => Some("Efface le dernier caractère"),
        Action::Answer => Some("Rappelle le dernier résultat"),
        Action::Memory(MemoryCommand::Clear) => Some("Efface la mémoire"),
        Action::Memory(MemoryCommand::Store) => Some("Range l’écran en mémoire"),
        Action::Function(FunctionTag::Negate) => Some("Change le signe"),
        _ => None,
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice scientifique");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(6.0);
        self.ui_controles(ui);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            self.ui_pave_gauche(ui);
            ui.add_space(8.0);
            self.ui_pave_principal(ui);
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.ecran).monospace().size(28.0));
                });
            });
    }

    fn ui_controles(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut radians = self.radians;
            if ui.checkbox(&mut radians, "Radians").changed() {
                self.envoyer(Action::SetRadians(radians));
            }

            ui.separator();
            ui.monospace(format!("Mémoire : {}", self.memoire));

            ui.separator();
            ui.monospace(format!("Ans : {}", self.reponse()));

            if let Some(op) = self.en_attente() {
                ui.separator();
                ui.monospace(format!("en attente : {op}"));
            }

            let ouverts = self.groupes_ouverts();
            if ouverts > 0 {
                ui.separator();
                ui.monospace(format!("( ×{ouverts}"));
            }
        });
    }

    fn ui_pave_gauche(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_gauche")
            .num_columns(2)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for ligne in PAVE_GAUCHE {
                    for action in ligne {
                        self.touche(ui, action);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave_principal(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_principal")
            .num_columns(5)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for ligne in PAVE_PRINCIPAL {
                    for action in ligne {
                        self.touche(ui, action);
                    }
                    ui.end_row();
                }
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, action: Action) {
        let mut resp = ui.add_sized([56.0, 34.0], egui::Button::new(libelle(action)));
        if let Some(tip) = aide(action) {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            self.envoyer(action);
        }
    }
}
