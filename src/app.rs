// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en Actions (une seule fois, à la frontière)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{Action, Operator};

/// Caractère tapé -> touche de la calculatrice.
pub fn action_clavier(c: char) -> Option<Action> {
    match c {
        '0'..='9' => Some(Action::Digit(c)),
        '.' | ',' => Some(Action::Decimal),
        '(' => Some(Action::OpenParen),
        ')' => Some(Action::CloseParen),
        '=' => Some(Action::Equal),
        _ => Operator::from_symbol(c).map(Action::Operator),
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier global (pas de champ texte : rien ne consomme ces évènements)
        // Enter = "=", Backspace = DEL, Escape = C.
        let actions: Vec<Action> = ctx.input(|i| {
            let mut v = Vec::new();
            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => v.extend(t.chars().filter_map(action_clavier)),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => v.push(Action::Equal),
                        egui::Key::Backspace => v.push(Action::Backspace),
                        egui::Key::Escape => v.push(Action::Clear),
                        _ => {}
                    },
                    _ => {}
                }
            }
            v
        });
        for a in actions {
            self.envoyer(a);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
