// src/noyau/memoire.rs
//
// Registre mémoire (MC / MR / M+ / M- / MS).
// Survit à "C" : seul MC le remet à zéro.

use super::format::format_general;

/// Chiffres significatifs de l’indicateur mémoire.
const CHIFFRES_MEMOIRE: usize = 6;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryRegister {
    valeur: f64,
}

impl MemoryRegister {
    pub fn clear(&mut self) {
        self.valeur = 0.0;
    }

    pub fn recall(&self) -> f64 {
        self.valeur
    }

    pub fn add(&mut self, v: f64) {
        self.valeur += v;
    }

    pub fn subtract(&mut self, v: f64) {
        self.valeur -= v;
    }

    pub fn store(&mut self, v: f64) {
        self.valeur = v;
    }

    pub fn display(&self) -> String {
        format_general(self.valeur, CHIFFRES_MEMOIRE)
    }
}
