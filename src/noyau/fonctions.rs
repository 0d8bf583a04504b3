// src/noyau/fonctions.rs
//
// Bibliothèque de fonctions (sans état)
// -------------------------------------
// - trig directe : l’opérande est converti en radians selon le mode
// - trig inverse : le résultat est reconverti dans l’unité du mode
// - chaque rejet de domaine => CalcError::Domain, aucun résultat partiel
// - résultat non fini (eˣ, 10ˣ trop grands) => CalcError::Domain

use std::f64::consts::{E, FRAC_PI_2, PI};

use super::actions::FunctionTag;
use super::angle::{from_radians, to_radians};
use super::erreurs::{fini, CalcError, CalcResult};

/// Tolérance pour reconnaître une asymptote de tan (multiple impair de π/2).
const TOLERANCE_ASYMPTOTE: f64 = 1e-10;

pub fn apply(tag: FunctionTag, operand: f64, use_radians: bool) -> CalcResult<f64> {
    use FunctionTag::*;

    let x = operand;
    let v = match tag {
        Sin => to_radians(x, use_radians).sin(),
        Cos => to_radians(x, use_radians).cos(),
        Tan => {
            let r = to_radians(x, use_radians);
            if est_asymptote_tan(r) {
                return Err(CalcError::domain("tangente indéfinie (multiple impair de π/2)"));
            }
            r.tan()
        }

        Asin | Acos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(CalcError::domain("argument hors de [-1, 1]"));
            }
            let r = if tag == Asin { x.asin() } else { x.acos() };
            from_radians(r, use_radians)
        }
        Atan => from_radians(x.atan(), use_radians),

        Ln | Log10 => {
            if x <= 0.0 {
                return Err(CalcError::domain("logarithme d’un nombre non positif"));
            }
            if tag == Ln {
                x.ln()
            } else {
                x.log10()
            }
        }
        Exp => x.exp(),
        Pow10 => 10f64.powf(x),

        Square => x * x,
        Cube => x * x * x,
        Sqrt => {
            if x < 0.0 {
                return Err(CalcError::domain("racine carrée d’un nombre négatif"));
            }
            x.sqrt()
        }
        // définie pour les négatifs
        Cbrt => x.cbrt(),

        Negate => -x,

        ConstantPi => PI,
        ConstantE => E,
    };

    fini(v)
}

/// r (radians) proche de (2k+1)·π/2 ?
fn est_asymptote_tan(r: f64) -> bool {
    let n = (r / FRAC_PI_2).round();
    if n % 2.0 == 0.0 {
        return false;
    }
    (r - n * FRAC_PI_2).abs() < TOLERANCE_ASYMPTOTE
}
