// src/noyau/format.rs
//
// Affichage numérique (f64 <-> texte)
// -----------------------------------
// - format()         : forme canonique de l’écran (entier, fixe ≤12 décimales, ou scientifique)
// - parse()          : lecture tolérante (texte partiel "0.", "-", "" => 0)
// - format_general() : forme compacte à N chiffres significatifs (indicateur mémoire)

use super::erreurs::{CalcError, CalcResult};

/// En dessous : affiché "0".
const SEUIL_ZERO: f64 = 1e-12;

/// Entiers affichés tels quels jusqu’à cette borne (exclue).
const BORNE_ENTIER: f64 = 1e12;

/// Au-delà (ou en deçà de SEUIL_PETIT) : notation scientifique.
const SEUIL_GRAND: f64 = 1e9;
const SEUIL_PETIT: f64 = 1e-6;

/// Chiffres après la virgule dans la mantisse scientifique.
const MANTISSE: usize = 6;

/// Décimales max en notation fixe (avant nettoyage des zéros).
const DECIMALES_FIXES: usize = 12;

/* ------------------------ f64 -> texte ------------------------ */

/// Forme canonique affichée à l’écran.
pub fn format(value: f64) -> String {
    if !value.is_finite() {
        // Le noyau ne stocke jamais inf/NaN (voir erreurs::fini) ; filet de sécurité.
        tracing::warn!(value, "format: valeur non finie remplacée par 0");
        return "0".to_string();
    }

    let abs = value.abs();

    if abs < SEUIL_ZERO {
        return "0".to_string();
    }

    if value == value.floor() && abs < BORNE_ENTIER {
        return format!("{}", value as i64);
    }

    if abs > SEUIL_GRAND || abs < SEUIL_PETIT {
        return format!("{:.*e}", MANTISSE, value);
    }

    nettoie_decimales(format!("{:.*}", DECIMALES_FIXES, value))
}

/// Forme compacte à `chiffres` chiffres significatifs (style %g).
/// "0" seulement pour un zéro exact.
pub fn format_general(value: f64, chiffres: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return "0".to_string();
    }

    let chiffres = chiffres.max(1);
    let sci = format!("{:.*e}", chiffres - 1, value);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exposant < -4 || exposant >= chiffres as i32 {
        format!("{}e{exposant}", nettoie_decimales(mantisse))
    } else {
        let decimales = (chiffres as i32 - 1 - exposant).max(0) as usize;
        nettoie_decimales(format!("{:.*}", decimales, value))
    }
}

/// "1.500000" -> "1.5" ; "2.000" -> "2" ; "120" -> "120" (pas de point : intact).
fn nettoie_decimales(mut s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/* ------------------------ texte -> f64 ------------------------ */

/// Lecture stricte : Err(Parse) si le texte n’est pas un littéral fini.
/// Les saisies partielles "" et "-" valent 0.
pub fn parse_strict(text: &str) -> CalcResult<f64> {
    let t = text.trim();
    if t.is_empty() || t == "-" {
        return Ok(0.0);
    }

    // f64::from_str accepte "inf"/"nan" : on refuse tout ce qui n’est pas un littéral numérique.
    if !t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return Err(CalcError::Parse {
            text: t.to_string(),
        });
    }

    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::Parse {
            text: t.to_string(),
        }),
    }
}

/// Lecture tolérante : tout texte illisible vaut 0.
pub fn parse(text: &str) -> f64 {
    match parse_strict(text) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(%e, "parse: remplacé par 0");
            0.0
        }
    }
}
