//! Tests de scénarios : séquences de touches complètes, comme sur la calculatrice.
//!
//! Chaque scénario est écrit en "touches" lisibles ("2 + 3 * 4 =") puis rejoué
//! sur un Evaluator neuf.

use super::actions::{Action, ConstantTag, FunctionTag, MemoryCommand, Operator, Outcome};
use super::erreurs::ErrorKind;
use super::eval::Evaluator;
use super::format::{format, parse};

/// Touches séparées par des espaces. Chiffres/point regroupés : "12.5".
fn touches(seq: &str) -> Vec<Action> {
    let mut out = Vec::new();
    for t in seq.split_whitespace() {
        let a = match t {
            "=" => Action::Equal,
            "(" => Action::OpenParen,
            ")" => Action::CloseParen,
            "C" => Action::Clear,
            "DEL" => Action::Backspace,
            "Ans" => Action::Answer,
            "MC" => Action::Memory(MemoryCommand::Clear),
            "MR" => Action::Memory(MemoryCommand::Recall),
            "M+" => Action::Memory(MemoryCommand::Add),
            "M-" => Action::Memory(MemoryCommand::Subtract),
            "MS" => Action::Memory(MemoryCommand::Store),
            "pi" => Action::Constant(ConstantTag::Pi),
            "sqrt" => Action::Function(FunctionTag::Sqrt),
            "cbrt" => Action::Function(FunctionTag::Cbrt),
            "x2" => Action::Function(FunctionTag::Square),
            "x3" => Action::Function(FunctionTag::Cube),
            "neg" => Action::Function(FunctionTag::Negate),
            "ln" => Action::Function(FunctionTag::Ln),
            "asin" => Action::Function(FunctionTag::Asin),
            "tan" => Action::Function(FunctionTag::Tan),
            "rad" => Action::SetRadians(true),
            "deg" => Action::SetRadians(false),
            _ => {
                let mut cs = t.chars();
                if let (Some(c), None) = (cs.next(), cs.next()) {
                    if let Some(op) = Operator::from_symbol(c) {
                        out.push(Action::Operator(op));
                        continue;
                    }
                }
                for c in t.chars() {
                    out.push(if c == '.' {
                        Action::Decimal
                    } else {
                        Action::Digit(c)
                    });
                }
                continue;
            }
        };
        out.push(a);
    }
    out
}

/// Rejoue la séquence ; renvoie l’évaluateur et le dernier Outcome.
fn joue(seq: &str) -> (Evaluator, Outcome) {
    let mut ev = Evaluator::default();
    let mut dernier = ev.outcome();
    for a in touches(seq) {
        dernier = ev.apply(a);
    }
    (ev, dernier)
}

fn ecran(seq: &str) -> String {
    let (_ev, o) = joue(seq);
    assert!(o.error.is_none(), "seq={seq:?} erreur={:?}", o.error);
    o.display_text
}

/* ------------------------ Évaluation gauche -> droite ------------------------ */

#[test]
fn sans_priorite_operatoire() {
    assert_eq!(ecran("2 + 3 * 4 ="), "20");
    assert_eq!(ecran("10 - 4 / 2 ="), "3");
    assert_eq!(ecran("2 ^ 3 ^ 2 ="), "64");
}

#[test]
fn chaine_apres_egal() {
    // le résultat sert d’opérande gauche à la suite
    assert_eq!(ecran("6 * 7 = - 2 ="), "40");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn remplacement_puis_ajout() {
    let (ev, o) = joue("5 0");
    assert_eq!(o.display_text, "50");
    assert!(!ev.entry_mode());
}

#[test]
fn decimales() {
    assert_eq!(ecran("1.5 + .25 ="), "1.75");
    assert_eq!(ecran("0.1 + 0.2 ="), "0.3");
}

/* ------------------------ Erreurs récupérées ------------------------ */

#[test]
fn division_par_zero_etat_inchange() {
    let (avant, _) = joue("5 / 0");
    let (apres, o) = joue("5 / 0 =");
    assert_eq!(o.error.map(|e| e.kind), Some(ErrorKind::DivisionByZero));
    assert_eq!(apres, avant);
    assert_eq!(apres.accumulator(), 5.0);
}

#[test]
fn racines() {
    let (_ev, o) = joue("4 neg sqrt");
    assert_eq!(o.error.map(|e| e.kind), Some(ErrorKind::Domain));
    assert_eq!(o.display_text, "-4");

    assert_eq!(ecran("8 neg cbrt"), "-2");
}

#[test]
fn puissances_unaires() {
    assert_eq!(ecran("3 neg x2"), "9");
    assert_eq!(ecran("3 neg x3"), "-27");
}

#[test]
fn domaines_divers() {
    for seq in ["0 ln", "2 asin", "rad deg 90 tan", "rad 1 asin 2 asin"] {
        let (_ev, o) = joue(seq);
        assert_eq!(
            o.error.map(|e| e.kind),
            Some(ErrorKind::Domain),
            "seq={seq:?}"
        );
    }
}

#[test]
fn erreur_puis_correction_sans_residu() {
    // 9 / 0 refusé ; on corrige le diviseur, la même touche réussit
    let (mut ev, o) = joue("9 / 0 =");
    assert!(o.error.is_some());
    ev.apply(Action::Backspace);
    ev.apply(Action::Digit('3'));
    let o = ev.apply(Action::Equal);
    assert!(o.error.is_none());
    assert_eq!(o.display_text, "3");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_survit_a_clear() {
    assert_eq!(ecran("7 MS C MR"), "7");
}

#[test]
fn seul_mc_efface_la_memoire() {
    let (_ev, o) = joue("7 MS C MC MR");
    assert_eq!(o.display_text, "0");
    assert_eq!(o.memory_text, "0");
}

#[test]
fn memoire_dans_un_calcul() {
    // MR fournit l’opérande droit
    assert_eq!(ecran("4 MS C 10 - MR ="), "6");
    // M+ / M- cumulent (M+ ne termine pas la saisie : C entre deux nombres)
    let (_ev, o) = joue("2 M+ C 3 M+ C 1 M-");
    assert_eq!(o.memory_text, "4");
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn groupe_puis_multiplication() {
    assert_eq!(ecran("( 3 + 4 ) * 2 ="), "14");
}

#[test]
fn operateur_puis_groupe() {
    assert_eq!(ecran("2 * ( 3 + 4 )"), "14");
    assert_eq!(ecran("20 / ( 1 + 4 ) + 1 ="), "5");
}

#[test]
fn fermeture_comme_egal() {
    assert_eq!(ecran("( 3 + )"), ecran("3 + ="));
    assert_eq!(ecran("2 * ( 3 + )"), "12");
    assert_eq!(ecran("( 2 ^ 3 )"), ecran("2 ^ 3 ="));
}

#[test]
fn groupe_nu() {
    assert_eq!(ecran("( 5 )"), "5");
}

#[test]
fn fermeture_orpheline() {
    let (ev, o) = joue("3 + 4 ) =");
    assert!(o.error.is_none());
    assert_eq!(o.display_text, "7");
    assert_eq!(ev.depth(), 0);
}

/* ------------------------ Ans / constantes ------------------------ */

#[test]
fn ans_rappelle_le_dernier_resultat() {
    assert_eq!(ecran("3 * 3 = C Ans + 1 ="), "10");
    // une fonction met aussi Ans à jour
    assert_eq!(ecran("16 sqrt C Ans"), "4");
}

#[test]
fn constante_pi() {
    let s = ecran("pi");
    assert!((parse(&s) - std::f64::consts::PI).abs() < 1e-11);
}

/* ------------------------ Format ------------------------ */

#[test]
fn affichage_stable_apres_relecture() {
    for seq in ["1 / 3 =", "2 / 7 =", "10 ^ 15 =", "1 / 100000000 =", "pi", "2 sqrt"] {
        let s = ecran(seq);
        assert_eq!(format(parse(&s)), s, "seq={seq:?}");
    }
}

#[test]
fn relecture_entre_1e9_et_1e12() {
    // mantisse à 6 chiffres : relue comme un entier, puis stable
    let s = ecran("1234567890.5 + 0 =");
    assert_eq!(s, "1.234568e9");
    let relu = format(parse(&s));
    assert_eq!(relu, "1234568000");
    assert_eq!(format(parse(&relu)), relu);
}
