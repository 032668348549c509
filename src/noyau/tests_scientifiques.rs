//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier l’évaluateur sur des propriétés, pas seulement des exemples.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - ^ est associatif à gauche : 2^3^2 = (2^3)^2.
//! - Le moins unaire s’attache au littéral qui le suit : -2^2 = 4.
//! - Les fonctions x!, √x, ln ne s’utilisent que seules : f(littéral).

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalc;
use super::eval_expression;
use super::nombre::Nombre;

fn eval_ok(expr: &str) -> Nombre {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_txt(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr).to_string(), attendu, "expr={expr:?}");
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr).en_f64();
    let tol = 1e-9 * attendu.abs().max(1.0);
    assert!((v - attendu).abs() <= tol, "expr={expr:?} obtenu={v} attendu={attendu}");
}

fn assert_err(expr: &str, attendu: ErreurCalc) {
    assert_eq!(eval_expression(expr), Err(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédences ------------------------ */

#[test]
fn sci_paliers_de_precedence() {
    // chaque ligne : expression, valeur attendue selon l’arithmétique usuelle
    let cas: [(&str, f64); 10] = [
        ("2+3×4", 14.0),
        ("2×3+4", 10.0),
        ("20-6÷3", 18.0),
        ("20÷4×5", 25.0),
        ("2+3^2", 11.0),
        ("2×3^2", 18.0),
        ("1+2×3-4÷2", 5.0),
        ("(1+2)×(3-4)÷2", -1.5),
        ("2^(1+2)", 8.0),
        ("((2))×((3))", 6.0),
    ];
    for (expr, attendu) in cas {
        assert_proche(expr, attendu);
    }
}

#[test]
fn sci_gauche_a_droite_meme_palier() {
    assert_txt("8-3-2", "3");
    assert_txt("64÷4÷2", "8");
    assert_txt("8÷2×4", "16");
    assert_txt("2^3^2", "64");
}

#[test]
fn sci_moins_unaire_compositions() {
    assert_txt("-5+3", "-2");
    assert_txt("3×-2", "-6");
    assert_txt("-(-3)", "3");
    assert_txt("4÷-2", "-2");
    assert_txt("(-3)×(-3)", "9");
    assert_txt("-2^2", "4");
    assert_txt("-(2^2)", "-4");
    assert_txt("(-2)^3", "-8");
}

/* ------------------------ Normalisation ------------------------ */

#[test]
fn sci_normalisation_entiers() {
    // aucun “.0” après un calcul entier
    assert_txt("1.5+1.5", "3");
    assert_txt("0.5×4", "2");
    assert_txt("9÷3", "3");
    assert_txt("2.0", "2");
    assert_txt("10÷4", "2.5");
}

#[test]
fn sci_entiers_chaines_sans_bruit() {
    // 2^62 × 4 dépasse i64 mais reste exact
    assert_txt("2^62×4", "18446744073709551616");
    assert_txt("12345678901234567890-12345678901234567889", "1");
}

/* ------------------------ Garde-fous ------------------------ */

#[test]
fn sci_seuil_1e300() {
    assert_txt("10^300÷10^299", "10");
    assert_err("10^300×10", ErreurCalc::ResultTooLarge);
    assert_err("2^1000×2^1000", ErreurCalc::ResultTooLarge);
    assert_err("0.5×10^301", ErreurCalc::ResultTooLarge);
}

#[test]
fn sci_erreurs_typees() {
    assert_err("5÷0", ErreurCalc::DivisionByZero);
    assert_err("5÷(2-2)", ErreurCalc::DivisionByZero);
    assert_err("2^-1", ErreurCalc::NegativeExponentNotSupported);
    assert_err("(-2)^0.5", ErreurCalc::UnsupportedOperation);
    assert_err("((1)", ErreurCalc::UnbalancedParentheses);
    assert_err("1+×2", ErreurCalc::InvalidExpression);
}

/* ------------------------ Raccourcis ------------------------ */

#[test]
fn sci_raccourcis_fonctions() {
    assert_txt("√x(9)", "3");
    assert_txt("x!(5)", "120");
    assert_txt("x!(0)", "1");
    assert_txt("ln(1)", "0");
    assert_proche("√x(0.25)", 0.5);
    assert_proche("ln(1000000)", 13.81551055796428);
    assert_err("x!(-1)", ErreurCalc::NegativeInput);
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["2+3×4", "-(1.5+2)^2", "7÷3", "√x(2)", "ln(10)", "5÷0"] {
        let a = eval_expression(expr);
        let b = eval_expression(expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = vec!["1"; 5000].join("+");
    budget(t0, max);

    assert_txt(&expr, "5000");
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // piles explicites : pas de récursion, la profondeur ne coûte que de la mémoire
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_txt(&expr, "1");

    let expr = format!("{}2{}", "-(".repeat(n), ")".repeat(n));
    assert_txt(&expr, "2");
    budget(t0, max);
}
