//! Tests fuzz safe : robustesse de la lecture + déterminisme + limites contrôlées.
//!
//! But : marteler tokenisation / descente / correction sans brûler la machine.
//! - RNG déterministe (ChaCha8Rng, graine fixe)
//! - longueur bornée
//! - budget temps global
//! - erreurs attendues : lecture, division par zéro, dépassement. Jamais de panique.

use std::time::{Duration, Instant};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::correcteur::corriger;
use super::erreur::ErreurNoyau;
use super::eval::evaluer_texte;

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurNoyau) -> bool {
    matches!(
        e,
        ErreurNoyau::Lecture { .. } | ErreurNoyau::DivisionParZero | ErreurNoyau::Depassement
    )
}

/// Morceaux de texte : valides, presque valides, ou franchement faux.
const MORCEAUX: [&str; 18] = [
    "1", "0", "7", "12", "1/2", "0/3", "3/0", "2’1/3", "1’0/4", "+", "-", "×", "÷", "(", ")", " ",
    "*", "’",
];

fn gen_texte(rng: &mut ChaCha8Rng, longueur: usize) -> String {
    let mut s = String::new();
    for _ in 0..longueur {
        s.push_str(MORCEAUX[rng.random_range(0..MORCEAUX.len())]);
        if rng.random_bool(0.7) {
            s.push(' ');
        }
    }
    s
}

/// Expression bien formée (parenthèses équilibrées), profondeur bornée.
fn gen_expr(rng: &mut ChaCha8Rng, profondeur: usize) -> String {
    if profondeur == 0 || rng.random_bool(0.3) {
        return match rng.random_range(0..3) {
            0 => rng.random_range(0..20u32).to_string(),
            1 => format!("{}/{}", rng.random_range(0..9u32), rng.random_range(1..10u32)),
            _ => format!(
                "{}’{}/{}",
                rng.random_range(1..5u32),
                rng.random_range(0..4u32),
                rng.random_range(4..9u32)
            ),
        };
    }
    let op = ["+", "-", "×", "÷"][rng.random_range(0..4)];
    let g = gen_expr(rng, profondeur - 1);
    let d = gen_expr(rng, profondeur - 1);
    if rng.random_bool(0.5) {
        format!("({g} {op} {d})")
    } else {
        format!("{g} {op} {d}")
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_texte_aleatoire_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = rng.random_range(1..12);
        let texte = gen_texte(&mut rng, longueur);

        match evaluer_texte(&texte) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: texte={texte:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: fuzz trop “sauvage”");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = ChaCha8Rng::seed_from_u64(0xBADC0DE);

    let mut seen_ok = 0usize;
    for _ in 0..300 {
        budget(t0, max);

        let texte = gen_expr(&mut rng, 4);
        match evaluer_texte(&texte) {
            Ok((reponse, _d)) => {
                // déterminisme : deux évaluations, même réponse
                let (encore, _) = evaluer_texte(&texte).unwrap();
                assert_eq!(reponse, encore);
                seen_ok += 1;
            }
            // négatifs permis ici (pas de contrainte de génération), pas les erreurs de lecture
            Err(e) => assert!(
                matches!(e, ErreurNoyau::DivisionParZero | ErreurNoyau::Depassement),
                "texte bien formé refusé: {texte:?} err={e}"
            ),
        }
    }
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_correction_lignes_abimees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);

    for i in 0..200 {
        budget(t0, max);

        let longueur = rng.random_range(1..8);
        let exercice = format!("{}. {} =", i + 1, gen_texte(&mut rng, longueur));
        let reponse = format!("{}. {}", i + 1, gen_texte(&mut rng, 1));

        match corriger(&[exercice.as_str()], &[reponse.as_str()]) {
            Ok(bilan) => assert_eq!(bilan.justes.len() + bilan.fausses.len(), 1),
            Err(e) => assert!(
                is_erreur_attendue(&e),
                "erreur non attendue: exercice={exercice:?} err={e}"
            ),
        }
    }
}

#[test]
fn fuzz_safe_parentheses_profondes_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 200 niveaux : descente récursive bornée, pas de débordement de pile
    let n = 200;
    let texte = format!("{}1{}", "(".repeat(n), " + 1)".repeat(n));
    let (reponse, _d) = evaluer_texte(&texte).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);
    assert_eq!(reponse, "201");
}

#[test]
fn fuzz_safe_correction_parentheses_demesurees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 200 000 niveaux : erreur de lecture propagée, la correction ne plante pas
    let n = 200_000;
    let exercice = format!("1. {}1{} =", "(".repeat(n), ")".repeat(n));
    let err = corriger(&[exercice.as_str()], &["1. 1"]).unwrap_err();
    budget(t0, max);
    assert!(matches!(err, ErreurNoyau::Lecture { .. }), "{err}");
}
