// src/noyau/canon.rs
//
// Forme canonique (déduplication des exercices, jamais affichée) :
// - feuilles : forme d’affichage
// - binaire  : toujours parenthésé "(G op D)"
// - + et × : opérandes triés (ordre lexicographique des formes canoniques),
//   donc a + b et b + a donnent la même clef
// - - et ÷ : ordre conservé
//
// Deux arbres sont "le même exercice" ssi leurs formes canoniques sont égales.

use super::expr::Expr;
use super::format::format_expr;

pub fn canon_expr(e: &Expr) -> String {
    match e {
        Expr::Nombre(_) | Expr::Fraction { .. } => format_expr(e),

        Expr::Binaire { gauche, op, droite } => {
            let cg = canon_expr(gauche);
            let cd = canon_expr(droite);
            if op.est_commutatif() && cg > cd {
                format!("({cd} {op} {cg})")
            } else {
                format!("({cg} {op} {cd})")
            }
        }
    }
}
