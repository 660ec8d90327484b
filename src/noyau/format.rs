// src/noyau/format.rs
//
// Affichage des exercices (format fichier).
// - feuilles : 3, 3/4, 2’3/4
// - binaire  : "gauche op droite", espaces simples, glyphes + - × ÷
// - parenthèses seulement si la lecture (priorités + associativité à gauche)
//   regrouperait l’arbre autrement : la relecture redonne le même arbre.

use super::expr::{Expr, Op};
use super::rationnel::SEPARATEUR_MIXTE;

/* ------------------------ Feuilles ------------------------ */

fn format_fraction(entier: u64, numerateur: u64, denominateur: u64) -> String {
    if entier > 0 {
        // 3’0/4 s’affiche 3
        if numerateur == 0 {
            return entier.to_string();
        }
        return format!("{entier}{SEPARATEUR_MIXTE}{numerateur}/{denominateur}");
    }
    format!("{numerateur}/{denominateur}")
}

/* ------------------------ Parenthèses minimales ------------------------ */

/// Un opérande binaire doit-il être parenthésé sous `parent` ?
/// - priorité plus faible : (1 + 2) × 3
/// - à droite, même priorité : 5 - (3 - 1), 8 ÷ (4 × 2), 2 × (3 ÷ 4), 1 + (2 + 3)
///
/// À droite, on parenthèse même sous + et × : la relecture retrouve alors
/// l’arbre exact, donc le même ordre de calcul (et les mêmes dépassements i64).
fn besoin_parentheses(enfant: Op, parent: Op, a_droite: bool) -> bool {
    if enfant.precedence() < parent.precedence() {
        return true;
    }
    a_droite && enfant.precedence() == parent.precedence()
}

fn format_operande(e: &Expr, parent: Op, a_droite: bool) -> String {
    let s = format_expr(e);
    match e {
        Expr::Binaire { op, .. } if besoin_parentheses(*op, parent, a_droite) => format!("({s})"),
        _ => s,
    }
}

/* ------------------------ Affichage ------------------------ */

pub fn format_expr(e: &Expr) -> String {
    match e {
        Expr::Nombre(n) => n.to_string(),
        Expr::Fraction {
            entier,
            numerateur,
            denominateur,
        } => format_fraction(*entier, *numerateur, *denominateur),
        Expr::Binaire { gauche, op, droite } => {
            let sg = format_operande(gauche, *op, false);
            let sd = format_operande(droite, *op, true);
            format!("{sg} {op} {sd}")
        }
    }
}
