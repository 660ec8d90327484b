// src/noyau/expr.rs
//
// AST exact des exercices.
// - Nombre   : entier naturel
// - Fraction : entier + numérateur/dénominateur (fraction propre ou nombre mixte)
// - Binaire  : gauche op droite
//
// Arbre pur : chaque noeud possède ses enfants (Box), aucune mutation après construction.

use std::fmt;

use super::canon::canon_expr;
use super::erreur::{ErreurNoyau, Resultat};
use super::format::format_expr;
use super::rationnel::Rationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub const TOUS: [Op; 4] = [Op::Plus, Op::Moins, Op::Fois, Op::Divise];

    /// Glyphe du format fichier (× et ÷ non ASCII).
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '×',
            Op::Divise => '÷',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Op> {
        Op::TOUS.into_iter().find(|op| op.symbole() == c)
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }

    /// a + b == b + a (sert à la forme canonique).
    pub fn est_commutatif(self) -> bool {
        matches!(self, Op::Plus | Op::Fois)
    }

    pub fn appliquer(self, a: &Rationnel, b: &Rationnel) -> Resultat<Rationnel> {
        match self {
            Op::Plus => a.ajouter(b),
            Op::Moins => a.soustraire(b),
            Op::Fois => a.multiplier(b),
            Op::Divise => a.diviser(b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Nombre(u64),
    Fraction {
        entier: u64,
        numerateur: u64,
        denominateur: u64,
    },
    Binaire {
        gauche: Box<Expr>,
        op: Op,
        droite: Box<Expr>,
    },
}

fn vers_i64(x: u64) -> Resultat<i64> {
    i64::try_from(x).map_err(|_| ErreurNoyau::Depassement)
}

impl Expr {
    pub fn binaire(gauche: Expr, op: Op, droite: Expr) -> Expr {
        Expr::Binaire {
            gauche: Box::new(gauche),
            op,
            droite: Box::new(droite),
        }
    }

    pub fn fraction(entier: u64, numerateur: u64, denominateur: u64) -> Expr {
        Expr::Fraction {
            entier,
            numerateur,
            denominateur,
        }
    }

    /// Valeur exacte de l’arbre.
    pub fn evaluate(&self) -> Resultat<Rationnel> {
        match self {
            Expr::Nombre(n) => Ok(Rationnel::entier(vers_i64(*n)?)),

            Expr::Fraction {
                entier,
                numerateur,
                denominateur,
            } => {
                let d = vers_i64(*denominateur)?;
                if d == 0 {
                    return Err(ErreurNoyau::DivisionParZero);
                }
                // entier*d + n, en arithmétique vérifiée
                let (e, n) = (vers_i64(*entier)?, vers_i64(*numerateur)?);
                let total = e
                    .checked_mul(d)
                    .and_then(|x| x.checked_add(n))
                    .ok_or(ErreurNoyau::Depassement)?;
                Rationnel::new(total, d)
            }

            Expr::Binaire { gauche, op, droite } => {
                let a = gauche.evaluate()?;
                let b = droite.evaluate()?;
                op.appliquer(&a, &b)
            }
        }
    }

    /// Forme d’affichage (fichier d’exercices).
    pub fn format(&self) -> String {
        format_expr(self)
    }

    /// Forme canonique : sert uniquement à la déduplication.
    pub fn canonical_form(&self) -> String {
        canon_expr(self)
    }

    /// Nombre d’opérateurs binaires de l’arbre.
    #[cfg(test)]
    pub fn nb_operateurs(&self) -> usize {
        match self {
            Expr::Nombre(_) | Expr::Fraction { .. } => 0,
            Expr::Binaire { gauche, droite, .. } => 1 + gauche.nb_operateurs() + droite.nb_operateurs(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
