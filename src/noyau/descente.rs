// src/noyau/descente.rs
//
// Descente récursive : jetons -> Expr
//
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('×' | '÷') facteur)*
//   facteur    := '(' expression ')' | NOMBRE
//
// Priorités usuelles, associativité à gauche.
// L’état (jetons + position) vit dans un Curseur explicite, passé de règle en règle.
//
// Garde-fou : profondeur de parenthèses bornée (MAX_PROFONDEUR), erreur de lecture
// au-delà plutôt qu’un débordement de pile.

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::{Expr, Op};
use super::jetons::{tokenize, Tok};

/// Parenthèses imbriquées au plus (un exercice généré en a moins de 4).
pub const MAX_PROFONDEUR: usize = 256;

pub struct Curseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
}

impl<'a> Curseur<'a> {
    pub fn new(jetons: &'a [Tok]) -> Self {
        Self {
            jetons,
            pos: 0,
            profondeur: 0,
        }
    }

    fn courant(&self) -> Option<&'a Tok> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&'a Tok> {
        let t = self.jetons.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    /// Consomme l’opérateur courant s’il fait partie de `ops`.
    fn prendre_op(&mut self, ops: &[Op]) -> Option<Op> {
        match self.courant() {
            Some(Tok::Op(op)) if ops.contains(op) => {
                self.pos += 1;
                Some(*op)
            }
            _ => None,
        }
    }

    fn expression(&mut self) -> Resultat<Expr> {
        let mut e = self.terme()?;
        while let Some(op) = self.prendre_op(&[Op::Plus, Op::Moins]) {
            let d = self.terme()?;
            e = Expr::binaire(e, op, d);
        }
        Ok(e)
    }

    fn terme(&mut self) -> Resultat<Expr> {
        let mut e = self.facteur()?;
        while let Some(op) = self.prendre_op(&[Op::Fois, Op::Divise]) {
            let d = self.facteur()?;
            e = Expr::binaire(e, op, d);
        }
        Ok(e)
    }

    fn facteur(&mut self) -> Resultat<Expr> {
        let pos = self.pos;
        match self.avancer() {
            None => Err(ErreurNoyau::lecture(pos, "opérande attendu, fin de l’expression")),

            Some(Tok::LPar) => {
                if self.profondeur >= MAX_PROFONDEUR {
                    return Err(ErreurNoyau::lecture(
                        pos,
                        format!("plus de {MAX_PROFONDEUR} parenthèses imbriquées"),
                    ));
                }
                self.profondeur += 1;
                let e = self.expression()?;
                self.profondeur -= 1;
                match self.avancer() {
                    Some(Tok::RPar) => Ok(e),
                    None => Err(ErreurNoyau::lecture(pos, "parenthèse non fermée")),
                    Some(t) => Err(ErreurNoyau::lecture(
                        self.pos - 1,
                        format!("')' attendu, trouvé {t:?}"),
                    )),
                }
            }

            Some(Tok::Entier(n)) => Ok(Expr::Nombre(*n)),
            Some(Tok::Fraction {
                numerateur,
                denominateur,
            }) => Ok(Expr::fraction(0, *numerateur, *denominateur)),
            Some(Tok::Mixte {
                entier,
                numerateur,
                denominateur,
            }) => Ok(Expr::fraction(*entier, *numerateur, *denominateur)),

            Some(t) => Err(ErreurNoyau::lecture(
                pos,
                format!("opérande attendu, trouvé {t:?}"),
            )),
        }
    }

    /// Expression complète : aucun jeton ne doit rester.
    pub fn expression_complete(&mut self) -> Resultat<Expr> {
        let e = self.expression()?;
        if let Some(t) = self.courant() {
            return Err(ErreurNoyau::lecture(
                self.pos,
                format!("jeton en trop: {t:?}"),
            ));
        }
        Ok(e)
    }
}

/// Jetons -> Expr.
pub fn parse_tokens(jetons: &[Tok]) -> Resultat<Expr> {
    Curseur::new(jetons).expression_complete()
}

/// Texte nu (sans "N. " ni " =") -> Expr.
pub fn parse(s: &str) -> Resultat<Expr> {
    let jetons = tokenize(s)?;
    parse_tokens(&jetons)
}
