// src/noyau/jetons.rs
//
// Tokenisation du format d’exercice.
// Plus long motif d’abord :
//   2’3/4 (nombre mixte) > 3/4 (fraction) > 12 (entier) > symboles + - × ÷ ( )
//
// Le '/' n’est jamais un opérateur ici : il appartient toujours à une fraction.

use super::erreur::{ErreurNoyau, Resultat};
use super::expr::Op;
use super::rationnel::SEPARATEUR_MIXTE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Entier(u64),
    Fraction {
        numerateur: u64,
        denominateur: u64,
    },
    Mixte {
        entier: u64,
        numerateur: u64,
        denominateur: u64,
    },
    Op(Op),
    LPar,
    RPar,
}

/// Lit une suite de chiffres à partir de `i`. None si aucun chiffre.
fn lire_entier(chars: &[char], i: &mut usize) -> Resultat<Option<u64>> {
    let debut = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i == debut {
        return Ok(None);
    }
    let s: String = chars[debut..*i].iter().collect();
    s.parse::<u64>()
        .map(Some)
        .map_err(|_| ErreurNoyau::lecture(debut, format!("nombre trop grand: {s}")))
}

/// Exige "chiffres '/' chiffres" à partir de `i` (suite d’un nombre mixte).
fn lire_fraction(chars: &[char], i: &mut usize) -> Resultat<(u64, u64)> {
    let pos = *i;
    let n = lire_entier(chars, i)?
        .ok_or_else(|| ErreurNoyau::lecture(pos, "numérateur attendu"))?;
    if *i >= chars.len() || chars[*i] != '/' {
        return Err(ErreurNoyau::lecture(*i, "'/' attendu"));
    }
    *i += 1;
    let pos_d = *i;
    let d = lire_entier(chars, i)?
        .ok_or_else(|| ErreurNoyau::lecture(pos_d, "dénominateur attendu"))?;
    Ok((n, d))
}

/// Tokenize une ligne d’exercice (sans "N. " ni " =").
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            _ => {}
        }

        if let Some(op) = Op::depuis_symbole(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let n = lire_entier(&chars, &mut i)?.unwrap_or_default();

            // 2’3/4
            if i < chars.len() && chars[i] == SEPARATEUR_MIXTE {
                i += 1;
                let (num, den) = lire_fraction(&chars, &mut i)?;
                out.push(Tok::Mixte {
                    entier: n,
                    numerateur: num,
                    denominateur: den,
                });
                continue;
            }

            // 3/4
            if i < chars.len() && chars[i] == '/' {
                i += 1;
                let pos_d = i;
                let den = lire_entier(&chars, &mut i)?.ok_or_else(|| {
                    ErreurNoyau::lecture(pos_d, format!("fraction incomplète après {n}/"))
                })?;
                out.push(Tok::Fraction {
                    numerateur: n,
                    denominateur: den,
                });
                continue;
            }

            out.push(Tok::Entier(n));
            continue;
        }

        return Err(ErreurNoyau::lecture(i, format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Entier(n) => n.to_string(),
            Tok::Fraction {
                numerateur,
                denominateur,
            } => format!("{numerateur}/{denominateur}"),
            Tok::Mixte {
                entier,
                numerateur,
                denominateur,
            } => format!("{entier}{SEPARATEUR_MIXTE}{numerateur}/{denominateur}"),
            Tok::Op(op) => op.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
