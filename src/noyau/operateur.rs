// src/noyau/operateur.rs

use super::erreur::ErreurCalcul;

/// Les quatre opérations binaires du pavé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Glyphe de la touche correspondante.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }

    /// `gauche op droite` en double précision, sans arrondi.
    ///
    /// Seule la division par zéro (±0) échoue ; un dépassement (±∞) est
    /// renvoyé tel quel, c’est le formatage qui le refuse.
    pub fn appliquer(self, gauche: f64, droite: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Operateur::Addition => Ok(gauche + droite),
            Operateur::Soustraction => Ok(gauche - droite),
            Operateur::Multiplication => Ok(gauche * droite),
            Operateur::Division => {
                if droite == 0.0 {
                    Err(ErreurCalcul::DivisionParZero)
                } else {
                    Ok(gauche / droite)
                }
            }
        }
    }
}
