// src/noyau/format.rs
//
// Affichage d’une valeur calculée (f64 -> texte de l’écran).
//
// Table des seuils :
//
//   |v| non fini                    -> ErreurCalcul (MARQUEUR_ERREUR côté moteur)
//   |v| == 0                        -> "0"
//   |v| >= 1e12  ou  |v| < 1e-9     -> scientifique (6 décimales, zéros retirés)
//   sinon                           -> 12 chiffres significatifs, forme la plus courte :
//                                        |arrondi| >= 1e-6 : positionnelle ("0.000001")
//                                        |arrondi| <  1e-6 : exposant court ("1.5e-7")
//                                      si > 12 caractères      -> scientifique
//
// Arrondi : sur l’expansion décimale exacte, moitié -> en s’éloignant de zéro
// (100000000000.5 -> "100000000001", 1000000500000 -> "1.000001e12").

use super::erreur::ErreurCalcul;

/// Longueur max de l’écran (saisie ET résultats en forme fixe).
pub const LONGUEUR_MAX_AFFICHAGE: usize = 12;

pub const SEUIL_SCIENTIFIQUE_HAUT: f64 = 1e12;
pub const SEUIL_SCIENTIFIQUE_BAS: f64 = 1e-9;
pub const SEUIL_EXPOSANT_COURT: f64 = 1e-6;
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;
pub const DECIMALES_SCIENTIFIQUES: usize = 6;

/// Un f64 a au plus 767 chiffres significatifs :
/// au-delà, `{:e}` ne fait que compléter par des zéros.
const CHIFFRES_EXACTS: usize = 770;

/// Formate une valeur pour l’écran, ou refuse si elle n’est pas finie.
pub fn formater_nombre(v: f64) -> Result<String, ErreurCalcul> {
    if !v.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini);
    }

    let abs = v.abs();
    if abs == 0.0 {
        // couvre aussi -0
        return Ok("0".to_string());
    }

    if abs >= SEUIL_SCIENTIFIQUE_HAUT || abs < SEUIL_SCIENTIFIQUE_BAS {
        return Ok(format_scientifique(v));
    }

    let fixe = format_fixe(v);
    if fixe.chars().count() > LONGUEUR_MAX_AFFICHAGE {
        Ok(format_scientifique(v))
    } else {
        Ok(fixe)
    }
}

/// Chiffres significatifs de |v| arrondis à `n`, et exposant décimal du premier.
fn arrondir_significatifs(v: f64, n: usize) -> (String, i32) {
    let brut = format!("{:.*e}", CHIFFRES_EXACTS, v.abs());
    let (mantisse, exposant) = brut.split_once('e').unwrap_or((brut.as_str(), "0"));
    let mut exposant: i32 = exposant.parse().unwrap_or(0);

    let tous: Vec<u8> = mantisse.bytes().filter(u8::is_ascii_digit).collect();
    let mut garde: Vec<u8> = tous.iter().take(n).copied().collect();

    if tous.get(n).is_some_and(|&c| c >= b'5') {
        // retenue
        let mut i = garde.len();
        loop {
            if i == 0 {
                // 99…9 -> 100…0
                garde.insert(0, b'1');
                garde.pop();
                exposant += 1;
                break;
            }
            i -= 1;
            if garde[i] == b'9' {
                garde[i] = b'0';
            } else {
                garde[i] += 1;
                break;
            }
        }
    }

    (garde.into_iter().map(char::from).collect(), exposant)
}

/// 12 chiffres significatifs, puis rendu le plus court.
fn format_fixe(v: f64) -> String {
    let (chiffres, exposant) = arrondir_significatifs(v, CHIFFRES_SIGNIFICATIFS);
    let (tete, queue) = chiffres.split_at(1);
    let arrondi = format!("{tete}.{queue}e{exposant}")
        .parse::<f64>()
        .unwrap_or(v.abs())
        .copysign(v);

    if arrondi.abs() < SEUIL_EXPOSANT_COURT {
        format!("{arrondi:e}")
    } else {
        format!("{arrondi}")
    }
}

/// 7 chiffres significatifs, zéros finaux retirés : "2.5e15", "1e-10", "-1.234568e20".
fn format_scientifique(v: f64) -> String {
    let (chiffres, exposant) = arrondir_significatifs(v, DECIMALES_SCIENTIFIQUES + 1);
    let (tete, queue) = chiffres.split_at(1);
    let queue = queue.trim_end_matches('0');
    let signe = if v.is_sign_negative() { "-" } else { "" };

    if queue.is_empty() {
        format!("{signe}{tete}e{exposant}")
    } else {
        format!("{signe}{tete}.{queue}e{exposant}")
    }
}
