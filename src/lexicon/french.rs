//! French vocabulary. Every pattern is written in folded form (no accents).

use super::aliases::MatchKind::{Contains, Prefix};
use super::{LexiconSource, LocationLabels, LocationSource};

pub(super) const SOURCE: LexiconSource = LexiconSource {
    location_triggers: &[r"\blocalisation\b", r"\bemplacement\b"],
    room_triggers: &[
        r"\bil\s+y\s+a\s+(?:les\s+)?pieces\s+suivantes\b",
        r"\bpieces\s+suivantes\b",
        r"\bliste\s+des\s+pieces\b",
        r"\bpieces\s*:",
    ],
    noise: &[
        r"\bnous\s+avons\b",
        r"\bil\s+y\s+a\b",
        r"\bdans\s+(?:ce|le)\s+logement\b",
        r"\bdans\s+(?:ce|le)\s+batiment\b",
        r"\bici\b",
        r"\beuh+\b",
        r"\bheu+\b",
        r"\balors\b",
        r"\bdu\s+coup\b",
        r"\bvoila\b",
        r"\bbon\b",
        r"\bensuite\b",
        r"\bon\s+a\b",
        r"\bavec\b",
        r"\bles\s+pieces\s+suivantes\b",
    ],
    rewrites: &[
        (r"\bw\s*\.\s*-?\s*c\b\.?", "wc"),
        (r"\bs\s*\.\s*d\s*\.\s*b\b\.?", "sdb"),
    ],
    conjunctions: &["et", "puis"],
    determiners: &[
        "de la", "le", "la", "les", "l'", "des", "du", "quelques", "plusieurs", "encore",
    ],
    singular_determiners: &["un", "une"],
    qualifiers: &[
        r"separee?s?",
        r"independante?s?",
        r"distincte?s?",
    ],
    glue: &["a", "au", "aux", "dans", "de", "du", "des", "d'", "d"],
    number_words: &[
        ("un", 1),
        ("une", 1),
        ("deux", 2),
        ("trois", 3),
        ("quatre", 4),
        ("cinq", 5),
        ("six", 6),
        ("sept", 7),
        ("huit", 8),
        ("neuf", 9),
        ("dix", 10),
    ],
    location: LocationSource {
        building: r"\bbatiment\s+([a-z0-9]+)\b",
        unit: r"\b(?:logement|appartement|appt|apt)\s+(?:numero\s+)?([0-9]+)\b",
        ground: &[r"\brez[\s-]*de[\s-]*chaussee\b", r"\brdc\b"],
        basement: &[r"\bsous[\s-]*sol\b"],
        numbered_floor: &[
            r"\b([0-9]+)\s*(?:er|ere|e|eme|ieme)\s+etage\b",
            r"\betage\s+(?:numero\s+)?([0-9]+)\b",
        ],
        ordinal_floor: r"\b(premier|premiere|deuxieme|second|seconde|troisieme|quatrieme|cinquieme|sixieme|septieme|huitieme|neuvieme|dixieme)\s+etage\b",
        ordinal_words: &[
            ("premier", 1),
            ("premiere", 1),
            ("deuxieme", 2),
            ("second", 2),
            ("seconde", 2),
            ("troisieme", 3),
            ("quatrieme", 4),
            ("cinquieme", 5),
            ("sixieme", 6),
            ("septieme", 7),
            ("huitieme", 8),
            ("neuvieme", 9),
            ("dixieme", 10),
        ],
        labels: LocationLabels {
            building: "Bâtiment",
            unit: "Logement",
            ground: "RDC",
            basement: "Sous-sol",
        },
        floor_label: floor_label,
    },
    aliases: &[
        ("cuisine", "Cuisine", Contains),
        ("kitchenette", "Kitchenette", Contains),
        ("sejour", "Séjour", Contains),
        ("salon", "Séjour", Contains),
        ("piece a vivre", "Séjour", Contains),
        ("salle a manger", "Salle à manger", Contains),
        ("mezzanine", "Mezzanine", Contains),
        ("chambre", "Chambre", Contains),
        ("chambre parentale", "Suite parentale", Contains),
        ("suite parentale", "Suite parentale", Contains),
        ("bureau", "Bureau", Contains),
        ("entree", "Entrée", Contains),
        ("hall", "Entrée", Prefix),
        ("couloir", "Couloir", Contains),
        ("degagement", "Dégagement", Contains),
        ("palier", "Palier", Contains),
        ("cellier", "Cellier", Contains),
        ("buanderie", "Buanderie", Contains),
        ("dressing", "Dressing", Contains),
        ("placard", "Placard", Contains),
        ("wc", "WC", Prefix),
        ("toilette", "WC", Contains),
        ("salle de bain", "Salle de bain", Contains),
        ("sdb", "Salle de bain", Prefix),
        ("salle d'eau", "Salle d'eau", Contains),
        ("salles de bain", "Salle de bain", Contains),
        ("salles d'eau", "Salle d'eau", Contains),
        ("garage", "Garage", Contains),
        ("cave", "Cave", Prefix),
        ("grenier", "Grenier", Contains),
        ("comble", "Combles", Contains),
        ("local technique", "Local technique", Contains),
        ("chaufferie", "Local technique", Contains),
        ("terrasse", "Terrasse", Contains),
        ("balcon", "Balcon", Contains),
        ("veranda", "Véranda", Contains),
    ],
    export_header: ("Localisation", "Pièce"),
};

/// "1er", then "2e", "3e", ...
fn floor_label(n: u32) -> String {
    if n == 1 {
        "1er".to_string()
    } else {
        format!("{}e", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_label() {
        assert_eq!(floor_label(1), "1er");
        assert_eq!(floor_label(2), "2e");
        assert_eq!(floor_label(12), "12e");
    }
}
