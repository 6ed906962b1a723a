//! Weekly mottos.
//!
//! One German proverb per ISO week number.  The table carries 53 entries so
//! long years get a motto of their own; lookup wraps, so any `u8` maps to
//! some entry and the UI never shows a hole.

/// One proverb per week, ordered week 1 through week 53.
const MOTTOS: [&str; 53] = [
    "Aller Anfang ist schwer.",
    "Wer rastet, der rostet.",
    "Übung macht den Meister.",
    "Gut Ding will Weile haben.",
    "Der frühe Vogel fängt den Wurm.",
    "Ohne Fleiß kein Preis.",
    "Viele Wege führen nach Rom.",
    "Was du heute kannst besorgen, das verschiebe nicht auf morgen.",
    "Kleinvieh macht auch Mist.",
    "Wer wagt, gewinnt.",
    "Steter Tropfen höhlt den Stein.",
    "Jeder ist seines Glückes Schmied.",
    "Aufgeschoben ist nicht aufgehoben.",
    "Es ist noch kein Meister vom Himmel gefallen.",
    "Wer den Pfennig nicht ehrt, ist des Talers nicht wert.",
    "Ende gut, alles gut.",
    "Morgenstund hat Gold im Mund.",
    "Man muss das Eisen schmieden, solange es heiß ist.",
    "Auch der längste Weg beginnt mit dem ersten Schritt.",
    "Wer zuletzt lacht, lacht am besten.",
    "In der Ruhe liegt die Kraft.",
    "Hochmut kommt vor dem Fall.",
    "Wie man in den Wald hineinruft, so schallt es heraus.",
    "Reden ist Silber, Schweigen ist Gold.",
    "Der Apfel fällt nicht weit vom Stamm.",
    "Erst die Arbeit, dann das Vergnügen.",
    "Geteiltes Leid ist halbes Leid.",
    "Aus Schaden wird man klug.",
    "Der Ton macht die Musik.",
    "Eine Schwalbe macht noch keinen Sommer.",
    "Wer nicht hören will, muss fühlen.",
    "Vorfreude ist die schönste Freude.",
    "Es ist nicht alles Gold, was glänzt.",
    "Probieren geht über Studieren.",
    "Lügen haben kurze Beine.",
    "Stille Wasser sind tief.",
    "Neue Besen kehren gut.",
    "Was lange währt, wird endlich gut.",
    "Jede Medaille hat zwei Seiten.",
    "Der Klügere gibt nach.",
    "Einem geschenkten Gaul schaut man nicht ins Maul.",
    "Wer andern eine Grube gräbt, fällt selbst hinein.",
    "Scherben bringen Glück.",
    "Not macht erfinderisch.",
    "Unverhofft kommt oft.",
    "Zeit ist Geld.",
    "Wo ein Wille ist, ist auch ein Weg.",
    "Kommt Zeit, kommt Rat.",
    "Vertrauen ist gut, Kontrolle ist besser.",
    "Lieber den Spatz in der Hand als die Taube auf dem Dach.",
    "Man soll den Tag nicht vor dem Abend loben.",
    "Nach dem Spiel ist vor dem Spiel.",
    "Guter Rat kommt über Nacht.",
];

/// The motto for ISO week `week`.
///
/// Week numbers outside 1–53 wrap around the table rather than fail, since
/// a motto is decoration, not data.
pub fn motto_for_week(week: u8) -> &'static str {
    MOTTOS[(week.max(1) as usize - 1) % MOTTOS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_motto_per_week() {
        assert_eq!(MOTTOS.len(), 53);
        assert_eq!(motto_for_week(1), "Aller Anfang ist schwer.");
        assert_eq!(motto_for_week(20), "Wer zuletzt lacht, lacht am besten.");
        assert_eq!(motto_for_week(53), "Guter Rat kommt über Nacht.");
    }

    #[test]
    fn out_of_range_weeks_wrap() {
        assert_eq!(motto_for_week(0), motto_for_week(1));
        assert_eq!(motto_for_week(54), motto_for_week(1));
        assert_eq!(motto_for_week(107), motto_for_week(1));
    }
}
