//! Historical facts, one per week.
//!
//! Each entry names an event that happened during the days that ISO week
//! usually covers, formatted as `"T. Monat JJJJ: Ereignis."`.  Like the
//! mottos, lookup wraps so every week number resolves.

/// One event per week, ordered week 1 through week 53.
const FACTS: [&str; 53] = [
    "1. Januar 1999: Der Euro wird als Buchgeld in elf EU-Staaten eingeführt.",
    "9. Januar 2007: Apple stellt das erste iPhone vor.",
    "20. Januar 1265: In Westminster tritt das erste englische Parlament zusammen.",
    "27. Januar 1880: Thomas Edison erhält das Patent auf die Glühlampe.",
    "30. Januar 1969: Die Beatles geben ihr letztes Konzert auf einem Londoner Hausdach.",
    "4. Februar 2004: Facebook geht online.",
    "14. Februar 1946: Der Röhrencomputer ENIAC wird vorgestellt.",
    "19. Februar 1878: Thomas Edison patentiert den Phonographen.",
    "1. März 1872: Der Yellowstone-Nationalpark wird als erster Nationalpark der Welt gegründet.",
    "6. März 1869: Dmitri Mendelejew stellt das Periodensystem der Elemente vor.",
    "14. März 1879: Albert Einstein wird in Ulm geboren.",
    "22. März 1895: Die Brüder Lumière führen erstmals einen Film vor.",
    "31. März 1889: Der Eiffelturm wird eröffnet.",
    "3. April 1973: Das erste Handtelefonat wird mit einem Motorola-Prototyp geführt.",
    "12. April 1961: Juri Gagarin fliegt als erster Mensch ins All.",
    "18. April 1906: Ein schweres Erdbeben zerstört große Teile San Franciscos.",
    "25. April 1953: Die Struktur der DNA wird in der Zeitschrift Nature veröffentlicht.",
    "30. April 1993: Das CERN gibt das World Wide Web zur freien Nutzung frei.",
    "8. Mai 1886: In Atlanta wird erstmals Coca-Cola verkauft.",
    "17. Mai 1792: In New York wird die Börse an der Wall Street gegründet.",
    "21. Mai 1927: Charles Lindbergh vollendet den ersten Alleinflug über den Atlantik.",
    "29. Mai 1953: Edmund Hillary und Tenzing Norgay erreichen als Erste den Gipfel des Mount Everest.",
    "6. Juni 1944: Alliierte Truppen landen in der Normandie.",
    "15. Juni 1215: König Johann besiegelt die Magna Carta.",
    "21. Juni 1948: Die erste Langspielplatte wird vorgestellt.",
    "26. Juni 1945: Die Charta der Vereinten Nationen wird unterzeichnet.",
    "1. Juli 2002: Der Internationale Strafgerichtshof nimmt seine Arbeit auf.",
    "14. Juli 1789: Mit dem Sturm auf die Bastille beginnt die Französische Revolution.",
    "20. Juli 1969: Apollo 11 landet auf dem Mond.",
    "25. Juli 1978: Louise Brown, das erste Retortenbaby, kommt zur Welt.",
    "1. August 1291: Der Schweizer Bund wird der Überlieferung nach gegründet.",
    "6. August 1991: Die erste Website der Welt geht am CERN online.",
    "13. August 1961: In Berlin beginnt der Bau der Mauer.",
    "19. August 1839: Das Daguerreotypie-Verfahren wird öffentlich vorgestellt.",
    "28. August 1963: Martin Luther King hält seine Rede \"I Have a Dream\".",
    "4. September 1998: Google wird gegründet.",
    "9. September 1947: Im Mark-II-Rechner wird ein echter Käfer als erster \"Bug\" dokumentiert.",
    "19. September 1991: Im Ötztaler Eis wird die Gletschermumie Ötzi entdeckt.",
    "28. September 1928: Alexander Fleming entdeckt das Penicillin.",
    "4. Oktober 1957: Sputnik 1, der erste Satellit, erreicht die Erdumlaufbahn.",
    "9. Oktober 1874: Der Weltpostverein wird in Bern gegründet.",
    "14. Oktober 1947: Chuck Yeager durchbricht als erster Mensch die Schallmauer.",
    "24. Oktober 1929: Der \"Schwarze Donnerstag\" löst die Weltwirtschaftskrise aus.",
    "28. Oktober 1886: In New York wird die Freiheitsstatue eingeweiht.",
    "9. November 1989: Die Berliner Mauer fällt.",
    "11. November 1918: Der Waffenstillstand beendet den Ersten Weltkrieg.",
    "20. November 1985: Microsoft veröffentlicht Windows 1.0.",
    "24. November 1859: Charles Darwin veröffentlicht \"Über die Entstehung der Arten\".",
    "1. Dezember 1990: Beim Bau des Eurotunnels treffen sich die Teams aus beiden Richtungen.",
    "10. Dezember 1901: Die ersten Nobelpreise werden verliehen.",
    "17. Dezember 1903: Den Brüdern Wright gelingt der erste Motorflug.",
    "24. Dezember 1968: Apollo 8 funkt Weihnachtsgrüße aus der Mondumlaufbahn.",
    "31. Dezember 1999: Die Welt erwartet den Jahrtausendwechsel und den \"Y2K-Bug\".",
];

/// The historical fact for ISO week `week`, wrapping out-of-range numbers.
pub fn fact_for_week(week: u8) -> &'static str {
    FACTS[(week.max(1) as usize - 1) % FACTS.len()]
}
