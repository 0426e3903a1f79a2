//! The compiled-in recipe catalog.
//!
//! Everything a plan can contain lives here as `static` data: main meals,
//! snack suggestions, beverage tips and the general hints printed at the end
//! of every plan. Nothing is loaded at runtime and nothing is mutated, so the
//! selector and renderers only ever borrow from it.
//!
//! Optional capabilities are explicit fields rather than ad hoc flags:
//!
//! - [`Meal::freezer`]: `Some` marks a batch-cooking meal, optionally with
//!   its own storage note (otherwise [`DEFAULT_FREEZER_NOTE`] is used).
//! - [`Meal::thermomix`]: appliance-specific instructions, if any.
//! - [`Meal::is_salad`]: counts towards the salad guarantee.
//!
//! Tests build their own [`Catalog`] from literal slices to exercise the
//! selector against edge cases the real data does not have.

use std::fmt;

/// Note used for freezer-friendly meals that don't carry their own.
pub const DEFAULT_FREEZER_NOTE: &str =
    "Nach dem Abkuehlen portionsweise einfrieren und bei Bedarf aufwaermen.";

/// A main meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub name: &'static str,
    /// Free text such as `"25 Minuten"`; the leading number is the duration.
    pub prep_time: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static str,
    /// Nutritional focus paragraph.
    pub benefit: &'static str,
    pub is_salad: bool,
    pub freezer: Option<FreezerNote>,
    pub thermomix: Option<&'static str>,
}

/// Marks a meal as suitable for batch cooking and freezing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezerNote {
    pub note: Option<&'static str>,
}

impl Meal {
    /// Preparation time in minutes, parsed from the first token of `prep_time`.
    ///
    /// - `"25 Minuten"` → `Some(25)`
    /// - `"ca. 20 Minuten"` → `None`
    /// - `""` → `None`
    pub fn prep_minutes(&self) -> Option<u32> {
        self.prep_time.split_whitespace().next()?.parse().ok()
    }

    /// Whether the meal is ready within `max_minutes`. Unparsable times never are.
    pub fn is_quick(&self, max_minutes: u32) -> bool {
        self.prep_minutes().is_some_and(|m| m <= max_minutes)
    }

    pub fn is_freezer_friendly(&self) -> bool {
        self.freezer.is_some()
    }

    /// The batch-cooking tip to print, if the meal is freezer-friendly.
    pub fn batch_tip(&self) -> Option<&'static str> {
        self.freezer
            .map(|f| f.note.unwrap_or(DEFAULT_FREEZER_NOTE))
    }
}

/// Part of the day a snack is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Vormittag,
    Nachmittag,
    Abend,
}

impl DayPart {
    pub fn label(self) -> &'static str {
        match self {
            DayPart::Vormittag => "Vormittag",
            DayPart::Nachmittag => "Nachmittag",
            DayPart::Abend => "Abend",
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A snack suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snack {
    pub timing: DayPart,
    pub idea: &'static str,
    pub reason: &'static str,
}

/// Borrowed view over everything a plan is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub meals: &'a [Meal],
    pub snacks: &'a [Snack],
    pub beverage_tips: &'a [&'static str],
    pub hints: &'a [&'static str],
}

/// The catalog compiled into the binary.
pub fn builtin() -> Catalog<'static> {
    Catalog {
        meals: MEALS,
        snacks: SNACKS,
        beverage_tips: BEVERAGE_TIPS,
        hints: GENERAL_HINTS,
    }
}

// ============================================================================
// Data
// ============================================================================

pub static MEALS: &[Meal] = &[
    Meal {
        name: "Ofenlachs mit Zitronen-Quinoa und geduenstetem Brokkoli",
        prep_time: "25 Minuten",
        ingredients: &[
            "2 Lachsfilets (je ca. 120 g)",
            "120 g Quinoa",
            "1 Bio-Zitrone",
            "250 g Brokkoli",
            "1 EL Olivenoel",
            "Frischer Dill, Salz, Pfeffer",
        ],
        instructions: "Backofen auf 180 C vorheizen. Lachs mit Zitrone, Dill, Salz und Pfeffer in \
            eine ofenfeste Form legen und 12 bis 14 Minuten garen. Quinoa nach Packungs\
            anweisung mit etwas Zitronenabrieb und -saft kochen. Brokkoli 5 Minuten \
            daempfen und alles zusammen servieren.",
        benefit: "Lachs liefert Omega-3-Fettsaeuren, die die Leberfettwerte senken und \
            Entzuendungen reduzieren. Quinoa stabilisiert den Blutzucker und Brokkoli \
            enthaelt Leber-schuetzende Bitterstoffe.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Quinoa im Gareinsatz mit 350 ml Wasser 15 Min/100C/Stufe 1 garen, Brokkoli \
            im Varoma 5 Min/Varoma/Stufe 1 daempfen und Lachs im Varoma-Einlegeboden \
            12 Min/Varoma/Stufe 1 mit Zitronenscheiben garen; alles im Mixtopf \
            5 Sek/Stufe 2 mit Dill vermengen.",
        ),
    },
    Meal {
        name: "Huehnchen-Gemuese-Pfanne mit Kurkuma und Naturreis",
        prep_time: "30 Minuten",
        ingredients: &[
            "200 g Haehnchenbrust",
            "150 g Naturreis",
            "1 rote Paprika",
            "1 Zucchini",
            "1 Zwiebel",
            "1 TL Kurkuma, 1 TL Paprikapulver",
            "1 EL Raps- oder Olivenoel",
            "Petersilie, Salz, Pfeffer",
        ],
        instructions: "Reis nach Packungsanweisung garen. Huehnchen in Streifen schneiden und in \
            Oel mit Kurkuma und Paprika 5 Minuten anbraten. Zwiebel, Paprika und \
            Zucchini zugeben und weitere 7 Minuten garen. Mit Reis servieren und mit \
            Petersilie bestreuen.",
        benefit: "Mageres Eiweiss und Kurkuma unterstuetzen die Leberentgiftung, das Gemuese \
            liefert Antioxidantien und Ballaststoffe fuer stabile Blutwerte.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Zwiebel, Paprika und Zucchini 5 Sek/Stufe 5 zerkleinern, Oel zufuegen und \
            5 Min/120C/Linkslauf/Stufe 1 anduensten; Huehnchenwuerfel im Varoma \
            15 Min/Varoma/Stufe 1 garen und anschliessend mit dem Gemuese \
            vermengen; Naturreis im Gareinsatz 30 Min/100C/Stufe 1 kochen.",
        ),
    },
    Meal {
        name: "Quinoa-Bowl mit Spinat, gebackenem Gemuese und Tahin-Dressing",
        prep_time: "35 Minuten",
        ingredients: &[
            "200 g gekochte Quinoa",
            "1 Sueskartoffel",
            "1 rote Paprika",
            "2 Haende Babyspinat",
            "2 EL Tahin",
            "Saft von 0,5 Zitrone",
            "1 TL Ahornsirup",
            "1 EL mildes Olivenoel",
            "Salz, Pfeffer, Kreuzkuemmel",
        ],
        instructions: "Sueskartoffel und Paprika wuerfeln, mit 1 TL Oel und Kreuzkuemmel 20 \
            Minuten bei 200 C backen. Quinoa vorbereiten. Tahin mit Zitronensaft, \
            Ahornsirup, Wasser und Salz zu einem Dressing verruehren. Bowl mit \
            Spinat, Quinoa, Gemuese und Dressing anrichten.",
        benefit: "Quinoa liefert pflanzliches Eiweiss und Magnesium fuer stabile Blutwerte, \
            Sueskartoffel und Paprika bringen Carotinoide und Spinat liefert Folat.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Quinoa im Gareinsatz mit 400 ml Wasser 20 Min/100C/Stufe 1 garen; \
            Sueskartoffel und Paprika im Varoma 20 Min/Varoma/Stufe 1 daempfen; \
            Dressing aus Tahin, Zitronensaft, Ahornsirup und Wasser 10 Sek/Stufe 4 \
            ruehren und alles im Mixtopf 5 Sek/Linkslauf/Stufe 2 mischen.",
        ),
    },
    Meal {
        name: "Miso-Kabeljau mit Sesam-Spitzkohl und Vollkornnudeln",
        prep_time: "28 Minuten",
        ingredients: &[
            "2 Kabeljaufilets",
            "2 EL helle Misopaste",
            "1 TL Sesamoel",
            "200 g Vollkornnudeln",
            "1 kleiner Spitzkohl",
            "1 Karotte",
            "Frischer Ingwer, Sesamsamen, Limette",
        ],
        instructions: "Kabeljau mit Misopaste, Sesamoel und Ingwer einstreichen und 12 Minuten \
            bei 180 C backen. Nudeln kochen. Spitzkohl und Karotte fein schneiden, \
            in einer Pfanne kurz sautieren und mit Limettensaft sowie Sesam abschmecken. \
            Alles zusammen anrichten.",
        benefit: "Magerer Fisch und Miso liefern leicht verdauliches Eiweiss und Probiotika \
            fuer die Leber. Spitzkohl enthaelt Schwefelverbindungen, die die \
            Entgiftung unterstuetzen.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Spitzkohl und Karotte 4 Sek/Stufe 4 zerkleinern, mit Sesamoel 5 Min/120C/\
            Linkslauf/Stufe 1 sautieren; Nudeln im Mixtopf mit 1200 ml Wasser \
            10 Min/100C/Linkslauf/Stufe 1 kochen; Kabeljau im Varoma-Einlegeboden \
            mit Misopaste 12 Min/Varoma/Stufe 1 garen und alles zusammenrichten.",
        ),
    },
    Meal {
        name: "Tofu-Gado-Gado mit gruenen Bohnen und Erdnuss-Limetten-Sauce",
        prep_time: "30 Minuten",
        ingredients: &[
            "200 g fester Tofu",
            "200 g gruene Bohnen",
            "1 kleine Salatgurke",
            "1 gelbe Paprika",
            "2 hart gekochte Eier (optional)",
            "2 EL Erdnussmus ohne Zucker",
            "1 Limette",
            "1 TL Sojasauce (natriumarm)",
            "1 TL Honig oder Ahornsirup",
        ],
        instructions: "Tofu wuerfeln und in einer Pfanne ohne Fett goldbraun anbraten. Bohnen 5 \
            Minuten blanchieren. Gemuese in Streifen schneiden. Erdnussmus mit \
            Limettensaft, Sojasauce, Honig und etwas Wasser verruehren. Alles als \
            Bowl servieren und mit Sauce betraeufeln.",
        benefit: "Tofu liefert pflanzliches Eiweiss ohne viel Fett, Bohnen und Gemuese \
            bringen Ballaststoffe und Kalium fuer ausgeglichene Blutwerte.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Gemuese im Mixtopf 4 Sek/Stufe 4 zerkleinern; Bohnen 5 Min/Varoma/Stufe 1 \
            daempfen; Tofuwuerfel in Varoma-Einlegeboden 12 Min/Varoma/Stufe 1 \
            garen; Sauce aus Erdnussmus, Limettensaft, Sojasauce und Honig \
            15 Sek/Stufe 3 ruehren und alle Komponenten im Mixtopf 5 Sek/\
            Linkslauf/Stufe 2 mischen.",
        ),
    },
    Meal {
        name: "Sesam-Lachs-Poke mit Vollkornreis und Edamame",
        prep_time: "20 Minuten",
        ingredients: &[
            "150 g Sushi-Lachs",
            "200 g gegarter Vollkornreis",
            "100 g Edamame",
            "1 Avocado",
            "1 kleine Mango",
            "2 EL Sojasauce (natriumarm)",
            "1 TL Sesamoel",
            "Sesamsamen, Koriander",
        ],
        instructions: "Reis vorbereiten. Lachs wuerfeln und kurz in Sojasauce und Sesamoel \
            marinieren. Edamame blanchieren. Avocado und Mango wuerfeln. Alles \
            zusammen in eine Schuessel geben und mit Sesam bestreuen.",
        benefit: "Roh verarbeiteter Lachs liefert Omega-3-Fettsaeuren, Edamame und Vollkornreis \
            stabilisieren den Blutzucker, Obst bringt Antioxidantien.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Vollkornreis im Gareinsatz mit 900 ml Wasser 35 Min/100C/Stufe 1 garen; \
            Edamame im Varoma 8 Min/Varoma/Stufe 1 daempfen; Marinade aus Sojasauce \
            und Sesamoel 5 Sek/Stufe 2 ruehren, Lachs in Stuecken unterheben und \
            mit vorbereitetem Obst im Mixtopf 5 Sek/Linkslauf/Stufe 1 vermengen.",
        ),
    },
    Meal {
        name: "Mediterrane Kichererbsenpfanne mit Mangold und Tomaten",
        prep_time: "22 Minuten",
        ingredients: &[
            "1 Dose Kichererbsen (abgespuelt)",
            "1 Bund Mangold",
            "200 g Kirschtomaten",
            "1 rote Zwiebel",
            "2 Knoblauchzehen",
            "1 EL Olivenoel",
            "1 TL geraucherte Paprika",
            "Frische Petersilie, Zitrone",
        ],
        instructions: "Zwiebel und Knoblauch hacken, in Oel anschwitzen. Kichererbsen zugeben und \
            5 Minuten braten. Mangoldstreifen und Tomaten zufuegen, weitere 5 Minuten \
            garen. Mit Zitrone und Petersilie abschmecken.",
        benefit: "Kichererbsen liefern Ballaststoffe und pflanzliches Eiweiss, Mangold und \
            Tomaten bringen Folat, Kalium und Lycopin fuer gesunde Blutwerte.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Zwiebel und Knoblauch 5 Sek/Stufe 5 zerkleinern, Olivenoel zugeben und \
            3 Min/120C/Stufe 1 anschwitzen; Kichererbsen, Mangoldstreifen und \
            Tomaten zufuegen und 10 Min/100C/Linkslauf/Stufe 1 koecheln, zum Schluss \
            mit Petersilie und Zitrone 5 Sek/Linkslauf/Stufe 2 vermengen.",
        ),
    },
    Meal {
        name: "Spinat-Feta-Omelett mit Vollkornbrot",
        prep_time: "12 Minuten",
        ingredients: &[
            "2 Eier",
            "1 Handvoll Babyspinat",
            "30 g Feta",
            "1 TL Olivenoel",
            "1 Scheibe Vollkornbrot",
            "Pfeffer, Muskat",
        ],
        instructions: "Eier verquirlen, Spinat hacken und mit Feta vermengen. In einer Pfanne mit \
            Oel 3 Minuten stocken lassen, zusammenklappen und mit getoastetem \
            Vollkornbrot servieren.",
        benefit: "Eier liefern hochwertiges Protein fuer stabile Blutwerte, Spinat und Feta \
            steuern Folat und Kalzium bei und die Zubereitung schont die Leber.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Spinat und Feta 4 Sek/Stufe 4 hacken, Eier und Gewuerze zugeben und \
            8 Sek/Stufe 3 verruehren; Masse in eine geoelte Varoma-Form geben und \
            15 Min/Varoma/Stufe 1 stocken lassen, Brot im Varoma-Einlegeboden \
            in den letzten 3 Minuten mitwaermen.",
        ),
    },
    Meal {
        name: "Quark-Beeren-Bowl mit Chiasamen",
        prep_time: "10 Minuten",
        ingredients: &[
            "200 g Magerquark",
            "Handvoll Beerenmix",
            "1 EL Chiasamen",
            "1 TL Leinsamen",
            "1 TL Honig",
            "Etwas Zitronenabrieb",
        ],
        instructions: "Quark mit Honig und Zitronenabrieb glatt ruehren, Beeren und Samen \
            unterheben und sofort servieren.",
        benefit: "Quark liefert Eiweiss ohne viel Fett, Beeren bringen Antioxidantien und \
            Chiasamen unterstuetzen die Verdauung sowie den Cholesterinspiegel.",
        is_salad: false,
        freezer: None,
        thermomix: Some(
            "Chia- und Leinsamen 5 Sek/Stufe 8 mahlen, Quark mit Honig und Zitronenabrieb \
            20 Sek/Stufe 3 cremig ruehren und Beeren 5 Sek/Linkslauf/Stufe 2 \
            unterheben.",
        ),
    },
    Meal {
        name: "Gruener Power-Salat mit Avocado und Grapefruit",
        prep_time: "15 Minuten",
        ingredients: &[
            "2 Haende Babyspinat",
            "1 Avocado",
            "1 rosa Grapefruit",
            "2 EL gekochte Kichererbsen",
            "1 TL Olivenoel",
            "1 TL Limettensaft",
            "1 EL gehackte Walnuesse",
        ],
        instructions: "Spinat und Grapefruit in Stuecke zupfen, Avocado wuerfeln. Mit Kichererbsen \
            und Walnuessen mischen. Oel mit Limettensaft verruehren und darueber geben.",
        benefit: "Spinat, Grapefruit und Walnuesse liefern Folat, Vitamin C und Omega-3-Fette \
            fuer starke Leber- und Blutwerte, Avocado spendet gesunde Fette.",
        is_salad: true,
        freezer: None,
        thermomix: Some(
            "Walnuesse 3 Sek/Stufe 5 hacken, Dressing aus Olivenoel und Limettensaft \
            5 Sek/Stufe 4 ruehren, Spinat und Grapefruit 3 Sek/Linkslauf/Stufe 2 \
            vermengen und Avocado mit dem Spatel unterheben.",
        ),
    },
    Meal {
        name: "Fenchel-Orangen-Salat mit Edamame",
        prep_time: "18 Minuten",
        ingredients: &[
            "1 Fenchelknolle",
            "1 Orange",
            "100 g gegarte Edamame",
            "1 Handvoll Rucola",
            "1 TL Olivenoel",
            "1 TL Zitronensaft",
            "1 TL Senf",
            "Pfeffer, Salz",
        ],
        instructions: "Fenchel fein hobeln, Orange filetieren und mit Rucola sowie Edamame \
            vermengen. Olivenoel, Zitronensaft, Senf, Salz und Pfeffer zu einem \
            Dressing ruehren und unterheben.",
        benefit: "Fenchel beruhigt die Verdauung, Orangen liefern Vitamin C und Edamame \
            spenden pflanzliches Eiweiss fuer stabile Blutwerte.",
        is_salad: true,
        freezer: None,
        thermomix: Some(
            "Fenchel 3 Sek/Stufe 5 hobeln, Edamame im Varoma 6 Min/Varoma/Stufe 1 \
            waermen, Dressing aus Olivenoel, Zitronensaft und Senf 6 Sek/Stufe 4 \
            ruehren und alles 4 Sek/Linkslauf/Stufe 2 mischen; Orangenfilets \
            zuletzt mit dem Spatel unterheben.",
        ),
    },
    Meal {
        name: "Bohnen-Chili mit Paprika und Mais",
        prep_time: "35 Minuten",
        ingredients: &[
            "1 Dose Kidneybohnen (abgespuelt)",
            "1 Dose schwarze Bohnen (abgespuelt)",
            "2 Dosen stueckige Tomaten",
            "1 rote Paprika",
            "1 gelbe Paprika",
            "1 Dose Mais (ungesuesst)",
            "1 Zwiebel",
            "2 Knoblauchzehen",
            "1 TL Kreuzkuemmel, 1 TL Paprikapulver",
            "1 EL Olivenoel",
        ],
        instructions: "Zwiebel und Knoblauch in Oel anschwitzen, Paprika zugeben und 5 Minuten \
            braten. Bohnen, Tomaten, Gewuerze und 200 ml Wasser zufuegen, 20 Minuten \
            koecheln lassen. Mais einruhren und abschmecken. Ergibt etwa 5 Portionen, \
            die sich nach dem Abkuehlen portionsweise einfrieren lassen.",
        benefit: "Kidney- und schwarze Bohnen liefern pflanzliches Eiweiss und Ballaststoffe, \
            Paprika und Tomaten bringen Vitamin C sowie Antioxidantien und das Gericht \
            bleibt fettarm.",
        is_salad: false,
        freezer: Some(FreezerNote {
            note: Some(
                "Nach dem Abkuehlen in 5 Behaelter fuellen und bis zu 3 Monate einfrieren. \
                Zum Essen ueber Nacht auftauen und kurz aufwaermen.",
            ),
        }),
        thermomix: Some(
            "Zwiebel und Knoblauch 5 Sek/Stufe 5 zerkleinern, Olivenoel zugeben und \
            3 Min/120C/Stufe 1 anschwitzen; Paprika zugeben und 5 Min/120C/\
            Linkslauf/Stufe 1 garen, Bohnen, Tomaten, Gewuerze und 200 ml Wasser \
            zufuegen und 20 Min/100C/Linkslauf/Stufe 1 koecheln, zum Schluss Mais \
            1 Min/Linkslauf/Stufe 1 unterziehen.",
        ),
    },
    Meal {
        name: "Haehnchen-Gemuese-Eintopf mit Suesskartoffel",
        prep_time: "45 Minuten",
        ingredients: &[
            "400 g Haehnchenbrust",
            "2 Sueskartoffeln",
            "2 Karotten",
            "2 Stangen Sellerie",
            "1 Zwiebel",
            "1 Liter natriumreduzierte Gemuese- oder Knochenbruehe",
            "1 TL Thymian, 1 Lorbeerblatt",
            "1 EL Raps- oder Olivenoel",
        ],
        instructions: "Haehnchen wuerfeln und in Oel 5 Minuten anbraten. Gemuese wuerfeln, \
            hinzugeben und weitere 5 Minuten garen. Mit Bruehe auffuellen, \
            Gewuerze zugeben und 25 Minuten koecheln. Ergibt 5 Portionen zum \
            Einfrieren. Vor dem Portionieren Lorbeer entfernen.",
        benefit: "Mageres Haehnchen und Gemuesebruehe liefern leicht verdauliches Eiweiss \
            und Elektrolyte, Gemuese bringt Beta-Carotin und Kalium fuer Leber und Blut.",
        is_salad: false,
        freezer: Some(FreezerNote {
            note: Some(
                "In 5 luftdichte Behaelter geben, einfrieren und bei Bedarf schonend aufwaermen.",
            ),
        }),
        thermomix: Some(
            "Zwiebel, Sellerie und Karotten 5 Sek/Stufe 5 zerkleinern, Oel zufuegen \
            und 4 Min/120C/Stufe 1 anschwitzen; Haehnchenwuerfel einfuellen und \
            20 Min/100C/Linkslauf/Stufe 1 mit Bruehe, Gewuerzen und Sueskartoffel \
            garen; Lorbeer entnehmen und Portionsweise abfuellen.",
        ),
    },
    Meal {
        name: "Gemuese-Lasagne mit Vollkornplatten und Ricotta",
        prep_time: "50 Minuten",
        ingredients: &[
            "12 Vollkorn-Lasagneplatten",
            "300 g TK-Spinat",
            "200 g Champignons",
            "1 Zucchini",
            "1 Aubergine",
            "500 ml passierte Tomaten",
            "250 g Ricotta",
            "1 EL Olivenoel",
            "Basilikum, Oregano, Salz, Pfeffer",
        ],
        instructions: "Gemuese wuerfeln und in Oel 5 Minuten anbraten, Spinat zugeben. Mit \
            Tomaten und Gewuerzen 10 Minuten koecheln lassen. In eine Auflaufform \
            schichten: Sauce, Platten, Ricotta. Drei Lagen bilden, mit Sauce \
            abschliessen und 25 Minuten bei 190 C backen. In 5 Portionen schneiden \
            und einfrieren.",
        benefit: "Viel Gemuese liefert Antioxidantien und Kalium, Vollkornplatten stabilisieren \
            den Blutzucker und Ricotta spendet leicht verdauliches Eiweiss.",
        is_salad: false,
        freezer: Some(FreezerNote {
            note: Some(
                "Portionen luftdicht verpacken und einfrieren, zum Verzehr ueber Nacht im \
                Kuehlschrank auftauen und im Ofen erwaermen.",
            ),
        }),
        thermomix: Some(
            "Champignons, Zucchini und Aubergine 5 Sek/Stufe 5 zerkleinern, Olivenoel \
            zugeben und 10 Min/120C/Linkslauf/Stufe 1 garen; Spinat zufuegen und \
            weitere 2 Min/100C/Linkslauf/Stufe 1 zusammenfallen lassen; Ricotta mit \
            etwas Sauce 5 Sek/Stufe 3 glattruehren und Lasagne wie beschrieben \
            schichten, anschliessend im Ofen backen.",
        ),
    },
];

pub static SNACKS: &[Snack] = &[
    Snack {
        timing: DayPart::Vormittag,
        idea: "Handvoll Walnuesse und eine Birne",
        reason: "Walnuesse bieten Omega-3-Fettsaeuren, die Leberfett reduzieren.",
    },
    Snack {
        timing: DayPart::Vormittag,
        idea: "Naturjoghurt mit Heidelbeeren und Leinsamen",
        reason: "Leinsamen liefern Ballaststoffe fuer stabile Blutzuckerwerte.",
    },
    Snack {
        timing: DayPart::Nachmittag,
        idea: "Gemuese-Sticks (Karotte, Sellerie) mit Hummus",
        reason: "Hummus liefert pflanzliches Eiweiss und Ballaststoffe fuer die Leber.",
    },
    Snack {
        timing: DayPart::Nachmittag,
        idea: "Apfel mit Mandelmus",
        reason: "Kombination aus Fruchtzucker und gesunden Fetten haelt satt ohne die Leber zu belasten.",
    },
    Snack {
        timing: DayPart::Abend,
        idea: "Beerenmix mit etwas Kefir",
        reason: "Fermentierte Milchprodukte unterstuetzen die Darmflora und damit die Leber.",
    },
];

pub static BEVERAGE_TIPS: &[&str] = &[
    "Mindestens 1,5 Liter stilles Wasser oder ungesuessten Tee ueber den Tag verteilt trinken.",
    "Morgens ein Glas lauwarmes Wasser mit Zitronensaft fuer die Leberaktivierung trinken.",
    "Gruener Tee am Nachmittag liefert Antioxidantien fuer gute Blutwerte.",
];

pub static GENERAL_HINTS: &[&str] = &[
    "Alle Gerichte lassen sich gut vorbereiten und halten im Kuehlschrank bis zu 2 Tage frisch.",
    "Bei Bedarf Vollkornbeilagen vorkochen und portioniert einfrieren, um Zeit zu sparen.",
    "Gewuerze wie Kurkuma, Kreuzkuemmel und Ingwer regelmaessig einsetzen, sie foerdern die Lebergesundheit.",
    "Fertige Portionen in BPA-freie Behaelter fuellen, datieren und optimalerweise innerhalb von 3 Monaten verbrauchen.",
];
