use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize
};

use super::locale::{
    DEFAULT_LOCALE,
    language
};

/// Display names of one holiday, keyed by locale code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    names: BTreeMap<String, String>
}

impl Translations {
    pub fn new() -> Translations {
        Translations { names: BTreeMap::new() }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Translations {
        Translations {
            names: pairs
                .iter()
                .map(|(locale, name)| (locale.to_string(), name.to_string()))
                .collect()
        }
    }

    pub fn insert(&mut self, locale: &str, name: &str) {
        self.names.insert(locale.to_owned(), name.to_owned());
    }

    /// Entries of `other` take precedence over the ones already present.
    pub fn merged_with(&self, other: &Translations) -> Translations {
        let mut names = self.names.clone();
        names.extend(other.names.iter().map(|(l, n)| (l.clone(), n.clone())));
        Translations { names }
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.names.get(locale).map(String::as_str)
    }

    /// Exact locale, then the bare language, then [`DEFAULT_LOCALE`].
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        self.get(locale)
            .or_else(|| self.get(language(locale)))
            .or_else(|| self.get(DEFAULT_LOCALE))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(l, n)| (l.as_str(), n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Names shared by every jurisdiction emitting a holiday under `key`.
/// Jurisdictions override or extend them per rule.
pub fn global_translations(key: &str) -> Translations {
    let pairs: &[(&str, &str)] = match key {
        "newYearsDay" => &[
            ("en_US", "New Year's Day"),
            ("fi_FI", "Uudenvuodenpäivä"),
            ("nb_NO", "Første nyttårsdag"),
            ("pt_PT", "Dia de Ano Novo"),
            ("sv_SE", "nyårsdagen")
        ],
        "epiphany" => &[
            ("en_US", "Epiphany"),
            ("fi_FI", "Loppiainen"),
            ("nb_NO", "Hellige tre kongers dag"),
            ("pt_PT", "Dia de Reis"),
            ("sv_SE", "trettondedag jul")
        ],
        "maundyThursday" => &[
            ("en_US", "Maundy Thursday"),
            ("fi_FI", "Kiirastorstai"),
            ("nb_NO", "Skjærtorsdag"),
            ("pt_PT", "Quinta-feira Santa"),
            ("sv_SE", "skärtorsdagen")
        ],
        "goodFriday" => &[
            ("en_US", "Good Friday"),
            ("fi_FI", "Pitkäperjantai"),
            ("nb_NO", "Langfredag"),
            ("pt_PT", "Sexta-feira Santa"),
            ("sv_SE", "långfredagen")
        ],
        "easter" => &[
            ("en_US", "Easter Sunday"),
            ("fi_FI", "Pääsiäispäivä"),
            ("nb_NO", "Første påskedag"),
            ("pt_PT", "Páscoa"),
            ("sv_SE", "påskdagen")
        ],
        "easterMonday" => &[
            ("en_US", "Easter Monday"),
            ("fi_FI", "2. pääsiäispäivä"),
            ("nb_NO", "Andre påskedag"),
            ("pt_PT", "Segunda-feira de Páscoa"),
            ("sv_SE", "annandag påsk")
        ],
        "internationalWorkersDay" => &[
            ("en_US", "International Workers' Day"),
            ("fi_FI", "Vappu"),
            ("nb_NO", "Arbeidernes dag"),
            ("pt_PT", "Dia do Trabalhador"),
            ("sv_SE", "första maj")
        ],
        "ascensionDay" => &[
            ("en_US", "Ascension Day"),
            ("fi_FI", "Helatorstai"),
            ("nb_NO", "Kristi himmelfartsdag"),
            ("pt_PT", "Ascensão do Senhor"),
            ("sv_SE", "Kristi himmelfärdsdag")
        ],
        "pentecost" => &[
            ("en_US", "Pentecost"),
            ("fi_FI", "Helluntaipäivä"),
            ("nb_NO", "Første pinsedag"),
            ("pt_PT", "Pentecostes"),
            ("sv_SE", "pingstdagen")
        ],
        "pentecostMonday" => &[
            ("en_US", "Whitmonday"),
            ("fi_FI", "2. helluntaipäivä"),
            ("nb_NO", "Andre pinsedag"),
            ("pt_PT", "Segunda-feira de Pentecostes"),
            ("sv_SE", "annandag pingst")
        ],
        "corpusChristi" => &[
            ("en_US", "Corpus Christi"),
            ("pt_PT", "Corpo de Deus")
        ],
        "assumptionOfMary" => &[
            ("en_US", "Assumption of Mary"),
            ("pt_PT", "Assunção de Nossa Senhora")
        ],
        "stJohnsDay" => &[
            ("en_US", "St. John's Day"),
            ("fi_FI", "Juhannuspäivä"),
            ("pt_PT", "Dia de São João"),
            ("sv_SE", "midsommardagen")
        ],
        "allSaintsDay" => &[
            ("en_US", "All Saints' Day"),
            ("fi_FI", "Pyhäinpäivä"),
            ("nb_NO", "Allehelgensdag"),
            ("pt_PT", "Dia de Todos os Santos"),
            ("sv_SE", "alla helgons dag")
        ],
        "immaculateConception" => &[
            ("en_US", "Immaculate Conception"),
            ("pt_PT", "Dia da Imaculada Conceição")
        ],
        "christmasEve" => &[
            ("en_US", "Christmas Eve"),
            ("fi_FI", "Jouluaatto"),
            ("nb_NO", "Julaften"),
            ("pt_PT", "Véspera de Natal"),
            ("sv_SE", "julafton")
        ],
        "christmasDay" => &[
            ("en_US", "Christmas"),
            ("fi_FI", "Joulupäivä"),
            ("nb_NO", "Første juledag"),
            ("pt_PT", "Dia de Natal"),
            ("sv_SE", "juldagen")
        ],
        "secondChristmasDay" => &[
            ("en_US", "Second Christmas Day"),
            ("fi_FI", "Tapaninpäivä"),
            ("nb_NO", "Andre juledag"),
            ("sv_SE", "annandag jul")
        ],
        "nationalDay" => &[
            ("en_US", "National Day")
        ],
        "independenceDay" => &[
            ("en_US", "Independence Day"),
            ("fi_FI", "Itsenäisyyspäivä")
        ],
        "constitutionDay" => &[
            ("en_US", "Constitution Day"),
            ("nb_NO", "Grunnlovsdag")
        ],
        "25thApril" => &[
            ("en_US", "Freedom Day"),
            ("pt_PT", "Dia da Liberdade")
        ],
        "portugueseRepublic" => &[
            ("en_US", "Implantation of the Portuguese Republic"),
            ("pt_PT", "Implantação da República Portuguesa")
        ],
        "restorationOfIndependence" => &[
            ("en_US", "Restoration of Independence"),
            ("pt_PT", "Restauração da Independência")
        ],
        "portugalDay" => &[
            ("en_US", "Portugal Day"),
            ("pt_PT", "Dia de Portugal, de Camões e das Comunidades Portuguesas")
        ],
        "martinLutherKingDay" => &[("en_US", "Dr. Martin Luther King Jr's Birthday")],
        "washingtonsBirthday" => &[("en_US", "Washington's Birthday")],
        "memorialDay" => &[("en_US", "Memorial Day")],
        "labourDay" => &[("en_US", "Labour Day")],
        "columbusDay" => &[("en_US", "Columbus Day")],
        "veteransDay" => &[("en_US", "Veterans Day")],
        "thanksgivingDay" => &[("en_US", "Thanksgiving Day")],
        // "{0}" is replaced by the name of the substituted holiday
        "substituteHoliday" => &[("en_US", "{0} observed")],
        _ => &[]
    };
    Translations::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_language_then_default_locale() {
        let names = Translations::from_pairs(&[
            ("en_US", "Christmas"),
            ("sv", "jul"),
            ("sv_SE", "juldagen")
        ]);
        assert_eq!(names.resolve("sv_SE"), Some("juldagen"));
        assert_eq!(names.resolve("sv_FI"), Some("jul"));
        assert_eq!(names.resolve("de_DE"), Some("Christmas"));
        assert_eq!(Translations::new().resolve("de_DE"), None);
    }

    #[test]
    fn merged_names_override_existing_ones() {
        let base = global_translations("nationalDay");
        let merged = base.merged_with(&Translations::from_pairs(&[("sv_SE", "Sveriges nationaldag")]));
        assert_eq!(merged.get("en_US"), Some("National Day"));
        assert_eq!(merged.get("sv_SE"), Some("Sveriges nationaldag"));
        assert_eq!(base.get("sv_SE"), None);
    }

    #[test]
    fn unknown_keys_have_no_global_names() {
        assert!(global_translations("noSuchHoliday").is_empty());
        assert_eq!(global_translations("substituteHoliday").get("en_US"), Some("{0} observed"));
    }
}
