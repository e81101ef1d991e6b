//! Flattened lookup views for the arrival lookup tool.

use std::collections::{BTreeMap, HashSet};

use crate::domain::{Route, Stop, Synonym};

/// Name → line code → stop ID.
pub type StopsByName = BTreeMap<String, BTreeMap<String, String>>;

/// One synonym record per distinct phonetic name, sorted by value.
///
/// When several stops share a phonetic name, the first stop's synonyms
/// are kept.
pub fn synonym_records<'a>(stops: impl IntoIterator<Item = &'a Stop>) -> Vec<Synonym> {
    let mut seen = HashSet::new();
    let mut records: Vec<Synonym> = stops
        .into_iter()
        .filter(|stop| seen.insert(stop.phonetic_name.as_str()))
        .map(|stop| Synonym {
            value: stop.phonetic_name.clone(),
            synonyms: stop.synonyms.clone(),
        })
        .collect();
    records.sort_by(|a, b| a.value.cmp(&b.value));
    records
}

/// Index every phonetic name and synonym to the stop ID on each line.
///
/// A name that matches two stops on the same line keeps the one that
/// comes later in the line's stop order.
pub fn stops_by_name(routes: &BTreeMap<String, Route>) -> StopsByName {
    let mut lookup = StopsByName::new();
    for (line, route) in routes {
        for stop in &route.stops {
            let names = std::iter::once(&stop.phonetic_name).chain(&stop.synonyms);
            for name in names {
                lookup
                    .entry(name.clone())
                    .or_default()
                    .insert(line.clone(), stop.id.clone());
            }
        }
    }
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(line: &str, stops: &[(&str, &str)]) -> Route {
        Route {
            name: line.into(),
            northbound: String::new(),
            southbound: String::new(),
            stops: stops
                .iter()
                .map(|(id, name)| Stop::from_agency_name(*id, *name))
                .collect(),
        }
    }

    #[test]
    fn synonyms_deduplicated_and_sorted() {
        let stops = vec![
            Stop::from_agency_name("R20", "14 St - Union Sq"),
            Stop::from_agency_name("635", "14 St - Union Sq"),
            Stop::from_agency_name("A34", "Canal St"),
        ];

        let records = synonym_records(&stops);

        let values: Vec<_> = records.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["14th Street, Union Square", "Canal Street"]);
        assert_eq!(records[1].synonyms, vec!["Canal Street"]);
    }

    #[test]
    fn names_and_synonyms_map_to_stop_per_line() {
        let mut routes = BTreeMap::new();
        routes.insert("4".to_string(), route("4", &[("635", "14 St - Union Sq")]));
        routes.insert("L".to_string(), route("L", &[("L03", "14 St - Union Sq")]));

        let lookup = stops_by_name(&routes);

        let by_line = &lookup["14th Street, Union Square"];
        assert_eq!(by_line["4"], "635");
        assert_eq!(by_line["L"], "L03");
        assert_eq!(lookup["Union Square"]["L"], "L03");
        assert_eq!(lookup["Union Square, 14th Street"]["4"], "635");
    }
}
