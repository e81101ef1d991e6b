//! Rust source literals for compiling the dataset into a binary.
//!
//! The generated files only use `&'static` slices and string literals, so
//! they can be `include!`d without any runtime setup. Their exact layout is
//! not a stable format; the JSON artifacts are.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::dataset::StopsByName;
use crate::domain::Route;

const HEADER: &str = "// Generated by subway-data. Do not edit.\n";

/// Type definitions plus a `NYC_SUBWAY_ROUTES` slice in line-code order.
pub fn routes_literal(routes: &BTreeMap<String, Route>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str(
        r#"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub stop_id: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    pub id: &'static str,
    pub mta_name: &'static str,
    pub display_name: &'static str,
    pub phonetic_name: &'static str,
    pub synonyms: &'static [&'static str],
    pub transfers: &'static [Transfer],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub northbound: &'static str,
    pub southbound: &'static str,
    pub stops: &'static [Stop],
}
"#,
    );

    writeln!(out)?;
    writeln!(out, "pub static NYC_SUBWAY_ROUTES: &[Route] = &[")?;
    for route in routes.values() {
        writeln!(out, "    Route {{")?;
        writeln!(out, "        name: {:?},", route.name)?;
        writeln!(out, "        northbound: {:?},", route.northbound)?;
        writeln!(out, "        southbound: {:?},", route.southbound)?;
        writeln!(out, "        stops: &[")?;
        for stop in &route.stops {
            writeln!(out, "            Stop {{")?;
            writeln!(out, "                id: {:?},", stop.id)?;
            writeln!(out, "                mta_name: {:?},", stop.mta_name)?;
            writeln!(out, "                display_name: {:?},", stop.display_name)?;
            writeln!(out, "                phonetic_name: {:?},", stop.phonetic_name)?;
            writeln!(out, "                synonyms: &{:?},", stop.synonyms)?;
            write!(out, "                transfers: &[")?;
            for transfer in &stop.transfers {
                write!(
                    out,
                    "Transfer {{ stop_id: {:?}, route: {:?} }}, ",
                    transfer.stop_id, transfer.route
                )?;
            }
            writeln!(out, "],")?;
            writeln!(out, "            }},")?;
        }
        writeln!(out, "        ],")?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

/// A `NYC_SUBWAY_STOPS_BY_NAME` slice sorted by name, for binary search.
pub fn stops_by_name_literal(lookup: &StopsByName) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    out.push_str(HEADER);
    writeln!(out)?;
    writeln!(
        out,
        "pub static NYC_SUBWAY_STOPS_BY_NAME: &[(&str, &[(&str, &str)])] = &["
    )?;
    for (name, by_line) in lookup {
        write!(out, "    ({name:?}, &[")?;
        for (line, stop_id) in by_line {
            write!(out, "({line:?}, {stop_id:?}), ")?;
        }
        writeln!(out, "]),")?;
    }
    writeln!(out, "];")?;
    Ok(out)
}
