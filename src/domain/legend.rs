use crate::domain::style::DEPTH_BANDS;

/// One swatch + label line of the static depth legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Build the six legend entries from the fixed band table, in ascending
/// depth order. The last band is open-ended ("90+ km"); all others show a
/// lower–upper range. The first label reads "-10–10 km" because the -10
/// display floor is reused as-is, a quirk kept for parity with the
/// upstream feed map.
pub fn legend_entries() -> Vec<LegendEntry> {
    DEPTH_BANDS
        .iter()
        .enumerate()
        .map(|(i, &(lower, color))| {
            let label = match DEPTH_BANDS.get(i + 1) {
                Some(&(upper, _)) => format!("{}\u{2013}{} km", lower, upper),
                None => format!("{}+ km", lower),
            };
            LegendEntry { label, color }
        })
        .collect()
}
