//! Field access and option derivation over the shared `Record` type.

use api::Record;

use crate::core::filter::FilterKey;
use crate::core::format::number_text;

/// A record field coerced to text, which is the representation every filter
/// comparison uses. Missing numeric fields coerce to the empty string.
pub fn field_text(record: &Record, key: FilterKey) -> String {
    match key {
        FilterKey::Country => record.country.clone(),
        FilterKey::EndYear => record.end_year.clone(),
        FilterKey::Topic => record.topic.clone(),
        FilterKey::Sector => record.sector.clone(),
        FilterKey::Region => record.region.clone(),
        FilterKey::Pestle => record.pestle.clone(),
        FilterKey::Source => record.source.clone(),
        FilterKey::Swot => record.swot.clone(),
        FilterKey::City => record.city.clone(),
        FilterKey::Likelihood => record.likelihood.map(number_text).unwrap_or_default(),
        FilterKey::Intensity => record.intensity.map(number_text).unwrap_or_default(),
    }
}

pub fn field_number(record: &Record, key: FilterKey) -> Option<f64> {
    match key {
        FilterKey::Likelihood => record.likelihood,
        FilterKey::Intensity => record.intensity,
        _ => None,
    }
}

/// Distinct non-empty values of a field in first-appearance order. This
/// feeds the dropdowns and chip panels, so controls only ever offer values
/// actually present in the dataset.
pub fn distinct_text(records: &[Record], key: FilterKey) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        let value = field_text(record, key);
        if value.is_empty() || seen.contains(&value) {
            continue;
        }
        seen.push(value);
    }
    seen
}

/// Distinct values of a numeric field in first-appearance order, rendered
/// as dropdown text. Missing values and zeros are dropped alongside empty
/// strings.
pub fn distinct_numbers(records: &[Record], key: FilterKey) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        let Some(value) = field_number(record, key) else {
            continue;
        };
        if value == 0.0 {
            continue;
        }
        let text = number_text(value);
        if !seen.contains(&text) {
            seen.push(text);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Record;

    fn record(country: &str, likelihood: Option<f64>) -> Record {
        Record {
            country: country.to_string(),
            likelihood,
            ..Record::default()
        }
    }

    #[test]
    fn distinct_text_keeps_first_appearance_order_and_drops_empties() {
        let records = vec![
            record("India", None),
            record("", None),
            record("Brazil", None),
            record("India", None),
        ];
        assert_eq!(
            distinct_text(&records, FilterKey::Country),
            vec!["India".to_string(), "Brazil".to_string()]
        );
    }

    #[test]
    fn distinct_numbers_drop_missing_and_zero() {
        let records = vec![
            record("A", Some(3.0)),
            record("B", None),
            record("C", Some(0.0)),
            record("D", Some(3.0)),
            record("E", Some(1.0)),
        ];
        assert_eq!(
            distinct_numbers(&records, FilterKey::Likelihood),
            vec!["3".to_string(), "1".to_string()]
        );
    }

    #[test]
    fn missing_numeric_fields_coerce_to_empty_text() {
        let record = record("A", None);
        assert_eq!(field_text(&record, FilterKey::Likelihood), "");
    }
}
