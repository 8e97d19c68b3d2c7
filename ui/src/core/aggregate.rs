//! Reduction of record subsets into (category, sum) groups.

/// Groups `items` by `key` and sums `value` within each group. Output order
/// is the first appearance of each distinct key while scanning left to
/// right; keys are unique in the output.
pub fn group_sum<T, K, V>(items: &[T], key: K, value: V) -> Vec<(String, f64)>
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> f64,
{
    let mut groups: Vec<(String, f64)> = Vec::new();
    for item in items {
        let group_key = key(item);
        let amount = value(item);
        match groups.iter_mut().find(|(existing, _)| *existing == group_key) {
            Some((_, sum)) => *sum += amount,
            None => groups.push((group_key, amount)),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::group_sum;
    use api::Record;

    fn record(sector: &str, intensity: Option<f64>) -> Record {
        Record {
            sector: sector.to_string(),
            intensity,
            ..Record::default()
        }
    }

    #[test]
    fn groups_sum_in_first_occurrence_order() {
        let records = vec![
            record("Energy", Some(10.0)),
            record("Water", Some(5.0)),
            record("Energy", Some(7.0)),
        ];
        let groups = group_sum(
            &records,
            |r| r.sector.clone(),
            |r| r.intensity.unwrap_or(0.0),
        );
        assert_eq!(
            groups,
            vec![("Energy".to_string(), 17.0), ("Water".to_string(), 5.0)]
        );
    }

    #[test]
    fn missing_values_contribute_zero() {
        let records = vec![record("Energy", None), record("Energy", Some(4.0))];
        let groups = group_sum(
            &records,
            |r| r.sector.clone(),
            |r| r.intensity.unwrap_or(0.0),
        );
        assert_eq!(groups, vec![("Energy".to_string(), 4.0)]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_sum(&[] as &[Record], |r| r.sector.clone(), |_| 1.0);
        assert!(groups.is_empty());
    }

    #[test]
    fn empty_keys_form_their_own_group() {
        let records = vec![record("", Some(2.0)), record("", Some(3.0))];
        let groups = group_sum(
            &records,
            |r| r.sector.clone(),
            |r| r.intensity.unwrap_or(0.0),
        );
        assert_eq!(groups, vec![(String::new(), 5.0)]);
    }
}
