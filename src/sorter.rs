//! In-place sorting of the dataset by one counter field

use crate::config::{Field, SortOrder, SortSpec};
use crate::record::Record;
use tracing::debug;

/// Orders records by the field and order of a [`SortSpec`]
#[derive(Debug, Clone, Copy)]
pub struct Sorter {
    spec: SortSpec,
}

impl Sorter {
    pub fn new(spec: SortSpec) -> Self {
        Self { spec }
    }

    /// Sort `dataset` in place and return the field it was sorted by.
    ///
    /// The sort is a stable ascending sort on the field. Descending order is
    /// produced by reversing the whole sequence afterwards, so records with
    /// equal keys come out in reverse file order.
    pub fn sort(&self, dataset: &mut [Record]) -> Field {
        let field = self.spec.field;
        dataset.sort_by(|a, b| field.compare(a, b));

        if self.spec.order == SortOrder::Descending {
            dataset.reverse();
        }

        debug!(
            records = dataset.len(),
            field = field.cli_name(),
            order = %self.spec.order,
            "dataset sorted"
        );
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn record(code: &str, counters: [u64; 6]) -> Record {
        Record::new(&format!("\"{code} land\""), &format!("\"{code}\""), counters)
    }

    fn random_dataset(rng: &mut StdRng, len: usize) -> Vec<Record> {
        (0..len)
            .map(|i| {
                let mut counters = [0u64; 6];
                for c in counters.iter_mut() {
                    // Narrow range so ties are common
                    *c = rng.gen_range(0..20);
                }
                record(&format!("C{i}"), counters)
            })
            .collect()
    }

    fn codes(dataset: &[Record]) -> Vec<&str> {
        dataset.iter().map(Record::display_code).collect()
    }

    #[test]
    fn test_sorted_by_every_field_and_order() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for field in Field::ALL {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let mut dataset = random_dataset(&mut rng, 200);
                let selected = Sorter::new(SortSpec::new(field, order)).sort(&mut dataset);
                assert_eq!(selected, field);

                for pair in dataset.windows(2) {
                    let (a, b) = (field.value(&pair[0]), field.value(&pair[1]));
                    match order {
                        SortOrder::Ascending => assert!(a <= b, "{field}: {a} > {b}"),
                        SortOrder::Descending => assert!(a >= b, "{field}: {a} < {b}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = random_dataset(&mut rng, 64);
        let mut dataset = original.clone();

        Sorter::new(SortSpec::new(Field::TotalDeaths, SortOrder::Descending)).sort(&mut dataset);

        let mut before = codes(&original);
        let mut after = codes(&dataset);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_ascending_ties_keep_file_order() {
        let mut dataset = vec![
            record("A", [5, 0, 0, 0, 0, 0]),
            record("B", [1, 0, 0, 0, 0, 0]),
            record("C", [5, 0, 0, 0, 0, 0]),
            record("D", [1, 0, 0, 0, 0, 0]),
        ];

        Sorter::new(SortSpec::new(Field::NewConfirmed, SortOrder::Ascending)).sort(&mut dataset);
        assert_eq!(codes(&dataset), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_descending_reverses_ties() {
        let mut dataset = vec![
            record("A", [5, 0, 0, 0, 0, 0]),
            record("B", [1, 0, 0, 0, 0, 0]),
            record("C", [5, 0, 0, 0, 0, 0]),
            record("D", [1, 0, 0, 0, 0, 0]),
        ];

        Sorter::new(SortSpec::new(Field::NewConfirmed, SortOrder::Descending)).sort(&mut dataset);
        assert_eq!(codes(&dataset), vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_ascending_sort_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dataset = random_dataset(&mut rng, 100);
        let sorter = Sorter::new(SortSpec::new(Field::NewRecovered, SortOrder::Ascending));

        sorter.sort(&mut dataset);
        let once = dataset.clone();
        sorter.sort(&mut dataset);
        assert_eq!(dataset, once);
    }

    #[test]
    fn test_descending_resort_keeps_keys() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut dataset = random_dataset(&mut rng, 100);
        let field = Field::TotalRecovered;
        let sorter = Sorter::new(SortSpec::new(field, SortOrder::Descending));

        sorter.sort(&mut dataset);
        let once: Vec<u64> = dataset.iter().map(|r| field.value(r)).collect();
        sorter.sort(&mut dataset);
        let twice: Vec<u64> = dataset.iter().map(|r| field.value(r)).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_only_selected_field_matters() {
        let mut dataset = vec![
            record("A", [3, 100, 0, 0, 0, 0]),
            record("B", [2, 200, 0, 0, 0, 0]),
            record("C", [1, 300, 0, 0, 0, 0]),
        ];

        Sorter::new(SortSpec::new(Field::NewDeaths, SortOrder::Descending)).sort(&mut dataset);
        assert_eq!(codes(&dataset), vec!["C", "B", "A"]);

        Sorter::new(SortSpec::new(Field::NewConfirmed, SortOrder::Descending)).sort(&mut dataset);
        assert_eq!(codes(&dataset), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_dataset() {
        let mut dataset: Vec<Record> = Vec::new();
        let field =
            Sorter::new(SortSpec::new(Field::TotalConfirmed, SortOrder::Ascending)).sort(&mut dataset);
        assert_eq!(field, Field::TotalConfirmed);
        assert!(dataset.is_empty());
    }
}
