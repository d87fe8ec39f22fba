use keyspace_analysis_domain::{
    analytics::{Aggregator, ReportSorter},
    grouping::{Delimiters, KeyGrouper, group_of},
};
use keyspace_analysis_shared_kernel::ByteSize;
use proptest::prelude::*;

fn observations() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec(("[a-c]{1,3}(:[a-c0-9]{1,3}){0,3}", 0_u64..1_000_000), 0..64)
}

fn delimiter_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec![":", "#", "_", "::"]).prop_map(String::from), 0..3)
}

fn run(grouper: &KeyGrouper, input: &[(String, u64)]) -> Vec<keyspace_analysis_domain::model::Report> {
    let mut aggregator = Aggregator::new(grouper);
    aggregator.accumulate_all(input.iter().map(|(k, s)| (k.as_str(), ByteSize::new(*s))));
    aggregator.finish()
}

proptest! {
    #[test]
    fn grouping_is_deterministic(key in "\\PC{0,40}", delimiters in delimiter_lists()) {
        let first = group_of(&key, delimiters.iter().map(String::as_str));
        let second = group_of(&key, delimiters.iter().map(String::as_str));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn keys_without_any_delimiter_are_their_own_group(key in "[a-z0-9]{0,20}", delimiters in delimiter_lists()) {
        prop_assert_eq!(group_of(&key, delimiters.iter().map(String::as_str)), key);
    }

    #[test]
    fn aggregation_conserves_counts_and_sizes(input in observations(), delimiters in delimiter_lists()) {
        let grouper = KeyGrouper::new(Delimiters::new(delimiters));
        let reports = run(&grouper, &input);

        let total_size: u64 = reports.iter().map(|r| r.size.bytes()).sum();
        let total_count: u64 = reports.iter().map(|r| r.count).sum();
        prop_assert_eq!(total_size, input.iter().map(|(_, s)| s).sum::<u64>());
        prop_assert_eq!(total_count, input.len() as u64);
        prop_assert!(reports.iter().all(|r| r.count >= 1));
    }

    #[test]
    fn output_is_sorted_by_size_descending(input in observations()) {
        let grouper = KeyGrouper::new(Delimiters::new([":"]));
        let reports = run(&grouper, &input);
        for pair in reports.windows(2) {
            prop_assert!(pair[0].size >= pair[1].size);
            if pair[0].size == pair[1].size {
                prop_assert!(pair[0].group_key < pair[1].group_key);
            }
        }
    }

    #[test]
    fn pipeline_is_idempotent(input in observations()) {
        let grouper = KeyGrouper::new(Delimiters::new([":", "#"]));
        prop_assert_eq!(run(&grouper, &input), run(&grouper, &input));
        let resorted = ReportSorter::sort(run(&grouper, &input));
        prop_assert_eq!(resorted, run(&grouper, &input));
    }
}
