//! Integration tests for the partition session
//!
//! These tests drive the full flow: roster table, category filter, pool
//! generation, reshuffles and bout-sheet seeding.

#[cfg(test)]
mod partition_tests {
    use kumite_pools::{
        AgeBand, BeltTier, Competitor, Gender, PartitionOutcome, PartitionSession, Randomizer,
        RosterFilter, RosterTable, SeededRandomizer, SessionState, TargetSize,
        bracket::{divide, seed_positions, split_evenly},
    };
    use std::collections::HashSet;

    struct InOrder;

    impl Randomizer for InOrder {
        fn permute<T>(&mut self, _items: &mut [T]) {}
    }

    fn competitors(n: usize) -> Vec<Competitor> {
        (0..n)
            .map(|i| Competitor::new(i, format!("Fighter {i}")))
            .collect()
    }

    fn all_ids(session: &PartitionSession<impl Randomizer>) -> Vec<usize> {
        session
            .pools()
            .iter()
            .flat_map(|p| p.sub_pools.iter())
            .flat_map(|s| s.players.iter().map(|c| c.id))
            .collect()
    }

    #[test]
    fn test_nine_competitors_in_fours() {
        let groups = split_evenly(competitors(9), 8);
        assert_eq!(groups.iter().map(Vec::len).collect::<Vec<_>>(), vec![5, 4]);

        let mut session = PartitionSession::new(SeededRandomizer::new(11));
        session.set_competitors(competitors(9));
        session.generate(4).unwrap();

        assert_eq!(session.shape(), vec![vec![3, 2], vec![4]]);
        let labels: Vec<&str> = session
            .pools()
            .iter()
            .flat_map(|p| p.sub_pools.iter().map(|s| s.label.as_str()))
            .collect();
        assert_eq!(labels, vec!["A1", "A2", "B1"]);
    }

    #[test]
    fn test_thirteen_competitors_in_eights() {
        let groups = split_evenly(competitors(13), 16);
        assert_eq!(groups.len(), 1);
        let sub_pools = divide(groups.into_iter().next().unwrap(), 8);
        assert_eq!(
            sub_pools.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![7, 6]
        );

        let mut session = PartitionSession::new(SeededRandomizer::new(5));
        session.set_competitors(competitors(13));
        session.generate(8).unwrap();
        assert_eq!(session.shape(), vec![vec![7, 6]]);
    }

    #[test]
    fn test_five_player_sheet_byes() {
        assert_eq!(seed_positions(5, TargetSize::Eight), vec![1, 2, 4, 5, 8]);

        let mut session = PartitionSession::new(InOrder);
        session.set_competitors(competitors(5));
        session.generate(8).unwrap();

        let seeds = session.seed_assignment("A1").unwrap();
        assert_eq!(seeds.byes(), vec![3, 6, 7]);
    }

    #[test]
    fn test_generate_on_empty_set_keeps_prior_pools() {
        let mut session = PartitionSession::new(InOrder);
        assert_eq!(session.generate(4).unwrap(), PartitionOutcome::EmptyInput);
        assert!(session.pools().is_empty());

        // A session whose set was emptied by a new filter has no pools to keep
        session.set_competitors(competitors(6));
        session.generate(4).unwrap();
        session.set_competitors(Vec::new());
        assert_eq!(session.generate(4).unwrap(), PartitionOutcome::EmptyInput);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_every_competitor_placed_once() {
        for n in 1..=60 {
            for target in [4, 8] {
                let mut session = PartitionSession::new(SeededRandomizer::new(n as u64));
                session.set_competitors(competitors(n));
                session.generate(target).unwrap();

                let ids = all_ids(&session);
                assert_eq!(ids.len(), n);
                assert_eq!(ids.iter().collect::<HashSet<_>>().len(), n);

                for pool in session.pools() {
                    assert!(pool.len() <= 2 * target);
                    for sub in &pool.sub_pools {
                        assert!(!sub.is_empty());
                        assert!(sub.len() <= target);
                    }
                }
            }
        }
    }

    #[test]
    fn test_regenerate_shape_is_stable() {
        let mut session = PartitionSession::new(SeededRandomizer::new(99));
        session.set_competitors(competitors(27));
        session.generate(8).unwrap();
        let shape = session.shape();
        let first = all_ids(&session);

        let mut orders = vec![first];
        for _ in 0..5 {
            session.regenerate_all().unwrap();
            assert_eq!(session.shape(), shape);
            orders.push(all_ids(&session));
        }

        // Membership order should move at least once over six draws
        assert!(orders.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_filtered_roster_to_bout_sheets() {
        let table = RosterTable::new(
            ["Name", "Gender", "Age (in yrs)", "Weight (kg)", "Belt", "Dojo"]
                .map(String::from)
                .to_vec(),
            vec![
                ["Ren", "M", "12", "40", "yellow", "Kita"],
                ["Sora", "M", "12", "42.5", "white", "Minami"],
                ["Mio", "F", "12", "41", "white", "Kita"],
                ["Kai", "M", "12", "44", "orange", "Higashi"],
                ["Taro", "M", "12", "47", "white", "Kita"],
                ["Jun", "M", "11", "41", "white", "Nishi"],
                ["Yuto", "M", "12", "43", "green", "Nishi"],
            ]
            .into_iter()
            .map(|row| row.map(String::from).to_vec())
            .collect(),
        );
        let roster = table.competitors().unwrap();

        let filter = RosterFilter::new()
            .gender(Gender::Male)
            .age_band(AgeBand::Years(12))
            .weight_range(Some(40.0), Some(45.0))
            .belt_tier(BeltTier::Beginner);
        let filtered = filter.apply(&roster);
        assert_eq!(
            filtered.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Ren", "Sora", "Kai"]
        );

        let mut session = PartitionSession::new(SeededRandomizer::new(2024));
        session.set_competitors(filtered);
        session.generate(4).unwrap();

        let seeds = session.seed_assignment("A1").unwrap();
        assert_eq!(seeds.occupied(), vec![1, 2, 4]);
        assert_eq!(seeds.byes(), vec![3]);
        let bouts = seeds.first_round();
        assert!(!bouts[0].is_bye());
        assert!(bouts[1].walkover().is_some());

        // Narrowing the filter invalidates the pools
        let narrower = filter.clone().weight_range(Some(40.0), Some(41.0));
        assert_ne!(filter.key(), narrower.key());
        session.set_competitors(narrower.apply(&roster));
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.competitors().len(), 1);
    }
}
