//! Greedy temporal clustering of event timestamps.

use cev_common::ClusterMap;
use chrono::NaiveDate;

/// Group timestamps into clusters of temporal proximity.
///
/// Timestamps become day offsets from the earliest entry and are processed
/// in original list order. Each offset joins the first existing cluster
/// (scanned in creation order) containing any member strictly closer than
/// `window_days`; otherwise it starts a new cluster. Membership is
/// single-link: joining via one nearby member can chain a cluster's total
/// span past the window. Cluster ids are sequential creation indices, and
/// the mapping back to the original events is not retained.
pub fn cluster_timestamps(timestamps: &[NaiveDate], window_days: i64) -> ClusterMap {
    let mut clusters: Vec<Vec<i64>> = Vec::new();
    if let Some(&origin) = timestamps.iter().min() {
        for &ts in timestamps {
            let offset = (ts - origin).num_days();
            let found = clusters
                .iter_mut()
                .find(|members| members.iter().any(|m| (offset - m).abs() < window_days));
            match found {
                Some(members) => members.push(offset),
                None => clusters.push(vec![offset]),
            }
        }
    }
    clusters.into_iter().enumerate().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(offsets: &[i64]) -> Vec<NaiveDate> {
        let origin = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        offsets
            .iter()
            .map(|d| origin + chrono::Duration::days(*d))
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        assert!(cluster_timestamps(&[], 30).is_empty());
    }

    #[test]
    fn splits_when_no_member_is_near_enough() {
        // 45 is 45 days from 0 and 35 from 10: too far from every member
        // of the first cluster, so it seeds a second one that 50 joins.
        let clusters = cluster_timestamps(&dates(&[0, 10, 45, 50]), 30);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[&0], vec![0, 10]);
        assert_eq!(clusters[&1], vec![45, 50]);
    }

    #[test]
    fn chaining_can_stretch_a_cluster_past_the_window() {
        // 48 is 48 days from 0 but only 23 from 25, so single-link
        // membership chains it into the first cluster.
        let clusters = cluster_timestamps(&dates(&[0, 25, 48]), 30);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[&0], vec![0, 25, 48]);
    }

    #[test]
    fn window_boundary_is_strict() {
        let clusters = cluster_timestamps(&dates(&[0, 30]), 30);
        assert_eq!(clusters.len(), 2);
        let clusters = cluster_timestamps(&dates(&[0, 29]), 30);
        assert_eq!(clusters.len(), 1);
    }

    #[test]
    fn offsets_are_relative_to_the_earliest_timestamp() {
        // Unsorted input: the minimum (day 100) anchors offset zero.
        let clusters = cluster_timestamps(&dates(&[120, 100, 190]), 30);
        assert_eq!(clusters[&0], vec![20, 0]);
        assert_eq!(clusters[&1], vec![90]);
    }

    #[test]
    fn first_fit_prefers_the_earliest_cluster() {
        // 40 is within the window of member 20 (cluster 0) and member 60
        // (cluster 1); creation order decides.
        let clusters = cluster_timestamps(&dates(&[0, 20, 60, 40]), 30);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[&0], vec![0, 20, 40]);
        assert_eq!(clusters[&1], vec![60]);
    }
}
