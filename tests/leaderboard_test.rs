use uuid::Uuid;

use matchday_backend::league::standings::rank_entries;
use matchday_backend::models::league::LeaderboardEntry;

fn entry(username: &str, total_points: i64, exact_results: i64) -> LeaderboardEntry {
    LeaderboardEntry {
        user_id: Uuid::new_v4(),
        username: username.to_string(),
        total_points,
        predictions_scored: 10,
        exact_results,
    }
}

#[test]
fn test_standings_are_ordered_by_points_then_exact_results() {
    let ranked = rank_entries(vec![
        entry("carla", 12, 1),
        entry("anna", 20, 2),
        entry("bert", 12, 3),
    ]);

    let order: Vec<(&str, u32)> = ranked
        .iter()
        .map(|r| (r.entry.username.as_str(), r.position))
        .collect();
    assert_eq!(order, vec![("anna", 1), ("bert", 2), ("carla", 3)]);
}

#[test]
fn test_ties_share_a_position_and_skip_the_next() {
    let ranked = rank_entries(vec![
        entry("dora", 9, 1),
        entry("emil", 15, 2),
        entry("fynn", 15, 2),
        entry("gina", 0, 0),
    ]);

    let positions: Vec<u32> = ranked.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 1, 3, 4]);
    assert_eq!(ranked[0].entry.username, "emil");
}

#[test]
fn test_ranked_entry_flattens_into_json() {
    let ranked = rank_entries(vec![entry("hana", 4, 0)]);
    let value = serde_json::to_value(&ranked[0]).unwrap();

    assert_eq!(value["position"], 1);
    assert_eq!(value["username"], "hana");
    assert_eq!(value["totalPoints"], 4);
}

#[test]
fn test_empty_league_has_empty_standings() {
    assert!(rank_entries(vec![]).is_empty());
}
