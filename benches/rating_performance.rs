//! Performance benchmarks for rating, roster parsing and board operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lineup_builder::board::LineupSession;
use lineup_builder::rating::compute_overall;
use lineup_builder::roster::{parse_query_response, Roster, RosterQuery};
use lineup_builder::types::{Attribute, Player, PlayerAttributes, Position, TeamId};

fn bench_attributes(seed: usize) -> PlayerAttributes {
    let base = (seed % 60) as f64 + 30.0;
    PlayerAttributes {
        speed: base,
        shooting: base - 5.0,
        passing: base + 3.0,
        dribbling: base - 2.0,
        physical: base + 1.0,
        defending: base - 8.0,
        goalkeeping: base / 2.0,
        weak_foot: (seed % 5) as f64 + 1.0,
    }
}

fn bench_roster(size: usize) -> Vec<Player> {
    (0..size)
        .map(|i| {
            Player::new(
                format!("player_{}", i),
                Position::ALL[i % Position::ALL.len()],
                bench_attributes(i),
            )
        })
        .collect()
}

fn bench_query_body(size: usize) -> String {
    let rows: Vec<String> = (0..size)
        .map(|i| {
            let a = bench_attributes(i);
            format!(
                r#"{{"c":[{{"v":"player_{}"}},{{"v":"{}"}},{{"v":{}}},{{"v":{}}},{{"v":{}}},{{"v":{}}},{{"v":{}}},{{"v":{}}},{{"v":{}}},null,{{"v":{}}}]}}"#,
                i,
                Position::ALL[i % 4],
                a.speed,
                a.shooting,
                a.passing,
                a.dribbling,
                a.physical,
                a.defending,
                a.goalkeeping,
                a.weak_foot
            )
        })
        .collect();
    format!(
        "/*O_o*/\ngoogle.visualization.Query.setResponse({{\"table\":{{\"rows\":[{}]}}}});",
        rows.join(",")
    )
}

fn bench_rating_calculations(c: &mut Criterion) {
    let attributes = bench_attributes(17);

    c.bench_function("overall_all_positions", |b| {
        b.iter(|| {
            for position in Position::ALL {
                black_box(compute_overall(position, black_box(&attributes)));
            }
        })
    });
}

fn bench_roster_parse(c: &mut Criterion) {
    let body = bench_query_body(200);

    c.bench_function("parse_query_response_200_rows", |b| {
        b.iter(|| black_box(parse_query_response(black_box(&body))))
    });
}

fn bench_roster_query(c: &mut Criterion) {
    let players = bench_roster(500);
    let query = RosterQuery {
        search: "1".to_string(),
        sort_by: Attribute::Speed,
        ..Default::default()
    };

    c.bench_function("roster_query_500_players", |b| {
        b.iter(|| black_box(query.apply(&players).len()))
    });
}

fn bench_board_drops(c: &mut Criterion) {
    let players = bench_roster(40);

    c.bench_function("fill_both_boards", |b| {
        b.iter(|| {
            let mut session = LineupSession::new();
            session.set_roster(Roster::new(players.clone()));
            for team in TeamId::ALL {
                let slots = session.formation(team).slots();
                for (slot, label) in slots.iter().enumerate() {
                    if let Some(player) = players
                        .iter()
                        .filter(|p| p.position() == *label)
                        .nth(slot)
                    {
                        let _ = session.drop_player(team, slot, player);
                    }
                }
            }
            black_box(session.team_average(TeamId::A, Attribute::Overall))
        })
    });
}

criterion_group!(
    benches,
    bench_rating_calculations,
    bench_roster_parse,
    bench_roster_query,
    bench_board_drops
);
criterion_main!(benches);
