use criterion::{black_box, criterion_group, criterion_main, Criterion};
use puckstats::model::{Situation, SkaterStatRecord};
use puckstats::stats::{
    build_histogram_bins, skater_career_totals, skater_season_rows, SortState,
};

/// Build a long multi-team career: 20 seasons, every situation, with playoffs
fn create_sample_records() -> Vec<SkaterStatRecord> {
    let situations = [
        Situation::All,
        Situation::FiveOnFive,
        Situation::PowerPlay,
        Situation::PenaltyKill,
        Situation::Other,
    ];
    let mut records = Vec::new();
    for season in 2004..2024 {
        let team = if season % 2 == 0 { "BOS" } else { "VAN" };
        for (i, situation) in situations.iter().enumerate() {
            for is_playoffs in [false, true] {
                let gp = if is_playoffs { 12 } else { 82 };
                records.push(SkaterStatRecord {
                    season,
                    team: team.to_string(),
                    situation: *situation,
                    is_playoffs,
                    games_played: gp,
                    ice_time_seconds: gp as f64 * (300.0 + 100.0 * i as f64),
                    goals: (gp / 4) + i as u32,
                    assists: (gp / 3) + i as u32,
                    points: (gp / 4) + (gp / 3) + 2 * i as u32,
                    shots: gp * 2,
                    expected_goals: gp as f64 * 0.25,
                    corsi_for_pct: Some(48.0 + i as f64),
                });
            }
        }
    }
    records
}

fn bench_skater_season_rows(c: &mut Criterion) {
    let records = create_sample_records();

    c.bench_function("skater_season_rows_all", |b| {
        b.iter(|| skater_season_rows(black_box(&records), Situation::All))
    });

    c.bench_function("skater_season_rows_5on5", |b| {
        b.iter(|| skater_season_rows(black_box(&records), Situation::FiveOnFive))
    });
}

fn bench_skater_career_totals(c: &mut Criterion) {
    let records = create_sample_records();
    let rows = skater_season_rows(&records, Situation::All);

    c.bench_function("skater_career_totals", |b| {
        b.iter(|| skater_career_totals(black_box(&rows)))
    });
}

fn bench_histogram(c: &mut Criterion) {
    // Roughly a full league of per-60 rates
    let values: Vec<f64> = (0..10_000).map(|i| (i % 400) as f64 / 100.0).collect();

    c.bench_function("build_histogram_bins_10k", |b| {
        b.iter(|| build_histogram_bins(black_box(&values), 15))
    });
}

fn bench_sort_order(c: &mut Criterion) {
    let records = create_sample_records();
    let rows = skater_season_rows(&records, Situation::All);
    let mut sort: SortState<usize> = SortState::new();
    sort.select(0);

    c.bench_function("sort_order_20_rows", |b| {
        b.iter(|| {
            let mut rows = rows.clone();
            sort.order(black_box(&mut rows), |row, _| Some(row.points as f64));
        })
    });
}

criterion_group!(
    benches,
    bench_skater_season_rows,
    bench_skater_career_totals,
    bench_histogram,
    bench_sort_order
);
criterion_main!(benches);
