use criterion::{criterion_group, criterion_main, Criterion};
use presence_analyzer::services::aggregate::{group_by_weekday, mean_start_end};
use presence_analyzer::services::presence;
use std::hint::black_box;

const USERS: u64 = 200;
const DAYS: u64 = 250;

/// A synthetic log with `USERS * DAYS` rows plus some noise.
fn synthetic_log() -> Vec<u8> {
    let start = chrono::NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
    let mut log = String::from("user_id,date,start,end\n");
    for user in 0..USERS {
        for day in 0..DAYS {
            let date = start + chrono::Days::new(day);
            let minute = (user + day) % 60;
            log.push_str(&format!(
                "{},{},08:{:02}:00,16:{:02}:30\n",
                user, date, minute, minute
            ));
        }
        log.push_str("garbage line\n");
    }
    log.into_bytes()
}

fn benchmark_presence(c: &mut Criterion) {
    let log = synthetic_log();
    let table = presence::parse(&log);
    let days = table.get(0).expect("user 0 should be present");

    let mut group = c.benchmark_group("presence");

    group.bench_function("parse_log", |b| b.iter(|| presence::parse(black_box(&log))));

    group.bench_function("group_by_weekday", |b| {
        b.iter(|| group_by_weekday(black_box(days)).means())
    });

    group.bench_function("mean_start_end", |b| {
        b.iter(|| mean_start_end(black_box(days)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_presence);
criterion_main!(benches);
