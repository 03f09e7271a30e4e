use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jataka_ephem::MeanElementEphemeris;
use jataka_time::BirthMoment;
use jataka_vedic_base::{
    AscendantFormula, DashaPolicy, ascendant, ayanamsa_deg, build_chart, current_mahadasha,
    mean_nodes, nakshatra_from_longitude, rashi_from_longitude,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn correction_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
    let at = date.and_hms_opt(12, 0, 0).unwrap();

    let mut group = c.benchmark_group("corrections");
    group.bench_function("ayanamsa", |b| b.iter(|| ayanamsa_deg(black_box(date))));
    group.bench_function("mean_nodes", |b| b.iter(|| mean_nodes(black_box(&at))));
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = BirthMoment::from_calendar(1990, 1, 15, 12, 0, 28.7041, 77.1025).unwrap();
    let now = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let provider = MeanElementEphemeris;

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_chart", |b| {
        b.iter(|| build_chart(&provider, black_box(&birth)))
    });
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant(&provider, black_box(&birth), AscendantFormula::Compatible))
    });
    group.bench_function("current_mahadasha", |b| {
        b.iter(|| {
            current_mahadasha(
                black_box(45.0),
                &birth.datetime(),
                &now,
                DashaPolicy::default(),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, correction_bench, chart_bench);
criterion_main!(benches);
