use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_ephem::{
    ALL_BODIES, AnalyticEphemeris, AyanamshaSystem, Body, Ephemeris, EphemerisSession,
};

fn body_state_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let jd = 2_441_515.365_97;

    let mut group = c.benchmark_group("body_state");
    group.bench_function("sun", |b| {
        b.iter(|| eph.body_state(Body::Sun, black_box(jd)))
    });
    group.bench_function("moon", |b| {
        b.iter(|| eph.body_state(Body::Moon, black_box(jd)))
    });
    group.bench_function("saturn", |b| {
        b.iter(|| eph.body_state(Body::Saturn, black_box(jd)))
    });
    group.bench_function("all_bodies", |b| {
        b.iter(|| {
            for body in ALL_BODIES {
                let _ = eph.body_state(body, black_box(jd));
            }
        })
    });
    group.finish();
}

fn session_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let jd = 2_441_515.365_97;

    c.bench_function("session_repeat_lookups", |b| {
        b.iter(|| {
            let mut session = EphemerisSession::new(&eph);
            for _ in 0..4 {
                for body in ALL_BODIES {
                    let _ = session.body_state(body, black_box(jd));
                }
                let _ = session.ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(jd));
            }
            session.stats()
        })
    });
}

criterion_group!(benches, body_state_bench, session_bench);
criterion_main!(benches);
