use criterion::{criterion_group, criterion_main, Criterion};
use gnb_registry::registry::ue_view::{ran_ue_list, summarize, xn_ue_list};
use gnb_registry::{GnbRecord, RanUe, XnUe};

fn make_fleet() -> Vec<GnbRecord> {
    (0..50)
        .map(|g| {
            let mut rec = GnbRecord::new(format!("gnb-{g}"), format!("site-{g}"));
            for u in 0..200 {
                rec.ran_ue_list.push(RanUe::new(format!("imsi-2089300{g:03}{u:05}"), u % 3 == 0));
            }
            for u in 0..20 {
                rec.xn_ue_list.push(XnUe::new(format!("imsi-2089301{g:03}{u:05}")));
            }
            rec
        })
        .collect()
}

fn bench_ue_view(c: &mut Criterion) {
    let fleet = make_fleet();
    c.bench_function("ran_ue_list", |b| b.iter(|| ran_ue_list(&fleet)));
    c.bench_function("xn_ue_list", |b| b.iter(|| xn_ue_list(&fleet)));
    c.bench_function("summarize", |b| b.iter(|| summarize(&fleet)));
}

criterion_group!(benches, bench_ue_view);
criterion_main!(benches);
