use criterion::*;
use link_rank::{
    page_rank::{IteratedPageRank, SampledPageRank},
    Config, LinkGraph,
};
use rand::{prelude::*, rngs::SmallRng};

criterion_main!(benches);
criterion_group!(benches, ring, star, random_graph);

fn ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ring");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 40usize, 160usize, 640usize];
    for n in SIZES.iter() {
        let g: LinkGraph<usize> = (0..*n).map(|u| (u, [(u + 1) % *n])).collect();
        bench_both(&mut group, &g, *n);
    }
    group.finish();
}

fn star(c: &mut Criterion) {
    let mut group = c.benchmark_group("Star");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    const SIZES: &[usize] = &[10usize, 40usize, 160usize, 640usize];
    for n in SIZES.iter() {
        // page 0 is a dangling hub
        let g: LinkGraph<usize> = (0..*n)
            .map(|u| (u, if u == 0 { vec![] } else { vec![0] }))
            .collect();
        bench_both(&mut group, &g, *n);
    }
    group.finish();
}

fn random_graph(c: &mut Criterion) {
    const V_SIZE: &[usize] = &[10usize, 40usize, 160usize, 640usize];
    const E_POW: &[f64] = &[1.0, 1.25, 1.5];
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut rng = SmallRng::seed_from_u64(3407);
    for e_m in E_POW.iter() {
        let mut group = c.benchmark_group(format!("RandomGraph_{e_m:.2}"));
        group.plot_config(plot_config.clone());
        for v_n in V_SIZE.iter() {
            let e_n = (*v_n as f64).powf(*e_m) as usize;
            let g = gen_random_graph(&mut rng, *v_n, e_n);
            bench_both(&mut group, &g, *v_n);
        }
        group.finish();
    }
}

fn bench_both<M: measurement::Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    g: &LinkGraph<usize>,
    n: usize,
) {
    let cfg = Config::default();
    group.bench_with_input(BenchmarkId::new("Sampled", n), &n, |b, _| {
        let spr = SampledPageRank::new(g, &cfg).unwrap();
        let mut rng = SmallRng::seed_from_u64(3407);
        b.iter(|| black_box(spr.calc(&mut rng)))
    });
    group.bench_with_input(BenchmarkId::new("Iterated", n), &n, |b, _| {
        b.iter(|| {
            let ipr = IteratedPageRank::new(g, &cfg).unwrap();
            black_box(ipr.calc().unwrap())
        })
    });
}

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn gen_random_graph<R>(rng: &mut R, v_n: usize, e_n: usize) -> LinkGraph<usize>
where
    R: SeedableRng + Rng,
{
    let vs: Vec<_> = (0..v_n).collect();
    let mut links: Vec<(usize, Vec<usize>)> = vs.iter().map(|u| (*u, vec![])).collect();
    for _ in 0..e_n {
        let u = *vs.choose(rng).unwrap();
        let v = *vs.choose(rng).unwrap();
        links[u].1.push(v);
    }
    links.into_iter().collect()
}
