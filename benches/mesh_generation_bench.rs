//! Benchmarks for mesh generation and file output.
//!
//! Run with: `cargo bench --bench mesh_generation_bench`
//!
//! Add `--features parallel` to time the Rayon stencil path.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use shaw_mesh::io::{write_coeffs, write_graph};
use shaw_mesh::mesh::DofPool;
use shaw_mesh::{MeshConfig, PolarMesh, VarGrouping};

const RESOLUTIONS: [(usize, usize); 3] = [(181, 101), (721, 201), (1441, 401)];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for grouping in [VarGrouping::TwoGroups, VarGrouping::ThreeGroups] {
        for (n_theta, n_r) in RESOLUTIONS {
            let config = MeshConfig::default()
                .with_resolution(n_theta, n_r)
                .with_grouping(grouping);
            let label = match grouping {
                VarGrouping::TwoGroups => "two_groups",
                VarGrouping::ThreeGroups => "three_groups",
            };
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}x{}", n_theta, n_r)),
                &config,
                |b, config| b.iter(|| PolarMesh::generate(black_box(config))),
            );
        }
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let mesh = PolarMesh::generate(&MeshConfig::default().with_resolution(721, 201))
        .expect("valid benchmark mesh");
    let graphs = mesh.graphs().as_two_groups().expect("two-group mesh");
    let vp = mesh.dof_table(DofPool::Vp).expect("vp table");
    let sp = mesh.dof_table(DofPool::Sp).expect("sp table");

    group.bench_function("graph_vp", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(vp.len() * 80);
            write_graph(&mut buf, vp, &graphs.vp).expect("write");
            black_box(buf.len())
        })
    });

    group.bench_function("graph_sp", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(sp.len() * 80);
            write_graph(&mut buf, sp, &graphs.sp).expect("write");
            black_box(buf.len())
        })
    });

    group.bench_function("coeff_vp", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            write_coeffs(&mut buf, &graphs.vp_coeffs).expect("write");
            black_box(buf.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_serialize);
criterion_main!(benches);
