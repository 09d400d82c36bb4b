//! Benchmark tests for the tree walker

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rusty_tree::tree::{render_tree, ExcludeSet, RenderOptions};
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

/// Create a benchmark directory with the given number of files spread over
/// the given number of subdirectories
fn create_benchmark_dir(file_count: usize, dir_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let files_per_dir = if dir_count > 0 {
        file_count / dir_count
    } else {
        file_count
    };

    for d in 0..dir_count {
        let subdir = root.join(format!("dir{}", d));
        fs::create_dir(&subdir).unwrap();

        for f in 0..files_per_dir {
            let mut file = File::create(subdir.join(format!("file{}.txt", f))).unwrap();
            file.write_all(&vec![b'x'; 128]).unwrap();
        }
    }

    dir
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [100, 500, 1000].iter() {
        let dir = create_benchmark_dir(*size, 10);
        let exclude = ExcludeSet::defaults();
        let dirs_only = RenderOptions::new();
        let with_files = RenderOptions::new().with_files(true);

        group.bench_with_input(BenchmarkId::new("dirs_only", size), size, |b, _| {
            b.iter(|| {
                let mut out = Vec::new();
                render_tree(&mut out, black_box(dir.path()), &dirs_only, &exclude).unwrap();
                out
            })
        });

        group.bench_with_input(BenchmarkId::new("with_files", size), size, |b, _| {
            b.iter(|| {
                let mut out = Vec::new();
                render_tree(&mut out, black_box(dir.path()), &with_files, &exclude).unwrap();
                out
            })
        });
    }

    group.finish();
}

fn benchmark_deep_render(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let mut path = dir.path().to_path_buf();
    for i in 0..50 {
        path = path.join(format!("level{}", i));
        fs::create_dir(&path).unwrap();
    }

    let exclude = ExcludeSet::defaults();
    let options = RenderOptions::new();

    c.bench_function("render_deep_nesting", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            render_tree(&mut out, black_box(dir.path()), &options, &exclude).unwrap();
            out
        })
    });
}

criterion_group!(benches, benchmark_render, benchmark_deep_render);
criterion_main!(benches);
