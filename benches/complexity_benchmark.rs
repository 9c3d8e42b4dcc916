use asymptote::complexity::constant::{first_item, sum_nums};
use asymptote::complexity::linear::{create_list, linear_search, sum_all_items};
use asymptote::complexity::logarithmic::binary_search;
use asymptote::complexity::quadratic::{all_pairs, create_matrix};
use asymptote::Complexity;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Group names are `<complexity key>-<routine>`; xtask parses the prefix back.
fn group_name(class: Complexity, routine: &str) -> String {
    format!("{}-{routine}", class.key())
}

fn bench_constant(c: &mut Criterion) {
    let mut group = c.benchmark_group(group_name(Complexity::Constant, "first_item"));
    for size in [1_000usize, 10_000, 100_000] {
        let nums = create_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &nums, |b, nums| {
            b.iter(|| black_box(first_item(black_box(nums))));
        });
    }
    group.finish();

    c.bench_function("constant-sum_nums", |b| {
        b.iter(|| black_box(sum_nums(black_box(4u64), black_box(5u64))));
    });
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group(group_name(Complexity::Linear, "sum_all_items"));
    for size in [1_000usize, 10_000, 100_000] {
        let nums = create_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &nums, |b, nums| {
            b.iter(|| black_box(sum_all_items(black_box(nums))));
        });
    }
    group.finish();

    let mut group = c.benchmark_group(group_name(Complexity::Linear, "linear_search"));
    for size in [1_000usize, 10_000, 100_000] {
        let nums = create_list(size);
        // Worst case: the target is missing.
        group.bench_with_input(BenchmarkId::from_parameter(size), &nums, |b, nums| {
            b.iter(|| black_box(linear_search(black_box(nums), black_box(&usize::MAX))));
        });
    }
    group.finish();

    let mut group = c.benchmark_group(group_name(Complexity::Linear, "create_list"));
    for size in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(create_list(black_box(size))));
        });
    }
    group.finish();
}

fn bench_logarithmic(c: &mut Criterion) {
    let mut group = c.benchmark_group(group_name(Complexity::Logarithmic, "binary_search"));
    for size in [1_000usize, 100_000, 10_000_000] {
        let nums = create_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &nums, |b, nums| {
            b.iter(|| black_box(binary_search(black_box(nums), black_box(&usize::MAX))));
        });
    }
    group.finish();
}

fn bench_quadratic(c: &mut Criterion) {
    let mut group = c.benchmark_group(group_name(Complexity::Quadratic, "create_matrix"));
    for size in [100usize, 200, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(create_matrix(black_box(size))));
        });
    }
    group.finish();

    let mut group = c.benchmark_group(group_name(Complexity::Quadratic, "all_pairs"));
    for size in [100usize, 200, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| all_pairs(black_box(size)).fold(0usize, |acc, (j, i)| acc ^ j ^ i));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_constant,
    bench_linear,
    bench_logarithmic,
    bench_quadratic
);
criterion_main!(benches);
