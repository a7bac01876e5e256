//! Benchmark for effect types: IO, Reader, State, Store, Writer, ReaderIO,
//! Predicate.
//!
//! Measures the composition and run overhead of the closure-backed effect
//! types.

use criterion::{Criterion, criterion_group, criterion_main};
use kindred::effect::{IO, Predicate, Reader, ReaderIO, State, Store, Writer};
use std::hint::black_box;

// =============================================================================
// IO Benchmarks
// =============================================================================

fn benchmark_io_pure(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_pure");

    group.bench_function("pure", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(black_box(42));
            let result = io.run_unsafe();
            black_box(result)
        });
    });

    group.bench_function("new", |bencher| {
        bencher.iter(|| {
            let io = IO::new(|| 42);
            let result = io.run_unsafe();
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_io_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_map_chain");

    // Single map
    group.bench_function("map_1", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1).fmap(|x| x + 1);
            black_box(io.run_unsafe())
        });
    });

    // Chain of 5 maps
    group.bench_function("map_5", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1)
                .fmap(|x| x + 1)
                .fmap(|x| x * 2)
                .fmap(|x| x + 3)
                .fmap(|x| x * 4)
                .fmap(|x| x + 5);
            black_box(io.run_unsafe())
        });
    });

    // Chain of 10 maps
    group.bench_function("map_10", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1)
                .fmap(|x| x + 1)
                .fmap(|x| x * 2)
                .fmap(|x| x + 3)
                .fmap(|x| x * 4)
                .fmap(|x| x + 5)
                .fmap(|x| x - 1)
                .fmap(|x| x / 2)
                .fmap(|x| x + 7)
                .fmap(|x| x * 8)
                .fmap(|x| x - 9);
            black_box(io.run_unsafe())
        });
    });

    group.finish();
}

fn benchmark_io_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_flat_map_chain");

    // Single flat_map
    group.bench_function("flat_map_1", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1).flat_map(|x| IO::pure(x + 1));
            black_box(io.run_unsafe())
        });
    });

    // Chain of 5 flat_maps
    group.bench_function("flat_map_5", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1)
                .flat_map(|x| IO::pure(x + 1))
                .flat_map(|x| IO::pure(x * 2))
                .flat_map(|x| IO::pure(x + 3))
                .flat_map(|x| IO::pure(x * 4))
                .flat_map(|x| IO::pure(x + 5));
            black_box(io.run_unsafe())
        });
    });

    // Chain of 10 flat_maps
    group.bench_function("flat_map_10", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1)
                .flat_map(|x| IO::pure(x + 1))
                .flat_map(|x| IO::pure(x * 2))
                .flat_map(|x| IO::pure(x + 3))
                .flat_map(|x| IO::pure(x * 4))
                .flat_map(|x| IO::pure(x + 5))
                .flat_map(|x| IO::pure(x - 1))
                .flat_map(|x| IO::pure(x / 2))
                .flat_map(|x| IO::pure(x + 7))
                .flat_map(|x| IO::pure(x * 8))
                .flat_map(|x| IO::pure(x - 9));
            black_box(io.run_unsafe())
        });
    });

    group.finish();
}

// =============================================================================
// Reader Benchmarks
// =============================================================================

fn benchmark_reader_run(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reader_run");

    // Simple reader
    group.bench_function("simple", |bencher| {
        bencher.iter(|| {
            let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
            let result = reader.run(black_box(21));
            black_box(result)
        });
    });

    // Reader::ask
    group.bench_function("ask", |bencher| {
        bencher.iter(|| {
            let reader: Reader<i32, i32> = Reader::ask();
            let result = reader.run(black_box(42));
            black_box(result)
        });
    });

    // Reader::pure
    group.bench_function("pure", |bencher| {
        bencher.iter(|| {
            let reader: Reader<i32, i32> = Reader::pure(black_box(42));
            let result = reader.run(0);
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_reader_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reader_chain");

    // Chain of flat_maps
    group.bench_function("flat_map_chain", |bencher| {
        bencher.iter(|| {
            let reader: Reader<i32, i32> = Reader::ask()
                .flat_map(|x: i32| Reader::pure(x + 1))
                .flat_map(|x| Reader::pure(x * 2))
                .flat_map(|x| Reader::pure(x + 3));
            let result = reader.run(black_box(10));
            black_box(result)
        });
    });

    // fmap chain
    group.bench_function("fmap_chain", |bencher| {
        bencher.iter(|| {
            let reader: Reader<i32, i32> = Reader::ask()
                .fmap(|x| x + 1)
                .fmap(|x| x * 2)
                .fmap(|x| x + 3);
            let result = reader.run(black_box(10));
            black_box(result)
        });
    });

    // local
    group.bench_function("local", |bencher| {
        bencher.iter(|| {
            let reader: Reader<i32, i32> = Reader::ask();
            let local_reader = Reader::local(|x: i32| x * 2, reader);
            let result = local_reader.run(black_box(21));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// State Benchmarks
// =============================================================================

fn benchmark_state_run(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_run");

    // Simple state
    group.bench_function("simple", |bencher| {
        bencher.iter(|| {
            let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
            let (result, final_state) = state.run(black_box(10));
            black_box((result, final_state))
        });
    });

    // State::get
    group.bench_function("get", |bencher| {
        bencher.iter(|| {
            let state: State<i32, i32> = State::get();
            let (result, final_state) = state.run(black_box(42));
            black_box((result, final_state))
        });
    });

    // State::put
    group.bench_function("put", |bencher| {
        bencher.iter(|| {
            let state: State<i32, ()> = State::put(black_box(100));
            let (result, final_state) = state.run(0);
            black_box((result, final_state))
        });
    });

    group.finish();
}

fn benchmark_state_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_chain");

    // Chain of operations simulating a counter
    group.bench_function("counter_chain", |bencher| {
        bencher.iter(|| {
            let state = State::modify(|count: i32| count + 1)
                .then(State::modify(|count: i32| count + 1))
                .then(State::modify(|count: i32| count + 1))
                .then(State::get());
            let (result, final_state) = state.run(black_box(0));
            black_box((result, final_state))
        });
    });

    // flat_map chain
    group.bench_function("flat_map_chain", |bencher| {
        bencher.iter(|| {
            let state: State<i32, i32> = State::get()
                .flat_map(|current: i32| State::put(current + 1).then(State::pure(current)))
                .flat_map(|old| State::get().fmap(move |new| old + new));
            let (result, final_state) = state.run(black_box(10));
            black_box((result, final_state))
        });
    });

    // Traversal of a small collection
    group.bench_function("traverse_vec_100", |bencher| {
        let items: Vec<i32> = (0..100).collect();
        bencher.iter(|| {
            let traversed: State<i32, Vec<i32>> =
                State::traverse_vec(items.clone(), |item| {
                    State::new(move |count: i32| (item + count, count + 1))
                });
            let (results, final_count) = traversed.run(black_box(0));
            black_box((results, final_count))
        });
    });

    group.finish();
}

// =============================================================================
// Store Benchmarks
// =============================================================================

fn benchmark_store(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("store");

    group.bench_function("extract", |bencher| {
        let store = Store::new(|position: i32| position * 2, 21);
        bencher.iter(|| black_box(store.extract()));
    });

    group.bench_function("seek_then_extract", |bencher| {
        let store = Store::new(|position: i32| position * 2, 0);
        bencher.iter(|| {
            let moved = store.seek(black_box(21));
            black_box(moved.extract())
        });
    });

    group.bench_function("extend_window", |bencher| {
        let store = Store::new(|position: i32| position * position, 3);
        bencher.iter(|| {
            let smoothed = store.extend(|window| {
                (window.extract() + window.peeks(|position| position + 1)) / 2
            });
            black_box(smoothed.extract())
        });
    });

    group.bench_function("experiment_vec_16", |bencher| {
        let store = Store::new(|position: i32| position * 2, 0);
        bencher.iter(|| {
            let values = store.experiment_vec(|position| {
                (0..16).map(|offset| position + offset).collect()
            });
            black_box(values)
        });
    });

    group.finish();
}

// =============================================================================
// Writer Benchmarks
// =============================================================================

fn benchmark_writer(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer");

    group.bench_function("flat_map_chain", |bencher| {
        bencher.iter(|| {
            let writer = Writer::<Vec<i32>, i32>::pure(1)
                .flat_map(|x| Writer::new(x + 1, vec![x]))
                .flat_map(|x| Writer::new(x * 2, vec![x]))
                .flat_map(|x| Writer::new(x + 3, vec![x]));
            black_box(writer.run())
        });
    });

    group.bench_function("tell_chain_10", |bencher| {
        bencher.iter(|| {
            let mut writer: Writer<Vec<i32>, ()> = Writer::tell(vec![0]);
            for step in 1..10 {
                writer = writer.then(Writer::tell(vec![step]));
            }
            black_box(writer.run())
        });
    });

    group.finish();
}

// =============================================================================
// ReaderIO Benchmarks
// =============================================================================

fn benchmark_reader_io(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reader_io");

    group.bench_function("ask_then_run", |bencher| {
        let computation: ReaderIO<i32, i32> = ReaderIO::ask();
        bencher.iter(|| black_box(computation.run(black_box(42)).run_unsafe()));
    });

    group.bench_function("flat_map_chain", |bencher| {
        let computation: ReaderIO<i32, i32> = ReaderIO::ask()
            .flat_map(|x: i32| ReaderIO::pure(x + 1))
            .flat_map(|x| ReaderIO::pure(x * 2))
            .flat_map(|x| ReaderIO::pure(x + 3));
        bencher.iter(|| black_box(computation.run(black_box(10)).run_unsafe()));
    });

    group.bench_function("local", |bencher| {
        let computation: ReaderIO<i32, i32> = ReaderIO::local(|x: i32| x * 2, ReaderIO::ask());
        bencher.iter(|| black_box(computation.run(black_box(21)).run_unsafe()));
    });

    group.finish();
}

// =============================================================================
// Predicate Benchmarks
// =============================================================================

fn benchmark_predicate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicate");

    group.bench_function("and_or_not", |bencher| {
        let positive = Predicate::new(|value: &i32| *value > 0);
        let even = Predicate::new(|value: &i32| value % 2 == 0);
        let combined = positive.and(even).not();
        bencher.iter(|| black_box(combined.test(&black_box(41))));
    });

    group.bench_function("contramap", |bencher| {
        let long_enough =
            Predicate::new(|length: &usize| *length > 3).contramap(|text: &String| text.len());
        let input = "hello".to_string();
        bencher.iter(|| black_box(long_enough.test(&input)));
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_io_pure,
    benchmark_io_map_chain,
    benchmark_io_flat_map_chain,
    benchmark_reader_run,
    benchmark_reader_chain,
    benchmark_state_run,
    benchmark_state_chain,
    benchmark_store,
    benchmark_writer,
    benchmark_reader_io,
    benchmark_predicate
);

criterion_main!(benches);
