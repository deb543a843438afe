//! Benchmarks for lowering method bodies and running the result.
//!
//! ```bash
//! cargo bench --bench emit_benchmarks
//! ```

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hotscript::{IrBuilder, MethodDecl, Runtime};
use std::hint::black_box;

/// `count` statements mixing locals, store writes and conversions.
fn mixed_body<'ast>(ir: IrBuilder<'ast>, count: usize) -> MethodDecl<'ast> {
    let mut body = Vec::with_capacity(count);
    for i in 0..count {
        let name = format!("v{}", i % 64);
        let name = name.as_str();
        let stmt = match i % 4 {
            0 => ir.assign_stmt(ir.var(name), ir.int(i as i32)),
            1 => ir.assign_stmt(ir.var(name), ir.string("42")),
            2 => ir.assign_stmt(ir.indexed(ir.null(), ir.string(name)), ir.long(i as i64)),
            _ => ir.assign_stmt(
                ir.var(name),
                ir.indexed(ir.null(), ir.string("shared")),
            ),
        };
        body.push(stmt);
    }
    ir.method("bench", &body)
}

fn array_body<'ast>(ir: IrBuilder<'ast>, width: usize) -> MethodDecl<'ast> {
    let items: Vec<_> = (0..width).map(|i| ir.int(i as i32)).collect();
    let array = ir.array("string", &items);
    ir.method("array", &[ir.declare("a", array)])
}

fn compile_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    let runtime = Runtime::new();

    for size in [16usize, 256, 4096] {
        let arena = Bump::new();
        let method = mixed_body(IrBuilder::new(&arena), size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("mixed", size), &method, |b, method| {
            b.iter(|| black_box(runtime.compile(black_box(method)).unwrap().instructions.len()));
        });
    }

    let arena = Bump::new();
    let method = array_body(IrBuilder::new(&arena), 512);
    group.bench_function("array_literal_512", |b| {
        b.iter(|| black_box(runtime.compile(black_box(&method)).unwrap()));
    });

    group.finish();
}

fn execute_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");

    for size in [256usize, 4096] {
        let arena = Bump::new();
        let method = mixed_body(IrBuilder::new(&arena), size);
        let mut runtime = Runtime::new();
        let compiled = runtime.compile(&method).unwrap();
        group.throughput(Throughput::Elements(compiled.instructions.len() as u64));
        group.bench_function(BenchmarkId::new("mixed", size), |b| {
            b.iter(|| black_box(runtime.run(&compiled, Vec::new()).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, compile_benchmarks, execute_benchmarks);
criterion_main!(benches);
