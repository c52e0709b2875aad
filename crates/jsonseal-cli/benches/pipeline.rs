//! Benchmark harness: measures normalize → write → hash performance.
//!
//! Run with: cargo bench -p jsonseal-cli
//!
//! Uses a plain `Instant` loop rather than criterion.

use std::path::Path;
use std::time::Instant;

use jsonseal_digest::{sha256_file, sha256_file_chunked};
use jsonseal_render::PrettyJsonWriter;

/// Build a JSON document with `record_count` records.
fn synthetic_document(record_count: usize) -> String {
    let records: Vec<String> = (0..record_count)
        .map(|i| {
            format!(
                r#"{{"id":{i},"name":"record_{i}","tags":["a{i}","b{i}"],"meta":{{"score":{}.5,"active":{}}}}}"#,
                i % 97,
                i % 2 == 0
            )
        })
        .collect();
    format!(r#"{{"version":1,"records":[{}]}}"#, records.join(","))
}

fn bench_write(path: &Path, content: &str) -> u64 {
    PrettyJsonWriter::new().write_file(path, content).unwrap()
}

fn run_benchmark(label: &str, record_count: usize) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.json");
    let content = synthetic_document(record_count);
    let iterations = 5;

    // Warmup
    let bytes = bench_write(&path, &content);
    let _ = sha256_file(&path).unwrap();

    // Normalize benchmark (in memory)
    let writer = PrettyJsonWriter::new();
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = writer.normalize(&content).unwrap();
    }
    let normalize_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    // Write benchmark
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_write(&path, &content);
    }
    let write_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    // Hash benchmark across read sizes
    let mut hash_ms = Vec::new();
    for chunk_size in [512, 4096, 65_536] {
        let start = Instant::now();
        for _ in 0..iterations {
            let _ = sha256_file_chunked(&path, chunk_size).unwrap();
        }
        hash_ms.push((
            chunk_size,
            start.elapsed().as_millis() as f64 / iterations as f64,
        ));
    }

    println!("{label}:");
    println!("  Input:     {} bytes", content.len());
    println!("  Output:    {bytes} bytes");
    println!("  Normalize: {normalize_ms:.1}ms");
    println!("  Write:     {write_ms:.1}ms");
    for (chunk_size, ms) in hash_ms {
        println!("  Hash/{chunk_size:<6} {ms:.1}ms");
    }
    println!();
}

fn main() {
    println!("jsonseal Pipeline Benchmarks");
    println!("============================\n");

    run_benchmark("Small document (100 records)", 100);
    run_benchmark("Medium document (5000 records)", 5_000);
    run_benchmark("Large document (100000 records)", 100_000);

    println!("Done.");
}
