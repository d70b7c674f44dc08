//! Blockpath Headless Validation Harness
//!
//! Runs layout generation scenarios entirely in-process — no editor,
//! no file emission, no rendering — and validates the engine's
//! guaranteed properties over each result.
//!
//! Usage:
//!   cargo run -p blockpath-simtest
//!   cargo run -p blockpath-simtest -- --verbose
//!   cargo run -p blockpath-simtest -- --dump

use blockpath_logic::catalog::ShapeCatalog;
use blockpath_logic::engine::{generate_flat, generate_patterned};
use blockpath_logic::geometry::{validate_layout, Severity};
use blockpath_logic::params::{LayoutParams, RotationMode};
use blockpath_logic::pattern::{build_pattern, PathPattern};
use blockpath_logic::segment::Segment;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let dump = std::env::args().any(|a| a == "--dump");
    println!("=== Blockpath Layout Harness ===\n");

    let mut results = Vec::new();

    // 1. Flat single-corridor mode across rotation modes
    results.extend(validate_flat_mode(verbose));

    // 2. Every named pattern, segmented mode
    results.extend(validate_patterns(verbose));

    // 3. Catalog-driven sizing
    results.extend(validate_catalog_sizing(verbose));

    // 4. Parameter clamping at the call boundary
    results.extend(validate_clamping(verbose));

    if dump {
        dump_sample_layout();
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Flat mode ────────────────────────────────────────────────────────

fn validate_flat_mode(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    for (name, mode) in [
        ("flat/no-rotation", RotationMode::None),
        ("flat/priority-straight", RotationMode::PriorityStraight),
        ("flat/full-random", RotationMode::FullRandom),
    ] {
        let params = LayoutParams {
            block_count: 40,
            rotation_mode: mode,
            ..LayoutParams::default()
        };
        let mut rng = StdRng::seed_from_u64(0xB10C);
        let blocks = generate_flat(&params, &ShapeCatalog::empty(), &mut rng);

        let overlap_errors = blockpath_logic::geometry::check_no_overlaps(&blocks);
        let grid_errors =
            blockpath_logic::geometry::check_grid_alignment(&blocks, params.grid_size);

        let passed = blocks.len() as u32 == params.block_count
            && overlap_errors.is_empty()
            && grid_errors.is_empty();
        if verbose {
            println!(
                "  {}: {} blocks, {} overlap errors, {} grid errors",
                name,
                blocks.len(),
                overlap_errors.len(),
                grid_errors.len()
            );
        }
        results.push(TestResult {
            name: name.to_string(),
            passed,
            detail: format!("{} blocks placed", blocks.len()),
        });
    }

    results
}

// ── 2. Patterns ─────────────────────────────────────────────────────────

fn validate_patterns(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    for (name, pattern) in [
        ("pattern/straight", PathPattern::Straight),
        ("pattern/right-turn", PathPattern::RightTurn),
        ("pattern/left-turn", PathPattern::LeftTurn),
        ("pattern/s-curve", PathPattern::SCurve),
        ("pattern/zigzag", PathPattern::Zigzag),
    ] {
        let params = LayoutParams {
            block_count: 24,
            rotation_mode: RotationMode::PriorityStraight,
            ..LayoutParams::default()
        }
        .clamped();

        let segments = resolved_segments(pattern, &params);
        let quota: u32 = segments.iter().map(|s| s.block_quota).sum();

        let mut rng = StdRng::seed_from_u64(0x5EED);
        let blocks = generate_patterned(pattern, &params, &ShapeCatalog::empty(), &mut rng);

        let errors = validate_layout(&blocks, &segments, params.grid_size, quota);
        let hard = errors
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .count();

        if verbose {
            for e in &errors {
                println!("  {}: [{:?}] {}", name, e.severity, e.message);
            }
        }
        results.push(TestResult {
            name: name.to_string(),
            passed: hard == 0,
            detail: format!(
                "{}/{} blocks, {} hard errors",
                blocks.len(),
                quota,
                hard
            ),
        });
    }

    results
}

fn resolved_segments(pattern: PathPattern, params: &LayoutParams) -> Vec<Segment> {
    let mut segments = build_pattern(
        pattern,
        params.block_count,
        params.segment_length,
        params.path_width,
    );
    let mut cursor = params.start;
    for s in &mut segments {
        s.resolve_from(cursor);
        cursor = s.end;
    }
    segments
}

// ── 3. Catalog sizing ───────────────────────────────────────────────────

fn validate_catalog_sizing(verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let catalog = ShapeCatalog::builtin();
    let params = LayoutParams {
        block_count: 30,
        ..LayoutParams::default()
    };
    let mut rng = StdRng::seed_from_u64(0xCA7);
    let blocks = generate_flat(&params, &catalog, &mut rng);

    // Only square (96×96) and rectangle (96×192) are enabled by default
    let all_catalog_sized = blocks
        .iter()
        .all(|b| b.size == [96.0, 96.0, 32.0] || b.size == [96.0, 192.0, 32.0]);
    let both_seen = blocks.iter().any(|b| b.size[1] == 96.0)
        && blocks.iter().any(|b| b.size[1] == 192.0);

    if verbose {
        println!(
            "  catalog/builtin: {} blocks, catalog-sized={}, both-shapes={}",
            blocks.len(),
            all_catalog_sized,
            both_seen
        );
    }
    results.push(TestResult {
        name: "catalog/builtin-sizes".to_string(),
        passed: all_catalog_sized && both_seen,
        detail: format!("{} blocks from enabled shapes", blocks.len()),
    });

    // Disabled catalog falls back to named kinds
    let mut rng = StdRng::seed_from_u64(0xCA7);
    let blocks = generate_flat(&params, &ShapeCatalog::empty(), &mut rng);
    let fallback_ok = blocks
        .iter()
        .all(|b| b.size == [96.0, 96.0, 32.0] || b.size == [128.0, 128.0, 32.0]);
    results.push(TestResult {
        name: "catalog/empty-fallback".to_string(),
        passed: fallback_ok,
        detail: "falls back to medium/large presets".to_string(),
    });

    results
}

// ── 4. Clamping ─────────────────────────────────────────────────────────

fn validate_clamping(_verbose: bool) -> Vec<TestResult> {
    let params = LayoutParams {
        block_count: 0,
        spacing: 1.0,
        path_width: 10.0,
        segment_length: 50.0,
        max_blocks_per_row: 99,
        grid_size: -4.0,
        ..LayoutParams::default()
    }
    .clamped();

    let passed = params.block_count == 1
        && params.spacing == 50.0
        && params.path_width == 128.0
        && params.segment_length == 400.0
        && params.max_blocks_per_row == 10
        && params.grid_size > 0.0;

    vec![TestResult {
        name: "params/clamping".to_string(),
        passed,
        detail: format!(
            "count={} spacing={} width={} seg={} rows={} grid={}",
            params.block_count,
            params.spacing,
            params.path_width,
            params.segment_length,
            params.max_blocks_per_row,
            params.grid_size
        ),
    }]
}

// ── Sample dump for downstream emitters ────────────────────────────────

fn dump_sample_layout() {
    let params = LayoutParams {
        block_count: 10,
        ..LayoutParams::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    let blocks = generate_patterned(
        PathPattern::SCurve,
        &params,
        &ShapeCatalog::builtin(),
        &mut rng,
    );
    match serde_json::to_string_pretty(&blocks) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("dump failed: {}", e),
    }
}
