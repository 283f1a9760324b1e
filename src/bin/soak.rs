// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core - Soak Harness
//
// Runs the engine across many seeds for many ticks and verifies the
// simulation invariants hold on every tick: bounded progress and battery
// deltas, clamped health, feed capacity, edge-triggered completions.
// Usage: soak [runs] [ticks] [--jsonl DIR]

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use fleetops_engine::scheduler::TICK_PERIOD_MS;
use fleetops_engine::telemetry::{BATTERY_FLOOR, PROGRESS_STEP_MAX};
use fleetops_engine::{default_fleet, ChaChaUnit, FleetEngine, MissionStatus};

struct RunResult {
    seed: u64,
    pass: bool,
    violations: Vec<String>,
    completions: u32,
    final_health: f64,
    final_feed_len: usize,
}

fn run_single(seed: u64, ticks: u64, jsonl_dir: Option<&Path>) -> RunResult {
    let mut eng = FleetEngine::from_seed(
        default_fleet(),
        Box::new(ChaChaUnit::seed_from_u64(seed)),
    )
    .expect("stock seed");
    eng.mount(0);

    let mut violations = Vec::new();
    let mut prev = eng.missions().to_vec();
    let mut seen_completions: HashSet<String> = HashSet::new();
    let mut writer = jsonl_dir.map(|dir| {
        let path = dir.join(format!("seed-{}.jsonl", seed));
        BufWriter::new(File::create(path).expect("create time series file"))
    });

    let mut now = 0u64;
    for _ in 0..ticks {
        now += TICK_PERIOD_MS;
        let report = match eng.advance(now) {
            Some(r) => r,
            None => {
                violations.push(format!("tick did not fire at t={}", now));
                break;
            }
        };

        for (before, after) in prev.iter().zip(report.missions.iter()) {
            if after.progress < before.progress {
                violations.push(format!("{}: progress regressed", after.id));
            }
            if after.progress >= before.progress + PROGRESS_STEP_MAX {
                violations.push(format!("{}: progress step too large", after.id));
            }
            if before.status == MissionStatus::Active && after.battery > before.battery {
                violations.push(format!("{}: battery rose while active", after.id));
            }
            if before.status == MissionStatus::Active
                && after.battery < BATTERY_FLOOR
                && before.battery >= BATTERY_FLOOR
            {
                violations.push(format!("{}: battery fell below floor", after.id));
            }
            if before.status == MissionStatus::Completed
                && after.status != MissionStatus::Completed
            {
                violations.push(format!("{}: status regressed from completed", after.id));
            }
        }

        if !(95.0..=99.0).contains(&report.stats.system_health) {
            violations.push(format!("health out of band: {}", report.stats.system_health));
        }
        if report.feed.len() > 10 {
            violations.push(format!("feed overflow: {} entries", report.feed.len()));
        }
        for id in &report.completed_mission_ids {
            if !seen_completions.insert(id.clone()) {
                violations.push(format!("{}: duplicate completion", id));
            }
        }

        if let Some(w) = writer.as_mut() {
            let line = serde_json::json!({
                "tick": report.tick,
                "health": report.stats.system_health,
                "feed_len": report.feed.len(),
                "toasts": report.toasts.len(),
                "completions": report.completed_mission_ids,
            });
            writeln!(w, "{}", line).expect("write time series line");
        }

        prev = report.missions;
    }

    RunResult {
        seed,
        pass: violations.is_empty(),
        violations,
        completions: eng.completed_total(),
        final_health: eng.stats().system_health,
        final_feed_len: eng.feed_entries().len(),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut jsonl_dir: Option<PathBuf> = None;
    let mut positional = Vec::new();

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--jsonl" {
            i += 1;
            jsonl_dir = args.get(i).map(PathBuf::from);
        } else {
            positional.push(args[i].clone());
        }
        i += 1;
    }
    let runs: u64 = positional.first().and_then(|s| s.parse().ok()).unwrap_or(30);
    let ticks: u64 = positional.get(1).and_then(|s| s.parse().ok()).unwrap_or(2_000);

    if let Some(dir) = &jsonl_dir {
        std::fs::create_dir_all(dir).expect("create jsonl dir");
    }

    println!("soak: {} runs x {} ticks (seeds 0..{})", runs, ticks, runs);

    let mut failures = 0u64;
    for seed in 0..runs {
        let result = run_single(seed, ticks, jsonl_dir.as_deref());
        let status = if result.pass { "PASS" } else { "FAIL" };
        println!(
            "  seed {:>3} {}  completions={} health={:.2} feed={}",
            result.seed, status, result.completions, result.final_health, result.final_feed_len
        );
        if !result.pass {
            failures += 1;
            for v in result.violations.iter().take(5) {
                eprintln!("    violation: {}", v);
            }
        }
    }

    if failures > 0 {
        eprintln!("soak: {} of {} runs failed", failures, runs);
        std::process::exit(1);
    }
    println!("soak: all {} runs passed", runs);
}
