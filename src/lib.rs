// Copyright 2026 Hypermesh Foundation. All rights reserved.
// FleetOps Mission Control Simulation Core

pub mod activity;
pub mod engine;
pub mod filter;
pub mod health;
pub mod rng;
pub mod scheduler;
pub mod seed;
pub mod telemetry;
pub mod toast;
pub mod types;

pub use engine::FleetEngine;
pub use filter::StatusFilter;
pub use rng::{ChaChaUnit, ScriptedUnit, UnitSource};
pub use seed::{default_fleet, FleetSeed, SeedError};
pub use types::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl FleetEngine {
    /// Build the stock demo fleet with a reproducible randomness seed.
    #[wasm_bindgen(constructor)]
    pub fn new(rng_seed: u64) -> FleetEngine {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let rng = Box::new(rng::ChaChaUnit::seed_from_u64(rng_seed));
        // The stock seed is validated by the crate's own tests.
        FleetEngine::from_seed(seed::default_fleet(), rng)
            .expect("stock fleet seed is valid")
    }

    /// Arm the tick scheduler at the host's current time (dashboard mount).
    pub fn start(&mut self, now_ms: f64) {
        self.mount(now_ms as u64);
    }

    /// Tear down: no further ticks fire. In-flight toast deadlines keep
    /// expiring on later `advance` calls without faulting.
    pub fn stop(&mut self) {
        self.unmount();
    }

    /// Drive the clock. Call at any cadence (e.g. from rAF or a coarse
    /// interval); returns a `TickReport` when a simulation tick ran,
    /// otherwise `null`.
    #[wasm_bindgen(js_name = advance)]
    pub fn advance_clock(&mut self, now_ms: f64) -> JsValue {
        match self.advance(now_ms as u64) {
            Some(report) => {
                #[cfg(target_arch = "wasm32")]
                for id in &report.completed_mission_ids {
                    log(&format!("mission {} completed on tick {}", id, report.tick));
                }
                serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
            }
            None => JsValue::NULL,
        }
    }

    /// Force one tick immediately, bypassing the scheduler (debug panels).
    pub fn tick(&mut self, now_ms: f64) -> JsValue {
        let report = self.tick_core(now_ms as u64);
        serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
    }

    /// Enqueue a toast. `kind` is "success", "warning" or "info"
    /// (anything else falls back to info). Returns the toast id.
    pub fn toast(&mut self, now_ms: f64, message: &str, kind: &str) -> u64 {
        let kind = match kind {
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        };
        self.show_toast(now_ms as u64, message, kind)
    }

    /// Dismiss a toast by id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.dismiss_toast(id);
    }

    /// Filtered mission projection. `status` is "all" or a status name.
    pub fn filter(&self, query: &str, status: &str) -> JsValue {
        let hits = self.filtered_missions(query, StatusFilter::parse(status));
        serde_wasm_bindgen::to_value(&hits).unwrap_or(JsValue::NULL)
    }

    pub fn get_missions(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.missions()).unwrap_or(JsValue::NULL)
    }

    pub fn get_assets(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.assets()).unwrap_or(JsValue::NULL)
    }

    pub fn get_alerts(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.alerts()).unwrap_or(JsValue::NULL)
    }

    pub fn get_stats(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.stats()).unwrap_or(JsValue::NULL)
    }

    pub fn get_feed(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.feed_entries()).unwrap_or(JsValue::NULL)
    }

    pub fn get_toasts(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.active_toasts()).unwrap_or(JsValue::NULL)
    }

    /// Completion crossings observed since construction.
    pub fn completions(&self) -> u32 {
        self.completed_total()
    }
}
