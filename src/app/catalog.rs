// WellScope - app/catalog.rs
//
// Catalog fetch management. Runs well-list and curve-list fetches on
// background threads, sending results to the UI thread via an mpsc channel.
//
// Architecture:
//   - `CatalogManager` lives on the UI thread; workers run on background threads.
//   - Each fetch is stamped with the generation current at spawn time.
//   - `invalidate_curves` bumps the generation without spawning, so results
//     of superseded fetches are recognisably stale when they arrive.
//
// Catalog failures are soft: the worker logs them, the event carries the
// message for completeness, and the affected list degrades to empty.

use crate::core::model::CatalogEvent;
use crate::net::gateway::Gateway;
use crate::util::constants;
use std::sync::mpsc;

/// Manages well- and curve-catalog fetches on background threads.
pub struct CatalogManager {
    tx: mpsc::Sender<CatalogEvent>,
    rx: mpsc::Receiver<CatalogEvent>,
    wells_generation: u64,
    curves_generation: u64,
}

impl CatalogManager {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            wells_generation: 0,
            curves_generation: 0,
        }
    }

    /// Start a well-catalog refresh. Supersedes any refresh still in flight.
    pub fn refresh_wells(&mut self, gateway: &Gateway) {
        self.wells_generation += 1;
        let generation = self.wells_generation;
        let tx = self.tx.clone();
        let gateway = gateway.clone();

        std::thread::spawn(move || match gateway.list_wells() {
            Ok(wells) => {
                tracing::info!(count = wells.len(), "Well catalog loaded");
                let _ = tx.send(CatalogEvent::WellsLoaded { generation, wells });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Well catalog fetch failed");
                let _ = tx.send(CatalogEvent::WellsFailed {
                    generation,
                    error: e.to_string(),
                });
            }
        });
    }

    /// Start a curve-list fetch for one well. Supersedes any curve fetch
    /// still in flight.
    pub fn fetch_curves(&mut self, gateway: &Gateway, well_id: i64) {
        self.curves_generation += 1;
        let generation = self.curves_generation;
        let tx = self.tx.clone();
        let gateway = gateway.clone();

        std::thread::spawn(move || match gateway.list_curves(well_id) {
            Ok(curves) => {
                tracing::info!(well_id, count = curves.len(), "Curve list loaded");
                let _ = tx.send(CatalogEvent::CurvesLoaded { generation, curves });
            }
            Err(e) => {
                tracing::warn!(well_id, error = %e, "Curve list fetch failed");
                let _ = tx.send(CatalogEvent::CurvesFailed {
                    generation,
                    error: e.to_string(),
                });
            }
        });
    }

    /// Invalidate any in-flight curve fetch without starting a new one
    /// (the well selection was cleared).
    pub fn invalidate_curves(&mut self) {
        self.curves_generation += 1;
    }

    pub fn wells_generation(&self) -> u64 {
        self.wells_generation
    }

    pub fn curves_generation(&self) -> u64 {
        self.curves_generation
    }

    /// Poll for events without blocking, bounded per frame.
    pub fn poll(&self) -> Vec<CatalogEvent> {
        let mut events = Vec::new();
        while events.len() < constants::MAX_EVENTS_PER_FRAME {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }
        events
    }
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    /// Gateway pointing at a port nothing listens on: every call fails fast
    /// with a connection error, exercising the failure paths for real.
    fn unreachable_gateway() -> Gateway {
        Gateway::new("http://127.0.0.1:1").unwrap()
    }

    fn wait_for_event(manager: &CatalogManager) -> CatalogEvent {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(event) = manager.poll().into_iter().next() {
                return event;
            }
            assert!(Instant::now() < deadline, "no event within deadline");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_curve_fetch_failure_reports_issuing_generation() {
        let mut manager = CatalogManager::new();
        manager.fetch_curves(&unreachable_gateway(), 1);

        match wait_for_event(&manager) {
            CatalogEvent::CurvesFailed { generation, .. } => {
                assert_eq!(generation, manager.curves_generation());
            }
            other => panic!("expected CurvesFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_invalidation_supersedes_in_flight_fetch() {
        let mut manager = CatalogManager::new();
        manager.fetch_curves(&unreachable_gateway(), 1);
        manager.invalidate_curves();

        // The completion still arrives, but its generation no longer matches:
        // exactly the condition the UI uses to discard it.
        match wait_for_event(&manager) {
            CatalogEvent::CurvesFailed { generation, .. } => {
                assert_ne!(generation, manager.curves_generation());
            }
            other => panic!("expected CurvesFailed, got {other:?}"),
        }
    }
}
