// WellScope - app/plot.rs
//
// Plot invocation management. One background thread per invocation runs the
// fixed sequence: fetch samples, derive statistics, fetch interpretation.
// Running the steps on a single thread is what guarantees the interpretation
// fetch never starts before (or concurrently with) the sample fetch it
// belongs to.
//
// A re-click or an upstream selection change bumps the generation, so a
// superseded invocation's events fail the generation check at apply time and
// never touch the display.

use crate::core::model::{PlotEvent, PlotRequest};
use crate::core::stats;
use crate::net::gateway::Gateway;
use crate::util::constants;
use std::sync::mpsc;

/// Manages plot-fetch invocations on background threads.
pub struct PlotManager {
    tx: mpsc::Sender<PlotEvent>,
    rx: mpsc::Receiver<PlotEvent>,
    generation: u64,
}

impl PlotManager {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            generation: 0,
        }
    }

    /// Start a plot invocation. Supersedes any invocation still in flight.
    pub fn request_plot(&mut self, gateway: &Gateway, request: PlotRequest) {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();
        let gateway = gateway.clone();

        std::thread::spawn(move || run_plot_fetch(&gateway, request, generation, &tx));
    }

    /// Invalidate any in-flight invocation without starting a new one
    /// (the well or curve selection changed).
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Poll for events without blocking, bounded per frame.
    pub fn poll(&self) -> Vec<PlotEvent> {
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

impl Default for PlotManager {
    fn default() -> Self {
        Self::new()
    }
}

/// One invocation's full pipeline. Runs on a background thread.
fn run_plot_fetch(
    gateway: &Gateway,
    request: PlotRequest,
    generation: u64,
    tx: &mpsc::Sender<PlotEvent>,
) {
    let samples = match gateway.get_samples(request.curve_id, request.min_depth, request.max_depth)
    {
        Ok(samples) => samples,
        Err(e) => {
            tracing::warn!(curve_id = request.curve_id, error = %e, "Sample fetch failed");
            let _ = tx.send(PlotEvent::SamplesFailed {
                generation,
                error: e.to_string(),
            });
            return;
        }
    };

    let stats = stats::compute(&samples);
    tracing::info!(
        curve = %request.mnemonic,
        samples = samples.len(),
        "Samples loaded"
    );

    let (curve_id, min_depth, max_depth) =
        (request.curve_id, request.min_depth, request.max_depth);
    if tx
        .send(PlotEvent::SamplesLoaded {
            generation,
            request,
            samples,
            stats,
        })
        .is_err()
    {
        return; // Receiver dropped (app closed); exit quietly.
    }

    // Interpretation is supplementary: its failure must not disturb the plot
    // or stats, so it is logged rather than alerted.
    match gateway.get_interpretation(curve_id, min_depth, max_depth) {
        Ok(report) => {
            let _ = tx.send(PlotEvent::InterpretationLoaded { generation, report });
        }
        Err(e) => {
            tracing::warn!(curve_id, error = %e, "Interpretation fetch failed");
            let _ = tx.send(PlotEvent::InterpretationFailed { generation });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn unreachable_gateway() -> Gateway {
        Gateway::new("http://127.0.0.1:1").unwrap()
    }

    fn make_request() -> PlotRequest {
        PlotRequest {
            curve_id: 7,
            mnemonic: "GR".to_string(),
            unit: None,
            min_depth: 1000.0,
            max_depth: 2000.0,
        }
    }

    fn wait_for_event(manager: &PlotManager) -> PlotEvent {
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
    fn test_failed_fetch_reports_issuing_generation() {
        let mut manager = PlotManager::new();
        manager.request_plot(&unreachable_gateway(), make_request());

        match wait_for_event(&manager) {
            PlotEvent::SamplesFailed { generation, .. } => {
                assert_eq!(generation, manager.generation());
            }
            other => panic!("expected SamplesFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_reclick_supersedes_previous_invocation() {
        let mut manager = PlotManager::new();
        manager.request_plot(&unreachable_gateway(), make_request());
        let first_generation = manager.generation();
        manager.request_plot(&unreachable_gateway(), make_request());

        // Both invocations complete; only the second's generation matches.
        let mut seen = Vec::new();
        let deadline = Instant::now() + Duration::from_secs(10);
        while seen.len() < 2 {
            seen.extend(manager.poll());
            assert!(Instant::now() < deadline, "expected two events");
            std::thread::sleep(Duration::from_millis(10));
        }
        for event in seen {
            match event {
                PlotEvent::SamplesFailed { generation, .. } => {
                    if generation == first_generation {
                        assert_ne!(generation, manager.generation());
                    } else {
                        assert_eq!(generation, manager.generation());
                    }
                }
                other => panic!("expected SamplesFailed, got {other:?}"),
            }
        }
    }
}
