use crate::core::base::*;

use log::*;
use std::time::Duration;

/// Per frame statistics reported by the render loop.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStats {
    pub index: u64,
    pub device: String,
    pub primitives: usize,
    pub drawn: u32,
    pub elapsed: Duration,
}

impl FrameStats {
    pub fn points_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            return self.primitives as f64 / secs;
        }
        return 0.0;
    }
}

/// Receives render loop events. Injected into the loop instead of logging
/// from it directly.
pub trait RenderObserver {
    fn on_start(&mut self, _primitives: usize, _bounds: &Bounds3f) {}
    fn on_frame(&mut self, stats: &FrameStats);
    fn on_finish(&mut self, _frames: u64) {}
}

/// Reports through the `log` facade. Frame timings are logged every frame
/// in batch runs and at most once per `interval` in interactive ones.
pub struct LogObserver {
    interval: Option<Duration>,
    since_report: Duration,
}

impl LogObserver {
    pub fn new() -> Self {
        LogObserver {
            interval: None,
            since_report: Duration::ZERO,
        }
    }

    pub fn with_interval(interval: Duration) -> Self {
        LogObserver {
            interval: Some(interval),
            since_report: Duration::ZERO,
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderObserver for LogObserver {
    fn on_start(&mut self, primitives: usize, bounds: &Bounds3f) {
        info!("Point bounds: {}", bounds);
        info!("BB size: {}", bounds.diagonal().length());
        info!("Rendering {} primitives", primitives);
    }

    fn on_frame(&mut self, stats: &FrameStats) {
        match self.interval {
            None => {
                info!(
                    "Splat time: {:?} points/sec: {:.0}",
                    stats.elapsed,
                    stats.points_per_second()
                );
                info!("Splatted point count: {}", stats.drawn);
            }
            Some(interval) => {
                self.since_report += stats.elapsed;
                if self.since_report >= interval {
                    info!(
                        "[{}] frame {} splat time: {:?} points/sec: {:.0}",
                        stats.device,
                        stats.index,
                        stats.elapsed,
                        stats.points_per_second()
                    );
                    self.since_report = Duration::ZERO;
                }
            }
        }
    }

    fn on_finish(&mut self, frames: u64) {
        info!("Rendered {} frames", frames);
    }
}
