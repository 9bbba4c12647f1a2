// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rolling frame time tracker.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct PerfStats {
    frame_ms: VecDeque<f32>,
    max_samples: usize,
}

impl Default for PerfStats {
    fn default() -> Self {
        Self::with_window(120)
    }
}

impl PerfStats {
    pub fn with_window(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_ms: VecDeque::with_capacity(max_samples),
            max_samples,
        }
    }

    pub fn push(&mut self, frame: f32) {
        if self.frame_ms.len() == self.max_samples {
            self.frame_ms.pop_front();
        }
        self.frame_ms.push_back(frame);
    }

    pub fn mean_ms(&self) -> f32 {
        if self.frame_ms.is_empty() {
            return 0.0;
        }
        self.frame_ms.iter().sum::<f32>() / self.frame_ms.len() as f32
    }

    /// FPS over the window; smoother than the last-frame reading.
    pub fn fps(&self) -> f32 {
        let ms = self.mean_ms();
        if ms > 0.0 {
            1000.0 / ms
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_reports_zero() {
        assert_eq!(PerfStats::default().fps(), 0.0);
    }

    #[test]
    fn window_drops_old_samples() {
        let mut p = PerfStats::with_window(2);
        p.push(100.0);
        p.push(10.0);
        p.push(10.0);
        assert_relative_eq!(p.mean_ms(), 10.0);
        assert_relative_eq!(p.fps(), 100.0);
    }
}
