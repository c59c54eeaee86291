/// Named wall-clock timer for one-shot phases (init, offscreen render).
///
/// Uses `Date.now()` inside the browser, where `Instant` is unavailable.
pub struct Stopwatch {
    label: &'static str,
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Stopwatch {
    pub fn start(label: &'static str) -> Self {
        Stopwatch {
            label,
            #[cfg(target_arch = "wasm32")]
            start_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            start: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Logs the elapsed time at debug level and returns it.
    pub fn finish(self) -> f64 {
        let ms = self.elapsed_ms();
        log::debug!("{} took {:.3} ms", self.label, ms);
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::Stopwatch;

    #[test]
    fn elapsed_is_monotonic() {
        let sw = Stopwatch::start("test");
        let a = sw.elapsed_ms();
        let b = sw.elapsed_ms();
        assert!(a >= 0.0 && b >= a);
        assert!(sw.finish() >= b);
    }
}
