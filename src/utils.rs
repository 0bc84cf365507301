use std::time::{Duration, Instant};

pub(crate) fn trace(l_type: &str, l_step: &str, detect: Instant, _detect_elapsed: Duration) -> Duration {
    log::trace!("{} | Total={:.2?} | {}={:.2?}", l_type, detect.elapsed(), l_step, detect.elapsed() - _detect_elapsed);
    detect.elapsed()
}
