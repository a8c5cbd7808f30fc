//! Frame player for the statistic counters.

use std::rc::Rc;
use std::time::Duration;

use aokhay_core::CounterAnimation;
use tracing::debug;

use crate::timer::Timer;

/// Play `counter` into `render`: the first frame immediately, then one frame
/// every `interval` until the original text is back.
pub fn play_counter(
    counter: &CounterAnimation,
    steps: u32,
    interval: Duration,
    timer: Rc<dyn Timer>,
    render: Rc<dyn Fn(&str)>,
) {
    debug!(target_value = counter.target(), "counter animation started");
    let frames: Rc<[String]> = counter.frames(steps).collect();
    show_frame(frames, 0, interval, timer, render);
}

fn show_frame(
    frames: Rc<[String]>,
    index: usize,
    interval: Duration,
    timer: Rc<dyn Timer>,
    render: Rc<dyn Fn(&str)>,
) {
    let Some(frame) = frames.get(index) else {
        return;
    };
    render(frame);

    if index + 1 < frames.len() {
        let next_timer = Rc::clone(&timer);
        timer.after(
            interval,
            Box::new(move || show_frame(frames, index + 1, interval, next_timer, render)),
        );
    }
}
