// Example: lazy loading with a debounced scroll and loader placeholders.
use std::sync::{Arc, Mutex};

use virtual_scroller::{
    RenderPlan, ScrollPosition, ScrollerOptions, ViewportSize, VirtualScroller, Window,
};

fn main() {
    let requested: Arc<Mutex<Vec<Window>>> = Arc::new(Mutex::new(Vec::new()));

    let mut scroller = VirtualScroller::new(
        ScrollerOptions::new(50_000, 40)
            .with_initial_viewport(Some(ViewportSize {
                width: 300,
                height: 400,
            }))
            .with_delay_ms(150)
            .with_lazy(true)
            .with_loading(true)
            .with_show_loader(true)
            .with_loader_disabled(true)
            .with_on_lazy_load(Some({
                let requested = Arc::clone(&requested);
                move |w| requested.lock().unwrap().push(w)
            })),
    );

    // The first chunk is requested up front; placeholders render meanwhile.
    println!("plan while loading: {:?}", scroller.render_plan());
    scroller.set_loading(false);

    // A burst of scroll samples coalesces into a single deferred commit.
    for (i, top) in [4000u64, 4400, 4800].into_iter().enumerate() {
        scroller.apply_scroll_event(ScrollPosition { top, left: 0 }, i as u64 * 30);
    }
    println!("placeholders while settling: {}", scroller.is_loading());
    // The quiet period ends 150ms after the last sample; a real widget would
    // call tick from its frame clock.
    scroller.tick(60 + 150);
    scroller.set_loading(false);

    println!("window after settle: {:?}", scroller.window());
    match scroller.render_plan() {
        RenderPlan::Window(w) => println!("render {w:?}"),
        other => println!("render {other:?}"),
    }
    println!("load requests seen: {:?}", requested.lock().unwrap());
}
