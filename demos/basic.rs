// Example: windowing a large list and jumping to an index.
use virtual_scroller::{
    ScrollBehavior, ScrollPosition, ScrollerOptions, ViewportSize, VirtualScroller,
};

fn main() {
    let items: Vec<String> = (0..100_000).map(|i| format!("item #{i}")).collect();

    let mut scroller = VirtualScroller::new(
        ScrollerOptions::new(items.len(), 50).with_initial_viewport(Some(ViewportSize {
            width: 300,
            height: 500,
        })),
    );
    println!("window={:?}", scroller.window());
    println!("spacer={:?}", scroller.spacer_size());

    scroller.apply_scroll_event(ScrollPosition { top: 123_456, left: 0 }, 0);
    println!("after scroll: window={:?}", scroller.window());
    println!("translation={:?}", scroller.content_translation());
    println!("first_visible={:?}", scroller.visible_rows(&items).first());

    if let Some(request) = scroller.scroll_to_index(99_999, ScrollBehavior::Auto) {
        println!("scroll_to_index wants top={}", request.top);
        scroller.apply_scroll_event(
            ScrollPosition {
                top: request.top,
                left: request.left,
            },
            1,
        );
    }
    println!("after jump: window={:?}", scroller.window());
}
