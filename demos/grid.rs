// Example: two-axis grid windowing over rows and columns.
use virtual_scroller::{
    Orientation, ScrollBehavior, ScrollPosition, ScrollerOptions, ViewportSize, VirtualScroller,
};

fn main() {
    let rows: Vec<Vec<u32>> = (0..500)
        .map(|r| (0..120).map(|c| r * 1000 + c).collect())
        .collect();

    let mut scroller = VirtualScroller::new(
        ScrollerOptions::new(rows.len(), [40u32, 120u32])
            .with_orientation(Orientation::Both)
            .with_columns(Some(120))
            .with_initial_viewport(Some(ViewportSize {
                width: 600,
                height: 400,
            })),
    );
    println!("window={:?}", scroller.window());
    println!("spacer={:?}", scroller.spacer_size());

    scroller.apply_scroll_event(ScrollPosition { top: 6000, left: 2400 }, 0);
    println!("after scroll: window={:?}", scroller.window());
    println!("translation={:?}", scroller.content_translation());

    let visible = scroller.visible_rows(&rows);
    if let Some(row) = visible.first() {
        let cells = scroller.visible_grid_row(row);
        println!("first visible row renders {} of {} cells", cells.len(), row.len());
    }

    if let Some(request) = scroller.scroll_to_index([250, 60], ScrollBehavior::Smooth) {
        println!("jump request: top={} left={}", request.top, request.left);
    }
}
