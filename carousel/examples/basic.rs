// Example: an uncontrolled carousel over a large list, driven by simulated touches.
use virtual_carousel::{Carousel, CarouselOptions, Point};

#[derive(Debug)]
struct Slide {
    id: u32,
    title: String,
}

fn main() {
    let slides: Vec<Slide> = (0..1_000)
        .map(|id| Slide {
            id,
            title: format!("slide {}", id + 1),
        })
        .collect();

    let options = CarouselOptions::new()
        .with_viewport_width(390.0)
        .with_default_current(500)
        .with_on_change(Some(|index: usize, slide: &Slide| {
            println!("on_change: index={index} id={}", slide.id);
        }));
    let mut c = Carousel::new(slides, options);

    print_frame(&c);

    // A slow leftward drag past the threshold commits the next slide.
    c.on_touch_start(Point::new(300.0, 200.0), 0);
    for x in [290.0, 260.0, 220.0] {
        let outcome = c.on_touch_move(Point::new(x, 202.0));
        println!("move x={x} -> {outcome:?} translation={}", c.translation());
    }
    println!("release -> {:?}", c.on_touch_end(800));
    print_frame(&c);

    // A short flick commits via the quick-swipe path.
    c.on_touch_start(Point::new(100.0, 200.0), 1_000);
    c.on_touch_move(Point::new(135.0, 200.0));
    println!("flick -> {:?}", c.on_touch_end(1_120));

    // Vertical movement is left to the host scroll view.
    c.on_touch_start(Point::new(100.0, 200.0), 2_000);
    println!("vertical -> {:?}", c.on_touch_move(Point::new(104.0, 260.0)));
    println!("release -> {:?}", c.on_touch_end(2_100));

    c.for_each_rendered(|slide, index| println!("render #{index}: {}", slide.title));
}

fn print_frame(c: &Carousel<Slide>) {
    let frame = c.frame();
    println!(
        "current={:?} window={:?} placeholder={} translation={} transition={:?}",
        frame.current, frame.window, frame.placeholder_width, frame.translation, frame.transition
    );
}
