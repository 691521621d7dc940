// Example: a host that owns the index (controlled mode) over 1000 images, with a 60fps tick.
use std::sync::{Arc, Mutex};

use virtual_carousel::{CarouselItem, CarouselOptions, Point};
use virtual_carousel_adapter::Controller;

#[derive(Clone, Debug)]
struct Image {
    id: u64,
    url: String,
}

impl CarouselItem for Image {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

fn main() {
    let images: Vec<Image> = (0..1_000)
        .map(|id| Image {
            id,
            url: format!("https://picsum.photos/seed/{id}/400/300"),
        })
        .collect();

    // The host's own state; on_change only records the request.
    let requested = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&requested);
    let options = CarouselOptions::controlled(0)
        .with_viewport_width(375.0)
        .with_threshold(0.15)
        .with_on_change(Some(move |index: usize, image: &Image| {
            println!("on_change: index={index} id={}", image.id);
            if let Ok(mut slot) = sink.lock() {
                *slot = Some(index);
            }
        }));

    let mut now_ms = 0u64;
    let mut c = Controller::mount(images, options, now_ms);

    // Let first paint settle so transitions are enabled.
    while c.is_initializing() {
        now_ms += 16;
        c.tick(now_ms);
    }

    // Swipe left.
    c.on_touch_start(Point::new(300.0, 300.0), now_ms);
    for step in 1..=6 {
        now_ms += 16;
        c.on_touch_move(Point::new(300.0 - step as f32 * 15.0, 301.0));
    }
    now_ms += 16;
    println!("release -> {:?}", c.on_touch_end(now_ms));

    // Host applies the requested index, as a React-style parent would.
    let next = requested.lock().ok().and_then(|mut slot| slot.take());
    if let Some(index) = next {
        c.sync_current(index, now_ms);
    }

    while c.is_animating() {
        now_ms += 16;
        if let Some(translation) = c.tick(now_ms) {
            println!("t={now_ms}ms translation={translation:.1}");
        }
    }

    let out = c.render(now_ms, |image, index| format!("#{index} {}", image.url));
    println!(
        "placeholder={} translation={} transition={:?}",
        out.placeholder_width, out.translation, out.transition
    );
    for slot in &out.slots {
        println!("slot key={} -> {}", slot.key, slot.content);
    }

    let carousel = c.unmount();
    println!("unmounted at index {:?}", carousel.current_index());
}
