// Flyweight demo: twenty randomly-colored circles drawn through a
// process-wide shared pool. Only the first draw of each color creates a
// circle; every later draw of that color reuses the shared instance.
//
// Run with: cargo run --bin flyweight_circles

use lazy_static::lazy_static;
use rand::Rng;

use patternkit::pool::SharedPool;
use patternkit::shapes::Circle;

const COLORS: [&str; 5] = ["Red", "Green", "Blue", "White", "Black"];

lazy_static! {
    static ref CIRCLES: SharedPool<Circle> = SharedPool::new();
}

fn main() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let color = COLORS[rng.gen_range(0..COLORS.len())];
        match CIRCLES.acquire(color) {
            Ok(circle) => {
                circle.draw_at(rng.gen_range(0..100), rng.gen_range(0..100), 100);
            }
            Err(err) => eprintln!("skipping draw: {err}"),
        }
    }

    let stats = CIRCLES.stats();
    println!();
    println!("Distinct circles created: {}", CIRCLES.len());
    println!("Pool hits: {}, misses: {}", stats.hits, stats.misses);
}
