// Proxy demo: a slow image display wrapped two ways, first behind the
// timing interceptor, then behind a handle that defers loading until
// first use.
//
// Run with: cargo run --bin timed_display

use std::thread;
use std::time::Duration;

use patternkit::intercept::{Operation, Timed};
use patternkit::lazy::LazyHandle;
use patternkit::pool::FromDiscriminator;

/// Pretends to load an image from disk, slowly, then render it.
struct ImageDisplay {
    file_name: String,
}

impl FromDiscriminator for ImageDisplay {
    fn from_discriminator(discriminator: &str) -> Self {
        println!("Loading {}", discriminator);
        ImageDisplay {
            file_name: discriminator.to_string(),
        }
    }
}

impl Operation for ImageDisplay {
    type Output = ();

    fn execute(&self) -> Self::Output {
        println!("Displaying {}", self.file_name);
        thread::sleep(Duration::from_millis(666));
    }
}

fn main() {
    println!("=== Timing interception ===");
    let timed = Timed::wrap(ImageDisplay::from_discriminator("18stop.jpg"));
    timed.execute();

    println!("\n=== Lazy initialization ===");
    let lazy: LazyHandle<ImageDisplay> = LazyHandle::new("lake_autumn.jpg");
    println!(
        "Handle created; image loaded: {}",
        lazy.is_initialized()
    );

    lazy.execute(); // loads on first call
    lazy.execute(); // reuses the loaded image
    println!("Image loaded: {}", lazy.is_initialized());
}
