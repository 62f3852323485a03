//! Concrete demo entities shared by the demo bins and tests.

use colored::Colorize;

use crate::pool::FromDiscriminator;

/// Capability shared by every shape the factory can produce.
pub trait Draw {
    fn draw(&self);
}

/// A circle whose color is fixed at creation; one shared instance per color
/// when created through a [`crate::pool::SharedPool`].
///
/// Position and size are extrinsic: they vary per draw, so they are passed
/// to [`Circle::draw_at`] rather than stored on the shared instance.
#[derive(Debug, Default)]
pub struct Circle {
    color: String,
}

impl Circle {
    pub fn new(color: impl Into<String>) -> Self {
        Circle {
            color: color.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Draws at a caller-supplied position and size.
    pub fn draw_at(&self, x: i32, y: i32, radius: u32) {
        println!(
            "Circle: draw() [color: {}, x: {}, y: {}, radius: {}]",
            self.color.cyan(),
            x,
            y,
            radius
        );
    }
}

impl FromDiscriminator for Circle {
    fn from_discriminator(discriminator: &str) -> Self {
        Circle::new(discriminator)
    }
}

impl Draw for Circle {
    fn draw(&self) {
        println!("Inside Circle::draw() method.");
    }
}

#[derive(Debug, Default)]
pub struct Rectangle;

impl Draw for Rectangle {
    fn draw(&self) {
        println!("Inside Rectangle::draw() method.");
    }
}

#[derive(Debug, Default)]
pub struct Square;

impl Draw for Square {
    fn draw(&self) {
        println!("Inside Square::draw() method.");
    }
}
