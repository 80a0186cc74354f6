//! Host-based tests for the ESP32-S3 Status Monitor
//! These tests run on the development machine, not on the ESP32. They drive
//! the loop's building blocks the way `main` does: raw response bytes in,
//! gestures in, pixels out.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use std::convert::Infallible;

/// In-memory stand-in for the panel
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height {
                let idx = (p.y as u32 * self.width + p.x as u32) as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

/// Plain HTTP/1.1 response around `body`
pub fn plain_response(body: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
    .into_bytes()
}

/// Same body split into chunks of at most `chunk` bytes
pub fn chunked_response(body: &str, chunk: usize) -> Vec<u8> {
    let mut out = String::from("HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\n\r\n");
    for piece in body.as_bytes().chunks(chunk.max(1)) {
        out.push_str(&format!("{:x}\r\n", piece.len()));
        out.push_str(std::str::from_utf8(piece).unwrap_or_default());
        out.push_str("\r\n");
    }
    out.push_str("0\r\n\r\n");
    out.into_bytes()
}

/// A components document with `count` operational entries
pub fn components_body(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"id":"c{}","name":"Service {}","status":"operational","position":{}}}"#, i, i, i))
        .collect();
    format!(r#"{{"page":{{"id":"x"}},"components":[{}]}}"#, items.join(","))
}
