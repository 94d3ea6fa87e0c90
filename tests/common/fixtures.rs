//! Image fixtures and mock server helpers

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Encode a solid-color image of the given size in `format`
pub fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([30, 120, 220]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut bytes, format)
        .expect("encoding test image failed");
    bytes.into_inner()
}

/// PNG bytes of the given size
pub fn png(width: u32, height: u32) -> Vec<u8> {
    encoded_image(width, height, ImageFormat::Png)
}

/// JPEG bytes of the given size
pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encoded_image(width, height, ImageFormat::Jpeg)
}

/// Serve `body` at `route` with status 200, expecting exactly `hits` requests
pub async fn serve_image(server: &MockServer, route: &str, body: Vec<u8>, hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/png")
                .set_body_bytes(body),
        )
        .expect(hits)
        .mount(server)
        .await;
}

/// Serve `status` with an empty body at `route`
pub async fn serve_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
