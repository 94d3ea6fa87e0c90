//! Download-all example
//!
//! This example mirrors a simple gallery screen without any UI toolkit:
//! - One row per image URL, each with its own "Load" button
//! - A "Download All" button that triggers every row
//! - Rows disable their button once their image has arrived
//!
//! Run with an optional JSON config file:
//!
//! ```bash
//! cargo run --example download_all -- gallery.json
//! ```

use image::DynamicImage;
use image_dl::{Config, FetchCoordinator, FetchError, ItemId, Presenter};
use std::path::Path;
use std::time::Duration;

const GALLERY: &[&str] = &[
    "https://www.cnet.com/a/img/resize/6b9a13a710d464d90c52123dd614d0d69395a559/hub/2019/06/04/88528943-c6c3-4fc5-854a-2b2ebbc0f59e/apple-wwdc-2019-ios-2760.jpg?auto=webp&fit=crop&height=675&width=1200",
    "https://cdn.vox-cdn.com/thumbor/Hg5NURRu56KJ45FCu4fbU-sflb4=/0x0:5436x3624/1400x1400/filters:focal(2718x1812:2719x1813)/cdn.vox-cdn.com/uploads/chorus_asset/file/24013850/iOS16hero.jpg",
    "https://imageio.forbes.com/specials-images/imageserve/5f8ab5c07bdfce7eac675e02/In-this-photo-illustration-a-screenshot-from-Apple-s-launch---/960x0.jpg?format=jpg&width=960",
    "https://yagomacademy.notion.site/image/https%3A%2F%2Fs3-us-west-2.amazonaws.com%2Fsecure.notion-static.com%2Fb6ae0a9d-76eb-43b4-a2a8-e762fc9c9568%2FSymbol-300px-bg.png?table=block&id=3f670cc9-788f-4384-b000-bfe940447d59&spaceId=431128ec-0482-4966-b5f0-0bed1417e8c6&width=250&userId=&cache=v2",
    "https://cdn.osxdaily.com/wp-content/uploads/2023/01/ios-16-3.jpg",
    "https://economictimes.indiatimes.com/thumb/msid-94133286,width-1920,height-1080,resizemode-4,imgsize-17478/apple-iphone-ios-16-to-be-released-on-monday-check-out-features.jpg?from=mdr",
];

/// One gallery row: thumbnail slot plus its load button
struct Row {
    thumbnail: Option<(u32, u32)>,
    button_enabled: bool,
}

/// Console stand-in for the gallery screen
struct ConsoleGallery {
    rows: Vec<Row>,
}

impl ConsoleGallery {
    fn new(len: usize) -> Self {
        let rows = (0..len)
            .map(|_| Row {
                thumbnail: None,
                button_enabled: true,
            })
            .collect();
        Self { rows }
    }

    fn print(&self) {
        for (index, row) in self.rows.iter().enumerate() {
            let thumbnail = match row.thumbnail {
                Some((w, h)) => format!("{}x{}", w, h),
                None => "(empty)".to_string(),
            };
            let button = if row.button_enabled { "[Load]" } else { "[----]" };
            println!("  #{} {:>12} {}", index, thumbnail, button);
        }
    }
}

impl Presenter for ConsoleGallery {
    fn on_image_ready(&mut self, item: ItemId, image: &DynamicImage) {
        println!("✓ Image #{} ready ({}x{})", item, image.width(), image.height());
        if let Some(row) = self.rows.get_mut(item.get()) {
            row.thumbnail = Some((image.width(), image.height()));
        }
    }

    fn on_loaded(&mut self, item: ItemId) {
        if let Some(row) = self.rows.get_mut(item.get()) {
            row.button_enabled = false;
        }
    }

    fn on_error(&mut self, item: ItemId, error: &FetchError) {
        println!("✗ Image #{} failed: {}", item, error);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(Path::new(&path))?,
        None => {
            let mut config = Config::with_locators(GALLERY.iter().copied());
            config.http.timeout = Some(Duration::from_secs(30));
            config
        }
    };

    let gallery = ConsoleGallery::new(config.locators.len());
    let mut coordinator =
        FetchCoordinator::new(&config, tokio::runtime::Handle::current(), gallery)?;

    println!("Gallery with {} images", coordinator.len());
    coordinator.presenter().print();

    // User taps the first row's "Load" button
    if !coordinator.is_empty() {
        coordinator.trigger_one(ItemId(0))?;
        coordinator.next_completion().await;
    }

    // Then "Download All"; the first row is already loaded and is skipped
    coordinator.trigger_all();
    coordinator.run_until_idle().await;

    println!(
        "\n{} of {} images loaded",
        coordinator.loaded_count(),
        coordinator.len()
    );
    coordinator.presenter().print();

    Ok(())
}
