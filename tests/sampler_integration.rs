use image::{Rgba, RgbaImage};
use startpage::sampler;
use std::path::Path;

fn write_png(path: &Path, img: &RgbaImage) {
    img.save(path).unwrap();
}

#[tokio::test]
async fn uniform_image_samples_to_its_exact_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uniform.png");
    write_png(&path, &RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255])));

    let color = sampler::dominant_color(path.to_str().unwrap()).await;
    assert_eq!(color, "rgb(10, 20, 30)");
}

#[tokio::test]
async fn mixed_image_mean_is_floored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.png");
    let img = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    write_png(&path, &img);

    let color = sampler::dominant_color(path.to_str().unwrap()).await;
    assert_eq!(color, "rgb(127, 127, 127)");
}

#[tokio::test]
async fn missing_file_falls_back_to_white() {
    let color = sampler::dominant_color("/definitely/not/here.png").await;
    assert_eq!(color, "#ffffff");
}

#[tokio::test]
async fn undecodable_bytes_fall_back_to_white() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-an-image.png");
    std::fs::write(&path, b"plain text, not pixels").unwrap();

    let color = sampler::dominant_color(path.to_str().unwrap()).await;
    assert_eq!(color, "#ffffff");
}

#[tokio::test]
async fn unreachable_url_falls_back_to_white() {
    let color = sampler::dominant_color("http://127.0.0.1:1/favicon.ico").await;
    assert_eq!(color, "#ffffff");
}

#[tokio::test]
async fn sample_all_keys_results_by_locator() {
    let dir = tempfile::tempdir().unwrap();
    let red = dir.path().join("red.png");
    let blue = dir.path().join("blue.png");
    write_png(&red, &RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255])));
    write_png(&blue, &RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255])));

    let locators = vec![
        red.to_str().unwrap().to_string(),
        blue.to_str().unwrap().to_string(),
        "/missing.png".to_string(),
    ];
    let colors = sampler::sample_all(&locators, 2).await;

    assert_eq!(colors.len(), 3);
    assert_eq!(colors[&locators[0]], "rgb(255, 0, 0)");
    assert_eq!(colors[&locators[1]], "rgb(0, 0, 255)");
    assert_eq!(colors[&locators[2]], "#ffffff");
}
