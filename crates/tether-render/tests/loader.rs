use std::path::PathBuf;

use tether_core::geometry::{Rect, Size};
use tether_handle::{Managed, Shared, Unique};
use tether_render::{
    Color, ExtentExt, Font, RenderError, Renderer, Texture, load_font, load_surface,
    load_texture, render_text,
};
use tether_test_utils::{MockFont, MockPlatform, MockRenderer, MockTexture, PlatformCall};

fn setup() -> (MockPlatform, Renderer<MockRenderer>) {
    let platform = MockPlatform::new();
    platform.add_image("assets/foo.png", 64, 205);
    platform.add_font("assets/lazy.ttf");
    let renderer = unsafe { Managed::from_raw(platform.renderer(640, 480)) };
    (platform, renderer)
}

#[test]
fn test_load_surface() {
    let (platform, _renderer) = setup();
    let surface = load_surface(&platform, "assets/foo.png");

    assert!(matches!(&surface, Ok(surface) if surface.size() == Size::new(64, 205)));
}

#[test]
fn test_load_texture_frees_surface_once() {
    let (platform, renderer) = setup();
    let texture: Texture<MockTexture> =
        load_texture(&platform, &renderer, "assets/foo.png", None).unwrap();

    assert_eq!(texture.clip(), Rect::new(0, 0, 64, 205));
    assert_eq!(platform.count_releases("surface"), 1);
    assert_eq!(platform.count_releases("texture"), 0);
}

#[test]
fn test_load_texture_applies_color_key() {
    let (platform, renderer) = setup();
    let texture: Texture<MockTexture, Shared> = load_texture(
        &platform,
        &renderer,
        "assets/foo.png",
        Some(Color::CYAN),
    )
    .unwrap();

    assert!(texture.is_valid());
    assert!(
        platform
            .calls()
            .iter()
            .any(|call| matches!(call, PlatformCall::SetColorKey { key, .. } if *key == Color::CYAN))
    );
}

#[test]
fn test_missing_image_reports_platform_error() {
    let (platform, renderer) = setup();
    let result: Result<Texture<MockTexture>, _> =
        load_texture(&platform, &renderer, "assets/missing.png", None);

    assert_eq!(
        result.unwrap_err(),
        RenderError::ImageLoad {
            path: PathBuf::from("assets/missing.png"),
            message: "Couldn't open assets/missing.png".to_string(),
        }
    );
    assert_eq!(platform.count_releases("surface"), 0);
}

#[test]
fn test_failed_texture_creation_still_frees_surface() {
    let (platform, renderer) = setup();
    platform.fail_texture_creation(true);

    let result: Result<Texture<MockTexture>, _> =
        load_texture(&platform, &renderer, "assets/foo.png", None);

    assert!(matches!(result, Err(RenderError::TextureCreation { .. })));
    assert_eq!(platform.count_releases("surface"), 1);
}

#[test]
fn test_failed_color_key_frees_surface() {
    let (platform, renderer) = setup();
    platform.fail_color_key(true);

    let result: Result<Texture<MockTexture>, _> =
        load_texture(&platform, &renderer, "assets/foo.png", Some(Color::CYAN));

    assert!(matches!(result, Err(RenderError::ColorKey { .. })));
    assert_eq!(platform.count_releases("surface"), 1);
}

#[test]
fn test_load_texture_needs_a_renderer() {
    let (platform, _renderer) = setup();
    let result: Result<Texture<MockTexture, Unique>, _> = load_texture(
        &platform,
        &Renderer::<MockRenderer>::empty(),
        "assets/foo.png",
        None,
    );

    assert_eq!(
        result.unwrap_err(),
        RenderError::EmptyHandle { kind: "renderer" }
    );
    assert_eq!(platform.call_count(), 0);
}

#[test]
fn test_render_text() {
    let (platform, renderer) = setup();
    let font: Font<MockFont> = load_font(&platform, "assets/lazy.ttf", 28).unwrap();

    let texture: Texture<MockTexture> = render_text(
        &platform,
        &renderer,
        &font,
        "The quick brown fox",
        Color::BLACK,
    )
    .unwrap();

    assert_eq!(texture.base_size(), Size::new(14 * 19, 28));
    assert_eq!(platform.count_releases("surface"), 1);
}

#[test]
fn test_render_text_failure() {
    let (platform, renderer) = setup();
    let font: Font<MockFont> = load_font(&platform, "assets/lazy.ttf", 28).unwrap();
    platform.fail_text(true);

    let result: Result<Texture<MockTexture>, _> =
        render_text(&platform, &renderer, &font, "hello", Color::BLACK);

    assert_eq!(
        result.unwrap_err(),
        RenderError::TextRender {
            text: "hello".to_string(),
            message: "Text has zero width".to_string(),
        }
    );
}

#[test]
fn test_missing_font() {
    let (platform, _renderer) = setup();
    let result = load_font(&platform, "assets/missing.ttf", 12);

    assert!(matches!(result, Err(RenderError::FontLoad { .. })));
}
