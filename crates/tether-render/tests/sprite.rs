use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, Shared};
use tether_render::{Renderer, SpriteAnimation, Texture};
use tether_test_utils::{MockPlatform, MockRenderer, MockTexture};

const WALKING_FRAMES: u32 = 4;

fn sheet(platform: &MockPlatform) -> Texture<MockTexture, Shared> {
    unsafe { Texture::from_raw(platform.texture(256, 205), None) }
}

#[test]
fn test_frames_cycle_every_eight_updates() {
    let platform = MockPlatform::new();
    let mut animation =
        SpriteAnimation::from_strip(&sheet(&platform), Size::new(64, 205), WALKING_FRAMES, 8);

    assert_eq!(animation.len(), 4);
    let mut seen = Vec::new();
    for _ in 0..33 {
        seen.push(animation.frame_index());
        animation.advance();
    }

    assert_eq!(&seen[0..8], &[0; 8]);
    assert_eq!(&seen[8..16], &[1; 8]);
    assert_eq!(&seen[24..32], &[3; 8]);
    assert_eq!(seen[32], 0);
}

#[test]
fn test_strip_clips() {
    let platform = MockPlatform::new();
    let animation =
        SpriteAnimation::from_strip(&sheet(&platform), Size::new(64, 205), WALKING_FRAMES, 8);

    let clips: Vec<Rect> = animation.frames().iter().map(|frame| frame.clip()).collect();
    assert_eq!(
        clips,
        vec![
            Rect::new(0, 0, 64, 205),
            Rect::new(64, 0, 64, 205),
            Rect::new(128, 0, 64, 205),
            Rect::new(192, 0, 64, 205),
        ]
    );
}

#[test]
fn test_frames_keep_sheet_alive() {
    let platform = MockPlatform::new();
    let animation =
        SpriteAnimation::from_strip(&sheet(&platform), Size::new(64, 205), WALKING_FRAMES, 8);

    assert_eq!(platform.count_releases("texture"), 0);
    drop(animation);
    assert_eq!(platform.count_releases("texture"), 1);
}

#[test]
fn test_draw_current_frame() {
    let platform = MockPlatform::new();
    let renderer: Renderer<MockRenderer> = unsafe { Managed::from_raw(platform.renderer(640, 480)) };
    let mut animation = SpriteAnimation::from_clips(
        &sheet(&platform),
        [Rect::new(0, 0, 64, 205), Rect::new(64, 0, 64, 205)],
        1,
    );

    animation.advance();
    animation.draw_at(&renderer, Pos::new(288, 137));

    let copies = platform.copies();
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0].1, Rect::new(64, 0, 64, 205));
    assert_eq!(copies[0].2, Rect::new(288, 137, 64, 205));
}

#[test]
fn test_empty_animation() {
    let platform = MockPlatform::new();
    let mut animation = SpriteAnimation::from_clips(&sheet(&platform), [], 8);

    animation.advance();
    assert!(animation.is_empty());
    assert!(animation.current().is_none());
}
