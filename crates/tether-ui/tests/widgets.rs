use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, Shared};
use tether_input::{InputEvent, MouseButton, MouseState};
use tether_render::{Renderer, Texture};
use tether_test_utils::{MockPlatform, MockRenderer, MockTexture, mock_id};
use tether_ui::{Button, InteractionState, TextureComponent, Visual};

const PLACEMENT: Rect = Rect::new(10, 10, 50, 20);

struct Pointer {
    mouse: MouseState,
}

impl Pointer {
    fn new() -> Self {
        Self {
            mouse: MouseState::new(),
        }
    }

    fn move_to(&mut self, x: i32, y: i32) -> &MouseState {
        self.mouse.update(&InputEvent::MouseMotion { x, y });
        &self.mouse
    }

    fn press(&mut self) -> &MouseState {
        let (x, y) = (self.mouse.x(), self.mouse.y());
        self.mouse.update(&InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            x,
            y,
        });
        &self.mouse
    }

    fn release(&mut self) -> &MouseState {
        let (x, y) = (self.mouse.x(), self.mouse.y());
        self.mouse.update(&InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            x,
            y,
        });
        &self.mouse
    }
}

fn renderer(platform: &MockPlatform) -> Renderer<MockRenderer> {
    unsafe { Managed::from_raw(platform.renderer(640, 480)) }
}

fn texture(platform: &MockPlatform) -> Texture<MockTexture> {
    unsafe { Texture::from_raw(platform.texture(50, 20), None) }
}

#[test]
fn test_button_scenario() {
    let platform = MockPlatform::new();
    let mut button = Button::new(
        texture(&platform),
        texture(&platform),
        texture(&platform),
        PLACEMENT,
    );
    let mut pointer = Pointer::new();

    button.update(pointer.move_to(30, 20));
    assert_eq!(button.state(), InteractionState::Hovering);
    assert_eq!(button.visual(), Visual::Hovering);

    button.update(pointer.press());
    assert_eq!(button.state(), InteractionState::Pressed);
    assert_eq!(button.visual(), Visual::Pressed);
    assert!(button.is_clicking());

    button.update(pointer.release());
    assert!(button.is_clicked());
    assert_eq!(button.state(), InteractionState::Idle);
    assert_eq!(button.visual(), Visual::Default);

    button.update(&pointer.mouse);
    assert!(!button.is_clicked());
}

#[test]
fn test_button_sticky_press() {
    let platform = MockPlatform::new();
    let mut button = Button::new(
        texture(&platform),
        texture(&platform),
        texture(&platform),
        PLACEMENT,
    );
    let mut pointer = Pointer::new();

    button.update(pointer.move_to(30, 20));
    button.update(pointer.press());
    button.update(pointer.move_to(300, 300));

    assert_eq!(button.state(), InteractionState::Pressed);
    assert_eq!(button.visual(), Visual::Pressed);
    assert!(!button.is_clicked());
}

#[test]
fn test_button_renders_selected_visual_only() {
    let platform = MockPlatform::new();
    let target = renderer(&platform);
    let mut button = Button::new(
        texture(&platform),
        texture(&platform),
        texture(&platform),
        PLACEMENT,
    );
    let hovering = mock_id(button.texture(Visual::Hovering).handle()).unwrap_or_default();
    let mut pointer = Pointer::new();

    button.update(pointer.move_to(30, 20));
    button.render(&target);

    assert_eq!(
        platform.copies(),
        vec![(hovering, Rect::new(0, 0, 50, 20), PLACEMENT)]
    );
}

#[test]
fn test_button_from_sheet_shares_texture() {
    let platform = MockPlatform::new();
    let sheet: Texture<MockTexture, Shared> =
        unsafe { Texture::from_raw(platform.texture(300, 200), None) };
    let clips = [
        Rect::new(0, 0, 300, 50),
        Rect::new(0, 50, 300, 50),
        Rect::new(0, 100, 300, 50),
    ];

    let button = Button::from_sheet(&sheet, clips, Pos::new(170, 215));
    assert_eq!(button.rectangle(), Rect::new(170, 215, 300, 50));
    assert_eq!(button.texture(Visual::Pressed).clip(), clips[2]);
    assert_eq!(sheet.ref_count(), 4);

    drop(sheet);
    drop(button);
    assert_eq!(platform.count_releases("texture"), 1);
}

#[test]
fn test_button_releases_every_visual() {
    let platform = MockPlatform::new();
    drop(Button::new(
        texture(&platform),
        texture(&platform),
        texture(&platform),
        PLACEMENT,
    ));
    assert_eq!(platform.count_releases("texture"), 3);
}

#[test]
fn test_component_click() {
    let platform = MockPlatform::new();
    let mut component = TextureComponent::new(texture(&platform), PLACEMENT);
    let mut pointer = Pointer::new();

    component.update(pointer.move_to(30, 20));
    assert!(component.is_hovering());

    component.update(pointer.press());
    assert!(component.is_clicking());

    component.update(pointer.release());
    assert!(component.is_clicked());
    assert!(!component.is_hovering());

    component.update(&pointer.mouse);
    assert!(!component.is_clicked());
}

#[test]
fn test_component_render_draws_clip_into_placement() {
    let platform = MockPlatform::new();
    let target = renderer(&platform);
    let clip = Rect::new(64, 0, 64, 205);
    let texture: Texture<MockTexture> =
        unsafe { Texture::from_raw(platform.texture(256, 205), Some(clip)) };
    let component = TextureComponent::new(texture, Rect::new(5, 5, 32, 100));

    component.render(&target);

    assert_eq!(platform.count_copies(), 1);
    assert_eq!(platform.copies()[0].1, clip);
    assert_eq!(platform.copies()[0].2, Rect::new(5, 5, 32, 100));
}

#[test]
fn test_component_geometry() {
    let platform = MockPlatform::new();
    let mut component = TextureComponent::at(texture(&platform), Pos::new(3, 4));
    assert_eq!(component.rectangle(), Rect::new(3, 4, 50, 20));

    component
        .set_position(Pos::new(7, 8))
        .set_size(Size::new(10, 10));
    assert_eq!(component.position(), Pos::new(7, 8));
    assert_eq!(component.size(), Size::new(10, 10));

    component.set_clip(Rect::new(0, 0, 25, 10)).set_size_to_texture();
    assert_eq!(component.size(), Size::new(25, 10));

    component.set_rectangle(PLACEMENT);
    assert_eq!(component.rectangle(), PLACEMENT);
}

#[test]
fn test_component_set_texture_returns_old() {
    let platform = MockPlatform::new();
    let mut component = TextureComponent::new(texture(&platform), PLACEMENT);
    let old_id = mock_id(component.texture().handle());

    let old = component.set_texture(texture(&platform));
    assert_eq!(mock_id(old.handle()), old_id);
    assert_ne!(mock_id(component.texture().handle()), old_id);

    drop(old);
    assert_eq!(platform.count_releases("texture"), 1);
}

#[test]
fn test_empty_component_renders_nothing() {
    let platform = MockPlatform::new();
    let target = renderer(&platform);
    TextureComponent::<MockTexture>::empty().render(&target);
    assert_eq!(platform.count_copies(), 0);
}
