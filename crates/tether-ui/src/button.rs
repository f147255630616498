use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, Ownership, Shared, Unique};
use tether_input::MouseState;
use tether_render::Texture;
use tether_render::resource::TextureResource;

use crate::{Interaction, InteractionState};

/// Which of a button's textures is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visual {
    #[default]
    Default,
    Hovering,
    Pressed,
}

impl From<InteractionState> for Visual {
    fn from(state: InteractionState) -> Self {
        match state {
            InteractionState::Idle => Visual::Default,
            InteractionState::Hovering => Visual::Hovering,
            InteractionState::Pressed => Visual::Pressed,
        }
    }
}

/// A clickable button with a texture per visual state.
///
/// All three textures are drawn into the same placement rectangle, which is
/// also the hit area.
#[derive(Debug)]
pub struct Button<T: TextureResource, O: Ownership = Unique> {
    default: Texture<T, O>,
    hovering: Texture<T, O>,
    pressed: Texture<T, O>,
    rect: Rect,
    interaction: Interaction,
    visual: Visual,
}

impl<T: TextureResource, O: Ownership> Button<T, O> {
    pub fn new(
        default: Texture<T, O>,
        hovering: Texture<T, O>,
        pressed: Texture<T, O>,
        rect: Rect,
    ) -> Self {
        Self {
            default,
            hovering,
            pressed,
            rect,
            interaction: Interaction::new(),
            visual: Visual::Default,
        }
    }

    pub fn empty() -> Self {
        Self::new(
            Texture::empty(),
            Texture::empty(),
            Texture::empty(),
            Rect::default(),
        )
    }

    pub fn update(&mut self, mouse: &MouseState) -> InteractionState {
        let state = self.interaction.update(self.rect, mouse);
        self.visual = Visual::from(state);
        state
    }

    /// Draw the selected visual into the placement rectangle.
    pub fn render<P: Ownership>(&self, target: &Managed<T::Canvas, P>) {
        self.texture(self.visual).draw(target, self.rect);
    }

    pub fn visual(&self) -> Visual {
        self.visual
    }

    pub fn texture(&self, visual: Visual) -> &Texture<T, O> {
        match visual {
            Visual::Default => &self.default,
            Visual::Hovering => &self.hovering,
            Visual::Pressed => &self.pressed,
        }
    }

    pub fn texture_mut(&mut self, visual: Visual) -> &mut Texture<T, O> {
        match visual {
            Visual::Default => &mut self.default,
            Visual::Hovering => &mut self.hovering,
            Visual::Pressed => &mut self.pressed,
        }
    }

    /// Swap in a new texture for `visual`, returning the old one.
    pub fn set_texture(&mut self, visual: Visual, texture: Texture<T, O>) -> Texture<T, O> {
        std::mem::replace(self.texture_mut(visual), texture)
    }

    pub fn is_hovering(&self) -> bool {
        self.interaction.is_hovering()
    }

    pub fn is_clicking(&self) -> bool {
        self.interaction.is_clicking()
    }

    pub fn is_clicked(&self) -> bool {
        self.interaction.is_clicked()
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn position(&self) -> Pos {
        self.rect.pos()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    pub fn rectangle(&self) -> Rect {
        self.rect
    }

    pub fn set_position(&mut self, pos: Pos) -> &mut Self {
        self.rect.set_pos(pos);
        self
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.rect.set_size(size);
        self
    }

    pub fn set_rectangle(&mut self, rect: Rect) -> &mut Self {
        self.rect = rect;
        self
    }

    /// Resize the placement to the default visual's clip size.
    pub fn set_size_to_texture(&mut self) -> &mut Self {
        self.rect.set_size(self.default.clip_size());
        self
    }
}

impl<T: TextureResource> Button<T, Shared> {
    /// Cut the three visuals out of one shared sprite sheet, in
    /// default, hovering, pressed order. The button is placed at `pos` with
    /// the size of the default clip.
    pub fn from_sheet(sheet: &Texture<T, Shared>, clips: [Rect; 3], pos: Pos) -> Self {
        let [default, hovering, pressed] = clips;
        Self::new(
            sheet.derive(Some(default)),
            sheet.derive(Some(hovering)),
            sheet.derive(Some(pressed)),
            Rect::from_parts(pos, default.size()),
        )
    }
}

impl<T: TextureResource, O: Ownership> Default for Button<T, O> {
    fn default() -> Self {
        Self::empty()
    }
}
