use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, Ownership, Unique};
use tether_input::MouseState;
use tether_render::Texture;
use tether_render::resource::TextureResource;

use crate::{Interaction, InteractionState};

/// A texture drawn into a placement rectangle that also reacts to the
/// pointer.
///
/// The texture's clip picks the source region; the placement rectangle is the
/// destination and the hit area.
#[derive(Debug)]
pub struct TextureComponent<T: TextureResource, O: Ownership = Unique> {
    texture: Texture<T, O>,
    rect: Rect,
    interaction: Interaction,
}

impl<T: TextureResource, O: Ownership> TextureComponent<T, O> {
    pub fn new(texture: Texture<T, O>, rect: Rect) -> Self {
        Self {
            texture,
            rect,
            interaction: Interaction::new(),
        }
    }

    /// Place `texture` at `pos`, sized to its clip.
    pub fn at(texture: Texture<T, O>, pos: Pos) -> Self {
        let rect = Rect::from_parts(pos, texture.clip_size());
        Self::new(texture, rect)
    }

    pub fn empty() -> Self {
        Self::new(Texture::empty(), Rect::default())
    }

    pub fn update(&mut self, mouse: &MouseState) -> InteractionState {
        self.interaction.update(self.rect, mouse)
    }

    /// Draw the texture's clip into the placement rectangle.
    pub fn render<P: Ownership>(&self, target: &Managed<T::Canvas, P>) {
        self.texture.draw(target, self.rect);
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

    /// Resize the placement to the texture's clip size.
    pub fn set_size_to_texture(&mut self) -> &mut Self {
        self.rect.set_size(self.texture.clip_size());
        self
    }

    pub fn set_clip(&mut self, clip: Rect) -> &mut Self {
        self.texture.set_clip(clip);
        self
    }

    pub fn texture(&self) -> &Texture<T, O> {
        &self.texture
    }

    pub fn texture_mut(&mut self) -> &mut Texture<T, O> {
        &mut self.texture
    }

    /// Swap in a new texture, returning the old one.
    pub fn set_texture(&mut self, texture: Texture<T, O>) -> Texture<T, O> {
        std::mem::replace(&mut self.texture, texture)
    }
}

impl<T: TextureResource, O: Ownership> Default for TextureComponent<T, O> {
    fn default() -> Self {
        Self::empty()
    }
}
