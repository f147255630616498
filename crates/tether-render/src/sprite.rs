use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, Ownership, Shared};

use crate::resource::TextureResource;
use crate::Texture;

/// Frame-stepped animation over clips of one shared sprite sheet.
///
/// Each frame is shown for `updates_per_frame` calls to
/// [`advance`](Self::advance), then the animation moves on and wraps at the
/// end.
#[derive(Debug)]
pub struct SpriteAnimation<T: TextureResource> {
    frames: Vec<Texture<T, Shared>>,
    /// Number of `advance` calls each frame stays visible
    updates_per_frame: u32,
    /// Updates since the first frame
    tick: u32,
}

impl<T: TextureResource> SpriteAnimation<T> {
    /// One frame per clip, all sharing `sheet`.
    pub fn from_clips(
        sheet: &Texture<T, Shared>,
        clips: impl IntoIterator<Item = Rect>,
        updates_per_frame: u32,
    ) -> Self {
        let frames = clips
            .into_iter()
            .map(|clip| sheet.derive(Some(clip)))
            .collect();
        Self {
            frames,
            updates_per_frame: updates_per_frame.max(1),
            tick: 0,
        }
    }

    /// `count` frames of `frame_size` laid out left to right from the sheet's
    /// clip origin.
    pub fn from_strip(
        sheet: &Texture<T, Shared>,
        frame_size: Size,
        count: u32,
        updates_per_frame: u32,
    ) -> Self {
        let origin = sheet.clip_position();
        let clips = (0..count as i32).map(|i| {
            Rect::from_parts(
                Pos::new(origin.x + i * frame_size.width, origin.y),
                frame_size,
            )
        });
        Self::from_clips(sheet, clips, updates_per_frame)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame_index(&self) -> usize {
        (self.tick / self.updates_per_frame) as usize
    }

    pub fn current(&self) -> Option<&Texture<T, Shared>> {
        self.frames.get(self.frame_index())
    }

    pub fn frames(&self) -> &[Texture<T, Shared>] {
        &self.frames
    }

    /// Step one update, wrapping to the first frame after the last.
    pub fn advance(&mut self) {
        self.tick += 1;
        if self.frame_index() >= self.frames.len() {
            self.tick = 0;
        }
    }

    pub fn reset(&mut self) {
        self.tick = 0;
    }

    /// Draw the current frame at `pos`.
    pub fn draw_at<P: Ownership>(&self, target: &Managed<T::Canvas, P>, pos: Pos) {
        if let Some(frame) = self.current() {
            frame.draw_at(target, pos);
        }
    }
}
