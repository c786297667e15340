//! Drawing systems.
//!
//! The frame is drawn in two halves. The windowless half records into the
//! [`Backbuffer`]: [`clear_backbuffer`], then [`draw_tilemap`], then
//! [`draw_sprites`]. [`present_frame`] is the raylib half: it replays the
//! recording into the [`RenderTarget`] inside a texture-mode scope (so the
//! default target is restored on every exit path), stretches the result onto
//! the window and ends the frame, which presents in sync with vertical
//! refresh.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::backbuffer::Backbuffer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::Tilemap;

/// Begin the frame by filling the backbuffer with the configured colour.
pub fn clear_backbuffer(mut backbuffer: ResMut<Backbuffer>, config: Res<GameConfig>) {
    let (r, g, b) = config.clear_color;
    backbuffer.clear(r, g, b);
}

pub fn draw_tilemap(
    mut backbuffer: ResMut<Backbuffer>,
    tilemap: Res<Tilemap>,
    screen: Res<ScreenSize>,
) {
    for blit in tilemap.visible_tiles(screen.w, screen.h) {
        backbuffer.draw_subimage(blit);
    }
}

/// Draw active sprites in ascending [`ZIndex`] order.
pub fn draw_sprites(
    mut backbuffer: ResMut<Backbuffer>,
    query: Query<(&Sprite, &MapPosition, Option<&ZIndex>)>,
) {
    let mut to_draw: Vec<(ZIndex, _)> = query
        .iter()
        .filter_map(|(sprite, pos, z)| {
            sprite
                .blit(pos)
                .map(|blit| (z.copied().unwrap_or_default(), blit))
        })
        .collect();
    to_draw.sort_by_key(|(z, _)| *z);

    for (_, blit) in to_draw {
        backbuffer.draw_subimage(blit);
    }
}

/// Replay the backbuffer into the render target, composite it to the window
/// and present.
pub fn present_frame(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
    textures: Res<TextureStore>,
    backbuffer: Res<Backbuffer>,
) {
    let source = render_target.source_rect();
    let dest = render_target.window_rect();

    // The backbuffer's clear alpha is 0; fill the window with the same
    // colour, opaque, so transparent pixels composite to it.
    let window_fill = backbuffer
        .clear_color()
        .map(|c| Color::new(c.r, c.g, c.b, 255))
        .unwrap_or(Color::BLACK);

    let mut d = rl.begin_drawing(&th);
    {
        let mut target = d.begin_texture_mode(&th, &mut render_target.texture);
        if let Some(color) = backbuffer.clear_color() {
            target.clear_background(color);
        }
        let tint = backbuffer.draw_color();
        for blit in backbuffer.blits() {
            match textures.get(&blit.tex_key) {
                Some(tex) => {
                    target.draw_texture_rec(tex, blit.source_rect(), blit.dest_pos(), tint)
                }
                None => debug!("No texture '{}' for blit", blit.tex_key),
            }
        }
    }

    d.clear_background(window_fill);
    d.draw_texture_pro(
        &render_target.texture,
        source,
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );
}
