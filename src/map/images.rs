//! Detection of sprite images that failed to load.
//!
//! A missing map image or marker icon should not take the viewer down; the
//! sprite stays in place and gets a red outline so the gap is visible.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::theme::MISSING_IMAGE_BORDER;

/// Marker for sprites whose image failed to load
#[derive(Component)]
pub struct MissingImage;

/// Flag sprites whose image load failed
pub fn detect_missing_images(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    query: Query<(Entity, &Sprite), Without<MissingImage>>,
) {
    for (entity, sprite) in query.iter() {
        if let LoadState::Failed(err) = asset_server.load_state(&sprite.image) {
            let path = sprite
                .image
                .path()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "<unnamed>".to_string());
            warn!("Image failed to load: {} ({})", path, err);
            commands.entity(entity).insert(MissingImage);
        }
    }
}

/// Outline sprites with missing images
pub fn draw_missing_image_indicators(
    mut gizmos: Gizmos,
    query: Query<(&Sprite, &GlobalTransform, &ViewVisibility), With<MissingImage>>,
) {
    for (sprite, transform, visibility) in query.iter() {
        if !visibility.get() {
            continue;
        }

        let (scale, _, translation) = transform.to_scale_rotation_translation();
        let size = sprite.custom_size.unwrap_or(Vec2::splat(64.0)) * scale.truncate();

        gizmos.rect_2d(
            Isometry2d::from_translation(translation.truncate()),
            size,
            MISSING_IMAGE_BORDER,
        );
    }
}
