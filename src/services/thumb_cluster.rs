//! Thumb cluster normalization.

use std::collections::BTreeMap;

use crate::constants::THUMB_KEY_COUNT;
use crate::models::keyboard::{ThumbCluster, ThumbKey};
use crate::models::template_data::TemplateThumbCluster;

/// Expands sparse slot overrides into exactly [`THUMB_KEY_COUNT`] keys.
///
/// Missing slots become zero-offset, zero-rotation regular keys. Entries for
/// slots past the last one are ignored.
#[must_use]
pub fn normalize_keys(keys: &BTreeMap<usize, ThumbKey>) -> [ThumbKey; THUMB_KEY_COUNT] {
    std::array::from_fn(|slot| keys.get(&slot).cloned().unwrap_or_default())
}

/// Builds the template view of the thumb cluster.
///
/// Cluster-level placement is passed through unchanged.
#[must_use]
pub fn normalize(cluster: &ThumbCluster) -> TemplateThumbCluster {
    TemplateThumbCluster {
        origin_column_index: cluster.origin_column_index,
        offset: cluster.offset,
        rotation: cluster.rotation,
        keys: normalize_keys(&cluster.keys),
    }
}
